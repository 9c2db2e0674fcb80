//! Dependency flow graph

use crate::status::Status;
use crate::tracking::Capability;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowNodeKind {
    Capability,
    Enabler,
    Service,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowNode {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: FlowNodeKind,
    pub name: String,
    pub status: Status,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    Dependency,
    Impact,
}

/// Directed edge between two node ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowEdge {
    pub source: String,
    pub target: String,
    #[serde(rename = "type")]
    pub kind: EdgeKind,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlowVisualization {
    pub nodes: Vec<FlowNode>,
    pub edges: Vec<FlowEdge>,
}

impl FlowVisualization {
    /// Build a capability-level graph.
    ///
    /// Upstream dependencies become `dependency` edges into the capability and
    /// downstream impacts become `impact` edges out of it. Names are matched
    /// against capability names; names with no matching capability produce no
    /// edge.
    pub fn from_capabilities(capabilities: &[Capability]) -> Self {
        let id_for = |name: &str| {
            capabilities
                .iter()
                .find(|c| c.name == name)
                .map(|c| c.id.clone())
        };

        let nodes = capabilities
            .iter()
            .map(|c| FlowNode {
                id: c.id.clone(),
                kind: FlowNodeKind::Capability,
                name: c.name.clone(),
                status: c.status(),
            })
            .collect();

        let mut edges = Vec::new();
        for cap in capabilities {
            for upstream in &cap.upstream_dependencies {
                if let Some(source) = id_for(upstream) {
                    edges.push(FlowEdge {
                        source,
                        target: cap.id.clone(),
                        kind: EdgeKind::Dependency,
                    });
                }
            }
            for downstream in &cap.downstream_impacts {
                if let Some(target) = id_for(downstream) {
                    edges.push(FlowEdge {
                        source: cap.id.clone(),
                        target,
                        kind: EdgeKind::Impact,
                    });
                }
            }
        }

        Self { nodes, edges }
    }
}
