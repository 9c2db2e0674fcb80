//! Prompt history command

use crate::error::CliResult;
use crate::output::{badge, print_output, print_structured, OutputFormat};
use crate::session::Session;
use chrono::Utc;
use eslm_types::UserPrompt;
use eslm_views::{PromptStats, PromptsModel};
use serde::Serialize;
use tabled::Tabled;

#[derive(Debug, Serialize, Tabled)]
struct PromptRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "PROMPT")]
    prompt: String,
    #[tabled(rename = "STATUS")]
    status: String,
    #[tabled(rename = "SUBMITTED")]
    timestamp: String,
    #[tabled(rename = "RESPONSE")]
    response: String,
}

impl From<&UserPrompt> for PromptRow {
    fn from(p: &UserPrompt) -> Self {
        let response = match (&p.response, p.status) {
            (Some(text), _) => text.clone(),
            (None, eslm_types::PromptStatus::Processing) => "Generating UI component...".into(),
            (None, _) => String::new(),
        };
        Self {
            id: p.id.clone(),
            prompt: p.prompt.clone(),
            status: badge(p.status.label()).to_string(),
            timestamp: p.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
            response,
        }
    }
}

/// Sample history by default; the backend's history with `--remote`.
pub async fn execute(session: &Session, format: OutputFormat) -> CliResult<()> {
    let model = if session.is_remote() {
        let history = session.client().prompt_history().await?;
        PromptsModel {
            stats: PromptStats::count(&history),
            history,
        }
    } else {
        PromptsModel::build(Utc::now())
    };

    if print_structured(&model, format)? {
        return Ok(());
    }

    let stats = model.stats;
    println!(
        "Total: {}  Completed: {}  Processing: {}  Pending: {}",
        stats.total, stats.completed, stats.processing, stats.pending
    );
    println!();
    print_output(model.history.iter().map(PromptRow::from).collect(), format)
}
