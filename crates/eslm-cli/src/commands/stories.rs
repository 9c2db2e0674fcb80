//! Stories command

use crate::error::CliResult;
use crate::output::{badge, print_output, print_structured, OutputFormat};
use eslm_views::StoriesModel;
use serde::Serialize;
use tabled::Tabled;

#[derive(Debug, Serialize, Tabled)]
struct StoryRow {
    #[tabled(rename = "ID")]
    id: &'static str,
    #[tabled(rename = "NAME")]
    name: &'static str,
    #[tabled(rename = "STATUS")]
    status: String,
    #[tabled(rename = "PROGRESS")]
    progress: String,
    #[tabled(rename = "DESCRIPTION")]
    description: &'static str,
}

pub fn execute(format: OutputFormat) -> CliResult<()> {
    let model = StoriesModel::build();
    if print_structured(&model, format)? {
        return Ok(());
    }

    let rows: Vec<StoryRow> = model
        .stories
        .iter()
        .map(|s| StoryRow {
            id: s.id,
            name: s.name,
            status: badge(s.status.label()).to_string(),
            progress: format!("{}%", s.progress),
            description: s.description,
        })
        .collect();
    print_output(rows, format)
}
