//! Output formatting utilities

use crate::error::CliResult;
use colored::*;
use eslm_types::BadgeTone;
use serde::Serialize;
use tabled::{Table, Tabled};

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

/// Print a list of rows in the specified format
pub fn print_output<T: Serialize + Tabled>(data: Vec<T>, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Table => {
            if data.is_empty() {
                println!("{}", "No results".dimmed());
            } else {
                println!("{}", Table::new(data));
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&data)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&data)?),
    }
    Ok(())
}

/// Print a single item as JSON or YAML.
///
/// Returns false for table output so the caller can render its own layout.
pub fn print_structured<T: Serialize>(data: &T, format: OutputFormat) -> CliResult<bool> {
    match format {
        OutputFormat::Table => Ok(false),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(data)?);
            Ok(true)
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yaml::to_string(data)?);
            Ok(true)
        }
    }
}

/// Colour a status label the way the badge tone would render it
pub fn badge(label: &str) -> ColoredString {
    match BadgeTone::for_label(label) {
        BadgeTone::Planned => label.yellow(),
        BadgeTone::InProgress => label.blue(),
        BadgeTone::Implemented => label.green(),
        BadgeTone::Pending => label.dimmed(),
        BadgeTone::Danger => label.red(),
    }
}

/// Print a section heading
pub fn print_heading(title: &str) {
    println!("{}", title.bold());
    println!("{}", "-".repeat(title.chars().count()));
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("{} {}", "⚠".yellow(), message);
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue(), message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Table);
    }

    #[test]
    fn table_format_defers_single_items() {
        assert!(!print_structured(&"x", OutputFormat::Table).unwrap());
    }
}
