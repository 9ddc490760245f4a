//! Rendering search results for people and scripts.

use comfy_table::{presets::UTF8_FULL, Attribute, Cell, ContentArrangement, Table as TextTable};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::models::SearchResult;
use crate::utils::{terminal_width, truncate_with_ellipsis};

const RULE_WIDTH: usize = 70;
const TITLE_WIDTH: usize = 60;
const AUTHOR_WIDTH: usize = 30;

/// How results are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One labelled block per record
    #[default]
    Plain,
    /// Box-drawn table (human-readable)
    Table,
    /// JSON array (machine-readable)
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "plain" => Ok(OutputFormat::Plain),
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}

/// Message shown when nothing matched
pub fn no_results_message(keyword: &str) -> String {
    format!("No results found for '{}'", keyword)
}

/// Render `result` for `keyword` in the requested format.
///
/// Plain and table output report an empty result as a "no results" line.
/// JSON always renders an array so scripts can rely on its shape.
pub fn render(result: &SearchResult, keyword: &str, format: OutputFormat) -> String {
    if result.is_empty() && format != OutputFormat::Json {
        return format!("{}\n", no_results_message(keyword));
    }

    match format {
        OutputFormat::Plain => render_plain(result, keyword),
        OutputFormat::Table => render_table(result, keyword),
        OutputFormat::Json => render_json(result),
    }
}

fn render_plain(result: &SearchResult, keyword: &str) -> String {
    let mut out = format!("Found {} results for '{}':\n", result.len(), keyword);
    out.push_str(&"=".repeat(RULE_WIDTH));
    out.push('\n');

    for record in result {
        out.push_str(&format!("Title   : {}\n", record.title));
        out.push_str(&format!("Author  : {}\n", record.author));
        out.push_str(&format!("Year    : {}\n", record.year));
        out.push_str(&"-".repeat(RULE_WIDTH));
        out.push('\n');
    }

    out
}

fn render_table(result: &SearchResult, keyword: &str) -> String {
    let mut table = TextTable::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(terminal_width().min(u16::MAX as usize) as u16)
        .set_header(vec!["#", "Title", "Author", "Year"]);

    for (i, record) in result.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(truncate_with_ellipsis(&record.title, TITLE_WIDTH)).add_attribute(Attribute::Bold),
            Cell::new(truncate_with_ellipsis(&record.author, AUTHOR_WIDTH)),
            Cell::new(record.year),
        ]);
    }

    format!("Found {} results for '{}':\n{}\n", result.len(), keyword, table)
}

fn render_json(result: &SearchResult) -> String {
    let mut out = serde_json::to_string_pretty(result).unwrap_or_else(|_| "[]".to_string());
    out.push('\n');
    out
}
