//! Turn an assembled [`Grid`] into a document.
//!
//! Every format lays the grid out the same way: a corner header `Hours`,
//! one column per day, one row per period, and each cell listing its
//! entries one per line. Styling is left to whatever opens the file.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};
use crate::grid::{Cell, Grid};

/// Header of the period column.
pub const CORNER_LABEL: &str = "Hours";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Spreadsheet-friendly comma-separated values.
    #[default]
    Csv,
    Json,
    Markdown,
    Text,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 4] = [
        OutputFormat::Csv,
        OutputFormat::Json,
        OutputFormat::Markdown,
        OutputFormat::Text,
    ];

    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "md",
            OutputFormat::Text => "txt",
        }
    }

    pub fn renderer(&self) -> Box<dyn Renderer> {
        match self {
            OutputFormat::Csv => Box::new(CsvRenderer),
            OutputFormat::Json => Box::new(JsonRenderer),
            OutputFormat::Markdown => Box::new(MarkdownRenderer),
            OutputFormat::Text => Box::new(TextRenderer),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Csv => f.write_str("csv"),
            OutputFormat::Json => f.write_str("json"),
            OutputFormat::Markdown => f.write_str("markdown"),
            OutputFormat::Text => f.write_str("text"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ScheduleError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "text" | "txt" => Ok(OutputFormat::Text),
            other => Err(ScheduleError::Config(format!(
                "unknown output format '{}' (expected csv, json, markdown or text)",
                other
            ))),
        }
    }
}

/// A document backend for assembled grids.
pub trait Renderer {
    fn format(&self) -> OutputFormat;

    fn render(&self, grid: &Grid) -> Result<String>;
}

/// Quoted CSV; multi-entry cells keep their embedded newlines.
pub struct CsvRenderer;

impl Renderer for CsvRenderer {
    fn format(&self) -> OutputFormat {
        OutputFormat::Csv
    }

    fn render(&self, grid: &Grid) -> Result<String> {
        let mut writer = csv::WriterBuilder::new().from_writer(Vec::new());

        let mut header = vec![CORNER_LABEL.to_string()];
        header.extend(grid.days().iter().cloned());
        writer.write_record(&header).map_err(csv_error)?;

        for (label, row) in grid.time_slots().iter().zip(grid.rows()) {
            let mut record = vec![label.clone()];
            record.extend(row.iter().map(Cell::text));
            writer.write_record(&record).map_err(csv_error)?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| ScheduleError::Render(e.to_string()))?;
        String::from_utf8(bytes).map_err(|e| ScheduleError::Render(e.to_string()))
    }
}

fn csv_error(err: csv::Error) -> ScheduleError {
    ScheduleError::Render(err.to_string())
}

/// Pretty-printed JSON carrying the grid and a generation timestamp.
pub struct JsonRenderer;

#[derive(Serialize)]
struct JsonDocument<'a> {
    generated_at: DateTime<Utc>,
    #[serde(flatten)]
    grid: &'a Grid,
}

impl Renderer for JsonRenderer {
    fn format(&self) -> OutputFormat {
        OutputFormat::Json
    }

    fn render(&self, grid: &Grid) -> Result<String> {
        let document = JsonDocument {
            generated_at: Utc::now(),
            grid,
        };
        serde_json::to_string_pretty(&document).map_err(|e| ScheduleError::Render(e.to_string()))
    }
}

/// A pipe table; entries within a cell are separated by `<br>`.
pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }

    fn render(&self, grid: &Grid) -> Result<String> {
        let mut out = String::new();

        let mut header = vec![CORNER_LABEL.to_string()];
        header.extend(grid.days().iter().map(|day| escape_markdown(day)));
        out.push_str(&markdown_row(&header));
        out.push_str(&markdown_row(&vec!["---".to_string(); header.len()]));

        for (label, row) in grid.time_slots().iter().zip(grid.rows()) {
            let mut cells = vec![label.clone()];
            cells.extend(row.iter().map(|cell| {
                cell.lines()
                    .iter()
                    .map(|line| escape_markdown(line))
                    .collect::<Vec<_>>()
                    .join("<br>")
            }));
            out.push_str(&markdown_row(&cells));
        }
        Ok(out)
    }
}

fn markdown_row(cells: &[String]) -> String {
    format!("| {} |\n", cells.join(" | "))
}

fn escape_markdown(text: &str) -> String {
    text.replace('|', "\\|")
}

/// A boxed fixed-width table for terminals and plain-text files.
pub struct TextRenderer;

impl Renderer for TextRenderer {
    fn format(&self) -> OutputFormat {
        OutputFormat::Text
    }

    fn render(&self, grid: &Grid) -> Result<String> {
        // Each table row is a list of columns, each column a list of lines.
        let mut table: Vec<Vec<Vec<String>>> = Vec::with_capacity(grid.rows().len() + 1);

        let mut header = vec![vec![CORNER_LABEL.to_string()]];
        header.extend(grid.days().iter().map(|day| vec![day.clone()]));
        table.push(header);

        for (label, row) in grid.time_slots().iter().zip(grid.rows()) {
            let mut columns = vec![vec![label.clone()]];
            columns.extend(row.iter().map(Cell::lines));
            table.push(columns);
        }

        let column_count = grid.days().len() + 1;
        let widths: Vec<usize> = (0..column_count)
            .map(|col| {
                table
                    .iter()
                    .flat_map(|row| row[col].iter())
                    .map(|line| line.chars().count())
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let separator = format!(
            "+{}+\n",
            widths
                .iter()
                .map(|w| "-".repeat(w + 2))
                .collect::<Vec<_>>()
                .join("+")
        );

        let mut out = separator.clone();
        for row in &table {
            let height = row.iter().map(Vec::len).max().unwrap_or(0).max(1);
            for line_no in 0..height {
                out.push('|');
                for (col, lines) in row.iter().enumerate() {
                    let text = lines.get(line_no).map(String::as_str).unwrap_or("");
                    let pad = widths[col] - text.chars().count();
                    out.push(' ');
                    out.push_str(text);
                    out.push_str(&" ".repeat(pad + 1));
                    out.push('|');
                }
                out.push('\n');
            }
            out.push_str(&separator);
        }
        Ok(out)
    }
}
