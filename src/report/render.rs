//! Output renderers
//!
//! Turns report rows into one of the supported output formats. Tables follow
//! kubectl's layout: no borders, left aligned, three spaces between columns.

use super::projector::{ReportRow, format_timestamp};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use std::str::FromStr;
use tabled::builder::Builder;
use tabled::settings::{Alignment, Padding, Style};

/// Placeholder for empty cells in wide output
const NONE_MARKER: &str = "-";

const TABLE_HEADERS: [&str; 5] = ["NAME", "NAMESPACE", "STATUS", "SCHEDULE", "AGE"];
const WIDE_HEADERS: [&str; 8] = [
    "NAME",
    "NAMESPACE",
    "PIPELINE",
    "STATUS",
    "SCHEDULE",
    "START TIME",
    "COMPLETION TIME",
    "AGE",
];

/// Errors produced while rendering a report
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to marshal to YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Supported output formats
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Wide,
    Json,
    Yaml,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Table => "table",
            OutputFormat::Wide => "wide",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "table" => Ok(OutputFormat::Table),
            "wide" => Ok(OutputFormat::Wide),
            "json" => Ok(OutputFormat::Json),
            "yaml" => Ok(OutputFormat::Yaml),
            other => Err(format!(
                "unknown output format '{}' (expected table, wide, json or yaml)",
                other
            )),
        }
    }
}

/// Render `rows` in `format` to `out`
///
/// `no_headers` only applies to the table formats.
pub fn render<W: Write>(
    rows: &[ReportRow],
    format: OutputFormat,
    no_headers: bool,
    out: &mut W,
) -> Result<(), RenderError> {
    match format {
        OutputFormat::Table => render_table(rows, no_headers, out),
        OutputFormat::Wide => render_wide(rows, no_headers, out),
        OutputFormat::Json => render_json(rows, out),
        OutputFormat::Yaml => render_yaml(rows, out),
    }
}

pub fn render_table<W: Write>(
    rows: &[ReportRow],
    no_headers: bool,
    out: &mut W,
) -> Result<(), RenderError> {
    let records = rows.iter().map(|row| {
        vec![
            row.name.clone(),
            row.namespace.clone(),
            row.status.to_string(),
            row.schedule_value.clone(),
            row.age.clone(),
        ]
    });
    write_table(&TABLE_HEADERS, records, no_headers, out)
}

pub fn render_wide<W: Write>(
    rows: &[ReportRow],
    no_headers: bool,
    out: &mut W,
) -> Result<(), RenderError> {
    let records = rows.iter().map(|row| {
        vec![
            row.name.clone(),
            row.namespace.clone(),
            row.pipeline
                .clone()
                .filter(|p| !p.is_empty())
                .unwrap_or_else(|| NONE_MARKER.to_string()),
            row.status.to_string(),
            row.schedule_value.clone(),
            row.start_time
                .as_ref()
                .map(format_timestamp)
                .unwrap_or_else(|| NONE_MARKER.to_string()),
            row.completion_time
                .as_ref()
                .map(format_timestamp)
                .unwrap_or_else(|| NONE_MARKER.to_string()),
            row.age.clone(),
        ]
    });
    write_table(&WIDE_HEADERS, records, no_headers, out)
}

pub fn render_json<W: Write>(rows: &[ReportRow], out: &mut W) -> Result<(), RenderError> {
    serde_json::to_writer_pretty(&mut *out, rows)?;
    writeln!(out)?;
    Ok(())
}

pub fn render_yaml<W: Write>(rows: &[ReportRow], out: &mut W) -> Result<(), RenderError> {
    let yaml = serde_yaml::to_string(rows)?;
    out.write_all(yaml.as_bytes())?;
    Ok(())
}

fn write_table<W, I>(
    headers: &[&str],
    records: I,
    no_headers: bool,
    out: &mut W,
) -> Result<(), RenderError>
where
    W: Write,
    I: Iterator<Item = Vec<String>>,
{
    let mut builder = Builder::default();
    let mut count = 0usize;
    if !no_headers {
        builder.push_record(headers.iter().map(|h| h.to_string()));
        count += 1;
    }
    for record in records {
        builder.push_record(record);
        count += 1;
    }
    if count == 0 {
        return Ok(());
    }

    let mut table = builder.build();
    table
        .with(Style::empty())
        .with(Padding::new(0, 3, 0, 0))
        .with(Alignment::left());

    // Padding leaves trailing spaces after the last column
    for line in table.to_string().lines() {
        writeln!(out, "{}", line.trim_end())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::RunStatus;

    fn row(name: &str) -> ReportRow {
        ReportRow {
            name: name.to_string(),
            namespace: "default".to_string(),
            status: RunStatus::Pending,
            schedule_value: "daily".to_string(),
            age: "5m".to_string(),
            start_time: None,
            completion_time: None,
            labels: Default::default(),
            pipeline: None,
        }
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("wide".parse::<OutputFormat>(), Ok(OutputFormat::Wide));
        assert_eq!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert!("csv".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::default(), OutputFormat::Table);
    }

    #[test]
    fn test_no_headers_and_no_rows_prints_nothing() {
        let mut out = Vec::new();
        render_table(&[], true, &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_headers_only_when_empty() {
        let mut out = Vec::new();
        render_table(&[], false, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert_eq!(
            text.split_whitespace().collect::<Vec<_>>(),
            vec!["NAME", "NAMESPACE", "STATUS", "SCHEDULE", "AGE"]
        );
    }

    #[test]
    fn test_no_trailing_whitespace() {
        let mut out = Vec::new();
        render_table(&[row("a"), row("much-longer-name")], false, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        for line in text.lines() {
            assert_eq!(line, line.trim_end());
        }
    }

    #[test]
    fn test_json_empty_array() {
        let mut out = Vec::new();
        render_json(&[], &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "[]\n");
    }

    #[test]
    fn test_yaml_empty_sequence() {
        let mut out = Vec::new();
        render_yaml(&[], &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "[]\n");
    }
}
