//! Console and JSON rendering of analysis results.

use crate::data::Dataset;
use crate::stats::{AnalysisError, IndustryAverages, Shape, Summary, WealthAnalyzer};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;
use std::io::{self, Write};

/// Everything the JSON output carries, computed up front.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub source: Option<String>,
    pub rows: usize,
    pub columns: Vec<String>,
    pub sample: Vec<Vec<String>>,
    pub describe: Vec<Summary>,
    pub industry_average: IndustryAverages,
    pub net_worth_shape: Shape,
}

impl Report {
    /// Run every aggregate; the first failure aborts the report.
    pub fn build(
        dataset: &Dataset,
        analyzer: &WealthAnalyzer,
        head: usize,
    ) -> Result<Self, AnalysisError> {
        Ok(Self {
            source: dataset.source().map(|p| p.display().to_string()),
            rows: dataset.height(),
            columns: dataset.column_names(),
            sample: dataset.head_rows(head),
            describe: analyzer.describe(dataset)?,
            industry_average: analyzer.industry_average(dataset)?,
            net_worth_shape: analyzer.skewness_kurtosis(dataset)?,
        })
    }

    pub fn write_json(&self, out: &mut dyn Write) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *out, self)?;
        writeln!(out)
    }
}

/// Section writers for the table output, in print order.
pub fn write_sample(
    out: &mut dyn Write,
    columns: &[String],
    rows: &[Vec<String>],
) -> io::Result<()> {
    writeln!(out, "Sample Data:")?;
    writeln!(out, "{}", sample_table(columns, rows))
}

pub fn write_describe(out: &mut dyn Write, summaries: &[Summary]) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Descriptive statistics:")?;
    writeln!(out, "{}", describe_table(summaries))
}

pub fn write_industry_average(
    out: &mut dyn Write,
    averages: &IndustryAverages,
    net_worth_column: &str,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Average Net Worth by Industry:")?;
    writeln!(out, "{}", industry_table(averages, net_worth_column))
}

pub fn write_shape(out: &mut dyn Write, shape: &Shape) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "Skewness: {}  Kurtosis: {}",
        format_value(shape.skewness),
        format_value(shape.kurtosis)
    )
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn align_numeric_columns(table: &mut Table, from: usize) {
    for index in from..table.column_count() {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }
}

/// Six decimals like a dataframe describe; NaN shown as `NaN`.
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else {
        format!("{value:.6}")
    }
}

pub fn sample_table(columns: &[String], rows: &[Vec<String>]) -> Table {
    let mut table = Table::new();
    let mut header = vec![header_cell("")];
    header.extend(columns.iter().map(|c| header_cell(c)));
    table.set_header(header);
    apply_table_style(&mut table);
    for (i, row) in rows.iter().enumerate() {
        let mut cells = vec![Cell::new(i).fg(Color::DarkGrey)];
        cells.extend(row.iter().map(Cell::new));
        table.add_row(cells);
    }
    table
}

/// Statistic names down the side, one column per numeric column.
pub fn describe_table(summaries: &[Summary]) -> Table {
    let mut table = Table::new();
    let mut header = vec![header_cell("")];
    header.extend(summaries.iter().map(|s| header_cell(&s.column)));
    table.set_header(header);
    apply_table_style(&mut table);

    let rows: Vec<_> = summaries.iter().map(Summary::rows).collect();
    for stat in 0..8 {
        let label = rows.first().map(|r| r[stat].0).unwrap_or_default();
        let mut cells = vec![Cell::new(label).add_attribute(Attribute::Bold)];
        cells.extend(rows.iter().map(|r| Cell::new(format_value(r[stat].1))));
        table.add_row(cells);
    }
    align_numeric_columns(&mut table, 1);
    table
}

pub fn industry_table(averages: &IndustryAverages, net_worth_column: &str) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Industry"), header_cell(net_worth_column)]);
    apply_table_style(&mut table);
    for avg in averages.iter() {
        table.add_row(vec![Cell::new(&avg.industry), Cell::new(format_value(avg.mean))]);
    }
    align_numeric_columns(&mut table, 1);
    table
}
