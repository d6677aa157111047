//! Console report assembly.
//!
//! Sections are rendered in a fixed order: header banner, data overview,
//! one section per variable, plot-generation notice, numeric summary table,
//! completion banner. All statistics print at 4 decimals, percentages at 1.

use crate::analyser::types::{
    FrequencyEntry, GroupNumericSummary, NumericSummary, VariableKind, VariableReport,
    VariableStats,
};
use crate::analyser::{self, profiling};
use crate::config::ReportConfig;
use crate::plot;
use anyhow::Result;
use polars::prelude::*;
use std::fmt::Write as _;

const BANNER_WIDTH: usize = 60;

/// Run the full analysis and return the report text. Rendering the plot image
/// is the one side effect; everything else is pure string assembly.
pub fn run_report(config: &ReportConfig) -> Result<String> {
    let df = analyser::io::load_df(&config.data_path)?;
    analyser::io::ensure_columns(&df, config)?;

    let reports = analyser::analyse_variables(&df, config)?;

    let mut out = String::new();
    render_banner(&mut out, "DESCRIPTIVE STATISTICS ANALYSIS");
    render_overview(&mut out, &df, config);

    for report in &reports {
        render_variable(&mut out, report, config.group_by.as_deref());
    }

    out.push('\n');
    render_banner(&mut out, "GENERATING PLOTS...");
    plot::render_plots(&df, &config.variables, &config.plot_path)?;
    let _ = writeln!(out, "Plot image saved to {}", config.plot_path.display());

    out.push('\n');
    render_banner(&mut out, "SUMMARY TABLE (NUMERIC VARIABLES)");
    render_summary_table(&mut out, &df, &config.variables)?;

    out.push('\n');
    render_banner(&mut out, "Analysis completed.");
    Ok(out)
}

fn render_banner(out: &mut String, title: &str) {
    let line = "=".repeat(BANNER_WIDTH);
    let _ = writeln!(out, "{line}");
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "{line}");
}

fn render_overview(out: &mut String, df: &DataFrame, config: &ReportConfig) {
    let _ = writeln!(out, "\n[Data Information]");
    let _ = writeln!(out, "Total rows: {}", df.height());
    let _ = writeln!(out, "Total columns: {}", df.width());
    let _ = writeln!(out, "Variables to analyze: {:?}", config.variables);
    if let Some(group_by) = &config.group_by {
        let _ = writeln!(out, "Group by: {group_by}");
    }
}

fn render_variable(out: &mut String, report: &VariableReport, group_by: Option<&str>) {
    out.push('\n');
    render_banner(out, &format!("VARIABLE: {}", report.name));

    let Some(stats) = &report.stats else {
        let what = match report.kind {
            VariableKind::Numeric => "numeric",
            VariableKind::Categorical => "categorical",
        };
        let _ = writeln!(out, "No valid {what} data to analyze.");
        return;
    };

    let _ = writeln!(out, "\n[Type: {}]", report.kind);
    match stats {
        VariableStats::Numeric { summary, groups } => {
            render_numeric_summary(out, summary);
            render_insights(out, &report.insights);
            if let Some(group_by) = group_by {
                render_numeric_groups(out, group_by, groups);
            }
        }
        VariableStats::Categorical { summary, groups } => {
            render_categorical_summary(out, summary);
            render_insights(out, &report.insights);
            if let Some(group_by) = group_by {
                render_categorical_groups(out, group_by, groups);
            }
        }
    }
}

fn render_numeric_summary(out: &mut String, s: &NumericSummary) {
    let _ = writeln!(out, "\n[Descriptive Statistics]");
    let _ = writeln!(out, "  Count: {}", s.count);
    let _ = writeln!(out, "  Missing: {}", s.missing);
    let _ = writeln!(out, "  Mean: {:.4}", s.mean);
    let _ = writeln!(out, "  Std Dev: {:.4}", s.std_dev);
    let _ = writeln!(out, "  Min: {:.4}", s.min);
    let _ = writeln!(out, "  Q1 (25%): {:.4}", s.q1);
    let _ = writeln!(out, "  Median: {:.4}", s.median);
    let _ = writeln!(out, "  Q3 (75%): {:.4}", s.q3);
    let _ = writeln!(out, "  Max: {:.4}", s.max);
    let _ = writeln!(out, "  Skewness: {:.4}", s.skewness);
    let _ = writeln!(out, "  Kurtosis: {:.4}", s.kurtosis);
}

fn render_categorical_summary(out: &mut String, s: &crate::analyser::CategoricalSummary) {
    let _ = writeln!(out, "\n[Summary]");
    let _ = writeln!(out, "  Count: {}", s.count);
    let _ = writeln!(out, "  Missing: {}", s.missing);
    let _ = writeln!(out, "  Unique values: {}", s.unique);
    let _ = writeln!(out, "  Mode: {}", s.mode);

    let _ = writeln!(out, "\n[Frequency Table]");
    for entry in &s.table {
        let _ = writeln!(
            out,
            "  {}: {} ({:.1}%)",
            entry.value, entry.count, entry.percentage
        );
    }
}

fn render_insights(out: &mut String, insights: &[String]) {
    let _ = writeln!(out, "\n[Insights]");
    for insight in insights {
        let _ = writeln!(out, "  - {insight}");
    }
}

fn render_numeric_groups(
    out: &mut String,
    group_by: &str,
    groups: &[(String, GroupNumericSummary)],
) {
    let _ = writeln!(out, "\n[Grouped by {group_by}]");
    for (key, g) in groups {
        let _ = writeln!(out, "\n  {group_by} = {key}:");
        let _ = writeln!(out, "    Count: {}", g.count);
        let _ = writeln!(out, "    Mean: {:.4}", g.mean);
        let _ = writeln!(out, "    Std Dev: {:.4}", g.std_dev);
        let _ = writeln!(out, "    Min: {:.4}", g.min);
        let _ = writeln!(out, "    Median: {:.4}", g.median);
        let _ = writeln!(out, "    Max: {:.4}", g.max);
    }
}

fn render_categorical_groups(
    out: &mut String,
    group_by: &str,
    groups: &[(String, Vec<FrequencyEntry>)],
) {
    let _ = writeln!(out, "\n[Grouped by {group_by}]");
    for (key, table) in groups {
        let _ = writeln!(out, "\n  {group_by} = {key}:");
        for entry in table {
            let _ = writeln!(
                out,
                "    {}: {} ({:.1}%)",
                entry.value, entry.count, entry.percentage
            );
        }
    }
}

/// Recompute the core statistics for every numeric variable and render them
/// as one aligned table. An all-categorical selection is a normal terminating
/// state, reported with an explicit notice.
pub fn render_summary_table(out: &mut String, df: &DataFrame, variables: &[String]) -> Result<()> {
    let mut rows: Vec<(String, NumericSummary)> = Vec::new();
    for name in variables {
        let col = df.column(name)?;
        if profiling::classify_column(col) != VariableKind::Numeric {
            continue;
        }
        if let Some(summary) = profiling::summarise_numeric(col)? {
            rows.push((name.clone(), summary));
        }
    }

    if rows.is_empty() {
        let _ = writeln!(out, "\nNo numeric variables to summarize.");
        return Ok(());
    }

    let headers = ["Variable", "N", "Mean", "Std", "Min", "Median", "Max"];
    let cells: Vec<[String; 7]> = rows
        .iter()
        .map(|(name, s)| {
            [
                name.clone(),
                s.count.to_string(),
                format!("{:.4}", s.mean),
                format!("{:.4}", s.std_dev),
                format!("{:.4}", s.min),
                format!("{:.4}", s.median),
                format!("{:.4}", s.max),
            ]
        })
        .collect();

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            cells
                .iter()
                .map(|row| row[i].len())
                .chain(std::iter::once(h.len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    out.push('\n');
    let header_line: Vec<String> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| format!("{h:>width$}", width = widths[i]))
        .collect();
    let _ = writeln!(out, "{}", header_line.join("  "));

    for row in &cells {
        let line: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(i, cell)| format!("{cell:>width$}", width = widths[i]))
            .collect();
        let _ = writeln!(out, "{}", line.join("  "));
    }

    Ok(())
}
