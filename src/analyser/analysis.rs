use super::insight;
use super::profiling;
use super::types::{VariableKind, VariableReport, VariableStats};
use crate::config::ReportConfig;
use anyhow::{Context as _, Result};
use polars::prelude::*;

/// Run the classification-summarisation-insight pass over every configured
/// variable, in order. A variable with no valid data produces a report with
/// `stats: None`; an unknown variable name is fatal.
pub fn analyse_variables(df: &DataFrame, config: &ReportConfig) -> Result<Vec<VariableReport>> {
    let mut reports = Vec::new();

    for name in &config.variables {
        let col = df
            .column(name)
            .with_context(|| format!("Variable '{name}' not found in dataset"))?;
        let kind = profiling::classify_column(col);

        let report = match kind {
            VariableKind::Numeric => match profiling::summarise_numeric(col)
                .with_context(|| format!("Analysis failed for numeric variable '{name}'"))?
            {
                Some(summary) => {
                    let insights = insight::numeric_insights(&summary);
                    let groups = match &config.group_by {
                        Some(group_by) => {
                            profiling::summarise_numeric_grouped(df, name, group_by)?
                        }
                        None => Vec::new(),
                    };
                    VariableReport {
                        name: name.clone(),
                        kind,
                        stats: Some(VariableStats::Numeric { summary, groups }),
                        insights,
                    }
                }
                None => empty_report(name, kind),
            },
            VariableKind::Categorical => match profiling::summarise_categorical(col)
                .with_context(|| format!("Analysis failed for categorical variable '{name}'"))?
            {
                Some(summary) => {
                    let insights = insight::categorical_insights(&summary);
                    let groups = match &config.group_by {
                        Some(group_by) => {
                            profiling::summarise_categorical_grouped(df, name, group_by)?
                        }
                        None => Vec::new(),
                    };
                    VariableReport {
                        name: name.clone(),
                        kind,
                        stats: Some(VariableStats::Categorical { summary, groups }),
                        insights,
                    }
                }
                None => empty_report(name, kind),
            },
        };

        tracing::debug!("Analysed variable '{}' as {}", name, kind);
        reports.push(report);
    }

    Ok(reports)
}

fn empty_report(name: &str, kind: VariableKind) -> VariableReport {
    tracing::warn!("Variable '{}' has no valid data", name);
    VariableReport {
        name: name.to_owned(),
        kind,
        stats: None,
        insights: Vec::new(),
    }
}
