//! Qualitative insight strings derived from the summaries.

use super::types::{CategoricalSummary, NumericSummary};

pub const SKEW_MODERATE: f64 = 0.5;
pub const SKEW_HIGH: f64 = 1.0;
pub const CV_LOW: f64 = 15.0;
pub const CV_HIGH: f64 = 30.0;
pub const DOMINANT_PCT: f64 = 50.0;

/// Symmetry label for a skewness value. The bands are exhaustive and
/// non-overlapping over the reals.
pub fn skewness_label(skewness: f64) -> &'static str {
    if skewness.abs() < SKEW_MODERATE {
        "Roughly symmetrical"
    } else if skewness.abs() < SKEW_HIGH {
        "Moderately skewed"
    } else {
        "Highly skewed"
    }
}

fn variability_label(cv: f64) -> &'static str {
    if cv < CV_LOW {
        "Low variability"
    } else if cv < CV_HIGH {
        "Moderate variability"
    } else {
        "High variability"
    }
}

/// Insights for a numeric variable, derived from the ungrouped summary only.
/// The variability insight is omitted exactly when the mean is zero.
pub fn numeric_insights(summary: &NumericSummary) -> Vec<String> {
    let mut insights = Vec::new();

    insights.push(format!(
        "{} (skewness = {:.4})",
        skewness_label(summary.skewness),
        summary.skewness
    ));

    if let Some(cv) = summary.coefficient_of_variation() {
        insights.push(format!("{} (CV = {:.1}%)", variability_label(cv), cv));
    }

    insights
}

/// Insight for a categorical variable, derived from the top frequency entry.
pub fn categorical_insights(summary: &CategoricalSummary) -> Vec<String> {
    let Some(top) = summary.table.first() else {
        return Vec::new();
    };
    if top.percentage > DOMINANT_PCT {
        vec![format!(
            "'{}' is dominant ({:.1}%)",
            top.value, top.percentage
        )]
    } else {
        vec![format!(
            "Most frequent: '{}' ({:.1}%)",
            top.value, top.percentage
        )]
    }
}
