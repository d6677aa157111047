//! Statistical summarisation for data columns.
//!
//! Classification happens exactly once per column, on the declared dtype,
//! before any coercion. The numeric path coerces to `Float64` (unparsable
//! entries become missing) and drops missing values to obtain the clean
//! series; the categorical path renders values as strings and drops missing
//! entries. An empty clean series yields `None` rather than an error.

use super::types::{
    CategoricalSummary, FrequencyEntry, GroupNumericSummary, NumericSummary, VariableKind,
};
use anyhow::Result;
use polars::prelude::*;
use std::collections::HashMap;

/// One-off classification on the declared dtype.
pub fn classify_column(col: &Column) -> VariableKind {
    if col.dtype().is_numeric() {
        VariableKind::Numeric
    } else {
        VariableKind::Categorical
    }
}

/// Coerced clean series of a column: every value cast to `f64`, entries that
/// are missing or fail the cast dropped.
fn clean_numeric(col: &Column) -> Result<Series> {
    let coerced = col
        .as_materialized_series()
        .cast(&DataType::Float64)
        .map_err(|e| anyhow::anyhow!(e))?;
    Ok(coerced.drop_nulls())
}

/// Clean coerced values of a column in row order. Used by the plot renderer.
pub fn numeric_values(col: &Column) -> Result<Vec<f64>> {
    let clean = clean_numeric(col)?;
    let ca = clean.f64().map_err(|e| anyhow::anyhow!(e))?;
    Ok(ca.into_iter().flatten().collect())
}

/// Non-missing values of a column rendered as strings, in row order.
pub fn string_values(col: &Column) -> Result<Vec<String>> {
    let series = col.as_materialized_series();
    let series = if series.dtype() == &DataType::String {
        series.clone()
    } else {
        series
            .cast(&DataType::String)
            .map_err(|e| anyhow::anyhow!(e))?
    };
    let ca = series.str().map_err(|e| anyhow::anyhow!(e))?;
    Ok(ca.into_iter().flatten().map(|v| v.to_owned()).collect())
}

fn quantile(ca: &Float64Chunked, q: f64) -> f64 {
    ca.quantile(q, QuantileMethod::Linear)
        .unwrap_or(None)
        .unwrap_or(f64::NAN)
}

/// Full descriptive statistics for a numeric column. Returns `None` when no
/// value survives coercion.
pub fn summarise_numeric(col: &Column) -> Result<Option<NumericSummary>> {
    let clean = clean_numeric(col)?;
    if clean.is_empty() {
        return Ok(None);
    }
    let missing = col.len() - clean.len();
    let ca = clean.f64().map_err(|e| anyhow::anyhow!(e))?;

    // Biased third/fourth standardized moments, the scipy defaults the
    // original report used. Constant or single-value series yield 0.0.
    let skewness = clean
        .skew(true)
        .map_err(|e| anyhow::anyhow!(e))?
        .filter(|v| v.is_finite())
        .unwrap_or(0.0);
    let kurtosis = clean
        .kurtosis(true, true)
        .map_err(|e| anyhow::anyhow!(e))?
        .filter(|v| v.is_finite())
        .unwrap_or(0.0);

    Ok(Some(NumericSummary {
        count: clean.len(),
        missing,
        mean: ca.mean().unwrap_or(f64::NAN),
        std_dev: ca.std(1).unwrap_or(f64::NAN),
        min: ca.min().unwrap_or(f64::NAN),
        q1: quantile(ca, 0.25),
        median: quantile(ca, 0.50),
        q3: quantile(ca, 0.75),
        max: ca.max().unwrap_or(f64::NAN),
        skewness,
        kurtosis,
    }))
}

/// Frequency table over distinct values, descending by count. The sort is
/// stable over first-appearance order, which also fixes the mode tie-break.
pub fn frequency_table(values: &[String]) -> Vec<FrequencyEntry> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();
    for value in values {
        let entry = counts.entry(value.as_str()).or_insert(0);
        if *entry == 0 {
            order.push(value.as_str());
        }
        *entry += 1;
    }

    let total = values.len();
    let mut table: Vec<FrequencyEntry> = order
        .into_iter()
        .map(|value| {
            let count = counts[value];
            FrequencyEntry {
                value: value.to_owned(),
                count,
                percentage: (count as f64 / total as f64) * 100.0,
            }
        })
        .collect();
    table.sort_by(|a, b| b.count.cmp(&a.count));
    table
}

/// Frequency table, mode and counts for a categorical column. Returns `None`
/// when every value is missing.
pub fn summarise_categorical(col: &Column) -> Result<Option<CategoricalSummary>> {
    let values = string_values(col)?;
    if values.is_empty() {
        return Ok(None);
    }
    let missing = col.len() - values.len();
    let table = frequency_table(&values);
    let mode = table
        .first()
        .map(|e| e.value.clone())
        .unwrap_or_default();

    Ok(Some(CategoricalSummary {
        count: values.len(),
        missing,
        unique: table.len(),
        mode,
        table,
    }))
}

/// Distinct non-missing group keys in ascending display order.
pub fn group_keys(df: &DataFrame, group_by: &str) -> Result<Vec<String>> {
    let col = df
        .column(group_by)
        .map_err(|_| anyhow::anyhow!("Column '{group_by}' not found in dataset"))?;
    let mut keys = string_values(col)?;
    keys.sort();
    keys.dedup();
    Ok(keys)
}

/// Rows whose group column renders to `key`. Rows where the group column is
/// missing belong to no group.
fn group_frame(df: &DataFrame, group_by: &str, key: &str) -> Result<DataFrame> {
    let series = df
        .column(group_by)?
        .as_materialized_series()
        .cast(&DataType::String)
        .map_err(|e| anyhow::anyhow!(e))?;
    let mask = series.str().map_err(|e| anyhow::anyhow!(e))?.equal(key);
    Ok(df.filter(&mask)?)
}

/// Per-group reduced statistics for a numeric variable. Groups that are empty
/// after dropping missing values are skipped without comment.
pub fn summarise_numeric_grouped(
    df: &DataFrame,
    var: &str,
    group_by: &str,
) -> Result<Vec<(String, GroupNumericSummary)>> {
    let mut out = Vec::new();
    for key in group_keys(df, group_by)? {
        let sub = group_frame(df, group_by, &key)?;
        let clean = clean_numeric(sub.column(var)?)?;
        if clean.is_empty() {
            continue;
        }
        let ca = clean.f64().map_err(|e| anyhow::anyhow!(e))?;
        out.push((
            key,
            GroupNumericSummary {
                count: clean.len(),
                mean: ca.mean().unwrap_or(f64::NAN),
                std_dev: ca.std(1).unwrap_or(f64::NAN),
                min: ca.min().unwrap_or(f64::NAN),
                median: quantile(ca, 0.50),
                max: ca.max().unwrap_or(f64::NAN),
            },
        ));
    }
    Ok(out)
}

/// Per-group frequency tables for a categorical variable, each using its own
/// group's non-missing count as the percentage denominator.
pub fn summarise_categorical_grouped(
    df: &DataFrame,
    var: &str,
    group_by: &str,
) -> Result<Vec<(String, Vec<FrequencyEntry>)>> {
    let mut out = Vec::new();
    for key in group_keys(df, group_by)? {
        let sub = group_frame(df, group_by, &key)?;
        let values = string_values(sub.column(var)?)?;
        if values.is_empty() {
            continue;
        }
        out.push((key, frequency_table(&values)));
    }
    Ok(out)
}
