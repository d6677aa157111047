use crate::config::ReportConfig;
use anyhow::{Context as _, Result};
use polars::prelude::*;

/// Load a data file into memory. The returned frame is read-only for the rest
/// of the run; every component takes it by reference.
pub fn load_df(path: &std::path::Path) -> Result<DataFrame> {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();

    let df = match ext.as_str() {
        "csv" => LazyCsvReader::new(path)
            .with_infer_schema_length(Some(10000))
            .with_has_header(true)
            .finish()?
            .collect()
            .with_context(|| format!("Failed to read CSV: {}", path.display()))?,
        "parquet" => ParquetReader::new(std::fs::File::open(path)?)
            .finish()
            .with_context(|| format!("Failed to read Parquet: {}", path.display()))?,
        "json" => JsonReader::new(std::fs::File::open(path)?)
            .finish()
            .with_context(|| format!("Failed to read JSON: {}", path.display()))?,
        _ => return Err(anyhow::anyhow!("Unsupported file extension: {ext}")),
    };

    tracing::info!(
        "Loaded {} ({} rows, {} columns)",
        path.display(),
        df.height(),
        df.width()
    );
    Ok(df)
}

/// Fail fast when a configured variable or the group-by column is absent.
pub fn ensure_columns(df: &DataFrame, config: &ReportConfig) -> Result<()> {
    for name in config.variables.iter().chain(config.group_by.iter()) {
        if df.column(name).is_err() {
            anyhow::bail!("Column '{name}' not found in dataset");
        }
    }
    Ok(())
}
