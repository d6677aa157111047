//! Report configuration.
//!
//! The original settings block (data path, variable list, optional grouping
//! column) lives here as the `Default` impl of [`ReportConfig`]. Running the
//! binary with no arguments reproduces that behavior; CLI flags or a JSON
//! configuration file override individual fields.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_PATH: &str = "data.csv";
pub const DEFAULT_VARIABLES: &[&str] = &["var1", "var2", "var3"];

/// Fixed relative path of the plot image, overwritten on each run.
pub const DEFAULT_PLOT_PATH: &str = "descriptive_statistics_plots.png";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Input data file (CSV, Parquet or JSON).
    pub data_path: PathBuf,

    /// Ordered list of column names to analyze.
    pub variables: Vec<String>,

    /// Optional column used to partition rows into named groups.
    pub group_by: Option<String>,

    /// Where the plot image is written.
    pub plot_path: PathBuf,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            variables: DEFAULT_VARIABLES.iter().map(|s| (*s).to_owned()).collect(),
            group_by: None,
            plot_path: PathBuf::from(DEFAULT_PLOT_PATH),
        }
    }
}

impl ReportConfig {
    /// Load a configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ReportConfig::default();
        assert_eq!(config.data_path, PathBuf::from("data.csv"));
        assert_eq!(config.variables, vec!["var1", "var2", "var3"]);
        assert!(config.group_by.is_none());
        assert_eq!(
            config.plot_path,
            PathBuf::from("descriptive_statistics_plots.png")
        );
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: ReportConfig =
            serde_json::from_str(r#"{"data_path": "survey.csv", "group_by": "region"}"#)
                .expect("Valid JSON config");
        assert_eq!(config.data_path, PathBuf::from("survey.csv"));
        assert_eq!(config.group_by.as_deref(), Some("region"));
        assert_eq!(config.variables, vec!["var1", "var2", "var3"]);
    }
}
