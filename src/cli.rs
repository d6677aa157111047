//! Command-line interface.
//!
//! Flags override values from the optional JSON config file, which in turn
//! overrides the built-in defaults. Supports environment variables for the
//! common deployment case of pointing the tool at a fixed dataset.

use clap::Parser;
use statrep::config::ReportConfig;
use statrep::error::Result;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "statrep", version, about = "Descriptive statistics report generator")]
pub struct Cli {
    /// Dataset to analyse (csv, parquet or json)
    #[arg(short, long, env = "DATA_PATH")]
    pub data: Option<PathBuf>,

    /// Variables to analyse, comma separated
    #[arg(short, long, env = "VARIABLES", value_delimiter = ',')]
    pub variables: Option<Vec<String>>,

    /// Column to break the numeric and frequency summaries down by
    #[arg(short, long, env = "GROUP_BY")]
    pub group_by: Option<String>,

    /// Where to write the plot image
    #[arg(short, long)]
    pub plot: Option<PathBuf>,

    /// JSON config file; flags override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Resolve the effective configuration: defaults, then the config file if
    /// given, then any explicit flags.
    pub fn into_config(self) -> Result<ReportConfig> {
        let mut config = match &self.config {
            Some(path) => ReportConfig::from_file(path)?,
            None => ReportConfig::default(),
        };

        if let Some(data) = self.data {
            config.data_path = data;
        }
        if let Some(variables) = self.variables {
            config.variables = variables;
        }
        if let Some(group_by) = self.group_by {
            config.group_by = Some(group_by);
        }
        if let Some(plot) = self.plot {
            config.plot_path = plot;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::parse_from([
            "statrep",
            "--data",
            "survey.csv",
            "--variables",
            "age,city",
            "--group-by",
            "region",
        ]);
        let config = cli.into_config().unwrap();
        assert_eq!(config.data_path, PathBuf::from("survey.csv"));
        assert_eq!(config.variables, vec!["age", "city"]);
        assert_eq!(config.group_by.as_deref(), Some("region"));
    }

    #[test]
    fn test_defaults_when_no_flags() {
        let cli = Cli::parse_from(["statrep"]);
        let config = cli.into_config().unwrap();
        assert_eq!(config, ReportConfig::default());
    }
}
