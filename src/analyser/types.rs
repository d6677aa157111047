use serde::Serialize;

/// Tagged result of the one-off classification step. Every column is either
/// numeric (by declared dtype, decided before any coercion) or categorical.
#[derive(Clone, Copy, Serialize, PartialEq, Eq, Debug)]
pub enum VariableKind {
    Numeric,
    Categorical,
}

impl VariableKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Numeric => "Numeric",
            Self::Categorical => "Categorical",
        }
    }
}

impl std::fmt::Display for VariableKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Descriptive statistics for one numeric column, computed from the clean
/// series (missing and non-coercible entries dropped).
#[derive(Clone, Serialize, Debug)]
pub struct NumericSummary {
    pub count: usize,
    pub missing: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    pub skewness: f64,
    pub kurtosis: f64,
}

impl NumericSummary {
    /// Standard deviation as a percentage of the absolute mean. `None` when
    /// the mean is exactly zero; callers omit the variability insight in that
    /// case rather than fall back to a divide-by-zero guard value.
    pub fn coefficient_of_variation(&self) -> Option<f64> {
        if self.mean == 0.0 {
            None
        } else {
            Some((self.std_dev / self.mean.abs()) * 100.0)
        }
    }
}

/// One row of a frequency table.
#[derive(Clone, Serialize, Debug)]
pub struct FrequencyEntry {
    pub value: String,
    pub count: usize,
    pub percentage: f64,
}

/// Summary for one categorical column. The table is ordered by descending
/// count, ties broken by first appearance in row order; the mode is the
/// table's first entry.
#[derive(Clone, Serialize, Debug)]
pub struct CategoricalSummary {
    pub count: usize,
    pub missing: usize,
    pub unique: usize,
    pub mode: String,
    pub table: Vec<FrequencyEntry>,
}

/// Reduced statistic set repeated per group for numeric variables. Skewness,
/// kurtosis and the outer quartiles are reserved for the ungrouped pass.
#[derive(Clone, Serialize, Debug)]
pub struct GroupNumericSummary {
    pub count: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub median: f64,
    pub max: f64,
}

#[derive(Clone, Serialize, Debug)]
pub enum VariableStats {
    Numeric {
        summary: NumericSummary,
        groups: Vec<(String, GroupNumericSummary)>,
    },
    Categorical {
        summary: CategoricalSummary,
        groups: Vec<(String, Vec<FrequencyEntry>)>,
    },
}

/// Everything the report prints for one requested variable. `stats` is `None`
/// when the column had no valid data; that is a reported skip, not an error.
#[derive(Clone, Serialize, Debug)]
pub struct VariableReport {
    pub name: String,
    pub kind: VariableKind,
    pub stats: Option<VariableStats>,
    pub insights: Vec<String>,
}
