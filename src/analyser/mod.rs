//! Variable classification, summarisation and insight generation.

pub mod analysis;
pub mod insight;
pub mod io;
pub mod profiling;
pub mod types;

pub use analysis::analyse_variables;
pub use types::{
    CategoricalSummary, FrequencyEntry, GroupNumericSummary, NumericSummary, VariableKind,
    VariableReport, VariableStats,
};

#[cfg(test)]
mod tests;
