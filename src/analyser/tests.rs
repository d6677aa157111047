use super::analyse_variables;
use super::insight;
use super::profiling;
use super::types::{VariableKind, VariableStats};
use crate::config::ReportConfig;
use polars::prelude::*;

fn config_for(variables: &[&str], group_by: Option<&str>) -> ReportConfig {
    ReportConfig {
        variables: variables.iter().map(|s| (*s).to_owned()).collect(),
        group_by: group_by.map(str::to_owned),
        ..ReportConfig::default()
    }
}

#[test]
fn test_classify_by_declared_dtype() {
    let ints = Column::new("n".into(), &[1i64, 2, 3]);
    let floats = Column::new("f".into(), &[1.5f64, 2.5]);
    let strings = Column::new("s".into(), &["a", "b"]);

    assert_eq!(profiling::classify_column(&ints), VariableKind::Numeric);
    assert_eq!(profiling::classify_column(&floats), VariableKind::Numeric);
    assert_eq!(
        profiling::classify_column(&strings),
        VariableKind::Categorical
    );
}

#[test]
fn test_numeric_digits_stored_as_text_stay_categorical() {
    let col = Column::new("zip".into(), &["10001", "10001", "94105"]);
    assert_eq!(profiling::classify_column(&col), VariableKind::Categorical);
}

#[test]
fn test_numeric_summary_with_outlier() {
    let col = Column::new("x".into(), &[1.0f64, 2.0, 3.0, 4.0, 100.0]);
    let summary = profiling::summarise_numeric(&col)
        .unwrap()
        .expect("Non-empty series");

    assert_eq!(summary.count, 5);
    assert_eq!(summary.missing, 0);
    assert!((summary.mean - 22.0).abs() < 1e-9);
    assert!((summary.median - 3.0).abs() < 1e-9);
    assert!((summary.q1 - 2.0).abs() < 1e-9);
    assert!((summary.q3 - 4.0).abs() < 1e-9);
    assert!((summary.min - 1.0).abs() < 1e-9);
    assert!((summary.max - 100.0).abs() < 1e-9);
    assert!((summary.std_dev - 43.6177).abs() < 1e-3);
    // Biased third standardized moment of this series.
    assert!((summary.skewness - 1.4975).abs() < 1e-3);
}

#[test]
fn test_numeric_summary_ordering_invariants() {
    let col = Column::new("x".into(), &[5.0f64, 1.0, 9.0, 3.0, 3.0, 7.0]);
    let s = profiling::summarise_numeric(&col)
        .unwrap()
        .expect("Non-empty series");

    assert!(s.min <= s.q1);
    assert!(s.q1 <= s.median);
    assert!(s.median <= s.q3);
    assert!(s.q3 <= s.max);
    assert!(s.std_dev >= 0.0);
}

#[test]
fn test_numeric_summary_counts_missing() {
    let col = Column::new("x".into(), &[Some(1.0f64), None, Some(3.0), None]);
    let summary = profiling::summarise_numeric(&col)
        .unwrap()
        .expect("Two values survive");

    assert_eq!(summary.count, 2);
    assert_eq!(summary.missing, 2);
    assert!((summary.mean - 2.0).abs() < 1e-9);
}

#[test]
fn test_numeric_summary_none_when_all_missing() {
    let col = Float64Chunked::full_null("x".into(), 4).into_column();
    assert!(profiling::summarise_numeric(&col).unwrap().is_none());
}

#[test]
fn test_constant_series_has_zero_skewness() {
    let col = Column::new("x".into(), &[7.0f64, 7.0, 7.0]);
    let summary = profiling::summarise_numeric(&col)
        .unwrap()
        .expect("Non-empty series");
    assert_eq!(summary.skewness, 0.0);
    assert_eq!(summary.kurtosis, 0.0);
}

#[test]
fn test_skewness_bands() {
    assert_eq!(insight::skewness_label(0.0), "Roughly symmetrical");
    assert_eq!(insight::skewness_label(0.49), "Roughly symmetrical");
    assert_eq!(insight::skewness_label(0.5), "Moderately skewed");
    assert_eq!(insight::skewness_label(-0.7), "Moderately skewed");
    assert_eq!(insight::skewness_label(1.0), "Highly skewed");
    assert_eq!(insight::skewness_label(-2.3), "Highly skewed");
}

#[test]
fn test_variability_insight_omitted_for_zero_mean() {
    let col = Column::new("x".into(), &[-1.0f64, 0.0, 1.0]);
    let summary = profiling::summarise_numeric(&col)
        .unwrap()
        .expect("Non-empty series");
    let insights = insight::numeric_insights(&summary);

    assert_eq!(insights.len(), 1);
    assert!(insights[0].contains("skewness"));
}

#[test]
fn test_variability_insight_present_for_nonzero_mean() {
    let col = Column::new("x".into(), &[10.0f64, 10.5, 9.5, 10.0]);
    let summary = profiling::summarise_numeric(&col)
        .unwrap()
        .expect("Non-empty series");
    let insights = insight::numeric_insights(&summary);

    assert_eq!(insights.len(), 2);
    assert!(insights[1].starts_with("Low variability"));
}

#[test]
fn test_categorical_summary() {
    let col = Column::new("c".into(), &["a", "a", "a", "b"]);
    let summary = profiling::summarise_categorical(&col)
        .unwrap()
        .expect("Non-empty series");

    assert_eq!(summary.count, 4);
    assert_eq!(summary.missing, 0);
    assert_eq!(summary.unique, 2);
    assert_eq!(summary.mode, "a");
    assert_eq!(summary.table[0].value, "a");
    assert_eq!(summary.table[0].count, 3);
    assert!((summary.table[0].percentage - 75.0).abs() < 1e-9);

    let insights = insight::categorical_insights(&summary);
    assert_eq!(insights.len(), 1);
    assert!(insights[0].contains("'a' is dominant"));
}

#[test]
fn test_categorical_no_dominant_below_half() {
    let col = Column::new("c".into(), &["a", "a", "b", "b"]);
    let summary = profiling::summarise_categorical(&col)
        .unwrap()
        .expect("Non-empty series");
    let insights = insight::categorical_insights(&summary);

    assert_eq!(insights.len(), 1);
    assert!(insights[0].starts_with("Most frequent:"));
}

#[test]
fn test_frequency_tie_breaks_on_first_appearance() {
    let values: Vec<String> = ["b", "b", "a", "a", "c"]
        .iter()
        .map(|s| (*s).to_owned())
        .collect();
    let table = profiling::frequency_table(&values);

    assert_eq!(table[0].value, "b");
    assert_eq!(table[1].value, "a");
    assert_eq!(table[2].value, "c");
}

#[test]
fn test_frequency_percentages_sum_to_hundred() {
    let values: Vec<String> = ["x", "y", "y", "z", "z", "z", "x"]
        .iter()
        .map(|s| (*s).to_owned())
        .collect();
    let table = profiling::frequency_table(&values);
    let total: f64 = table.iter().map(|e| e.percentage).sum();
    assert!((total - 100.0).abs() < 1e-9);
}

#[test]
fn test_categorical_summary_none_when_all_missing() {
    let col = StringChunked::full_null("c".into(), 3).into_column();
    assert!(profiling::summarise_categorical(&col).unwrap().is_none());
}

#[test]
fn test_grouped_numeric_keys_ascending_and_independent() {
    let df = df!(
        "score" => &[1.0f64, 2.0, 10.0, 20.0, 30.0],
        "region" => &["west", "west", "east", "east", "east"],
    )
    .unwrap();

    let groups = profiling::summarise_numeric_grouped(&df, "score", "region").unwrap();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].0, "east");
    assert_eq!(groups[1].0, "west");

    let (_, east) = &groups[0];
    assert_eq!(east.count, 3);
    assert!((east.mean - 20.0).abs() < 1e-9);
    assert!((east.median - 20.0).abs() < 1e-9);

    let (_, west) = &groups[1];
    assert_eq!(west.count, 2);
    assert!((west.mean - 1.5).abs() < 1e-9);
}

#[test]
fn test_grouped_numeric_skips_empty_groups() {
    let df = df!(
        "score" => &[Some(1.0f64), Some(2.0), None, None],
        "region" => &["west", "west", "east", "east"],
    )
    .unwrap();

    let groups = profiling::summarise_numeric_grouped(&df, "score", "region").unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].0, "west");
}

#[test]
fn test_grouped_categorical_uses_group_denominator() {
    let df = df!(
        "city" => &["ny", "ny", "la", "sf"],
        "region" => &["east", "east", "west", "west"],
    )
    .unwrap();

    let groups = profiling::summarise_categorical_grouped(&df, "city", "region").unwrap();
    assert_eq!(groups.len(), 2);

    let (key, east) = &groups[0];
    assert_eq!(key, "east");
    assert_eq!(east[0].value, "ny");
    assert!((east[0].percentage - 100.0).abs() < 1e-9);

    let (_, west) = &groups[1];
    assert_eq!(west.len(), 2);
    assert!((west[0].percentage - 50.0).abs() < 1e-9);
}

#[test]
fn test_analyse_variables_reports_in_request_order() {
    let df = df!(
        "age" => &[30i64, 40, 50],
        "city" => &["ny", "ny", "la"],
    )
    .unwrap();
    let config = config_for(&["city", "age"], None);

    let reports = analyse_variables(&df, &config).unwrap();
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].name, "city");
    assert_eq!(reports[0].kind, VariableKind::Categorical);
    assert_eq!(reports[1].name, "age");
    assert_eq!(reports[1].kind, VariableKind::Numeric);
    assert!(matches!(
        reports[1].stats,
        Some(VariableStats::Numeric { .. })
    ));
}

#[test]
fn test_analyse_variables_empty_column_is_reported_skip() {
    let df = DataFrame::new(vec![Float64Chunked::full_null("x".into(), 3).into_column()]).unwrap();
    let config = config_for(&["x"], None);

    let reports = analyse_variables(&df, &config).unwrap();
    assert_eq!(reports.len(), 1);
    assert!(reports[0].stats.is_none());
    assert!(reports[0].insights.is_empty());
}

#[test]
fn test_analyse_variables_unknown_column_is_fatal() {
    let df = df!("age" => &[1i64, 2]).unwrap();
    let config = config_for(&["missing"], None);

    let err = analyse_variables(&df, &config).unwrap_err();
    assert!(err.to_string().contains("'missing' not found"));
}

#[test]
fn test_grouping_attaches_groups_to_reports() {
    let df = df!(
        "score" => &[1.0f64, 2.0, 3.0, 4.0],
        "region" => &["a", "a", "b", "b"],
    )
    .unwrap();
    let config = config_for(&["score"], Some("region"));

    let reports = analyse_variables(&df, &config).unwrap();
    let Some(VariableStats::Numeric { groups, .. }) = &reports[0].stats else {
        panic!("Expected numeric stats");
    };
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].0, "a");
    assert_eq!(groups[1].0, "b");
}
