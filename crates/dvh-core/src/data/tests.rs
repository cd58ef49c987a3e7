//! Tests for the data layer

use chrono::NaiveDate;

use super::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ==================== Value ====================

#[test]
fn test_value_parse_sentinel() {
    assert_eq!(Value::parse("None"), Value::Missing);
    assert_eq!(Value::parse("42.5"), Value::Number(42.5));
    assert_eq!(Value::parse(" 7 "), Value::Number(7.0));
    assert_eq!(Value::parse("not-a-number"), Value::Missing);
}

#[test]
fn test_value_conversions() {
    assert_eq!(Value::from(1.5), Value::Number(1.5));
    assert_eq!(Value::from(Some(2.0)), Value::Number(2.0));
    assert_eq!(Value::from(None), Value::Missing);
    assert_eq!(Value::Number(3.0).as_f64(), Some(3.0));
    assert_eq!(Value::Missing.as_f64(), None);
    assert!(Value::Missing.is_missing());
}

// ==================== Variable ====================

#[test]
fn test_variable_missing_indices() {
    let var = Variable::from_options("v", vec![Some(1.0), None, Some(3.0), None]);
    let missing: Vec<usize> = var.missing_indices().collect();
    assert_eq!(missing, vec![1, 3]);
    assert_eq!(var.len(), 4);
}

#[test]
fn test_variable_from_raw() {
    let var = Variable::from_raw("dose", &["10.5", "None", "12"]);
    assert_eq!(
        var.values(),
        &[Value::Number(10.5), Value::Missing, Value::Number(12.0)]
    );
}

// ==================== CohortBuilder ====================

#[test]
fn test_builder_rejects_length_mismatch() {
    let result = Cohort::builder()
        .with_variable(Variable::from_numbers("a", vec![1.0, 2.0]))
        .unwrap()
        .with_variable(Variable::from_numbers("b", vec![1.0, 2.0, 3.0]));

    assert!(matches!(result, Err(DataError::LengthMismatch { .. })));
}

#[test]
fn test_builder_rejects_duplicate_name() {
    let result = Cohort::builder()
        .with_variable(Variable::from_numbers("a", vec![1.0]))
        .unwrap()
        .with_variable(Variable::from_numbers("a", vec![2.0]));

    assert!(matches!(result, Err(DataError::DuplicateVariable(_))));
}

#[test]
fn test_builder_rejects_companion_length_mismatch() {
    let result = Cohort::builder()
        .with_variable(Variable::from_numbers("a", vec![1.0, 2.0]))
        .unwrap()
        .with_mrn(vec!["p1".to_string()]);

    assert!(matches!(result, Err(DataError::LengthMismatch { .. })));
}

#[test]
fn test_cohort_accessors() {
    let cohort = Cohort::builder()
        .with_values("a", vec![Value::Number(1.0), Value::Missing])
        .unwrap()
        .with_variable(Variable::from_numbers("b", vec![3.0, 4.0]))
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(cohort.n_studies(), 2);
    assert_eq!(cohort.n_variables(), 2);
    assert_eq!(cohort.variable("b").unwrap().values()[1], Value::Number(4.0));
    assert!(matches!(
        cohort.variable("c"),
        Err(DataError::VariableNotFound(_))
    ));
    assert!(cohort.mrn().is_none());
}

#[test]
fn test_builder_rejects_empty_cohort() {
    assert!(matches!(Cohort::builder().build(), Err(DataError::EmptyCohort)));
}

// ==================== Alignment ====================

#[test]
fn test_align_drops_union_of_missing_indices() {
    // series1 = [1, None, 3], series2 = [4, 5, None] -> only index 0 survives
    let cohort = Cohort::builder()
        .with_variable(Variable::from_options("s1", vec![Some(1.0), None, Some(3.0)]))
        .unwrap()
        .with_variable(Variable::from_options("s2", vec![Some(4.0), Some(5.0), None]))
        .unwrap()
        .build()
        .unwrap();

    let aligned = cohort.aligned();
    assert_eq!(aligned.n_studies(), 1);
    assert_eq!(aligned.column("s1").unwrap().to_vec(), vec![1.0]);
    assert_eq!(aligned.column("s2").unwrap().to_vec(), vec![4.0]);
    assert_eq!(aligned.dropped(), &[1, 2]);
}

#[test]
fn test_align_preserves_companion_correspondence() {
    let cohort = Cohort::builder()
        .with_variable(Variable::from_options(
            "v",
            vec![Some(1.0), None, Some(3.0), Some(4.0)],
        ))
        .unwrap()
        .with_mrn(vec!["p1", "p2", "p3", "p4"].iter().map(|s| s.to_string()).collect())
        .unwrap()
        .with_uid(vec!["u1", "u2", "u3", "u4"].iter().map(|s| s.to_string()).collect())
        .unwrap()
        .with_dates(vec![
            date(2024, 1, 1),
            date(2024, 1, 2),
            date(2024, 1, 3),
            date(2024, 1, 4),
        ])
        .unwrap()
        .build()
        .unwrap();

    let aligned = cohort.aligned();
    assert_eq!(aligned.n_studies(), 3);
    assert_eq!(aligned.mrn().unwrap(), &["p1", "p3", "p4"]);
    assert_eq!(aligned.uid().unwrap(), &["u1", "u3", "u4"]);
    assert_eq!(
        aligned.dates().unwrap(),
        &[date(2024, 1, 1), date(2024, 1, 3), date(2024, 1, 4)]
    );
}

#[test]
fn test_align_output_length_invariant() {
    let cohort = Cohort::builder()
        .with_variable(Variable::from_options(
            "a",
            vec![Some(1.0), None, Some(3.0), None, Some(5.0)],
        ))
        .unwrap()
        .with_variable(Variable::from_options(
            "b",
            vec![None, Some(2.0), Some(3.0), Some(4.0), Some(5.0)],
        ))
        .unwrap()
        .build()
        .unwrap();

    let aligned = cohort.aligned();
    // Union of missing indices is {0, 1, 3}: 5 - 3 = 2 studies remain.
    assert_eq!(aligned.n_studies(), 2);
    for column in aligned.columns() {
        assert_eq!(column.len(), 2);
    }
}

#[test]
fn test_align_all_missing_yields_empty() {
    let cohort = Cohort::builder()
        .with_variable(Variable::from_options("v", vec![None, None]))
        .unwrap()
        .build()
        .unwrap();

    let aligned = cohort.aligned();
    assert_eq!(aligned.n_studies(), 0);
    assert!(aligned.column("v").unwrap().is_empty());
}

// ==================== Design matrix ====================

#[test]
fn test_design_matrix_shapes_and_order() {
    let cohort = Cohort::builder()
        .with_variable(Variable::from_numbers("y", vec![9.0, 13.0, 17.0]))
        .unwrap()
        .with_variable(Variable::from_numbers("x1", vec![1.0, 2.0, 3.0]))
        .unwrap()
        .with_variable(Variable::from_numbers("x2", vec![2.0, 3.0, 4.0]))
        .unwrap()
        .build()
        .unwrap();

    let (x, y) = cohort.aligned().design_matrix("y").unwrap();
    assert_eq!(x.shape(), &[3, 2]);
    assert_eq!(y.to_vec(), vec![9.0, 13.0, 17.0]);
    assert_eq!(x.column(0).to_vec(), vec![1.0, 2.0, 3.0]);
    assert_eq!(x.column(1).to_vec(), vec![2.0, 3.0, 4.0]);
}

#[test]
fn test_design_matrix_unknown_response() {
    let cohort = Cohort::builder()
        .with_variable(Variable::from_numbers("y", vec![1.0]))
        .unwrap()
        .build()
        .unwrap();

    let result = cohort.aligned().design_matrix("nope");
    assert!(matches!(result, Err(DataError::VariableNotFound(_))));
}
