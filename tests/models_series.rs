use novapanel::models::{Series, SeriesError};

#[test]
fn mismatched_lengths_are_rejected() {
    let err = Series::new(vec![1.0, 2.0], vec!["solo".to_string()]).unwrap_err();
    assert_eq!(
        err,
        SeriesError::LengthMismatch {
            values: 2,
            labels: 1
        }
    );
}

#[test]
fn accessors_expose_the_pairing() {
    let s = Series::new(
        vec![90.0, 45.0],
        vec!["Ene".to_string(), "Feb".to_string()],
    )
    .unwrap();
    assert_eq!(s.len(), 2);
    assert!(!s.is_empty());
    assert_eq!(s.values(), &[90.0, 45.0]);
    assert_eq!(s.labels(), &["Ene".to_string(), "Feb".to_string()]);
    assert_eq!(s.max_value(), Some(90.0));
}

#[test]
fn max_value_ignores_non_finite_entries() {
    let labels = (1..=3).map(|i| i.to_string()).collect();
    let s = Series::new(vec![1.0, f64::NAN, 3.0], labels).unwrap();
    assert_eq!(s.max_value(), Some(3.0));

    let empty = Series::new(vec![], vec![]).unwrap();
    assert_eq!(empty.max_value(), None);
}

#[test]
fn series_round_trips_through_json() {
    let s = Series::new(
        vec![20.0, 45.0],
        vec!["Mon".to_string(), "Tue".to_string()],
    )
    .unwrap();
    let json = serde_json::to_string(&s).unwrap();
    let back: Series = serde_json::from_str(&json).unwrap();
    assert_eq!(back, s);
}
