use novapanel::models::Series;
use novapanel::stats::{series_summary, trend_pct};

fn series(values: &[f64]) -> Series {
    let labels = (1..=values.len()).map(|i| i.to_string()).collect();
    Series::new(values.to_vec(), labels).unwrap()
}

#[test]
fn even_count_summary() {
    let s = series(&[1.0, 2.0, 3.0, 4.0]);
    let got = series_summary(&s);
    assert_eq!(got.count, 4);
    assert_eq!(got.total, 10.0);
    assert_eq!(got.min, Some(1.0));
    assert_eq!(got.max, Some(4.0));
    assert!((got.mean.unwrap() - 2.5).abs() < 1e-9);
    assert!((got.median.unwrap() - 2.5).abs() < 1e-9);
    assert_eq!(got.latest, Some(4.0));
}

#[test]
fn odd_count_median_and_latest_keep_series_order() {
    let s = series(&[10.0, 30.0, 20.0]);
    let got = series_summary(&s);
    assert_eq!(got.median, Some(20.0));
    assert_eq!(got.latest, Some(20.0)); // latest is positional, not the max
}

#[test]
fn empty_series_has_no_aggregates() {
    let got = series_summary(&series(&[]));
    assert_eq!(got.count, 0);
    assert_eq!(got.total, 0.0);
    assert_eq!(got.min, None);
    assert_eq!(got.max, None);
    assert_eq!(got.mean, None);
    assert_eq!(got.median, None);
    assert_eq!(got.latest, None);
}

#[test]
fn non_finite_values_are_skipped() {
    let s = series(&[10.0, f64::NAN, 30.0]);
    let got = series_summary(&s);
    assert_eq!(got.count, 2);
    assert_eq!(got.total, 40.0);
    assert_eq!(got.mean, Some(20.0));
    assert_eq!(got.latest, Some(30.0));
}

#[test]
fn trend_matches_the_dashboard_badges() {
    assert_eq!(trend_pct(100.0, 132.0), Some(32.0));
    assert_eq!(trend_pct(100.0, 88.0), Some(-12.0));
    assert_eq!(trend_pct(50.0, 50.0), Some(0.0));
}

#[test]
fn trend_has_no_answer_without_a_base_period() {
    assert_eq!(trend_pct(0.0, 10.0), None);
    assert_eq!(trend_pct(f64::NAN, 10.0), None);
    assert_eq!(trend_pct(10.0, f64::NAN), None);
}
