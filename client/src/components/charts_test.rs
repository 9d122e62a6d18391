use super::*;

#[test]
fn bar_width_scales_against_max() {
    assert!((bar_width_pct(50, 100) - 50.0).abs() < f64::EPSILON);
    assert!((bar_width_pct(100, 100) - 100.0).abs() < f64::EPSILON);
}

#[test]
fn bar_width_is_zero_for_empty_chart() {
    assert!(bar_width_pct(0, 0).abs() < f64::EPSILON);
    assert!(bar_width_pct(10, 0).abs() < f64::EPSILON);
    assert!(bar_width_pct(0, 10).abs() < f64::EPSILON);
}

#[test]
fn bar_width_never_exceeds_full_track() {
    assert!((bar_width_pct(200, 100) - 100.0).abs() < f64::EPSILON);
    assert!(bar_width_pct(-5, 100).abs() < f64::EPSILON);
}
