use super::*;

#[test]
fn total_pages_rounds_up() {
    assert_eq!(total_pages(0, 50), 0);
    assert_eq!(total_pages(1, 50), 1);
    assert_eq!(total_pages(50, 50), 1);
    assert_eq!(total_pages(51, 50), 2);
    assert_eq!(total_pages(4_210, 50), 85);
}

#[test]
fn total_pages_handles_degenerate_inputs() {
    assert_eq!(total_pages(-3, 50), 0);
    assert_eq!(total_pages(100, 0), 0);
}
