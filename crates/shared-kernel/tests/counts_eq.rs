// crates/shared-kernel/tests/counts_eq.rs
use post_stats_shared_kernel::{CharCount, ReadMinutes, WordCount};

#[test]
fn eq_with_usize() {
    assert!(WordCount::from(7) == 7usize);
    assert!(CharCount::from(13) == 13usize);
    assert!(ReadMinutes::new(2) == 2usize);
}

#[test]
fn zero_is_default() {
    assert_eq!(WordCount::default(), WordCount::zero());
    assert_eq!(CharCount::default().value(), 0);
    assert_eq!(ReadMinutes::default(), ReadMinutes::MIN);
}

#[test]
fn display_prints_bare_value_and_honours_width() {
    assert_eq!(WordCount::new(450).to_string(), "450");
    assert_eq!(CharCount::new(13).to_string(), "13");
    assert_eq!(ReadMinutes::new(3).to_string(), "3");
    assert_eq!(format!("{:>5}|{:<4}|", WordCount::new(42), ReadMinutes::new(2)), "   42|2   |");
}
