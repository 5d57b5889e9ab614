use super::*;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

#[test]
fn first_sample_anchors_time_zero() {
    let mut p = RepeatingProgression::new(0.0, 100.0, ms(1000), Ease::Linear);
    assert!(!p.is_started());
    assert_eq!(p.value_at(ms(5_000)), 0.0);
    assert!(p.is_started());
    assert_eq!(p.value_at(ms(5_250)), 25.0);
    assert_eq!(p.value_at(ms(5_500)), 50.0);
}

#[test]
fn wraps_after_each_period() {
    let mut p = RepeatingProgression::new(0.0, 100.0, ms(1000), Ease::Linear);
    p.value_at(ms(0));
    assert_eq!(p.value_at(ms(1_000)), 0.0);
    assert_eq!(p.value_at(ms(2_500)), 50.0);
    assert_eq!(p.iteration_at(ms(2_500)), 2);
}

#[test]
fn reversed_progression_counts_down() {
    let mut p = RepeatingProgression::new(200.0, 0.0, ms(1000), Ease::Linear);
    assert_eq!(p.value_at(ms(0)), 200.0);
    assert_eq!(p.value_at(ms(250)), 150.0);
    assert_eq!(p.value_at(ms(750)), 50.0);
}

#[test]
fn clock_going_backwards_holds_at_origin() {
    let mut p = RepeatingProgression::new(0.0, 10.0, ms(100), Ease::Linear);
    p.value_at(ms(500));
    assert_eq!(p.value_at(ms(400)), 0.0);
}

#[test]
fn zero_period_does_not_divide_by_zero() {
    let mut p = RepeatingProgression::new(0.0, 10.0, Duration::ZERO, Ease::Linear);
    assert_eq!(p.period(), Duration::from_nanos(1));
    assert_eq!(p.value_at(ms(3)), 0.0);
    assert_eq!(p.value_at(ms(4)), 0.0);
}
