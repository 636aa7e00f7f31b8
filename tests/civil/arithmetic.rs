use core::time::Duration;

use timeofday::civil::TimeOfDay;

const HOUR: i64 = 3_600_000;
const DAY: i64 = 24 * HOUR;

#[test]
fn add_wraps_forward() {
    let t = TimeOfDay::constant(15, 23, 30, 123);
    assert_eq!(t.wrapping_add(16 * HOUR), TimeOfDay::constant(7, 23, 30, 123));
    assert_eq!(t.add_hours(16), TimeOfDay::constant(7, 23, 30, 123));
    assert_eq!(t.add_minutes(16 * 60), TimeOfDay::constant(7, 23, 30, 123));
    assert_eq!(
        t + Duration::from_secs(16 * 3_600),
        TimeOfDay::constant(7, 23, 30, 123),
    );
}

#[test]
fn add_wraps_backward() {
    let t = TimeOfDay::constant(15, 23, 30, 123);
    assert_eq!(t.wrapping_add(-16 * HOUR), TimeOfDay::constant(23, 23, 30, 123));
    assert_eq!(t.wrapping_sub(16 * HOUR), TimeOfDay::constant(23, 23, 30, 123));
    assert_eq!(t.add_hours(-16), TimeOfDay::constant(23, 23, 30, 123));
    assert_eq!(
        t - Duration::from_secs(16 * 3_600),
        TimeOfDay::constant(23, 23, 30, 123),
    );
}

#[test]
fn overflowing_add_counts_days() {
    let t = TimeOfDay::constant(12, 0, 0, 0);
    assert_eq!(t.overflowing_add(11 * HOUR), (TimeOfDay::constant(23, 0, 0, 0), 0));
    assert_eq!(t.overflowing_add(12 * HOUR), (TimeOfDay::MIN, 1));
    assert_eq!(t.overflowing_add(-12 * HOUR), (TimeOfDay::MIN, 0));
    assert_eq!(t.overflowing_add(-12 * HOUR - 1), (TimeOfDay::MAX, -1));
    assert_eq!(t.overflowing_add(10 * DAY), (t, 10));
    assert_eq!(t.overflowing_add(-10 * DAY - 12 * HOUR - 1), (TimeOfDay::MAX, -11));
}

#[test]
fn difference_between_times() {
    let start = TimeOfDay::constant(22, 15, 0, 0);
    let end = TimeOfDay::constant(1, 45, 0, 0);
    let elapsed = end - start;
    assert_eq!(elapsed, TimeOfDay::constant(3, 30, 0, 0));
    assert_eq!(start.wrapping_add(i64::from(elapsed.as_millisecond())), end);
}

#[test]
fn assign_operators() {
    let mut t = TimeOfDay::constant(23, 0, 0, 0);
    t += Duration::from_secs(7_200);
    assert_eq!(t, TimeOfDay::constant(1, 0, 0, 0));
    t -= Duration::from_millis(1);
    assert_eq!(t, TimeOfDay::constant(0, 59, 59, 999));
}

#[test]
fn extreme_amounts_do_not_panic() {
    for t in [TimeOfDay::MIN, TimeOfDay::MAX] {
        for amount in [i64::MIN, i64::MIN + 1, -1, 0, 1, i64::MAX] {
            let _ = t.wrapping_add(amount);
            let _ = t.wrapping_sub(amount);
            let _ = t.overflowing_add(amount);
            let _ = t.add_hours(amount);
            let _ = t.add_minutes(amount);
        }
        let _ = t + Duration::MAX;
        let _ = t - Duration::MAX;
    }
}
