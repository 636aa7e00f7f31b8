use core::time::Duration;

use timeofday::civil::{ClockFields, DateKind, SourceTime, TimeOfDay};

#[test]
fn components() -> crate::Result {
    let t = TimeOfDay::new(13, 5, 9, 42)?;
    assert_eq!(
        (t.hour(), t.minute(), t.second(), t.millisecond()),
        (13, 5, 9, 42),
    );
    assert_eq!(t.as_millisecond(), 47_109_042);
    Ok(())
}

#[test]
fn components_overflow_into_larger_units() -> crate::Result {
    assert_eq!(TimeOfDay::new(0, 0, 0, 86_399_999)?, TimeOfDay::MAX);
    assert_eq!(TimeOfDay::new(0, 1_440, 0, 0)?, TimeOfDay::MIN);
    assert_eq!(
        TimeOfDay::new(47, 0, 0, 0)?,
        TimeOfDay::constant(23, 0, 0, 0),
    );
    Ok(())
}

#[test]
fn negative_components() {
    let err = TimeOfDay::new(0, 0, 0, -1).unwrap_err();
    assert!(err.is_invalid_argument());
    assert_eq!(
        err.to_string(),
        "parameter 'millisecond' with value -1 must not be negative",
    );
}

#[test]
fn ticks() {
    let t = TimeOfDay::constant(18, 30, 15, 500);
    assert_eq!(t.to_ticks(), 666_155_000_000);
    assert_eq!(TimeOfDay::from_ticks(t.to_ticks()), t);
    assert_eq!(TimeOfDay::from_ticks(t.to_ticks() + 9_999), t);
}

#[test]
fn time_span() -> crate::Result {
    let t = TimeOfDay::from_time_span(45_296_789)?;
    assert_eq!(t, TimeOfDay::constant(12, 34, 56, 789));

    let err = TimeOfDay::from_time_span(86_400_000).unwrap_err();
    assert!(err.is_unrepresentable());
    assert!(!err.is_invalid_argument());

    let t = TimeOfDay::try_from(Duration::from_secs(3_600))?;
    assert_eq!(t, TimeOfDay::constant(1, 0, 0, 0));
    assert_eq!(Duration::from(t), Duration::from_secs(3_600));
    Ok(())
}

#[test]
fn source_time() -> crate::Result {
    struct Fields(DateKind);

    impl SourceTime for Fields {
        fn kind(&self) -> DateKind {
            self.0
        }

        fn utc_fields(&self) -> ClockFields {
            ClockFields { hour: 4, minute: 0, second: 0, millisecond: 0 }
        }

        fn local_fields(&self) -> ClockFields {
            ClockFields { hour: 6, minute: 30, second: 0, millisecond: 0 }
        }
    }

    let utc = TimeOfDay::from_source_time(&Fields(DateKind::Utc))?;
    assert_eq!(utc, TimeOfDay::constant(4, 0, 0, 0));
    let local = TimeOfDay::from_source_time(&Fields(DateKind::Local))?;
    assert_eq!(local, TimeOfDay::constant(6, 30, 0, 0));
    let unspecified =
        TimeOfDay::from_source_time(&Fields(DateKind::Unspecified))?;
    assert_eq!(unspecified, local);
    Ok(())
}

#[cfg(feature = "std")]
#[test]
fn system_time() -> crate::Result {
    use std::time::UNIX_EPOCH;

    // 2024-06-19T15:22:45.123Z
    let time = UNIX_EPOCH + Duration::from_millis(1_718_810_565_123);
    let t = TimeOfDay::from_source_time(&time)?;
    assert_eq!(t, TimeOfDay::constant(15, 22, 45, 123));
    Ok(())
}
