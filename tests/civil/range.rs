use timeofday::civil::TimeOfDay;

#[test]
fn ordinary_window() -> crate::Result {
    let start = TimeOfDay::parse("09:00")?;
    let end = TimeOfDay::parse("17:30")?;

    assert!(TimeOfDay::parse("09:00")?.is_between(start, end));
    assert!(TimeOfDay::parse("12:00")?.is_between(start, end));
    assert!(TimeOfDay::parse("17:29:59.999")?.is_between(start, end));
    assert!(!TimeOfDay::parse("17:30")?.is_between(start, end));
    assert!(!TimeOfDay::parse("08:59:59.999")?.is_between(start, end));
    Ok(())
}

#[test]
fn window_spanning_midnight() -> crate::Result {
    let start = TimeOfDay::parse("22:00")?;
    let end = TimeOfDay::parse("06:00")?;

    assert!(TimeOfDay::parse("22:00")?.is_between(start, end));
    assert!(TimeOfDay::parse("23:59:59.999")?.is_between(start, end));
    assert!(TimeOfDay::midnight().is_between(start, end));
    assert!(TimeOfDay::parse("05:59")?.is_between(start, end));
    assert!(!TimeOfDay::parse("06:00")?.is_between(start, end));
    assert!(!TimeOfDay::parse("21:59:59.999")?.is_between(start, end));
    Ok(())
}

#[test]
fn empty_window() {
    let t = TimeOfDay::constant(8, 0, 0, 0);
    assert!(!t.is_between(t, t));
    assert!(!TimeOfDay::MIN.is_between(t, t));
}
