use timeofday::civil::TimeOfDay;

#[test]
fn accepted() -> crate::Result {
    assert_eq!(TimeOfDay::parse("7:05")?, TimeOfDay::constant(7, 5, 0, 0));
    assert_eq!(
        TimeOfDay::parse("07:05:09")?,
        TimeOfDay::constant(7, 5, 9, 0),
    );
    assert_eq!(
        TimeOfDay::parse("07:05:09.5")?,
        TimeOfDay::constant(7, 5, 9, 500),
    );
    assert_eq!(
        TimeOfDay::parse(" 07 : 05 : 09.0450000 ")?,
        TimeOfDay::constant(7, 5, 9, 45),
    );
    let t: TimeOfDay = "23:59:59.9999999".parse()?;
    assert_eq!(t, TimeOfDay::MAX);
    Ok(())
}

#[test]
fn rejected() {
    for input in
        ["", "7", "7:", "24:00", "7:60", "7:05:60", "7:05:09.", "07:05 AM"]
    {
        assert!(TimeOfDay::parse(input).is_err(), "{input:?}");
        assert_eq!(TimeOfDay::try_parse(input), None, "{input:?}");
    }
}

#[test]
fn error_mentions_input_and_reason() {
    let err = TimeOfDay::parse("7:05 AM").unwrap_err();
    assert!(err.is_parse());
    insta::assert_snapshot!(
        err,
        @r#"string "7:05 AM" was not recognized as a valid time of day: expected end of input after minute, but found 'A'"#,
    );
}
