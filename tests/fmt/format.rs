use timeofday::{civil::TimeOfDay, fmt::Format};

#[test]
fn all_tokens() -> crate::Result {
    let t = TimeOfDay::constant(6, 7, 8, 90);
    insta::assert_snapshot!(t.format("t")?, @"06:07");
    insta::assert_snapshot!(t.format("T")?, @"06:07:08");
    insta::assert_snapshot!(t.format("r")?, @"06:07:08");
    insta::assert_snapshot!(t.format("R")?, @"06:07:08");
    insta::assert_snapshot!(t.format("o")?, @"06:07:08.0900000");
    insta::assert_snapshot!(t.format("O")?, @"06:07:08.0900000");
    Ok(())
}

#[test]
fn display_uses_short_time() {
    let t = TimeOfDay::constant(18, 45, 59, 999);
    assert_eq!(t.to_string(), "18:45");
    assert_eq!(format!("{t}"), t.display(Format::ShortTime).to_string());
    assert_eq!(format!("{t:?}"), "18:45:59.999");
}

#[test]
fn custom_patterns_are_unsupported() {
    let t = TimeOfDay::MIN;
    for token in ["HH:mm", "hh:mm tt", "", "g", "tt"] {
        let err = t.format(token).unwrap_err();
        assert!(err.is_unsupported_format(), "{token:?}");
    }
}

#[test]
fn printed_forms_parse_back() -> crate::Result {
    let t = TimeOfDay::constant(23, 59, 58, 7);
    for token in ["t", "T", "r", "R", "o", "O"] {
        let printed = t.format(token)?;
        let parsed = TimeOfDay::parse(&printed)?;
        assert_eq!(parsed.format(token)?, printed, "{token}");
    }
    assert_eq!(TimeOfDay::parse(&t.format("o")?)?, t);
    Ok(())
}
