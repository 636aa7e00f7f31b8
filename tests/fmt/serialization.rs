use serde::{Deserialize, Serialize};
use timeofday::civil::TimeOfDay;

#[derive(Debug, Deserialize, PartialEq, Serialize)]
struct Shift {
    start: TimeOfDay,
    end: TimeOfDay,
}

#[test]
fn serialize() -> anyhow::Result<()> {
    let shift = Shift {
        start: TimeOfDay::constant(22, 0, 0, 0),
        end: TimeOfDay::constant(6, 30, 0, 250),
    };
    let json = serde_json::to_string(&shift)?;
    insta::assert_snapshot!(
        json,
        @r#"{"start":"22:00:00.0000000","end":"06:30:00.2500000"}"#,
    );
    Ok(())
}

#[test]
fn deserialize() -> anyhow::Result<()> {
    let shift: Shift =
        serde_json::from_str(r#"{"start": "22:00", "end": " 6:30:00.25 "}"#)?;
    assert_eq!(shift.start, TimeOfDay::constant(22, 0, 0, 0));
    assert_eq!(shift.end, TimeOfDay::constant(6, 30, 0, 250));
    Ok(())
}

#[test]
fn deserialize_invalid() {
    let result = serde_json::from_str::<TimeOfDay>(r#""25:00""#);
    let err = result.unwrap_err().to_string();
    assert!(err.contains("hour 25 is not in the required range"), "{err}");
}
