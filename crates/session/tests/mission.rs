//! Mission parameter tests.

use chrono::{TimeZone, Utc};
use orion_session::{Error, MissionParameters};

#[test]
fn accepts_bounds() {
    assert!(MissionParameters::new("Ueno Park", 15, 0.1, Some(0)).is_ok());
    assert!(MissionParameters::new("Ueno Park", 1440, 20.0, Some(10_000)).is_ok());
    assert!(MissionParameters::new("Ueno Park", 90, 3.5, None).is_ok());
}

#[test]
fn rejects_out_of_bounds() {
    let cases = [
        MissionParameters::new("Ueno Park", 14, 1.0, None),
        MissionParameters::new("Ueno Park", 1441, 1.0, None),
        MissionParameters::new("Ueno Park", 60, 0.05, None),
        MissionParameters::new("Ueno Park", 60, 20.5, None),
        MissionParameters::new("Ueno Park", 60, 1.0, Some(10_001)),
        MissionParameters::new("", 60, 1.0, None),
    ];
    for case in cases {
        assert!(matches!(case, Err(Error::InvalidParameter(_))));
    }
}

#[test]
fn system_prompt_embeds_parameters() {
    let params = MissionParameters::new("Asakusa", 120, 2.5, Some(3000)).unwrap();
    let start = Utc.with_ymd_and_hms(2026, 10, 19, 9, 0, 0).unwrap();
    let prompt = params.system_prompt(start);

    assert!(prompt.contains("Starting point: Asakusa"));
    assert!(prompt.contains("120 minutes"));
    assert!(prompt.contains("2.5 km"));
    assert!(prompt.contains("3000 JPY"));
    assert_eq!(prompt, params.system_prompt(start));
}

#[test]
fn system_prompt_without_budget() {
    let params = MissionParameters::new("Asakusa", 120, 2.5, None).unwrap();
    let start = Utc.with_ymd_and_hms(2026, 10, 19, 9, 0, 0).unwrap();
    assert!(params.system_prompt(start).contains("Budget: not specified"));
}
