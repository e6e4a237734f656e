use proptest::prelude::*;
use scion_core::mapper::{map_fact, map_name};
use scion_core::model::document::{Fact, Name, RawDate, RawDateEndpoint, RawDateVal};
use scion_core::{normalize_date, DateValue};

fn raw_date(kind: &str, start: RawDateVal, end: RawDateVal) -> RawDate {
    RawDate {
        kind: kind.to_string(),
        start: RawDateEndpoint { value: start },
        end: RawDateEndpoint { value: end },
    }
}

fn empty() -> RawDateVal {
    RawDateVal::new("", "", "")
}

/// Any date component text: empty, numeric, or junk.
fn component() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        (0i32..3000).prop_map(|value| value.to_string()),
        proptest::string::string_regex("[a-z?]{1,4}").unwrap(),
    ]
}

fn date_val() -> impl Strategy<Value = RawDateVal> {
    (component(), component(), component())
        .prop_map(|(year, month, day)| RawDateVal::new(year, month, day))
}

#[test]
fn all_empty_components_leave_both_endpoints_absent() {
    let date = normalize_date(&raw_date("Exact", empty(), empty()));

    assert_eq!(date.kind, "Exact");
    assert_eq!(date.start, None);
    assert_eq!(date.end, None);
    assert!(date.is_undated());
}

#[test]
fn empty_start_with_partial_end_keeps_end_only() {
    let date = normalize_date(&raw_date("Before", empty(), RawDateVal::new("1900", "", "x")));

    assert_eq!(date.start, None);
    assert_eq!(date.end, Some(DateValue::new(1900, 0, 0)));
}

#[test]
fn start_and_end_are_normalized_independently() {
    let date = normalize_date(&raw_date(
        "Range",
        RawDateVal::new("1887", "3", "14"),
        RawDateVal::new("1890", "12", "31"),
    ));

    assert_eq!(date.start, Some(DateValue::new(1887, 3, 14)));
    assert_eq!(date.end, Some(DateValue::new(1890, 12, 31)));
}

#[test]
fn unparsable_components_become_zero_but_endpoint_stays_present() {
    let date = normalize_date(&raw_date("", RawDateVal::new("abt", "?", "1st"), empty()));

    assert_eq!(date.kind, "");
    assert_eq!(date.start, Some(DateValue::new(0, 0, 0)));
    assert_eq!(date.end, None);
}

#[test]
fn modifier_alone_does_not_make_an_endpoint_present() {
    let mut start = empty();
    start.modifier = "about".to_string();

    let date = normalize_date(&raw_date("Exact", start, empty()));
    assert_eq!(date.start, None);
}

#[test]
fn name_and_fact_dates_share_one_normalizer() {
    let raw = raw_date(
        "Range",
        RawDateVal::new("1900", "", ""),
        RawDateVal::new("", "5", ""),
    );
    let name = Name {
        id: "NM1".to_string(),
        date: raw.clone(),
        ..Name::default()
    };
    let fact = Fact {
        id: "F1".to_string(),
        date: raw.clone(),
        ..Fact::default()
    };

    assert_eq!(map_name(&name).date, normalize_date(&raw));
    assert_eq!(map_fact(&fact).date, normalize_date(&raw));
}

proptest! {
    #[test]
    fn endpoint_presence_tracks_non_empty_components(
        kind in "[A-Za-z]{0,8}",
        start in date_val(),
        end in date_val(),
    ) {
        let date = normalize_date(&raw_date(&kind, start.clone(), end.clone()));

        let start_present = !(start.year.is_empty() && start.month.is_empty() && start.day.is_empty());
        let end_present = !(end.year.is_empty() && end.month.is_empty() && end.day.is_empty());
        prop_assert_eq!(date.start.is_some(), start_present);
        prop_assert_eq!(date.end.is_some(), end_present);
        prop_assert_eq!(date.kind, kind);
    }

    #[test]
    fn present_components_parse_or_default_to_zero(start in date_val()) {
        prop_assume!(!(start.year.is_empty() && start.month.is_empty() && start.day.is_empty()));

        let date = normalize_date(&raw_date("Exact", start.clone(), empty()));
        let value = date.start.unwrap();
        prop_assert_eq!(value.year, start.year.parse::<i32>().unwrap_or(0));
        prop_assert_eq!(value.month, start.month.parse::<i32>().unwrap_or(0));
        prop_assert_eq!(value.day, start.day.parse::<i32>().unwrap_or(0));
    }
}
