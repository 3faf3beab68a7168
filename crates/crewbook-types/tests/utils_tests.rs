use chrono::NaiveDate;
use crewbook_types::*;

#[test]
fn test_iso_date_is_zero_padded() {
    let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
    assert_eq!(iso_date(date), "2025-03-07");
}

#[test]
fn test_iso_dates_sort_lexicographically() {
    let earlier = iso_date(NaiveDate::from_ymd_opt(2025, 9, 30).unwrap());
    let later = iso_date(NaiveDate::from_ymd_opt(2025, 10, 1).unwrap());
    assert!(earlier < later);
}

#[test]
fn test_parse_iso_date() {
    assert_eq!(
        parse_iso_date(Some("2025-01-01")),
        NaiveDate::from_ymd_opt(2025, 1, 1)
    );
    assert_eq!(parse_iso_date(Some("01/02/2025")), None);
    assert_eq!(parse_iso_date(None), None);
}

#[test]
fn test_required_text() {
    assert_eq!(required_text("  Acme  "), Some("Acme"));
    assert_eq!(required_text("   "), None);
    assert_eq!(required_text(""), None);
}

#[test]
fn test_optional_text() {
    assert_eq!(optional_text(Some(" late ")), Some("late".to_string()));
    assert_eq!(optional_text(Some("\t")), None);
    assert_eq!(optional_text(None), None);
}
