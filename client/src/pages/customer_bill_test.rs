use super::*;

#[test]
fn table_from_query_accepts_positive_numbers() {
    assert_eq!(table_from_query(Some("7")), Some(7));
    assert_eq!(table_from_query(Some(" 12 ")), Some(12));
}

#[test]
fn table_from_query_rejects_missing_or_bad_values() {
    assert_eq!(table_from_query(None), None);
    assert_eq!(table_from_query(Some("")), None);
    assert_eq!(table_from_query(Some("0")), None);
    assert_eq!(table_from_query(Some("-1")), None);
    assert_eq!(table_from_query(Some("three")), None);
}

#[test]
fn back_route_depends_on_viewer() {
    assert_eq!(back_route(None, None), "/customermenu");
    assert_eq!(back_route(Some(3), Some(StaffRole::Wait)), "/waitstaff");
    assert_eq!(back_route(Some(3), Some(StaffRole::Manager)), "/manager");
    assert_eq!(back_route(Some(3), None), "/signin");
}
