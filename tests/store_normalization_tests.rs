use finance_core::domain::EntryKind;
use finance_core::store::snapshot_from_json;

#[test]
fn legacy_document_shapes_normalize_in_one_pass() {
    // Amounts as strings, dates as full timestamps, budget keyed by document
    // id only: all shapes the app persisted at some point.
    let data = r##"{
        "categories": [
            {"id": "1", "name": "Salary", "kind": "income", "color": "#36A2EB"},
            {"id": "2", "name": "Food", "kind": "expense", "color": "#FF6384"}
        ],
        "transactions": [
            {"id": "t1", "kind": "income", "amount": "1200", "category_id": "1", "date": "2025-02-01T08:00:00Z"},
            {"id": "t2", "kind": "expense", "amount": 80.5, "category_id": "2", "date": "2025-02-14"},
            {"id": "t3", "kind": "expense", "amount": "oops", "category_id": "2", "date": "not a date"}
        ],
        "budget_limits": [
            {"id": "2", "limit_amount": "300"}
        ]
    }"##;

    let snapshot = snapshot_from_json(data).unwrap();

    assert_eq!(snapshot.transactions[0].amount, 1200.0);
    assert!(snapshot.transactions[0].date.is_some());
    assert_eq!(snapshot.transactions[1].amount, 80.5);

    // The corrupt row survives with neutral values instead of failing the load.
    assert_eq!(snapshot.transactions[2].amount, 0.0);
    assert!(snapshot.transactions[2].date.is_none());

    assert_eq!(snapshot.budget_limits.get("2"), Some(&300.0));
}

#[test]
fn duplicate_budget_records_resolve_last_write_wins() {
    let data = r#"{
        "budget_limits": [
            {"category_id": "2", "limit_amount": 100},
            {"category_id": "2", "limit_amount": 250}
        ]
    }"#;
    let snapshot = snapshot_from_json(data).unwrap();
    assert_eq!(snapshot.budget_limits.len(), 1);
    assert_eq!(snapshot.budget_limits.get("2"), Some(&250.0));
}

#[test]
fn unknown_kind_defaults_to_expense() {
    let data = r#"{
        "transactions": [{"id": "t1", "kind": "transfer", "amount": 10, "date": "2025-01-01"}]
    }"#;
    let snapshot = snapshot_from_json(data).unwrap();
    assert_eq!(snapshot.transactions[0].kind, EntryKind::Expense);
}

#[test]
fn malformed_document_surfaces_serde_error() {
    assert!(snapshot_from_json("{ not json").is_err());
}
