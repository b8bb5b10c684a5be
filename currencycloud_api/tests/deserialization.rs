use chrono::{TimeZone, Utc};
use currencycloud_api::types::{
    AccountList, Conversion, ConversionSplit, ConversionSplitHistory, ConversionStatus, FixedSide,
    ProfitAndLossList,
};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_conversion_full() {
    let json = load_fixture("conversion_create.json");
    let conversion: Conversion = serde_json::from_str(&json).unwrap();

    assert_eq!(conversion.id, "d391e0a1-2643-44ff-b063-bbe39c98a2b5");
    assert_eq!(conversion.account_id, "67e1b252-40a7-454d-a097-8f77d385889d");
    assert_eq!(
        conversion.creator_contact_id,
        "04d0c252-7b78-4d72-b408-df78841e3ddc"
    );
    assert_eq!(conversion.short_reference, "20180712-RTKNXF");
    assert_eq!(conversion.status, ConversionStatus::AwaitingFunds);
    assert_eq!(conversion.fixed_side, FixedSide::Buy);
    assert_eq!(conversion.client_buy_amount, "95000.00");
    assert_eq!(conversion.client_sell_amount, "67476.38");
    assert_eq!(conversion.client_rate, "0.7103");
    assert_eq!(conversion.core_rate, "0.7101");
    assert_eq!(conversion.mid_market_rate, "0.7100");
    assert_eq!(conversion.partner_rate, None);
    assert_eq!(conversion.deposit_amount, "0.00");
    assert_eq!(conversion.deposit_status.as_deref(), Some("not_required"));
    assert_eq!(conversion.deposit_required_at, None);
    assert_eq!(conversion.unique_request_id, None);
    assert_eq!(
        conversion.created_at,
        Utc.with_ymd_and_hms(2018, 7, 12, 9, 3, 42).unwrap()
    );
}

// Amounts must survive as verbatim decimal strings.
#[test]
fn monetary_fields_are_never_floats() {
    let json = load_fixture("conversion_profit_and_loss.json");
    let report: ProfitAndLossList = serde_json::from_str(&json).unwrap();
    assert_eq!(report.conversion_profit_and_losses[0].amount, "-0.01");

    let json = load_fixture("conversion_split.json");
    let split: ConversionSplit = serde_json::from_str(&json).unwrap();
    assert_eq!(split.parent_conversion.sell_amount, "35513.88");
    assert_eq!(split.child_conversion.sell_amount, "31962.50");
}

#[test]
fn deserialize_split_history_tree() {
    let json = load_fixture("conversion_split_history.json");
    let history: ConversionSplitHistory = serde_json::from_str(&json).unwrap();

    assert_eq!(
        history.origin_conversion.id,
        "9d7919b5-c72d-41e1-9745-d2d5dc35e338"
    );
    assert_eq!(history.child_conversions.len(), 2);
    assert_eq!(history.child_conversions[0].status, ConversionStatus::AwaitingFunds);
}

#[test]
fn deserialize_account_list_with_pagination() {
    let json = load_fixture("accounts_find.json");
    let list: AccountList = serde_json::from_str(&json).unwrap();

    assert_eq!(list.accounts.len(), 1);
    let account = &list.accounts[0];
    assert_eq!(account.account_name, "Currencycloud Development");
    assert_eq!(account.your_reference, None);
    assert_eq!(account.state_or_province, None);
    assert_eq!(account.terms_and_conditions_accepted, Some(true));

    assert_eq!(list.pagination.total_entries, 1);
    assert_eq!(list.pagination.total_pages, 1);
    assert_eq!(list.pagination.current_page, 1);
    assert_eq!(list.pagination.per_page, 25);
    assert_eq!(list.pagination.previous_page, -1);
    assert_eq!(list.pagination.next_page, -1);
    assert_eq!(list.pagination.order, "created_at");
    assert_eq!(list.pagination.order_asc_desc, "asc");
}

#[test]
fn deserialize_profit_and_loss_nullable_event_fields() {
    let json = load_fixture("conversion_profit_and_loss.json");
    let report: ProfitAndLossList = serde_json::from_str(&json).unwrap();

    let entry = &report.conversion_profit_and_losses[0];
    assert_eq!(entry.event_account_id, None);
    assert_eq!(entry.event_contact_id, None);
    assert_eq!(entry.notes, None);
    assert_eq!(entry.event_type, "self_service_cancellation");
    assert_eq!(
        entry.event_date_time,
        Utc.with_ymd_and_hms(2018, 6, 27, 14, 33, 21).unwrap()
    );
}
