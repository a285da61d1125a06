//! Unit tests for positions, preferences and formatting
//!
//! Tests cover:
//! - Bundled seed data
//! - Position quantity changes and exits
//! - Trading preference edits
//! - Account settings
//! - Display formatting helpers

use super::super::format::*;
use super::super::portfolio::*;
use super::super::preferences::*;
use super::super::table::{CellValue, TableRecord};
use chrono::NaiveDate;

// ============================================================================
// SEED DATA TESTS
// ============================================================================

#[test]
fn test_seed_positions() {
    let positions = seed_positions().unwrap();
    let scripts: Vec<&str> = positions.iter().map(|p| p.script.as_str()).collect();
    assert_eq!(scripts, vec!["AAPL", "GOOGL", "TSLA", "MSFT"]);
    assert_eq!(positions[0].quantity, 100);
    assert_eq!(positions[0].current_price, 178.25);
}

#[test]
fn test_seed_transactions() {
    let transactions = seed_transactions().unwrap();
    assert_eq!(transactions.len(), 4);
    assert_eq!(transactions[2].status, TradeStatus::Cancelled);
    assert_eq!(transactions[2].percentage, -40.0);
    assert_eq!(transactions[1].created_at, "2024-03-14T15:45:00");
}

#[test]
fn test_seed_preferences() {
    let preferences = seed_preferences().unwrap();
    assert_eq!(preferences.len(), 3);
    assert!(!preferences[2].is_active);
}

// ============================================================================
// POSITION TESTS
// ============================================================================

#[test]
fn test_position_fields() {
    let position = &seed_positions().unwrap()[0];
    assert_eq!(position.field("script"), CellValue::Text("AAPL".to_string()));
    assert_eq!(position.field("quantity"), CellValue::Integer(100));
    assert_eq!(position.field("buyingPrice"), CellValue::Number(175.5));
    assert_eq!(position.field("unknown"), CellValue::Missing);
    assert_eq!(position.row_id(), Some("1".to_string()));
}

#[test]
fn test_profit_loss() {
    let position = &seed_positions().unwrap()[0];
    assert!((position.profit_loss() - 275.0).abs() < 1e-9);
    assert_eq!(Trend::of(position.profit_loss()), Trend::Up);
}

#[test]
fn test_adjust_quantity() {
    let positions = seed_positions().unwrap();
    let up = adjust_quantity(&positions, 2, 1);
    assert_eq!(up[1].quantity, 51);
    assert_eq!(up[0].quantity, 100);

    let down = adjust_quantity(&positions, 2, -1);
    assert_eq!(down[1].quantity, 49);
}

#[test]
fn test_adjust_quantity_stops_at_zero() {
    let positions = seed_positions().unwrap();
    let drained = adjust_quantity(&positions, 1, -500);
    assert_eq!(drained[0].quantity, 0);
}

#[test]
fn test_adjust_unknown_position_changes_nothing() {
    let positions = seed_positions().unwrap();
    assert_eq!(adjust_quantity(&positions, 99, 5), positions);
}

#[test]
fn test_exit_position() {
    let positions = seed_positions().unwrap();
    let remaining = exit_position(&positions, 3);
    assert_eq!(remaining.len(), 3);
    assert!(remaining.iter().all(|p| p.script != "TSLA"));
}

#[test]
fn test_trend() {
    assert_eq!(Trend::between(10.0, 12.0), Trend::Down);
    assert_eq!(Trend::of(0.0), Trend::Flat);
    assert_eq!(Trend::Up.sign(), "+");
    assert_eq!(Trend::Down.text_class(), "text-red-400");
}

#[test]
fn test_share_percent() {
    let summary = positions_summary();
    assert!((summary.share_percent(summary.active) - 200.0 / 3.0).abs() < 1e-9);

    let empty = PositionsSummary {
        total: 0,
        active: 0,
        inactive: 0,
    };
    assert_eq!(empty.share_percent(0), 0.0);
}

// ============================================================================
// PREFERENCE TESTS
// ============================================================================

#[test]
fn test_next_preference_id_beats_existing_ids() {
    let preferences = seed_preferences().unwrap();
    assert_eq!(next_preference_id(&preferences, 1_700_000_000_000), 1_700_000_000_000);
    assert_eq!(next_preference_id(&preferences, 2), 4);
    assert_eq!(next_preference_id(&[], 0), 1);
}

#[test]
fn test_add_blank_goes_first() {
    let preferences = seed_preferences().unwrap();
    let added = add_blank(&preferences, 10);

    assert_eq!(added.len(), 4);
    assert_eq!(added[0].id, 10);
    assert!(added[0].is_new());
    assert!(added[0].is_active);
    assert!(!added[0].can_save());
}

#[test]
fn test_update_preference_keeps_id() {
    let preferences = seed_preferences().unwrap();
    let values = TradingPreference {
        id: 999,
        script: "NVDA".to_string(),
        quantity: 10.0,
        target: 900.0,
        stop_loss: 800.0,
        is_active: true,
    };
    let updated = update_preference(&preferences, 2, &values);

    assert_eq!(updated[1].id, 2);
    assert_eq!(updated[1].script, "NVDA");
    assert_eq!(updated[0], preferences[0]);
}

#[test]
fn test_set_active_and_delete() {
    let preferences = seed_preferences().unwrap();
    let toggled = set_active(&preferences, 3, true);
    assert!(toggled[2].is_active);

    let deleted = delete_preference(&toggled, 1);
    let ids: Vec<u64> = deleted.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![2, 3]);
}

#[test]
fn test_display_order_has_unique_ids() {
    let preferences = seed_preferences().unwrap();
    let id = next_preference_id(&preferences, 3);
    let sorted = sorted_for_display(&add_blank(&preferences, id));

    let mut keys: Vec<String> = sorted.iter().map(|p| p.id.to_string()).collect();
    assert_eq!(keys[0], "4");
    keys.sort();
    keys.dedup();
    assert_eq!(keys.len(), sorted.len());
}

#[test]
fn test_sorted_for_display_puts_new_first() {
    let mut preferences = seed_preferences().unwrap();
    preferences.push(TradingPreference::blank(50));
    let sorted = sorted_for_display(&preferences);

    let ids: Vec<u64> = sorted.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![50, 1, 2, 3]);
}

#[test]
fn test_can_save_requires_script() {
    let mut preference = TradingPreference::blank(1);
    preference.script = "   ".to_string();
    assert!(!preference.can_save());
    preference.script = "AAPL".to_string();
    assert!(preference.can_save());
}

#[test]
fn test_parse_amount() {
    assert_eq!(parse_amount("12.5"), 12.5);
    assert_eq!(parse_amount(" 3 "), 3.0);
    assert_eq!(parse_amount(""), 0.0);
    assert_eq!(parse_amount("abc"), 0.0);
    assert_eq!(parse_amount("inf"), 0.0);
}

// ============================================================================
// ACCOUNT SETTING TESTS
// ============================================================================

#[test]
fn test_default_account_settings() {
    let settings = default_account_settings();
    let ids: Vec<&str> = settings.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec!["notifications", "2fa", "mobile", "email"]);
    assert!(!settings[2].enabled);
}

#[test]
fn test_toggle_setting() {
    let settings = default_account_settings();
    let toggled = toggle_setting(&settings, "mobile");
    assert!(toggled[2].enabled);
    assert!(toggled[0].enabled);

    let unchanged = toggle_setting(&settings, "missing");
    assert_eq!(unchanged, settings);
}

// ============================================================================
// FORMAT TESTS
// ============================================================================

#[test]
fn test_format_with_commas() {
    assert_eq!(format_with_commas(0), "0");
    assert_eq!(format_with_commas(999), "999");
    assert_eq!(format_with_commas(1000), "1,000");
    assert_eq!(format_with_commas(-1234567), "-1,234,567");
}

#[test]
fn test_format_price() {
    assert_eq!(format_price(178.25), "$178.25");
    assert_eq!(format_price(145.3), "$145.30");
}

#[test]
fn test_format_timestamp() {
    assert_eq!(format_timestamp("2024-03-15T10:30:00"), "Mar 15, 2024 10:30 AM");
    assert_eq!(format_timestamp("2024-03-14T15:45:00"), "Mar 14, 2024 3:45 PM");
    assert_eq!(format_timestamp("garbage"), "garbage");
}

#[test]
fn test_format_date_label() {
    let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
    assert_eq!(format_date_label(date), "Mar 05, 2024");
}

#[test]
fn test_time_of_day() {
    assert_eq!(time_of_day(0), "morning");
    assert_eq!(time_of_day(11), "morning");
    assert_eq!(time_of_day(12), "afternoon");
    assert_eq!(time_of_day(16), "afternoon");
    assert_eq!(time_of_day(17), "evening");
    assert_eq!(time_of_day(23), "evening");
}

#[test]
fn test_capitalize() {
    assert_eq!(capitalize("completed"), "Completed");
    assert_eq!(capitalize(""), "");
}
