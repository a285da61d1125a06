//! Unit tests for the table model
//!
//! Tests cover:
//! - Column partitioning by role
//! - Cell text and custom renderers
//! - Row keys
//! - Body state precedence
//! - Mobile card helpers

use super::super::table::*;
use yew::html;

#[derive(Clone, Debug, PartialEq)]
struct Quote {
    id: Option<u32>,
    symbol: &'static str,
    last: f64,
    volume: i64,
}

impl TableRecord for Quote {
    fn field(&self, accessor: &str) -> CellValue {
        match accessor {
            "symbol" => self.symbol.into(),
            "last" => self.last.into(),
            "volume" => self.volume.into(),
            _ => CellValue::Missing,
        }
    }

    fn row_id(&self) -> Option<String> {
        self.id.map(|id| id.to_string())
    }
}

fn quote(id: Option<u32>, symbol: &'static str, last: f64) -> Quote {
    Quote {
        id,
        symbol,
        last,
        volume: 1200,
    }
}

fn columns() -> Vec<Column<Quote>> {
    vec![
        Column::new("Symbol", "symbol"),
        Column::new("Last", "last").align(Align::Right),
        Column::new("P&L", "last")
            .role(ColumnRole::ProfitLoss)
            .render(|value, _| html! { <span>{ value.to_string() }</span> }),
        Column::new("Volume", "volume"),
        Column::new("Actions", "symbol")
            .role(ColumnRole::Actions)
            .render(|_, _| html! { <button>{"Close"}</button> }),
    ]
}

// ============================================================================
// PARTITION TESTS
// ============================================================================

#[test]
fn test_partition_places_every_column_once() {
    let columns = columns();
    let partition = partition_columns(&columns);

    let regular: Vec<&str> = partition.regular.iter().map(|c| c.header.as_str()).collect();
    assert_eq!(regular, vec!["Symbol", "Last", "Volume"]);
    assert_eq!(partition.profit_loss.map(|c| c.header.as_str()), Some("P&L"));
    assert_eq!(partition.actions.map(|c| c.header.as_str()), Some("Actions"));
}

#[test]
fn test_partition_duplicate_roles_stay_regular() {
    let columns: Vec<Column<Quote>> = vec![
        Column::new("P&L", "last").role(ColumnRole::ProfitLoss),
        Column::new("P&L 2", "last").role(ColumnRole::ProfitLoss),
        Column::new("Actions", "symbol").role(ColumnRole::Actions),
        Column::new("More", "symbol").role(ColumnRole::Actions),
    ];
    let partition = partition_columns(&columns);

    assert_eq!(partition.profit_loss.map(|c| c.header.as_str()), Some("P&L"));
    assert_eq!(partition.actions.map(|c| c.header.as_str()), Some("Actions"));
    let regular: Vec<&str> = partition.regular.iter().map(|c| c.header.as_str()).collect();
    assert_eq!(regular, vec!["P&L 2", "More"]);
}

#[test]
fn test_partition_without_special_columns() {
    let columns: Vec<Column<Quote>> = vec![Column::new("Symbol", "symbol")];
    let partition = partition_columns(&columns);

    assert_eq!(partition.regular.len(), 1);
    assert!(partition.profit_loss.is_none());
    assert!(partition.actions.is_none());
}

// ============================================================================
// CELL TESTS
// ============================================================================

#[test]
fn test_cells_without_renderer_show_stringified_value() {
    let records = vec![quote(Some(7), "AAPL", 178.25)];
    let columns = columns();
    let partition = partition_columns(&columns);
    let rows = derive_rows(&records, &partition);

    let row = &rows[0];
    let texts: Vec<Option<&str>> = row.regular.iter().map(|c| c.content.as_text()).collect();
    assert_eq!(texts, vec![Some("AAPL"), Some("178.25"), Some("1200")]);
    assert_eq!(row.regular[1].align, Align::Right);
    assert_eq!(row.regular[1].header, "Last");
}

#[test]
fn test_whole_numbers_print_without_fraction() {
    assert_eq!(CellValue::Number(100.0).to_string(), "100");
    assert_eq!(CellValue::Integer(-3).to_string(), "-3");
    assert_eq!(CellValue::Missing.to_string(), "");
}

#[test]
fn test_unknown_accessor_is_missing() {
    let records = vec![quote(None, "AAPL", 1.0)];
    let columns: Vec<Column<Quote>> = vec![Column::new("Nope", "nope")];
    let partition = partition_columns(&columns);
    let rows = derive_rows(&records, &partition);

    assert_eq!(rows[0].regular[0].value, CellValue::Missing);
    assert_eq!(rows[0].regular[0].content.as_text(), Some(""));
}

#[test]
fn test_renderer_output_is_custom() {
    let records = vec![quote(Some(1), "AAPL", 1.0)];
    let columns = columns();
    let partition = partition_columns(&columns);
    let rows = derive_rows(&records, &partition);

    let pl = rows[0].profit_loss.as_ref().map(|c| c.content.is_custom());
    assert_eq!(pl, Some(true));
    assert!(rows[0].mobile_actions().is_some());
}

#[test]
fn test_mobile_actions_need_a_renderer() {
    let records = vec![quote(Some(1), "AAPL", 1.0)];
    let columns: Vec<Column<Quote>> = vec![
        Column::new("Symbol", "symbol"),
        Column::new("Actions", "symbol").role(ColumnRole::Actions),
    ];
    let partition = partition_columns(&columns);
    let rows = derive_rows(&records, &partition);

    assert!(rows[0].actions.is_some());
    assert!(rows[0].mobile_actions().is_none());
}

#[test]
fn test_lead_details_and_avatar() {
    let records = vec![quote(Some(1), "GOOGL", 145.3)];
    let columns = columns();
    let partition = partition_columns(&columns);
    let rows = derive_rows(&records, &partition);

    let row = &rows[0];
    assert_eq!(row.lead().map(|c| c.header.as_str()), Some("Symbol"));
    assert_eq!(row.details().len(), 2);
    assert_eq!(row.avatar(), Some('G'));
}

#[test]
fn test_avatar_absent_without_regular_columns() {
    let records = vec![quote(Some(1), "GOOGL", 145.3)];
    let columns: Vec<Column<Quote>> =
        vec![Column::new("P&L", "last").role(ColumnRole::ProfitLoss)];
    let partition = partition_columns(&columns);
    let rows = derive_rows(&records, &partition);

    assert!(rows[0].lead().is_none());
    assert!(rows[0].details().is_empty());
    assert_eq!(rows[0].avatar(), None);
}

// ============================================================================
// ROW KEY TESTS
// ============================================================================

#[test]
fn test_row_keys_prefer_record_id() {
    let records = vec![quote(Some(42), "AAPL", 1.0), quote(None, "MSFT", 2.0)];
    let columns = columns();
    let partition = partition_columns(&columns);
    let rows = derive_rows(&records, &partition);

    assert_eq!(rows[0].key, RowKey::Id("42".to_string()));
    assert_eq!(rows[1].key, RowKey::Index(1));
    assert_eq!(rows[0].key.to_string(), "id-42");
    assert_eq!(rows[1].key.to_string(), "row-1");
}

#[test]
fn test_rows_follow_record_order() {
    let records = vec![
        quote(Some(3), "TSLA", 1.0),
        quote(Some(1), "AAPL", 2.0),
        quote(Some(2), "MSFT", 3.0),
    ];
    let columns = columns();
    let partition = partition_columns(&columns);
    let rows = derive_rows(&records, &partition);

    let symbols: Vec<&str> = rows.iter().map(|r| r.record.symbol).collect();
    assert_eq!(symbols, vec!["TSLA", "AAPL", "MSFT"]);
}

// ============================================================================
// BODY STATE TESTS
// ============================================================================

#[test]
fn test_loading_wins_over_empty() {
    let records: Vec<Quote> = Vec::new();
    let columns = columns();
    let partition = partition_columns(&columns);

    let body = derive_body(&records, &partition, true, "Nothing here");
    assert!(matches!(body, TableBody::Loading));
}

#[test]
fn test_loading_wins_over_rows() {
    let records = vec![quote(Some(1), "AAPL", 1.0)];
    let columns = columns();
    let partition = partition_columns(&columns);

    let body = derive_body(&records, &partition, true, "Nothing here");
    assert!(matches!(body, TableBody::Loading));
}

#[test]
fn test_empty_message_passes_through() {
    let records: Vec<Quote> = Vec::new();
    let columns = columns();
    let partition = partition_columns(&columns);

    match derive_body(&records, &partition, false, "Nothing here") {
        TableBody::Empty(message) => assert_eq!(message, "Nothing here"),
        _ => panic!("expected the empty state"),
    }
}

#[test]
fn test_rows_when_loaded() {
    let records = vec![quote(Some(1), "AAPL", 1.0), quote(Some(2), "MSFT", 2.0)];
    let columns = columns();
    let partition = partition_columns(&columns);

    match derive_body(&records, &partition, false, "Nothing here") {
        TableBody::Rows(rows) => assert_eq!(rows.len(), 2),
        _ => panic!("expected rows"),
    }
}

// ============================================================================
// COLUMN TESTS
// ============================================================================

#[test]
fn test_column_defaults() {
    let column: Column<Quote> = Column::new("Symbol", "symbol");
    assert_eq!(column.align, Align::Left);
    assert_eq!(column.role, ColumnRole::Regular);
    assert!(column.render.is_none());
}

#[test]
fn test_column_equality_tracks_renderer_identity() {
    let a: Column<Quote> = Column::new("P&L", "last").render(|_, _| html! {});
    let b = a.clone();
    let c: Column<Quote> = Column::new("P&L", "last").render(|_, _| html! {});

    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_align_classes() {
    assert_eq!(Align::Left.class(), "text-left");
    assert_eq!(Align::Center.class(), "text-center");
    assert_eq!(Align::Right.class(), "text-right");
}

#[test]
fn test_special_headers_are_centered() {
    assert_eq!(ColumnRole::ProfitLoss.header_class(), "w-[150px] px-2 text-center");
    assert_eq!(ColumnRole::Actions.header_class(), "w-[300px] px-2 text-center");
    assert!(!ColumnRole::Regular.header_class().contains("text-center"));
}

#[test]
fn test_slot_widths() {
    assert_eq!(ColumnRole::Regular.slot_width(), None);
    assert_eq!(ColumnRole::ProfitLoss.slot_width(), Some("w-[150px]"));
    assert_eq!(ColumnRole::Actions.slot_width(), Some("w-[300px]"));
}
