//! Column-driven tables.
//!
//! Columns are plain data: a header, the record field they read, alignment,
//! a layout role and an optional renderer. [`derive_rows`] turns records and
//! columns into labeled cells once; the desktop grid and the mobile cards in
//! [`view`] only arrange those cells.

mod view;

use std::fmt;
use std::rc::Rc;

use yew::{html, Html};

pub use view::Table;

/// One field value as read from a record.
#[derive(Clone, Debug, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Integer(i64),
    Missing,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => f.write_str(s),
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Integer(n) => write!(f, "{}", n),
            CellValue::Missing => Ok(()),
        }
    }
}

impl CellValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Integer(n) => Some(*n as f64),
            _ => None,
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<u32> for CellValue {
    fn from(value: u32) -> Self {
        CellValue::Integer(i64::from(value))
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Integer(value)
    }
}

/// A row type the table can display.
pub trait TableRecord {
    fn field(&self, accessor: &str) -> CellValue;

    /// Stable identity for row keys; rows fall back to their index.
    fn row_id(&self) -> Option<String> {
        None
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

impl Align {
    pub fn class(self) -> &'static str {
        match self {
            Align::Left => "text-left",
            Align::Center => "text-center",
            Align::Right => "text-right",
        }
    }
}

/// Layout slot a column is placed in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColumnRole {
    #[default]
    Regular,
    ProfitLoss,
    Actions,
}

impl ColumnRole {
    /// Fixed desktop width of a special slot; regular columns share the rest.
    pub fn slot_width(self) -> Option<&'static str> {
        match self {
            ColumnRole::Regular => None,
            ColumnRole::ProfitLoss => Some("w-[150px]"),
            ColumnRole::Actions => Some("w-[300px]"),
        }
    }

    /// Desktop header classes. Special slots center their header.
    pub fn header_class(self) -> String {
        match self.slot_width() {
            Some(width) => format!("{} px-2 text-center", width),
            None => "flex-1 px-2 group".to_string(),
        }
    }
}

pub type CellRenderer<T> = Rc<dyn Fn(&CellValue, &T) -> Html>;

pub struct Column<T> {
    pub header: String,
    pub accessor: &'static str,
    pub align: Align,
    pub role: ColumnRole,
    pub width: Option<&'static str>,
    pub render: Option<CellRenderer<T>>,
}

impl<T> Column<T> {
    pub fn new(header: impl Into<String>, accessor: &'static str) -> Self {
        Self {
            header: header.into(),
            accessor,
            align: Align::Left,
            role: ColumnRole::Regular,
            width: None,
            render: None,
        }
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn role(mut self, role: ColumnRole) -> Self {
        self.role = role;
        self
    }

    pub fn width(mut self, width: &'static str) -> Self {
        self.width = Some(width);
        self
    }

    pub fn render(mut self, render: impl Fn(&CellValue, &T) -> Html + 'static) -> Self {
        self.render = Some(Rc::new(render));
        self
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            header: self.header.clone(),
            accessor: self.accessor,
            align: self.align,
            role: self.role,
            width: self.width,
            render: self.render.clone(),
        }
    }
}

impl<T> PartialEq for Column<T> {
    fn eq(&self, other: &Self) -> bool {
        let same_render = match (&self.render, &other.render) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        };
        self.header == other.header
            && self.accessor == other.accessor
            && self.align == other.align
            && self.role == other.role
            && self.width == other.width
            && same_render
    }
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("header", &self.header)
            .field("accessor", &self.accessor)
            .field("align", &self.align)
            .field("role", &self.role)
            .field("width", &self.width)
            .field("render", &self.render.is_some())
            .finish()
    }
}

/// Columns split by layout slot. Only the first column of each special role
/// gets the slot; later duplicates stay regular.
pub struct ColumnPartition<'a, T> {
    pub regular: Vec<&'a Column<T>>,
    pub profit_loss: Option<&'a Column<T>>,
    pub actions: Option<&'a Column<T>>,
}

pub fn partition_columns<T>(columns: &[Column<T>]) -> ColumnPartition<'_, T> {
    let mut partition = ColumnPartition {
        regular: Vec::with_capacity(columns.len()),
        profit_loss: None,
        actions: None,
    };
    for column in columns {
        match column.role {
            ColumnRole::ProfitLoss if partition.profit_loss.is_none() => {
                partition.profit_loss = Some(column)
            }
            ColumnRole::Actions if partition.actions.is_none() => partition.actions = Some(column),
            _ => partition.regular.push(column),
        }
    }
    partition
}

pub enum CellContent {
    Text(String),
    Custom(Html),
}

impl CellContent {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellContent::Text(s) => Some(s),
            CellContent::Custom(_) => None,
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, CellContent::Custom(_))
    }

    pub fn to_html(&self) -> Html {
        match self {
            CellContent::Text(s) => html! { { s.clone() } },
            CellContent::Custom(html) => html.clone(),
        }
    }
}

pub struct Cell {
    pub header: String,
    pub align: Align,
    pub width: Option<&'static str>,
    pub value: CellValue,
    pub content: CellContent,
}

impl Cell {
    fn build<T>(column: &Column<T>, record: &T) -> Self
    where
        T: TableRecord,
    {
        let value = record.field(column.accessor);
        let content = match &column.render {
            Some(render) => CellContent::Custom(render(&value, record)),
            None => CellContent::Text(value.to_string()),
        };
        Self {
            header: column.header.clone(),
            align: column.align,
            width: column.width,
            value,
            content,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RowKey {
    Id(String),
    Index(usize),
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowKey::Id(id) => write!(f, "id-{}", id),
            RowKey::Index(idx) => write!(f, "row-{}", idx),
        }
    }
}

/// Every cell of one record, in display order.
pub struct RowCells<'a, T> {
    pub key: RowKey,
    pub record: &'a T,
    pub regular: Vec<Cell>,
    pub profit_loss: Option<Cell>,
    pub actions: Option<Cell>,
}

impl<'a, T> RowCells<'a, T> {
    /// Cell promoted to the mobile card header.
    pub fn lead(&self) -> Option<&Cell> {
        self.regular.first()
    }

    /// Regular cells after the lead.
    pub fn details(&self) -> &[Cell] {
        self.regular.get(1..).unwrap_or(&[])
    }

    /// First character of the lead's raw value.
    pub fn avatar(&self) -> Option<char> {
        self.lead().and_then(|cell| cell.value.to_string().chars().next())
    }

    /// Actions as shown on mobile: renderer output only.
    pub fn mobile_actions(&self) -> Option<Html> {
        self.actions
            .as_ref()
            .filter(|cell| cell.content.is_custom())
            .map(|cell| cell.content.to_html())
    }
}

pub fn row_key<T: TableRecord>(record: &T, index: usize) -> RowKey {
    record.row_id().map(RowKey::Id).unwrap_or(RowKey::Index(index))
}

pub fn derive_rows<'a, T: TableRecord>(
    records: &'a [T],
    partition: &ColumnPartition<'_, T>,
) -> Vec<RowCells<'a, T>> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| RowCells {
            key: row_key(record, index),
            record,
            regular: partition
                .regular
                .iter()
                .map(|column| Cell::build(column, record))
                .collect(),
            profit_loss: partition.profit_loss.map(|column| Cell::build(column, record)),
            actions: partition.actions.map(|column| Cell::build(column, record)),
        })
        .collect()
}

/// What the table body shows. Loading wins over empty, empty over rows.
pub enum TableBody<'a, T> {
    Loading,
    Empty(&'a str),
    Rows(Vec<RowCells<'a, T>>),
}

pub fn derive_body<'a, T: TableRecord>(
    records: &'a [T],
    partition: &ColumnPartition<'_, T>,
    is_loading: bool,
    empty_message: &'a str,
) -> TableBody<'a, T> {
    if is_loading {
        TableBody::Loading
    } else if records.is_empty() {
        TableBody::Empty(empty_message)
    } else {
        TableBody::Rows(derive_rows(records, partition))
    }
}
