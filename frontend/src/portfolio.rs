//! Positions and trade history.
//!
//! All data is seeded from bundled JSON; handlers return new vectors rather
//! than editing in place.

use serde::{Deserialize, Serialize};

use crate::date_filter::Timestamped;
use crate::error::Result;
use crate::table::{CellValue, TableRecord};

const POSITIONS_JSON: &str = include_str!("../data/positions.json");
const TRANSACTIONS_JSON: &str = include_str!("../data/transactions.json");

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub id: u32,
    pub script: String,
    pub quantity: u32,
    pub buying_price: f64,
    pub current_price: f64,
    pub target: f64,
    pub stop_loss: f64,
}

impl Position {
    pub fn profit_loss(&self) -> f64 {
        (self.current_price - self.buying_price) * f64::from(self.quantity)
    }
}

impl TableRecord for Position {
    fn field(&self, accessor: &str) -> CellValue {
        match accessor {
            "id" => self.id.into(),
            "script" => self.script.as_str().into(),
            "quantity" => self.quantity.into(),
            "buyingPrice" => self.buying_price.into(),
            "currentPrice" => self.current_price.into(),
            "target" => self.target.into(),
            "stopLoss" => self.stop_loss.into(),
            _ => CellValue::Missing,
        }
    }

    fn row_id(&self) -> Option<String> {
        Some(self.id.to_string())
    }
}

pub fn seed_positions() -> Result<Vec<Position>> {
    Ok(serde_json::from_str(POSITIONS_JSON)?)
}

/// Adds `delta` to one position's quantity, never going below zero.
pub fn adjust_quantity(positions: &[Position], id: u32, delta: i64) -> Vec<Position> {
    positions
        .iter()
        .map(|position| {
            if position.id != id {
                return position.clone();
            }
            let next = (i64::from(position.quantity) + delta).clamp(0, i64::from(u32::MAX));
            Position {
                quantity: u32::try_from(next).unwrap_or(0),
                ..position.clone()
            }
        })
        .collect()
}

pub fn exit_position(positions: &[Position], id: u32) -> Vec<Position> {
    positions.iter().filter(|p| p.id != id).cloned().collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Flat,
}

impl Trend {
    pub fn of(value: f64) -> Self {
        if value > 0.0 {
            Trend::Up
        } else if value < 0.0 {
            Trend::Down
        } else {
            Trend::Flat
        }
    }

    /// Direction of `current` relative to `reference`.
    pub fn between(current: f64, reference: f64) -> Self {
        Self::of(current - reference)
    }

    pub fn text_class(self) -> &'static str {
        match self {
            Trend::Up => "text-green-400",
            Trend::Down => "text-red-400",
            Trend::Flat => "text-gray-400",
        }
    }

    pub fn sign(self) -> &'static str {
        match self {
            Trend::Up => "+",
            Trend::Down => "-",
            Trend::Flat => "",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeStatus {
    Completed,
    Pending,
    Cancelled,
}

impl TradeStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            TradeStatus::Completed => "completed",
            TradeStatus::Pending => "pending",
            TradeStatus::Cancelled => "cancelled",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            TradeStatus::Completed => "bg-green-400/10 text-green-400",
            TradeStatus::Pending => "bg-yellow-400/10 text-yellow-400",
            TradeStatus::Cancelled => "bg-red-400/10 text-red-400",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: u32,
    pub script: String,
    pub status: TradeStatus,
    pub quantity: u32,
    pub realized_price: f64,
    pub buying_price: f64,
    pub selling_price: f64,
    pub target: f64,
    pub stop_loss: f64,
    pub percentage: f64,
    pub created_at: String,
    pub logo: String,
}

impl TableRecord for Transaction {
    fn field(&self, accessor: &str) -> CellValue {
        match accessor {
            "id" => self.id.into(),
            "script" => self.script.as_str().into(),
            "status" => self.status.as_str().into(),
            "quantity" => self.quantity.into(),
            "realizedPrice" => self.realized_price.into(),
            "buyingPrice" => self.buying_price.into(),
            "sellingPrice" => self.selling_price.into(),
            "target" => self.target.into(),
            "stopLoss" => self.stop_loss.into(),
            "percentage" => self.percentage.into(),
            "createdAt" => self.created_at.as_str().into(),
            "logo" => self.logo.as_str().into(),
            _ => CellValue::Missing,
        }
    }

    fn row_id(&self) -> Option<String> {
        Some(self.id.to_string())
    }
}

impl Timestamped for Transaction {
    fn timestamp(&self) -> &str {
        &self.created_at
    }
}

pub fn seed_transactions() -> Result<Vec<Transaction>> {
    Ok(serde_json::from_str(TRANSACTIONS_JSON)?)
}

/// Headline P/L figures shown on the dashboard.
#[derive(Clone, Debug, PartialEq)]
pub struct ProfitLossSummary {
    pub total: &'static str,
    pub profit: &'static str,
    pub loss: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PositionsSummary {
    pub total: u32,
    pub active: u32,
    pub inactive: u32,
}

impl PositionsSummary {
    /// `part` as a percentage of the total; 0 when there are no positions.
    pub fn share_percent(&self, part: u32) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            f64::from(part) / f64::from(self.total) * 100.0
        }
    }
}

pub fn profit_loss_summary() -> ProfitLossSummary {
    ProfitLossSummary {
        total: "+$15,234",
        profit: "+$16,346",
        loss: "-$1,112",
    }
}

pub fn positions_summary() -> PositionsSummary {
    PositionsSummary {
        total: 12,
        active: 8,
        inactive: 4,
    }
}
