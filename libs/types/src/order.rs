//! Order classification types
//!
//! Side, price mode, and lookup status enums shared by the matching core and
//! the gateway. Wire names are the lowercase strings of the service protocol.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Order side (buyer or seller)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Buy order (bid)
    Buy,
    /// Sell order (ask)
    Sell,
}

impl Side {
    /// Get the opposite side
    pub fn opposite(&self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => write!(f, "buy"),
            Side::Sell => write!(f, "sell"),
        }
    }
}

impl FromStr for Side {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "buy" => Ok(Side::Buy),
            "sell" => Ok(Side::Sell),
            other => Err(format!("unknown side: {other}")),
        }
    }
}

/// Pricing mode of an order
///
/// Unknown appears only transiently between construction and classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceMode {
    /// Order with a limit price; rests if unmatchable
    Limit,
    /// Order matched at the best counterparty price
    Market,
    /// Not yet classified
    Unknown,
}

impl fmt::Display for PriceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceMode::Limit => write!(f, "limit"),
            PriceMode::Market => write!(f, "market"),
            PriceMode::Unknown => write!(f, "unknown"),
        }
    }
}

impl FromStr for PriceMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "limit" => Ok(PriceMode::Limit),
            "market" => Ok(PriceMode::Market),
            other => Err(format!("unknown price mode: {other}")),
        }
    }
}

/// Status of an order lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Fully processed and settled
    Done,
    /// Fully matched; a completion record exists
    Completed,
    /// Resting in a side queue
    Pending,
    /// Not present in any collection
    Canceled,
    /// Status could not be determined
    Unknown,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStatus::Done => write!(f, "done"),
            OrderStatus::Completed => write!(f, "completed"),
            OrderStatus::Pending => write!(f, "pending"),
            OrderStatus::Canceled => write!(f, "canceled"),
            OrderStatus::Unknown => write!(f, "unknown"),
        }
    }
}
