//! Integer price and quantity newtypes
//!
//! Prices and quantities are positive whole units. The newtypes keep the two
//! domains from being mixed up and validate at the edges; arithmetic stays
//! exact, so plain JSON numbers are safe on the wire.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// Price in whole units
///
/// Must always be at least 1. Market orders carry a placeholder price of 1
/// until a counterparty price is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Price(i64);

impl Price {
    /// Create a new Price
    ///
    /// # Panics
    /// Panics if the value is less than 1
    pub fn new(value: i64) -> Self {
        assert!(value >= 1, "Price must be at least 1");
        Self(value)
    }

    /// Try to create a Price, returning None if invalid
    pub fn try_new(value: i64) -> Option<Self> {
        if value >= 1 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Get the inner value
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = i64::deserialize(deserializer)?;
        Self::try_new(value).ok_or_else(|| serde::de::Error::custom("Price must be at least 1"))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Quantity in whole units
///
/// Submitted quantities must be at least 1; a quantity reaches zero only by
/// being consumed during matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Quantity(i64);

impl Quantity {
    /// The consumed quantity
    pub const ZERO: Quantity = Quantity(0);

    /// Create a new Quantity
    ///
    /// # Panics
    /// Panics if the value is less than 1
    pub fn new(value: i64) -> Self {
        assert!(value >= 1, "Quantity must be at least 1");
        Self(value)
    }

    /// Try to create a Quantity, returning None if invalid
    pub fn try_new(value: i64) -> Option<Self> {
        if value >= 1 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Get the inner value
    pub fn as_i64(&self) -> i64 {
        self.0
    }

    /// Check if the quantity is fully consumed
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Add for Quantity {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Quantity {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        assert!(self.0 >= rhs.0, "Quantity subtraction would go negative");
        Self(self.0 - rhs.0)
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = i64::deserialize(deserializer)?;
        // Zero is representable on the wire: a fully consumed order in a
        // completion record keeps quantity bookkeeping explicit.
        if value >= 0 {
            Ok(Self(value))
        } else {
            Err(serde::de::Error::custom("Quantity cannot be negative"))
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_creation() {
        let price = Price::new(100);
        assert_eq!(price.as_i64(), 100);
    }

    #[test]
    #[should_panic(expected = "Price must be at least 1")]
    fn test_price_zero_panics() {
        Price::new(0);
    }

    #[test]
    fn test_price_try_new() {
        assert!(Price::try_new(1).is_some());
        assert!(Price::try_new(0).is_none());
        assert!(Price::try_new(-5).is_none());
    }

    #[test]
    fn test_price_ordering() {
        assert!(Price::new(100) > Price::new(99));
        assert_eq!(Price::new(7), Price::new(7));
    }

    #[test]
    fn test_price_serialization() {
        let price = Price::new(50000);
        let json = serde_json::to_string(&price).unwrap();
        assert_eq!(json, "50000");

        let deserialized: Price = serde_json::from_str(&json).unwrap();
        assert_eq!(price, deserialized);
    }

    #[test]
    fn test_price_deserialize_rejects_zero() {
        assert!(serde_json::from_str::<Price>("0").is_err());
    }

    #[test]
    fn test_quantity_arithmetic() {
        let q1 = Quantity::new(10);
        let q2 = Quantity::new(4);

        assert_eq!((q1 - q2).as_i64(), 6);
        assert_eq!((q1 + q2).as_i64(), 14);
        assert!((q1 - q1).is_zero());
    }

    #[test]
    #[should_panic(expected = "Quantity subtraction would go negative")]
    fn test_quantity_underflow_panics() {
        let _ = Quantity::new(1) - Quantity::new(2);
    }

    #[test]
    fn test_quantity_deserialize_allows_zero() {
        let qty: Quantity = serde_json::from_str("0").unwrap();
        assert!(qty.is_zero());
        assert!(serde_json::from_str::<Quantity>("-1").is_err());
    }
}
