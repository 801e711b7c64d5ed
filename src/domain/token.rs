use std::fmt;

use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// Stable row identity. Assigned once per batch, never reused;
/// updates replace attribute values, never the id.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct TokenId(u32);

impl TokenId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[inline]
    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum Chain {
    Ethereum,
    Base,
}

/// One row of the discovery table: identity plus market attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenRecord {
    pub id: TokenId,
    pub name: String,
    pub symbol: String,
    pub chain: Chain,

    /// Current price. Never negative, never non-finite.
    pub price: f64,
    /// Price immediately before the latest tick. Exactly one tick of
    /// highlight, not a history.
    pub last_price: Option<f64>,
    /// Signed percent change over 24h.
    pub change_24h: f64,
    pub liquidity: f64,
    pub fdv: f64,
    /// Free-form short label, e.g. "42m".
    pub age: String,
    pub volume_5m: f64,
}

impl TokenRecord {
    /// Direction of the latest move, for the one-tick flash highlight.
    pub fn trend(&self) -> PriceTrend {
        match self.last_price {
            Some(last) if self.price > last => PriceTrend::Up,
            Some(last) if self.price < last => PriceTrend::Down,
            _ => PriceTrend::Flat,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceTrend {
    Up,
    Down,
    Flat,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(price: f64, last_price: Option<f64>) -> TokenRecord {
        TokenRecord {
            id: TokenId::new(1),
            name: "Test Token".to_string(),
            symbol: "TST1".to_string(),
            chain: Chain::Base,
            price,
            last_price,
            change_24h: 0.0,
            liquidity: 0.0,
            fdv: 0.0,
            age: "5m".to_string(),
            volume_5m: 0.0,
        }
    }

    #[test]
    fn trend_follows_last_price() {
        assert_eq!(record(2.0, Some(1.0)).trend(), PriceTrend::Up);
        assert_eq!(record(1.0, Some(2.0)).trend(), PriceTrend::Down);
        assert_eq!(record(1.0, Some(1.0)).trend(), PriceTrend::Flat);
    }

    #[test]
    fn trend_is_flat_before_first_tick() {
        assert_eq!(record(1.0, None).trend(), PriceTrend::Flat);
    }
}
