//! Coin amounts in raw (indivisible) units.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw units per whole coin.
pub const COIN: u64 = 100_000_000;

/// A coin amount in raw units.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Amount(u64);

impl Amount {
    pub const ZERO: Self = Self(0);

    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub fn from_coins(coins: u64) -> Self {
        Self(coins * COIN)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:08}", self.0 / COIN, self.0 % COIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coin_conversion() {
        assert_eq!(Amount::from_coins(3).raw(), 3 * COIN);
        assert!(Amount::ZERO.is_zero());
        assert!(!Amount::from_raw(1).is_zero());
    }

    #[test]
    fn checked_arithmetic() {
        let a = Amount::from_raw(u64::MAX);
        assert!(a.checked_add(Amount::from_raw(1)).is_none());
        assert_eq!(
            Amount::from_raw(5).checked_sub(Amount::from_raw(2)),
            Some(Amount::from_raw(3))
        );
        assert!(Amount::from_raw(2).checked_sub(Amount::from_raw(5)).is_none());
    }

    #[test]
    fn display_format() {
        assert_eq!(Amount::from_raw(150_000_000).to_string(), "1.50000000");
    }
}
