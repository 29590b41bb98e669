pub mod transactions;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Monetary amount in thousandths of the currency unit.
///
/// The tracker backend speaks plain decimal numbers (`12.5`), so the wire
/// representation is converted at the serde boundary and arithmetic stays in
/// integers everywhere else.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Milliunits(i64);

impl Milliunits {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Largest magnitude that round-trips through the decimal wire format
    /// without losing digits.
    pub const MAX_EXACT: i64 = (1 << 53) - 1;

    /// Converts a decimal amount that is a whole number of milliunits.
    /// Returns `None` for finer precision, non-finite input or a magnitude
    /// above [`Milliunits::MAX_EXACT`].
    pub fn from_decimal(value: f64) -> Option<Self> {
        let scaled = value * 1000.0;
        let rounded = Self::round_decimal(value)?;
        if (scaled - rounded.0 as f64).abs() > 1e-6 {
            return None;
        }
        Some(rounded)
    }

    /// Converts a decimal amount, rounding to the nearest milliunit.
    /// Returns `None` for non-finite input or a magnitude above
    /// [`Milliunits::MAX_EXACT`].
    pub fn round_decimal(value: f64) -> Option<Self> {
        let scaled = (value * 1000.0).round();
        if !scaled.is_finite() || scaled.abs() > Self::MAX_EXACT as f64 {
            return None;
        }
        Some(Self(scaled as i64))
    }

    /// Largest accepted magnitude in whole currency units.
    pub fn max_decimal() -> f64 {
        Self::MAX_EXACT as f64 / 1000.0
    }

    pub fn inner(&self) -> i64 {
        self.0
    }

    pub fn as_decimal(&self) -> f64 {
        self.0 as f64 / 1000.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn abs(&self) -> Self {
        Self(self.0.saturating_abs())
    }
}

impl From<i64> for Milliunits {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<Milliunits> for i64 {
    fn from(value: Milliunits) -> Self {
        value.0
    }
}

impl std::ops::Add for Milliunits {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl std::iter::Sum for Milliunits {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self(0), |acc, x| acc + x)
    }
}

impl std::fmt::Display for Milliunits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 1000, (abs % 1000) / 10)
    }
}

impl Serialize for Milliunits {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(self.as_decimal())
    }
}

impl<'de> Deserialize<'de> for Milliunits {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        Self::round_decimal(value).ok_or_else(|| {
            serde::de::Error::custom(format!("amount {value} is out of range"))
        })
    }
}
