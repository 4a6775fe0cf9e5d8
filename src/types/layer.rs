//! Scanner layer types.
//!
//! A [`Layer`] pairs the [`Depth`] a scanner sits at with the [`Range`] it
//! sweeps. The newtypes keep depths and ranges from being swapped and make a
//! zero range unrepresentable.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a scanner, equal to the time a probe reaches it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Depth(u64);

impl Depth {
    #[inline]
    pub const fn new(depth: u64) -> Self {
        Self(depth)
    }

    #[inline]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Depth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<u64> for Depth {
    fn from(depth: u64) -> Self {
        Self(depth)
    }
}

/// Number of cells a scanner sweeps back and forth over (at least 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct Range(u64);

impl Range {
    /// Smallest valid range.
    pub const MIN: u64 = 1;
    /// Largest range whose cycle length still fits in a `u64`.
    pub const MAX: u64 = u64::MAX / 2;

    /// Create a new Range, returning None if out of bounds.
    #[inline]
    pub const fn new(range: u64) -> Option<Self> {
        if range >= Self::MIN && range <= Self::MAX {
            Some(Self(range))
        } else {
            None
        }
    }

    #[inline]
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// Round-trip period of the scanner: `2 * range - 2`.
    ///
    /// A range of 1 yields 0: the scanner never leaves position zero.
    #[inline]
    pub const fn cycle_length(self) -> u64 {
        2 * self.0 - 2
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl TryFrom<u64> for Range {
    type Error = String;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| {
            format!(
                "range {} is out of bounds ({}-{})",
                value,
                Self::MIN,
                Self::MAX
            )
        })
    }
}

impl From<Range> for u64 {
    fn from(range: Range) -> Self {
        range.0
    }
}

/// A single scanner in the firewall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Layer {
    pub depth: Depth,
    pub range: Range,
}

impl Layer {
    pub const fn new(depth: Depth, range: Range) -> Self {
        Self { depth, range }
    }

    /// Period after which the scanner's position repeats.
    #[inline]
    pub const fn cycle_length(&self) -> u64 {
        self.range.cycle_length()
    }

    /// Offset, modulo the cycle length, at which this scanner strikes the probe.
    ///
    /// Returns None for a range-1 scanner, which strikes at every offset.
    pub fn forbidden_residue(&self) -> Option<u64> {
        match self.cycle_length() {
            0 => None,
            m => Some((m - self.depth.as_u64() % m) % m),
        }
    }

    /// Whether a probe leaving at `offset` is at this depth while the scanner is at the top.
    pub fn catches_at(&self, offset: u64) -> bool {
        match self.cycle_length() {
            0 => true,
            m => (u128::from(offset) + u128::from(self.depth.as_u64())) % u128::from(m) == 0,
        }
    }

    /// Penalty for being caught by this scanner.
    pub fn severity(&self) -> u64 {
        self.depth.as_u64().saturating_mul(self.range.as_u64())
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.depth, self.range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layer(depth: u64, range: u64) -> Layer {
        Layer::new(Depth::new(depth), Range::new(range).unwrap())
    }

    #[test]
    fn test_range_validation() {
        assert!(Range::new(0).is_none());
        assert!(Range::new(1).is_some());
        assert!(Range::new(Range::MAX).is_some());
        assert!(Range::new(Range::MAX + 1).is_none());
    }

    #[test]
    fn test_cycle_length() {
        assert_eq!(layer(0, 1).cycle_length(), 0);
        assert_eq!(layer(0, 2).cycle_length(), 2);
        assert_eq!(layer(0, 3).cycle_length(), 4);
        assert_eq!(layer(0, Range::MAX).cycle_length(), u64::MAX - 3);
    }

    #[test]
    fn test_forbidden_residue() {
        assert_eq!(layer(0, 3).forbidden_residue(), Some(0));
        assert_eq!(layer(1, 3).forbidden_residue(), Some(3));
        assert_eq!(layer(6, 4).forbidden_residue(), Some(0));
        assert_eq!(layer(4, 4).forbidden_residue(), Some(2));
        assert_eq!(layer(9, 1).forbidden_residue(), None);
    }

    #[test]
    fn test_catches_at() {
        let l = layer(1, 2);
        assert!(l.catches_at(1));
        assert!(!l.catches_at(0));
        assert!(l.catches_at(u64::MAX));
        assert!(layer(5, 1).catches_at(17));

        let wide = layer(3, Range::MAX);
        assert!(wide.catches_at(wide.cycle_length() - 3));
        assert!(!wide.catches_at(u64::MAX));
    }

    #[test]
    fn test_range_serde_rejects_zero() {
        assert!(serde_json::from_str::<Range>("0").is_err());
        let r: Range = serde_json::from_str("4").unwrap();
        assert_eq!(r.cycle_length(), 6);
    }
}
