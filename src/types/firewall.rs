//! Firewall description and its text format.
//!
//! The input format is one scanner per line:
//!
//! ```text
//! 0: 3
//! 1: 2
//! 4: 4
//! 6: 4
//! ```
//!
//! Blank lines are ignored. Depths must be unique and ranges at least 1.

use super::layer::{Depth, Layer, Range};
use crate::error::{FirewallError, FirewallResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// A set of scanners keyed by depth.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Firewall {
    layers: BTreeMap<Depth, Range>,
}

impl Firewall {
    /// Create an empty firewall.
    pub const fn new() -> Self {
        Self {
            layers: BTreeMap::new(),
        }
    }

    /// Build a firewall from `(depth, range)` pairs.
    ///
    /// Errors report the 1-based position of the offending pair as its line.
    pub fn from_pairs<I>(pairs: I) -> FirewallResult<Self>
    where
        I: IntoIterator<Item = (u64, u64)>,
    {
        let mut firewall = Self::new();
        for (idx, (depth, range)) in pairs.into_iter().enumerate() {
            firewall.insert_checked(idx + 1, depth, range)?;
        }
        Ok(firewall)
    }

    /// Read and parse a firewall file.
    pub fn load(path: impl AsRef<Path>) -> FirewallResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| FirewallError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        content.parse()
    }

    /// Add a scanner, replacing any scanner already at that depth.
    pub fn insert(&mut self, layer: Layer) -> Option<Range> {
        self.layers.insert(layer.depth, layer.range)
    }

    /// Look up the range of the scanner at `depth`.
    pub fn get(&self, depth: Depth) -> Option<Range> {
        self.layers.get(&depth).copied()
    }

    /// Iterate over the scanners in ascending depth order.
    pub fn layers(&self) -> impl Iterator<Item = Layer> + '_ {
        self.layers
            .iter()
            .map(|(&depth, &range)| Layer::new(depth, range))
    }

    /// Number of scanners.
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Deepest scanner, if any.
    pub fn max_depth(&self) -> Option<Depth> {
        self.layers.keys().next_back().copied()
    }

    fn insert_checked(&mut self, line: usize, depth: u64, range: u64) -> FirewallResult<()> {
        let range = match Range::new(range) {
            Some(r) => r,
            None if range == 0 => return Err(FirewallError::ZeroRange { line, depth }),
            None => {
                return Err(FirewallError::RangeTooLarge {
                    line,
                    depth,
                    range,
                    max: Range::MAX,
                })
            }
        };

        let depth = Depth::new(depth);
        if self.layers.contains_key(&depth) {
            return Err(FirewallError::DuplicateDepth {
                line,
                depth: depth.as_u64(),
            });
        }
        self.layers.insert(depth, range);
        Ok(())
    }
}

fn parse_number(line: usize, token: &str) -> FirewallResult<u64> {
    let token = token.trim();
    token.parse().map_err(|_| FirewallError::InvalidNumber {
        line,
        token: token.to_string(),
    })
}

impl FromStr for Firewall {
    type Err = FirewallError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut firewall = Self::new();

        for (idx, raw) in s.lines().enumerate() {
            let line = idx + 1;
            let content = raw.trim();
            if content.is_empty() {
                continue;
            }

            let (depth, range) =
                content
                    .split_once(':')
                    .ok_or_else(|| FirewallError::MissingColon {
                        line,
                        content: content.to_string(),
                    })?;

            let depth = parse_number(line, depth)?;
            let range = parse_number(line, range)?;
            firewall.insert_checked(line, depth, range)?;
        }

        Ok(firewall)
    }
}

impl fmt::Display for Firewall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for layer in self.layers() {
            writeln!(f, "{}", layer)?;
        }
        Ok(())
    }
}

impl FromIterator<Layer> for Firewall {
    fn from_iter<T: IntoIterator<Item = Layer>>(iter: T) -> Self {
        let mut firewall = Self::new();
        for layer in iter {
            firewall.insert(layer);
        }
        firewall
    }
}
