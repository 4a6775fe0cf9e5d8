//! Solver trait abstraction.
//!
//! Defines a common interface for offset solvers so the CLI and the
//! benchmark harness can swap strategies, and tests can check one
//! solver against another.

use crate::error::SolveResult;
use crate::types::Firewall;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Available solving strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Incremental residue narrowing over a growing LCM (default).
    Sieve,
    /// Try every offset in turn until one passes.
    Brute,
}

impl Default for Strategy {
    fn default() -> Self {
        Self::Sieve
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sieve => write!(f, "sieve"),
            Self::Brute => write!(f, "brute"),
        }
    }
}

impl std::str::FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sieve" | "crt" => Ok(Self::Sieve),
            "brute" | "brute-force" => Ok(Self::Brute),
            _ => Err(format!("unknown strategy: {}", s)),
        }
    }
}

/// The smallest passing offset and the period it repeats with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    /// Smallest non-negative delay that avoids every scanner.
    pub offset: u64,
    /// LCM of all scanner cycle lengths; `offset + k * modulus` also passes.
    pub modulus: u64,
    /// Strategy that produced the result.
    pub strategy: Strategy,
    /// Number of scanners in the firewall.
    pub scanners: usize,
    /// Number of distinct cycle lengths.
    pub moduli: usize,
    /// Largest working set held during the search.
    pub peak_candidates: usize,
}

impl Solution {
    /// The `(offset, modulus)` pair.
    pub fn pair(&self) -> (u64, u64) {
        (self.offset, self.modulus)
    }
}

/// Limits shared by all solvers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// Upper bound on candidates held (sieve) or offsets tried (brute).
    pub max_candidates: usize,
}

impl SolverConfig {
    pub const DEFAULT_MAX_CANDIDATES: usize = 10_000_000;

    pub fn new() -> Self {
        Self {
            max_candidates: Self::DEFAULT_MAX_CANDIDATES,
        }
    }

    pub fn with_max_candidates(mut self, max_candidates: usize) -> Self {
        self.max_candidates = max_candidates;
        self
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Common interface for offset solvers.
///
/// # Example
///
/// ```
/// use clearpass::solver::{OffsetSolver, SieveSolver};
/// use clearpass::types::Firewall;
///
/// let firewall: Firewall = "0: 3\n1: 2\n4: 4\n6: 4".parse().unwrap();
/// let solution = SieveSolver::default().solve(&firewall).unwrap();
/// assert_eq!(solution.pair(), (10, 12));
/// ```
pub trait OffsetSolver {
    /// Strategy implemented by this solver.
    fn strategy(&self) -> Strategy;

    /// Find the smallest offset that passes every scanner in `firewall`.
    fn solve(&self, firewall: &Firewall) -> SolveResult<Solution>;
}

/// A boxed solver for dynamic dispatch.
pub type BoxedSolver = Box<dyn OffsetSolver>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_parse() {
        assert_eq!("sieve".parse::<Strategy>().unwrap(), Strategy::Sieve);
        assert_eq!("CRT".parse::<Strategy>().unwrap(), Strategy::Sieve);
        assert_eq!("brute".parse::<Strategy>().unwrap(), Strategy::Brute);
        assert!("fast".parse::<Strategy>().is_err());
    }

    #[test]
    fn test_strategy_display_matches_parse() {
        for s in [Strategy::Sieve, Strategy::Brute] {
            assert_eq!(s.to_string().parse::<Strategy>().unwrap(), s);
        }
    }
}
