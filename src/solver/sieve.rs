//! Incremental residue narrowing.
//!
//! The moduli share factors, so the Chinese Remainder Theorem does not apply
//! directly. Instead the solver keeps every offset below the running LCM that
//! passes the constraints folded so far. Folding a modulus `m` lifts each
//! survivor `c` (mod `lcm`) to `c, c + lcm, ...` below `lcm(lcm, m)` and then
//! drops the lifts that hit a forbidden residue of `m`. Filtering before the
//! lift would lose solutions whenever `m` and `lcm` share a factor.

use super::constraints::{gcd, ConstraintSet};
use super::traits::{OffsetSolver, Solution, SolverConfig, Strategy};
use crate::error::{SolveError, SolveResult};
use crate::types::Firewall;
use std::collections::BTreeSet;
use tracing::{debug, info};

/// Working state of the narrowing: surviving residues modulo `lcm`.
#[derive(Debug, Clone)]
pub struct Narrowing {
    candidates: Vec<u64>,
    lcm: u64,
    peak: usize,
    max_candidates: usize,
}

impl Narrowing {
    /// Start with no constraints: every offset is 0 modulo 1.
    pub fn new(max_candidates: usize) -> Self {
        Self {
            candidates: vec![0],
            lcm: 1,
            peak: 1,
            max_candidates,
        }
    }

    /// Fold one modulus and its forbidden residues into the candidate set.
    pub fn fold(&mut self, modulus: u64, forbidden: &BTreeSet<u64>) -> SolveResult<()> {
        debug_assert!(modulus > 0);

        let step = self.lcm;
        let lcm = (step / gcd(modulus, step))
            .checked_mul(modulus)
            .ok_or(SolveError::ModulusOverflow {
                lcm: step,
                modulus,
            })?;
        let lifts = lcm / step;

        let capacity = usize::try_from(lifts)
            .unwrap_or(usize::MAX)
            .saturating_mul(self.candidates.len())
            .min(self.max_candidates);
        let mut next = Vec::with_capacity(capacity);

        for &c in &self.candidates {
            for k in 0..lifts {
                // c < step, so c + k * step < lcm and cannot overflow.
                let x = c + k * step;
                if forbidden.contains(&(x % modulus)) {
                    continue;
                }
                if next.len() == self.max_candidates {
                    return Err(SolveError::CandidateLimitExceeded {
                        limit: self.max_candidates,
                        modulus,
                    });
                }
                next.push(x);
            }
        }

        debug!(
            modulus,
            lcm,
            before = self.candidates.len(),
            after = next.len(),
            "folded modulus"
        );

        if next.is_empty() {
            return Err(SolveError::Unsatisfiable { modulus });
        }

        self.peak = self.peak.max(next.len());
        self.candidates = next;
        self.lcm = lcm;
        Ok(())
    }

    /// Current accumulated LCM.
    pub fn lcm(&self) -> u64 {
        self.lcm
    }

    /// Surviving residues modulo [`Narrowing::lcm`], in no particular order.
    pub fn candidates(&self) -> &[u64] {
        &self.candidates
    }

    /// Largest candidate set seen so far.
    pub fn peak(&self) -> usize {
        self.peak
    }

    /// Smallest surviving residue.
    pub fn minimum(&self) -> Option<u64> {
        self.candidates.iter().min().copied()
    }
}

/// Solver that narrows residues modulus by modulus, smallest first.
#[derive(Debug, Clone, Default)]
pub struct SieveSolver {
    config: SolverConfig,
}

impl SieveSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Run the narrowing over an already-built constraint set.
    pub fn narrow(&self, constraints: &ConstraintSet) -> SolveResult<Narrowing> {
        let mut narrowing = Narrowing::new(self.config.max_candidates);
        for (modulus, forbidden) in constraints.iter() {
            narrowing.fold(modulus, forbidden)?;
        }
        Ok(narrowing)
    }
}

impl OffsetSolver for SieveSolver {
    fn strategy(&self) -> Strategy {
        Strategy::Sieve
    }

    fn solve(&self, firewall: &Firewall) -> SolveResult<Solution> {
        let constraints = ConstraintSet::from_firewall(firewall)?;
        let narrowing = self.narrow(&constraints)?;

        // fold() never leaves the set empty, and the initial set holds 0.
        let offset = narrowing.minimum().unwrap_or(0);

        info!(
            offset,
            modulus = narrowing.lcm(),
            scanners = firewall.len(),
            peak = narrowing.peak(),
            "sieve solved"
        );

        Ok(Solution {
            offset,
            modulus: narrowing.lcm(),
            strategy: Strategy::Sieve,
            scanners: firewall.len(),
            moduli: constraints.len(),
            peak_candidates: narrowing.peak(),
        })
    }
}
