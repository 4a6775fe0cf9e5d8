//! Forbidden-residue constraints derived from a firewall.
//!
//! Every scanner with range `r > 1` forbids the offsets `t` with
//! `(t + depth) mod (2r - 2) == 0`. Scanners sharing a cycle length are
//! grouped under one modulus.

use crate::error::{SolveError, SolveResult};
use crate::types::Firewall;
use std::collections::{BTreeMap, BTreeSet};

/// Greatest common divisor.
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Least common multiple, or None on overflow. `lcm(0, x)` is 0.
pub fn checked_lcm(a: u64, b: u64) -> Option<u64> {
    if a == 0 || b == 0 {
        return Some(0);
    }
    (a / gcd(a, b)).checked_mul(b)
}

/// Forbidden residues grouped by modulus, in ascending modulus order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintSet {
    forbidden: BTreeMap<u64, BTreeSet<u64>>,
}

impl ConstraintSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive the constraints of every scanner in `firewall`.
    ///
    /// A range-1 scanner never leaves position zero, so no offset passes it;
    /// that is reported as [`SolveError::AlwaysCaught`].
    pub fn from_firewall(firewall: &Firewall) -> SolveResult<Self> {
        let mut set = Self::new();
        for layer in firewall.layers() {
            let residue = layer.forbidden_residue().ok_or(SolveError::AlwaysCaught {
                depth: layer.depth.as_u64(),
            })?;
            set.forbid(layer.cycle_length(), residue);
        }
        Ok(set)
    }

    /// Record that offsets congruent to `residue` mod `modulus` are struck.
    ///
    /// # Panics
    /// Panics if `modulus` is zero.
    pub fn forbid(&mut self, modulus: u64, residue: u64) {
        assert!(modulus > 0, "modulus must be positive");
        self.forbidden
            .entry(modulus)
            .or_default()
            .insert(residue % modulus);
    }

    /// Forbidden residues for `modulus`, if any scanner has that cycle length.
    pub fn forbidden(&self, modulus: u64) -> Option<&BTreeSet<u64>> {
        self.forbidden.get(&modulus)
    }

    /// Distinct moduli in ascending order.
    pub fn moduli(&self) -> impl Iterator<Item = u64> + '_ {
        self.forbidden.keys().copied()
    }

    /// `(modulus, forbidden residues)` pairs in ascending modulus order.
    pub fn iter(&self) -> impl Iterator<Item = (u64, &BTreeSet<u64>)> + '_ {
        self.forbidden.iter().map(|(&m, f)| (m, f))
    }

    /// Number of distinct moduli.
    pub fn len(&self) -> usize {
        self.forbidden.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forbidden.is_empty()
    }

    /// Whether `offset` avoids every forbidden residue.
    pub fn allows(&self, offset: u64) -> bool {
        self.forbidden
            .iter()
            .all(|(&m, f)| !f.contains(&(offset % m)))
    }

    /// LCM of all moduli; 1 for an empty set.
    pub fn lcm(&self) -> SolveResult<u64> {
        self.moduli().try_fold(1u64, |lcm, modulus| {
            checked_lcm(lcm, modulus).ok_or(SolveError::ModulusOverflow { lcm, modulus })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constraints(pairs: &[(u64, u64)]) -> SolveResult<ConstraintSet> {
        let firewall = Firewall::from_pairs(pairs.iter().copied()).unwrap();
        ConstraintSet::from_firewall(&firewall)
    }

    #[test]
    fn test_gcd_lcm() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(7, 0), 7);
        assert_eq!(gcd(0, 7), 7);
        assert_eq!(checked_lcm(4, 6), Some(12));
        assert_eq!(checked_lcm(1, 9), Some(9));
        assert_eq!(checked_lcm(u64::MAX, u64::MAX - 1), None);
    }

    #[test]
    fn test_sample_constraints() {
        let set = constraints(&[(0, 3), (1, 2), (4, 4), (6, 4)]).unwrap();
        assert_eq!(set.moduli().collect::<Vec<_>>(), vec![2, 4, 6]);
        assert_eq!(set.forbidden(2).unwrap().iter().copied().collect::<Vec<_>>(), vec![1]);
        assert_eq!(set.forbidden(4).unwrap().iter().copied().collect::<Vec<_>>(), vec![0]);
        assert_eq!(set.forbidden(6).unwrap().iter().copied().collect::<Vec<_>>(), vec![0, 2]);
        assert_eq!(set.lcm().unwrap(), 12);
    }

    #[test]
    fn test_shared_modulus_collects_both_residues() {
        let set = constraints(&[(0, 3), (5, 3)]).unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.forbidden(4).unwrap().iter().copied().collect::<Vec<_>>(), vec![0, 3]);
        assert!(!set.allows(0));
        assert!(set.allows(1));
        assert!(set.allows(2));
        assert!(!set.allows(3));
    }

    #[test]
    fn test_range_one_is_always_caught() {
        let err = constraints(&[(0, 3), (7, 1)]).unwrap_err();
        assert_eq!(err, SolveError::AlwaysCaught { depth: 7 });
    }

    #[test]
    fn test_empty_set() {
        let set = constraints(&[]).unwrap();
        assert!(set.is_empty());
        assert_eq!(set.lcm().unwrap(), 1);
        assert!(set.allows(0));
    }

    #[test]
    fn test_lcm_overflow() {
        let mut set = ConstraintSet::new();
        set.forbid(u64::MAX, 0);
        set.forbid(u64::MAX - 1, 0);
        assert!(matches!(set.lcm(), Err(SolveError::ModulusOverflow { .. })));
    }
}
