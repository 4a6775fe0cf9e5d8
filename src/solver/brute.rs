//! Exhaustive offset search.
//!
//! Tries offsets `0, 1, 2, ...` against every constraint. The pattern of
//! passing offsets repeats with the LCM of the cycle lengths, so the search
//! stops there. Slow, but simple enough to check the sieve against.

use super::constraints::ConstraintSet;
use super::traits::{OffsetSolver, Solution, SolverConfig, Strategy};
use crate::error::{SolveError, SolveResult};
use crate::types::Firewall;
use tracing::{debug, info};

/// Solver that scans offsets in increasing order.
#[derive(Debug, Clone, Default)]
pub struct BruteForceSolver {
    config: SolverConfig,
}

impl BruteForceSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }
}

impl OffsetSolver for BruteForceSolver {
    fn strategy(&self) -> Strategy {
        Strategy::Brute
    }

    fn solve(&self, firewall: &Firewall) -> SolveResult<Solution> {
        let constraints = ConstraintSet::from_firewall(firewall)?;
        let modulus = constraints.lcm()?;
        let limit = self.config.max_candidates;

        debug!(modulus, limit, "brute-force search");

        let mut tried = 0usize;
        for offset in 0..modulus {
            if tried == limit {
                return Err(SolveError::CandidateLimitExceeded { limit, modulus });
            }
            tried += 1;

            if constraints.allows(offset) {
                info!(offset, modulus, tried, "brute force solved");
                return Ok(Solution {
                    offset,
                    modulus,
                    strategy: Strategy::Brute,
                    scanners: firewall.len(),
                    moduli: constraints.len(),
                    peak_candidates: tried,
                });
            }
        }

        Err(SolveError::Unsatisfiable { modulus })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::SieveSolver;
    use crate::types::{Depth, Layer, Range};
    use rand::{Rng, SeedableRng};

    fn solve(pairs: &[(u64, u64)]) -> SolveResult<(u64, u64)> {
        let firewall = Firewall::from_pairs(pairs.iter().copied()).unwrap();
        BruteForceSolver::default().solve(&firewall).map(|s| s.pair())
    }

    #[test]
    fn test_sample_firewall() {
        assert_eq!(solve(&[(0, 3), (1, 2), (4, 4), (6, 4)]), Ok((10, 12)));
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(solve(&[]), Ok((0, 1)));
        assert_eq!(solve(&[(4, 1)]), Err(SolveError::AlwaysCaught { depth: 4 }));
        assert_eq!(
            solve(&[(0, 2), (1, 2)]),
            Err(SolveError::Unsatisfiable { modulus: 2 })
        );
    }

    #[test]
    fn test_search_limit() {
        let firewall = Firewall::from_pairs([(0, 2), (1, 3), (2, 4)]).unwrap();
        let solver = BruteForceSolver::new(SolverConfig::new().with_max_candidates(1));
        assert!(matches!(
            solver.solve(&firewall),
            Err(SolveError::CandidateLimitExceeded { limit: 1, .. })
        ));
    }

    #[test]
    fn test_agrees_with_sieve_on_random_firewalls() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(2017);
        let sieve = SieveSolver::default();
        let brute = BruteForceSolver::default();

        for _ in 0..200 {
            let count = rng.gen_range(0..8);
            let firewall: Firewall = (0..count)
                .map(|_| {
                    let depth = rng.gen_range(0..30);
                    let range = rng.gen_range(2..9);
                    Layer::new(Depth::new(depth), Range::new(range).unwrap())
                })
                .collect();

            let expected = brute.solve(&firewall).map(|s| s.pair());
            let actual = sieve.solve(&firewall).map(|s| s.pair());

            match (&expected, &actual) {
                (Ok(_), Ok(_)) => assert_eq!(actual, expected, "firewall:\n{}", firewall),
                (Err(SolveError::Unsatisfiable { .. }), Err(SolveError::Unsatisfiable { .. })) => {}
                _ => panic!(
                    "solvers disagree on\n{}: {:?} vs {:?}",
                    firewall, expected, actual
                ),
            }

            if let Ok((offset, _)) = actual {
                assert!(firewall.layers().all(|l| !l.catches_at(offset)));
                assert!((0..offset).all(|t| firewall.layers().any(|l| l.catches_at(t))));
            }
        }
    }
}
