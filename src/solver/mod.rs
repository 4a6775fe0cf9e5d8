//! Solver module - finds the earliest delay that passes the firewall.
//!
//! The default [`SieveSolver`] narrows the set of passing residues one
//! cycle length at a time. [`BruteForceSolver`] scans offsets directly and
//! serves as a reference. Both sit behind the [`OffsetSolver`] trait.

pub mod brute;
pub mod constraints;
pub mod severity;
pub mod sieve;
pub mod traits;

pub use brute::BruteForceSolver;
pub use constraints::{checked_lcm, gcd, ConstraintSet};
pub use severity::{caught_layers, is_caught, severity, TripReport};
pub use sieve::{Narrowing, SieveSolver};
pub use traits::{BoxedSolver, OffsetSolver, Solution, SolverConfig, Strategy};

use crate::error::SolveResult;
use crate::types::Firewall;

/// Create a solver for the given strategy.
pub fn create_solver(strategy: Strategy, config: SolverConfig) -> BoxedSolver {
    match strategy {
        Strategy::Sieve => Box::new(SieveSolver::new(config)),
        Strategy::Brute => Box::new(BruteForceSolver::new(config)),
    }
}

/// Solve with the default sieve and limits.
pub fn solve(firewall: &Firewall) -> SolveResult<Solution> {
    SieveSolver::default().solve(firewall)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_solver() {
        for strategy in [Strategy::Sieve, Strategy::Brute] {
            let solver = create_solver(strategy, SolverConfig::default());
            assert_eq!(solver.strategy(), strategy);

            let firewall: Firewall = "0: 3\n1: 2\n4: 4\n6: 4".parse().unwrap();
            let solution = solver.solve(&firewall).unwrap();
            assert_eq!(solution.pair(), (10, 12));
            assert_eq!(solution.strategy, strategy);
        }
    }

    #[test]
    fn test_solve_default() {
        assert_eq!(solve(&Firewall::new()).unwrap().pair(), (0, 1));
    }
}
