//! Trip severity for a probe leaving at a fixed offset.

use crate::types::{Firewall, Layer};
use serde::{Deserialize, Serialize};

/// Scanners that catch a probe leaving at `offset`, in depth order.
pub fn caught_layers(firewall: &Firewall, offset: u64) -> impl Iterator<Item = Layer> + '_ {
    firewall.layers().filter(move |l| l.catches_at(offset))
}

/// Whether any scanner catches a probe leaving at `offset`.
///
/// Not the same as `severity(..) == 0`: a catch at depth 0 costs nothing.
pub fn is_caught(firewall: &Firewall, offset: u64) -> bool {
    caught_layers(firewall, offset).next().is_some()
}

/// Sum of `depth * range` over the scanners that catch the probe.
pub fn severity(firewall: &Firewall, offset: u64) -> u64 {
    caught_layers(firewall, offset)
        .map(|l| l.severity())
        .fold(0u64, u64::saturating_add)
}

/// Outcome of one trip through the firewall.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripReport {
    pub offset: u64,
    pub severity: u64,
    pub caught: Vec<Layer>,
}

impl TripReport {
    pub fn new(firewall: &Firewall, offset: u64) -> Self {
        let caught: Vec<Layer> = caught_layers(firewall, offset).collect();
        let severity = caught
            .iter()
            .map(Layer::severity)
            .fold(0u64, u64::saturating_add);
        Self {
            offset,
            severity,
            caught,
        }
    }

    pub fn is_clean(&self) -> bool {
        self.caught.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Firewall {
        "0: 3\n1: 2\n4: 4\n6: 4".parse().unwrap()
    }

    #[test]
    fn test_sample_severity() {
        let firewall = sample();
        assert_eq!(severity(&firewall, 0), 24);
        let depths: Vec<u64> = caught_layers(&firewall, 0)
            .map(|l| l.depth.as_u64())
            .collect();
        assert_eq!(depths, vec![0, 6]);
    }

    #[test]
    fn test_depth_zero_catch_is_free_but_still_caught() {
        let firewall = sample();
        assert_eq!(severity(&firewall, 4), 0);
        assert!(is_caught(&firewall, 4));
        assert!(!is_caught(&firewall, 10));
    }

    #[test]
    fn test_trip_report() {
        let report = TripReport::new(&sample(), 0);
        assert_eq!(report.severity, 24);
        assert_eq!(report.caught.len(), 2);
        assert!(!report.is_clean());
        assert!(TripReport::new(&sample(), 10).is_clean());
    }

    #[test]
    fn test_range_one_always_catches() {
        let firewall: Firewall = "3: 1".parse().unwrap();
        assert!((0..10).all(|t| is_caught(&firewall, t)));
        assert_eq!(severity(&firewall, 5), 3);
    }
}
