use super::params::EnergyWeights;
use std::ops::{Add, AddAssign};

/// The three additive components of the layout energy, kept separate until
/// they are combined with a set of weights.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EnergyTerm {
    pub repulsive: f64,
    pub attractive: f64,
    pub gravitational: f64,
}

impl EnergyTerm {
    pub fn new(repulsive: f64, attractive: f64, gravitational: f64) -> Self {
        Self {
            repulsive,
            attractive,
            gravitational,
        }
    }

    /// Weighted sum of the terms. Terms with a zero weight are skipped
    /// rather than multiplied, so a disabled term can be infinite without
    /// turning the total into `0.0 * inf = NaN`.
    pub fn weighted(&self, weights: &EnergyWeights) -> f64 {
        let mut total = 0.0;
        for (value, weight) in [
            (self.repulsive, weights.repulsive),
            (self.attractive, weights.attractive),
            (self.gravitational, weights.gravitational),
        ] {
            if weight != 0.0 {
                total += weight * value;
            }
        }
        total
    }
}

impl Add for EnergyTerm {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            repulsive: self.repulsive + rhs.repulsive,
            attractive: self.attractive + rhs.attractive,
            gravitational: self.gravitational + rhs.gravitational,
        }
    }
}

impl AddAssign for EnergyTerm {
    fn add_assign(&mut self, rhs: Self) {
        self.repulsive += rhs.repulsive;
        self.attractive += rhs.attractive;
        self.gravitational += rhs.gravitational;
    }
}
