use serde::{Deserialize, Serialize};

/// Relative weighting of the three energy terms in the composite objective.
///
/// Threaded as an explicit value through every energy and force computation;
/// there is no process-wide tunable state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnergyWeights {
    pub repulsive: f64,
    pub attractive: f64,
    pub gravitational: f64,
}

impl Default for EnergyWeights {
    fn default() -> Self {
        Self {
            repulsive: 500.0,
            attractive: 0.005,
            gravitational: 100.0,
        }
    }
}
