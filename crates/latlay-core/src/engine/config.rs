use super::minimize::MinimizerConfig;
use crate::core::energy::params::EnergyWeights;
use serde::{Deserialize, Serialize};

/// Everything a layout pass can be tuned with: the term weights of the
/// composite energy and the descent settings.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    pub weights: EnergyWeights,
    pub minimizer: MinimizerConfig,
}
