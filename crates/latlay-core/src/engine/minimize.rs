use serde::{Deserialize, Serialize};

/// Smallest line-search step still attempted before giving up on an
/// iteration.
const MIN_STEP: f64 = 1e-12;

/// Offset scale of the deterministic nudge applied to singular starting
/// points.
const NUDGE: f64 = 1e-3;

/// Settings of the descent loop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MinimizerConfig {
    pub max_iterations: usize,
    pub tolerance: f64,
    pub initial_step: f64,
}

impl Default for MinimizerConfig {
    fn default() -> Self {
        Self {
            max_iterations: 200,
            tolerance: 1e-7,
            initial_step: 1.0,
        }
    }
}

/// Best estimate found by [`minimize`]. Non-convergence is reported through
/// the `converged` flag, never as an error; the point is always usable.
#[derive(Debug, Clone, PartialEq)]
pub struct Minimum {
    pub point: Vec<f64>,
    pub value: f64,
    pub iterations: usize,
    pub converged: bool,
}

/// Steepest descent with a backtracking line search.
///
/// Each iteration walks along the normalized negative gradient, halving the
/// step until the objective strictly improves with a finite value. When no
/// gradient function is supplied, or the supplied one produces a non-finite
/// component, a central finite-difference estimate is used instead.
///
/// A starting point with a non-finite objective value is nudged by a small
/// deterministic, index-dependent offset before descending, so degenerate
/// starts (coincident coordinates) complete and symmetric ties break the
/// same way on every run.
pub fn minimize<F>(
    objective: F,
    gradient: Option<&dyn Fn(&[f64]) -> Vec<f64>>,
    initial: Vec<f64>,
    config: &MinimizerConfig,
) -> Minimum
where
    F: Fn(&[f64]) -> f64,
{
    let mut point = initial;
    let mut value = objective(&point);
    if !value.is_finite() {
        for (i, coordinate) in point.iter_mut().enumerate() {
            *coordinate += NUDGE * (i + 1) as f64;
        }
        value = objective(&point);
    }

    let mut iterations = 0;
    let mut converged = point.is_empty();
    for _ in 0..config.max_iterations {
        iterations += 1;

        let mut grad = match gradient {
            Some(gradient) => gradient(&point),
            None => numeric_gradient(&objective, &point),
        };
        if grad.iter().any(|g| !g.is_finite()) {
            grad = numeric_gradient(&objective, &point);
        }
        let norm = grad.iter().map(|g| g * g).sum::<f64>().sqrt();
        if !norm.is_finite() {
            break;
        }
        if norm < config.tolerance {
            converged = true;
            break;
        }

        let direction: Vec<f64> = grad.iter().map(|g| -g / norm).collect();
        let mut step = config.initial_step;
        let mut improvement = None;
        while step >= MIN_STEP {
            let candidate: Vec<f64> = point
                .iter()
                .zip(&direction)
                .map(|(x, d)| x + step * d)
                .collect();
            let candidate_value = objective(&candidate);
            if candidate_value.is_finite() && candidate_value < value {
                improvement = Some(value - candidate_value);
                point = candidate;
                value = candidate_value;
                break;
            }
            step *= 0.5;
        }

        match improvement {
            // No step of any size improves the objective: we are at a local
            // minimum along this direction.
            None => {
                converged = true;
                break;
            }
            Some(gain) if gain < config.tolerance => {
                converged = true;
                break;
            }
            Some(_) => {}
        }
    }

    Minimum {
        point,
        value,
        iterations,
        converged,
    }
}

/// Central-difference gradient estimate with a magnitude-scaled step.
pub fn numeric_gradient<F>(objective: &F, point: &[f64]) -> Vec<f64>
where
    F: Fn(&[f64]) -> f64,
{
    let mut grad = Vec::with_capacity(point.len());
    let mut probe = point.to_vec();
    for i in 0..point.len() {
        let h = 1e-6 * point[i].abs().max(1.0);
        probe[i] = point[i] + h;
        let forward = objective(&probe);
        probe[i] = point[i] - h;
        let backward = objective(&probe);
        probe[i] = point[i];
        grad.push((forward - backward) / (2.0 * h));
    }
    grad
}
