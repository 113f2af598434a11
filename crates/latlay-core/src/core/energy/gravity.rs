use super::context::InformationContext;
use crate::core::geometry::{self, Axis};
use crate::core::models::ids::ElementId;
use crate::core::models::layout::Layout;
use std::f64::consts::PI;

/// Gravitational energy: penalizes edges from an irreducible to its upper
/// neighbour whose inclination drifts too close to horizontal.
///
/// With `φ` the inclination of the edge and `φ₀` the angle threshold of the
/// context, an edge inside the band `(φ₀, π - φ₀)` costs nothing. Outside the
/// band the cost grows without bound as the edge flattens, reaching `+∞` at
/// exactly horizontal. The constant offsets make the bands join continuously
/// at `φ₀` and `π - φ₀`.
pub fn gravitational_energy(layout: &Layout, context: &InformationContext<'_>) -> f64 {
    let phi0 = context.angle_threshold();
    let sin0_sq = phi0.sin().powi(2);
    let e0 = -phi0 - phi0.sin() * phi0.cos();
    let e1 = e0 + PI;
    let mut total = 0.0;
    for &m in context.irreducibles() {
        let Some(u) = context.upper_neighbor(m) else {
            continue;
        };
        let (Some(p), Some(q)) = (layout.position(m), layout.position(u)) else {
            continue;
        };
        let delta = q - p;
        let phi = delta.y.atan2(delta.x).clamp(0.0, PI);
        let value = if phi <= phi0 {
            phi + sin0_sq / phi.tan() + e0
        } else if phi >= PI - phi0 {
            -phi - sin0_sq / phi.tan() + e1
        } else {
            0.0
        };
        total += if value.is_finite() { value } else { f64::INFINITY };
    }
    total
}

/// Angular restoring force on coordinate `axis` of irreducible `n`.
///
/// Only edges whose lower end moves with `n` while the upper end stays put
/// contribute; an edge carried rigidly keeps its inclination. The force acts
/// perpendicular to the edge and vanishes inside the free band and at the
/// horizontal singularity.
pub fn gravitational_force(
    layout: &Layout,
    context: &InformationContext<'_>,
    n: ElementId,
    axis: Axis,
) -> f64 {
    let phi0 = context.angle_threshold();
    let sin0_sq = phi0.sin().powi(2);
    let mut total = 0.0;
    for &m in context.irreducibles() {
        if !context.leq(m, n) {
            continue;
        }
        let Some(u) = context.upper_neighbor(m) else {
            continue;
        };
        if context.leq(u, n) {
            continue;
        }
        let (Some(p), Some(q)) = (layout.position(m), layout.position(u)) else {
            continue;
        };
        let delta = q - p;
        let phi = delta.y.atan2(delta.x).clamp(0.0, PI);
        let sin_sq = phi.sin().powi(2);
        if sin_sq == 0.0 {
            continue;
        }
        let ratio = (sin_sq - sin0_sq) / sin_sq;
        let band = if phi <= phi0 {
            ratio
        } else if phi >= PI - phi0 {
            -ratio
        } else {
            continue;
        };
        let direction = geometry::rotate90(&geometry::unit_vector(&p, &q));
        total += band * axis.of_vector(&direction);
    }
    total
}
