use super::context::InformationContext;
use crate::core::geometry::{self, Axis};
use crate::core::models::ids::ElementId;
use crate::core::models::layout::Layout;

/// Spring energy of the covering edges: the sum of squared edge lengths.
/// A zero-length edge contributes zero.
pub fn attractive_energy(layout: &Layout) -> f64 {
    let mut total = 0.0;
    for (lower, upper) in layout.connections() {
        let (Some(p), Some(q)) = (layout.position(lower), layout.position(upper)) else {
            continue;
        };
        total += geometry::squared_length(&(q - p));
    }
    total
}

/// Derivative of the attractive energy with respect to coordinate `axis` of
/// irreducible `n`.
///
/// Moving `n` translates it together with every element below it, so only
/// edges with exactly one endpoint at or below `n` contribute.
pub fn attractive_force(
    layout: &Layout,
    context: &InformationContext<'_>,
    n: ElementId,
    axis: Axis,
) -> f64 {
    let mut total = 0.0;
    for (lower, upper) in layout.connections() {
        let lower_moves = context.leq(lower, n);
        let upper_moves = context.leq(upper, n);
        if lower_moves == upper_moves {
            continue;
        }
        let (Some(p), Some(q)) = (layout.position(lower), layout.position(upper)) else {
            continue;
        };
        let diff = axis.of_point(&p) - axis.of_point(&q);
        total += if lower_moves { 2.0 * diff } else { -2.0 * diff };
    }
    total
}
