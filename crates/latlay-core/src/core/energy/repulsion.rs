use super::context::InformationContext;
use crate::core::geometry::{self, Axis, ProjectionRegime};
use crate::core::models::ids::ElementId;
use crate::core::models::layout::Layout;
use nalgebra::Point2;

/// Repulsion between every element and every covering edge it is not an
/// endpoint of: the sum of `1 / d` over all such pairs, where `d` is the
/// distance from the element to the edge segment. An element sitting on an
/// edge makes the energy infinite.
pub fn repulsive_energy(layout: &Layout) -> f64 {
    let mut total = 0.0;
    for element in layout.elements() {
        let Some(p) = layout.position(element) else {
            continue;
        };
        for (lower, upper) in layout.connections() {
            if element == lower || element == upper {
                continue;
            }
            let (Some(a), Some(b)) = (layout.position(lower), layout.position(upper)) else {
                continue;
            };
            total += 1.0 / geometry::point_segment_distance(&p, &a, &b);
        }
    }
    total
}

/// Derivative of the repulsive energy with respect to coordinate `axis` of
/// irreducible `n`.
///
/// Moving `n` translates every element at or below it, so a pair contributes
/// only when its three participants do not all move together. Pairs at zero
/// distance contribute nothing; the energy is already infinite there and the
/// descent step rejects such configurations on its own.
pub fn repulsive_force(
    layout: &Layout,
    context: &InformationContext<'_>,
    n: ElementId,
    axis: Axis,
) -> f64 {
    let mut total = 0.0;
    for element in layout.elements() {
        let Some(p) = layout.position(element) else {
            continue;
        };
        let delta_p = moves(context, element, n);
        for (lower, upper) in layout.connections() {
            if element == lower || element == upper {
                continue;
            }
            let delta_a = moves(context, lower, n);
            let delta_b = moves(context, upper, n);
            if delta_p == delta_a && delta_a == delta_b {
                continue;
            }
            let (Some(a), Some(b)) = (layout.position(lower), layout.position(upper)) else {
                continue;
            };
            total += pair_force(&p, &a, &b, delta_p, delta_a, delta_b, axis);
        }
    }
    total
}

fn moves(context: &InformationContext<'_>, element: ElementId, n: ElementId) -> f64 {
    if context.leq(element, n) { 1.0 } else { 0.0 }
}

/// Contribution `-d' / d^2` of a single element/edge pair, where `d'` is the
/// derivative of the element-to-segment distance under the given endpoint
/// movements.
fn pair_force(
    p: &Point2<f64>,
    a: &Point2<f64>,
    b: &Point2<f64>,
    delta_p: f64,
    delta_a: f64,
    delta_b: f64,
    axis: Axis,
) -> f64 {
    let regime = match geometry::projection_parameter(p, a, b) {
        None => ProjectionRegime::BeforeStart,
        Some(parameter) => geometry::classify_projection(parameter),
    };
    match regime {
        ProjectionRegime::BeforeStart => endpoint_force(p, a, delta_p, delta_a, axis),
        ProjectionRegime::PastEnd => endpoint_force(p, b, delta_p, delta_b, axis),
        ProjectionRegime::Within => {
            let e = b - a;
            let w = p - a;
            let cross = e.x * w.y - e.y * w.x;
            let l = e.norm();
            if cross == 0.0 || l == 0.0 {
                return 0.0;
            }
            let d = cross.abs() / l;
            let cross_t = match axis {
                Axis::X => delta_p * (-e.y) + delta_a * (e.y - w.y) + delta_b * w.y,
                Axis::Y => delta_p * e.x + delta_a * (w.x - e.x) + delta_b * (-w.x),
            };
            let l_t = (axis.of_vector(&e) / l) * (delta_b - delta_a);
            let d_t = cross.signum() * cross_t / l - cross.abs() * l_t / (l * l);
            -d_t / (d * d)
        }
    }
}

/// Distance derivative when the closest point on the segment is the endpoint
/// `q`: the pair behaves like two points at distance `|p - q|`.
fn endpoint_force(
    p: &Point2<f64>,
    q: &Point2<f64>,
    delta_p: f64,
    delta_q: f64,
    axis: Axis,
) -> f64 {
    let d = geometry::distance(p, q);
    if d == 0.0 {
        return 0.0;
    }
    let d_t = (axis.of_vector(&(p - q)) / d) * (delta_p - delta_q);
    -d_t / (d * d)
}
