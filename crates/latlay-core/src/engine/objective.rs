use super::placement;
use crate::core::energy::context::InformationContext;
use crate::core::energy::params::EnergyWeights;
use crate::core::energy::term::EnergyTerm;
use crate::core::energy::{attraction, gravity, repulsion};
use crate::core::geometry::Axis;
use crate::core::models::layout::Layout;

/// The scalar objective and its gradient over the flattened placement
/// vector of the irreducible elements.
///
/// Every evaluation reconstructs the full diagram from the vector and sums
/// the weighted energy terms over it; the optimizer never sees individual
/// element positions.
pub struct CompositeObjective<'a> {
    context: &'a InformationContext<'a>,
    weights: EnergyWeights,
}

impl<'a> CompositeObjective<'a> {
    pub fn new(context: &'a InformationContext<'a>, weights: EnergyWeights) -> Self {
        Self { context, weights }
    }

    fn reconstruct(&self, coords: &[f64]) -> Option<Layout> {
        let placement = self.context.unflatten(coords);
        placement::layout_by_placement(self.context.lattice(), &placement).ok()
    }

    /// Weighted composite energy at the given placement vector. A vector
    /// that cannot be turned into a diagram rates as infinitely bad.
    pub fn energy(&self, coords: &[f64]) -> f64 {
        let Some(layout) = self.reconstruct(coords) else {
            return f64::INFINITY;
        };
        EnergyTerm::new(
            repulsion::repulsive_energy(&layout),
            attraction::attractive_energy(&layout),
            gravity::gravitational_energy(&layout, self.context),
        )
        .weighted(&self.weights)
    }

    /// Weighted composite gradient: entry `2i` is the x derivative and
    /// entry `2i + 1` the y derivative for the `i`-th irreducible.
    pub fn force(&self, coords: &[f64]) -> Vec<f64> {
        let Some(layout) = self.reconstruct(coords) else {
            return vec![0.0; coords.len()];
        };
        let mut grad = Vec::with_capacity(coords.len());
        for &n in self.context.irreducibles() {
            for axis in [Axis::X, Axis::Y] {
                let term = EnergyTerm::new(
                    repulsion::repulsive_force(&layout, self.context, n, axis),
                    attraction::attractive_force(&layout, self.context, n, axis),
                    gravity::gravitational_force(&layout, self.context, n, axis),
                );
                grad.push(term.weighted(&self.weights));
            }
        }
        grad
    }
}
