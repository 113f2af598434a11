use crate::core::models::ids::ElementId;
use crate::core::models::lattice::Lattice;
use crate::core::models::layout::Layout;
use nalgebra::Point2;
use std::collections::BTreeMap;
use std::f64::consts::PI;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContextError {
    #[error("Irreducible element {0} has no position in the layout")]
    UnplacedIrreducible(ElementId),
    #[error("Irreducible element {0} has no unique upper neighbour")]
    MissingUpperNeighbor(ElementId),
}

/// Per-pass bundle consumed by the energy and force computations: the
/// infimum-irreducible elements in the fixed order that defines the
/// optimizer's coordinate vector, their unique upper neighbours, and the
/// lattice order predicate.
///
/// Rebuilt once per optimization pass and read-only during it.
pub struct InformationContext<'a> {
    lattice: &'a Lattice,
    irreducibles: Vec<ElementId>,
    upper_neighbors: BTreeMap<ElementId, ElementId>,
}

impl<'a> InformationContext<'a> {
    pub fn new(lattice: &'a Lattice) -> Result<Self, ContextError> {
        let irreducibles = lattice.inf_irreducibles();
        let mut upper_neighbors = BTreeMap::new();
        for &m in &irreducibles {
            let upper = lattice
                .upper_neighbor(m)
                .ok_or(ContextError::MissingUpperNeighbor(m))?;
            upper_neighbors.insert(m, upper);
        }
        Ok(Self {
            lattice,
            irreducibles,
            upper_neighbors,
        })
    }

    pub fn lattice(&self) -> &Lattice {
        self.lattice
    }

    /// The irreducibles in coordinate-vector order: irreducible `i` owns the
    /// vector entries `2i` (x) and `2i + 1` (y).
    pub fn irreducibles(&self) -> &[ElementId] {
        &self.irreducibles
    }

    pub fn upper_neighbor(&self, element: ElementId) -> Option<ElementId> {
        self.upper_neighbors.get(&element).copied()
    }

    pub fn leq(&self, a: ElementId, b: ElementId) -> bool {
        self.lattice.leq(a, b)
    }

    /// Boundary angle `φ₀ = π / (1 + |irreducibles|)` of the gravitational
    /// bands.
    pub fn angle_threshold(&self) -> f64 {
        PI / (1.0 + self.irreducibles.len() as f64)
    }

    /// Flattens the irreducible positions of `layout` into
    /// `[x₁, y₁, x₂, y₂, …]`.
    pub fn flatten(&self, layout: &Layout) -> Result<Vec<f64>, ContextError> {
        let mut coords = Vec::with_capacity(2 * self.irreducibles.len());
        for &m in &self.irreducibles {
            let p = layout
                .position(m)
                .ok_or(ContextError::UnplacedIrreducible(m))?;
            coords.push(p.x);
            coords.push(p.y);
        }
        Ok(coords)
    }

    /// Inverse of [`InformationContext::flatten`]: turns vector entries back
    /// into an irreducible-to-position mapping.
    pub fn unflatten(&self, coords: &[f64]) -> BTreeMap<ElementId, Point2<f64>> {
        self.irreducibles
            .iter()
            .zip(coords.chunks_exact(2))
            .map(|(&m, chunk)| (m, Point2::new(chunk[0], chunk[1])))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::layout::Layout;
    use std::collections::{BTreeMap, BTreeSet};

    const BOTTOM: ElementId = ElementId(0);
    const A: ElementId = ElementId(1);
    const B: ElementId = ElementId(2);
    const TOP: ElementId = ElementId(3);

    fn diamond_layout() -> Layout {
        let positions = BTreeMap::from([
            (BOTTOM, Point2::new(0.0, 0.0)),
            (A, Point2::new(-1.0, 1.0)),
            (B, Point2::new(1.0, 1.0)),
            (TOP, Point2::new(0.0, 2.0)),
        ]);
        let connections = BTreeSet::from([(BOTTOM, A), (BOTTOM, B), (A, TOP), (B, TOP)]);
        Layout::new(positions, connections).unwrap()
    }

    #[test]
    fn irreducibles_keep_stable_element_order() {
        let layout = diamond_layout();
        let lattice = Lattice::from_layout(&layout).unwrap();
        let context = InformationContext::new(&lattice).unwrap();
        assert_eq!(context.irreducibles(), &[A, B]);
        assert_eq!(context.upper_neighbor(A), Some(TOP));
        assert_eq!(context.upper_neighbor(B), Some(TOP));
    }

    #[test]
    fn angle_threshold_shrinks_with_irreducible_count() {
        let layout = diamond_layout();
        let lattice = Lattice::from_layout(&layout).unwrap();
        let context = InformationContext::new(&lattice).unwrap();
        assert!((context.angle_threshold() - PI / 3.0).abs() < 1e-12);
    }

    #[test]
    fn flatten_orders_coordinates_by_irreducible_then_axis() {
        let layout = diamond_layout();
        let lattice = Lattice::from_layout(&layout).unwrap();
        let context = InformationContext::new(&lattice).unwrap();
        let coords = context.flatten(&layout).unwrap();
        assert_eq!(coords, vec![-1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn unflatten_inverts_flatten() {
        let layout = diamond_layout();
        let lattice = Lattice::from_layout(&layout).unwrap();
        let context = InformationContext::new(&lattice).unwrap();
        let coords = context.flatten(&layout).unwrap();
        let placement = context.unflatten(&coords);
        assert_eq!(placement.get(&A), Some(&Point2::new(-1.0, 1.0)));
        assert_eq!(placement.get(&B), Some(&Point2::new(1.0, 1.0)));
        assert_eq!(placement.len(), 2);
    }
}
