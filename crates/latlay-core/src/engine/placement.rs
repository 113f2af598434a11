use super::error::EngineError;
use crate::core::models::ids::ElementId;
use crate::core::models::lattice::Lattice;
use crate::core::models::layout::Layout;
use nalgebra::{Point2, Vector2};
use std::collections::BTreeMap;

/// Reconstructs a full diagram from placement entries for the
/// infimum-irreducible elements alone.
///
/// The position of element `v` is the vector sum of the placement entries
/// of every irreducible at or above `v`; the top element has none and lands
/// at the origin. Changing a single irreducible's entry therefore translates
/// exactly its order ideal, leaving the rest of the diagram fixed. The
/// connections of the result are exactly the covering pairs of the lattice.
pub fn layout_by_placement(
    lattice: &Lattice,
    placement: &BTreeMap<ElementId, Point2<f64>>,
) -> Result<Layout, EngineError> {
    let irreducibles = lattice.inf_irreducibles();
    for &m in &irreducibles {
        if !placement.contains_key(&m) {
            return Err(EngineError::MissingPlacement { element: m });
        }
    }

    let mut positions = BTreeMap::new();
    for &v in lattice.elements() {
        let mut position = Vector2::zeros();
        for &m in &irreducibles {
            if lattice.leq(v, m) {
                position += placement[&m].coords;
            }
        }
        positions.insert(v, Point2::from(position));
    }

    let layout = Layout::new(positions, lattice.cover_pairs().clone())?;
    Ok(layout)
}
