use super::ids::ElementId;
use nalgebra::{Point2, Vector2};
use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("Connection ({0}, {1}) references an element without a position")]
    UnplacedConnection(ElementId, ElementId),
}

/// A line diagram of a finite lattice: a 2D position for every element plus
/// the set of covering edges to draw, each stored as a `(lower, upper)` pair.
///
/// Layouts are value types. Transformations such as [`Layout::translated`]
/// produce a new layout and leave the original untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    positions: BTreeMap<ElementId, Point2<f64>>,
    connections: BTreeSet<(ElementId, ElementId)>,
}

impl Layout {
    /// Builds a layout, checking that every connection endpoint has a
    /// position.
    pub fn new(
        positions: BTreeMap<ElementId, Point2<f64>>,
        connections: BTreeSet<(ElementId, ElementId)>,
    ) -> Result<Self, LayoutError> {
        for &(lower, upper) in &connections {
            if !positions.contains_key(&lower) || !positions.contains_key(&upper) {
                return Err(LayoutError::UnplacedConnection(lower, upper));
            }
        }
        Ok(Self {
            positions,
            connections,
        })
    }

    pub fn position(&self, element: ElementId) -> Option<Point2<f64>> {
        self.positions.get(&element).copied()
    }

    pub fn positions(&self) -> impl Iterator<Item = (ElementId, Point2<f64>)> + '_ {
        self.positions.iter().map(|(&e, &p)| (e, p))
    }

    pub fn elements(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.positions.keys().copied()
    }

    pub fn connections(&self) -> impl Iterator<Item = (ElementId, ElementId)> + '_ {
        self.connections.iter().copied()
    }

    pub fn connection_set(&self) -> &BTreeSet<(ElementId, ElementId)> {
        &self.connections
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// New layout with every position shifted by `offset`.
    pub fn translated(&self, offset: &Vector2<f64>) -> Layout {
        Layout {
            positions: self
                .positions
                .iter()
                .map(|(&e, &p)| (e, p + offset))
                .collect(),
            connections: self.connections.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Layout {
        let positions = BTreeMap::from([
            (ElementId(0), Point2::new(0.0, 0.0)),
            (ElementId(1), Point2::new(1.0, 1.0)),
            (ElementId(2), Point2::new(2.0, 0.0)),
        ]);
        let connections = BTreeSet::from([
            (ElementId(0), ElementId(1)),
            (ElementId(1), ElementId(2)),
        ]);
        Layout::new(positions, connections).unwrap()
    }

    #[test]
    fn new_accepts_connections_between_placed_elements() {
        let layout = triangle();
        assert_eq!(layout.len(), 3);
        assert_eq!(layout.connections().count(), 2);
    }

    #[test]
    fn new_rejects_connection_without_position() {
        let positions = BTreeMap::from([(ElementId(0), Point2::new(0.0, 0.0))]);
        let connections = BTreeSet::from([(ElementId(0), ElementId(9))]);
        let result = Layout::new(positions, connections);
        assert_eq!(
            result,
            Err(LayoutError::UnplacedConnection(ElementId(0), ElementId(9)))
        );
    }

    #[test]
    fn elements_iterate_in_id_order() {
        let layout = triangle();
        let elements: Vec<_> = layout.elements().collect();
        assert_eq!(elements, vec![ElementId(0), ElementId(1), ElementId(2)]);
    }

    #[test]
    fn translated_shifts_positions_and_keeps_connections() {
        let layout = triangle();
        let moved = layout.translated(&Vector2::new(1.0, -2.0));
        assert_eq!(moved.position(ElementId(0)), Some(Point2::new(1.0, -2.0)));
        assert_eq!(moved.position(ElementId(1)), Some(Point2::new(2.0, -1.0)));
        assert_eq!(moved.connection_set(), layout.connection_set());
    }

    #[test]
    fn translated_leaves_original_untouched() {
        let layout = triangle();
        let _ = layout.translated(&Vector2::new(5.0, 5.0));
        assert_eq!(layout.position(ElementId(0)), Some(Point2::new(0.0, 0.0)));
    }
}
