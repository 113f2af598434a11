use super::ids::ElementId;
use super::layout::Layout;
use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LatticeError {
    #[error("Cannot derive a lattice from an empty layout")]
    EmptyLayout,
    #[error("Layout connectivity contains a cycle through {0}")]
    CyclicConnections(ElementId),
    #[error("Layout connectivity has no unique greatest element")]
    NoGreatestElement,
    #[error("Layout connectivity has no unique least element")]
    NoLeastElement,
}

/// Order-theoretic view of a finite lattice, derived from the connectivity
/// of a layout.
///
/// The order relation is the reflexive-transitive closure of the layout's
/// `(lower, upper)` connection pairs; the covering relation is recomputed
/// from that closure. Whether joins and meets exist for every pair is a
/// caller precondition and is not verified here.
#[derive(Debug, Clone, PartialEq)]
pub struct Lattice {
    elements: Vec<ElementId>,
    index: BTreeMap<ElementId, usize>,
    leq: Vec<Vec<bool>>,
    covers: BTreeSet<(ElementId, ElementId)>,
    top: ElementId,
    bottom: ElementId,
}

impl Lattice {
    /// Derives the lattice order from the connectivity of `layout`. Computed
    /// fresh on every call; this type does not own the layout's lifecycle.
    pub fn from_layout(layout: &Layout) -> Result<Self, LatticeError> {
        let elements: Vec<ElementId> = layout.elements().collect();
        if elements.is_empty() {
            return Err(LatticeError::EmptyLayout);
        }
        let index: BTreeMap<ElementId, usize> =
            elements.iter().enumerate().map(|(i, &e)| (e, i)).collect();
        let n = elements.len();

        let mut leq = vec![vec![false; n]; n];
        for (i, row) in leq.iter_mut().enumerate() {
            row[i] = true;
        }
        for (lower, upper) in layout.connections() {
            if let (Some(&i), Some(&j)) = (index.get(&lower), index.get(&upper)) {
                leq[i][j] = true;
            }
        }
        for k in 0..n {
            for i in 0..n {
                if leq[i][k] {
                    for j in 0..n {
                        if leq[k][j] {
                            leq[i][j] = true;
                        }
                    }
                }
            }
        }

        for i in 0..n {
            for j in (i + 1)..n {
                if leq[i][j] && leq[j][i] {
                    return Err(LatticeError::CyclicConnections(elements[i]));
                }
            }
        }

        let top_index = (0..n)
            .find(|&j| (0..n).all(|i| leq[i][j]))
            .ok_or(LatticeError::NoGreatestElement)?;
        let bottom_index = (0..n)
            .find(|&i| (0..n).all(|j| leq[i][j]))
            .ok_or(LatticeError::NoLeastElement)?;

        let mut covers = BTreeSet::new();
        for i in 0..n {
            for j in 0..n {
                if i == j || !leq[i][j] {
                    continue;
                }
                let has_intermediate =
                    (0..n).any(|k| k != i && k != j && leq[i][k] && leq[k][j]);
                if !has_intermediate {
                    covers.insert((elements[i], elements[j]));
                }
            }
        }

        Ok(Self {
            top: elements[top_index],
            bottom: elements[bottom_index],
            elements,
            index,
            leq,
            covers,
        })
    }

    pub fn elements(&self) -> &[ElementId] {
        &self.elements
    }

    pub fn top(&self) -> ElementId {
        self.top
    }

    pub fn bottom(&self) -> ElementId {
        self.bottom
    }

    /// Order predicate `a ≤ b`. Unknown elements compare as unrelated.
    pub fn leq(&self, a: ElementId, b: ElementId) -> bool {
        match (self.index.get(&a), self.index.get(&b)) {
            (Some(&i), Some(&j)) => self.leq[i][j],
            _ => false,
        }
    }

    pub fn lt(&self, a: ElementId, b: ElementId) -> bool {
        a != b && self.leq(a, b)
    }

    /// Covering predicate: `a` is directly neighboured below `b`.
    pub fn covers(&self, a: ElementId, b: ElementId) -> bool {
        self.covers.contains(&(a, b))
    }

    /// All covering pairs `(lower, upper)` of the lattice.
    pub fn cover_pairs(&self) -> &BTreeSet<(ElementId, ElementId)> {
        &self.covers
    }

    pub fn upper_covers(&self, element: ElementId) -> Vec<ElementId> {
        self.covers
            .iter()
            .filter(|&&(lower, _)| lower == element)
            .map(|&(_, upper)| upper)
            .collect()
    }

    /// Elements with exactly one upper cover, in stable element order. The
    /// positions of these determine the whole diagram.
    pub fn inf_irreducibles(&self) -> Vec<ElementId> {
        self.elements
            .iter()
            .copied()
            .filter(|&e| self.upper_covers(e).len() == 1)
            .collect()
    }

    /// The unique upper cover of `element`, if it has exactly one.
    pub fn upper_neighbor(&self, element: ElementId) -> Option<ElementId> {
        let uppers = self.upper_covers(element);
        match uppers.as_slice() {
            &[unique] => Some(unique),
            _ => None,
        }
    }

    /// Least upper bound of `a` and `b`, if one exists.
    pub fn join(&self, a: ElementId, b: ElementId) -> Option<ElementId> {
        let bounds: Vec<ElementId> = self
            .elements
            .iter()
            .copied()
            .filter(|&u| self.leq(a, u) && self.leq(b, u))
            .collect();
        bounds
            .iter()
            .copied()
            .find(|&u| bounds.iter().all(|&other| self.leq(u, other)))
    }

    /// Greatest lower bound of `a` and `b`, if one exists.
    pub fn meet(&self, a: ElementId, b: ElementId) -> Option<ElementId> {
        let bounds: Vec<ElementId> = self
            .elements
            .iter()
            .copied()
            .filter(|&l| self.leq(l, a) && self.leq(l, b))
            .collect();
        bounds
            .iter()
            .copied()
            .find(|&l| bounds.iter().all(|&other| self.leq(other, l)))
    }
}
