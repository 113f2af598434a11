use std::fmt;

/// Identifier of a lattice element within one layout/lattice pair.
///
/// Ids are assigned by the caller; their `Ord` instance gives every derived
/// enumeration (elements, irreducibles, cover pairs) a stable, deterministic
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementId(pub u32);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_follows_numeric_value() {
        assert!(ElementId(1) < ElementId(2));
        assert!(ElementId(10) > ElementId(9));
    }

    #[test]
    fn display_prefixes_numeric_value() {
        assert_eq!(ElementId(7).to_string(), "e7");
    }
}
