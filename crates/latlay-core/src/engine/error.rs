use crate::core::energy::context::ContextError;
use crate::core::models::ids::ElementId;
use crate::core::models::lattice::LatticeError;
use crate::core::models::layout::LayoutError;
use thiserror::Error;

/// Errors surfaced by the layout engine and its workflows.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),

    #[error("Lattice error: {0}")]
    Lattice(#[from] LatticeError),

    #[error("Context error: {0}")]
    Context(#[from] ContextError),

    #[error("No placement entry for irreducible element {element}")]
    MissingPlacement { element: ElementId },

    #[error("Element {element} has no position in the layout")]
    UnplacedElement { element: ElementId },
}
