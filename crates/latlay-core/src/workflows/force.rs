use crate::core::energy::context::InformationContext;
use crate::core::models::lattice::Lattice;
use crate::core::models::layout::Layout;
use crate::engine::config::LayoutConfig;
use crate::engine::error::EngineError;
use crate::engine::minimize;
use crate::engine::objective::CompositeObjective;
use crate::engine::placement;
use tracing::{debug, info, instrument};

/// Runs one force-directed layout pass with the default configuration.
///
/// See [`force_layout_with_config`] for the pass structure.
pub fn force_layout(layout: &Layout) -> Result<Layout, EngineError> {
    force_layout_with_config(layout, &LayoutConfig::default())
}

/// Runs one force-directed layout pass.
///
/// The pass derives the lattice order from the layout's connectivity,
/// translates the diagram so the top element sits at the origin, descends
/// the composite energy over the irreducible placement vector, rebuilds the
/// full diagram from the optimized placements, and translates the result
/// back. The top element keeps its input coordinate exactly, and the
/// connections of the result are exactly the covering pairs of the derived
/// lattice.
///
/// The minimizer is invoked once; its best estimate is used whether or not
/// it converged.
#[instrument(skip_all, fields(elements = layout.len()))]
pub fn force_layout_with_config(
    layout: &Layout,
    config: &LayoutConfig,
) -> Result<Layout, EngineError> {
    let lattice = Lattice::from_layout(layout)?;
    let context = InformationContext::new(&lattice)?;
    info!(
        irreducibles = context.irreducibles().len(),
        connections = layout.connections().count(),
        "Starting force-directed layout pass"
    );

    let top = lattice.top();
    let top_position = layout
        .position(top)
        .ok_or(EngineError::UnplacedElement { element: top })?;
    let translated = layout.translated(&(-top_position.coords));
    let initial = context.flatten(&translated)?;

    let coords = if initial.is_empty() {
        initial
    } else {
        let objective = CompositeObjective::new(&context, config.weights);
        let minimum = minimize::minimize(
            |x: &[f64]| objective.energy(x),
            Some(&|x: &[f64]| objective.force(x)),
            initial,
            &config.minimizer,
        );
        debug!(
            iterations = minimum.iterations,
            converged = minimum.converged,
            energy = minimum.value,
            "Energy descent finished"
        );
        minimum.point
    };

    let placement = context.unflatten(&coords);
    let reconstructed = placement::layout_by_placement(&lattice, &placement)?;
    let result = reconstructed.translated(&top_position.coords);
    info!("Layout pass complete");
    Ok(result)
}
