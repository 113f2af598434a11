use crate::error::{CliError, Result};
use latlay::core::models::ids::ElementId;
use latlay::core::models::layout::Layout;
use latlay::engine::error::EngineError;
use nalgebra::Point2;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::io::{Read, Write};
use std::path::Path;
use std::{fs, io};

/// On-disk layout document: named nodes with coordinates plus the
/// `(lower, upper)` covering edges between them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutDocument {
    pub nodes: BTreeMap<String, [f64; 2]>,
    #[serde(default)]
    pub edges: Vec<[String; 2]>,
}

impl LayoutDocument {
    /// Interns node names to [`ElementId`]s in sorted name order and builds
    /// the layout. The returned name table maps ids back to names.
    pub fn to_layout(&self) -> Result<(Layout, Vec<String>)> {
        let mut index = BTreeMap::new();
        let mut positions = BTreeMap::new();
        for (i, (name, &[x, y])) in self.nodes.iter().enumerate() {
            let id = ElementId(i as u32);
            index.insert(name.as_str(), id);
            positions.insert(id, Point2::new(x, y));
        }

        let mut connections = BTreeSet::new();
        for [lower, upper] in &self.edges {
            let &l = index
                .get(lower.as_str())
                .ok_or_else(|| CliError::UnknownNode(lower.clone()))?;
            let &u = index
                .get(upper.as_str())
                .ok_or_else(|| CliError::UnknownNode(upper.clone()))?;
            connections.insert((l, u));
        }

        let layout = Layout::new(positions, connections).map_err(EngineError::from)?;
        let names = self.nodes.keys().cloned().collect();
        Ok((layout, names))
    }
}

/// Turns an optimized layout back into a document, using the name table
/// produced by [`LayoutDocument::to_layout`]. Ids outside the table fall
/// back to their display form.
pub fn from_layout(layout: &Layout, names: &[String]) -> LayoutDocument {
    let name_of = |id: ElementId| {
        names
            .get(id.0 as usize)
            .cloned()
            .unwrap_or_else(|| id.to_string())
    };
    let nodes = layout
        .positions()
        .map(|(id, position)| (name_of(id), [position.x, position.y]))
        .collect();
    let edges = layout
        .connections()
        .map(|(lower, upper)| [name_of(lower), name_of(upper)])
        .collect();
    LayoutDocument { nodes, edges }
}

/// Reads a layout document from `path`, or from stdin when `path` is `-`.
pub fn read_input(path: &Path) -> Result<LayoutDocument> {
    let content = if path == Path::new("-") {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        fs::read_to_string(path)?
    };
    let document = serde_json::from_str(&content)?;
    Ok(document)
}

/// Writes a layout document to `output`, or to stdout when none is given.
pub fn write_output(document: &LayoutDocument, output: Option<&Path>) -> Result<()> {
    let mut json = serde_json::to_string_pretty(document)?;
    json.push('\n');
    match output {
        Some(path) => fs::write(path, json)?,
        None => io::stdout().write_all(json.as_bytes())?,
    }
    Ok(())
}
