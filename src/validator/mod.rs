//! Post-parse model validation
//!
//! The parser itself never indexes into the vertex list, so faces and edges
//! may name vertices that do not exist. These checks turn that into an
//! [`Error::InvalidReference`](crate::Error::InvalidReference) before any
//! consumer indexes with the ids.

mod core;

pub use self::core::{validate_color_lengths, validate_edges, validate_faces};

use crate::error::Result;
use crate::model::PolyhedronModel;

/// Validate a model
///
/// Runs, in order: colour vector lengths, face references and arity, edge
/// references and canonical ordering. The first failure is returned.
pub fn validate_model(model: &PolyhedronModel) -> Result<()> {
    validate_color_lengths(model)?;
    validate_faces(model)?;
    validate_edges(model)?;
    Ok(())
}
