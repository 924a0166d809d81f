//! Core validation functions for polyhedron models

use crate::error::{Error, Result};
use crate::model::PolyhedronModel;

/// Validates that every colour vector runs parallel to its element vector
pub fn validate_color_lengths(model: &PolyhedronModel) -> Result<()> {
    let pairs = [
        ("vertex", model.vertices.len(), model.vertices_color.len()),
        ("face", model.faces.len(), model.faces_color.len()),
        ("edge", model.edges.len(), model.edges_color.len()),
    ];
    for (kind, elements, colors) in pairs {
        if elements != colors {
            return Err(Error::InvalidModel(format!(
                "{} {}s but {} {} colours; every {} needs a colour slot (None for no colour)",
                elements, kind, colors, kind, kind
            )));
        }
    }
    Ok(())
}

/// Validates face arity and vertex references
pub fn validate_faces(model: &PolyhedronModel) -> Result<()> {
    let num_vertices = model.vertices.len();

    for (face_idx, face) in model.faces.iter().enumerate() {
        if face.vertices.len() < 3 {
            return Err(Error::InvalidModel(format!(
                "Face {} has {} vertices; a face needs at least 3",
                face_idx,
                face.vertices.len()
            )));
        }
        if let Some(&bad) = face.vertices.iter().find(|&&v| v >= num_vertices) {
            return Err(Error::vertex_out_of_range(
                &format!("Face {}", face_idx),
                bad,
                num_vertices,
            ));
        }
    }

    Ok(())
}

/// Validates edge references and canonical ordering
pub fn validate_edges(model: &PolyhedronModel) -> Result<()> {
    let num_vertices = model.vertices.len();

    for (edge_idx, edge) in model.edges.iter().enumerate() {
        if !edge.is_canonical() {
            return Err(Error::InvalidModel(format!(
                "Edge {} ({}, {}) is not canonical; the smaller vertex id must come first",
                edge_idx, edge.v1, edge.v2
            )));
        }
        // v1 <= v2, so checking v2 covers both ends
        if edge.v2 >= num_vertices {
            return Err(Error::vertex_out_of_range(
                &format!("Edge {}", edge_idx),
                edge.v2,
                num_vertices,
            ));
        }
    }

    Ok(())
}
