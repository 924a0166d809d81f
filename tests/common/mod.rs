//! Shared fixtures and assertions for integration tests

#![allow(dead_code)]

use offmodel::{Edge, PolyhedronModel};
use std::collections::HashSet;
use std::path::PathBuf;

/// The tetrahedron of Scenario A in the OFF format notes
pub const TETRAHEDRON: &str = "OFF
4 4
0 0 0
1 0 0
0 1 0
0 0 1
3 0 1 2
3 0 1 3
3 0 2 3
3 1 2 3
";

/// Path of a file under `test_files/`
pub fn test_file(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("test_files")
        .join(name)
}

/// Every face-boundary edge is present in canonical form
pub fn assert_edge_closure(model: &PolyhedronModel) {
    let edges: HashSet<Edge> = model.edges.iter().copied().collect();
    for (i, face) in model.faces.iter().enumerate() {
        for edge in face.boundary_edges() {
            assert!(
                edges.contains(&edge),
                "face {} boundary edge {:?} missing from edge list",
                i,
                edge
            );
        }
    }
}

/// No canonical pair appears twice and every edge is canonical
pub fn assert_unique_canonical_edges(model: &PolyhedronModel) {
    let mut seen = HashSet::new();
    for edge in &model.edges {
        assert!(edge.v1 <= edge.v2, "edge {:?} is not canonical", edge);
        assert!(seen.insert(*edge), "edge {:?} appears twice", edge);
    }
}

/// Colour vectors run parallel to their element vectors
pub fn assert_parallel_colors(model: &PolyhedronModel) {
    assert_eq!(model.vertices.len(), model.vertices_color.len());
    assert_eq!(model.faces.len(), model.faces_color.len());
    assert_eq!(model.edges.len(), model.edges_color.len());
}
