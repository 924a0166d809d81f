//! Tests for OFF output
//!
//! Models are written with the writer and read back with the parser. Vertex,
//! face and colour data must survive unchanged. Edge order may differ after a
//! round trip, so edges are compared as sets.

mod common;

use common::{TETRAHEDRON, test_file};
use offmodel::{Color, Edge, PolyhedronModel, parse_off};
use std::collections::HashMap;

fn edge_colors(model: &PolyhedronModel) -> HashMap<Edge, Option<Color>> {
    model
        .edges
        .iter()
        .copied()
        .zip(model.edges_color.iter().copied())
        .collect()
}

fn assert_equivalent(a: &PolyhedronModel, b: &PolyhedronModel) {
    assert_eq!(a.vertices, b.vertices);
    assert_eq!(a.faces, b.faces);
    assert_eq!(a.vertices_color, b.vertices_color);
    assert_eq!(a.faces_color, b.faces_color);
    assert_eq!(edge_colors(a), edge_colors(b));
}

#[test]
fn test_round_trip_tetrahedron() {
    let model = parse_off(TETRAHEDRON).unwrap();
    let text = model.to_off_string().unwrap();
    assert!(text.starts_with("OFF\n4 4 6\n"));

    let reparsed = parse_off(&text).unwrap();
    assert_equivalent(&model, &reparsed);
}

#[test]
fn test_round_trip_cube_with_colours() {
    let model = PolyhedronModel::from_file(test_file("cube.off")).unwrap();
    let reparsed = parse_off(&model.to_off_string().unwrap()).unwrap();
    assert_equivalent(&model, &reparsed);
}

#[test]
fn test_round_trip_preserves_transparent_face() {
    let model = PolyhedronModel::from_file(test_file("pyramid_crlf.off")).unwrap();
    let reparsed = parse_off(&model.to_off_string().unwrap()).unwrap();
    assert_equivalent(&model, &reparsed);
    assert!(reparsed.faces_color[1].unwrap().is_transparent());
}

#[test]
fn test_write_to_file() {
    let model = parse_off(TETRAHEDRON).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tetra.off");

    model.write_to_file(&path).unwrap();
    let reparsed = PolyhedronModel::from_file(&path).unwrap();

    assert_eq!(reparsed.name.as_deref(), Some("tetra"));
    assert_equivalent(&model, &reparsed);
}

#[test]
fn test_integer_colours_written_as_floats() {
    let text = "OFF\n3 1\n0 0 0\n1 0 0\n0 1 0\n3 0 1 2 255 255 255\n";
    let model = parse_off(text).unwrap();
    let written = model.to_off_string().unwrap();
    assert!(written.contains("3 0 1 2 1.0 1.0 1.0\n"));
}
