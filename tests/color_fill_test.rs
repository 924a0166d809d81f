//! Display colour resolution on parsed files

mod common;

use common::test_file;
use offmodel::{Color, ColorOverrides, DefaultColors, PolyhedronModel, resolve_colors};

#[test]
fn test_defaults_fill_missing_colours() {
    let model = PolyhedronModel::from_file(test_file("cube.off")).unwrap();
    let resolved = resolve_colors(&model, &DefaultColors::default(), &ColorOverrides::new());

    assert_eq!(resolved.vertices.len(), 8);
    assert_eq!(resolved.edges.len(), 13);
    assert_eq!(resolved.faces.len(), 6);

    assert_eq!(resolved.vertices[0], [1.0, 0.5, 0.0, 1.0]);
    assert_eq!(resolved.vertices[6], [1.0, 1.0, 1.0, 1.0]);
    assert_eq!(resolved.edges[0], [1.0, 1.0, 0.0, 1.0]);
    assert_eq!(resolved.edges[1], [0.8, 0.6, 0.8, 1.0]);
    assert_eq!(resolved.faces[3], [0.5, 0.5, 0.5, 0.75]);
    assert_eq!(resolved.faces[5], [0.8, 0.9, 0.9, 1.0]);
}

#[test]
fn test_transparent_face_is_hidden() {
    let model = PolyhedronModel::from_file(test_file("pyramid_crlf.off")).unwrap();
    let resolved = resolve_colors(&model, &DefaultColors::default(), &ColorOverrides::new());

    let visible: Vec<usize> = resolved.visible_faces().collect();
    assert_eq!(visible, vec![0, 2, 3, 4]);
    assert_eq!(resolved.visible_edges().count(), 8);
}

#[test]
fn test_overrides_from_hex_attributes() {
    let model = PolyhedronModel::from_file(test_file("pyramid_crlf.off")).unwrap();
    let overrides = ColorOverrides::new()
        .with_face(Color::from_hex("#00ff00").unwrap())
        .with_face_arity(4, Color::from_hex("#0000ff80").unwrap())
        .with_edge(Color::from_hex("#00000000").unwrap());
    let resolved = resolve_colors(&model, &DefaultColors::default(), &overrides);

    assert_eq!(resolved.faces[0], [0.0, 0.0, 1.0, 128.0 / 255.0]);
    // The override replaces the file's transparent colour
    assert_eq!(resolved.faces[1], [0.0, 1.0, 0.0, 1.0]);
    assert_eq!(resolved.visible_faces().count(), 5);
    assert_eq!(resolved.visible_edges().count(), 0);
}

#[test]
fn test_uniform_defaults() {
    let model = PolyhedronModel::from_file(test_file("tetrahedron.off")).unwrap();
    let grey = Color::rgb(0.5, 0.5, 0.5);
    let resolved = resolve_colors(&model, &DefaultColors::uniform(grey), &ColorOverrides::new());

    assert!(resolved.vertices.iter().all(|c| *c == [0.5, 0.5, 0.5, 1.0]));
    assert!(resolved.edges.iter().all(|c| *c == [0.5, 0.5, 0.5, 1.0]));
}
