//! Display geometry using nalgebra
//!
//! This module provides the measurements a viewer takes from a polyhedron
//! before drawing it:
//! - Centroid and bounding radius (for centring and fitting the view)
//! - Mean edge length (for sizing vertex spheres and edge cylinders)
//! - Triangulation of polygonal faces into a triangle list
//!
//! Every function checks vertex ids and reports an
//! [`Error::InvalidReference`] instead of panicking on hand-built models.

use crate::error::{Error, Result};
use crate::model::{Face, PolyhedronModel};
use nalgebra::{Point3, Vector3};

/// A triangle as three corner points
pub type Triangle3 = [Point3<f64>; 3];

fn point(model: &PolyhedronModel, owner: &str, id: usize) -> Result<Point3<f64>> {
    model
        .vertices
        .get(id)
        .map(|v| Point3::new(v.x, v.y, v.z))
        .ok_or_else(|| Error::vertex_out_of_range(owner, id, model.vertices.len()))
}

/// Average of all vertex positions, `None` for a model without vertices
pub fn centroid(model: &PolyhedronModel) -> Option<Point3<f64>> {
    if model.vertices.is_empty() {
        return None;
    }
    let sum = model
        .vertices
        .iter()
        .fold(Vector3::zeros(), |acc, v| acc + Vector3::new(v.x, v.y, v.z));
    Some(Point3::from(sum / model.vertices.len() as f64))
}

/// Largest distance of any vertex from the centroid
///
/// Returns 0.0 for a model without vertices.
pub fn bounding_radius(model: &PolyhedronModel) -> f64 {
    let Some(center) = centroid(model) else {
        return 0.0;
    };
    model
        .vertices
        .iter()
        .map(|v| nalgebra::distance(&center, &Point3::new(v.x, v.y, v.z)))
        .fold(0.0, f64::max)
}

/// Uniform scale that brings the bounding radius to `target_radius`
///
/// `None` when the model is empty or all vertices coincide.
pub fn display_scale(model: &PolyhedronModel, target_radius: f64) -> Option<f64> {
    let radius = bounding_radius(model);
    (radius > 0.0).then(|| target_radius / radius)
}

/// Mean length over all edges, `None` for a model without edges
pub fn mean_edge_length(model: &PolyhedronModel) -> Result<Option<f64>> {
    if model.edges.is_empty() {
        return Ok(None);
    }
    let mut total = 0.0;
    for (i, edge) in model.edges.iter().enumerate() {
        let owner = format!("Edge {}", i);
        let a = point(model, &owner, edge.v1)?;
        let b = point(model, &owner, edge.v2)?;
        total += nalgebra::distance(&a, &b);
    }
    Ok(Some(total / model.edges.len() as f64))
}

/// Centre of a face (average of its corners)
pub fn face_center(model: &PolyhedronModel, face: &Face) -> Result<Point3<f64>> {
    let mut sum = Vector3::zeros();
    for &id in &face.vertices {
        sum += point(model, "Face", id)?.coords;
    }
    Ok(Point3::from(sum / face.vertices.len().max(1) as f64))
}

/// Split every face into triangles
///
/// Triangles are kept as they are. A face with more sides is fanned around
/// its centre, giving one triangle per side, which stays correct for the
/// star-shaped faces common in polyhedron files. Output order follows face
/// order. Returns the triangles together with the index of the face each
/// one came from.
pub fn triangulate_faces(model: &PolyhedronModel) -> Result<Vec<(usize, Triangle3)>> {
    let mut triangles = Vec::with_capacity(model.faces.len() * 3);

    for (face_idx, face) in model.faces.iter().enumerate() {
        let owner = format!("Face {}", face_idx);
        let corners = face
            .vertices
            .iter()
            .map(|&id| point(model, &owner, id))
            .collect::<Result<Vec<_>>>()?;

        if corners.len() == 3 {
            triangles.push((face_idx, [corners[0], corners[1], corners[2]]));
            continue;
        }

        let center = face_center(model, face)?;
        let n = corners.len();
        for j in 0..n {
            triangles.push((face_idx, [center, corners[j], corners[(j + 1) % n]]));
        }
    }

    Ok(triangles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Edge, Vertex};

    fn unit_square() -> PolyhedronModel {
        let mut model = PolyhedronModel::new();
        for (x, y) in [(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)] {
            model.push_vertex(Vertex::new(x, y, 0.0));
        }
        model.push_face(Face::new(vec![0, 1, 2, 3]), None);
        for j in 0..4 {
            model.push_edge(Edge::new(j, (j + 1) % 4), None);
        }
        model
    }

    #[test]
    fn test_centroid_and_radius() {
        let model = unit_square();
        assert_eq!(centroid(&model), Some(Point3::new(1.0, 1.0, 0.0)));
        assert!((bounding_radius(&model) - 2.0_f64.sqrt()).abs() < 1e-12);
        let scale = display_scale(&model, 10.0).unwrap();
        assert!((scale - 10.0 / 2.0_f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_empty_model() {
        let model = PolyhedronModel::new();
        assert_eq!(centroid(&model), None);
        assert_eq!(bounding_radius(&model), 0.0);
        assert_eq!(display_scale(&model, 10.0), None);
        assert_eq!(mean_edge_length(&model).unwrap(), None);
    }

    #[test]
    fn test_square_fans_into_four_triangles() {
        let model = unit_square();
        let triangles = triangulate_faces(&model).unwrap();
        assert_eq!(triangles.len(), 4);
        assert!(triangles.iter().all(|(f, t)| *f == 0 && t[0] == Point3::new(1.0, 1.0, 0.0)));
        assert_eq!(mean_edge_length(&model).unwrap(), Some(2.0));
    }

    #[test]
    fn test_bad_reference_is_error() {
        let mut model = unit_square();
        model.faces[0].vertices[2] = 9;
        assert!(matches!(
            triangulate_faces(&model),
            Err(Error::InvalidReference(_))
        ));
    }
}
