//! Edge accumulation and completion
//!
//! Explicit edge records and face boundaries both feed one ordered set of
//! canonical edges. Insertion order is preserved: explicit edges in file
//! order, then boundary edges in face and loop order.

use std::collections::HashSet;

use crate::model::{Color, Edge, Face};

/// Ordered, de-duplicated edges with their colours
#[derive(Debug, Default)]
pub(crate) struct EdgeSet {
    edges: Vec<Edge>,
    colors: Vec<Option<Color>>,
    seen: HashSet<Edge>,
}

impl EdgeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an edge unless its canonical pair is already present
    ///
    /// Returns `false` for a duplicate; the first occurrence and its colour
    /// are kept.
    pub fn insert(&mut self, edge: Edge, color: Option<Color>) -> bool {
        let edge = Edge::new(edge.v1, edge.v2);
        if !self.seen.insert(edge) {
            return false;
        }
        self.edges.push(edge);
        self.colors.push(color);
        true
    }

    /// Add every missing boundary edge of `faces`, returning how many were added
    pub fn complete_from_faces(&mut self, faces: &[Face]) -> usize {
        let before = self.edges.len();
        for face in faces {
            for edge in face.boundary_edges() {
                self.insert(edge, None);
            }
        }
        self.edges.len() - before
    }

    pub fn into_parts(self) -> (Vec<Edge>, Vec<Option<Color>>) {
        (self.edges, self.colors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_deduplicates_undirected_pairs() {
        let mut set = EdgeSet::new();
        assert!(set.insert(Edge::new(3, 1), Some(Color::rgb(1.0, 0.0, 0.0))));
        assert!(!set.insert(Edge::new(1, 3), None));
        let (edges, colors) = set.into_parts();
        assert_eq!(edges, vec![Edge::new(1, 3)]);
        assert_eq!(colors, vec![Some(Color::rgb(1.0, 0.0, 0.0))]);
    }

    #[test]
    fn test_complete_square_with_explicit_diagonal() {
        let mut set = EdgeSet::new();
        set.insert(Edge::new(0, 2), None);
        set.insert(Edge::new(3, 0), None);
        let added = set.complete_from_faces(&[Face::new(vec![0, 1, 2, 3])]);
        assert_eq!(added, 3);
        let (edges, colors) = set.into_parts();
        assert_eq!(
            edges,
            vec![
                Edge::new(0, 2),
                Edge::new(0, 3),
                Edge::new(0, 1),
                Edge::new(1, 2),
                Edge::new(2, 3),
            ]
        );
        assert_eq!(colors.len(), edges.len());
    }

    #[test]
    fn test_shared_edges_between_faces_added_once() {
        let mut set = EdgeSet::new();
        let faces = [Face::new(vec![0, 1, 2]), Face::new(vec![2, 1, 3])];
        assert_eq!(set.complete_from_faces(&faces), 5);
    }
}
