//! Core polyhedron types and parser configuration

use super::color::Color;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How the first line of the input is checked against the `OFF` keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderPolicy {
    /// Any first line is accepted and skipped
    #[default]
    Permissive,
    /// The left-trimmed first line must be exactly `OFF`
    Strict,
}

/// Configuration for parsing OFF text
///
/// The default configuration accepts any header line and validates vertex
/// references after parsing.
///
/// # Example
///
/// ```
/// use offmodel::{HeaderPolicy, ParserConfig};
///
/// let config = ParserConfig::new().with_strict_header();
/// assert_eq!(config.header_policy(), HeaderPolicy::Strict);
/// assert!(config.validates_references());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    header_policy: HeaderPolicy,
    validate_references: bool,
}

impl ParserConfig {
    /// Create a new parser configuration with permissive header and reference validation
    pub fn new() -> Self {
        Self {
            header_policy: HeaderPolicy::Permissive,
            validate_references: true,
        }
    }

    /// Set the header policy
    pub fn with_header_policy(mut self, policy: HeaderPolicy) -> Self {
        self.header_policy = policy;
        self
    }

    /// Require the first line to be the `OFF` keyword
    pub fn with_strict_header(self) -> Self {
        self.with_header_policy(HeaderPolicy::Strict)
    }

    /// Skip post-parse reference validation
    ///
    /// Out-of-range vertex-colour records are then ignored with a warning
    /// instead of failing the parse.
    pub fn without_reference_validation(mut self) -> Self {
        self.validate_references = false;
        self
    }

    /// The configured header policy
    pub fn header_policy(&self) -> HeaderPolicy {
        self.header_policy
    }

    /// Whether vertex references are validated after parsing
    pub fn validates_references(&self) -> bool {
        self.validate_references
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// A 3D vertex with x, y, z coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vertex {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
    /// Z coordinate
    pub z: f64,
}

impl Vertex {
    /// Create a new vertex
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// A polygonal face given as a loop of vertex ids
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Face {
    /// Vertex ids in loop order
    pub vertices: Vec<usize>,
}

impl Face {
    /// Create a new face from its vertex loop
    pub fn new(vertices: Vec<usize>) -> Self {
        Self { vertices }
    }

    /// Number of sides
    pub fn arity(&self) -> usize {
        self.vertices.len()
    }

    /// Boundary edges of the loop in canonical form, including the closing edge
    pub fn boundary_edges(&self) -> impl Iterator<Item = Edge> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |j| Edge::new(self.vertices[j], self.vertices[(j + 1) % n]))
    }
}

/// An undirected edge stored with the smaller vertex id first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Edge {
    /// Smaller vertex id
    pub v1: usize,
    /// Larger vertex id
    pub v2: usize,
}

impl Edge {
    /// Create a canonical edge from two vertex ids in either order
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            v1: a.min(b),
            v2: a.max(b),
        }
    }

    /// Whether `v1 <= v2` holds
    pub fn is_canonical(&self) -> bool {
        self.v1 <= self.v2
    }
}

/// Element counts of a polyhedron
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ModelSummary {
    /// Number of vertices
    pub vertices: usize,
    /// Number of edges (explicit and face-boundary)
    pub edges: usize,
    /// Number of faces
    pub faces: usize,
}

impl std::fmt::Display for ModelSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "V={} E={} F={}", self.vertices, self.edges, self.faces)
    }
}

/// A polyhedron read from OFF text
///
/// Colour vectors run parallel to their element vectors; `None` marks an
/// element without an explicit colour.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PolyhedronModel {
    /// Vertex positions, indexed by vertex id
    pub vertices: Vec<Vertex>,
    /// Faces in file order
    pub faces: Vec<Face>,
    /// Explicit edges followed by synthesized face-boundary edges
    pub edges: Vec<Edge>,
    /// Per-vertex colours
    pub vertices_color: Vec<Option<Color>>,
    /// Per-face colours
    pub faces_color: Vec<Option<Color>>,
    /// Per-edge colours
    pub edges_color: Vec<Option<Color>>,
    /// Text the parser consumed, after line-ending normalization
    pub raw_text: String,
    /// Display name, taken from the file stem when loaded from a file
    pub name: Option<String>,
}

impl PolyhedronModel {
    /// Create a new empty model
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of faces
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Vertex, edge and face counts
    pub fn summary(&self) -> ModelSummary {
        ModelSummary {
            vertices: self.vertex_count(),
            edges: self.edge_count(),
            faces: self.face_count(),
        }
    }

    /// Whether the model holds no elements at all
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.faces.is_empty() && self.edges.is_empty()
    }

    /// Append a vertex without colour and return its id
    pub fn push_vertex(&mut self, vertex: Vertex) -> usize {
        self.vertices.push(vertex);
        self.vertices_color.push(None);
        self.vertices.len() - 1
    }

    /// Append a face with an optional colour
    pub fn push_face(&mut self, face: Face, color: Option<Color>) {
        self.faces.push(face);
        self.faces_color.push(color);
    }

    /// Append an edge with an optional colour
    ///
    /// No de-duplication happens here; the parser and writers rely on the
    /// caller keeping the edge list unique.
    pub fn push_edge(&mut self, edge: Edge, color: Option<Color>) {
        self.edges.push(edge);
        self.edges_color.push(color);
    }

    /// Number of elements of each kind that carry an explicit colour
    pub fn explicit_color_counts(&self) -> ModelSummary {
        ModelSummary {
            vertices: self.vertices_color.iter().flatten().count(),
            edges: self.edges_color.iter().flatten().count(),
            faces: self.faces_color.iter().flatten().count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_is_canonical() {
        let e = Edge::new(5, 2);
        assert_eq!((e.v1, e.v2), (2, 5));
        assert!(e.is_canonical());
        assert_eq!(Edge::new(2, 5), e);
    }

    #[test]
    fn test_face_boundary_edges_wrap() {
        let face = Face::new(vec![3, 0, 1]);
        let edges: Vec<Edge> = face.boundary_edges().collect();
        assert_eq!(edges, vec![Edge::new(0, 3), Edge::new(0, 1), Edge::new(1, 3)]);
    }

    #[test]
    fn test_model_summary() {
        let mut model = PolyhedronModel::new();
        assert!(model.is_empty());
        model.push_vertex(Vertex::new(0.0, 0.0, 0.0));
        model.push_vertex(Vertex::new(1.0, 0.0, 0.0));
        model.push_edge(Edge::new(1, 0), Some(Color::Rgb([1.0, 0.0, 0.0])));

        let summary = model.summary();
        assert_eq!(summary, ModelSummary { vertices: 2, edges: 1, faces: 0 });
        assert_eq!(summary.to_string(), "V=2 E=1 F=0");
        assert_eq!(model.explicit_color_counts().edges, 1);
        assert_eq!(model.vertices_color, vec![None, None]);
    }

    #[test]
    fn test_parser_config_builder() {
        let config = ParserConfig::default();
        assert_eq!(config.header_policy(), HeaderPolicy::Permissive);
        assert!(config.validates_references());

        let config = ParserConfig::new()
            .with_strict_header()
            .without_reference_validation();
        assert_eq!(config.header_policy(), HeaderPolicy::Strict);
        assert!(!config.validates_references());
    }
}
