//! Display colours for a parsed model
//!
//! The parser leaves colour slots empty when a file gives no colour. Before
//! display every slot needs a concrete RGBA value; [`resolve_colors`] builds
//! those from, in order of precedence, the [`ColorOverrides`], the explicit
//! colour in the file, and the [`DefaultColors`].

use std::collections::BTreeMap;

use crate::model::{Color, PolyhedronModel};

/// Fallback colours for elements without an explicit colour
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DefaultColors {
    /// Vertex colour
    pub vertex: Color,
    /// Edge colour
    pub edge: Color,
    /// Face colour
    pub face: Color,
}

impl Default for DefaultColors {
    fn default() -> Self {
        Self {
            vertex: Color::rgb(1.0, 0.5, 0.0),
            edge: Color::rgb(0.8, 0.6, 0.8),
            face: Color::rgb(0.8, 0.9, 0.9),
        }
    }
}

impl DefaultColors {
    /// One colour for every element kind
    pub fn uniform(color: Color) -> Self {
        Self {
            vertex: color,
            edge: color,
            face: color,
        }
    }
}

/// Colours that replace whatever the file says
///
/// # Example
///
/// ```
/// use offmodel::{Color, ColorOverrides};
///
/// let overrides = ColorOverrides::new()
///     .with_edge(Color::from_hex("#000000").unwrap())
///     .with_face_arity(5, Color::from_hex("#ff000080").unwrap());
/// assert!(overrides.edge.is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ColorOverrides {
    /// Replaces every vertex colour
    pub vertex: Option<Color>,
    /// Replaces every edge colour
    pub edge: Option<Color>,
    /// Replaces every face colour
    pub face: Option<Color>,
    /// Replaces the colour of faces with the given number of sides
    pub faces_by_arity: BTreeMap<usize, Color>,
}

impl ColorOverrides {
    /// No overrides
    pub fn new() -> Self {
        Self::default()
    }

    /// Override every vertex colour
    pub fn with_vertex(mut self, color: Color) -> Self {
        self.vertex = Some(color);
        self
    }

    /// Override every edge colour
    pub fn with_edge(mut self, color: Color) -> Self {
        self.edge = Some(color);
        self
    }

    /// Override every face colour
    pub fn with_face(mut self, color: Color) -> Self {
        self.face = Some(color);
        self
    }

    /// Override the colour of faces with `arity` sides
    ///
    /// Takes precedence over [`with_face`](Self::with_face).
    pub fn with_face_arity(mut self, arity: usize, color: Color) -> Self {
        self.faces_by_arity.insert(arity, color);
        self
    }
}

/// Concrete RGBA colour for every element of a model
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResolvedColors {
    /// Per-vertex colours
    pub vertices: Vec<[f64; 4]>,
    /// Per-edge colours
    pub edges: Vec<[f64; 4]>,
    /// Per-face colours
    pub faces: Vec<[f64; 4]>,
}

fn visible(colors: &[[f64; 4]]) -> impl Iterator<Item = usize> + '_ {
    colors
        .iter()
        .enumerate()
        .filter(|(_, c)| c[3] != 0.0)
        .map(|(i, _)| i)
}

impl ResolvedColors {
    /// Indices of vertices that are not fully transparent
    pub fn visible_vertices(&self) -> impl Iterator<Item = usize> + '_ {
        visible(&self.vertices)
    }

    /// Indices of edges that are not fully transparent
    pub fn visible_edges(&self) -> impl Iterator<Item = usize> + '_ {
        visible(&self.edges)
    }

    /// Indices of faces that are not fully transparent
    pub fn visible_faces(&self) -> impl Iterator<Item = usize> + '_ {
        visible(&self.faces)
    }
}

fn resolve(explicit: &Option<Color>, fallback: Color, forced: Option<Color>) -> [f64; 4] {
    forced.or(*explicit).unwrap_or(fallback).to_rgba()
}

/// Fill every colour slot of `model`, widening RGB to RGBA
///
/// The model is left untouched. Colour vectors shorter than their element
/// vectors (possible for hand-built models) are padded with defaults.
pub fn resolve_colors(
    model: &PolyhedronModel,
    defaults: &DefaultColors,
    overrides: &ColorOverrides,
) -> ResolvedColors {
    let vertices = (0..model.vertices.len())
        .map(|i| {
            let explicit = model.vertices_color.get(i).copied().flatten();
            resolve(&explicit, defaults.vertex, overrides.vertex)
        })
        .collect();

    let edges = (0..model.edges.len())
        .map(|i| {
            let explicit = model.edges_color.get(i).copied().flatten();
            resolve(&explicit, defaults.edge, overrides.edge)
        })
        .collect();

    let faces = model
        .faces
        .iter()
        .enumerate()
        .map(|(i, face)| {
            let explicit = model.faces_color.get(i).copied().flatten();
            let forced = overrides
                .faces_by_arity
                .get(&face.arity())
                .copied()
                .or(overrides.face);
            resolve(&explicit, defaults.face, forced)
        })
        .collect();

    ResolvedColors {
        vertices,
        edges,
        faces,
    }
}
