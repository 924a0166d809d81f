//! Data structures representing OFF polyhedra

mod color;
mod core;

pub use color::{Color, OPAQUE};
pub use self::core::{Edge, Face, HeaderPolicy, ModelSummary, ParserConfig, PolyhedronModel, Vertex};
