//! # offmodel
//!
//! A pure Rust reader for polyhedra in the OFF (Object File Format) text
//! format, as written by Antiprism and similar tools.
//!
//! The parser is tolerant: comments and blank lines may appear anywhere,
//! CRLF and LF line endings are both accepted, a trailing backslash continues
//! a line, and a file that ends early yields a partial model. Besides faces,
//! the reader understands explicit edge records (`2 a b`) and vertex-colour
//! records (`1 v r g b`), and completes the edge list with every edge implied
//! by a face boundary.
//!
//! ## Features
//!
//! - Pure Rust implementation with no unsafe code
//! - Vertices, faces, edges and per-element RGB/RGBA colours
//! - Reference validation of vertex ids
//! - Default-colour filling and overrides for display ([`color_fill`])
//! - OFF output ([`writer`])
//! - Display geometry helpers with the `mesh-ops` feature ([`mesh_ops`])
//!
//! ## Example
//!
//! ```
//! use offmodel::PolyhedronModel;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let text = "OFF
//! 4 4
//! 0 0 0
//! 1 0 0
//! 0 1 0
//! 0 0 1
//! 3 0 1 2
//! 3 0 1 3
//! 3 0 2 3
//! 3 1 2 3 255 0 0
//! ";
//! let model: PolyhedronModel = text.parse()?;
//!
//! println!("{}", model.summary());
//! assert_eq!(model.edge_count(), 6);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod color_fill;
pub mod error;
#[cfg(feature = "mesh-ops")]
pub mod mesh_ops;
pub mod model;
pub mod parser;
pub mod validator;
pub mod writer;

pub use color_fill::{ColorOverrides, DefaultColors, ResolvedColors, resolve_colors};
pub use error::{Error, Result};
pub use model::{
    Color, Edge, Face, HeaderPolicy, ModelSummary, ParserConfig, PolyhedronModel, Vertex,
};
pub use parser::{parse_off, parse_off_with_config};

use std::io::Read;
use std::path::Path;
use std::str::FromStr;

impl FromStr for PolyhedronModel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parser::parse_off(s)
    }
}

impl PolyhedronModel {
    /// Parse OFF text from a reader
    ///
    /// This method uses the default parser configuration: any header line is
    /// accepted and vertex references are validated.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use offmodel::PolyhedronModel;
    /// use std::fs::File;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let file = File::open("cube.off")?;
    /// let model = PolyhedronModel::from_reader(file)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_reader_with_config(reader, &ParserConfig::default())
    }

    /// Parse OFF text from a reader with custom configuration
    pub fn from_reader_with_config<R: Read>(mut reader: R, config: &ParserConfig) -> Result<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        let text = String::from_utf8(bytes)?;
        parser::parse_off_with_config(&text, config)
    }

    /// Read an OFF file, naming the model after the file stem
    ///
    /// # Example
    ///
    /// ```no_run
    /// use offmodel::PolyhedronModel;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let model = PolyhedronModel::from_file("polyhedra/U1.off")?;
    /// assert_eq!(model.name.as_deref(), Some("U1"));
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_file_with_config(path, &ParserConfig::default())
    }

    /// Read an OFF file with custom configuration
    pub fn from_file_with_config<P: AsRef<Path>>(path: P, config: &ParserConfig) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let mut model = Self::from_reader_with_config(file, config)?;
        model.name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned());
        Ok(model)
    }

    /// Write the model to an OFF file
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let mut out = std::io::BufWriter::new(file);
        writer::write_off(self, &mut out)?;
        std::io::Write::flush(&mut out)?;
        Ok(())
    }
}
