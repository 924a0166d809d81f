//! OFF text output
//!
//! Serializes a [`PolyhedronModel`] back into OFF text that this crate's
//! parser reads into an equivalent model.
//!
//! Edges implied by face boundaries are not written, since the parser
//! recreates them. Explicit edge records are emitted only for edges that
//! carry a colour or that no face implies. Colour channels are always written
//! with a decimal point so that they are read back unscaled.

use std::collections::HashSet;
use std::io::Write as IoWrite;

use crate::error::{Error, Result};
use crate::model::{Color, Edge, PolyhedronModel};

fn write_err(e: std::io::Error) -> Error {
    Error::Write(format!("Failed to write OFF output: {}", e))
}

/// Format one channel so that it always carries a decimal point
fn format_channel(c: f64) -> String {
    let text = format!("{:?}", c);
    match text.find('e') {
        Some(exp) if !text.contains('.') => format!("{}.0{}", &text[..exp], &text[exp..]),
        _ => text,
    }
}

/// Format one colour as space-separated float channels
fn format_color(color: &Color) -> String {
    color
        .channels()
        .iter()
        .map(|&c| format_channel(c))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Write a model as OFF text
pub fn write_off<W: IoWrite>(model: &PolyhedronModel, mut writer: W) -> Result<()> {
    let implied: HashSet<Edge> = model
        .faces
        .iter()
        .flat_map(|face| face.boundary_edges())
        .collect();

    writeln!(writer, "OFF").map_err(write_err)?;
    writeln!(
        writer,
        "{} {} {}",
        model.vertices.len(),
        model.faces.len(),
        model.edges.len()
    )
    .map_err(write_err)?;

    for v in &model.vertices {
        writeln!(writer, "{:?} {:?} {:?}", v.x, v.y, v.z).map_err(write_err)?;
    }

    for (i, face) in model.faces.iter().enumerate() {
        let ids = face
            .vertices
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        let written = match model.faces_color.get(i).copied().flatten() {
            Some(color) => writeln!(
                writer,
                "{} {} {}",
                face.arity(),
                ids,
                format_color(&color)
            ),
            None => writeln!(writer, "{} {}", face.arity(), ids),
        };
        written.map_err(write_err)?;
    }

    for (i, edge) in model.edges.iter().enumerate() {
        let color = model.edges_color.get(i).copied().flatten();
        let written = match color {
            Some(color) => writeln!(writer, "2 {} {} {}", edge.v1, edge.v2, format_color(&color)),
            None if !implied.contains(edge) => writeln!(writer, "2 {} {}", edge.v1, edge.v2),
            None => continue,
        };
        written.map_err(write_err)?;
    }

    for (i, color) in model.vertices_color.iter().enumerate() {
        if let Some(color) = color {
            writeln!(writer, "1 {} {}", i, format_color(color)).map_err(write_err)?;
        }
    }

    Ok(())
}

impl PolyhedronModel {
    /// Serialize the model as OFF text
    pub fn to_off_string(&self) -> Result<String> {
        let mut buffer = Vec::new();
        write_off(self, &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| Error::Write(format!("Non-UTF-8 output: {}", e)))
    }
}
