//! Line-level OFF parsing
//!
//! Each function here receives one trimmed data line together with its line
//! number, so that errors can point back into the text.

use crate::error::{Error, Result};
use crate::model::{Color, Edge, Face, Vertex};

/// Element counts declared on the counts line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Counts {
    pub vertices: usize,
    pub faces: usize,
    /// Declared but never relied upon; edges are recomputed
    pub edges: Option<usize>,
}

/// One record from the face block
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Record {
    /// `n > 2`: a face loop
    Face(Face, Option<Color>),
    /// `n == 2`: an explicit edge
    Edge(Edge, Option<Color>),
    /// `n == 1`: a colour assignment for an existing vertex
    VertexColor(usize, Option<Color>),
    /// `n <= 0`, or a record too short to use
    Skip,
}

/// Read an integer the way OFF writers emit them
///
/// Plain integer text is the norm, but some writers print indices as
/// integral floats (`"3.0"`), which are accepted too.
fn parse_integer(token: &str) -> Option<i64> {
    token.parse::<i64>().ok().or_else(|| {
        token
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite() && v.fract() == 0.0)
            .map(|v| v as i64)
    })
}

fn parse_index(line_no: usize, field: &str, token: &str) -> Result<usize> {
    parse_integer(token)
        .and_then(|v| usize::try_from(v).ok())
        .ok_or_else(|| Error::parse_error_at(line_no, field, token, "non-negative integer"))
}

/// Parse the counts line: `<vertices> <faces> [<edges>]`
///
/// The edge count is never relied upon, so a third token that is not a
/// count is ignored rather than failing the parse.
pub(crate) fn parse_counts(line_no: usize, line: &str) -> Result<Counts> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < 2 {
        return Err(Error::ParseError(format!(
            "Line {}: counts line '{}' needs at least a vertex and a face count",
            line_no, line
        )));
    }

    let vertices = parse_index(line_no, "vertex count", tokens[0])?;
    let faces = parse_index(line_no, "face count", tokens[1])?;
    let edges = tokens.get(2).and_then(|token| {
        let count = parse_integer(token).and_then(|v| usize::try_from(v).ok());
        if count.is_none() {
            log::debug!("line {}: ignoring unreadable edge count '{}'", line_no, token);
        }
        count
    });

    Ok(Counts {
        vertices,
        faces,
        edges,
    })
}

/// Parse a vertex line; tokens after the third are ignored
pub(crate) fn parse_vertex(line_no: usize, line: &str) -> Result<Vertex> {
    let mut tokens = line.split_whitespace();
    let mut coord = |name: &str| -> Result<f64> {
        let token = tokens.next().ok_or_else(|| {
            Error::ParseError(format!(
                "Line {}: vertex '{}' is missing its {} coordinate",
                line_no, line, name
            ))
        })?;
        token.parse::<f64>().map_err(|_| {
            Error::parse_error_at(
                line_no,
                &format!("vertex {} coordinate", name),
                token,
                "floating-point number",
            )
        })
    };

    let x = coord("x")?;
    let y = coord("y")?;
    let z = coord("z")?;
    Ok(Vertex::new(x, y, z))
}

fn parse_color(line_no: usize, tokens: &[&str]) -> Result<Option<Color>> {
    Color::from_tokens(tokens).map_err(|_| {
        Error::parse_error_at(line_no, "colour", &tokens.join(" "), "3 or 4 numeric channels")
    })
}

/// Parse one record of the face block
///
/// The first token selects the record type. Records that declare more ids
/// than they carry keep what is there when that still forms a face or an
/// edge, and are skipped otherwise.
pub(crate) fn parse_record(line_no: usize, line: &str) -> Result<Record> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some(&first) = tokens.first() else {
        return Ok(Record::Skip);
    };
    let selector = parse_integer(first)
        .ok_or_else(|| Error::parse_error_at(line_no, "record size", first, "integer"))?;

    match selector {
        n if n > 2 => {
            let declared = usize::try_from(n).unwrap_or(usize::MAX);
            let ids_end = declared.saturating_add(1).min(tokens.len());
            if ids_end - 1 < declared {
                log::warn!(
                    "line {}: face declares {} vertices but lists {}",
                    line_no,
                    declared,
                    ids_end - 1
                );
                if ids_end - 1 < 3 {
                    return Ok(Record::Skip);
                }
            }
            let ids = tokens[1..ids_end]
                .iter()
                .map(|t| parse_index(line_no, "face vertex index", t))
                .collect::<Result<Vec<_>>>()?;
            let color = parse_color(line_no, &tokens[ids_end..])?;
            Ok(Record::Face(Face::new(ids), color))
        }
        2 => {
            if tokens.len() < 3 {
                log::warn!("line {}: edge record needs two vertex ids", line_no);
                return Ok(Record::Skip);
            }
            let a = parse_index(line_no, "edge vertex index", tokens[1])?;
            let b = parse_index(line_no, "edge vertex index", tokens[2])?;
            let color = parse_color(line_no, &tokens[3..])?;
            Ok(Record::Edge(Edge::new(a, b), color))
        }
        1 => {
            if tokens.len() < 2 {
                log::warn!("line {}: vertex record needs a vertex id", line_no);
                return Ok(Record::Skip);
            }
            let id = parse_index(line_no, "vertex index", tokens[1])?;
            let color = parse_color(line_no, &tokens[2..])?;
            Ok(Record::VertexColor(id, color))
        }
        _ => Ok(Record::Skip),
    }
}
