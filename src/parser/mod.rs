//! OFF text parsing
//!
//! Parsing runs in a fixed sequence of passes over the normalized text:
//!
//! 1. line-ending normalization and continuation joining
//! 2. header check (see [`HeaderPolicy`])
//! 3. the counts line
//! 4. the vertex block
//! 5. face, edge and vertex-colour records
//! 6. completion of the edge set from face boundaries
//!
//! Irregular input degrades to a partial model wherever the structure allows
//! it. A file that ends early is not an error. Numbers that cannot be read,
//! and a missing counts line, are.

mod core;
mod edges;

use crate::error::{Error, Result};
use crate::model::{HeaderPolicy, ParserConfig, PolyhedronModel};
use crate::validator;

use self::core::{Record, parse_counts, parse_record, parse_vertex};
use self::edges::EdgeSet;

/// Parse OFF text with the default configuration
///
/// # Example
///
/// ```
/// let text = "OFF\n3 1\n0 0 0\n1 0 0\n0 1 0\n3 0 1 2\n";
/// let model = offmodel::parser::parse_off(text).unwrap();
/// assert_eq!(model.summary().to_string(), "V=3 E=3 F=1");
/// ```
pub fn parse_off(text: &str) -> Result<PolyhedronModel> {
    parse_off_with_config(text, &ParserConfig::default())
}

/// Parse OFF text with a custom configuration
pub fn parse_off_with_config(text: &str, config: &ParserConfig) -> Result<PolyhedronModel> {
    let text = normalize_text(text);
    let mut model = PolyhedronModel::new();

    {
        let mut physical = text.split('\n').enumerate().map(|(i, l)| (i + 1, l));
        let header = physical.next().map(|(_, l)| l).unwrap_or_default();
        check_header(header, config.header_policy())?;

        let mut data = physical.filter_map(data_line);
        let (line_no, counts_line) = data.next().ok_or(Error::MissingCounts)?;
        let counts = parse_counts(line_no, counts_line)?;
        log::debug!(
            "OFF counts: {} vertices, {} faces, {:?} edges declared",
            counts.vertices,
            counts.faces,
            counts.edges
        );

        if counts.vertices > 0 {
            for (line_no, line) in data.by_ref() {
                model.push_vertex(parse_vertex(line_no, line)?);
                if model.vertices.len() >= counts.vertices {
                    break;
                }
            }
        }
        if model.vertices.len() < counts.vertices {
            log::debug!(
                "input ended after {} of {} declared vertices",
                model.vertices.len(),
                counts.vertices
            );
        }

        let mut edges = EdgeSet::new();
        for (line_no, line) in data {
            match parse_record(line_no, line)? {
                Record::Face(face, color) => model.push_face(face, color),
                Record::Edge(edge, color) => {
                    if !edges.insert(edge, color) {
                        log::debug!("line {}: duplicate edge {:?} ignored", line_no, edge);
                    }
                }
                Record::VertexColor(id, Some(color)) => {
                    let vertex_count = model.vertices.len();
                    match model.vertices_color.get_mut(id) {
                        Some(slot) => *slot = Some(color),
                        None if config.validates_references() => {
                            return Err(Error::vertex_out_of_range(
                                &format!("Vertex colour record on line {}", line_no),
                                id,
                                vertex_count,
                            ));
                        }
                        None => log::warn!(
                            "line {}: colour for missing vertex {} ignored",
                            line_no,
                            id
                        ),
                    }
                }
                Record::VertexColor(_, None) | Record::Skip => {}
            }
        }
        if model.faces.len() != counts.faces {
            log::debug!(
                "read {} faces, {} declared",
                model.faces.len(),
                counts.faces
            );
        }

        let added = edges.complete_from_faces(&model.faces);
        log::debug!("synthesized {} face-boundary edges", added);
        let (edges, edges_color) = edges.into_parts();
        model.edges = edges;
        model.edges_color = edges_color;
    }

    model.raw_text = text;

    if config.validates_references() {
        validator::validate_model(&model)?;
    }

    Ok(model)
}

/// Normalize line endings and join continued lines
///
/// CRLF becomes LF, then every backslash-newline pair is removed so that a
/// logical line split across physical lines reads as one.
pub fn normalize_text(text: &str) -> String {
    let mut text = if text.contains("\r\n") {
        text.replace("\r\n", "\n")
    } else {
        text.to_string()
    };
    if text.contains("\\\n") {
        text = text.replace("\\\n", "");
    }
    text
}

fn check_header(header: &str, policy: HeaderPolicy) -> Result<()> {
    match policy {
        HeaderPolicy::Permissive => {
            if header.trim_start() != "OFF" {
                log::debug!("accepting non-standard header {:?}", header);
            }
            Ok(())
        }
        HeaderPolicy::Strict if header.trim_start() == "OFF" => Ok(()),
        HeaderPolicy::Strict => Err(Error::InvalidHeader(format!(
            "first line is {:?}, expected \"OFF\"",
            header.trim_start()
        ))),
    }
}

/// Trim a line, dropping it when blank or a comment
fn data_line((line_no, line): (usize, &str)) -> Option<(usize, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        None
    } else {
        Some((line_no, line))
    }
}
