//! Directed edge-list format for persisting k-mer graphs.
//!
//! A graph is written as a `strict digraph` with one statement per edge:
//!
//! ```text
//! strict digraph  {
//!     S0 -> S1 [ label = "A (0,1)" ];
//!     S1 -> S2 [ label = "C (0,1)" ];
//! }
//! ```
//!
//! Node ids are `S` followed by the node id of the [KmerGraph]. The label
//! holds the destination's leading symbol and the destination's organism
//! set. Writing then reading a graph preserves its nodes, edges and labels.
//!
//! # Quick API
//! * [write_file] - writes a [KmerGraph] to a file
//! * [to_dot_string] - renders a [KmerGraph] as a string
//! * [parse_file] - reads a file into an [EdgeGraph]
//! * [parse_str] - reads a string into an [EdgeGraph]
//!
//! # Full API
//! * [DotWriter] - writes to any [Write]
//! * [DotParser] - parses from any [ByteParser]

mod defs;
mod parser;
mod writer;

pub use self::parser::{DotParser, parse_edge_label};
pub use self::writer::DotWriter;

use crate::model::{EdgeGraph, KmerGraph};
use crate::parser::{ByteParser, ParsingError};
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

// ============================================================================
// QUICK WRITING API (pub)
// ============================================================================
/// Writes a graph to a file, replacing any existing file.
///
/// # Returns
/// The number of edge statements written.
pub fn write_file<P: AsRef<Path>>(path: P, graph: &KmerGraph) -> io::Result<usize> {
    let file = File::create(path.as_ref())?;
    let num_edges = DotWriter::new(file).write_graph(graph)?;
    log::info!("Wrote {} edges to {}", num_edges, path.as_ref().display());
    Ok(num_edges)
}

/// Renders a graph in the edge-list format.
pub fn to_dot_string(graph: &KmerGraph) -> String {
    let mut out = Vec::new();
    DotWriter::new(&mut out)
        .write_graph(graph)
        .expect("Writing into a Vec should not fail");
    String::from_utf8_lossy(&out).into_owned()
}

/// Writes a graph to any writer.
pub fn write_to<W: Write>(writer: W, graph: &KmerGraph) -> io::Result<usize> {
    DotWriter::new(writer).write_graph(graph)
}

// ============================================================================
// QUICK PARSING API (pub)
// ============================================================================
/// Reads a graph file.
///
/// An empty file yields an empty graph, against which every query returns
/// no organisms.
///
/// # Errors
/// Returns a [ParsingError] if the file cannot be read or parsed.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<EdgeGraph, ParsingError> {
    let mut byte_parser = ByteParser::for_file(path.as_ref())?;
    let graph = DotParser::new().parse(&mut byte_parser)?;
    log::info!(
        "Loaded {} nodes and {} edges from {}",
        graph.num_nodes(),
        graph.num_edges(),
        path.as_ref().display()
    );
    Ok(graph)
}

/// Reads a graph from a string.
pub fn parse_str<S: AsRef<str>>(dot: S) -> Result<EdgeGraph, ParsingError> {
    let mut byte_parser = ByteParser::for_str(dot.as_ref());
    DotParser::new().parse(&mut byte_parser)
}
