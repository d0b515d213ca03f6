//! Edge-list file writing for [KmerGraph].

use crate::dot::defs::{GRAPH_FOOTER, GRAPH_HEADER};
use crate::model::edge_graph::NODE_ID_PREFIX;
use crate::model::{KmerGraph, join_organisms};
use std::io::{self, BufWriter, Write};

// =#========================================================================#=
// DOT WRITER
// =#========================================================================#=
/// Writer for a [KmerGraph] in the directed edge-list format.
///
/// # Format Structure
/// ```text
/// strict digraph  {
///     S0 -> S1 [ label = "A (0,1)" ];
///     ...
/// }
/// ```
/// Edges are emitted in breadth-first order from the terminator root (see
/// [KmerGraph::bfs_edges]); each label holds the destination's leading
/// symbol and its full organism set.
///
/// # Example
/// ```
/// use kmertag::dot::DotWriter;
/// use kmertag::model::KmerGraph;
///
/// let mut graph = KmerGraph::new();
/// let (root, _) = graph.merge_kmer("$", 1, 0);
/// let (a, _) = graph.merge_kmer("A$", 1, 0);
/// graph.add_edge(root, a);
/// graph.add_edge(a, root);
///
/// let mut out = Vec::new();
/// DotWriter::new(&mut out).write_graph(&graph).unwrap();
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "strict digraph  {\n\tS0 -> S1 [ label = \"A (0)\" ];\n\tS1 -> S0 [ label = \"$ (0)\" ];\n}\n"
/// );
/// ```
pub struct DotWriter<W: Write> {
    bw: BufWriter<W>,
}

// ============================================================================
// API (public)
// ============================================================================
impl<W: Write> DotWriter<W> {
    /// Creates a new writer.
    pub fn new(writer: W) -> Self {
        DotWriter {
            bw: BufWriter::new(writer),
        }
    }

    /// Writes the complete graph and flushes.
    ///
    /// # Returns
    /// The number of edge statements written.
    ///
    /// # Errors
    /// Returns an I/O error if writing fails
    pub fn write_graph(&mut self, graph: &KmerGraph) -> io::Result<usize> {
        let mut num_edges = 0;
        self.header()?;
        for (parent, child) in graph.bfs_edges() {
            self.edge(graph, parent, child)?;
            num_edges += 1;
        }
        self.footer()?;
        self.bw.flush()?;
        Ok(num_edges)
    }
}

// ============================================================================
// Statement Writing (private)
// ============================================================================
impl<W: Write> DotWriter<W> {
    fn header(&mut self) -> io::Result<&mut Self> {
        self.bw.write_all(GRAPH_HEADER)?;
        self.newline()
    }

    fn footer(&mut self) -> io::Result<&mut Self> {
        self.bw.write_all(GRAPH_FOOTER)?;
        self.newline()
    }

    /// Writes `\tS<parent> -> S<child> [ label = "<symbol> (<ids>)" ];`
    fn edge(&mut self, graph: &KmerGraph, parent: usize, child: usize) -> io::Result<&mut Self> {
        let node = &graph[child];
        writeln!(
            self.bw,
            "\t{NODE_ID_PREFIX}{parent} -> {NODE_ID_PREFIX}{child} [ label = \"{}{} ({})\" ];",
            escape_prefix(node.leading_symbol()),
            node.leading_symbol() as char,
            join_organisms(node.organisms())
        )?;
        Ok(self)
    }

    fn newline(&mut self) -> io::Result<&mut Self> {
        self.bw.write_all(b"\n")?;
        Ok(self)
    }
}

/// Backslash needed in front of a symbol inside a quoted label.
fn escape_prefix(symbol: u8) -> &'static str {
    if symbol == b'"' || symbol == b'\\' { "\\" } else { "" }
}
