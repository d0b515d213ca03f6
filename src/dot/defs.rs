//! Constants for the textual graph format.

/// Opening line written before the edge statements
pub(crate) const GRAPH_HEADER: &[u8] = b"strict digraph  {";

/// Closing line written after the edge statements
pub(crate) const GRAPH_FOOTER: &[u8] = b"}";

/// Keyword marking a graph whose edges are unique
pub(crate) const STRICT: &str = "strict";

/// Keyword of directed graphs
pub(crate) const DIGRAPH: &str = "digraph";

/// Directed edge operator
pub(crate) const EDGE_OP: &[u8] = b"->";

/// Attribute carrying the edge label
pub(crate) const LABEL_ATTRIBUTE: &str = "label";
