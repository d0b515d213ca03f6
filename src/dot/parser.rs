//! Edge-list reader producing an [EdgeGraph].

use crate::dot::defs::{DIGRAPH, EDGE_OP, LABEL_ATTRIBUTE, STRICT};
use crate::model::edge_graph::NODE_ID_PREFIX;
use crate::model::{EdgeGraph, EdgeLabel, OrganismId, OrganismSet};
use crate::parser::ByteParser;
use crate::parser::ParsingError;
use crate::parser::byte_source::ByteSource;

// =#========================================================================#=
// DOT PARSER
// =#========================================================================#=
/// Parser for the directed edge-list format written by
/// [DotWriter](crate::dot::DotWriter).
///
/// # Format
/// * `graph ::= ['strict'] 'digraph' [name] '{' statement* '}'`
/// * `statement ::= node_id ['->' node_id] [attributes] [';']`
/// * `attributes ::= '[' (key '=' value [','|';'])* ']'`
/// * `node_id ::= 'S' digits`
///
/// Keywords are case-insensitive, and `//`, `#` and `/* */` comments may
/// appear wherever whitespace may. Every edge must carry a `label`
/// attribute of the form `"<symbol> (<id>,<id>,...)"`; other attributes
/// are ignored. Node statements without an edge only register the node.
///
/// Input that is empty apart from whitespace and comments yields an empty
/// graph.
///
/// # Example
/// ```
/// use kmertag::dot::DotParser;
/// use kmertag::parser::ByteParser;
///
/// let mut byte_parser = ByteParser::for_str("strict digraph {\n\tS0 -> S1 [ label = \"A (0,1)\" ];\n}\n");
/// let graph = DotParser::new().parse(&mut byte_parser).unwrap();
///
/// assert_eq!(graph.num_nodes(), 2);
/// assert_eq!(graph.edges()[0].label.symbol, b'A');
/// ```
#[derive(Debug, Default)]
pub struct DotParser {
    graph: EdgeGraph,
}

impl DotParser {
    /// Creates a new parser.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a complete graph.
    ///
    /// # Errors
    /// Returns a [ParsingError] if the input is not empty and does not
    /// follow the format.
    pub fn parse<S: ByteSource>(mut self, parser: &mut ByteParser<S>) -> Result<EdgeGraph, ParsingError> {
        parser.skip_comment_and_whitespace()?;
        if parser.is_eof() {
            return Ok(self.graph);
        }

        self.parse_header(parser)?;

        loop {
            parser.skip_comment_and_whitespace()?;
            if parser.consume_if(b'}') {
                break;
            }
            if parser.is_eof() {
                return Err(ParsingError::unexpected_eof(parser));
            }
            self.parse_statement(parser)?;
        }

        parser.skip_comment_and_whitespace()?;
        if !parser.is_eof() {
            return Err(ParsingError::invalid_edge_statement(
                parser,
                "Unexpected content after closing '}'".to_string(),
            ));
        }

        Ok(self.graph)
    }
}

// ============================================================================
// Grammar (private)
// ============================================================================
impl DotParser {
    /// Parses `['strict'] 'digraph' [name] '{'`.
    fn parse_header<S: ByteSource>(&mut self, parser: &mut ByteParser<S>) -> Result<(), ParsingError> {
        if parser.consume_if_word(STRICT) {
            parser.skip_comment_and_whitespace()?;
        }
        if !parser.consume_if_word(DIGRAPH) {
            return Err(ParsingError::missing_graph_header(parser));
        }
        parser.skip_comment_and_whitespace()?;

        // Optional graph name
        if parser.peek_is(b'"') {
            parser.parse_quoted_string()?;
        } else {
            parser.parse_identifier();
        }
        parser.skip_comment_and_whitespace()?;

        if !parser.consume_if(b'{') {
            return Err(ParsingError::missing_graph_header(parser));
        }
        Ok(())
    }

    /// Parses a node or edge statement including its optional `;`.
    fn parse_statement<S: ByteSource>(&mut self, parser: &mut ByteParser<S>) -> Result<(), ParsingError> {
        let source_name = Self::parse_node_id(parser)?;
        let source = self.graph.get_or_insert_node(&source_name);
        parser.skip_comment_and_whitespace()?;

        if parser.consume_if_sequence(EDGE_OP) {
            parser.skip_comment_and_whitespace()?;
            let target_name = Self::parse_node_id(parser)?;
            let target = self.graph.get_or_insert_node(&target_name);
            parser.skip_comment_and_whitespace()?;

            let Some(label_text) = Self::parse_attributes(parser)? else {
                return Err(ParsingError::invalid_edge_label(
                    parser,
                    format!("Edge {source_name} -> {target_name} has no label"),
                ));
            };
            let label = parse_edge_label(&label_text)
                .map_err(|msg| ParsingError::invalid_edge_label(parser, msg))?;
            // A strict digraph holds at most one edge per node pair; the first statement wins
            if self.graph.has_edge(source, target) {
                log::debug!("Merging repeated edge {source_name} -> {target_name}");
            } else {
                self.graph.add_edge(source, target, label);
            }
        } else {
            Self::parse_attributes(parser)?;
        }

        parser.skip_comment_and_whitespace()?;
        parser.consume_if(b';');
        Ok(())
    }

    /// Parses a node id `S<digits>`.
    fn parse_node_id<S: ByteSource>(parser: &mut ByteParser<S>) -> Result<String, ParsingError> {
        let id = parser.parse_identifier();
        let valid = id
            .strip_prefix(NODE_ID_PREFIX)
            .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()));

        if valid {
            Ok(id)
        } else if id.is_empty() && parser.is_eof() {
            Err(ParsingError::unexpected_eof(parser))
        } else {
            Err(ParsingError::invalid_node_id(
                parser,
                format!("Expected {NODE_ID_PREFIX}<number> but found {id:?}"),
            ))
        }
    }

    /// Parses an optional attribute list, returning the `label` value if present.
    fn parse_attributes<S: ByteSource>(parser: &mut ByteParser<S>) -> Result<Option<String>, ParsingError> {
        if !parser.consume_if(b'[') {
            return Ok(None);
        }

        let mut label = None;
        loop {
            parser.skip_comment_and_whitespace()?;
            if parser.consume_if(b']') {
                return Ok(label);
            }
            if parser.is_eof() {
                return Err(ParsingError::unexpected_eof(parser));
            }

            let key = parser.parse_identifier();
            if key.is_empty() {
                return Err(ParsingError::invalid_edge_statement(
                    parser,
                    "Expected attribute name".to_string(),
                ));
            }
            parser.skip_comment_and_whitespace()?;
            if !parser.consume_if(b'=') {
                return Err(ParsingError::invalid_edge_statement(
                    parser,
                    format!("Expected '=' after attribute {key}"),
                ));
            }
            parser.skip_comment_and_whitespace()?;

            let value = if parser.peek_is(b'"') {
                parser.parse_quoted_string()?
            } else {
                parser.parse_identifier()
            };
            if key.eq_ignore_ascii_case(LABEL_ATTRIBUTE) {
                label = Some(value);
            }

            parser.skip_comment_and_whitespace()?;
            if !parser.consume_if(b',') {
                parser.consume_if(b';');
            }
        }
    }
}

/// Parses an edge label of the form `<symbol> (<id>,<id>,...)`.
///
/// # Example
/// ```
/// use kmertag::dot::parse_edge_label;
///
/// let label = parse_edge_label("G (0, 2)").unwrap();
/// assert_eq!(label.symbol, b'G');
/// assert_eq!(label.organisms.len(), 2);
/// assert!(parse_edge_label("G ()").is_err());
/// ```
pub fn parse_edge_label(text: &str) -> Result<EdgeLabel, String> {
    let text = text.trim();
    let Some(&symbol) = text.as_bytes().first() else {
        return Err("Empty label".to_string());
    };
    if !symbol.is_ascii() {
        return Err(format!("Non-ASCII symbol in label {text:?}"));
    }

    let ids = text[1..]
        .trim_start()
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(|| format!("Expected '<symbol> (<ids>)' but found {text:?}"))?;

    let organisms = ids
        .split(',')
        .map(|id| id.trim().parse::<OrganismId>())
        .collect::<Result<OrganismSet, _>>()
        .map_err(|_| format!("Invalid organism ids in label {text:?}"))?;

    Ok(EdgeLabel::new(symbol, organisms))
}
