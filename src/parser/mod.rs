//! Low-level text parsing for the graph edge-list format.
//!
//! This module provides a byte-oriented [ByteParser] over a [ByteSource]
//! together with [ParsingError], which carries the byte position and a
//! snippet of the input for error reporting. The edge-list reader in
//! [crate::dot] is built on top of it.

pub mod byte_parser;
pub mod byte_source;
pub mod parsing_error;

pub use byte_parser::ByteParser;
pub use parsing_error::{ParsingError, ParsingErrorType};
