//! A fail-fast parser for GraphQL type-system (SDL) documents.
//!
//! Source text flows through a [`token_source::GraphQLTokenSource`] into a
//! [`GraphQLTokenStream`] (one token of lookahead), and from there into the
//! recursive-descent [`GraphQLParser`] which assembles an
//! [`ast::TypeSystemExtensionDocument`]. The first syntax error aborts the
//! parse; no partial document is ever returned.

pub mod ast;
mod graphql_error_note;
mod graphql_error_note_kind;
mod graphql_parse_error;
mod graphql_parse_error_kind;
mod graphql_parser;
mod graphql_source_span;
mod graphql_token_stream;
mod source;
mod source_position;
pub mod token;
pub mod token_source;

pub use graphql_error_note::GraphQLErrorNote;
pub use graphql_error_note::GraphQLErrorNotes;
pub use graphql_error_note_kind::GraphQLErrorNoteKind;
pub use graphql_parse_error::GraphQLParseError;
pub use graphql_parse_error_kind::GraphQLParseErrorKind;
pub use graphql_parser::GraphQLParser;
pub use graphql_parser::parse_source;
pub use graphql_source_span::GraphQLSourceSpan;
pub use graphql_token_stream::GraphQLTokenStream;
pub use smallvec::SmallVec;
pub use smallvec::smallvec;
pub use source::Source;
pub use source_position::SourcePosition;

/// Result type for every fallible parsing operation in this crate.
pub type Result<T> = std::result::Result<T, GraphQLParseError>;

#[cfg(test)]
mod tests;
