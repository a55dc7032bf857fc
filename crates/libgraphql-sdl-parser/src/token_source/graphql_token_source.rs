use crate::token::GraphQLToken;

/// Marker trait for [`GraphQLToken`] lexers.
///
/// Any iterator of tokens is a token source. The parser only ever sees one
/// through a [`GraphQLTokenStream`](crate::GraphQLTokenStream), which owns
/// lookahead and comment filtering.
///
/// Implementors are expected to:
/// - skip whitespace and commas
/// - emit `#` comments as [`GraphQLTokenKind::Comment`]
/// - emit [`GraphQLTokenKind::Error`] for malformed input
/// - finish with a single [`GraphQLTokenKind::Eof`]
///
/// [`GraphQLTokenKind::Comment`]: crate::token::GraphQLTokenKind::Comment
/// [`GraphQLTokenKind::Error`]: crate::token::GraphQLTokenKind::Error
/// [`GraphQLTokenKind::Eof`]: crate::token::GraphQLTokenKind::Eof
pub trait GraphQLTokenSource<'src>: Iterator<Item = GraphQLToken<'src>> {}

impl<'src, T> GraphQLTokenSource<'src> for T where T: Iterator<Item = GraphQLToken<'src>> {}
