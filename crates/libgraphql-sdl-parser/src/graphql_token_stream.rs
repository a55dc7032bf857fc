//! The parser's view of a [`GraphQLTokenSource`]: one token of lookahead plus
//! the small set of consume/require combinators every production is built
//! from.

use crate::GraphQLParseError;
use crate::GraphQLParseErrorKind;
use crate::GraphQLSourceSpan;
use crate::SourcePosition;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::token_source::GraphQLTokenSource;

/// A cursor over a [`GraphQLTokenSource`] with a single-slot lookahead
/// buffer.
///
/// `peek()` pulls the next significant token into the slot; `next()` takes
/// it back out (or pulls straight from the source when the slot is empty).
/// Comment tokens are dropped on the way in, so nothing above this layer
/// ever sees one.
///
/// Each stream exclusively owns its token source and slot, so independent
/// sources can be parsed on independent threads.
pub struct GraphQLTokenStream<'src, TTokenSource: GraphQLTokenSource<'src>> {
    token_source: TTokenSource,
    lookahead: Option<GraphQLToken<'src>>,

    /// End position of the most recently consumed token. Used to synthesize
    /// an `Eof` should a token source end without one.
    last_end: SourcePosition,
}

impl<'src, TTokenSource: GraphQLTokenSource<'src>> GraphQLTokenStream<'src, TTokenSource> {
    pub fn new(token_source: TTokenSource) -> Self {
        Self {
            token_source,
            lookahead: None,
            last_end: SourcePosition::start_of_document(),
        }
    }

    /// Consumes and returns the next token.
    pub fn next(&mut self) -> GraphQLToken<'src> {
        let token = match self.lookahead.take() {
            Some(token) => token,
            None => pull(&mut self.token_source, &self.last_end),
        };
        self.last_end = token.span.end_exclusive.clone();
        token
    }

    /// Returns the next token without consuming it.
    pub fn peek(&mut self) -> &GraphQLToken<'src> {
        let Self { token_source, lookahead, last_end } = self;
        lookahead.get_or_insert_with(|| pull(token_source, last_end))
    }

    /// End position of the most recently consumed token.
    pub fn last_end(&self) -> &SourcePosition {
        &self.last_end
    }

    /// Returns `true` if the next token has the same kind as `kind` (payloads
    /// are ignored).
    pub fn peek_is_kind(&mut self, kind: &GraphQLTokenKind<'_>) -> bool {
        self.peek().kind.same_kind(kind)
    }

    /// Returns `true` if the next token is the name `keyword`.
    pub fn peek_is_keyword(&mut self, keyword: &str) -> bool {
        self.peek().is_keyword(keyword)
    }

    /// Returns `true` once only `Eof` remains.
    pub fn is_at_end(&mut self) -> bool {
        matches!(self.peek().kind, GraphQLTokenKind::Eof)
    }

    /// Consumes and returns the next token only if its kind is one of
    /// `kinds`; otherwise leaves the stream untouched.
    pub fn consume_if_kind(
        &mut self,
        kinds: &[GraphQLTokenKind<'_>],
    ) -> Option<GraphQLToken<'src>> {
        let next_kind = &self.peek().kind;
        if kinds.iter().any(|kind| next_kind.same_kind(kind)) {
            Some(self.next())
        } else {
            None
        }
    }

    /// Consumes and returns the next token if its kind is one of `kinds`,
    /// otherwise fails with an unexpected-token error naming `expected`.
    pub fn require_kind(
        &mut self,
        kinds: &[GraphQLTokenKind<'_>],
        expected: &str,
    ) -> crate::Result<GraphQLToken<'src>> {
        match self.consume_if_kind(kinds) {
            Some(token) => Ok(token),
            None => {
                let found = self.next();
                Err(unexpected_token(found, &[expected]))
            },
        }
    }

    /// Consumes the next token if it is the name `keyword`, else fails.
    pub fn require_keyword(&mut self, keyword: &str) -> crate::Result<GraphQLToken<'src>> {
        if self.peek_is_keyword(keyword) {
            Ok(self.next())
        } else {
            let found = self.next();
            Err(unexpected_token(found, &[&format!("`{keyword}`")]))
        }
    }

    /// Consumes the next token and returns `true` only if it is the name
    /// `keyword`.
    pub fn consume_keyword_if(&mut self, keyword: &str) -> bool {
        if self.peek_is_keyword(keyword) {
            self.next();
            true
        } else {
            false
        }
    }

    /// Consumes a name token and returns its text, else fails.
    pub fn require_name(&mut self, expected: &str) -> crate::Result<(String, GraphQLSourceSpan)> {
        let token = self.next();
        match token.kind {
            GraphQLTokenKind::Name(name) => Ok((name.into_owned(), token.span)),
            _ => Err(unexpected_token(token, &[expected])),
        }
    }

    /// Consumes a leading string or block string and returns its raw text.
    ///
    /// Descriptions always precede the construct they document, so this is
    /// called before each describable production.
    pub fn read_optional_description(&mut self) -> Option<String> {
        let token = self.consume_if_kind(&[
            GraphQLTokenKind::StringValue("".into()),
            GraphQLTokenKind::BlockStringValue("".into()),
        ])?;
        token.kind.raw_text().map(str::to_string)
    }
}

/// Pulls the next non-comment token from `token_source`.
///
/// An exhausted source reads as an endless run of `Eof` tokens positioned at
/// `last_end`.
fn pull<'src>(
    token_source: &mut impl GraphQLTokenSource<'src>,
    last_end: &SourcePosition,
) -> GraphQLToken<'src> {
    loop {
        match token_source.next() {
            Some(token) if matches!(token.kind, GraphQLTokenKind::Comment(_)) => continue,
            Some(token) => return token,
            None => {
                return GraphQLToken::new(
                    GraphQLTokenKind::Eof,
                    GraphQLSourceSpan::empty_at(last_end.clone()),
                );
            },
        }
    }
}

/// Builds the error for a token that doesn't fit the grammar at this point.
///
/// Lexer error tokens keep their own message and notes; `Eof` becomes an
/// unexpected-end-of-input error.
pub(crate) fn unexpected_token(found: GraphQLToken<'_>, expected: &[&str]) -> GraphQLParseError {
    let expected_list = expected.iter().map(|e| e.to_string()).collect::<Vec<_>>();
    let expected_text = expected.join(" or ");
    match found.kind {
        GraphQLTokenKind::Error { message, error_notes } => {
            GraphQLParseError::from_lexer_error(message, found.span, error_notes)
        },
        GraphQLTokenKind::Eof => GraphQLParseError::new(
            format!("expected {expected_text}, found end of input"),
            found.span,
            GraphQLParseErrorKind::UnexpectedEof { expected: expected_list },
        ),
        kind => {
            let found_text = kind.describe();
            GraphQLParseError::new(
                format!("expected {expected_text}, found {found_text}"),
                found.span,
                GraphQLParseErrorKind::UnexpectedToken {
                    expected: expected_list,
                    found: found_text,
                },
            )
        },
    }
}
