//! Tests for GraphQLTokenStream.

use crate::GraphQLParseErrorKind;
use crate::GraphQLTokenStream;
use crate::tests::utils;
use crate::token::GraphQLTokenKind;
use crate::token_source::StrGraphQLTokenSource;

fn stream_of(source: &str) -> GraphQLTokenStream<'_, StrGraphQLTokenSource<'_>> {
    GraphQLTokenStream::new(StrGraphQLTokenSource::new(source))
}

// =============================================================================
// Lookahead
// =============================================================================

/// Repeated peeks return the same token; next() then returns it.
#[test]
fn peek_does_not_consume() {
    let mut stream = GraphQLTokenStream::new(utils::MockTokenSource::new(vec![
        utils::mock_name_token("type"),
        utils::mock_name_token("Query"),
        utils::mock_eof_token(),
    ]));

    let first_peek = stream.peek().kind.clone();
    let second_peek = stream.peek().kind.clone();
    assert_eq!(first_peek, second_peek);
    assert_eq!(stream.next().kind, first_peek);
    assert!(stream.peek_is_keyword("Query"));
}

/// Comment tokens never reach the caller.
#[test]
fn comments_are_filtered() {
    let mut stream = GraphQLTokenStream::new(utils::MockTokenSource::new(vec![
        utils::mock_comment_token(" leading"),
        utils::mock_name_token("scalar"),
        utils::mock_comment_token(" between"),
        utils::mock_comment_token(" another"),
        utils::mock_name_token("Date"),
        utils::mock_eof_token(),
    ]));

    assert!(stream.next().is_keyword("scalar"));
    assert!(stream.next().is_keyword("Date"));
    assert!(stream.is_at_end());
}

/// A token source that ends without `Eof` reads as end of input forever.
#[test]
fn exhausted_source_reads_as_eof() {
    let mut stream = GraphQLTokenStream::new(utils::MockTokenSource::new(vec![
        utils::mock_name_token("a"),
    ]));

    stream.next();
    assert!(matches!(stream.next().kind, GraphQLTokenKind::Eof));
    assert!(matches!(stream.next().kind, GraphQLTokenKind::Eof));
}

// =============================================================================
// Combinators
// =============================================================================

/// consume_if_kind only advances on a matching kind.
#[test]
fn consume_if_kind_leaves_stream_untouched_on_mismatch() {
    let mut stream = stream_of("{ x");

    assert!(stream.consume_if_kind(&[GraphQLTokenKind::ParenOpen]).is_none());
    let brace = stream.consume_if_kind(&[
        GraphQLTokenKind::ParenOpen,
        GraphQLTokenKind::CurlyBraceOpen,
    ]);
    assert!(matches!(brace.map(|t| t.kind), Some(GraphQLTokenKind::CurlyBraceOpen)));
    assert!(stream.peek_is_keyword("x"));
}

/// require_kind reports what was expected and what was found.
#[test]
fn require_kind_reports_offending_token() {
    let mut stream = stream_of("name");

    let err = stream
        .require_kind(&[GraphQLTokenKind::Colon], "`:`")
        .unwrap_err();
    assert_eq!(
        err.kind(),
        &GraphQLParseErrorKind::UnexpectedToken {
            expected: vec!["`:`".to_string()],
            found: "name `name`".to_string(),
        },
    );
    assert_eq!(err.message(), "expected `:`, found name `name`");
}

/// require_keyword accepts only the exact keyword text.
#[test]
fn require_keyword_matches_exact_text() {
    let mut stream = stream_of("on ON");

    assert!(stream.require_keyword("on").is_ok());
    let err = stream.require_keyword("on").unwrap_err();
    assert!(matches!(err.kind(), GraphQLParseErrorKind::UnexpectedToken { .. }));
}

/// consume_keyword_if reports whether it advanced.
#[test]
fn consume_keyword_if_is_exact() {
    let mut stream = stream_of("repeatable on");

    assert!(!stream.consume_keyword_if("on"));
    assert!(stream.consume_keyword_if("repeatable"));
    assert!(stream.consume_keyword_if("on"));
    assert!(stream.is_at_end());
}

/// Both string forms are accepted as descriptions; anything else is left
/// alone.
#[test]
fn read_optional_description() {
    let mut stream = stream_of(r#""short" """block""" type"#);

    assert_eq!(stream.read_optional_description().as_deref(), Some(r#""short""#));
    assert_eq!(stream.read_optional_description().as_deref(), Some(r#""""block""""#));
    assert_eq!(stream.read_optional_description(), None);
    assert!(stream.peek_is_keyword("type"));
}

/// Running out of input where a token is required is an EOF error.
#[test]
fn require_at_end_is_eof_error() {
    let mut stream = stream_of("");

    let err = stream.require_name("a type name").unwrap_err();
    assert_eq!(
        err.kind(),
        &GraphQLParseErrorKind::UnexpectedEof {
            expected: vec!["a type name".to_string()],
        },
    );
}

/// Lexer error tokens surface as lexer errors with the lexer's message.
#[test]
fn lexer_error_is_propagated() {
    let mut stream = stream_of("\"open");

    let err = stream.require_name("a name").unwrap_err();
    assert_eq!(err.kind(), &GraphQLParseErrorKind::LexerError);
    assert_eq!(err.message(), "Unterminated string literal");
}

/// last_end tracks the end of the most recently consumed token.
#[test]
fn last_end_follows_consumption() {
    let mut stream = stream_of("ab  cde");

    stream.next();
    assert_eq!(stream.last_end().col_utf8(), 2);
    stream.peek();
    assert_eq!(stream.last_end().col_utf8(), 2);
    stream.next();
    assert_eq!(stream.last_end().col_utf8(), 7);
}
