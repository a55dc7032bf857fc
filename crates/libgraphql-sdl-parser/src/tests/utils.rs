//! Various test utils.

use crate::GraphQLParseError;
use crate::GraphQLParser;
use crate::GraphQLSourceSpan;
use crate::SourcePosition;
use crate::ast;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;

/// Creates a mock token with the given kind and a zero-width span.
pub fn mock_token(kind: GraphQLTokenKind<'static>) -> GraphQLToken<'static> {
    GraphQLToken::new(kind, GraphQLSourceSpan::empty_at(SourcePosition::new(0, 0, 0, 0)))
}

pub fn mock_name_token(name: &str) -> GraphQLToken<'static> {
    mock_token(GraphQLTokenKind::name_owned(name.to_string()))
}

pub fn mock_comment_token(text: &str) -> GraphQLToken<'static> {
    mock_token(GraphQLTokenKind::Comment(text.to_string().into()))
}

pub fn mock_string_token(raw: &str) -> GraphQLToken<'static> {
    mock_token(GraphQLTokenKind::StringValue(raw.to_string().into()))
}

pub fn mock_eof_token() -> GraphQLToken<'static> {
    mock_token(GraphQLTokenKind::Eof)
}

/// A mock token source that produces tokens from a Vec.
pub struct MockTokenSource {
    tokens: std::vec::IntoIter<GraphQLToken<'static>>,
}

impl MockTokenSource {
    pub fn new(tokens: Vec<GraphQLToken<'static>>) -> Self {
        Self {
            tokens: tokens.into_iter(),
        }
    }
}

impl Iterator for MockTokenSource {
    type Item = GraphQLToken<'static>;

    fn next(&mut self) -> Option<Self::Item> {
        self.tokens.next()
    }
}

/// Parses `source`, panicking with the rendered error if it fails.
pub fn parse_document(source: &str) -> ast::TypeSystemExtensionDocument {
    match GraphQLParser::new(source).parse_type_system_document() {
        Ok(document) => document,
        Err(err) => panic!("unexpected parse error:\n{}", err.format_detailed(Some(source))),
    }
}

/// Parses `source`, panicking if it unexpectedly succeeds.
pub fn parse_error(source: &str) -> GraphQLParseError {
    match GraphQLParser::new(source).parse_type_system_document() {
        Ok(document) => panic!("expected a parse error, got: {document:#?}"),
        Err(err) => err,
    }
}

/// Parses `source` and returns its only type definition.
pub fn parse_single_type(source: &str) -> ast::TypeDefinition {
    let mut document = parse_document(source);
    assert_eq!(document.type_definitions.len(), 1, "expected exactly one type");
    document.type_definitions.remove(0)
}

pub fn parse_single_directive_def(source: &str) -> ast::DirectiveDefinition {
    let mut document = parse_document(source);
    assert_eq!(document.directive_definitions.len(), 1);
    document.directive_definitions.remove(0)
}

pub fn parse_single_type_extension(source: &str) -> ast::TypeExtension {
    let mut document = parse_document(source);
    assert_eq!(document.type_extensions.len(), 1);
    document.type_extensions.remove(0)
}

pub fn named(name: &str) -> ast::TypeAnnotation {
    ast::TypeAnnotation::named(name, ast::Nullability::Nullable)
}

pub fn non_null_named(name: &str) -> ast::TypeAnnotation {
    ast::TypeAnnotation::named(name, ast::Nullability::NonNull)
}
