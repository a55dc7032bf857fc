use crate::GraphQLSourceSpan;
use crate::token::GraphQLTokenKind;

/// A classified lexical token along with the span of source text it covers.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphQLToken<'src> {
    pub kind: GraphQLTokenKind<'src>,
    pub span: GraphQLSourceSpan,
}

impl<'src> GraphQLToken<'src> {
    pub fn new(kind: GraphQLTokenKind<'src>, span: GraphQLSourceSpan) -> Self {
        Self { kind, span }
    }

    /// Returns `true` if this is a `Name` token whose text is exactly
    /// `keyword`.
    pub fn is_keyword(&self, keyword: &str) -> bool {
        matches!(&self.kind, GraphQLTokenKind::Name(name) if name == keyword)
    }
}
