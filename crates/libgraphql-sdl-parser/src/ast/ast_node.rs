use crate::GraphQLSourceSpan;

/// Behavior shared by AST nodes that remember where they came from.
pub trait AstNode {
    /// The span of source text this node was parsed from.
    fn span(&self) -> &GraphQLSourceSpan;

    /// Returns the exact source text of this node, given the text it was
    /// parsed from.
    fn source_text<'a>(&self, source: &'a str) -> Option<&'a str> {
        self.span().source_slice(source)
    }
}
