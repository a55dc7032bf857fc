use crate::GraphQLSourceSpan;
use crate::ast::AstNode;
use crate::ast::DirectiveAnnotation;
use crate::ast::TypeAnnotation;
use inherent::inherent;

/// An argument of a field or directive definition, or a field of an input
/// object type.
///
/// ```graphql
/// "Max items" first: Int = 10 @deprecated
/// ```
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InputValueDefinition {
    pub description: Option<String>,
    pub name: String,
    pub value_type: TypeAnnotation,
    /// The raw default-value lexeme, captured verbatim.
    pub default_value: Option<String>,
    pub directives: Vec<DirectiveAnnotation>,
    pub span: GraphQLSourceSpan,
}

#[inherent]
impl AstNode for InputValueDefinition {
    pub fn span(&self) -> &GraphQLSourceSpan {
        &self.span
    }
}
