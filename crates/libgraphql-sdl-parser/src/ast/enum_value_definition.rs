use crate::GraphQLSourceSpan;
use crate::ast::DirectiveAnnotation;

/// One value of an enum type.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct EnumValueDefinition {
    pub description: Option<String>,
    pub name: String,
    pub directives: Vec<DirectiveAnnotation>,
    pub span: GraphQLSourceSpan,
}
