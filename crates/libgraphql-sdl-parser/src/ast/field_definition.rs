use crate::GraphQLSourceSpan;
use crate::ast::AstNode;
use crate::ast::DirectiveAnnotation;
use crate::ast::InputValueDefinition;
use crate::ast::TypeAnnotation;
use inherent::inherent;

/// A field of an object or interface type.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FieldDefinition {
    pub description: Option<String>,
    pub name: String,
    pub arguments: Vec<InputValueDefinition>,
    pub field_type: TypeAnnotation,
    pub directives: Vec<DirectiveAnnotation>,
    pub span: GraphQLSourceSpan,
}

#[inherent]
impl AstNode for FieldDefinition {
    pub fn span(&self) -> &GraphQLSourceSpan {
        &self.span
    }
}
