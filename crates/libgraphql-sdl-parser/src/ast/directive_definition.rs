use crate::GraphQLSourceSpan;
use crate::ast::AstNode;
use crate::ast::DirectiveLocation;
use crate::ast::InputValueDefinition;
use inherent::inherent;

/// ```graphql
/// "Marks a field as cached"
/// directive @cached(ttl: Int = 60) repeatable on FIELD_DEFINITION | OBJECT
/// ```
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct DirectiveDefinition {
    pub description: Option<String>,
    /// The name without its leading `@`.
    pub name: String,
    pub arguments: Vec<InputValueDefinition>,
    pub repeatable: bool,
    /// Locations in source order.
    pub locations: Vec<DirectiveLocation>,
    pub span: GraphQLSourceSpan,
}

impl DirectiveDefinition {
    pub fn allows_location(&self, location: DirectiveLocation) -> bool {
        self.locations.contains(&location)
    }
}

#[inherent]
impl AstNode for DirectiveDefinition {
    pub fn span(&self) -> &GraphQLSourceSpan {
        &self.span
    }
}
