use crate::GraphQLSourceSpan;
use crate::ast::AstNode;
use crate::ast::DirectiveAnnotation;
use crate::ast::OperationType;
use inherent::inherent;

/// ```graphql
/// schema @link { query: Query mutation: Mutation }
/// ```
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct SchemaDefinition {
    pub description: Option<String>,
    pub directives: Vec<DirectiveAnnotation>,
    pub query: Option<String>,
    pub mutation: Option<String>,
    pub subscription: Option<String>,
    pub span: GraphQLSourceSpan,
}

/// ```graphql
/// extend schema @tag { subscription: Subscription }
/// ```
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct SchemaExtension {
    pub directives: Vec<DirectiveAnnotation>,
    pub query: Option<String>,
    pub mutation: Option<String>,
    pub subscription: Option<String>,
    pub span: GraphQLSourceSpan,
}

impl SchemaDefinition {
    pub fn root_type_name(&self, operation: OperationType) -> Option<&str> {
        match operation {
            OperationType::Query => self.query.as_deref(),
            OperationType::Mutation => self.mutation.as_deref(),
            OperationType::Subscription => self.subscription.as_deref(),
        }
    }
}

impl SchemaExtension {
    pub fn root_type_name(&self, operation: OperationType) -> Option<&str> {
        match operation {
            OperationType::Query => self.query.as_deref(),
            OperationType::Mutation => self.mutation.as_deref(),
            OperationType::Subscription => self.subscription.as_deref(),
        }
    }
}

#[inherent]
impl AstNode for SchemaDefinition {
    pub fn span(&self) -> &GraphQLSourceSpan {
        &self.span
    }
}

#[inherent]
impl AstNode for SchemaExtension {
    pub fn span(&self) -> &GraphQLSourceSpan {
        &self.span
    }
}
