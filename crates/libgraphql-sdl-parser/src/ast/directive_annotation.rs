use crate::GraphQLSourceSpan;
use crate::ast::AstNode;
use inherent::inherent;

/// A directive applied somewhere in a document (e.g.
/// `@deprecated(reason: "use id")`).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct DirectiveAnnotation {
    pub name: String,
    pub arguments: Vec<Argument>,
    pub span: GraphQLSourceSpan,
}

/// One `name: value` pair of a [`DirectiveAnnotation`].
///
/// `value` is the raw lexeme exactly as written (`"text"`, `42`, `ENUM_VALUE`,
/// ...). It is neither type-checked nor coerced.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Argument {
    pub name: String,
    pub value: String,
}

impl DirectiveAnnotation {
    /// Returns the raw value of the argument called `name`, if present.
    pub fn argument(&self, name: &str) -> Option<&str> {
        self.arguments
            .iter()
            .find(|arg| arg.name == name)
            .map(|arg| arg.value.as_str())
    }
}

#[inherent]
impl AstNode for DirectiveAnnotation {
    pub fn span(&self) -> &GraphQLSourceSpan {
        &self.span
    }
}
