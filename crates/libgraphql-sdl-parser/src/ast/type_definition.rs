use crate::GraphQLSourceSpan;
use crate::ast::AstNode;
use crate::ast::DirectiveAnnotation;
use crate::ast::EnumValueDefinition;
use crate::ast::FieldDefinition;
use crate::ast::InputValueDefinition;
use crate::ast::TypeKind;
use inherent::inherent;

/// A named type definition.
///
/// This is a closed set: code that needs kind-specific payloads matches on
/// the variant directly.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum TypeDefinition {
    Scalar(ScalarTypeDefinition),
    Object(ObjectTypeDefinition),
    Interface(InterfaceTypeDefinition),
    Union(UnionTypeDefinition),
    Enum(EnumTypeDefinition),
    InputObject(InputObjectTypeDefinition),
}

/// ```graphql
/// scalar DateTime @specifiedBy(url: "https://example.com")
/// ```
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ScalarTypeDefinition {
    pub description: Option<String>,
    pub name: String,
    pub directives: Vec<DirectiveAnnotation>,
    pub span: GraphQLSourceSpan,
}

/// ```graphql
/// type User implements Node & Entity @key { id: ID! }
/// ```
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ObjectTypeDefinition {
    pub description: Option<String>,
    pub name: String,
    pub interfaces: Vec<String>,
    pub directives: Vec<DirectiveAnnotation>,
    pub fields: Vec<FieldDefinition>,
    pub span: GraphQLSourceSpan,
}

/// Same shape as [`ObjectTypeDefinition`]; interfaces may implement other
/// interfaces.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InterfaceTypeDefinition {
    pub description: Option<String>,
    pub name: String,
    pub interfaces: Vec<String>,
    pub directives: Vec<DirectiveAnnotation>,
    pub fields: Vec<FieldDefinition>,
    pub span: GraphQLSourceSpan,
}

/// ```graphql
/// union SearchResult = | User | Post
/// ```
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct UnionTypeDefinition {
    pub description: Option<String>,
    pub name: String,
    pub directives: Vec<DirectiveAnnotation>,
    pub members: Vec<String>,
    pub span: GraphQLSourceSpan,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct EnumTypeDefinition {
    pub description: Option<String>,
    pub name: String,
    pub directives: Vec<DirectiveAnnotation>,
    pub values: Vec<EnumValueDefinition>,
    pub span: GraphQLSourceSpan,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InputObjectTypeDefinition {
    pub description: Option<String>,
    pub name: String,
    pub directives: Vec<DirectiveAnnotation>,
    pub fields: Vec<InputValueDefinition>,
    pub span: GraphQLSourceSpan,
}

impl TypeDefinition {
    pub fn name(&self) -> &str {
        match self {
            TypeDefinition::Scalar(def) => &def.name,
            TypeDefinition::Object(def) => &def.name,
            TypeDefinition::Interface(def) => &def.name,
            TypeDefinition::Union(def) => &def.name,
            TypeDefinition::Enum(def) => &def.name,
            TypeDefinition::InputObject(def) => &def.name,
        }
    }

    pub fn kind(&self) -> TypeKind {
        match self {
            TypeDefinition::Scalar(_) => TypeKind::Scalar,
            TypeDefinition::Object(_) => TypeKind::Object,
            TypeDefinition::Interface(_) => TypeKind::Interface,
            TypeDefinition::Union(_) => TypeKind::Union,
            TypeDefinition::Enum(_) => TypeKind::Enum,
            TypeDefinition::InputObject(_) => TypeKind::InputObject,
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            TypeDefinition::Scalar(def) => def.description.as_deref(),
            TypeDefinition::Object(def) => def.description.as_deref(),
            TypeDefinition::Interface(def) => def.description.as_deref(),
            TypeDefinition::Union(def) => def.description.as_deref(),
            TypeDefinition::Enum(def) => def.description.as_deref(),
            TypeDefinition::InputObject(def) => def.description.as_deref(),
        }
    }

    /// Directives applied to the type itself (not to its fields or values).
    pub fn directives(&self) -> &[DirectiveAnnotation] {
        match self {
            TypeDefinition::Scalar(def) => &def.directives,
            TypeDefinition::Object(def) => &def.directives,
            TypeDefinition::Interface(def) => &def.directives,
            TypeDefinition::Union(def) => &def.directives,
            TypeDefinition::Enum(def) => &def.directives,
            TypeDefinition::InputObject(def) => &def.directives,
        }
    }
}

#[inherent]
impl AstNode for TypeDefinition {
    pub fn span(&self) -> &GraphQLSourceSpan {
        match self {
            TypeDefinition::Scalar(def) => &def.span,
            TypeDefinition::Object(def) => &def.span,
            TypeDefinition::Interface(def) => &def.span,
            TypeDefinition::Union(def) => &def.span,
            TypeDefinition::Enum(def) => &def.span,
            TypeDefinition::InputObject(def) => &def.span,
        }
    }
}
