use crate::GraphQLSourceSpan;
use crate::ast::AstNode;
use crate::ast::DirectiveAnnotation;
use crate::ast::EnumValueDefinition;
use crate::ast::FieldDefinition;
use crate::ast::InputValueDefinition;
use crate::ast::TypeKind;
use inherent::inherent;

/// An `extend <kind> Name ...` amendment to a type defined elsewhere.
///
/// Payloads mirror [`TypeDefinition`](crate::ast::TypeDefinition) but every
/// collection may be empty, since an extension may add just directives, just
/// an implements clause, and so on. The parser guarantees each extension
/// adds *something*.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum TypeExtension {
    Scalar(ScalarTypeExtension),
    Object(ObjectTypeExtension),
    Interface(InterfaceTypeExtension),
    Union(UnionTypeExtension),
    Enum(EnumTypeExtension),
    InputObject(InputObjectTypeExtension),
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ScalarTypeExtension {
    pub name: String,
    pub directives: Vec<DirectiveAnnotation>,
    pub span: GraphQLSourceSpan,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ObjectTypeExtension {
    pub name: String,
    pub interfaces: Vec<String>,
    pub directives: Vec<DirectiveAnnotation>,
    pub fields: Vec<FieldDefinition>,
    pub span: GraphQLSourceSpan,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InterfaceTypeExtension {
    pub name: String,
    pub interfaces: Vec<String>,
    pub directives: Vec<DirectiveAnnotation>,
    pub fields: Vec<FieldDefinition>,
    pub span: GraphQLSourceSpan,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct UnionTypeExtension {
    pub name: String,
    pub directives: Vec<DirectiveAnnotation>,
    pub members: Vec<String>,
    pub span: GraphQLSourceSpan,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct EnumTypeExtension {
    pub name: String,
    pub directives: Vec<DirectiveAnnotation>,
    pub values: Vec<EnumValueDefinition>,
    pub span: GraphQLSourceSpan,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InputObjectTypeExtension {
    pub name: String,
    pub directives: Vec<DirectiveAnnotation>,
    pub fields: Vec<InputValueDefinition>,
    pub span: GraphQLSourceSpan,
}

impl TypeExtension {
    /// The name of the type being extended.
    pub fn name(&self) -> &str {
        match self {
            TypeExtension::Scalar(ext) => &ext.name,
            TypeExtension::Object(ext) => &ext.name,
            TypeExtension::Interface(ext) => &ext.name,
            TypeExtension::Union(ext) => &ext.name,
            TypeExtension::Enum(ext) => &ext.name,
            TypeExtension::InputObject(ext) => &ext.name,
        }
    }

    /// The kind of type this extension expects to amend.
    pub fn kind(&self) -> TypeKind {
        match self {
            TypeExtension::Scalar(_) => TypeKind::Scalar,
            TypeExtension::Object(_) => TypeKind::Object,
            TypeExtension::Interface(_) => TypeKind::Interface,
            TypeExtension::Union(_) => TypeKind::Union,
            TypeExtension::Enum(_) => TypeKind::Enum,
            TypeExtension::InputObject(_) => TypeKind::InputObject,
        }
    }
}

#[inherent]
impl AstNode for TypeExtension {
    pub fn span(&self) -> &GraphQLSourceSpan {
        match self {
            TypeExtension::Scalar(ext) => &ext.span,
            TypeExtension::Object(ext) => &ext.span,
            TypeExtension::Interface(ext) => &ext.span,
            TypeExtension::Union(ext) => &ext.span,
            TypeExtension::Enum(ext) => &ext.span,
            TypeExtension::InputObject(ext) => &ext.span,
        }
    }
}
