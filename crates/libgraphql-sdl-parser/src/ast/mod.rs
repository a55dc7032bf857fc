//! The owned AST produced by [`GraphQLParser`](crate::GraphQLParser).
//!
//! Nodes are plain data: built once during a parse pass and never mutated
//! afterwards. Default values and directive argument values are kept as raw
//! source lexemes; nothing here interprets them.

mod ast_node;
mod directive_annotation;
mod directive_definition;
mod directive_location;
mod enum_value_definition;
mod field_definition;
mod input_value_definition;
mod operation_type;
mod schema_definition;
mod type_annotation;
mod type_definition;
mod type_extension;
mod type_kind;
mod type_system_extension_document;

pub use ast_node::AstNode;
pub use directive_annotation::Argument;
pub use directive_annotation::DirectiveAnnotation;
pub use directive_definition::DirectiveDefinition;
pub use directive_location::DirectiveLocation;
pub use enum_value_definition::EnumValueDefinition;
pub use field_definition::FieldDefinition;
pub use input_value_definition::InputValueDefinition;
pub use operation_type::OperationType;
pub use schema_definition::SchemaDefinition;
pub use schema_definition::SchemaExtension;
pub use type_annotation::Nullability;
pub use type_annotation::TypeAnnotation;
pub use type_definition::EnumTypeDefinition;
pub use type_definition::InputObjectTypeDefinition;
pub use type_definition::InterfaceTypeDefinition;
pub use type_definition::ObjectTypeDefinition;
pub use type_definition::ScalarTypeDefinition;
pub use type_definition::TypeDefinition;
pub use type_definition::UnionTypeDefinition;
pub use type_extension::EnumTypeExtension;
pub use type_extension::InputObjectTypeExtension;
pub use type_extension::InterfaceTypeExtension;
pub use type_extension::ObjectTypeExtension;
pub use type_extension::ScalarTypeExtension;
pub use type_extension::TypeExtension;
pub use type_extension::UnionTypeExtension;
pub use type_kind::TypeKind;
pub use type_system_extension_document::TypeSystemExtensionDocument;
pub use type_system_extension_document::merge_documents;
