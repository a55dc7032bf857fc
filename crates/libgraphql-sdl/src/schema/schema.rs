use crate::schema::SchemaBuilder;
use crate::validator::LookupTables;
use crate::validator::RootOperationTypes;
use indexmap::IndexMap;
use libgraphql_sdl_parser::ast::DirectiveDefinition;
use libgraphql_sdl_parser::ast::ObjectTypeDefinition;
use libgraphql_sdl_parser::ast::OperationType;
use libgraphql_sdl_parser::ast::TypeDefinition;

/// A validated GraphQL schema: its root operation types plus every type and
/// directive definition (builtins included), with extensions already
/// applied.
///
/// A `Schema` can only be obtained from the validator (usually through a
/// [`SchemaBuilder`]) or by decoding bytes produced by
/// [`Schema::to_bincode_bytes`].
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Schema {
    pub(crate) query_type: Option<String>,
    pub(crate) mutation_type: Option<String>,
    pub(crate) subscription_type: Option<String>,
    pub(crate) types: IndexMap<String, TypeDefinition>,
    pub(crate) directives: IndexMap<String, DirectiveDefinition>,
}

impl Schema {
    pub(crate) fn new(
        root_operation_types: RootOperationTypes,
        lookup_tables: LookupTables,
    ) -> Self {
        let RootOperationTypes {
            query,
            mutation,
            subscription,
        } = root_operation_types;
        let (types, directives) = lookup_tables.into_parts();
        Self {
            query_type: query,
            mutation_type: mutation,
            subscription_type: subscription,
            types,
            directives,
        }
    }

    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    /// Decodes a schema previously encoded with [`Schema::to_bincode_bytes`].
    pub fn from_bincode_bytes(bytes: &[u8]) -> Result<Self, bincode::error::DecodeError> {
        bincode::serde::decode_from_slice::<Schema, _>(bytes, bincode::config::standard())
            .map(|(schema, _)| schema)
    }

    pub fn to_bincode_bytes(&self) -> Result<Vec<u8>, bincode::error::EncodeError> {
        bincode::serde::encode_to_vec(self, bincode::config::standard())
    }

    pub fn root_operation_type_name(&self, operation: OperationType) -> Option<&str> {
        match operation {
            OperationType::Query => self.query_type.as_deref(),
            OperationType::Mutation => self.mutation_type.as_deref(),
            OperationType::Subscription => self.subscription_type.as_deref(),
        }
    }

    pub fn root_operation_type(&self, operation: OperationType) -> Option<&ObjectTypeDefinition> {
        match self.types.get(self.root_operation_type_name(operation)?)? {
            TypeDefinition::Object(object_def) => Some(object_def),
            _ => None,
        }
    }

    pub fn query_type(&self) -> Option<&ObjectTypeDefinition> {
        self.root_operation_type(OperationType::Query)
    }

    pub fn mutation_type(&self) -> Option<&ObjectTypeDefinition> {
        self.root_operation_type(OperationType::Mutation)
    }

    pub fn subscription_type(&self) -> Option<&ObjectTypeDefinition> {
        self.root_operation_type(OperationType::Subscription)
    }

    pub fn type_definition(&self, name: &str) -> Option<&TypeDefinition> {
        self.types.get(name)
    }

    /// Looks up a directive definition by name (without the `@`).
    pub fn directive_definition(&self, name: &str) -> Option<&DirectiveDefinition> {
        self.directives.get(name)
    }

    /// Every type definition, builtins first, then in source order.
    pub fn types(&self) -> impl Iterator<Item = &TypeDefinition> {
        self.types.values()
    }

    /// Every directive definition, builtins first, then in source order.
    pub fn directives(&self) -> impl Iterator<Item = &DirectiveDefinition> {
        self.directives.values()
    }
}
