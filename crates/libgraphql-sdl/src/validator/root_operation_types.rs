use crate::SchemaValidationError;
use crate::validator::LookupTables;
use crate::validator::Result;
use libgraphql_sdl_parser::GraphQLSourceSpan;
use libgraphql_sdl_parser::ast::OperationType;
use libgraphql_sdl_parser::ast::SchemaDefinition;
use libgraphql_sdl_parser::ast::SchemaExtension;
use libgraphql_sdl_parser::ast::TypeDefinition;

/// The object types that serve as the schema's entry points.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RootOperationTypes {
    pub query: Option<String>,
    pub mutation: Option<String>,
    pub subscription: Option<String>,
}

impl RootOperationTypes {
    /// Resolves the roots from the schema definition and schema extensions.
    ///
    /// The schema definition, if any, supplies the initial roots. Without
    /// one, object types named `Query`, `Mutation` and `Subscription` are
    /// used when they exist. Schema extensions then add roots on top of
    /// either; an extension naming an operation that already has a root is an
    /// error. Every declared root must name an object type.
    pub fn resolve(
        lookup_tables: &LookupTables,
        schema_definitions: &[SchemaDefinition],
        schema_extensions: &[SchemaExtension],
    ) -> Result<Self> {
        if let [first, second, ..] = schema_definitions {
            return Err(SchemaValidationError::DuplicateSchemaDefinition {
                def1: first.span().clone(),
                def2: second.span().clone(),
            });
        }

        let mut declared = match schema_definitions.first() {
            Some(schema_def) => OperationType::ALL
                .into_iter()
                .filter_map(|op| Some((op, schema_def.root_type_name(op)?, schema_def.span())))
                .collect::<Vec<_>>(),
            None => {
                let defaults = Self::default_declarations(lookup_tables);
                log::debug!(
                    "No schema definition; starting from default root types: {:?}.",
                    defaults.iter().map(|(_, type_name, _)| type_name).collect::<Vec<_>>(),
                );
                defaults
            },
        };

        for schema_ext in schema_extensions {
            for operation in OperationType::ALL {
                let Some(type_name) = schema_ext.root_type_name(operation) else {
                    continue;
                };
                if declared.iter().any(|(op, _, _)| *op == operation) {
                    return Err(SchemaValidationError::DuplicateRootOperationType {
                        operation,
                        def_span: schema_ext.span().clone(),
                    });
                }
                declared.push((operation, type_name, schema_ext.span()));
            }
        }

        let mut roots = Self::default();
        for (operation, type_name, span) in declared {
            if !matches!(lookup_tables.type_definition(type_name), Some(TypeDefinition::Object(_))) {
                return Err(SchemaValidationError::UndefinedRootOperationType {
                    operation,
                    type_name: type_name.to_string(),
                    def_span: span.clone(),
                });
            }
            *roots.slot_mut(operation) = Some(type_name.to_string());
        }

        Ok(roots)
    }

    /// Object types carrying the conventional root names, with the span of
    /// their definitions.
    fn default_declarations(
        lookup_tables: &LookupTables,
    ) -> Vec<(OperationType, &str, &GraphQLSourceSpan)> {
        OperationType::ALL
            .into_iter()
            .filter_map(|op| match lookup_tables.type_definition(op.default_type_name())? {
                TypeDefinition::Object(object) => Some((op, object.name.as_str(), &object.span)),
                _ => None,
            })
            .collect()
    }

    pub fn type_name(&self, operation: OperationType) -> Option<&str> {
        match operation {
            OperationType::Query => self.query.as_deref(),
            OperationType::Mutation => self.mutation.as_deref(),
            OperationType::Subscription => self.subscription.as_deref(),
        }
    }

    fn slot_mut(&mut self, operation: OperationType) -> &mut Option<String> {
        match operation {
            OperationType::Query => &mut self.query,
            OperationType::Mutation => &mut self.mutation,
            OperationType::Subscription => &mut self.subscription,
        }
    }
}
