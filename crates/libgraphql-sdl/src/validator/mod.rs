//! Semantic validation of a parsed SDL document.
//!
//! [`validate`] runs the whole pipeline over a user document:
//!
//! 1. merge the [builtin definitions](crate::builtin_document) in front of it
//! 2. build name-indexed [`LookupTables`], rejecting duplicate definitions
//! 3. apply `extend` clauses to the definitions they extend
//! 4. resolve the [`RootOperationTypes`]
//! 5. [validate every directive definition](validate_directive_definitions)
//!
//! The first violation found is returned; nothing is aggregated.

mod directive_definition_validator;
mod directive_reference_walk;
mod lookup_tables;
mod root_operation_types;

pub use directive_definition_validator::validate_directive_definitions;
pub use directive_reference_walk::DirectiveReferenceWalk;
pub use lookup_tables::LookupTables;
pub use root_operation_types::RootOperationTypes;

use crate::SchemaValidationError;
use crate::builtin_document;
use crate::schema::Schema;
use libgraphql_sdl_parser::ast::TypeSystemExtensionDocument;

pub type Result<T> = std::result::Result<T, SchemaValidationError>;

/// Names starting with this prefix are reserved for introspection.
pub(crate) const RESERVED_NAME_PREFIX: &str = "__";

/// Validates `document` (merged with the builtin definitions) and returns
/// the resulting [`Schema`].
pub fn validate(document: &TypeSystemExtensionDocument) -> Result<Schema> {
    let TypeSystemExtensionDocument {
        type_definitions,
        schema_definitions,
        directive_definitions,
        type_extensions,
        schema_extensions,
    } = builtin_document().merge([document]);

    let mut lookup_tables = LookupTables::build(type_definitions, directive_definitions)?;
    log::debug!(
        "Built lookup tables with {} type(s) and {} directive(s).",
        lookup_tables.types().len(),
        lookup_tables.directives().len(),
    );

    lookup_tables.apply_type_extensions(type_extensions)?;

    let root_operation_types = RootOperationTypes::resolve(
        &lookup_tables,
        &schema_definitions,
        &schema_extensions,
    )?;

    validate_directive_definitions(&lookup_tables)?;
    log::debug!("Schema validated.");

    Ok(Schema::new(root_operation_types, lookup_tables))
}
