//! Various test utils.

use crate::SchemaValidationError;
use crate::schema::Schema;
use crate::validator;
use libgraphql_sdl_parser::GraphQLParser;
use libgraphql_sdl_parser::ast::TypeSystemExtensionDocument;

/// Parses `sdl`, panicking with the rendered error if it is not valid
/// syntax.
pub fn parse(sdl: &str) -> TypeSystemExtensionDocument {
    match GraphQLParser::new(sdl).parse_type_system_document() {
        Ok(document) => document,
        Err(err) => panic!("unexpected parse error:\n{}", err.format_detailed(Some(sdl))),
    }
}

/// Parses and validates `sdl`.
pub fn validate_sdl(sdl: &str) -> Result<Schema, SchemaValidationError> {
    validator::validate(&parse(sdl))
}

/// Parses and validates `sdl`, panicking if validation fails.
pub fn valid_schema(sdl: &str) -> Schema {
    match validate_sdl(sdl) {
        Ok(schema) => schema,
        Err(err) => panic!("unexpected validation error: {err}\n{err:#?}"),
    }
}

/// Parses and validates `sdl`, panicking if validation succeeds.
pub fn validation_error(sdl: &str) -> SchemaValidationError {
    match validate_sdl(sdl) {
        Ok(schema) => panic!("expected a validation error, got: {schema:#?}"),
        Err(err) => err,
    }
}
