//! Turns GraphQL SDL sources into a validated [`schema::Schema`].
//!
//! Sources are parsed independently (in parallel) by
//! [`libgraphql_sdl_parser`], merged into a single document together with
//! the [builtin definitions](builtin_document), and then checked by the
//! [`validator`] before a [`schema::Schema`] is handed out.

mod builtin_document;
pub mod schema;
mod schema_validation_error;
pub mod validator;

pub use builtin_document::builtin_document;
pub use libgraphql_sdl_parser as parser;
pub use libgraphql_sdl_parser::Source;
pub use schema_validation_error::SchemaValidationError;

#[cfg(test)]
mod tests;
