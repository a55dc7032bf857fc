use crate::SchemaValidationError;
use crate::schema::Schema;
use crate::validator;
use libgraphql_sdl_parser::GraphQLParseError;
use libgraphql_sdl_parser::Source;
use libgraphql_sdl_parser::ast::TypeSystemExtensionDocument;
use libgraphql_sdl_parser::ast::merge_documents;
use libgraphql_sdl_parser::parse_source;
use rayon::prelude::*;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Collects SDL [`Source`]s and builds them into a validated [`Schema`].
///
/// ```
/// use libgraphql_sdl::schema::SchemaBuilder;
///
/// let schema = SchemaBuilder::new()
///     .add_str("query.graphql", "type Query { me: User }")
///     .add_str("user.graphql", "type User { id: ID! }")
///     .build()
///     .unwrap();
/// assert_eq!(schema.query_type().unwrap().name, "Query");
/// ```
#[derive(Clone, Debug, Default)]
pub struct SchemaBuilder {
    sources: Vec<Source>,
}

impl SchemaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_source(mut self, source: Source) -> Self {
        self.sources.push(source);
        self
    }

    pub fn add_sources(mut self, sources: impl IntoIterator<Item = Source>) -> Self {
        self.sources.extend(sources);
        self
    }

    pub fn add_str(self, name: impl Into<String>, body: impl Into<String>) -> Self {
        self.add_source(Source::new(name, body))
    }

    pub fn sources(&self) -> &[Source] {
        &self.sources
    }

    /// Parses every source, merges the results in the order the sources
    /// were added, and validates the merged document.
    ///
    /// If any source fails to parse, the error of the first such source (in
    /// insertion order) is returned and nothing is validated.
    pub fn build(self) -> Result<Schema> {
        let documents = self.parse_sources()?;
        let document = merge_documents(documents);
        log::debug!(
            "Merged {} source(s): {} type definition(s), {} directive definition(s), \
             {} extension(s).",
            self.sources.len(),
            document.type_definitions.len(),
            document.directive_definitions.len(),
            document.type_extensions.len() + document.schema_extensions.len(),
        );
        Ok(validator::validate(&document)?)
    }

    /// Parses each source on the rayon thread pool. Each parse owns its own
    /// token stream, so nothing is shared between them.
    fn parse_sources(&self) -> std::result::Result<Vec<TypeSystemExtensionDocument>, GraphQLParseError> {
        let results: Vec<_> = self
            .sources
            .par_iter()
            .map(|source| {
                log::trace!("Parsing `{}`.", source.name());
                parse_source(source)
            })
            .collect();
        results.into_iter().collect()
    }
}

#[derive(Clone, Debug, thiserror::Error)]
pub enum SchemaBuildError {
    #[error(transparent)]
    Parse(#[from] GraphQLParseError),

    #[error(transparent)]
    Validation(#[from] SchemaValidationError),
}
