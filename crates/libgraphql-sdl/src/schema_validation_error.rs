use libgraphql_sdl_parser::GraphQLSourceSpan;
use libgraphql_sdl_parser::Source;
use libgraphql_sdl_parser::ast::OperationType;
use libgraphql_sdl_parser::ast::TypeKind;

/// The first rule a merged document violated during validation.
///
/// Validation is fail-fast: exactly one of these is reported per run.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SchemaValidationError {
    #[error("type `{type_name}` is defined more than once")]
    DuplicateTypeDefinition {
        type_name: String,
        def1: GraphQLSourceSpan,
        def2: GraphQLSourceSpan,
    },

    #[error("directive `@{directive_name}` is defined more than once")]
    DuplicateDirectiveDefinition {
        directive_name: String,
        def1: GraphQLSourceSpan,
        def2: GraphQLSourceSpan,
    },

    #[error("directive name must not begin with \"__\": {directive_name}")]
    ReservedDirectiveName {
        directive_name: String,
        def_span: GraphQLSourceSpan,
    },

    #[error("argument name must not begin with \"__\": {argument_name}")]
    ReservedArgumentName {
        directive_name: String,
        argument_name: String,
        def_span: GraphQLSourceSpan,
    },

    #[error(
        "argument `{argument_name}` of directive `@{directive_name}` has undefined type \
         `{type_name}`"
    )]
    UndefinedArgumentType {
        directive_name: String,
        argument_name: String,
        type_name: String,
        def_span: GraphQLSourceSpan,
    },

    #[error(
        "argument `{argument_name}` of directive `@{directive_name}` must be an input type, \
         but `{type_name}` is of kind {kind}"
    )]
    NonInputArgumentType {
        directive_name: String,
        argument_name: String,
        type_name: String,
        kind: TypeKind,
        def_span: GraphQLSourceSpan,
    },

    /// `reference_path` lists the types and directives walked from the
    /// offending argument to the usage of the directive itself, e.g.
    /// `["Filter", "@d"]`.
    #[error("directive {directive_name} must not contain the use of a directive which references itself")]
    SelfReferencingDirective {
        directive_name: String,
        argument_name: String,
        reference_path: Vec<String>,
        def_span: GraphQLSourceSpan,
    },

    #[error("schema must not be defined more than once")]
    DuplicateSchemaDefinition {
        def1: GraphQLSourceSpan,
        def2: GraphQLSourceSpan,
    },

    #[error("root {operation} type `{type_name}` must be a defined object type")]
    UndefinedRootOperationType {
        operation: OperationType,
        type_name: String,
        def_span: GraphQLSourceSpan,
    },

    #[error("root {operation} type is declared more than once")]
    DuplicateRootOperationType {
        operation: OperationType,
        def_span: GraphQLSourceSpan,
    },

    #[error("cannot extend undefined type `{type_name}`")]
    ExtensionOfUndefinedType {
        type_name: String,
        ext_span: GraphQLSourceSpan,
    },

    #[error("cannot extend {base_kind} type `{type_name}` with an `extend {extension_keyword}`")]
    ExtensionKindMismatch {
        type_name: String,
        base_kind: TypeKind,
        extension_keyword: &'static str,
        ext_span: GraphQLSourceSpan,
    },
}

impl SchemaValidationError {
    /// Where the error is reported. For duplicate definitions this is the
    /// second one.
    pub fn span(&self) -> &GraphQLSourceSpan {
        match self {
            Self::DuplicateTypeDefinition { def2, .. }
            | Self::DuplicateDirectiveDefinition { def2, .. }
            | Self::DuplicateSchemaDefinition { def2, .. } => def2,

            Self::ReservedDirectiveName { def_span, .. }
            | Self::ReservedArgumentName { def_span, .. }
            | Self::UndefinedArgumentType { def_span, .. }
            | Self::NonInputArgumentType { def_span, .. }
            | Self::SelfReferencingDirective { def_span, .. }
            | Self::UndefinedRootOperationType { def_span, .. }
            | Self::DuplicateRootOperationType { def_span, .. } => def_span,

            Self::ExtensionOfUndefinedType { ext_span, .. }
            | Self::ExtensionKindMismatch { ext_span, .. } => ext_span,
        }
    }

    /// The first of two duplicate definitions.
    pub fn previous_span(&self) -> Option<&GraphQLSourceSpan> {
        match self {
            Self::DuplicateTypeDefinition { def1, .. }
            | Self::DuplicateDirectiveDefinition { def1, .. }
            | Self::DuplicateSchemaDefinition { def1, .. } => Some(def1),
            _ => None,
        }
    }

    /// Formats this error with its location and, when the named source is
    /// among `sources`, a snippet of the offending line.
    ///
    /// ```text
    /// error: type `User` is defined more than once
    ///   --> users.graphql:3:1
    ///    |
    ///  3 | type User { id: ID! }
    ///    | ^^^^^^^^^^^^^^^^^^^^^
    ///    = note: previously defined at accounts.graphql:1:1
    /// ```
    pub fn format_detailed(&self, sources: &[Source]) -> String {
        let span = self.span();
        let mut output = format!("error: {self}\n  --> {}\n", span.location_label());
        if let Some(body) = source_body(span, sources)
            && let Some(snippet) = span.format_snippet(body)
        {
            output.push_str(&snippet);
        }
        if let Some(previous) = self.previous_span() {
            output.push_str(&format!(
                "   = note: previously defined at {}\n",
                previous.location_label(),
            ));
        }
        output
    }
}

fn source_body<'a>(span: &GraphQLSourceSpan, sources: &'a [Source]) -> Option<&'a str> {
    let name = span.source_name.as_deref()?;
    sources
        .iter()
        .find(|source| source.name() == name)
        .map(Source::body)
}
