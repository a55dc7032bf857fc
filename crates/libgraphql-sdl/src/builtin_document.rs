use libgraphql_sdl_parser::Source;
use libgraphql_sdl_parser::ast::TypeSystemExtensionDocument;
use libgraphql_sdl_parser::parse_source;
use std::sync::OnceLock;

const BUILTIN_SOURCE_NAME: &str = "<builtins>";

const BUILTIN_SDL: &str = r#"
scalar Int
scalar Float
scalar String
scalar Boolean
scalar ID

directive @include(if: Boolean!) on FIELD | FRAGMENT_SPREAD | INLINE_FRAGMENT

directive @skip(if: Boolean!) on FIELD | FRAGMENT_SPREAD | INLINE_FRAGMENT

directive @deprecated(
  reason: String = "No longer supported"
) on FIELD_DEFINITION | ARGUMENT_DEFINITION | INPUT_FIELD_DEFINITION | ENUM_VALUE

directive @specifiedBy(url: String!) on SCALAR
"#;

/// The standard scalars and directives every schema starts from.
///
/// Parsed once on first use and shared afterwards. The validator merges this
/// document in front of every user document, so user definitions that reuse
/// one of these names are reported as duplicates.
pub fn builtin_document() -> &'static TypeSystemExtensionDocument {
    static BUILTINS: OnceLock<TypeSystemExtensionDocument> = OnceLock::new();
    BUILTINS.get_or_init(|| {
        let source = Source::new(BUILTIN_SOURCE_NAME, BUILTIN_SDL);
        let document = parse_source(&source)
            .unwrap_or_else(|err| panic!("Failed to parse builtin definitions: {err}"));
        log::trace!(
            "Parsed {} builtin type(s) and {} builtin directive(s).",
            document.type_definitions.len(),
            document.directive_definitions.len(),
        );
        document
    })
}
