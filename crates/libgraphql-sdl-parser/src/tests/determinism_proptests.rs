//! Property tests: parsing is deterministic and never panics.

use crate::GraphQLParser;
use crate::ast;
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Z][a-zA-Z0-9_]{0,12}"
}

fn field_strategy() -> impl Strategy<Value = String> {
    (
        "[a-z][a-zA-Z0-9]{0,10}",
        name_strategy(),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(field, type_name, list, non_null)| {
            let mut annotation = type_name;
            if non_null {
                annotation.push('!');
            }
            if list {
                annotation = format!("[{annotation}]");
            }
            format!("{field}: {annotation}")
        })
}

/// Generates small but well-formed SDL documents.
fn document_strategy() -> impl Strategy<Value = String> {
    let definition = prop_oneof![
        (name_strategy(), prop::collection::vec(field_strategy(), 1..5))
            .prop_map(|(name, fields)| format!("type {name} {{ {} }}", fields.join(" "))),
        (name_strategy(), prop::collection::vec(field_strategy(), 1..5))
            .prop_map(|(name, fields)| format!("input {name} {{ {} }}", fields.join(", "))),
        (name_strategy(), prop::collection::vec("[A-Z]{2,6}", 1..5))
            .prop_map(|(name, values)| format!("enum {name} {{ {} }}", values.join(" "))),
        (name_strategy(), prop::collection::vec(name_strategy(), 1..4))
            .prop_map(|(name, members)| format!("union {name} = {}", members.join(" | "))),
        name_strategy().prop_map(|name| format!("\"\"\"doc\"\"\" scalar {name} @tag")),
        "[a-z][a-zA-Z]{0,8}".prop_map(|name| format!("directive @{name} repeatable on FIELD_DEFINITION | ENUM")),
    ];
    prop::collection::vec(definition, 0..8).prop_map(|defs| defs.join("\n"))
}

// =============================================================================
// Properties
// =============================================================================

fn parse(source: &str) -> crate::Result<ast::TypeSystemExtensionDocument> {
    GraphQLParser::new(source).parse_type_system_document()
}

/// Parsing the same text twice yields equal documents.
fn check_parse_is_deterministic(source: &str) -> Result<(), TestCaseError> {
    let first = parse(source);
    let second = parse(source);

    prop_assert!(first.is_ok(), "generated SDL failed to parse: {source}\n{first:?}");
    prop_assert_eq!(first.ok(), second.ok());
    Ok(())
}

/// Parsing arbitrary text returns (Ok or Err) without panicking.
fn check_arbitrary_input_does_not_panic(source: &str) -> Result<(), TestCaseError> {
    let first = parse(source).map_err(|err| err.to_string());
    let second = parse(source).map_err(|err| err.to_string());

    prop_assert_eq!(first.is_ok(), second.is_ok());
    Ok(())
}

proptest! {
    #[test]
    fn parse_is_deterministic(source in document_strategy()) {
        check_parse_is_deterministic(&source)?;
    }

    #[test]
    fn arbitrary_input_does_not_panic(source in "[ -~\\n\\t]{0,200}") {
        check_arbitrary_input_does_not_panic(&source)?;
    }

    #[test]
    fn sdl_shaped_input_does_not_panic(
        source in "(type|enum|input|scalar|extend|directive|schema|[A-Za-z]+|[{}()\\[\\]:!=|&@\"]|[ \\n]){0,60}",
    ) {
        check_arbitrary_input_does_not_panic(&source)?;
    }
}
