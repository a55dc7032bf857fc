//! Tests for directive definitions and directive annotations.

use crate::GraphQLErrorNoteKind;
use crate::GraphQLParseErrorKind;
use crate::ast::DirectiveLocation;
use crate::tests::utils;

// =============================================================================
// Directive definitions
// =============================================================================

/// Locations keep their declaration order.
#[test]
fn locations_in_order() {
    let def = utils::parse_single_directive_def("directive @d on FIELD | ENUM");

    assert_eq!(def.name, "d");
    assert_eq!(def.locations, vec![DirectiveLocation::Field, DirectiveLocation::Enum]);
    assert!(!def.repeatable);
    assert!(def.arguments.is_empty());
}

/// A leading `|` before the first location is allowed.
#[test]
fn leading_pipe_before_locations() {
    let def = utils::parse_single_directive_def(
        "directive @d on\n  | OBJECT\n  | INTERFACE",
    );

    assert_eq!(
        def.locations,
        vec![DirectiveLocation::Object, DirectiveLocation::Interface],
    );
    assert!(def.allows_location(DirectiveLocation::Interface));
    assert!(!def.allows_location(DirectiveLocation::Union));
}

#[test]
fn repeatable_with_arguments() {
    let source = r#"
        "Marks a key."
        directive @key(fields: String!, resolvable: Boolean = true) repeatable on OBJECT
    "#;
    let def = utils::parse_single_directive_def(source);

    assert_eq!(def.description.as_deref(), Some("\"Marks a key.\""));
    assert!(def.repeatable);
    assert_eq!(def.arguments.len(), 2);
    assert_eq!(def.arguments[0].name, "fields");
    assert_eq!(def.arguments[0].value_type, utils::non_null_named("String"));
    assert_eq!(def.arguments[1].default_value.as_deref(), Some("true"));
}

/// Every location name in the grammar is accepted.
#[test]
fn all_locations_accepted() {
    let names: Vec<_> = DirectiveLocation::ALL.iter().map(|l| l.as_str()).collect();
    let def = utils::parse_single_directive_def(
        &format!("directive @everywhere on {}", names.join(" | ")),
    );

    assert_eq!(def.locations, DirectiveLocation::ALL.to_vec());
}

#[test]
fn unknown_location_is_error() {
    let err = utils::parse_error("directive @d on BOGUS");

    assert_eq!(
        err.kind(),
        &GraphQLParseErrorKind::UnknownDirectiveLocation {
            name: "BOGUS".to_string(),
        },
    );
    assert!(
        err.notes().iter().all(|note| note.kind != GraphQLErrorNoteKind::Help),
        "no location is close enough to suggest",
    );
    assert!(err.notes().iter().any(|note| note.kind == GraphQLErrorNoteKind::Spec));
}

/// A near-miss location name gets a suggestion.
#[test]
fn misspelled_location_suggests_closest() {
    let err = utils::parse_error("directive @d on FEILD_DEFINITION");

    let help = err
        .notes()
        .iter()
        .find(|note| note.kind == GraphQLErrorNoteKind::Help)
        .expect("expected a help note");
    assert_eq!(help.message, "did you mean `FIELD_DEFINITION`?");
}

/// Location names are case-sensitive.
#[test]
fn lowercase_location_is_error() {
    let err = utils::parse_error("directive @d on field");

    assert!(matches!(
        err.kind(),
        GraphQLParseErrorKind::UnknownDirectiveLocation { name } if name == "field",
    ));
}

#[test]
fn missing_on_is_error() {
    let err = utils::parse_error("directive @d FIELD");

    assert_eq!(err.message(), "expected `on`, found name `FIELD`");
}

#[test]
fn missing_at_is_error() {
    let err = utils::parse_error("directive d on FIELD");

    assert_eq!(err.message(), "expected `@`, found name `d`");
}

#[test]
fn empty_argument_definitions_are_error() {
    let err = utils::parse_error("directive @d() on FIELD");

    assert_eq!(
        err.kind(),
        &GraphQLParseErrorKind::InvalidEmptyConstruct {
            construct: "argument list".to_string(),
        },
    );
}

// =============================================================================
// Directive annotations
// =============================================================================

/// Annotation argument values are kept verbatim.
#[test]
fn annotation_arguments_are_raw() {
    let def = utils::parse_single_type(
        r#"scalar S @a @b(int: -1, float: 2.5e3, str: "x", block: """y""", enum: RED, bool: false)"#,
    );

    let directives = def.directives();
    assert_eq!(directives.len(), 2);
    assert_eq!(directives[0].name, "a");
    assert!(directives[0].arguments.is_empty());

    let b = &directives[1];
    assert_eq!(b.argument("int"), Some("-1"));
    assert_eq!(b.argument("float"), Some("2.5e3"));
    assert_eq!(b.argument("str"), Some("\"x\""));
    assert_eq!(b.argument("block"), Some("\"\"\"y\"\"\""));
    assert_eq!(b.argument("enum"), Some("RED"));
    assert_eq!(b.argument("bool"), Some("false"));
    assert_eq!(b.argument("missing"), None);
}

#[test]
fn empty_annotation_arguments_are_error() {
    let err = utils::parse_error("scalar S @d()");

    assert_eq!(
        err.kind(),
        &GraphQLParseErrorKind::InvalidEmptyConstruct {
            construct: "directive argument list".to_string(),
        },
    );
}

/// Annotations are allowed on every describable element.
#[test]
fn annotations_on_nested_elements() {
    let source = r#"
        type T @t {
          f(a: Int @arg): Int @field
        }
    "#;
    let def = utils::parse_single_type(source);

    assert_eq!(def.directives()[0].name, "t");
    let crate::ast::TypeDefinition::Object(object) = def else {
        panic!("expected an object type");
    };
    assert_eq!(object.fields[0].directives[0].name, "field");
    assert_eq!(object.fields[0].arguments[0].directives[0].name, "arg");
}
