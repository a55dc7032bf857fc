use crate::SchemaValidationError;
use crate::tests::utils;
use libgraphql_sdl_parser::ast::OperationType;

// =============================================================================
// Default names
// =============================================================================

#[test]
fn default_root_names() {
    let schema = utils::valid_schema("type Query { a: Int }\ntype Mutation { a: Int }");

    assert_eq!(schema.root_operation_type_name(OperationType::Query), Some("Query"));
    assert_eq!(schema.root_operation_type_name(OperationType::Mutation), Some("Mutation"));
    assert_eq!(schema.root_operation_type_name(OperationType::Subscription), None);
    assert_eq!(schema.query_type().unwrap().name, "Query");
}

/// A default-named type that is not an object type is not a root.
#[test]
fn default_name_with_wrong_kind_is_skipped() {
    let schema = utils::valid_schema("scalar Query");

    assert_eq!(schema.root_operation_type_name(OperationType::Query), None);
    assert!(schema.query_type().is_none());
}

// =============================================================================
// Explicit roots
// =============================================================================

/// Explicit roots replace the defaults entirely.
#[test]
fn explicit_roots() {
    let schema = utils::valid_schema(
        "schema { query: Root }\ntype Root { a: Int }\ntype Query { a: Int }\ntype Mutation { a: Int }",
    );

    assert_eq!(schema.root_operation_type_name(OperationType::Query), Some("Root"));
    assert_eq!(schema.root_operation_type_name(OperationType::Mutation), None);
}

#[test]
fn schema_extension_adds_root() {
    let schema = utils::valid_schema(
        "schema { query: Q }\nextend schema { mutation: M }\ntype Q { a: Int }\ntype M { a: Int }",
    );

    assert_eq!(schema.query_type().unwrap().name, "Q");
    assert_eq!(schema.mutation_type().unwrap().name, "M");
}

#[test]
fn schema_extension_without_definition() {
    let schema = utils::valid_schema("extend schema { subscription: Events }\ntype Events { a: Int }");

    assert_eq!(schema.subscription_type().unwrap().name, "Events");
    assert!(schema.query_type().is_none());
}

/// An extension carrying only directives keeps the defaults.
#[test]
fn directive_only_schema_extension_keeps_defaults() {
    let schema = utils::valid_schema(
        "directive @tag on SCHEMA\nextend schema @tag\ntype Query { a: Int }",
    );

    assert_eq!(schema.query_type().unwrap().name, "Query");
}

/// Without a schema definition, extensions add to the default roots.
#[test]
fn schema_extension_amends_default_roots() {
    let schema = utils::valid_schema(
        "type Query { a: Int }
type M { a: Int }
extend schema { mutation: M }",
    );

    assert_eq!(schema.query_type().unwrap().name, "Query");
    assert_eq!(schema.mutation_type().unwrap().name, "M");
    assert_eq!(schema.root_operation_type_name(OperationType::Subscription), None);
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn duplicate_schema_definition() {
    let sdl = "schema { query: Q }\nschema { query: Q }\ntype Q { a: Int }";
    let err = utils::validation_error(sdl);

    let SchemaValidationError::DuplicateSchemaDefinition { def1, def2 } = err else {
        panic!("expected a duplicate schema error, got {err:?}");
    };
    assert_eq!(def1.start_inclusive.line(), 0);
    assert_eq!(def2.start_inclusive.line(), 1);
}

#[test]
fn duplicate_root_via_extension() {
    let err = utils::validation_error(
        "schema { query: Q }\nextend schema { query: Q2 }\ntype Q { a: Int }\ntype Q2 { a: Int }",
    );

    assert!(matches!(
        err,
        SchemaValidationError::DuplicateRootOperationType { operation: OperationType::Query, .. },
    ));
}

/// A default root counts as declared, so an extension cannot replace it.
#[test]
fn extension_redeclaring_default_root() {
    let err = utils::validation_error(
        "type Query { a: Int }
type Mutation { a: Int }
type M { a: Int }
         extend schema { mutation: M }",
    );

    let SchemaValidationError::DuplicateRootOperationType { operation, def_span } = err else {
        panic!("expected a duplicate root error, got {err:?}");
    };
    assert_eq!(operation, OperationType::Mutation);
    assert_eq!(def_span.start_inclusive.line(), 3);
}

#[test]
fn undefined_root_type() {
    let err = utils::validation_error("schema { query: Missing }");

    assert_eq!(err.to_string(), "root query type `Missing` must be a defined object type");
}

#[test]
fn non_object_root_type() {
    let err = utils::validation_error("schema { mutation: In }\ninput In { a: Int }");

    assert!(matches!(
        err,
        SchemaValidationError::UndefinedRootOperationType {
            operation: OperationType::Mutation,
            type_name,
            ..
        } if type_name == "In",
    ));
}

/// The error points at the declaration naming the bad type.
#[test]
fn undefined_root_type_from_extension_has_span() {
    let err = utils::validation_error("type Query { a: Int }
extend schema { mutation: Missing }");

    let SchemaValidationError::UndefinedRootOperationType { def_span, .. } = err else {
        panic!("expected an undefined root error, got {err:?}");
    };
    assert_eq!(def_span.start_inclusive.line(), 1);
}
