//! Tests for combining parsed documents.

use crate::ast;
use crate::ast::merge_documents;
use crate::tests::utils;

fn type_names(document: &ast::TypeSystemExtensionDocument) -> Vec<&str> {
    document.type_definitions.iter().map(|def| def.name()).collect()
}

/// The merged document holds self's definitions followed by each other's.
#[test]
fn merge_preserves_order() {
    let a = utils::parse_document("scalar A directive @a on FIELD");
    let b = utils::parse_document("scalar B schema { query: B }");
    let c = utils::parse_document("scalar C extend scalar A @a directive @c on ENUM");

    let merged = a.merge([&b, &c]);

    assert_eq!(type_names(&merged), vec!["A", "B", "C"]);
    let directive_names: Vec<_> =
        merged.directive_definitions.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(directive_names, vec!["a", "c"]);
    assert_eq!(merged.schema_definitions.len(), 1);
    assert_eq!(merged.type_extensions.len(), 1);
}

/// Merging never deduplicates.
#[test]
fn merge_keeps_duplicates() {
    let a = utils::parse_document("scalar Dup");
    let b = utils::parse_document("scalar Dup");

    let merged = a.merge([&b]);

    assert_eq!(type_names(&merged), vec!["Dup", "Dup"]);
    assert_eq!(merged.type_definition("Dup"), Some(&a.type_definitions[0]));
}

/// Inputs are left unchanged.
#[test]
fn merge_does_not_modify_inputs() {
    let a = utils::parse_document("scalar A");
    let b = utils::parse_document("scalar B");
    let (a_before, b_before) = (a.clone(), b.clone());

    let _ = a.merge([&b]);

    assert_eq!(a, a_before);
    assert_eq!(b, b_before);
}

/// Merging with nothing yields a copy; merging empties yields an empty
/// document.
#[test]
fn merge_with_empty() {
    let a = utils::parse_document("scalar A");

    assert_eq!(a.merge([]), a);
    let empty = ast::TypeSystemExtensionDocument::new();
    assert!(empty.merge([&empty]).is_empty());
}

/// merge_documents consumes owned documents in order.
#[test]
fn merge_documents_in_order() {
    let merged = merge_documents(vec![
        utils::parse_document("scalar X"),
        utils::parse_document("scalar Y"),
        utils::parse_document("directive @z on SCALAR"),
    ]);

    assert_eq!(type_names(&merged), vec!["X", "Y"]);
    assert!(merged.directive_definition("z").is_some());
    assert!(merged.directive_definition("x").is_none());
}
