use crate::ast::DirectiveDefinition;
use crate::ast::SchemaDefinition;
use crate::ast::SchemaExtension;
use crate::ast::TypeDefinition;
use crate::ast::TypeExtension;

/// Everything parsed from one or more SDL sources.
///
/// Type definitions are kept as an ordered list rather than a map so that
/// two definitions with the same name survive parsing and merging; the
/// validator reports such collisions when it builds its lookup tables.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct TypeSystemExtensionDocument {
    pub type_definitions: Vec<TypeDefinition>,
    pub schema_definitions: Vec<SchemaDefinition>,
    pub directive_definitions: Vec<DirectiveDefinition>,
    pub type_extensions: Vec<TypeExtension>,
    pub schema_extensions: Vec<SchemaExtension>,
}

impl TypeSystemExtensionDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new document holding the definitions of `self` followed by
    /// those of each of `others`, in order.
    ///
    /// Neither input is modified and no duplicate detection happens here.
    pub fn merge<'a>(
        &self,
        others: impl IntoIterator<Item = &'a TypeSystemExtensionDocument>,
    ) -> TypeSystemExtensionDocument {
        let mut merged = self.clone();
        for other in others {
            merged.append(other.clone());
        }
        merged
    }

    fn append(&mut self, other: TypeSystemExtensionDocument) {
        self.type_definitions.extend(other.type_definitions);
        self.schema_definitions.extend(other.schema_definitions);
        self.directive_definitions.extend(other.directive_definitions);
        self.type_extensions.extend(other.type_extensions);
        self.schema_extensions.extend(other.schema_extensions);
    }

    /// The first type definition named `name`.
    pub fn type_definition(&self, name: &str) -> Option<&TypeDefinition> {
        self.type_definitions.iter().find(|def| def.name() == name)
    }

    /// The first directive definition named `name` (without the `@`).
    pub fn directive_definition(&self, name: &str) -> Option<&DirectiveDefinition> {
        self.directive_definitions.iter().find(|def| def.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.type_definitions.is_empty()
            && self.schema_definitions.is_empty()
            && self.directive_definitions.is_empty()
            && self.type_extensions.is_empty()
            && self.schema_extensions.is_empty()
    }
}

/// Combines owned documents into one, preserving their order.
///
/// Used to join the results of parsing several sources (possibly in
/// parallel) without cloning them again.
pub fn merge_documents(
    documents: impl IntoIterator<Item = TypeSystemExtensionDocument>,
) -> TypeSystemExtensionDocument {
    documents
        .into_iter()
        .fold(TypeSystemExtensionDocument::new(), |mut merged, doc| {
            merged.append(doc);
            merged
        })
}
