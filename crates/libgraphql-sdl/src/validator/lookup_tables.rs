use crate::SchemaValidationError;
use crate::validator::Result;
use indexmap::IndexMap;
use indexmap::map::Entry;
use libgraphql_sdl_parser::ast::DirectiveDefinition;
use libgraphql_sdl_parser::ast::TypeDefinition;
use libgraphql_sdl_parser::ast::TypeExtension;

/// Name-indexed tables of every type and directive definition in a merged
/// document.
///
/// Both tables keep insertion order, so builtins come first and user
/// definitions follow in source order.
#[derive(Clone, Debug, Default)]
pub struct LookupTables {
    types: IndexMap<String, TypeDefinition>,
    directives: IndexMap<String, DirectiveDefinition>,
}

impl LookupTables {
    /// Indexes the given definitions, failing on the first name defined
    /// twice.
    pub fn build(
        type_definitions: impl IntoIterator<Item = TypeDefinition>,
        directive_definitions: impl IntoIterator<Item = DirectiveDefinition>,
    ) -> Result<Self> {
        let mut tables = Self::default();
        for type_def in type_definitions {
            tables.add_type_definition(type_def)?;
        }
        for directive_def in directive_definitions {
            tables.add_directive_definition(directive_def)?;
        }
        Ok(tables)
    }

    pub fn add_type_definition(&mut self, type_def: TypeDefinition) -> Result<()> {
        match self.types.entry(type_def.name().to_string()) {
            Entry::Occupied(existing) => Err(SchemaValidationError::DuplicateTypeDefinition {
                type_name: existing.key().to_string(),
                def1: existing.get().span().clone(),
                def2: type_def.span().clone(),
            }),
            Entry::Vacant(slot) => {
                slot.insert(type_def);
                Ok(())
            },
        }
    }

    pub fn add_directive_definition(&mut self, directive_def: DirectiveDefinition) -> Result<()> {
        match self.directives.entry(directive_def.name.to_string()) {
            Entry::Occupied(existing) => Err(SchemaValidationError::DuplicateDirectiveDefinition {
                directive_name: existing.key().to_string(),
                def1: existing.get().span().clone(),
                def2: directive_def.span().clone(),
            }),
            Entry::Vacant(slot) => {
                slot.insert(directive_def);
                Ok(())
            },
        }
    }

    /// Folds each extension into the definition it extends, in order.
    pub fn apply_type_extensions(
        &mut self,
        extensions: impl IntoIterator<Item = TypeExtension>,
    ) -> Result<()> {
        for extension in extensions {
            self.apply_type_extension(extension)?;
        }
        Ok(())
    }

    fn apply_type_extension(&mut self, extension: TypeExtension) -> Result<()> {
        let type_name = extension.name().to_string();
        let Some(base) = self.types.get_mut(&type_name) else {
            return Err(SchemaValidationError::ExtensionOfUndefinedType {
                type_name,
                ext_span: extension.span().clone(),
            });
        };
        let base_kind = base.kind();

        match (base, extension) {
            (TypeDefinition::Object(base), TypeExtension::Object(ext)) => {
                base.interfaces.extend(ext.interfaces);
                base.directives.extend(ext.directives);
                base.fields.extend(ext.fields);
            },
            (TypeDefinition::Interface(base), TypeExtension::Interface(ext)) => {
                base.interfaces.extend(ext.interfaces);
                base.directives.extend(ext.directives);
                base.fields.extend(ext.fields);
            },
            (TypeDefinition::Union(base), TypeExtension::Union(ext)) => {
                base.directives.extend(ext.directives);
                base.members.extend(ext.members);
            },
            (TypeDefinition::Enum(base), TypeExtension::Enum(ext)) => {
                base.directives.extend(ext.directives);
                base.values.extend(ext.values);
            },
            (TypeDefinition::InputObject(base), TypeExtension::InputObject(ext)) => {
                base.directives.extend(ext.directives);
                base.fields.extend(ext.fields);
            },
            (TypeDefinition::Scalar(base), TypeExtension::Scalar(ext)) => {
                base.directives.extend(ext.directives);
            },
            (_, extension) => {
                return Err(SchemaValidationError::ExtensionKindMismatch {
                    type_name,
                    base_kind,
                    extension_keyword: extension.kind().keyword(),
                    ext_span: extension.span().clone(),
                });
            },
        }

        log::trace!("Applied extension to {base_kind} type `{type_name}`.");
        Ok(())
    }

    pub fn type_definition(&self, name: &str) -> Option<&TypeDefinition> {
        self.types.get(name)
    }

    pub fn directive_definition(&self, name: &str) -> Option<&DirectiveDefinition> {
        self.directives.get(name)
    }

    pub fn types(&self) -> &IndexMap<String, TypeDefinition> {
        &self.types
    }

    pub fn directives(&self) -> &IndexMap<String, DirectiveDefinition> {
        &self.directives
    }

    pub(crate) fn into_parts(
        self,
    ) -> (IndexMap<String, TypeDefinition>, IndexMap<String, DirectiveDefinition>) {
        (self.types, self.directives)
    }
}
