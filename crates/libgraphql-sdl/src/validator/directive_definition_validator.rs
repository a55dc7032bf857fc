use crate::SchemaValidationError;
use crate::validator::DirectiveReferenceWalk;
use crate::validator::LookupTables;
use crate::validator::RESERVED_NAME_PREFIX;
use crate::validator::Result;
use libgraphql_sdl_parser::ast::DirectiveDefinition;
use libgraphql_sdl_parser::ast::DirectiveLocation;
use libgraphql_sdl_parser::ast::InputValueDefinition;
use libgraphql_sdl_parser::ast::TypeKind;

/// Checks every directive definition in `lookup_tables`, in definition
/// order, stopping at the first violation.
pub fn validate_directive_definitions(lookup_tables: &LookupTables) -> Result<()> {
    for directive_def in lookup_tables.directives().values() {
        DirectiveDefinitionValidator::new(directive_def, lookup_tables).validate()?;
    }
    Ok(())
}

struct DirectiveDefinitionValidator<'a> {
    directive_def: &'a DirectiveDefinition,
    lookup_tables: &'a LookupTables,
}

impl<'a> DirectiveDefinitionValidator<'a> {
    fn new(directive_def: &'a DirectiveDefinition, lookup_tables: &'a LookupTables) -> Self {
        Self {
            directive_def,
            lookup_tables,
        }
    }

    fn validate(&self) -> Result<()> {
        log::trace!("Validating directive definition `@{}`.", self.directive_def.name);

        if self.directive_def.name.starts_with(RESERVED_NAME_PREFIX) {
            return Err(SchemaValidationError::ReservedDirectiveName {
                directive_name: self.directive_def.name.to_string(),
                def_span: self.directive_def.span.clone(),
            });
        }

        for argument in &self.directive_def.arguments {
            self.validate_argument(argument)?;
        }
        Ok(())
    }

    fn validate_argument(&self, argument: &'a InputValueDefinition) -> Result<()> {
        let directive_name = &self.directive_def.name;

        if argument.name.starts_with(RESERVED_NAME_PREFIX) {
            return Err(SchemaValidationError::ReservedArgumentName {
                directive_name: directive_name.to_string(),
                argument_name: argument.name.to_string(),
                def_span: argument.span.clone(),
            });
        }

        let type_name = argument.value_type.innermost_type_name();
        let Some(argument_type) = self.lookup_tables.type_definition(type_name) else {
            return Err(SchemaValidationError::UndefinedArgumentType {
                directive_name: directive_name.to_string(),
                argument_name: argument.name.to_string(),
                type_name: type_name.to_string(),
                def_span: argument.span.clone(),
            });
        };

        // Arguments can not be declared with an output type.
        //
        // https://spec.graphql.org/September2025/#sec-Type-System.Directives.Validation
        let kind = argument_type.kind();
        if !kind.is_input_type() {
            return Err(SchemaValidationError::NonInputArgumentType {
                directive_name: directive_name.to_string(),
                argument_name: argument.name.to_string(),
                type_name: type_name.to_string(),
                kind,
                def_span: argument.span.clone(),
            });
        }

        if self.locations_cover_kind(kind) {
            let walk = DirectiveReferenceWalk::new(self.lookup_tables, directive_name);
            if let Some(reference_path) = walk.find_in_type(argument_type) {
                return Err(self.self_reference_error(argument, reference_path));
            }
        }

        if self.directive_def.allows_location(DirectiveLocation::ArgumentDefinition) {
            let walk = DirectiveReferenceWalk::new(self.lookup_tables, directive_name);
            if let Some(reference_path) = walk.find_in_annotations(&argument.directives) {
                return Err(self.self_reference_error(argument, reference_path));
            }
        }

        Ok(())
    }

    /// Whether this directive may be applied somewhere on a type of `kind`
    /// (the type itself or its enum values / input fields).
    fn locations_cover_kind(&self, kind: TypeKind) -> bool {
        let locations: &[DirectiveLocation] = match kind {
            TypeKind::Enum => &[DirectiveLocation::Enum, DirectiveLocation::EnumValue],
            TypeKind::InputObject => &[
                DirectiveLocation::InputObject,
                DirectiveLocation::InputFieldDefinition,
            ],
            TypeKind::Scalar => &[DirectiveLocation::Scalar],
            TypeKind::Interface | TypeKind::Object | TypeKind::Union => &[],
        };
        locations
            .iter()
            .any(|location| self.directive_def.allows_location(*location))
    }

    fn self_reference_error(
        &self,
        argument: &InputValueDefinition,
        reference_path: Vec<String>,
    ) -> SchemaValidationError {
        SchemaValidationError::SelfReferencingDirective {
            directive_name: self.directive_def.name.to_string(),
            argument_name: argument.name.to_string(),
            reference_path,
            def_span: self.directive_def.span.clone(),
        }
    }
}
