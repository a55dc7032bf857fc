//! Recursive-descent parser for GraphQL type-system documents.
//!
//! Every grammar production has a `parse_*` method returning
//! `crate::Result<Node>`. There is no error recovery: the first unexpected
//! token becomes the error for the whole document and is propagated with `?`
//! straight out of [`GraphQLParser::parse_type_system_document`].
//!
//! One token of lookahead always decides which production to take, so the
//! parser never backtracks.

use crate::GraphQLParseError;
use crate::GraphQLParseErrorKind;
use crate::GraphQLSourceSpan;
use crate::GraphQLTokenStream;
use crate::Source;
use crate::SourcePosition;
use crate::ast;
use crate::graphql_token_stream::unexpected_token;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::token_source::GraphQLTokenSource;
use crate::token_source::StrGraphQLTokenSource;

/// Parses a single [`Source`] into a document. The source's name is attached
/// to every AST node span and to any error.
///
/// ```
/// use libgraphql_sdl_parser::Source;
/// use libgraphql_sdl_parser::parse_source;
///
/// let source = Source::new("schema.graphql", "type Query { hello: String }");
/// let document = parse_source(&source).unwrap();
/// assert_eq!(document.type_definitions.len(), 1);
/// ```
pub fn parse_source(source: &Source) -> crate::Result<ast::TypeSystemExtensionDocument> {
    GraphQLParser::new(source.body())
        .with_source_name(source.name())
        .parse_type_system_document()
        .map_err(|err| err.with_source_name(source.name()))
}

/// Root operation type names collected from a `{ query: ... }` block.
#[derive(Default)]
struct RootOperationTypeNames {
    query: Option<String>,
    mutation: Option<String>,
    subscription: Option<String>,
}

impl RootOperationTypeNames {
    fn slot(&mut self, operation: ast::OperationType) -> &mut Option<String> {
        match operation {
            ast::OperationType::Query => &mut self.query,
            ast::OperationType::Mutation => &mut self.mutation,
            ast::OperationType::Subscription => &mut self.subscription,
        }
    }
}

/// A recursive-descent parser over any [`GraphQLTokenSource`].
pub struct GraphQLParser<'src, TTokenSource: GraphQLTokenSource<'src>> {
    token_stream: GraphQLTokenStream<'src, TTokenSource>,

    /// Current type-annotation nesting depth. Bounded so that inputs like
    /// `[[[[[...` cannot overflow the stack.
    recursion_depth: usize,

    /// Attached to the span of every AST node produced.
    source_name: Option<String>,
}

impl<'src> GraphQLParser<'src, StrGraphQLTokenSource<'src>> {
    /// Creates a parser over SDL text.
    ///
    /// ```
    /// use libgraphql_sdl_parser::GraphQLParser;
    ///
    /// let document = GraphQLParser::new("scalar Date")
    ///     .parse_type_system_document()
    ///     .unwrap();
    /// assert_eq!(document.type_definitions[0].name(), "Date");
    /// ```
    pub fn new<S: AsRef<str> + ?Sized>(source: &'src S) -> Self {
        Self::from_token_source(StrGraphQLTokenSource::new(source.as_ref()))
    }
}

impl<'src, TTokenSource: GraphQLTokenSource<'src>> GraphQLParser<'src, TTokenSource> {
    /// Maximum nesting depth of type annotations. Far beyond anything a real
    /// schema uses.
    const MAX_RECURSION_DEPTH: usize = 64;

    pub fn from_token_source(token_source: TTokenSource) -> Self {
        Self {
            token_stream: GraphQLTokenStream::new(token_source),
            recursion_depth: 0,
            source_name: None,
        }
    }

    /// Names the source being parsed, so node spans can be traced back to
    /// it after documents are merged.
    pub fn with_source_name(mut self, name: impl Into<String>) -> Self {
        self.source_name = Some(name.into());
        self
    }

    // =========================================================================
    // Token helpers
    // =========================================================================

    fn peek_is(&mut self, kind: &GraphQLTokenKind<'_>) -> bool {
        self.token_stream.peek_is_kind(kind)
    }

    fn consume_if(&mut self, kind: GraphQLTokenKind<'static>) -> bool {
        self.token_stream.consume_if_kind(&[kind]).is_some()
    }

    /// Consumes a punctuator of the given kind or fails naming it.
    fn expect(&mut self, kind: GraphQLTokenKind<'static>) -> crate::Result<GraphQLToken<'src>> {
        let expected = match kind.punctuator_str() {
            Some(punctuator) => format!("`{punctuator}`"),
            None => kind.category().to_string(),
        };
        self.token_stream.require_kind(&[kind], &expected)
    }

    fn expect_name(&mut self, expected: &str) -> crate::Result<String> {
        self.token_stream.require_name(expected).map(|(name, _)| name)
    }

    /// Start position of the next token; the beginning of whatever node is
    /// about to be parsed.
    fn peek_start(&mut self) -> SourcePosition {
        self.token_stream.peek().span.start_inclusive.clone()
    }

    /// Span from `start` through the end of the last consumed token.
    fn span_from(&self, start: SourcePosition) -> GraphQLSourceSpan {
        let end = self.token_stream.last_end().clone();
        match &self.source_name {
            Some(name) => GraphQLSourceSpan::with_source(start, end, name.as_str()),
            None => GraphQLSourceSpan::new(start, end),
        }
    }

    fn enter_recursion(&mut self) -> crate::Result<()> {
        self.recursion_depth += 1;
        if self.recursion_depth > Self::MAX_RECURSION_DEPTH {
            let span = self.token_stream.peek().span.clone();
            return Err(GraphQLParseError::new(
                format!(
                    "type annotation nested more than {} levels deep",
                    Self::MAX_RECURSION_DEPTH,
                ),
                span,
                GraphQLParseErrorKind::RecursionLimitExceeded {
                    limit: Self::MAX_RECURSION_DEPTH,
                },
            ));
        }
        Ok(())
    }

    fn exit_recursion(&mut self) {
        self.recursion_depth -= 1;
    }

    /// Fails if the next token closes the block that was just opened.
    fn reject_empty(
        &mut self,
        closer: &GraphQLTokenKind<'_>,
        construct: &str,
    ) -> crate::Result<()> {
        if !self.peek_is(closer) {
            return Ok(());
        }
        let span = self.token_stream.next().span;
        Err(GraphQLParseError::new(
            format!("{construct} must not be empty"),
            span,
            GraphQLParseErrorKind::InvalidEmptyConstruct {
                construct: construct.to_string(),
            },
        ))
    }

    // =========================================================================
    // Document parsing (public API)
    // =========================================================================

    /// Parses the whole input as a type-system document.
    ///
    /// Returns the first syntax error encountered instead of a document;
    /// nothing parsed before the error is kept.
    pub fn parse_type_system_document(
        mut self,
    ) -> crate::Result<ast::TypeSystemExtensionDocument> {
        let mut document = ast::TypeSystemExtensionDocument::new();

        loop {
            let start = self.peek_start();
            let description = self.token_stream.read_optional_description();

            let keyword = match &self.token_stream.peek().kind {
                GraphQLTokenKind::Eof if description.is_none() => break,
                GraphQLTokenKind::Name(name) => name.to_string(),
                _ => {
                    let found = self.token_stream.next();
                    return Err(unexpected_token(found, &["a type-system definition"]));
                },
            };

            match keyword.as_str() {
                "type" => {
                    let def = self.parse_object_type_definition(description, start)?;
                    document.type_definitions.push(ast::TypeDefinition::Object(def));
                },
                "interface" => {
                    let def = self.parse_interface_type_definition(description, start)?;
                    document.type_definitions.push(ast::TypeDefinition::Interface(def));
                },
                "union" => {
                    let def = self.parse_union_type_definition(description, start)?;
                    document.type_definitions.push(ast::TypeDefinition::Union(def));
                },
                "enum" => {
                    let def = self.parse_enum_type_definition(description, start)?;
                    document.type_definitions.push(ast::TypeDefinition::Enum(def));
                },
                "input" => {
                    let def = self.parse_input_object_type_definition(description, start)?;
                    document.type_definitions.push(ast::TypeDefinition::InputObject(def));
                },
                "scalar" => {
                    let def = self.parse_scalar_type_definition(description, start)?;
                    document.type_definitions.push(ast::TypeDefinition::Scalar(def));
                },
                "directive" => {
                    let def = self.parse_directive_definition(description, start)?;
                    document.directive_definitions.push(def);
                },
                "schema" => {
                    let def = self.parse_schema_definition(description, start)?;
                    document.schema_definitions.push(def);
                },
                "extend" if description.is_none() => {
                    self.parse_extension(&mut document, start)?;
                },
                "extend" => {
                    let found = self.token_stream.next();
                    let mut err = unexpected_token(found, &["a type-system definition"]);
                    err.add_note("extensions cannot have a description");
                    return Err(err);
                },
                _ => return Err(self.unknown_definition_keyword(keyword)),
            }
        }

        Ok(document)
    }

    fn unknown_definition_keyword(&mut self, keyword: String) -> GraphQLParseError {
        let span = self.token_stream.next().span;
        let mut err = GraphQLParseError::new(
            format!("`{keyword}` does not start a type-system definition"),
            span,
            GraphQLParseErrorKind::UnknownDefinitionKeyword {
                keyword: keyword.clone(),
            },
        );
        if matches!(keyword.as_str(), "query" | "mutation" | "subscription" | "fragment") {
            err.add_note("executable definitions are not allowed in a type-system document");
        } else {
            err.add_help(
                "expected one of `type`, `interface`, `union`, `enum`, `input`, \
                 `scalar`, `directive`, `schema` or `extend`",
            );
        }
        err
    }

    // =========================================================================
    // Type definitions
    // =========================================================================

    fn parse_object_type_definition(
        &mut self,
        description: Option<String>,
        start: SourcePosition,
    ) -> crate::Result<ast::ObjectTypeDefinition> {
        self.token_stream.require_keyword("type")?;
        let name = self.expect_name("an object type name")?;
        let interfaces = self.parse_implements_interfaces()?;
        let directives = self.parse_directive_annotations()?;
        let fields = self.parse_fields_definition()?;

        Ok(ast::ObjectTypeDefinition {
            description,
            name,
            interfaces,
            directives,
            fields,
            span: self.span_from(start),
        })
    }

    fn parse_interface_type_definition(
        &mut self,
        description: Option<String>,
        start: SourcePosition,
    ) -> crate::Result<ast::InterfaceTypeDefinition> {
        self.token_stream.require_keyword("interface")?;
        let name = self.expect_name("an interface name")?;
        let interfaces = self.parse_implements_interfaces()?;
        let directives = self.parse_directive_annotations()?;
        let fields = self.parse_fields_definition()?;

        Ok(ast::InterfaceTypeDefinition {
            description,
            name,
            interfaces,
            directives,
            fields,
            span: self.span_from(start),
        })
    }

    fn parse_union_type_definition(
        &mut self,
        description: Option<String>,
        start: SourcePosition,
    ) -> crate::Result<ast::UnionTypeDefinition> {
        self.token_stream.require_keyword("union")?;
        let name = self.expect_name("a union name")?;
        let directives = self.parse_directive_annotations()?;
        self.expect(GraphQLTokenKind::Equals)?;
        let members = self.parse_union_member_types()?;

        Ok(ast::UnionTypeDefinition {
            description,
            name,
            directives,
            members,
            span: self.span_from(start),
        })
    }

    fn parse_enum_type_definition(
        &mut self,
        description: Option<String>,
        start: SourcePosition,
    ) -> crate::Result<ast::EnumTypeDefinition> {
        self.token_stream.require_keyword("enum")?;
        let name = self.expect_name("an enum name")?;
        let directives = self.parse_directive_annotations()?;
        let values = self.parse_enum_values_definition()?;

        Ok(ast::EnumTypeDefinition {
            description,
            name,
            directives,
            values,
            span: self.span_from(start),
        })
    }

    fn parse_input_object_type_definition(
        &mut self,
        description: Option<String>,
        start: SourcePosition,
    ) -> crate::Result<ast::InputObjectTypeDefinition> {
        self.token_stream.require_keyword("input")?;
        let name = self.expect_name("an input object name")?;
        let directives = self.parse_directive_annotations()?;
        let fields = self.parse_input_fields_definition()?;

        Ok(ast::InputObjectTypeDefinition {
            description,
            name,
            directives,
            fields,
            span: self.span_from(start),
        })
    }

    fn parse_scalar_type_definition(
        &mut self,
        description: Option<String>,
        start: SourcePosition,
    ) -> crate::Result<ast::ScalarTypeDefinition> {
        self.token_stream.require_keyword("scalar")?;
        let name = self.expect_name("a scalar name")?;
        let directives = self.parse_directive_annotations()?;

        Ok(ast::ScalarTypeDefinition {
            description,
            name,
            directives,
            span: self.span_from(start),
        })
    }

    // =========================================================================
    // Directive definitions
    // =========================================================================

    /// `directive @name(args)? repeatable? on LOCATION | ...`
    fn parse_directive_definition(
        &mut self,
        description: Option<String>,
        start: SourcePosition,
    ) -> crate::Result<ast::DirectiveDefinition> {
        self.token_stream.require_keyword("directive")?;
        self.expect(GraphQLTokenKind::At)?;
        let name = self.expect_name("a directive name")?;
        let arguments = if self.peek_is(&GraphQLTokenKind::ParenOpen) {
            self.parse_arguments_definition()?
        } else {
            Vec::new()
        };
        let repeatable = self.token_stream.consume_keyword_if("repeatable");
        self.token_stream.require_keyword("on")?;
        let locations = self.parse_directive_locations()?;

        Ok(ast::DirectiveDefinition {
            description,
            name,
            arguments,
            repeatable,
            locations,
            span: self.span_from(start),
        })
    }

    fn parse_directive_locations(&mut self) -> crate::Result<Vec<ast::DirectiveLocation>> {
        self.consume_if(GraphQLTokenKind::Pipe);

        let mut locations = vec![self.parse_directive_location()?];
        while self.consume_if(GraphQLTokenKind::Pipe) {
            locations.push(self.parse_directive_location()?);
        }
        Ok(locations)
    }

    fn parse_directive_location(&mut self) -> crate::Result<ast::DirectiveLocation> {
        let (name, span) = self.token_stream.require_name("a directive location")?;

        if let Some(location) = ast::DirectiveLocation::from_name(&name) {
            return Ok(location);
        }

        let mut err = GraphQLParseError::new(
            format!("unknown directive location `{name}`"),
            span,
            GraphQLParseErrorKind::UnknownDirectiveLocation { name: name.clone() },
        );
        if let Some(suggestion) = suggest_directive_location(&name) {
            err.add_help(format!("did you mean `{suggestion}`?"));
        }
        err.add_spec("https://spec.graphql.org/September2025/#DirectiveLocations");
        Err(err)
    }

    // =========================================================================
    // Schema definitions
    // =========================================================================

    fn parse_schema_definition(
        &mut self,
        description: Option<String>,
        start: SourcePosition,
    ) -> crate::Result<ast::SchemaDefinition> {
        self.token_stream.require_keyword("schema")?;
        let directives = self.parse_directive_annotations()?;
        let roots = self.parse_root_operation_types()?;

        Ok(ast::SchemaDefinition {
            description,
            directives,
            query: roots.query,
            mutation: roots.mutation,
            subscription: roots.subscription,
            span: self.span_from(start),
        })
    }

    /// `{ query: Query mutation: Mutation ... }`
    fn parse_root_operation_types(&mut self) -> crate::Result<RootOperationTypeNames> {
        self.expect(GraphQLTokenKind::CurlyBraceOpen)?;
        self.reject_empty(&GraphQLTokenKind::CurlyBraceClose, "schema root operation block")?;

        let mut roots = RootOperationTypeNames::default();
        while !self.consume_if(GraphQLTokenKind::CurlyBraceClose) {
            let (keyword, span) = self
                .token_stream
                .require_name("`query`, `mutation` or `subscription`")?;

            let operation = ast::OperationType::from_keyword(&keyword).ok_or_else(|| {
                GraphQLParseError::new(
                    format!("unknown root operation `{keyword}`"),
                    span.clone(),
                    GraphQLParseErrorKind::UnknownRootOperation {
                        operation: keyword.clone(),
                    },
                )
            })?;
            if roots.slot(operation).is_some() {
                return Err(GraphQLParseError::new(
                    format!("root operation `{operation}` is declared more than once"),
                    span,
                    GraphQLParseErrorKind::DuplicateRootOperation {
                        operation: operation.keyword().to_string(),
                    },
                ));
            }

            self.expect(GraphQLTokenKind::Colon)?;
            let type_name = self.expect_name("a root operation type name")?;
            *roots.slot(operation) = Some(type_name);
        }
        Ok(roots)
    }

    // =========================================================================
    // Shared sub-grammars
    // =========================================================================

    /// `implements A & B`, with an optional leading `&`. Absent clause yields
    /// an empty list.
    fn parse_implements_interfaces(&mut self) -> crate::Result<Vec<String>> {
        if !self.token_stream.consume_keyword_if("implements") {
            return Ok(Vec::new());
        }
        self.consume_if(GraphQLTokenKind::Ampersand);

        let mut interfaces = vec![self.expect_name("an interface name")?];
        while self.consume_if(GraphQLTokenKind::Ampersand) {
            interfaces.push(self.expect_name("an interface name")?);
        }
        Ok(interfaces)
    }

    /// `A | B`, with an optional leading `|`.
    fn parse_union_member_types(&mut self) -> crate::Result<Vec<String>> {
        self.consume_if(GraphQLTokenKind::Pipe);

        let mut members = vec![self.expect_name("a union member type")?];
        while self.consume_if(GraphQLTokenKind::Pipe) {
            members.push(self.expect_name("a union member type")?);
        }
        Ok(members)
    }

    /// `{ field: Type ... }`; must hold at least one field.
    fn parse_fields_definition(&mut self) -> crate::Result<Vec<ast::FieldDefinition>> {
        self.expect(GraphQLTokenKind::CurlyBraceOpen)?;
        self.reject_empty(&GraphQLTokenKind::CurlyBraceClose, "fields block")?;

        let mut fields = Vec::new();
        while !self.consume_if(GraphQLTokenKind::CurlyBraceClose) {
            fields.push(self.parse_field_definition()?);
        }
        Ok(fields)
    }

    fn parse_field_definition(&mut self) -> crate::Result<ast::FieldDefinition> {
        let start = self.peek_start();
        let description = self.token_stream.read_optional_description();
        let name = self.expect_name("a field name")?;
        let arguments = if self.peek_is(&GraphQLTokenKind::ParenOpen) {
            self.parse_arguments_definition()?
        } else {
            Vec::new()
        };
        self.expect(GraphQLTokenKind::Colon)?;
        let field_type = self.parse_type_annotation()?;
        let directives = self.parse_directive_annotations()?;

        Ok(ast::FieldDefinition {
            description,
            name,
            arguments,
            field_type,
            directives,
            span: self.span_from(start),
        })
    }

    /// `( arg: Type ... )`; an empty `()` is an error.
    fn parse_arguments_definition(&mut self) -> crate::Result<Vec<ast::InputValueDefinition>> {
        self.expect(GraphQLTokenKind::ParenOpen)?;
        self.reject_empty(&GraphQLTokenKind::ParenClose, "argument list")?;

        let mut arguments = Vec::new();
        while !self.consume_if(GraphQLTokenKind::ParenClose) {
            arguments.push(self.parse_input_value_definition()?);
        }
        Ok(arguments)
    }

    /// `{ field: Type ... }` of an input object; must hold at least one
    /// field.
    fn parse_input_fields_definition(
        &mut self,
    ) -> crate::Result<Vec<ast::InputValueDefinition>> {
        self.expect(GraphQLTokenKind::CurlyBraceOpen)?;
        self.reject_empty(&GraphQLTokenKind::CurlyBraceClose, "input fields block")?;

        let mut fields = Vec::new();
        while !self.consume_if(GraphQLTokenKind::CurlyBraceClose) {
            fields.push(self.parse_input_value_definition()?);
        }
        Ok(fields)
    }

    /// `"desc"? name: Type (= default)? @directives*`
    fn parse_input_value_definition(&mut self) -> crate::Result<ast::InputValueDefinition> {
        let start = self.peek_start();
        let description = self.token_stream.read_optional_description();
        let name = self.expect_name("an argument or input field name")?;
        self.expect(GraphQLTokenKind::Colon)?;
        let value_type = self.parse_type_annotation()?;
        let default_value = if self.consume_if(GraphQLTokenKind::Equals) {
            Some(self.parse_raw_value("a default value")?)
        } else {
            None
        };
        let directives = self.parse_directive_annotations()?;

        Ok(ast::InputValueDefinition {
            description,
            name,
            value_type,
            default_value,
            directives,
            span: self.span_from(start),
        })
    }

    /// `{ VALUE @directives* ... }`; must hold at least one value.
    fn parse_enum_values_definition(&mut self) -> crate::Result<Vec<ast::EnumValueDefinition>> {
        self.expect(GraphQLTokenKind::CurlyBraceOpen)?;
        self.reject_empty(&GraphQLTokenKind::CurlyBraceClose, "enum values block")?;

        let mut values = Vec::new();
        while !self.consume_if(GraphQLTokenKind::CurlyBraceClose) {
            values.push(self.parse_enum_value_definition()?);
        }
        Ok(values)
    }

    fn parse_enum_value_definition(&mut self) -> crate::Result<ast::EnumValueDefinition> {
        let start = self.peek_start();
        let description = self.token_stream.read_optional_description();
        let (name, span) = self.token_stream.require_name("an enum value")?;
        if matches!(name.as_str(), "true" | "false" | "null") {
            return Err(GraphQLParseError::new(
                format!("`{name}` cannot be used as an enum value"),
                span,
                GraphQLParseErrorKind::UnexpectedToken {
                    expected: vec!["an enum value".to_string()],
                    found: format!("name `{name}`"),
                },
            ));
        }
        let directives = self.parse_directive_annotations()?;

        Ok(ast::EnumValueDefinition {
            description,
            name,
            directives,
            span: self.span_from(start),
        })
    }

    /// A type reference: `Name`, `[Type]`, either optionally followed by `!`.
    fn parse_type_annotation(&mut self) -> crate::Result<ast::TypeAnnotation> {
        self.enter_recursion()?;
        let result = self.parse_type_annotation_impl();
        self.exit_recursion();
        result
    }

    fn parse_type_annotation_impl(&mut self) -> crate::Result<ast::TypeAnnotation> {
        if self.consume_if(GraphQLTokenKind::SquareBracketOpen) {
            let element_type = self.parse_type_annotation()?;
            self.expect(GraphQLTokenKind::SquareBracketClose)?;
            let nullability = self.parse_nullability();
            Ok(ast::TypeAnnotation::list(element_type, nullability))
        } else {
            let name = self.expect_name("a type")?;
            let nullability = self.parse_nullability();
            Ok(ast::TypeAnnotation::named(name, nullability))
        }
    }

    fn parse_nullability(&mut self) -> ast::Nullability {
        if self.consume_if(GraphQLTokenKind::Bang) {
            ast::Nullability::NonNull
        } else {
            ast::Nullability::Nullable
        }
    }

    /// A literal captured verbatim: int, float, string, block string or name
    /// (which covers enum values, `true`, `false` and `null`).
    fn parse_raw_value(&mut self, expected: &str) -> crate::Result<String> {
        let token = self.token_stream.next();
        match token.kind {
            GraphQLTokenKind::IntValue(text)
            | GraphQLTokenKind::FloatValue(text)
            | GraphQLTokenKind::StringValue(text)
            | GraphQLTokenKind::BlockStringValue(text)
            | GraphQLTokenKind::Name(text) => Ok(text.into_owned()),
            _ => Err(unexpected_token(token, &[expected])),
        }
    }

    fn parse_directive_annotations(&mut self) -> crate::Result<Vec<ast::DirectiveAnnotation>> {
        let mut directives = Vec::new();
        while self.peek_is(&GraphQLTokenKind::At) {
            directives.push(self.parse_directive_annotation()?);
        }
        Ok(directives)
    }

    /// `@name` or `@name(arg: value ...)`.
    fn parse_directive_annotation(&mut self) -> crate::Result<ast::DirectiveAnnotation> {
        let start = self.peek_start();
        self.expect(GraphQLTokenKind::At)?;
        let name = self.expect_name("a directive name")?;

        let mut arguments = Vec::new();
        if self.consume_if(GraphQLTokenKind::ParenOpen) {
            self.reject_empty(&GraphQLTokenKind::ParenClose, "directive argument list")?;
            while !self.consume_if(GraphQLTokenKind::ParenClose) {
                let arg_name = self.expect_name("an argument name")?;
                self.expect(GraphQLTokenKind::Colon)?;
                let value = self.parse_raw_value("an argument value")?;
                arguments.push(ast::Argument {
                    name: arg_name,
                    value,
                });
            }
        }

        Ok(ast::DirectiveAnnotation {
            name,
            arguments,
            span: self.span_from(start),
        })
    }

    // =========================================================================
    // Extensions
    // =========================================================================

    /// `extend <kind> ...`, dispatched on the keyword after `extend`.
    fn parse_extension(
        &mut self,
        document: &mut ast::TypeSystemExtensionDocument,
        start: SourcePosition,
    ) -> crate::Result<()> {
        self.token_stream.require_keyword("extend")?;

        let keyword = match &self.token_stream.peek().kind {
            GraphQLTokenKind::Name(name) => name.to_string(),
            _ => String::new(),
        };
        let extension = match keyword.as_str() {
            "type" => ast::TypeExtension::Object(self.parse_object_type_extension(start)?),
            "interface" => {
                ast::TypeExtension::Interface(self.parse_interface_type_extension(start)?)
            },
            "union" => ast::TypeExtension::Union(self.parse_union_type_extension(start)?),
            "enum" => ast::TypeExtension::Enum(self.parse_enum_type_extension(start)?),
            "input" => {
                ast::TypeExtension::InputObject(self.parse_input_object_type_extension(start)?)
            },
            "scalar" => ast::TypeExtension::Scalar(self.parse_scalar_type_extension(start)?),
            "schema" => {
                let ext = self.parse_schema_extension(start)?;
                document.schema_extensions.push(ext);
                return Ok(());
            },
            _ => {
                let found = self.token_stream.next();
                return Err(unexpected_token(
                    found,
                    &[
                        "`type`",
                        "`interface`",
                        "`union`",
                        "`enum`",
                        "`input`",
                        "`scalar`",
                        "`schema`",
                    ],
                ));
            },
        };
        document.type_extensions.push(extension);
        Ok(())
    }

    fn empty_extension_error(
        &self,
        start: SourcePosition,
        kind: &str,
        requirement: &str,
    ) -> GraphQLParseError {
        GraphQLParseError::new(
            format!("`extend {kind}` must add at least one {requirement}"),
            self.span_from(start),
            GraphQLParseErrorKind::InvalidEmptyExtension {
                kind: kind.to_string(),
                requirement: requirement.to_string(),
            },
        )
    }

    fn parse_optional_fields_definition(&mut self) -> crate::Result<Vec<ast::FieldDefinition>> {
        if self.peek_is(&GraphQLTokenKind::CurlyBraceOpen) {
            self.parse_fields_definition()
        } else {
            Ok(Vec::new())
        }
    }

    fn parse_object_type_extension(
        &mut self,
        start: SourcePosition,
    ) -> crate::Result<ast::ObjectTypeExtension> {
        self.token_stream.require_keyword("type")?;
        let name = self.expect_name("an object type name")?;
        let interfaces = self.parse_implements_interfaces()?;
        let directives = self.parse_directive_annotations()?;
        let fields = self.parse_optional_fields_definition()?;

        if interfaces.is_empty() && directives.is_empty() && fields.is_empty() {
            return Err(self.empty_extension_error(
                start,
                "type",
                "implemented interface, directive or field",
            ));
        }
        Ok(ast::ObjectTypeExtension {
            name,
            interfaces,
            directives,
            fields,
            span: self.span_from(start),
        })
    }

    fn parse_interface_type_extension(
        &mut self,
        start: SourcePosition,
    ) -> crate::Result<ast::InterfaceTypeExtension> {
        self.token_stream.require_keyword("interface")?;
        let name = self.expect_name("an interface name")?;
        let interfaces = self.parse_implements_interfaces()?;
        let directives = self.parse_directive_annotations()?;
        let fields = self.parse_optional_fields_definition()?;

        if interfaces.is_empty() && directives.is_empty() && fields.is_empty() {
            return Err(self.empty_extension_error(
                start,
                "interface",
                "implemented interface, directive or field",
            ));
        }
        Ok(ast::InterfaceTypeExtension {
            name,
            interfaces,
            directives,
            fields,
            span: self.span_from(start),
        })
    }

    /// The `= A | B` clause may be left out only when a directive is present.
    fn parse_union_type_extension(
        &mut self,
        start: SourcePosition,
    ) -> crate::Result<ast::UnionTypeExtension> {
        self.token_stream.require_keyword("union")?;
        let name = self.expect_name("a union name")?;
        let directives = self.parse_directive_annotations()?;
        let members = if self.consume_if(GraphQLTokenKind::Equals) {
            self.parse_union_member_types()?
        } else {
            Vec::new()
        };

        if directives.is_empty() && members.is_empty() {
            return Err(self.empty_extension_error(start, "union", "directive or member type"));
        }
        Ok(ast::UnionTypeExtension {
            name,
            directives,
            members,
            span: self.span_from(start),
        })
    }

    fn parse_enum_type_extension(
        &mut self,
        start: SourcePosition,
    ) -> crate::Result<ast::EnumTypeExtension> {
        self.token_stream.require_keyword("enum")?;
        let name = self.expect_name("an enum name")?;
        let directives = self.parse_directive_annotations()?;
        let values = if self.peek_is(&GraphQLTokenKind::CurlyBraceOpen) {
            self.parse_enum_values_definition()?
        } else {
            Vec::new()
        };

        if directives.is_empty() && values.is_empty() {
            return Err(self.empty_extension_error(start, "enum", "directive or value"));
        }
        Ok(ast::EnumTypeExtension {
            name,
            directives,
            values,
            span: self.span_from(start),
        })
    }

    fn parse_input_object_type_extension(
        &mut self,
        start: SourcePosition,
    ) -> crate::Result<ast::InputObjectTypeExtension> {
        self.token_stream.require_keyword("input")?;
        let name = self.expect_name("an input object name")?;
        let directives = self.parse_directive_annotations()?;
        let fields = if self.peek_is(&GraphQLTokenKind::CurlyBraceOpen) {
            self.parse_input_fields_definition()?
        } else {
            Vec::new()
        };

        if directives.is_empty() && fields.is_empty() {
            return Err(self.empty_extension_error(start, "input", "directive or field"));
        }
        Ok(ast::InputObjectTypeExtension {
            name,
            directives,
            fields,
            span: self.span_from(start),
        })
    }

    /// A scalar has nothing to extend but its directives, so at least one is
    /// required.
    fn parse_scalar_type_extension(
        &mut self,
        start: SourcePosition,
    ) -> crate::Result<ast::ScalarTypeExtension> {
        self.token_stream.require_keyword("scalar")?;
        let name = self.expect_name("a scalar name")?;
        let directives = self.parse_directive_annotations()?;

        if directives.is_empty() {
            return Err(self.empty_extension_error(start, "scalar", "directive"));
        }
        Ok(ast::ScalarTypeExtension {
            name,
            directives,
            span: self.span_from(start),
        })
    }

    fn parse_schema_extension(
        &mut self,
        start: SourcePosition,
    ) -> crate::Result<ast::SchemaExtension> {
        self.token_stream.require_keyword("schema")?;
        let directives = self.parse_directive_annotations()?;
        let roots = if self.peek_is(&GraphQLTokenKind::CurlyBraceOpen) {
            self.parse_root_operation_types()?
        } else if directives.is_empty() {
            return Err(self.empty_extension_error(
                start,
                "schema",
                "directive or root operation type",
            ));
        } else {
            RootOperationTypeNames::default()
        };

        Ok(ast::SchemaExtension {
            directives,
            query: roots.query,
            mutation: roots.mutation,
            subscription: roots.subscription,
            span: self.span_from(start),
        })
    }
}

// =============================================================================
// Directive location suggestions
// =============================================================================

/// Suggests the closest known directive location for a misspelled one.
fn suggest_directive_location(input: &str) -> Option<&'static str> {
    let input_upper = input.to_uppercase();
    ast::DirectiveLocation::ALL
        .iter()
        .map(|location| (edit_distance(&input_upper, location.as_str()), location.as_str()))
        .filter(|(distance, _)| *distance <= 3)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, name)| name)
}

/// Levenshtein distance between `a` and `b`.
fn edit_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr = vec![0; b_chars.len() + 1];

    for (i, a_ch) in a_chars.iter().enumerate() {
        curr[0] = i + 1;
        for (j, b_ch) in b_chars.iter().enumerate() {
            let cost = usize::from(a_ch != b_ch);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_chars.len()]
}
