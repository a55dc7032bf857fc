/// Categorizes parse errors for programmatic handling.
///
/// Each variant holds only what a caller needs to branch on. Human-readable
/// context (suggestions, related locations) lives in the `notes` of the
/// owning [`GraphQLParseError`](crate::GraphQLParseError).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphQLParseErrorKind {
    /// Expected specific token(s) but found something else.
    ///
    /// # Example
    /// ```text
    /// type User { name String }
    ///                  ^^^^^^ expected `:`, found name `String`
    /// ```
    #[error("unexpected token: {found}")]
    UnexpectedToken {
        /// What was expected (e.g. `["`:`"]`).
        expected: Vec<String>,
        /// The offending token: its kind and raw source text.
        found: String,
    },

    /// The document ended before a complete construct was parsed.
    ///
    /// # Example
    /// ```text
    /// type User {
    ///           ^ expected a field definition, found end of input
    /// ```
    #[error("unexpected end of input")]
    UnexpectedEof {
        expected: Vec<String>,
    },

    /// The token source produced an error token. The lexer's message and
    /// notes are carried by the owning error.
    #[error("lexer error")]
    LexerError,

    /// A top-level name that does not start any type-system definition.
    ///
    /// # Example
    /// ```text
    /// query { hello }
    /// ^^^^^ `query` does not start a type-system definition
    /// ```
    #[error("unknown definition keyword: `{keyword}`")]
    UnknownDefinitionKeyword {
        keyword: String,
    },

    /// A directive location name outside the fixed location table.
    ///
    /// # Example
    /// ```text
    /// directive @d on FEILD
    ///                 ^^^^^ unknown directive location
    /// ```
    #[error("unknown directive location: `{name}`")]
    UnknownDirectiveLocation {
        name: String,
    },

    /// A schema block entry whose operation is not `query`, `mutation` or
    /// `subscription`.
    #[error("unknown root operation: `{operation}`")]
    UnknownRootOperation {
        operation: String,
    },

    /// The same root operation appears twice in one schema block.
    ///
    /// # Example
    /// ```text
    /// schema { query: A query: B }
    ///                   ^^^^^ duplicate `query`
    /// ```
    #[error("duplicate root operation: `{operation}`")]
    DuplicateRootOperation {
        operation: String,
    },

    /// A delimited construct that must hold at least one item is empty.
    ///
    /// # Example
    /// ```text
    /// type User {}
    ///           ^^ fields block must not be empty
    /// ```
    #[error("invalid empty {construct}")]
    InvalidEmptyConstruct {
        /// The construct that was empty (e.g. `"argument list"`).
        construct: String,
    },

    /// An `extend` clause that adds nothing to the type it names.
    ///
    /// # Example
    /// ```text
    /// extend scalar Date
    ///        ^^^^^^ a scalar extension requires at least one directive
    /// ```
    #[error("`extend {kind}` must add at least one {requirement}")]
    InvalidEmptyExtension {
        kind: String,
        requirement: String,
    },

    /// Type annotations nested deeper than the parser allows.
    #[error("nesting exceeds the maximum depth of {limit}")]
    RecursionLimitExceeded {
        limit: usize,
    },
}
