use crate::GraphQLErrorNotes;
use std::borrow::Cow;

/// The kind of a GraphQL SDL token.
///
/// Literal kinds store only the raw source text (quotes included for string
/// kinds). Nothing is unescaped or converted: default values and directive
/// argument values are kept as verbatim lexemes all the way into the AST.
///
/// The `'src` lifetime lets [`StrGraphQLTokenSource`] borrow names and
/// literals directly from the source text.
///
/// [`StrGraphQLTokenSource`]: crate::token_source::StrGraphQLTokenSource
#[derive(Clone, Debug, PartialEq)]
pub enum GraphQLTokenKind<'src> {
    // =========================================================================
    // Punctuators
    // =========================================================================
    /// `&`
    Ampersand,
    /// `@`
    At,
    /// `!`
    Bang,
    /// `:`
    Colon,
    /// `}`
    CurlyBraceClose,
    /// `{`
    CurlyBraceOpen,
    /// `=`
    Equals,
    /// `)`
    ParenClose,
    /// `(`
    ParenOpen,
    /// `|`
    Pipe,
    /// `]`
    SquareBracketClose,
    /// `[`
    SquareBracketOpen,

    // =========================================================================
    // Literals (raw source text only)
    // =========================================================================
    /// A name. Keywords such as `type` or `true` are plain names; the parser
    /// decides what they mean from context.
    Name(Cow<'src, str>),

    /// Raw text of an integer literal, sign included (e.g. `"-123"`).
    IntValue(Cow<'src, str>),

    /// Raw text of a float literal, sign included (e.g. `"-1.5e3"`).
    FloatValue(Cow<'src, str>),

    /// Raw text of a single-line string literal, quotes included.
    StringValue(Cow<'src, str>),

    /// Raw text of a block string literal, triple quotes included.
    BlockStringValue(Cow<'src, str>),

    // =========================================================================
    // Ignored tokens
    // =========================================================================
    /// A `#` comment. The text excludes the leading `#`.
    ///
    /// [`GraphQLTokenStream`](crate::GraphQLTokenStream) drops these, so
    /// the parser never sees them.
    Comment(Cow<'src, str>),

    // =========================================================================
    // End of input
    // =========================================================================
    Eof,

    // =========================================================================
    // Lexer error
    // =========================================================================
    /// A lexical error. The parser turns this into a
    /// [`GraphQLParseErrorKind::LexerError`](crate::GraphQLParseErrorKind::LexerError).
    Error {
        message: String,
        error_notes: GraphQLErrorNotes,
    },
}

impl<'src> GraphQLTokenKind<'src> {
    #[inline]
    pub fn name_borrowed(s: &'src str) -> Self {
        GraphQLTokenKind::Name(Cow::Borrowed(s))
    }

    #[inline]
    pub fn name_owned(s: String) -> Self {
        GraphQLTokenKind::Name(Cow::Owned(s))
    }

    /// Returns the raw source text of a name or literal token.
    ///
    /// Punctuators, `Eof` and `Error` return `None`.
    pub fn raw_text(&self) -> Option<&str> {
        match self {
            GraphQLTokenKind::Name(text)
            | GraphQLTokenKind::IntValue(text)
            | GraphQLTokenKind::FloatValue(text)
            | GraphQLTokenKind::StringValue(text)
            | GraphQLTokenKind::BlockStringValue(text)
            | GraphQLTokenKind::Comment(text) => Some(text.as_ref()),
            _ => None,
        }
    }

    /// Returns the source text of a punctuator, or `None` for other kinds.
    pub fn punctuator_str(&self) -> Option<&'static str> {
        Some(match self {
            GraphQLTokenKind::Ampersand => "&",
            GraphQLTokenKind::At => "@",
            GraphQLTokenKind::Bang => "!",
            GraphQLTokenKind::Colon => ":",
            GraphQLTokenKind::CurlyBraceClose => "}",
            GraphQLTokenKind::CurlyBraceOpen => "{",
            GraphQLTokenKind::Equals => "=",
            GraphQLTokenKind::ParenClose => ")",
            GraphQLTokenKind::ParenOpen => "(",
            GraphQLTokenKind::Pipe => "|",
            GraphQLTokenKind::SquareBracketClose => "]",
            GraphQLTokenKind::SquareBracketOpen => "[",
            _ => return None,
        })
    }

    /// Returns `true` if `self` and `other` are the same kind, ignoring any
    /// payload.
    pub fn same_kind(&self, other: &GraphQLTokenKind<'_>) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    /// A short name for this kind of token, used in diagnostics.
    pub fn category(&self) -> &'static str {
        match self {
            GraphQLTokenKind::Name(_) => "name",
            GraphQLTokenKind::IntValue(_) => "int",
            GraphQLTokenKind::FloatValue(_) => "float",
            GraphQLTokenKind::StringValue(_) => "string",
            GraphQLTokenKind::BlockStringValue(_) => "block string",
            GraphQLTokenKind::Comment(_) => "comment",
            GraphQLTokenKind::Eof => "end of input",
            GraphQLTokenKind::Error { .. } => "invalid token",
            _ => "punctuator",
        }
    }

    /// Describes this token for an error message: its kind plus raw text.
    ///
    /// e.g. ``name `Query` ``, `` `{` ``, `end of input`.
    pub fn describe(&self) -> String {
        if let Some(punctuator) = self.punctuator_str() {
            return format!("`{punctuator}`");
        }
        match self.raw_text() {
            Some(text) => format!("{} `{text}`", self.category()),
            None => self.category().to_string(),
        }
    }
}
