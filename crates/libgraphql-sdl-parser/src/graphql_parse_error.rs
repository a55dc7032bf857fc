use crate::GraphQLErrorNote;
use crate::GraphQLErrorNotes;
use crate::GraphQLParseErrorKind;
use crate::GraphQLSourceSpan;

/// A syntax error with location information and contextual notes.
///
/// Parsing is all-or-nothing: a `GraphQLParseError` is produced in place of
/// the whole document the moment the first unexpected token is seen.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{}", self.format_oneline())]
pub struct GraphQLParseError {
    /// Human-readable primary message, e.g. "expected `:` after field name".
    message: String,

    /// Where the error was detected. For unexpected-token errors this is the
    /// offending token's span. Carries the source name once it is known.
    span: GraphQLSourceSpan,

    kind: GraphQLParseErrorKind,

    notes: GraphQLErrorNotes,
}

impl GraphQLParseError {
    pub fn new(
        message: impl Into<String>,
        span: GraphQLSourceSpan,
        kind: GraphQLParseErrorKind,
    ) -> Self {
        Self {
            message: message.into(),
            span,
            kind,
            notes: GraphQLErrorNotes::new(),
        }
    }

    /// Creates a parse error from a lexer error token, preserving the lexer's
    /// message and notes.
    pub fn from_lexer_error(
        message: impl Into<String>,
        span: GraphQLSourceSpan,
        lexer_notes: GraphQLErrorNotes,
    ) -> Self {
        Self {
            message: message.into(),
            span,
            kind: GraphQLParseErrorKind::LexerError,
            notes: lexer_notes,
        }
    }

    /// Attaches the name of the source this error was found in.
    pub fn with_source_name(mut self, name: impl Into<String>) -> Self {
        self.span.source_name = Some(name.into());
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn span(&self) -> &GraphQLSourceSpan {
        &self.span
    }

    pub fn kind(&self) -> &GraphQLParseErrorKind {
        &self.kind
    }

    pub fn notes(&self) -> &GraphQLErrorNotes {
        &self.notes
    }

    pub fn source_name(&self) -> Option<&str> {
        self.span.source_name.as_deref()
    }

    pub fn add_note(&mut self, message: impl Into<String>) {
        self.notes.push(GraphQLErrorNote::general(message));
    }

    pub fn add_help(&mut self, message: impl Into<String>) {
        self.notes.push(GraphQLErrorNote::help(message));
    }

    pub fn add_spec(&mut self, url: impl Into<String>) {
        self.notes.push(GraphQLErrorNote::spec(url));
    }

    /// Formats this error as a multi-line diagnostic for CLI output.
    ///
    /// Produces output like:
    /// ```text
    /// error: expected `:` after field name
    ///   --> schema.graphql:5:12
    ///    |
    ///  5 |     userName String
    ///    |              ^^^^^^
    ///    = help: ...
    /// ```
    ///
    /// `source` is the text that was parsed. When `None`, the snippet is
    /// omitted but the location line is still shown.
    pub fn format_detailed(&self, source: Option<&str>) -> String {
        let mut output = String::new();

        output.push_str("error: ");
        output.push_str(&self.message);
        output.push('\n');
        output.push_str(&format!("  --> {}\n", self.span.location_label()));

        if let Some(src) = source
            && let Some(snippet) = self.span.format_snippet(src)
        {
            output.push_str(&snippet);
        }

        for note in &self.notes {
            output.push_str(&format!("   = {}: {}\n", note.kind.label(), note.message));
        }

        output
    }

    /// Formats this error as a single-line summary.
    ///
    /// ```text
    /// schema.graphql:5:12: error: expected `:` after field name
    /// ```
    pub fn format_oneline(&self) -> String {
        format!("{}: error: {}", self.span.location_label(), self.message)
    }
}
