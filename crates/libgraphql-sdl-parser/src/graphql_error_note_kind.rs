/// The kind of an error note (determines how the note is rendered).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphQLErrorNoteKind {
    /// General context about the error.
    ///
    /// Rendered as `= note: ...` in CLI output.
    General,

    /// Actionable suggestion for fixing the error.
    ///
    /// Rendered as `= help: ...` in CLI output.
    /// Example: "did you mean `FIELD_DEFINITION`?"
    Help,

    /// Reference to the GraphQL specification.
    ///
    /// Rendered as `= spec: ...` in CLI output.
    Spec,
}

impl GraphQLErrorNoteKind {
    /// The prefix used when rendering a note of this kind.
    pub fn label(&self) -> &'static str {
        match self {
            GraphQLErrorNoteKind::General => "note",
            GraphQLErrorNoteKind::Help => "help",
            GraphQLErrorNoteKind::Spec => "spec",
        }
    }
}
