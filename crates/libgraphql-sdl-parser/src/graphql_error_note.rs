use crate::GraphQLErrorNoteKind;
use crate::GraphQLSourceSpan;
use crate::SmallVec;

/// Extra context attached to a parse error: an explanation, a suggested
/// fix, a link into the GraphQL spec, or a pointer at a related location
/// (such as where an unterminated string was opened).
#[derive(Debug, Clone, PartialEq)]
pub struct GraphQLErrorNote {
    pub kind: GraphQLErrorNoteKind,
    pub message: String,

    /// Related location, rendered as its own snippet when present.
    pub span: Option<GraphQLSourceSpan>,
}

impl GraphQLErrorNote {
    fn new(
        kind: GraphQLErrorNoteKind,
        message: impl Into<String>,
        span: Option<GraphQLSourceSpan>,
    ) -> Self {
        Self { kind, message: message.into(), span }
    }

    pub fn general(message: impl Into<String>) -> Self {
        Self::new(GraphQLErrorNoteKind::General, message, None)
    }

    pub fn general_with_span(message: impl Into<String>, span: GraphQLSourceSpan) -> Self {
        Self::new(GraphQLErrorNoteKind::General, message, Some(span))
    }

    pub fn help(message: impl Into<String>) -> Self {
        Self::new(GraphQLErrorNoteKind::Help, message, None)
    }

    /// A link into the GraphQL spec; `url` becomes the message.
    pub fn spec(url: impl Into<String>) -> Self {
        Self::new(GraphQLErrorNoteKind::Spec, url, None)
    }
}

/// Inline storage for the usual zero to two notes.
pub type GraphQLErrorNotes = SmallVec<[GraphQLErrorNote; 2]>;
