/// A position in source text, with dual column tracking.
///
/// **All values are 0-based.** Human-facing renderings (see
/// [`GraphQLParseError::format_oneline`](crate::GraphQLParseError::format_oneline))
/// add 1 to the line and column.
///
/// - `col_utf8` counts characters from the start of the line, regardless of
///   how many bytes each one takes. This is what most editors display.
/// - `col_utf16` counts UTF-16 code units, which is what LSP clients expect.
///   Characters outside the Basic Multilingual Plane advance it by 2.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct SourcePosition {
    line: usize,
    col_utf8: usize,
    col_utf16: usize,
    byte_offset: usize,
}

impl SourcePosition {
    pub fn new(
        line: usize,
        col_utf8: usize,
        col_utf16: usize,
        byte_offset: usize,
    ) -> Self {
        Self {
            line,
            col_utf8,
            col_utf16,
            byte_offset,
        }
    }

    /// The position of the very first character of a document.
    pub fn start_of_document() -> Self {
        Self::new(0, 0, 0, 0)
    }

    /// Returns the 0-based line number.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns the 0-based character count within the current line.
    pub fn col_utf8(&self) -> usize {
        self.col_utf8
    }

    /// Returns the 0-based UTF-16 code unit offset within the current line.
    pub fn col_utf16(&self) -> usize {
        self.col_utf16
    }

    /// Returns the 0-based byte offset from the start of the document.
    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }
}
