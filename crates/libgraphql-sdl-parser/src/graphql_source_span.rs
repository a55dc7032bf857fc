use crate::SourcePosition;

/// A half-open span of source text: `[start_inclusive, end_exclusive)`.
///
/// Spans on AST nodes parsed from a named [`Source`](crate::Source) also
/// carry that source's name, so they can still be traced back to their file
/// after documents from several sources have been merged.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct GraphQLSourceSpan {
    pub start_inclusive: SourcePosition,
    pub end_exclusive: SourcePosition,
    pub source_name: Option<String>,
}

impl GraphQLSourceSpan {
    /// Creates a span with no source name.
    pub fn new(start: SourcePosition, end: SourcePosition) -> Self {
        Self {
            start_inclusive: start,
            end_exclusive: end,
            source_name: None,
        }
    }

    pub fn with_source(
        start: SourcePosition,
        end: SourcePosition,
        source_name: impl Into<String>,
    ) -> Self {
        Self {
            start_inclusive: start,
            end_exclusive: end,
            source_name: Some(source_name.into()),
        }
    }

    /// A zero-width span at `pos`.
    pub fn empty_at(pos: SourcePosition) -> Self {
        Self::new(pos.clone(), pos)
    }

    /// Returns a span running from the start of `self` to the end of `other`.
    pub fn through(&self, other: &GraphQLSourceSpan) -> Self {
        Self {
            start_inclusive: self.start_inclusive.clone(),
            end_exclusive: other.end_exclusive.clone(),
            source_name: self.source_name.clone(),
        }
    }

    /// Returns the slice of `source` this span covers, if the offsets are in
    /// bounds for it.
    pub fn source_slice<'a>(&self, source: &'a str) -> Option<&'a str> {
        source.get(
            self.start_inclusive.byte_offset()..self.end_exclusive.byte_offset(),
        )
    }

    /// `name:line:col` with 1-based line and column. `<input>` stands in for
    /// a missing source name.
    pub fn location_label(&self) -> String {
        format!(
            "{}:{}:{}",
            self.source_name.as_deref().unwrap_or("<input>"),
            self.start_inclusive.line() + 1,
            self.start_inclusive.col_utf8() + 1,
        )
    }

    /// Renders the first line of this span within `source`, underlined:
    ///
    /// ```text
    ///    |
    ///  5 |     userName String
    ///    |              ^^^^^^
    /// ```
    ///
    /// Returns `None` if `source` has no such line.
    pub fn format_snippet(&self, source: &str) -> Option<String> {
        let line_num = self.start_inclusive.line();
        let line_content = source_line(source, line_num)?;
        let display_line_num = line_num + 1;
        let gutter = display_line_num.to_string().len().max(2);

        let col_start = self.start_inclusive.col_utf8();
        let underline_len = if self.end_exclusive.line() == line_num
            && self.end_exclusive.col_utf8() > col_start
        {
            self.end_exclusive.col_utf8() - col_start
        } else {
            1
        };

        let mut output = String::new();
        output.push_str(&format!("{:>gutter$} |\n", ""));
        output.push_str(&format!("{display_line_num:>gutter$} | {line_content}\n"));
        output.push_str(&format!(
            "{:>gutter$} | {:>col_start$}{}\n",
            "",
            "",
            "^".repeat(underline_len),
        ));
        Some(output)
    }
}

/// Returns the 0-based `line_num`-th line of `source`. `\n`, `\r` and `\r\n`
/// each end a line, matching how the lexer counts lines.
fn source_line(source: &str, line_num: usize) -> Option<&str> {
    let mut rest = source;
    for _ in 0..line_num {
        let terminator = memchr::memchr2(b'\n', b'\r', rest.as_bytes())?;
        let terminator_len = if rest[terminator..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[terminator + terminator_len..];
    }
    let line_len = memchr::memchr2(b'\n', b'\r', rest.as_bytes()).unwrap_or(rest.len());
    Some(&rest[..line_len])
}
