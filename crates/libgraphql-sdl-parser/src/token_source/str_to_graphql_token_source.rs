//! A [`GraphQLTokenSource`] that lexes SDL from a `&str`.
//!
//! Names and literals borrow from the source text (`Cow::Borrowed`), and
//! every token carries a span with line, UTF-8 column, UTF-16 column and byte
//! offset.
//!
//! ```rust
//! use libgraphql_sdl_parser::token_source::StrGraphQLTokenSource;
//!
//! let kinds = StrGraphQLTokenSource::new("scalar Date")
//!     .map(|token| token.kind.describe())
//!     .collect::<Vec<_>>();
//! assert_eq!(kinds, vec!["name `scalar`", "name `Date`", "end of input"]);
//! ```
//!
//! [`GraphQLTokenSource`]: crate::token_source::GraphQLTokenSource

use crate::GraphQLErrorNote;
use crate::GraphQLSourceSpan;
use crate::SourcePosition;
use crate::smallvec;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use std::borrow::Cow;

/// Lexes GraphQL SDL from a string slice.
///
/// See module documentation for details.
pub struct StrGraphQLTokenSource<'src> {
    source: &'src str,

    /// Byte offset of the next unlexed character.
    curr_byte_offset: usize,

    curr_line: usize,
    curr_col_utf8: usize,
    curr_col_utf16: usize,

    /// Set after a `\r` so that a following `\n` doesn't count as a second
    /// line break.
    last_char_was_cr: bool,

    /// Whether the `Eof` token has been emitted.
    finished: bool,
}

impl<'src> StrGraphQLTokenSource<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            curr_byte_offset: 0,
            curr_line: 0,
            curr_col_utf8: 0,
            curr_col_utf16: 0,
            last_char_was_cr: false,
            finished: false,
        }
    }

    // =========================================================================
    // Position and scanning helpers
    // =========================================================================

    fn remaining(&self) -> &'src str {
        &self.source[self.curr_byte_offset..]
    }

    fn curr_position(&self) -> SourcePosition {
        SourcePosition::new(
            self.curr_line,
            self.curr_col_utf8,
            self.curr_col_utf16,
            self.curr_byte_offset,
        )
    }

    fn peek_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    fn peek_char_nth(&self, n: usize) -> Option<char> {
        self.remaining().chars().nth(n)
    }

    /// Consumes one character, keeping line and column bookkeeping current.
    ///
    /// `\n`, `\r` and `\r\n` each count as a single line terminator.
    fn consume(&mut self) -> Option<char> {
        let ch = self.peek_char()?;

        match ch {
            '\n' if self.last_char_was_cr => {
                self.last_char_was_cr = false;
            },
            '\n' => {
                self.curr_line += 1;
                self.curr_col_utf8 = 0;
                self.curr_col_utf16 = 0;
            },
            '\r' => {
                self.curr_line += 1;
                self.curr_col_utf8 = 0;
                self.curr_col_utf16 = 0;
                self.last_char_was_cr = true;
            },
            _ => {
                self.curr_col_utf8 += 1;
                self.curr_col_utf16 += ch.len_utf16();
                self.last_char_was_cr = false;
            },
        }

        self.curr_byte_offset += ch.len_utf8();
        Some(ch)
    }

    /// Advances past `text`, which must be the next run of source and must
    /// not contain a line terminator.
    fn consume_within_line(&mut self, text: &str) {
        self.curr_col_utf8 += text.chars().count();
        self.curr_col_utf16 += text.encode_utf16().count();
        self.curr_byte_offset += text.len();
        self.last_char_was_cr = false;
    }

    fn make_span(&self, start: SourcePosition) -> GraphQLSourceSpan {
        GraphQLSourceSpan::new(start, self.curr_position())
    }

    fn make_token(
        &self,
        kind: GraphQLTokenKind<'src>,
        start: SourcePosition,
    ) -> GraphQLToken<'src> {
        GraphQLToken::new(kind, self.make_span(start))
    }

    fn punctuator(
        &mut self,
        kind: GraphQLTokenKind<'src>,
        start: SourcePosition,
    ) -> GraphQLToken<'src> {
        self.consume();
        self.make_token(kind, start)
    }

    // =========================================================================
    // Lexer main loop
    // =========================================================================

    fn next_token(&mut self) -> GraphQLToken<'src> {
        self.skip_ignored();
        let start = self.curr_position();

        match self.peek_char() {
            None => self.make_token(GraphQLTokenKind::Eof, start),
            Some('#') => self.lex_comment(start),

            Some('&') => self.punctuator(GraphQLTokenKind::Ampersand, start),
            Some('@') => self.punctuator(GraphQLTokenKind::At, start),
            Some('!') => self.punctuator(GraphQLTokenKind::Bang, start),
            Some(':') => self.punctuator(GraphQLTokenKind::Colon, start),
            Some('}') => self.punctuator(GraphQLTokenKind::CurlyBraceClose, start),
            Some('{') => self.punctuator(GraphQLTokenKind::CurlyBraceOpen, start),
            Some('=') => self.punctuator(GraphQLTokenKind::Equals, start),
            Some(')') => self.punctuator(GraphQLTokenKind::ParenClose, start),
            Some('(') => self.punctuator(GraphQLTokenKind::ParenOpen, start),
            Some('|') => self.punctuator(GraphQLTokenKind::Pipe, start),
            Some(']') => self.punctuator(GraphQLTokenKind::SquareBracketClose, start),
            Some('[') => self.punctuator(GraphQLTokenKind::SquareBracketOpen, start),

            Some('"') => self.lex_string(start),
            Some(c) if is_name_start(c) => self.lex_name(start),
            Some(c) if c == '-' || c.is_ascii_digit() => self.lex_number(start),
            Some(_) => self.lex_invalid_character(start),
        }
    }

    /// Skips whitespace, line terminators, the BOM and commas, all of which
    /// are insignificant in GraphQL.
    fn skip_ignored(&mut self) {
        while let Some(ch) = self.peek_char() {
            match ch {
                ' ' | '\t' | '\n' | '\r' | ',' | '\u{FEFF}' => {
                    self.consume();
                },
                _ => break,
            }
        }
    }

    // =========================================================================
    // Comments
    // =========================================================================

    /// Lexes a `#` comment running to the end of the line.
    fn lex_comment(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        self.consume();
        let rest = self.remaining();
        let content_len = memchr::memchr2(b'\n', b'\r', rest.as_bytes())
            .unwrap_or(rest.len());
        let content = &rest[..content_len];
        self.consume_within_line(content);

        self.make_token(GraphQLTokenKind::Comment(Cow::Borrowed(content)), start)
    }

    // =========================================================================
    // Names
    // =========================================================================

    /// Lexes a name matching `/[_A-Za-z][_0-9A-Za-z]*/`.
    fn lex_name(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        let rest = self.remaining();
        let name_len = rest
            .char_indices()
            .find(|(_, ch)| !is_name_continue(*ch))
            .map(|(idx, _)| idx)
            .unwrap_or(rest.len());
        let name = &rest[..name_len];
        self.consume_within_line(name);

        self.make_token(GraphQLTokenKind::name_borrowed(name), start)
    }

    // =========================================================================
    // Numbers
    // =========================================================================

    /// Lexes an int or float literal:
    /// `-? (0 | [1-9][0-9]*) (\.[0-9]+)? ([eE][+-]?[0-9]+)?`
    fn lex_number(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        let num_start = self.curr_byte_offset;
        let mut is_float = false;

        if self.peek_char() == Some('-') {
            self.consume();
        }

        match self.peek_char() {
            Some('0') => {
                self.consume();
                if matches!(self.peek_char(), Some(ch) if ch.is_ascii_digit()) {
                    return self.lex_number_error(
                        start,
                        num_start,
                        "Invalid number: leading zeros are not allowed",
                        "https://spec.graphql.org/September2025/#sec-Int-Value",
                    );
                }
            },
            Some(ch) if ch.is_ascii_digit() => {
                self.consume_digits();
            },
            _ => {
                let kind = GraphQLTokenKind::Error {
                    message: "Unexpected `-`".to_string(),
                    error_notes: smallvec![],
                };
                return self.make_token(kind, start);
            },
        }

        if self.peek_char() == Some('.')
            && matches!(self.peek_char_nth(1), Some(ch) if ch.is_ascii_digit())
        {
            is_float = true;
            self.consume();
            self.consume_digits();
        }

        if matches!(self.peek_char(), Some('e') | Some('E')) {
            is_float = true;
            self.consume();
            if matches!(self.peek_char(), Some('+') | Some('-')) {
                self.consume();
            }
            if !matches!(self.peek_char(), Some(ch) if ch.is_ascii_digit()) {
                return self.lex_number_error(
                    start,
                    num_start,
                    "Invalid number: exponent must have at least one digit",
                    "https://spec.graphql.org/September2025/#sec-Float-Value",
                );
            }
            self.consume_digits();
        }

        if matches!(self.peek_char(), Some(ch) if ch == '.' || is_name_start(ch)) {
            return self.lex_number_error(
                start,
                num_start,
                "Invalid number: unexpected character after numeric literal",
                "https://spec.graphql.org/September2025/#sec-Int-Value",
            );
        }

        let text = &self.source[num_start..self.curr_byte_offset];
        let kind = if is_float {
            GraphQLTokenKind::FloatValue(Cow::Borrowed(text))
        } else {
            GraphQLTokenKind::IntValue(Cow::Borrowed(text))
        };
        self.make_token(kind, start)
    }

    fn consume_digits(&mut self) {
        while matches!(self.peek_char(), Some(ch) if ch.is_ascii_digit()) {
            self.consume();
        }
    }

    fn lex_number_error(
        &mut self,
        start: SourcePosition,
        num_start: usize,
        message: &str,
        spec_url: &str,
    ) -> GraphQLToken<'src> {
        while matches!(
            self.peek_char(),
            Some(ch) if ch.is_ascii_alphanumeric() || matches!(ch, '.' | '+' | '-' | '_')
        ) {
            self.consume();
        }

        let invalid_text = &self.source[num_start..self.curr_byte_offset];
        let kind = GraphQLTokenKind::Error {
            message: format!("{message}: `{invalid_text}`"),
            error_notes: smallvec![GraphQLErrorNote::spec(spec_url)],
        };
        self.make_token(kind, start)
    }

    // =========================================================================
    // Strings
    // =========================================================================

    fn lex_string(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        if self.remaining().starts_with("\"\"\"") {
            return self.lex_block_string(start);
        }

        let str_start = self.curr_byte_offset;
        self.consume();

        loop {
            match self.peek_char() {
                None => {
                    return self.unterminated(start, "Unterminated string literal", "`\"`");
                },
                Some('\n') | Some('\r') => {
                    let kind = GraphQLTokenKind::Error {
                        message: "Unterminated string literal".to_string(),
                        error_notes: smallvec![
                            GraphQLErrorNote::general(
                                "Single-line strings cannot contain unescaped newlines",
                            ),
                            GraphQLErrorNote::help(
                                "Use a block string (triple quotes) for multi-line text",
                            ),
                        ],
                    };
                    return self.make_token(kind, start);
                },
                Some('"') => {
                    self.consume();
                    break;
                },
                Some('\\') => {
                    self.consume();
                    if !matches!(self.peek_char(), None | Some('\n') | Some('\r')) {
                        self.consume();
                    }
                },
                Some(_) => {
                    self.consume();
                },
            }
        }

        let text = &self.source[str_start..self.curr_byte_offset];
        self.make_token(GraphQLTokenKind::StringValue(Cow::Borrowed(text)), start)
    }

    fn lex_block_string(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        let str_start = self.curr_byte_offset;
        self.consume_within_line("\"\"\"");

        loop {
            let rest = self.remaining();
            if rest.is_empty() {
                return self.unterminated(start, "Unterminated block string", "`\"\"\"`");
            } else if rest.starts_with("\\\"\"\"") {
                self.consume_within_line("\\\"\"\"");
            } else if rest.starts_with("\"\"\"") {
                self.consume_within_line("\"\"\"");
                break;
            } else {
                self.consume();
            }
        }

        let text = &self.source[str_start..self.curr_byte_offset];
        self.make_token(GraphQLTokenKind::BlockStringValue(Cow::Borrowed(text)), start)
    }

    fn unterminated(
        &self,
        start: SourcePosition,
        message: &str,
        closer: &str,
    ) -> GraphQLToken<'src> {
        let opened_at = GraphQLSourceSpan::empty_at(start.clone());
        let kind = GraphQLTokenKind::Error {
            message: message.to_string(),
            error_notes: smallvec![
                GraphQLErrorNote::general_with_span("String started here", opened_at),
                GraphQLErrorNote::help(format!("Add closing {closer}")),
            ],
        };
        self.make_token(kind, start)
    }

    // =========================================================================
    // Invalid characters
    // =========================================================================

    fn lex_invalid_character(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        let message = match self.consume() {
            Some(ch) => format!("Unexpected character {}", describe_char(ch)),
            None => "Unexpected end of input".to_string(),
        };
        let kind = GraphQLTokenKind::Error {
            message,
            error_notes: smallvec![],
        };
        self.make_token(kind, start)
    }
}

impl<'src> Iterator for StrGraphQLTokenSource<'src> {
    type Item = GraphQLToken<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let token = self.next_token();
        if matches!(token.kind, GraphQLTokenKind::Eof) {
            self.finished = true;
        }
        Some(token)
    }
}

fn is_name_start(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphabetic()
}

fn is_name_continue(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphanumeric()
}

/// Printable characters are shown in backticks; invisible ones also get
/// their code point.
fn describe_char(ch: char) -> String {
    if ch.is_control() || (ch.is_whitespace() && ch != ' ') {
        format!("`{}` (U+{:04X})", ch.escape_default(), ch as u32)
    } else {
        format!("`{ch}`")
    }
}
