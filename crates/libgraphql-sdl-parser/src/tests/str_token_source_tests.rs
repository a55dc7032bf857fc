//! Tests for StrGraphQLTokenSource.

use crate::GraphQLErrorNoteKind;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::token_source::StrGraphQLTokenSource;

fn lex(source: &str) -> Vec<GraphQLToken<'_>> {
    StrGraphQLTokenSource::new(source).collect()
}

fn lex_kinds(source: &str) -> Vec<GraphQLTokenKind<'_>> {
    lex(source).into_iter().map(|token| token.kind).collect()
}

// =============================================================================
// Punctuators and names
// =============================================================================

/// Every SDL punctuator lexes to its own token kind.
#[test]
fn lexes_all_punctuators() {
    assert_eq!(
        lex_kinds("& @ ! : } { = ) ( | ] ["),
        vec![
            GraphQLTokenKind::Ampersand,
            GraphQLTokenKind::At,
            GraphQLTokenKind::Bang,
            GraphQLTokenKind::Colon,
            GraphQLTokenKind::CurlyBraceClose,
            GraphQLTokenKind::CurlyBraceOpen,
            GraphQLTokenKind::Equals,
            GraphQLTokenKind::ParenClose,
            GraphQLTokenKind::ParenOpen,
            GraphQLTokenKind::Pipe,
            GraphQLTokenKind::SquareBracketClose,
            GraphQLTokenKind::SquareBracketOpen,
            GraphQLTokenKind::Eof,
        ],
    );
}

/// Keywords and literal-looking names are all plain `Name` tokens.
#[test]
fn keywords_are_names() {
    assert_eq!(
        lex_kinds("type true null _private"),
        vec![
            GraphQLTokenKind::name_borrowed("type"),
            GraphQLTokenKind::name_borrowed("true"),
            GraphQLTokenKind::name_borrowed("null"),
            GraphQLTokenKind::name_borrowed("_private"),
            GraphQLTokenKind::Eof,
        ],
    );
}

/// Commas, tabs, line terminators and the BOM produce no tokens.
#[test]
fn ignored_characters_are_skipped() {
    assert_eq!(
        lex_kinds("\u{FEFF}a,\tb\r\nc,,"),
        vec![
            GraphQLTokenKind::name_borrowed("a"),
            GraphQLTokenKind::name_borrowed("b"),
            GraphQLTokenKind::name_borrowed("c"),
            GraphQLTokenKind::Eof,
        ],
    );
}

/// The iterator yields exactly one `Eof` and then stops.
#[test]
fn eof_is_emitted_once() {
    let mut source = StrGraphQLTokenSource::new("");
    assert!(matches!(source.next().map(|t| t.kind), Some(GraphQLTokenKind::Eof)));
    assert!(source.next().is_none());
}

// =============================================================================
// Comments
// =============================================================================

/// Comments become `Comment` tokens whose text stops at the line end.
#[test]
fn comments_are_tokens() {
    assert_eq!(
        lex_kinds("# first\nscalar # second\r\nX"),
        vec![
            GraphQLTokenKind::Comment(" first".into()),
            GraphQLTokenKind::name_borrowed("scalar"),
            GraphQLTokenKind::Comment(" second".into()),
            GraphQLTokenKind::name_borrowed("X"),
            GraphQLTokenKind::Eof,
        ],
    );
}

// =============================================================================
// Numbers
// =============================================================================

/// Ints and floats keep their raw text, sign included.
#[test]
fn numbers_keep_raw_text() {
    assert_eq!(
        lex_kinds("0 -12 3.25 -1e10 6.02E+23"),
        vec![
            GraphQLTokenKind::IntValue("0".into()),
            GraphQLTokenKind::IntValue("-12".into()),
            GraphQLTokenKind::FloatValue("3.25".into()),
            GraphQLTokenKind::FloatValue("-1e10".into()),
            GraphQLTokenKind::FloatValue("6.02E+23".into()),
            GraphQLTokenKind::Eof,
        ],
    );
}

/// Leading zeros are a lexical error with a spec note attached.
#[test]
fn leading_zero_is_error() {
    let tokens = lex("007");
    match &tokens[0].kind {
        GraphQLTokenKind::Error { message, error_notes } => {
            assert!(message.contains("leading zeros"), "{message}");
            assert!(message.contains("`007`"), "{message}");
            assert_eq!(error_notes[0].kind, GraphQLErrorNoteKind::Spec);
        },
        other => panic!("expected error token, got {other:?}"),
    }
}

/// An exponent marker must be followed by digits.
#[test]
fn empty_exponent_is_error() {
    let tokens = lex("1e+");
    assert!(matches!(
        &tokens[0].kind,
        GraphQLTokenKind::Error { message, .. } if message.contains("exponent")
    ));
}

/// A number running straight into a name is rejected rather than split.
#[test]
fn number_followed_by_name_is_error() {
    assert!(matches!(lex_kinds("12abc")[0], GraphQLTokenKind::Error { .. }));
}

// =============================================================================
// Strings
// =============================================================================

/// String and block string tokens keep their quotes and escapes verbatim.
#[test]
fn strings_keep_raw_text() {
    assert_eq!(
        lex_kinds(r#""a \"b\"" """block "quote" \""" end""""#),
        vec![
            GraphQLTokenKind::StringValue(r#""a \"b\"""#.into()),
            GraphQLTokenKind::BlockStringValue(r#""""block "quote" \""" end""""#.into()),
            GraphQLTokenKind::Eof,
        ],
    );
}

/// Block strings may span lines; the following token's line reflects that.
#[test]
fn block_string_spans_lines() {
    let tokens = lex("\"\"\"\nline one\nline two\n\"\"\" scalar");
    assert!(matches!(tokens[0].kind, GraphQLTokenKind::BlockStringValue(_)));
    assert_eq!(tokens[1].span.start_inclusive.line(), 3);
    assert_eq!(tokens[1].span.start_inclusive.col_utf8(), 4);
}

/// A newline inside a single-line string is an error.
#[test]
fn newline_in_string_is_error() {
    assert!(matches!(
        &lex_kinds("\"abc\ndef\"")[0],
        GraphQLTokenKind::Error { message, .. } if message == "Unterminated string literal"
    ));
}

/// A block string with no closing quotes reports where it started.
#[test]
fn unterminated_block_string_is_error() {
    let tokens = lex("scalar X \"\"\"never closed");
    match &tokens[2].kind {
        GraphQLTokenKind::Error { message, error_notes } => {
            assert_eq!(message, "Unterminated block string");
            let opened_at = error_notes[0].span.as_ref().map(|span| span.start_inclusive.col_utf8());
            assert_eq!(opened_at, Some(9));
        },
        other => panic!("expected error token, got {other:?}"),
    }
}

// =============================================================================
// Positions
// =============================================================================

/// Spans track lines, character columns, UTF-16 columns and byte offsets.
#[test]
fn positions_track_utf8_and_utf16_columns() {
    let tokens = lex("# 🎉\n  \"🎉\" name");

    let string = &tokens[1];
    assert_eq!(string.span.start_inclusive.line(), 1);
    assert_eq!(string.span.start_inclusive.col_utf8(), 2);
    assert_eq!(string.span.end_exclusive.col_utf8(), 5);
    assert_eq!(string.span.end_exclusive.col_utf16(), 6);

    let name = &tokens[2];
    assert_eq!(name.span.start_inclusive.col_utf8(), 6);
    assert_eq!(name.span.start_inclusive.col_utf16(), 7);
    assert_eq!(name.span.start_inclusive.byte_offset(), 16);
}

/// `\r\n` counts as a single line break.
#[test]
fn crlf_is_one_line_break() {
    let tokens = lex("a\r\nb\rc\nd");
    let lines = tokens.iter().map(|t| t.span.start_inclusive.line()).collect::<Vec<_>>();
    assert_eq!(lines, vec![0, 1, 2, 3, 3]);
}

/// Characters that can't start any token are reported with their code point
/// when invisible.
#[test]
fn invalid_character_is_error() {
    assert!(matches!(
        &lex_kinds("$")[0],
        GraphQLTokenKind::Error { message, .. } if message == "Unexpected character `$`"
    ));
    assert!(matches!(
        &lex_kinds("\u{0007}")[0],
        GraphQLTokenKind::Error { message, .. } if message.contains("U+0007")
    ));
}
