use serde::Serialize;

pub const VALID_MESSAGE: &str = "Code appears valid";
pub const INVALID_MESSAGE: &str =
    "Code may have syntax errors. Ensure proper list definitions and placeholder brackets.";

/// Outcome of a heuristic syntax check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub valid: bool,
    pub message: String,
}

/// Heuristically check a template source.
///
/// Only the list probe decides the verdict. The placeholder probe is
/// evaluated but cannot change the result.
pub fn validate(source: &str) -> Report {
    let has_brackets = has_placeholder(source);
    let has_lists = has_list_block(source);
    #[allow(clippy::nonminimal_bool, clippy::overly_complex_bool_expr)]
    let valid = has_lists && (has_brackets || !has_brackets);

    Report {
        valid,
        message: if valid { VALID_MESSAGE } else { INVALID_MESSAGE }.to_string(),
    }
}

fn is_word(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

fn word_len(s: &str) -> usize {
    s.bytes().take_while(|b| is_word(*b)).count()
}

/// True if `[` + one or more word characters + `]` appears anywhere.
pub fn has_placeholder(source: &str) -> bool {
    source.match_indices('[').any(|(i, _)| {
        let rest = &source[i + 1..];
        let n = word_len(rest);
        n > 0 && rest[n..].starts_with(']')
    })
}

/// True if some line break is followed by a bare word line and then an
/// indented continuation that is itself terminated by a line break.
///
/// A list declared on the very first line has no preceding line break and
/// is not seen. The indentation run may span blank lines.
pub fn has_list_block(source: &str) -> bool {
    source.match_indices('\n').any(|(i, _)| {
        let rest = &source[i + 1..];
        let n = word_len(rest);
        if n == 0 {
            return false;
        }
        match rest[n..].strip_prefix('\n') {
            Some(after) => has_indented_continuation(after),
            None => false,
        }
    })
}

/// Whitespace in the ECMAScript sense: `char::is_whitespace` minus NEL, plus BOM.
fn is_space(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// One or more spaces, then a run free of line terminators, then `\n`.
///
/// The space run may stop at any point inside the leading whitespace, so a
/// `\n` anywhere in that whitespace (after its first character) qualifies.
/// Past the whitespace, the first line terminator must be `\n`.
fn has_indented_continuation(s: &str) -> bool {
    let first_len = match s.chars().next() {
        Some(first) if is_space(first) => first.len_utf8(),
        _ => return false,
    };
    let indent_end = s
        .char_indices()
        .find(|(_, c)| !is_space(*c))
        .map_or(s.len(), |(i, _)| i);

    s[first_len..indent_end].contains('\n')
        || s[indent_end..].chars().find(|c| is_line_terminator(*c)) == Some('\n')
}
