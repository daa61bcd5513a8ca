use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncates `s` to at most `max_width` terminal columns, ending with "..."
/// when anything was cut.
pub fn truncate_string(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let budget = max_width.saturating_sub(3);
    let mut out = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > budget {
            break;
        }
        out.push(ch);
        width += w;
    }
    out.push_str("...");
    out
}

/// A typed answer that looked like an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedAnswer {
    Value(i64),
    /// Well-formed digits too large to hold; never equal to any product.
    OutOfRange,
}

impl ParsedAnswer {
    pub fn matches(self, expected: u64) -> bool {
        match self {
            ParsedAnswer::Value(v) => u64::try_from(v).is_ok_and(|v| v == expected),
            ParsedAnswer::OutOfRange => false,
        }
    }
}

fn is_integer_literal(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Reads a typed answer. Surrounding whitespace is ignored; anything else
/// that is not a plain integer is rejected.
pub fn parse_answer(raw: &str) -> Option<ParsedAnswer> {
    let trimmed = raw.trim();
    if !is_integer_literal(trimmed) {
        return None;
    }
    Some(
        trimmed
            .parse()
            .map_or(ParsedAnswer::OutOfRange, ParsedAnswer::Value),
    )
}

/// Reads a count from a form field. Zero, negatives and junk yield `None`.
pub fn parse_positive(raw: &str) -> Option<u32> {
    match parse_answer(raw)? {
        ParsedAnswer::Value(n) if n >= 1 => u32::try_from(n).ok(),
        _ => None,
    }
}

/// Terminal column of the cursor after `cursor_index` chars of `text`.
pub fn cursor_column(text: &str, cursor_index: usize) -> usize {
    text.chars()
        .take(cursor_index)
        .map(|ch| ch.width().unwrap_or(0))
        .sum()
}
