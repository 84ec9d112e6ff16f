//! The in-progress operand: typed text with explicit parse boundaries.

use super::Rejection;

/// One numeric side of the calculation, held as display text while the
/// user is still typing it.
///
/// The text only ever contains digits, at most one `.`, and `-`; `append`
/// enforces the shape on the way in, and `value` converts to a number at
/// the calculate boundary. Keeping the two representations apart is what
/// lets the display show exactly what was typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Operand {
    text: String,
}

impl Operand {
    /// Creates an empty operand.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The operand exactly as typed.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns true if nothing has been typed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Appends one character of input.
    ///
    /// Sanitization rules:
    /// - only digits, `.`, and `-` are accepted at all;
    /// - a second `.` is rejected;
    /// - `0` onto exactly `"0"` is rejected (no `00` prefix);
    /// - a nonzero digit replaces a placeholder `"0"`;
    /// - `.` on an empty buffer becomes `"0."`.
    pub fn append(&mut self, ch: char) -> Result<(), Rejection> {
        if !ch.is_ascii_digit() && ch != '.' && ch != '-' {
            return Err(Rejection::InvalidInput);
        }
        if ch == '.' && self.text.contains('.') {
            return Err(Rejection::InvalidInput);
        }
        if ch == '0' && self.text == "0" {
            return Err(Rejection::InvalidInput);
        }
        if self.text == "0" && ch != '0' && ch != '.' {
            self.text.clear();
        }
        if ch == '.' && self.text.is_empty() {
            self.text.push('0');
        }
        self.text.push(ch);
        Ok(())
    }

    /// Removes the last typed character. No-op on an empty buffer.
    pub fn delete_last(&mut self) {
        self.text.pop();
    }

    /// Empties the buffer.
    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Replaces the buffer with the canonical text of a computed value.
    pub fn set_value(&mut self, value: f64) {
        self.text = value.to_string();
    }

    /// Parses the longest leading decimal prefix of the text, ignoring
    /// anything after it. Returns `None` when no digits lead the text
    /// (empty buffer, or a bare sign).
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        parse_decimal_prefix(&self.text)
    }
}

/// Parses the longest prefix of `text` matching `[+-]? digits [. digits]`.
fn parse_decimal_prefix(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let mut seen_digit = false;
    let mut seen_dot = false;
    while let Some(&b) = bytes.get(end) {
        match b {
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end += 1;
    }
    if !seen_digit {
        return None;
    }
    text[..end].parse().ok()
}
