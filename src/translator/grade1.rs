//! Grade 1 (uncontracted) translation
//!
//! One cell per character. Uppercase letters are prefixed with the capital
//! indicator, each digit run with one number indicator. Characters outside
//! the tables pass through unchanged in both directions.

use crate::table::{self, CAPITAL, NUMBER};
use crate::translator::indication::{numeric, uppercase::Scope};

/// Translate `input` to uncontracted Braille
pub fn encode(input: &str) -> String {
    let mut result = String::new();
    let mut runs = numeric::Indicator::new();
    for c in input.chars() {
        if runs.next(c) {
            result.push(NUMBER);
        }
        if c.is_uppercase() {
            result.push(CAPITAL);
        }
        encode_literal(c, &mut result);
    }
    result
}

/// Encode one character literally: base cell, digit cell, punctuation cell
/// or pass-through. Capitalization and digit runs are the caller's concern.
pub(crate) fn encode_literal(c: char, out: &mut String) {
    let definitions = table::table().definitions();
    let folded = c.to_lowercase().next().unwrap_or(c);
    if let Some(cells) = definitions.letter(folded) {
        out.push_str(cells);
    } else if let Some(cells) = definitions.digit(c) {
        out.push_str(cells);
    } else if let Some(cells) = definitions.punctuation(c) {
        out.push_str(cells);
    } else {
        out.push(c);
    }
}

/// Translate uncontracted Braille back to text
pub fn decode(input: &str) -> String {
    let definitions = table::table().definitions();
    let mut result = String::new();
    let mut scope = Scope::None;
    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            CAPITAL => {
                // a doubled indicator opens an uppercase run
                if chars.peek() == Some(&CAPITAL) {
                    chars.next();
                    scope = Scope::UntilBoundary;
                } else {
                    scope = Scope::NextUnit;
                }
            }
            NUMBER => {
                scope = Scope::None;
                while let Some(&cell) = chars.peek() {
                    match definitions.char_for_digit(cell) {
                        Some(digit) => {
                            result.push(digit);
                            chars.next();
                        }
                        None => break,
                    }
                }
            }
            _ => {
                let decoded = definitions
                    .char_for_letter(c)
                    .or_else(|| definitions.char_for_punctuation(c))
                    .unwrap_or(c);
                match scope {
                    Scope::NextUnit => {
                        result.extend(decoded.to_uppercase());
                        scope = Scope::None;
                    }
                    Scope::UntilBoundary if decoded.is_whitespace() => {
                        result.push(decoded);
                        scope = Scope::None;
                    }
                    Scope::UntilBoundary => result.extend(decoded.to_uppercase()),
                    Scope::None => result.push(decoded),
                }
            }
        }
    }
    result
}
