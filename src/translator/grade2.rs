//! Grade 2 (contracted) translation
//!
//! The encoding direction works per whitespace-delimited word: classify the
//! casing pattern, try the whole-word contraction, then scan left to right
//! taking the longest guarded partial match and falling back to literal
//! cells. The decoding direction is a single scan of the whole cell stream
//! where indicators, not word boundaries, decide scope.
//!
//! Several cells are deliberately ambiguous (a single cell can be a letter
//! and a whole-word contraction). The decoder resolves them greedily:
//! longest contraction first, then letters, then punctuation. Decoding
//! recovers the casing pattern of a word exactly, not necessarily its
//! letters.

use crate::table::{self, CAPITAL, NUMBER, Table};
use crate::translator::indication::{
    numeric,
    uppercase::{self, Scope, WordCase},
};
use crate::translator::{Segment, grade1, segments};

/// Translate `input` to contracted Braille
pub fn encode(input: &str) -> String {
    let mut result = String::new();
    for segment in segments(input) {
        match segment {
            Segment::Whitespace(run) => result.push_str(run),
            Segment::Word(word) => encode_word(word, &mut result),
        }
    }
    result
}

fn encode_word(word: &str, out: &mut String) {
    let contractions = table::table().contractions();
    match WordCase::of(word) {
        WordCase::Lower => (),
        WordCase::Capitalized => out.push(CAPITAL),
        WordCase::AllCaps => {
            out.push(CAPITAL);
            out.push(CAPITAL);
        }
    }
    let folded = word.to_lowercase();
    // whole-word contractions never combine with partial matching
    if let Some(contraction) = contractions.whole_word(&folded) {
        out.push_str(contraction.cells());
        return;
    }
    let chars: Vec<char> = folded.chars().collect();
    let mut runs = numeric::Indicator::new();
    let mut position = 0;
    while position < chars.len() {
        if let Some(contraction) = contractions.longest_match(&chars, position) {
            let length = contraction.pattern().chars().count();
            // keep the digit run state in step with consumed characters
            for &c in &chars[position..position + length] {
                runs.next(c);
            }
            out.push_str(contraction.cells());
            position += length;
            continue;
        }
        let c = chars[position];
        if runs.next(c) {
            out.push(NUMBER);
        }
        grade1::encode_literal(c, out);
        position += 1;
    }
}

/// Translate contracted Braille back to text
pub fn decode(input: &str) -> String {
    let table = table::table();
    let mut result = String::new();
    let mut scope = Scope::None;
    let mut rest = input;
    while let Some(c) = rest.chars().next() {
        match c {
            CAPITAL if rest[c.len_utf8()..].starts_with(CAPITAL) => {
                rest = &rest[2 * c.len_utf8()..];
                scope = Scope::UntilBoundary;
            }
            CAPITAL => {
                rest = &rest[c.len_utf8()..];
                scope = Scope::NextUnit;
            }
            NUMBER => {
                rest = &rest[c.len_utf8()..];
                scope = Scope::None;
                while let Some(cell) = rest.chars().next() {
                    match table.definitions().char_for_digit(cell) {
                        Some(digit) => {
                            result.push(digit);
                            rest = &rest[cell.len_utf8()..];
                        }
                        None => break,
                    }
                }
            }
            c if c.is_whitespace() => {
                result.push(c);
                scope = Scope::None;
                rest = &rest[c.len_utf8()..];
            }
            c => {
                let (unit, consumed) = next_unit(table, c, rest);
                match scope {
                    Scope::NextUnit => {
                        result.push_str(&uppercase::capitalize(&unit));
                        scope = Scope::None;
                    }
                    Scope::UntilBoundary => result.push_str(&unit.to_uppercase()),
                    Scope::None => result.push_str(&unit),
                }
                rest = &rest[consumed..];
            }
        }
    }
    result
}

/// Decode one unit at the start of `rest`: the longest contraction cell
/// sequence, else a single letter, punctuation or pass-through cell.
/// Returns the decoded text and the number of bytes consumed.
fn next_unit(table: &Table, c: char, rest: &str) -> (String, usize) {
    if let Some(contraction) = table.contractions().longest_cell_match(rest) {
        return (
            contraction.pattern().to_string(),
            contraction.cells().len(),
        );
    }
    let definitions = table.definitions();
    let decoded = definitions
        .char_for_letter(c)
        .or_else(|| definitions.char_for_punctuation(c))
        .unwrap_or(c);
    (decoded.to_string(), c.len_utf8())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_word_contractions() {
        assert_eq!(encode("the"), "⠮");
        assert_eq!(encode("The"), "⠠⠮");
        assert_eq!(encode("THE"), "⠠⠠⠮");
        assert_eq!(encode("quick"), "⠟⠅");
        assert_eq!(encode("that"), "⠞");
    }

    #[test]
    fn partial_contractions() {
        assert_eq!(encode("sing"), "⠎⠬");
        assert_eq!(encode("bath"), "⠃⠁⠹");
        assert_eq!(encode("brown"), "⠃⠗⠪⠝");
        assert_eq!(encode("handsome"), "⠓⠁⠝⠙⠎⠍");
    }

    #[test]
    fn reserved_patterns_spell_out_before_letters() {
        // "the" and the "th" digraph both defer inside a word
        assert_eq!(encode("them"), "⠞⠓⠑⠍");
        assert_eq!(encode("this"), "⠞⠓⠊⠎");
        // a trailing non-letter does not suppress the match
        assert_eq!(encode("the."), "⠮⠲");
    }

    #[test]
    fn whole_words_keep_their_trailing_punctuation() {
        assert_eq!(encode("don't"), "⠺⠝⠄⠞");
        assert_eq!(encode("world!"), "⠺⠗⠇⠙⠖");
    }

    #[test]
    fn whitespace_runs_are_copied_verbatim() {
        assert_eq!(encode("the  quick"), "⠮  ⠟⠅");
        assert_eq!(encode(" in\nthe "), " ⠔\n⠮ ");
    }

    #[test]
    fn digit_runs_inside_words() {
        assert_eq!(encode("42"), "⠼⠲⠆");
        assert_eq!(encode("a1b2"), "⠁⠼⠂⠃⠼⠆");
        // a contraction between digits splits the run
        assert_eq!(encode("1and2"), "⠼⠂⠯⠼⠆");
    }

    #[test]
    fn sentence() {
        assert_eq!(encode("The quick brown fox"), "⠠⠮ ⠟⠅ ⠃⠗⠪⠝ ⠋⠕⠭");
    }

    #[test]
    fn decode_contractions() {
        assert_eq!(decode("⠮"), "the");
        assert_eq!(decode("⠯"), "and");
        assert_eq!(decode("⠿"), "for");
        assert_eq!(decode("⠮⠗"), "there");
        // the longest cell sequence wins over shorter prefixes
        assert_eq!(decode("⠁⠛⠌"), "against");
        assert_eq!(decode("⠓⠍⠋"), "himself");
        // ties go to the first declared entry
        assert_eq!(decode("⠞⠍"), "time");
        assert_eq!(decode("⠌"), "still");
    }

    #[test]
    fn decode_capitals() {
        assert_eq!(decode("⠠⠮"), "The");
        assert_eq!(decode("⠠⠠⠮"), "THE");
        assert_eq!(decode("⠠⠮⠗"), "There");
        assert_eq!(decode("⠠⠠⠮⠗ ⠮"), "THERE the");
    }

    #[test]
    fn decode_digit_runs() {
        assert_eq!(decode("⠼⠲⠆"), "42");
        assert_eq!(decode("⠊ ⠓ ⠼⠆"), "i have 2");
        // the indicator ends an uppercase run
        assert_eq!(decode("⠠⠠⠁⠃⠼⠂⠆"), "ABOUT12");
    }

    #[test]
    fn decode_passes_unknown_cells_through() {
        assert_eq!(decode("©"), "©");
        assert_eq!(decode("⠮ © ⠮"), "the © the");
    }

    fn casing(word: &str) -> (bool, bool) {
        (
            word.chars().next().is_some_and(|c| c.is_uppercase()),
            word.chars()
                .filter(|c| c.is_alphabetic())
                .all(|c| c.is_uppercase()),
        )
    }

    #[test]
    fn casing_pattern_survives_a_round_trip() {
        for word in [
            "hello", "Hello", "HELLO", "there", "There", "THERE", "sing", "Sing", "SING",
        ] {
            let decoded = decode(&encode(word));
            assert_eq!(casing(&decoded), casing(word), "casing of {word:?}");
        }
    }

    #[test]
    fn contracted_words_round_trip() {
        for word in ["the", "and", "there", "against", "himself", "question"] {
            assert_eq!(decode(&encode(word)), word);
        }
    }
}
