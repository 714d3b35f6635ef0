//! The Grade 2 contraction table
//!
//! Contractions are declared as a pattern of characters, a cell sequence in
//! dot notation, and a kind. Entries are kept in declaration order and both
//! translation directions consume the same compiled table: the encoding
//! direction through [`Contractions::whole_word`] and
//! [`Contractions::longest_match`], the decoding direction through
//! [`Contractions::longest_cell_match`]. Matching is deterministic:
//! longest first, first-declared wins on ties.

use std::collections::HashMap;

use log::debug;

use crate::braille;
use crate::table::TableError;
use crate::table::trie::Trie;

/// Bound on the partial-match lookahead during encoding. Longer patterns can
/// still match through the whole-word check.
const MAX_PARTIAL: usize = 5;

/// Whole-word forms reserved for standalone use. Inside a word they defer
/// when a letter follows.
const RESERVED_STANDALONE: &[&str] = &["the", "and", "for", "with", "of"];

/// Digraphs that defer to a shorter match or the single-letter fallback when
/// a letter follows.
const RESERVED_DIGRAPHS: &[&str] = &["th", "sh", "ch", "wh"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractionKind {
    /// Replaces an entire word
    WholeWord,
    /// Replaces a letter group inside a word
    Partial,
}

impl std::fmt::Display for ContractionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContractionKind::WholeWord => write!(f, "word"),
            ContractionKind::Partial => write!(f, "partial"),
        }
    }
}

/// Restriction on where an entry may be applied while encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    None,
    /// Not applied when an alphabetic character immediately follows within
    /// the word
    NotBeforeLetter,
}

impl std::fmt::Display for Guard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Guard::None => Ok(()),
            Guard::NotBeforeLetter => write!(f, "not before letter"),
        }
    }
}

use ContractionKind::{Partial, WholeWord};

const CONTRACTIONS: &[(&str, &str, ContractionKind)] = &[
    ("the", "2346", WholeWord),
    ("and", "12346", WholeWord),
    ("for", "123456", WholeWord),
    ("of", "12356", WholeWord),
    ("with", "23456", WholeWord),
    ("in", "35", WholeWord),
    ("was", "356", WholeWord),
    ("were", "2356", WholeWord),
    ("his", "236", WholeWord),
    ("had", "456", WholeWord),
    ("some", "234-134", WholeWord),
    ("would", "2456-145", WholeWord),
    ("there", "2346-1235", WholeWord),
    ("their", "456-2346", WholeWord),
    ("about", "1-12", WholeWord),
    ("should", "146-145", WholeWord),
    ("people", "1234", WholeWord),
    ("enough", "26", WholeWord),
    ("knowledge", "13", WholeWord),
    ("like", "123", WholeWord),
    ("more", "134", WholeWord),
    ("part", "1234-2345", WholeWord),
    ("time", "2345-134", WholeWord),
    ("right", "1235-2345", WholeWord),
    ("little", "123-123", WholeWord),
    ("good", "1245-145", WholeWord),
    ("ever", "15-1236", WholeWord),
    ("such", "234-16", WholeWord),
    ("child", "16-145", WholeWord),
    ("world", "2456-1235-123-145", WholeWord),
    ("day", "145-1-13456", WholeWord),
    ("still", "34", WholeWord),
    ("thing", "1456-346", WholeWord),
    ("work", "2456-13", WholeWord),
    ("great", "1245-1235-2345", WholeWord),
    ("where", "2456-125-15-1235-15", WholeWord),
    ("because", "12-14", WholeWord),
    ("before", "23-124", WholeWord),
    ("today", "2345-145", WholeWord),
    ("tomorrow", "2345-134", WholeWord),
    ("tonight", "2345-1345", WholeWord),
    ("always", "1-123-2456", WholeWord),
    ("also", "1-123", WholeWord),
    ("almost", "1-123-134", WholeWord),
    ("already", "1-123-1235", WholeWord),
    ("across", "1-14-1235", WholeWord),
    ("against", "1-1245-34", WholeWord),
    ("between", "12-2345-1345", WholeWord),
    ("either", "15-24", WholeWord),
    ("letter", "123-1235", WholeWord),
    ("many", "134-1345-13456", WholeWord),
    ("must", "134-34", WholeWord),
    ("necessary", "1345-15-14", WholeWord),
    ("neither", "1345-15-24", WholeWord),
    ("question", "12345-1345", WholeWord),
    ("quick", "12345-13", WholeWord),
    ("rather", "1235", WholeWord),
    ("that", "2345", WholeWord),
    ("these", "2346-234-15", WholeWord),
    ("those", "1456-135-234-15", WholeWord),
    ("through", "1456-1235-136", WholeWord),
    ("under", "136-1345-145", WholeWord),
    ("which", "156-24-16", WholeWord),
    ("whose", "156-135-234-15", WholeWord),
    ("word", "2456-135-1235-145", WholeWord),
    ("young", "13456-1245", WholeWord),
    ("your", "13456-1235", WholeWord),
    ("but", "12346", WholeWord),
    ("can", "145", WholeWord),
    ("do", "2456", WholeWord),
    ("every", "15", WholeWord),
    ("from", "123456", WholeWord),
    ("go", "1245", WholeWord),
    ("have", "125", WholeWord),
    ("just", "245", WholeWord),
    ("not", "1345", WholeWord),
    ("quite", "12345", WholeWord),
    ("so", "234", WholeWord),
    ("us", "136", WholeWord),
    ("very", "1236", WholeWord),
    ("will", "2456", WholeWord),
    ("it", "1346", WholeWord),
    ("you", "13456", WholeWord),
    ("as", "1", WholeWord),
    ("him", "125-134", WholeWord),
    ("himself", "125-134-124", WholeWord),
    ("herself", "125-12456-124", WholeWord),
    ("itself", "24-2345-124", WholeWord),
    ("myself", "134-13456-124", WholeWord),
    ("oneself", "135-1345-15-124", WholeWord),
    ("ourselves", "1256-1235-1236-234", WholeWord),
    ("themselves", "2346-134-1236-234", WholeWord),
    ("yourself", "13456-1235-124", WholeWord),
    ("yourselves", "13456-1235-1236-234", WholeWord),
    ("ch", "16", Partial),
    ("sh", "146", Partial),
    ("th", "1456", Partial),
    ("wh", "156", Partial),
    ("ou", "1256", Partial),
    ("st", "34", Partial),
    ("ing", "346", Partial),
    ("ar", "345", Partial),
    ("er", "12456", Partial),
    ("ow", "246", Partial),
    ("ed", "1246", Partial),
    ("gh", "126", Partial),
    ("ble", "3456-12-123-15", Partial),
    ("con", "14-135-1345", Partial),
    ("dis", "145-24-234", Partial),
    ("ea", "15-1", Partial),
    ("bb", "12-12", Partial),
    ("cc", "14-14", Partial),
    ("ff", "124-124", Partial),
    ("gg", "1245-1245", Partial),
];

/// One contraction: a character pattern and the cells that replace it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contraction {
    pattern: String,
    cells: String,
    kind: ContractionKind,
    guard: Guard,
}

impl Contraction {
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn cells(&self) -> &str {
        &self.cells
    }

    pub fn kind(&self) -> ContractionKind {
        self.kind
    }

    pub fn guard(&self) -> Guard {
        self.guard
    }
}

/// The compiled contraction table
#[derive(Debug)]
pub struct Contractions {
    /// Entries in declaration order
    entries: Vec<Contraction>,
    /// Pattern to entry index, for the whole-word check and partial matching
    by_pattern: HashMap<String, usize>,
    /// Cell sequences to entry indices, for the decoding direction
    by_cells: Trie,
}

impl Contractions {
    pub fn compile() -> Result<Self, TableError> {
        let table = Self::build(CONTRACTIONS)?;
        debug!("compiled {} contractions", table.entries.len());
        Ok(table)
    }

    fn build(declarations: &[(&str, &str, ContractionKind)]) -> Result<Self, TableError> {
        let mut entries = Vec::with_capacity(declarations.len());
        let mut by_pattern = HashMap::new();
        let mut by_cells = Trie::new();
        for &(pattern, dots, kind) in declarations {
            let cells = braille::braille_chars(dots)?.to_string();
            if by_pattern.contains_key(pattern) {
                return Err(TableError::DuplicateContraction {
                    pattern: pattern.to_string(),
                });
            }
            by_pattern.insert(pattern.to_string(), entries.len());
            by_cells.insert(&cells, entries.len());
            entries.push(Contraction {
                pattern: pattern.to_string(),
                cells,
                kind,
                guard: guard_for(pattern),
            });
        }
        Ok(Self {
            entries,
            by_pattern,
            by_cells,
        })
    }

    /// Exact whole-word lookup over a folded word
    pub fn whole_word(&self, word: &str) -> Option<&Contraction> {
        self.by_pattern
            .get(word)
            .map(|&index| &self.entries[index])
            .filter(|contraction| contraction.kind == WholeWord)
    }

    /// The longest guarded match starting at `position` in the folded word.
    ///
    /// Candidate lengths are tried from [`MAX_PARTIAL`] down to one. A
    /// guarded entry does not abort the search, it defers to the next
    /// shorter candidate.
    pub fn longest_match(&self, word: &[char], position: usize) -> Option<&Contraction> {
        let longest = MAX_PARTIAL.min(word.len() - position);
        for length in (1..=longest).rev() {
            let candidate: String = word[position..position + length].iter().collect();
            let Some(&index) = self.by_pattern.get(candidate.as_str()) else {
                continue;
            };
            let contraction = &self.entries[index];
            if contraction.guard == Guard::NotBeforeLetter
                && word
                    .get(position + length)
                    .is_some_and(|c| c.is_alphabetic())
            {
                continue;
            }
            return Some(contraction);
        }
        None
    }

    /// The contraction with the longest cell sequence matching a prefix of
    /// `cells`
    pub fn longest_cell_match(&self, cells: &str) -> Option<&Contraction> {
        self.by_cells
            .find_longest(cells)
            .map(|index| &self.entries[index])
    }

    /// All contractions in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &Contraction> {
        self.entries.iter()
    }
}

fn guard_for(pattern: &str) -> Guard {
    if RESERVED_STANDALONE.contains(&pattern) || RESERVED_DIGRAPHS.contains(&pattern) {
        Guard::NotBeforeLetter
    } else {
        Guard::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(word: &str) -> Vec<char> {
        word.chars().collect()
    }

    #[test]
    fn whole_word_lookup() {
        let contractions = Contractions::compile().unwrap();
        assert_eq!(contractions.whole_word("the").unwrap().cells(), "⠮");
        assert_eq!(contractions.whole_word("that").unwrap().cells(), "⠞");
        assert_eq!(contractions.whole_word("quick").unwrap().cells(), "⠟⠅");
        // letter groups are not whole words
        assert_eq!(contractions.whole_word("ch"), None);
        assert_eq!(contractions.whole_word("xyz"), None);
    }

    #[test]
    fn longest_match_prefers_longer_patterns() {
        let contractions = Contractions::compile().unwrap();
        let word = chars("sing");
        assert_eq!(
            contractions.longest_match(&word, 1).unwrap().pattern(),
            "ing"
        );
        let word = chars("rain");
        assert_eq!(contractions.longest_match(&word, 2).unwrap().pattern(), "in");
    }

    #[test]
    fn reserved_words_defer_before_letters() {
        let contractions = Contractions::compile().unwrap();
        // "the" and "th" both defer when a letter follows
        assert_eq!(contractions.longest_match(&chars("them"), 0), None);
        assert_eq!(contractions.longest_match(&chars("often"), 0), None);
        // at the end of a word the digraph applies
        assert_eq!(
            contractions.longest_match(&chars("bath"), 2).unwrap().pattern(),
            "th"
        );
        // a non-letter after the pattern does not suppress it
        assert_eq!(
            contractions.longest_match(&chars("1and2"), 1).unwrap().pattern(),
            "and"
        );
    }

    #[test]
    fn unreserved_whole_words_match_inside_words() {
        let contractions = Contractions::compile().unwrap();
        assert_eq!(
            contractions
                .longest_match(&chars("handsome"), 4)
                .unwrap()
                .pattern(),
            "some"
        );
        assert_eq!(
            contractions.longest_match(&chars("don't"), 0).unwrap().pattern(),
            "do"
        );
    }

    #[test]
    fn cell_match_prefers_longest_then_declaration_order() {
        let contractions = Contractions::compile().unwrap();
        // first-declared wins between "and" and "but", "for" and "from"
        assert_eq!(
            contractions.longest_cell_match("⠯").unwrap().pattern(),
            "and"
        );
        assert_eq!(
            contractions.longest_cell_match("⠿").unwrap().pattern(),
            "for"
        );
        // "still" is declared before "st", "time" before "tomorrow"
        assert_eq!(
            contractions.longest_cell_match("⠌").unwrap().pattern(),
            "still"
        );
        assert_eq!(
            contractions.longest_cell_match("⠞⠍").unwrap().pattern(),
            "time"
        );
        // a longer sequence beats declaration order
        assert_eq!(
            contractions.longest_cell_match("⠁⠛⠌").unwrap().pattern(),
            "against"
        );
        assert_eq!(
            contractions.longest_cell_match("⠓⠍⠋").unwrap().pattern(),
            "himself"
        );
        assert_eq!(contractions.longest_cell_match("⠂"), None);
    }

    #[test]
    fn duplicate_patterns_are_rejected() {
        let result = Contractions::build(&[("the", "2346", WholeWord), ("the", "2345", WholeWord)]);
        assert_eq!(
            result.unwrap_err(),
            TableError::DuplicateContraction {
                pattern: "the".to_string()
            }
        );
    }
}
