//! The builtin symbol and contraction tables
//!
//! All entries are declared as dot patterns (see [`crate::braille`]) and
//! compiled once into an immutable [`Table`] that is shared read-only for the
//! lifetime of the process. Construction validates the declarations:
//! accidental duplicate keys or colliding cells are a [`TableError`], only
//! the explicitly declared punctuation aliases may share a cell.

use std::sync::LazyLock;

use crate::braille;

pub mod contraction;
pub mod definitions;
mod trie;

pub use contraction::{Contraction, ContractionKind, Contractions, Guard};
pub use definitions::CharacterDefinitions;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum TableError {
    #[error(transparent)]
    InvalidBraille(#[from] braille::ParseError),
    #[error("Duplicate definition for character {character:?}")]
    DuplicateDefinition { character: char },
    #[error("{first:?} and {second:?} both map to {cell}")]
    DuplicateCell { first: char, second: char, cell: char },
    #[error("Duplicate contraction {pattern:?}")]
    DuplicateContraction { pattern: String },
    #[error("Alias {alias:?} refers to undefined {canonical:?}")]
    UnknownAlias { alias: char, canonical: char },
}

/// The capitalization indicator ⠠ (dot 6)
pub const CAPITAL: char = '⠠';
/// The number indicator ⠼ (dots 3456)
pub const NUMBER: char = '⠼';
/// The whole-word contraction indicator ⠰ (dots 56). Reserved; no rule
/// currently emits or consumes it.
pub const WORD_CONTRACTION: char = '⠰';

/// The complete translation table: character definitions plus contractions
#[derive(Debug)]
pub struct Table {
    definitions: CharacterDefinitions,
    contractions: Contractions,
}

impl Table {
    pub fn compile() -> Result<Self, TableError> {
        Ok(Self {
            definitions: CharacterDefinitions::compile()?,
            contractions: Contractions::compile()?,
        })
    }

    pub fn definitions(&self) -> &CharacterDefinitions {
        &self.definitions
    }

    pub fn contractions(&self) -> &Contractions {
        &self.contractions
    }
}

/// The builtin table, compiled on first use and shared by all translations
pub fn table() -> &'static Table {
    static TABLE: LazyLock<Table> =
        LazyLock::new(|| Table::compile().expect("builtin table must compile"));
    &TABLE
}
