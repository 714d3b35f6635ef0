//! Translation between plain text and Braille
//!
//! Two grades are supported: Grade 1 is uncontracted, one cell per character
//! plus capitalization and number indicators. Grade 2 additionally replaces
//! whole words and letter groups with the contractions of the builtin table.
//!
//! The two entry points are [`encode`] and [`decode`]. Both are total over
//! well-formed text: characters and cells outside the tables pass through
//! unchanged instead of failing. The only errors are an invalid grade and,
//! at the byte boundary, input that is not text.
//!
//! ```
//! assert_eq!(b2a::encode("The quick brown fox", 2).unwrap(), "⠠⠮ ⠟⠅ ⠃⠗⠪⠝ ⠋⠕⠭");
//! assert_eq!(b2a::decode("⠠⠓⠑⠇⠇⠕", 1).unwrap(), "Hello");
//! ```

use std::string::FromUtf8Error;

pub mod braille;
pub mod table;
pub mod translator;

pub use table::TableError;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum TranslationError {
    #[error("Grade must be 1 (uncontracted) or 2 (contracted), got {grade}")]
    InvalidGrade { grade: u8 },
    #[error("Input is not text")]
    InvalidInput,
}

/// The supported Braille grades
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Grade {
    /// Grade 1: uncontracted, one cell per character
    Uncontracted,
    /// Grade 2: contracted, using word and letter-group shorthand
    Contracted,
}

impl TryFrom<u8> for Grade {
    type Error = TranslationError;

    fn try_from(grade: u8) -> Result<Self, Self::Error> {
        match grade {
            1 => Ok(Grade::Uncontracted),
            2 => Ok(Grade::Contracted),
            grade => Err(TranslationError::InvalidGrade { grade }),
        }
    }
}

impl From<FromUtf8Error> for TranslationError {
    fn from(_: FromUtf8Error) -> Self {
        TranslationError::InvalidInput
    }
}

/// Translate `text` to Braille cells.
///
/// Fails only when `grade` is not 1 or 2.
pub fn encode(text: &str, grade: u8) -> Result<String, TranslationError> {
    match Grade::try_from(grade)? {
        Grade::Uncontracted => Ok(translator::grade1::encode(text)),
        Grade::Contracted => Ok(translator::grade2::encode(text)),
    }
}

/// Translate Braille cells back to text.
///
/// Fails only when `grade` is not 1 or 2.
pub fn decode(braille: &str, grade: u8) -> Result<String, TranslationError> {
    match Grade::try_from(grade)? {
        Grade::Uncontracted => Ok(translator::grade1::decode(braille)),
        Grade::Contracted => Ok(translator::grade2::decode(braille)),
    }
}
