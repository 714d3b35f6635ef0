//! Dot-pattern representation of Braille cells
//!
//! Cells are declared as strings of dot numbers (`"146"` is ⠩, `"146-145"`
//! is ⠩⠙) and rendered into the Unicode Braille Patterns block
//! (U+2800–U+28FF) when the symbol tables are built.

use enumset::{EnumSet, EnumSetType};

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ParseError {
    #[error("Invalid braille {character:?}")]
    InvalidBraille { character: Option<char> },
}

#[derive(EnumSetType, Debug)]
pub enum BrailleDot {
    Dot1,
    Dot2,
    Dot3,
    Dot4,
    Dot5,
    Dot6,
    Dot7,
    Dot8,
}

/// A single Braille cell, a set of raised dots
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrailleChar(EnumSet<BrailleDot>);

impl From<EnumSet<BrailleDot>> for BrailleChar {
    fn from(value: EnumSet<BrailleDot>) -> Self {
        BrailleChar(value)
    }
}

impl BrailleChar {
    pub fn to_unicode(&self) -> char {
        let unicode = self
            .0
            .iter()
            .map(|dot| dot_to_hex(&dot))
            .fold(0x2800, |acc, x| acc | x);
        char::from_u32(unicode).unwrap()
    }
}

impl std::fmt::Display for BrailleChar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_unicode())
    }
}

impl FromIterator<BrailleDot> for BrailleChar {
    fn from_iter<T: IntoIterator<Item = BrailleDot>>(iter: T) -> Self {
        BrailleChar(EnumSet::from_iter(iter))
    }
}

/// A sequence of Braille cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrailleChars(Vec<BrailleChar>);

impl std::ops::Deref for BrailleChars {
    type Target = Vec<BrailleChar>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<BrailleChar>> for BrailleChars {
    fn from(value: Vec<BrailleChar>) -> Self {
        BrailleChars(value)
    }
}

impl std::fmt::Display for BrailleChars {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            self.0.iter().map(|b| b.to_unicode()).collect::<String>()
        )
    }
}

impl FromIterator<BrailleChar> for BrailleChars {
    fn from_iter<T: IntoIterator<Item = BrailleChar>>(iter: T) -> Self {
        BrailleChars(iter.into_iter().collect())
    }
}

/// True for characters inside the Unicode Braille Patterns block
pub fn is_braille(c: char) -> bool {
    matches!(c, '\u{2800}'..='\u{28FF}')
}

fn char_to_dot(char: char) -> Result<BrailleDot, ParseError> {
    match char {
        '1' => Ok(BrailleDot::Dot1),
        '2' => Ok(BrailleDot::Dot2),
        '3' => Ok(BrailleDot::Dot3),
        '4' => Ok(BrailleDot::Dot4),
        '5' => Ok(BrailleDot::Dot5),
        '6' => Ok(BrailleDot::Dot6),
        '7' => Ok(BrailleDot::Dot7),
        '8' => Ok(BrailleDot::Dot8),
        invalid => Err(ParseError::InvalidBraille {
            character: Some(invalid),
        }),
    }
}

pub fn chars_to_dots(chars: &str) -> Result<BrailleChar, ParseError> {
    if chars.is_empty() {
        Err(ParseError::InvalidBraille { character: None })
    } else {
        chars.chars().map(char_to_dot).collect()
    }
}

/// Parse a `-`-separated dot notation (`"146-145"`) into a cell sequence
pub fn braille_chars(chars: &str) -> Result<BrailleChars, ParseError> {
    chars.split('-').map(chars_to_dots).collect()
}

fn dot_to_hex(dot: &BrailleDot) -> u32 {
    match dot {
        BrailleDot::Dot1 => 0x0001,
        BrailleDot::Dot2 => 0x0002,
        BrailleDot::Dot3 => 0x0004,
        BrailleDot::Dot4 => 0x0008,
        BrailleDot::Dot5 => 0x0010,
        BrailleDot::Dot6 => 0x0020,
        BrailleDot::Dot7 => 0x0040,
        BrailleDot::Dot8 => 0x0080,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use enumset::enum_set;

    #[test]
    fn test_chars_to_dots() {
        assert_eq!(
            chars_to_dots("123"),
            Ok(BrailleChar(enum_set!(
                BrailleDot::Dot1 | BrailleDot::Dot2 | BrailleDot::Dot3
            )))
        );
        assert_eq!(
            chars_to_dots("6"),
            Ok(BrailleChar(enum_set!(BrailleDot::Dot6)))
        );
        assert_eq!(
            chars_to_dots("9"),
            Err(ParseError::InvalidBraille {
                character: Some('9')
            })
        );
        assert_eq!(
            chars_to_dots("z"),
            Err(ParseError::InvalidBraille {
                character: Some('z')
            })
        );
    }

    #[test]
    fn test_braille_chars() {
        assert_eq!(
            braille_chars("1-1"),
            Ok(BrailleChars(vec![
                BrailleChar(enum_set!(BrailleDot::Dot1)),
                BrailleChar(enum_set!(BrailleDot::Dot1))
            ]))
        );
        assert_eq!(
            braille_chars("1-"),
            Err(ParseError::InvalidBraille { character: None })
        );
        assert_eq!(
            braille_chars("-1"),
            Err(ParseError::InvalidBraille { character: None })
        );
        assert_eq!(
            braille_chars(""),
            Err(ParseError::InvalidBraille { character: None })
        );
    }

    #[test]
    fn test_dots_to_unicode() {
        assert_eq!(braille_chars("1456").unwrap().to_string(), "⠹");
        assert_eq!(braille_chars("1456-346").unwrap().to_string(), "⠹⠬");
        assert_eq!(braille_chars("6").unwrap().to_string(), "⠠");
        assert_eq!(braille_chars("3456").unwrap().to_string(), "⠼");
    }

    #[test]
    fn test_is_braille() {
        assert!(is_braille('⠮'));
        assert!(is_braille('\u{2800}'));
        assert!(!is_braille('a'));
        assert!(!is_braille('©'));
    }
}
