use std::fmt;

use thiserror::Error;

/// A tagged machine word as returned by compiled code.
///
/// Bit 0 is the type discriminant. Only the two boolean patterns below
/// are defined; nothing is said about how the remaining bits of an
/// untagged word are laid out.
#[repr(transparent)]
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash)]
pub struct SnakeVal(pub u32);

pub static TYPE_MASK: u32 = 0x00_00_00_01;
pub static CONST_TRUE: SnakeVal = SnakeVal(0x80_00_00_01);
pub static CONST_FALSE: SnakeVal = SnakeVal(0x00_00_00_01);

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Tag {
    Boolean,
    Other,
}

impl SnakeVal {
    pub fn tag(self) -> Tag {
        if self.0 & TYPE_MASK == 0 {
            Tag::Other
        } else {
            Tag::Boolean
        }
    }

    // Only the declared constants decode; any other boolean-tagged word
    // has no meaning yet.
    pub fn as_bool(self) -> Option<bool> {
        if self == CONST_TRUE {
            Some(true)
        } else if self == CONST_FALSE {
            Some(false)
        } else {
            None
        }
    }
}

impl fmt::LowerHex for SnakeVal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseWordErr {
    #[error("empty word")]
    Empty,

    #[error("{0} is not a 32-bit word (decimal or 0x-prefixed hex)")]
    Invalid(String),
}

/// Parses a word written in decimal or `0x`-prefixed hexadecimal.
pub fn parse_word(s: &str) -> Result<SnakeVal, ParseWordErr> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ParseWordErr::Empty);
    }
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => s.parse::<u32>(),
    };
    parsed
        .map(SnakeVal)
        .map_err(|_| ParseWordErr::Invalid(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_bit_selects_category() {
        assert_eq!(CONST_TRUE.tag(), Tag::Boolean);
        assert_eq!(CONST_FALSE.tag(), Tag::Boolean);
        assert_eq!(SnakeVal(0).tag(), Tag::Other);
        assert_eq!(SnakeVal(0x8000_0000).tag(), Tag::Other);
        assert_eq!(SnakeVal(0x0000_0003).tag(), Tag::Boolean);
    }

    #[test]
    fn only_declared_constants_are_booleans() {
        assert_eq!(CONST_TRUE.as_bool(), Some(true));
        assert_eq!(CONST_FALSE.as_bool(), Some(false));
        assert_eq!(SnakeVal(0x0000_0003).as_bool(), None);
        assert_eq!(SnakeVal(0x0000_0002).as_bool(), None);
    }

    #[test]
    fn parse_word_accepts_decimal_and_hex() {
        assert_eq!(parse_word("1"), Ok(SnakeVal(1)));
        assert_eq!(parse_word("0x1"), Ok(SnakeVal(1)));
        assert_eq!(parse_word("0X80000001"), Ok(CONST_TRUE));
        assert_eq!(parse_word(" 4294967295 "), Ok(SnakeVal(u32::MAX)));
    }

    #[test]
    fn parse_word_rejects_garbage() {
        assert_eq!(parse_word(""), Err(ParseWordErr::Empty));
        assert!(matches!(parse_word("4294967296"), Err(ParseWordErr::Invalid(_))));
        assert!(matches!(parse_word("0x100000000"), Err(ParseWordErr::Invalid(_))));
        assert!(matches!(parse_word("true"), Err(ParseWordErr::Invalid(_))));
        assert!(matches!(parse_word("-1"), Err(ParseWordErr::Invalid(_))));
    }

    #[test]
    fn parse_errors_name_the_input() {
        assert_eq!(ParseWordErr::Empty.to_string(), "empty word");
        assert_eq!(
            parse_word("true").unwrap_err().to_string(),
            "true is not a 32-bit word (decimal or 0x-prefixed hex)"
        );
    }
}
