use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Ordered sequence of binary digits, used both for single code words and
/// for whole encoded messages.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BitSequence {
    bits: Vec<bool>,
}

impl BitSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bits: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    /// Returns a copy of this sequence with one more bit appended.
    pub fn with_bit(&self, bit: bool) -> Self {
        let mut extended = Self::with_capacity(self.len() + 1);
        extended.extend_from(self);
        extended.push(bit);
        extended
    }

    pub fn extend_from(&mut self, other: &BitSequence) {
        self.bits.extend_from_slice(&other.bits);
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().copied()
    }

    pub fn starts_with(&self, prefix: &BitSequence) -> bool {
        self.bits.starts_with(&prefix.bits)
    }
}

impl From<Vec<bool>> for BitSequence {
    fn from(bits: Vec<bool>) -> Self {
        Self { bits }
    }
}

impl FromIterator<bool> for BitSequence {
    fn from_iter<T: IntoIterator<Item = bool>>(iter: T) -> Self {
        Self {
            bits: iter.into_iter().collect(),
        }
    }
}

impl FromStr for BitSequence {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .enumerate()
            .map(|(position, character)| match character {
                '0' => Ok(false),
                '1' => Ok(true),
                _ => Err(Error::InvalidBitCharacter {
                    character,
                    position,
                }),
            })
            .collect()
    }
}

impl fmt::Display for BitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            write!(f, "{}", if bit { '1' } else { '0' })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::BitSequence;
    use crate::error::Error;

    #[test]
    fn test_parse_and_display() {
        let sequence: BitSequence = "0110".parse().unwrap();
        assert_eq!(sequence.len(), 4);
        assert_eq!(
            sequence.iter().collect::<Vec<bool>>(),
            vec![false, true, true, false]
        );
        assert_eq!(sequence.to_string(), "0110");
    }

    #[test]
    fn test_parse_empty_string() {
        let sequence: BitSequence = "".parse().unwrap();
        assert!(sequence.is_empty());
        assert_eq!(sequence.to_string(), "");
    }

    #[test]
    fn test_parse_rejects_non_binary_character() {
        let result = "01x1".parse::<BitSequence>();
        match result {
            Err(Error::InvalidBitCharacter {
                character,
                position,
            }) => {
                assert_eq!(character, 'x');
                assert_eq!(position, 2);
            }
            other => panic!("Expected InvalidBitCharacter, got {:?}", other),
        }
    }

    #[test]
    fn test_with_bit_keeps_prefix_untouched() {
        let prefix: BitSequence = "10".parse().unwrap();
        let extended = prefix.with_bit(true);
        assert_eq!(prefix.to_string(), "10");
        assert_eq!(extended.to_string(), "101");
        assert!(extended.starts_with(&prefix));
        assert!(!prefix.starts_with(&extended));
    }
}
