use crate::error::{Error, Result};
use crate::types::Numeral;

/// Resolve one symbol to its numeral value.
pub fn symbol_value(c: char, position: usize) -> Result<u32> {
    Numeral::from_char(c)
        .map(Numeral::value)
        .ok_or(Error::InvalidCharacter {
            character: c,
            position,
        })
}

/// Resolve every symbol of an already case-folded numeral, failing on the first
/// character outside the alphabet.
pub fn resolve_values(input: &str) -> Result<Vec<u32>> {
    input
        .chars()
        .enumerate()
        .map(|(position, c)| symbol_value(c, position))
        .collect()
}
