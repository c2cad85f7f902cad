//! Shared types used across romanus.
//! Includes the `Numeral` symbol table, its `DigitClass`, and the CLI-facing
//! `OutputFormat`.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Largest value a Roman numeral may denote.
pub const MAX_VALUE: u32 = 3999;

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Numeral {
    I,
    V,
    X,
    L,
    C,
    D,
    M,
}

impl Numeral {
    pub const ALL: [Numeral; 7] = [
        Numeral::I,
        Numeral::V,
        Numeral::X,
        Numeral::L,
        Numeral::C,
        Numeral::D,
        Numeral::M,
    ];

    pub const fn value(self) -> u32 {
        match self {
            Numeral::I => 1,
            Numeral::V => 5,
            Numeral::X => 10,
            Numeral::L => 50,
            Numeral::C => 100,
            Numeral::D => 500,
            Numeral::M => 1000,
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            Numeral::I => 'I',
            Numeral::V => 'V',
            Numeral::X => 'X',
            Numeral::L => 'L',
            Numeral::C => 'C',
            Numeral::D => 'D',
            Numeral::M => 'M',
        }
    }

    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'I' => Some(Numeral::I),
            'V' => Some(Numeral::V),
            'X' => Some(Numeral::X),
            'L' => Some(Numeral::L),
            'C' => Some(Numeral::C),
            'D' => Some(Numeral::D),
            'M' => Some(Numeral::M),
            _ => None,
        }
    }
}

impl std::fmt::Display for Numeral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Leading decimal digit of a symbol value: 1 for I/X/C/M, 5 for V/L/D.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum DigitClass {
    One,
    Five,
}

impl DigitClass {
    /// Classifies any value by its most significant decimal digit.
    /// Values whose leading digit is neither 1 nor 5 have no class.
    pub fn of(value: u32) -> Option<Self> {
        if value == 0 {
            return None;
        }
        let mut leading = value;
        while leading >= 10 {
            leading /= 10;
        }
        match leading {
            1 => Some(DigitClass::One),
            5 => Some(DigitClass::Five),
            _ => None,
        }
    }
}

#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Default, ValueEnum, Debug, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json, // one record per line
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
