//! # Alphabets
//!
//! An [`Alphabet`] is the digit set of a positional numeral system: the symbol at
//! position 0 has digit value 0, the next one 1, and so on. Nano IDs are rendered as
//! fixed-width numerals over an alphabet.
//!
//! Users name an alphabet either by preset (`standard`, `numbers`, ...) or by typing
//! the symbols literally. [`AlphabetSpec::parse`] tries the preset names first and
//! falls back to a literal. Literal alphabets are deduplicated and sorted by code
//! point, so `"ABC123"` becomes `123ABC` and `'1'` is digit 0. Typed order does not
//! define digit values.

use crate::error::{Result, SplitError};
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::str::FromStr;

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlphabetPreset {
    /// `a-z A-Z 0-9 - _`, the default Nano ID alphabet
    Standard,
    NoUnderscore,
    Alphanumeric,
    Numbers,
    Lowercase,
    Uppercase,
}

impl AlphabetPreset {
    pub const ALL: [AlphabetPreset; 6] = [
        AlphabetPreset::Standard,
        AlphabetPreset::NoUnderscore,
        AlphabetPreset::Alphanumeric,
        AlphabetPreset::Numbers,
        AlphabetPreset::Lowercase,
        AlphabetPreset::Uppercase,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            AlphabetPreset::Standard => "standard",
            AlphabetPreset::NoUnderscore => "no_underscore",
            AlphabetPreset::Alphanumeric => "alphanumeric",
            AlphabetPreset::Numbers => "numbers",
            AlphabetPreset::Lowercase => "lowercase",
            AlphabetPreset::Uppercase => "uppercase",
        }
    }

    /// Symbols in digit order.
    pub fn symbols(&self) -> String {
        match self {
            AlphabetPreset::Standard => [LOWERCASE, UPPERCASE, DIGITS, "-_"].concat(),
            AlphabetPreset::NoUnderscore => [LOWERCASE, UPPERCASE, DIGITS, "-"].concat(),
            AlphabetPreset::Alphanumeric => [LOWERCASE, UPPERCASE, DIGITS].concat(),
            AlphabetPreset::Numbers => DIGITS.to_string(),
            AlphabetPreset::Lowercase => LOWERCASE.to_string(),
            AlphabetPreset::Uppercase => UPPERCASE.to_string(),
        }
    }
}

impl fmt::Display for AlphabetPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AlphabetPreset {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        AlphabetPreset::ALL
            .into_iter()
            .find(|preset| preset.name() == s)
            .ok_or(())
    }
}

/// What the user asked for, before resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlphabetSpec {
    Preset(AlphabetPreset),
    Custom(String),
}

impl AlphabetSpec {
    pub fn parse(value: &str) -> Self {
        match value.parse::<AlphabetPreset>() {
            Ok(preset) => AlphabetSpec::Preset(preset),
            Err(()) => AlphabetSpec::Custom(value.to_string()),
        }
    }

    pub fn resolve(&self) -> Result<Alphabet> {
        match self {
            AlphabetSpec::Preset(preset) => Alphabet::new(preset.symbols().chars().collect()),
            AlphabetSpec::Custom(literal) => {
                let sorted: BTreeSet<char> = literal.chars().collect();
                Alphabet::new(sorted.into_iter().collect())
            }
        }
    }
}

impl Default for AlphabetSpec {
    fn default() -> Self {
        AlphabetSpec::Preset(AlphabetPreset::Standard)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
    digits: HashMap<char, u32>,
}

impl Alphabet {
    /// `symbols` must be duplicate-free; position is digit value.
    fn new(symbols: Vec<char>) -> Result<Self> {
        if symbols.is_empty() {
            return Err(SplitError::InvalidAlphabet);
        }
        let digits = symbols
            .iter()
            .enumerate()
            .map(|(value, &symbol)| (symbol, value as u32))
            .collect();
        Ok(Self { symbols, digits })
    }

    pub fn len(&self) -> u32 {
        self.symbols.len() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The digit-0 symbol, used for left padding.
    pub fn zero(&self) -> char {
        self.symbols[0]
    }

    pub fn symbol(&self, digit: u32) -> Option<char> {
        self.symbols.get(digit as usize).copied()
    }

    pub fn digit_of(&self, symbol: char) -> Option<u32> {
        self.digits.get(&symbol).copied()
    }

    /// Reads `value` as a numeral over this alphabet.
    ///
    /// Returns `None` for foreign symbols or values wider than 128 bits.
    pub fn decode(&self, value: &str) -> Option<u128> {
        let base = u128::from(self.len());
        value.chars().try_fold(0u128, |acc, symbol| {
            let digit = self.digit_of(symbol)?;
            acc.checked_mul(base)?.checked_add(u128::from(digit))
        })
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.symbols.iter().try_for_each(|c| write!(f, "{}", c))
    }
}
