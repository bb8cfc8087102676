//! Fixed-width unsigned integers stored as base-`b` digits.
//!
//! A Nano ID space of `b^L` identifiers outgrows `u128` quickly (`64^22` already
//! needs 132 bits), so offsets are kept in the alphabet's own base. Division and
//! multiplication only ever involve a `u64` operand, which keeps every intermediate
//! value inside a `u128`. Rendering a Nano ID is then a digit-to-symbol lookup.

use crate::alphabet::Alphabet;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Numeral {
    base: u32,
    /// Most significant digit first.
    digits: Vec<u32>,
}

impl Numeral {
    pub fn zero(base: u32, width: usize) -> Self {
        debug_assert!(base >= 2, "numerals need a base of at least 2");
        Self {
            base,
            digits: vec![0; width],
        }
    }

    /// `base^exponent`, one digit wider than `exponent`.
    pub fn power(base: u32, exponent: usize) -> Self {
        let mut numeral = Self::zero(base, exponent + 1);
        numeral.digits[0] = 1;
        numeral
    }

    pub fn width(&self) -> usize {
        self.digits.len()
    }

    pub fn digits(&self) -> &[u32] {
        &self.digits
    }

    pub fn is_zero(&self) -> bool {
        self.digits.iter().all(|&d| d == 0)
    }

    /// Schoolbook long division; returns quotient (same width) and remainder.
    pub fn div_small(&self, divisor: u64) -> (Numeral, u64) {
        assert!(divisor > 0, "division by zero");
        let base = u128::from(self.base);
        let divisor = u128::from(divisor);
        let mut remainder: u128 = 0;
        let digits = self
            .digits
            .iter()
            .map(|&digit| {
                let current = remainder * base + u128::from(digit);
                remainder = current % divisor;
                (current / divisor) as u32
            })
            .collect();
        (
            Numeral {
                base: self.base,
                digits,
            },
            remainder as u64,
        )
    }

    /// Returns `None` when the product does not fit in the current width.
    pub fn checked_mul_small(&self, factor: u64) -> Option<Numeral> {
        let base = u128::from(self.base);
        let factor = u128::from(factor);
        let mut carry: u128 = 0;
        let mut digits = self.digits.clone();
        for digit in digits.iter_mut().rev() {
            let product = u128::from(*digit) * factor + carry;
            *digit = (product % base) as u32;
            carry = product / base;
        }
        (carry == 0).then_some(Numeral {
            base: self.base,
            digits,
        })
    }

    /// Returns `None` when the sum does not fit in the current width.
    pub fn checked_add(&self, other: &Numeral) -> Option<Numeral> {
        if self.base != other.base || self.width() != other.width() {
            return None;
        }
        let mut carry = 0u64;
        let mut digits = self.digits.clone();
        for (digit, &addend) in digits.iter_mut().rev().zip(other.digits.iter().rev()) {
            let sum = u64::from(*digit) + u64::from(addend) + carry;
            *digit = (sum % u64::from(self.base)) as u32;
            carry = sum / u64::from(self.base);
        }
        (carry == 0).then_some(Numeral {
            base: self.base,
            digits,
        })
    }

    pub fn to_u128(&self) -> Option<u128> {
        let base = u128::from(self.base);
        self.digits.iter().try_fold(0u128, |acc, &digit| {
            acc.checked_mul(base)?.checked_add(u128::from(digit))
        })
    }

    /// Renders the low `width` digits with `alphabet`, or `None` if any digit above
    /// them is non-zero.
    pub fn render(&self, alphabet: &Alphabet, width: usize) -> Option<String> {
        let skip = self.width().saturating_sub(width);
        if self.digits[..skip].iter().any(|&d| d != 0) {
            return None;
        }
        let padding = width.saturating_sub(self.width());
        let mut rendered = String::with_capacity(width);
        rendered.extend(std::iter::repeat(alphabet.zero()).take(padding));
        for &digit in &self.digits[skip..] {
            rendered.push(alphabet.symbol(digit)?);
        }
        Some(rendered)
    }
}

impl fmt::Display for Numeral {
    /// Decimal form, for logs and error messages.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(value) = self.to_u128() {
            return write!(f, "{}", value);
        }
        let mut decimal = Vec::new();
        let mut rest = self.clone();
        while !rest.is_zero() {
            let (quotient, remainder) = rest.div_small(10);
            decimal.push(char::from(b'0' + remainder as u8));
            rest = quotient;
        }
        decimal.iter().rev().try_for_each(|c| write!(f, "{}", c))
    }
}
