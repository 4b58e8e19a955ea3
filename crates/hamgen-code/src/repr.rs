use std::fmt;
use std::str::FromStr;

use hamgen_core::{ErrorInfo, HamgenError};
use num_bigint::BigUint;
use num_traits::Num;
use serde::{Deserialize, Serialize};

use crate::word::Codeword;

/// Numeric base used when rendering codewords as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Representation {
    /// Bare binary digits padded to the bit width.
    Binary,
    /// Decimal value without padding.
    Decimal,
    /// `0x`-prefixed hexadecimal padded to one digit per four bits.
    #[default]
    Hexadecimal,
}

impl Representation {
    /// Radix of the representation.
    pub fn radix(self) -> u32 {
        match self {
            Representation::Binary => 2,
            Representation::Decimal => 10,
            Representation::Hexadecimal => 16,
        }
    }

    /// Number of digits a codeword of `width` bits renders to, when padded.
    pub fn padded_digits(self, width: u32) -> Option<usize> {
        match self {
            Representation::Binary => Some(width as usize),
            Representation::Decimal => None,
            Representation::Hexadecimal => Some(width.div_ceil(4) as usize),
        }
    }

    /// Renders a codeword in this representation.
    pub fn render(self, word: &Codeword) -> String {
        match self {
            Representation::Binary => word.to_bit_string(),
            Representation::Decimal => word.value().to_str_radix(10),
            Representation::Hexadecimal => {
                let digits = word.value().to_str_radix(16);
                let pad = self.padded_digits(word.width()).unwrap_or(0);
                format!("0x{digits:0>pad$}")
            }
        }
    }

    /// Parses text rendered in this representation back into a codeword of `width` bits.
    ///
    /// An optional `0b`/`0x` prefix is accepted for binary and hexadecimal input.
    pub fn parse_value(self, text: &str, width: u32) -> Result<Codeword, HamgenError> {
        let trimmed = text.trim();
        let digits = match self {
            Representation::Binary => strip_prefix(trimmed, "0b"),
            Representation::Decimal => trimmed,
            Representation::Hexadecimal => strip_prefix(trimmed, "0x"),
        };
        if digits.is_empty() {
            let info = ErrorInfo::new("empty-value", "no digits to parse")
                .with_context("input", text)
                .with_context("representation", self.to_string());
            return Err(HamgenError::Render(info));
        }
        let value = BigUint::from_str_radix(digits, self.radix()).map_err(|err| {
            HamgenError::Render(
                ErrorInfo::new("invalid-digits", err.to_string())
                    .with_context("input", text)
                    .with_context("representation", self.to_string()),
            )
        })?;
        Codeword::new(value, width).map_err(|err| {
            HamgenError::Render(
                ErrorInfo::new("value-out-of-range", err.info().message.clone())
                    .with_context("input", text)
                    .with_context("width", width.to_string()),
            )
        })
    }
}

fn strip_prefix<'a>(text: &'a str, prefix: &str) -> &'a str {
    match text.get(..prefix.len()) {
        Some(head) if head.eq_ignore_ascii_case(prefix) => &text[prefix.len()..],
        _ => text,
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Representation::Binary => "binary",
            Representation::Decimal => "decimal",
            Representation::Hexadecimal => "hexadecimal",
        };
        f.write_str(label)
    }
}

impl FromStr for Representation {
    type Err = HamgenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "binary" | "bin" | "2" => Ok(Representation::Binary),
            "decimal" | "dec" | "10" => Ok(Representation::Decimal),
            "hexadecimal" | "hex" | "16" => Ok(Representation::Hexadecimal),
            other => Err(HamgenError::Params(
                ErrorInfo::new("unknown-representation", "unsupported representation")
                    .with_context("input", other)
                    .with_hint("use binary, decimal or hexadecimal"),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_pads_to_nibble_count() {
        let word = Codeword::new(BigUint::from(5u32), 16).unwrap();
        assert_eq!(Representation::Hexadecimal.render(&word), "0x0005");
    }

    #[test]
    fn hex_rounds_partial_nibbles_up() {
        let word = Codeword::new(BigUint::from(1u32), 10).unwrap();
        assert_eq!(Representation::Hexadecimal.render(&word), "0x001");
    }

    #[test]
    fn decimal_is_unpadded() {
        let word = Codeword::new(BigUint::from(42u32), 16).unwrap();
        assert_eq!(Representation::Decimal.render(&word), "42");
    }

    #[test]
    fn parse_accepts_prefixes() {
        let word = Representation::Hexadecimal.parse_value("0X00fF", 16).unwrap();
        assert_eq!(word.value(), &BigUint::from(255u32));
        let word = Representation::Binary.parse_value("0b101", 4).unwrap();
        assert_eq!(word.to_bit_string(), "0101");
    }

    #[test]
    fn parse_rejects_out_of_range_values() {
        let err = Representation::Decimal.parse_value("256", 8).unwrap_err();
        assert_eq!(err.info().code, "value-out-of-range");
    }

    #[test]
    fn representation_names_parse() {
        assert_eq!("hex".parse::<Representation>().unwrap(), Representation::Hexadecimal);
        assert_eq!("Binary".parse::<Representation>().unwrap(), Representation::Binary);
        assert!("octal".parse::<Representation>().is_err());
    }
}
