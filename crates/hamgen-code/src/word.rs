use std::fmt;

use hamgen_core::{ErrorInfo, HamgenError};
use num_bigint::BigUint;
use num_traits::{Num, Zero};
use serde::{Deserialize, Serialize};

/// Fixed-width binary codeword.
///
/// The value is an arbitrary-precision unsigned integer, so widths beyond a machine
/// word (128, 256, ...) are handled without truncation. The width is part of the
/// identity of the codeword: leading zero bits are significant when rendering.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCodeword", into = "RawCodeword")]
pub struct Codeword {
    width: u32,
    value: BigUint,
}

#[derive(Serialize, Deserialize)]
struct RawCodeword {
    width: u32,
    bits: String,
}

impl Codeword {
    /// Wraps `value` as a codeword of `width` bits.
    pub fn new(value: BigUint, width: u32) -> Result<Self, HamgenError> {
        if width == 0 {
            return Err(HamgenError::Codeword(ErrorInfo::new(
                "zero-width",
                "codeword width must be positive",
            )));
        }
        if value.bits() > u64::from(width) {
            let info = ErrorInfo::new("value-exceeds-width", "value does not fit in the codeword width")
                .with_context("width", width.to_string())
                .with_context("value_bits", value.bits().to_string());
            return Err(HamgenError::Codeword(info));
        }
        Ok(Self { width, value })
    }

    // `gen_biguint(width)` never yields more than `width` bits.
    pub(crate) fn from_sampled(value: BigUint, width: u32) -> Self {
        debug_assert!(value.bits() <= u64::from(width));
        Self { width, value }
    }

    /// The all-zero codeword of the given width.
    pub fn zero(width: u32) -> Result<Self, HamgenError> {
        Self::new(BigUint::zero(), width)
    }

    /// Parses a string of `0`/`1` characters; the width is the string length.
    pub fn from_bit_str(bits: &str) -> Result<Self, HamgenError> {
        if bits.is_empty() || !bits.bytes().all(|b| b == b'0' || b == b'1') {
            let info = ErrorInfo::new("invalid-bit-string", "expected a non-empty string of 0 and 1")
                .with_context("input", bits);
            return Err(HamgenError::Codeword(info));
        }
        let width = u32::try_from(bits.len()).map_err(|_| {
            HamgenError::Codeword(
                ErrorInfo::new("width-overflow", "bit string is too long")
                    .with_context("len", bits.len().to_string()),
            )
        })?;
        let value = BigUint::from_str_radix(bits, 2).map_err(|err| {
            HamgenError::Codeword(ErrorInfo::new("invalid-bit-string", err.to_string()))
        })?;
        Self::new(value, width)
    }

    /// Width in bits.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Underlying integer value.
    pub fn value(&self) -> &BigUint {
        &self.value
    }

    /// Number of one bits.
    pub fn weight(&self) -> u64 {
        self.value.count_ones()
    }

    /// Renders the codeword as exactly `width` binary digits.
    pub fn to_bit_string(&self) -> String {
        let digits = self.value.to_str_radix(2);
        format!("{digits:0>width$}", width = self.width as usize)
    }

    /// Hamming distance to another codeword of the same width.
    pub fn distance(&self, other: &Codeword) -> Result<u64, HamgenError> {
        if self.width != other.width {
            let info = ErrorInfo::new("width-mismatch", "codewords must share the same width")
                .with_context("left", self.width.to_string())
                .with_context("right", other.width.to_string());
            return Err(HamgenError::Codeword(info));
        }
        Ok(self.distance_unchecked(other))
    }

    // Callers guarantee equal widths.
    pub(crate) fn distance_unchecked(&self, other: &Codeword) -> u64 {
        (&self.value ^ &other.value).count_ones()
    }
}

/// Number of bit positions in which `a` and `b` differ.
///
/// Computed as the population count of `a XOR b`; both codewords must share a width.
pub fn hamming_distance(a: &Codeword, b: &Codeword) -> Result<u64, HamgenError> {
    a.distance(b)
}

impl fmt::Debug for Codeword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Codeword").field(&self.to_bit_string()).finish()
    }
}

impl fmt::Display for Codeword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_bit_string())
    }
}

impl From<Codeword> for RawCodeword {
    fn from(word: Codeword) -> Self {
        Self {
            bits: word.to_bit_string(),
            width: word.width,
        }
    }
}

impl TryFrom<RawCodeword> for Codeword {
    type Error = HamgenError;

    fn try_from(raw: RawCodeword) -> Result<Self, Self::Error> {
        let word = Codeword::from_bit_str(&raw.bits)?;
        if word.width != raw.width {
            let info = ErrorInfo::new("width-mismatch", "serialized width does not match bits")
                .with_context("width", raw.width.to_string())
                .with_context("bits_len", raw.bits.len().to_string());
            return Err(HamgenError::Codeword(info));
        }
        Ok(word)
    }
}
