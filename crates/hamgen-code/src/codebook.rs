use std::collections::HashSet;

use hamgen_core::{ErrorInfo, HamgenError};
use serde::{Deserialize, Serialize};

use crate::repr::Representation;
use crate::word::Codeword;

/// Ordered set of accepted codewords sharing one width.
///
/// Insertion order is acceptance order. Words only enter through the acceptance
/// test, which rejects exact duplicates as well as close neighbours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCodebook")]
pub struct Codebook {
    width: u32,
    words: Vec<Codeword>,
}

#[derive(Deserialize)]
struct RawCodebook {
    width: u32,
    words: Vec<Codeword>,
}

impl TryFrom<RawCodebook> for Codebook {
    type Error = HamgenError;

    fn try_from(raw: RawCodebook) -> Result<Self, Self::Error> {
        let mut seen = HashSet::with_capacity(raw.words.len());
        for (index, word) in raw.words.iter().enumerate() {
            if word.width() != raw.width {
                let info = ErrorInfo::new(
                    "width-mismatch",
                    "codeword width differs from codebook width",
                )
                    .with_context("width", raw.width.to_string())
                    .with_context("word_width", word.width().to_string())
                    .with_context("index", index.to_string());
                return Err(HamgenError::Codeword(info));
            }
            if !seen.insert(word) {
                let info = ErrorInfo::new("duplicate-codeword", "codeword appears more than once")
                    .with_context("bits", word.to_bit_string())
                    .with_context("index", index.to_string());
                return Err(HamgenError::Codeword(info));
            }
        }
        Ok(Self {
            width: raw.width,
            words: raw.words,
        })
    }
}

impl Codebook {
    /// Creates an empty codebook for `width`-bit words.
    pub fn new(width: u32) -> Self {
        Self {
            width,
            words: Vec::new(),
        }
    }

    /// Bit width shared by every codeword.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Accepted codewords in acceptance order.
    pub fn words(&self) -> &[Codeword] {
        &self.words
    }

    /// Number of accepted codewords.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true when nothing has been accepted.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Checks whether `candidate` may join the codebook at `threshold`.
    ///
    /// The first word is always admitted. Afterwards a candidate is rejected when it
    /// equals an accepted word or lies closer than `threshold` to any of them.
    pub fn admits(&self, candidate: &Codeword, threshold: u32) -> bool {
        debug_assert_eq!(candidate.width(), self.width);
        self.words.iter().all(|word| {
            word != candidate && word.distance_unchecked(candidate) >= u64::from(threshold)
        })
    }

    pub(crate) fn push(&mut self, word: Codeword) {
        self.words.push(word);
    }

    /// Smallest distance over all pairs, recomputed from scratch.
    ///
    /// `None` for codebooks with fewer than two words.
    pub fn min_pairwise_distance(&self) -> Option<u64> {
        let mut best: Option<u64> = None;
        for (idx, left) in self.words.iter().enumerate() {
            for right in &self.words[idx + 1..] {
                let distance = left.distance_unchecked(right);
                best = Some(best.map_or(distance, |current| current.min(distance)));
            }
        }
        best
    }

    /// Distances between each consecutive pair, in acceptance order.
    pub fn neighbour_distances(&self) -> Vec<u64> {
        self.words
            .windows(2)
            .map(|pair| pair[0].distance_unchecked(&pair[1]))
            .collect()
    }

    /// Returns true when every pair is at least `threshold` apart and no word repeats.
    pub fn verify(&self, threshold: u32) -> bool {
        match self.min_pairwise_distance() {
            Some(distance) => distance >= u64::from(threshold.max(1)),
            None => true,
        }
    }

    /// Renders every word in the requested representation.
    pub fn render(&self, representation: Representation) -> Vec<String> {
        self.words
            .iter()
            .map(|word| representation.render(word))
            .collect()
    }
}
