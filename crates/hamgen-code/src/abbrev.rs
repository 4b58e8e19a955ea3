use std::str::FromStr;

use hamgen_core::{ErrorInfo, HamgenError};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::GenerationParams;

const DEFAULT_COUNTS: std::ops::Range<usize> = 2..5;
const MIN_DISTANCE: u32 = 2;
const MAX_DISTANCE: u32 = 10;

/// Parameters packed as `e<width>[c<count>[h<distance>]]`, e.g. `e16c4h3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Abbreviation {
    /// Bit width.
    pub bit_width: u32,
    /// Member count, when given.
    pub member_count: Option<usize>,
    /// Minimum distance, when given.
    pub hamming_distance: Option<u32>,
}

/// One `(width, count, distance)` combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridEntry {
    /// Bit width.
    pub bit_width: u32,
    /// Codewords requested.
    pub size: usize,
    /// Requested minimum distance.
    pub hamming_distance: u32,
}

impl GridEntry {
    /// Copies `base` with this entry's primary parameters.
    pub fn apply_to(&self, base: &GenerationParams) -> GenerationParams {
        GenerationParams {
            bit_width: self.bit_width,
            size: self.size,
            hamming_distance: self.hamming_distance,
            ..base.clone()
        }
    }
}

impl Abbreviation {
    /// Parses an abbreviation token.
    pub fn parse(text: &str) -> Result<Self, HamgenError> {
        let pattern = Regex::new(r"^e(?P<width>\d+)(?:c(?P<count>\d+)?(?:h(?P<distance>\d+)?)?)?$")
            .map_err(|err| HamgenError::Params(ErrorInfo::new("abbreviation-regex", err.to_string())))?;
        let token = text.trim();
        let captures = pattern.captures(token).ok_or_else(|| {
            HamgenError::Params(
                ErrorInfo::new("invalid-abbreviation", "expected e<width>[c<count>[h<distance>]]")
                    .with_context("input", token)
                    .with_hint("for example e16c4h3"),
            )
        })?;
        let bit_width = number(token, "width", captures.name("width").map(|m| m.as_str()))?
            .ok_or_else(|| {
                HamgenError::Params(
                    ErrorInfo::new("invalid-abbreviation", "missing bit width")
                        .with_context("input", token),
                )
            })?;
        Ok(Self {
            bit_width,
            member_count: number(token, "count", captures.name("count").map(|m| m.as_str()))?,
            hamming_distance: number(token, "distance", captures.name("distance").map(|m| m.as_str()))?,
        })
    }

    /// Expands missing parts into the suggestion grid.
    ///
    /// A missing distance ranges over `2..limit` where `limit` is `width - 1` below
    /// ten bits and ten otherwise; a missing count ranges over `2..5`.
    pub fn expand(&self) -> Vec<GridEntry> {
        let limit = if self.bit_width < MAX_DISTANCE {
            self.bit_width.saturating_sub(1)
        } else {
            MAX_DISTANCE
        };
        let distances: Vec<u32> = match self.hamming_distance {
            Some(distance) => vec![distance],
            None => (MIN_DISTANCE..limit).collect(),
        };
        let counts: Vec<usize> = match self.member_count {
            Some(count) => vec![count],
            None => DEFAULT_COUNTS.collect(),
        };
        let mut grid = Vec::with_capacity(counts.len() * distances.len());
        for &size in &counts {
            for &hamming_distance in &distances {
                grid.push(GridEntry {
                    bit_width: self.bit_width,
                    size,
                    hamming_distance,
                });
            }
        }
        grid
    }
}

fn number<T: FromStr>(token: &str, field: &str, digits: Option<&str>) -> Result<Option<T>, HamgenError> {
    digits
        .map(|digits| {
            digits.parse::<T>().map_err(|_| {
                HamgenError::Params(
                    ErrorInfo::new("abbreviation-overflow", "number does not fit")
                        .with_context("input", token)
                        .with_context("field", field),
                )
            })
        })
        .transpose()
}

impl FromStr for Abbreviation {
    type Err = HamgenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
