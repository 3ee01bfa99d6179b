//! Inclusive alphabet range scanned for every position

#![allow(dead_code)]

use std::ops::RangeInclusive;
use thiserror::Error;

/// Errors building a [`SearchBounds`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoundsError {
    #[error("alphabet bounds are inverted: min {min} is greater than max {max}")]
    Inverted { min: u32, max: u32 },
}

/// Inclusive range of symbol values considered during search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchBounds {
    min: u32,
    max: u32,
}

impl SearchBounds {
    /// ASCII `'0'`.
    pub const DIGIT_MIN: u32 = b'0' as u32;
    /// ASCII `'9'`.
    pub const DIGIT_MAX: u32 = b'9' as u32;

    pub fn new(min: u32, max: u32) -> Result<Self, BoundsError> {
        if min > max {
            return Err(BoundsError::Inverted { min, max });
        }
        Ok(Self { min, max })
    }

    /// The decimal digit range `'0'..='9'`.
    pub fn digits() -> Self {
        Self {
            min: Self::DIGIT_MIN,
            max: Self::DIGIT_MAX,
        }
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    /// Candidate values in scan order.
    pub fn candidates(&self) -> RangeInclusive<u32> {
        self.min..=self.max
    }

    /// Number of candidates per position.
    pub fn width(&self) -> u64 {
        u64::from(self.max - self.min) + 1
    }

    pub fn contains(&self, value: u32) -> bool {
        self.candidates().contains(&value)
    }

    /// Guesses the ascending per-position scan spends to reach `value`.
    pub fn guesses_to_reach(&self, value: u32) -> u64 {
        u64::from(value.saturating_sub(self.min)) + 1
    }
}

impl Default for SearchBounds {
    fn default() -> Self {
        Self::digits()
    }
}

impl std::fmt::Display for SearchBounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let printable = |v: u32| char::from_u32(v).filter(|c| c.is_ascii_graphic());
        match (printable(self.min), printable(self.max)) {
            (Some(lo), Some(hi)) => write!(f, "'{}'..='{}'", lo, hi),
            _ => write!(f, "{}..={}", self.min, self.max),
        }
    }
}
