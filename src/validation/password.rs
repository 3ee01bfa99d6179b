//! Password rules enforced before a run is requested.

#![allow(dead_code)]

use crate::search::SearchBounds;
use thiserror::Error;

/// Input that ends the session instead of starting a run.
pub const QUIT_CODE: &str = "Q";

/// Why an input line was not accepted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Bye!")]
    Quit,

    #[error("Password cannot be empty.")]
    Empty,

    #[error("Password digits cannot be less than {min} or larger than {max}.")]
    Length { len: usize, min: usize, max: usize },

    #[error("Password should be made up of the symbols {bounds} only.")]
    Format { bounds: SearchBounds },
}

/// Length and alphabet constraints on an accepted password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordRules {
    pub min_length: usize,
    pub max_length: usize,
    pub bounds: SearchBounds,
}

impl Default for PasswordRules {
    fn default() -> Self {
        Self {
            min_length: 6,
            max_length: 18,
            bounds: SearchBounds::digits(),
        }
    }
}

impl PasswordRules {
    pub fn with_bounds(mut self, bounds: SearchBounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Check one line of input. Surrounding whitespace is ignored.
    pub fn validate<'a>(&self, input: &'a str) -> Result<&'a str, InputError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(InputError::Empty);
        }
        if input.eq_ignore_ascii_case(QUIT_CODE) {
            return Err(InputError::Quit);
        }

        let len = input.chars().count();
        if len < self.min_length || len > self.max_length {
            return Err(InputError::Length {
                len,
                min: self.min_length,
                max: self.max_length,
            });
        }
        if !input.chars().all(|c| self.bounds.contains(u32::from(c))) {
            return Err(InputError::Format {
                bounds: self.bounds,
            });
        }
        Ok(input)
    }

    /// Requirement lines shown above the prompt.
    pub fn describe(&self) -> Vec<String> {
        vec![
            format!(" - made up of the symbols {} only", self.bounds),
            format!(
                " - between {} and {} symbols in length",
                self.min_length, self.max_length
            ),
        ]
    }
}
