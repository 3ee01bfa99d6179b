//! The password being recovered

#![allow(dead_code)]

/// Ordered sequence of symbols to reconstruct.
///
/// Symbols are stored as their code point values so they compare directly
/// against the candidates produced by [`SearchBounds`](super::SearchBounds).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    symbols: Vec<u32>,
}

impl Target {
    pub fn new(password: &str) -> Self {
        Self {
            symbols: password.chars().map(u32::from).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbol value at `position`.
    pub fn symbol(&self, position: usize) -> u32 {
        self.symbols[position]
    }

    pub fn symbols(&self) -> &[u32] {
        &self.symbols
    }

    /// Interpret the whole target as a non-negative integer literal.
    ///
    /// Returns `None` unless every symbol is an ASCII digit and the value
    /// fits in a `u64`. Signs are not part of a literal.
    pub fn as_integer(&self) -> Option<u64> {
        let all_digits = !self.is_empty()
            && self
                .symbols
                .iter()
                .all(|&s| char::from_u32(s).is_some_and(|c| c.is_ascii_digit()));
        if !all_digits {
            return None;
        }
        self.to_string().parse().ok()
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for &value in &self.symbols {
            write!(f, "{}", char::from_u32(value).unwrap_or(char::REPLACEMENT_CHARACTER))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_are_code_points() {
        let target = Target::new("048");
        assert_eq!(target.len(), 3);
        assert_eq!(target.symbols(), &[48, 52, 56]);
        assert_eq!(target.symbol(1), u32::from(b'4'));
    }

    #[test]
    fn test_display_round_trips_text() {
        assert_eq!(Target::new("123456").to_string(), "123456");
    }

    #[test]
    fn test_as_integer() {
        assert_eq!(Target::new("000123").as_integer(), Some(123));
        assert_eq!(Target::new("12a456").as_integer(), None);
        // Wider than u64
        assert_eq!(Target::new("99999999999999999999").as_integer(), None);
        // Sign characters are accepted by str::parse but are not digits
        assert_eq!(Target::new("+12345").as_integer(), None);
        assert_eq!(Target::new("").as_integer(), None);
    }
}
