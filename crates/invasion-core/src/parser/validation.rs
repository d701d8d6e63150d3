//! Lexical rules for names and the post-parse reference check.

use super::{ParseError, Parser};

/// City names are non-empty runs of ASCII letters, the digits 1-9, `-` and
/// `_`. The digit 0 is not allowed.
pub fn is_valid_city_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphabetic() || matches!(c, '1'..='9' | '-' | '_'))
}

impl<'src> Parser<'src> {
    /// Checks that every road points to a declared city.
    ///
    /// Cities are walked in declaration order and their roads in declaration
    /// order; the first dangling road is reported.
    pub fn check_direction_values(&self) -> Result<(), ParseError> {
        if !self.parsed {
            return Err(ParseError::ValidateBeforeParse);
        }
        for parsed in &self.cities {
            for direction in parsed.city.directions() {
                if !self.index.contains_key(&direction.target) {
                    return Err(ParseError::NonExistentCity {
                        city: parsed.city.name().to_string(),
                        line: parsed.line,
                        direction: direction.kind,
                        target: direction.target.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}
