//! Secret numbers and guesses: ordered triples of distinct decimal digits.

use std::fmt;
use std::str::FromStr;

use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::domain::rules::{DIGITS, SECRET_LEN};
use crate::errors::domain::{DomainError, ValidationKind};

/// An ordered triple of distinct decimal digits.
///
/// Both a player's hidden number and a guess against it are this type and
/// are validated identically. The distinctness invariant is enforced at
/// every construction site, including the CHANGE/SHUFFLE replacement paths.
///
/// The wire form is a 3-character digit string ("084"), so serde goes
/// through the string representation.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SecretNumber([u8; SECRET_LEN]);

/// A guess has the same shape and validation rules as a secret.
pub type Guess = SecretNumber;

impl SecretNumber {
    /// Build from raw digits, re-checking the distinctness invariant.
    pub fn new(digits: [u8; SECRET_LEN]) -> Result<Self, DomainError> {
        if digits.iter().any(|&d| d >= DIGITS) {
            return Err(DomainError::validation(
                ValidationKind::InvalidLength,
                "digits must be in 0-9",
            ));
        }
        if digits[0] == digits[1] || digits[0] == digits[2] || digits[1] == digits[2] {
            return Err(DomainError::validation(
                ValidationKind::DuplicateDigit,
                "digits must be pairwise distinct",
            ));
        }
        Ok(Self(digits))
    }

    /// Parse a 3-character decimal digit string.
    ///
    /// Length and character-class problems report `InvalidLength`; repeated
    /// digits report `DuplicateDigit`. Leading zeros are allowed here:
    /// player-chosen numbers only have to be distinct.
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let raw: Vec<u8> = input
            .chars()
            .map(|c| {
                c.to_digit(10)
                    .map(|d| d as u8)
                    .ok_or_else(|| {
                        DomainError::validation(
                            ValidationKind::InvalidLength,
                            format!("expected 3 decimal digits, got {input:?}"),
                        )
                    })
            })
            .collect::<Result<_, _>>()?;
        let digits: [u8; SECRET_LEN] = raw.try_into().map_err(|_| {
            DomainError::validation(
                ValidationKind::InvalidLength,
                format!("expected 3 decimal digits, got {input:?}"),
            )
        })?;
        Self::new(digits)
    }

    /// Machine-generated secret: shuffle the ten digits, then if a zero
    /// landed in front swap the first non-zero digit into its place, and
    /// take the first three.
    ///
    /// The swap skews the distribution over leading-nonzero triples
    /// slightly; that is an accepted simplification, not a uniformity or
    /// security guarantee.
    pub fn random(rng: &mut impl Rng) -> Self {
        let mut digits: [u8; 10] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
        digits.shuffle(rng);
        if digits[0] == 0 {
            if let Some(i) = (1..digits.len()).find(|&i| digits[i] != 0) {
                digits.swap(0, i);
            }
        }
        Self([digits[0], digits[1], digits[2]])
    }

    /// Random permutation of this number's own digits (SHUFFLE). May be the
    /// identity permutation.
    pub fn shuffled(&self, rng: &mut impl Rng) -> Self {
        let mut digits = self.0;
        digits.shuffle(rng);
        Self(digits)
    }

    /// Replace one position with a new digit, re-validating distinctness.
    pub fn with_digit_replaced(
        &self,
        position: usize,
        new_digit: u8,
    ) -> Result<Self, DomainError> {
        let mut digits = self.0;
        digits[position] = new_digit;
        Self::new(digits)
    }

    pub fn digits(&self) -> [u8; SECRET_LEN] {
        self.0
    }

    pub fn digit(&self, position: usize) -> u8 {
        self.0[position]
    }

    pub fn contains(&self, digit: u8) -> bool {
        self.0.contains(&digit)
    }

    /// Position of `digit` in this number, if present.
    pub fn position_of(&self, digit: u8) -> Option<usize> {
        self.0.iter().position(|&d| d == digit)
    }
}

impl fmt::Display for SecretNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.0[0], self.0[1], self.0[2])
    }
}

impl FromStr for SecretNumber {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for SecretNumber {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<SecretNumber> for String {
    fn from(value: SecretNumber) -> Self {
        value.to_string()
    }
}
