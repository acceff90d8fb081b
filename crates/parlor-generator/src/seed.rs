//! Reproducible generation seeds.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use derive_more::{Display, Error};
use rand::{RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// A 32-byte seed that fully determines a generated puzzle.
///
/// Seeds print and parse as 64-character lowercase hex strings, so a puzzle
/// can be reproduced from a log line or a bug report. A seed can also be
/// derived from an arbitrary phrase, which hashes the phrase with SHA-256.
///
/// # Examples
///
/// ```
/// use parlor_generator::PuzzleSeed;
///
/// let seed = PuzzleSeed::from_phrase("rainy tuesday");
/// let hex = seed.to_string();
/// assert_eq!(hex.len(), 64);
/// assert_eq!(hex.parse::<PuzzleSeed>().unwrap(), seed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed {
    bytes: [u8; 32],
}

impl PuzzleSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self { bytes }
    }

    /// Draws a fresh seed from the thread-local RNG.
    #[must_use]
    pub fn random() -> Self {
        Self::from_bytes(rand::rng().random())
    }

    /// Derives a seed from a phrase by hashing it with SHA-256.
    ///
    /// The same phrase always yields the same seed.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        Self::from_bytes(Sha256::digest(phrase.as_bytes()).into())
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn into_bytes(self) -> [u8; 32] {
        self.bytes
    }

    /// Builds the generation RNG for this seed.
    pub(crate) fn rng(self) -> Pcg64 {
        Pcg64::from_seed(self.bytes)
    }
}

impl Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.bytes {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Error parsing a [`PuzzleSeed`] from hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ParseSeedError {
    /// The string was not exactly 64 characters long.
    #[display("expected 64 hex characters, found {found}")]
    InvalidLength {
        /// The number of characters found.
        found: usize,
    },
    /// A character was not a hex digit.
    #[display("invalid hex character: {found:?}")]
    InvalidHexDigit {
        /// The offending character.
        found: char,
    },
}

impl FromStr for PuzzleSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, ParseSeedError> {
        let len = s.chars().count();
        if len != 64 {
            return Err(ParseSeedError::InvalidLength { found: len });
        }
        let mut bytes = [0; 32];
        for (i, c) in s.chars().enumerate() {
            let Some(value) = c.to_digit(16) else {
                return Err(ParseSeedError::InvalidHexDigit { found: c });
            };
            #[expect(clippy::cast_possible_truncation)]
            let value = value as u8;
            bytes[i / 2] = (bytes[i / 2] << 4) | value;
        }
        Ok(Self::from_bytes(bytes))
    }
}
