// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::str::FromStr;

/// An ISO 15924 script identifier, stored in canonical `Titlecase` form (e.g. `Latn`).
///
/// Font selection uses the script to prefer faces that cover the expected writing system, so a
/// paragraph tagged `ja` can pick a Japanese face for shared Han ideographs.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Script {
    raw: [u8; 4],
}

impl Script {
    /// The “common” script (`Zyyy`), used when nothing more specific is known.
    pub const COMMON: Self = Self::from_bytes(*b"Zyyy");

    /// Creates a `Script` from raw bytes that are already in canonical form.
    ///
    /// This does not validate; prefer [`Script::parse`] for untrusted input.
    #[must_use]
    pub const fn from_bytes(raw: [u8; 4]) -> Self {
        Self { raw }
    }

    /// Returns the canonical string form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        // Construction only admits ASCII letters, except through `from_bytes`.
        core::str::from_utf8(&self.raw).unwrap_or("Zzzz")
    }

    /// Parses a script code case-insensitively and normalizes it to `Titlecase`.
    pub fn parse(s: &str) -> Result<Self, ParseScriptError> {
        s.parse()
    }
}

impl Default for Script {
    fn default() -> Self {
        Self::COMMON
    }
}

impl fmt::Debug for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Script").field(&self.as_str()).finish()
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Script {
    type Err = ParseScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let &[a, b, c, d] = s.as_bytes() else {
            return Err(ParseScriptError::InvalidLength);
        };
        let raw = [a, b, c, d];
        if !raw.iter().all(u8::is_ascii_alphabetic) {
            return Err(ParseScriptError::InvalidBytes);
        }
        Ok(Self {
            raw: [
                a.to_ascii_uppercase(),
                b.to_ascii_lowercase(),
                c.to_ascii_lowercase(),
                d.to_ascii_lowercase(),
            ],
        })
    }
}

/// An error returned from parsing a [`Script`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseScriptError {
    /// The input was not exactly four bytes.
    InvalidLength,
    /// The input contained bytes that are not ASCII letters.
    InvalidBytes,
}

impl fmt::Display for ParseScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength => f.write_str("script code must be four letters"),
            Self::InvalidBytes => f.write_str("script code must be ASCII letters"),
        }
    }
}

impl core::error::Error for ParseScriptError {}

#[cfg(test)]
mod tests {
    use super::{ParseScriptError, Script};

    #[test]
    fn parse_normalizes_case() {
        assert_eq!(Script::parse("hANT").unwrap().as_str(), "Hant");
    }

    #[test]
    fn parse_rejects_malformed_codes() {
        assert_eq!(Script::parse("Lat"), Err(ParseScriptError::InvalidLength));
        assert_eq!(Script::parse("L4tn"), Err(ParseScriptError::InvalidBytes));
    }
}
