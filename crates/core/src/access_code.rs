//! Customer access codes.
//!
//! An access code is a 6-digit shared secret that doubles as the only
//! credential a customer presents. [`AccessCode`] can only be built from a
//! well-formed string and deliberately implements neither `Serialize` nor a
//! revealing `Debug`, so it cannot end up in a response body or a log line.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

/// Number of digits in every access code.
pub const ACCESS_CODE_LENGTH: usize = 6;

static ACCESS_CODE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^[0-9]{{{ACCESS_CODE_LENGTH}}}$")).expect("valid regex")
});

/// A validated 6-digit access code.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessCode(String);

impl AccessCode {
    /// Parse a raw code, failing with [`CoreError::InvalidAccessCode`] unless
    /// it is exactly six ASCII digits.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        if ACCESS_CODE_RE.is_match(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(CoreError::InvalidAccessCode)
        }
    }

    /// Like [`AccessCode::parse`], but a missing code is also invalid.
    pub fn parse_required(raw: Option<&str>) -> Result<Self, CoreError> {
        raw.ok_or(CoreError::InvalidAccessCode).and_then(Self::parse)
    }

    /// Compare a presented code against this one.
    ///
    /// Runs over every byte regardless of where the first mismatch is.
    pub fn verify(&self, presented: &str) -> bool {
        let expected = self.0.as_bytes();
        let presented = presented.as_bytes();
        if expected.len() != presented.len() {
            return false;
        }
        expected
            .iter()
            .zip(presented)
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
    }

    /// Raw digits, for store adapters only.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessCode(******)")
    }
}
