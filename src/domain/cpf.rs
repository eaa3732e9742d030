//! CPF value object.
//!
//! A `Cpf` can only be built from input that passes [`is_valid_cpf`],
//! so holding one is proof of a well-formed taxpayer number.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::validation::is_valid_cpf;
use crate::errors::{AppError, AppResult};

const MASKED_LENGTH: usize = 14;

/// Strip the `ddd.ddd.ddd-dd` mask; `None` when a separator is misplaced.
fn unmask(raw: &str) -> Option<String> {
    let bytes = raw.as_bytes();
    if bytes.len() != MASKED_LENGTH || bytes[3] != b'.' || bytes[7] != b'.' || bytes[11] != b'-' {
        return None;
    }
    Some([&raw[0..3], &raw[4..7], &raw[8..11], &raw[12..14]].concat())
}

/// Validated CPF, stored as its eleven bare digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cpf(String);

impl Cpf {
    /// Parse a CPF from user input.
    ///
    /// Accepts exactly two shapes: the bare form (`12345678909`) and the
    /// masked form (`123.456.789-09`). Whitespace and separators in any
    /// other position are rejected.
    pub fn parse(raw: &str) -> AppResult<Self> {
        let digits = if raw.len() == MASKED_LENGTH {
            unmask(raw)
        } else {
            Some(raw.to_string())
        };

        match digits {
            Some(digits) if is_valid_cpf(&digits) => Ok(Self(digits)),
            _ => Err(AppError::validation("Invalid CPF")),
        }
    }

    /// The eleven bare digits.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Display form, e.g. `123.456.789-09`.
    pub fn formatted(&self) -> String {
        let d = &self.0;
        format!("{}.{}.{}-{}", &d[0..3], &d[3..6], &d[6..9], &d[9..11])
    }

    /// Log-safe form with only the last four digits visible, e.g. `***.***.*89-09`.
    pub fn masked(&self) -> String {
        let d = &self.0;
        format!("***.***.*{}-{}", &d[7..9], &d[9..11])
    }
}

impl std::fmt::Display for Cpf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl Serialize for Cpf {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Cpf {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Cpf::parse(&raw).map_err(serde::de::Error::custom)
    }
}
