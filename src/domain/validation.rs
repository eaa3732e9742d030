//! CPF check-digit validation and password policy.
//!
//! Both checks are pure predicates over borrowed input: no allocation,
//! no I/O, no shared state. Malformed input is never an error, it is
//! simply `false`. Callers that need a user-facing reason use
//! [`check_password`] or wrap the result in their own error.

use std::fmt;

use crate::config::{CPF_LENGTH, MIN_PASSWORD_LENGTH};

/// Check whether `candidate` is a structurally valid CPF.
///
/// The input must be exactly eleven ASCII digits (no mask characters),
/// not all the same digit, and both trailing check digits must match
/// the weighted sums of the digits before them.
///
/// ```
/// use plantcare_api::domain::validation::is_valid_cpf;
///
/// assert!(is_valid_cpf("12345678909"));
/// assert!(!is_valid_cpf("12345678900"));
/// assert!(!is_valid_cpf("123.456.789-09"));
/// ```
pub fn is_valid_cpf(candidate: &str) -> bool {
    let Some(digits) = cpf_digits(candidate) else {
        return false;
    };

    // Repeated-digit sequences satisfy the checksum but are never issued.
    if digits.iter().all(|&d| d == digits[0]) {
        return false;
    }

    if check_digit(&digits[..9]) != digits[9] {
        return false;
    }

    check_digit(&digits[..10]) == digits[10]
}

/// Decode an eleven-digit ASCII string into digit values.
fn cpf_digits(candidate: &str) -> Option<[u32; CPF_LENGTH]> {
    let bytes = candidate.as_bytes();
    if bytes.len() != CPF_LENGTH {
        return None;
    }

    let mut digits = [0u32; CPF_LENGTH];
    for (slot, &b) in digits.iter_mut().zip(bytes) {
        if !b.is_ascii_digit() {
            return None;
        }
        *slot = u32::from(b - b'0');
    }
    Some(digits)
}

/// Compute the check digit that follows `prefix`.
///
/// Weights run from `prefix.len() + 1` down to 2; a remainder of 10 maps to 0.
fn check_digit(prefix: &[u32]) -> u32 {
    let top_weight = prefix.len() as u32 + 1;
    let sum: u32 = prefix
        .iter()
        .zip((2..=top_weight).rev())
        .map(|(digit, weight)| digit * weight)
        .sum();

    match (sum * 10) % 11 {
        10 => 0,
        remainder => remainder,
    }
}

/// A password policy rule, reported as the first one a candidate breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordRule {
    /// Fewer than [`MIN_PASSWORD_LENGTH`] characters
    TooShort,
    /// Contains a space, tab, newline or other whitespace
    ContainsWhitespace,
    /// No decimal digit
    MissingDigit,
    /// No uppercase letter
    MissingUppercase,
}

impl PasswordRule {
    /// User-facing description of the rule
    pub fn message(&self) -> String {
        match self {
            PasswordRule::TooShort => format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            ),
            PasswordRule::ContainsWhitespace => "Password must not contain spaces".to_string(),
            PasswordRule::MissingDigit => "Password must contain at least one digit".to_string(),
            PasswordRule::MissingUppercase => {
                "Password must contain at least one uppercase letter".to_string()
            }
        }
    }
}

impl fmt::Display for PasswordRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Evaluate `candidate` against the password policy.
///
/// Length is counted in characters, not bytes. Length and whitespace
/// failures are reported as soon as they are seen; the digit and
/// uppercase requirements are settled after a single scan.
pub fn check_password(candidate: &str) -> Result<(), PasswordRule> {
    if candidate.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(PasswordRule::TooShort);
    }

    let mut has_digit = false;
    let mut has_uppercase = false;

    for c in candidate.chars() {
        if c.is_whitespace() {
            return Err(PasswordRule::ContainsWhitespace);
        }
        if c.is_ascii_digit() {
            has_digit = true;
        }
        if c.is_uppercase() {
            has_uppercase = true;
        }
    }

    if !has_digit {
        return Err(PasswordRule::MissingDigit);
    }
    if !has_uppercase {
        return Err(PasswordRule::MissingUppercase);
    }
    Ok(())
}

/// Check whether `candidate` satisfies the password policy.
///
/// ```
/// use plantcare_api::domain::validation::is_valid_password;
///
/// assert!(is_valid_password("Abcdefg1"));
/// assert!(!is_valid_password("abcdefg1"));
/// ```
pub fn is_valid_password(candidate: &str) -> bool {
    check_password(candidate).is_ok()
}
