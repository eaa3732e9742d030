//! Field validators for request DTOs.
//!
//! Adapters that let `#[validate(custom(...))]` attributes call the
//! domain validators and carry a readable message back to the client.

use std::borrow::Cow;

use validator::ValidationError;

use crate::domain::{check_password, Cpf};

/// Validate a CPF field (bare or masked form).
pub fn validate_cpf(value: &str) -> Result<(), ValidationError> {
    if Cpf::parse(value).is_ok() {
        return Ok(());
    }
    let mut err = ValidationError::new("cpf");
    err.message = Some(Cow::Borrowed("Invalid CPF"));
    Err(err)
}

/// Validate a new password against the password policy.
pub fn validate_password(value: &str) -> Result<(), ValidationError> {
    check_password(value).map_err(|rule| {
        let mut err = ValidationError::new("password_policy");
        err.message = Some(Cow::Owned(rule.message()));
        err
    })
}
