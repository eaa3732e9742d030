//! Check command - Runs a validator on one value from the command line.

use crate::cli::args::{CheckArgs, CheckTarget};
use crate::domain::{check_password, is_valid_cpf};

/// Outcome of a check, printed to stdout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub valid: bool,
    pub detail: Option<String>,
}

impl std::fmt::Display for CheckReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let verdict = if self.valid { "valid" } else { "invalid" };
        match &self.detail {
            Some(detail) => write!(f, "{}: {}", verdict, detail),
            None => write!(f, "{}", verdict),
        }
    }
}

/// Evaluate the requested check
pub fn evaluate(target: &CheckTarget) -> CheckReport {
    match target {
        CheckTarget::Cpf { value } => CheckReport {
            valid: is_valid_cpf(value),
            detail: None,
        },
        CheckTarget::Password { value } => match check_password(value) {
            Ok(()) => CheckReport {
                valid: true,
                detail: None,
            },
            Err(rule) => CheckReport {
                valid: false,
                detail: Some(rule.message()),
            },
        },
    }
}

/// Execute the check command; returns whether the value was valid
pub fn execute(args: CheckArgs) -> bool {
    let report = evaluate(&args.target);
    tracing::debug!(valid = report.valid, "Check finished");
    println!("{}", report);
    report.valid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_cpf() {
        let valid = evaluate(&CheckTarget::Cpf {
            value: "12345678909".to_string(),
        });
        assert!(valid.valid);
        assert_eq!(valid.to_string(), "valid");

        let invalid = evaluate(&CheckTarget::Cpf {
            value: "12345678900".to_string(),
        });
        assert_eq!(invalid.to_string(), "invalid");
    }

    #[test]
    fn test_evaluate_password_reports_rule() {
        let report = evaluate(&CheckTarget::Password {
            value: "abcdefg1".to_string(),
        });
        assert!(!report.valid);
        assert_eq!(
            report.to_string(),
            "invalid: Password must contain at least one uppercase letter"
        );
    }
}
