//! Field validation for [`UserRequest`].
//!
//! Every rule runs; violations accumulate in field declaration order
//! (`name`, `email`, `password`) and, within a field, in rule order.

use axum_helpers::{FieldError, FieldValidate};
use strum::{AsRefStr, Display};
use validator::ValidateEmail;

use crate::models::UserRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum Rule {
    /// Value has leading or trailing whitespace
    BlankBoundary,
    /// Value is not a `local@domain` email address
    InvalidFormat,
}

impl Rule {
    pub const fn message(&self) -> &'static str {
        match self {
            Rule::BlankBoundary => "field cannot have blank space at the beginning or at end",
            Rule::InvalidFormat => "invalid email",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Violation {
    pub field_name: &'static str,
    pub rule: Rule,
}

impl From<Violation> for FieldError {
    fn from(violation: Violation) -> Self {
        FieldError::new(violation.field_name, violation.rule.message())
    }
}

fn check_blank_boundary(field_name: &'static str, value: &str, violations: &mut Vec<Violation>) {
    if value.trim() != value {
        violations.push(Violation {
            field_name,
            rule: Rule::BlankBoundary,
        });
    }
}

/// Validate all fields of `request`. An empty result means the request is valid.
pub fn validate_user_request(request: &UserRequest) -> Vec<Violation> {
    let mut violations = Vec::new();

    check_blank_boundary("name", &request.name, &mut violations);

    check_blank_boundary("email", &request.email, &mut violations);
    if !request.email.validate_email() {
        violations.push(Violation {
            field_name: "email",
            rule: Rule::InvalidFormat,
        });
    }

    check_blank_boundary("password", &request.password, &mut violations);

    violations
}

impl FieldValidate for UserRequest {
    fn field_errors(&self) -> Vec<FieldError> {
        validate_user_request(self)
            .into_iter()
            .map(FieldError::from)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn violation(field_name: &'static str, rule: Rule) -> Violation {
        Violation { field_name, rule }
    }

    #[test]
    fn test_clean_request_has_no_violations() {
        let requests = [
            UserRequest::new("Rafael", "rafael@mail.com", "123"),
            UserRequest::new("Ana Maria", "ana.maria@mail.example.org", "s3cr3t pass"),
            UserRequest::new("x", "x@y.z", "p"),
        ];

        for request in requests {
            assert!(validate_user_request(&request).is_empty(), "{request:?}");
        }
    }

    #[test]
    fn test_padded_name_reports_single_blank_boundary() {
        for name in [" Rafael", "Rafael ", "\tRafael\n"] {
            let request = UserRequest::new(name, "rafael@mail.com", "123");
            assert_eq!(
                validate_user_request(&request),
                vec![violation("name", Rule::BlankBoundary)]
            );
        }
    }

    #[test]
    fn test_padded_password_reports_blank_boundary() {
        let request = UserRequest::new("Rafael", "rafael@mail.com", " 123");
        assert_eq!(
            validate_user_request(&request),
            vec![violation("password", Rule::BlankBoundary)]
        );
    }

    #[test]
    fn test_email_without_at_sign_is_invalid_format() {
        let request = UserRequest::new("Rafael", "rafaelemail.com", "123");
        assert_eq!(
            validate_user_request(&request),
            vec![violation("email", Rule::InvalidFormat)]
        );
    }

    #[test]
    fn test_email_with_empty_local_part_is_invalid_format() {
        let request = UserRequest::new("Rafael", "@mail.com", "123");
        assert_eq!(
            validate_user_request(&request),
            vec![violation("email", Rule::InvalidFormat)]
        );
    }

    #[test]
    fn test_violations_accumulate_in_field_order() {
        let request = UserRequest::new(" Rafael", " rafael@mail.com", "123 ");

        assert_eq!(
            validate_user_request(&request),
            vec![
                violation("name", Rule::BlankBoundary),
                violation("email", Rule::BlankBoundary),
                violation("email", Rule::InvalidFormat),
                violation("password", Rule::BlankBoundary),
            ]
        );
    }

    #[test]
    fn test_padded_email_reports_blank_boundary_before_invalid_format() {
        let request = UserRequest::new("Rafael", "rafael@mail.com ", "123");
        assert_eq!(
            validate_user_request(&request),
            vec![
                violation("email", Rule::BlankBoundary),
                violation("email", Rule::InvalidFormat),
            ]
        );
    }

    #[test]
    fn test_rule_names_and_messages() {
        assert_eq!(Rule::BlankBoundary.to_string(), "blank-boundary");
        assert_eq!(Rule::InvalidFormat.as_ref(), "invalid-format");
        assert_eq!(Rule::InvalidFormat.message(), "invalid email");
    }

    #[test]
    fn test_field_errors_use_original_messages() {
        let request = UserRequest::new("Rafael", "rafaelemail.com", "123");
        assert_eq!(
            request.field_errors(),
            vec![FieldError::new("email", "invalid email")]
        );
    }
}
