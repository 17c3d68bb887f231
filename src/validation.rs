//! Auth form validation module.
//!
//! Client-side rules applied by the login, registration and password
//! recovery forms before anything is submitted to the auth backend.

use std::sync::LazyLock;

use regex::Regex;
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use crate::sections::{secret_len, MIN_LENGTH};

// Same shape as the form schema's email rule. The leading-dot and
// double-dot restrictions are checked separately in `validate_email`.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[A-Z0-9_'+\-.]*[A-Z0-9_+-]@([A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$").unwrap()
});

/// Possible validation errors. Messages are shown to the user as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0}")]
    InvalidEmail(String),

    #[error("{0}")]
    InvalidPassword(String),

    #[error("Passwords do not match.")]
    PasswordMismatch,

    #[error("You must accept the terms and conditions.")]
    TermsNotAccepted,
}

/// Result type for single-field validation
pub type ValidationResult<T> = Result<T, ValidationError>;

/// A failed rule, attributed to the form field that shows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub error: ValidationError,
}

impl FieldError {
    fn new(field: &'static str, error: ValidationError) -> Self {
        Self { field, error }
    }
}

/// Result type for whole-form validation
pub type FormResult = Result<(), Vec<FieldError>>;

/// Validate an email address
pub fn validate_email(email: &str) -> ValidationResult<&str> {
    if email.is_empty() {
        return Err(ValidationError::InvalidEmail(
            "Email address cannot be empty".to_string(),
        ));
    }

    if email.starts_with('.') || email.contains("..") {
        return Err(ValidationError::InvalidEmail(
            "Email address cannot start with a dot or contain consecutive dots".to_string(),
        ));
    }

    if !EMAIL_REGEX.is_match(email) {
        return Err(ValidationError::InvalidEmail(
            "Invalid email address format".to_string(),
        ));
    }

    Ok(email)
}

/// Email check with the message a particular form displays.
fn check_email(email: &str, message: &str) -> ValidationResult<()> {
    validate_email(email)
        .map(|_| ())
        .map_err(|_| ValidationError::InvalidEmail(message.to_string()))
}

fn check_min_length(password: &SecretString, message: &str) -> ValidationResult<()> {
    if secret_len(password.expose_secret()) < MIN_LENGTH {
        return Err(ValidationError::InvalidPassword(message.to_string()));
    }
    Ok(())
}

fn secrets_match(a: &SecretString, b: &SecretString) -> bool {
    a.expose_secret() == b.expose_secret()
}

/// Runs field rules in order, then the cross-field rule only if every
/// field passed.
fn collect(
    checks: Vec<(&'static str, ValidationResult<()>)>,
    refine: impl FnOnce() -> Option<FieldError>,
) -> FormResult {
    let errors: Vec<FieldError> = checks
        .into_iter()
        .filter_map(|(field, result)| result.err().map(|e| FieldError::new(field, e)))
        .collect();

    if !errors.is_empty() {
        return Err(errors);
    }

    match refine() {
        Some(error) => Err(vec![error]),
        None => Ok(()),
    }
}

/// Sign-in form.
#[derive(Debug)]
pub struct LoginForm {
    pub email: String,
    pub password: SecretString,
}

impl LoginForm {
    pub fn validate(&self) -> FormResult {
        let password_check = if self.password.expose_secret().is_empty() {
            Err(ValidationError::InvalidPassword(
                "Password is required.".to_string(),
            ))
        } else {
            Ok(())
        };

        collect(
            vec![
                ("email", check_email(&self.email, "Please enter a valid email address.")),
                ("password", password_check),
            ],
            || None,
        )
    }
}

/// Account creation form.
#[derive(Debug)]
pub struct RegistrationForm {
    pub email: String,
    pub password: SecretString,
    pub confirm_password: SecretString,
    pub terms_accepted: bool,
}

impl RegistrationForm {
    pub fn validate(&self) -> FormResult {
        let terms_check = if self.terms_accepted {
            Ok(())
        } else {
            Err(ValidationError::TermsNotAccepted)
        };

        collect(
            vec![
                ("email", check_email(&self.email, "Please enter a valid email address.")),
                (
                    "password",
                    check_min_length(
                        &self.password,
                        "Password must be at least 8 characters long.",
                    ),
                ),
                ("terms_accepted", terms_check),
            ],
            || {
                (!secrets_match(&self.password, &self.confirm_password))
                    .then(|| FieldError::new("confirm_password", ValidationError::PasswordMismatch))
            },
        )
    }
}

/// First recovery step: where to send the reset instructions.
#[derive(Debug, Clone)]
pub struct ResetRequestForm {
    pub email: String,
}

impl ResetRequestForm {
    pub fn validate(&self) -> FormResult {
        collect(
            vec![("email", check_email(&self.email, "Invalid email address."))],
            || None,
        )
    }
}

/// Second recovery step: choosing the new password.
#[derive(Debug)]
pub struct PasswordResetForm {
    pub new_password: SecretString,
    pub confirm_password: SecretString,
}

impl PasswordResetForm {
    pub fn validate(&self) -> FormResult {
        const TOO_SHORT: &str = "Password must be at least 8 characters.";

        collect(
            vec![
                ("new_password", check_min_length(&self.new_password, TOO_SHORT)),
                ("confirm_password", check_min_length(&self.confirm_password, TOO_SHORT)),
            ],
            || {
                (!secrets_match(&self.new_password, &self.confirm_password))
                    .then(|| FieldError::new("confirm_password", ValidationError::PasswordMismatch))
            },
        )
    }
}
