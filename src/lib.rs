//! Password strength meter library
//!
//! This library provides the real-time password strength classifier behind
//! a "new password" field, plus the client-side rules of the login,
//! registration and password recovery forms.
//!
//! # Features
//!
//! - `async` (default): Enables debounced evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_METER_DEBOUNCE_MS`: Debounce delay of the async meter
//!   (default: `300`)
//!
//! # Example
//!
//! ```rust
//! use pwd_meter::{classify, StrengthLabel};
//!
//! let assessment = classify("Abcdefghijkl1!");
//!
//! assert_eq!(assessment.label, StrengthLabel::Strong);
//! assert_eq!(assessment.progress, 100);
//! println!("{} ({})", assessment.label, assessment.color.bar);
//! ```

// Internal modules
mod assessment;
mod classifier;
mod config;
mod sections;
mod validation;

// Public API
pub use assessment::{StrengthAssessment, StrengthColor, StrengthLabel};
pub use classifier::{classify, classify_secret, composite_score};
pub use config::{ConfigError, MeterConfig};
pub use sections::{missing_classes, CharClass};
pub use validation::{
    validate_email, FieldError, FormResult, LoginForm, PasswordResetForm, RegistrationForm,
    ResetRequestForm, ValidationError, ValidationResult,
};

#[cfg(feature = "async")]
pub use classifier::classify_tx;
