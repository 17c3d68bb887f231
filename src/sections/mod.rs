//! Password scoring sections
//!
//! Each section awards points for a specific aspect of the password.

mod length;
mod variety;

pub use length::{length_section, meets_min_length, secret_len, MIN_LENGTH};
pub use variety::{character_variety_section, missing_classes, CharClass};

/// Points a section contributes to the composite score.
pub type SectionScore = u8;
