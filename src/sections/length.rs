//! Length section - minimum length gate and length bonus.

use super::SectionScore;

pub const MIN_LENGTH: usize = 8;
const LONG_LENGTH: usize = 12;

/// Length as reported by a browser text field (UTF-16 code units).
pub fn secret_len(password: &str) -> usize {
    password.encode_utf16().count()
}

/// Whether the password clears the minimum length gate.
pub fn meets_min_length(password: &str) -> bool {
    secret_len(password) >= MIN_LENGTH
}

/// Awards one point at the minimum length and one more for long passwords.
pub fn length_section(password: &str) -> SectionScore {
    let len = secret_len(password);
    let mut points = 0;
    if len >= MIN_LENGTH {
        points += 1;
    }
    if len >= LONG_LENGTH {
        points += 1;
    }
    points
}
