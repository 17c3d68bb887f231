//! Strength assessment types returned by the classifier.

use std::fmt;

/// Discrete strength label shown next to the meter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrengthLabel {
    /// Nothing typed yet. Displayed as "Strength".
    Unscored,
    Weak,
    Medium,
    Strong,
}

impl StrengthLabel {
    /// Text rendered for this label.
    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthLabel::Unscored => "Strength",
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Medium => "Medium",
            StrengthLabel::Strong => "Strong",
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display color pair: progress bar fill and label text.
///
/// Values are utility class names understood by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StrengthColor {
    pub bar: &'static str,
    pub text: &'static str,
}

impl StrengthColor {
    pub const NEUTRAL: StrengthColor = StrengthColor {
        bar: "bg-gray-200",
        text: "text-gray-500",
    };
    pub const WARNING: StrengthColor = StrengthColor {
        bar: "bg-red-500",
        text: "text-red-600",
    };
    pub const CAUTION: StrengthColor = StrengthColor {
        bar: "bg-yellow-500",
        text: "text-yellow-600",
    };
    pub const SUCCESS: StrengthColor = StrengthColor {
        bar: "bg-green-500",
        text: "text-green-600",
    };
}

/// Result of classifying a candidate secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StrengthAssessment {
    pub label: StrengthLabel,
    /// Progress bar fill, 0..=100.
    pub progress: u8,
    pub color: StrengthColor,
}

impl StrengthAssessment {
    pub const UNSCORED: StrengthAssessment = StrengthAssessment {
        label: StrengthLabel::Unscored,
        progress: 0,
        color: StrengthColor::NEUTRAL,
    };

    /// Below the minimum length: weak regardless of character variety.
    pub const TOO_SHORT: StrengthAssessment = StrengthAssessment {
        label: StrengthLabel::Weak,
        progress: 25,
        color: StrengthColor::WARNING,
    };

    pub const WEAK: StrengthAssessment = StrengthAssessment {
        label: StrengthLabel::Weak,
        progress: 33,
        color: StrengthColor::WARNING,
    };

    pub const MEDIUM: StrengthAssessment = StrengthAssessment {
        label: StrengthLabel::Medium,
        progress: 66,
        color: StrengthColor::CAUTION,
    };

    pub const STRONG: StrengthAssessment = StrengthAssessment {
        label: StrengthLabel::Strong,
        progress: 100,
        color: StrengthColor::SUCCESS,
    };

    /// Accessible description, e.g. "Password strength: Medium".
    pub fn aria_label(&self) -> String {
        format!("Password strength: {}", self.label)
    }
}
