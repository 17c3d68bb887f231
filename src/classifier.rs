//! Password strength classifier - maps a candidate secret to an assessment.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

#[cfg(feature = "async")]
use crate::config::MeterConfig;

use crate::assessment::StrengthAssessment;
use crate::sections::{character_variety_section, length_section, meets_min_length, SectionScore};

const STRONG_SCORE: SectionScore = 5;
const MEDIUM_SCORE: SectionScore = 3;

/// Computes the composite score (1..=6) of a password that clears the
/// minimum length gate.
///
/// Returns `None` for empty or too-short input, which is never scored.
pub fn composite_score(password: &str) -> Option<SectionScore> {
    if !meets_min_length(password) {
        return None;
    }

    // Orchestrator: sum the sections in sequence
    let sections: [fn(&str) -> SectionScore; 2] = [length_section, character_variety_section];

    let score = sections.iter().map(|section_fn| section_fn(password)).sum();
    Some(score)
}

/// Classifies the strength of a candidate secret.
///
/// Total over all inputs: the empty string is `Unscored`, anything shorter
/// than the minimum length is `Weak`, the rest is graded by composite score.
pub fn classify(password: &str) -> StrengthAssessment {
    if password.is_empty() {
        return StrengthAssessment::UNSCORED;
    }

    let Some(score) = composite_score(password) else {
        return StrengthAssessment::TOO_SHORT;
    };

    if score >= STRONG_SCORE {
        StrengthAssessment::STRONG
    } else if score >= MEDIUM_SCORE {
        StrengthAssessment::MEDIUM
    } else {
        StrengthAssessment::WEAK
    }
}

/// Same as [`classify`] for a secret held in a [`SecretString`].
pub fn classify_secret(password: &SecretString) -> StrengthAssessment {
    classify(password.expose_secret())
}

/// Debounced version that sends the assessment via channel.
///
/// Waits `config.debounce` first. If `token` is cancelled at any point
/// before the assessment is delivered (a newer keystroke arrived), nothing
/// is sent, including while waiting for room in the channel.
#[cfg(feature = "async")]
pub async fn classify_tx(
    password: &SecretString,
    config: MeterConfig,
    token: CancellationToken,
    tx: mpsc::Sender<StrengthAssessment>,
) {
    tokio::select! {
        biased;
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("strength evaluation superseded during debounce");
            return;
        }
        _ = tokio::time::sleep(config.debounce) => {}
    }

    if token.is_cancelled() {
        return;
    }

    let assessment = classify_secret(password);

    #[cfg(feature = "tracing")]
    tracing::debug!("strength evaluated: {}", assessment.label);

    tokio::select! {
        biased;
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("strength evaluation superseded before delivery");
        }
        sent = tx.send(assessment) => {
            if let Err(_e) = sent {
                #[cfg(feature = "tracing")]
                tracing::error!("Failed to send strength assessment: {}", _e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::{StrengthColor, StrengthLabel};

    #[test]
    fn test_classify_empty_is_unscored() {
        let assessment = classify("");
        assert_eq!(assessment.label, StrengthLabel::Unscored);
        assert_eq!(assessment.label.to_string(), "Strength");
        assert_eq!(assessment.progress, 0);
        assert_eq!(assessment.color, StrengthColor::NEUTRAL);
    }

    #[test]
    fn test_classify_short_password() {
        let assessment = classify("abc");
        assert_eq!(assessment.label, StrengthLabel::Weak);
        assert_eq!(assessment.progress, 25);
        assert_eq!(assessment.color, StrengthColor::WARNING);
    }

    #[test]
    fn test_classify_short_password_with_all_classes() {
        // Seven characters, every class present: the length gate still wins.
        assert_eq!(classify("Ab1!xY2"), StrengthAssessment::TOO_SHORT);
    }

    #[test]
    fn test_classify_weak_password() {
        let assessment = classify("aaaaaaaa");
        assert_eq!(composite_score("aaaaaaaa"), Some(2));
        assert_eq!(assessment.label, StrengthLabel::Weak);
        assert_eq!(assessment.progress, 33);
    }

    #[test]
    fn test_classify_medium_password() {
        let assessment = classify("Abcdefgh1");
        assert_eq!(composite_score("Abcdefgh1"), Some(4));
        assert_eq!(assessment.label, StrengthLabel::Medium);
        assert_eq!(assessment.progress, 66);
        assert_eq!(assessment.color, StrengthColor::CAUTION);
    }

    #[test]
    fn test_classify_strong_password() {
        let assessment = classify("Abcdefghijkl1!");
        assert_eq!(composite_score("Abcdefghijkl1!"), Some(6));
        assert_eq!(assessment.label, StrengthLabel::Strong);
        assert_eq!(assessment.progress, 100);
        assert_eq!(assessment.color, StrengthColor::SUCCESS);
    }

    #[test]
    fn test_classify_score_boundaries() {
        // length 8, two classes: 1 + 2
        assert_eq!(classify("abcdefg1"), StrengthAssessment::MEDIUM);
        // length 8, four classes: 1 + 4
        assert_eq!(classify("Abcdef1!"), StrengthAssessment::STRONG);
        // length 12, three classes: 2 + 3
        assert_eq!(classify("Abcdefghijk1"), StrengthAssessment::STRONG);
        // length 12, one class: 2 + 1
        assert_eq!(classify("aaaaaaaaaaaa"), StrengthAssessment::MEDIUM);
    }

    #[test]
    fn test_classify_non_ascii() {
        // Non-ASCII letters count as symbols.
        assert_eq!(composite_score("ééééééééé"), Some(2));
        assert_eq!(classify("ééééééééé"), StrengthAssessment::WEAK);
        assert_eq!(classify("😀😀😀😀"), StrengthAssessment::WEAK);
    }

    #[test]
    fn test_classify_is_idempotent() {
        for pwd in ["", "abc", "aaaaaaaa", "Abcdefgh1", "Abcdefghijkl1!"] {
            assert_eq!(classify(pwd), classify(pwd));
        }
    }

    #[test]
    fn test_adding_a_class_never_lowers_score() {
        // Replace one character at a time with a character of a missing
        // class, keeping the length fixed.
        let bases = ["aaaaaaaa", "AAAAAAAAAAAA", "12345678", "!!!!!!!!!"];
        let substitutes = ['a', 'A', '1', '#'];

        for base in bases {
            let before = composite_score(base).unwrap();
            for sub in substitutes {
                let mut chars: Vec<char> = base.chars().collect();
                chars[0] = sub;
                let candidate: String = chars.into_iter().collect();
                let after = composite_score(&candidate).unwrap();
                assert!(
                    after >= before,
                    "score dropped from {} to {} for {:?} -> {:?}",
                    before,
                    after,
                    base,
                    candidate
                );
            }
        }
    }

    #[test]
    fn test_classify_secret_matches_classify() {
        let pwd = SecretString::new("MyPass123!".to_string().into());
        assert_eq!(classify_secret(&pwd), classify("MyPass123!"));
    }
}
