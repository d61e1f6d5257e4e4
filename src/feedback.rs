//! Feedback generation.
//!
//! Turns detected weaknesses into improvement suggestions: one per weakness
//! kind, most severe first, followed by a tier note and the hygiene
//! reminders that are always shown.

use std::collections::HashSet;

use crate::composition::CompositionProfile;
use crate::types::{ScoreResult, Weakness, WeaknessKind};

pub const REUSE_REMINDER: &str = "Never reuse passwords across multiple accounts";
pub const MANAGER_REMINDER: &str =
    "Use a password manager and enable two-factor authentication (2FA) wherever possible";

/// Ordered, deduplicated suggestions for one analysis.
pub fn generate_feedback(
    weaknesses: &[Weakness],
    profile: &CompositionProfile,
    result: &ScoreResult,
) -> Vec<String> {
    let mut firsts: Vec<&Weakness> = Vec::new();
    let mut seen = HashSet::new();
    for weakness in weaknesses {
        if seen.insert(weakness.kind) {
            firsts.push(weakness);
        }
    }
    // Stable sort keeps detection order among equal severities.
    firsts.sort_by(|a, b| b.severity.cmp(&a.severity));

    let mut feedback: Vec<String> = firsts
        .into_iter()
        .map(|w| suggestion(w, weaknesses, profile))
        .collect();

    if let Some(note) = tier_note(result.score) {
        feedback.push(note.to_string());
    }

    feedback.push(REUSE_REMINDER.to_string());
    feedback.push(MANAGER_REMINDER.to_string());
    feedback
}

fn suggestion(first: &Weakness, all: &[Weakness], profile: &CompositionProfile) -> String {
    match first.kind {
        WeaknessKind::CommonPassword => {
            "This password is too common - choose a unique one".to_string()
        }
        WeaknessKind::DictionaryWord => {
            let mut words: Vec<&str> = Vec::new();
            for w in all.iter().filter(|w| w.kind == WeaknessKind::DictionaryWord) {
                if !words.contains(&w.detail.as_str()) {
                    words.push(&w.detail);
                }
            }
            format!("Avoid using dictionary words ({})", quoted(&words))
        }
        WeaknessKind::KeyboardPattern => {
            format!("Avoid keyboard patterns such as '{}'", first.detail)
        }
        WeaknessKind::SequentialChars => {
            format!("Avoid sequential characters such as '{}'", first.detail)
        }
        WeaknessKind::RepeatedChars => {
            "Avoid repeating the same character or block of characters".to_string()
        }
        WeaknessKind::InsufficientLength => {
            format!("{} (12+ recommended)", first.detail)
        }
        WeaknessKind::LowDiversity => {
            let missing: Vec<&str> = profile
                .missing_classes()
                .into_iter()
                .map(|c| c.label())
                .collect();
            format!("Add {}", missing.join(", "))
        }
    }
}

fn quoted(words: &[&str]) -> String {
    words
        .iter()
        .map(|w| format!("'{}'", w))
        .collect::<Vec<_>>()
        .join(", ")
}

fn tier_note(score: u8) -> Option<&'static str> {
    match score {
        0..=39 => Some("Critical: this password is easily crackable"),
        40..=59 => Some("Consider strengthening this password with more length and character types"),
        60..=79 => Some("Consider making this password even longer for extra security"),
        _ => None,
    }
}
