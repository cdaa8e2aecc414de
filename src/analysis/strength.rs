// src/analysis/strength.rs
use crate::analysis::entropy::{calculate_entropy, CharacterClasses};
use crate::models::{StrengthAnalysis, StrengthLevel};

pub const SEQUENCES: &[&str] = &[
    "abc", "bcd", "cde", "def", "efg", "fgh", "ghi", "hij", "ijk", "jkl", "klm", "lmn", "mno",
    "nop", "opq", "pqr", "qrs", "rst", "stu", "tuv", "uvw", "vwx", "wxy", "xyz",
    "012", "123", "234", "345", "456", "567", "678", "789", "890",
];

// Single "p" and the two-letter column fragments are part of the list as-is
pub const KEYBOARD_PATTERNS: &[&str] = &[
    "qwerty", "asdf", "zxcv", "qaz", "wsx", "edc", "rfv", "tgb", "yhn", "ujm", "ik", "ol", "p",
    "1qaz", "2wsx", "3edc", "4rfv", "5tgb", "6yhn", "7ujm", "8ik", "9ol", "0p",
];

pub const WEAK_WORDS: &[&str] = &["password", "admin", "hello", "welcome", "123456", "qwerty"];

pub const SUGGEST_LENGTH: &str = "Increase length to at least 12 characters.";
pub const SUGGEST_VARIETY: &str = "Add more character types (UPPER, lower, #, symbols).";
pub const SUGGEST_SEQUENCE: &str = "Avoid sequential characters (e.g., 'abc', '123').";
pub const SUGGEST_KEYBOARD: &str = "Avoid keyboard patterns (e.g., 'qwerty').";
pub const SUGGEST_REPEAT: &str = "Avoid repeated characters (e.g., 'aaa').";
pub const SUGGEST_WEAK_WORD: &str = "Avoid common weak words.";

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// True if any character occurs three or more times in a row.
fn has_repeated_run(password: &str) -> bool {
    let mut prev = None;
    let mut run = 0;

    for c in password.chars() {
        if is_line_terminator(c) {
            prev = None;
            run = 0;
            continue;
        }
        if prev == Some(c) {
            run += 1;
            if run >= 3 {
                return true;
            }
        } else {
            prev = Some(c);
            run = 1;
        }
    }

    false
}

fn entropy_points(entropy: u32) -> i32 {
    if entropy > 120 {
        50
    } else if entropy > 80 {
        40
    } else if entropy > 60 {
        30
    } else if entropy > 40 {
        20
    } else {
        10
    }
}

/// Scores a password from 0 to 100 out of entropy, length, class variety
/// and pattern penalties, and collects suggestions in detection order.
pub fn evaluate(password: &str) -> StrengthAnalysis {
    if password.is_empty() {
        return StrengthAnalysis {
            score: 0,
            level: StrengthLevel::VeryWeak,
            suggestions: Vec::new(),
            entropy: 0,
        };
    }

    let mut score: i32 = 0;
    let mut suggestions = Vec::new();
    let length = password.chars().count();
    let entropy = calculate_entropy(password);

    score += entropy_points(entropy);

    if length >= 16 {
        score += 20;
    } else if length >= 12 {
        score += 10;
    } else if length < 8 {
        score -= 10;
        suggestions.push(SUGGEST_LENGTH.to_string());
    }

    match CharacterClasses::detect(password).count() {
        n if n >= 3 => score += 20,
        2 => score += 10,
        _ => suggestions.push(SUGGEST_VARIETY.to_string()),
    }

    let lowered = password.to_ascii_lowercase();

    if contains_any(&lowered, SEQUENCES) {
        score -= 15;
        suggestions.push(SUGGEST_SEQUENCE.to_string());
    }
    if contains_any(&lowered, KEYBOARD_PATTERNS) {
        score -= 15;
        suggestions.push(SUGGEST_KEYBOARD.to_string());
    }
    if has_repeated_run(password) {
        score -= 10;
        suggestions.push(SUGGEST_REPEAT.to_string());
    }
    if contains_any(&lowered, WEAK_WORDS) {
        score -= 30;
        suggestions.push(SUGGEST_WEAK_WORD.to_string());
    }

    let score = score.clamp(0, 100) as u8;

    StrengthAnalysis {
        score,
        level: StrengthLevel::from_score(score),
        suggestions,
        entropy,
    }
}
