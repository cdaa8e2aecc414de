// src/analysis/entropy.rs
use crate::models::CrackTime;

/// Assumed size of the symbol alphabet, regardless of which symbols appear.
pub const SYMBOL_POOL_SIZE: u32 = 33;

/// Guesses per second for a high-end GPU array.
pub const GUESSES_PER_SECOND: f64 = 100_000_000_000.0;

const MINUTE: f64 = 60.0;
const HOUR: f64 = 3_600.0;
const DAY: f64 = 86_400.0;
const YEAR: f64 = 31_536_000.0;
const CENTURY: f64 = 3_153_600_000.0;

/// Which of the four character classes occur at least once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharacterClasses {
    pub lowercase: bool,
    pub uppercase: bool,
    pub digits: bool,
    pub other: bool,
}

impl CharacterClasses {
    pub fn detect(password: &str) -> Self {
        let mut classes = Self::default();
        for c in password.chars() {
            if c.is_ascii_lowercase() {
                classes.lowercase = true;
            } else if c.is_ascii_uppercase() {
                classes.uppercase = true;
            } else if c.is_ascii_digit() {
                classes.digits = true;
            } else {
                classes.other = true;
            }
        }
        classes
    }

    pub fn count(&self) -> usize {
        [self.lowercase, self.uppercase, self.digits, self.other]
            .iter()
            .filter(|present| **present)
            .count()
    }

    pub fn pool_size(&self) -> u32 {
        let mut pool = 0;
        if self.lowercase {
            pool += 26;
        }
        if self.uppercase {
            pool += 26;
        }
        if self.digits {
            pool += 10;
        }
        if self.other {
            pool += SYMBOL_POOL_SIZE;
        }
        pool
    }
}

/// Bits of entropy, `floor(length * log2(pool))`, where the pool is the sum
/// of the class sizes present in the password.
pub fn calculate_entropy(password: &str) -> u32 {
    let pool_size = CharacterClasses::detect(password).pool_size();
    if pool_size == 0 {
        return 0;
    }

    let length = password.chars().count() as f64;
    (length * (pool_size as f64).log2()).floor() as u32
}

pub fn estimate_crack_time(entropy: u32) -> CrackTime {
    if entropy < 28 {
        return CrackTime::Instant;
    }

    let seconds = (entropy as f64).exp2() / GUESSES_PER_SECOND;

    if seconds < MINUTE {
        CrackTime::Instant
    } else if seconds < HOUR {
        CrackTime::Minutes((seconds / MINUTE).floor() as u64)
    } else if seconds < DAY {
        CrackTime::Hours((seconds / HOUR).floor() as u64)
    } else if seconds < YEAR {
        CrackTime::Days((seconds / DAY).floor() as u64)
    } else if seconds < CENTURY {
        CrackTime::Years((seconds / YEAR).floor() as u64)
    } else {
        CrackTime::Centuries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entropy_of_empty_password() {
        assert_eq!(calculate_entropy(""), 0);
    }

    #[test]
    fn test_entropy_single_class() {
        assert_eq!(calculate_entropy("aaaa"), 18);
        assert_eq!(calculate_entropy("1234"), 13);
    }

    #[test]
    fn test_entropy_all_classes() {
        let password = "aB3$aB3$aB3$";
        assert_eq!(CharacterClasses::detect(password).pool_size(), 95);
        assert_eq!(calculate_entropy(password), 78);
    }

    #[test]
    fn test_non_ascii_counts_as_one_char_each() {
        // Three scalars over the 33-symbol pool: floor(3 * 5.04)
        assert_eq!(calculate_entropy("😀😀😀"), 15);
        assert_eq!(calculate_entropy("é"), 5);
    }

    #[test]
    fn test_symbol_pool_is_fixed() {
        // One symbol or many, the pool contribution is the same
        assert_eq!(calculate_entropy("!!!!"), calculate_entropy("!@#$"));
        assert_eq!(CharacterClasses::detect("é").pool_size(), SYMBOL_POOL_SIZE);
    }

    #[test]
    fn test_long_password_does_not_overflow() {
        let password = "aB3$".repeat(100);
        assert_eq!(calculate_entropy(&password), 2627);
        assert_eq!(estimate_crack_time(calculate_entropy(&password)), CrackTime::Centuries);
    }

    #[test]
    fn test_crack_time_buckets() {
        let cases = [
            (0, "Instant"),
            (27, "Instant"),
            (28, "Instant"),
            (42, "Instant"),
            (43, "1 mins"),
            (48, "46 mins"),
            (49, "1 hours"),
            (52, "12 hours"),
            (53, "1 days"),
            (61, "266 days"),
            (62, "1 years"),
            (68, "93 years"),
            (69, "Centuries"),
            (128, "Centuries"),
        ];
        for (entropy, expected) in cases {
            assert_eq!(
                estimate_crack_time(entropy).to_string(),
                expected,
                "entropy {}",
                entropy
            );
        }
    }
}
