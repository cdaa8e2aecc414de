// src/models.rs
use serde::{Serialize, Deserialize};
use std::fmt;

// Password generation options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
    pub exclude_ambiguous: bool,
    pub prevent_sequential: bool,
    pub prevent_repeat: bool,
}

impl GenerationConfig {
    /// True when at least one character class contributes to the pool.
    pub fn has_character_class(&self) -> bool {
        self.include_uppercase || self.include_lowercase || self.include_numbers || self.include_symbols
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            length: 16,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: true,
            exclude_ambiguous: false,
            prevent_sequential: false,
            prevent_repeat: false,
        }
    }
}

/// Qualitative strength bucket, 0 (very weak) to 4 (very strong).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StrengthLevel {
    #[serde(rename = "Very Weak")]
    VeryWeak = 0,
    #[serde(rename = "Weak")]
    Weak = 1,
    #[serde(rename = "Medium")]
    Medium = 2,
    #[serde(rename = "Strong")]
    Strong = 3,
    #[serde(rename = "Very Strong")]
    VeryStrong = 4,
}

impl StrengthLevel {
    /// Maps a clamped score to its level. Thresholds are inclusive lower
    /// bounds, checked from the top.
    pub fn from_score(score: u8) -> Self {
        if score >= 90 {
            StrengthLevel::VeryStrong
        } else if score >= 70 {
            StrengthLevel::Strong
        } else if score >= 50 {
            StrengthLevel::Medium
        } else if score >= 30 {
            StrengthLevel::Weak
        } else {
            StrengthLevel::VeryWeak
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StrengthLevel::VeryWeak => "Very Weak",
            StrengthLevel::Weak => "Weak",
            StrengthLevel::Medium => "Medium",
            StrengthLevel::Strong => "Strong",
            StrengthLevel::VeryStrong => "Very Strong",
        }
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthAnalysis {
    pub score: u8,
    pub level: StrengthLevel,
    pub suggestions: Vec<String>,
    pub entropy: u32,
}

impl StrengthAnalysis {
    pub fn label(&self) -> &'static str {
        self.level.label()
    }
}

/// Coarse brute-force time bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrackTime {
    Instant,
    Minutes(u64),
    Hours(u64),
    Days(u64),
    Years(u64),
    Centuries,
}

impl fmt::Display for CrackTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CrackTime::Instant => write!(f, "Instant"),
            CrackTime::Minutes(n) => write!(f, "{} mins", n),
            CrackTime::Hours(n) => write!(f, "{} hours", n),
            CrackTime::Days(n) => write!(f, "{} days", n),
            CrackTime::Years(n) => write!(f, "{} years", n),
            CrackTime::Centuries => write!(f, "Centuries"),
        }
    }
}

impl Serialize for CrackTime {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// Everything the presentation layer needs after one generation
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationReport {
    pub password: String,
    pub analysis: StrengthAnalysis,
    pub crack_time: CrackTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub password: String,
    pub strength: StrengthLevel,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    pub name: String,
    pub config: GenerationConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Dark => write!(f, "dark"),
            Theme::Light => write!(f, "light"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_score_maps_to_one_level() {
        let mut previous = StrengthLevel::VeryWeak;
        for score in 0..=100u8 {
            let level = StrengthLevel::from_score(score);
            assert!(level >= previous, "level dropped at score {}", score);
            previous = level;
        }
        assert_eq!(previous, StrengthLevel::VeryStrong);
    }

    #[test]
    fn test_threshold_edges() {
        assert_eq!(StrengthLevel::from_score(29), StrengthLevel::VeryWeak);
        assert_eq!(StrengthLevel::from_score(30), StrengthLevel::Weak);
        assert_eq!(StrengthLevel::from_score(49), StrengthLevel::Weak);
        assert_eq!(StrengthLevel::from_score(50), StrengthLevel::Medium);
        assert_eq!(StrengthLevel::from_score(70), StrengthLevel::Strong);
        assert_eq!(StrengthLevel::from_score(89), StrengthLevel::Strong);
        assert_eq!(StrengthLevel::from_score(90), StrengthLevel::VeryStrong);
    }

    #[test]
    fn test_config_json_uses_camel_case() {
        let json = serde_json::to_value(GenerationConfig::default()).unwrap();
        assert_eq!(json["includeUppercase"], true);
        assert_eq!(json["preventRepeat"], false);
        assert_eq!(json["length"], 16);
    }

    #[test]
    fn test_level_serializes_as_label() {
        let json = serde_json::to_string(&StrengthLevel::VeryStrong).unwrap();
        assert_eq!(json, "\"Very Strong\"");
    }

    #[test]
    fn test_crack_time_display() {
        assert_eq!(CrackTime::Minutes(3).to_string(), "3 mins");
        assert_eq!(CrackTime::Years(1).to_string(), "1 years");
        assert_eq!(CrackTime::Centuries.to_string(), "Centuries");
    }
}
