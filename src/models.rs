// src/models.rs
use serde::{Serialize, Deserialize};

// Character classes present in a password, derived once and shared by the
// entropy and crack-time calculations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharClassFlags {
    pub has_upper: bool,
    pub has_lower: bool,
    pub has_digit: bool,
    pub has_special: bool,
}

// The five binary criteria behind the composite strength score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthCriteria {
    pub min_length: bool,
    pub uppercase: bool,
    pub lowercase: bool,
    pub numbers: bool,
    pub special: bool,
}

impl StrengthCriteria {
    pub fn score(&self) -> u8 {
        [self.min_length, self.uppercase, self.lowercase, self.numbers, self.special]
            .iter()
            .filter(|&&passed| passed)
            .count() as u8
    }

    // (label, passed) pairs in display order, for checklist rendering.
    pub fn entries(&self) -> [(&'static str, bool); 5] {
        [
            ("Length (12+ characters)", self.min_length),
            ("Uppercase", self.uppercase),
            ("Lowercase", self.lowercase),
            ("Numbers", self.numbers),
            ("Special characters", self.special),
        ]
    }
}

// A named brute-force attacker with a fixed guess rate.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AttackerProfile {
    pub name: &'static str,
    pub guesses_per_second: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrackTimeEstimate {
    pub profile: String,
    pub display: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StrengthLevel {
    Critical,
    Weak,
    Moderate,
    Strong,
    Maximum,
}

impl StrengthLevel {
    // Map a final score (five criteria plus entropy bonus, 0..=6) to a level.
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=2 => StrengthLevel::Critical,
            3 => StrengthLevel::Weak,
            4 => StrengthLevel::Moderate,
            5 => StrengthLevel::Strong,
            _ => StrengthLevel::Maximum,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthLevel::Critical => "Critical",
            StrengthLevel::Weak => "Weak",
            StrengthLevel::Moderate => "Moderate",
            StrengthLevel::Strong => "Strong",
            StrengthLevel::Maximum => "Maximum",
        }
    }

    // Advisory display color, not logic-bearing.
    pub fn color_hex(&self) -> &'static str {
        match self {
            StrengthLevel::Critical => "#FF0000",
            StrengthLevel::Weak => "#FF6600",
            StrengthLevel::Moderate => "#FFCC00",
            StrengthLevel::Strong => "#33FF33",
            StrengthLevel::Maximum => "#00FF00",
        }
    }
}

impl std::fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// Complete analysis of a single password. Immutable value; renderers
// consume it idempotently.
#[derive(Debug, Clone, Serialize)]
pub struct StrengthReport {
    pub flags: CharClassFlags,
    pub criteria: StrengthCriteria,
    pub entropy_bits: u32,
    pub crack_times: Vec<CrackTimeEstimate>,
    pub level: StrengthLevel,
    pub sha256: String,
}
