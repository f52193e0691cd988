// src/metrics/mod.rs
//
// Core password metrics: character classification, entropy approximation,
// brute-force crack-time estimation, and composite strength scoring. All
// functions here are pure and total over arbitrary string input.
use lazy_static::lazy_static;
use num_bigint::BigUint;
use num_traits::ToPrimitive;
use sha2::{Digest, Sha256};

use crate::models::{
    AttackerProfile, CharClassFlags, CrackTimeEstimate, StrengthCriteria, StrengthLevel,
    StrengthReport,
};
use crate::utils::format_duration;

/// The full 32-mark ASCII punctuation set. Drives charset sizing for the
/// entropy/crack-time estimates and the generator alphabet.
pub const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Narrower special-character set checked by the strength criteria.
/// Intentionally distinct from [`PUNCTUATION`]; unifying the two would
/// silently change scoring.
pub const SCORING_SPECIALS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Seconds threshold past which a crack time renders as "centuries".
const CENTURIES_CUTOFF_SECS: u64 = 315_360_000;

/// Entropy above this many bits earns one bonus point in the final score.
const ENTROPY_BONUS_THRESHOLD: u32 = 60;

lazy_static! {
    /// Brute-force attacker profiles, in display order.
    pub static ref ATTACKER_PROFILES: Vec<AttackerProfile> = vec![
        AttackerProfile { name: "Regular PC", guesses_per_second: 1_000_000 },
        AttackerProfile { name: "High-End PC", guesses_per_second: 100_000_000 },
        AttackerProfile { name: "Supercomputer", guesses_per_second: 1_000_000_000_000 },
    ];
}

/// Detect which ASCII character classes appear in the password.
/// Empty input yields all-false flags.
pub fn classify_characters(password: &str) -> CharClassFlags {
    CharClassFlags {
        has_upper: password.chars().any(|c| c.is_ascii_uppercase()),
        has_lower: password.chars().any(|c| c.is_ascii_lowercase()),
        has_digit: password.chars().any(|c| c.is_ascii_digit()),
        has_special: password.chars().any(|c| PUNCTUATION.contains(c)),
    }
}

/// Additive alphabet-size estimate: 26 per letter case, 10 for digits,
/// 32 for punctuation. Classes are not deduplicated against overlap.
pub fn char_set_size(flags: CharClassFlags) -> u32 {
    let mut size = 0;
    if flags.has_upper {
        size += 26;
    }
    if flags.has_lower {
        size += 26;
    }
    if flags.has_digit {
        size += 10;
    }
    if flags.has_special {
        size += 32;
    }
    size
}

// Bits needed to represent n in binary; 0 for n = 0.
fn bit_length(n: u32) -> u32 {
    if n == 0 {
        0
    } else {
        32 - n.leading_zeros()
    }
}

/// Heuristic entropy estimate in bits: code-point length times the bit
/// length of the charset size. The bit-length approximation (rather than
/// an exact log2) is deliberate and must be preserved for numeric
/// compatibility with existing expectations.
pub fn calculate_entropy(password: &str) -> u32 {
    let size = char_set_size(classify_characters(password));
    password.chars().count() as u32 * bit_length(size)
}

/// Estimate the time to exhaust the full keyspace for each attacker
/// profile. The keyspace `charset ^ length` is computed exactly with
/// big integers; floats only enter at display time.
pub fn calculate_crack_time(password: &str) -> Vec<CrackTimeEstimate> {
    let size = char_set_size(classify_characters(password));
    let length = u32::try_from(password.chars().count()).unwrap_or(u32::MAX);

    // 0^0 = 1: an empty password has exactly one "guess".
    let combinations = BigUint::from(size).pow(length);

    ATTACKER_PROFILES
        .iter()
        .map(|profile| CrackTimeEstimate {
            profile: profile.name.to_string(),
            display: format_crack_seconds(&combinations, profile.guesses_per_second),
        })
        .collect()
}

fn format_crack_seconds(combinations: &BigUint, guesses_per_second: u64) -> String {
    // Decide the "centuries" branch by exact integer comparison so a huge
    // keyspace can never be misrouted through float saturation.
    let cutoff = BigUint::from(guesses_per_second) * BigUint::from(CENTURIES_CUTOFF_SECS);
    if *combinations >= cutoff {
        return "centuries".to_string();
    }

    // Below the cutoff the keyspace is < 1e12 * 315_360_000 < 2^70,
    // so it always fits in a u128.
    let seconds = combinations.to_u128().unwrap_or(u128::MAX) as f64 / guesses_per_second as f64;
    format_duration(seconds)
}

/// Evaluate the five binary strength criteria. The special-character check
/// uses [`SCORING_SPECIALS`], not the wider punctuation set.
pub fn strength_criteria(password: &str) -> StrengthCriteria {
    StrengthCriteria {
        min_length: password.chars().count() >= 12,
        uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
        lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
        numbers: password.chars().any(|c| c.is_ascii_digit()),
        special: password.chars().any(|c| SCORING_SPECIALS.contains(c)),
    }
}

fn entropy_bonus(entropy_bits: u32) -> u8 {
    u8::from(entropy_bits > ENTROPY_BONUS_THRESHOLD)
}

/// Composite strength level: criteria score (0-5) plus entropy bonus,
/// mapped through [`StrengthLevel::from_score`].
pub fn classify_strength(password: &str) -> StrengthLevel {
    let score = strength_criteria(password).score() + entropy_bonus(calculate_entropy(password));
    StrengthLevel::from_score(score)
}

/// Hex-encoded SHA-256 digest of the password, for display alongside the
/// analysis.
pub fn sha256_fingerprint(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

/// Run the full analysis once and bundle everything a renderer needs.
pub fn analyze(password: &str) -> StrengthReport {
    let flags = classify_characters(password);
    let criteria = strength_criteria(password);
    let entropy_bits = calculate_entropy(password);
    let crack_times = calculate_crack_time(password);
    let level = StrengthLevel::from_score(criteria.score() + entropy_bonus(entropy_bits));

    StrengthReport {
        flags,
        criteria,
        entropy_bits,
        crack_times,
        level,
        sha256: sha256_fingerprint(password),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn punctuation_set_has_32_marks() {
        assert_eq!(PUNCTUATION.chars().count(), 32);
        // The scoring set is the narrower, separate constant.
        assert_eq!(SCORING_SPECIALS.chars().count(), 20);
    }

    #[test]
    fn empty_password_has_no_classes_and_zero_entropy() {
        assert_eq!(classify_characters(""), CharClassFlags::default());
        assert_eq!(calculate_entropy(""), 0);
    }

    #[test]
    fn classifies_each_class_independently() {
        let flags = classify_characters("aB3!");
        assert!(flags.has_upper && flags.has_lower && flags.has_digit && flags.has_special);

        let flags = classify_characters("abc");
        assert!(flags.has_lower);
        assert!(!flags.has_upper && !flags.has_digit && !flags.has_special);
    }

    #[test]
    fn charset_sizes_are_additive() {
        assert_eq!(char_set_size(classify_characters("a")), 26);
        assert_eq!(char_set_size(classify_characters("aA")), 52);
        assert_eq!(char_set_size(classify_characters("aA1")), 62);
        assert_eq!(char_set_size(classify_characters("aA1!")), 94);
    }

    #[test]
    fn twelve_lowercase_chars_give_60_bits() {
        // 12 * bit_length(26) = 12 * 5
        assert_eq!(calculate_entropy("aaaaaaaaaaaa"), 60);
    }

    #[test]
    fn bit_length_matches_binary_representation() {
        assert_eq!(bit_length(0), 0);
        assert_eq!(bit_length(1), 1);
        assert_eq!(bit_length(26), 5);
        assert_eq!(bit_length(52), 6);
        assert_eq!(bit_length(62), 6);
        assert_eq!(bit_length(94), 7);
    }

    #[test]
    fn entropy_and_crack_time_share_the_classification() {
        // Both must see a 94-char alphabet for this input.
        let password = "aA1!aA1!";
        assert_eq!(calculate_entropy(password), 8 * 7);
        assert_eq!(char_set_size(classify_characters(password)), 94);
    }

    #[test]
    fn crack_time_units_scale_with_the_attacker() {
        // 26^9 = ~5.43e12 combinations.
        let times = calculate_crack_time("abcdefghi");
        assert_eq!(times[0].profile, "Regular PC");
        assert!(times[0].display.ends_with("days"), "got {}", times[0].display);
        assert!(times[1].display.ends_with("hours"), "got {}", times[1].display);
        assert!(times[2].display.ends_with("seconds"), "got {}", times[2].display);
    }

    #[test]
    fn unrecognized_classes_crack_instantly() {
        // Non-ASCII input matches no class: charset 0, length > 0.
        let times = calculate_crack_time("ßßß");
        assert_eq!(times.len(), 3);
        for estimate in &times {
            assert_eq!(estimate.display, "0.00 seconds");
        }
    }

    #[test]
    fn empty_password_cracks_in_zero_point_zero_zero_seconds() {
        // 0^0 = 1 guess; fractions of a second round down to 0.00.
        for estimate in calculate_crack_time("") {
            assert_eq!(estimate.display, "0.00 seconds");
        }
    }

    #[test]
    fn long_diverse_password_takes_centuries() {
        let times = calculate_crack_time("aA1!aA1!aA1!aA1!");
        for estimate in &times {
            assert_eq!(estimate.display, "centuries");
        }
    }

    #[test]
    fn profile_order_is_stable() {
        let names: Vec<_> = calculate_crack_time("abc")
            .into_iter()
            .map(|e| e.profile)
            .collect();
        assert_eq!(names, ["Regular PC", "High-End PC", "Supercomputer"]);
    }

    #[test]
    fn score_three_with_low_entropy_is_weak() {
        // Upper + lower + digit, 7 chars: score 3, entropy 42 <= 60.
        let password = "Abcdef1";
        assert_eq!(strength_criteria(password).score(), 3);
        assert_eq!(calculate_entropy(password), 42);
        assert_eq!(classify_strength(password), StrengthLevel::Weak);
    }

    #[test]
    fn all_criteria_plus_entropy_bonus_is_maximum() {
        // 12+ chars, all four classes, scoring special present; entropy
        // 16 * 7 = 112 > 60 pushes the final score to 6.
        let password = "Abcdefgh1234!xyz";
        let criteria = strength_criteria(password);
        assert_eq!(criteria.score(), 5);
        assert!(calculate_entropy(password) > 60);
        assert_eq!(classify_strength(password), StrengthLevel::Maximum);
    }

    #[test]
    fn adding_character_classes_never_lowers_the_level() {
        // Grow a 12-char password one class at a time without removing any.
        let steps = [
            "abcdefghijkl",  // lower only
            "Abcdefghijkl",  // + upper
            "Abcdefghijk1",  // + digit
            "Abcdefghij1!",  // + scoring special
        ];
        let mut previous = StrengthLevel::Critical;
        for password in steps {
            let level = classify_strength(password);
            assert!(level >= previous, "{password} regressed to {level}");
            previous = level;
        }
    }

    #[test]
    fn fingerprint_is_hex_sha256() {
        // Well-known digest of the empty string.
        assert_eq!(
            sha256_fingerprint(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(sha256_fingerprint("abc").len(), 64);
    }

    #[test]
    fn analyze_bundles_consistent_parts() {
        let report = analyze("Abcdefghij1!");
        assert_eq!(report.flags, classify_characters("Abcdefghij1!"));
        assert_eq!(report.criteria, strength_criteria("Abcdefghij1!"));
        assert_eq!(report.entropy_bits, calculate_entropy("Abcdefghij1!"));
        assert_eq!(report.level, classify_strength("Abcdefghij1!"));
        assert_eq!(report.crack_times.len(), 3);
    }
}
