//! A heuristic strength score for passwords.
//!
//! This is not an entropy bound. The point weights and thresholds are fixed so that a given
//! password always gets the same tier, wherever it's scored.

use std::fmt;

use serde::Serialize;

/// Qualitative strength buckets, weakest first.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StrengthTier {
    VeryWeak,
    Weak,
    Fair,
    Good,
    Excellent,
}

impl StrengthTier {
    pub fn from_score(score: u8) -> StrengthTier {
        if score >= 8 {
            StrengthTier::Excellent
        } else if score >= 6 {
            StrengthTier::Good
        } else if score >= 4 {
            StrengthTier::Fair
        } else if score >= 2 {
            StrengthTier::Weak
        } else {
            StrengthTier::VeryWeak
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StrengthTier::Excellent => "Excellent - Very Strong",
            StrengthTier::Good => "Good - Strong",
            StrengthTier::Fair => "Fair - Moderate",
            StrengthTier::Weak => "Weak - Needs improvement",
            StrengthTier::VeryWeak => "Very Weak - Not recommended",
        }
    }

    /// How full a strength meter for this tier should be, in percent.
    pub fn meter_percent(self) -> u8 {
        match self {
            StrengthTier::Excellent => 100,
            StrengthTier::Good => 75,
            StrengthTier::Fair => 50,
            StrengthTier::Weak => 25,
            StrengthTier::VeryWeak => 0,
        }
    }
}

impl fmt::Display for StrengthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct StrengthReport {
    pub tier: StrengthTier,
    /// 0 through 9.
    pub score: u8,
    pub label: &'static str,
}

/// Score a password.
///
/// Points are awarded for:
/// * length: one each for reaching 8, 12, 16 and 20 characters;
/// * variety: of uppercase, lowercase, digits and [`SPECIAL_CHARACTERS`], one each for having at
///   least two, three, and all four present;
/// * estimated entropy: `length * log2(pool)`, where the pool sums the sizes of the categories
///   present (26, 26, 10, and 20 for specials), one point each for exceeding 50 and 80 bits.
///
/// The empty string scores 0 and is labelled "no password".
pub fn score_password(password: &str) -> StrengthReport {
    if password.is_empty() {
        return StrengthReport {
            tier: StrengthTier::VeryWeak,
            score: 0,
            label: "no password",
        };
    }

    let length = password.chars().count();
    let mut score = LENGTH_THRESHOLDS
        .iter()
        .filter(|&&threshold| length >= threshold)
        .count() as u8;

    let categories = Categories::of(password);
    let variety = categories.count();
    score += [2, 3, 4].iter().filter(|&&n| variety >= n).count() as u8;

    let bits = entropy_bits(length, categories.pool_size());
    if bits > 50.0 {
        score += 1;
    }
    if bits > 80.0 {
        score += 1;
    }

    let tier = StrengthTier::from_score(score);
    StrengthReport {
        tier,
        score,
        label: tier.label(),
    }
}

/// The symbols that count as "special" when scoring.
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

const LENGTH_THRESHOLDS: [usize; 4] = [8, 12, 16, 20];

// Specials count as a pool of 20, not the size of `SPECIAL_CHARACTERS`. Changing this changes
// existing scores.
const SPECIAL_POOL_SIZE: u32 = 20;

#[derive(Clone, Copy, Debug, Default)]
struct Categories {
    uppercase: bool,
    lowercase: bool,
    digit: bool,
    special: bool,
}

impl Categories {
    fn of(password: &str) -> Categories {
        let mut categories = Categories::default();
        for ch in password.chars() {
            categories.uppercase |= ch.is_ascii_uppercase();
            categories.lowercase |= ch.is_ascii_lowercase();
            categories.digit |= ch.is_ascii_digit();
            categories.special |= SPECIAL_CHARACTERS.contains(ch);
        }
        categories
    }

    fn count(self) -> usize {
        [self.uppercase, self.lowercase, self.digit, self.special]
            .iter()
            .filter(|&&present| present)
            .count()
    }

    fn pool_size(self) -> u32 {
        let mut pool = 0;
        if self.uppercase {
            pool += 26;
        }
        if self.lowercase {
            pool += 26;
        }
        if self.digit {
            pool += 10;
        }
        if self.special {
            pool += SPECIAL_POOL_SIZE;
        }
        pool
    }
}

/// `length * log2(pool)`, computed this way round so it can't overflow.
fn entropy_bits(length: usize, pool: u32) -> f64 {
    if pool == 0 {
        return 0.0;
    }
    length as f64 * f64::from(pool).log2()
}
