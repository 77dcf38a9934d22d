//! # Threshold Tables — Versioned Score Bucketing
//!
//! Fixed, ordered threshold tables mapping raw provider scores onto
//! tiers and capability levels. Each table lists (lower bound, level)
//! pairs lowest-to-highest; a score lands in the bucket whose lower
//! bound is the greatest bound ≤ score.
//!
//! The tables are configuration-as-code: built once, read-only, and
//! versioned by [`NORMALIZATION_VERSION`]. A policy records the version
//! its thresholds were authored against, so a table change is visible in
//! every policy hash.

use repgate_core::{Capability, Tier};

/// Version tag of the normalization tables below. Bump on ANY change to
/// a bound — policies pin this version inside their hashed content.
pub const NORMALIZATION_VERSION: &str = "norm-v1";

/// Trust source score (0–100) → trust tier.
pub const TRUST_THRESHOLDS: &[(f64, Tier)] = &[
    (0.0, Tier::VeryLow),
    (20.0, Tier::Low),
    (40.0, Tier::Neutral),
    (65.0, Tier::High),
    (85.0, Tier::VeryHigh),
];

/// Social-graph score (0–100) → social trust tier.
pub const SOCIAL_THRESHOLDS: &[(f64, Tier)] = &[
    (0.0, Tier::VeryLow),
    (15.0, Tier::Low),
    (35.0, Tier::Neutral),
    (60.0, Tier::High),
    (80.0, Tier::VeryHigh),
];

/// Spam/abuse score (0–100, higher = riskier) → spam risk tier.
pub const SPAM_RISK_THRESHOLDS: &[(f64, Tier)] = &[
    (0.0, Tier::VeryLow),
    (20.0, Tier::Low),
    (40.0, Tier::Neutral),
    (60.0, Tier::High),
    (80.0, Tier::VeryHigh),
];

/// Capability domain score (0–100) → capability level.
pub const CAPABILITY_THRESHOLDS: &[(f64, Capability)] = &[
    (0.0, Capability::None),
    (25.0, Capability::Basic),
    (55.0, Capability::Skilled),
    (85.0, Capability::Expert),
];

/// Resolve a score against an ordered threshold table.
///
/// Returns the level whose lower bound is the greatest bound ≤ score.
/// Scores below the first bound (providers occasionally emit negative
/// values) land in the first bucket — the lowest level, never a panic.
pub fn bucket<T: Copy>(table: &[(f64, T)], score: f64) -> T {
    debug_assert!(!table.is_empty(), "threshold table must be non-empty");
    let mut current = table[0].1;
    for &(bound, level) in table {
        if score >= bound {
            current = level;
        } else {
            break;
        }
    }
    current
}
