//! Player level thresholds and progress computation.
//!
//! A player's level is a pure function of their lifetime XP total, derived
//! from a fixed 20-entry threshold table with a super-linear difficulty
//! curve. Level 20 is a hard cap: XP beyond the top threshold never raises
//! the level, and a synthetic ceiling keeps progress bars renderable.

use serde::{Deserialize, Serialize};

/// Lifetime XP required to reach each player level.
///
/// `LEVEL_THRESHOLDS[i]` is the total XP at which level `i + 1` begins.
/// Must stay sorted ascending with level 1 at 0 XP.
pub const LEVEL_THRESHOLDS: [u32; 20] = [
    0, 300, 700, 1_200, 1_900, 2_800, 4_000, 5_500, 7_400, 9_800, 12_800, 16_500, 21_000, 26_400,
    32_800, 40_300, 49_000, 59_000, 70_500, 83_500,
];

/// Hard cap on player level.
pub const MAX_PLAYER_LEVEL: u32 = 20;

/// Width of the synthetic final bracket above the top threshold, so the
/// capped level still has a positive `xp_for_next_level`.
const CAP_BRACKET_XP: u32 = 10_000;

/// Progress of a player (or team) within their current level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelProgress {
    /// Current level (1-based; capped at [`MAX_PLAYER_LEVEL`] for players)
    pub level: u32,
    /// XP earned since reaching the current level
    pub xp_into_level: u32,
    /// XP span of the current level bracket (always > 0)
    pub xp_for_next_level: u32,
}

impl LevelProgress {
    /// Fraction of the current bracket completed, clamped to 1.0 at the cap.
    pub fn fraction(&self) -> f64 {
        (self.xp_into_level as f64 / self.xp_for_next_level as f64).min(1.0)
    }
}

/// Compute a player's [`LevelProgress`] from their lifetime XP total.
///
/// Walks the threshold table from the top down; the first threshold at or
/// below `total_xp` determines the level. Total over all of `u32` -- no XP
/// value can make this panic or divide by zero.
pub fn level_from_xp(total_xp: u32) -> LevelProgress {
    let mut level: u32 = 1;
    for (idx, &threshold) in LEVEL_THRESHOLDS.iter().enumerate().rev() {
        if total_xp >= threshold {
            level = idx as u32 + 1;
            break;
        }
    }

    let floor = LEVEL_THRESHOLDS[(level - 1) as usize];
    let bracket = if level >= MAX_PLAYER_LEVEL {
        CAP_BRACKET_XP
    } else {
        LEVEL_THRESHOLDS[level as usize] - floor
    };

    LevelProgress {
        level,
        xp_into_level: total_xp - floor,
        xp_for_next_level: bracket,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_xp_is_level_one() {
        let progress = level_from_xp(0);
        assert_eq!(progress.level, 1);
        assert_eq!(progress.xp_into_level, 0);
        assert_eq!(progress.xp_for_next_level, 300);
    }

    #[test]
    fn test_exact_threshold_starts_new_level() {
        let progress = level_from_xp(300);
        assert_eq!(progress.level, 2);
        assert_eq!(progress.xp_into_level, 0);
        assert_eq!(progress.xp_for_next_level, 400);
    }

    #[test]
    fn test_one_below_threshold_stays_on_previous_level() {
        let progress = level_from_xp(299);
        assert_eq!(progress.level, 1);
        assert_eq!(progress.xp_into_level, 299);
    }

    #[test]
    fn test_mid_bracket_progress() {
        let progress = level_from_xp(500);
        assert_eq!(progress.level, 2);
        assert_eq!(progress.xp_into_level, 200);
        assert_eq!(progress.xp_for_next_level, 400);
    }

    #[test]
    fn test_top_threshold_reaches_cap() {
        let progress = level_from_xp(83_500);
        assert_eq!(progress.level, 20);
        assert_eq!(progress.xp_into_level, 0);
        assert_eq!(progress.xp_for_next_level, 10_000);
    }

    #[test]
    fn test_far_beyond_top_threshold_stays_capped() {
        let progress = level_from_xp(10_000_000);
        assert_eq!(progress.level, 20);
        assert_eq!(progress.xp_into_level, 10_000_000 - 83_500);
    }

    #[test]
    fn test_thresholds_strictly_ascending() {
        for pair in LEVEL_THRESHOLDS.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_progress_bounds_below_cap() {
        for xp in [0u32, 1, 299, 300, 4_500, 12_799, 70_499, 83_499] {
            let progress = level_from_xp(xp);
            assert!(progress.level < MAX_PLAYER_LEVEL);
            assert!(progress.xp_into_level < progress.xp_for_next_level);
        }
    }

    #[test]
    fn test_fraction_clamped_at_cap() {
        let progress = level_from_xp(1_000_000);
        assert_eq!(progress.fraction(), 1.0);
    }
}
