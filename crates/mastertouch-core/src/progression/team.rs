//! Team leveling and per-player contribution math.
//!
//! Teams level on a fixed linear curve -- every level spans 5,000 XP and
//! there is no cap. The contribution report splits the remaining
//! requirement evenly across the active roster and flags players below
//! the per-level minimum.

use serde::{Deserialize, Serialize};

use super::levels::LevelProgress;

/// XP span of every team level.
pub const TEAM_LEVEL_SPAN_XP: u32 = 5_000;

/// Compute a team's [`LevelProgress`] from its lifetime XP total.
///
/// Linear model: `xp_for_level(n) = (n - 1) * 5_000`, uncapped.
pub fn team_level_from_xp(total_xp: u32) -> LevelProgress {
    LevelProgress {
        level: total_xp / TEAM_LEVEL_SPAN_XP + 1,
        xp_into_level: total_xp % TEAM_LEVEL_SPAN_XP,
        xp_for_next_level: TEAM_LEVEL_SPAN_XP,
    }
}

/// Team-wide progression figures for the current level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamReport {
    /// Team level and progress within it
    pub progress: LevelProgress,
    /// Number of active players the requirement is split across
    pub player_count: u32,
    /// XP still needed to reach the next team level
    pub remaining_to_next_level: u32,
    /// Even share of the remaining requirement, rounded up
    pub xp_needed_per_player: u32,
    /// Minimum per-player contribution for the current level span
    pub minimum_xp_per_player: u32,
}

/// One player's contribution against the team's per-level minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerContribution {
    /// XP this player has contributed during the current team level
    pub xp_this_level: u32,
    /// Minimum contribution expected of each player this level
    pub minimum_needed: u32,
    /// XP this player still owes toward the minimum
    pub remaining: u32,
    /// Whether this player is currently below the minimum
    pub below_minimum: bool,
}

/// Build the team-wide report for a roster of `player_count` players.
///
/// A roster of zero must not divide by zero: the whole remaining
/// requirement is attributed to a single implicit player.
pub fn team_report(total_xp: u32, player_count: u32) -> TeamReport {
    let progress = team_level_from_xp(total_xp);
    let remaining = TEAM_LEVEL_SPAN_XP - progress.xp_into_level;

    let (xp_needed_per_player, minimum_xp_per_player) = if player_count == 0 {
        (remaining, TEAM_LEVEL_SPAN_XP)
    } else {
        (
            remaining.div_ceil(player_count),
            TEAM_LEVEL_SPAN_XP / player_count,
        )
    };

    TeamReport {
        progress,
        player_count,
        remaining_to_next_level: remaining,
        xp_needed_per_player,
        minimum_xp_per_player,
    }
}

/// Score one player's current-level contribution against the roster minimum.
pub fn player_contribution(xp_this_level: u32, player_count: u32) -> PlayerContribution {
    let minimum_needed = if player_count == 0 {
        TEAM_LEVEL_SPAN_XP
    } else {
        TEAM_LEVEL_SPAN_XP / player_count
    };
    let remaining = minimum_needed.saturating_sub(xp_this_level);

    PlayerContribution {
        xp_this_level,
        minimum_needed,
        remaining,
        below_minimum: xp_this_level < minimum_needed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_xp_is_team_level_one() {
        let progress = team_level_from_xp(0);
        assert_eq!(progress.level, 1);
        assert_eq!(progress.xp_into_level, 0);
        assert_eq!(progress.xp_for_next_level, 5_000);
    }

    #[test]
    fn test_linear_levels() {
        assert_eq!(team_level_from_xp(4_999).level, 1);
        assert_eq!(team_level_from_xp(5_000).level, 2);
        assert_eq!(team_level_from_xp(12_500).level, 3);
        assert_eq!(team_level_from_xp(12_500).xp_into_level, 2_500);
    }

    #[test]
    fn test_no_team_level_cap() {
        assert_eq!(team_level_from_xp(500_000).level, 101);
    }

    #[test]
    fn test_report_splits_remaining_evenly() {
        // Level 3, 2,500 into the level, 2,500 remaining across 4 players.
        let report = team_report(12_500, 4);
        assert_eq!(report.remaining_to_next_level, 2_500);
        assert_eq!(report.xp_needed_per_player, 625);
        assert_eq!(report.minimum_xp_per_player, 1_250);
    }

    #[test]
    fn test_report_rounds_share_up() {
        // 2,500 remaining across 3 players: ceil(833.3) = 834.
        let report = team_report(12_500, 3);
        assert_eq!(report.xp_needed_per_player, 834);
    }

    #[test]
    fn test_zero_players_gets_full_requirement() {
        let report = team_report(12_500, 0);
        assert_eq!(report.xp_needed_per_player, report.remaining_to_next_level);
        assert_eq!(report.minimum_xp_per_player, TEAM_LEVEL_SPAN_XP);
    }

    #[test]
    fn test_contribution_below_minimum() {
        let contribution = player_contribution(400, 4);
        assert_eq!(contribution.minimum_needed, 1_250);
        assert_eq!(contribution.remaining, 850);
        assert!(contribution.below_minimum);
    }

    #[test]
    fn test_contribution_at_minimum() {
        let contribution = player_contribution(1_250, 4);
        assert_eq!(contribution.remaining, 0);
        assert!(!contribution.below_minimum);
    }

    #[test]
    fn test_contribution_above_minimum_saturates() {
        let contribution = player_contribution(3_000, 4);
        assert_eq!(contribution.remaining, 0);
        assert!(!contribution.below_minimum);
    }
}
