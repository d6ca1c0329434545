//! Consecutive-day practice streak classification.
//!
//! Streaks are computed over distinct local calendar days on which at
//! least one session was logged. The input contract is strict: the
//! caller must normalize timestamps to the player's local calendar day
//! before calling -- this module does no timezone conversion, because
//! mixing UTC and local days silently corrupts streaks.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Current and all-time-best consecutive-day streaks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakState {
    /// Days in the streak ending today or yesterday (0 if broken)
    pub current_streak: u32,
    /// Longest run of consecutive days anywhere in the history
    pub longest_streak: u32,
}

/// Compute [`StreakState`] from a set of distinct practice days.
///
/// The current streak walks backward from `today`: the most recent
/// practice day must be today or yesterday, and each earlier day must be
/// exactly one day older than the last to keep counting. The first gap
/// of more than one day is a hard reset to whatever was counted so far.
/// The longest streak is the maximum consecutive run across the whole
/// history. Days after `today` are ignored.
pub fn compute_streak(practice_days: &BTreeSet<NaiveDate>, today: NaiveDate) -> StreakState {
    let mut current_streak: u32 = 0;
    let mut anchor = today;
    for &day in practice_days.iter().rev().filter(|&&d| d <= today) {
        let gap = (anchor - day).num_days();
        if gap > 1 {
            break;
        }
        current_streak += 1;
        anchor = day;
    }

    let mut longest_streak: u32 = 0;
    let mut run: u32 = 0;
    let mut previous: Option<NaiveDate> = None;
    for &day in practice_days.iter() {
        run = match previous {
            Some(prev) if (day - prev).num_days() == 1 => run + 1,
            _ => 1,
        };
        longest_streak = longest_streak.max(run);
        previous = Some(day);
    }

    StreakState {
        current_streak,
        longest_streak: longest_streak.max(current_streak),
    }
}
