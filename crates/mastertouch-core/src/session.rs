//! Session store boundary.
//!
//! The hosted store owns the raw session rows; this module turns an
//! export of those rows into the normalized inputs the engine needs --
//! a lifetime XP total and a deduplicated set of practice days -- and
//! bundles the derived state the UI renders on every read.
//!
//! Input policy lives here and only here: rows carry `xp_earned` as a
//! signed integer because the store does not enforce a sign, and
//! negative rows are dropped so the lifetime total can never go below
//! zero. Dates must already be the player's local calendar day.

use std::collections::BTreeSet;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::progression::{level_from_xp, LevelProgress, RankBadge, RankName};
use crate::streak::{compute_streak, StreakState};

/// One raw practice-session row as exported by the session store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Local calendar day the session was logged on
    pub practiced_on: NaiveDate,
    /// XP awarded for the session; signed because the store does not
    /// guarantee a sign
    pub xp_earned: i64,
}

/// Normalized per-player practice history: the engine's entire input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PracticeHistory {
    /// Lifetime XP total, floored at zero
    pub total_xp: u32,
    /// Distinct local calendar days with at least one session
    pub practice_days: BTreeSet<NaiveDate>,
}

impl PracticeHistory {
    /// Normalize raw rows: deduplicate days, drop negative XP rows, and
    /// saturate the total into `u32` range.
    pub fn from_records(records: &[SessionRecord]) -> Self {
        let mut total: u64 = 0;
        let mut practice_days = BTreeSet::new();
        for record in records {
            if record.xp_earned > 0 {
                total += record.xp_earned as u64;
            }
            practice_days.insert(record.practiced_on);
        }

        PracticeHistory {
            total_xp: total.min(u32::MAX as u64) as u32,
            practice_days,
        }
    }
}

/// Everything the UI layer needs to render a player's progression card.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerSummary {
    pub progress: LevelProgress,
    pub rank: RankName,
    pub rank_title: &'static str,
    pub badge: RankBadge,
    pub streak: StreakState,
}

/// Derive the full player summary from a normalized history.
pub fn player_summary(history: &PracticeHistory, today: NaiveDate) -> PlayerSummary {
    let progress = level_from_xp(history.total_xp);
    let rank = RankName::for_level(progress.level);

    PlayerSummary {
        progress,
        rank,
        rank_title: rank.display_name(),
        badge: rank.badge(),
        streak: compute_streak(&history.practice_days, today),
    }
}

/// Parse a JSON session export (an array of [`SessionRecord`]).
pub fn records_from_json(json: &str) -> Result<Vec<SessionRecord>, CoreError> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse a JSON session export from disk.
pub fn records_from_file(path: &Path) -> Result<Vec<SessionRecord>, CoreError> {
    let json = std::fs::read_to_string(path)?;
    records_from_json(&json)
}
