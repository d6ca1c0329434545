//! # Master Touch Core Library
//!
//! This library provides the progression engine for the Master Touch
//! juggling trainer: XP leveling, rank display, practice streaks, and
//! team unlockables. It implements a CLI-first philosophy where every
//! operation is available via a standalone CLI binary, with the mobile
//! application being a thin UI layer over the same core library.
//!
//! ## Architecture
//!
//! - **Progression Engine**: pure threshold-table leveling for players
//!   (capped at 20), linear leveling for teams, rank/badge lookups, and
//!   fixed XP event rewards
//! - **Streak Classifier**: consecutive-calendar-day streak computation
//!   over normalized practice days
//! - **Unlockables**: a static catalog of team cosmetics gated by team
//!   level
//! - **Session Boundary**: normalization of raw store rows into the
//!   engine's inputs
//!
//! Every function is synchronous, side-effect-free, and safe to call
//! from any thread; the surrounding application owns all I/O, caching,
//! and persistence.
//!
//! ## Key Components
//!
//! - [`level_from_xp`] / [`team_level_from_xp`]: XP to [`LevelProgress`]
//! - [`RankName`]: rank tiers and display badges
//! - [`compute_streak`]: practice-day streak classification
//! - [`unlocked_items`] / [`next_unlock`]: team cosmetic resolution
//! - [`PracticeHistory`]: the session store boundary

pub mod error;
pub mod progression;
pub mod session;
pub mod streak;
pub mod unlockables;

pub use error::CoreError;
pub use progression::{
    badge_for_name, level_from_xp, player_contribution, team_level_from_xp, team_report,
    LevelProgress, PlayerContribution, RankBadge, RankName, TeamReport, XpEvent,
    LEVEL_THRESHOLDS, MAX_PLAYER_LEVEL, NEUTRAL_BADGE, TEAM_LEVEL_SPAN_XP,
};
pub use session::{
    player_summary, records_from_file, records_from_json, PlayerSummary, PracticeHistory,
    SessionRecord,
};
pub use streak::{compute_streak, StreakState};
pub use unlockables::{
    next_unlock, unlocked_items, TeamUnlockable, UnlockableKind, TEAM_UNLOCKABLES,
};
