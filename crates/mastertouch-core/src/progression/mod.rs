//! Progression engine: levels, ranks, XP events, and team leveling.
//!
//! Everything here is a pure function of its inputs -- the engine reads
//! XP totals owned by the session store and derives display state; it
//! never persists anything itself.

mod events;
mod levels;
mod rank;
mod team;

pub use events::XpEvent;
pub use levels::{level_from_xp, LevelProgress, LEVEL_THRESHOLDS, MAX_PLAYER_LEVEL};
pub use rank::{badge_for_name, RankBadge, RankName, NEUTRAL_BADGE};
pub use team::{
    player_contribution, team_level_from_xp, team_report, PlayerContribution, TeamReport,
    TEAM_LEVEL_SPAN_XP,
};
