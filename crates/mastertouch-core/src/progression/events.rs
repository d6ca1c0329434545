//! XP event kinds and their fixed rewards.
//!
//! Every rewardable action maps to a fixed, positive XP amount. Unknown
//! event tags parse to [`XpEvent::Unknown`] and award nothing -- rewards
//! drive cosmetic UI, so an unrecognized tag from the store must never
//! surface as an error.

use serde::{Deserialize, Serialize};

/// A rewardable progression event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum XpEvent {
    /// A practice session was logged
    SessionLogged,
    /// The player's daily juggling target was hit
    DailyTargetHit,
    /// A new personal best touch count
    PersonalBest,
    /// Reached a 3-day practice streak
    #[serde(rename = "streak_3_day")]
    StreakThreeDay,
    /// Reached a 7-day practice streak
    #[serde(rename = "streak_7_day")]
    StreakSevenDay,
    /// Reached a 30-day practice streak
    #[serde(rename = "streak_30_day")]
    StreakThirtyDay,
    /// Unrecognized event tag; awards no XP
    #[serde(other)]
    Unknown,
}

impl XpEvent {
    /// XP awarded for this event. Never negative; [`XpEvent::Unknown`] is 0.
    pub fn reward(&self) -> u32 {
        match self {
            XpEvent::SessionLogged => 50,
            XpEvent::DailyTargetHit => 25,
            XpEvent::PersonalBest => 100,
            XpEvent::StreakThreeDay => 75,
            XpEvent::StreakSevenDay => 150,
            XpEvent::StreakThirtyDay => 400,
            XpEvent::Unknown => 0,
        }
    }

    /// Parse a raw event tag as stored by the session store. Fail-open:
    /// anything unrecognized becomes [`XpEvent::Unknown`].
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "session_logged" => XpEvent::SessionLogged,
            "daily_target_hit" => XpEvent::DailyTargetHit,
            "personal_best" => XpEvent::PersonalBest,
            "streak_3_day" => XpEvent::StreakThreeDay,
            "streak_7_day" => XpEvent::StreakSevenDay,
            "streak_30_day" => XpEvent::StreakThirtyDay,
            _ => XpEvent::Unknown,
        }
    }
}
