//! Static catalog of team unlockables.
//!
//! Cosmetic rewards gated behind team levels: kit themes, crest badges,
//! goal celebrations, and team titles. The catalog is content, not
//! logic -- adding a row is a data change and the query functions never
//! need to know about it.

use serde::{Deserialize, Serialize};

/// Kind of cosmetic a team unlocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnlockableKind {
    Theme,
    Badge,
    Celebration,
    Title,
}

/// One catalog entry, unlocked when the team reaches `level`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TeamUnlockable {
    /// Team level at which this entry unlocks
    pub level: u32,
    pub kind: UnlockableKind,
    pub name: &'static str,
    pub description: &'static str,
    /// Symbolic icon name for the UI layer's icon set
    pub icon: &'static str,
    /// Kind-specific payload (e.g. a theme's hex color)
    pub value: Option<&'static str>,
}

/// Full unlockable catalog, sorted ascending by level. Covers team
/// levels 1 through 30; above 30 there is nothing further to unlock.
pub static TEAM_UNLOCKABLES: &[TeamUnlockable] = &[
    TeamUnlockable {
        level: 1,
        kind: UnlockableKind::Badge,
        name: "Founding Eleven",
        description: "Crest for teams that started the journey together",
        icon: "shield",
        value: None,
    },
    TeamUnlockable {
        level: 2,
        kind: UnlockableKind::Theme,
        name: "Classic Pitch",
        description: "Deep green home theme",
        icon: "palette",
        value: Some("#166534"),
    },
    TeamUnlockable {
        level: 3,
        kind: UnlockableKind::Celebration,
        name: "High Five",
        description: "Teammates celebrate every logged session",
        icon: "hand",
        value: None,
    },
    TeamUnlockable {
        level: 4,
        kind: UnlockableKind::Title,
        name: "Local Club",
        description: "Your first team title",
        icon: "tag",
        value: None,
    },
    TeamUnlockable {
        level: 5,
        kind: UnlockableKind::Badge,
        name: "Training Ground Regulars",
        description: "Crest for consistent weekly practice",
        icon: "calendar-check",
        value: None,
    },
    TeamUnlockable {
        level: 6,
        kind: UnlockableKind::Theme,
        name: "Away Kit",
        description: "Bold blue alternate theme",
        icon: "palette",
        value: Some("#1d4ed8"),
    },
    TeamUnlockable {
        level: 8,
        kind: UnlockableKind::Celebration,
        name: "Knee Slide",
        description: "Celebration for personal bests",
        icon: "wind",
        value: None,
    },
    TeamUnlockable {
        level: 10,
        kind: UnlockableKind::Title,
        name: "League Contenders",
        description: "Title for double-digit team levels",
        icon: "tag",
        value: None,
    },
    TeamUnlockable {
        level: 12,
        kind: UnlockableKind::Badge,
        name: "Midfield Engine",
        description: "Crest for relentless session volume",
        icon: "gauge",
        value: None,
    },
    TeamUnlockable {
        level: 14,
        kind: UnlockableKind::Theme,
        name: "Golden Boot",
        description: "Gold accent theme",
        icon: "palette",
        value: Some("#f59e0b"),
    },
    TeamUnlockable {
        level: 16,
        kind: UnlockableKind::Celebration,
        name: "Fireworks",
        description: "Full-screen celebration on level-ups",
        icon: "sparkles",
        value: None,
    },
    TeamUnlockable {
        level: 18,
        kind: UnlockableKind::Title,
        name: "Cup Finalists",
        description: "Title for teams nearing elite play",
        icon: "tag",
        value: None,
    },
    TeamUnlockable {
        level: 20,
        kind: UnlockableKind::Badge,
        name: "Century Club",
        description: "Crest for teams past 95,000 lifetime XP",
        icon: "award",
        value: None,
    },
    TeamUnlockable {
        level: 22,
        kind: UnlockableKind::Theme,
        name: "Midnight Floodlights",
        description: "Dark theme for late training sessions",
        icon: "palette",
        value: Some("#0f172a"),
    },
    TeamUnlockable {
        level: 24,
        kind: UnlockableKind::Celebration,
        name: "Trophy Lift",
        description: "The big one, reserved for streak milestones",
        icon: "trophy",
        value: None,
    },
    TeamUnlockable {
        level: 26,
        kind: UnlockableKind::Title,
        name: "National Class",
        description: "Title for the top tier of teams",
        icon: "tag",
        value: None,
    },
    TeamUnlockable {
        level: 28,
        kind: UnlockableKind::Badge,
        name: "Juggling Royalty",
        description: "Crest few teams ever earn",
        icon: "crown",
        value: None,
    },
    TeamUnlockable {
        level: 30,
        kind: UnlockableKind::Title,
        name: "Dynasty",
        description: "The final title in the catalog",
        icon: "star",
        value: None,
    },
];

/// All unlockables active at `team_level`, ascending by level. Always a
/// prefix of the catalog.
pub fn unlocked_items(team_level: u32) -> Vec<&'static TeamUnlockable> {
    TEAM_UNLOCKABLES
        .iter()
        .take_while(|item| item.level <= team_level)
        .collect()
}

/// The next unlockable strictly above `team_level`, or `None` when the
/// team is at or past the catalog's top level.
pub fn next_unlock(team_level: u32) -> Option<&'static TeamUnlockable> {
    TEAM_UNLOCKABLES
        .iter()
        .find(|item| item.level > team_level)
}
