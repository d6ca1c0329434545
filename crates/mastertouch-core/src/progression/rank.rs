//! Rank names and display badges.
//!
//! Ranks group player levels into 7 named tiers for cosmetic display,
//! from Grassroots up to Legend. Badge lookup is fail-open: an
//! unrecognized rank string gets a neutral badge rather than an error,
//! since badges only drive cosmetic UI.

use serde::{Deserialize, Serialize};

/// Named rank tier, ordered from lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankName {
    Grassroots,
    Academy,
    RisingStar,
    FirstTeam,
    Playmaker,
    Elite,
    Legend,
}

/// Display badge for a rank: hex color plus a symbolic icon name the UI
/// layer maps to its icon set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RankBadge {
    pub color: &'static str,
    pub icon: &'static str,
}

/// Neutral badge returned for unrecognized rank names.
pub const NEUTRAL_BADGE: RankBadge = RankBadge {
    color: "#9ca3af",
    icon: "help-circle",
};

impl RankName {
    /// Rank for a player level. Total over all levels; anything above the
    /// Elite bracket (level 18) is Legend.
    pub fn for_level(level: u32) -> Self {
        match level {
            0..=3 => RankName::Grassroots,
            4..=6 => RankName::Academy,
            7..=9 => RankName::RisingStar,
            10..=12 => RankName::FirstTeam,
            13..=15 => RankName::Playmaker,
            16..=18 => RankName::Elite,
            _ => RankName::Legend,
        }
    }

    /// Position in the rank ladder (0 = Grassroots, 6 = Legend).
    pub fn order(&self) -> u8 {
        match self {
            RankName::Grassroots => 0,
            RankName::Academy => 1,
            RankName::RisingStar => 2,
            RankName::FirstTeam => 3,
            RankName::Playmaker => 4,
            RankName::Elite => 5,
            RankName::Legend => 6,
        }
    }

    /// Human-readable rank title.
    pub fn display_name(&self) -> &'static str {
        match self {
            RankName::Grassroots => "Grassroots",
            RankName::Academy => "Academy",
            RankName::RisingStar => "Rising Star",
            RankName::FirstTeam => "First Team",
            RankName::Playmaker => "Playmaker",
            RankName::Elite => "Elite",
            RankName::Legend => "Legend",
        }
    }

    /// Parse a display name back into a rank. Returns `None` for
    /// unrecognized strings; callers that need a badge anyway should use
    /// [`badge_for_name`].
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "Grassroots" => Some(RankName::Grassroots),
            "Academy" => Some(RankName::Academy),
            "Rising Star" => Some(RankName::RisingStar),
            "First Team" => Some(RankName::FirstTeam),
            "Playmaker" => Some(RankName::Playmaker),
            "Elite" => Some(RankName::Elite),
            "Legend" => Some(RankName::Legend),
            _ => None,
        }
    }

    /// Display badge for this rank.
    pub fn badge(&self) -> RankBadge {
        match self {
            RankName::Grassroots => RankBadge {
                color: "#22c55e",
                icon: "sprout",
            },
            RankName::Academy => RankBadge {
                color: "#0ea5e9",
                icon: "school",
            },
            RankName::RisingStar => RankBadge {
                color: "#8b5cf6",
                icon: "trending-up",
            },
            RankName::FirstTeam => RankBadge {
                color: "#f97316",
                icon: "shirt",
            },
            RankName::Playmaker => RankBadge {
                color: "#ef4444",
                icon: "zap",
            },
            RankName::Elite => RankBadge {
                color: "#facc15",
                icon: "medal",
            },
            RankName::Legend => RankBadge {
                color: "#d4af37",
                icon: "crown",
            },
        }
    }
}

/// Badge lookup keyed by rank display name. Unrecognized names fall back
/// to [`NEUTRAL_BADGE`] instead of failing, so a bad string from the
/// store never breaks an unrelated screen.
pub fn badge_for_name(name: &str) -> RankBadge {
    RankName::parse(name).map_or(NEUTRAL_BADGE, |rank| rank.badge())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_buckets() {
        assert_eq!(RankName::for_level(1), RankName::Grassroots);
        assert_eq!(RankName::for_level(2), RankName::Grassroots);
        assert_eq!(RankName::for_level(4), RankName::Academy);
        assert_eq!(RankName::for_level(9), RankName::RisingStar);
        assert_eq!(RankName::for_level(12), RankName::FirstTeam);
        assert_eq!(RankName::for_level(15), RankName::Playmaker);
        assert_eq!(RankName::for_level(18), RankName::Elite);
        assert_eq!(RankName::for_level(19), RankName::Legend);
        assert_eq!(RankName::for_level(20), RankName::Legend);
    }

    #[test]
    fn test_levels_above_cap_stay_legend() {
        assert_eq!(RankName::for_level(21), RankName::Legend);
        assert_eq!(RankName::for_level(1_000), RankName::Legend);
    }

    #[test]
    fn test_rank_order_monotone_in_level() {
        let mut previous = RankName::for_level(1).order();
        for level in 2..=30 {
            let order = RankName::for_level(level).order();
            assert!(order >= previous, "rank order regressed at level {level}");
            previous = order;
        }
    }

    #[test]
    fn test_display_name_round_trip() {
        let ranks = [
            RankName::Grassroots,
            RankName::Academy,
            RankName::RisingStar,
            RankName::FirstTeam,
            RankName::Playmaker,
            RankName::Elite,
            RankName::Legend,
        ];
        for rank in ranks {
            assert_eq!(RankName::parse(rank.display_name()), Some(rank));
        }
    }

    #[test]
    fn test_badge_for_known_name() {
        assert_eq!(badge_for_name("Legend"), RankName::Legend.badge());
    }

    #[test]
    fn test_badge_for_unknown_name_is_neutral() {
        let badge = badge_for_name("Intergalactic");
        assert_eq!(badge, NEUTRAL_BADGE);
        assert_eq!(badge.color, "#9ca3af");
        assert_eq!(badge.icon, "help-circle");
    }
}
