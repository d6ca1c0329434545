use clap::Args;
use mastertouch_core::{level_from_xp, team_report, RankName};
use serde::Serialize;

#[derive(Args)]
pub struct ProgressArgs {
    /// Lifetime XP total
    #[arg(long)]
    pub xp: u32,
    /// Compute team progress instead of player progress
    #[arg(long)]
    pub team: bool,
    /// Active roster size for the team contribution breakdown
    #[arg(long, default_value_t = 0)]
    pub players: u32,
}

#[derive(Serialize)]
struct PlayerProgress {
    progress: mastertouch_core::LevelProgress,
    rank: &'static str,
    badge: mastertouch_core::RankBadge,
}

pub fn run(args: ProgressArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.team {
        let report = team_report(args.xp, args.players);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let progress = level_from_xp(args.xp);
        let rank = RankName::for_level(progress.level);
        let out = PlayerProgress {
            progress,
            rank: rank.display_name(),
            badge: rank.badge(),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    }
    Ok(())
}
