use clap::Args;
use mastertouch_core::{next_unlock, unlocked_items, TeamUnlockable};
use serde::Serialize;

#[derive(Args)]
pub struct UnlocksArgs {
    /// Current team level
    #[arg(long)]
    pub level: u32,
}

#[derive(Serialize)]
struct UnlockReport {
    team_level: u32,
    unlocked: Vec<&'static TeamUnlockable>,
    next: Option<&'static TeamUnlockable>,
}

pub fn run(args: UnlocksArgs) -> Result<(), Box<dyn std::error::Error>> {
    let out = UnlockReport {
        team_level: args.level,
        unlocked: unlocked_items(args.level),
        next: next_unlock(args.level),
    };
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}
