use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "mastertouch-cli", version, about = "Master Touch progression CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Player or team level progress from an XP total
    Progress(commands::progress::ProgressArgs),
    /// Streak state from a session export
    Streak(commands::streak::StreakArgs),
    /// XP reward for an event tag
    Event(commands::event::EventArgs),
    /// Unlocked and next team unlockables for a team level
    Unlocks(commands::unlocks::UnlocksArgs),
    /// Full player summary from a session export
    Summary(commands::summary::SummaryArgs),
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Progress(args) => commands::progress::run(args),
        Commands::Streak(args) => commands::streak::run(args),
        Commands::Event(args) => commands::event::run(args),
        Commands::Unlocks(args) => commands::unlocks::run(args),
        Commands::Summary(args) => commands::summary::run(args),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
