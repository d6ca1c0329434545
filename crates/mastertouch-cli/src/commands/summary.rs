use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Args;
use mastertouch_core::{player_summary, records_from_file, PracticeHistory};

#[derive(Args)]
pub struct SummaryArgs {
    /// JSON session export (array of {practiced_on, xp_earned} rows)
    #[arg(long)]
    pub file: PathBuf,
    /// Reference day (defaults to the local calendar day)
    #[arg(long)]
    pub today: Option<NaiveDate>,
}

pub fn run(args: SummaryArgs) -> Result<(), Box<dyn std::error::Error>> {
    let records = records_from_file(&args.file)?;
    let history = PracticeHistory::from_records(&records);
    let summary = player_summary(&history, super::reference_day(args.today));
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
