use clap::Args;
use mastertouch_core::XpEvent;
use serde::Serialize;

#[derive(Args)]
pub struct EventArgs {
    /// Event tag as stored by the session store (e.g. personal_best)
    #[arg(long)]
    pub kind: String,
}

#[derive(Serialize)]
struct EventReward {
    kind: String,
    event: XpEvent,
    reward: u32,
}

pub fn run(args: EventArgs) -> Result<(), Box<dyn std::error::Error>> {
    let event = XpEvent::from_tag(&args.kind);
    let out = EventReward {
        kind: args.kind,
        event,
        reward: event.reward(),
    };
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}
