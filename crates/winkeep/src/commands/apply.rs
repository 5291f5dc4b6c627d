use clap::ArgMatches;
use tracing::{error, info};

use winkeep_core::CommandOutcome;

use super::helpers::{build_controller, load_context, parse_index, PrintSink};

pub fn handle_apply_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let index = parse_index(matches)?;

    info!(event = "cli.apply_started", index = index);

    let ctx = load_context();
    let mut controller = build_controller(&ctx);

    match controller.apply_selected(index, &mut PrintSink) {
        CommandOutcome::NoSelection => {
            eprintln!("No saved entry at index {}", index);
            error!(event = "cli.apply_invalid_index", index = index);
            Err("No saved entry at that index".into())
        }
        CommandOutcome::ApplyFailed { message } => {
            error!(event = "cli.apply_failed", message = %message);
            Err(message.into())
        }
        outcome => {
            // Applied, or the target is simply not on screen right now
            info!(event = "cli.apply_completed", outcome = %outcome);
            Ok(())
        }
    }
}
