use clap::ArgMatches;
use tracing::{error, info};

use winkeep_core::CommandOutcome;
use winkeep_core::events;

use super::helpers::{build_controller, load_context, parse_index, PrintSink};

pub fn handle_delete_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let index = parse_index(matches)?;

    info!(event = "cli.delete_started", index = index);

    let ctx = load_context();
    let mut controller = build_controller(&ctx);

    match controller.delete_selected(index, &mut PrintSink) {
        Ok(CommandOutcome::NoSelection) => {
            eprintln!("No saved entry at index {}", index);
            error!(event = "cli.delete_invalid_index", index = index);
            Err("No saved entry at that index".into())
        }
        Ok(outcome) => {
            info!(event = "cli.delete_completed", outcome = %outcome);
            Ok(())
        }
        Err(e) => {
            eprintln!("Failed to delete entry: {}", e);
            error!(
                event = "cli.delete_failed",
                error = %e
            );
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}
