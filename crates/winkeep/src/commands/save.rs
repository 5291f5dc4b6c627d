use clap::ArgMatches;
use tracing::{error, info};

use winkeep_core::CommandOutcome;
use winkeep_core::events;

use super::helpers::{build_controller, load_context, parse_index, PrintSink};

pub fn handle_save_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let index = parse_index(matches)?;

    info!(event = "cli.save_started", index = index);

    let ctx = load_context();
    let mut controller = build_controller(&ctx);
    // Indices refer to the live list, so enumerate before resolving
    controller.refresh_active();

    match controller.save_selected(index, &mut PrintSink) {
        Ok(CommandOutcome::NoSelection) => {
            eprintln!("No window at index {}", index);
            error!(event = "cli.save_invalid_index", index = index);
            Err("No window at that index".into())
        }
        Ok(outcome) => {
            info!(event = "cli.save_completed", outcome = %outcome);
            Ok(())
        }
        Err(e) => {
            eprintln!("Failed to save window: {}", e);
            error!(
                event = "cli.save_failed",
                error = %e
            );
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}
