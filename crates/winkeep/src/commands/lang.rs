use clap::ArgMatches;
use tracing::{error, info};

use winkeep_core::events;

use super::helpers::{build_controller, load_context, tr};

pub fn handle_lang_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let ctx = load_context();

    let Some(code) = matches.get_one::<String>("code") else {
        println!("{}: {}", tr(&ctx, "current_language"), ctx.lang);
        println!(
            "{}: {}",
            tr(&ctx, "available_languages"),
            ctx.translations.languages().join(", ")
        );
        return Ok(());
    };

    info!(event = "cli.lang_started", code = code);

    if !ctx.translations.has_language(code) {
        // Still persisted: lookup falls back to the default language, and
        // a translation file dropped in later picks the setting up
        println!("{}: {}", tr(&ctx, "unknown_language"), code);
    }

    let controller = build_controller(&ctx);
    match controller.change_language(code) {
        Ok(outcome) => {
            println!("{}", outcome);
            info!(event = "cli.lang_completed", code = code);
            Ok(())
        }
        Err(e) => {
            eprintln!("Failed to change language: {}", e);
            error!(
                event = "cli.lang_failed",
                error = %e
            );
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}
