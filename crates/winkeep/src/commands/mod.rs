use clap::ArgMatches;
use tracing::error;

use winkeep_core::events;

pub mod helpers;

mod apply;
mod delete;
mod lang;
mod save;
mod saved;
mod watch;
mod windows;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    match matches.subcommand() {
        Some(("windows", sub_matches)) => windows::handle_windows_command(sub_matches),
        Some(("saved", sub_matches)) => saved::handle_saved_command(sub_matches),
        Some(("save", sub_matches)) => save::handle_save_command(sub_matches),
        Some(("apply", sub_matches)) => apply::handle_apply_command(sub_matches),
        Some(("delete", sub_matches)) => delete::handle_delete_command(sub_matches),
        Some(("lang", sub_matches)) => lang::handle_lang_command(sub_matches),
        Some(("watch", sub_matches)) => watch::handle_watch_command(sub_matches),
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    }
}
