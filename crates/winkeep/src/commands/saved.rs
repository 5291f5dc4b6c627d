use clap::ArgMatches;
use tracing::info;

use super::helpers::{build_controller, load_context, tr};

pub fn handle_saved_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");

    info!(event = "cli.saved_started", json_output = json_output);

    let ctx = load_context();
    let controller = build_controller(&ctx);
    let entries = controller.refresh_saved();

    if json_output {
        #[derive(serde::Serialize)]
        struct IndexedEntry {
            index: usize,
            #[serde(flatten)]
            entry: winkeep_core::SavedGeometry,
        }

        let indexed: Vec<IndexedEntry> = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| IndexedEntry {
                index,
                entry: entry.clone(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&indexed)?);
    } else if entries.is_empty() {
        println!("{}", tr(&ctx, "no_saved"));
    } else {
        println!("{}", tr(&ctx, "saved_windows"));
        for (index, entry) in entries.iter().enumerate() {
            println!("  [{}] {}", index, entry.summary());
        }
    }

    info!(event = "cli.saved_completed", count = entries.len());

    Ok(())
}
