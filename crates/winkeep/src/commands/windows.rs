use clap::ArgMatches;
use tracing::info;

use super::helpers::{build_controller, load_context, tr};

pub fn handle_windows_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");

    info!(event = "cli.windows_started", json_output = json_output);

    let ctx = load_context();
    let mut controller = build_controller(&ctx);
    let windows = controller.refresh_active().to_vec();

    if json_output {
        #[derive(serde::Serialize)]
        struct IndexedWindow {
            index: usize,
            #[serde(flatten)]
            window: winkeep_core::WindowHandle,
        }

        let indexed: Vec<IndexedWindow> = windows
            .iter()
            .enumerate()
            .map(|(index, window)| IndexedWindow {
                index,
                window: window.clone(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&indexed)?);
    } else if windows.is_empty() {
        println!("{}", tr(&ctx, "no_windows"));
    } else {
        println!("{}", tr(&ctx, "active_windows"));
        for (index, window) in windows.iter().enumerate() {
            println!("  [{}] {}", index, window.summary());
        }
    }

    info!(event = "cli.windows_completed", count = windows.len());

    Ok(())
}
