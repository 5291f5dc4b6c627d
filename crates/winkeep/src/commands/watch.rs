use clap::ArgMatches;
use tracing::info;

use winkeep_core::events::LogSink;
use winkeep_core::{EventSink, SystemControl, Watcher, WmctrlSource};

use super::helpers::{load_context, tr, PrintSink};

pub fn handle_watch_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let quiet = matches.get_flag("quiet");
    let ctx = load_context();

    info!(
        event = "cli.watch_started",
        interval_secs = ctx.config.watch.interval_secs,
        mode = ?ctx.config.apply.mode,
        quiet = quiet
    );
    if !quiet {
        println!("{}", tr(&ctx, "watch_started"));
    }

    let mut watcher = Watcher::new(
        WmctrlSource,
        SystemControl::new(ctx.config.apply.settle_delay()),
        ctx.runtime.catalog_path.clone(),
        ctx.config.apply.mode,
        ctx.config.apply.default_geometry,
    );

    // Quiet runs (e.g. under a service manager) route apply messages to
    // the structured log instead of stdout
    let mut print_sink = PrintSink;
    let mut log_sink = LogSink;
    let sink: &mut dyn EventSink = if quiet { &mut log_sink } else { &mut print_sink };

    // Runs until the process is killed
    watcher.run(ctx.config.watch.interval(), sink);

    Ok(())
}
