use clap::{Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("winkeep")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Save and restore window geometry on X11 desktops")
        .long_about(
            "winkeep remembers window positions by title and puts windows back where they \
             belong. Save a window once, then apply its geometry manually or let 'winkeep \
             watch' reposition it automatically when it reappears.",
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Suppress informational logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("windows")
                .about("List windows currently on screen")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("saved")
                .about("List saved window entries")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("save")
                .about("Save the geometry of a currently open window")
                .arg(
                    Arg::new("index")
                        .help("Index of the window in 'winkeep windows' output")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(
            Command::new("apply")
                .about("Apply a saved entry to its matching live window")
                .arg(
                    Arg::new("index")
                        .help("Index of the entry in 'winkeep saved' output")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(
            Command::new("delete")
                .about("Delete a saved entry")
                .arg(
                    Arg::new("index")
                        .help("Index of the entry in 'winkeep saved' output")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(
            Command::new("lang")
                .about("Show or change the display language")
                .arg(
                    Arg::new("code")
                        .help("Language code to switch to (e.g. 'en'); omit to show current")
                        .index(1),
                ),
        )
        .subcommand(
            Command::new("watch")
                .about("Watch for saved windows and reposition them automatically"),
        )
}
