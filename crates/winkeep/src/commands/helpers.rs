use clap::ArgMatches;
use tracing::warn;

use winkeep_core::config::loading::load_config;
use winkeep_core::{
    Config, Controller, EventSink, Settings, SystemControl, Translations, WinkeepConfig,
    WmctrlSource,
};
use winkeep_core::i18n::settings::load_settings;

/// Everything a command handler needs: resolved paths, parsed config,
/// translation tables and the active display language.
pub struct CliContext {
    pub runtime: Config,
    pub config: WinkeepConfig,
    pub translations: Translations,
    pub lang: String,
}

pub fn load_context() -> CliContext {
    let runtime = Config::default();
    let config = load_config_with_warning(&runtime);
    let runtime = runtime.with_overrides(&config.paths);
    let translations = Translations::load(&runtime.translations_dir);
    let Settings { lang } = load_settings(&runtime.settings_path);
    CliContext {
        runtime,
        config,
        translations,
        lang,
    }
}

/// Load the TOML config, falling back to defaults on any error so a broken
/// config file never makes the CLI unusable.
pub fn load_config_with_warning(runtime: &Config) -> WinkeepConfig {
    match load_config(runtime) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: using default config: {}", e);
            warn!(
                event = "cli.config_load_failed",
                error = %e
            );
            WinkeepConfig::default()
        }
    }
}

pub fn build_controller(ctx: &CliContext) -> Controller<WmctrlSource, SystemControl> {
    Controller::new(
        WmctrlSource,
        SystemControl::new(ctx.config.apply.settle_delay()),
        &ctx.runtime,
        &ctx.config,
    )
}

/// Translated label for the active language.
pub fn tr(ctx: &CliContext, key: &str) -> String {
    ctx.translations.lookup(&ctx.lang, key)
}

pub fn parse_index(matches: &ArgMatches) -> Result<usize, Box<dyn std::error::Error>> {
    let raw = matches
        .get_one::<String>("index")
        .ok_or("Index argument is required")?;
    raw.parse::<usize>()
        .map_err(|_| format!("Invalid index '{}': expected a non-negative number", raw).into())
}

/// Sink that relays core events to the user on stdout.
pub struct PrintSink;

impl EventSink for PrintSink {
    fn on_event(&mut self, message: &str) {
        println!("{}", message);
    }
}
