// SPDX-License-Identifier: MPL-2.0
use iced_folio::app::{self, paths, Flags};
use iced_folio::diagnostics;
use iced_folio::ui::theming::ThemePreference;

const USAGE: &str = "Usage: iced_folio [--config-dir DIR] [--theme light|dark]";

fn parse_theme(raw: &str) -> Result<ThemePreference, String> {
    ThemePreference::parse(raw).ok_or_else(|| format!("invalid theme `{raw}`, expected light or dark"))
}

fn main() -> iced::Result {
    diagnostics::init_logging();
    diagnostics::install_panic_hook();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        println!("{USAGE}");
        return Ok(());
    }

    let config_dir: Option<String> = match args.opt_value_from_str("--config-dir") {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!("ignoring --config-dir: {err}");
            None
        }
    };
    let theme = match args.opt_value_from_fn("--theme", parse_theme) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!("ignoring --theme: {err}");
            None
        }
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }

    paths::init_cli_override(config_dir.clone());

    app::run(Flags { config_dir, theme })
}
