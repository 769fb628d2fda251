// SPDX-License-Identifier: MPL-2.0
use iced_starter::app::{self, Flags};
use iced_starter::navigation::LoaderParams;
use iced_starter::ui::theming::ThemePreference;
use std::process::ExitCode;
use std::time::Duration;

const HELP: &str = "\
iced_starter

USAGE:
  iced_starter [OPTIONS]

OPTIONS:
  -h, --help               Print this help message
  --lang <LOCALE>          Interface language (e.g. en-US, fr)
  --config-dir <PATH>      Directory holding settings.toml
  --theme <auto|light|dark>
                           Theme for this session; not saved
  --delay <MS>             Loader delay in milliseconds
  --text <TEXT>            Loader caption
";

fn parse_args() -> Result<Option<Flags>, String> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let lang: Option<String> = args.opt_value_from_str("--lang").map_err(|e| e.to_string())?;
    let config_dir: Option<String> = args
        .opt_value_from_str("--config-dir")
        .map_err(|e| e.to_string())?;
    let theme: Option<ThemePreference> =
        args.opt_value_from_str("--theme").map_err(|e| e.to_string())?;
    let delay_ms: Option<u64> = args.opt_value_from_str("--delay").map_err(|e| e.to_string())?;
    let text: Option<String> = args.opt_value_from_str("--text").map_err(|e| e.to_string())?;

    let remaining = args.finish();
    if !remaining.is_empty() {
        return Err(format!("unexpected arguments: {remaining:?}"));
    }

    Ok(Some(Flags {
        lang,
        theme,
        loader: LoaderParams {
            delay: delay_ms.map(Duration::from_millis),
            text,
        },
        config_dir,
    }))
}

fn main() -> ExitCode {
    env_logger::init();

    let flags = match parse_args() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(message) => {
            eprintln!("error: {message}\n\n{HELP}");
            return ExitCode::FAILURE;
        }
    };

    log::info!("Starting iced_starter {}", env!("CARGO_PKG_VERSION"));
    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            log::error!("{error}");
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}
