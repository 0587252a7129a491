// SPDX-License-Identifier: MPL-2.0
use env_logger::{Builder, Target};
use log::LevelFilter;
use pull_refresh::app::{self, paths, Flags};

const HELP: &str = "\
pull_refresh - cat of the day, pull down to refresh

USAGE:
  pull_refresh [OPTIONS]

OPTIONS:
  --lang <id>          UI language (e.g. en-US, fr)
  --threshold <px>     Pull distance that starts a refresh
  --config-dir <dir>   Directory holding settings.toml
  --i18n-dir <dir>     Directory with extra or replacement .ftl files
  -h, --help           Print this help
";

fn init_logger() {
    Builder::new()
        .target(Target::Stdout)
        .filter_level(LevelFilter::Warn)
        .filter_module("pull_refresh", LevelFilter::Debug)
        .init();
}

fn parse_flags(mut args: pico_args::Arguments) -> Result<Option<Flags>, pico_args::Error> {
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        threshold: args.opt_value_from_str("--threshold")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        i18n_dir: args.opt_value_from_str("--i18n-dir")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        log::warn!("Ignoring unexpected arguments: {rest:?}");
    }

    Ok(Some(flags))
}

fn main() -> iced::Result {
    if std::env::var("RUST_LOG").is_err() {
        init_logger();
    } else {
        env_logger::init();
    }

    let flags = match parse_flags(pico_args::Arguments::from_env()) {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.config_dir.clone());
    app::run(flags)
}
