// SPDX-License-Identifier: MPL-2.0
use dropdesk::app::{self, paths, Flags};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const HELP: &str = "\
DropDesk

USAGE:
  dropdesk [OPTIONS]

OPTIONS:
  --lang <LOCALE>        Interface language (e.g. en-US, fr)
  --i18n-dir <DIR>       Directory with .ftl files overriding the built-in ones
  --config-dir <DIR>     Directory holding settings.toml
  --field-name <NAME>    Form field name of the drop zone
  --required             Mark the drop zone field as required
  -h, --help             Print this help

ENVIRONMENT:
  DROPDESK_CONFIG_DIR    Config directory, overridden by --config-dir
  RUST_LOG               Log filter (default: dropdesk=info)
";

fn main() -> iced::Result {
    init_logging();

    let flags = match parse_args(pico_args::Arguments::from_env()) {
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

/// Parses command line arguments. Returns `Ok(None)` when help was requested.
fn parse_args(mut args: pico_args::Arguments) -> Result<Option<Flags>, pico_args::Error> {
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        i18n_dir: args.opt_value_from_str("--i18n-dir")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        field_name: args.opt_value_from_str("--field-name")?,
        required: args.contains("--required"),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        return Err(pico_args::Error::UnusedArgsLeft(
            remaining
                .iter()
                .map(|arg| arg.to_string_lossy().into_owned())
                .collect(),
        ));
    }

    Ok(Some(flags))
}

/// Initialize logging with tracing.
fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("dropdesk=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
