// SPDX-License-Identifier: MPL-2.0
use flexi_logger::{Cleanup, Criterion, Duplicate, FileSpec, Logger, LoggerHandle, Naming};
use iced_folio::app::{self, paths, Flags};

const HELP: &str = "\
Usage: iced_folio [OPTIONS] [SOURCE]

Arguments:
  [SOURCE]  Portfolio document: a path to data.json or an http(s) URL

Options:
  --lang <LOCALE>       UI language (e.g. en-US, fr)
  --data-dir <DIR>      Directory for saved state and logs
  --config-dir <DIR>    Directory containing settings.toml
  -h, --help            Print help
";

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    Ok(Flags {
        lang: args.opt_value_from_str("--lang")?,
        data_dir: args.opt_value_from_str("--data-dir")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        source: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    })
}

/// Starts file logging with size-based rotation. Warnings are mirrored to
/// stderr. The handle must outlive the event loop.
fn init_logging() -> Option<LoggerHandle> {
    let Some(log_dir) = paths::get_log_dir() else {
        eprintln!("Failed to resolve log directory");
        return None;
    };
    if let Err(err) = std::fs::create_dir_all(&log_dir) {
        eprintln!("Failed to create log directory {}: {err}", log_dir.display());
        return None;
    }

    let logger = Logger::try_with_env_or_str("info, iced=error, wgpu_hal=error, wgpu_core=error")
        .and_then(|logger| {
            logger
                .log_to_file(
                    FileSpec::default()
                        .directory(&log_dir)
                        .basename("iced_folio")
                        .suffix("log")
                        .suppress_timestamp(),
                )
                .rotate(
                    Criterion::Size(64 * 1024),
                    Naming::Numbers,
                    Cleanup::KeepLogFiles(3),
                )
                .duplicate_to_stderr(Duplicate::Warn)
                .start()
        });

    match logger {
        Ok(handle) => Some(handle),
        Err(err) => {
            eprintln!("Failed to start logger: {err}");
            None
        }
    }
}

fn main() -> iced::Result {
    let mut flags = match parse_flags() {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("{err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    // Overrides first: the log directory lives under the data directory.
    paths::init_cli_overrides(flags.data_dir.take(), flags.config_dir.take());
    let _logger = init_logging();

    log::info!("Starting Iced Folio {}", env!("CARGO_PKG_VERSION"));
    app::run(flags)
}
