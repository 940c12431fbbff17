//! Tracing subscriber initialisation.
//!
//! Only the CLI crate calls [`init_logging`]; `ecs-image-core` and the
//! adapters only *emit* spans and events. Logs always go to stderr so that
//! stdout stays reserved for reports.
//!
//! | Flag(s)  | Level for ecs-image crates |
//! |----------|----------------------------|
//! | (none)   | WARN                       |
//! | `-v`     | INFO                       |
//! | `-vv`    | DEBUG                      |
//! | `-vvv`   | TRACE                      |
//! | `--quiet`| ERROR                      |
//!
//! `RUST_LOG` overrides the table. With `--output-format json` log lines are
//! JSON objects too, so a pipeline can parse both streams.

use std::io::{self, IsTerminal as _};

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{GlobalArgs, OutputFormat};

/// Crates whose level follows `-v` / `-q`; dependencies stay at WARN.
const OWN_CRATES: [&str; 3] = ["ecs_image", "ecs_image_core", "ecs_image_adapters"];

/// What the subscriber should look like, derived from the global flags.
#[derive(Debug, Clone, PartialEq, Eq)]
struct LogSettings {
    level: &'static str,
    json: bool,
    ansi: bool,
}

impl LogSettings {
    fn from_args(args: &GlobalArgs, stderr_is_tty: bool) -> Self {
        let level = if args.quiet {
            "error"
        } else {
            match args.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        };
        let json = args.output_format == OutputFormat::Json;

        Self {
            level,
            json,
            ansi: !json && !args.no_color && stderr_is_tty,
        }
    }

    fn directives(&self) -> String {
        OWN_CRATES
            .iter()
            .fold(String::from("warn"), |mut acc, krate| {
                acc.push_str(&format!(",{krate}={}", self.level));
                acc
            })
    }
}

/// Initialise the global tracing subscriber. Call once, before any event.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let settings = LogSettings::from_args(args, io::stderr().is_terminal());
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(settings.directives()))?;

    let registry = tracing_subscriber::registry().with(filter);
    let result = if settings.json {
        registry
            .with(fmt::layer().json().with_writer(io::stderr))
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_ansi(settings.ansi)
                    .with_writer(io::stderr),
            )
            .try_init()
    };

    result.map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))
}
