use std::sync::Once;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Logging level for all Javelin crates, or a full `EnvFilter` directive string.
    #[serde(default = "LoggingConfig::default_level")]
    pub level: String,

    /// Emit logs in JSON format.
    #[serde(default)]
    pub json: bool,

    /// Write logs to stderr. When disabled, events are filtered but discarded.
    #[serde(default = "LoggingConfig::default_stderr")]
    pub stderr: bool,
}

impl LoggingConfig {
    const DEFAULT_LEVEL: &'static str = "info";

    fn default_level() -> String {
        Self::DEFAULT_LEVEL.to_owned()
    }

    fn default_stderr() -> bool {
        true
    }

    /// The configured level as `EnvFilter` directives. Bare level names are case-insensitive and
    /// `warning` is accepted for `warn`.
    pub(crate) fn directives(level: &str) -> String {
        let level = level.trim();
        if level.is_empty() {
            return Self::default_level();
        }
        if level.eq_ignore_ascii_case("warning") {
            return LevelFilter::WARN.to_string();
        }
        match level.parse::<LevelFilter>() {
            Ok(filter) => filter.to_string(),
            Err(_) => level.to_owned(),
        }
    }

    /// The effective filter: configured directives, with `RUST_LOG` appended when set.
    ///
    /// An unparseable `RUST_LOG` is used on its own if it parses alone; otherwise the configured
    /// level applies, falling back to `info`.
    pub fn env_filter(&self) -> EnvFilter {
        let configured = Self::directives(&self.level);
        let from_env = std::env::var("RUST_LOG")
            .ok()
            .filter(|value| !value.trim().is_empty());

        let candidates = match &from_env {
            Some(env) => vec![format!("{configured},{}", env.trim()), env.trim().to_owned()],
            None => Vec::new(),
        };
        candidates
            .into_iter()
            .chain(std::iter::once(configured))
            .find_map(|directives| EnvFilter::try_new(directives).ok())
            .unwrap_or_else(|| EnvFilter::default().add_directive(LevelFilter::INFO.into()))
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Self::default_level(),
            json: false,
            stderr: Self::default_stderr(),
        }
    }
}

/// Installs a global `tracing` subscriber built from `config`.
///
/// Only the first call in a process has an effect. Returns whether this call installed the
/// subscriber.
pub fn init_tracing(config: &LoggingConfig) -> bool {
    let mut installed = false;
    INIT.call_once(|| {
        installed = install(config);
    });
    installed
}

fn install(config: &LoggingConfig) -> bool {
    let make_writer = if !config.stderr {
        BoxMakeWriter::new(std::io::sink)
    } else if cfg!(debug_assertions) {
        // Keeps `cargo test` output captured.
        BoxMakeWriter::new(tracing_subscriber::fmt::writer::TestWriter::with_stderr)
    } else {
        BoxMakeWriter::new(std::io::stderr)
    };

    let subscriber = tracing_subscriber::registry().with(config.env_filter());
    let fmt = tracing_subscriber::fmt::layer().with_writer(make_writer);
    let installed = if config.json {
        subscriber.with(fmt.json().with_ansi(false)).try_init()
    } else {
        subscriber.with(fmt).try_init()
    };
    installed.is_ok()
}
