//! Logging setup.
//!
//! Console output through `tracing_subscriber::fmt`, filtered by `RUST_LOG`
//! (or the builder's default filter), plus an optional JSONL file:
//!
//! ```text
//! <log-dir>/resizer-2026-10-17.jsonl
//! {"ts":"2026-10-17T09:12:03.114Z","level":"info","target":"resizer_core::loader","msg":"Image loaded","fields":{"file":"cat.jpg","width":200,"height":100}}
//! ```
//!
//! ```ignore
//! use resizer_core::logging::LoggingBuilder;
//!
//! LoggingBuilder::new()
//!     .with_jsonl_dir("./logs")
//!     .init()?;
//! ```

pub mod entry;
pub mod layer;

use std::path::PathBuf;

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

pub use entry::LogEntry;
pub use layer::JsonlLayer;

/// Filter used when `RUST_LOG` is not set
pub const DEFAULT_FILTER: &str = "resizer=info,resizer_core=info";

pub struct LoggingBuilder {
    filter: String,
    console: bool,
    jsonl_dir: Option<PathBuf>,
}

impl Default for LoggingBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggingBuilder {
    pub fn new() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            console: true,
            jsonl_dir: None,
        }
    }

    /// Fallback filter directive when `RUST_LOG` is unset
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }

    pub fn no_console(mut self) -> Self {
        self.console = false;
        self
    }

    /// Also append JSONL entries under `dir`
    pub fn with_jsonl_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.jsonl_dir = Some(dir.into());
        self
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.filter))
    }

    /// Install the global subscriber. Returns the JSONL path when file logging
    /// is on.
    pub fn init(self) -> std::io::Result<Option<PathBuf>> {
        let jsonl = self.jsonl_dir.as_ref().map(JsonlLayer::new).transpose()?;
        let jsonl_path = jsonl.as_ref().map(JsonlLayer::log_path);
        let console = self.console.then(tracing_subscriber::fmt::layer);

        tracing_subscriber::registry()
            .with(self.env_filter())
            .with(console)
            .with(jsonl)
            .try_init()
            .map_err(std::io::Error::other)?;

        Ok(jsonl_path)
    }
}
