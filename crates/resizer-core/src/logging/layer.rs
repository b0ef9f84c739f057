//! `tracing` layer that appends events to a daily JSONL file.
//!
//! The file is picked from the local date of each event, so a window left
//! open past midnight moves on to the next day's file.

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::NaiveDate;
use serde_json::{Map, Value};
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::Layer;

use super::entry::LogEntry;

/// Writes every event as one JSON object per line to
/// `<dir>/resizer-YYYY-MM-DD.jsonl`.
pub struct JsonlLayer {
    dir: PathBuf,
    out: Mutex<DayFile>,
}

/// The open file for one date
struct DayFile {
    date: NaiveDate,
    path: PathBuf,
    writer: BufWriter<File>,
}

impl DayFile {
    fn open(dir: &Path, date: NaiveDate) -> std::io::Result<Self> {
        let path = dir.join(format!("resizer-{}.jsonl", date.format("%Y-%m-%d")));
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self {
            date,
            path,
            writer: BufWriter::new(file),
        })
    }
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

impl JsonlLayer {
    pub fn new(dir: impl AsRef<Path>) -> std::io::Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;

        let out = DayFile::open(&dir, today())?;
        Ok(Self {
            dir,
            out: Mutex::new(out),
        })
    }

    /// File the most recent event went to (today's file right after `new`)
    pub fn log_path(&self) -> PathBuf {
        self.lock().path.clone()
    }

    // A poisoned lock only means another thread panicked mid-write
    fn lock(&self) -> std::sync::MutexGuard<'_, DayFile> {
        self.out.lock().unwrap_or_else(|p| p.into_inner())
    }

    fn append(&self, entry: &LogEntry, date: NaiveDate) -> std::io::Result<()> {
        let line = entry.to_line().map_err(std::io::Error::other)?;
        let mut out = self.lock();
        if out.date != date {
            out.writer.flush()?;
            *out = DayFile::open(&self.dir, date)?;
        }
        writeln!(out.writer, "{}", line)?;
        out.writer.flush()
    }
}

impl<S> Layer<S> for JsonlLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
        let meta = event.metadata();

        let mut fields = FieldCollector::default();
        event.record(&mut fields);

        let mut entry = LogEntry::now(
            &meta.level().as_str().to_ascii_lowercase(),
            meta.target(),
            fields.message.unwrap_or_default(),
        );
        entry.fields = fields.values;
        entry.span = ctx.event_scope(event).map(|scope| {
            scope
                .from_root()
                .map(|span| span.name())
                .collect::<Vec<_>>()
                .join(" > ")
        });

        // Logging must never take the app down
        let _ = self.append(&entry, today());
    }
}

#[derive(Default)]
struct FieldCollector {
    message: Option<String>,
    values: Map<String, Value>,
}

impl FieldCollector {
    fn put(&mut self, field: &Field, value: Value) {
        if field.name() == "message" {
            self.message = Some(match value {
                Value::String(s) => s,
                other => other.to_string(),
            });
        } else {
            self.values.insert(field.name().to_string(), value);
        }
    }
}

impl Visit for FieldCollector {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.put(field, Value::String(format!("{:?}", value)));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.put(field, Value::from(value));
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.put(field, Value::from(value));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.put(field, Value::from(value));
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.put(field, Value::from(value));
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        self.put(field, Value::from(value));
    }

    fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
        self.put(field, Value::String(value.to_string()));
    }
}
