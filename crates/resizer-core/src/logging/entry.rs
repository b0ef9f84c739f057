//! One line of the JSONL log.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// RFC 3339 timestamp with milliseconds, UTC
    pub ts: String,
    pub level: String,
    /// Module path that emitted the event
    pub target: String,
    pub msg: String,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub fields: Map<String, Value>,
    /// Enclosing spans, outermost first, joined with ` > `
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub span: Option<String>,
}

impl LogEntry {
    pub fn now(level: &str, target: &str, msg: impl Into<String>) -> Self {
        Self {
            ts: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            level: level.to_string(),
            target: target.to_string(),
            msg: msg.into(),
            fields: Map::new(),
            span: None,
        }
    }

    pub fn to_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_line(line: &str) -> serde_json::Result<Self> {
        serde_json::from_str(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_omits_empty_parts() {
        let entry = LogEntry::now("info", "resizer_core::loader", "Image loaded");
        let line = entry.to_line().unwrap();

        assert!(line.contains("\"msg\":\"Image loaded\""));
        assert!(!line.contains("fields"));
        assert!(!line.contains("span"));
        assert_eq!(LogEntry::from_line(&line).unwrap(), entry);
    }
}
