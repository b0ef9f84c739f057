//! Core types for the Image Resizer

pub mod artifact;
pub mod data_url;
pub mod source;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ResizeError;

pub use artifact::ResizedArtifact;
pub use data_url::DataUrl;
pub use source::{PendingFile, SourceImage};

/// Edge length of the exported square.
///
/// Only two sizes are offered. The labels name what each size is meant for:
/// 64×64 server icons and 96×96 plugin icons.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetSize {
    /// 64×64
    #[default]
    Server,
    /// 96×96
    Plugin,
}

impl TargetSize {
    /// Every selectable size, in display order
    pub const ALL: [TargetSize; 2] = [TargetSize::Server, TargetSize::Plugin];

    /// Edge length in pixels
    pub fn edge(self) -> u32 {
        match self {
            TargetSize::Server => 64,
            TargetSize::Plugin => 96,
        }
    }

    /// Look up a size by its edge length
    pub fn from_edge(edge: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.edge() == edge)
    }

    /// Use-case label shown next to the dimensions
    pub fn purpose(self) -> &'static str {
        match self {
            TargetSize::Server => "Server",
            TargetSize::Plugin => "Plugin",
        }
    }

    /// Selector label, e.g. `64x64 - Server`
    pub fn label(self) -> String {
        format!("{n}x{n} - {}", self.purpose(), n = self.edge())
    }

    /// Download name for an export at this size
    pub fn file_name(self) -> String {
        format!("resized_{n}x{n}.png", n = self.edge())
    }
}

impl fmt::Display for TargetSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{n}x{n}", n = self.edge())
    }
}

impl FromStr for TargetSize {
    type Err = ResizeError;

    /// Accepts `64`, `96`, `64x64`, `96x96`, `server` or `plugin`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "server" => return Ok(TargetSize::Server),
            "plugin" => return Ok(TargetSize::Plugin),
            _ => {}
        }

        let edge = match normalized.split_once('x') {
            Some((w, h)) if w == h => w,
            Some(_) => return Err(ResizeError::InvalidTargetSize(s.to_string())),
            None => normalized.as_str(),
        };

        edge.parse::<u32>()
            .ok()
            .and_then(TargetSize::from_edge)
            .ok_or_else(|| ResizeError::InvalidTargetSize(s.to_string()))
    }
}
