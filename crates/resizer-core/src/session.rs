//! Per-window state: the current image, the selected size, and the load in
//! flight.
//!
//! The UI owns exactly one [`Session`]. Loading is split into
//! [`begin_load`](Session::begin_load) and
//! [`complete_load`](Session::complete_load) so the async work can run without
//! holding the session. Starting a load cancels the previous one, and a
//! completion is only accepted from the most recently started load.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::config::ResizerConfig;
use crate::error::{ResizeError, ResizeResult};
use crate::pipeline::ExportRequest;
use crate::types::{SourceImage, TargetSize};

/// The two UI states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    NoImage,
    ImageLoaded,
}

/// Identifies one load attempt.
#[derive(Debug, Clone)]
pub struct LoadTicket {
    generation: u64,
    token: CancellationToken,
}

impl LoadTicket {
    /// Fires when a newer load supersedes this one
    pub fn token(&self) -> &CancellationToken {
        &self.token
    }
}

/// What happened to a finished load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The image is now current
    Installed,
    /// A newer load started meanwhile; the result was dropped
    Superseded,
}

#[derive(Debug)]
pub struct Session {
    source: Option<Arc<SourceImage>>,
    size: TargetSize,
    generation: u64,
    in_flight: Option<LoadTicket>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(TargetSize::default())
    }
}

impl Session {
    pub fn new(size: TargetSize) -> Self {
        Self {
            source: None,
            size,
            generation: 0,
            in_flight: None,
        }
    }

    pub fn from_config(config: &ResizerConfig) -> Self {
        Self::new(config.default_size)
    }

    pub fn state(&self) -> SessionState {
        if self.source.is_some() {
            SessionState::ImageLoaded
        } else {
            SessionState::NoImage
        }
    }

    pub fn source(&self) -> Option<&Arc<SourceImage>> {
        self.source.as_ref()
    }

    pub fn target_size(&self) -> TargetSize {
        self.size
    }

    /// Change the export size. The loaded image is untouched.
    pub fn set_target_size(&mut self, size: TargetSize) {
        if self.size != size {
            tracing::debug!(from = %self.size, to = %size, "Target size changed");
        }
        self.size = size;
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Start a new load, cancelling whichever one is still running.
    pub fn begin_load(&mut self) -> LoadTicket {
        if let Some(previous) = self.in_flight.take() {
            tracing::debug!(generation = previous.generation, "Cancelling superseded load");
            previous.token.cancel();
        }

        self.generation += 1;
        let ticket = LoadTicket {
            generation: self.generation,
            token: CancellationToken::new(),
        };
        self.in_flight = Some(ticket.clone());
        ticket
    }

    /// Finish a load started with [`begin_load`](Self::begin_load).
    ///
    /// On success the image replaces the current one. Errors from the current
    /// load are returned to the caller and leave the previous image in place.
    /// Anything from a superseded ticket is dropped.
    pub fn complete_load(
        &mut self,
        ticket: &LoadTicket,
        result: ResizeResult<SourceImage>,
    ) -> ResizeResult<LoadOutcome> {
        if ticket.generation != self.generation {
            tracing::debug!(
                generation = ticket.generation,
                current = self.generation,
                "Discarding result of superseded load"
            );
            return Ok(LoadOutcome::Superseded);
        }

        self.in_flight = None;

        match result {
            Ok(image) => {
                self.source = Some(Arc::new(image));
                Ok(LoadOutcome::Installed)
            }
            Err(ResizeError::Cancelled) => Ok(LoadOutcome::Superseded),
            Err(e) => Err(e),
        }
    }

    /// Snapshot for an export, or `None` when nothing is loaded.
    pub fn export_request(&self) -> Option<ExportRequest> {
        self.source
            .as_ref()
            .map(|source| ExportRequest::new(Arc::clone(source), self.size))
    }
}
