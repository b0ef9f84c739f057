//! Session context for the Image Resizer window.
//!
//! The App component owns the [`Session`] and the status line, and hands them
//! to every component through `use_context`.
//!
//! ## Usage
//!
//! ```ignore
//! let mut session = use_session();
//! session.write().set_target_size(TargetSize::Plugin);
//! ```

use std::path::PathBuf;

use dioxus::prelude::*;
use resizer_core::{
    ImageLoader, LoadOutcome, LoadTicket, PendingFile, ResizeResult, ResizerConfig, Session,
};

/// Get the configuration for the application.
pub fn get_config() -> ResizerConfig {
    crate::get_config()
}

/// Message under the controls.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Notice {
    #[default]
    None,
    Saved(PathBuf),
    Error(String),
}

/// UI status: whether an export is running, plus the current notice.
///
/// The export flag only changes through `export_started`/`export_finished`,
/// so a load finishing mid-export leaves the Download button disabled.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Status {
    pub exporting: bool,
    pub notice: Notice,
}

impl Status {
    pub fn export_started(&mut self) {
        self.exporting = true;
    }

    pub fn export_finished(&mut self, result: ResizeResult<PathBuf>) {
        self.exporting = false;
        self.notice = match result {
            Ok(path) => Notice::Saved(path),
            Err(e) => Notice::Error(format!("Export failed: {}", e)),
        };
    }

    pub fn load_finished(&mut self, outcome: &ResizeResult<LoadOutcome>) {
        match outcome {
            Ok(LoadOutcome::Installed) => self.notice = Notice::None,
            Ok(LoadOutcome::Superseded) => {}
            Err(e) => self.notice = Notice::Error(format!("Failed to load image: {}", e)),
        }
    }
}

/// Hook to access the session from context.
pub fn use_session() -> Signal<Session> {
    use_context::<Signal<Session>>()
}

/// Hook to access the status line from context.
pub fn use_status() -> Signal<Status> {
    use_context::<Signal<Status>>()
}

/// Hook to access the configuration from context.
pub fn use_config() -> ResizerConfig {
    use_context::<ResizerConfig>()
}

/// Finish a load started with `Session::begin_load`.
///
/// Both the drop target and the file dialog end up here. Errors go to the
/// status line; results from superseded loads are ignored.
pub async fn finish_load(
    mut session: Signal<Session>,
    mut status: Signal<Status>,
    loader: ImageLoader,
    ticket: LoadTicket,
    file: ResizeResult<PendingFile>,
) {
    let result = match file {
        Ok(file) => loader.load_cancellable(file, ticket.token()).await,
        Err(e) => Err(e),
    };

    let outcome = session.write().complete_load(&ticket, result);
    if let Err(e) = &outcome {
        tracing::warn!(error = %e, "Failed to load image");
    }
    status.write().load_finished(&outcome);
}

#[cfg(test)]
mod tests {
    use super::*;
    use resizer_core::ResizeError;

    #[test]
    fn test_load_during_export_keeps_button_disabled() {
        let mut status = Status::default();
        status.export_started();

        status.load_finished(&Ok(LoadOutcome::Installed));
        assert!(status.exporting);

        status.load_finished(&Err(ResizeError::EmptyFile("a.png".to_string())));
        assert!(status.exporting);
        assert!(matches!(status.notice, Notice::Error(_)));

        status.export_finished(Ok(PathBuf::from("/tmp/resized_64x64.png")));
        assert!(!status.exporting);
        assert_eq!(
            status.notice,
            Notice::Saved(PathBuf::from("/tmp/resized_64x64.png"))
        );
    }

    #[test]
    fn test_installed_load_clears_notice() {
        let mut status = Status {
            exporting: false,
            notice: Notice::Error("Export failed: disk full".to_string()),
        };
        status.load_finished(&Ok(LoadOutcome::Installed));
        assert_eq!(status, Status::default());
    }

    #[test]
    fn test_superseded_load_changes_nothing() {
        let mut status = Status::default();
        status.export_finished(Ok(PathBuf::from("out.png")));
        let before = status.clone();

        status.load_finished(&Ok(LoadOutcome::Superseded));
        assert_eq!(status, before);
    }

    #[test]
    fn test_failed_export_reenables_button() {
        let mut status = Status::default();
        status.export_started();
        status.export_finished(Err(ResizeError::Download("disk full".to_string())));

        assert!(!status.exporting);
        assert_eq!(
            status.notice,
            Notice::Error("Export failed: Download failed: disk full".to_string())
        );
    }
}
