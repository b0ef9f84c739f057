//! Image Resizer Core Library
//!
//! Load an image, stretch it onto a 64×64 or 96×96 square and save it as PNG.
//!
//! ## Overview
//!
//! - [`loader`]: file bytes → [`SourceImage`] (kept as a `data:` URL)
//! - [`pipeline`]: [`SourceImage`] + [`TargetSize`] → [`ResizedArtifact`]
//! - [`download`]: [`ResizedArtifact`] → file on disk
//! - [`session`]: the single piece of mutable state the UI holds
//!
//! ## Quick Start
//!
//! ```ignore
//! use resizer_core::{DirectorySink, DownloadSink, ImageLoader, Session, TargetSize};
//!
//! let mut session = Session::default();
//! let loader = ImageLoader::default();
//!
//! let ticket = session.begin_load();
//! let file = loader.read_file("photo.jpg").await?;
//! let result = loader.load_cancellable(file, ticket.token()).await;
//! session.complete_load(&ticket, result)?;
//!
//! session.set_target_size(TargetSize::Plugin);
//! if let Some(request) = session.export_request() {
//!     let artifact = resizer_core::pipeline::export(request).await?;
//!     let path = DirectorySink::new("./out").deliver(&artifact)?; // out/resized_96x96.png
//! }
//! ```

pub mod codec;
pub mod config;
pub mod download;
pub mod error;
pub mod loader;
pub mod logging;
pub mod pipeline;
pub mod session;
pub mod types;

// Re-exports
pub use config::ResizerConfig;
pub use download::{export_to, DirectorySink, DownloadSink};
pub use error::{ResizeError, ResizeResult};
pub use loader::ImageLoader;
pub use pipeline::ExportRequest;
pub use session::{LoadOutcome, LoadTicket, Session, SessionState};
pub use types::*;
