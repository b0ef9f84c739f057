//! UI Components for the Image Resizer.

mod download_button;
mod drop_zone;
mod size_selector;
mod status_line;

pub use download_button::DownloadButton;
pub use drop_zone::DropZone;
pub use size_selector::SizeSelector;
pub use status_line::StatusLine;
