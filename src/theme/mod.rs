//! Visual theme for the Image Resizer.

mod styles;

pub use styles::GLOBAL_STYLES;
