//! Page components for the Image Resizer.

mod resizer;

pub use resizer::Resizer;
