//! Export output.

use super::TargetSize;

pub const PNG_CONTENT_TYPE: &str = "image/png";

/// PNG bytes produced by one export.
///
/// Never cached: each export builds a fresh artifact and drops it once the
/// download sink has taken it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizedArtifact {
    size: TargetSize,
    bytes: Vec<u8>,
}

impl ResizedArtifact {
    pub(crate) fn new(size: TargetSize, bytes: Vec<u8>) -> Self {
        Self { size, bytes }
    }

    pub fn size(&self) -> TargetSize {
        self.size
    }

    /// `resized_{N}x{N}.png`
    pub fn file_name(&self) -> String {
        self.size.file_name()
    }

    pub fn content_type(&self) -> &'static str {
        PNG_CONTENT_TYPE
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}
