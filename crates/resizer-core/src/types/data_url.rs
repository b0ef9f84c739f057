//! `data:` URL encoding for loaded images.
//!
//! The webview renders the preview straight from this string, and the export
//! pipeline decodes it back into pixels.

use base64::Engine;

use crate::error::{ResizeError, ResizeResult};

const SCHEME: &str = "data:";
const BASE64_MARKER: &str = ";base64";

/// A base64 `data:` URL, e.g. `data:image/png;base64,iVBORw0KG...`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUrl {
    url: String,
    mime_len: usize,
}

impl DataUrl {
    /// Encode raw bytes under the given MIME type
    pub fn from_bytes(mime: &str, bytes: &[u8]) -> Self {
        let payload = base64::engine::general_purpose::STANDARD.encode(bytes);
        let url = format!("{SCHEME}{mime}{BASE64_MARKER},{payload}");
        Self {
            url,
            mime_len: mime.len(),
        }
    }

    /// MIME type from the header (may be empty)
    pub fn mime(&self) -> &str {
        &self.url[SCHEME.len()..SCHEME.len() + self.mime_len]
    }

    /// The full URL, suitable for an `img` `src`
    pub fn as_str(&self) -> &str {
        &self.url
    }

    fn payload(&self) -> &str {
        let start = SCHEME.len() + self.mime_len + BASE64_MARKER.len() + 1;
        &self.url[start..]
    }

    /// Decode the base64 payload back into bytes
    pub fn decode_payload(&self) -> ResizeResult<Vec<u8>> {
        base64::engine::general_purpose::STANDARD
            .decode(self.payload())
            .map_err(|e| ResizeError::InvalidDataUrl(format!("bad base64 payload: {}", e)))
    }

}
