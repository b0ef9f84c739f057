//! The one page: drop an image, pick a size, download.

use dioxus::prelude::*;

use crate::components::{DownloadButton, DropZone, SizeSelector, StatusLine};

#[component]
pub fn Resizer() -> Element {
    rsx! {
        main { class: "resizer",
            div { class: "resizer-card",
                h1 { class: "page-title", "Image Resizer" }

                DropZone {}

                div { class: "resizer-controls",
                    SizeSelector {}
                    DownloadButton {}
                }

                StatusLine {}
            }
        }
    }
}
