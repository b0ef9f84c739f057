use dioxus::prelude::*;

use crate::context::{use_status, Notice};

/// Last save location or error
#[component]
pub fn StatusLine() -> Element {
    let status = use_status();

    let notice = status.read().notice.clone();
    match notice {
        Notice::None => rsx! {},
        Notice::Saved(path) => rsx! {
            p { class: "status status--saved", "Saved to {path.display()}" }
        },
        Notice::Error(message) => rsx! {
            p { class: "status status--error", "⚠️ {message}" }
        },
    }
}
