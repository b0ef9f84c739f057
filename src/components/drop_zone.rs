//! Drop target and preview.
//!
//! Accepts a dropped file, or opens the native file dialog on click. Once an
//! image is loaded it is shown inside the zone, which is sized to the selected
//! target so the preview shows how much of the source fits the square.

use std::path::Path;
use std::sync::Arc;

use dioxus::html::{FileEngine, HasFileData};
use dioxus::prelude::*;
use resizer_core::{ImageLoader, PendingFile, ResizeError, ResizeResult};
use rfd::FileDialog;

use crate::context::{finish_load, use_config, use_session, use_status};

/// Extensions offered by the file dialog
pub const IMAGE_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "gif", "bmp", "webp"];

/// Read the first dropped file through the webview's file engine
async fn read_dropped(engine: Arc<dyn FileEngine>, path: String) -> ResizeResult<PendingFile> {
    let name = Path::new(&path)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.clone());

    match engine.read_file(&path).await {
        Some(bytes) => Ok(PendingFile::new(name, bytes)),
        None => Err(ResizeError::Io(std::io::Error::other(format!(
            "could not read dropped file {}",
            name
        )))),
    }
}

#[component]
pub fn DropZone() -> Element {
    let config = use_config();
    let loader = ImageLoader::from_config(&config);
    let mut session = use_session();
    let status = use_status();
    let mut hovered = use_signal(|| false);

    let on_drop = move |evt: DragEvent| {
        evt.prevent_default();
        hovered.set(false);

        let Some(engine) = evt.files() else {
            return;
        };
        let Some(path) = engine.files().into_iter().next() else {
            return;
        };

        tracing::debug!(file = %path, "File dropped");
        let ticket = session.write().begin_load();
        spawn(async move {
            let file = read_dropped(engine, path).await;
            finish_load(session, status, loader, ticket, file).await;
        });
    };

    let on_click = move |_| {
        spawn(async move {
            // Dialog blocks, so keep it off the UI thread
            let picked = tokio::task::spawn_blocking(|| {
                FileDialog::new()
                    .add_filter("images", &IMAGE_EXTENSIONS)
                    .set_title("Select Image")
                    .pick_file()
            })
            .await;

            let path = match picked {
                Ok(Some(path)) => path,
                // User cancelled
                Ok(None) => return,
                Err(e) => {
                    tracing::error!("File picker error: {}", e);
                    return;
                }
            };

            tracing::debug!(file = %path.display(), "File picked");
            let ticket = session.write().begin_load();
            let file = loader.read_file(&path).await;
            finish_load(session, status, loader, ticket, file).await;
        });
    };

    let current = session.read();
    let edge = current.target_size().edge();
    let loading = current.is_loading();
    let preview = current.source().map(|source| {
        (
            source.data_url().as_str().to_string(),
            source.name().to_string(),
        )
    });
    drop(current);

    let mut class = String::from("drop-zone");
    if preview.is_some() {
        class.push_str(" drop-zone--loaded");
    }
    if hovered() {
        class.push_str(" drop-zone--hover");
    }
    let style = if preview.is_some() {
        format!("width: {edge}px; height: {edge}px;")
    } else {
        String::new()
    };

    rsx! {
        div {
            class: "{class}",
            style: "{style}",
            title: "Click or drop an image",
            ondragover: move |evt: DragEvent| {
                evt.prevent_default();
                hovered.set(true);
            },
            ondragleave: move |_| hovered.set(false),
            ondrop: on_drop,
            onclick: on_click,

            if let Some((src, name)) = preview {
                img {
                    class: "drop-zone__preview",
                    src: "{src}",
                    alt: "{name}",
                }
            } else if loading {
                p { class: "drop-zone__hint", "Loading..." }
            } else {
                p { class: "drop-zone__hint", "Drag & drop an image to resize" }
            }
        }
    }
}
