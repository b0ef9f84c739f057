//! Download action.
//!
//! Exports the current image at the selected size into the download
//! directory. With nothing loaded the click does nothing.

use std::sync::Arc;

use dioxus::prelude::*;
use resizer_core::{export_to, DirectorySink, DownloadSink};

use crate::context::{use_config, use_session, use_status};

#[component]
pub fn DownloadButton() -> Element {
    let config = use_config();
    let session = use_session();
    let mut status = use_status();
    let sink = use_hook(|| -> Arc<dyn DownloadSink> {
        Arc::new(DirectorySink::new(config.download_dir.clone()))
    });

    let exporting = status.read().exporting;

    let on_download = move |_| {
        if status.read().exporting {
            return;
        }
        let Some(request) = session.read().export_request() else {
            return;
        };

        status.write().export_started();
        let sink = Arc::clone(&sink);
        spawn(async move {
            let result = export_to(sink, request).await;
            if let Err(e) = &result {
                tracing::error!(error = %e, "Export failed");
            }
            status.write().export_finished(result);
        });
    };

    rsx! {
        button {
            class: "btn-download",
            disabled: exporting,
            onclick: on_download,
            if exporting { "Saving..." } else { "Download" }
        }
    }
}
