use dioxus::prelude::*;
use resizer_core::TargetSize;

use crate::context::use_session;

/// Output size dropdown
#[component]
pub fn SizeSelector() -> Element {
    let mut session = use_session();
    let current = session.read().target_size();

    let on_change = move |evt: FormEvent| match evt.value().parse::<TargetSize>() {
        Ok(size) => session.write().set_target_size(size),
        Err(e) => tracing::warn!("Ignoring size selection: {}", e),
    };

    rsx! {
        select {
            class: "size-select",
            value: "{current.edge()}",
            onchange: on_change,
            for size in TargetSize::ALL {
                option {
                    key: "{size.edge()}",
                    value: "{size.edge()}",
                    selected: size == current,
                    "{size.label()}"
                }
            }
        }
    }
}
