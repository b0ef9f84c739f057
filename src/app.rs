use dioxus::prelude::*;
use resizer_core::Session;

use crate::context::{get_config, Status};
use crate::pages::Resizer;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - The resizer: drop target, size selector, download button
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Resizer {},
}

/// Root application component.
///
/// Provides global styles, session context, and routing.
#[component]
pub fn App() -> Element {
    let config = use_hook(get_config);
    let session: Signal<Session> = use_signal(|| Session::from_config(&config));
    let status: Signal<Status> = use_signal(Status::default);

    use_context_provider(|| config.clone());
    use_context_provider(|| session);
    use_context_provider(|| status);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
