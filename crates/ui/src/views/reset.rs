use dioxus::prelude::*;
use dioxus_router::use_navigator;
use tracing::info;

use crate::context::OperatorSession;
use crate::routes::Route;

/// Target of the post-save redirect: forgets the operator data and returns
/// to the start form.
#[component]
pub fn ReturnHomeView() -> Element {
    let session = use_context::<OperatorSession>();
    let navigator = use_navigator();

    use_effect(move || {
        session.clear();
        info!("operator session cleared");
        let _ = navigator.replace(Route::Home {});
    });

    rsx! {
        div { class: "page page--reset",
            p { "Volviendo al inicio..." }
        }
    }
}
