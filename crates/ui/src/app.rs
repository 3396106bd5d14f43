use dioxus::prelude::*;
use dioxus_router::Router;

use crate::context::{AppContext, use_operator_session};
use crate::routes::Route;
use crate::utils::use_app_utils;

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    use_app_utils(ctx.page_config());
    use_operator_session(None);
    let title = ctx.page().title.clone();

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "{title}" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "No se pudo mostrar la página" }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
