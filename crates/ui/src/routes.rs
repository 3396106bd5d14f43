use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::views::{ChecklistPageView, OperatorFormView, PageChrome, ReturnHomeView};

#[derive(Clone, Routable, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", OperatorFormView)] Home {},
        #[route("/checklist", ChecklistPageView)] Checklist {},
        #[route("/home", ReturnHomeView)] ReturnHome {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        PageChrome {
            Outlet::<Route> {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_locations_parse_to_routes() {
        assert_eq!("/home".parse::<Route>().ok(), Some(Route::ReturnHome {}));
        assert_eq!("/".parse::<Route>().ok(), Some(Route::Home {}));
        assert!("/nowhere".parse::<Route>().is_err());
    }
}
