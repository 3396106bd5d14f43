use std::cell::RefCell;
use std::rc::Rc;

use dioxus::document::eval;
use dioxus::prelude::*;
use services::page::tooltip::{ActiveTooltip, Position};
use services::page::{
    BackToTop, HeaderAutoHide, HeaderSettle, KeyPress, Overlays, RevealTracker, Shortcut,
    ShortcutOutcome, Toast, Tooltips,
};
use tracing::debug;

use crate::context::AppContext;
use crate::scheduler::TaskScheduler;
use crate::scripts::{
    self, KEYDOWN_LISTENER_SCRIPT, RevealMessage, SCROLL_LISTENER_SCRIPT, reveal_listener_script,
};
use crate::utils::AppUtils;

pub const SEARCH_INPUT_ID: &str = "page-search";

/// Page frame shared by every route: auto-hiding header with the search
/// field, notifications, tooltips and the back-to-top button. Owns the window
/// listeners the page utilities react to.
#[component]
pub fn PageChrome(children: Element) -> Element {
    let ctx = use_context::<AppContext>();
    let utils = use_context::<AppUtils>();
    let config = ctx.page_config().clone();

    let mut overlays = use_context_provider(|| Signal::new(Overlays::with_search()));
    use_context_provider(|| Signal::new(Tooltips::default()));
    let reveal = use_context_provider(|| Signal::new(RevealTracker::default()));

    let header = use_hook(|| Rc::new(RefCell::new(HeaderAutoHide::new(config.scroll_debounce))));
    let back_to_top =
        use_hook(|| Rc::new(RefCell::new(BackToTop::new(config.back_to_top_threshold))));
    let mut header_transform = use_signal(|| "translateY(0)");
    let mut show_back_to_top = use_signal(|| false);

    let header_timers = use_hook(TaskScheduler::<HeaderSettle>::new);
    let on_settle = use_callback({
        let header = Rc::clone(&header);
        move |_: HeaderSettle| {
            let mut header = header.borrow_mut();
            let hidden = header.settle();
            debug!(hidden, "header settled");
            header_transform.set(header.transform());
        }
    });
    header_timers.bind(on_settle);

    use_hook({
        let timers = header_timers.clone();
        move || {
            spawn(async move {
                let mut timers = timers;
                let mut listener = eval(SCROLL_LISTENER_SCRIPT);
                while let Ok(offset) = listener.recv::<f64>().await {
                    if back_to_top.borrow_mut().on_scroll(offset) {
                        show_back_to_top.set(back_to_top.borrow().is_visible());
                    }
                    header.borrow_mut().on_scroll(offset, &mut timers);
                }
            });
        }
    });

    use_hook(move || {
        spawn(async move {
            let mut listener = eval(KEYDOWN_LISTENER_SCRIPT);
            while let Ok(press) = listener.recv::<KeyPress>().await {
                let Some(shortcut) = Shortcut::from_key(&press) else {
                    continue;
                };
                let outcome = overlays.write().apply(shortcut);
                debug!(?shortcut, ?outcome, "shortcut applied");
                if outcome == ShortcutOutcome::SearchFocused(true) {
                    scripts::focus_element(SEARCH_INPUT_ID);
                }
            }
        });
    });

    use_hook(move || {
        spawn(async move {
            let mut reveal = reveal;
            let mut listener = eval(&reveal_listener_script());
            while let Ok(message) = listener.recv::<RevealMessage>().await {
                match message {
                    RevealMessage::Observe(id) => {
                        reveal.write().observe(id);
                    }
                    RevealMessage::Visible(id) => {
                        if reveal.write().on_intersection(&id, true) {
                            debug!(element = %id, "revealed");
                        }
                    }
                }
            }
        });
    });

    let root_class = if utils.is_mobile() {
        "page-root is-mobile"
    } else {
        "page-root"
    };
    let title = ctx.page().title.clone();
    let query = overlays.read().search_query().to_string();

    rsx! {
        div { class: root_class,
            header { class: "site-header", style: "transform: {header_transform}",
                h1 { class: "site-title", "{title}" }
                input {
                    id: SEARCH_INPUT_ID,
                    r#type: "search",
                    class: "search-input",
                    placeholder: "Buscar pregunta (Ctrl+K)",
                    value: "{query}",
                    oninput: move |evt: FormEvent| overlays.write().set_search_query(evt.value()),
                }
            }
            main { class: "page-content", {children} }
            ToastStack {}
            TooltipLayer {}
            if show_back_to_top() {
                button {
                    class: "back-to-top",
                    "aria-label": "Volver arriba",
                    onclick: move |_| scripts::scroll_to_top(),
                    i { class: "bi bi-arrow-up" }
                }
            }
        }
    }
}

#[component]
fn ToastStack() -> Element {
    let utils = use_context::<AppUtils>();
    let toasts: Vec<Toast> = utils.toasts().read().toasts().to_vec();

    rsx! {
        div { class: "toast-container",
            for toast in toasts {
                div {
                    key: "{toast.id.value()}",
                    class: "toast {toast.severity.background_class()} {toast.animation_class()}",
                    role: "alert",
                    i { class: "bi {toast.severity.icon_class()}" }
                    span { class: "toast-message", "{toast.message}" }
                    button {
                        class: "toast-close",
                        "aria-label": "Cerrar",
                        onclick: {
                            let utils = utils.clone();
                            let id = toast.id;
                            move |_| utils.dismiss_notification(id)
                        },
                        "×"
                    }
                }
            }
        }
    }
}

fn tooltip_dom_id(anchor: &str) -> String {
    format!("{anchor}-tooltip")
}

fn tooltip_style(position: Option<Position>) -> String {
    match position {
        Some(Position { left, top }) => format!("position: fixed; left: {left}px; top: {top}px;"),
        None => "position: fixed; left: 0px; top: 0px; visibility: hidden;".to_string(),
    }
}

#[component]
fn TooltipLayer() -> Element {
    let tooltips = use_context::<Signal<Tooltips>>();
    let active: Vec<(String, ActiveTooltip)> = tooltips
        .read()
        .iter()
        .map(|(anchor, tip)| (anchor.to_string(), tip.clone()))
        .collect();

    rsx! {
        for (anchor, tip) in active {
            div {
                key: "{anchor}",
                id: tooltip_dom_id(&anchor),
                class: "tooltip",
                role: "tooltip",
                style: tooltip_style(tip.position),
                "{tip.text}"
            }
        }
    }
}

/// Wraps `children` in an anchor that shows `text` above it while hovered.
#[component]
pub fn WithTooltip(anchor: String, text: String, children: Element) -> Element {
    let utils = use_context::<AppUtils>();
    let mut tooltips = use_context::<Signal<Tooltips>>();

    let on_enter = {
        let anchor = anchor.clone();
        move |_: MouseEvent| {
            if utils.is_mobile() {
                return;
            }
            tooltips.write().enter(anchor.clone(), text.clone());
            let anchor = anchor.clone();
            spawn(async move {
                let mut tooltips = tooltips;
                let label = tooltip_dom_id(&anchor);
                if let Some((rect, size)) = scripts::measure_tooltip(&anchor, &label).await {
                    tooltips.write().measured(&anchor, rect, size);
                }
            });
        }
    };
    let on_leave = {
        let anchor = anchor.clone();
        move |_: MouseEvent| {
            tooltips.write().leave(&anchor);
        }
    };

    rsx! {
        span {
            id: "{anchor}",
            class: "tooltip-anchor",
            onmouseenter: on_enter,
            onmouseleave: on_leave,
            {children}
        }
    }
}
