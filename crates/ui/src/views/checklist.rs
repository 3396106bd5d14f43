use std::collections::BTreeMap;

use checklist_core::model::{
    Answer, ChecklistSubmission, CompletionSet, ItemId, OperatorInfo, Progress, SaveBanner,
};
use dioxus::prelude::*;
use dioxus_router::{Navigator, use_navigator};
use services::page::{Overlays, RevealTracker, Severity};
use services::{ChecklistController, ChecklistView, RedirectEvent, SubmitDecision};
use tracing::{debug, error, info, warn};

use crate::context::{AppContext, OperatorSession};
use crate::routes::Route;
use crate::scheduler::TaskScheduler;
use crate::scripts;
use crate::utils::AppUtils;
use crate::views::shell::WithTooltip;
use crate::vm::{ItemVm, ProgressVm, filter_items};

const INCOMPLETE_MODAL_ID: &str = "incomplete-modal";

/// The rendered checklist as seen by [`ChecklistController`].
///
/// Answers live in a signal keyed by item; every other method maps to a
/// signal the board renders from, or to a script run in the webview.
#[derive(Clone, Copy)]
pub struct SignalChecklistView {
    answers: Signal<BTreeMap<ItemId, Answer>>,
    progress: Signal<Progress>,
    saving: Signal<bool>,
    banner_faded: Signal<bool>,
    blocking_message: Signal<Option<String>>,
    overlays: Signal<Overlays>,
    navigator: Navigator,
}

impl ChecklistView for SignalChecklistView {
    fn read_answer(&self, id: ItemId) -> Option<Answer> {
        self.answers.peek().get(&id).copied()
    }

    fn apply_answer(&mut self, id: ItemId, answer: Answer) {
        if let Some(slot) = self.answers.write().get_mut(&id) {
            *slot = answer;
        }
    }

    fn render_progress(&mut self, progress: &Progress) {
        if *self.progress.peek() != *progress {
            self.progress.set(*progress);
        }
    }

    fn show_blocking_message(&mut self, message: &str) {
        self.blocking_message.set(Some(message.to_string()));
        self.overlays.write().open_modal(INCOMPLETE_MODAL_ID);
    }

    fn show_saving(&mut self) {
        self.saving.set(true);
    }

    fn scroll_into_view(&mut self, id: ItemId) {
        scripts::scroll_item_into_view(&id.dom_id());
    }

    fn fade_success_banner(&mut self) {
        self.banner_faded.set(true);
    }

    fn navigate(&mut self, location: &str) {
        match location.parse::<Route>() {
            Ok(route) => {
                if let Some(failure) = self.navigator.replace(route) {
                    warn!(%location, ?failure, "navigation to the home location failed");
                }
            }
            Err(_) => warn!(%location, "home location is not a known route"),
        }
    }
}

type Controller = Signal<ChecklistController<SignalChecklistView>>;

/// Checklist route. Sends the user back to the start form while no operator
/// data was entered.
#[component]
pub fn ChecklistPageView() -> Element {
    let session = use_context::<OperatorSession>();
    let navigator = use_navigator();

    match session.current() {
        Some(operator) => rsx! { ChecklistBoard { operator } },
        None => rsx! {
            div { class: "page page--guard",
                p { "Completa los datos del equipo antes de iniciar el checklist." }
                button {
                    class: "btn-primary",
                    onclick: move |_| {
                        let _ = navigator.push(Route::Home {});
                    },
                    "Ir al formulario inicial"
                }
            }
        },
    }
}

#[component]
fn ChecklistBoard(operator: OperatorInfo) -> Element {
    let ctx = use_context::<AppContext>();
    let utils = use_context::<AppUtils>();
    let mut overlays = use_context::<Signal<Overlays>>();
    let reveal = use_context::<Signal<RevealTracker>>();
    let navigator = use_navigator();
    let page = ctx.page();

    let answers = use_signal(|| {
        page.items
            .iter()
            .map(|item| (item.id, item.answer))
            .collect::<BTreeMap<_, _>>()
    });
    let progress = use_signal(|| {
        let answered: CompletionSet = page
            .items
            .iter()
            .filter(|item| item.answer.is_answered())
            .map(|item| item.id)
            .collect();
        Progress::of(&answered, page.items.len())
    });
    let saving = use_signal(|| false);
    let banner = use_signal(|| page.banner.clone());
    let banner_faded = use_signal(|| false);
    let blocking_message = use_signal(|| None::<String>);
    let mut controller: Controller = use_signal(|| {
        let view = SignalChecklistView {
            answers,
            progress,
            saving,
            banner_faded,
            blocking_message,
            overlays,
            navigator,
        };
        ChecklistController::with_config(view, page.item_ids(), ctx.page_config().clone())
    });

    let redirect_timers = use_hook(TaskScheduler::<RedirectEvent>::new);
    let on_redirect = use_callback({
        let timers = redirect_timers.clone();
        move |event: RedirectEvent| {
            let mut timers = timers.clone();
            controller.write().handle_redirect(event, &mut timers);
        }
    });
    redirect_timers.bind(on_redirect);

    use_effect({
        let timers = redirect_timers.clone();
        let banner_at_load = page.has_success_banner();
        move || {
            if banner_at_load {
                let mut timers = timers.clone();
                controller.write().arm_redirect(&mut timers);
            }
        }
    });

    let on_submit = {
        let ctx = ctx.clone();
        let utils = utils.clone();
        let timers = redirect_timers.clone();
        let kind = page.kind.clone();
        let operator = operator.clone();
        move |_: MouseEvent| {
            let decision = controller.write().submit();
            if decision != SubmitDecision::Proceed {
                debug!(?decision, "submission held back");
                return;
            }
            let submission = ChecklistSubmission::new(
                kind.clone(),
                operator.clone(),
                controller.read().answers(),
                ctx.clock().today(),
            );
            let sink = ctx.submission_sink();
            let utils = utils.clone();
            let timers = timers.clone();
            spawn(async move {
                let mut banner = banner;
                let mut controller = controller;
                match sink.submit(&submission).await {
                    Ok(saved) => {
                        info!(?saved, "checklist saved");
                        let success = saved.is_success();
                        banner.set(Some(saved));
                        if success {
                            let mut timers = timers;
                            controller.write().arm_redirect(&mut timers);
                        }
                    }
                    Err(err) => {
                        error!(%err, "checklist submission failed");
                        banner.set(Some(SaveBanner::Failed));
                        utils.show_notification(SaveBanner::Failed.message(), Severity::Error);
                    }
                }
            });
        }
    };

    let progress_vm = ProgressVm::from_progress(&progress.read());
    let query = overlays.read().search_query().to_string();
    let items: Vec<(ItemVm, &'static str)> = {
        let answers = answers.read();
        let reveal = reveal.read();
        filter_items(&page.items, &query)
            .into_iter()
            .map(|item| {
                let answer = answers.get(&item.id).copied().unwrap_or_default();
                let vm = ItemVm::new(item, answer);
                let reveal_class = reveal.class_for(&vm.dom_id);
                (vm, reveal_class)
            })
            .collect()
    };
    let today = utils.format_date(ctx.clock().today());
    let modal_open = overlays.read().is_modal_active(INCOMPLETE_MODAL_ID);
    let modal_message = blocking_message.read().clone().unwrap_or_default();
    let saved_banner = banner.read().clone();
    let faded = banner_faded();
    let is_saving = saving();

    rsx! {
        div { class: "page page--checklist", id: "checklist-root",
            if let Some(saved) = saved_banner {
                SaveBannerView { banner: saved, faded }
            }
            section { class: "operator-summary",
                p { "Activo fijo: {operator.asset_tag}" }
                p { "Propietario: {operator.owner} ({operator.position})" }
                p { "Técnico: {operator.technician}" }
                p { "Fecha: {today}" }
            }
            section { class: "progress-block",
                div { class: "progress-track",
                    div { class: progress_vm.bar_class(), style: "{progress_vm.bar_style}",
                        "{progress_vm.percentage_label}"
                    }
                }
                p { id: "progress-counter", "{progress_vm.counter}" }
                if progress_vm.complete {
                    span { class: "completion-badge", "¡Checklist completo!" }
                }
            }
            div { class: "question-list",
                for (vm, reveal_class) in items {
                    ItemRow { key: "{vm.dom_id}", vm, reveal_class, controller }
                }
            }
            button {
                id: "submit-checklist",
                r#type: "button",
                class: progress_vm.submit_class(),
                disabled: !progress_vm.submit_enabled || is_saving,
                onclick: on_submit,
                if is_saving {
                    "Guardando..."
                } else {
                    "Guardar checklist"
                }
            }
            if modal_open {
                div { class: "modal-backdrop",
                    div { class: "modal", role: "alertdialog",
                        p { "{modal_message}" }
                        button {
                            class: "btn-primary",
                            onclick: move |_| {
                                overlays.write().close_modal(INCOMPLETE_MODAL_ID);
                            },
                            "Aceptar"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ItemRow(vm: ItemVm, reveal_class: &'static str, controller: Controller) -> Element {
    let mut controller = controller;
    let id = vm.id;
    let data_answer = vm.answer.control_value().unwrap_or_default();

    rsx! {
        div {
            id: "{vm.dom_id}",
            class: "{vm.container_class()} {reveal_class}",
            "data-reveal": "true",
            "data-answer": data_answer,
            onclick: move |_| controller.write().click_item_body(id),
            span { class: "question-number", "{id}" }
            p { class: "question-text", "{vm.prompt}" }
            div { class: "answer-options", "data-marker": vm.marker_type(),
                for option in vm.options.clone() {
                    WithTooltip {
                        key: "{option.dom_id}",
                        anchor: option.dom_id.clone(),
                        text: option.tooltip.to_string(),
                        label {
                            class: if option.checked { "answer-option active" } else { "answer-option" },
                            "data-type": option.answer.marker().map(|m| m.data_type()).unwrap_or_default(),
                            onclick: move |evt: MouseEvent| evt.stop_propagation(),
                            input {
                                r#type: "checkbox",
                                name: id.form_field(),
                                value: option.value,
                                checked: option.checked,
                                onchange: move |evt: FormEvent| {
                                    controller.write().toggle_option(id, option.answer, evt.checked());
                                },
                            }
                            "{option.label}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SaveBannerView(banner: SaveBanner, faded: bool) -> Element {
    let utils = use_context::<AppUtils>();
    let tone = match &banner {
        SaveBanner::Saved { .. } => "alert alert-success",
        SaveBanner::SavedLocally { .. } => "alert alert-warning",
        SaveBanner::Failed => "alert alert-danger",
    };
    let fade = if faded { " fade-out" } else { "" };
    let file = match &banner {
        SaveBanner::Saved { file } | SaveBanner::SavedLocally { file } if !file.is_empty() => {
            Some(file.clone())
        }
        _ => None,
    };

    rsx! {
        div { id: "save-banner", class: "{tone}{fade}", role: "status",
            span { "{banner.message()}" }
            if let Some(file) = file {
                button {
                    class: "btn-link copy-file",
                    onclick: move |_| utils.copy_to_clipboard(file.clone()),
                    "Copiar nombre"
                }
            }
        }
    }
}
