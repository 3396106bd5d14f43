use std::sync::Arc;

use checklist_core::model::{Answer, ChecklistItem, ChecklistPage, OperatorInfo};
use checklist_core::time::fixed_clock;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::{Clock, LogSubmissionSink, PageConfig, SubmissionSink};

use crate::context::{UiApp, build_app_context, use_operator_session};
use crate::utils::use_app_utils;
use crate::views::{ChecklistPageView, OperatorFormView, PageChrome};

#[derive(Clone)]
struct TestApp {
    page: ChecklistPage,
}

impl UiApp for TestApp {
    fn page(&self) -> ChecklistPage {
        self.page.clone()
    }

    fn submission_sink(&self) -> Arc<dyn SubmissionSink> {
        Arc::new(LogSubmissionSink)
    }

    fn clock(&self) -> Clock {
        fixed_clock()
    }

    fn page_config(&self) -> PageConfig {
        PageConfig::default()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewKind {
    OperatorForm,
    Checklist,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    operator: Option<OperatorInfo>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    let ctx = use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    use_app_utils(ctx.page_config());
    use_operator_session(props.operator.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::OperatorForm => rsx! {
            PageChrome { OperatorFormView {} }
        },
        ViewKind::Checklist => rsx! {
            PageChrome { ChecklistPageView {} }
        },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Three questions, the first one already answered by the server.
pub fn sample_page() -> ChecklistPage {
    ChecklistPage::new(
        "preventivo",
        "Checklist preventivo",
        vec![
            ChecklistItem::new(1, "¿El equipo enciende correctamente?")
                .with_section("Hardware")
                .with_answer(Answer::Ok),
            ChecklistItem::new(2, "¿Se limpiaron los ventiladores?").with_section("Hardware"),
            ChecklistItem::new(3, "¿El antivirus está actualizado?").with_section("Software"),
        ],
    )
    .expect("sample page")
}

pub fn sample_operator() -> OperatorInfo {
    OperatorInfo {
        asset_tag: "AF-1020".to_string(),
        owner: "Ana Pérez".to_string(),
        position: "Contadora".to_string(),
        technician: "Luis Gómez".to_string(),
        email: None,
    }
}

pub fn setup_view_harness(
    view: ViewKind,
    page: ChecklistPage,
    operator: Option<OperatorInfo>,
) -> ViewHarness {
    let app = Arc::new(TestApp { page });
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            operator,
        },
    );
    ViewHarness { dom }
}
