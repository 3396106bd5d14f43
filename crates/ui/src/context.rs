use std::sync::Arc;

use checklist_core::model::{ChecklistPage, OperatorInfo};
use dioxus::prelude::*;
use services::{Clock, PageConfig, SubmissionSink};

pub trait UiApp: Send + Sync {
    /// Snapshot of the checklist to render.
    fn page(&self) -> ChecklistPage;
    fn submission_sink(&self) -> Arc<dyn SubmissionSink>;
    fn clock(&self) -> Clock;
    fn page_config(&self) -> PageConfig;
}

#[derive(Clone)]
pub struct AppContext {
    page: Arc<ChecklistPage>,
    submission_sink: Arc<dyn SubmissionSink>,
    clock: Clock,
    page_config: PageConfig,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            page: Arc::new(app.page()),
            submission_sink: app.submission_sink(),
            clock: app.clock(),
            page_config: app.page_config(),
        }
    }

    #[must_use]
    pub fn page(&self) -> Arc<ChecklistPage> {
        Arc::clone(&self.page)
    }

    #[must_use]
    pub fn submission_sink(&self) -> Arc<dyn SubmissionSink> {
        Arc::clone(&self.submission_sink)
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    #[must_use]
    pub fn page_config(&self) -> &PageConfig {
        &self.page_config
    }
}

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

/// Operator data entered on the start page. The checklist is only reachable
/// while it is set.
#[derive(Clone, Copy)]
pub struct OperatorSession {
    info: Signal<Option<OperatorInfo>>,
}

impl OperatorSession {
    #[must_use]
    pub fn current(&self) -> Option<OperatorInfo> {
        self.info.read().clone()
    }

    pub fn start(&self, info: OperatorInfo) {
        let mut signal = self.info;
        signal.set(Some(info));
    }

    pub fn clear(&self) {
        let mut signal = self.info;
        signal.set(None);
    }
}

/// Provides the operator session to the subtree.
pub fn use_operator_session(initial: Option<OperatorInfo>) -> OperatorSession {
    use_context_provider(move || OperatorSession {
        info: Signal::new(initial),
    })
}
