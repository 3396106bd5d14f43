use std::time::Duration;

use checklist_core::format::{DEFAULT_DATE_FORMAT, format_date, is_mobile_user_agent};
use chrono::NaiveDate;
use dioxus::prelude::*;
use services::page::{Severity, ToastCenter, ToastEvent, ToastId, copy_to_clipboard};
use services::{Debouncer, PageConfig};
use tracing::{debug, warn};

use crate::scheduler::TaskScheduler;
use crate::scripts::{self, EvalClipboard};

/// Page-wide helpers available to every view.
#[derive(Clone)]
pub struct AppUtils {
    toasts: Signal<ToastCenter>,
    toast_timers: TaskScheduler<ToastEvent>,
    mobile: Signal<bool>,
}

impl AppUtils {
    pub fn show_notification(&self, message: impl Into<String>, severity: Severity) -> ToastId {
        let mut toasts = self.toasts;
        let mut timers = self.toast_timers.clone();
        toasts.write().show(message, severity, &mut timers)
    }

    pub fn dismiss_notification(&self, id: ToastId) {
        let mut toasts = self.toasts;
        toasts.write().dismiss(id);
    }

    #[must_use]
    pub fn toasts(&self) -> Signal<ToastCenter> {
        self.toasts
    }

    /// Copies `text` and reports the outcome as a toast.
    pub fn copy_to_clipboard(&self, text: String) {
        let utils = self.clone();
        spawn(async move {
            let outcome = copy_to_clipboard(&EvalClipboard, &text).await;
            let (message, severity) = outcome.notification();
            utils.show_notification(message, severity);
        });
    }

    #[must_use]
    pub fn format_date(&self, date: NaiveDate) -> String {
        format_date(date, DEFAULT_DATE_FORMAT)
    }

    #[must_use]
    pub fn format_date_with(&self, date: NaiveDate, pattern: &str) -> String {
        format_date(date, pattern)
    }

    #[must_use]
    pub fn debounce(&self, delay: Duration) -> Debouncer {
        Debouncer::new(delay)
    }

    /// Whether the webview reported a mobile user agent.
    #[must_use]
    pub fn is_mobile(&self) -> bool {
        *self.mobile.read()
    }

    pub async fn load_script(&self, src: &str) -> bool {
        let loaded = scripts::load_script(src).await;
        if !loaded {
            warn!(%src, "script failed to load");
        }
        loaded
    }
}

/// Creates the page helpers and provides them to the subtree.
pub fn use_app_utils(config: &PageConfig) -> AppUtils {
    let display_for = config.toast_duration;
    let exit_animation = config.toast_exit_animation;
    let mut toasts = use_signal(|| ToastCenter::new(display_for, exit_animation));
    let mobile = use_signal(|| false);
    let toast_timers = use_hook(TaskScheduler::<ToastEvent>::new);

    let on_toast = use_callback({
        let timers = toast_timers.clone();
        move |event: ToastEvent| {
            let mut timers = timers.clone();
            toasts.write().handle(event, &mut timers);
        }
    });
    toast_timers.bind(on_toast);

    use_hook(|| {
        spawn(async move {
            let mut mobile = mobile;
            if let Some(agent) = scripts::read_user_agent().await {
                let is_mobile = is_mobile_user_agent(&agent);
                debug!(is_mobile, "user agent probed");
                mobile.set(is_mobile);
            }
        });
    });

    use_context_provider(|| AppUtils {
        toasts,
        toast_timers,
        mobile,
    })
}
