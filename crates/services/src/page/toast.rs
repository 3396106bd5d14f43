use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::timers::Scheduler;

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Warning,
    Error,
    #[default]
    Info,
}

impl Severity {
    #[must_use]
    pub fn background_class(self) -> &'static str {
        match self {
            Severity::Success => "bg-green-500",
            Severity::Warning => "bg-yellow-500",
            Severity::Error => "bg-red-500",
            Severity::Info => "bg-blue-500",
        }
    }

    #[must_use]
    pub fn icon_class(self) -> &'static str {
        match self {
            Severity::Success => "bi-check-circle-fill",
            Severity::Warning => "bi-exclamation-triangle-fill",
            Severity::Error => "bi-x-circle-fill",
            Severity::Info => "bi-info-circle-fill",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl ToastId {
    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub severity: Severity,
    /// The exit animation is running.
    pub leaving: bool,
}

impl Toast {
    /// Animation classes of the banner.
    #[must_use]
    pub fn animation_class(&self) -> &'static str {
        if self.leaving {
            "animate__animated animate__slideOutRight"
        } else {
            "animate__animated animate__slideInRight"
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastEvent {
    BeginExit(ToastId),
    Remove(ToastId),
}

/// Stack of notifications shown in the top-right corner.
#[derive(Debug, Clone)]
pub struct ToastCenter {
    next_id: u64,
    toasts: Vec<Toast>,
    display_for: Duration,
    exit_animation: Duration,
}

impl Default for ToastCenter {
    fn default() -> Self {
        Self::new(Duration::from_millis(5000), Duration::from_millis(300))
    }
}

impl ToastCenter {
    #[must_use]
    pub fn new(display_for: Duration, exit_animation: Duration) -> Self {
        Self {
            next_id: 1,
            toasts: Vec::new(),
            display_for,
            exit_animation,
        }
    }

    #[must_use]
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Shows a notification and schedules its automatic dismissal.
    pub fn show<S>(
        &mut self,
        message: impl Into<String>,
        severity: Severity,
        scheduler: &mut S,
    ) -> ToastId
    where
        S: Scheduler<ToastEvent> + ?Sized,
    {
        let id = ToastId(self.next_id);
        self.next_id += 1;
        let message = message.into();
        debug!(id = id.0, ?severity, %message, "toast shown");
        self.toasts.push(Toast {
            id,
            message,
            severity,
            leaving: false,
        });
        scheduler.schedule(self.display_for, ToastEvent::BeginExit(id));
        id
    }

    /// Manual close. Returns false when the toast is already gone.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        before != self.toasts.len()
    }

    pub fn handle<S>(&mut self, event: ToastEvent, scheduler: &mut S)
    where
        S: Scheduler<ToastEvent> + ?Sized,
    {
        match event {
            ToastEvent::BeginExit(id) => {
                if let Some(toast) = self.toasts.iter_mut().find(|toast| toast.id == id) {
                    toast.leaving = true;
                    scheduler.schedule(self.exit_animation, ToastEvent::Remove(id));
                }
            }
            ToastEvent::Remove(id) => {
                self.dismiss(id);
            }
        }
    }
}
