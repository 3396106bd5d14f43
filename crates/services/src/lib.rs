#![forbid(unsafe_code)]

pub mod checklist;
pub mod config;
pub mod debounce;
pub mod error;
pub mod page;
pub mod submission;
pub mod timers;

pub use checklist_core::Clock;

pub use checklist::{
    ChecklistController, ChecklistView, INCOMPLETE_MESSAGE, MemoryChecklistView, RedirectEvent,
    SubmitDecision,
};
pub use config::PageConfig;
pub use debounce::Debouncer;
pub use error::{ClipboardError, SubmissionError};
pub use submission::{HttpSubmissionSink, LogSubmissionSink, SubmissionConfig, SubmissionSink};
pub use timers::{Scheduler, TimerId, TimerQueue};
