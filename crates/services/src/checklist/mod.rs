mod controller;
mod view;

pub use controller::{
    ChecklistController, INCOMPLETE_MESSAGE, RedirectEvent, SubmitDecision,
};
pub use view::{ChecklistView, MemoryChecklistView};
