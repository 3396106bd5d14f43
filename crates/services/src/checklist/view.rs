use std::collections::BTreeMap;

use checklist_core::model::{Answer, ItemId, Progress};

/// What the controller needs from the rendered page.
///
/// The page holds the answer of every item; the controller asks for it and
/// tells the page what to show. Implementations treat unknown ids as no-ops.
pub trait ChecklistView {
    /// Active control of the item, `None` when the page has no such item.
    fn read_answer(&self, id: ItemId) -> Option<Answer>;

    /// Activates the control for `answer` and deactivates the other two
    /// (all three for `Unanswered`), moves the answered marker, and marks the
    /// item complete or not.
    fn apply_answer(&mut self, id: ItemId, answer: Answer);

    fn render_progress(&mut self, progress: &Progress);

    /// Blocking message the user must acknowledge.
    fn show_blocking_message(&mut self, message: &str);

    /// Disables the submit control and shows it as saving.
    fn show_saving(&mut self);

    /// Smoothly scrolls the item to the vertical center of the viewport.
    fn scroll_into_view(&mut self, id: ItemId);

    fn fade_success_banner(&mut self);

    fn navigate(&mut self, location: &str);
}

/// Plain in-memory page, for headless runs and tests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryChecklistView {
    pub answers: BTreeMap<ItemId, Answer>,
    pub completed_marks: BTreeMap<ItemId, bool>,
    pub progress: Option<Progress>,
    pub messages: Vec<String>,
    pub saving: bool,
    pub scrolled: Vec<ItemId>,
    pub banner_faded: bool,
    pub navigations: Vec<String>,
}

impl MemoryChecklistView {
    /// A page with the given items, all unanswered.
    #[must_use]
    pub fn with_items(ids: impl IntoIterator<Item = ItemId>) -> Self {
        let answers: BTreeMap<ItemId, Answer> =
            ids.into_iter().map(|id| (id, Answer::Unanswered)).collect();
        let completed_marks = answers.keys().map(|id| (*id, false)).collect();
        Self {
            answers,
            completed_marks,
            ..Self::default()
        }
    }

    /// Pre-renders an answer, as the server would.
    #[must_use]
    pub fn prerendered(mut self, id: ItemId, answer: Answer) -> Self {
        if self.answers.contains_key(&id) {
            self.answers.insert(id, answer);
            self.completed_marks.insert(id, answer.is_answered());
        }
        self
    }

    #[must_use]
    pub fn answer(&self, id: ItemId) -> Answer {
        self.answers.get(&id).copied().unwrap_or_default()
    }
}

impl ChecklistView for MemoryChecklistView {
    fn read_answer(&self, id: ItemId) -> Option<Answer> {
        self.answers.get(&id).copied()
    }

    fn apply_answer(&mut self, id: ItemId, answer: Answer) {
        if let Some(slot) = self.answers.get_mut(&id) {
            *slot = answer;
            self.completed_marks.insert(id, answer.is_answered());
        }
    }

    fn render_progress(&mut self, progress: &Progress) {
        self.progress = Some(*progress);
    }

    fn show_blocking_message(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }

    fn show_saving(&mut self) {
        self.saving = true;
    }

    fn scroll_into_view(&mut self, id: ItemId) {
        self.scrolled.push(id);
    }

    fn fade_success_banner(&mut self) {
        self.banner_faded = true;
    }

    fn navigate(&mut self, location: &str) {
        self.navigations.push(location.to_string());
    }
}
