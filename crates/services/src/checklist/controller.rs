use std::collections::BTreeSet;

use checklist_core::model::{Answer, CompletionSet, ItemId, Progress};
use tracing::{debug, info, warn};

use super::view::ChecklistView;
use crate::config::PageConfig;
use crate::timers::Scheduler;

/// Message shown when the form is submitted before every item is answered.
pub const INCOMPLETE_MESSAGE: &str = "Por favor, completa todas las preguntas antes de continuar";

/// Result of a submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitDecision {
    /// Every item is answered; let the post go through.
    Proceed,
    /// Cancelled: some items are still unanswered.
    Blocked { remaining: usize },
    /// A submission is already on its way.
    AlreadySaving,
}

/// Steps of the return to the start page after a successful save.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectEvent {
    FadeBanner,
    Navigate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RedirectState {
    Idle,
    Armed,
    Fading,
    Done,
}

/// Answer state machine and progress tracker for one rendered checklist.
///
/// The view owns the answers; the controller keeps the derived
/// [`CompletionSet`] and updates it in the same step as every answer change,
/// followed by a full progress render.
#[derive(Debug)]
pub struct ChecklistController<V> {
    view: V,
    items: BTreeSet<ItemId>,
    completed: CompletionSet,
    config: PageConfig,
    saving: bool,
    redirect: RedirectState,
}

impl<V: ChecklistView> ChecklistController<V> {
    /// Snapshots the page: every listed item whose control is already active
    /// counts as completed. Renders the initial progress.
    pub fn new(view: V, items: impl IntoIterator<Item = ItemId>) -> Self {
        Self::with_config(view, items, PageConfig::default())
    }

    pub fn with_config(
        mut view: V,
        items: impl IntoIterator<Item = ItemId>,
        config: PageConfig,
    ) -> Self {
        let items: BTreeSet<ItemId> = items.into_iter().collect();
        let completed = items
            .iter()
            .copied()
            .filter(|id| view.read_answer(*id).is_some_and(Answer::is_answered))
            .collect();
        let progress = Progress::of(&completed, items.len());
        view.render_progress(&progress);
        Self {
            view,
            items,
            completed,
            config,
            saving: false,
            redirect: RedirectState::Idle,
        }
    }

    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    #[must_use]
    pub fn progress(&self) -> Progress {
        Progress::of(&self.completed, self.items.len())
    }

    #[must_use]
    pub fn completion(&self) -> &CompletionSet {
        &self.completed
    }

    #[must_use]
    pub fn is_saving(&self) -> bool {
        self.saving
    }

    /// Click on the item outside its three controls: advance the cycle.
    pub fn click_item_body(&mut self, id: ItemId) {
        self.view.scroll_into_view(id);
        let Some(current) = self.view.read_answer(id) else {
            return;
        };
        self.select(id, current.next());
    }

    /// Click on one of the item's controls. `checked` is the control's state
    /// after the click; unchecking the active control clears the item.
    pub fn toggle_option(&mut self, id: ItemId, control: Answer, checked: bool) {
        self.view.scroll_into_view(id);
        if !control.is_answered() {
            warn!(item = %id, "toggle on a control without an answer value");
            return;
        }
        let answer = if checked {
            control
        } else if self.view.read_answer(id) == Some(control) {
            Answer::Unanswered
        } else {
            return;
        };
        self.select(id, answer);
    }

    /// Applies `answer` to the item and re-renders progress.
    pub fn select(&mut self, id: ItemId, answer: Answer) {
        if !self.items.contains(&id) {
            return;
        }
        self.view.apply_answer(id, answer);
        self.completed.record(id, answer.is_answered());
        debug!(item = %id, ?answer, completed = self.completed.len(), "answer applied");
        let progress = self.progress();
        self.view.render_progress(&progress);
    }

    /// Submission gate. On `Proceed` the view is switched to its saving state.
    pub fn submit(&mut self) -> SubmitDecision {
        if self.saving {
            return SubmitDecision::AlreadySaving;
        }
        let progress = self.progress();
        if !progress.is_complete {
            self.view.show_blocking_message(INCOMPLETE_MESSAGE);
            return SubmitDecision::Blocked {
                remaining: progress.remaining(),
            };
        }
        self.saving = true;
        self.view.show_saving();
        info!(items = progress.total, "checklist submitted");
        SubmitDecision::Proceed
    }

    /// Current answers as read back from the view, in item order.
    #[must_use]
    pub fn answers(&self) -> Vec<(ItemId, Answer)> {
        self.items
            .iter()
            .map(|id| (*id, self.view.read_answer(*id).unwrap_or_default()))
            .collect()
    }

    /// Starts the fade-then-navigate sequence shown after a successful save.
    ///
    /// Returns false when the sequence was already armed; it runs at most
    /// once per controller.
    pub fn arm_redirect<S>(&mut self, scheduler: &mut S) -> bool
    where
        S: Scheduler<RedirectEvent> + ?Sized,
    {
        if self.redirect != RedirectState::Idle {
            return false;
        }
        self.redirect = RedirectState::Armed;
        scheduler.schedule(self.config.banner_fade_after, RedirectEvent::FadeBanner);
        true
    }

    pub fn handle_redirect<S>(&mut self, event: RedirectEvent, scheduler: &mut S)
    where
        S: Scheduler<RedirectEvent> + ?Sized,
    {
        match (event, self.redirect) {
            (RedirectEvent::FadeBanner, RedirectState::Armed) => {
                self.redirect = RedirectState::Fading;
                self.view.fade_success_banner();
                scheduler.schedule(self.config.navigate_after_fade, RedirectEvent::Navigate);
            }
            (RedirectEvent::Navigate, RedirectState::Fading) => {
                self.redirect = RedirectState::Done;
                info!(location = %self.config.home_location, "returning to start page");
                self.view.navigate(&self.config.home_location);
            }
            (event, state) => {
                debug!(?event, ?state, "redirect event ignored");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::checklist::MemoryChecklistView;
    use crate::timers::TimerQueue;

    fn ids(n: u64) -> Vec<ItemId> {
        (1..=n).map(ItemId::new).collect()
    }

    fn controller(n: u64) -> ChecklistController<MemoryChecklistView> {
        ChecklistController::new(MemoryChecklistView::with_items(ids(n)), ids(n))
    }

    #[test]
    fn initial_render_counts_prerendered_answers() {
        let view = MemoryChecklistView::with_items(ids(4))
            .prerendered(ItemId::new(2), Answer::PartiallyDone);
        let ctl = ChecklistController::new(view, ids(4));
        assert!(ctl.completion().contains(ItemId::new(2)));
        let rendered = ctl.view().progress.unwrap();
        assert_eq!(rendered.completed, 1);
        assert_eq!(rendered.percentage, 25);
    }

    #[test]
    fn option_toggle_sets_answer_directly() {
        let mut ctl = controller(3);
        ctl.toggle_option(ItemId::new(3), Answer::PartiallyDone, true);
        assert_eq!(ctl.view().answer(ItemId::new(3)), Answer::PartiallyDone);
        ctl.toggle_option(ItemId::new(3), Answer::Ok, true);
        assert_eq!(ctl.view().answer(ItemId::new(3)), Answer::Ok);
        assert_eq!(ctl.completion().len(), 1);
        assert_eq!(ctl.view().scrolled, vec![ItemId::new(3), ItemId::new(3)]);
    }

    #[test]
    fn unchecking_the_active_option_clears_the_item() {
        let mut ctl = controller(2);
        ctl.toggle_option(ItemId::new(1), Answer::NotApplicable, true);
        ctl.toggle_option(ItemId::new(1), Answer::NotApplicable, false);
        assert_eq!(ctl.view().answer(ItemId::new(1)), Answer::Unanswered);
        assert!(ctl.completion().is_empty());
        assert_eq!(ctl.view().completed_marks[&ItemId::new(1)], false);
    }

    #[test]
    fn unchecking_an_inactive_option_changes_nothing() {
        let mut ctl = controller(2);
        ctl.toggle_option(ItemId::new(1), Answer::Ok, true);
        ctl.toggle_option(ItemId::new(1), Answer::PartiallyDone, false);
        assert_eq!(ctl.view().answer(ItemId::new(1)), Answer::Ok);
    }

    #[test]
    fn unknown_items_are_ignored() {
        let mut ctl = controller(2);
        ctl.click_item_body(ItemId::new(9));
        ctl.select(ItemId::new(9), Answer::Ok);
        assert!(ctl.completion().is_empty());
        assert_eq!(ctl.progress().completed, 0);
    }

    #[test]
    fn second_submit_while_saving_is_ignored() {
        let mut ctl = controller(1);
        ctl.click_item_body(ItemId::new(1));
        assert_eq!(ctl.submit(), SubmitDecision::Proceed);
        assert!(ctl.view().saving);
        assert_eq!(ctl.submit(), SubmitDecision::AlreadySaving);
    }

    #[test]
    fn redirect_can_only_be_armed_once() {
        let mut ctl = controller(1);
        let mut queue = TimerQueue::new();
        assert!(ctl.arm_redirect(&mut queue));
        assert!(!ctl.arm_redirect(&mut queue));
        assert_eq!(queue.pending_count(), 1);
    }

    #[test]
    fn stray_navigate_before_fade_is_ignored() {
        let mut ctl = controller(1);
        let mut queue = TimerQueue::new();
        ctl.handle_redirect(RedirectEvent::Navigate, &mut queue);
        assert!(ctl.view().navigations.is_empty());
        assert!(queue.advance(Duration::from_secs(60)).is_empty());
    }

    #[test]
    fn answers_read_back_in_item_order() {
        let mut ctl = controller(3);
        ctl.click_item_body(ItemId::new(2));
        assert_eq!(
            ctl.answers(),
            vec![
                (ItemId::new(1), Answer::Unanswered),
                (ItemId::new(2), Answer::Ok),
                (ItemId::new(3), Answer::Unanswered),
            ]
        );
    }
}
