use std::time::Duration;

use checklist_core::model::{Answer, ItemId};
use checklist_core::validation::{FieldError, FieldRules, FieldStatus};
use pretty_assertions::assert_eq;
use services::page::{FormValidator, Severity, ToastCenter};
use services::{
    ChecklistController, INCOMPLETE_MESSAGE, MemoryChecklistView, PageConfig, RedirectEvent,
    SubmitDecision, TimerQueue,
};

fn five_items() -> Vec<ItemId> {
    (1..=5).map(ItemId::new).collect()
}

fn fresh_controller() -> ChecklistController<MemoryChecklistView> {
    ChecklistController::new(MemoryChecklistView::with_items(five_items()), five_items())
}

#[test]
fn one_click_reports_one_of_five() {
    let mut ctl = fresh_controller();
    ctl.click_item_body(ItemId::new(1));

    let progress = ctl.view().progress.unwrap();
    assert_eq!(progress.completed, 1);
    assert_eq!(progress.total, 5);
    assert_eq!(progress.percentage, 20);
    assert!(!progress.is_complete);
    assert_eq!(ctl.view().answer(ItemId::new(1)), Answer::Ok);
    assert_eq!(ctl.completion().iter().collect::<Vec<_>>(), vec![ItemId::new(1)]);
    assert_eq!(ctl.view().scrolled, vec![ItemId::new(1)]);
}

#[test]
fn four_clicks_return_an_item_to_unanswered() {
    let mut ctl = fresh_controller();
    let id = ItemId::new(1);
    let mut seen = Vec::new();
    for _ in 0..4 {
        ctl.click_item_body(id);
        seen.push(ctl.view().answer(id));
    }
    assert_eq!(
        seen,
        vec![
            Answer::Ok,
            Answer::NotApplicable,
            Answer::PartiallyDone,
            Answer::Unanswered,
        ]
    );
    assert!(ctl.completion().is_empty());
    assert_eq!(ctl.view().progress.unwrap().percentage, 0);
}

#[test]
fn incomplete_submit_is_blocked_without_changes() {
    let mut ctl = fresh_controller();
    for id in 1..=4 {
        ctl.click_item_body(ItemId::new(id));
    }
    let before = ctl.view().answers.clone();

    assert_eq!(ctl.submit(), SubmitDecision::Blocked { remaining: 1 });
    assert_eq!(ctl.view().messages, vec![INCOMPLETE_MESSAGE.to_string()]);
    assert!(!ctl.view().saving);
    assert_eq!(ctl.view().answers, before);

    ctl.toggle_option(ItemId::new(5), Answer::NotApplicable, true);
    assert!(ctl.progress().is_complete);
    assert_eq!(ctl.submit(), SubmitDecision::Proceed);
    assert!(ctl.view().saving);
}

#[test]
fn success_banner_fades_then_navigates_once() {
    let mut ctl = fresh_controller();
    let mut queue = TimerQueue::new();
    assert!(ctl.arm_redirect(&mut queue));

    queue.run_for(Duration::from_millis(9_999), |queue, event| {
        ctl.handle_redirect(event, queue);
    });
    assert!(!ctl.view().banner_faded);

    queue.run_for(Duration::from_millis(1), |queue, event| {
        ctl.handle_redirect(event, queue);
    });
    assert!(ctl.view().banner_faded);
    assert!(ctl.view().navigations.is_empty());

    queue.run_for(Duration::from_millis(1_000), |queue, event| {
        ctl.handle_redirect(event, queue);
    });
    assert_eq!(ctl.view().navigations, vec!["/home".to_string()]);

    // A late duplicate changes nothing.
    ctl.handle_redirect(RedirectEvent::Navigate, &mut queue);
    assert_eq!(ctl.view().navigations.len(), 1);
    assert!(queue.is_idle());
}

#[test]
fn redirect_uses_configured_location() {
    let config = PageConfig::default().with_home_location("/");
    let view = MemoryChecklistView::with_items(five_items());
    let mut ctl = ChecklistController::with_config(view, five_items(), config);
    let mut queue = TimerQueue::new();
    ctl.arm_redirect(&mut queue);
    queue.run_for(Duration::from_secs(11), |queue, event| {
        ctl.handle_redirect(event, queue);
    });
    assert_eq!(ctl.view().navigations, vec!["/".to_string()]);
}

#[test]
fn toast_is_removed_after_display_and_exit_animation() {
    let mut queue = TimerQueue::new();
    let mut center = ToastCenter::default();
    center.show("Guardado", Severity::Success, &mut queue);

    queue.run_for(Duration::from_millis(5_000), |queue, event| {
        center.handle(event, queue);
    });
    assert_eq!(center.toasts().len(), 1);
    assert!(center.toasts()[0].leaving);

    queue.run_for(Duration::from_millis(299), |queue, event| {
        center.handle(event, queue);
    });
    assert_eq!(center.toasts().len(), 1);

    queue.run_for(Duration::from_millis(1), |queue, event| {
        center.handle(event, queue);
    });
    assert!(center.is_empty());
}

#[test]
fn short_password_is_flagged_then_cleared() {
    let mut queue = TimerQueue::new();
    let mut form = FormValidator::new(Duration::from_millis(300))
        .field("clave", FieldRules::text().required().min_length(8));

    assert_eq!(
        form.on_blur("clave"),
        Some(FieldStatus::Invalid(FieldError::Required))
    );
    form.on_input("clave", "abc", &mut queue);
    assert_eq!(
        form.on_blur("clave"),
        Some(FieldStatus::Invalid(FieldError::TooShort { min: 8 }))
    );
    assert_eq!(
        form.status("clave").error().map(ToString::to_string),
        Some("Mínimo 8 caracteres".to_string())
    );

    form.on_input("clave", "abcdefgh", &mut queue);
    queue.run_for(Duration::from_millis(300), |_, event| {
        form.handle(event);
    });
    assert_eq!(form.status("clave"), FieldStatus::Valid);
    assert!(form.status("clave").error().is_none());
}
