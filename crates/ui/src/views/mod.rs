mod checklist;
mod operator;
mod reset;
mod shell;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use checklist::{ChecklistPageView, SignalChecklistView};
pub use operator::OperatorFormView;
pub use reset::ReturnHomeView;
pub use shell::{PageChrome, SEARCH_INPUT_ID, WithTooltip};
