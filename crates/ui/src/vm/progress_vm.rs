use checklist_core::model::Progress;

/// Display strings of the progress block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressVm {
    pub bar_style: String,
    pub percentage_label: String,
    pub counter: String,
    pub submit_enabled: bool,
    pub complete: bool,
}

impl ProgressVm {
    #[must_use]
    pub fn from_progress(progress: &Progress) -> Self {
        Self {
            bar_style: format!("width: {}%", progress.percentage),
            percentage_label: format!("{}%", progress.percentage),
            counter: format!(
                "{} de {} preguntas completadas",
                progress.completed, progress.total
            ),
            submit_enabled: progress.is_complete,
            complete: progress.is_complete,
        }
    }

    #[must_use]
    pub fn bar_class(&self) -> &'static str {
        if self.complete {
            "progress-bar progress-bar--complete"
        } else {
            "progress-bar"
        }
    }

    /// Classes of the submit button; it pulses once the checklist is complete.
    #[must_use]
    pub fn submit_class(&self) -> &'static str {
        if self.complete {
            "btn-submit animate__animated animate__pulse"
        } else {
            "btn-submit"
        }
    }
}
