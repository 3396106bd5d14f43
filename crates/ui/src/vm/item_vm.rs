use checklist_core::model::{Answer, ChecklistItem, ItemId};

/// One of the three answer controls of an item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub answer: Answer,
    pub dom_id: String,
    pub label: &'static str,
    pub tooltip: &'static str,
    pub value: &'static str,
    pub checked: bool,
}

/// Render model of a checklist item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemVm {
    pub id: ItemId,
    pub dom_id: String,
    pub prompt: String,
    pub answer: Answer,
    pub options: Vec<OptionVm>,
}

impl ItemVm {
    #[must_use]
    pub fn new(item: &ChecklistItem, answer: Answer) -> Self {
        let dom_id = item.id.dom_id();
        let options = Answer::CONTROLS
            .iter()
            .filter_map(|control| {
                let value = control.control_value()?;
                let marker = control.marker()?;
                Some(OptionVm {
                    answer: *control,
                    dom_id: format!("{dom_id}-{}", marker.data_type()),
                    label: control.label(),
                    tooltip: tooltip_text(*control),
                    value,
                    checked: answer == *control,
                })
            })
            .collect();
        Self {
            id: item.id,
            dom_id,
            prompt: item.prompt.clone(),
            answer,
            options,
        }
    }

    #[must_use]
    pub fn container_class(&self) -> String {
        let mut class = String::from("question-item");
        if self.answer.is_answered() {
            class.push_str(" completed");
        }
        if let Some(marker) = self.answer.marker() {
            class.push(' ');
            class.push_str(marker.class());
        }
        class
    }

    /// `data-type` of the answered marker, empty while unanswered.
    #[must_use]
    pub fn marker_type(&self) -> &'static str {
        self.answer.marker().map_or("", |marker| marker.data_type())
    }
}

fn tooltip_text(answer: Answer) -> &'static str {
    match answer {
        Answer::Ok => "Cumple",
        Answer::NotApplicable => "No aplica",
        Answer::PartiallyDone => "Parcialmente realizado",
        Answer::Unanswered => "",
    }
}

/// Items whose prompt or section contains `query`, ignoring case. An empty
/// query keeps everything.
#[must_use]
pub fn filter_items<'a>(items: &'a [ChecklistItem], query: &str) -> Vec<&'a ChecklistItem> {
    let query = query.trim().to_lowercase();
    items
        .iter()
        .filter(|item| {
            query.is_empty()
                || item.prompt.to_lowercase().contains(&query)
                || item
                    .section
                    .as_deref()
                    .is_some_and(|section| section.to_lowercase().contains(&query))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answered_item_carries_marker_classes() {
        let item = ChecklistItem::new(4, "Antivirus actualizado");
        let vm = ItemVm::new(&item, Answer::NotApplicable);
        assert_eq!(vm.dom_id, "question-4");
        assert!(vm.container_class().contains("completed"));
        assert!(vm.container_class().contains(Answer::NotApplicable.marker().unwrap().class()));
        assert_eq!(vm.marker_type(), "na");
        let checked: Vec<_> = vm.options.iter().filter(|o| o.checked).map(|o| o.value).collect();
        assert_eq!(checked, vec!["N/A"]);
    }

    #[test]
    fn unanswered_item_has_three_unchecked_controls() {
        let vm = ItemVm::new(&ChecklistItem::new(1, "Cables"), Answer::Unanswered);
        assert_eq!(vm.options.len(), 3);
        assert!(vm.options.iter().all(|o| !o.checked));
        assert_eq!(vm.container_class(), "question-item");
        assert_eq!(vm.marker_type(), "");
    }

    #[test]
    fn search_matches_prompt_and_section() {
        let items = vec![
            ChecklistItem::new(1, "Monitor limpio").with_section("Hardware"),
            ChecklistItem::new(2, "Antivirus").with_section("Software"),
        ];
        let ids: Vec<_> = filter_items(&items, "  HARD ").iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![ItemId::new(1)]);
        assert_eq!(filter_items(&items, "").len(), 2);
        assert!(filter_items(&items, "impresora").is_empty());
    }
}
