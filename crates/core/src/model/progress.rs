use std::collections::BTreeSet;

use crate::model::ItemId;

/// Ids of the items that currently hold a non-empty answer.
///
/// Kept in step with the rendered answers: every path that changes an item's
/// answer calls [`CompletionSet::record`] in the same step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionSet {
    ids: BTreeSet<ItemId>,
}

impl CompletionSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or removes `id` depending on whether it is now answered.
    ///
    /// Returns true when membership changed.
    pub fn record(&mut self, id: ItemId, answered: bool) -> bool {
        if answered {
            self.ids.insert(id)
        } else {
            self.ids.remove(&id)
        }
    }

    #[must_use]
    pub fn contains(&self, id: ItemId) -> bool {
        self.ids.contains(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.ids.iter().copied()
    }
}

impl FromIterator<ItemId> for CompletionSet {
    fn from_iter<T: IntoIterator<Item = ItemId>>(iter: T) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

/// Aggregate completion of a checklist, derived on every answer change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
    pub percentage: u8,
    pub is_complete: bool,
}

impl Progress {
    /// Derives progress from the completed count and the fixed item total.
    ///
    /// `percentage` is `round(completed / total * 100)` with halves rounded up.
    /// An empty checklist counts as complete at 100 %.
    #[must_use]
    pub fn compute(completed: usize, total: usize) -> Self {
        let completed = completed.min(total);
        let percentage = if total == 0 {
            100
        } else {
            let scaled = (completed * 200 + total) / (total * 2);
            u8::try_from(scaled).unwrap_or(100)
        };
        Self {
            completed,
            total,
            percentage,
            is_complete: completed == total,
        }
    }

    #[must_use]
    pub fn of(set: &CompletionSet, total: usize) -> Self {
        Self::compute(set.len(), total)
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.total - self.completed
    }
}
