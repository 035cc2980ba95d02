// SPDX-License-Identifier: MPL-2.0
//! Ordered collection of choices with silent bounds enforcement.
//!
//! Every mutation is a no-op when its precondition fails (full collection,
//! unknown id); callers never see an error for these. Insertion order is
//! display and selection order.

use super::choice::{Choice, ChoiceId};
use crate::config::{DEFAULT_CHOICE_TEXTS, MAX_CHOICES};

/// The ordered, bounded choice collection.
#[derive(Debug, Clone, Default)]
pub struct ChoiceStore {
    choices: Vec<Choice>,
    next_id: u64,
}

impl ChoiceStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with the default five entries.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut store = Self::new();
        for text in DEFAULT_CHOICE_TEXTS {
            store.add(text);
        }
        store
    }

    /// Appends a new choice, returning its id, or `None` when the
    /// collection is already at capacity.
    pub fn add(&mut self, text: &str) -> Option<ChoiceId> {
        if self.choices.len() >= MAX_CHOICES {
            return None;
        }
        let id = ChoiceId(self.next_id);
        self.next_id += 1;
        self.choices.push(Choice::new(id, text));
        Some(id)
    }

    /// Replaces the text of an existing choice, recomputing its link
    /// status. Unknown ids are ignored.
    pub fn update(&mut self, id: ChoiceId, text: &str) {
        if let Some(choice) = self.choices.iter_mut().find(|c| c.id() == id) {
            choice.set_text(text);
        }
    }

    /// Removes a choice, preserving the relative order of the rest.
    /// Unknown ids are ignored, so a repeated remove is a no-op.
    pub fn remove(&mut self, id: ChoiceId) {
        self.choices.retain(|c| c.id() != id);
    }

    /// Empties the collection unconditionally.
    pub fn clear(&mut self) {
        self.choices.clear();
    }

    /// Restores the default five entries, discarding current contents.
    /// Fresh ids are assigned; old ids stay retired.
    pub fn reset(&mut self) {
        self.choices.clear();
        for text in DEFAULT_CHOICE_TEXTS {
            self.add(text);
        }
    }

    #[must_use]
    pub fn get(&self, id: ChoiceId) -> Option<&Choice> {
        self.choices.iter().find(|c| c.id() == id)
    }

    /// The choice at a display/selection position.
    #[must_use]
    pub fn get_at(&self, index: usize) -> Option<&Choice> {
        self.choices.get(index)
    }

    #[must_use]
    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.choices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    /// Whether another `add` would succeed.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.choices.len() >= MAX_CHOICES
    }
}
