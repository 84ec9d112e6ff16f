//! The saved-results panel: ordered, deletable, with a persisted mirror.

use serde::{Deserialize, Serialize};

use crate::core::Calculator;
use crate::store::{SlotStore, LAST_RESULT_KEY};

/// Suffix a rendered list item carries for its per-entry delete button.
pub const DELETE_AFFORDANCE: &str = "✕";

/// An immutable snapshot of one saved result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The display text at the moment it was saved.
    pub display_text: String,
}

impl HistoryEntry {
    /// Creates an entry from the saved display text.
    #[must_use]
    pub fn new(display_text: &str) -> Self {
        Self {
            display_text: display_text.to_string(),
        }
    }
}

/// Ordered list of saved results.
///
/// Entries are appended by [`save`](Self::save) and removed one at a time
/// by the user; while the list is empty the "no results" placeholder shows
/// instead. Entries own their text and hold no reference back to the
/// calculator they came from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryPanel {
    entries: Vec<HistoryEntry>,
}

impl HistoryPanel {
    /// Text shown while the panel has no entries.
    pub const EMPTY_PLACEHOLDER: &'static str = "no results";

    /// Creates an empty panel.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of saved entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been saved (or everything was deleted).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// The entry at `index` (0 = oldest).
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    /// True while the "no results" placeholder is visible.
    #[must_use]
    pub fn placeholder_visible(&self) -> bool {
        self.entries.is_empty()
    }

    /// Saves a result.
    ///
    /// Appends an entry and mirrors the text into the store's single slot
    /// under [`LAST_RESULT_KEY`] (last write wins — the slot holds one
    /// value, not a history). An empty value saves nothing. Returns
    /// whether an entry was added.
    pub fn save(&mut self, value: &str, store: &mut impl SlotStore) -> bool {
        if value.is_empty() {
            return false;
        }
        self.entries.push(HistoryEntry::new(value));
        store.write(LAST_RESULT_KEY, value);
        tracing::debug!(value, entries = self.entries.len(), "result saved");
        true
    }

    /// Removes one entry. Out-of-range indices are ignored.
    pub fn delete(&mut self, index: usize) -> Option<HistoryEntry> {
        if index < self.entries.len() {
            Some(self.entries.remove(index))
        } else {
            None
        }
    }

    /// The label a rendered list item carries: the display text plus the
    /// delete affordance.
    #[must_use]
    pub fn item_label(&self, index: usize) -> Option<String> {
        self.entries
            .get(index)
            .map(|entry| format!("{}{DELETE_AFFORDANCE}", entry.display_text))
    }

    /// Feeds the most recent entry back into the calculator.
    ///
    /// Reads the last item's label, strips the delete affordance, and
    /// types the remaining text through `append_digit` one character at a
    /// time, so the operand sanitization rules still apply. No-op while
    /// the panel is empty.
    pub fn recall_last(&self, calc: &mut Calculator) {
        let Some(index) = self.entries.len().checked_sub(1) else {
            return;
        };
        let Some(label) = self.item_label(index) else {
            return;
        };
        let text = label.trim_end_matches(DELETE_AFFORDANCE);
        for ch in text.chars() {
            let _ = calc.append_digit(ch);
        }
    }

    /// Serializes the entries to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.entries)
    }

    /// Restores a panel from [`to_json`](Self::to_json) output.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let entries: Vec<HistoryEntry> = serde_json::from_str(json)?;
        Ok(Self { entries })
    }
}
