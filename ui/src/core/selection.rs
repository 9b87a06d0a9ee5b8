//! Ordered set of records the user has clicked on.

use super::record::{Record, RecordIndex};

#[derive(Debug, Clone, PartialEq)]
pub struct SelectedItem {
    pub index: RecordIndex,
    pub raw_text: String,
}

/// Click-ordered selection keyed by record index; no duplicates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionSet {
    items: Vec<SelectedItem>,
}

/// What a toggle did, so callers can log or animate it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Selected,
    Deselected,
}

impl SelectionSet {
    pub fn contains(&self, index: RecordIndex) -> bool {
        self.items.iter().any(|item| item.index == index)
    }

    /// Append the record if absent, remove it otherwise.
    pub fn toggle(&mut self, record: &Record) -> Toggle {
        if let Some(position) = self.items.iter().position(|item| item.index == record.index) {
            self.items.remove(position);
            Toggle::Deselected
        } else {
            self.items.push(SelectedItem {
                index: record.index,
                raw_text: record.raw_text.clone(),
            });
            Toggle::Selected
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[SelectedItem] {
        &self.items
    }

    pub fn texts(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.raw_text.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
