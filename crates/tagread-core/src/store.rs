//! In-memory record store with source-tagged merge semantics.
//!
//! The store owns the session's record table. OCR reprocessing replaces
//! only OCR-sourced rows; manually entered rows survive every batch and
//! only go away through explicit deletion. Sorting is a display view and
//! never mutates insertion order.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::StoreError;
use crate::models::record::{Record, RecordSource};

/// An editable record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordField {
    Name,
    Organization,
}

impl FromStr for RecordField {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "organization" => Ok(Self::Organization),
            other => Err(StoreError::UnknownField(other.to_string())),
        }
    }
}

/// Sort key field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Name,
    Organization,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Ordered collection of source-tagged records.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<Record>,
    sort: Option<(SortField, SortDirection)>,
}

impl RecordStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all OCR-sourced records with a new batch.
    ///
    /// Manual records and their relative order are preserved ahead of the
    /// new batch. Records in the batch are tagged [`RecordSource::Ocr`]
    /// regardless of their incoming tag.
    pub fn append_ocr_batch(&mut self, records: Vec<Record>) {
        let before = self.records.len();
        self.records.retain(|r| r.source == RecordSource::Manual);
        debug!(
            "cleared {} OCR records, appending {}",
            before - self.records.len(),
            records.len()
        );
        self.records.extend(records.into_iter().map(|mut r| {
            r.source = RecordSource::Ocr;
            r
        }));
    }

    /// Append one manually entered record.
    ///
    /// Fails with [`StoreError::EmptyName`] when the trimmed name is
    /// empty; the store is left untouched in that case.
    pub fn add_manual(&mut self, name: &str, organization: &str) -> Result<(), StoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::EmptyName);
        }
        self.records
            .push(Record::new(name, organization.trim(), RecordSource::Manual));
        Ok(())
    }

    /// Update one field of the record at `index` (insertion order).
    ///
    /// Editing the name recomputes the derived first/last name parts.
    pub fn edit(&mut self, index: usize, field: RecordField, value: &str) -> Result<(), StoreError> {
        let len = self.records.len();
        let record = self
            .records
            .get_mut(index)
            .ok_or(StoreError::OutOfBounds { index, len })?;

        match field {
            RecordField::Name => record.set_name(value),
            RecordField::Organization => record.organization = value.to_string(),
        }
        Ok(())
    }

    /// Remove and return the record at `index` (insertion order).
    ///
    /// Subsequent indices shift down by one; callers must not cache
    /// indices across a delete.
    pub fn delete(&mut self, index: usize) -> Result<Record, StoreError> {
        let len = self.records.len();
        if index >= len {
            return Err(StoreError::OutOfBounds { index, len });
        }
        Ok(self.records.remove(index))
    }

    /// Activate a sort view. Does not mutate insertion order.
    pub fn sort_by(&mut self, field: SortField, direction: SortDirection) {
        self.sort = Some((field, direction));
    }

    /// Drop the active sort view, restoring insertion order for display.
    pub fn clear_sort(&mut self) {
        self.sort = None;
    }

    /// The records in display order: the active sort view if one is set,
    /// insertion order otherwise. Sorting is case-insensitive and stable.
    pub fn view(&self) -> Vec<Record> {
        let mut records: Vec<Record> = self.records.clone();
        if let Some((field, direction)) = self.sort {
            records.sort_by(|a, b| {
                let (ka, kb) = match field {
                    SortField::Name => (&a.name, &b.name),
                    SortField::Organization => (&a.organization, &b.organization),
                };
                let ordering = ka.to_lowercase().cmp(&kb.to_lowercase());
                match direction {
                    SortDirection::Asc => ordering,
                    SortDirection::Desc => ordering.reverse(),
                }
            });
        }
        records
    }

    /// The records in insertion order, ignoring any active sort view.
    pub fn all(&self) -> &[Record] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ocr(name: &str, org: &str) -> Record {
        Record::new(name, org, RecordSource::Ocr)
    }

    #[test]
    fn test_append_ocr_batch_preserves_manual() {
        let mut store = RecordStore::new();
        store.append_ocr_batch(vec![ocr("Old Ocr", "Old Org")]);
        store.add_manual("Manual One", "Org A").unwrap();
        store.add_manual("Manual Two", "Org B").unwrap();

        store.append_ocr_batch(vec![ocr("New Ocr", "New Org")]);

        let manual: Vec<&Record> = store
            .all()
            .iter()
            .filter(|r| r.source == RecordSource::Manual)
            .collect();
        assert_eq!(manual.len(), 2);
        assert_eq!(manual[0].name, "Manual One");
        assert_eq!(manual[1].name, "Manual Two");
        assert_eq!(store.len(), 3);
        assert!(store.all().iter().all(|r| r.name != "Old Ocr"));
    }

    #[test]
    fn test_append_ocr_batch_retags_records() {
        let mut store = RecordStore::new();
        store.append_ocr_batch(vec![Record::new("A B", "C", RecordSource::Manual)]);
        assert_eq!(store.all()[0].source, RecordSource::Ocr);
    }

    #[test]
    fn test_add_manual_rejects_empty_name() {
        let mut store = RecordStore::new();
        assert!(matches!(
            store.add_manual("   ", "Acme"),
            Err(StoreError::EmptyName)
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn test_edit_name_recomputes_parts() {
        let mut store = RecordStore::new();
        store.add_manual("John Smith", "Acme").unwrap();
        store.edit(0, RecordField::Name, "Jane Q Public").unwrap();

        let record = &store.all()[0];
        assert_eq!(record.name, "Jane Q Public");
        assert_eq!(record.first_name, "Jane");
        assert_eq!(record.last_name, "Q Public");
    }

    #[test]
    fn test_edit_organization() {
        let mut store = RecordStore::new();
        store.add_manual("John Smith", "Acme").unwrap();
        store.edit(0, RecordField::Organization, "Globex").unwrap();
        assert_eq!(store.all()[0].organization, "Globex");
        assert_eq!(store.all()[0].first_name, "John");
    }

    #[test]
    fn test_edit_out_of_bounds() {
        let mut store = RecordStore::new();
        assert!(matches!(
            store.edit(0, RecordField::Name, "x"),
            Err(StoreError::OutOfBounds { index: 0, len: 0 })
        ));
    }

    #[test]
    fn test_delete_shifts_indices() {
        let mut store = RecordStore::new();
        store.add_manual("One A", "").unwrap();
        store.add_manual("Two B", "").unwrap();
        store.add_manual("Three C", "").unwrap();

        let removed = store.delete(1).unwrap();
        assert_eq!(removed.name, "Two B");
        assert_eq!(store.len(), 2);
        assert_eq!(store.all()[1].name, "Three C");

        assert!(store.delete(2).is_err());
    }

    #[test]
    fn test_sort_is_a_view() {
        let mut store = RecordStore::new();
        store.add_manual("Charlie Day", "Paddys").unwrap();
        store.add_manual("alice Smith", "Wonder").unwrap();
        store.add_manual("Bob Jones", "Acme").unwrap();

        store.sort_by(SortField::Name, SortDirection::Asc);
        let asc: Vec<String> = store.view().into_iter().map(|r| r.name).collect();
        assert_eq!(asc, vec!["alice Smith", "Bob Jones", "Charlie Day"]);

        store.sort_by(SortField::Name, SortDirection::Desc);
        let desc: Vec<String> = store.view().into_iter().map(|r| r.name).collect();
        assert_eq!(desc, vec!["Charlie Day", "Bob Jones", "alice Smith"]);

        // Insertion order is untouched.
        assert_eq!(store.all()[0].name, "Charlie Day");

        store.clear_sort();
        let original: Vec<String> = store.view().into_iter().map(|r| r.name).collect();
        assert_eq!(original, vec!["Charlie Day", "alice Smith", "Bob Jones"]);
    }

    #[test]
    fn test_sort_stable_for_equal_keys() {
        let mut store = RecordStore::new();
        store.add_manual("Same Name", "first").unwrap();
        store.add_manual("same name", "second").unwrap();

        store.sort_by(SortField::Name, SortDirection::Desc);
        let orgs: Vec<String> = store.view().into_iter().map(|r| r.organization).collect();
        assert_eq!(orgs, vec!["first", "second"]);
    }

    #[test]
    fn test_field_from_str() {
        assert_eq!("name".parse::<RecordField>().unwrap(), RecordField::Name);
        assert_eq!(
            "organization".parse::<RecordField>().unwrap(),
            RecordField::Organization
        );
        assert!(matches!(
            "bogus".parse::<RecordField>(),
            Err(StoreError::UnknownField(_))
        ));
    }
}
