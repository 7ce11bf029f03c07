use std::collections::HashSet;

use tracing::debug;

use crate::errors::ServiceError;
use crate::filters::RecordFilter;
use crate::models::{ClientRecord, InventoryItem, MaterialRecord};

/// A record addressable by a unique string identifier.
pub trait Record {
    fn id(&self) -> &str;
}

impl Record for MaterialRecord {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for InventoryItem {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for ClientRecord {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Ordered collection of records with unique identifiers.
///
/// Insertion order is the display order and is never changed: filtering
/// returns borrowed views and edits replace fields in place.
#[derive(Debug, Clone)]
pub struct RecordStore<R> {
    records: Vec<R>,
}

impl<R: Record> RecordStore<R> {
    pub fn new(records: Vec<R>) -> Result<Self, ServiceError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id()) {
                return Err(ServiceError::Conflict(format!(
                    "duplicate record id '{}'",
                    record.id()
                )));
            }
        }
        Ok(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[R] {
        &self.records
    }

    pub fn get(&self, id: &str) -> Option<&R> {
        self.records.iter().find(|record| record.id() == id)
    }

    pub fn filtered<F: RecordFilter<R>>(&self, filter: &F) -> Vec<&R> {
        filter.apply(&self.records)
    }

    /// Applies `edit` to the record with `id`.
    ///
    /// Returns the edited record, or `None` when nothing matched, in which
    /// case the collection is untouched.
    pub fn update<F>(&mut self, id: &str, edit: F) -> Option<&R>
    where
        F: FnOnce(&mut R),
    {
        let Some(record) = self.records.iter_mut().find(|record| record.id() == id) else {
            debug!(id, "no record matched update");
            return None;
        };
        edit(&mut *record);
        Some(&*record)
    }
}

impl<'a, R> IntoIterator for &'a RecordStore<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
