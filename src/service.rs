//! Record service - the boundary-facing operation set
//!
//! Composes validation and the store. Holds an explicitly injected store
//! handle; callers own the connection lifetime.

use crate::record::{TreeRecord, TreeStats};
use crate::storage::SqliteStore;
use crate::validate::{self, TreeInput};
use crate::{Error, Result};

/// CRUD operations and statistics over tree records
pub struct TreeService<'a> {
    store: &'a SqliteStore,
}

impl<'a> TreeService<'a> {
    pub fn new(store: &'a SqliteStore) -> Self {
        Self { store }
    }

    /// Validate a payload and persist a new record. Returns the assigned id.
    pub fn create(&self, input: TreeInput) -> Result<i64> {
        let tree = validate::validate(input)?;
        self.store.insert_tree(&tree)
    }

    /// Fetch one record by id
    pub fn get(&self, id: i64) -> Result<TreeRecord> {
        self.store.get_tree(id)?.ok_or(Error::NotFound)
    }

    /// All records, newest first. Unfiltered and unpaginated.
    pub fn list(&self) -> Result<Vec<TreeRecord>> {
        self.store.list_trees()
    }

    /// Validate a payload and replace every mutable field of an existing
    /// record. The same required-field rule applies as on create.
    pub fn update(&self, id: i64, input: TreeInput) -> Result<()> {
        let tree = validate::validate(input)?;
        if self.store.update_tree(id, &tree)? {
            Ok(())
        } else {
            Err(Error::NotFound)
        }
    }

    /// Remove a record. Hard delete, no cascading state.
    pub fn delete(&self, id: i64) -> Result<()> {
        if self.store.delete_tree(id)? {
            Ok(())
        } else {
            Err(Error::NotFound)
        }
    }

    /// Aggregate counts over all current records
    pub fn stats(&self) -> Result<TreeStats> {
        self.store.stats()
    }
}
