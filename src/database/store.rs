use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use thiserror::Error;

use crate::{consts::consts::EntityId, model::person::Person};

/// Every variant means the referenced person does not exist
#[derive(Error, Debug, PartialEq)]
pub enum StoreError {
    // CRUD - GET
    #[error("Not found, person does not exist: {0}")]
    CannotGetDoesNotExist(EntityId),

    // CRUD - UPDATE
    #[error("Cannot update, person does not exist: {0}")]
    CannotUpdateDoesNotExist(EntityId),

    // CRUD - DELETE
    #[error("Cannot delete, person does not exist: {0}")]
    CannotDeleteDoesNotExist(EntityId),
}

/// In-memory person table shared by every request handler.
///
/// A single reader / writer lock guards the whole map. Reads share the lock, every mutation holds
/// the write lock for its full check-then-act sequence so an update can never interleave with a
/// delete of the same id.
///
/// A poisoned lock is recovered instead of propagated: no operation panics while holding the write
/// guard, so the map is never left half-written.
pub struct PersonStore {
    person_rows: RwLock<HashMap<EntityId, Person>>,
}

impl PersonStore {
    pub fn new() -> Self {
        Self {
            person_rows: RwLock::new(HashMap::new()),
        }
    }

    /// Inserts the person, replacing any record already stored at its id
    pub fn add(&self, person: Person) {
        self.write().insert(person.id.clone(), person);
    }

    pub fn get(&self, id: &EntityId) -> Result<Person, StoreError> {
        self.read()
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::CannotGetDoesNotExist(id.clone()))
    }

    /// Snapshot of every record, in no particular order
    pub fn get_all(&self) -> Vec<Person> {
        self.read().values().cloned().collect()
    }

    /// Replaces name, age and hobbies of the record at `person.id`, the id itself never changes
    pub fn update(&self, person: Person) -> Result<Person, StoreError> {
        let mut person_rows = self.write();

        let existing = person_rows
            .get_mut(&person.id)
            .ok_or_else(|| StoreError::CannotUpdateDoesNotExist(person.id.clone()))?;

        existing.name = person.name;
        existing.age = person.age;
        existing.hobbies = person.hobbies;

        Ok(existing.clone())
    }

    pub fn delete(&self, id: &EntityId) -> Result<(), StoreError> {
        self.write()
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| StoreError::CannotDeleteDoesNotExist(id.clone()))
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<EntityId, Person>> {
        self.person_rows
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<EntityId, Person>> {
        self.person_rows
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for PersonStore {
    fn default() -> Self {
        Self::new()
    }
}
