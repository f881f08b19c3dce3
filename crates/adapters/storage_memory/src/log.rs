//! Append-only, insertion-ordered record list shared by the repositories.

use std::sync::Mutex;

use salon_domain::error::StorageError;

pub(crate) struct AppendLog<T> {
    name: &'static str,
    records: Mutex<Vec<T>>,
}

impl<T: Clone> AppendLog<T> {
    pub(crate) fn new(name: &'static str) -> Self {
        Self {
            name,
            records: Mutex::new(Vec::new()),
        }
    }

    fn poisoned(&self) -> StorageError {
        StorageError::new(format!("{} store lock poisoned", self.name))
    }

    pub(crate) fn push(&self, record: T) -> Result<(), StorageError> {
        self.records
            .lock()
            .map_err(|_| self.poisoned())?
            .push(record);
        Ok(())
    }

    pub(crate) fn find(&self, predicate: impl Fn(&T) -> bool) -> Result<Option<T>, StorageError> {
        let records = self.records.lock().map_err(|_| self.poisoned())?;
        Ok(records.iter().find(|record| predicate(record)).cloned())
    }

    pub(crate) fn snapshot(&self) -> Result<Vec<T>, StorageError> {
        let records = self.records.lock().map_err(|_| self.poisoned())?;
        Ok(records.clone())
    }
}
