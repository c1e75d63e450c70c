//! Fault-injecting store double for exercising the store-failure
//! paths. Test code only.

use tandem_ledger::{RangeScan, StateStore, StoreError};

/// A store whose configured operation always fails.
pub(crate) struct FailingStore {
    fail_get: bool,
    fail_put: bool,
    put_attempts: usize,
}

impl FailingStore {
    /// Every `get` fails.
    pub(crate) fn on_get() -> Self {
        Self {
            fail_get: true,
            fail_put: false,
            put_attempts: 0,
        }
    }

    /// Every `put` fails.
    pub(crate) fn on_put() -> Self {
        Self {
            fail_get: false,
            fail_put: true,
            put_attempts: 0,
        }
    }

    /// How many `put` calls were attempted.
    pub(crate) fn put_attempts(&self) -> usize {
        self.put_attempts
    }
}

impl StateStore for FailingStore {
    fn get(&mut self, _key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        if self.fail_get {
            Err(StoreError::new("injected get failure"))
        } else {
            Ok(None)
        }
    }

    fn put(&mut self, _key: &str, _value: Vec<u8>) -> Result<(), StoreError> {
        self.put_attempts += 1;
        if self.fail_put {
            Err(StoreError::new("injected put failure"))
        } else {
            Ok(())
        }
    }

    fn delete(&mut self, _key: &str) -> Result<(), StoreError> {
        Ok(())
    }

    fn range_scan(&mut self, _start: &str, _end: &str) -> Result<RangeScan<'_>, StoreError> {
        Ok(RangeScan::new(Box::new(std::iter::empty())))
    }
}
