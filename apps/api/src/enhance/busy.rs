//! Per-field "enhancement in progress" flags.
//!
//! A flag is held by a `BusyGuard` and cleared when the guard drops, so a finished,
//! failed, or panicking enhancement task always releases its field.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Clone, Default)]
pub struct BusyFields {
    keys: Arc<Mutex<HashSet<String>>>,
}

impl BusyFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the flag for `key`. Returns `None` if it is already set.
    pub fn try_acquire(&self, key: String) -> Option<BusyGuard> {
        if !self.lock().insert(key.clone()) {
            return None;
        }
        Some(BusyGuard {
            fields: self.clone(),
            key,
        })
    }

    /// Keys currently flagged, sorted.
    pub fn snapshot(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.lock().iter().cloned().collect();
        keys.sort();
        keys
    }

    fn lock(&self) -> MutexGuard<'_, HashSet<String>> {
        // a poisoned set is still a valid set
        self.keys.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Clears its field's flag on drop.
pub struct BusyGuard {
    fields: BusyFields,
    key: String,
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.fields.lock().remove(&self.key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_acquire_of_same_key_is_refused() {
        let busy = BusyFields::new();
        let guard = busy.try_acquire("experience/1/description".into());
        assert!(guard.is_some());
        assert!(busy.try_acquire("experience/1/description".into()).is_none());
        assert_eq!(busy.snapshot(), vec!["experience/1/description".to_string()]);
    }

    #[test]
    fn test_different_keys_are_independent() {
        let busy = BusyFields::new();
        let _a = busy.try_acquire("a".into()).unwrap();
        let _b = busy.try_acquire("b".into()).unwrap();
        assert_eq!(busy.snapshot(), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_drop_clears_flag() {
        let busy = BusyFields::new();
        {
            let _guard = busy.try_acquire("k".into()).unwrap();
            assert_eq!(busy.snapshot().len(), 1);
        }
        assert!(busy.snapshot().is_empty());
        assert!(busy.try_acquire("k".into()).is_some());
    }
}
