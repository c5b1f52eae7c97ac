//! Confirmation record storage

use std::collections::HashMap;
use std::sync::Mutex;

use crate::models::BookingConfirmation;

/// Storage for booking confirmation records keyed by booking reference.
///
/// The trait keeps the renderer independent of the backing: tests run
/// against the in-memory map, and a durable store could be swapped in
/// without touching the handlers.
pub trait ConfirmationStore: Send + Sync {
    /// Insert or replace the record stored under its booking reference
    fn put(&self, record: BookingConfirmation);

    /// Fetch a record by booking reference
    fn get(&self, reference: &str) -> Option<BookingConfirmation>;

    /// Number of stored records
    fn count(&self) -> usize;
}

/// Process-local store; entries live until the process exits and are lost
/// on restart
#[derive(Default)]
pub struct InMemoryConfirmationStore {
    records: Mutex<HashMap<String, BookingConfirmation>>,
}

impl ConfirmationStore for InMemoryConfirmationStore {
    fn put(&self, record: BookingConfirmation) {
        let mut records = self.records.lock().expect("confirmation store poisoned");
        records.insert(record.booking_reference.clone(), record);
    }

    fn get(&self, reference: &str) -> Option<BookingConfirmation> {
        let records = self.records.lock().expect("confirmation store poisoned");
        records.get(reference).cloned()
    }

    fn count(&self) -> usize {
        let records = self.records.lock().expect("confirmation store poisoned");
        records.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_and_get() {
        let store = InMemoryConfirmationStore::default();
        assert_eq!(store.count(), 0);

        store.put(BookingConfirmation::sample());
        assert_eq!(store.count(), 1);

        let record = store.get("BK20250610ABC123").unwrap();
        assert_eq!(record.user_name, "Jane Doe");

        assert!(store.get("BK00000000XXXXXX").is_none());
    }

    #[test]
    fn test_put_is_an_idempotent_upsert() {
        let store = InMemoryConfirmationStore::default();

        store.put(BookingConfirmation::sample());
        let mut updated = BookingConfirmation::sample();
        updated.user_name = "Jane Q. Doe".to_string();
        store.put(updated);

        // Same key, replaced record
        assert_eq!(store.count(), 1);
        let record = store.get("BK20250610ABC123").unwrap();
        assert_eq!(record.user_name, "Jane Q. Doe");
    }
}
