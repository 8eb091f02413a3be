//! Observable values
//!
//! - [`Signal`]: a value with subscriber callbacks, notified synchronously in
//!   registration order on every `set`/`update`.
//! - [`PersistentSignal`]: a `Signal` bound to a key in a [`KeyValueStore`].
//!   The initial value is read from the store; every change is written back
//!   as JSON before `set` returns.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::store::KeyValueStore;

type Subscriber<T> = Box<dyn FnMut(&T) + Send>;

pub struct Signal<T> {
    value: T,
    subscribers: Vec<Subscriber<T>>,
}

impl<T> Signal<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            subscribers: Vec::new(),
        }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn set(&mut self, value: T) {
        self.value = value;
        self.notify();
    }

    /// Replace the value with one derived from the current one
    pub fn update<F>(&mut self, f: F)
    where
        F: FnOnce(&T) -> T,
    {
        let next = f(&self.value);
        self.set(next);
    }

    pub fn subscribe<F>(&mut self, callback: F)
    where
        F: FnMut(&T) + Send + 'static,
    {
        self.subscribers.push(Box::new(callback));
    }

    fn notify(&mut self) {
        for subscriber in self.subscribers.iter_mut() {
            subscriber(&self.value);
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signal")
            .field("value", &self.value)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

/// A [`Signal`] persisted under a store key
pub struct PersistentSignal<T> {
    key: String,
    signal: Signal<T>,
}

impl<T> PersistentSignal<T>
where
    T: Serialize + DeserializeOwned + Send + 'static,
{
    pub fn new(store: Arc<dyn KeyValueStore>, key: impl Into<String>, default: T) -> Self {
        let key = key.into();
        let initial = load_or_default(store.as_ref(), &key, default);

        let mut signal = Signal::new(initial);
        let writer_key = key.clone();
        signal.subscribe(move |value: &T| persist(store.as_ref(), &writer_key, value));

        Self { key, signal }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn get(&self) -> &T {
        self.signal.get()
    }

    pub fn set(&mut self, value: T) {
        self.signal.set(value);
    }

    pub fn update<F>(&mut self, f: F)
    where
        F: FnOnce(&T) -> T,
    {
        self.signal.update(f);
    }
}

fn load_or_default<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str, default: T) -> T {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return default,
        Err(e) => {
            tracing::warn!(key, error = %e, "failed to read stored value, using default");
            return default;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(key, error = %e, "failed to parse stored value, using default");
            default
        }
    }
}

fn persist<T: Serialize>(store: &dyn KeyValueStore, key: &str, value: &T) {
    let text = match serde_json::to_string(value) {
        Ok(text) => text,
        Err(e) => {
            tracing::error!(key, error = %e, "failed to serialize value");
            return;
        }
    };

    if let Err(e) = store.set(key, &text) {
        tracing::error!(key, error = %e, "failed to persist value");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use crate::models::Macros;
    use crate::store::{MemoryStore, StoreError, StoreResult};

    #[test]
    fn test_subscribers_run_in_order() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut signal = Signal::new(0);

        let a = Arc::clone(&seen);
        signal.subscribe(move |v| a.lock().unwrap().push(("a", *v)));
        let b = Arc::clone(&seen);
        signal.subscribe(move |v| b.lock().unwrap().push(("b", *v)));

        signal.set(1);
        signal.update(|v| v + 1);

        assert_eq!(
            *seen.lock().unwrap(),
            vec![("a", 1), ("b", 1), ("a", 2), ("b", 2)]
        );
    }

    #[test]
    fn test_default_when_absent() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let signal = PersistentSignal::new(store.clone(), "totals", Macros::zero());

        assert_eq!(*signal.get(), Macros::zero());
        // Construction alone does not write
        assert_eq!(store.get("totals").unwrap(), None);
    }

    #[test]
    fn test_set_is_written_before_returning() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let mut signal = PersistentSignal::new(store.clone(), "totals", Macros::zero());

        signal.set(Macros::new(70.0, 6.0, 5.0, 1.0));

        let raw = store.get("totals").unwrap().unwrap();
        let stored: Macros = serde_json::from_str(&raw).unwrap();
        assert_eq!(stored, Macros::new(70.0, 6.0, 5.0, 1.0));
    }

    #[test]
    fn test_reload_yields_last_value() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        {
            let mut signal = PersistentSignal::new(store.clone(), "totals", Macros::zero());
            signal.update(|m| *m + Macros::new(1.0, 2.0, 3.0, 4.0));
        }

        let reloaded = PersistentSignal::new(store, "totals", Macros::zero());
        assert_eq!(*reloaded.get(), Macros::new(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn test_invalid_stored_text_falls_back_to_default() {
        let store: Arc<dyn KeyValueStore> =
            Arc::new(MemoryStore::with_entries([("totals", "{not json")]));
        let default = Macros::new(1.0, 1.0, 1.0, 1.0);

        let signal = PersistentSignal::new(store, "totals", default);
        assert_eq!(*signal.get(), default);
    }

    #[test]
    fn test_wrong_shape_falls_back_to_default() {
        let store: Arc<dyn KeyValueStore> =
            Arc::new(MemoryStore::with_entries([("totals", r#"{"kcal": 5}"#)]));
        let signal = PersistentSignal::new(store, "totals", Macros::zero());
        assert_eq!(*signal.get(), Macros::zero());
    }

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> StoreResult<Option<String>> {
            Err(StoreError::Poisoned)
        }

        fn set(&self, _key: &str, _value: &str) -> StoreResult<()> {
            Err(StoreError::Poisoned)
        }
    }

    #[test]
    fn test_store_failures_do_not_surface() {
        let mut signal = PersistentSignal::new(Arc::new(BrokenStore), "totals", 5_i64);
        assert_eq!(*signal.get(), 5);
        signal.set(6);
        assert_eq!(*signal.get(), 6);
    }
}
