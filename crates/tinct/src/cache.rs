//! A small thread-safe memo table.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use parking_lot::RwLock;

/// Remembers computed values by key.
///
/// Reads take a shared lock; a miss computes outside any lock and then
/// inserts. Two racing misses may both compute, and the first insert wins, so
/// every caller sees the same stored value.
pub struct Memo<K, V> {
    entries: RwLock<HashMap<K, V>>,
}

impl<K, V> Memo<K, V>
where
    K: Eq + Hash + fmt::Debug,
    V: Clone,
{
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub fn get(&self, key: &K) -> Option<V> {
        self.entries.read().get(key).cloned()
    }

    /// Return the stored value for `key`, computing and storing it on a miss.
    pub fn get_or_insert_with(&self, key: K, compute: impl FnOnce() -> V) -> V {
        if let Some(value) = self.get(&key) {
            tracing::trace!(?key, "memo hit");
            return value;
        }

        tracing::trace!(?key, "memo miss");
        let value = compute();
        self.entries.write().entry(key).or_insert(value).clone()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    pub fn clear(&self) {
        self.entries.write().clear();
    }
}

impl<K, V> Default for Memo<K, V>
where
    K: Eq + Hash + fmt::Debug,
    V: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> fmt::Debug for Memo<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memo")
            .field("entries", &self.entries.read().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[test]
    fn test_computes_once_per_key() {
        let memo: Memo<&str, usize> = Memo::new();
        let calls = AtomicUsize::new(0);
        let compute = || {
            calls.fetch_add(1, Ordering::SeqCst);
            42
        };

        assert_eq!(memo.get_or_insert_with("answer", compute), 42);
        assert_eq!(memo.get_or_insert_with("answer", compute), 42);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(memo.get(&"answer"), Some(42));
        assert_eq!(memo.get(&"question"), None);
    }

    #[test]
    fn test_clear() {
        let memo = Memo::new();
        memo.get_or_insert_with(1u8, || "one".to_string());
        memo.get_or_insert_with(2u8, || "two".to_string());
        assert_eq!(memo.len(), 2);

        memo.clear();
        assert!(memo.is_empty());
        assert_eq!(memo.get_or_insert_with(1u8, || "uno".to_string()), "uno");
    }

    #[test]
    fn test_shared_across_threads() {
        let memo = Arc::new(Memo::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let memo = Arc::clone(&memo);
                std::thread::spawn(move || memo.get_or_insert_with(i % 2, || i % 2 * 10))
            })
            .collect();
        for handle in handles {
            let value = handle.join().unwrap();
            assert!(value == 0 || value == 10);
        }
        assert_eq!(memo.len(), 2);
    }
}
