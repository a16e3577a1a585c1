use std::hash::Hash;

use hashbrown::{Equivalent, HashMap};

/// Keyed store of named items, the lookup side of the algorithm factory.
pub struct Registry<T, K = String> {
    items: HashMap<K, T>,
}

impl<T, K> Registry<T, K> {
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T, K> Registry<T, K>
where
    K: Hash + Eq,
{
    pub fn register(&mut self, key: K, item: T) {
        self.items.insert(key, item);
    }

    pub fn get<Q>(&self, k: &Q) -> Option<&T>
    where
        Q: Hash + Equivalent<K> + ?Sized,
    {
        self.items.get(k)
    }

    pub fn is_registered<Q>(&self, k: &Q) -> bool
    where
        Q: Hash + Equivalent<K> + ?Sized,
    {
        self.items.contains_key(k)
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.items.keys()
    }
}

impl<T, K> Default for Registry<T, K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_accepts_borrowed_keys() {
        let mut registry: Registry<u32> = Registry::new();
        registry.register("one".to_string(), 1);
        registry.register("two".to_string(), 2);

        assert_eq!(registry.get("one"), Some(&1));
        assert!(registry.is_registered("two"));
        assert!(!registry.is_registered("three"));
        assert_eq!(registry.len(), 2);
    }
}
