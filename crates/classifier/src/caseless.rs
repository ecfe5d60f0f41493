//! ASCII case-insensitive lookup collections for extension tables.
//!
//! Lookups compare with `eq_ignore_ascii_case`, so callers never lowercase
//! their input and a lookup never allocates. Tables hold a few dozen keys
//! at most, which keeps a linear search cheaper than hashing a folded copy.

/// A set of extensions with case-insensitive membership.
#[derive(Debug, Clone, Default)]
pub struct ExtensionSet {
    entries: Vec<&'static str>,
}

impl ExtensionSet {
    /// Build a set, dropping entries that differ from an earlier one only
    /// by case.
    pub fn new(entries: &[&'static str]) -> Self {
        let mut set = Self::default();
        for entry in entries {
            set.insert(entry);
        }
        set
    }

    fn insert(&mut self, entry: &'static str) {
        if !self.contains(entry) {
            self.entries.push(entry);
        }
    }

    pub fn contains(&self, extension: &str) -> bool {
        self.entries
            .iter()
            .any(|e| e.eq_ignore_ascii_case(extension))
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A map keyed by extension with case-insensitive lookup.
#[derive(Debug, Clone)]
pub struct CaselessMap<V> {
    entries: Vec<(&'static str, V)>,
}

impl<V> Default for CaselessMap<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<V> CaselessMap<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace. Returns the previous value for an equal key.
    pub fn insert(&mut self, key: &'static str, value: V) -> Option<V> {
        match self
            .entries
            .iter_mut()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
        {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(k, _)| *k)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V> FromIterator<(&'static str, V)> for CaselessMap<V> {
    fn from_iter<I: IntoIterator<Item = (&'static str, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}
