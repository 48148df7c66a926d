use std::{collections::HashMap, hash::Hash};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counter<K>
where
    K: Eq + Hash,
{
    counts: HashMap<K, usize>,
}

impl<K> Default for Counter<K>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Counter<K>
where
    K: Eq + Hash,
{
    pub fn new() -> Self {
        Counter {
            counts: HashMap::new(),
        }
    }

    /// count of `key`, 0 if never seen
    pub fn get(&self, key: &K) -> usize {
        *self.counts.get(key).unwrap_or(&0)
    }

    pub fn increment(&mut self, key: K) {
        *self.counts.entry(key).or_insert(0) += 1;
    }

    /// number of distinct keys
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// sum of all counts
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, usize)> {
        self.counts.iter().map(|(k, &v)| (k, v))
    }

    pub fn into_map(self) -> HashMap<K, usize> {
        self.counts
    }
}

impl<K> Counter<K>
where
    K: Eq + Hash + Ord,
{
    /// the n most frequent keys. equal counts are ordered by key
    pub fn mostcommon(&self, n: usize) -> Vec<(&K, usize)> {
        let mut counts_vec: Vec<(&K, usize)> = self.iter().collect();
        counts_vec.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        counts_vec.into_iter().take(n).collect()
    }

    /// every key, ascending
    pub fn sorted_by_key(&self) -> Vec<(&K, usize)> {
        let mut counts_vec: Vec<(&K, usize)> = self.iter().collect();
        counts_vec.sort_by(|a, b| a.0.cmp(b.0));
        counts_vec
    }
}

impl<K> FromIterator<K> for Counter<K>
where
    K: Eq + Hash,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut counter = Counter::new();
        iter.into_iter().for_each(|key| counter.increment(key));
        counter
    }
}
