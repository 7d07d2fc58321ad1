//! Insertion-ordered counting and ranking.
//!
//! Both the topic ranking and the daily keyword ranking need deterministic
//! output: descending by count, ties broken by the order keys were first
//! observed. `CountTable` makes that first-seen order explicit instead of
//! leaning on the iteration order of a hash map.

use std::borrow::Borrow;
use std::fmt;
use std::marker::PhantomData;

use serde::de::MapAccess;
use serde::de::Visitor;
use serde::ser::SerializeMap;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;

/// An association table of (key, count) pairs in first-seen key order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountTable<K: Eq> {
    entries: Vec<(K, u64)>,
}

impl<K: Eq> CountTable<K> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add `n` to the count of `key`, registering the key on first sight
    pub fn add(&mut self, key: K, n: u64) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, count)) => *count += n,
            None => self.entries.push((key, n)),
        }
    }

    pub fn get<Q>(&self, key: &Q) -> u64
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.entries
            .iter()
            .find(|(k, _)| k.borrow() == key)
            .map_or(0, |(_, count)| *count)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Iterate entries in first-seen key order
    pub fn iter(&self) -> impl Iterator<Item = (&K, u64)> {
        self.entries.iter().map(|(k, count)| (k, *count))
    }

    pub fn entries(&self) -> &[(K, u64)] {
        &self.entries
    }

    /// Descending sort by count; ties keep first-seen key order.
    ///
    /// The sort is stable, so equal counts come out in the order their keys
    /// entered the table.
    pub fn ranked(&self) -> CountTable<K>
    where
        K: Clone,
    {
        let mut entries = self.entries.clone();
        entries.sort_by(|(_, a), (_, b)| b.cmp(a));
        CountTable { entries }
    }
}

impl<K: Eq> Default for CountTable<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq> FromIterator<(K, u64)> for CountTable<K> {
    fn from_iter<I: IntoIterator<Item = (K, u64)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (key, count) in iter {
            table.add(key, count);
        }
        table
    }
}

// Serializes as a JSON object whose member order is the table's iteration
// order; the ranked tables rely on this to keep their ordering on the wire.
impl<K: Eq + Serialize> Serialize for CountTable<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, count) in &self.entries {
            map.serialize_entry(key, count)?;
        }
        map.end()
    }
}

impl<'de, K: Eq + Deserialize<'de>> Deserialize<'de> for CountTable<K> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct TableVisitor<K>(PhantomData<K>);

        impl<'de, K: Eq + Deserialize<'de>> Visitor<'de> for TableVisitor<K> {
            type Value = CountTable<K>;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a map of counts")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut table = CountTable::new();
                while let Some((key, count)) = access.next_entry::<K, u64>()? {
                    table.add(key, count);
                }
                Ok(table)
            }
        }

        deserializer.deserialize_map(TableVisitor(PhantomData))
    }
}
