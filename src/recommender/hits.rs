use std::fmt::{self, Debug, Display};

use serde::{Deserialize, Serialize};

/// One ranked result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HitEntry<K> {
    /// Document title or term
    pub key: K,
    /// Weight or similarity
    pub score: f64,
}

/// Ranked results of one query, descending by score.
/// Built fresh per query and handed to the caller.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Hits<K> {
    pub list: Vec<HitEntry<K>>,
}

impl<K> Hits<K> {
    pub fn new(list: Vec<HitEntry<K>>) -> Self {
        Self { list }
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Keys in rank order
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.list.iter().map(|hit| &hit.key)
    }

    /// Drop scores, keep rank order
    pub fn into_keys(self) -> Vec<K> {
        self.list.into_iter().map(|hit| hit.key).collect()
    }

    /// `(key, score)` pairs in rank order
    pub fn into_pairs(self) -> Vec<(K, f64)> {
        self.list.into_iter().map(|hit| (hit.key, hit.score)).collect()
    }
}

impl<K> FromIterator<(K, f64)> for Hits<K> {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(|(key, score)| HitEntry { key, score }).collect())
    }
}

impl<K> Debug for Hits<K>
where
    K: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            // one hit per line
            writeln!(f, "Hits [")?;
            for hit in &self.list {
                writeln!(f, "    {:?}: {:.6}", hit.key, hit.score)?;
            }
            write!(f, "]")
        } else {
            f.debug_list()
                .entries(self.list.iter().map(|hit| (&hit.key, hit.score)))
                .finish()
        }
    }
}

impl<K> Display for Hits<K>
where
    K: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (rank, hit) in self.list.iter().enumerate() {
            writeln!(f, "{:>3}. {} ({:.6})", rank + 1, hit.key, hit.score)?;
        }
        Ok(())
    }
}
