// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Tag-based response cache.
//!
//! Every cached response carries the tags it "provides". Write operations
//! invalidate by tag, removing every entry that provided any of the given
//! tags, so a later read for the same key goes back to the server.

use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum CacheTag {
    /// Metadata for a single track.
    Track(String),
    /// Cover image for a single track.
    Cover(String),
    /// Any listing of tracks.
    TrackList,
}

struct Entry<V> {
    value: V,
    tags: Vec<CacheTag>,
}

pub(crate) struct TagCache<V> {
    entries: HashMap<String, Entry<V>>,
}

impl<V: Clone> TagCache<V> {
    pub(crate) fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub(crate) fn get(&self, key: &str) -> Option<V> {
        self.entries.get(key).map(|entry| entry.value.clone())
    }

    pub(crate) fn insert(&mut self, key: &str, value: V, tags: Vec<CacheTag>) {
        self.entries.insert(key.to_string(), Entry { value, tags });
    }

    /// Removes entries providing any of `tags`, returning how many went.
    pub(crate) fn invalidate(&mut self, tags: &[CacheTag]) -> usize {
        let before = self.entries.len();
        self.entries
            .retain(|_, entry| !entry.tags.iter().any(|tag| tags.contains(tag)));
        before - self.entries.len()
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_returns_inserted_value() {
        let mut cache = TagCache::new();
        cache.insert("A", 1, vec![CacheTag::Track("A".into())]);

        assert_eq!(cache.get("A"), Some(1));
        assert_eq!(cache.get("B"), None);
    }

    #[test]
    fn invalidate_removes_only_matching_entries() {
        let mut cache = TagCache::new();
        cache.insert("A", 1, vec![CacheTag::Track("A".into())]);
        cache.insert("B", 2, vec![CacheTag::Track("B".into())]);
        cache.insert("A-cover", 3, vec![CacheTag::Cover("A".into())]);

        let removed = cache.invalidate(&[CacheTag::Track("A".into()), CacheTag::TrackList]);

        assert_eq!(removed, 1);
        assert_eq!(cache.get("A"), None);
        assert_eq!(cache.get("B"), Some(2));
        assert_eq!(cache.get("A-cover"), Some(3));
    }

    #[test]
    fn list_tag_invalidates_every_listing() {
        let mut cache = TagCache::new();
        cache.insert("all", 1, vec![CacheTag::TrackList]);
        cache.insert(
            "A",
            2,
            vec![CacheTag::Track("A".into()), CacheTag::TrackList],
        );

        assert_eq!(cache.invalidate(&[CacheTag::TrackList]), 2);
        assert_eq!(cache.len(), 0);
    }

    #[test]
    fn clear_empties_cache() {
        let mut cache = TagCache::new();
        cache.insert("A", 1, vec![]);
        cache.clear();
        assert_eq!(cache.len(), 0);
    }
}
