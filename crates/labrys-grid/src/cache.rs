//! Fixed-capacity position-keyed section cache.
//!
//! [`SectionCache`] is a read-through accelerator in front of the grid's
//! primary map. It never consults the grid itself: a miss just tells the
//! caller to fall back to the primary lookup and, usually, to [`add`] the
//! result.
//!
//! Replacement is ring-buffer FIFO. Entries live in a flat slot array and
//! the eviction cursor walks it in insertion order, so `add` and `get` are
//! O(1) and a full cache costs no allocation.
//!
//! The policy suits traversals with spatial locality. For a dense `N x N`
//! grid walked in row-major order, a capacity of `3N + 3` keeps every
//! cell resident for all eight of its neighbour lookups.
//!
//! [`add`]: SectionCache::add

use labrys_core::{Coord, Section};
use std::collections::HashMap;
use tracing::trace;

/// Capacity used by [`GridConfig::default`](crate::GridConfig).
pub const DEFAULT_CACHE_CAPACITY: usize = 5000;

/// Hit/miss counters for a [`SectionCache`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups answered from the cache.
    pub hits: u64,
    /// Lookups the cache could not answer.
    pub misses: u64,
    /// Entries displaced to make room for new ones.
    pub evictions: u64,
}

impl CacheStats {
    /// Total lookups recorded.
    pub fn lookups(&self) -> u64 {
        self.hits + self.misses
    }

    /// Fraction of lookups that hit, or `0.0` before the first lookup.
    pub fn hit_ratio(&self) -> f64 {
        match self.lookups() {
            0 => 0.0,
            n => self.hits as f64 / n as f64,
        }
    }
}

/// A bounded `Coord -> Section` map with FIFO replacement.
#[derive(Debug, Clone)]
pub struct SectionCache {
    /// Resident entries. Grows to `capacity`, then is overwritten in place.
    slots: Vec<(Coord, Section)>,
    /// Position of each resident coordinate in `slots`.
    index: HashMap<Coord, usize>,
    /// Slot overwritten by the next insertion into a full cache.
    next_victim: usize,
    capacity: usize,
    stats: CacheStats,
}

impl SectionCache {
    /// Create an empty cache holding at most `capacity` entries.
    ///
    /// A zero-capacity cache is valid and never stores anything.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
            next_victim: 0,
            capacity,
            stats: CacheStats::default(),
        }
    }

    /// Maximum number of resident entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of resident entries.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Look up `pos`, recording a hit or miss.
    pub fn get(&mut self, pos: Coord) -> Option<Section> {
        match self.index.get(&pos) {
            Some(&slot) => {
                self.stats.hits += 1;
                Some(self.slots[slot].1)
            }
            None => {
                self.stats.misses += 1;
                None
            }
        }
    }

    /// Look up `pos` without touching the statistics.
    pub fn peek(&self, pos: Coord) -> Option<Section> {
        self.index.get(&pos).map(|&slot| self.slots[slot].1)
    }

    /// Whether `pos` is resident.
    pub fn contains(&self, pos: Coord) -> bool {
        self.index.contains_key(&pos)
    }

    /// Insert or refresh an entry, evicting the oldest one if full.
    pub fn add(&mut self, pos: Coord, section: Section) {
        if self.capacity == 0 {
            return;
        }
        if let Some(&slot) = self.index.get(&pos) {
            self.slots[slot].1 = section;
            return;
        }
        if self.slots.len() < self.capacity {
            self.index.insert(pos, self.slots.len());
            self.slots.push((pos, section));
            return;
        }

        let slot = self.next_victim;
        let (evicted, _) = self.slots[slot];
        self.index.remove(&evicted);
        self.slots[slot] = (pos, section);
        self.index.insert(pos, slot);
        self.next_victim = (slot + 1) % self.capacity;
        self.stats.evictions += 1;
        trace!(%evicted, inserted = %pos, "section cache eviction");
    }

    /// Overwrite the entry for `pos` if it is resident.
    ///
    /// Returns whether an entry was updated. Never inserts.
    pub fn replace(&mut self, pos: Coord, section: Section) -> bool {
        match self.index.get(&pos) {
            Some(&slot) => {
                self.slots[slot].1 = section;
                true
            }
            None => false,
        }
    }

    /// Drop every entry. Statistics are kept.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.index.clear();
        self.next_victim = 0;
    }

    /// Counters accumulated since construction or the last
    /// [`reset_stats`](Self::reset_stats).
    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    /// Zero the hit/miss/eviction counters.
    pub fn reset_stats(&mut self) {
        self.stats = CacheStats::default();
    }
}

impl Default for SectionCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use labrys_core::Connection;
    use proptest::prelude::*;

    fn c(x: i32, y: i32) -> Coord {
        Coord::new(x, y)
    }

    fn s(mask: Connection) -> Section {
        Section::new(mask)
    }

    #[test]
    fn miss_then_hit() {
        let mut cache = SectionCache::new(4);
        assert_eq!(cache.get(c(0, 0)), None);
        cache.add(c(0, 0), s(Connection::NORTH));
        assert_eq!(cache.get(c(0, 0)), Some(s(Connection::NORTH)));
        let stats = cache.stats();
        assert_eq!((stats.hits, stats.misses), (1, 1));
        assert!((stats.hit_ratio() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn evicts_oldest_first() {
        let mut cache = SectionCache::new(3);
        for x in 0..3 {
            cache.add(c(x, 0), Section::open());
        }
        assert_eq!(cache.len(), 3);

        cache.add(c(3, 0), Section::open());
        assert_eq!(cache.len(), 3);
        assert!(!cache.contains(c(0, 0)));
        assert!(cache.contains(c(1, 0)));
        assert!(cache.contains(c(3, 0)));

        cache.add(c(4, 0), Section::open());
        assert!(!cache.contains(c(1, 0)));
        assert!(cache.contains(c(2, 0)));
        assert_eq!(cache.stats().evictions, 2);
    }

    #[test]
    fn re_adding_refreshes_without_evicting() {
        let mut cache = SectionCache::new(2);
        cache.add(c(0, 0), s(Connection::EAST));
        cache.add(c(1, 0), s(Connection::WEST));
        cache.add(c(0, 0), s(Connection::NORTH));
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.peek(c(0, 0)), Some(s(Connection::NORTH)));
        assert_eq!(cache.stats().evictions, 0);
    }

    #[test]
    fn replace_only_touches_resident_entries() {
        let mut cache = SectionCache::new(2);
        assert!(!cache.replace(c(5, 5), Section::open()));
        assert!(cache.is_empty());

        cache.add(c(5, 5), s(Connection::SOUTH));
        assert!(cache.replace(c(5, 5), s(Connection::NORTH)));
        assert_eq!(cache.peek(c(5, 5)), Some(s(Connection::NORTH)));
    }

    #[test]
    fn zero_capacity_stores_nothing() {
        let mut cache = SectionCache::new(0);
        cache.add(c(0, 0), Section::open());
        assert!(cache.is_empty());
        assert_eq!(cache.get(c(0, 0)), None);
    }

    #[test]
    fn clear_keeps_stats() {
        let mut cache = SectionCache::new(2);
        cache.add(c(0, 0), Section::open());
        let _ = cache.get(c(0, 0));
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.get(c(0, 0)), None);
        assert_eq!(cache.stats().hits, 1);
        cache.reset_stats();
        assert_eq!(cache.stats(), CacheStats::default());
    }

    proptest! {
        #[test]
        fn never_exceeds_capacity_and_never_lies(
            capacity in 1usize..16,
            ops in prop::collection::vec((-8i32..8, -8i32..8, any::<u8>()), 0..200),
        ) {
            let mut cache = SectionCache::new(capacity);
            let mut truth = std::collections::HashMap::new();
            for (x, y, bits) in ops {
                let sec = s(Connection::from_bits_retain(bits));
                cache.add(c(x, y), sec);
                truth.insert(c(x, y), sec);
                prop_assert!(cache.len() <= capacity);
            }
            for (pos, sec) in &truth {
                if let Some(cached) = cache.peek(*pos) {
                    prop_assert_eq!(cached, *sec);
                }
            }
        }
    }
}
