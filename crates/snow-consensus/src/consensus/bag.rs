//! Vote tallies for a single poll.

use std::collections::HashMap;

use snow_ids::Id;

/// A multiset of ids, one entry per vote received in a poll.
#[derive(Debug, Clone, Default)]
pub struct Bag {
    counts: HashMap<Id, usize>,
    size: usize,
}

impl Bag {
    /// Creates a new empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a bag holding one vote per id yielded by `iter`.
    pub fn of<I: IntoIterator<Item = Id>>(iter: I) -> Self {
        let mut bag = Self::new();
        for id in iter {
            bag.add(id);
        }
        bag
    }

    /// Adds an ID to the bag.
    pub fn add(&mut self, id: Id) {
        self.add_count(id, 1);
    }

    /// Adds an ID multiple times. A zero count is ignored.
    pub fn add_count(&mut self, id: Id, count: usize) {
        if count == 0 {
            return;
        }
        *self.counts.entry(id).or_insert(0) += count;
        self.size += count;
    }

    /// Returns the count for an ID.
    pub fn count(&self, id: &Id) -> usize {
        self.counts.get(id).copied().unwrap_or(0)
    }

    /// Returns the total number of votes.
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the most common id and its count.
    ///
    /// Ties go to the smallest id so every node reads the same mode.
    pub fn mode(&self) -> Option<(Id, usize)> {
        self.counts
            .iter()
            .max_by(|(a_id, a_count), (b_id, b_count)| {
                a_count.cmp(b_count).then_with(|| b_id.cmp(a_id))
            })
            .map(|(id, count)| (*id, *count))
    }

    /// Returns all IDs and their counts.
    pub fn iter(&self) -> impl Iterator<Item = (&Id, &usize)> {
        self.counts.iter()
    }
}

impl FromIterator<Id> for Bag {
    fn from_iter<I: IntoIterator<Item = Id>>(iter: I) -> Self {
        Self::of(iter)
    }
}
