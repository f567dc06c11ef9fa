//! Internal representation and memory management of registry entries.
//!
//! Entries live in a [`Slab`] and refer to their neighbours by [`EntryKey`] rather than by
//! reference, so relinking is a couple of index writes and nothing is ever shifted.
use crate::identity::{Identity, Locator};
use slab::Slab;

/// Index to an entry in the entry arena.
#[derive(Debug, Clone, PartialEq, Eq, Copy)]
pub(crate) struct EntryKey(usize);

impl From<usize> for EntryKey {
    fn from(value: usize) -> Self {
        Self(value)
    }
}

impl EntryKey {
    /// "Dereferences" this index in an arena.
    ///
    /// Basically flips the arguments of [`Arena::get()`], but since this is in postfix, it's
    /// useful for chaining a series of operations.
    #[inline(always)]
    pub(crate) fn as_ref<S>(self, arena: &Arena<S>) -> &EntryInner<S> {
        arena.get(self)
    }

    /// Unwrap the underlying index type.
    fn key(&self) -> usize {
        self.0
    }
}

/// The data a live entry carries, detached from its links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Record<S> {
    pub(crate) identity: Identity,
    pub(crate) score: S,
    pub(crate) locator: Locator,
}

/// One node of the chain: either the sentinel head (no record) or a live entry.
#[derive(Debug)]
pub(crate) struct EntryInner<S> {
    /// Next entry in descending score order; `None` at the tail.
    next: Option<EntryKey>,

    /// Previous entry; `None` only for the head.
    prev: Option<EntryKey>,

    record: Option<Record<S>>,
}

impl<S> EntryInner<S> {
    pub(crate) fn next(&self) -> Option<EntryKey> {
        self.next
    }

    #[cfg(test)]
    pub(crate) fn prev(&self) -> Option<EntryKey> {
        self.prev
    }

    /// Record of a live entry. The head has none.
    pub(crate) fn record(&self) -> Option<&Record<S>> {
        self.record.as_ref()
    }

    #[cfg(test)]
    pub(crate) fn is_head(&self) -> bool {
        self.record.is_none()
    }
}

/// Arena holding the sentinel head and every live entry.
#[derive(Debug)]
pub(crate) struct Arena<S> {
    /// Number of live entries, not counting the head.
    total: usize,

    /// Internal store of entries, indexed by [`EntryKey`].
    entries: Slab<EntryInner<S>>,

    /// Key to the sentinel head, which is never deleted (unless the arena is dropped).
    head: EntryKey,
}

impl<S> Arena<S> {
    /// Construct a new arena, pre-allocated with the sentinel head.
    pub(crate) fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Construct a new arena with room for `capacity` entries besides the head.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        let mut entries = Slab::with_capacity(capacity + 1);
        let head = entries
            .insert(EntryInner {
                next: None,
                prev: None,
                record: None,
            })
            .into();

        Self {
            total: 0,
            entries,
            head,
        }
    }

    pub(crate) fn head(&self) -> EntryKey {
        self.head
    }

    /// Retrieve a reference to an entry from the store using a key.
    pub(crate) fn get(&self, key: EntryKey) -> &EntryInner<S> {
        &self.entries[key.key()]
    }

    fn get_mut(&mut self, key: EntryKey) -> &mut EntryInner<S> {
        &mut self.entries[key.key()]
    }

    /// Number of live entries.
    pub(crate) fn total(&self) -> usize {
        self.total
    }

    /// Number of allocated nodes, head included.
    #[cfg(test)]
    pub(crate) fn allocated(&self) -> usize {
        self.entries.len()
    }

    /// Allocate a live entry and splice it in right after `prev_key`.
    pub(crate) fn insert_after(&mut self, prev_key: EntryKey, record: Record<S>) -> EntryKey {
        let next_key = self.get(prev_key).next();
        let new_key = self
            .entries
            .insert(EntryInner {
                next: next_key,
                prev: Some(prev_key),
                record: Some(record),
            })
            .into();
        self.get_mut(prev_key).next = Some(new_key);
        if let Some(next_key) = next_key {
            self.get_mut(next_key).prev = Some(new_key);
        }
        self.total += 1;
        new_key
    }

    /// Unlink a live entry from the chain and release its slot, handing back its record.
    pub(crate) fn remove(&mut self, key: EntryKey) -> Record<S> {
        debug_assert_ne!(key, self.head, "the head is never removed");
        let EntryInner { next, prev, record } = self.entries.remove(key.key());

        // A live entry always has a predecessor, at worst the head.
        if let Some(prev_key) = prev {
            self.get_mut(prev_key).next = next;
        }
        if let Some(next_key) = next {
            self.get_mut(next_key).prev = prev;
        }

        self.total -= 1;
        record.expect("live entries carry a record")
    }

    /// Keys of live entries in chain order, starting after `from`.
    pub(crate) fn keys_after(&self, from: EntryKey) -> impl Iterator<Item = EntryKey> + '_ {
        std::iter::successors(from.as_ref(self).next(), move |&k| k.as_ref(self).next())
    }
}
