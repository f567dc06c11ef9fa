//! The score-ordered registry of locators.
use crate::error::{Error, Result};
use crate::event::Event;
use crate::identity::{Identity, Locator};
use crate::internal::{Arena, EntryKey, Record};
use num::Unsigned;
use std::collections::HashMap;
use std::fmt::Debug;
use tracing::{debug, trace};

/// Ranking value of an entry. Higher scores sort earlier.
///
/// Implemented for every unsigned numeric type that is totally ordered, so `u64`, `u128` and
/// [`num::BigUint`] (for 256-bit scores) all work.
pub trait Score: Unsigned + Ord + Clone + Debug {}

impl<T: Unsigned + Ord + Clone + Debug> Score for T {}

/// Result of a point lookup.
///
/// Absent identities yield [`Entry::empty()`]: zero identity, zero score, zero locator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<S> {
    pub identity: Identity,
    pub score: S,
    pub locator: Locator,
}

impl<S: Score> Entry<S> {
    pub fn empty() -> Self {
        Self {
            identity: Identity::ZERO,
            score: S::zero(),
            locator: Locator::ZERO,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.identity.is_zero()
    }
}

/// Borrowed view of a live entry, yielded by [`Registry::iter()`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryRef<'a, S> {
    pub identity: &'a Identity,
    pub score: &'a S,
    pub locator: &'a Locator,
}

/// One page of a cursor walk, see [`Registry::fetch_page()`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<S> {
    pub locators: Vec<Locator>,
    pub scores: Vec<S>,
    /// Identity to resume from, or `None` once the tail was reached.
    pub next: Option<Identity>,
}

/// Ordered registry associating each identity with a scored locator.
///
/// Entries form a singly-traversed chain hanging off a sentinel head, kept in non-increasing
/// score order, with a hash index from identity to node for O(1) lookup and unlinking.
///
/// Inserting walks from the head and stops before the first entry that scores strictly lower,
/// so work is proportional to the new entry's position and ties keep insertion order.
///
/// Every mutation validates and plans first, then commits in a block that cannot fail, so a
/// rejected call leaves [`size()`](Self::size), [`lookup()`](Self::lookup) and
/// [`fetch()`](Self::fetch) exactly as they were.
///
/// ## Usage
///
/// ```rust
/// # use locator_index::*;
/// let (a, b, c) = (
///     Identity::new([1; 20]),
///     Identity::new([2; 20]),
///     Identity::new([3; 20]),
/// );
/// let mut index = Registry::<u64>::new();
/// index.insert(a, 2000, Locator::from_identity(a)).unwrap();
/// index.insert(b, 500, Locator::from_identity(b)).unwrap();
/// index.insert(c, 1500, Locator::from_identity(c)).unwrap();
///
/// assert_eq!(
///     index.fetch(7),
///     vec![
///         Locator::from_identity(a),
///         Locator::from_identity(c),
///         Locator::from_identity(b),
///     ]
/// );
/// assert!(index.remove(&b));
/// assert!(!index.remove(&b));
/// assert_eq!(index.size(), 2);
/// ```
#[derive(Debug)]
pub struct Registry<S> {
    arena: Arena<S>,
    index: HashMap<Identity, EntryKey>,
    events: Vec<Event<S>>,
}

impl<S: Score> Default for Registry<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Score> Registry<S> {
    /// Create an empty registry: just the sentinel head.
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            index: HashMap::new(),
            events: Vec::new(),
        }
    }

    /// Create an empty registry with room for `capacity` entries before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: Arena::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
            events: Vec::new(),
        }
    }

    /// Number of live entries.
    pub fn size(&self) -> usize {
        self.arena.total()
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    pub fn contains(&self, identity: &Identity) -> bool {
        self.index.contains_key(identity)
    }

    /// Find the node the new entry should follow: the last node whose successor does not score
    /// strictly lower than `score`. Read-only.
    ///
    /// Also returns the zero-based position the new entry will occupy.
    fn find_predecessor(&self, score: &S) -> (EntryKey, usize) {
        let a = &self.arena;
        let mut prev = a.head();
        let mut position = 0;
        while let Some(next) = prev.as_ref(a).next() {
            match next.as_ref(a).record() {
                Some(r) if r.score >= *score => {
                    prev = next;
                    position += 1;
                }
                _ => break,
            }
        }
        (prev, position)
    }

    /// Register `locator` for `identity` at `score`.
    ///
    /// Fails with [`Error::AlreadyRegistered`] if `identity` is live, and with
    /// [`Error::ZeroIdentity`] for the null identity; in both cases nothing changes.
    pub fn insert(&mut self, identity: Identity, score: S, locator: Locator) -> Result<()> {
        if identity.is_zero() {
            return Err(Error::ZeroIdentity);
        }
        if self.contains(&identity) {
            return Err(Error::AlreadyRegistered { identity });
        }

        let (prev, position) = self.find_predecessor(&score);

        // Commit. Nothing below can fail.
        let key = self.arena.insert_after(
            prev,
            Record {
                identity,
                score: score.clone(),
                locator,
            },
        );
        self.index.insert(identity, key);
        debug!(%identity, ?score, position, size = self.size(), "locator set");
        self.events.push(Event::Registered {
            identity,
            score,
            locator,
        });
        Ok(())
    }

    /// Unregister `identity`. Returns whether an entry was actually removed.
    pub fn remove(&mut self, identity: &Identity) -> bool {
        let Some(key) = self.index.remove(identity) else {
            trace!(%identity, "no locator to unset");
            return false;
        };
        let record = self.arena.remove(key);
        debug!(%identity, score = ?record.score, size = self.size(), "locator unset");
        self.events.push(Event::Unregistered {
            identity: record.identity,
        });
        true
    }

    /// Point lookup. Never fails: absent identities yield [`Entry::empty()`].
    pub fn lookup(&self, identity: &Identity) -> Entry<S> {
        self.index
            .get(identity)
            .copied()
            .and_then(|k| k.as_ref(&self.arena).record())
            .map(|r| Entry {
                identity: r.identity,
                score: r.score.clone(),
                locator: r.locator,
            })
            .unwrap_or_else(Entry::empty)
    }

    /// Locators of the first `min(limit, size())` entries, highest score first.
    pub fn fetch(&self, limit: usize) -> Vec<Locator> {
        let mut locators = Vec::with_capacity(limit.min(self.size()));
        locators.extend(self.iter().take(limit).map(|e| *e.locator));
        trace!(limit, returned = locators.len(), "fetched locators");
        locators
    }

    /// Walk the chain a page at a time.
    ///
    /// Starts at `cursor` if it names a live entry, otherwise at the highest-scored entry. The
    /// returned [`Page::next`] is the identity to pass as the next cursor.
    pub fn fetch_page(&self, cursor: Option<Identity>, limit: usize) -> Page<S> {
        let a = &self.arena;
        let start = match cursor.and_then(|c| self.index.get(&c)) {
            Some(&key) => Some(key),
            None => a.head().as_ref(a).next(),
        };
        let mut keys = std::iter::successors(start, |&k| k.as_ref(a).next());

        let mut page = Page {
            locators: Vec::with_capacity(limit.min(self.size())),
            scores: Vec::with_capacity(limit.min(self.size())),
            next: None,
        };
        for key in keys.by_ref().take(limit) {
            if let Some(r) = key.as_ref(a).record() {
                page.locators.push(r.locator);
                page.scores.push(r.score.clone());
            }
        }
        // With `limit == 0` nothing was consumed, so this is the starting entry.
        page.next = keys
            .next()
            .and_then(|k| k.as_ref(a).record())
            .map(|r| r.identity);
        page
    }

    /// Live entries in chain order, highest score first.
    pub fn iter(&self) -> impl Iterator<Item = EntryRef<'_, S>> + '_ {
        let a = &self.arena;
        a.keys_after(a.head())
            .filter_map(move |k| k.as_ref(a).record())
            .map(|r| EntryRef {
                identity: &r.identity,
                score: &r.score,
                locator: &r.locator,
            })
    }

    /// Hand over the events emitted since the last drain, oldest first.
    pub fn drain_events(&mut self) -> impl Iterator<Item = Event<S>> + '_ {
        self.events.drain(..)
    }
}
