//! Score-ordered registry of maker locators.
//!
//! Makers on a peer-to-peer trading network advertise a [`Locator`], an opaque fixed-width blob
//! telling takers where to reach them, ranked by a caller-supplied score. Takers then ask for the
//! top `n` locators. See [`Registry`] for the data structure and [`Owned`] for the owner-only
//! gate that is placed in front of it.
//!
//! ## Usage
//!
//! ```rust
//! # use locator_index::*;
//! let owner: Identity = "0x00000000000000000000000000000000000000aa".parse().unwrap();
//! let maker: Identity = "0x00000000000000000000000000000000000000a1".parse().unwrap();
//!
//! let mut index = Owned::<u64>::new(owner);
//! index
//!     .set_locator(&owner, maker, 2000, Locator::from_identity(maker))
//!     .unwrap();
//! assert!(index.set_locator(&maker, maker, 1, Locator::ZERO).is_err());
//!
//! assert_eq!(index.fetch(10), vec![Locator::from_identity(maker)]);
//! assert_eq!(index.lookup(&maker).score, 2000);
//! assert_eq!(
//!     index.drain_events().collect::<Vec<_>>(),
//!     vec![Event::Registered {
//!         identity: maker,
//!         score: 2000,
//!         locator: Locator::from_identity(maker),
//!     }]
//! );
//! ```
//!
//! ## Memory management
//!
//! Entries are nodes of a doubly-linked list allocated from a slab arena and addressed by index,
//! with a sentinel head that is allocated up front and never removed. A hash index maps each
//! identity to its node, so removal is O(1) and only insertion walks the chain.
mod internal;

pub mod access;
pub mod error;
pub mod event;
pub mod identity;
pub mod registry;

pub use access::Owned;
pub use error::{Error, Result};
pub use event::Event;
pub use identity::{Identity, Locator, IDENTITY_LEN, LOCATOR_LEN};
pub use registry::{Entry, EntryRef, Page, Registry, Score};
