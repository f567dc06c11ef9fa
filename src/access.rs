//! Single-writer gate in front of a [`Registry`].
//!
//! The registry itself has no notion of callers. [`Owned`] pairs it with an owner identity and
//! checks the caller credential before any mutation runs, so an unauthorized call never reaches
//! the registry and surfaces as [`Error::Unauthorized`].
use crate::error::{Error, Result};
use crate::event::Event;
use crate::identity::{Identity, Locator};
use crate::registry::{Entry, Page, Registry, Score};
use tracing::{info, warn};

/// A [`Registry`] that only its owner may mutate.
///
/// Reads are open to anyone and go straight to the inner registry via [`Owned::registry()`].
#[derive(Debug)]
pub struct Owned<S> {
    /// `None` once ownership has been renounced.
    owner: Option<Identity>,
    registry: Registry<S>,
}

impl<S: Score> Owned<S> {
    /// Gate a fresh, empty registry behind `owner`.
    pub fn new(owner: Identity) -> Self {
        Self::with_registry(owner, Registry::new())
    }

    pub fn with_registry(owner: Identity, registry: Registry<S>) -> Self {
        Self {
            owner: Some(owner),
            registry,
        }
    }

    /// Current owner, or `None` after [`Owned::renounce_ownership()`].
    pub fn owner(&self) -> Option<Identity> {
        self.owner
    }

    fn authorize(&self, caller: &Identity) -> Result<()> {
        if self.owner.as_ref() == Some(caller) {
            Ok(())
        } else {
            warn!(%caller, "rejected call from non-owner");
            Err(Error::Unauthorized { caller: *caller })
        }
    }

    /// Owner-only [`Registry::insert()`].
    pub fn set_locator(
        &mut self,
        caller: &Identity,
        identity: Identity,
        score: S,
        locator: Locator,
    ) -> Result<()> {
        self.authorize(caller)?;
        self.registry.insert(identity, score, locator)
    }

    /// Owner-only [`Registry::remove()`].
    pub fn unset_locator(&mut self, caller: &Identity, identity: &Identity) -> Result<bool> {
        self.authorize(caller)?;
        Ok(self.registry.remove(identity))
    }

    /// Hand the registry over to `new_owner`.
    pub fn transfer_ownership(&mut self, caller: &Identity, new_owner: Identity) -> Result<()> {
        self.authorize(caller)?;
        if new_owner.is_zero() {
            return Err(Error::ZeroIdentity);
        }
        info!(from = %caller, to = %new_owner, "ownership transferred");
        self.owner = Some(new_owner);
        Ok(())
    }

    /// Give up ownership for good. The registry becomes read-only.
    pub fn renounce_ownership(&mut self, caller: &Identity) -> Result<()> {
        self.authorize(caller)?;
        info!(from = %caller, "ownership renounced");
        self.owner = None;
        Ok(())
    }

    /// Read-only access to the gated registry.
    pub fn registry(&self) -> &Registry<S> {
        &self.registry
    }

    pub fn size(&self) -> usize {
        self.registry.size()
    }

    pub fn lookup(&self, identity: &Identity) -> Entry<S> {
        self.registry.lookup(identity)
    }

    pub fn fetch(&self, limit: usize) -> Vec<Locator> {
        self.registry.fetch(limit)
    }

    pub fn fetch_page(&self, cursor: Option<Identity>, limit: usize) -> Page<S> {
        self.registry.fetch_page(cursor, limit)
    }

    pub fn drain_events(&mut self) -> impl Iterator<Item = Event<S>> + '_ {
        self.registry.drain_events()
    }
}
