//! Authoritative ordered collection of guest records.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::core::types::{Guest, GuestFields, GuestId};

/// An operation targeted an id that is not in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no guest with id {0}")]
pub struct NotFound(pub GuestId);

/// Owned, insertion-ordered collection of guests.
///
/// Ids come from a monotonically increasing counter kept strictly ahead of
/// every stored id, so rapid successive additions cannot collide. All
/// mutation funnels through [`add`](GuestStore::add),
/// [`update`](GuestStore::update) and [`remove`](GuestStore::remove); each is
/// synchronous and immediately visible to subsequent
/// [`list`](GuestStore::list) calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestStore {
    guests: Vec<Guest>,
    next_id: u64,
}

impl Default for GuestStore {
    fn default() -> Self {
        Self::new()
    }
}

impl GuestStore {
    /// Empty store; the first add receives id 1.
    pub fn new() -> Self {
        Self {
            guests: Vec::new(),
            next_id: 1,
        }
    }

    /// Build a store from pre-existing records (e.g. the demo roster).
    ///
    /// The id counter is seeded past the largest existing id so later adds
    /// cannot collide with the seeded records.
    pub fn from_guests(guests: Vec<Guest>) -> Self {
        let next_id = guests.iter().map(|guest| guest.id.0).max().unwrap_or(0) + 1;
        Self { guests, next_id }
    }

    /// Current guests in insertion order.
    pub fn list(&self) -> &[Guest] {
        &self.guests
    }

    pub fn len(&self) -> usize {
        self.guests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guests.is_empty()
    }

    /// The id the next [`add`](GuestStore::add) will assign.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    pub fn get(&self, id: GuestId) -> Option<&Guest> {
        self.guests.iter().find(|guest| guest.id == id)
    }

    /// Append a new guest with a freshly assigned id and return it.
    pub fn add(&mut self, fields: GuestFields) -> Guest {
        let guest = Guest {
            id: GuestId(self.next_id),
            name: fields.name,
            email: fields.email,
            phone: fields.phone,
        };
        self.next_id += 1;
        self.guests.push(guest.clone());
        debug!(id = %guest.id, total = self.guests.len(), "guest added");
        guest
    }

    /// Replace the fields of the guest with `id`, keeping its id and its
    /// position in the list.
    pub fn update(&mut self, id: GuestId, fields: GuestFields) -> Result<Guest, NotFound> {
        let guest = self
            .guests
            .iter_mut()
            .find(|guest| guest.id == id)
            .ok_or(NotFound(id))?;
        guest.name = fields.name;
        guest.email = fields.email;
        guest.phone = fields.phone;
        let updated = guest.clone();
        debug!(id = %id, "guest updated");
        Ok(updated)
    }

    /// Delete the guest with `id` if present. Idempotent: removing an absent
    /// id is a no-op returning false.
    pub fn remove(&mut self, id: GuestId) -> bool {
        let before = self.guests.len();
        self.guests.retain(|guest| guest.id != id);
        let removed = self.guests.len() < before;
        if removed {
            debug!(id = %id, total = self.guests.len(), "guest removed");
        }
        removed
    }
}
