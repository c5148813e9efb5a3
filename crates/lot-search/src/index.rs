//! Search index
//!
//! Ticket ids and vehicle numbers share one key space. Entries are only ever
//! overwritten, never dropped, so a lookup after the vehicle has left still
//! returns the spot it was given.

use lot_core::SpotId;
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::trace;

#[derive(Debug, Default)]
pub struct SearchIndex {
    entries: RwLock<HashMap<String, SpotId>>,
}

impl SearchIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind both the vehicle number and the ticket id to `spot`.
    ///
    /// Existing bindings under either key are replaced. Both keys are written
    /// under one lock, so readers never see only one of them.
    pub fn index(&self, vehicle_number: &str, ticket_id: &str, spot: SpotId) {
        let mut entries = self.entries.write();
        entries.insert(ticket_id.to_string(), spot);
        entries.insert(vehicle_number.to_string(), spot);
        trace!(vehicle_number, ticket_id, %spot, "Indexed");
    }

    /// Spot bound to a ticket id or vehicle number
    pub fn lookup(&self, query: &str) -> Option<SpotId> {
        self.entries.read().get(query).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
