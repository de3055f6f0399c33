//! Configured hold points.
//!
//! Controllers pick up to four hold-point names, each with its own hold list
//! window. Holds at any other fix fall into the "other" list.
//!
//! Names are stored trimmed and upper-cased. Duplicate detection across slots
//! is case-insensitive; an empty slot never conflicts.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::HoldError;

/// Number of hold-point slots.
pub const HOLD_POINT_SLOTS: usize = 4;

/// A change to the configured hold points, in the order it happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HoldPointChange {
    Removed { name: String },
    Added { slot: usize, name: String },
}

/// Fixed-capacity, ordered set of hold-point names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoldPointConfig {
    slots: [Option<String>; HOLD_POINT_SLOTS],
}

/// Trim and upper-case a hold-point name as typed by a controller.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_uppercase()
}

impl HoldPointConfig {
    /// Create a configuration with every slot empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// All slots in order, empty ones included.
    pub fn slots(&self) -> &[Option<String>; HOLD_POINT_SLOTS] {
        &self.slots
    }

    /// Configured names in slot order, skipping empty slots.
    pub fn names(&self) -> impl Iterator<Item = (usize, &str)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.as_deref().map(|name| (i, name)))
    }

    /// Exact-match membership, as used for grouping.
    pub fn contains(&self, name: &str) -> bool {
        self.names().any(|(_, n)| n == name)
    }

    /// Slot holding `name` (case-insensitive) other than `exclude`.
    pub fn conflicting_slot(&self, name: &str, exclude: usize) -> Option<usize> {
        if name.trim().is_empty() {
            return None;
        }
        self.names()
            .find(|(i, n)| *i != exclude && n.eq_ignore_ascii_case(name))
            .map(|(i, _)| i)
    }

    /// Store `name` in `slot`, replacing whatever was there.
    ///
    /// An empty name clears the slot. Returns the changes in order: the
    /// removal of the previous name (if any) followed by the addition.
    ///
    /// # Errors
    ///
    /// - `InvalidSlot` if `slot` is out of range
    /// - `DuplicateHoldPoint` if the name is configured in another slot
    ///
    /// Nothing is changed on error.
    pub fn add_or_replace(
        &mut self,
        slot: usize,
        name: &str,
    ) -> Result<Vec<HoldPointChange>, HoldError> {
        if slot >= HOLD_POINT_SLOTS {
            return Err(HoldError::InvalidSlot {
                slot,
                capacity: HOLD_POINT_SLOTS,
            });
        }

        let name = normalize_name(name);
        if let Some(existing_slot) = self.conflicting_slot(&name, slot) {
            warn!(name = %name, slot, existing_slot, "Rejected duplicate hold point");
            return Err(HoldError::DuplicateHoldPoint {
                name,
                existing_slot,
            });
        }

        let mut changes = Vec::with_capacity(2);
        if let Some(previous) = self.slots[slot].take() {
            info!(name = %previous, slot, "Hold point removed");
            changes.push(HoldPointChange::Removed { name: previous });
        }

        if !name.is_empty() {
            info!(name = %name, slot, "Hold point added");
            self.slots[slot] = Some(name.clone());
            changes.push(HoldPointChange::Added { slot, name });
        }

        Ok(changes)
    }

    /// Clear the slot holding `name`.
    ///
    /// Returns the removal, or `None` if no slot holds the name.
    pub fn remove(&mut self, name: &str) -> Option<HoldPointChange> {
        let name = normalize_name(name);
        let slot = self.names().find(|(_, n)| *n == name).map(|(i, _)| i)?;
        let removed = self.slots[slot].take()?;
        info!(name = %removed, slot, "Hold point removed");
        Some(HoldPointChange::Removed { name: removed })
    }
}
