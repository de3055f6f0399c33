//! Engine error types.

use thiserror::Error;

/// Errors produced by hold engine operations.
///
/// Lookup misses (an intent naming an aircraft that has disappeared) are not
/// errors and never show up here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HoldError {
    /// A hold-point name is already configured in another slot.
    #[error("Hold Window for {name} already exists")]
    DuplicateHoldPoint {
        /// Normalized name that was rejected.
        name: String,
        /// Slot that already holds the name.
        existing_slot: usize,
    },

    /// A hold-point slot index beyond the store capacity.
    #[error("Hold point slot {slot} is out of range (capacity: {capacity})")]
    InvalidSlot { slot: usize, capacity: usize },

    /// The registry already has a record for this aircraft.
    #[error("{callsign} is already holding")]
    AlreadyHolding { callsign: String },

    /// The operation exists on the surface but is not implemented.
    #[error("{operation} is not supported")]
    Unsupported { operation: &'static str },
}

impl HoldError {
    /// Returns true for user-facing validation failures.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            HoldError::DuplicateHoldPoint { .. } | HoldError::InvalidSlot { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_hold_point_message() {
        let err = HoldError::DuplicateHoldPoint {
            name: "RIVET".to_string(),
            existing_slot: 2,
        };
        assert_eq!(err.to_string(), "Hold Window for RIVET already exists");
        assert!(err.is_validation());
    }

    #[test]
    fn test_unsupported_is_not_validation() {
        let err = HoldError::Unsupported {
            operation: "hold cancellation",
        };
        assert_eq!(err.to_string(), "hold cancellation is not supported");
        assert!(!err.is_validation());
    }

    #[test]
    fn test_invalid_slot_message() {
        let err = HoldError::InvalidSlot {
            slot: 7,
            capacity: 4,
        };
        assert!(err.to_string().contains("slot 7"));
        assert!(err.is_validation());
    }
}
