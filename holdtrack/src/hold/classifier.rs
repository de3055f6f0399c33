//! Status classification from flight data.
//!
//! # Controller State
//!
//! ```text
//! state = Unconcerned
//! tracked_by_me  ──► state = Jurisdiction
//! handoff        ──► state = Handover        (wins over Jurisdiction)
//! ```

use super::model::{ClearedLevel, HoldState, HoldStatus};
use crate::flight::FlightDataRecord;

/// Derive every status field of a hold record from a flight data snapshot.
pub fn classify(flight: &FlightDataRecord) -> HoldStatus {
    HoldStatus {
        designated: flight.selected,
        level: current_level(flight),
        cleared_level: cleared_level(flight.cleared_lower, flight.cleared_upper),
        rvsm_approved: flight.rvsm_approved,
        coordination: flight.coordination.clone(),
        state: controller_state(flight.tracked_by_me, flight.handoff),
    }
}

/// Corrected radar altitude when coupled to a track, else the planned level.
pub fn current_level(flight: &FlightDataRecord) -> i32 {
    flight.corrected_altitude.unwrap_or(flight.planned_level)
}

/// A non-positive lower bound means no block: the upper bound is the level.
///
/// Block bounds are passed through unchanged, even when the host sends them
/// equal or reversed.
pub fn cleared_level(lower: i32, upper: i32) -> ClearedLevel {
    if lower <= 0 {
        ClearedLevel::Single(upper)
    } else {
        ClearedLevel::Block { lower, upper }
    }
}

/// Controller state from the track flags. Handover wins over jurisdiction.
pub fn controller_state(tracked_by_me: bool, handoff: bool) -> HoldState {
    let mut state = HoldState::Unconcerned;
    if tracked_by_me {
        state = HoldState::Jurisdiction;
    }
    if handoff {
        state = HoldState::Handover;
    }
    state
}
