//! Flight data boundary.
//!
//! The host display owns flight data records, tracks and menus. This module
//! defines what the engine consumes from it ([`FlightDataRecord`]) and what it
//! asks of it ([`FlightDataHost`]).

use serde::{Deserialize, Serialize};

use crate::route::RouteSegment;

/// Snapshot of a flight data record as delivered by the host on every change.
///
/// The route is borrowed mutably by [`crate::HoldEngine::on_flight_update`]
/// so that the hold-exit segment lands in the host's own route.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlightDataRecord {
    /// Aircraft identity (callsign).
    pub callsign: String,
    /// Parsed route, in flight order.
    pub route: Vec<RouteSegment>,
    /// Index of the last overflown route segment, if any.
    pub overflown_index: Option<usize>,
    /// Track is under this controller's jurisdiction.
    pub tracked_by_me: bool,
    /// A handoff is in progress.
    pub handoff: bool,
    /// This aircraft is the currently selected track.
    pub selected: bool,
    /// Corrected altitude of the coupled radar track, in feet.
    pub corrected_altitude: Option<i32>,
    /// Planned (requested) level in feet.
    pub planned_level: i32,
    /// Lower bound of the cleared level block, in feet. Zero or less means no block.
    pub cleared_lower: i32,
    /// Upper bound of the cleared level block, in feet.
    pub cleared_upper: i32,
    /// RVSM approval.
    pub rvsm_approved: bool,
    /// Free-text coordination annotation.
    pub coordination: String,
    /// The aircraft's estimate has been confirmed.
    pub estimate_confirmed: bool,
}

impl FlightDataRecord {
    /// Create an empty record for a callsign.
    pub fn new(callsign: impl Into<String>) -> Self {
        Self {
            callsign: callsign.into(),
            ..Self::default()
        }
    }

    /// Set the route.
    pub fn with_route(mut self, route: Vec<RouteSegment>) -> Self {
        self.route = route;
        self
    }

    /// Number of synthetic segments currently in the route.
    pub fn synthetic_segment_count(&self) -> usize {
        self.route.iter().filter(|s| s.synthetic).count()
    }
}

/// Handle to a track on the host display.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TrackRef {
    pub callsign: String,
    /// Host-specific track identifier.
    pub track_id: u64,
}

/// Facilities the host display provides to the engine.
///
/// Every method is fire-and-forget from the engine's point of view.
pub trait FlightDataHost: Send + Sync {
    /// Find the track for an aircraft, if the host still knows it.
    fn find_track(&self, callsign: &str) -> Option<TrackRef>;

    /// Select the track, or deselect it if it is already selected.
    fn toggle_selection(&self, track: &TrackRef);

    /// Open the cleared level menu for a track.
    fn open_cleared_level_menu(&self, track: &TrackRef);

    /// Open the estimate menu for a hold's exit point.
    fn open_exit_time_menu(&self, callsign: &str, exit_point: &RouteSegment);

    /// Write the coordination annotation on the flight data record.
    ///
    /// Returns false if the host has no record for `callsign`.
    fn set_coordination(&self, callsign: &str, text: &str) -> bool;
}
