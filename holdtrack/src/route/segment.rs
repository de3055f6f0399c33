//! Route segment model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of a route segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SegmentKind {
    /// A named fix the aircraft overflies.
    #[default]
    Waypoint,
    /// Anything else in the parsed route (airway, procedure, speed/level change).
    Other,
}

/// A single segment of an aircraft's parsed route.
///
/// Times are UTC. `ato` is set by the host once the aircraft has passed the
/// fix; `eto` is the current estimate.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RouteSegment {
    /// Fix (intersection) name.
    pub fix: String,
    /// Segment kind.
    pub kind: SegmentKind,
    /// Track in degrees.
    pub track_deg: f32,
    /// Ground speed in knots.
    pub ground_speed_kt: u32,
    /// Distance from the previous segment in nautical miles.
    pub distance_nm: f32,
    /// Requested level in feet.
    pub requested_level: i32,
    /// Requested speed in knots.
    pub requested_speed_kt: u32,
    /// Estimated elapsed time from departure, in seconds.
    pub elapsed_secs: u32,
    /// Airway the segment is flown on.
    pub airway: Option<String>,
    /// SID or STAR the segment belongs to.
    pub procedure: Option<String>,
    /// Planned cleared level in feet.
    pub planned_cleared_level: i32,
    /// Estimated time over.
    pub eto: Option<DateTime<Utc>>,
    /// Actual time over.
    pub ato: Option<DateTime<Utc>>,
    /// Inserted by this engine rather than filed.
    pub synthetic: bool,
}

impl RouteSegment {
    /// Create a waypoint segment for the given fix.
    pub fn waypoint(fix: impl Into<String>) -> Self {
        Self {
            fix: fix.into(),
            kind: SegmentKind::Waypoint,
            ..Self::default()
        }
    }

    /// Create a non-waypoint segment (airway, procedure leg, ...).
    pub fn other(fix: impl Into<String>) -> Self {
        Self {
            fix: fix.into(),
            kind: SegmentKind::Other,
            ..Self::default()
        }
    }

    /// Set the estimated time over.
    pub fn with_eto(mut self, eto: DateTime<Utc>) -> Self {
        self.eto = Some(eto);
        self
    }

    /// Set the actual time over.
    pub fn with_ato(mut self, ato: DateTime<Utc>) -> Self {
        self.ato = Some(ato);
        self
    }

    /// Set the requested level.
    pub fn with_requested_level(mut self, level: i32) -> Self {
        self.requested_level = level;
        self
    }

    /// Set the airway name.
    pub fn with_airway(mut self, airway: impl Into<String>) -> Self {
        self.airway = Some(airway.into());
        self
    }

    /// Whether the segment is a named fix rather than an airway or procedure leg.
    pub fn is_waypoint(&self) -> bool {
        self.kind == SegmentKind::Waypoint
    }

    /// Whether the aircraft has already passed this segment.
    pub fn is_passed(&self) -> bool {
        self.ato.is_some()
    }
}

/// Index of the filed (non-synthetic) segment for `fix`, first in route order.
pub fn entry_index(route: &[RouteSegment], fix: &str) -> Option<usize> {
    route.iter().position(|s| !s.synthetic && s.fix == fix)
}

/// Index of the synthetic exit segment for `fix` following `entry`.
pub fn exit_index(route: &[RouteSegment], fix: &str, entry: usize) -> Option<usize> {
    route
        .iter()
        .enumerate()
        .skip(entry + 1)
        .find(|(_, s)| s.synthetic && s.fix == fix)
        .map(|(i, _)| i)
}
