//! Hold record types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::route::{entry_index, exit_index, RouteSegment};

/// Level an aircraft is cleared to: a single level or a block.
///
/// Levels are in feet. Block bounds are kept as the host supplied them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClearedLevel {
    Single(i32),
    Block { lower: i32, upper: i32 },
}

impl ClearedLevel {
    /// Level used for ordering hold lists: the lower bound of a block.
    pub fn effective_level(&self) -> i32 {
        match self {
            ClearedLevel::Single(level) => *level,
            ClearedLevel::Block { lower, .. } => *lower,
        }
    }
}

impl Default for ClearedLevel {
    fn default() -> Self {
        ClearedLevel::Single(0)
    }
}

/// Controller-relevant state of a holding aircraft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HoldState {
    /// Not of interest to this controller; never displayed.
    #[default]
    Unconcerned,
    /// Being handed off.
    Handover,
    /// Under this controller's jurisdiction.
    Jurisdiction,
}

impl std::fmt::Display for HoldState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HoldState::Unconcerned => write!(f, "unconcerned"),
            HoldState::Handover => write!(f, "handover"),
            HoldState::Jurisdiction => write!(f, "jurisdiction"),
        }
    }
}

/// Status fields derived from a flight data record on every update.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HoldStatus {
    pub designated: bool,
    /// Current level in feet.
    pub level: i32,
    pub cleared_level: ClearedLevel,
    pub rvsm_approved: bool,
    pub coordination: String,
    pub state: HoldState,
}

/// An aircraft currently holding.
///
/// Identity and hold fix never change after creation; everything else is
/// refreshed from flight data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoldRecord {
    pub callsign: String,
    pub hold_fix: String,
    pub designated: bool,
    /// Current level in feet.
    pub level: i32,
    pub cleared_level: ClearedLevel,
    pub rvsm_approved: bool,
    /// Route segment where the hold begins.
    pub entry: RouteSegment,
    /// Synthetic route segment where the hold ends.
    pub exit: RouteSegment,
    pub coordination: String,
    pub state: HoldState,
}

impl HoldRecord {
    /// Create a record for a newly detected hold.
    pub fn new(
        callsign: impl Into<String>,
        entry: RouteSegment,
        exit: RouteSegment,
        status: HoldStatus,
    ) -> Self {
        let mut record = Self {
            callsign: callsign.into(),
            hold_fix: entry.fix.clone(),
            designated: false,
            level: 0,
            cleared_level: ClearedLevel::default(),
            rvsm_approved: false,
            entry,
            exit,
            coordination: String::new(),
            state: HoldState::Unconcerned,
        };
        record.apply_status(status);
        record
    }

    /// Overwrite the derived status fields.
    pub fn apply_status(&mut self, status: HoldStatus) {
        self.designated = status.designated;
        self.level = status.level;
        self.cleared_level = status.cleared_level;
        self.rvsm_approved = status.rvsm_approved;
        self.coordination = status.coordination;
        self.state = status.state;
    }

    /// Pick up the latest entry and exit segments from the host's route.
    ///
    /// Segments missing from the route keep their last known value. Returns
    /// whether anything changed.
    pub fn refresh_segments(&mut self, route: &[RouteSegment]) -> bool {
        let Some(entry) = entry_index(route, &self.hold_fix) else {
            return false;
        };

        let mut changed = false;
        if route[entry] != self.entry {
            self.entry = route[entry].clone();
            changed = true;
        }

        if let Some(exit) = exit_index(route, &self.hold_fix, entry) {
            if route[exit] != self.exit {
                self.exit = route[exit].clone();
                changed = true;
            }
        }

        changed
    }

    /// Whether the record may appear in a hold list at all.
    pub fn is_displayable(&self) -> bool {
        self.state != HoldState::Unconcerned
    }

    /// Sort key for hold lists.
    pub fn effective_level(&self) -> i32 {
        self.cleared_level.effective_level()
    }

    /// Time the aircraft reached the hold fix, once it has.
    pub fn entry_time(&self) -> Option<DateTime<Utc>> {
        self.entry.ato
    }

    /// Expected time the aircraft leaves the hold.
    pub fn exit_time(&self) -> Option<DateTime<Utc>> {
        self.exit.eto
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_level_uses_block_lower_bound() {
        assert_eq!(ClearedLevel::Single(38000).effective_level(), 38000);
        assert_eq!(
            ClearedLevel::Block {
                lower: 25000,
                upper: 28000
            }
            .effective_level(),
            25000
        );
    }

    #[test]
    fn test_new_record_applies_status() {
        let status = HoldStatus {
            designated: true,
            level: 13000,
            cleared_level: ClearedLevel::Single(11000),
            rvsm_approved: true,
            coordination: "H/RIV".to_string(),
            state: HoldState::Jurisdiction,
        };
        let mut exit = RouteSegment::waypoint("RIVET");
        exit.synthetic = true;
        let record = HoldRecord::new("QFA1", RouteSegment::waypoint("RIVET"), exit, status);

        assert_eq!(record.hold_fix, "RIVET");
        assert!(record.designated);
        assert_eq!(record.level, 13000);
        assert_eq!(record.coordination, "H/RIV");
        assert!(record.is_displayable());
    }

    #[test]
    fn test_unconcerned_is_not_displayable() {
        let record = HoldRecord::new(
            "QFA2",
            RouteSegment::waypoint("RIVET"),
            RouteSegment::waypoint("RIVET"),
            HoldStatus::default(),
        );
        assert!(!record.is_displayable());
        assert_eq!(record.entry_time(), None);
    }

    #[test]
    fn test_refresh_segments_picks_up_actual_time() {
        let mut exit = RouteSegment::waypoint("RIVET");
        exit.synthetic = true;
        let mut record = HoldRecord::new(
            "QFA1",
            RouteSegment::waypoint("RIVET"),
            exit.clone(),
            HoldStatus::default(),
        );

        let passed = Utc::now();
        let route = vec![RouteSegment::waypoint("RIVET").with_ato(passed), exit];
        assert!(record.refresh_segments(&route));
        assert_eq!(record.entry_time(), Some(passed));
        assert!(!record.refresh_segments(&route));
    }

    #[test]
    fn test_refresh_segments_keeps_exit_when_route_rebuilt() {
        let mut exit = RouteSegment::waypoint("RIVET");
        exit.synthetic = true;
        exit.eto = Some(Utc::now());
        let mut record = HoldRecord::new(
            "QFA1",
            RouteSegment::waypoint("RIVET"),
            exit.clone(),
            HoldStatus::default(),
        );

        let route = vec![RouteSegment::waypoint("RIVET"), RouteSegment::waypoint("BOREE")];
        assert!(!record.refresh_segments(&route));
        assert_eq!(record.exit, exit);
        assert!(!record.refresh_segments(&[]));
    }

    #[test]
    fn test_state_display() {
        assert_eq!(HoldState::Handover.to_string(), "handover");
        assert_eq!(HoldState::Jurisdiction.to_string(), "jurisdiction");
    }
}
