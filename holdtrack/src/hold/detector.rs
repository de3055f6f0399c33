//! Hold entry detection.
//!
//! A hold begins when an aircraft's route contains a recognized hold fix and
//! its estimate has been confirmed. Recognized fixes are the statically
//! configured ones plus every configured hold point.
//!
//! Detection has no side effects. It is a no-op once a record exists for an
//! aircraft, and also once the route already carries a synthetic exit for the
//! hold fix. A hold removed from the registry therefore stays removed, and the
//! route never gets a second exit segment.

use super::registry::HoldRegistry;
use crate::flight::FlightDataRecord;
use crate::hold_points::HoldPointConfig;
use crate::route::{exit_index, RouteSegment};

/// Outcome of inspecting one flight update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Detection {
    /// The route contains no recognized hold fix.
    NoHoldFix,
    /// A hold fix is in the route but the estimate is not confirmed yet.
    AwaitingEstimate,
    /// The aircraft is already holding.
    AlreadyHolding,
    /// The route already has an exit segment for this fix; the hold was
    /// started earlier and has since been removed.
    ExitInRoute,
    /// A new hold starts at `route[index]`.
    Entry { index: usize, fix: String },
}

/// Index of the first filed segment whose fix is one of `hold_fixes`.
pub fn detect_entry<S: AsRef<str>>(route: &[RouteSegment], hold_fixes: &[S]) -> Option<usize> {
    route.iter().position(|segment| {
        !segment.synthetic && hold_fixes.iter().any(|fix| fix.as_ref() == segment.fix)
    })
}

#[derive(Debug, Clone, Default)]
pub struct HoldDetector {
    static_fixes: Vec<String>,
}

impl HoldDetector {
    /// Create a detector that always recognizes `static_fixes`.
    pub fn new(static_fixes: Vec<String>) -> Self {
        Self { static_fixes }
    }

    /// Static fixes followed by configured hold points, without duplicates.
    pub fn recognized_fixes(&self, hold_points: &HoldPointConfig) -> Vec<String> {
        let mut fixes = self.static_fixes.clone();
        for (_, name) in hold_points.names() {
            if !fixes.iter().any(|f| f == name) {
                fixes.push(name.to_string());
            }
        }
        fixes
    }

    /// Decide whether this update starts a hold.
    pub fn detect(
        &self,
        flight: &FlightDataRecord,
        hold_points: &HoldPointConfig,
        registry: &HoldRegistry,
    ) -> Detection {
        let fixes = self.recognized_fixes(hold_points);
        let Some(index) = detect_entry(&flight.route, &fixes) else {
            return Detection::NoHoldFix;
        };

        if !flight.estimate_confirmed {
            return Detection::AwaitingEstimate;
        }

        if registry.contains(&flight.callsign) {
            return Detection::AlreadyHolding;
        }

        let fix = &flight.route[index].fix;
        if exit_index(&flight.route, fix, index).is_some() {
            return Detection::ExitInRoute;
        }

        Detection::Entry {
            index,
            fix: fix.clone(),
        }
    }
}
