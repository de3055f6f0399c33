//! Flight strip hold indicators.
//!
//! Strips show the remaining waypoints of a route. The hold entry waypoint is
//! marked `A` and the synthetic exit waypoint `D`.

use crate::hold::HoldRecord;
use crate::route::{entry_index, exit_index, RouteSegment};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripIndicator {
    /// Aircraft arrives at the hold here.
    HoldEntry,
    /// Aircraft departs the hold here.
    HoldExit,
}

impl StripIndicator {
    /// Letter shown next to the waypoint.
    pub fn text(&self) -> &'static str {
        match self {
            StripIndicator::HoldEntry => "A",
            StripIndicator::HoldExit => "D",
        }
    }
}

/// Waypoints still shown on the strip.
///
/// Once part of the route is overflown, the list starts at the last
/// overflown waypoint.
pub fn remaining_waypoints(
    route: &[RouteSegment],
    overflown_index: Option<usize>,
) -> Vec<&RouteSegment> {
    remaining_positions(route, overflown_index)
        .into_iter()
        .map(|i| &route[i])
        .collect()
}

/// Route indices of the waypoints still shown on the strip.
fn remaining_positions(route: &[RouteSegment], overflown_index: Option<usize>) -> Vec<usize> {
    let start = match overflown_index {
        Some(overflown) if overflown > 0 => {
            let upto = (overflown + 1).min(route.len());
            route[..upto]
                .iter()
                .rposition(RouteSegment::is_waypoint)
                .unwrap_or(0)
        }
        _ => 0,
    };

    (start..route.len())
        .filter(|&i| route[i].is_waypoint())
        .collect()
}

/// Indicator for strip waypoint `index` of a holding aircraft.
///
/// Only the hold's own entry and exit segments are marked; a hold fix filed
/// again later in the route is not.
pub fn strip_indicator(
    record: &HoldRecord,
    route: &[RouteSegment],
    overflown_index: Option<usize>,
    index: usize,
) -> Option<StripIndicator> {
    let position = *remaining_positions(route, overflown_index).get(index)?;
    let entry = entry_index(route, &record.hold_fix)?;

    if position == entry {
        Some(StripIndicator::HoldEntry)
    } else if exit_index(route, &record.hold_fix, entry) == Some(position) {
        Some(StripIndicator::HoldExit)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hold::HoldStatus;

    fn held_route() -> (HoldRecord, Vec<RouteSegment>) {
        let mut exit = RouteSegment::waypoint("RIVET");
        exit.synthetic = true;
        let route = vec![
            RouteSegment::waypoint("TESAT"),
            RouteSegment::other("H65"),
            RouteSegment::waypoint("RIVET"),
            exit.clone(),
            RouteSegment::waypoint("BOREE"),
        ];
        let record = HoldRecord::new(
            "QFA1",
            RouteSegment::waypoint("RIVET"),
            exit,
            HoldStatus::default(),
        );
        (record, route)
    }

    #[test]
    fn test_remaining_waypoints_without_overflight() {
        let (_, route) = held_route();
        let fixes: Vec<&str> = remaining_waypoints(&route, None)
            .iter()
            .map(|s| s.fix.as_str())
            .collect();
        assert_eq!(fixes, vec!["TESAT", "RIVET", "RIVET", "BOREE"]);
    }

    #[test]
    fn test_remaining_waypoints_start_at_last_overflown_waypoint() {
        let (_, route) = held_route();
        // Overflown up to the airway segment: TESAT is the last waypoint passed.
        let fixes: Vec<&str> = remaining_waypoints(&route, Some(1))
            .iter()
            .map(|s| s.fix.as_str())
            .collect();
        assert_eq!(fixes, vec!["TESAT", "RIVET", "RIVET", "BOREE"]);

        let fixes: Vec<&str> = remaining_waypoints(&route, Some(3))
            .iter()
            .map(|s| s.fix.as_str())
            .collect();
        assert_eq!(fixes, vec!["RIVET", "BOREE"]);
    }

    #[test]
    fn test_strip_indicators() {
        let (record, route) = held_route();
        assert_eq!(strip_indicator(&record, &route, None, 0), None);
        assert_eq!(
            strip_indicator(&record, &route, None, 1),
            Some(StripIndicator::HoldEntry)
        );
        assert_eq!(
            strip_indicator(&record, &route, None, 2),
            Some(StripIndicator::HoldExit)
        );
        assert_eq!(strip_indicator(&record, &route, None, 3), None);
        assert_eq!(strip_indicator(&record, &route, None, 42), None);
    }

    #[test]
    fn test_hold_fix_filed_twice_marked_once() {
        let (record, mut route) = held_route();
        route.push(RouteSegment::waypoint("RIVET"));

        let marks: Vec<Option<StripIndicator>> = (0..5)
            .map(|i| strip_indicator(&record, &route, None, i))
            .collect();
        assert_eq!(
            marks,
            vec![
                None,
                Some(StripIndicator::HoldEntry),
                Some(StripIndicator::HoldExit),
                None,
                None,
            ]
        );
    }

    #[test]
    fn test_indicators_after_overflight() {
        let (record, route) = held_route();
        // Entry overflown: the strip starts at the entry waypoint.
        assert_eq!(
            strip_indicator(&record, &route, Some(2), 0),
            Some(StripIndicator::HoldEntry)
        );
        assert_eq!(
            strip_indicator(&record, &route, Some(2), 1),
            Some(StripIndicator::HoldExit)
        );
    }

    #[test]
    fn test_indicator_text() {
        assert_eq!(StripIndicator::HoldEntry.text(), "A");
        assert_eq!(StripIndicator::HoldExit.text(), "D");
    }
}
