//! Hold-exit segment synthesis.
//!
//! # Exit Point
//!
//! ```text
//! ... ─► TESAT ─► RIVET ─► RIVET* ─► BOREE ─► ...
//!                  │         │
//!                entry     exit (synthetic, ETO = entry ETO + hold duration)
//! ```
//!
//! The exit segment repeats the entry fix so the strip and the route display
//! show both the time the aircraft arrives at the hold and the time it is
//! expected to leave.

use chrono::Duration;

use super::segment::{RouteSegment, SegmentKind};

/// Build the synthetic exit segment for a hold entered at `entry`.
///
/// Static attributes are copied from the entry segment. The estimate is
/// shifted by `hold_duration`; an entry without an estimate yields an exit
/// without one.
pub fn build_exit_segment(entry: &RouteSegment, hold_duration: Duration) -> RouteSegment {
    RouteSegment {
        fix: entry.fix.clone(),
        kind: SegmentKind::Waypoint,
        track_deg: entry.track_deg,
        ground_speed_kt: entry.ground_speed_kt,
        distance_nm: 0.0,
        requested_level: entry.requested_level,
        requested_speed_kt: entry.requested_speed_kt,
        elapsed_secs: entry.elapsed_secs,
        airway: entry.airway.clone(),
        procedure: entry.procedure.clone(),
        planned_cleared_level: entry.planned_cleared_level,
        eto: entry.eto.map(|eto| eto + hold_duration),
        ato: entry.ato,
        synthetic: true,
    }
}

/// Insert a hold-exit segment immediately after `entry_index`.
///
/// Returns the inserted segment, or `None` when `entry_index` is outside the
/// route. Not idempotent: callers must run this at most once per hold.
pub fn insert_exit_point(
    route: &mut Vec<RouteSegment>,
    entry_index: usize,
    hold_duration: Duration,
) -> Option<RouteSegment> {
    let exit = build_exit_segment(route.get(entry_index)?, hold_duration);
    route.insert(entry_index + 1, exit.clone());
    Some(exit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use proptest::prelude::*;

    fn eto(h: u32, m: u32) -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, h, m, 0).unwrap()
    }

    fn route() -> Vec<RouteSegment> {
        vec![
            RouteSegment::waypoint("TESAT").with_eto(eto(10, 0)),
            RouteSegment::other("H65"),
            RouteSegment::waypoint("RIVET")
                .with_eto(eto(10, 12))
                .with_requested_level(13000)
                .with_airway("H65"),
            RouteSegment::waypoint("BOREE").with_eto(eto(10, 20)),
        ]
    }

    #[test]
    fn test_exit_segment_copies_static_attributes() {
        let mut entry = RouteSegment::waypoint("RIVET")
            .with_eto(eto(10, 12))
            .with_requested_level(13000)
            .with_airway("H65");
        entry.track_deg = 215.0;
        entry.ground_speed_kt = 240;
        entry.distance_nm = 18.5;
        entry.requested_speed_kt = 250;
        entry.procedure = Some("RIVET1".to_string());
        entry.planned_cleared_level = 11000;

        let exit = build_exit_segment(&entry, Duration::minutes(10));

        assert_eq!(exit.fix, "RIVET");
        assert_eq!(exit.kind, SegmentKind::Waypoint);
        assert_eq!(exit.track_deg, 215.0);
        assert_eq!(exit.ground_speed_kt, 240);
        assert_eq!(exit.distance_nm, 0.0);
        assert_eq!(exit.requested_level, 13000);
        assert_eq!(exit.requested_speed_kt, 250);
        assert_eq!(exit.airway.as_deref(), Some("H65"));
        assert_eq!(exit.procedure.as_deref(), Some("RIVET1"));
        assert_eq!(exit.planned_cleared_level, 11000);
        assert!(exit.synthetic);
    }

    #[test]
    fn test_exit_eto_is_entry_plus_duration() {
        let exit = build_exit_segment(&route()[2], Duration::minutes(10));
        assert_eq!(exit.eto, Some(eto(10, 22)));
    }

    #[test]
    fn test_exit_without_entry_estimate() {
        let exit = build_exit_segment(&RouteSegment::waypoint("RIVET"), Duration::minutes(10));
        assert_eq!(exit.eto, None);
    }

    #[test]
    fn test_insert_places_exit_after_entry() {
        let mut route = route();
        let exit = insert_exit_point(&mut route, 2, Duration::minutes(10)).unwrap();

        assert_eq!(route.len(), 5);
        assert_eq!(route[3], exit);
        assert_eq!(route[4].fix, "BOREE");
    }

    #[test]
    fn test_insert_out_of_range() {
        let mut route = route();
        assert!(insert_exit_point(&mut route, 9, Duration::minutes(10)).is_none());
        assert_eq!(route.len(), 4);
    }

    proptest! {
        #[test]
        fn test_insert_preserves_existing_order(
            len in 1usize..20,
            pick in 0usize..20,
            minutes in 0i64..180,
        ) {
            let entry_index = pick % len;
            let original: Vec<RouteSegment> = (0..len)
                .map(|i| RouteSegment::waypoint(format!("FIX{i}")).with_eto(eto(8, 0) + Duration::minutes(i as i64)))
                .collect();
            let mut route = original.clone();

            let exit = insert_exit_point(&mut route, entry_index, Duration::minutes(minutes));
            prop_assert!(exit.is_some());

            prop_assert_eq!(route.len(), original.len() + 1);
            let without_exit: Vec<RouteSegment> = route.iter().filter(|s| !s.synthetic).cloned().collect();
            prop_assert_eq!(&without_exit, &original);

            let inserted = &route[entry_index + 1];
            prop_assert!(inserted.synthetic);
            prop_assert_eq!(
                inserted.eto,
                original[entry_index].eto.map(|t| t + Duration::minutes(minutes))
            );
        }
    }
}
