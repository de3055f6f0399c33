//! Registry of active holds.
//!
//! Holds are kept in insertion order, keyed by callsign. The registry itself
//! is not synchronized; [`crate::HoldEngine`] wraps it in a lock and is its
//! only writer.

use super::model::{HoldRecord, HoldStatus};
use crate::error::HoldError;

#[derive(Debug, Default)]
pub struct HoldRegistry {
    records: Vec<HoldRecord>,
}

impl HoldRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record for a new hold.
    ///
    /// # Errors
    ///
    /// `HoldError::AlreadyHolding` if the callsign already has a record.
    pub fn insert(&mut self, record: HoldRecord) -> Result<(), HoldError> {
        if self.contains(&record.callsign) {
            return Err(HoldError::AlreadyHolding {
                callsign: record.callsign,
            });
        }
        self.records.push(record);
        Ok(())
    }

    /// Refresh the status fields of an existing record.
    ///
    /// Returns `None` if there is no record for `callsign`, otherwise whether
    /// any field changed.
    pub fn update_status(&mut self, callsign: &str, status: HoldStatus) -> Option<bool> {
        let record = self.get_mut(callsign)?;
        let before = record.clone();
        record.apply_status(status);
        Some(*record != before)
    }

    /// Record for `callsign`, if the aircraft is holding.
    pub fn find(&self, callsign: &str) -> Option<&HoldRecord> {
        self.records.iter().find(|r| r.callsign == callsign)
    }

    /// Mutable access for in-place refreshes by the engine.
    pub(crate) fn get_mut(&mut self, callsign: &str) -> Option<&mut HoldRecord> {
        self.records.iter_mut().find(|r| r.callsign == callsign)
    }

    /// Whether the aircraft is holding.
    pub fn contains(&self, callsign: &str) -> bool {
        self.find(callsign).is_some()
    }

    /// Remove and return the record for `callsign`.
    pub fn remove(&mut self, callsign: &str) -> Option<HoldRecord> {
        let index = self.records.iter().position(|r| r.callsign == callsign)?;
        Some(self.records.remove(index))
    }

    /// Snapshot of every record, in insertion order.
    pub fn all(&self) -> Vec<HoldRecord> {
        self.records.clone()
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &HoldRecord> {
        self.records.iter()
    }

    /// Number of active holds.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no aircraft is holding.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hold::model::{ClearedLevel, HoldState};
    use crate::route::RouteSegment;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn record(callsign: &str) -> HoldRecord {
        let mut exit = RouteSegment::waypoint("RIVET");
        exit.synthetic = true;
        HoldRecord::new(
            callsign,
            RouteSegment::waypoint("RIVET"),
            exit,
            HoldStatus::default(),
        )
    }

    #[test]
    fn test_insert_rejects_duplicate() {
        let mut registry = HoldRegistry::new();
        registry.insert(record("QFA1")).unwrap();

        let err = registry.insert(record("QFA1")).unwrap_err();
        assert_eq!(
            err,
            HoldError::AlreadyHolding {
                callsign: "QFA1".to_string()
            }
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_update_status_absent_is_noop() {
        let mut registry = HoldRegistry::new();
        assert_eq!(registry.update_status("QFA9", HoldStatus::default()), None);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_update_status_reports_change() {
        let mut registry = HoldRegistry::new();
        registry.insert(record("QFA1")).unwrap();

        let status = HoldStatus {
            level: 13000,
            cleared_level: ClearedLevel::Single(13000),
            state: HoldState::Jurisdiction,
            ..HoldStatus::default()
        };
        assert_eq!(registry.update_status("QFA1", status.clone()), Some(true));
        assert_eq!(registry.update_status("QFA1", status), Some(false));

        let found = registry.find("QFA1").unwrap();
        assert_eq!(found.level, 13000);
        assert_eq!(found.state, HoldState::Jurisdiction);
    }

    #[test]
    fn test_remove_returns_record() {
        let mut registry = HoldRegistry::new();
        registry.insert(record("QFA1")).unwrap();
        registry.insert(record("VOZ2")).unwrap();

        let removed = registry.remove("QFA1").unwrap();
        assert_eq!(removed.callsign, "QFA1");
        assert!(!registry.contains("QFA1"));
        assert!(registry.remove("QFA1").is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_all_keeps_insertion_order() {
        let mut registry = HoldRegistry::new();
        for cs in ["QFA1", "VOZ2", "JST3"] {
            registry.insert(record(cs)).unwrap();
        }
        let callsigns: Vec<String> = registry.all().into_iter().map(|r| r.callsign).collect();
        assert_eq!(callsigns, vec!["QFA1", "VOZ2", "JST3"]);
    }

    proptest! {
        #[test]
        fn test_at_most_one_record_per_callsign(
            callsigns in proptest::collection::vec("[A-C]{1,2}", 0..40)
        ) {
            let mut registry = HoldRegistry::new();
            for cs in &callsigns {
                let _ = registry.insert(record(cs));
            }
            let unique: HashSet<&String> = callsigns.iter().collect();
            prop_assert_eq!(registry.len(), unique.len());

            let mut seen = HashSet::new();
            for r in registry.iter() {
                prop_assert!(seen.insert(r.callsign.clone()));
            }
        }
    }
}
