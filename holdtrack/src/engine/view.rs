//! Read-only handle for presentation layers.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::board::{partition, HoldBoard};
use crate::hold::{HoldRecord, HoldRegistry};
use crate::hold_points::{HoldPointConfig, HOLD_POINT_SLOTS};

/// Cheap-to-clone query handle over the engine's state.
///
/// Every query returns a snapshot; nothing returned here changes afterwards.
#[derive(Debug, Clone)]
pub struct HoldsView {
    registry: Arc<RwLock<HoldRegistry>>,
    hold_points: Arc<RwLock<HoldPointConfig>>,
}

impl HoldsView {
    /// Wrap the engine's shared state.
    pub(crate) fn new(
        registry: Arc<RwLock<HoldRegistry>>,
        hold_points: Arc<RwLock<HoldPointConfig>>,
    ) -> Self {
        Self {
            registry,
            hold_points,
        }
    }

    /// Every active hold, in the order holds began.
    pub fn active_holds(&self) -> Vec<HoldRecord> {
        self.registry.read().all()
    }

    /// Snapshot of the hold record for `callsign`.
    pub fn find(&self, callsign: &str) -> Option<HoldRecord> {
        self.registry.read().find(callsign).cloned()
    }

    /// Number of active holds, displayable or not.
    pub fn hold_count(&self) -> usize {
        self.registry.read().len()
    }

    /// The four hold-point slots.
    pub fn configured_hold_points(&self) -> [Option<String>; HOLD_POINT_SLOTS] {
        self.hold_points.read().slots().clone()
    }

    /// Current hold list buckets.
    pub fn board(&self) -> HoldBoard {
        let records = self.active_holds();
        let hold_points = self.hold_points.read();
        partition(&records, &hold_points)
    }
}
