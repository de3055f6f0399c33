//! Grouping of active holds into hold list windows.
//!
//! # Buckets
//!
//! ```text
//! slot 0 "RIVET" ──► HOLD RIVET WINDOW   (records with hold_fix == "RIVET")
//! slot 1  empty      (no bucket)
//! slot 2 "BOREE" ──► HOLD BOREE WINDOW
//! slot 3  empty
//! any other fix  ──► HOLD OTHER WINDOW
//! ```
//!
//! Unconcerned records are never placed in a bucket. Each bucket is sorted by
//! effective cleared level, highest first. An empty bucket tells the window
//! layer to close its window.

mod display;
mod strip;

pub use display::{
    format_callsign, format_cleared_level, format_coordination, format_entry_time,
    format_exit_time, format_level, HoldRow,
};
pub use strip::{remaining_waypoints, strip_indicator, StripIndicator};

use std::cmp::Reverse;

use serde::Serialize;

use crate::hold::HoldRecord;
use crate::hold_points::HoldPointConfig;

/// Identifies a presentation window.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum WindowKey {
    /// Hold-point setup window.
    Setup,
    /// Hold list for a configured hold point.
    HoldFor(String),
    /// Hold list for every unconfigured fix.
    Other,
}

impl std::fmt::Display for WindowKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WindowKey::Setup => write!(f, "hold-setup"),
            WindowKey::HoldFor(name) => write!(f, "hold-{}", name),
            WindowKey::Other => write!(f, "hold-other"),
        }
    }
}

/// Displayable records for one hold list window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoldBucket {
    /// Configured slot, `None` for the "other" bucket.
    pub slot: Option<usize>,
    /// Hold-point name, empty for the "other" bucket.
    pub name: String,
    pub records: Vec<HoldRecord>,
}

impl HoldBucket {
    fn new(slot: Option<usize>, name: &str, mut records: Vec<HoldRecord>) -> Self {
        records.sort_by_key(|r| Reverse(r.effective_level()));
        Self {
            slot,
            name: name.to_string(),
            records,
        }
    }

    /// Whether this is the bucket for unconfigured fixes.
    pub fn is_other(&self) -> bool {
        self.slot.is_none()
    }

    /// Key of the window showing this bucket.
    pub fn window_key(&self) -> WindowKey {
        match self.slot {
            Some(_) => WindowKey::HoldFor(self.name.clone()),
            None => WindowKey::Other,
        }
    }

    /// Window title, e.g. `HOLD RIVET WINDOW`.
    pub fn title(&self) -> String {
        match self.slot {
            Some(_) => format!("HOLD {} WINDOW", self.name),
            None => "HOLD OTHER WINDOW".to_string(),
        }
    }

    /// Whether the window should be open.
    pub fn is_displayable(&self) -> bool {
        !self.records.is_empty()
    }

    /// Formatted rows, in display order.
    pub fn rows(&self) -> Vec<HoldRow> {
        self.records.iter().map(HoldRow::from_record).collect()
    }
}

/// Every hold list bucket at one point in time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoldBoard {
    /// One bucket per non-empty configured slot, in slot order.
    pub named: Vec<HoldBucket>,
    pub other: HoldBucket,
}

impl HoldBoard {
    /// Named buckets followed by the "other" bucket.
    pub fn buckets(&self) -> impl Iterator<Item = &HoldBucket> {
        self.named.iter().chain(std::iter::once(&self.other))
    }

    /// Buckets whose windows should be open.
    pub fn displayable(&self) -> impl Iterator<Item = &HoldBucket> {
        self.buckets().filter(|b| b.is_displayable())
    }

    /// Window keys whose windows should be closed.
    pub fn windows_to_close(&self) -> Vec<WindowKey> {
        self.buckets()
            .filter(|b| !b.is_displayable())
            .map(HoldBucket::window_key)
            .collect()
    }

    /// Named bucket for a hold point.
    pub fn bucket(&self, name: &str) -> Option<&HoldBucket> {
        self.named.iter().find(|b| b.name == name)
    }
}

/// Split records into named hold-point buckets and the "other" bucket.
pub fn partition(records: &[HoldRecord], hold_points: &HoldPointConfig) -> HoldBoard {
    let displayable = || records.iter().filter(|r| r.is_displayable());

    let named = hold_points
        .names()
        .map(|(slot, name)| {
            let members = displayable()
                .filter(|r| r.hold_fix == name)
                .cloned()
                .collect();
            HoldBucket::new(Some(slot), name, members)
        })
        .collect();

    let other = displayable()
        .filter(|r| !hold_points.contains(&r.hold_fix))
        .cloned()
        .collect();

    HoldBoard {
        named,
        other: HoldBucket::new(None, "", other),
    }
}
