//! Hold detection, classification and the registry of active holds.
//!
//! # Lifecycle
//!
//! ```text
//! flight update ─► HoldDetector ──Entry──► insert_exit_point ─► HoldRegistry::insert
//!       │                                                            │
//!       └──────────► classify ───────────► HoldRegistry::update_status
//! ```
//!
//! Records are only removed explicitly, by callsign.

mod classifier;
mod detector;
mod model;
mod registry;

pub use classifier::{classify, cleared_level, controller_state, current_level};
pub use detector::{detect_entry, Detection, HoldDetector};
pub use model::{ClearedLevel, HoldRecord, HoldState, HoldStatus};
pub use registry::HoldRegistry;
