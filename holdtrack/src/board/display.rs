//! Hold list row formatting.
//!
//! Hold lists use fixed-width columns:
//!
//! ```text
//! QFA1     380 350      1012 1022 H/RIV
//! VOZ812   270 250B280  1015 1025 H/TAR
//! ```

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::hold::{ClearedLevel, HoldRecord, HoldState};

/// Placeholder for a time that is not known yet.
const BLANK_TIME: &str = "    ";

/// One formatted hold list row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HoldRow {
    pub callsign: String,
    pub level: String,
    pub cleared_level: String,
    pub entry_time: String,
    pub exit_time: String,
    pub coordination: String,
    pub rvsm_approved: bool,
    pub designated: bool,
    pub state: HoldState,
}

impl HoldRow {
    /// Format every column of a hold record.
    pub fn from_record(record: &HoldRecord) -> Self {
        Self {
            callsign: format_callsign(&record.callsign),
            level: format_level(record.level),
            cleared_level: format_cleared_level(&record.cleared_level),
            entry_time: format_entry_time(record.entry_time()),
            exit_time: format_exit_time(record.exit_time()),
            coordination: format_coordination(&record.coordination),
            rvsm_approved: record.rvsm_approved,
            designated: record.designated,
            state: record.state,
        }
    }
}

/// Callsign padded to eight characters.
pub fn format_callsign(callsign: &str) -> String {
    format!("{:<8}", callsign)
}

/// Level in hundreds of feet, three digits.
pub fn format_level(level: i32) -> String {
    format!("{:03}", level / 100)
}

/// `380    ` for a single level, `250B280` for a block.
pub fn format_cleared_level(cleared: &ClearedLevel) -> String {
    match cleared {
        ClearedLevel::Single(level) => format!("{:<7}", format_level(*level)),
        ClearedLevel::Block { lower, upper } => {
            format!("{}B{}", format_level(*lower), format_level(*upper))
        }
    }
}

/// `HHmm` once the aircraft has reached the hold, blank before.
pub fn format_entry_time(ato: Option<DateTime<Utc>>) -> String {
    format_time(ato)
}

/// `HHmm` of the exit estimate, blank when there is none.
pub fn format_exit_time(eto: Option<DateTime<Utc>>) -> String {
    format_time(eto)
}

fn format_time(time: Option<DateTime<Utc>>) -> String {
    time.map(|t| t.format("%H%M").to_string())
        .unwrap_or_else(|| BLANK_TIME.to_string())
}

/// Coordination text padded to fifteen characters.
pub fn format_coordination(text: &str) -> String {
    format!("{:<15}", text)
}
