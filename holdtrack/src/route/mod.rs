//! Route segments and the hold-exit route mutation.
//!
//! Routes belong to the host's flight data subsystem. The engine reads them
//! and inserts exactly one synthetic segment per hold; it never removes or
//! reorders segments.

mod mutator;
mod segment;

pub use mutator::{build_exit_segment, insert_exit_point};
pub use segment::{entry_index, exit_index, RouteSegment, SegmentKind};
