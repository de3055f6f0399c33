//! HoldTrack - hold tracking for air-traffic-control hold lists
//!
//! This library watches flight data updates for aircraft entering a published
//! holding pattern, splices a synthetic hold-exit waypoint into the route, and
//! keeps a live status record for every holding aircraft so that hold list
//! windows can show who is holding where.
//!
//! # Architecture
//!
//! ```text
//! FlightDataRecord ──► HoldDetector ──► insert_exit_point ──► HoldRegistry
//!        │                                                        ▲
//!        └────────────► classify (every update) ─────────────────┘
//!                                                                 │
//!                      HoldPointConfig ──► partition ──► HoldBoard │
//!                                                                 ▼
//!                                              HoldEvents (broadcast)
//! ```
//!
//! [`engine::HoldEngine`] owns all mutable state and is the single writer.
//! Presentation layers read through [`engine::HoldsView`] and re-pull whenever
//! a [`engine::HoldEvent::HoldsChanged`] arrives.

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod flight;
pub mod hold;
pub mod hold_points;
pub mod route;
pub mod telemetry;

pub use config::{ConfigError, EngineConfig};
pub use engine::{HoldEngine, HoldEvent, HoldsView};
pub use error::HoldError;
pub use flight::{FlightDataHost, FlightDataRecord, TrackRef};
