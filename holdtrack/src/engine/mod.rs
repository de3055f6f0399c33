//! Hold engine: the single writer over hold state.
//!
//! The host feeds flight data changes to [`HoldEngine::on_flight_update`] on
//! one thread. Presentation threads never mutate state; they read through a
//! [`HoldsView`], listen for [`HoldEvent`]s and queue [`HoldCommand`]s.
//!
//! ```text
//! host thread                      presentation threads
//! ───────────                      ────────────────────
//! on_flight_update ─┐                HoldsView::board()
//! process_pending ──┤ HoldEngine ──► HoldEvents ──► Receiver<HoldEvent>
//!        ▲          └─ RwLock<..> ◄── HoldsView
//!        └──────────── CommandSender ◄── user intents
//! ```

mod command;
mod events;
mod hold_engine;
mod reporter;
mod view;

pub use command::{CommandSender, HoldCommand};
pub use events::{HoldEvent, HoldEvents};
pub use hold_engine::{FlightUpdateOutcome, HoldEngine};
pub use reporter::{ErrorReporter, TracingErrorReporter};
pub use view::HoldsView;
