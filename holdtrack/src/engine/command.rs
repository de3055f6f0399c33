//! User intents queued from presentation.
//!
//! Presentation threads hold a [`CommandSender`] and never touch engine state
//! directly. The engine owner drains the queue with
//! [`super::HoldEngine::process_pending_commands`], so commands are applied in
//! the order they were sent, between flight updates.

use tokio::sync::mpsc;

/// Sending half of the engine's command queue.
pub type CommandSender = mpsc::UnboundedSender<HoldCommand>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HoldCommand {
    /// Select or deselect the aircraft's track.
    Designate { callsign: String },
    OpenClearedLevelMenu { callsign: String },
    OpenHoldExitMenu { callsign: String },
    ChangeCoordination { callsign: String, text: String },
    /// Unsupported; always fails.
    CancelHold { callsign: String },
    /// Drop the hold record for an aircraft.
    RemoveHold { callsign: String },
    AddHoldPoint { slot: usize, name: String },
    RemoveHoldPoint { name: String },
}

impl HoldCommand {
    /// Aircraft the command refers to, if any.
    pub fn callsign(&self) -> Option<&str> {
        match self {
            HoldCommand::Designate { callsign }
            | HoldCommand::OpenClearedLevelMenu { callsign }
            | HoldCommand::OpenHoldExitMenu { callsign }
            | HoldCommand::ChangeCoordination { callsign, .. }
            | HoldCommand::CancelHold { callsign }
            | HoldCommand::RemoveHold { callsign } => Some(callsign),
            HoldCommand::AddHoldPoint { .. } | HoldCommand::RemoveHoldPoint { .. } => None,
        }
    }
}
