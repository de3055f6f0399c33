//! The hold engine facade.

use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::{broadcast, mpsc};
use tracing::{debug, info, warn};

use super::command::{CommandSender, HoldCommand};
use super::events::{HoldEvent, HoldEvents};
use super::reporter::{ErrorReporter, TracingErrorReporter};
use super::view::HoldsView;
use crate::board::HoldBoard;
use crate::config::EngineConfig;
use crate::error::HoldError;
use crate::flight::{FlightDataHost, FlightDataRecord};
use crate::hold::{classify, Detection, HoldDetector, HoldRecord, HoldRegistry};
use crate::hold_points::{HoldPointChange, HoldPointConfig, HOLD_POINT_SLOTS};
use crate::route::insert_exit_point;

/// What a flight update did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightUpdateOutcome {
    /// The aircraft is not holding.
    NotHolding,
    /// A new hold began with this update.
    HoldStarted,
    /// An existing hold was refreshed.
    HoldUpdated { changed: bool },
}

/// Owner of all hold state and its single writer.
///
/// Mutating operations take `&mut self`. Readers on other threads use a
/// [`HoldsView`] and send intents through a [`CommandSender`].
pub struct HoldEngine {
    config: EngineConfig,
    detector: HoldDetector,
    registry: Arc<RwLock<HoldRegistry>>,
    hold_points: Arc<RwLock<HoldPointConfig>>,
    events: HoldEvents,
    host: Arc<dyn FlightDataHost>,
    reporter: Arc<dyn ErrorReporter>,
    commands_tx: CommandSender,
    commands_rx: mpsc::UnboundedReceiver<HoldCommand>,
}

impl HoldEngine {
    /// Create an engine with no holds and every hold-point slot empty.
    pub fn new(config: EngineConfig, host: Arc<dyn FlightDataHost>) -> Self {
        let (commands_tx, commands_rx) = mpsc::unbounded_channel();
        Self {
            detector: HoldDetector::new(config.hold_fixes.clone()),
            events: HoldEvents::new(config.event_capacity),
            config,
            registry: Arc::new(RwLock::new(HoldRegistry::new())),
            hold_points: Arc::new(RwLock::new(HoldPointConfig::new())),
            host,
            reporter: Arc::new(TracingErrorReporter),
            commands_tx,
            commands_rx,
        }
    }

    /// Send user-facing errors to `reporter` instead of the log.
    pub fn with_error_reporter(mut self, reporter: Arc<dyn ErrorReporter>) -> Self {
        self.reporter = reporter;
        self
    }

    /// Settings the engine was built with.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Read-only handle for presentation threads.
    pub fn view(&self) -> HoldsView {
        HoldsView::new(Arc::clone(&self.registry), Arc::clone(&self.hold_points))
    }

    /// Subscribe to notifications. Dropping the receiver unsubscribes.
    pub fn subscribe(&self) -> broadcast::Receiver<HoldEvent> {
        self.events.subscribe()
    }

    /// Queue for intents coming from presentation threads.
    pub fn command_sender(&self) -> CommandSender {
        self.commands_tx.clone()
    }

    // =========================================================================
    // Flight updates
    // =========================================================================

    /// Process one flight data change.
    ///
    /// On hold entry the exit segment is inserted into `flight.route`. Every
    /// update of a holding aircraft refreshes its record.
    pub fn on_flight_update(&mut self, flight: &mut FlightDataRecord) -> FlightUpdateOutcome {
        let detection = {
            let hold_points = self.hold_points.read();
            let registry = self.registry.read();
            self.detector.detect(flight, &hold_points, &registry)
        };

        match detection {
            Detection::Entry { index, fix } => {
                if self.start_hold(flight, index, &fix) {
                    return FlightUpdateOutcome::HoldStarted;
                }
            }
            Detection::AwaitingEstimate => {
                debug!(callsign = %flight.callsign, "Hold fix in route, estimate not confirmed");
            }
            Detection::ExitInRoute => {
                debug!(callsign = %flight.callsign, "Exit point already in route, hold not restarted");
            }
            Detection::NoHoldFix | Detection::AlreadyHolding => {}
        }

        self.refresh_hold(flight)
    }

    fn start_hold(&mut self, flight: &mut FlightDataRecord, entry_index: usize, fix: &str) -> bool {
        {
            let mut registry = self.registry.write();
            if registry.contains(&flight.callsign) {
                return false;
            }

            let Some(exit) =
                insert_exit_point(&mut flight.route, entry_index, self.config.hold_duration())
            else {
                warn!(callsign = %flight.callsign, entry_index, "Hold entry outside route");
                return false;
            };

            let entry = flight.route[entry_index].clone();
            info!(
                callsign = %flight.callsign,
                fix = %fix,
                exit_eto = ?exit.eto,
                "Hold started"
            );

            let record = HoldRecord::new(flight.callsign.clone(), entry, exit, classify(flight));
            if let Err(err) = registry.insert(record) {
                warn!(error = %err, "Hold record not created");
                return false;
            }
        }

        self.events.publish(HoldEvent::HoldsChanged);
        true
    }

    fn refresh_hold(&mut self, flight: &FlightDataRecord) -> FlightUpdateOutcome {
        let status = classify(flight);
        let changed = {
            let mut registry = self.registry.write();
            let Some(status_changed) = registry.update_status(&flight.callsign, status) else {
                return FlightUpdateOutcome::NotHolding;
            };
            let route_changed = registry
                .get_mut(&flight.callsign)
                .map(|record| record.refresh_segments(&flight.route))
                .unwrap_or(false);
            status_changed || route_changed
        };

        if changed {
            debug!(callsign = %flight.callsign, "Hold status updated");
            self.events.publish(HoldEvent::HoldsChanged);
        }

        FlightUpdateOutcome::HoldUpdated { changed }
    }

    // =========================================================================
    // Hold lifecycle
    // =========================================================================

    /// Drop the hold record for an aircraft.
    ///
    /// The synthetic exit segment stays in the host's route, and its presence
    /// keeps later updates from starting the same hold again.
    pub fn remove_hold(&mut self, callsign: &str) -> Option<HoldRecord> {
        let removed = self.registry.write().remove(callsign)?;
        info!(callsign = %callsign, fix = %removed.hold_fix, "Hold removed");
        self.events.publish(HoldEvent::HoldsChanged);
        Some(removed)
    }

    /// Hold cancellation is not supported and always fails.
    pub fn cancel_hold(&mut self, callsign: &str) -> Result<(), HoldError> {
        let err = HoldError::Unsupported {
            operation: "hold cancellation",
        };
        warn!(callsign = %callsign, "Hold cancellation requested");
        self.reporter.report(&err);
        Err(err)
    }

    // =========================================================================
    // Hold points
    // =========================================================================

    /// Configure `name` in `slot`, replacing the previous name.
    ///
    /// Validation failures are reported and returned; nothing changes and
    /// nothing is published.
    pub fn add_or_replace_hold_point(&mut self, slot: usize, name: &str) -> Result<(), HoldError> {
        let result = self.hold_points.write().add_or_replace(slot, name);
        match result {
            Ok(changes) => {
                self.publish_hold_point_changes(changes);
                Ok(())
            }
            Err(err) => {
                self.reporter.report(&err);
                Err(err)
            }
        }
    }

    /// Clear the slot holding `name`. Returns false if no slot held it.
    pub fn remove_hold_point(&mut self, name: &str) -> bool {
        let change = self.hold_points.write().remove(name);
        match change {
            Some(change) => {
                self.publish_hold_point_changes(vec![change]);
                true
            }
            None => false,
        }
    }

    fn publish_hold_point_changes(&self, changes: Vec<HoldPointChange>) {
        if changes.is_empty() {
            return;
        }
        for change in changes {
            let event = match change {
                HoldPointChange::Removed { name } => HoldEvent::HoldPointRemoved { name },
                HoldPointChange::Added { slot, name } => HoldEvent::HoldPointAdded { slot, name },
            };
            self.events.publish(event);
        }
        self.events.publish(HoldEvent::HoldsChanged);
    }

    // =========================================================================
    // User intents
    // =========================================================================

    /// Select or deselect the aircraft's track on the host display.
    pub fn designate(&self, callsign: &str) {
        match self.host.find_track(callsign) {
            Some(track) => self.host.toggle_selection(&track),
            None => debug!(callsign = %callsign, "Designation for unknown track ignored"),
        }
    }

    /// Open the host's cleared level menu for the aircraft's track.
    pub fn open_cleared_level_menu(&self, callsign: &str) {
        match self.host.find_track(callsign) {
            Some(track) => self.host.open_cleared_level_menu(&track),
            None => debug!(callsign = %callsign, "Cleared level menu for unknown track ignored"),
        }
    }

    /// Open the estimate menu for the hold's exit point.
    pub fn open_hold_exit_menu(&self, callsign: &str) {
        let exit = self.registry.read().find(callsign).map(|r| r.exit.clone());
        match exit {
            Some(exit) => self.host.open_exit_time_menu(callsign, &exit),
            None => debug!(callsign = %callsign, "Exit menu for unknown hold ignored"),
        }
    }

    /// Write the coordination annotation through to the host.
    pub fn change_coordination(&mut self, callsign: &str, text: &str) {
        if !self.host.set_coordination(callsign, text) {
            debug!(callsign = %callsign, "Coordination change for unknown aircraft ignored");
            return;
        }

        let changed = self
            .registry
            .write()
            .get_mut(callsign)
            .map(|record| {
                if record.coordination == text {
                    return false;
                }
                record.coordination = text.to_string();
                true
            })
            .unwrap_or(false);

        if changed {
            self.events.publish(HoldEvent::HoldsChanged);
        }
    }

    /// Apply one queued intent.
    pub fn handle(&mut self, command: HoldCommand) -> Result<(), HoldError> {
        match command {
            HoldCommand::Designate { callsign } => self.designate(&callsign),
            HoldCommand::OpenClearedLevelMenu { callsign } => {
                self.open_cleared_level_menu(&callsign)
            }
            HoldCommand::OpenHoldExitMenu { callsign } => self.open_hold_exit_menu(&callsign),
            HoldCommand::ChangeCoordination { callsign, text } => {
                self.change_coordination(&callsign, &text)
            }
            HoldCommand::CancelHold { callsign } => return self.cancel_hold(&callsign),
            HoldCommand::RemoveHold { callsign } => {
                self.remove_hold(&callsign);
            }
            HoldCommand::AddHoldPoint { slot, name } => {
                return self.add_or_replace_hold_point(slot, &name)
            }
            HoldCommand::RemoveHoldPoint { name } => {
                self.remove_hold_point(&name);
            }
        }
        Ok(())
    }

    /// Apply every intent queued so far. Returns how many were applied.
    ///
    /// Failures have already gone to the error reporter.
    pub fn process_pending_commands(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(command) = self.commands_rx.try_recv() {
            processed += 1;
            if let Err(err) = self.handle(command) {
                debug!(error = %err, "Queued command failed");
            }
        }
        processed
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Every active hold, in the order holds began.
    pub fn active_holds(&self) -> Vec<HoldRecord> {
        self.registry.read().all()
    }

    /// The four hold-point slots.
    pub fn configured_hold_points(&self) -> [Option<String>; HOLD_POINT_SLOTS] {
        self.hold_points.read().slots().clone()
    }

    /// Current hold list buckets.
    pub fn board(&self) -> HoldBoard {
        self.view().board()
    }
}
