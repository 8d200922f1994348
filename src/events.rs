//! Notifications published by the match engine.
//!
//! The engine calls [`Notifier::notify`] synchronously from inside the
//! operation that caused the event. Listeners must not rely on being run
//! before or after any later engine call.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use crate::common::{AttackOutcome, Side};
use crate::coord::Coordinate;

/// Something a presentation layer may want to react to.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(tag = "event", rename_all = "snake_case"))]
pub enum MatchEvent {
    /// The human fleet is complete. Ends setup once the automated fleet is
    /// placed too. `side` is always `Human`.
    FleetReady { side: Side },
    /// An attack by `attacker` was resolved on the other side's board.
    AttackResolved {
        attacker: Side,
        target: Coordinate,
        outcome: AttackOutcome,
    },
    /// A vessel belonging to `owner` was destroyed.
    VesselSunk {
        owner: Side,
        vessel: String,
        cells: Vec<Coordinate>,
        message: String,
    },
    /// The turn passed to `active`.
    TurnChanged { active: Side },
    MatchOver { winner: Side },
    /// The engine was reset to a fresh setup phase.
    Restarted,
}

/// Receiver for [`MatchEvent`]s.
pub trait Notifier {
    fn notify(&mut self, event: &MatchEvent);
}

impl<F> Notifier for F
where
    F: FnMut(&MatchEvent),
{
    fn notify(&mut self, event: &MatchEvent) {
        self(event)
    }
}

/// Drops every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&mut self, _event: &MatchEvent) {}
}

/// Keeps every event in order.
#[derive(Debug, Default, Clone)]
pub struct EventLog {
    events: Vec<MatchEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[MatchEvent] {
        &self.events
    }

    /// Remove and return everything recorded so far.
    pub fn drain(&mut self) -> Vec<MatchEvent> {
        core::mem::take(&mut self.events)
    }
}

impl Notifier for EventLog {
    fn notify(&mut self, event: &MatchEvent) {
        self.events.push(event.clone());
    }
}

/// Forwards each event to every listener, in subscription order.
#[derive(Default)]
pub struct Broadcast {
    listeners: Vec<Box<dyn Notifier>>,
}

impl Broadcast {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: impl Notifier + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl Notifier for Broadcast {
    fn notify(&mut self, event: &MatchEvent) {
        for listener in self.listeners.iter_mut() {
            listener.notify(event);
        }
    }
}
