//! Suspend/resume toggle for the audio context.
//!
//! The context moves `Suspended -> Running -> Suspended` for the lifetime of
//! the page. Suspend and resume settle asynchronously, so the machine keeps an
//! explicit in-flight phase: the button label flips as soon as a transition is
//! requested, further toggles are ignored until it settles, and a rejected
//! transition restores the previous state and label.

use crate::constants::{LABEL_ACTIVATE, LABEL_DEACTIVATE};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AudioState {
    Suspended,
    Running,
}

impl AudioState {
    /// Label shown on the button while the context is in this state.
    pub fn button_label(self) -> &'static str {
        match self {
            AudioState::Running => LABEL_DEACTIVATE,
            AudioState::Suspended => LABEL_ACTIVATE,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleOp {
    Suspend,
    Resume,
}

impl ToggleOp {
    pub fn target(self) -> AudioState {
        match self {
            ToggleOp::Suspend => AudioState::Suspended,
            ToggleOp::Resume => AudioState::Running,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Settled(AudioState),
    InFlight { from: AudioState, op: ToggleOp },
}

/// What the caller must do after a toggle was accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleRequest {
    pub op: ToggleOp,
    pub label: &'static str,
}

#[derive(Debug)]
pub struct ToggleMachine {
    phase: Phase,
}

impl Default for ToggleMachine {
    fn default() -> Self {
        Self::new(AudioState::Suspended)
    }
}

impl ToggleMachine {
    pub fn new(initial: AudioState) -> Self {
        Self {
            phase: Phase::Settled(initial),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self.phase, Phase::InFlight { .. })
    }

    /// Label for the button right now; during a transition this is already
    /// the label of the target state.
    pub fn label(&self) -> &'static str {
        match self.phase {
            Phase::Settled(s) => s.button_label(),
            Phase::InFlight { op, .. } => op.target().button_label(),
        }
    }

    /// Accept a toggle given the state the context currently reports.
    /// Returns `None` while a previous transition is still in flight.
    pub fn request(&mut self, observed: AudioState) -> Option<ToggleRequest> {
        if let Phase::InFlight { op, .. } = self.phase {
            log::warn!("[audio] toggle ignored; {:?} still in flight", op);
            return None;
        }
        let op = match observed {
            AudioState::Running => ToggleOp::Suspend,
            AudioState::Suspended => ToggleOp::Resume,
        };
        self.phase = Phase::InFlight { from: observed, op };
        Some(ToggleRequest {
            op,
            label: op.target().button_label(),
        })
    }

    /// Record the outcome of the in-flight transition and return the settled
    /// state. Calling this with nothing in flight is a no-op.
    pub fn settle(&mut self, succeeded: bool) -> AudioState {
        let settled = match self.phase {
            Phase::Settled(s) => s,
            Phase::InFlight { op, .. } if succeeded => op.target(),
            Phase::InFlight { from, op } => {
                log::warn!("[audio] {:?} failed; staying {:?}", op, from);
                from
            }
        };
        self.phase = Phase::Settled(settled);
        settled
    }
}

/// The audio context as seen by the toggle: it reports its state and starts
/// asynchronous transitions, returning whatever handle the host uses to
/// observe completion.
pub trait AudioTransport {
    type Pending;

    fn state(&self) -> AudioState;
    fn suspend(&self) -> Self::Pending;
    fn resume(&self) -> Self::Pending;
}

/// Toggle machine bound to a concrete transport.
pub struct AudioToggle<T: AudioTransport> {
    transport: T,
    machine: ToggleMachine,
}

impl<T: AudioTransport> AudioToggle<T> {
    pub fn new(transport: T) -> Self {
        let machine = ToggleMachine::new(transport.state());
        Self { transport, machine }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn machine(&self) -> &ToggleMachine {
        &self.machine
    }

    pub fn label(&self) -> &'static str {
        self.machine.label()
    }

    /// Start a transition. The returned label should be shown immediately;
    /// the pending handle must be driven to completion and reported back via
    /// [`AudioToggle::settle`].
    pub fn toggle(&mut self) -> Option<(ToggleRequest, T::Pending)> {
        let req = self.machine.request(self.transport.state())?;
        let pending = match req.op {
            ToggleOp::Suspend => self.transport.suspend(),
            ToggleOp::Resume => self.transport.resume(),
        };
        Some((req, pending))
    }

    pub fn settle(&mut self, succeeded: bool) -> AudioState {
        let state = self.machine.settle(succeeded);
        log::info!("[audio] context {:?}", state);
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reentrant_request_is_ignored() {
        let mut m = ToggleMachine::default();
        assert!(m.request(AudioState::Suspended).is_some());
        assert!(m.request(AudioState::Suspended).is_none());
        assert_eq!(m.settle(true), AudioState::Running);
        assert_eq!(m.label(), LABEL_DEACTIVATE);
    }

    #[test]
    fn failed_transition_reverts_label() {
        let mut m = ToggleMachine::new(AudioState::Running);
        let req = m.request(AudioState::Running).unwrap();
        assert_eq!(req.label, LABEL_ACTIVATE);
        assert_eq!(m.settle(false), AudioState::Running);
        assert_eq!(m.label(), LABEL_DEACTIVATE);
    }

    #[test]
    fn settle_without_transition_is_noop() {
        let mut m = ToggleMachine::default();
        assert_eq!(m.settle(true), AudioState::Suspended);
        assert_eq!(m.phase(), Phase::Settled(AudioState::Suspended));
    }
}
