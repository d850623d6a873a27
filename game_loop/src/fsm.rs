//! Loop lifecycle state machine
//!
//! Explicit lifecycle states so repeated or out-of-order start/stop calls
//! are well-defined.

/// Loop states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Stopped,
    Running,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopAction {
    Start,
    Stop,
}

/// Finite state machine for the ticking thread's lifecycle
#[derive(Debug)]
pub struct LoopFsm {
    state: LoopState,
}

impl LoopFsm {
    pub fn new() -> Self {
        Self {
            state: LoopState::Stopped,
        }
    }

    /// Get current state
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, action: LoopAction) -> bool {
        self.next_state(action).is_some()
    }

    /// Attempt a transition. Returns true if the state changed.
    pub fn transition(&mut self, action: LoopAction) -> bool {
        match self.next_state(action) {
            Some(next) => {
                self.state = next;
                true
            }
            None => false,
        }
    }

    fn next_state(&self, action: LoopAction) -> Option<LoopState> {
        match (self.state, action) {
            (LoopState::Stopped, LoopAction::Start) => Some(LoopState::Running),
            (LoopState::Running, LoopAction::Stop) => Some(LoopState::Stopped),

            // Redundant starts and stops are rejected, not errors
            _ => None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }
}

impl Default for LoopFsm {
    fn default() -> Self {
        Self::new()
    }
}
