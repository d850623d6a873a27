//! Concurrent control-key flags
//!
//! The input collaborator writes these from its event thread; the ticking
//! thread samples them once per tick into a plain [`ControlState`].

use std::sync::atomic::{AtomicBool, Ordering};

use game_core::ControlState;

/// The four logical controls, one per paddle direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    LeftUp,
    LeftDown,
    RightUp,
    RightDown,
}

/// One settable flag per logical control
///
/// Each flag is an independent atomic; a write lands on the tick after it
/// happens at the latest.
#[derive(Debug, Default)]
pub struct ControlFlags {
    left_up: AtomicBool,
    left_down: AtomicBool,
    right_up: AtomicBool,
    right_down: AtomicBool,
}

impl ControlFlags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, control: Control, pressed: bool) {
        self.flag(control).store(pressed, Ordering::Relaxed);
    }

    pub fn get(&self, control: Control) -> bool {
        self.flag(control).load(Ordering::Relaxed)
    }

    /// Sample all four flags into a plain value for one tick.
    pub fn sample(&self) -> ControlState {
        ControlState {
            left_up: self.left_up.load(Ordering::Relaxed),
            left_down: self.left_down.load(Ordering::Relaxed),
            right_up: self.right_up.load(Ordering::Relaxed),
            right_down: self.right_down.load(Ordering::Relaxed),
        }
    }

    fn flag(&self, control: Control) -> &AtomicBool {
        match control {
            Control::LeftUp => &self.left_up,
            Control::LeftDown => &self.left_down,
            Control::RightUp => &self.right_up,
            Control::RightDown => &self.right_down,
        }
    }
}
