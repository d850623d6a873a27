//! Keyboard input handling
//!
//! Maps logical key identifiers to control flags, decoupled from any
//! windowing event type. Bindings follow the classic layout: A/Z drive the
//! left paddle, semicolon/period the right.

use crate::controls::{Control, ControlFlags};

/// Look up the control bound to a logical key, if any.
pub fn control_for_key(key: &str) -> Option<Control> {
    match key {
        "a" | "A" => Some(Control::LeftUp),
        "z" | "Z" => Some(Control::LeftDown),
        ";" => Some(Control::RightUp),
        "." => Some(Control::RightDown),
        _ => None,
    }
}

impl ControlFlags {
    /// Handle key down event
    pub fn key_down(&self, key: &str) {
        if let Some(control) = control_for_key(key) {
            self.set(control, true);
        }
    }

    /// Handle key up event
    pub fn key_up(&self, key: &str) {
        if let Some(control) = control_for_key(key) {
            self.set(control, false);
        }
    }
}
