//! Normalized gamepad state snapshot
//!
//! [`PadState`] holds the latest digital button flags and two analog stick
//! readings, written by discrete events from an input source and read by
//! polling. Writes and reads both happen on the single frame-loop thread,
//! so the snapshot is plain data with no interior synchronization; feeding
//! it from another thread is a data race by contract.

use tracing::trace;

/// Raw axis pair for one analog stick.
///
/// Values use the native signed 16-bit range with center near 0. Positive
/// vertical means the stick is pushed down (SDL/HID convention).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stick {
    pub horizontal: i16,
    pub vertical: i16,
}

/// Digital buttons the snapshot tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PadButtonKind {
    Confirm,
    Cancel,
    Start,
}

/// Latest known input state.
#[derive(Debug, Clone, Copy, Default)]
pub struct PadState {
    pub confirm: bool,
    pub cancel: bool,
    pub start: bool,
    pub left: Stick,
    pub right: Stick,
}

impl PadState {
    /// Apply a button press/release event.
    pub fn record_button(&mut self, button: PadButtonKind, pressed: bool) {
        match button {
            PadButtonKind::Confirm => self.confirm = pressed,
            PadButtonKind::Cancel => self.cancel = pressed,
            PadButtonKind::Start => self.start = pressed,
        }
    }

    /// Apply an axis motion event.
    ///
    /// Axis 0/1 are the left stick (horizontal/vertical), 2/3 the right
    /// stick. Indices outside 0..=3 are silently ignored.
    pub fn record_axis(&mut self, index: usize, value: i16) {
        match index {
            0 => self.left.horizontal = value,
            1 => self.left.vertical = value,
            2 => self.right.horizontal = value,
            3 => self.right.vertical = value,
            _ => trace!("Ignoring event for unknown axis {}", index),
        }
    }

    /// True while any of confirm/cancel/start is held.
    pub fn any_button_pressed(&self) -> bool {
        self.confirm || self.cancel || self.start
    }

    /// Reset every flag and axis to idle, e.g. after a device disconnect.
    pub fn clear(&mut self) {
        *self = PadState::default();
    }
}
