//! Input source abstraction
//!
//! Menu navigation only ever reads a [`PadState`] snapshot; it never talks
//! to a device directly. An [`InputSource`] owns the native event pump for
//! one device class and applies pending events to the snapshot when asked,
//! which keeps the widget logic agnostic to whether a physical gamepad or
//! the keyboard is driving it.

use tracing::trace;

use super::state::{PadButtonKind, PadState};

/// A device backend that can refresh the input snapshot.
///
/// `pump` drains all pending native events and dispatches them to the
/// snapshot's mutators before returning. It is called at the start of
/// every poll cycle, on the thread that runs the frame loop.
pub trait InputSource {
    fn pump(&mut self, state: &mut PadState);
}

/// Inert source used when no input device could be opened.
///
/// Leaves the snapshot untouched, so every read reports all-idle.
#[derive(Debug, Default)]
pub struct NullSource;

impl InputSource for NullSource {
    fn pump(&mut self, _state: &mut PadState) {}
}

/// Keys understood by [`KeyboardSource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKey {
    Up,
    Down,
    Confirm,
    Cancel,
    Start,
}

/// Synthetic stick deflection for arrow keys, well past any deadzone.
const KEY_DEFLECTION: i16 = i16::MAX;

/// Keyboard fallback backend.
///
/// The host windowing layer feeds discrete key events through
/// [`key_event`](KeyboardSource::key_event); arrow keys synthesize a fully
/// deflected left stick so the same deadzone and repeat-cooldown path
/// drives navigation for both device classes.
#[derive(Debug, Default)]
pub struct KeyboardSource {
    queue: Vec<(MenuKey, bool)>,
}

impl KeyboardSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press/release delivered by the windowing layer.
    pub fn key_event(&mut self, key: MenuKey, pressed: bool) {
        self.queue.push((key, pressed));
    }
}

impl InputSource for KeyboardSource {
    fn pump(&mut self, state: &mut PadState) {
        for (key, pressed) in self.queue.drain(..) {
            trace!("Keyboard menu key {:?} pressed={}", key, pressed);
            let deflection = |value: i16| if pressed { value } else { 0 };
            match key {
                MenuKey::Up => state.record_axis(1, deflection(-KEY_DEFLECTION)),
                MenuKey::Down => state.record_axis(1, deflection(KEY_DEFLECTION)),
                MenuKey::Confirm => state.record_button(PadButtonKind::Confirm, pressed),
                MenuKey::Cancel => state.record_button(PadButtonKind::Cancel, pressed),
                MenuKey::Start => state.record_button(PadButtonKind::Start, pressed),
            }
        }
    }
}
