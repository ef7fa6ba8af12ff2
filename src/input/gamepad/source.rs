//! GilRs-backed input source
//!
//! Opens the system's controllers through gilrs and drains their events
//! into the shared snapshot once per poll cycle. Construction failure is
//! expected on machines without a pad; callers downgrade to
//! [`NullSource`](crate::input::source::NullSource) and menu input simply
//! reads idle.

use anyhow::{anyhow, Result};
use gilrs::{Event, EventType, Gilrs};
use tracing::{debug, info, warn};

use super::{axis, buttons};
use crate::input::source::InputSource;
use crate::input::state::PadState;

/// Physical gamepad backend.
pub struct GamepadSource {
    gilrs: Gilrs,
}

impl GamepadSource {
    /// Initialize gilrs and log what was found.
    ///
    /// Succeeds even with zero pads connected; hot-plugged controllers
    /// start feeding events as soon as gilrs reports them.
    pub fn open() -> Result<Self> {
        let gilrs = Gilrs::new().map_err(|e| anyhow!("failed to initialize gilrs: {}", e))?;

        let connected: Vec<_> = gilrs
            .gamepads()
            .filter(|(_, gp)| gp.is_connected())
            .map(|(id, gp)| (id, gp.name().to_string()))
            .collect();

        if connected.is_empty() {
            warn!("No gamepads detected; menu input stays idle until one connects");
        } else {
            info!("Found {} connected gamepad(s):", connected.len());
            for (id, name) in &connected {
                info!("  - {:?}: \"{}\"", id, name);
            }
        }

        Ok(Self { gilrs })
    }
}

impl InputSource for GamepadSource {
    fn pump(&mut self, state: &mut PadState) {
        while let Some(Event { event, .. }) = self.gilrs.next_event() {
            match event {
                EventType::ButtonPressed(button, _) | EventType::ButtonReleased(button, _) => {
                    let pressed = matches!(event, EventType::ButtonPressed(_, _));
                    if let Some(kind) = buttons::map_button(button) {
                        state.record_button(kind, pressed);
                    }
                }
                EventType::AxisChanged(axis, value, _) => {
                    if let Some(index) = axis::map_axis(axis) {
                        state.record_axis(index, axis::scale_axis(index, value));
                    }
                }
                EventType::Connected => debug!("Gamepad connected"),
                EventType::Disconnected => {
                    // A held button must not stay latched across a disconnect.
                    debug!("Gamepad disconnected, clearing snapshot");
                    state.clear();
                }
                _ => {}
            }
        }
    }
}
