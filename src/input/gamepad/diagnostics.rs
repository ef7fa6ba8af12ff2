//! Gamepad diagnostics tool for troubleshooting detection issues

use gilrs::{Axis, Event, EventType, Gilrs};
use std::thread;
use std::time::Duration;
use tracing::info;

/// Print detailed information about all detected gamepads
///
/// Useful when a controller navigates nothing: it shows whether the
/// device is seen at all and what its sticks currently report.
/// Bluetooth controllers may take a moment to announce themselves, so a
/// short event-pumping scan runs first.
pub fn print_gamepad_diagnostics() {
    info!("=== Gamepad Diagnostics ===");
    info!("Platform: {}", std::env::consts::OS);

    let mut gilrs = match Gilrs::new() {
        Ok(g) => g,
        Err(e) => {
            info!("Failed to initialize gilrs: {:?}", e);
            info!("This may indicate missing system libraries or permissions issues.");
            return;
        }
    };

    info!("Waiting for gamepads to connect (3 seconds)...");
    let start = std::time::Instant::now();
    while start.elapsed() < Duration::from_secs(3) {
        // Pump events to trigger connection detection.
        while let Some(Event { event, .. }) = gilrs.next_event() {
            if event == EventType::Connected {
                info!("   Gamepad connection detected...");
            }
        }
        thread::sleep(Duration::from_millis(100));
    }

    let gamepads: Vec<_> = gilrs.gamepads().collect();
    if gamepads.is_empty() {
        info!("No gamepads detected. Check that the controller is connected");
        info!("(USB or Bluetooth paired) and that drivers are installed.");
        return;
    }

    info!("Found {} gamepad(s):", gamepads.len());
    for (id, gamepad) in gamepads {
        info!("  Gamepad ID: {:?}", id);
        info!("    Name: \"{}\"", gamepad.name());
        info!("    Connected: {}", gamepad.is_connected());
        info!("    UUID: {:?}", gamepad.uuid());

        info!("    Stick values (move sticks to see them change):");
        for axis in &[
            Axis::LeftStickX,
            Axis::LeftStickY,
            Axis::RightStickX,
            Axis::RightStickY,
        ] {
            let value = gamepad.value(*axis);
            info!("      {:?}: {:.3}", axis, value);
        }
    }

    info!("=== End Diagnostics ===");
}
