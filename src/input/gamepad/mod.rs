//! Gamepad input support using GilRs
//!
//! Opens the native controller device and exposes it as an
//! [`InputSource`](crate::input::source::InputSource). Initialization
//! failure is non-fatal: the front-end keeps running and gamepad features
//! simply become inert.

pub mod axis;
pub mod buttons;
pub mod diagnostics;
pub mod source;

use tracing::{info, warn};

use crate::config::GamepadConfig;
use crate::input::source::{InputSource, NullSource};

pub use diagnostics::print_gamepad_diagnostics;
pub use source::GamepadSource;

/// Open the gamepad backend, degrading to an inert source on failure.
///
/// # Arguments
/// * `config` - Gamepad configuration
///
/// # Returns
/// A pumpable input source; never fails, but the returned source is a
/// no-op when the backend is disabled or unavailable.
pub fn init(config: &GamepadConfig) -> Box<dyn InputSource> {
    if !config.enabled {
        info!("Gamepad input disabled by configuration");
        return Box::new(NullSource);
    }

    info!("Initializing gamepad input...");
    match GamepadSource::open() {
        Ok(source) => Box::new(source),
        Err(e) => {
            warn!("No controller available: {}. Continuing without gamepad.", e);
            Box::new(NullSource)
        }
    }
}
