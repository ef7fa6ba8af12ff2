//! Input handling: state snapshot and device backends

pub mod gamepad;
pub mod source;
pub mod state;

pub use source::{InputSource, KeyboardSource, MenuKey, NullSource};
pub use state::{PadButtonKind, PadState, Stick};
