//! Gamepad and keyboard menu navigation for a classic 2D game front-end
//!
//! Three tightly-coupled pieces: a polled input snapshot fed by device
//! backends, a vertical navigable button layout with stick repeat
//! debounce, and a registry that routes each frame's input to the single
//! active layout. Rendering pipelines, asset decoding, audio and
//! windowing stay with the embedding front-end; this crate only asks for
//! a byte buffer to blit into and a millisecond clock.

pub mod clock;
pub mod config;
pub mod input;
pub mod layout;
pub mod menu;
pub mod registry;
pub mod surface;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{AppConfig, GamepadConfig, MenuConfig, NavConfig};
pub use input::{InputSource, KeyboardSource, MenuKey, NullSource, PadButtonKind, PadState, Stick};
pub use layout::{ButtonId, LayoutError, PadButton, VerticalLayout};
pub use menu::{MainMenu, MainMenuAction};
pub use registry::{LayoutId, LayoutRegistry};
pub use surface::{blit_trans, BufferSurface, DrawSurface, Rect, TRANSPARENT};
