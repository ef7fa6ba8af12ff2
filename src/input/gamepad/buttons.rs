//! Button mapping for gilrs controllers
//!
//! Maps gilrs physical button positions to the three buttons menu
//! navigation cares about. South confirms and East cancels (Xbox layout,
//! which is what SDL-style front-ends assume); every other button is not
//! a menu input and is dropped before it reaches the snapshot.

use gilrs::Button;

use crate::input::state::PadButtonKind;

/// Map a gilrs button to a snapshot button.
///
/// Returns `None` for buttons the menu does not use; the caller treats
/// those events as a no-op.
pub fn map_button(button: Button) -> Option<PadButtonKind> {
    match button {
        Button::South => Some(PadButtonKind::Confirm),
        Button::East => Some(PadButtonKind::Cancel),
        Button::Start => Some(PadButtonKind::Start),
        _ => None,
    }
}
