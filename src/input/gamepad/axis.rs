//! Axis translation for gilrs controllers
//!
//! Maps gilrs axes onto the snapshot's numeric axis indices and rescales
//! gilrs float values back to the raw signed 16-bit range the snapshot
//! stores.

use gilrs::Axis;

/// Map a gilrs axis to the snapshot's axis index (0..=3).
///
/// Returns `None` for axes menu navigation does not use (triggers etc.),
/// which the caller drops without recording.
pub fn map_axis(axis: Axis) -> Option<usize> {
    match axis {
        Axis::LeftStickX => Some(0),
        Axis::LeftStickY => Some(1),
        Axis::RightStickX => Some(2),
        Axis::RightStickY => Some(3),
        _ => None,
    }
}

/// Convert a gilrs axis value (-1.0..=1.0) to the raw signed 16-bit range.
///
/// gilrs reports stick Y with up positive; the snapshot follows the
/// SDL/HID convention where positive vertical means pushed down, so
/// vertical axes (indices 1 and 3) are negated here.
pub fn scale_axis(index: usize, value: f32) -> i16 {
    let scaled = (value * i16::MAX as f32).clamp(i16::MIN as f32, i16::MAX as f32) as i16;
    if index == 1 || index == 3 {
        scaled.saturating_neg()
    } else {
        scaled
    }
}
