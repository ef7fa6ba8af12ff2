//! Vertical button layout: the gamepad-navigable menu widget
//!
//! A [`VerticalLayout`] owns an ordered stack of selectable button
//! regions, tracks which one is current, and couples left-stick
//! deflection to discrete selection steps with a repeat cooldown so a
//! held stick does not spam-scroll. Each poll redraws every button in its
//! normal or hovered state and reports the current button's select code
//! while confirm is held.

use thiserror::Error;
use tracing::debug;

use crate::config::NavConfig;
use crate::input::state::PadState;
use crate::surface::{blit_trans, DrawSurface, Rect};

/// Errors from layout operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    /// Requested button index does not exist.
    #[error("button index {index} out of range for layout of {len} buttons")]
    InvalidIndex { index: usize, len: usize },
}

/// Handle to a button within its layout.
///
/// Handles are positional and stay valid for the layout's lifetime
/// (buttons are only ever appended).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonId(usize);

impl ButtonId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// One selectable region: position, size, select code and the two visual
/// payloads. A select code of -1 means unset.
#[derive(Debug, Clone)]
pub struct PadButton {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub select_code: i32,
    pub normal_image: Vec<u8>,
    pub hover_image: Vec<u8>,
}

/// Ordered stack of buttons with a single current selection.
///
/// Navigation order is insertion order; stepping past either end wraps
/// around. The stick repeat timestamp is per-layout state, so layouts can
/// be driven and tested in isolation.
#[derive(Debug, Default)]
pub struct VerticalLayout {
    buttons: Vec<PadButton>,
    current: usize,
    stick_active_at: Option<u64>,
}

impl VerticalLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate space for `n` buttons.
    pub fn reserve(&mut self, n: usize) {
        self.buttons.reserve(n);
    }

    /// Append a button to the navigation order.
    ///
    /// Image buffers must be `width * height` bytes. Regions are not
    /// checked for overlap; placement is the caller's responsibility.
    #[allow(clippy::too_many_arguments)]
    pub fn add_button(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        select_code: i32,
        normal_image: Vec<u8>,
        hover_image: Vec<u8>,
    ) -> ButtonId {
        self.buttons.push(PadButton {
            x,
            y,
            width,
            height,
            select_code,
            normal_image,
            hover_image,
        });
        ButtonId(self.buttons.len() - 1)
    }

    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    /// Index of the current button.
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn button(&self, id: ButtonId) -> Option<&PadButton> {
        self.buttons.get(id.0)
    }

    /// Button by position in navigation order.
    pub fn button_at(&self, index: usize) -> Option<&PadButton> {
        self.buttons.get(index)
    }

    /// Directly set the current button.
    pub fn set_current(&mut self, index: usize) -> Result<(), LayoutError> {
        if index >= self.buttons.len() {
            return Err(LayoutError::InvalidIndex {
                index,
                len: self.buttons.len(),
            });
        }
        self.current = index;
        Ok(())
    }

    /// Per-frame update: navigate, redraw, report selection.
    ///
    /// Returns the current button's select code while confirm is held,
    /// `None` otherwise. Polling an empty layout is a no-op that returns
    /// `None`.
    pub fn poll(
        &mut self,
        input: &PadState,
        now_millis: u64,
        config: &NavConfig,
        surface: &mut dyn DrawSurface,
    ) -> Option<i32> {
        if self.buttons.is_empty() {
            return None;
        }

        self.navigate(input, now_millis, config);
        self.draw(surface);

        if input.confirm {
            Some(self.buttons[self.current].select_code)
        } else {
            None
        }
    }

    /// Stick-driven selection stepping with repeat cooldown.
    ///
    /// A centered stick resets the cooldown, so releasing and re-pushing
    /// navigates immediately without waiting out the delay.
    fn navigate(&mut self, input: &PadState, now_millis: u64, config: &NavConfig) {
        let vertical = input.left.vertical;
        if vertical > config.deadzone {
            if self.repeat_allowed(now_millis, config) {
                self.stick_active_at = Some(now_millis);
                self.current += 1;
                if self.current >= self.buttons.len() {
                    self.current = 0;
                }
                debug!("Stick down: current button -> {}", self.current);
            }
        } else if vertical < -config.deadzone {
            if self.repeat_allowed(now_millis, config) {
                self.stick_active_at = Some(now_millis);
                self.current = if self.current == 0 {
                    self.buttons.len() - 1
                } else {
                    self.current - 1
                };
                debug!("Stick up: current button -> {}", self.current);
            }
        } else {
            self.stick_active_at = None;
        }
    }

    fn repeat_allowed(&self, now_millis: u64, config: &NavConfig) -> bool {
        match self.stick_active_at {
            None => true,
            Some(since) => now_millis.saturating_sub(since) >= config.repeat_delay_ms,
        }
    }

    /// Blit every button, hovered art for the current one, and mark each
    /// region dirty. Buttons that do not fit the surface are skipped.
    fn draw(&self, surface: &mut dyn DrawSurface) {
        let pitch = surface.width();
        let rows = surface.height();
        for (index, button) in self.buttons.iter().enumerate() {
            if button.x < 0 || button.y < 0 || button.width <= 0 || button.height <= 0 {
                continue;
            }
            let (x, y) = (button.x as usize, button.y as usize);
            if x + button.width as usize > pitch || y >= rows {
                continue;
            }

            let image = if index == self.current {
                &button.hover_image
            } else {
                &button.normal_image
            };
            let offset = y * pitch + x;
            blit_trans(
                image,
                button.width as usize,
                button.height as usize,
                button.width as usize,
                &mut surface.buffer_mut()[offset..],
                pitch,
            );
            surface.mark_dirty(Rect::from_xywh(button.x, button.y, button.width, button.height));
        }
    }
}
