//! Main menu screen host
//!
//! Consumer of the navigation core: builds the vertical stack of main
//! menu buttons, routes select codes to logical outcomes, and runs the
//! frame loop until one is produced. Window creation, art loading, text
//! and sound stay with the surrounding front-end; this module only needs
//! a drawing surface and finished button bitmaps.

use tracing::{debug, info};

use crate::config::MenuConfig;
use crate::registry::{LayoutId, LayoutRegistry};
use crate::surface::DrawSurface;

/// Logical outcome of a main menu interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainMenuAction {
    Intro,
    NewGame,
    LoadGame,
    Options,
    Credits,
    Exit,
    /// Nothing was chosen before the screensaver delay ran out.
    Timeout,
}

/// Menu entries in stack order. The select codes double as the screen's
/// keyboard shortcuts, so a key press and a gamepad confirm resolve
/// through the same mapping.
const MENU_ITEMS: [(MainMenuAction, i32); 6] = [
    (MainMenuAction::Intro, b'i' as i32),
    (MainMenuAction::NewGame, b'n' as i32),
    (MainMenuAction::LoadGame, b'l' as i32),
    (MainMenuAction::Options, b'o' as i32),
    (MainMenuAction::Credits, b'c' as i32),
    (MainMenuAction::Exit, b'e' as i32),
];

// Button stack geometry, in pixels at the 2x art scale.
const MARGIN_X: i32 = 30 * 2;
const MARGIN_Y: i32 = 19 * 2 + 10;
const SPACE_Y: i32 = 42 * 2;

/// Built main menu screen: one layout registered and active.
pub struct MainMenu {
    layout: LayoutId,
}

impl MainMenu {
    /// Build the button stack and make its layout the active one.
    ///
    /// `normal`/`hover` are the shared button bitmaps (`width * height`
    /// bytes each); every button keeps its own copy since regions own
    /// their visuals. The first button starts current.
    pub fn build(
        registry: &mut LayoutRegistry,
        config: &MenuConfig,
        width: i32,
        height: i32,
        normal: &[u8],
        hover: &[u8],
    ) -> Self {
        let id = registry.create_layout();
        if let Some(layout) = registry.layout_mut(id) {
            layout.reserve(MENU_ITEMS.len());
            for (index, (_, code)) in MENU_ITEMS.iter().enumerate() {
                let row = index as i32;
                layout.add_button(
                    config.offset_x + MARGIN_X,
                    config.offset_y + MARGIN_Y + row * SPACE_Y - row,
                    width,
                    height,
                    *code,
                    normal.to_vec(),
                    hover.to_vec(),
                );
            }
        }
        registry.make_active(id);
        Self { layout: id }
    }

    /// Layout handle, for tear-down through the registry.
    pub fn layout(&self) -> LayoutId {
        self.layout
    }

    fn action_for(code: i32) -> Option<MainMenuAction> {
        MENU_ITEMS
            .iter()
            .find(|(_, c)| *c == code)
            .map(|(action, _)| *action)
    }

    /// Run the menu loop until an outcome is produced.
    ///
    /// Cancel resolves to [`MainMenuAction::Exit`] and sitting idle past
    /// the configured screensaver delay to [`MainMenuAction::Timeout`].
    /// `frame` runs once per iteration after polling; presentation and
    /// frame pacing live there, outside this module.
    pub fn run(
        &self,
        registry: &mut LayoutRegistry,
        config: &MenuConfig,
        surface: &mut dyn DrawSurface,
        mut frame: impl FnMut(&mut dyn DrawSurface),
    ) -> MainMenuAction {
        let started = registry.now_millis();

        loop {
            let code = registry.poll_active(surface);

            if let Some(code) = code {
                match Self::action_for(code) {
                    Some(action) => {
                        info!("Main menu selection: {:?}", action);
                        return action;
                    }
                    None => debug!("Unmapped select code {}", code),
                }
            }

            if registry.input().cancel {
                info!("Main menu cancelled");
                return MainMenuAction::Exit;
            }

            if registry.now_millis().saturating_sub(started) >= config.screensaver_delay_ms {
                info!("Main menu idle timeout");
                return MainMenuAction::Timeout;
            }

            frame(surface);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::config::NavConfig;
    use crate::input::source::{InputSource, NullSource};
    use crate::input::state::{PadButtonKind, PadState};
    use crate::registry::LayoutRegistry;
    use crate::surface::BufferSurface;
    use std::collections::VecDeque;
    use std::rc::Rc;

    struct ScriptedSource {
        steps: VecDeque<PadState>,
    }

    impl InputSource for ScriptedSource {
        fn pump(&mut self, state: &mut PadState) {
            if let Some(next) = self.steps.pop_front() {
                *state = next;
            }
        }
    }

    fn scripted(steps: Vec<PadState>) -> Box<dyn InputSource> {
        Box::new(ScriptedSource {
            steps: steps.into(),
        })
    }

    fn build_menu(registry: &mut LayoutRegistry) -> MainMenu {
        let normal = vec![1u8; 4];
        let hover = vec![2u8; 4];
        MainMenu::build(registry, &MenuConfig::default(), 2, 2, &normal, &hover)
    }

    fn down() -> PadState {
        let mut state = PadState::default();
        state.record_axis(1, 4000);
        state
    }

    fn confirm() -> PadState {
        let mut state = PadState::default();
        state.record_button(PadButtonKind::Confirm, true);
        state
    }

    #[test]
    fn test_build_stacks_six_buttons_and_activates() {
        let clock = Rc::new(ManualClock::new(0));
        let mut registry =
            LayoutRegistry::new(Box::new(NullSource), Box::new(clock), NavConfig::default());

        let menu = build_menu(&mut registry);
        let layout = registry.layout(menu.layout()).unwrap();

        assert_eq!(layout.len(), 6);
        assert_eq!(layout.current(), 0);
        assert_eq!(registry.active(), Some(menu.layout()));
    }

    #[test]
    fn test_build_applies_original_geometry() {
        let clock = Rc::new(ManualClock::new(0));
        let mut registry =
            LayoutRegistry::new(Box::new(NullSource), Box::new(clock), NavConfig::default());

        let menu = build_menu(&mut registry);
        let layout = registry.layout(menu.layout()).unwrap();

        let first = layout.button_at(0).unwrap();
        assert_eq!((first.x, first.y), (60, 48));

        // Row pitch is SPACE_Y minus the row index.
        let second = layout.button_at(1).unwrap();
        assert_eq!((second.x, second.y), (60, 48 + 84 - 1));
    }

    #[test]
    fn test_navigate_then_confirm_selects_new_game() {
        // Down once, recenter, then confirm: second entry is New Game.
        let clock = Rc::new(ManualClock::new(0));
        let mut registry = LayoutRegistry::new(
            scripted(vec![down(), PadState::default(), confirm()]),
            Box::new(clock.clone()),
            NavConfig::default(),
        );
        let menu = build_menu(&mut registry);
        let mut surface = BufferSurface::new(640, 480);

        let action = menu.run(&mut registry, &MenuConfig::default(), &mut surface, |_: &mut dyn DrawSurface| {
            clock.advance(16);
        });
        assert_eq!(action, MainMenuAction::NewGame);
    }

    #[test]
    fn test_cancel_exits() {
        let clock = Rc::new(ManualClock::new(0));
        let mut cancel = PadState::default();
        cancel.record_button(PadButtonKind::Cancel, true);

        let mut registry = LayoutRegistry::new(
            scripted(vec![cancel]),
            Box::new(clock.clone()),
            NavConfig::default(),
        );
        let menu = build_menu(&mut registry);
        let mut surface = BufferSurface::new(640, 480);

        let action = menu.run(&mut registry, &MenuConfig::default(), &mut surface, |_: &mut dyn DrawSurface| {
            clock.advance(16);
        });
        assert_eq!(action, MainMenuAction::Exit);
    }

    #[test]
    fn test_idle_menu_times_out() {
        let clock = Rc::new(ManualClock::new(0));
        let mut registry = LayoutRegistry::new(
            Box::new(NullSource),
            Box::new(clock.clone()),
            NavConfig::default(),
        );
        let menu = build_menu(&mut registry);
        let mut surface = BufferSurface::new(640, 480);

        let action = menu.run(&mut registry, &MenuConfig::default(), &mut surface, |_: &mut dyn DrawSurface| {
            clock.advance(60_000);
        });
        assert_eq!(action, MainMenuAction::Timeout);
    }

    #[test]
    fn test_every_menu_entry_resolves_by_shortcut_code() {
        assert_eq!(MainMenu::action_for(b'i' as i32), Some(MainMenuAction::Intro));
        assert_eq!(MainMenu::action_for(b'n' as i32), Some(MainMenuAction::NewGame));
        assert_eq!(MainMenu::action_for(b'l' as i32), Some(MainMenuAction::LoadGame));
        assert_eq!(MainMenu::action_for(b'o' as i32), Some(MainMenuAction::Options));
        assert_eq!(MainMenu::action_for(b'c' as i32), Some(MainMenuAction::Credits));
        assert_eq!(MainMenu::action_for(b'e' as i32), Some(MainMenuAction::Exit));
        assert_eq!(MainMenu::action_for(-1), None);
    }
}
