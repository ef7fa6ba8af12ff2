//! Layout registry and active-layout routing
//!
//! The registry is the explicit context object for the menu input core:
//! it owns every live layout, the input snapshot, the device backend and
//! the clock, and routes each frame's poll to the single active layout.
//! One registry per frame loop; everything on that loop's thread.

use std::collections::HashMap;

use tracing::debug;

use crate::clock::Clock;
use crate::config::NavConfig;
use crate::input::source::InputSource;
use crate::input::state::PadState;
use crate::layout::VerticalLayout;
use crate::surface::DrawSurface;

/// Identifier for a layout owned by the registry.
///
/// Ids are never reused, so a stale id after `destroy_layout` simply
/// resolves to nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayoutId(u64);

/// Owner and router for all live layouts.
pub struct LayoutRegistry {
    layouts: HashMap<LayoutId, VerticalLayout>,
    active: Option<LayoutId>,
    next_id: u64,
    input: PadState,
    source: Box<dyn InputSource>,
    clock: Box<dyn Clock>,
    config: NavConfig,
}

impl LayoutRegistry {
    pub fn new(source: Box<dyn InputSource>, clock: Box<dyn Clock>, config: NavConfig) -> Self {
        Self {
            layouts: HashMap::new(),
            active: None,
            next_id: 0,
            input: PadState::default(),
            source,
            clock,
            config,
        }
    }

    /// Register a new empty layout.
    pub fn create_layout(&mut self) -> LayoutId {
        let id = LayoutId(self.next_id);
        self.next_id += 1;
        self.layouts.insert(id, VerticalLayout::new());
        debug!("Created layout {:?}", id);
        id
    }

    /// Remove a layout. If it was the active one the active slot becomes
    /// empty; no other layout is promoted.
    pub fn destroy_layout(&mut self, id: LayoutId) {
        if self.active == Some(id) {
            self.active = None;
        }
        if self.layouts.remove(&id).is_some() {
            debug!("Destroyed layout {:?}", id);
        }
    }

    /// Make `id` the single layout receiving input. Unknown ids are
    /// ignored, preserving the invariant that the active id always names
    /// a registered layout.
    pub fn make_active(&mut self, id: LayoutId) {
        if self.layouts.contains_key(&id) {
            self.active = Some(id);
        } else {
            debug!("Ignoring make_active for unknown layout {:?}", id);
        }
    }

    /// Currently active layout, if any.
    pub fn active(&self) -> Option<LayoutId> {
        self.active
    }

    pub fn layout(&self, id: LayoutId) -> Option<&VerticalLayout> {
        self.layouts.get(&id)
    }

    pub fn layout_mut(&mut self, id: LayoutId) -> Option<&mut VerticalLayout> {
        self.layouts.get_mut(&id)
    }

    /// Latest input snapshot, as refreshed by the last [`poll_active`].
    ///
    /// [`poll_active`]: LayoutRegistry::poll_active
    pub fn input(&self) -> &PadState {
        &self.input
    }

    /// Current tick from the registry's clock.
    pub fn now_millis(&self) -> u64 {
        self.clock.now_millis()
    }

    /// Pump pending device events, then poll the active layout.
    ///
    /// The event pump runs even when nothing is active so the snapshot
    /// never goes stale. Returns the active layout's selection, or `None`
    /// when no layout is active or nothing is selected.
    pub fn poll_active(&mut self, surface: &mut dyn DrawSurface) -> Option<i32> {
        self.source.pump(&mut self.input);

        let id = self.active?;
        let now = self.clock.now_millis();
        let layout = self.layouts.get_mut(&id)?;
        layout.poll(&self.input, now, &self.config, surface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::input::source::NullSource;
    use crate::input::state::PadButtonKind;
    use crate::surface::BufferSurface;
    use std::collections::VecDeque;
    use std::rc::Rc;

    /// Replays one whole snapshot per pump, then holds the last state.
    struct ScriptedSource {
        steps: VecDeque<PadState>,
    }

    impl ScriptedSource {
        fn new(steps: Vec<PadState>) -> Self {
            Self {
                steps: steps.into(),
            }
        }
    }

    impl InputSource for ScriptedSource {
        fn pump(&mut self, state: &mut PadState) {
            if let Some(next) = self.steps.pop_front() {
                *state = next;
            }
        }
    }

    fn registry_with(source: Box<dyn InputSource>) -> LayoutRegistry {
        LayoutRegistry::new(source, Box::new(ManualClock::new(0)), NavConfig::default())
    }

    fn add_buttons(registry: &mut LayoutRegistry, id: LayoutId, codes: &[i32]) {
        let layout = registry.layout_mut(id).unwrap();
        for (i, &code) in codes.iter().enumerate() {
            layout.add_button(0, i as i32 * 2, 2, 2, code, vec![1; 4], vec![2; 4]);
        }
    }

    fn confirm_state() -> PadState {
        let mut state = PadState::default();
        state.record_button(PadButtonKind::Confirm, true);
        state
    }

    #[test]
    fn test_poll_without_active_layout_returns_none() {
        let mut registry = registry_with(Box::new(NullSource));
        let mut surface = BufferSurface::new(8, 8);

        let id = registry.create_layout();
        add_buttons(&mut registry, id, &[10]);

        // Created but never made active.
        assert_eq!(registry.poll_active(&mut surface), None);
    }

    #[test]
    fn test_poll_delegates_to_active_layout() {
        let source = ScriptedSource::new(vec![confirm_state()]);
        let mut registry = registry_with(Box::new(source));
        let mut surface = BufferSurface::new(8, 8);

        let id = registry.create_layout();
        add_buttons(&mut registry, id, &[10, 20]);
        registry.make_active(id);

        assert_eq!(registry.poll_active(&mut surface), Some(10));
    }

    #[test]
    fn test_events_are_pumped_before_polling() {
        // The confirm press arrives during the same poll that reports it.
        let source = ScriptedSource::new(vec![confirm_state()]);
        let mut registry = registry_with(Box::new(source));
        let mut surface = BufferSurface::new(8, 8);

        let id = registry.create_layout();
        add_buttons(&mut registry, id, &[42]);
        registry.make_active(id);

        assert!(!registry.input().confirm);
        assert_eq!(registry.poll_active(&mut surface), Some(42));
        assert!(registry.input().confirm);
    }

    #[test]
    fn test_pump_runs_even_without_active_layout() {
        let source = ScriptedSource::new(vec![confirm_state()]);
        let mut registry = registry_with(Box::new(source));
        let mut surface = BufferSurface::new(8, 8);

        assert_eq!(registry.poll_active(&mut surface), None);
        assert!(registry.input().confirm);
    }

    #[test]
    fn test_destroying_active_layout_clears_active() {
        let mut registry = registry_with(Box::new(NullSource));
        let mut surface = BufferSurface::new(8, 8);

        let id = registry.create_layout();
        add_buttons(&mut registry, id, &[10]);
        registry.make_active(id);
        assert_eq!(registry.active(), Some(id));

        registry.destroy_layout(id);
        assert_eq!(registry.active(), None);
        assert_eq!(registry.poll_active(&mut surface), None);
    }

    #[test]
    fn test_destroying_non_active_layout_leaves_active_alone() {
        let source = ScriptedSource::new(vec![PadState::default(), confirm_state()]);
        let mut registry = registry_with(Box::new(source));
        let mut surface = BufferSurface::new(8, 8);

        let active = registry.create_layout();
        add_buttons(&mut registry, active, &[10, 20]);
        let doomed = registry.create_layout();
        add_buttons(&mut registry, doomed, &[99]);

        registry.make_active(active);
        registry.layout_mut(active).unwrap().set_current(1).unwrap();
        registry.poll_active(&mut surface);

        registry.destroy_layout(doomed);
        assert_eq!(registry.active(), Some(active));
        assert_eq!(registry.layout(active).unwrap().current(), 1);
        assert_eq!(registry.poll_active(&mut surface), Some(20));
    }

    #[test]
    fn test_make_active_ignores_unknown_id() {
        let mut registry = registry_with(Box::new(NullSource));

        let id = registry.create_layout();
        registry.make_active(id);
        registry.destroy_layout(id);

        // Stale id cannot be re-activated.
        registry.make_active(id);
        assert_eq!(registry.active(), None);
    }

    #[test]
    fn test_registry_clock_drives_repeat_delay() {
        let mut push_down = PadState::default();
        push_down.record_axis(1, 4000);
        let source = ScriptedSource::new(vec![push_down, push_down, push_down]);

        let clock = Rc::new(ManualClock::new(0));
        let mut registry = LayoutRegistry::new(
            Box::new(source),
            Box::new(clock.clone()),
            NavConfig::default(),
        );
        let mut surface = BufferSurface::new(8, 8);

        let id = registry.create_layout();
        add_buttons(&mut registry, id, &[10, 20, 30]);
        registry.make_active(id);

        registry.poll_active(&mut surface);
        assert_eq!(registry.layout(id).unwrap().current(), 1);

        // Inside the repeat window: held stick does not step again.
        clock.advance(100);
        registry.poll_active(&mut surface);
        assert_eq!(registry.layout(id).unwrap().current(), 1);

        clock.advance(250);
        registry.poll_active(&mut surface);
        assert_eq!(registry.layout(id).unwrap().current(), 2);
    }
}
