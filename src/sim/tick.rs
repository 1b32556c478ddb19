//! Fixed timestep simulation tick
//!
//! The driver collects one frame of input into a [`TickInput`] and calls
//! [`tick`] once per frame at [`crate::consts::TICK_RATE`].

use glam::Vec2;

use super::state::Session;

/// Input commands for a single tick, applied in field order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    /// Reset button pressed
    pub reset: bool,
    /// Next-level button pressed
    pub next_level: bool,
    /// Pointer pressed at this position
    pub drag_start: Option<Vec2>,
    /// Pointer released at this position
    pub drag_release: Option<Vec2>,
}

impl TickInput {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Apply this frame's input, then advance the session by one step
pub fn tick(state: &mut Session, input: &TickInput) {
    if input.reset {
        state.reset_level();
    }
    if input.next_level {
        state.advance_level();
    }
    if let Some(point) = input.drag_start {
        state.on_drag_start(point);
    }
    if let Some(point) = input.drag_release {
        state.on_drag_release(point);
    }

    state.step();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{GameEvent, GamePhase};

    #[test]
    fn test_tick_drag_to_flight() {
        let mut state = Session::default();

        // Tick without input - should stay aiming
        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase(), GamePhase::Aiming);

        let press = TickInput {
            drag_start: Some(Vec2::new(150.0, 500.0)),
            ..Default::default()
        };
        tick(&mut state, &press);
        assert_eq!(state.phase(), GamePhase::Dragging);

        let release = TickInput {
            drag_release: Some(Vec2::new(60.0, 540.0)),
            ..Default::default()
        };
        let before = state.projectile().start;
        tick(&mut state, &release);
        assert_eq!(state.phase(), GamePhase::InFlight);
        // Launch and the first step happen in the same tick
        assert_ne!(state.projectile().pos, before);
    }

    #[test]
    fn test_press_and_release_in_one_tick() {
        let mut state = Session::default();
        let input = TickInput {
            drag_start: Some(Vec2::new(150.0, 500.0)),
            drag_release: Some(Vec2::new(100.0, 500.0)),
            ..Default::default()
        };
        tick(&mut state, &input);
        assert_eq!(state.phase(), GamePhase::InFlight);
        assert!(state.projectile().vel.x > 9.0);
    }

    #[test]
    fn test_next_level_then_reset_stays_on_level() {
        let mut state = Session::default();
        tick(
            &mut state,
            &TickInput {
                next_level: true,
                ..Default::default()
            },
        );
        assert_eq!(state.level_index(), 1);
        assert_eq!(state.level_ticks(), 1);

        tick(
            &mut state,
            &TickInput {
                reset: true,
                ..Default::default()
            },
        );
        assert_eq!(state.level_index(), 1);
        assert_eq!(state.drain_events()[0], GameEvent::LevelLoaded { index: 1 });
    }

    #[test]
    fn test_determinism() {
        // Two sessions fed the same inputs end up identical
        let mut state1 = Session::default();
        let mut state2 = Session::default();

        let mut inputs = vec![
            TickInput {
                drag_start: Some(Vec2::new(150.0, 500.0)),
                ..Default::default()
            },
            TickInput {
                drag_release: Some(Vec2::new(30.0, 560.0)),
                ..Default::default()
            },
        ];
        inputs.extend(std::iter::repeat_n(TickInput::default(), 300));

        for input in &inputs {
            tick(&mut state1, input);
            tick(&mut state2, input);
        }

        assert_eq!(state1, state2);
        assert_eq!(state1.level_ticks(), 302);
        assert!(TickInput::default().is_empty());
    }
}
