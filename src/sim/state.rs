//! Session state and the aim/launch/reset flow
//!
//! A [`Session`] owns every object of the running level. Drivers inject
//! pointer input through `on_drag_start`/`on_drag_release`, advance time with
//! [`Session::step`] (or [`super::tick`]) and read back positions and score.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::block::{Block, BlockKind, update_blocks};
use super::body::Projectile;
use super::collision::resolve_hits;
use super::level::LevelSet;
use crate::cartesian_to_polar;
use crate::tuning::{Playfield, Tuning};

/// Current phase of the throw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the player to grab the sling
    Aiming,
    /// Pointer held down, waiting for release
    Dragging,
    /// The level's throw has been used
    InFlight,
}

/// Something that happened during a tick, for sound/effects/HUD hooks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    LevelLoaded { index: usize },
    Launched { power: f32, angle: f32 },
    BlockHit { id: u32, kind: BlockKind },
    TargetScored { id: u32, points: u32 },
    /// Every target came to rest on the ground
    LevelCompleted { index: usize, score: u32 },
}

/// The throw a release at `end` would produce
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aim {
    pub start: Vec2,
    pub end: Vec2,
    pub power: f32,
    pub angle: f32,
}

impl Aim {
    /// Pulling back from `start` to `end` throws toward `start - end`
    pub fn from_drag(start: Vec2, end: Vec2, power_scale: f32) -> Self {
        let (length, angle) = cartesian_to_polar(start - end);
        Self {
            start,
            end,
            power: length * power_scale,
            angle,
        }
    }
}

/// One level being played
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    tuning: Tuning,
    field: Playfield,
    levels: LevelSet,
    /// Index into `levels`, always in range
    level_index: usize,
    score: u32,
    phase: GamePhase,
    projectile: Projectile,
    /// Obstacles then targets, in level order
    blocks: Vec<Block>,
    drag_start: Option<Vec2>,
    throw_used: bool,
    /// Ticks since the level was (re)loaded
    level_ticks: u64,
    /// Completion seen at the end of the previous tick
    was_complete: bool,
    #[serde(skip)]
    events: Vec<GameEvent>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Tuning::default(), Playfield::default(), LevelSet::builtin())
    }
}

impl Session {
    /// Start on the first level
    pub fn new(tuning: Tuning, field: Playfield, levels: LevelSet) -> Self {
        let projectile = Projectile::new(field.start, field.projectile_radius);
        let mut session = Self {
            tuning,
            field,
            levels,
            level_index: 0,
            score: 0,
            phase: GamePhase::Aiming,
            projectile,
            blocks: Vec::new(),
            drag_start: None,
            throw_used: false,
            level_ticks: 0,
            was_complete: false,
            events: Vec::new(),
        };
        session.load_level();
        session
    }

    /// Rebuild the current level from its definition
    fn load_level(&mut self) {
        self.blocks = self.levels.get(self.level_index).build_blocks();
        self.projectile.reset();
        self.score = 0;
        self.phase = GamePhase::Aiming;
        self.drag_start = None;
        self.throw_used = false;
        self.level_ticks = 0;
        self.was_complete = false;
        // Anything still queued belongs to the discarded level
        self.events.clear();
        self.events.push(GameEvent::LevelLoaded {
            index: self.level_index,
        });
        log::info!(
            "Level {} loaded ({} blocks)",
            self.level_index + 1,
            self.blocks.len()
        );
    }

    /// Restart the current level. Calling it twice is the same as once.
    pub fn reset_level(&mut self) {
        self.load_level();
    }

    /// Move to the next level, wrapping after the last one
    pub fn advance_level(&mut self) {
        self.level_index = self.levels.next_index(self.level_index);
        self.load_level();
    }

    /// Pointer pressed. Ignored once the projectile is launched.
    pub fn on_drag_start(&mut self, point: Vec2) {
        if self.projectile.launched {
            return;
        }
        self.drag_start = Some(point);
        self.phase = GamePhase::Dragging;
    }

    /// Pointer released. Launches if a drag is in progress and the throw is unused.
    pub fn on_drag_release(&mut self, point: Vec2) {
        let Some(start) = self.drag_start.take() else {
            return;
        };
        if self.throw_used {
            return;
        }

        let aim = Aim::from_drag(start, point, self.tuning.power_scale);
        self.projectile.launch(aim.power, aim.angle);
        self.throw_used = true;
        self.phase = GamePhase::InFlight;
        self.events.push(GameEvent::Launched {
            power: aim.power,
            angle: aim.angle,
        });
        log::debug!("Launched: power={:.2} angle={:.3}", aim.power, aim.angle);
    }

    /// Aiming line from the drag start to `current`, while dragging
    pub fn aim_preview(&self, current: Vec2) -> Option<Aim> {
        self.drag_start
            .map(|start| Aim::from_drag(start, current, self.tuning.power_scale))
    }

    /// Advance the simulation one tick: projectile, blocks, then contacts.
    pub fn step(&mut self) {
        self.level_ticks += 1;
        let ground = self.field.ground_line();

        self.projectile.step(&self.tuning, ground as f32);
        update_blocks(&mut self.blocks, &self.tuning, ground);

        let points = resolve_hits(
            &self.projectile,
            &mut self.blocks,
            &self.tuning,
            &mut self.events,
        );
        if points > 0 {
            self.score += points;
            log::debug!("Scored {} (total {})", points, self.score);
        }

        let complete = self.is_level_complete();
        if complete && !self.was_complete {
            log::info!(
                "Level {} complete with score {}",
                self.level_index + 1,
                self.score
            );
            self.events.push(GameEvent::LevelCompleted {
                index: self.level_index,
                score: self.score,
            });
        }
        self.was_complete = complete;
    }

    /// Every target is resting on the ground. Re-evaluated on each call.
    pub fn is_level_complete(&self) -> bool {
        let ground = self.field.ground_line();
        self.blocks
            .iter()
            .filter(|b| b.is_target())
            .all(|b| b.is_settled(ground, self.tuning.rest_speed))
    }

    /// Take the events recorded since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level_index(&self) -> usize {
        self.level_index
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn projectile(&self) -> &Projectile {
        &self.projectile
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn targets(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter().filter(|b| b.is_target())
    }

    pub fn drag_start(&self) -> Option<Vec2> {
        self.drag_start
    }

    pub fn throw_used(&self) -> bool {
        self.throw_used
    }

    pub fn level_ticks(&self) -> u64 {
        self.level_ticks
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn playfield(&self) -> &Playfield {
        &self.field
    }

    pub fn ground_line(&self) -> i32 {
        self.field.ground_line()
    }
}
