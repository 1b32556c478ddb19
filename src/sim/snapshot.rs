//! Read-only frame description for renderers
//!
//! A renderer copies what it needs out of the session once per frame and
//! draws from the copy, so drawing code never touches simulation types.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::block::BlockKind;
use super::rect::Rect;
use super::state::Session;

pub const PROJECTILE_COLOR: [u8; 3] = [200, 0, 0];
pub const GROUND_COLOR: [u8; 3] = [0, 200, 0];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockView {
    pub id: u32,
    pub rect: Rect,
    pub kind: BlockKind,
    pub color: [u8; 3],
    pub hit: bool,
    pub scored: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSnapshot {
    pub width: i32,
    pub height: i32,
    /// Ground band spans from here to `height`
    pub ground_line: i32,
    pub projectile_pos: Vec2,
    pub projectile_radius: f32,
    pub blocks: Vec<BlockView>,
    pub score: u32,
    /// 0-based
    pub level: usize,
    pub level_complete: bool,
    /// Aiming line endpoints while a drag is in progress
    pub aim_line: Option<(Vec2, Vec2)>,
}

impl RenderSnapshot {
    /// `pointer` is the current pointer position, used for the aiming line
    pub fn capture(session: &Session, pointer: Option<Vec2>) -> Self {
        let field = session.playfield();
        let projectile = session.projectile();

        let blocks = session
            .blocks()
            .iter()
            .map(|b| BlockView {
                id: b.id,
                rect: b.rect,
                kind: b.kind,
                color: b.kind.color(),
                hit: b.hit,
                scored: b.scored,
            })
            .collect();

        let aim_line = pointer
            .and_then(|p| session.aim_preview(p))
            .map(|aim| (aim.start, aim.end));

        Self {
            width: field.width,
            height: field.height,
            ground_line: field.ground_line(),
            projectile_pos: projectile.pos,
            projectile_radius: projectile.radius,
            blocks,
            score: session.score(),
            level: session.level_index(),
            level_complete: session.is_level_complete(),
            aim_line,
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}
