//! Falling blocks and targets

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::tuning::Tuning;

/// Block category, fixed when the level is loaded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockKind {
    /// Gets knocked around, worth nothing
    Obstacle,
    /// Scores on first hit; knocking all of them down clears the level
    Target,
}

impl BlockKind {
    /// Fill colour (RGB) for renderers
    pub fn color(&self) -> [u8; 3] {
        match self {
            BlockKind::Obstacle => [139, 69, 19],
            BlockKind::Target => [50, 50, 255],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Position in the level's load order
    pub id: u32,
    pub kind: BlockKind,
    pub rect: Rect,
    pub vel: Vec2,
    /// Immovable blocks ignore gravity and contacts
    pub movable: bool,
    /// Touched by the projectile at least once
    pub hit: bool,
    /// Points already awarded (targets only)
    pub scored: bool,
}

impl Block {
    pub fn new(id: u32, kind: BlockKind, rect: Rect) -> Self {
        Self {
            id,
            kind,
            rect,
            vel: Vec2::ZERO,
            movable: true,
            hit: false,
            scored: false,
        }
    }

    #[inline]
    pub fn is_target(&self) -> bool {
        self.kind == BlockKind::Target
    }

    /// Resting on the ground with negligible vertical speed
    pub fn is_settled(&self, ground: i32, rest_speed: f32) -> bool {
        self.rect.bottom() >= ground && self.vel.y.abs() < rest_speed
    }

    /// Advance one tick against the current positions of `others`.
    ///
    /// Landing on another block snaps onto its top; there is no impulse
    /// exchange and no iteration, so the result depends on list order.
    pub fn update<'a>(
        &mut self,
        others: impl IntoIterator<Item = &'a Block>,
        tuning: &Tuning,
        ground: i32,
    ) {
        if !self.movable {
            return;
        }

        self.vel.y += tuning.gravity;
        // Truncates toward zero, so sub-pixel speeds don't move the block
        self.rect.x += self.vel.x as i32;
        self.rect.y += self.vel.y as i32;

        for other in others {
            if !self.rect.intersects(&other.rect) {
                continue;
            }
            if self.vel.y > 0.0 {
                self.rect.set_bottom(other.rect.top());
                self.vel.y = 0.0;
            }
            if self.vel.x != 0.0 {
                self.vel.x *= tuning.stack_damping;
            }
        }

        if self.rect.bottom() > ground {
            self.rect.set_bottom(ground);
            self.vel.y = 0.0;
        }
    }
}

/// Update every block once, in list order.
///
/// Block `i` is resolved against blocks `0..i` as already moved this tick and
/// blocks `i+1..` as they were at the end of the previous tick.
pub fn update_blocks(blocks: &mut [Block], tuning: &Tuning, ground: i32) {
    for i in 0..blocks.len() {
        let (before, rest) = blocks.split_at_mut(i);
        if let Some((current, after)) = rest.split_first_mut() {
            current.update(before.iter().chain(after.iter()), tuning, ground);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GROUND: i32 = 550;

    #[test]
    fn test_falls_and_lands_on_ground() {
        let tuning = Tuning::default();
        let mut block = Block::new(0, BlockKind::Target, Rect::new(100, 400, 40, 40));
        for _ in 0..200 {
            block.update(std::iter::empty(), &tuning, GROUND);
            assert!(block.rect.bottom() <= GROUND);
        }
        assert_eq!(block.rect.bottom(), GROUND);
        assert!(block.is_settled(GROUND, tuning.rest_speed));
    }

    #[test]
    fn test_sub_pixel_velocity_truncates() {
        let tuning = Tuning::default();
        let mut block = Block::new(0, BlockKind::Obstacle, Rect::new(100, 100, 10, 10));
        block.vel.x = -0.9;
        block.update(std::iter::empty(), &tuning, GROUND);
        // vy = 0.5 and vx = -0.9 both truncate to 0
        assert_eq!(block.rect, Rect::new(100, 100, 10, 10));
        assert_eq!(block.vel.y, 0.5);
    }

    #[test]
    fn test_immovable_block_ignores_gravity() {
        let tuning = Tuning::default();
        let mut block = Block::new(0, BlockKind::Obstacle, Rect::new(100, 100, 10, 10));
        block.movable = false;
        block.vel = Vec2::new(3.0, 3.0);
        block.update(std::iter::empty(), &tuning, GROUND);
        assert_eq!(block.rect, Rect::new(100, 100, 10, 10));
        assert_eq!(block.vel, Vec2::new(3.0, 3.0));
    }

    #[test]
    fn test_falling_block_snaps_onto_settled_block() {
        let tuning = Tuning::default();
        let settled = Block::new(0, BlockKind::Obstacle, Rect::new(100, 530, 60, 20));
        let mut falling = Block::new(1, BlockKind::Target, Rect::new(110, 500, 40, 40));
        falling.vel.y = 3.0;

        falling.update([&settled], &tuning, GROUND);

        assert_eq!(falling.rect.bottom(), settled.rect.top());
        assert_eq!(falling.vel.y, 0.0);
    }

    #[test]
    fn test_contact_halves_sideways_speed() {
        let tuning = Tuning::default();
        let neighbour = Block::new(0, BlockKind::Obstacle, Rect::new(100, 530, 60, 20));
        let mut pushed = Block::new(1, BlockKind::Obstacle, Rect::new(150, 530, 60, 20));
        pushed.vel.x = -4.0;

        pushed.update([&neighbour], &tuning, GROUND);

        assert_eq!(pushed.vel.x, -2.0);
        assert_eq!(pushed.rect.x, 146);
        // Gravity made vy positive, so the side contact also lifts it on top
        assert_eq!(pushed.rect.bottom(), neighbour.rect.top());
        assert_eq!(pushed.vel.y, 0.0);
    }

    #[test]
    fn test_update_order_is_observable() {
        let tuning = Tuning::default();
        let mut lower = Block::new(0, BlockKind::Obstacle, Rect::new(100, 480, 40, 40));
        lower.vel.y = 5.0;
        let mut upper = Block::new(1, BlockKind::Target, Rect::new(100, 430, 40, 40));
        upper.vel.y = 15.0;

        // Lower moves away first, upper never catches it this tick
        let mut forward = vec![lower.clone(), upper.clone()];
        update_blocks(&mut forward, &tuning, GROUND);
        assert_eq!(forward[0].rect.bottom(), 525);
        assert_eq!(forward[1].rect.bottom(), 485);
        assert_eq!(forward[1].vel.y, 15.5);

        // Upper resolves against the lower block's old position
        let mut reversed = vec![upper, lower];
        update_blocks(&mut reversed, &tuning, GROUND);
        assert_eq!(reversed[0].rect.bottom(), 480);
        assert_eq!(reversed[0].vel.y, 0.0);
        assert_eq!(reversed[1].rect.bottom(), 525);
    }

    #[test]
    fn test_colors_match_palette() {
        assert_eq!(BlockKind::Obstacle.color(), [139, 69, 19]);
        assert_eq!(BlockKind::Target.color(), [50, 50, 255]);
    }
}
