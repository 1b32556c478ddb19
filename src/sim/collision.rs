//! Projectile versus block contact and scoring
//!
//! Contact is tested with the projectile's bounding square, not the circle.
//! A block reacts to the projectile only once: the first overlapping tick
//! marks it hit, hands it a share of the projectile's velocity and, for
//! targets, awards points. Later overlaps are ignored.

use super::block::Block;
use super::body::Projectile;
use super::state::GameEvent;
use crate::tuning::Tuning;

/// Run one contact pass over `blocks` in order.
///
/// Returns the points earned this pass; hit/score events are pushed to `events`.
pub fn resolve_hits(
    projectile: &Projectile,
    blocks: &mut [Block],
    tuning: &Tuning,
    events: &mut Vec<GameEvent>,
) -> u32 {
    let bounds = projectile.bounds();
    let impulse = projectile.vel * tuning.impulse_fraction;
    let mut points = 0;

    for block in blocks.iter_mut() {
        if block.hit || !bounds.intersects_rect(&block.rect) {
            continue;
        }

        block.hit = true;
        block.vel += impulse;
        log::debug!("Block {} ({:?}) hit, impulse {:?}", block.id, block.kind, impulse);
        events.push(GameEvent::BlockHit {
            id: block.id,
            kind: block.kind,
        });

        if block.is_target() && !block.scored {
            block.scored = true;
            points += tuning.score_increment;
            events.push(GameEvent::TargetScored {
                id: block.id,
                points: tuning.score_increment,
            });
        }
    }

    points
}
