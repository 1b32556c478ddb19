//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only, physics constants are per tick
//! - Stable iteration order (blocks in level load order)
//! - No rendering or platform dependencies

pub mod block;
pub mod body;
pub mod collision;
pub mod level;
pub mod rect;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use block::{Block, BlockKind, update_blocks};
pub use body::Projectile;
pub use collision::resolve_hits;
pub use level::{LevelDef, LevelSet};
pub use rect::{Bounds, Rect};
pub use snapshot::{BlockView, RenderSnapshot};
pub use state::{Aim, GameEvent, GamePhase, Session};
pub use tick::{TickInput, tick};
