//! Level layouts
//!
//! A level is two ordered rectangle lists: obstacles and targets. Loading a
//! level builds fresh blocks with obstacles first, so block ids follow that
//! order.

use serde::{Deserialize, Serialize};

use super::block::{Block, BlockKind};
use super::rect::Rect;
use crate::consts::SCREEN_HEIGHT;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelDef {
    #[serde(default)]
    pub obstacles: Vec<Rect>,
    #[serde(default)]
    pub targets: Vec<Rect>,
}

impl LevelDef {
    pub fn build_blocks(&self) -> Vec<Block> {
        let obstacles = self.obstacles.iter().map(|r| (BlockKind::Obstacle, *r));
        let targets = self.targets.iter().map(|r| (BlockKind::Target, *r));
        obstacles
            .chain(targets)
            .enumerate()
            .map(|(i, (kind, rect))| Block::new(i as u32, kind, rect))
            .collect()
    }
}

/// Non-empty, cyclic list of levels
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LevelSet {
    levels: Vec<LevelDef>,
}

impl LevelSet {
    /// `None` if `levels` is empty
    pub fn new(levels: Vec<LevelDef>) -> Option<Self> {
        if levels.is_empty() {
            None
        } else {
            Some(Self { levels })
        }
    }

    /// The two stock levels
    pub fn builtin() -> Self {
        const H: i32 = SCREEN_HEIGHT;
        Self {
            levels: vec![
                LevelDef {
                    obstacles: vec![
                        Rect::new(700, H - 70, 60, 20),
                        Rect::new(770, H - 70, 60, 20),
                        Rect::new(735, H - 90, 60, 20),
                    ],
                    targets: vec![Rect::new(710, H - 110, 40, 40), Rect::new(780, H - 110, 40, 40)],
                },
                LevelDef {
                    obstacles: vec![
                        Rect::new(600, H - 70, 60, 20),
                        Rect::new(660, H - 100, 60, 20),
                        Rect::new(720, H - 130, 60, 20),
                    ],
                    targets: vec![Rect::new(630, H - 170, 40, 40), Rect::new(690, H - 200, 40, 40)],
                },
            ],
        }
    }

    /// Parse a JSON array of levels
    pub fn from_json(json: &str) -> Option<Self> {
        match serde_json::from_str::<Vec<LevelDef>>(json) {
            Ok(levels) => {
                let count = levels.len();
                let set = Self::new(levels);
                match &set {
                    Some(_) => log::info!("Loaded {} levels", count),
                    None => log::warn!("Rejected level JSON: no levels defined"),
                }
                set
            }
            Err(e) => {
                log::warn!("Rejected level JSON: {}", e);
                None
            }
        }
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Always false, kept for the `len` convention
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Level at `index`, wrapping around
    pub fn get(&self, index: usize) -> &LevelDef {
        &self.levels[index % self.levels.len()]
    }

    /// Index after `index`, wrapping around
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.levels.len()
    }
}

impl Default for LevelSet {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'de> Deserialize<'de> for LevelSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let levels = Vec::<LevelDef>::deserialize(deserializer)?;
        Self::new(levels).ok_or_else(|| serde::de::Error::custom("level set must not be empty"))
    }
}
