use std::mem::discriminant;

use strum_macros::AsRefStr;

use crate::entity::ghost::GhostType;

/// How the actors are placed back on the board before play resumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
pub enum StartKind {
    /// A fresh board: personal release counters, Blinky free to speed up.
    NewLevel,
    /// Same board after a lost life: shared release counter.
    Restart,
}

/// The overall stage of the game from a high-level perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
pub enum GameStage {
    /// "READY!" before the first level. Consumes a life when it ends.
    Ready { remaining_ticks: u32 },
    /// Actors are shown at their starting spots.
    Starting { kind: StartKind, remaining_ticks: u32 },
    /// The main gameplay loop is active.
    Playing,
    /// Short freeze after the player eats a ghost; only homebound ghosts move.
    GhostEatenPause { remaining_ticks: u32, ghost: GhostType },
    /// The player has been caught. At the end, the level restarts or the game ends.
    PlayerDying { remaining_ticks: u32 },
    /// Every item is gone; the floor flashes before the next level.
    LevelComplete { remaining_ticks: u32 },
    /// The game has ended.
    GameOver,
}

pub trait TooSimilar {
    fn too_similar(&self, other: &Self) -> bool;
}

impl TooSimilar for GameStage {
    /// Stages differing only by their countdown are too similar to be worth logging.
    fn too_similar(&self, other: &Self) -> bool {
        discriminant(self) == discriminant(other)
            && match (self, other) {
                (GameStage::Starting { kind, .. }, GameStage::Starting { kind: other, .. }) => kind == other,
                (GameStage::GhostEatenPause { ghost, .. }, GameStage::GhostEatenPause { ghost: other, .. }) => ghost == other,
                _ => true,
            }
    }
}
