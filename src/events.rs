use glam::IVec2;

use crate::entity::ghost::{GhostCommand, GhostType};
use crate::game::state::GameStage;

/// Something noteworthy that happened during a frame.
///
/// Events are informational; the simulation state is already updated when
/// they are emitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    StageChanged(GameStage),
    PelletEaten { tile: IVec2 },
    EnergizerEaten { tile: IVec2 },
    GhostEaten { ghost: GhostType, points: u32 },
    CommandChanged(GhostCommand),
    FruitAppeared,
    FruitEaten { points: u32 },
    ExtraLife,
    PlayerCaught { ghost: GhostType },
    LevelCleared { level: u32 },
    GameOver,
}
