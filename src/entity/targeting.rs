//! Chase targets for each ghost personality.
//!
//! Every function is pure: it reads a snapshot of the player and of Blinky and
//! returns a tile, which may lie outside the board.

use glam::IVec2;

use crate::entity::ghost::GhostType;
use crate::map::direction::Direction;

/// What a ghost may look at when choosing its chase target.
///
/// The player fields hold the previous frame's committed state. Blinky's tile
/// is read after Blinky has moved this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PursuitContext {
    pub player_tile: IVec2,
    pub player_direction: Direction,
    pub blinky_tile: IVec2,
}

/// The tile `distance` tiles ahead of the player.
///
/// Facing up also shifts the point `distance` tiles to the left, as the arcade
/// hardware does.
pub fn tiles_ahead(ctx: &PursuitContext, distance: i32) -> IVec2 {
    let mut ahead = ctx.player_tile + ctx.player_direction.as_ivec2() * distance;
    if ctx.player_direction == Direction::Up {
        ahead.x -= distance;
    }
    ahead
}

/// Blinky aims straight at the player.
pub fn chaser(ctx: &PursuitContext) -> IVec2 {
    ctx.player_tile
}

/// Pinky aims four tiles ahead of the player.
pub fn ambusher(ctx: &PursuitContext) -> IVec2 {
    tiles_ahead(ctx, 4)
}

/// Inky doubles the vector from Blinky to the tile two ahead of the player.
pub fn flanker(ctx: &PursuitContext) -> IVec2 {
    let anchor = tiles_ahead(ctx, 2);
    ctx.blinky_tile + 2 * (anchor - ctx.blinky_tile)
}

/// Clyde chases from afar and retreats to his corner when close.
pub fn opportunist(ctx: &PursuitContext, own_tile: IVec2, corner: IVec2) -> IVec2 {
    if (ctx.player_tile - own_tile).length_squared() >= crate::constants::mechanics::CLYDE_SHY_DISTANCE_SQ {
        ctx.player_tile
    } else {
        corner
    }
}

impl GhostType {
    /// The chase target for this personality.
    pub fn chase_target(self, ctx: &PursuitContext, own_tile: IVec2) -> IVec2 {
        match self {
            GhostType::Blinky => chaser(ctx),
            GhostType::Pinky => ambusher(ctx),
            GhostType::Inky => flanker(ctx),
            GhostType::Clyde => opportunist(ctx, own_tile, self.corner()),
        }
    }
}

/// What the built-in autopilot looks at when steering the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttractContext {
    pub pinky_tile: IVec2,
    /// Blinky is scared or on his way home.
    pub blinky_harmless: bool,
}

/// Autopilot target: keep Pinky at arm's length by aiming at the point
/// mirrored through her, or go for her outright while Blinky is harmless.
pub fn attract(ctx: &AttractContext, player_tile: IVec2) -> IVec2 {
    if ctx.blinky_harmless {
        ctx.pinky_tile
    } else {
        ctx.pinky_tile + 2 * (player_tile - ctx.pinky_tile)
    }
}
