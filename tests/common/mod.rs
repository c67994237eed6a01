#![allow(dead_code)]

use glam::IVec2;
use pacman_sim::constants::{CELL_SIZE, MID_TILE, RAW_BOARD};
use pacman_sim::entity::ghost::{GhostCommand, GhostContext};
use pacman_sim::entity::targeting::PursuitContext;
use pacman_sim::map::direction::Direction;
use pacman_sim::map::tiles::TileMap;
use rand::RngCore;

/// A random source that always yields zero, so random choices pick the first candidate.
pub struct ZeroRng;

impl RngCore for ZeroRng {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn next_u64(&mut self) -> u64 {
        0
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        dst.fill(0);
    }
}

pub fn create_test_map() -> TileMap {
    TileMap::new(&RAW_BOARD).unwrap()
}

/// The center pixel of a tile.
pub fn center_of(tile: IVec2) -> IVec2 {
    tile * CELL_SIZE + MID_TILE
}

pub fn ghost_context(map: &TileMap, command: GhostCommand, player_tile: IVec2) -> GhostContext<'_> {
    GhostContext {
        map,
        level: 1,
        command,
        pursuit: PursuitContext {
            player_tile,
            player_direction: Direction::Left,
            blinky_tile: IVec2::new(13, 14),
        },
    }
}
