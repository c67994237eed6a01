//! Shared movement and steering for every actor on the board.
//!
//! Position is tracked in whole pixels; the tile, the pixel inside the tile and
//! the distance to the tile's center are derived from it after every step.

use glam::IVec2;
use tracing::warn;

use crate::constants::{CELL_SIZE, MID_TILE};
use crate::map::direction::{Direction, Openings};
use crate::map::tiles::TileMap;

/// Position, heading and target bookkeeping shared by the player and the ghosts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub name: &'static str,
    pub start_pixel: IVec2,
    pub start_direction: Direction,

    pub pixel: IVec2,
    /// `floor(pixel / 8)` on each axis
    pub tile: IVec2,
    /// `pixel mod 8` on each axis
    pub tile_pixel: IVec2,
    /// `4 - tile_pixel` on each axis
    pub dist_to_mid: IVec2,

    pub direction: Direction,
    pub target: IVec2,
    /// Frames updated since the last reset, used to index speed patterns.
    pub frame: u32,
    /// Set when steering found no way out; the actor stays put until reset.
    pub stuck: bool,
}

impl Actor {
    pub fn new(name: &'static str, start_pixel: IVec2, start_direction: Direction) -> Self {
        let mut actor = Self {
            name,
            start_pixel,
            start_direction,
            pixel: start_pixel,
            tile: IVec2::ZERO,
            tile_pixel: IVec2::ZERO,
            dist_to_mid: IVec2::ZERO,
            direction: start_direction,
            target: IVec2::ZERO,
            frame: 0,
            stuck: false,
        };
        actor.derive();
        actor
    }

    /// Returns to the starting pixel and heading.
    pub fn reset(&mut self) {
        self.pixel = self.start_pixel;
        self.direction = self.start_direction;
        self.frame = 0;
        self.stuck = false;
        self.derive();
    }

    /// Moves to `pixel`, applying tunnel wraparound.
    pub fn set_pixel(&mut self, pixel: IVec2, map: &TileMap) {
        self.pixel = pixel;
        self.commit(map);
    }

    fn commit(&mut self, map: &TileMap) {
        map.teleport(&mut self.pixel);
        self.derive();
    }

    fn derive(&mut self) {
        self.tile = IVec2::new(self.pixel.x.div_euclid(CELL_SIZE), self.pixel.y.div_euclid(CELL_SIZE));
        self.tile_pixel = IVec2::new(self.pixel.x.rem_euclid(CELL_SIZE), self.pixel.y.rem_euclid(CELL_SIZE));
        self.dist_to_mid = MID_TILE - self.tile_pixel;
    }

    /// Whether the actor sits exactly on its tile's center.
    pub fn is_centered(&self) -> bool {
        self.dist_to_mid == IVec2::ZERO
    }

    /// Whether the last step crossed the trailing edge into a new tile.
    pub fn entered_new_tile(&self) -> bool {
        match self.direction {
            Direction::Up => self.tile_pixel.y == CELL_SIZE - 1,
            Direction::Down => self.tile_pixel.y == 0,
            Direction::Left => self.tile_pixel.x == CELL_SIZE - 1,
            Direction::Right => self.tile_pixel.x == 0,
        }
    }

    /// Advances one pixel along the heading.
    ///
    /// A guided step refuses to pass the center of a tile when a wall lies ahead,
    /// and drifts one pixel toward the center on the perpendicular axis.
    pub fn step(&mut self, map: &TileMap, guided: bool) {
        if self.stuck {
            return;
        }

        let heading = self.direction.as_ivec2();
        if !guided {
            self.pixel += heading;
        } else if self.direction.is_horizontal() {
            if !(self.dist_to_mid.x == 0 && !map.is_open(self.tile, self.direction)) {
                self.pixel.x += heading.x;
            }
            self.pixel.y += self.dist_to_mid.y.signum();
        } else {
            if !(self.dist_to_mid.y == 0 && !map.is_open(self.tile, self.direction)) {
                self.pixel.y += heading.y;
            }
            self.pixel.x += self.dist_to_mid.x.signum();
        }

        self.commit(map);
    }

    /// Open neighbours the actor may turn into.
    ///
    /// The way back is closed whenever another way exists. With nothing open at
    /// all the actor is marked stuck and `None` is returned.
    pub fn open_turns(&mut self, map: &TileMap) -> Option<Openings> {
        let mut openings = map.open_directions(self.tile);
        match openings.count() {
            0 => {
                warn!(actor = self.name, tile = %self.tile, "Actor stuck with no open directions");
                self.stuck = true;
                None
            }
            1 => Some(openings),
            _ => {
                openings.close(self.direction.opposite());
                Some(openings)
            }
        }
    }

    /// The open turn whose next tile is closest to the target.
    ///
    /// Distance is squared Euclidean; ties go to the earlier direction in
    /// Up, Right, Down, Left order.
    pub fn closest_turn(&self, openings: Openings) -> Option<Direction> {
        openings
            .directions()
            .map(|d| (d, (self.tile + d.as_ivec2() - self.target).length_squared()))
            .fold(None, |best: Option<(Direction, i32)>, (d, dist)| match best {
                Some((_, best_dist)) if best_dist <= dist => best,
                _ => Some((d, dist)),
            })
            .map(|(d, _)| d)
    }
}

/// Common access to the actor inside the player and the ghosts.
pub trait Entity {
    fn actor(&self) -> &Actor;

    /// Number of one-pixel steps to take this frame.
    fn steps_this_frame(&self, map: &TileMap, level: u32) -> u8;

    fn tile(&self) -> IVec2 {
        self.actor().tile
    }

    fn pixel(&self) -> IVec2 {
        self.actor().pixel
    }

    fn direction(&self) -> Direction {
        self.actor().direction
    }
}
