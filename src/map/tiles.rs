//! Live maze state: tile categories, item consumption and tunnel wraparound.

use glam::IVec2;
use pathfinding::prelude::bfs_reach;
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::constants::{layout::TUNNEL_OVERHANG, layout::TUNNEL_LEFT_END_PIXEL, layout::TUNNEL_RIGHT_END_PIXEL};
use crate::constants::{mechanics, BOARD_CELL_SIZE, CELL_SIZE};
use crate::error::{GameResult, MapError};
use crate::map::direction::{Direction, Openings};
use crate::map::parser::{MapTileParser, TileGrid};

/// An enum representing the different types of tiles on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MapTile {
    /// Maze wall.
    Wall,
    /// Walkable floor with nothing on it.
    Floor,
    /// A regular pellet.
    Pellet,
    /// A power pellet.
    Energizer,
    /// The pen door; only ghosts pass, and only while scripted.
    Door,
    /// Space outside the maze.
    Empty,
    /// Walkable floor inside the wraparound tunnel, where ghosts slow down.
    Tunnel,
}

impl MapTile {
    /// Whether actors may walk onto this tile.
    pub const fn is_floor(self) -> bool {
        matches!(self, MapTile::Floor | MapTile::Pellet | MapTile::Energizer | MapTile::Tunnel)
    }

    pub const fn is_collectible(self) -> bool {
        matches!(self, MapTile::Pellet | MapTile::Energizer)
    }

    /// Points awarded for consuming this tile's item.
    pub const fn points(self) -> Option<u32> {
        match self {
            MapTile::Pellet => Some(mechanics::PELLET_POINTS),
            MapTile::Energizer => Some(mechanics::ENERGIZER_POINTS),
            _ => None,
        }
    }
}

/// Result of eating the item on a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Consumption {
    pub points: u32,
    pub energizer: bool,
    /// This item was one of the fruit checkpoints.
    pub fruit: bool,
    /// This item was the last one on the board.
    pub cleared: bool,
}

/// The maze: an immutable template plus the current per-level item state.
#[derive(Debug, Clone)]
pub struct TileMap {
    template: TileGrid,
    tiles: TileGrid,
    player_start: IVec2,
    tunnel_rows: SmallVec<[i32; 2]>,
    total_dots: u32,
    dots_eaten: u32,
}

impl TileMap {
    /// Parses and validates a board layout.
    pub fn new(raw_board: &[&str]) -> GameResult<Self> {
        let parsed = MapTileParser::parse_board(raw_board)?;

        let tunnel_rows = (0..BOARD_CELL_SIZE.y as usize)
            .filter(|&y| parsed.tiles[0][y] == MapTile::Tunnel && parsed.tiles[BOARD_CELL_SIZE.x as usize - 1][y] == MapTile::Tunnel)
            .map(|y| y as i32)
            .collect();

        let map = Self {
            template: parsed.tiles,
            tiles: parsed.tiles,
            player_start: parsed.player_start,
            tunnel_rows,
            total_dots: parsed.collectibles,
            dots_eaten: 0,
        };
        map.validate()?;

        debug!(dots = map.total_dots, tunnel_rows = ?map.tunnel_rows, "Maze loaded");
        Ok(map)
    }

    /// Restores every item from the template.
    pub fn reset(&mut self) {
        self.tiles = self.template;
        self.dots_eaten = 0;
    }

    /// Category of the tile at `tile`.
    ///
    /// The virtual cells past either end of a tunnel row read as [`MapTile::Tunnel`];
    /// every other position off the board is `None`.
    pub fn tile_at(&self, tile: IVec2) -> Option<MapTile> {
        if self.in_bounds(tile) {
            return Some(self.tiles[tile.x as usize][tile.y as usize]);
        }
        if self.is_offscreen_tunnel(tile) {
            return Some(MapTile::Tunnel);
        }
        None
    }

    fn in_bounds(&self, tile: IVec2) -> bool {
        tile.x >= 0 && tile.y >= 0 && tile.x < BOARD_CELL_SIZE.x as i32 && tile.y < BOARD_CELL_SIZE.y as i32
    }

    pub fn is_tunnel_row(&self, row: i32) -> bool {
        self.tunnel_rows.contains(&row)
    }

    fn is_offscreen_tunnel(&self, tile: IVec2) -> bool {
        let width = BOARD_CELL_SIZE.x as i32;
        self.is_tunnel_row(tile.y)
            && ((-TUNNEL_OVERHANG..0).contains(&tile.x) || (width..width + TUNNEL_OVERHANG).contains(&tile.x))
    }

    /// Whether the tile slows ghosts down.
    pub fn is_tunnel_tile(&self, tile: IVec2) -> bool {
        self.tile_at(tile) == Some(MapTile::Tunnel)
    }

    /// Whether `tile` can be walked on. Unknown positions are never floor.
    pub fn is_floor(&self, tile: IVec2) -> bool {
        self.tile_at(tile).is_some_and(MapTile::is_floor)
    }

    /// The tile one step from `tile`, wrapping across the virtual tunnel cells.
    pub fn neighbour(&self, tile: IVec2, direction: Direction) -> IVec2 {
        let next = tile + direction.as_ivec2();
        if !self.is_tunnel_row(next.y) {
            return next;
        }
        let span = BOARD_CELL_SIZE.x as i32 + 2 * TUNNEL_OVERHANG;
        IVec2::new((next.x + TUNNEL_OVERHANG).rem_euclid(span) - TUNNEL_OVERHANG, next.y)
    }

    /// Whether the neighbour of `tile` in `direction` is floor.
    pub fn is_open(&self, tile: IVec2, direction: Direction) -> bool {
        self.is_floor(self.neighbour(tile, direction))
    }

    /// The walkable neighbours of `tile`.
    pub fn open_directions(&self, tile: IVec2) -> Openings {
        Direction::DIRECTIONS
            .into_iter()
            .filter(|&d| self.is_open(tile, d))
            .fold(Openings::empty(), |acc, d| acc | d.as_opening())
    }

    /// Wraps a pixel position that has run past either tunnel end.
    pub fn teleport(&self, pixel: &mut IVec2) {
        if !self.is_tunnel_row(pixel.y.div_euclid(CELL_SIZE)) {
            return;
        }
        if pixel.x > TUNNEL_RIGHT_END_PIXEL {
            trace!(from = pixel.x, to = TUNNEL_LEFT_END_PIXEL, "Tunnel wrap");
            pixel.x = TUNNEL_LEFT_END_PIXEL;
        } else if pixel.x < TUNNEL_LEFT_END_PIXEL {
            trace!(from = pixel.x, to = TUNNEL_RIGHT_END_PIXEL, "Tunnel wrap");
            pixel.x = TUNNEL_RIGHT_END_PIXEL;
        }
    }

    /// Eats the item on `tile`, leaving bare floor behind.
    pub fn consume(&mut self, tile: IVec2) -> Option<Consumption> {
        if !self.in_bounds(tile) {
            return None;
        }
        let cell = &mut self.tiles[tile.x as usize][tile.y as usize];
        let points = cell.points()?;
        let energizer = *cell == MapTile::Energizer;
        *cell = MapTile::Floor;

        self.dots_eaten += 1;
        let fruit = mechanics::FRUIT_DOT_COUNTS.contains(&self.dots_eaten);
        if fruit {
            debug!(dots_eaten = self.dots_eaten, "Fruit checkpoint reached");
        }

        Some(Consumption {
            points,
            energizer,
            fruit,
            cleared: self.is_cleared(),
        })
    }

    /// The current item grid, indexed `[x][y]`.
    pub fn tiles(&self) -> &TileGrid {
        &self.tiles
    }

    pub fn player_start(&self) -> IVec2 {
        self.player_start
    }

    pub fn total_dots(&self) -> u32 {
        self.total_dots
    }

    pub fn dots_eaten(&self) -> u32 {
        self.dots_eaten
    }

    pub fn dots_remaining(&self) -> u32 {
        self.total_dots - self.dots_eaten
    }

    pub fn is_cleared(&self) -> bool {
        self.dots_eaten == self.total_dots
    }

    /// Checks the collectible count and that no reachable floor tile is a dead end.
    pub fn validate(&self) -> Result<(), MapError> {
        if self.total_dots != mechanics::MAX_DOTS {
            return Err(MapError::CollectibleCount {
                expected: mechanics::MAX_DOTS,
                found: self.total_dots,
            });
        }

        let reachable = bfs_reach(self.player_start, |&tile| {
            self.open_directions(tile)
                .directions()
                .map(|d| self.neighbour(tile, d))
                .collect::<SmallVec<[IVec2; 4]>>()
        });

        for tile in reachable {
            let open = self.open_directions(tile).count();
            if open < 2 {
                return Err(MapError::DeadEnd(tile, open));
            }
        }
        Ok(())
    }
}
