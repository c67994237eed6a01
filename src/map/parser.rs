//! Map parsing functionality for converting the raw board layout into structured data.

use glam::IVec2;

use crate::constants::BOARD_CELL_SIZE;
use crate::error::ParseError;
use crate::map::tiles::MapTile;

/// Grid of tiles, indexed `[x][y]`.
pub type TileGrid = [[MapTile; BOARD_CELL_SIZE.y as usize]; BOARD_CELL_SIZE.x as usize];

/// Structured representation of the ASCII board layout.
#[derive(Debug, Clone)]
pub struct ParsedMap {
    /// 2D array of tiles converted from ASCII characters
    pub tiles: TileGrid,
    /// Tile marked with `P` in the layout
    pub player_start: IVec2,
    /// Pellets plus energizers on the board
    pub collectibles: u32,
}

/// Parser for converting raw board layouts into structured map data.
pub struct MapTileParser;

impl MapTileParser {
    /// Converts an ASCII character from the board layout into its tile category.
    ///
    /// The player start marker `P` becomes plain floor; its position is tracked
    /// separately by [`MapTileParser::parse_board`].
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnknownCharacter` for any character outside the
    /// layout vocabulary.
    pub fn parse_character(c: char) -> Result<MapTile, ParseError> {
        match c {
            '|' => Ok(MapTile::Wall),
            ' ' | 'P' => Ok(MapTile::Floor),
            '.' => Ok(MapTile::Pellet),
            'o' => Ok(MapTile::Energizer),
            '-' => Ok(MapTile::Door),
            '_' => Ok(MapTile::Empty),
            'T' => Ok(MapTile::Tunnel),
            _ => Err(ParseError::UnknownCharacter(c)),
        }
    }

    /// Parses a raw board layout into structured map data.
    ///
    /// # Errors
    ///
    /// Returns an error if the board has the wrong dimensions, contains unknown
    /// characters, or lacks a player start marker.
    pub fn parse_board(raw_board: &[&str]) -> Result<ParsedMap, ParseError> {
        if raw_board.len() != BOARD_CELL_SIZE.y as usize {
            return Err(ParseError::InvalidHeight {
                expected: BOARD_CELL_SIZE.y as usize,
                found: raw_board.len(),
            });
        }

        let mut tiles = [[MapTile::Empty; BOARD_CELL_SIZE.y as usize]; BOARD_CELL_SIZE.x as usize];
        let mut player_start = None;
        let mut collectibles = 0;

        for (y, line) in raw_board.iter().enumerate() {
            let width = line.chars().count();
            if width != BOARD_CELL_SIZE.x as usize {
                return Err(ParseError::InvalidWidth {
                    line: y,
                    expected: BOARD_CELL_SIZE.x as usize,
                    found: width,
                });
            }

            for (x, character) in line.chars().enumerate() {
                let tile = Self::parse_character(character)?;
                if character == 'P' {
                    player_start = Some(IVec2::new(x as i32, y as i32));
                }
                if tile.is_collectible() {
                    collectibles += 1;
                }
                tiles[x][y] = tile;
            }
        }

        Ok(ParsedMap {
            tiles,
            player_start: player_start.ok_or(ParseError::MissingPlayerStart)?,
            collectibles,
        })
    }
}
