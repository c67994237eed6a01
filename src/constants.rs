//! This module contains all the constants used by the simulation.

use std::time::Duration;

use glam::{IVec2, UVec2};

pub const LOOP_TIME: Duration = Duration::from_nanos((1_000_000_000.0 / 60.0) as u64);

/// The size of each cell, in pixels.
pub const CELL_SIZE: i32 = 8;
/// The size of the game board, in cells.
pub const BOARD_CELL_SIZE: UVec2 = UVec2::new(28, 36);
/// The size of the game board, in pixels.
pub const BOARD_PIXEL_SIZE: UVec2 = UVec2::new(BOARD_CELL_SIZE.x * CELL_SIZE as u32, BOARD_CELL_SIZE.y * CELL_SIZE as u32);

/// The pixel within a tile that counts as its center.
pub const MID_TILE: IVec2 = IVec2::new(4, 4);

/// Fixed pixel and tile landmarks of the maze.
pub mod layout {
    use glam::IVec2;

    use super::{CELL_SIZE, MID_TILE};

    /// The only row that wraps around the board edges.
    pub const TUNNEL_ROW: i32 = 17;
    /// Number of virtual cells past each board edge on the tunnel row.
    pub const TUNNEL_OVERHANG: i32 = 2;
    /// Actors left of this pixel are moved to the right end.
    pub const TUNNEL_LEFT_END_PIXEL: i32 = -TUNNEL_OVERHANG * CELL_SIZE;
    /// Actors right of this pixel are moved to the left end.
    pub const TUNNEL_RIGHT_END_PIXEL: i32 = (super::BOARD_CELL_SIZE.x as i32 + TUNNEL_OVERHANG) * CELL_SIZE - 1;

    /// The tile directly above the pen door, where homebound ghosts line up.
    pub const GHOST_DOOR_TILE: IVec2 = IVec2::new(13, 14);
    /// The pixel a ghost must reach to pass through the door.
    pub const GHOST_DOOR_PIXEL: IVec2 = IVec2::new(
        (GHOST_DOOR_TILE.x + 1) * CELL_SIZE - 1,
        GHOST_DOOR_TILE.y * CELL_SIZE + MID_TILE.y,
    );
    pub const GHOST_HOME_LEFT_PIXEL: i32 = GHOST_DOOR_PIXEL.x - 2 * CELL_SIZE;
    pub const GHOST_HOME_RIGHT_PIXEL: i32 = GHOST_DOOR_PIXEL.x + 2 * CELL_SIZE;
    pub const GHOST_HOME_TOP_PIXEL: i32 = 17 * CELL_SIZE;
    pub const GHOST_HOME_BOTTOM_PIXEL: i32 = 18 * CELL_SIZE;

    /// Tiles at which target-seeking ghosts may not turn upward.
    pub const NO_UP_TILES: [IVec2; 4] = [IVec2::new(12, 14), IVec2::new(15, 14), IVec2::new(12, 26), IVec2::new(15, 26)];

    pub const FRUIT_TILE: IVec2 = IVec2::new(13, 20);
    pub const FRUIT_PIXEL: IVec2 = IVec2::new(CELL_SIZE * (1 + FRUIT_TILE.x) - 1, CELL_SIZE * FRUIT_TILE.y + MID_TILE.y);

    /// Starting pixels, shared by the seat logic of homebound ghosts.
    pub const PLAYER_START_PIXEL: IVec2 = IVec2::new(14 * CELL_SIZE, 26 * CELL_SIZE + MID_TILE.y);
    pub const BLINKY_START_PIXEL: IVec2 = IVec2::new(14 * CELL_SIZE - 1, 14 * CELL_SIZE + MID_TILE.y);
    pub const PINKY_START_PIXEL: IVec2 = IVec2::new(14 * CELL_SIZE - 1, 17 * CELL_SIZE + MID_TILE.y);
    pub const INKY_START_PIXEL: IVec2 = IVec2::new(12 * CELL_SIZE - 1, 17 * CELL_SIZE + MID_TILE.y);
    pub const CLYDE_START_PIXEL: IVec2 = IVec2::new(16 * CELL_SIZE - 1, 17 * CELL_SIZE + MID_TILE.y);
}

/// Gameplay numbers that are not level dependent.
pub mod mechanics {
    /// Collectibles on a fresh board.
    pub const MAX_DOTS: u32 = 244;
    pub const PELLET_POINTS: u32 = 10;
    pub const ENERGIZER_POINTS: u32 = 50;
    /// Base value of the first ghost eaten after an energizer.
    pub const GHOST_BASE_POINTS: u32 = 100;
    /// Score at which the single bonus life is awarded.
    pub const EXTRA_LIFE_SCORE: u32 = 10_000;
    /// Dots eaten at which a fruit appears.
    pub const FRUIT_DOT_COUNTS: [u32; 2] = [70, 170];
    /// Horizontal pixel distance from the fruit at which the player picks it up.
    pub const FRUIT_PICKUP_RADIUS: i32 = 4;
    /// Squared tile distance under which Clyde gives up the chase.
    pub const CLYDE_SHY_DISTANCE_SQ: i32 = 64;
    /// Sub-steps taken every frame by a ghost on its way home.
    pub const GOING_HOME_STEPS: u8 = 2;
}

/// Frame counts used by timers and scripted stages.
pub mod timing {
    pub const FRAMES_PER_SECOND: u32 = 60;
    /// Frames the player rests after eating a pellet.
    pub const PELLET_PAUSE_FRAMES: u8 = 1;
    /// Frames the player rests after eating an energizer.
    pub const ENERGIZER_PAUSE_FRAMES: u8 = 3;
    /// Frames every non-homebound actor is frozen after a ghost is eaten.
    pub const GHOST_EATEN_PAUSE_FRAMES: u32 = 60;
    /// Interval at which frightened ghosts flash near the end of the energizer.
    pub const GHOST_FLASH_INTERVAL: u32 = 14;
    pub const FRUIT_VISIBLE_FRAMES: u32 = 10 * FRAMES_PER_SECOND;
    pub const FRUIT_SCORE_FRAMES: u32 = 3 * FRAMES_PER_SECOND;
    pub const READY_FRAMES: u32 = 2 * FRAMES_PER_SECOND;
    pub const STARTING_FRAMES: u32 = 2 * FRAMES_PER_SECOND;
    pub const DYING_FRAMES: u32 = 4 * FRAMES_PER_SECOND;
    pub const LEVEL_COMPLETE_FRAMES: u32 = 255;
    /// Frames into the level-complete script at which the floor flashes.
    pub const FLOOR_FLASH_FRAMES: [u32; 8] = [120, 135, 150, 165, 180, 195, 210, 225];
}

/// The raw layout of the game board, as a 2D array of characters.
///
/// `|` wall, `.` pellet, `o` energizer, ` ` floor, `-` pen door,
/// `_` empty (outside the maze), `T` tunnel floor. `P` marks the player start
/// and is otherwise plain floor.
pub const RAW_BOARD: [&str; BOARD_CELL_SIZE.y as usize] = [
    "____________________________",
    "____________________________",
    "____________________________",
    "||||||||||||||||||||||||||||",
    "|............||............|",
    "|.||||.|||||.||.|||||.||||.|",
    "|o|__|.|___|.||.|___|.|__|o|",
    "|.||||.|||||.||.|||||.||||.|",
    "|..........................|",
    "|.||||.||.||||||||.||.||||.|",
    "|.||||.||.||||||||.||.||||.|",
    "|......||....||....||......|",
    "||||||.||||| || |||||.||||||",
    "_____|.||||| || |||||.|_____",
    "_____|.||          ||.|_____",
    "_____|.|| |||--||| ||.|_____",
    "||||||.|| |______| ||.||||||",
    "TTTTTT.   |______|   .TTTTTT",
    "||||||.|| |______| ||.||||||",
    "_____|.|| |||||||| ||.|_____",
    "_____|.||          ||.|_____",
    "_____|.|| |||||||| ||.|_____",
    "||||||.|| |||||||| ||.||||||",
    "|............||............|",
    "|.||||.|||||.||.|||||.||||.|",
    "|.||||.|||||.||.|||||.||||.|",
    "|o..||....... P.......||..o|",
    "|||.||.||.||||||||.||.||.|||",
    "|||.||.||.||||||||.||.||.|||",
    "|......||....||....||......|",
    "|.||||||||||.||.||||||||||.|",
    "|.||||||||||.||.||||||||||.|",
    "|..........................|",
    "||||||||||||||||||||||||||||",
    "____________________________",
    "____________________________",
];
