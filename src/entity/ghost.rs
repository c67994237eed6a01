//! Ghost entity implementation.
//!
//! Each ghost is an [`Actor`] driven by a small mode machine. Outside the pen a
//! ghost steers toward a target tile at every tile center; inside and around
//! the pen its movement is scripted pixel by pixel.

use glam::IVec2;
use rand::seq::IndexedRandom;
use rand::Rng;
use smallvec::SmallVec;
use strum_macros::{AsRefStr, EnumIter, IntoStaticStr};
use tracing::{debug, trace};

use crate::constants::layout::{
    BLINKY_START_PIXEL, CLYDE_START_PIXEL, GHOST_DOOR_PIXEL, GHOST_DOOR_TILE, GHOST_HOME_BOTTOM_PIXEL, GHOST_HOME_LEFT_PIXEL,
    GHOST_HOME_RIGHT_PIXEL, GHOST_HOME_TOP_PIXEL, INKY_START_PIXEL, NO_UP_TILES, PINKY_START_PIXEL,
};
use crate::constants::mechanics::GOING_HOME_STEPS;
use crate::entity::actor::{Actor, Entity};
use crate::entity::speed::{SpeedTable, StepPattern};
use crate::entity::targeting::PursuitContext;
use crate::map::direction::{Direction, Openings};
use crate::map::tiles::TileMap;

/// The four classic ghost types, in update order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, IntoStaticStr, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum GhostType {
    Blinky,
    Pinky,
    Inky,
    Clyde,
}

impl GhostType {
    pub const ALL: [GhostType; 4] = [GhostType::Blinky, GhostType::Pinky, GhostType::Inky, GhostType::Clyde];

    /// The tile this ghost heads for while scattering.
    pub const fn corner(self) -> IVec2 {
        match self {
            GhostType::Blinky => IVec2::new(25, 0),
            GhostType::Pinky => IVec2::new(2, 0),
            GhostType::Inky => IVec2::new(27, 34),
            GhostType::Clyde => IVec2::new(0, 34),
        }
    }

    pub const fn start_pixel(self) -> IVec2 {
        match self {
            GhostType::Blinky => BLINKY_START_PIXEL,
            GhostType::Pinky => PINKY_START_PIXEL,
            GhostType::Inky => INKY_START_PIXEL,
            GhostType::Clyde => CLYDE_START_PIXEL,
        }
    }

    pub const fn start_direction(self) -> Direction {
        match self {
            GhostType::Blinky => Direction::Left,
            GhostType::Pinky => Direction::Down,
            GhostType::Inky | GhostType::Clyde => Direction::Up,
        }
    }

    /// Blinky starts outside the pen; everyone else starts pacing inside it.
    pub const fn start_mode(self) -> GhostMode {
        match self {
            GhostType::Blinky => GhostMode::Outside,
            _ => GhostMode::PacingHome,
        }
    }

    /// Body color, as an RGB hex string.
    pub const fn color(self) -> &'static str {
        match self {
            GhostType::Blinky => "#FF0000",
            GhostType::Pinky => "#FFB8FF",
            GhostType::Inky => "#00FFFF",
            GhostType::Clyde => "#FFB851",
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Where a ghost is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr)]
pub enum GhostMode {
    /// Roaming the maze, chasing or scattering.
    Outside,
    /// Just caught by the player; becomes [`GhostMode::GoingHome`] on the next update.
    Eaten,
    /// Eyes travelling back to the pen.
    GoingHome,
    /// Bobbing up and down inside the pen.
    PacingHome,
    /// Walking out through the door.
    LeavingHome,
}

/// The global behaviour all ghosts follow while outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AsRefStr)]
pub enum GhostCommand {
    Chase,
    #[default]
    Scatter,
}

/// Everything a ghost reads from the rest of the game during its update.
#[derive(Debug, Clone, Copy)]
pub struct GhostContext<'a> {
    pub map: &'a TileMap,
    pub level: u32,
    pub command: GhostCommand,
    pub pursuit: PursuitContext,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ghost {
    pub actor: Actor,
    pub ghost_type: GhostType,
    pub mode: GhostMode,
    pub scared: bool,
    /// Blinky's speed-up stage: 0 (off), 1 or 2.
    pub elroy: u8,
    /// Dots credited to this ghost while the personal release counter is active.
    pub dot_count: u32,
    /// Reverse at the next tile boundary.
    pub reverse_signal: bool,
    /// Head for the door at the next pacing step.
    pub leave_home_signal: bool,
}

impl Entity for Ghost {
    fn actor(&self) -> &Actor {
        &self.actor
    }

    fn steps_this_frame(&self, map: &TileMap, level: u32) -> u8 {
        let pattern = match self.mode {
            GhostMode::GoingHome => return GOING_HOME_STEPS,
            GhostMode::LeavingHome | GhostMode::PacingHome => StepPattern::GhostTunnel,
            _ if map.is_tunnel_tile(self.actor.tile) => StepPattern::GhostTunnel,
            _ if self.scared => StepPattern::GhostFright,
            _ => match self.elroy {
                1 => StepPattern::Elroy1,
                2 => StepPattern::Elroy2,
                _ => StepPattern::GhostNormal,
            },
        };
        SpeedTable::steps(level, pattern, self.actor.frame)
    }
}

impl Ghost {
    pub fn new(ghost_type: GhostType) -> Self {
        Self {
            actor: Actor::new(ghost_type.into(), ghost_type.start_pixel(), ghost_type.start_direction()),
            ghost_type,
            mode: ghost_type.start_mode(),
            scared: false,
            elroy: 0,
            dot_count: 0,
            reverse_signal: false,
            leave_home_signal: false,
        }
    }

    /// Puts the ghost back at its starting spot for a new level or a restart.
    ///
    /// The personal dot count is left alone; the release scheduler owns it.
    pub fn reset(&mut self) {
        self.actor.reset();
        self.mode = self.ghost_type.start_mode();
        self.scared = false;
        self.reverse_signal = false;
        self.leave_home_signal = false;
    }

    /// Advances this ghost by one frame.
    pub fn update<R: Rng + ?Sized>(&mut self, ctx: &GhostContext<'_>, rng: &mut R) {
        if self.mode == GhostMode::Eaten {
            debug!(ghost = self.ghost_type.as_ref(), "Ghost heading home");
            self.mode = GhostMode::GoingHome;
        }

        let steps = self.steps_this_frame(ctx.map, ctx.level);
        for _ in 0..steps {
            self.actor.step(ctx.map, self.mode == GhostMode::Outside);
            self.steer(ctx, rng);
        }
        self.actor.frame += 1;
    }

    /// Whether the ghost is past the door and inside the pen.
    pub fn is_inside_home(&self) -> bool {
        let pixel = self.actor.pixel;
        (GHOST_HOME_LEFT_PIXEL..=GHOST_HOME_RIGHT_PIXEL).contains(&pixel.x)
            && self.actor.tile.y > GHOST_DOOR_TILE.y
            && pixel.y <= GHOST_HOME_BOTTOM_PIXEL
    }

    /// Asks the ghost to turn around once it enters its next tile.
    pub fn reverse(&mut self) {
        self.reverse_signal = true;
    }

    /// Asks a pacing ghost to walk out of the pen.
    pub fn leave_home(&mut self) {
        if !self.leave_home_signal {
            debug!(ghost = self.ghost_type.as_ref(), "Ghost released");
        }
        self.leave_home_signal = true;
    }

    /// Reaction to the player eating an energizer.
    pub fn on_energized(&mut self) {
        if self.mode == GhostMode::Outside {
            self.reverse();
        }
        if self.mode != GhostMode::GoingHome {
            self.scared = true;
        }
    }

    /// Reaction to being caught while scared.
    pub fn on_eaten(&mut self) {
        self.mode = GhostMode::Eaten;
        self.scared = false;
    }

    /// The tile this ghost steers toward when it is not scared.
    pub fn target(&self, ctx: &GhostContext<'_>) -> IVec2 {
        if self.mode == GhostMode::GoingHome {
            GHOST_DOOR_TILE
        } else if self.elroy == 0 && ctx.command == GhostCommand::Scatter {
            self.ghost_type.corner()
        } else {
            self.ghost_type.chase_target(&ctx.pursuit, self.actor.tile)
        }
    }

    fn set_mode(&mut self, mode: GhostMode) {
        debug!(ghost = self.ghost_type.as_ref(), from = self.mode.as_ref(), to = mode.as_ref(), "Ghost mode change");
        self.mode = mode;
    }

    fn steer<R: Rng + ?Sized>(&mut self, ctx: &GhostContext<'_>, rng: &mut R) {
        let pixel = self.actor.pixel;

        match self.mode {
            GhostMode::GoingHome => {
                if self.actor.tile == GHOST_DOOR_TILE {
                    self.actor.direction = if pixel.x == GHOST_DOOR_PIXEL.x {
                        Direction::Down
                    } else {
                        Direction::Right
                    };
                    return;
                }

                if self.is_inside_home() {
                    if pixel.y == GHOST_HOME_BOTTOM_PIXEL {
                        let seat = self.actor.start_pixel.x;
                        if pixel.x == seat {
                            self.actor.direction = Direction::Up;
                            self.set_mode(match self.ghost_type {
                                GhostType::Blinky => GhostMode::LeavingHome,
                                _ => GhostMode::PacingHome,
                            });
                        } else {
                            self.actor.direction = if seat < pixel.x { Direction::Left } else { Direction::Right };
                        }
                    }
                    return;
                }
            }
            GhostMode::PacingHome => {
                if self.leave_home_signal {
                    self.leave_home_signal = false;
                    self.set_mode(GhostMode::LeavingHome);
                    self.actor.direction = match pixel.x.cmp(&GHOST_DOOR_PIXEL.x) {
                        std::cmp::Ordering::Equal => Direction::Up,
                        std::cmp::Ordering::Less => Direction::Right,
                        std::cmp::Ordering::Greater => Direction::Left,
                    };
                } else if pixel.y == GHOST_HOME_TOP_PIXEL {
                    self.actor.direction = Direction::Down;
                } else if pixel.y == GHOST_HOME_BOTTOM_PIXEL {
                    self.actor.direction = Direction::Up;
                }
                return;
            }
            GhostMode::LeavingHome => {
                if pixel.x == GHOST_DOOR_PIXEL.x {
                    if pixel.y == GHOST_DOOR_PIXEL.y {
                        self.set_mode(GhostMode::Outside);
                        self.actor.direction = Direction::Left;
                    } else {
                        self.actor.direction = Direction::Up;
                    }
                }
                return;
            }
            GhostMode::Outside | GhostMode::Eaten => {}
        }

        if self.reverse_signal && self.mode == GhostMode::Outside && self.actor.entered_new_tile() {
            self.reverse_signal = false;
            self.actor.direction = self.actor.direction.opposite();
            trace!(ghost = self.ghost_type.as_ref(), direction = self.actor.direction.as_ref(), "Ghost reversed");
            return;
        }

        if !self.actor.is_centered() {
            return;
        }

        let Some(mut openings) = self.actor.open_turns(ctx.map) else {
            return;
        };

        let choice = if self.scared {
            let candidates: SmallVec<[Direction; 4]> = openings.directions().collect();
            candidates.choose(rng).copied()
        } else {
            self.actor.target = self.target(ctx);
            if NO_UP_TILES.contains(&self.actor.tile) {
                let restricted = openings.difference(Openings::UP);
                if !restricted.is_empty() {
                    openings = restricted;
                }
            }
            self.actor.closest_turn(openings)
        };

        if let Some(direction) = choice {
            self.actor.direction = direction;
        }
    }
}
