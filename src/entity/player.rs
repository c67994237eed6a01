use glam::IVec2;
use tracing::debug;

use crate::constants::mechanics::GHOST_BASE_POINTS;
use crate::constants::timing::{ENERGIZER_PAUSE_FRAMES, GHOST_FLASH_INTERVAL, PELLET_PAUSE_FRAMES};
use crate::entity::actor::{Actor, Entity};
use crate::entity::speed::{SpeedTable, StepPattern};
use crate::entity::targeting::{self, AttractContext};
use crate::game::levels;
use crate::map::direction::Direction;
use crate::map::tiles::{Consumption, TileMap};

/// What happened to the player during one update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerOutcome {
    /// The item eaten this frame, if any.
    pub consumed: Option<Consumption>,
    /// The energized window ran out this frame.
    pub energized_ended: bool,
}

/// The player-controlled actor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub actor: Actor,
    /// Buffered heading, applied as soon as the way is clear.
    pub next_direction: Direction,
    pub energized: bool,
    /// Frames spent energized so far.
    pub energized_count: u32,
    /// Whether scared ghosts are currently drawn in their flash color.
    pub energized_flash: bool,
    /// Frames left to sit still after eating.
    pub eat_pause: u8,
    /// Points for the next ghost eaten in this energized window.
    pub eat_points: u32,
    /// Steered by the autopilot instead of input.
    pub ai: bool,
}

impl Entity for Player {
    fn actor(&self) -> &Actor {
        &self.actor
    }

    fn steps_this_frame(&self, _map: &TileMap, level: u32) -> u8 {
        let pattern = if self.energized {
            StepPattern::PlayerFright
        } else {
            StepPattern::PlayerNormal
        };
        SpeedTable::steps(level, pattern, self.actor.frame)
    }
}

impl Player {
    pub fn new(start_pixel: IVec2, ai: bool) -> Self {
        Self {
            actor: Actor::new("player", start_pixel, Direction::Left),
            next_direction: Direction::Left,
            energized: false,
            energized_count: 0,
            energized_flash: false,
            eat_pause: 0,
            eat_points: GHOST_BASE_POINTS,
            ai,
        }
    }

    pub fn reset(&mut self) {
        self.energized = false;
        self.energized_count = 0;
        self.energized_flash = false;
        self.eat_pause = 0;
        self.next_direction = Direction::Left;
        self.actor.reset();
    }

    /// Buffers a heading from input.
    pub fn set_next_direction(&mut self, direction: Direction) {
        self.next_direction = direction;
    }

    /// Points for the ghost just eaten. Each further ghost in the same window is worth double.
    pub fn claim_ghost_points(&mut self) -> u32 {
        let points = self.eat_points;
        self.eat_points *= 2;
        points
    }

    /// Advances the player by one frame, eating whatever lies on the tile it ends on.
    pub fn update(&mut self, map: &mut TileMap, level: u32, attract: &AttractContext) -> PlayerOutcome {
        let mut outcome = PlayerOutcome::default();

        if self.eat_pause > 0 {
            self.eat_pause -= 1;
            return outcome;
        }

        if self.energized {
            outcome.energized_ended = self.tick_energized(level);
        }

        let steps = self.steps_this_frame(map, level);
        for _ in 0..steps {
            self.actor.step(map, true);
            self.steer(map, attract);
        }
        self.actor.frame += 1;

        let Some(consumption) = map.consume(self.actor.tile) else {
            return outcome;
        };
        outcome.consumed = Some(consumption);

        if consumption.cleared {
            return outcome;
        }

        if consumption.energizer {
            debug!(tile = %self.actor.tile, "Energizer eaten");
            self.eat_points = GHOST_BASE_POINTS;
            self.energized = true;
            self.energized_flash = false;
            self.energized_count = 0;
            self.eat_pause = ENERGIZER_PAUSE_FRAMES;
        } else {
            self.eat_pause = PELLET_PAUSE_FRAMES;
        }

        outcome
    }

    /// Counts down the energized window and toggles the flash near its end.
    /// Returns `true` when the window closes.
    fn tick_energized(&mut self, level: u32) -> bool {
        let limit = levels::energized_frames(level);
        if self.energized_count >= limit {
            debug!("Energized window over");
            self.energized = false;
            self.energized_flash = false;
            self.energized_count = 0;
            return true;
        }

        self.energized_count += 1;

        let flashes = levels::scared_flashes(level);
        let frames_left = limit - self.energized_count;
        if flashes > 0
            && frames_left <= GHOST_FLASH_INTERVAL * (flashes * 2 - 1)
            && frames_left % GHOST_FLASH_INTERVAL == 0
        {
            self.energized_flash = !self.energized_flash;
        }
        false
    }

    fn steer(&mut self, map: &TileMap, attract: &AttractContext) {
        if self.ai {
            if !self.actor.is_centered() {
                return;
            }
            let Some(openings) = self.actor.open_turns(map) else {
                return;
            };
            self.actor.target = targeting::attract(attract, self.actor.tile);
            if let Some(direction) = self.actor.closest_turn(openings) {
                self.next_direction = direction;
            }
        }

        if map.is_open(self.actor.tile, self.next_direction) {
            self.actor.direction = self.next_direction;
        }
    }
}
