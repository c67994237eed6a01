//! This module contains the main game logic and state.
//!
//! [`Game`] owns every piece of simulation state and advances it one frame at a
//! time. A frame runs the scheduler, then the ghosts in Blinky, Pinky, Inky,
//! Clyde order, then the player, and finally checks collisions and the board.

use glam::IVec2;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use smallvec::SmallVec;
use tracing::{debug, info};

use crate::config::Config;
use crate::constants::layout::FRUIT_PIXEL;
use crate::constants::mechanics::{EXTRA_LIFE_SCORE, FRUIT_PICKUP_RADIUS};
use crate::constants::timing::{
    DYING_FRAMES, FLOOR_FLASH_FRAMES, GHOST_EATEN_PAUSE_FRAMES, LEVEL_COMPLETE_FRAMES, READY_FRAMES, STARTING_FRAMES,
};
use crate::constants::{CELL_SIZE, MID_TILE, RAW_BOARD};
use crate::entity::ghost::{Ghost, GhostContext, GhostMode, GhostType};
use crate::entity::player::Player;
use crate::entity::targeting::{AttractContext, PursuitContext};
use crate::error::GameResult;
use crate::events::GameEvent;
use crate::formatter;
use crate::map::direction::Direction;
use crate::map::parser::TileGrid;
use crate::map::tiles::TileMap;

use self::scheduler::CommandScheduler;
use self::state::{GameStage, StartKind, TooSimilar};

pub mod levels;
pub mod scheduler;
pub mod state;

/// Events raised by one frame; rarely more than a couple.
pub type FrameEvents = SmallVec<[GameEvent; 4]>;

/// Read-only view of one actor for a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActorView {
    pub pixel: IVec2,
    pub direction: Direction,
    /// `None` for the player.
    pub mode: Option<GhostMode>,
    pub scared: bool,
}

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub frame: u64,
    pub stage: GameStage,
    pub level: u32,
    pub score: u32,
    pub high_score: u32,
    pub extra_lives: u8,
    /// Ghosts in update order, then the player.
    pub actors: [ActorView; 5],
    pub tiles: TileGrid,
    pub fruit_visible: bool,
    pub fruit_score_visible: bool,
    pub ghost_flash: bool,
    pub floor_flash: bool,
}

/// The `Game` struct is the main entry point for the simulation.
pub struct Game {
    map: TileMap,
    ghosts: [Ghost; 4],
    player: Player,
    scheduler: CommandScheduler,
    stage: GameStage,
    level: u32,
    score: u32,
    high_score: u32,
    extra_lives: u8,
    extra_life_awarded: bool,
    floor_flash: bool,
    frame: u64,
    rng: SmallRng,
}

impl Game {
    /// Builds the maze and the cast, ready to run the opening "READY!" stage.
    pub fn new(config: &Config) -> GameResult<Game> {
        config.validate()?;

        let map = TileMap::new(&RAW_BOARD)?;
        let start = map.player_start();
        let player_pixel = IVec2::new(start.x * CELL_SIZE, start.y * CELL_SIZE + MID_TILE.y);

        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };

        info!(seed = ?config.seed, level = config.start_level, lives = config.lives, "Game created");

        Ok(Game {
            map,
            ghosts: GhostType::ALL.map(Ghost::new),
            player: Player::new(player_pixel, config.attract_mode),
            scheduler: CommandScheduler::new(),
            stage: GameStage::Ready {
                remaining_ticks: READY_FRAMES,
            },
            level: config.start_level,
            score: 0,
            high_score: 0,
            extra_lives: config.lives,
            extra_life_awarded: false,
            floor_flash: false,
            frame: 0,
            rng,
        })
    }

    /// Advances the simulation by one frame.
    ///
    /// `input` is the heading the player is asking for this frame, if any; it
    /// is ignored while the autopilot is steering.
    pub fn tick(&mut self, input: Option<Direction>) -> FrameEvents {
        self.frame += 1;
        formatter::set_frame(self.frame);

        let mut events = FrameEvents::new();

        if let Some(direction) = input {
            if !self.player.ai {
                self.player.set_next_direction(direction);
            }
        }

        let old_stage = self.stage;
        let new_stage = match old_stage {
            GameStage::Ready { remaining_ticks } => {
                if remaining_ticks > 0 {
                    GameStage::Ready {
                        remaining_ticks: remaining_ticks - 1,
                    }
                } else {
                    self.extra_lives = self.extra_lives.saturating_sub(1);
                    self.begin_start(StartKind::NewLevel)
                }
            }
            GameStage::Starting { kind, remaining_ticks } => {
                if remaining_ticks > 0 {
                    GameStage::Starting {
                        kind,
                        remaining_ticks: remaining_ticks - 1,
                    }
                } else {
                    info!(level = self.level, "Gameplay begins");
                    GameStage::Playing
                }
            }
            GameStage::Playing => self.play_frame(&mut events),
            GameStage::GhostEatenPause { remaining_ticks, ghost } => {
                self.update_ghosts(true);
                if remaining_ticks > 1 {
                    GameStage::GhostEatenPause {
                        remaining_ticks: remaining_ticks - 1,
                        ghost,
                    }
                } else {
                    debug!("Ghost eaten pause ended, resuming gameplay");
                    GameStage::Playing
                }
            }
            GameStage::PlayerDying { remaining_ticks } => {
                if remaining_ticks > 0 {
                    GameStage::PlayerDying {
                        remaining_ticks: remaining_ticks - 1,
                    }
                } else if self.extra_lives == 0 {
                    info!(score = self.score, level = self.level, "All lives lost, game over");
                    events.push(GameEvent::GameOver);
                    GameStage::GameOver
                } else {
                    self.extra_lives -= 1;
                    info!(remaining_lives = self.extra_lives, "Player died, restarting level");
                    self.begin_start(StartKind::Restart)
                }
            }
            GameStage::LevelComplete { remaining_ticks } => {
                let elapsed = LEVEL_COMPLETE_FRAMES - remaining_ticks;
                if FLOOR_FLASH_FRAMES.contains(&elapsed) {
                    self.floor_flash = !self.floor_flash;
                }
                if remaining_ticks > 0 {
                    GameStage::LevelComplete {
                        remaining_ticks: remaining_ticks - 1,
                    }
                } else {
                    self.level += 1;
                    self.floor_flash = false;
                    self.map.reset();
                    info!(level = self.level, "Advancing to next level");
                    self.begin_start(StartKind::NewLevel)
                }
            }
            GameStage::GameOver => GameStage::GameOver,
        };

        if old_stage != new_stage {
            if !old_stage.too_similar(&new_stage) {
                debug!(old_stage = old_stage.as_ref(), new_stage = new_stage.as_ref(), "Game stage transition");
                events.push(GameEvent::StageChanged(new_stage));
            }
            self.stage = new_stage;
        }

        events
    }

    /// Resets the counters and puts every actor on its starting spot.
    fn begin_start(&mut self, kind: StartKind) -> GameStage {
        match kind {
            StartKind::NewLevel => self.scheduler.on_new_level(&mut self.ghosts),
            StartKind::Restart => self.scheduler.on_restart(),
        }
        for ghost in self.ghosts.iter_mut() {
            ghost.reset();
        }
        self.player.reset();

        GameStage::Starting {
            kind,
            remaining_ticks: STARTING_FRAMES,
        }
    }

    /// Updates the ghosts in order, or only the homebound ones.
    ///
    /// Every ghost sees the player as committed at the end of the previous
    /// frame, and Inky sees Blinky's tile from this frame.
    fn update_ghosts(&mut self, homebound_only: bool) {
        let player_tile = self.player.actor.tile;
        let player_direction = self.player.actor.direction;

        for i in 0..self.ghosts.len() {
            if homebound_only && self.ghosts[i].mode != GhostMode::GoingHome {
                continue;
            }
            let ctx = GhostContext {
                map: &self.map,
                level: self.level,
                command: self.scheduler.command,
                pursuit: PursuitContext {
                    player_tile,
                    player_direction,
                    blinky_tile: self.ghosts[GhostType::Blinky.index()].actor.tile,
                },
            };
            self.ghosts[i].update(&ctx, &mut self.rng);
        }
    }

    fn play_frame(&mut self, events: &mut FrameEvents) -> GameStage {
        if let Some(command) =
            self.scheduler
                .update(&mut self.ghosts, self.level, self.player.energized, self.map.dots_remaining())
        {
            events.push(GameEvent::CommandChanged(command));
        }

        self.update_ghosts(false);

        let blinky = &self.ghosts[GhostType::Blinky.index()];
        let attract = AttractContext {
            pinky_tile: self.ghosts[GhostType::Pinky.index()].actor.tile,
            blinky_harmless: blinky.scared || blinky.mode == GhostMode::GoingHome,
        };
        let outcome = self.player.update(&mut self.map, self.level, &attract);

        if outcome.energized_ended {
            for ghost in self.ghosts.iter_mut() {
                ghost.scared = false;
            }
        }

        if let Some(consumption) = outcome.consumed {
            let tile = self.player.actor.tile;
            self.scheduler.add_dot(&mut self.ghosts);
            self.add_score(consumption.points, events);
            if consumption.fruit {
                self.scheduler.show_fruit();
                events.push(GameEvent::FruitAppeared);
            }
            if consumption.energizer {
                if !consumption.cleared {
                    for ghost in self.ghosts.iter_mut() {
                        ghost.on_energized();
                    }
                }
                events.push(GameEvent::EnergizerEaten { tile });
            } else {
                events.push(GameEvent::PelletEaten { tile });
            }
        }

        let mut next = GameStage::Playing;

        let player_tile = self.player.actor.tile;
        if let Some(i) = self
            .ghosts
            .iter()
            .position(|g| g.actor.tile == player_tile && g.mode == GhostMode::Outside)
        {
            let ghost_type = self.ghosts[i].ghost_type;
            if !self.ghosts[i].scared {
                info!(ghost = ghost_type.as_ref(), tile = %player_tile, "Player caught");
                events.push(GameEvent::PlayerCaught { ghost: ghost_type });
                next = GameStage::PlayerDying {
                    remaining_ticks: DYING_FRAMES,
                };
            } else if self.player.energized {
                let points = self.player.claim_ghost_points();
                self.add_score(points, events);
                self.ghosts[i].on_eaten();
                debug!(ghost = ghost_type.as_ref(), points, "Ghost eaten");
                events.push(GameEvent::GhostEaten { ghost: ghost_type, points });
                next = GameStage::GhostEatenPause {
                    remaining_ticks: GHOST_EATEN_PAUSE_FRAMES,
                    ghost: ghost_type,
                };
            }
        }

        if self.scheduler.fruit_visible()
            && self.player.actor.pixel.y == FRUIT_PIXEL.y
            && (self.player.actor.pixel.x - FRUIT_PIXEL.x).abs() <= FRUIT_PICKUP_RADIUS
        {
            let points = levels::fruit_points(self.level);
            self.scheduler.eat_fruit();
            self.add_score(points, events);
            events.push(GameEvent::FruitEaten { points });
        }

        if self.map.is_cleared() {
            info!(level = self.level, score = self.score, "Level cleared");
            events.push(GameEvent::LevelCleared { level: self.level });
            next = GameStage::LevelComplete {
                remaining_ticks: LEVEL_COMPLETE_FRAMES,
            };
        }

        next
    }

    fn add_score(&mut self, points: u32, events: &mut FrameEvents) {
        self.score += points;
        self.high_score = self.high_score.max(self.score);
        if !self.extra_life_awarded && self.score >= EXTRA_LIFE_SCORE {
            self.extra_life_awarded = true;
            self.extra_lives = self.extra_lives.saturating_add(1);
            info!(score = self.score, "Extra life awarded");
            events.push(GameEvent::ExtraLife);
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        let ghost_view = |g: &Ghost| ActorView {
            pixel: g.actor.pixel,
            direction: g.actor.direction,
            mode: Some(g.mode),
            scared: g.scared,
        };
        Snapshot {
            frame: self.frame,
            stage: self.stage,
            level: self.level,
            score: self.score,
            high_score: self.high_score,
            extra_lives: self.extra_lives,
            actors: [
                ghost_view(&self.ghosts[0]),
                ghost_view(&self.ghosts[1]),
                ghost_view(&self.ghosts[2]),
                ghost_view(&self.ghosts[3]),
                ActorView {
                    pixel: self.player.actor.pixel,
                    direction: self.player.actor.direction,
                    mode: None,
                    scared: false,
                },
            ],
            tiles: *self.map.tiles(),
            fruit_visible: self.scheduler.fruit_visible(),
            fruit_score_visible: self.scheduler.fruit_score_frames > 0,
            ghost_flash: self.player.energized_flash,
            floor_flash: self.floor_flash,
        }
    }

    pub fn stage(&self) -> GameStage {
        self.stage
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn extra_lives(&self) -> u8 {
        self.extra_lives
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn map(&self) -> &TileMap {
        &self.map
    }

    pub fn map_mut(&mut self) -> &mut TileMap {
        &mut self.map
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn ghosts(&self) -> &[Ghost; 4] {
        &self.ghosts
    }

    pub fn ghosts_mut(&mut self) -> &mut [Ghost; 4] {
        &mut self.ghosts
    }

    pub fn scheduler(&self) -> &CommandScheduler {
        &self.scheduler
    }
}
