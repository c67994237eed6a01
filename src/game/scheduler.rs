//! Release and command scheduling for the ghosts.
//!
//! The scheduler decides when caged ghosts leave the pen, which global command
//! the ghosts follow, when Blinky speeds up, and how long the fruit stays out.

use strum_macros::AsRefStr;
use tracing::{debug, info};

use crate::constants::timing::{FRUIT_SCORE_FRAMES, FRUIT_VISIBLE_FRAMES};
use crate::entity::ghost::{Ghost, GhostCommand, GhostMode, GhostType};
use crate::game::levels;

/// Which dot counter decides when caged ghosts are released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, AsRefStr)]
pub enum ReleaseMode {
    /// Each ghost counts its own dots against a per-level limit.
    #[default]
    Personal,
    /// One shared counter releases the ghosts at fixed totals.
    Global,
}

/// Shared-counter totals releasing Pinky, Inky and Clyde after a lost life.
const GLOBAL_RELEASE_COUNTS: [(GhostType, u32); 3] = [(GhostType::Pinky, 7), (GhostType::Inky, 17), (GhostType::Clyde, 32)];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandScheduler {
    pub command: GhostCommand,
    /// Frames into the command timeline; frozen while the player is energized.
    pub timeline_frame: u32,
    pub release_mode: ReleaseMode,
    pub global_dot_count: u32,
    pub frames_since_dot: u32,
    /// Keeps Blinky from speeding up until Clyde has left the pen after a lost life.
    pub elroy_wait_for_clyde: bool,
    pub fruit_frames: u32,
    pub fruit_score_frames: u32,
}

impl Default for CommandScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandScheduler {
    pub fn new() -> Self {
        Self {
            command: GhostCommand::Scatter,
            timeline_frame: 0,
            release_mode: ReleaseMode::Personal,
            global_dot_count: 0,
            frames_since_dot: 0,
            elroy_wait_for_clyde: false,
            fruit_frames: 0,
            fruit_score_frames: 0,
        }
    }

    /// Resets the counters for a fresh board.
    pub fn on_new_level(&mut self, ghosts: &mut [Ghost; 4]) {
        self.release_mode = ReleaseMode::Personal;
        self.frames_since_dot = 0;
        self.command = GhostCommand::Scatter;
        self.timeline_frame = 0;
        for ghost in ghosts.iter_mut() {
            ghost.dot_count = 0;
        }
        self.fruit_frames = 0;
        self.fruit_score_frames = 0;
        self.elroy_wait_for_clyde = false;
    }

    /// Resets the counters after the player loses a life.
    ///
    /// Personal dot counts are kept, but release switches to the shared counter.
    pub fn on_restart(&mut self) {
        self.command = GhostCommand::Scatter;
        self.timeline_frame = 0;
        self.release_mode = ReleaseMode::Global;
        self.global_dot_count = 0;
        self.frames_since_dot = 0;
        self.fruit_frames = 0;
        self.fruit_score_frames = 0;
        self.elroy_wait_for_clyde = true;
    }

    /// Credits an eaten dot to the active release counter.
    pub fn add_dot(&mut self, ghosts: &mut [Ghost; 4]) {
        self.frames_since_dot = 0;
        match self.release_mode {
            ReleaseMode::Personal => {
                if let Some(ghost) = first_caged(ghosts) {
                    ghost.dot_count += 1;
                }
            }
            ReleaseMode::Global => self.global_dot_count += 1,
        }
    }

    /// Starts the fruit timer.
    pub fn show_fruit(&mut self) {
        self.fruit_score_frames = 0;
        self.fruit_frames = FRUIT_VISIBLE_FRAMES;
    }

    pub fn fruit_visible(&self) -> bool {
        self.fruit_frames > 0
    }

    /// Swaps the fruit for its score display.
    pub fn eat_fruit(&mut self) {
        self.fruit_frames = 0;
        self.fruit_score_frames = FRUIT_SCORE_FRAMES;
    }

    /// Runs one frame of scheduling.
    ///
    /// Returns the new command when the timeline flips this frame; every ghost
    /// has then been told to reverse.
    pub fn update(&mut self, ghosts: &mut [Ghost; 4], level: u32, energized: bool, dots_left: u32) -> Option<GhostCommand> {
        if self.elroy_wait_for_clyde && ghosts[GhostType::Clyde.index()].mode != GhostMode::PacingHome {
            debug!("Clyde has left the pen, Blinky may speed up");
            self.elroy_wait_for_clyde = false;
        }

        self.release_by_dots(ghosts, level);

        if self.frames_since_dot > levels::idle_release_frames(level) {
            self.frames_since_dot = 0;
            if let Some(ghost) = first_caged(ghosts) {
                debug!(ghost = ghost.ghost_type.as_ref(), "No dots eaten for too long, forcing release");
                ghost.leave_home();
            }
        } else {
            self.frames_since_dot += 1;
        }

        let mut flipped = None;
        if !energized {
            if let Some(command) = levels::command_at(level, self.timeline_frame) {
                info!(command = command.as_ref(), frame = self.timeline_frame, "Ghost command changed");
                self.command = command;
                for ghost in ghosts.iter_mut() {
                    ghost.reverse();
                }
                flipped = Some(command);
            }
            self.timeline_frame += 1;
        }

        ghosts[GhostType::Blinky.index()].elroy = if self.elroy_wait_for_clyde {
            0
        } else if dots_left <= levels::elroy2_dots_left(level) {
            2
        } else if dots_left <= levels::elroy1_dots_left(level) {
            1
        } else {
            0
        };

        if self.fruit_frames > 0 {
            self.fruit_frames -= 1;
        } else if self.fruit_score_frames > 0 {
            self.fruit_score_frames -= 1;
        }

        flipped
    }

    fn release_by_dots(&mut self, ghosts: &mut [Ghost; 4], level: u32) {
        match self.release_mode {
            ReleaseMode::Personal => {
                if let Some(ghost) = first_caged(ghosts) {
                    if ghost.dot_count >= levels::release_dot_limit(ghost.ghost_type, level) {
                        ghost.leave_home();
                    }
                }
            }
            ReleaseMode::Global => {
                let due = GLOBAL_RELEASE_COUNTS.iter().find(|&&(ghost_type, count)| {
                    self.global_dot_count == count && ghosts[ghost_type.index()].mode == GhostMode::PacingHome
                });
                if let Some(&(ghost_type, _)) = due {
                    if ghost_type == GhostType::Clyde {
                        debug!("Shared dot counter finished, returning to personal counters");
                        self.global_dot_count = 0;
                        self.release_mode = ReleaseMode::Personal;
                    }
                    ghosts[ghost_type.index()].leave_home();
                }
            }
        }
    }
}

/// The first ghost still pacing in the pen, in Pinky, Inky, Clyde order.
fn first_caged(ghosts: &mut [Ghost; 4]) -> Option<&mut Ghost> {
    ghosts.iter_mut().skip(1).find(|ghost| ghost.mode == GhostMode::PacingHome)
}
