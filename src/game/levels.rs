//! Per-level difficulty tables.
//!
//! Levels are 1-based. Lookups past the end of a table clamp to its last entry
//! unless noted otherwise.

use crate::constants::timing::FRAMES_PER_SECOND;
use crate::entity::ghost::GhostCommand::{Chase, Scatter};
use crate::entity::ghost::{GhostCommand, GhostType};

/// Seconds the player stays energized, for levels 1-18. Later levels get none.
const ENERGIZED_SECONDS: [u32; 18] = [6, 5, 4, 3, 2, 5, 2, 2, 1, 5, 2, 1, 1, 3, 1, 1, 0, 1];
/// How many times scared ghosts flash before recovering, for levels 1-18.
const SCARED_FLASHES: [u32; 18] = [5, 5, 5, 5, 5, 5, 5, 5, 3, 5, 5, 3, 3, 5, 3, 3, 0, 3];

const ELROY1_DOTS_LEFT: [u32; 21] = [20, 30, 40, 40, 40, 50, 50, 50, 60, 60, 60, 70, 70, 70, 100, 100, 100, 100, 120, 120, 120];
const ELROY2_DOTS_LEFT: [u32; 21] = [10, 15, 20, 20, 20, 25, 25, 25, 30, 30, 30, 40, 40, 40, 50, 50, 50, 50, 60, 60, 60];

const FRUIT_POINTS: [u32; 13] = [100, 300, 500, 500, 700, 700, 1000, 1000, 2000, 2000, 3000, 3000, 5000];

/// Frame offsets at which the global command flips, per level tier.
const COMMAND_TIMELINES: [[(u32, GhostCommand); 7]; 3] = [
    // level 1
    [(420, Chase), (1620, Scatter), (2040, Chase), (3240, Scatter), (3540, Chase), (4740, Scatter), (5040, Chase)],
    // levels 2-4
    [(420, Chase), (1620, Scatter), (2040, Chase), (3240, Scatter), (3540, Chase), (65520, Scatter), (65521, Chase)],
    // levels 5+
    [(420, Chase), (1620, Scatter), (2040, Chase), (3240, Scatter), (3540, Chase), (65760, Scatter), (65761, Chase)],
];

fn clamped<const N: usize>(table: &[u32; N], level: u32) -> u32 {
    table[(level.max(1) as usize).min(N) - 1]
}

/// Frames the player stays energized after eating an energizer.
pub fn energized_frames(level: u32) -> u32 {
    match level.max(1) as usize {
        i if i > ENERGIZED_SECONDS.len() => 0,
        i => ENERGIZED_SECONDS[i - 1] * FRAMES_PER_SECOND,
    }
}

/// Number of white flashes at the end of the energized window.
pub fn scared_flashes(level: u32) -> u32 {
    match level.max(1) as usize {
        i if i > SCARED_FLASHES.len() => 0,
        i => SCARED_FLASHES[i - 1],
    }
}

/// Dots left at or below which Blinky enters his first speed-up stage.
pub fn elroy1_dots_left(level: u32) -> u32 {
    clamped(&ELROY1_DOTS_LEFT, level)
}

/// Dots left at or below which Blinky enters his second speed-up stage.
pub fn elroy2_dots_left(level: u32) -> u32 {
    clamped(&ELROY2_DOTS_LEFT, level)
}

pub fn fruit_points(level: u32) -> u32 {
    clamped(&FRUIT_POINTS, level)
}

/// Dots a pacing ghost must be credited with before the personal counter frees it.
pub fn release_dot_limit(ghost: GhostType, level: u32) -> u32 {
    match (ghost, level) {
        (GhostType::Inky, 0..=1) => 30,
        (GhostType::Clyde, 0..=1) => 60,
        (GhostType::Clyde, 2) => 50,
        _ => 0,
    }
}

/// Frames without a dot being eaten before the next caged ghost is forced out.
pub fn idle_release_frames(level: u32) -> u32 {
    if level < 5 {
        4 * FRAMES_PER_SECOND
    } else {
        3 * FRAMES_PER_SECOND
    }
}

/// The command timeline for a level.
pub fn command_timeline(level: u32) -> &'static [(u32, GhostCommand)] {
    let tier = match level {
        0..=1 => 0,
        2..=4 => 1,
        _ => 2,
    };
    &COMMAND_TIMELINES[tier]
}

/// The command that takes effect exactly at `frame`, if any.
pub fn command_at(level: u32, frame: u32) -> Option<GhostCommand> {
    command_timeline(level)
        .iter()
        .find(|(offset, _)| *offset == frame)
        .map(|(_, command)| *command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_energized_frames() {
        assert_eq!(energized_frames(1), 360);
        assert_eq!(energized_frames(17), 0);
        assert_eq!(energized_frames(18), 60);
        assert_eq!(energized_frames(19), 0);
    }

    #[test]
    fn test_clamping() {
        assert_eq!(elroy1_dots_left(21), 120);
        assert_eq!(elroy1_dots_left(99), 120);
        assert_eq!(elroy2_dots_left(1), 10);
        assert_eq!(fruit_points(13), 5000);
        assert_eq!(fruit_points(40), 5000);
        assert_eq!(fruit_points(0), 100);
    }

    #[test]
    fn test_timelines_alternate() {
        for level in [1, 2, 5] {
            let timeline = command_timeline(level);
            assert!(timeline.windows(2).all(|w| w[0].0 < w[1].0 && w[0].1 != w[1].1));
            assert_eq!(timeline[0], (420, GhostCommand::Chase));
        }
    }
}
