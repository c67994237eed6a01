use glam::IVec2;
use pacman_sim::entity::actor::Entity;
use pacman_sim::entity::ghost::{Ghost, GhostCommand, GhostMode, GhostType};
use pacman_sim::map::direction::Direction;
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

mod common;

use common::ZeroRng;

/// A ghost placed at `pixel`, roaming the maze, with its speed pattern on a moving frame.
fn outside_ghost(ghost_type: GhostType, pixel: IVec2, direction: Direction) -> Ghost {
    let map = common::create_test_map();
    let mut ghost = Ghost::new(ghost_type);
    ghost.mode = GhostMode::Outside;
    ghost.actor.set_pixel(pixel, &map);
    ghost.actor.direction = direction;
    ghost.actor.frame = 1;
    ghost
}

#[test]
fn test_initial_states() {
    let test_cases = [
        (GhostType::Blinky, IVec2::new(111, 116), Direction::Left, GhostMode::Outside),
        (GhostType::Pinky, IVec2::new(111, 140), Direction::Down, GhostMode::PacingHome),
        (GhostType::Inky, IVec2::new(95, 140), Direction::Up, GhostMode::PacingHome),
        (GhostType::Clyde, IVec2::new(127, 140), Direction::Up, GhostMode::PacingHome),
    ];

    for (ghost_type, pixel, direction, mode) in test_cases {
        let ghost = Ghost::new(ghost_type);
        assert_eq!(ghost.pixel(), pixel, "{}", ghost_type.as_ref());
        assert_eq!(ghost.direction(), direction);
        assert_eq!(ghost.mode, mode);
        assert_eq!(ghost.actor.name, ghost_type.as_ref());
        assert_that(&ghost.scared).is_false();
    }
}

#[test]
fn test_pacing_turns_at_pen_floor() {
    let map = common::create_test_map();
    let ctx = common::ghost_context(&map, GhostCommand::Scatter, IVec2::new(14, 26));
    let mut pinky = Ghost::new(GhostType::Pinky);

    // Half speed inside the pen: four steps in eight frames
    for _ in 0..8 {
        pinky.update(&ctx, &mut ZeroRng);
    }

    assert_eq!(pinky.pixel(), IVec2::new(111, 144));
    assert_eq!(pinky.direction(), Direction::Up);
    assert_eq!(pinky.mode, GhostMode::PacingHome);
}

#[test]
fn test_leaving_home() {
    let map = common::create_test_map();
    let ctx = common::ghost_context(&map, GhostCommand::Scatter, IVec2::new(14, 26));
    let mut inky = Ghost::new(GhostType::Inky);
    inky.leave_home();

    let mut seen_leaving = false;
    for _ in 0..200 {
        inky.update(&ctx, &mut ZeroRng);
        seen_leaving |= inky.mode == GhostMode::LeavingHome;
        if inky.mode == GhostMode::Outside {
            break;
        }
    }

    assert_that(&seen_leaving).is_true();
    assert_eq!(inky.mode, GhostMode::Outside);
    assert_eq!(inky.pixel(), IVec2::new(111, 116));
    assert_eq!(inky.direction(), Direction::Left);
    assert_that(&inky.leave_home_signal).is_false();
}

#[test]
fn test_eaten_blinky_returns_and_leaves() {
    let map = common::create_test_map();
    let ctx = common::ghost_context(&map, GhostCommand::Scatter, IVec2::new(14, 26));
    let mut blinky = outside_ghost(GhostType::Blinky, IVec2::new(103, 116), Direction::Right);
    blinky.scared = true;
    blinky.on_eaten();

    assert_eq!(blinky.mode, GhostMode::Eaten);
    assert_that(&blinky.scared).is_false();

    blinky.update(&ctx, &mut ZeroRng);
    assert_eq!(blinky.mode, GhostMode::GoingHome);

    for _ in 0..100 {
        if blinky.mode == GhostMode::LeavingHome {
            break;
        }
        blinky.update(&ctx, &mut ZeroRng);
    }
    assert_eq!(blinky.mode, GhostMode::LeavingHome);
    assert_eq!(blinky.pixel(), IVec2::new(111, 144));
    assert_eq!(blinky.direction(), Direction::Up);

    for _ in 0..200 {
        if blinky.mode == GhostMode::Outside {
            break;
        }
        blinky.update(&ctx, &mut ZeroRng);
    }
    assert_eq!(blinky.mode, GhostMode::Outside);
    assert_eq!(blinky.pixel(), IVec2::new(111, 116));
}

#[test]
fn test_homebound_ghost_takes_its_seat() {
    let map = common::create_test_map();
    let ctx = common::ghost_context(&map, GhostCommand::Scatter, IVec2::new(14, 26));
    let mut inky = Ghost::new(GhostType::Inky);
    inky.mode = GhostMode::GoingHome;
    inky.actor.set_pixel(IVec2::new(111, 116), &map);
    inky.actor.direction = Direction::Down;

    for _ in 0..100 {
        if inky.mode == GhostMode::PacingHome {
            break;
        }
        inky.update(&ctx, &mut ZeroRng);
    }

    assert_eq!(inky.mode, GhostMode::PacingHome);
    assert_eq!(inky.pixel(), IVec2::new(95, 144));
    assert_eq!(inky.direction(), Direction::Up);
}

#[test]
fn test_scared_ghost_choice_uses_rng() {
    let map = common::create_test_map();
    let ctx = common::ghost_context(&map, GhostCommand::Chase, IVec2::new(6, 20));
    let mut ghost = outside_ghost(GhostType::Blinky, IVec2::new(51, 68), Direction::Right);
    ghost.scared = true;

    ghost.update(&ctx, &mut ZeroRng);

    // Candidates are Up, Right, Down; a zero draw picks the first
    assert_eq!(ghost.pixel(), IVec2::new(52, 68));
    assert_eq!(ghost.direction(), Direction::Up);
}

#[test]
fn test_scatter_steers_to_corner() {
    let map = common::create_test_map();
    let ctx = common::ghost_context(&map, GhostCommand::Scatter, IVec2::new(6, 20));
    let mut ghost = outside_ghost(GhostType::Blinky, IVec2::new(51, 68), Direction::Right);

    ghost.update(&ctx, &mut ZeroRng);

    assert_eq!(ghost.actor.target, IVec2::new(25, 0));
    assert_eq!(ghost.direction(), Direction::Right);
}

#[test]
fn test_chase_steers_to_player() {
    let map = common::create_test_map();
    let ctx = common::ghost_context(&map, GhostCommand::Chase, IVec2::new(6, 20));
    let mut ghost = outside_ghost(GhostType::Blinky, IVec2::new(51, 68), Direction::Right);

    ghost.update(&ctx, &mut ZeroRng);

    assert_eq!(ghost.actor.target, IVec2::new(6, 20));
    assert_eq!(ghost.direction(), Direction::Down);
}

#[test]
fn test_elroy_ignores_scatter() {
    let map = common::create_test_map();
    let ctx = common::ghost_context(&map, GhostCommand::Scatter, IVec2::new(6, 20));
    let mut ghost = outside_ghost(GhostType::Blinky, IVec2::new(51, 68), Direction::Right);
    ghost.elroy = 1;

    assert_eq!(ghost.target(&ctx), IVec2::new(6, 20));
}

#[test]
fn test_no_up_tile_blocks_upward_turn() {
    let map = common::create_test_map();
    let ctx = common::ghost_context(&map, GhostCommand::Scatter, IVec2::new(14, 26));
    let mut pinky = outside_ghost(GhostType::Pinky, IVec2::new(101, 116), Direction::Left);

    pinky.update(&ctx, &mut ZeroRng);

    // Up would be closer to Pinky's corner
    assert_eq!(pinky.tile(), IVec2::new(12, 14));
    assert_eq!(pinky.direction(), Direction::Left);
}

#[test]
fn test_reverse_at_tile_boundary() {
    let map = common::create_test_map();
    let ctx = common::ghost_context(&map, GhostCommand::Scatter, IVec2::new(14, 26));
    let mut ghost = outside_ghost(GhostType::Blinky, IVec2::new(55, 68), Direction::Right);
    ghost.reverse();

    ghost.update(&ctx, &mut ZeroRng);

    assert_eq!(ghost.pixel(), IVec2::new(56, 68));
    assert_eq!(ghost.direction(), Direction::Left);
    assert_that(&ghost.reverse_signal).is_false();
}

#[test]
fn test_reverse_waits_while_in_pen() {
    let map = common::create_test_map();
    let ctx = common::ghost_context(&map, GhostCommand::Scatter, IVec2::new(14, 26));
    let mut pinky = Ghost::new(GhostType::Pinky);
    pinky.reverse();

    for _ in 0..4 {
        pinky.update(&ctx, &mut ZeroRng);
    }
    assert_that(&pinky.reverse_signal).is_true();
}

#[test]
fn test_speed_selection() {
    let map = common::create_test_map();
    let mut blinky = Ghost::new(GhostType::Blinky);

    blinky.actor.frame = 8;
    assert_eq!(blinky.steps_this_frame(&map, 1), 1);
    blinky.elroy = 2;
    assert_eq!(blinky.steps_this_frame(&map, 1), 2);

    blinky.actor.frame = 0;
    assert_eq!(blinky.steps_this_frame(&map, 1), 1);
    blinky.scared = true;
    assert_eq!(blinky.steps_this_frame(&map, 1), 0);

    blinky.scared = false;
    blinky.actor.set_pixel(IVec2::new(20, 140), &map);
    assert_eq!(blinky.steps_this_frame(&map, 1), 0);

    blinky.mode = GhostMode::GoingHome;
    assert_eq!(blinky.steps_this_frame(&map, 1), 2);
}

#[test]
fn test_energizer_reactions() {
    let mut outside = Ghost::new(GhostType::Blinky);
    outside.on_energized();
    assert_that(&outside.scared).is_true();
    assert_that(&outside.reverse_signal).is_true();

    let mut pacing = Ghost::new(GhostType::Clyde);
    pacing.on_energized();
    assert_that(&pacing.scared).is_true();
    assert_that(&pacing.reverse_signal).is_false();

    let mut homebound = Ghost::new(GhostType::Inky);
    homebound.mode = GhostMode::GoingHome;
    homebound.on_energized();
    assert_that(&homebound.scared).is_false();
}

#[test]
fn test_reset_keeps_dot_count() {
    let mut clyde = Ghost::new(GhostType::Clyde);
    clyde.dot_count = 12;
    clyde.mode = GhostMode::Outside;
    clyde.scared = true;

    clyde.reset();

    assert_eq!(clyde.mode, GhostMode::PacingHome);
    assert_that(&clyde.scared).is_false();
    assert_that(&clyde.dot_count).is_equal_to(12);
}
