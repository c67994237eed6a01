use glam::IVec2;
use pacman_sim::entity::actor::Actor;
use pacman_sim::map::direction::{Direction, Openings};
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

mod common;

#[test]
fn test_derived_position() {
    let actor = Actor::new("test", IVec2::new(112, 212), Direction::Left);

    assert_eq!(actor.tile, IVec2::new(14, 26));
    assert_eq!(actor.tile_pixel, IVec2::new(0, 4));
    assert_eq!(actor.dist_to_mid, IVec2::new(4, 0));
    assert_that(&actor.is_centered()).is_false();
}

#[test]
fn test_derived_position_left_of_board() {
    let actor = Actor::new("test", IVec2::new(-3, 140), Direction::Left);

    assert_eq!(actor.tile, IVec2::new(-1, 17));
    assert_eq!(actor.tile_pixel, IVec2::new(5, 4));
    assert_eq!(actor.dist_to_mid, IVec2::new(-1, 0));
}

#[test]
fn test_guided_step_stops_at_wall() {
    let map = common::create_test_map();
    let mut actor = Actor::new("test", IVec2::new(12, 36), Direction::Up);

    for _ in 0..3 {
        actor.step(&map, true);
    }
    assert_eq!(actor.pixel, IVec2::new(12, 36));
}

#[test]
fn test_guided_step_drifts_to_center() {
    let map = common::create_test_map();
    let mut actor = Actor::new("test", IVec2::new(12, 38), Direction::Right);

    actor.step(&map, true);
    assert_eq!(actor.pixel, IVec2::new(13, 37));

    actor.step(&map, true);
    assert_eq!(actor.pixel, IVec2::new(14, 36));

    actor.step(&map, true);
    assert_eq!(actor.pixel, IVec2::new(15, 36));
}

#[test]
fn test_unguided_step_ignores_walls() {
    let map = common::create_test_map();
    let mut actor = Actor::new("test", IVec2::new(12, 36), Direction::Up);

    for _ in 0..5 {
        actor.step(&map, false);
    }
    assert_eq!(actor.pixel, IVec2::new(12, 31));
    assert_eq!(actor.tile, IVec2::new(1, 3));
}

#[test]
fn test_step_wraps_through_tunnel() {
    let map = common::create_test_map();

    let mut actor = Actor::new("test", IVec2::new(239, 140), Direction::Right);
    actor.step(&map, true);
    assert_eq!(actor.pixel, IVec2::new(-16, 140));
    assert_eq!(actor.tile, IVec2::new(-2, 17));

    let mut actor = Actor::new("test", IVec2::new(-16, 140), Direction::Left);
    actor.step(&map, true);
    assert_eq!(actor.pixel, IVec2::new(239, 140));
}

#[test]
fn test_open_turns_exclude_reverse() {
    let map = common::create_test_map();
    let mut actor = Actor::new("test", common::center_of(IVec2::new(6, 8)), Direction::Right);

    let openings = actor.open_turns(&map);
    assert_eq!(openings, Some(Openings::UP | Openings::RIGHT | Openings::DOWN));
}

#[test]
fn test_no_way_out_marks_stuck() {
    let map = common::create_test_map();
    let start = common::center_of(IVec2::new(0, 3));
    let mut actor = Actor::new("test", start, Direction::Left);

    assert_that(&actor.open_turns(&map)).is_none();
    assert_that(&actor.stuck).is_true();

    actor.step(&map, false);
    assert_eq!(actor.pixel, start);

    actor.reset();
    assert_that(&actor.stuck).is_false();
}

#[test]
fn test_closest_turn() {
    let mut actor = Actor::new("test", common::center_of(IVec2::new(6, 8)), Direction::Right);

    // Every neighbour is one tile from the target; priority order breaks the tie
    actor.target = IVec2::new(6, 8);
    assert_eq!(actor.closest_turn(Openings::all()), Some(Direction::Up));

    actor.target = IVec2::new(10, 8);
    assert_eq!(actor.closest_turn(Openings::all()), Some(Direction::Right));

    actor.target = IVec2::new(6, 30);
    assert_eq!(actor.closest_turn(Openings::LEFT | Openings::DOWN), Some(Direction::Down));

    assert_eq!(actor.closest_turn(Openings::empty()), None);
}

#[test]
fn test_entered_new_tile() {
    let map = common::create_test_map();
    let mut actor = Actor::new("test", IVec2::new(20, 36), Direction::Right);

    let mut entered = Vec::new();
    for _ in 0..8 {
        actor.step(&map, true);
        entered.push(actor.entered_new_tile());
    }

    // 21, 22, 23 stay in tile 2; 24 starts tile 3
    assert_eq!(entered, vec![false, false, false, true, false, false, false, false]);
}
