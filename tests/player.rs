use glam::IVec2;
use pacman_sim::entity::player::Player;
use pacman_sim::entity::targeting::AttractContext;
use pacman_sim::map::direction::Direction;
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

mod common;

fn attract() -> AttractContext {
    AttractContext {
        pinky_tile: IVec2::new(6, 20),
        blinky_harmless: false,
    }
}

#[test]
fn test_buffered_turn_and_pellet() {
    let mut map = common::create_test_map();
    let mut player = Player::new(IVec2::new(112, 212), false);
    player.set_next_direction(Direction::Up);

    for _ in 0..8 {
        let outcome = player.update(&mut map, 1, &attract());
        assert_that(&outcome.consumed).is_none();
        assert_eq!(player.actor.direction, Direction::Left);
    }

    let outcome = player.update(&mut map, 1, &attract());

    assert_eq!(player.actor.pixel, IVec2::new(103, 212));
    assert_eq!(player.actor.direction, Direction::Up);
    assert_that(&outcome.consumed.map(|c| c.points)).is_equal_to(Some(10));
    assert_that(&player.eat_pause).is_equal_to(1);

    // The pause swallows the next update
    player.update(&mut map, 1, &attract());
    assert_eq!(player.actor.pixel, IVec2::new(103, 212));
    assert_that(&player.eat_pause).is_equal_to(0);
}

#[test]
fn test_stops_at_wall() {
    let mut map = common::create_test_map();
    map.consume(IVec2::new(1, 4));
    let mut player = Player::new(IVec2::new(12, 36), false);
    player.actor.direction = Direction::Up;
    player.set_next_direction(Direction::Up);

    for _ in 0..3 {
        player.update(&mut map, 1, &attract());
    }

    assert_eq!(player.actor.pixel, IVec2::new(12, 36));
    assert_eq!(player.actor.direction, Direction::Up);
}

#[test]
fn test_energizer() {
    let mut map = common::create_test_map();
    map.consume(IVec2::new(1, 5));
    let mut player = Player::new(IVec2::new(12, 47), false);
    player.actor.direction = Direction::Down;
    player.set_next_direction(Direction::Down);
    player.eat_points = 800;

    let outcome = player.update(&mut map, 1, &attract());

    let consumed = outcome.consumed.unwrap();
    assert_that(&consumed.energizer).is_true();
    assert_that(&consumed.points).is_equal_to(50);
    assert_that(&player.energized).is_true();
    assert_that(&player.eat_pause).is_equal_to(3);
    assert_that(&player.eat_points).is_equal_to(100);
}

#[test]
fn test_energized_window_and_flashes() {
    let mut map = common::create_test_map();
    map.consume(IVec2::new(1, 4));
    let mut player = Player::new(IVec2::new(12, 36), false);
    player.actor.direction = Direction::Up;
    player.set_next_direction(Direction::Up);
    player.energized = true;

    let mut ended_at = None;
    let mut rising_edges = 0;
    let mut flash = false;
    for update in 1..=400 {
        let outcome = player.update(&mut map, 1, &attract());
        if player.energized_flash && !flash {
            rising_edges += 1;
        }
        flash = player.energized_flash;
        if outcome.energized_ended {
            ended_at = Some(update);
            break;
        }
    }

    assert_eq!(ended_at, Some(361));
    assert_eq!(rising_edges, 5);
    assert_that(&player.energized).is_false();
    assert_that(&player.energized_flash).is_false();
}

#[test]
fn test_ghost_points_double() {
    let mut player = Player::new(IVec2::new(112, 212), false);

    let points: Vec<u32> = (0..4).map(|_| player.claim_ghost_points()).collect();
    assert_eq!(points, vec![100, 200, 400, 800]);
}

#[test]
fn test_autopilot_avoids_pinky() {
    let mut map = common::create_test_map();
    let mut player = Player::new(IVec2::new(51, 68), true);
    player.actor.direction = Direction::Right;
    player.set_next_direction(Direction::Right);

    player.update(&mut map, 1, &attract());

    assert_eq!(player.actor.pixel, IVec2::new(52, 68));
    assert_eq!(player.actor.target, IVec2::new(6, -4));
    assert_eq!(player.next_direction, Direction::Up);
    assert_eq!(player.actor.direction, Direction::Up);
}

#[test]
fn test_autopilot_hunts_pinky_when_blinky_is_harmless() {
    let mut map = common::create_test_map();
    let mut player = Player::new(IVec2::new(51, 68), true);
    player.actor.direction = Direction::Right;
    let ctx = AttractContext {
        blinky_harmless: true,
        ..attract()
    };

    player.update(&mut map, 1, &ctx);

    assert_eq!(player.actor.direction, Direction::Down);
}

#[test]
fn test_reset() {
    let mut player = Player::new(IVec2::new(112, 212), false);
    player.energized = true;
    player.eat_pause = 2;
    player.actor.pixel = IVec2::new(12, 36);

    player.reset();

    assert_eq!(player.actor.pixel, IVec2::new(112, 212));
    assert_eq!(player.actor.direction, Direction::Left);
    assert_that(&player.energized).is_false();
    assert_that(&player.eat_pause).is_equal_to(0);
}
