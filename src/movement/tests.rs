use bevy::prelude::*;

use super::apply_motion;
use crate::ai::Motion;

#[test]
fn test_empty_motion_keeps_velocity() {
    let mut velocity = Vec2::new(1.0, -2.0);
    apply_motion(&Motion::default(), Vec2::ZERO, 0.1, &mut velocity);
    assert_eq!(velocity, Vec2::new(1.0, -2.0));
}

#[test]
fn test_halt_keeps_vertical_velocity() {
    let mut velocity = Vec2::new(3.0, -4.0);
    apply_motion(&Motion::halt(), Vec2::ZERO, 0.1, &mut velocity);
    assert_eq!(velocity, Vec2::new(0.0, -4.0));
}

#[test]
fn test_impulse_added_after_horizontal_write() {
    let mut velocity = Vec2::new(5.0, 1.0);
    let motion = Motion {
        velocity_x: Some(0.0),
        impulse: Some(Vec2::new(-2.0, 0.5)),
        place_at: None,
    };
    apply_motion(&motion, Vec2::ZERO, 0.1, &mut velocity);
    assert_eq!(velocity, Vec2::new(-2.0, 1.5));
}

#[test]
fn test_place_at_reaches_point_in_one_step() {
    let mut velocity = Vec2::ZERO;
    let motion = Motion {
        place_at: Some(Vec2::new(2.0, 1.0)),
        ..default()
    };
    apply_motion(&motion, Vec2::new(1.0, 1.0), 0.5, &mut velocity);
    assert_eq!(velocity, Vec2::new(2.0, 0.0));
}

#[test]
fn test_place_at_ignored_without_time() {
    let mut velocity = Vec2::new(1.0, 1.0);
    let motion = Motion {
        place_at: Some(Vec2::new(9.0, 9.0)),
        ..default()
    };
    apply_motion(&motion, Vec2::ZERO, 0.0, &mut velocity);
    assert_eq!(velocity, Vec2::new(1.0, 1.0));
}
