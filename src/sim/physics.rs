//! Ship kinematics
//!
//! Directional input does not move the ship directly; it nudges a bounded
//! velocity that decays when the key is released. The inertial, slightly
//! floaty feel is deliberate.

use crate::consts::{SHIP_ACCELERATION, SHIP_MAX_SPEED, SHIP_SPEED_DECAY, SHIP_SPEED_EPSILON};

/// Advance one axis of ship speed by one tick of input.
///
/// A held direction adds a fixed acceleration step, clamped to the
/// maximum magnitude (the clamp boundary itself is reachable). With no
/// direction, the speed halves each tick and snaps to zero below a small
/// epsilon, so it converges without oscillating.
fn step(speed: f32, direction: i8) -> f32 {
    if direction == 0 {
        let damped = speed * SHIP_SPEED_DECAY;
        if damped.abs() < SHIP_SPEED_EPSILON {
            0.0
        } else {
            damped
        }
    } else {
        (speed + direction.signum() as f32 * SHIP_ACCELERATION)
            .clamp(-SHIP_MAX_SPEED, SHIP_MAX_SPEED)
    }
}

/// Convert one tick of directional input into new (row, column) speeds.
/// Each direction is -1, 0 or +1.
pub fn update_speed(
    row_speed: f32,
    column_speed: f32,
    rows_direction: i8,
    columns_direction: i8,
) -> (f32, f32) {
    (
        step(row_speed, rows_direction),
        step(column_speed, columns_direction),
    )
}
