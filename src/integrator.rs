// One timestep of the simulation: acceleration from the frozen previous
// snapshot, capped velocity, kinematic position update, periodic wraparound.

use ultraviolet::DVec3;

use crate::charge::Charge;
use crate::config;
use crate::error::Result;
use crate::forces;

/// Computes the next snapshot from `prev`. Fixed charges are copied through
/// unchanged; every free charge gets a full kinematic update driven by the
/// net force evaluated against the entire previous snapshot.
///
/// The position update uses the new velocity and acceleration, not a
/// leapfrog half-step.
pub fn step(prev: &[Charge], dt: f64, simulation_width: f64) -> Result<Vec<Charge>> {
    let mut next = prev.to_vec();
    for i in 0..next.len() {
        if next[i].fixed {
            continue;
        }
        let force = forces::net_force(i, prev)?;
        let acc = force / prev[i].mass;
        let vel = cap_speed(prev[i].vel + acc * dt);
        let pos = wrap(
            prev[i].pos + vel * dt + acc * (0.5 * dt * dt),
            simulation_width,
        );
        next[i].acc = acc;
        next[i].vel = vel;
        next[i].pos = pos;
    }
    Ok(next)
}

/// Rescales `vel` to magnitude `MAX_SPEED` when it exceeds the cap,
/// preserving direction.
fn cap_speed(vel: DVec3) -> DVec3 {
    let speed = vel.mag();
    if speed > config::MAX_SPEED {
        vel * (config::MAX_SPEED / speed)
    } else {
        vel
    }
}

/// Single-step periodic wraparound, one add or subtract per axis. An
/// overshoot beyond a full width stays out of range and trips the driver's
/// containment check instead of looping.
pub fn wrap(mut pos: DVec3, simulation_width: f64) -> DVec3 {
    for c in [&mut pos.x, &mut pos.y, &mut pos.z] {
        if *c < 0.0 {
            *c += simulation_width;
        } else if *c > simulation_width {
            *c -= simulation_width;
        }
    }
    pos
}
