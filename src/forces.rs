// Pairwise Coulomb force and aggregate net-force computation, including the
// stabilization heuristics (close-range penalty, magnitude normalization)
// that keep the periodic volume numerically well-behaved.

use ultraviolet::DVec3;

use crate::charge::{distance, Charge};
use crate::config;
use crate::error::{Result, SimError};

/// Force exerted on `a` by `b`: magnitude `k * qa * qb / d^2`, directed
/// along the vector from `b` to `a`, decomposed per axis as `F * delta / d`.
///
/// Callers must guarantee the positions are distinct; `net_force` checks
/// the separation before calling in here.
pub fn pair_force(a: &Charge, b: &Charge) -> DVec3 {
    let d = distance(a.pos, b.pos);
    let f = config::COULOMB_CONSTANT * a.charge * b.charge / (d * d);
    let delta = a.pos - b.pos;
    delta * (f / d)
}

/// Sums the pair forces on `charges[target]` from every other charge, adds
/// the close-range penalty for pairs nearer than `CLOSE_RANGE`, and
/// rescales the result to the fixed net-force magnitude.
///
/// Self-exclusion is by index, so two charges sharing identical state are
/// still treated as distinct particles.
pub fn net_force(target: usize, charges: &[Charge]) -> Result<DVec3> {
    let c = &charges[target];
    let mut force = DVec3::zero();
    for (i, other) in charges.iter().enumerate() {
        if i == target {
            continue;
        }
        let d = distance(c.pos, other.pos);
        if d == 0.0 {
            return Err(SimError::DegeneratePair { a: target, b: i });
        }
        force += pair_force(c, other);
        // Extra repulsion when a pair gets close enough to jump on top of
        // each other across the periodic boundary.
        if d < config::CLOSE_RANGE {
            let penalty = config::CLOSE_PENALTY / d;
            force += DVec3::new(penalty, penalty, penalty);
        }
    }
    Ok(normalize_net_force(force))
}

/// Rescales the summed force so its magnitude is exactly
/// `NET_FORCE_MAGNITUDE`, preserving only its direction. A zero vector is
/// returned unchanged rather than dividing by zero.
///
/// Note this normalizes small forces up as well as large forces down; it is
/// a stability clamp, not a physical cap. Kept as its own function so the
/// policy can change without touching the summation or the integrator.
pub fn normalize_net_force(force: DVec3) -> DVec3 {
    let mag = force.mag();
    if mag == 0.0 {
        return force;
    }
    force * (config::NET_FORCE_MAGNITUDE / mag)
}
