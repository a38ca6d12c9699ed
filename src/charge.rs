// Defines the Charge struct (position, velocity, acceleration, charge, mass, radius, fixed)
// and the randomized-population factory that seeds a simulation.

use ultraviolet::DVec3;

use crate::config;

/// One point particle. Fixed charges act as stationary field sources and
/// are never integrated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Charge {
    pub pos: DVec3,
    pub vel: DVec3,
    pub acc: DVec3,
    pub charge: f64,
    pub mass: f64,
    pub radius: f64,
    pub fixed: bool,
}

impl Charge {
    pub fn new(pos: DVec3, charge: f64, mass: f64, fixed: bool) -> Self {
        Self {
            pos,
            vel: DVec3::zero(),
            acc: DVec3::zero(),
            charge,
            mass,
            radius: config::DEFAULT_RADIUS,
            fixed,
        }
    }

    /// True when the two charges' radii overlap.
    pub fn overlaps(&self, other: &Charge) -> bool {
        self.radius + other.radius > distance(self.pos, other.pos)
    }
}

/// Euclidean distance between two points.
pub fn distance(p1: DVec3, p2: DVec3) -> f64 {
    (p1 - p2).mag()
}

/// Uniform random f64 in [lower, upper].
fn random_in_interval(rng: &mut fastrand::Rng, lower: f64, upper: f64) -> f64 {
    rng.f64() * (upper - lower) + lower
}

/// Produces `num_fixed + num_free` charges with uniformly random positions
/// in `[0, width) x [0, height) x [0, depth)`, charge and mass drawn from the
/// given bounds, zero initial velocity/acceleration, and radius 1.
///
/// Fixed charges occupy the first `num_fixed` slots; the order is stable
/// because later snapshots address particles by index.
pub fn initialize_random_charges(
    num_fixed: usize,
    num_free: usize,
    width: f64,
    height: f64,
    depth: f64,
    charge_bounds: (f64, f64),
    mass_bounds: (f64, f64),
    rng: &mut fastrand::Rng,
) -> Vec<Charge> {
    let total = num_fixed + num_free;
    let mut charges = Vec::with_capacity(total);
    for i in 0..total {
        let pos = DVec3::new(
            rng.f64() * width,
            rng.f64() * height,
            rng.f64() * depth,
        );
        let q = random_in_interval(rng, charge_bounds.0, charge_bounds.1);
        let m = random_in_interval(rng, mass_bounds.0, mass_bounds.1);
        charges.push(Charge::new(pos, q, m, i < num_fixed));
    }
    charges
}
