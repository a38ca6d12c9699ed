// Snapshot-sequence driver: seeds step 0 with the initial charges and
// advances the integrator a fixed number of times, producing one
// independently owned snapshot per timestep.

use ultraviolet::DVec3;

use crate::charge::Charge;
use crate::error::{Result, SimError};
use crate::integrator;

/// A completed run: `snapshots[t][i]` is particle `i` at timestep `t`.
/// Indices are aligned across snapshots and the snapshot count is fixed at
/// construction.
#[derive(Clone, Debug)]
pub struct Simulation {
    pub snapshots: Vec<Vec<Charge>>,
    pub dt: f64,
    pub width: f64,
}

/// True when `pos` lies outside `[0, width]` on any axis.
pub fn out_of_range(pos: DVec3, width: f64) -> bool {
    [pos.x, pos.y, pos.z]
        .iter()
        .any(|&c| c < 0.0 || c > width)
}

/// Runs the simulation for exactly `snapshot_count` snapshots, snapshot 0
/// being the initial charges. Deterministic given its inputs; randomness
/// only ever enters through the initializer.
///
/// Every snapshot is checked for hard containment in `[0, width]^3` and a
/// violation aborts the run, since the single-step wraparound cannot
/// guarantee containment for extreme overshoots.
pub fn simulate(
    snapshot_count: usize,
    dt: f64,
    simulation_width: f64,
    initial: Vec<Charge>,
) -> Result<Simulation> {
    let mut snapshots = Vec::with_capacity(snapshot_count);
    if snapshot_count == 0 {
        return Ok(Simulation {
            snapshots,
            dt,
            width: simulation_width,
        });
    }

    check_containment(&initial, 0, simulation_width)?;
    snapshots.push(initial);

    for step in 1..snapshot_count {
        log::debug!("step {}", step);
        let next = integrator::step(&snapshots[step - 1], dt, simulation_width)?;
        check_containment(&next, step, simulation_width)?;
        snapshots.push(next);
    }

    Ok(Simulation {
        snapshots,
        dt,
        width: simulation_width,
    })
}

fn check_containment(snapshot: &[Charge], step: usize, width: f64) -> Result<()> {
    match snapshot.iter().position(|c| out_of_range(c.pos, width)) {
        Some(index) => Err(SimError::OutOfBounds { step, index }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charge::initialize_random_charges;
    use crate::config;

    fn seeded_population(seed: u64) -> Vec<Charge> {
        let mut rng = fastrand::Rng::with_seed(seed);
        initialize_random_charges(2, 20, 300.0, 300.0, 300.0, (-1.0, 1.0), (1.0, 1.0), &mut rng)
    }

    #[test]
    fn snapshot_count_is_exact() {
        let sim = simulate(25, 1.0, 300.0, seeded_population(3)).unwrap();
        assert_eq!(sim.snapshots.len(), 25);
        let empty = simulate(0, 1.0, 300.0, Vec::new()).unwrap();
        assert!(empty.snapshots.is_empty());
    }

    #[test]
    fn snapshot_zero_is_the_initial_condition() {
        let initial = seeded_population(9);
        let sim = simulate(5, 1.0, 300.0, initial.clone()).unwrap();
        assert_eq!(sim.snapshots[0], initial);
    }

    #[test]
    fn stepping_is_bit_identical_across_runs() {
        let initial = seeded_population(11);
        let a = simulate(40, 1.0, 300.0, initial.clone()).unwrap();
        let b = simulate(40, 1.0, 300.0, initial).unwrap();
        assert_eq!(a.snapshots, b.snapshots);
    }

    #[test]
    fn fixed_charges_never_move() {
        let initial = seeded_population(5);
        let sim = simulate(30, 1.0, 300.0, initial).unwrap();
        for t in 1..sim.snapshots.len() {
            for (i, c) in sim.snapshots[t].iter().enumerate() {
                if c.fixed {
                    assert_eq!(
                        *c, sim.snapshots[0][i],
                        "fixed charge {i} changed at step {t}"
                    );
                }
            }
        }
    }

    #[test]
    fn free_charges_respect_the_speed_cap() {
        let initial = seeded_population(13);
        let sim = simulate(30, 1.0, 300.0, initial).unwrap();
        for snapshot in &sim.snapshots {
            for c in snapshot {
                assert!(c.vel.mag() <= config::MAX_SPEED + 1e-9);
            }
        }
    }

    #[test]
    fn all_positions_stay_contained() {
        let initial = seeded_population(17);
        let sim = simulate(50, 1.0, 300.0, initial).unwrap();
        for snapshot in &sim.snapshots {
            for c in snapshot {
                assert!(!out_of_range(c.pos, 300.0));
            }
        }
    }

    #[test]
    fn two_fixed_charges_are_inert() {
        let mut rng = fastrand::Rng::with_seed(21);
        let initial =
            initialize_random_charges(2, 0, 100.0, 100.0, 100.0, (-1.0, 1.0), (1.0, 1.0), &mut rng);
        assert_eq!(initial.len(), 2);
        let sim = simulate(10, 1.0, 100.0, initial.clone()).unwrap();
        for snapshot in &sim.snapshots {
            assert_eq!(*snapshot, initial);
        }
    }

    #[test]
    fn out_of_range_initial_condition_is_fatal() {
        let stray = Charge::new(DVec3::new(150.0, 10.0, 10.0), 1.0, 1.0, false);
        let err = simulate(5, 1.0, 100.0, vec![stray]).unwrap_err();
        assert!(matches!(err, SimError::OutOfBounds { step: 0, index: 0 }));
    }
}
