//! Startup diagnostics, not production logic: exercises the transform
//! constructors and one live probe particle against closed-form
//! expectations, printing a verdict per property and a final score.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

use rand::Rng;

use crate::simulation::cartesian_plane::CartesianPlane;
use crate::simulation::matrix::{almost_equal, Matrix, MatrixError};
use crate::simulation::parameters::SimulationParameters;
use crate::simulation::particle::Particle;

const TOTAL_CHECK_COUNT: usize = 7;

pub struct SelfCheckReport {
    pub passed_check_count: usize,
    pub total_check_count: usize,
}

/// Runs all checks against a surface described by `cartesian_plane`; the
/// probe particle is a 4-point polygon spawned at the surface's pixel
/// center, so its center must land on the Cartesian origin.
pub fn run(cartesian_plane: CartesianPlane, random_source: &mut impl Rng) -> SelfCheckReport {
    let mut passed_check_count = 0;

    passed_check_count += report_check(
        "rotation constructor",
        rotation_constructor_matches_closed_form(),
    );
    passed_check_count += report_check(
        "scaling constructor",
        scaling_constructor_matches_closed_form(),
    );
    passed_check_count += report_check(
        "translation constructor",
        translation_constructor_matches_closed_form(),
    );

    let parameters = SimulationParameters::default();
    match Particle::new(
        random_source,
        &parameters,
        cartesian_plane,
        4,
        cartesian_plane.screen_center(),
    ) {
        Ok(mut probe_particle) => {
            passed_check_count += report_check(
                "center mapping to the Cartesian origin",
                particle_starts_alive_at_the_origin(&probe_particle),
            );
            passed_check_count += report_check(
                "quarter-turn rotation",
                quarter_turn_moves_every_vertex(&mut probe_particle),
            );
            passed_check_count += report_check(
                "half scale",
                half_scale_halves_every_vertex(&mut probe_particle),
            );
            passed_check_count += report_check(
                "translation by (10, 5)",
                translation_shifts_every_vertex(&mut probe_particle),
            );
        }
        Err(error) => println!("could not build the probe particle: {error}"),
    }

    println!("score: {passed_check_count} / {TOTAL_CHECK_COUNT}");
    SelfCheckReport {
        passed_check_count,
        total_check_count: TOTAL_CHECK_COUNT,
    }
}

fn report_check(label: &str, passed: bool) -> usize {
    if passed {
        println!("checking the {label}... passed");
        1
    } else {
        println!("checking the {label}... FAILED");
        0
    }
}

fn rotation_constructor_matches_closed_form() -> bool {
    let rotation = Matrix::rotation(FRAC_PI_4);
    rotation.row_count() == 2
        && rotation.column_count() == 2
        && almost_equal(rotation[(0, 0)], FRAC_PI_4.cos())
        && almost_equal(rotation[(0, 1)], -FRAC_PI_4.sin())
        && almost_equal(rotation[(1, 0)], FRAC_PI_4.sin())
        && almost_equal(rotation[(1, 1)], FRAC_PI_4.cos())
}

fn scaling_constructor_matches_closed_form() -> bool {
    let scaling = Matrix::scaling(1.5);
    scaling.row_count() == 2
        && scaling.column_count() == 2
        && almost_equal(scaling[(0, 0)], 1.5)
        && almost_equal(scaling[(0, 1)], 0.0)
        && almost_equal(scaling[(1, 0)], 0.0)
        && almost_equal(scaling[(1, 1)], 1.5)
}

fn translation_constructor_matches_closed_form() -> bool {
    let translation = Matrix::translation(5.0, -5.0, 3);
    let mut expected = Matrix::new(2, 3);
    for column in 0..3 {
        if expected.set_entry(0, column, 5.0).is_err()
            || expected.set_entry(1, column, -5.0).is_err()
        {
            return false;
        }
    }
    translation == expected
}

fn particle_starts_alive_at_the_origin(probe_particle: &Particle) -> bool {
    let center = probe_particle.center_coordinate();
    probe_particle.time_to_live_seconds() > 0.0 && center.x == 0.0 && center.y == 0.0
}

fn vertex_at(positions: &Matrix, column: usize) -> Result<(f64, f64), MatrixError> {
    Ok((positions.entry(0, column)?, positions.entry(1, column)?))
}

fn quarter_turn_moves_every_vertex(probe_particle: &mut Particle) -> bool {
    let initial_positions = probe_particle.vertex_positions().clone();
    if probe_particle.rotate(FRAC_PI_2).is_err() {
        return false;
    }
    (0..initial_positions.column_count()).all(|column| {
        match (
            vertex_at(&initial_positions, column),
            vertex_at(probe_particle.vertex_positions(), column),
        ) {
            (Ok((initial_x, initial_y)), Ok((current_x, current_y))) => {
                almost_equal(current_x, -initial_y) && almost_equal(current_y, initial_x)
            }
            _ => false,
        }
    })
}

fn half_scale_halves_every_vertex(probe_particle: &mut Particle) -> bool {
    let initial_positions = probe_particle.vertex_positions().clone();
    if probe_particle.scale(0.5).is_err() {
        return false;
    }
    (0..initial_positions.column_count()).all(|column| {
        match (
            vertex_at(&initial_positions, column),
            vertex_at(probe_particle.vertex_positions(), column),
        ) {
            (Ok((initial_x, initial_y)), Ok((current_x, current_y))) => {
                almost_equal(current_x, 0.5 * initial_x) && almost_equal(current_y, 0.5 * initial_y)
            }
            _ => false,
        }
    })
}

fn translation_shifts_every_vertex(probe_particle: &mut Particle) -> bool {
    let initial_positions = probe_particle.vertex_positions().clone();
    if probe_particle.translate(10.0, 5.0).is_err() {
        return false;
    }
    (0..initial_positions.column_count()).all(|column| {
        match (
            vertex_at(&initial_positions, column),
            vertex_at(probe_particle.vertex_positions(), column),
        ) {
            (Ok((initial_x, initial_y)), Ok((current_x, current_y))) => {
                almost_equal(current_x, initial_x + 10.0) && almost_equal(current_y, initial_y + 5.0)
            }
            _ => false,
        }
    })
}
