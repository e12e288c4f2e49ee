use rayon::prelude::*;
use serde::Serialize;

use crate::config::GliderConfig;
use crate::glider::{AeroModel, Trajectory};

/// Per-sample aerodynamic quantity series aligned with the trajectory's
/// sample index. Used for constraint-margin inspection, not energy
/// accounting.
#[derive(Debug, Clone, Serialize)]
pub struct GliderQuantities {
    /// Bank angle [rad]
    pub bank_angle: Vec<f64>,
    /// Flight-path angle relative to the air mass [rad]
    pub flight_path_angle: Vec<f64>,
    /// Heading of the absolute velocity [rad]
    pub heading: Vec<f64>,
    /// Lift coefficient
    pub lift_coeff: Vec<f64>,
    /// Load factor
    pub load_factor: Vec<f64>,
}

/// Map every sample through the aerodynamic model. Each sample is
/// independent, so the pass runs in parallel; output order follows the
/// trajectory's sample order.
pub fn extract_quantities(
    model: &dyn AeroModel,
    trajectory: &Trajectory,
    config: &GliderConfig,
) -> GliderQuantities {
    let rows: Vec<[f64; 5]> = trajectory
        .states
        .par_iter()
        .zip(trajectory.inputs.par_iter())
        .map(|(state, circulation)| {
            let v_r = &state.rel_velocity;
            [
                model.bank_angle(v_r, circulation),
                model.rel_flight_path_angle(v_r),
                model.heading(state.height(), v_r),
                model.lift_coeff(v_r, circulation, config.wing_area),
                model.load_factor(
                    v_r,
                    circulation,
                    config.mass,
                    config.gravity,
                    config.air_density,
                ),
            ]
        })
        .collect();

    GliderQuantities {
        bank_angle: rows.iter().map(|r| r[0]).collect(),
        flight_path_angle: rows.iter().map(|r| r[1]).collect(),
        heading: rows.iter().map(|r| r[2]).collect(),
        lift_coeff: rows.iter().map(|r| r[3]).collect(),
        load_factor: rows.iter().map(|r| r[4]).collect(),
    }
}
