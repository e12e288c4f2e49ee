use std::f64::consts::PI;

use nalgebra::{DVector, Vector3};

use crate::config::GliderConfig;

/// Combined drag parameter per sample: profile drag plus induced drag,
/// the latter inversely scaled by relative speed,
/// d = 0.5 * A * |v_r| * c_Dp + 2 |c|^2 / (pi * AR * A * |v_r|).
///
/// Relative speed must be strictly positive; the pipeline rejects
/// singular airspeeds before this is reached.
pub fn drag_parameter(
    rel_velocities: &[Vector3<f64>],
    circulations: &[Vector3<f64>],
    config: &GliderConfig,
) -> DVector<f64> {
    let area = config.wing_area;
    DVector::from_iterator(
        rel_velocities.len(),
        rel_velocities
            .iter()
            .zip(circulations.iter())
            .map(|(v_r, c)| {
                let speed = v_r.norm();
                0.5 * area * speed * config.c_Dp
                    + 2.0 * c.norm_squared() / (PI * config.aspect_ratio * area * speed)
            }),
    )
}

/// Power removed by drag per sample, -rho * d * |v_r|^2. Negative by
/// convention: dissipation always drains energy.
pub fn dissipated_power(
    rel_velocities: &[Vector3<f64>],
    drag_param: &DVector<f64>,
    density: f64,
) -> DVector<f64> {
    DVector::from_iterator(
        rel_velocities.len(),
        rel_velocities
            .iter()
            .zip(drag_param.iter())
            .map(|(v_r, d)| -density * d * v_r.norm_squared()),
    )
}
