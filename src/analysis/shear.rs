use nalgebra::{DVector, Vector3};

use super::operators::FiniteDifference;

/// Passive dynamic-soaring power: m * D (v . w).
///
/// The dot-product series couples the aircraft's motion to the spatial
/// wind shear; differentiating it in time yields the power extracted
/// without exploiting any explicit time variation of the wind field.
pub fn passive_shear_power(
    velocities: &[Vector3<f64>],
    winds: &[Vector3<f64>],
    operator: &FiniteDifference,
    mass: f64,
) -> DVector<f64> {
    let v_dot_w = DVector::from_iterator(
        velocities.len(),
        velocities
            .iter()
            .zip(winds.iter())
            .map(|(v, w)| v.dot(w)),
    );
    mass * operator.apply(&v_dot_w)
}

/// Active dynamic-soaring power: -m * (v . dw/dt), the fraction of the
/// shear power attributable to the explicit time derivative of the wind
/// at the aircraft's height and height rate.
pub fn active_shear_power(
    velocities: &[Vector3<f64>],
    wind_derivatives: &[Vector3<f64>],
    mass: f64,
) -> DVector<f64> {
    DVector::from_iterator(
        velocities.len(),
        velocities
            .iter()
            .zip(wind_derivatives.iter())
            .map(|(v, ddt_w)| -mass * v.dot(ddt_w)),
    )
}
