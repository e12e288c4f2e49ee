use nalgebra::{DVector, Vector3};

use crate::environment::WindModel;

/// NED wind vector per trajectory sample.
pub fn wind_vectors(wind: &dyn WindModel, heights: &DVector<f64>) -> Vec<Vector3<f64>> {
    heights.iter().map(|&h| wind.wind_vector(h)).collect()
}

/// NED wind-acceleration vector per sample, from the explicit total time
/// derivative of the wind field.
pub fn wind_time_derivatives(
    wind: &dyn WindModel,
    heights: &DVector<f64>,
    height_rates: &DVector<f64>,
) -> Vec<Vector3<f64>> {
    heights
        .iter()
        .zip(height_rates.iter())
        .map(|(&h, &h_dot)| Vector3::new(-wind.wind_time_derivative(h, h_dot), 0.0, 0.0))
        .collect()
}

/// Absolute (inertial) velocity, v = v_r + w.
pub fn absolute_velocities(
    rel_velocities: &[Vector3<f64>],
    winds: &[Vector3<f64>],
) -> Vec<Vector3<f64>> {
    rel_velocities
        .iter()
        .zip(winds.iter())
        .map(|(v_r, w)| v_r + w)
        .collect()
}

/// Inertial height rate per sample. NED is down-positive, so h_dot = -v_z.
pub fn height_rates(velocities: &[Vector3<f64>]) -> DVector<f64> {
    DVector::from_iterator(velocities.len(), velocities.iter().map(|v| -v.z))
}
