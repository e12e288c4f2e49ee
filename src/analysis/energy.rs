use nalgebra::{DVector, Vector3};

/// Kinetic energy per sample, 0.5 * m * |v|^2. Row-wise squared norms,
/// never the N x N Gram matrix.
pub fn kinetic_energy(velocities: &[Vector3<f64>], mass: f64) -> DVector<f64> {
    DVector::from_iterator(
        velocities.len(),
        velocities.iter().map(|v| 0.5 * mass * v.norm_squared()),
    )
}

/// Potential energy per sample, m * g * h.
pub fn potential_energy(heights: &DVector<f64>, mass: f64, gravity: f64) -> DVector<f64> {
    heights.map(|h| mass * gravity * h)
}
