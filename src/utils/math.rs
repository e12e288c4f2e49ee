use nalgebra::Vector3;
use std::f64::consts::PI;

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert radians to degrees
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Calculate the flight path angle from a velocity vector
pub fn flight_path_angle(velocity: &Vector3<f64>) -> f64 {
    -velocity
        .z
        .atan2((velocity.x.powi(2) + velocity.y.powi(2)).sqrt())
}

/// Calculate heading from a velocity vector
pub fn heading_from_velocity(velocity: &Vector3<f64>) -> f64 {
    velocity.y.atan2(velocity.x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_flight_path_angle_level() {
        let v = Vector3::new(15.0, 0.0, 0.0);
        assert_relative_eq!(flight_path_angle(&v), 0.0);
    }

    #[test]
    fn test_flight_path_angle_climb() {
        // NED: negative z-velocity is climbing
        let v = Vector3::new(10.0, 0.0, -10.0);
        assert_relative_eq!(flight_path_angle(&v), PI / 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_heading_east() {
        let v = Vector3::new(0.0, 12.0, 0.0);
        assert_relative_eq!(heading_from_velocity(&v), PI / 2.0, epsilon = 1e-12);
    }
}
