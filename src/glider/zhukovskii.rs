use nalgebra::Vector3;

use crate::environment::WindModel;
use crate::utils::constants::MIN_AIRSPEED_THRESHOLD;
use crate::utils::math::{flight_path_angle, heading_from_velocity};

/// Per-sample aerodynamic quantities derived from relative velocity and
/// commanded circulation. Angles are radians, NED frame.
pub trait AeroModel: Send + Sync {
    fn bank_angle(&self, rel_velocity: &Vector3<f64>, circulation: &Vector3<f64>) -> f64;
    fn rel_flight_path_angle(&self, rel_velocity: &Vector3<f64>) -> f64;
    fn heading(&self, height: f64, rel_velocity: &Vector3<f64>) -> f64;
    fn lift_coeff(&self, rel_velocity: &Vector3<f64>, circulation: &Vector3<f64>, area: f64)
        -> f64;
    fn load_factor(
        &self,
        rel_velocity: &Vector3<f64>,
        circulation: &Vector3<f64>,
        mass: f64,
        gravity: f64,
        density: f64,
    ) -> f64;
}

/// Circulation-controlled glider: the lift force is rho * (c x v_r), so
/// every aerodynamic quantity follows from the circulation vector and the
/// relative velocity alone.
pub struct ZhukovskiiGlider {
    wind: Box<dyn WindModel>,
}

impl ZhukovskiiGlider {
    pub fn new(wind: Box<dyn WindModel>) -> Self {
        Self { wind }
    }
}

impl AeroModel for ZhukovskiiGlider {
    /// Tilt of the lift vector out of the vertical plane through the
    /// relative velocity. Zero when lift lies in that plane.
    fn bank_angle(&self, rel_velocity: &Vector3<f64>, circulation: &Vector3<f64>) -> f64 {
        let airspeed = rel_velocity.norm();
        if airspeed < MIN_AIRSPEED_THRESHOLD {
            return 0.0;
        }
        let v_hat = rel_velocity / airspeed;

        // NED up
        let n_up = Vector3::new(0.0, 0.0, -1.0);
        let e_lat = v_hat.cross(&n_up);
        if e_lat.norm() < 1e-9 {
            // Vertical flight, bank undefined
            return 0.0;
        }
        let e_lat = e_lat.normalize();
        let e_up = e_lat.cross(&v_hat);

        let lift = circulation.cross(rel_velocity);
        lift.dot(&e_lat).atan2(lift.dot(&e_up))
    }

    fn rel_flight_path_angle(&self, rel_velocity: &Vector3<f64>) -> f64 {
        flight_path_angle(rel_velocity)
    }

    /// Heading of the absolute velocity, wind included.
    fn heading(&self, height: f64, rel_velocity: &Vector3<f64>) -> f64 {
        let velocity = rel_velocity + self.wind.wind_vector(height);
        heading_from_velocity(&velocity)
    }

    fn lift_coeff(
        &self,
        rel_velocity: &Vector3<f64>,
        circulation: &Vector3<f64>,
        area: f64,
    ) -> f64 {
        let airspeed = rel_velocity.norm();
        if airspeed < MIN_AIRSPEED_THRESHOLD {
            return 0.0;
        }
        2.0 * circulation.norm() / (area * airspeed)
    }

    fn load_factor(
        &self,
        rel_velocity: &Vector3<f64>,
        circulation: &Vector3<f64>,
        mass: f64,
        gravity: f64,
        density: f64,
    ) -> f64 {
        density * circulation.cross(rel_velocity).norm() / (mass * gravity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::{ConstantWind, LinearWind};
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    fn calm_glider() -> ZhukovskiiGlider {
        ZhukovskiiGlider::new(Box::new(ConstantWind::calm()))
    }

    #[test]
    fn test_bank_angle_zero_for_level_lift() {
        let glider = calm_glider();
        let v_r = Vector3::new(15.0, 0.0, 0.0);
        // Lift (0, gamma, 0) x v_r points straight up
        let c = Vector3::new(0.0, 2.0, 0.0);
        assert_relative_eq!(glider.bank_angle(&v_r, &c), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_bank_angle_sign_for_tilted_lift() {
        let glider = calm_glider();
        let v_r = Vector3::new(15.0, 0.0, 0.0);
        let phi: f64 = 0.3;
        // Circulation tilted about the velocity axis tilts the lift by
        // the same angle
        let c = Vector3::new(0.0, 2.0 * phi.cos(), 2.0 * phi.sin());
        assert_relative_eq!(glider.bank_angle(&v_r, &c).abs(), phi, epsilon = 1e-12);
    }

    #[test]
    fn test_flight_path_angle_descent() {
        let glider = calm_glider();
        // NED: positive z-velocity descends
        let v_r = Vector3::new(10.0, 0.0, 10.0);
        assert_relative_eq!(
            glider.rel_flight_path_angle(&v_r),
            -PI / 4.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_heading_includes_wind() {
        let glider = ZhukovskiiGlider::new(Box::new(LinearWind::new(10.0, 10.0)));
        // Relative velocity east, wind (-10, 0, 0) at h=10 pushes south
        let v_r = Vector3::new(0.0, 10.0, 0.0);
        let psi = glider.heading(10.0, &v_r);
        assert_relative_eq!(psi, (3.0 * PI / 4.0), epsilon = 1e-12);
    }

    #[test]
    fn test_lift_coeff_scaling() {
        let glider = calm_glider();
        let v_r = Vector3::new(15.0, 0.0, 0.0);
        let c = Vector3::new(0.0, 3.0, 0.0);
        let area = 0.65;
        assert_relative_eq!(
            glider.lift_coeff(&v_r, &c, area),
            2.0 * 3.0 / (area * 15.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_unit_load_factor_in_level_flight() {
        let glider = calm_glider();
        let (mass, gravity, density) = (8.5, 9.81, 1.255);
        let speed = 15.0;
        let v_r = Vector3::new(speed, 0.0, 0.0);
        // Circulation that makes lift exactly cancel weight
        let gamma = mass * gravity / (density * speed);
        let c = Vector3::new(0.0, gamma, 0.0);
        assert_relative_eq!(
            glider.load_factor(&v_r, &c, mass, gravity, density),
            1.0,
            epsilon = 1e-12
        );
    }
}
