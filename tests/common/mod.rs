use nalgebra::Vector3;

use dynsoar::{GliderConfig, GliderState, Trajectory, WindModel};

/// Uniform time grid starting at zero.
pub fn uniform_times(n: usize, dt: f64) -> Vec<f64> {
    (0..n).map(|k| k as f64 * dt).collect()
}

/// Straight, level, constant-airspeed trajectory at a fixed height.
pub fn level_cruise_trajectory(
    n: usize,
    dt: f64,
    height: f64,
    airspeed: f64,
    circulation: Vector3<f64>,
) -> Trajectory {
    let states: Vec<GliderState> = (0..n)
        .map(|k| {
            GliderState::new(
                Vector3::new(airspeed * k as f64 * dt, 0.0, -height),
                Vector3::new(airspeed, 0.0, 0.0),
            )
        })
        .collect();
    Trajectory::new(uniform_times(n, dt), states, vec![circulation; n]).unwrap()
}

/// Integrate the circulation-controlled glider dynamics through a wind
/// field with classical RK4, sampling the state every `dt`. The forces
/// are exactly the ones the analysis models (gravity, lift rho * c x v_r,
/// drag -rho * d * v_r), so the resulting trajectory satisfies the
/// energy-balance identity up to integration error.
pub fn simulate_glider<F>(
    config: &GliderConfig,
    wind: &dyn WindModel,
    position0: Vector3<f64>,
    velocity0: Vector3<f64>,
    circulation: F,
    n: usize,
    dt: f64,
    substeps: usize,
) -> Trajectory
where
    F: Fn(f64) -> Vector3<f64>,
{
    let accel = |t: f64, position: &Vector3<f64>, velocity: &Vector3<f64>| -> Vector3<f64> {
        let height = -position.z;
        let w = wind.wind_vector(height);
        let v_r = velocity - w;
        let speed = v_r.norm();
        let c = circulation(t);
        let d = 0.5 * config.wing_area * speed * config.c_Dp
            + 2.0 * c.norm_squared()
                / (std::f64::consts::PI * config.aspect_ratio * config.wing_area * speed);

        let gravity = Vector3::new(0.0, 0.0, config.gravity);
        let aero = (config.air_density * c.cross(&v_r) - config.air_density * d * v_r)
            / config.mass;
        gravity + aero
    };

    let h = dt / substeps as f64;
    let mut position = position0;
    let mut velocity = velocity0;
    let mut t = 0.0;

    let mut states = Vec::with_capacity(n);
    let mut inputs = Vec::with_capacity(n);
    for _ in 0..n {
        let w = wind.wind_vector(-position.z);
        states.push(GliderState::new(position, velocity - w));
        inputs.push(circulation(t));

        for _ in 0..substeps {
            let k1_p = velocity;
            let k1_v = accel(t, &position, &velocity);

            let k2_p = velocity + 0.5 * h * k1_v;
            let k2_v = accel(
                t + 0.5 * h,
                &(position + 0.5 * h * k1_p),
                &(velocity + 0.5 * h * k1_v),
            );

            let k3_p = velocity + 0.5 * h * k2_v;
            let k3_v = accel(
                t + 0.5 * h,
                &(position + 0.5 * h * k2_p),
                &(velocity + 0.5 * h * k2_v),
            );

            let k4_p = velocity + h * k3_v;
            let k4_v = accel(t + h, &(position + h * k3_p), &(velocity + h * k3_v));

            position += h / 6.0 * (k1_p + 2.0 * k2_p + 2.0 * k3_p + k4_p);
            velocity += h / 6.0 * (k1_v + 2.0 * k2_v + 2.0 * k3_v + k4_v);
            t += h;
        }
    }

    Trajectory::new(uniform_times(n, dt), states, inputs).unwrap()
}
