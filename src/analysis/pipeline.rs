use log::info;
use nalgebra::{DVector, Vector3};
use serde::Serialize;

use crate::config::GliderConfig;
use crate::environment::WindModel;
use crate::glider::Trajectory;
use crate::utils::constants::MIN_AIRSPEED_THRESHOLD;
use crate::utils::errors::AnalysisError;

use super::drag::{dissipated_power, drag_parameter};
use super::energy::{kinetic_energy, potential_energy};
use super::kinematics::{
    absolute_velocities, height_rates, wind_time_derivatives, wind_vectors,
};
use super::operators::{FiniteDifference, Integrator};
use super::shear::{active_shear_power, passive_shear_power};

/// Full energy-budget decomposition of one trajectory.
///
/// Energy series span all N samples; power and cumulative-energy series
/// are trimmed to the `retained` leading samples, uniformly, because the
/// one-sided derivative stencil invalidates the trailing rows.
#[derive(Debug, Clone, Serialize)]
pub struct EnergyReport {
    pub dt: f64,
    pub retained: usize,

    /// Net dynamic-soaring gain: cumulative active shear energy minus
    /// cumulative dissipated energy at the final retained sample [J]
    pub net_gain: f64,

    pub absolute_velocity: Vec<Vector3<f64>>,

    pub kinetic_energy: DVector<f64>,
    pub potential_energy: DVector<f64>,
    pub total_energy: DVector<f64>,

    pub total_power: DVector<f64>,
    pub dissipated_power: DVector<f64>,
    pub passive_power: DVector<f64>,
    pub active_power: DVector<f64>,

    pub dissipated_energy: DVector<f64>,
    pub passive_energy: DVector<f64>,
    pub active_energy: DVector<f64>,
}

/// Decomposes a trajectory's mechanical energy budget against a wind
/// profile: kinetic/potential energy, drag dissipation, and the
/// passive/active dynamic-soaring power split.
pub struct EnergyAnalysis<'a> {
    wind: &'a dyn WindModel,
    config: &'a GliderConfig,
}

impl<'a> EnergyAnalysis<'a> {
    pub fn new(wind: &'a dyn WindModel, config: &'a GliderConfig) -> Self {
        Self { wind, config }
    }

    /// All validation happens before any derived array is computed; there
    /// is no partial result.
    fn validate(&self, trajectory: &Trajectory) -> Result<f64, AnalysisError> {
        let dt = trajectory.dt()?;
        for (index, state) in trajectory.states.iter().enumerate() {
            let speed = state.rel_velocity.norm();
            if speed < MIN_AIRSPEED_THRESHOLD {
                return Err(AnalysisError::SingularAirspeed { index, speed });
            }
        }
        Ok(dt)
    }

    pub fn analyze(&self, trajectory: &Trajectory) -> Result<EnergyReport, AnalysisError> {
        let dt = self.validate(trajectory)?;
        let n = trajectory.len();
        info!("running energy analysis over {} samples, dt = {} s", n, dt);

        let operator = FiniteDifference::new(n, dt)?;
        let integrator = Integrator::new(dt);

        // Derived kinematic series
        let heights = trajectory.heights();
        let rel_velocities = trajectory.rel_velocities();
        let circulations = &trajectory.inputs;

        let winds = wind_vectors(self.wind, &heights);
        let velocity = absolute_velocities(&rel_velocities, &winds);
        let h_rates = height_rates(&velocity);
        let ddt_winds = wind_time_derivatives(self.wind, &heights, &h_rates);

        // Energies
        let e_kin = kinetic_energy(&velocity, self.config.mass);
        let e_pot = potential_energy(&heights, self.config.mass, self.config.gravity);
        let e_tot = &e_kin + &e_pot;

        // Powers
        let d_param = drag_parameter(&rel_velocities, circulations, self.config);
        let p_dissipated =
            dissipated_power(&rel_velocities, &d_param, self.config.air_density);
        let p_total = operator.apply(&e_tot);
        let s_passive = passive_shear_power(&velocity, &winds, &operator, self.config.mass);
        let s_active = active_shear_power(&velocity, &ddt_winds, self.config.mass);

        // Cumulative energies
        let e_dissipated = integrator.integrate(&p_dissipated);
        let e_passive = integrator.integrate(&s_passive);
        let e_active = integrator.integrate(&s_active);

        // The derivative stencil invalidates the trailing rows; trim every
        // power and cumulative series to the same retained length.
        let retained = operator.valid_len();
        let trim = |series: &DVector<f64>| series.rows(0, retained).into_owned();

        let net_gain = e_active[retained - 1] - e_dissipated[retained - 1];

        Ok(EnergyReport {
            dt,
            retained,
            net_gain,
            absolute_velocity: velocity,
            kinetic_energy: e_kin,
            potential_energy: e_pot,
            total_energy: e_tot,
            total_power: trim(&p_total),
            dissipated_power: trim(&p_dissipated),
            passive_power: trim(&s_passive),
            active_power: trim(&s_active),
            dissipated_energy: trim(&e_dissipated),
            passive_energy: trim(&e_passive),
            active_energy: trim(&e_active),
        })
    }
}

/// Convenience entry point: build the trajectory, run the analysis, and
/// return the net soaring gain with the absolute-velocity series.
pub fn analyze_energy(
    times: Vec<f64>,
    states: Vec<crate::glider::GliderState>,
    inputs: Vec<Vector3<f64>>,
    wind: &dyn WindModel,
    config: &GliderConfig,
) -> Result<(f64, Vec<Vector3<f64>>), AnalysisError> {
    let trajectory = Trajectory::new(times, states, inputs)?;
    let report = EnergyAnalysis::new(wind, config).analyze(&trajectory)?;
    Ok((report.net_gain, report.absolute_velocity))
}
