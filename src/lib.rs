mod analysis;
mod config;
mod environment;
mod glider;
mod utils;

pub use analysis::{
    absolute_velocities, active_shear_power, analyze_energy, dissipated_power, drag_parameter,
    extract_quantities, height_rates, kinetic_energy, passive_shear_power, potential_energy,
    wind_time_derivatives, wind_vectors, EnergyAnalysis, EnergyReport, FiniteDifference,
    GliderQuantities, Integrator,
};
pub use config::{ConfigError, GliderConfig, WindConfig};
pub use environment::{
    create_wind_model, ConstantWind, ExpWind, LinearWind, LogWind, LogisticWind, WindModel,
};
pub use glider::{AeroModel, GliderState, Trajectory, ZhukovskiiGlider};
pub use utils::errors::AnalysisError;
pub use utils::math::{deg_to_rad, flight_path_angle, heading_from_velocity, rad_to_deg};
