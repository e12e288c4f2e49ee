mod drag;
mod energy;
mod kinematics;
mod operators;
mod pipeline;
mod quantities;
mod shear;

pub use drag::{dissipated_power, drag_parameter};
pub use energy::{kinetic_energy, potential_energy};
pub use kinematics::{absolute_velocities, height_rates, wind_time_derivatives, wind_vectors};
pub use operators::{FiniteDifference, Integrator};
pub use pipeline::{analyze_energy, EnergyAnalysis, EnergyReport};
pub use quantities::{extract_quantities, GliderQuantities};
pub use shear::{active_shear_power, passive_shear_power};
