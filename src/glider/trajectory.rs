use nalgebra::{DVector, Vector3};
use serde::{Deserialize, Serialize};

use crate::utils::constants::{MIN_SAMPLES, SAMPLING_TOLERANCE};
use crate::utils::errors::AnalysisError;

/// A single glider state sample in the NED frame.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GliderState {
    /// Position [m], North-East-Down
    pub position: Vector3<f64>,
    /// Velocity relative to the surrounding air [m/s], NED
    pub rel_velocity: Vector3<f64>,
}

impl GliderState {
    pub fn new(position: Vector3<f64>, rel_velocity: Vector3<f64>) -> Self {
        Self {
            position,
            rel_velocity,
        }
    }

    /// Height above ground. NED is down-positive, so h = -z.
    pub fn height(&self) -> f64 {
        -self.position.z
    }
}

/// An ordered, uniformly time-sampled glider trajectory with its
/// commanded circulation inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trajectory {
    pub times: Vec<f64>,
    pub states: Vec<GliderState>,
    pub inputs: Vec<Vector3<f64>>,
}

impl Trajectory {
    pub fn new(
        times: Vec<f64>,
        states: Vec<GliderState>,
        inputs: Vec<Vector3<f64>>,
    ) -> Result<Self, AnalysisError> {
        if times.len() != states.len() || times.len() != inputs.len() {
            return Err(AnalysisError::ShapeMismatch(format!(
                "{} times, {} states, {} inputs",
                times.len(),
                states.len(),
                inputs.len()
            )));
        }
        Ok(Self {
            times,
            states,
            inputs,
        })
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// The uniform sampling step. Fails if there are too few samples for
    /// the derivative stencil or if the time grid is not uniform.
    pub fn dt(&self) -> Result<f64, AnalysisError> {
        if self.len() < MIN_SAMPLES {
            return Err(AnalysisError::InsufficientSamples { got: self.len() });
        }
        let expected = self.times[1] - self.times[0];
        for (index, window) in self.times.windows(2).enumerate() {
            let step = window[1] - window[0];
            if (step - expected).abs() > SAMPLING_TOLERANCE * expected.abs().max(1.0) {
                return Err(AnalysisError::NonUniformSampling {
                    index,
                    step,
                    expected,
                });
            }
        }
        Ok(expected)
    }

    /// Height series, h = -z per sample.
    pub fn heights(&self) -> DVector<f64> {
        DVector::from_iterator(self.len(), self.states.iter().map(GliderState::height))
    }

    /// Relative-velocity series.
    pub fn rel_velocities(&self) -> Vec<Vector3<f64>> {
        self.states.iter().map(|s| s.rel_velocity).collect()
    }
}
