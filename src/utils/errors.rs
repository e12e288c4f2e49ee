use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("trajectory has {got} samples, the derivative stencil needs at least 4")]
    InsufficientSamples { got: usize },

    #[error(
        "non-uniform sampling: step {step} at index {index} differs from leading step {expected}"
    )]
    NonUniformSampling {
        index: usize,
        step: f64,
        expected: f64,
    },

    #[error("relative airspeed {speed} m/s at sample {index} is singular for the induced-drag term")]
    SingularAirspeed { index: usize, speed: f64 },

    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),
}
