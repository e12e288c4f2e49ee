use nalgebra::Vector3;

use crate::config::WindConfig;

/// Horizontal wind field, height-dependent only.
///
/// Implementors supply the scalar wind-speed magnitude and its spatial
/// gradient; the total time derivative along a trajectory and the NED wind
/// vector follow from those. Wind blows along North, so the NED vector is
/// (-w, 0, 0).
pub trait WindModel: Send + Sync {
    /// Wind-speed magnitude at a given height [m/s]
    fn wind_speed(&self, height: f64) -> f64;

    /// Spatial derivative dw/dh at a given height [1/s]
    fn wind_gradient(&self, height: f64) -> f64;

    /// Total time derivative of wind speed along a trajectory,
    /// dw/dt = (dw/dh)·ḣ
    fn wind_time_derivative(&self, height: f64, height_rate: f64) -> f64 {
        self.wind_gradient(height) * height_rate
    }

    /// Wind vector in the NED frame
    fn wind_vector(&self, height: f64) -> Vector3<f64> {
        Vector3::new(-self.wind_speed(height), 0.0, 0.0)
    }
}

/// Uniform wind, no shear.
#[derive(Debug, Clone, Copy)]
pub struct ConstantWind {
    speed: f64,
}

impl ConstantWind {
    pub fn new(speed: f64) -> Self {
        Self { speed }
    }

    pub fn calm() -> Self {
        Self { speed: 0.0 }
    }
}

impl WindModel for ConstantWind {
    fn wind_speed(&self, _height: f64) -> f64 {
        self.speed
    }

    fn wind_gradient(&self, _height: f64) -> f64 {
        0.0
    }
}

/// Wind growing linearly with height, zero at ground level.
#[derive(Debug, Clone, Copy)]
pub struct LinearWind {
    ref_speed: f64,
    ref_height: f64,
}

impl LinearWind {
    pub fn new(ref_speed: f64, ref_height: f64) -> Self {
        Self {
            ref_speed,
            ref_height,
        }
    }
}

impl WindModel for LinearWind {
    fn wind_speed(&self, height: f64) -> f64 {
        if height <= 0.0 {
            0.0
        } else {
            self.ref_speed * height / self.ref_height
        }
    }

    fn wind_gradient(&self, height: f64) -> f64 {
        if height <= 0.0 {
            0.0
        } else {
            self.ref_speed / self.ref_height
        }
    }
}

/// Logarithmic boundary-layer profile with surface roughness length.
#[derive(Debug, Clone, Copy)]
pub struct LogWind {
    ref_speed: f64,
    ref_height: f64,
    roughness: f64,
}

impl LogWind {
    pub fn new(ref_speed: f64, ref_height: f64, roughness: f64) -> Self {
        Self {
            ref_speed,
            ref_height,
            roughness,
        }
    }
}

impl WindModel for LogWind {
    fn wind_speed(&self, height: f64) -> f64 {
        if height <= self.roughness {
            0.0
        } else {
            self.ref_speed * (height / self.roughness).ln()
                / (self.ref_height / self.roughness).ln()
        }
    }

    fn wind_gradient(&self, height: f64) -> f64 {
        if height <= self.roughness {
            0.0
        } else {
            self.ref_speed / (height * (self.ref_height / self.roughness).ln())
        }
    }
}

/// Exponential profile saturating towards the reference speed.
#[derive(Debug, Clone, Copy)]
pub struct ExpWind {
    ref_speed: f64,
    scale_height: f64,
}

impl ExpWind {
    pub fn new(ref_speed: f64, scale_height: f64) -> Self {
        Self {
            ref_speed,
            scale_height,
        }
    }
}

impl WindModel for ExpWind {
    fn wind_speed(&self, height: f64) -> f64 {
        if height <= 0.0 {
            0.0
        } else {
            self.ref_speed * (1.0 - (-height / self.scale_height).exp())
        }
    }

    fn wind_gradient(&self, height: f64) -> f64 {
        if height <= 0.0 {
            0.0
        } else {
            self.ref_speed / self.scale_height * (-height / self.scale_height).exp()
        }
    }
}

/// Logistic (sigmoid) shear layer centred on a shear height.
#[derive(Debug, Clone, Copy)]
pub struct LogisticWind {
    ref_speed: f64,
    shear_height: f64,
    steepness: f64,
}

impl LogisticWind {
    pub fn new(ref_speed: f64, shear_height: f64, steepness: f64) -> Self {
        Self {
            ref_speed,
            shear_height,
            steepness,
        }
    }
}

impl WindModel for LogisticWind {
    fn wind_speed(&self, height: f64) -> f64 {
        let e = (-self.steepness * (height - self.shear_height)).exp();
        self.ref_speed / (1.0 + e)
    }

    fn wind_gradient(&self, height: f64) -> f64 {
        let e = (-self.steepness * (height - self.shear_height)).exp();
        let denom = 1.0 + e;
        self.ref_speed * self.steepness * e / (denom * denom)
    }
}

/// Build a boxed wind model from its configuration.
pub fn create_wind_model(config: &WindConfig) -> Box<dyn WindModel> {
    match config {
        WindConfig::Constant { speed } => Box::new(ConstantWind::new(*speed)),
        WindConfig::Linear {
            ref_speed,
            ref_height,
        } => Box::new(LinearWind::new(*ref_speed, *ref_height)),
        WindConfig::Logarithmic {
            ref_speed,
            ref_height,
            roughness,
        } => Box::new(LogWind::new(*ref_speed, *ref_height, *roughness)),
        WindConfig::Exponential {
            ref_speed,
            scale_height,
        } => Box::new(ExpWind::new(*ref_speed, *scale_height)),
        WindConfig::Logistic {
            ref_speed,
            shear_height,
            steepness,
        } => Box::new(LogisticWind::new(*ref_speed, *shear_height, *steepness)),
    }
}
