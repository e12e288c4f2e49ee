use serde::{Deserialize, Serialize};

/// Wind-shear profile selection. All profiles are horizontal and
/// height-dependent only; the resulting wind vector points along North
/// in the NED frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum WindConfig {
    Constant {
        speed: f64,
    },
    Linear {
        ref_speed: f64,
        ref_height: f64,
    },
    Logarithmic {
        ref_speed: f64,
        ref_height: f64,
        roughness: f64,
    },
    Exponential {
        ref_speed: f64,
        scale_height: f64,
    },
    Logistic {
        ref_speed: f64,
        shear_height: f64,
        steepness: f64,
    },
}
