mod trajectory;
mod zhukovskii;

pub use trajectory::{GliderState, Trajectory};
pub use zhukovskii::{AeroModel, ZhukovskiiGlider};
