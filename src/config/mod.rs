mod environment;
mod glider;

pub use environment::WindConfig;
pub use glider::{ConfigError, GliderConfig};
