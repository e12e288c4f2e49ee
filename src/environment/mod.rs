mod wind;

pub use wind::{
    create_wind_model, ConstantWind, ExpWind, LinearWind, LogWind, LogisticWind, WindModel,
};
