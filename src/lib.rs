pub mod app;
pub mod config;
pub mod curve;
pub mod error;
pub mod interpolation;
pub mod utils;

pub use app::{parse_launch_args, LaunchOptions, ScratchpadApp};
pub use config::Settings;
pub use error::{ColorError, Error, Result};
pub use interpolation::{history::Sample, sampler::PathPoint, Interpolator};
