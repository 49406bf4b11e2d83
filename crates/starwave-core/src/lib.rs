pub mod camera;
pub mod config;
pub mod constants;
pub mod error;
pub mod galaxy;
pub mod lifecycle;
pub mod pointer;
pub mod scramble;
pub mod scroll;
pub mod wave;

pub use camera::*;
pub use config::*;
pub use error::*;
pub use galaxy::*;
pub use lifecycle::*;
pub use pointer::*;
pub use scramble::*;
pub use scroll::*;
pub use wave::*;

// Shaders bundled as string constants
pub static GALAXY_WGSL: &str = include_str!("../shaders/galaxy.wgsl");
pub static WAVE_WGSL: &str = include_str!("../shaders/wave.wgsl");
