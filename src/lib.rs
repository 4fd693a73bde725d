pub mod animation;
pub mod backends;
pub mod camera;
pub mod cli;
pub mod config;
pub mod error;
pub mod geometry;
pub mod io;
pub mod math;
pub mod shapes;
pub mod traits;

pub use config::SceneConfig;
pub use error::SceneError;
pub use shapes::{cup_handle, cup_profile, cup_radius, CupScene};
pub use traits::{Scene, SceneBackend};
