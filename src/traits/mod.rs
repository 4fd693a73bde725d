pub mod backend;
pub mod scene;

pub use backend::*;
pub use scene::*;
