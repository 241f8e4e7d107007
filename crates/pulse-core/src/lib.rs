pub mod camera;
pub mod config;
pub mod constants;
pub mod field;
pub mod frame;
pub mod session;
pub mod state;
pub mod tracks;
pub static PARTICLES_WGSL: &str = include_str!("../shaders/particles.wgsl");

pub use camera::*;
pub use config::*;
pub use constants::*;
pub use field::*;
pub use frame::*;
pub use session::*;
pub use state::*;
pub use tracks::*;
