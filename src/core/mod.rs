pub mod bounds;
pub mod clock;
pub mod constants;
pub mod effects;
pub mod flight;
pub mod input;
pub mod loadable;
pub mod mesh;
pub mod proximity;
pub mod startup;
pub mod state;

pub use bounds::*;
pub use clock::*;
pub use constants::*;
pub use effects::*;
pub use flight::*;
pub use input::*;
pub use loadable::*;
pub use mesh::*;
pub use proximity::*;
pub use startup::*;
pub use state::*;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
pub static POST_WGSL: &str = include_str!("../../shaders/post.wgsl");
