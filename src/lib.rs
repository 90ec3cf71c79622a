pub mod camera;
pub mod cli;
pub mod light;
pub mod primitives;
pub mod renderer;
pub mod resizer;
pub mod scene;
pub mod transform;
pub mod types;
pub mod world;

// Re-export the component factories and the world entry points
pub use primitives::{create_cone, create_cube, create_sphere, create_torus};
pub use world::{build_scene, World};
