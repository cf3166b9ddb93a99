//! meshflip primitives - procedural meshes for demos and tests

mod shapes;

pub use shapes::{capsule, plane, quad_pair, uv_sphere, PrimitiveKind};
