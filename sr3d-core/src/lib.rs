//! SR3D Core Library - CPU-only 3D-to-2D rendering pipeline
//!
//! Meshes are rotated and pushed in front of the camera, back faces are
//! culled, the survivors are projected, ordered farthest-first and scan
//! converted into a packed-color pixel buffer. Nothing here touches a
//! window, input device or file, except the OBJ loader in `obj`.

pub mod config;
pub mod culling;
pub mod depth;
pub mod geometry;
pub mod obj;
pub mod pipeline;
pub mod projection;
pub mod raster;
pub mod renderer;
pub mod transform;
pub mod vector;

// Re-export commonly used types
pub use config::{ConfigError, DrawOptions, Palette, RenderConfig};
pub use geometry::{Face, Mesh, MeshError};
pub use pipeline::FrameStats;
pub use projection::{Camera, ProjectedTriangle, Viewport};
pub use raster::FrameBuffer;
pub use renderer::{PresentationSink, Renderer};
pub use transform::{RotationState, Transform};
pub use vector::{Rotate2, Rotate3, Vec2, Vec3, VectorExt};
