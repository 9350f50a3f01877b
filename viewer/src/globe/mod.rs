//! 3D globe rendering: sphere/line geometry and the render pipelines.

pub mod mesh;
pub mod orbit_cam;
pub mod pipeline;

pub use mesh::{build_sphere_mesh, upload_line_segments, upload_marker_instances, SphereMesh};
pub use orbit_cam::OrbitCamera;
pub use pipeline::GlobeRenderer;
