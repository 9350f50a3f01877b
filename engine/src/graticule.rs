//! Latitude/longitude grid overlay.

use geo::{lat_lon_to_vector3, Vec3};

/// Spacing between grid lines, in degrees.
pub const GRATICULE_STEP_DEG: i32 = 15;

/// Sampling interval along each grid line, in degrees.
pub const GRATICULE_SAMPLE_DEG: i32 = 5;

/// Builds the graticule as line segments on a sphere of `radius`.
///
/// Parallels run every [`GRATICULE_STEP_DEG`] from 75S to 75N (the poles
/// themselves degenerate to points and are skipped); meridians run every
/// [`GRATICULE_STEP_DEG`] pole to pole. Both are sampled at
/// [`GRATICULE_SAMPLE_DEG`] so the lines follow the curvature. Output is
/// deterministic: parallels south to north, then meridians west to east.
pub fn graticule_segments(radius: f32) -> Vec<[Vec3; 2]> {
    let mut out = Vec::new();

    let mut lat = -90 + GRATICULE_STEP_DEG;
    while lat < 90 {
        let mut lon = -180;
        while lon < 180 {
            let a = lat_lon_to_vector3(lat as f32, lon as f32, radius);
            let b = lat_lon_to_vector3(lat as f32, (lon + GRATICULE_SAMPLE_DEG) as f32, radius);
            out.push([a, b]);
            lon += GRATICULE_SAMPLE_DEG;
        }
        lat += GRATICULE_STEP_DEG;
    }

    let mut lon = -180;
    while lon < 180 {
        let mut lat = -90;
        while lat < 90 {
            let a = lat_lon_to_vector3(lat as f32, lon as f32, radius);
            let b = lat_lon_to_vector3((lat + GRATICULE_SAMPLE_DEG) as f32, lon as f32, radius);
            out.push([a, b]);
            lat += GRATICULE_SAMPLE_DEG;
        }
        lon += GRATICULE_STEP_DEG;
    }

    out
}
