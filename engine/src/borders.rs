//! Country boundary data, decoded from GeoJSON into great-circle segments.
//!
//! The embedded dataset is a coarse world outline; callers may substitute any
//! FeatureCollection with the same schema.

use geo::{arc_angle, lat_lon_to_vector3, slerp, Vec3};
use serde::Deserialize;

/// Embedded coarse world boundary dataset.
pub const WORLD_BORDERS_STR: &str = include_str!("../assets/world_borders.geojson");

/// Longest arc a single line segment may span before subdivision, in radians
/// (5 degrees). Longer chords would visibly cut through the sphere.
pub const MAX_SEGMENT_ARC_RAD: f32 = 0.087_266_46;

/// Error from decoding boundary data.
#[derive(Debug, thiserror::Error)]
pub enum BorderError {
    /// The input is not a valid GeoJSON FeatureCollection.
    #[error("boundary data: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A GeoJSON FeatureCollection, restricted to the fields the globe consumes.
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureCollection {
    /// Member features, in input order.
    pub features: Vec<Feature>,
}

/// A single GeoJSON feature. Properties are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Feature {
    /// Feature geometry; `null` geometries are skipped.
    pub geometry: Option<Geometry>,
}

/// The geometry kinds boundary files use. Positions are `[lon, lat]` degrees.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    /// An open polyline.
    LineString {
        /// Vertices along the line.
        coordinates: Vec<[f64; 2]>,
    },
    /// Several open polylines.
    MultiLineString {
        /// Vertex lists, one per line.
        coordinates: Vec<Vec<[f64; 2]>>,
    },
    /// A closed outer ring with optional holes.
    Polygon {
        /// Rings; each is drawn as a closed outline.
        coordinates: Vec<Vec<[f64; 2]>>,
    },
    /// Several polygons.
    MultiPolygon {
        /// Polygons, each a list of rings.
        coordinates: Vec<Vec<Vec<[f64; 2]>>>,
    },
}

/// Decodes a GeoJSON FeatureCollection from a string.
pub fn parse(input: &str) -> Result<FeatureCollection, BorderError> {
    Ok(serde_json::from_str(input)?)
}

/// Projects every boundary line onto a sphere of `radius`, subdividing long
/// arcs so the outline hugs the surface.
///
/// Returns world-space segment endpoints; order follows the input features.
pub fn border_segments(fc: &FeatureCollection, radius: f32) -> Vec<[Vec3; 2]> {
    let mut out = Vec::new();
    for feature in &fc.features {
        let Some(geometry) = &feature.geometry else {
            continue;
        };
        match geometry {
            Geometry::LineString { coordinates } => push_line(&mut out, coordinates, radius),
            Geometry::MultiLineString { coordinates } => {
                for line in coordinates {
                    push_line(&mut out, line, radius);
                }
            }
            Geometry::Polygon { coordinates } => {
                for ring in coordinates {
                    push_line(&mut out, ring, radius);
                }
            }
            Geometry::MultiPolygon { coordinates } => {
                for polygon in coordinates {
                    for ring in polygon {
                        push_line(&mut out, ring, radius);
                    }
                }
            }
        }
    }
    out
}

fn push_line(out: &mut Vec<[Vec3; 2]>, coords: &[[f64; 2]], radius: f32) {
    for w in coords.windows(2) {
        let a = lat_lon_to_vector3(w[0][1] as f32, w[0][0] as f32, radius);
        let b = lat_lon_to_vector3(w[1][1] as f32, w[1][0] as f32, radius);
        subdivide_arc(out, a, b, radius);
    }
}

// Splits the arc from `a` to `b` into chords no longer than
// MAX_SEGMENT_ARC_RAD, re-projected onto the sphere.
fn subdivide_arc(out: &mut Vec<[Vec3; 2]>, a: Vec3, b: Vec3, radius: f32) {
    let ang = arc_angle(a, b);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let steps = (ang / MAX_SEGMENT_ARC_RAD).ceil().max(1.0) as u32;
    let ua = a.normalized();
    let ub = b.normalized();
    let mut prev = a;
    for i in 1..=steps {
        let t = i as f32 / steps as f32;
        let next = if i == steps { b } else { slerp(ua, ub, t).mul(radius) };
        out.push([prev, next]);
        prev = next;
    }
}
