//! CPU-side scene composition.
//!
//! Turns caller input (config, markers, boundary data) into the geometry
//! lists the viewer uploads. Composition is pure; per-frame animation state
//! lives on the scene and advances via [`GlobeScene::advance_frame`].

use geo::{lat_lon_to_vector3, Vec3};

use crate::borders::{self, FeatureCollection};
use crate::color::Color;
use crate::config::GlobeConfig;
use crate::graticule;
use crate::marker::Marker;

/// Sphere radius in scene units.
pub const GLOBE_RADIUS: f32 = 200.0;

/// Height of marker dots above the surface.
pub const MARKER_ALTITUDE: f32 = 1.0;

/// Radius of a marker dot.
pub const MARKER_DOT_RADIUS: f32 = 3.0;

/// Per-frame spin applied by [`GlobeScene::advance_frame`], radians about +Y.
pub const ROTATION_STEP_RAD: f32 = 0.001;

/// Fixed opacity of the atmosphere shell.
pub const ATMOSPHERE_OPACITY: f32 = 0.4;

/// A marker projected into world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerDot {
    /// Dot center, slightly above the globe surface.
    pub position: Vec3,
    /// Dot color, straight from the marker.
    pub color: Color,
}

/// The translucent shell drawn behind the globe rim.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Atmosphere {
    /// Shell radius, globe radius plus the configured altitude.
    pub radius: f32,
    /// Shell tint.
    pub color: Color,
    /// Blend opacity.
    pub opacity: f32,
}

/// Everything the viewer needs to draw one globe.
#[derive(Debug, Clone, PartialEq)]
pub struct GlobeScene {
    /// Globe radius.
    pub radius: f32,
    /// The appearance bundle the scene was composed from.
    pub config: GlobeConfig,
    /// Atmosphere shell, present when enabled in the config.
    pub atmosphere: Option<Atmosphere>,
    /// Boundary outlines on the sphere surface.
    pub border_segments: Vec<[Vec3; 2]>,
    /// Grid overlay; empty when disabled in the config.
    pub graticule_segments: Vec<[Vec3; 2]>,
    /// Projected markers.
    pub marker_dots: Vec<MarkerDot>,
    /// Accumulated spin about +Y, radians.
    pub rotation_y: f32,
    /// Frames advanced so far.
    pub frame: u64,
}

impl GlobeScene {
    /// Composes a scene from caller input.
    ///
    /// Markers are projected in input order at `GLOBE_RADIUS + MARKER_ALTITUDE`;
    /// coordinates are taken as-is. A fresh scene starts unrotated.
    pub fn compose(markers: &[Marker], config: GlobeConfig, boundaries: &FeatureCollection) -> Self {
        let border_segments = borders::border_segments(boundaries, GLOBE_RADIUS);
        let graticule_segments = if config.show_graticules {
            graticule::graticule_segments(GLOBE_RADIUS)
        } else {
            Vec::new()
        };
        let marker_dots = markers
            .iter()
            .map(|m| MarkerDot {
                position: lat_lon_to_vector3(
                    m.lat as f32,
                    m.lon as f32,
                    GLOBE_RADIUS + MARKER_ALTITUDE,
                ),
                color: m.color,
            })
            .collect::<Vec<_>>();
        let atmosphere = config.show_atmosphere.then(|| Atmosphere {
            radius: GLOBE_RADIUS + config.atmosphere_altitude,
            color: config.atmosphere_color,
            opacity: ATMOSPHERE_OPACITY,
        });
        log::debug!(
            "[scene] composed: {} border segs, {} graticule segs, {} markers, atmosphere={}",
            border_segments.len(),
            graticule_segments.len(),
            marker_dots.len(),
            atmosphere.is_some()
        );
        Self {
            radius: GLOBE_RADIUS,
            config,
            atmosphere,
            border_segments,
            graticule_segments,
            marker_dots,
            rotation_y: 0.0,
            frame: 0,
        }
    }

    /// Advances the idle spin by one frame.
    pub fn advance_frame(&mut self) {
        self.frame += 1;
        self.rotation_y += ROTATION_STEP_RAD;
    }
}
