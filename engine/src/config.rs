//! Globe appearance configuration.

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Appearance bundle controlling globe shading and the optional layers.
///
/// Supplied wholesale by the caller and never mutated by the renderer; the
/// scene is recomposed when a new bundle arrives.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GlobeConfig {
    /// Base surface color of the sphere.
    pub globe_color: Color,
    /// Draw the latitude/longitude grid overlay.
    pub show_graticules: bool,
    /// Draw the translucent atmosphere shell.
    pub show_atmosphere: bool,
    /// Atmosphere shell tint.
    pub atmosphere_color: Color,
    /// Shell offset above the globe surface, in scene units.
    pub atmosphere_altitude: f32,
    /// Emissive (self-lit) surface term.
    pub emissive: Color,
    /// Strength of the emissive term.
    pub emissive_intensity: f32,
    /// Specular exponent of the surface material.
    pub shininess: f32,
    /// Color of border and graticule lines.
    pub polygon_color: Color,
    /// Ambient light color.
    pub ambient_light: Color,
    /// Color of the lower-left directional light.
    pub directional_left_light: Color,
    /// Color of the upper directional light.
    pub directional_top_light: Color,
    /// Color of the point light.
    pub point_light: Color,
}

impl Default for GlobeConfig {
    fn default() -> Self {
        Self {
            globe_color: Color::rgb(0x06, 0x20, 0x56),
            show_graticules: true,
            show_atmosphere: true,
            atmosphere_color: Color::rgb(0xff, 0xff, 0xff),
            atmosphere_altitude: 10.0,
            emissive: Color::rgb(0x06, 0x20, 0x56),
            emissive_intensity: 0.1,
            shininess: 0.9,
            polygon_color: Color::rgba(255, 255, 255, 0.7),
            ambient_light: Color::rgb(0x38, 0xbd, 0xf8),
            directional_left_light: Color::rgb(0xff, 0xff, 0xff),
            directional_top_light: Color::rgb(0xff, 0xff, 0xff),
            point_light: Color::rgb(0xff, 0xff, 0xff),
        }
    }
}
