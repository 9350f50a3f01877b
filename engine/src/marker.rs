//! Location markers.

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// A labeled geographic point rendered as a small dot on the globe surface.
///
/// Markers are immutable caller input; coordinates are not validated, and
/// out-of-range values propagate into the projection unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    /// Stable identifier, unique among the supplied markers.
    pub id: String,
    /// Optional human-readable label (a city name, typically).
    #[serde(default)]
    pub label: Option<String>,
    /// Dot color.
    pub color: Color,
    /// Longitude in degrees, east positive.
    pub lon: f64,
    /// Latitude in degrees, north positive.
    pub lat: f64,
}
