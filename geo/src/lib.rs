#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic)]

mod math;
mod tests;

pub use math::{arc_angle, lat_lon_to_unit, lat_lon_to_vector3, slerp, Vec3};
