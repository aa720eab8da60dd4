//! Global constants for viewer-core

/// Default sphere radius
pub const SPHERE_RADIUS: f32 = 1.0;

/// Default number of latitude divisions for sphere mesh generation
pub const SPHERE_LAT_DIVISIONS: u32 = 50;

/// Default number of longitude divisions for sphere mesh generation
pub const SPHERE_LON_DIVISIONS: u32 = 50;

/// Registry key of the object served when a requested name is unknown
pub const FALLBACK_OBJECT: &str = "cube";
