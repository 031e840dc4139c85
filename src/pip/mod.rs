//! Point-in-Polygon (PIP) containment.
//!
//! Exact even-odd ray casting over polygon rings, generalized to
//! multipolygons and nested geometry collections.

mod contains;
mod ring;
mod service;

pub use contains::{polygon_contains, surrounds_point};
pub use ring::ring_contains;
pub use service::{PipService, ZoneHit, ZoneLayer};
