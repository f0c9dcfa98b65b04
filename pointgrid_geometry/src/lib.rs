//! Geometry model, GeoJSON interface, and tile construction for pointgrid.
//!
//! The crate is split into three modules:
//! - `geo` (re-exported at the root): the geometry types ([`GeoFeature`],
//!   [`GeoCollection`], [`Geometry`], …)
//! - [`geojson`]: parsing, reading, and writing GeoJSON feature collections
//! - [`tile`]: turning point features into boundary-clipped square tiles

mod geo;
pub mod geojson;
pub mod tile;

pub use geo::*;
pub use geojson::*;
pub use tile::*;
