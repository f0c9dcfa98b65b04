//! # pointgrid
//!
//! pointgrid converts GeoJSON point features into square coverage tiles:
//! every distinct point feature becomes a polygon feature of a configurable
//! side length, centered on the point and clipped against a fixed geographic
//! boundary. Typical use is preparing sparse point samples for heatmap or
//! coverage-grid rendering.
//!
//! ## Usage Example
//!
//! ```no_run
//! use pointgrid::core::GeoBBox;
//! use pointgrid::geometry::{convert_collection, parse_geojson, write_geojson};
//!
//! fn main() -> anyhow::Result<()> {
//!     let input = std::fs::read_to_string("points.geojson")?;
//!     let collection = parse_geojson(&input)?;
//!
//!     let tiles = convert_collection(&collection, 0.25, &GeoBBox::new_full())?;
//!
//!     let mut file = std::fs::File::create("tiles.geojson")?;
//!     write_geojson(&mut file, &tiles, None)?;
//!     Ok(())
//! }
//! ```

pub use pointgrid_core as core;
pub use pointgrid_geometry as geometry;
