use super::parse_geojson;
use crate::GeoCollection;
use anyhow::Result;
use std::io::Read;

/// Reads a complete GeoJSON FeatureCollection from `reader`.
///
/// The whole input is materialized in memory before parsing; this tool
/// processes bounded batch inputs, not streams.
pub fn read_geojson(mut reader: impl Read) -> Result<GeoCollection> {
	let mut buffer = String::new();
	reader.read_to_string(&mut buffer)?;
	parse_geojson(&buffer)
}
