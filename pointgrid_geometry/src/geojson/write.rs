use crate::GeoCollection;
use anyhow::Result;
use std::io::Write;

/// Writes a collection to `writer` as a GeoJSON FeatureCollection.
///
/// Features are streamed one per line instead of buffering the serialized
/// document: an opening `{ "type": "FeatureCollection", "features": [` line,
/// each feature on its own line joined by commas, then a closing `]}`.
pub fn write_geojson(writer: &mut impl Write, collection: &GeoCollection, precision: Option<u8>) -> Result<()> {
	writer.write_all(b"{ \"type\": \"FeatureCollection\", \"features\": [\n")?;

	for (index, feature) in collection.features.iter().enumerate() {
		if index > 0 {
			writer.write_all(b",\n")?;
		}
		writer.write_all(feature.to_json(precision).stringify().as_bytes())?;
	}

	writer.write_all(b"\n]}\n")?;
	Ok(())
}
