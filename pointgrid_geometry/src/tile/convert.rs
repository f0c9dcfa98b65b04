use super::build_tile;
use crate::{GeoCollection, GeoFeature, Geometry};
use anyhow::Result;
use pointgrid_core::GeoBBox;
use std::collections::HashSet;

/// Converts every distinct point feature of `collection` into a tile feature.
///
/// Input features are deduplicated over their canonical serialized form
/// (geometry plus properties); the first occurrence wins and the output keeps
/// the first-occurrence order. Properties are copied to the output feature
/// unchanged.
///
/// Fails for any feature whose geometry is not a point. There is no
/// per-feature recovery: the batch either converts completely or not at all.
pub fn convert_collection(collection: &GeoCollection, tile_size: f64, bounds: &GeoBBox) -> Result<GeoCollection> {
	let mut seen = HashSet::new();
	let mut features = Vec::new();

	for feature in &collection.features {
		if !seen.insert(feature.to_json(None).stringify()) {
			continue;
		}

		let point = feature.geometry.as_point()?;
		let tile = build_tile(point.as_coord(), tile_size, bounds);

		let mut tile_feature = GeoFeature::new(Geometry::Polygon(tile));
		tile_feature.set_properties(feature.properties.clone());
		features.push(tile_feature);
	}

	log::debug!(
		"converted {} of {} features into tiles",
		features.len(),
		collection.features.len()
	);

	Ok(GeoCollection::from(features))
}
