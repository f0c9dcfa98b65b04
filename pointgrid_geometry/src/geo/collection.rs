use super::GeoFeature;
use crate::geojson::parse_geojson;
use anyhow::Result;
use pointgrid_core::json::{JsonObject, JsonValue};

/// An ordered sequence of features, the top-level container of the GeoJSON
/// interchange format.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeoCollection {
	pub features: Vec<GeoFeature>,
}

impl GeoCollection {
	#[must_use]
	pub fn from(features: Vec<GeoFeature>) -> Self {
		Self { features }
	}

	pub fn from_json_str(json_str: &str) -> Result<Self> {
		parse_geojson(json_str)
	}

	/// Returns the collection as a GeoJSON FeatureCollection object.
	#[must_use]
	pub fn to_json(&self, precision: Option<u8>) -> JsonObject {
		let mut obj = JsonObject::new();
		obj.set("type", "FeatureCollection");
		obj.set(
			"features",
			JsonValue::from(self.features.iter().map(|f| f.to_json(precision)).collect::<Vec<_>>()),
		);
		obj
	}

	/// Returns the bounding box covering all features, or `None` for an empty
	/// collection.
	#[must_use]
	pub fn compute_bounds(&self) -> Option<[f64; 4]> {
		let mut bounds: Option<[f64; 4]> = None;
		for feature in &self.features {
			if let Some(fb) = feature.geometry.compute_bounds() {
				bounds = Some(match bounds {
					None => fb,
					Some(b) => [b[0].min(fb[0]), b[1].min(fb[1]), b[2].max(fb[2]), b[3].max(fb[3])],
				});
			}
		}
		bounds
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::geo::Geometry;

	#[test]
	fn to_json() {
		let mut feature = GeoFeature::new(Geometry::new_point([1.0, 2.0]));
		feature.set_property("name", "a");
		let collection = GeoCollection::from(vec![feature]);

		assert_eq!(
			collection.to_json(None).stringify(),
			r#"{"type":"FeatureCollection","features":[{"type":"Feature","geometry":{"type":"Point","coordinates":[1,2]},"properties":{"name":"a"}}]}"#
		);
	}

	#[test]
	fn to_json_empty() {
		assert_eq!(
			GeoCollection::default().to_json(None).stringify(),
			r#"{"type":"FeatureCollection","features":[]}"#
		);
	}

	#[test]
	fn compute_bounds() {
		let collection = GeoCollection::from(vec![
			GeoFeature::new(Geometry::new_point([1.0, 2.0])),
			GeoFeature::new(Geometry::new_point([-3.0, 7.0])),
		]);
		assert_eq!(collection.compute_bounds().unwrap(), [-3.0, 2.0, 1.0, 7.0]);
	}

	#[test]
	fn compute_bounds_empty() {
		assert!(GeoCollection::default().compute_bounds().is_none());
	}
}
