use crate::{Coordinates, GeoCollection, GeoFeature, Geometry, PointGeometry, PolygonGeometry, RingGeometry};
use anyhow::{Context, Result, anyhow, bail};
use pointgrid_core::{
	byte_iterator::{ByteIterator, parse_array_entries, parse_object_entries, parse_quoted_json_string},
	json::{JsonObject, JsonValue, parse_json_iter},
};

/// Parses a GeoJSON FeatureCollection into a [`GeoCollection`].
///
/// Parsing is fail-fast: a wrong root type, a feature without a geometry, or
/// coordinates that do not match the geometry type abort with an error. Any
/// unrecognized members (`id`, `bbox`, foreign members) are skipped.
pub fn parse_geojson(json: &str) -> Result<GeoCollection> {
	let mut iter = ByteIterator::from_str(json);
	parse_geojson_collection(&mut iter).context("failed to parse GeoJSON")
}

fn parse_geojson_collection(iter: &mut ByteIterator) -> Result<GeoCollection> {
	let mut features = Vec::new();
	let mut object_type: Option<String> = None;

	parse_object_entries(iter, |key, iter2| {
		match key.as_str() {
			"type" => object_type = Some(parse_quoted_json_string(iter2)?),
			"features" => {
				parse_array_entries(iter2, |iter3| {
					features.push(parse_geojson_feature(iter3)?);
					Ok(())
				})?;
			}
			_ => _ = parse_json_iter(iter2)?,
		}
		Ok(())
	})?;

	check_type(object_type, "FeatureCollection")?;

	Ok(GeoCollection { features })
}

fn check_type(object_type: Option<String>, name: &str) -> Result<()> {
	let object_type = object_type.ok_or_else(|| anyhow!("{name} must have a type"))?;

	if object_type.as_str() != name {
		bail!("type must be '{name}', found '{object_type}'")
	}
	Ok(())
}

/// Parses a single GeoJSON feature object.
pub fn parse_geojson_feature(iter: &mut ByteIterator) -> Result<GeoFeature> {
	let mut object_type: Option<String> = None;
	let mut geometry: Option<Geometry> = None;
	let mut properties: Option<JsonObject> = None;

	parse_object_entries(iter, |key, iter2| {
		match key.as_str() {
			"type" => object_type = Some(parse_quoted_json_string(iter2)?),
			"geometry" => geometry = Some(parse_geojson_geometry(iter2)?),
			"properties" => properties = Some(parse_geojson_properties(iter2)?),
			_ => _ = parse_json_iter(iter2)?,
		}
		Ok(())
	})?;

	check_type(object_type, "Feature")?;

	Ok(GeoFeature {
		geometry: geometry.ok_or_else(|| anyhow!("feature is missing 'geometry'"))?,
		properties: properties.unwrap_or_default(),
	})
}

fn parse_geojson_properties(iter: &mut ByteIterator) -> Result<JsonObject> {
	match parse_json_iter(iter)? {
		JsonValue::Object(obj) => Ok(obj),
		// "properties": null is allowed by the format
		JsonValue::Null => Ok(JsonObject::new()),
		other => bail!("feature properties must be an object, found a {}", other.type_as_str()),
	}
}

fn parse_geojson_geometry(iter: &mut ByteIterator) -> Result<Geometry> {
	let mut geometry_type: Option<String> = None;
	let mut coordinates: Option<JsonValue> = None;

	parse_object_entries(iter, |key, iter2| {
		match key.as_str() {
			"type" => geometry_type = Some(parse_quoted_json_string(iter2)?),
			"coordinates" => coordinates = Some(parse_json_iter(iter2)?),
			_ => _ = parse_json_iter(iter2)?,
		}
		Ok(())
	})?;

	let geometry_type = geometry_type.ok_or_else(|| anyhow!("geometry must have a type"))?;
	let coordinates = coordinates.ok_or_else(|| anyhow!("geometry must have coordinates"))?;

	match geometry_type.as_str() {
		"Point" => Ok(Geometry::Point(PointGeometry::new(coordinates_from_json(&coordinates)?))),
		"Polygon" => Ok(Geometry::Polygon(polygon_from_json(&coordinates)?)),
		_ => bail!("unsupported geometry type '{geometry_type}'"),
	}
}

fn coordinates_from_json(value: &JsonValue) -> Result<Coordinates> {
	let pair = value
		.as_array()
		.and_then(|array| array.as_number_array::<2>())
		.context("coordinates of a Point must be a pair of numbers")?;
	Ok(Coordinates::new(pair[0], pair[1]))
}

fn ring_from_json(value: &JsonValue) -> Result<RingGeometry> {
	let coordinates = value
		.as_array()
		.context("a Polygon ring must be an array of positions")?
		.as_vec()
		.iter()
		.map(coordinates_from_json)
		.collect::<Result<Vec<_>>>()?;
	Ok(RingGeometry(coordinates))
}

fn polygon_from_json(value: &JsonValue) -> Result<PolygonGeometry> {
	let rings = value
		.as_array()
		.context("coordinates of a Polygon must be an array of rings")?
		.as_vec()
		.iter()
		.map(ring_from_json)
		.collect::<Result<Vec<_>>>()?;
	Ok(PolygonGeometry(rings))
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn valid_feature_collection() -> Result<()> {
		let json = r#"
        {
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "geometry": {
                        "type": "Point",
                        "coordinates": [102.0, 0.5]
                    },
                    "properties": {
                        "prop0": "value0"
                    }
                }
            ]
        }
        "#;

		let collection = parse_geojson(json)?;
		assert_eq!(collection.features.len(), 1);

		let feature = &collection.features[0];
		assert_eq!(feature.geometry.get_type_name(), "Point");
		let point = feature.geometry.as_point()?;
		assert_eq!(point.x(), 102.0);
		assert_eq!(point.y(), 0.5);
		assert_eq!(feature.properties.get("prop0"), Some(&JsonValue::from("value0")));

		Ok(())
	}

	#[test]
	fn invalid_root_type() {
		let json = r#"{"type": "InvalidCollection", "features": []}"#;
		assert!(parse_geojson(json).is_err());
	}

	#[test]
	fn missing_root_type() {
		let json = r#"{"features": []}"#;
		assert!(parse_geojson(json).is_err());
	}

	#[test]
	fn missing_geometry() {
		let json = r#"
        {
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "properties": {"prop0": "value0"}}
            ]
        }
        "#;
		assert!(parse_geojson(json).is_err());
	}

	#[test]
	fn empty_features() -> Result<()> {
		let collection = parse_geojson(r#"{"type": "FeatureCollection", "features": []}"#)?;
		assert!(collection.features.is_empty());
		Ok(())
	}

	#[test]
	fn invalid_json() {
		let json = r#"{"type": "FeatureCollection", "features": ["#;
		assert!(parse_geojson(json).is_err());
	}

	#[test]
	fn point_coordinates_must_be_a_pair() {
		for coordinates in ["[1.0]", "[1.0, 2.0, 3.0]", "[\"a\", \"b\"]", "7", "{}"] {
			let json = format!(
				r#"{{"type":"FeatureCollection","features":[{{"type":"Feature","geometry":{{"type":"Point","coordinates":{coordinates}}},"properties":{{}}}}]}}"#
			);
			assert!(parse_geojson(&json).is_err(), "accepted coordinates {coordinates}");
		}
	}

	#[test]
	fn unsupported_geometry_type() {
		let json = r#"
        {
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "geometry": {"type": "LineString", "coordinates": [[0, 0], [1, 1]]},
                    "properties": {}
                }
            ]
        }
        "#;
		let error = parse_geojson(json).unwrap_err();
		assert!(format!("{error:#}").contains("unsupported geometry type 'LineString'"));
	}

	#[test]
	fn polygon_geometry_round_trips() -> Result<()> {
		let json = r#"{"type":"FeatureCollection","features":[{"type":"Feature","geometry":{"type":"Polygon","coordinates":[[[0,0],[1,0],[1,1],[0,1],[0,0]]]},"properties":{}}]}"#;
		let collection = parse_geojson(json)?;
		assert_eq!(collection.to_json(None).stringify(), json);
		Ok(())
	}

	#[test]
	fn foreign_members_are_skipped() -> Result<()> {
		let json = r#"
        {
            "type": "FeatureCollection",
            "bbox": [0, 0, 10, 10],
            "features": [
                {
                    "type": "Feature",
                    "id": "feature1",
                    "geometry": {"type": "Point", "coordinates": [1, 2]},
                    "properties": {}
                }
            ]
        }
        "#;
		let collection = parse_geojson(json)?;
		assert_eq!(collection.features.len(), 1);
		Ok(())
	}

	#[test]
	fn null_properties_become_empty() -> Result<()> {
		let json = r#"{"type":"FeatureCollection","features":[{"type":"Feature","geometry":{"type":"Point","coordinates":[1,2]},"properties":null}]}"#;
		let collection = parse_geojson(json)?;
		assert!(collection.features[0].properties.is_empty());
		Ok(())
	}

	#[test]
	fn missing_properties_become_empty() -> Result<()> {
		let json = r#"{"type":"FeatureCollection","features":[{"type":"Feature","geometry":{"type":"Point","coordinates":[1,2]}}]}"#;
		let collection = parse_geojson(json)?;
		assert!(collection.features[0].properties.is_empty());
		Ok(())
	}

	#[test]
	fn property_order_is_preserved() -> Result<()> {
		let json = r#"{"type":"FeatureCollection","features":[{"type":"Feature","geometry":{"type":"Point","coordinates":[1,2]},"properties":{"zebra":1,"alpha":{"b":2,"a":3}}}]}"#;
		let collection = parse_geojson(json)?;
		assert_eq!(
			collection.features[0].properties.stringify(),
			r#"{"zebra":1,"alpha":{"b":2,"a":3}}"#
		);
		Ok(())
	}
}
