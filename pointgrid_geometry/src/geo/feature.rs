use super::Geometry;
use pointgrid_core::json::{JsonObject, JsonValue};

/// A geographic feature: a geometry paired with an opaque properties payload.
///
/// Properties are never inspected by this workspace; they are carried through
/// the conversion verbatim, keys in their original order.
#[derive(Clone, Debug, PartialEq)]
pub struct GeoFeature {
	pub geometry: Geometry,
	pub properties: JsonObject,
}

impl GeoFeature {
	#[must_use]
	pub fn new(geometry: Geometry) -> Self {
		Self {
			geometry,
			properties: JsonObject::new(),
		}
	}

	pub fn set_properties(&mut self, properties: JsonObject) {
		self.properties = properties;
	}

	pub fn set_property<T>(&mut self, key: &str, value: T)
	where
		JsonValue: From<T>,
	{
		self.properties.set(key, value);
	}

	/// Returns the feature as a GeoJSON feature object with `type`,
	/// `geometry`, and `properties` members, in that order.
	#[must_use]
	pub fn to_json(&self, precision: Option<u8>) -> JsonObject {
		let mut obj = JsonObject::new();
		obj.set("type", "Feature");
		obj.set("geometry", self.geometry.to_json(precision));
		obj.set("properties", self.properties.clone());
		obj
	}
}
