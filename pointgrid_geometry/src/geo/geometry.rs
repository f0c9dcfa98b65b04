use super::*;
use anyhow::{Result, bail};
use pointgrid_core::json::{JsonObject, JsonValue};
use std::fmt::Debug;

/// The geometry of a feature: a point on the way in, a polygon on the way
/// out.
#[derive(Clone, PartialEq)]
pub enum Geometry {
	Point(PointGeometry),
	Polygon(PolygonGeometry),
}

impl Geometry {
	pub fn new_point<T>(value: T) -> Self
	where
		PointGeometry: From<T>,
	{
		Self::Point(PointGeometry::from(value))
	}

	pub fn new_polygon<T>(value: T) -> Self
	where
		PolygonGeometry: From<T>,
	{
		Self::Polygon(PolygonGeometry::from(value))
	}

	#[must_use]
	pub fn get_type_name(&self) -> &str {
		match self {
			Geometry::Point(_) => "Point",
			Geometry::Polygon(_) => "Polygon",
		}
	}

	/// Returns the contained point geometry, erroring for any other geometry
	/// type.
	pub fn as_point(&self) -> Result<&PointGeometry> {
		match self {
			Geometry::Point(point) => Ok(point),
			_ => bail!("expected Point geometry, found {}", self.get_type_name()),
		}
	}

	pub fn verify(&self) -> Result<()> {
		match self {
			Geometry::Point(g) => g.verify(),
			Geometry::Polygon(g) => g.verify(),
		}
	}

	/// Returns the geometry as a GeoJSON geometry object with `type` and
	/// `coordinates` members.
	#[must_use]
	pub fn to_json(&self, precision: Option<u8>) -> JsonObject {
		let coordinates: JsonValue = match self {
			Geometry::Point(g) => g.to_coord_json(precision),
			Geometry::Polygon(g) => g.to_coord_json(precision),
		};
		let mut obj = JsonObject::new();
		obj.set("type", self.get_type_name());
		obj.set("coordinates", coordinates);
		obj
	}

	#[must_use]
	pub fn compute_bounds(&self) -> Option<[f64; 4]> {
		match self {
			Geometry::Point(g) => g.compute_bounds(),
			Geometry::Polygon(g) => g.compute_bounds(),
		}
	}
}

impl Debug for Geometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let (type_name, inner): (&str, &dyn Debug) = match self {
			Geometry::Point(g) => ("Point", g),
			Geometry::Polygon(g) => ("Polygon", g),
		};
		f.debug_tuple(type_name).field(inner).finish()
	}
}
