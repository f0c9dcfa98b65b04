use super::{Coordinates, GeometryTrait};
use pointgrid_core::json::JsonValue;
use std::fmt::Debug;

/// A single geographic point defined by x and y coordinates.
///
/// This is the input geometry of the conversion pipeline: every feature read
/// from a GeoJSON source carries one of these.
#[derive(Clone, PartialEq)]
pub struct PointGeometry(pub Coordinates);

impl PointGeometry {
	/// Constructs a new `PointGeometry` from a `Coordinates` instance.
	#[must_use]
	pub fn new(c: Coordinates) -> Self {
		Self(c)
	}

	/// Returns the x component of the point.
	#[must_use]
	pub fn x(&self) -> f64 {
		self.0.x()
	}

	/// Returns the y component of the point.
	#[must_use]
	pub fn y(&self) -> f64 {
		self.0.y()
	}

	/// Returns a reference to the underlying `Coordinates`.
	#[must_use]
	pub fn as_coord(&self) -> &Coordinates {
		&self.0
	}
}

impl GeometryTrait for PointGeometry {
	/// Always succeeds because a point is always valid.
	fn verify(&self) -> anyhow::Result<()> {
		Ok(())
	}

	fn to_coord_json(&self, precision: Option<u8>) -> JsonValue {
		self.0.to_json(precision)
	}

	fn compute_bounds(&self) -> Option<[f64; 4]> {
		Some([self.0.x(), self.0.y(), self.0.x(), self.0.y()])
	}
}

impl Debug for PointGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}

impl<T> From<T> for PointGeometry
where
	Coordinates: From<T>,
{
	fn from(value: T) -> Self {
		Self(Coordinates::from(value))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn new_and_accessors() {
		let point = PointGeometry::new(Coordinates::new(1.0, 2.0));
		assert_eq!(point.x(), 1.0);
		assert_eq!(point.y(), 2.0);
		assert_eq!(point.as_coord(), &Coordinates::new(1.0, 2.0));
	}

	#[test]
	fn eq_and_ne() {
		let p1 = PointGeometry::from(&[1, 2]);
		let p2 = PointGeometry::from(&[1, 2]);
		let p3 = PointGeometry::from(&[3, 4]);
		assert_eq!(p1, p2);
		assert_ne!(p1, p3);
	}

	#[test]
	fn debug_format() {
		assert_eq!(format!("{:?}", PointGeometry::from(&[1, 2])), "[1.0, 2.0]");
	}

	#[test]
	fn verify_always_ok() {
		assert!(PointGeometry::from(&[0, 0]).verify().is_ok());
	}

	#[test]
	fn to_coord_json() {
		let json = PointGeometry::from([1.5, 2.5]).to_coord_json(None);
		assert_eq!(json, JsonValue::from([1.5, 2.5]));
	}

	#[test]
	fn to_coord_json_with_precision() {
		let json = PointGeometry::from([1.23456, 2.34567]).to_coord_json(Some(2));
		assert_eq!(json, JsonValue::from([1.23, 2.35]));
	}

	#[test]
	fn compute_bounds() {
		let bounds = PointGeometry::from([3.0, 7.0]).compute_bounds().unwrap();
		assert_eq!(bounds, [3.0, 7.0, 3.0, 7.0]);
	}
}
