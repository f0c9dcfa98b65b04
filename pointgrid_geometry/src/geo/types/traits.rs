use anyhow::Result;
use pointgrid_core::json::JsonValue;

/// Shared behavior of all geometry primitives.
pub trait GeometryTrait {
	/// Checks structural validity, e.g. ring closure.
	fn verify(&self) -> Result<()>;

	/// Returns the geometry's coordinates as nested JSON arrays, optionally
	/// rounded to `precision` decimal digits.
	fn to_coord_json(&self, precision: Option<u8>) -> JsonValue;

	/// Returns the bounding box `[x_min, y_min, x_max, y_max]`, or `None` for
	/// empty geometries.
	fn compute_bounds(&self) -> Option<[f64; 4]>;
}
