use crate::{Coordinates, PolygonGeometry, RingGeometry};
use pointgrid_core::GeoBBox;

/// Builds the square tile for one sample point.
///
/// The tile is an axis-aligned square of side `tile_size` centered on `point`,
/// clipped against `bounds`: where the square would cross the boundary, the
/// crossing edge is moved onto the boundary. The result is always a single
/// closed 5-vertex ring (bottom-left, bottom-right, top-right, top-left,
/// bottom-left).
///
/// A point outside `bounds` produces a degenerate tile with zero or negative
/// extent; it is returned as-is and left to the caller to keep or drop.
#[must_use]
pub fn build_tile(point: &Coordinates, tile_size: f64, bounds: &GeoBBox) -> PolygonGeometry {
	let mut corner_x = point.x() - tile_size / 2.0;
	let mut corner_y = point.y() - tile_size / 2.0;
	let mut width = tile_size;
	let mut height = tile_size;

	if corner_x < bounds.x_min {
		width = tile_size - (bounds.x_min - corner_x);
		corner_x = bounds.x_min;
	}
	if corner_x + width > bounds.x_max {
		width -= corner_x + width - bounds.x_max;
	}
	if corner_y < bounds.y_min {
		height = tile_size - (bounds.y_min - corner_y);
		corner_y = bounds.y_min;
	}
	if corner_y + height > bounds.y_max {
		height -= corner_y + height - bounds.y_max;
	}

	PolygonGeometry(vec![RingGeometry(vec![
		Coordinates::new(corner_x, corner_y),
		Coordinates::new(corner_x + width, corner_y),
		Coordinates::new(corner_x + width, corner_y + height),
		Coordinates::new(corner_x, corner_y + height),
		Coordinates::new(corner_x, corner_y),
	])])
}
