use super::{GeometryTrait, RingGeometry};
use anyhow::{Result, ensure};
use pointgrid_core::json::JsonValue;
use std::fmt::Debug;

/// A polygon: one outer ring, optionally followed by interior rings.
///
/// Tiles are polygons with a single 5-entry ring.
#[derive(Clone, PartialEq)]
pub struct PolygonGeometry(pub Vec<RingGeometry>);

impl GeometryTrait for PolygonGeometry {
	fn verify(&self) -> Result<()> {
		ensure!(!self.0.is_empty(), "polygon must have at least one ring");
		for ring in &self.0 {
			ring.verify()?;
		}
		Ok(())
	}

	fn to_coord_json(&self, precision: Option<u8>) -> JsonValue {
		JsonValue::from(self.0.iter().map(|ring| ring.to_coord_json(precision)).collect::<Vec<_>>())
	}

	fn compute_bounds(&self) -> Option<[f64; 4]> {
		let mut bounds: Option<[f64; 4]> = None;
		for ring in &self.0 {
			if let Some(ring_bounds) = ring.compute_bounds() {
				bounds = Some(match bounds {
					None => ring_bounds,
					Some(b) => [
						b[0].min(ring_bounds[0]),
						b[1].min(ring_bounds[1]),
						b[2].max(ring_bounds[2]),
						b[3].max(ring_bounds[3]),
					],
				});
			}
		}
		bounds
	}
}

impl Debug for PolygonGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(PolygonGeometry, RingGeometry);
