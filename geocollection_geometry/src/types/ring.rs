use super::{BBox, CompositeGeometryTrait, GeometryTrait, Position};
use crate::json::parse_array;
use anyhow::Result;
use serde_json::Value;
use std::fmt::Debug;

/// One boundary loop of a polygon, either its exterior or a hole.
///
/// Closedness is not checked; a ring only contributes its positions to the polygon's bounding box.
#[derive(Clone, PartialEq)]
pub struct RingGeometry {
	positions: Vec<Position>,
	bbox: BBox,
}

impl RingGeometry {
	#[must_use]
	pub fn new(positions: Vec<Position>) -> Self {
		let bbox = BBox::from_positions(&positions);
		Self { positions, bbox }
	}
}

impl GeometryTrait for RingGeometry {
	type Geo = geo::LineString<f64>;

	fn bbox(&self) -> &BBox {
		&self.bbox
	}

	fn to_coord_json(&self) -> Value {
		Value::from(self.positions.iter().map(Position::to_json).collect::<Vec<_>>())
	}

	fn from_coord_json(value: &Value) -> Result<Self> {
		parse_array(value, "ring coordinates", Position::from_json).map(Self::new)
	}

	fn to_geo(&self) -> geo::LineString<f64> {
		geo::LineString::new(self.positions.iter().map(geo::Coord::from).collect())
	}
}

impl CompositeGeometryTrait<Position> for RingGeometry {
	fn as_slice(&self) -> &[Position] {
		&self.positions
	}
	fn into_inner(self) -> Vec<Position> {
		self.positions
	}
}

impl Debug for RingGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.positions).finish()
	}
}

crate::impl_from_array!(RingGeometry, Position);

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn bbox() {
		let ring = RingGeometry::from(&[[0, 0], [5, 0], [2, 4], [0, 0]]);
		assert_eq!(ring.bbox().as_array(), [0.0, 0.0, 5.0, 4.0]);
		assert_eq!(ring.len(), 4);
		assert_eq!(ring.first(), ring.last());
	}
}
