use super::{BBox, CompositeGeometryTrait, GeometryTrait, Position};
use crate::json::parse_array;
use anyhow::Result;
use serde_json::Value;
use std::fmt::Debug;

/// A sequence of connected positions forming a line.
#[derive(Clone, PartialEq)]
pub struct LineStringGeometry {
	positions: Vec<Position>,
	bbox: BBox,
}

impl LineStringGeometry {
	#[must_use]
	pub fn new(positions: Vec<Position>) -> Self {
		let bbox = BBox::from_positions(&positions);
		Self { positions, bbox }
	}
}

impl GeometryTrait for LineStringGeometry {
	type Geo = geo::LineString<f64>;

	/// `[min(x), min(y), max(x), max(y)]` over all positions.
	fn bbox(&self) -> &BBox {
		&self.bbox
	}

	fn to_coord_json(&self) -> Value {
		Value::from(self.positions.iter().map(Position::to_json).collect::<Vec<_>>())
	}

	fn from_coord_json(value: &Value) -> Result<Self> {
		parse_array(value, "line string coordinates", Position::from_json).map(Self::new)
	}

	fn to_geo(&self) -> geo::LineString<f64> {
		geo::LineString::new(self.positions.iter().map(geo::Coord::from).collect())
	}
}

impl CompositeGeometryTrait<Position> for LineStringGeometry {
	fn as_slice(&self) -> &[Position] {
		&self.positions
	}
	fn into_inner(self) -> Vec<Position> {
		self.positions
	}
}

impl Debug for LineStringGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.positions).finish()
	}
}

crate::impl_from_array!(LineStringGeometry, Position);

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn bbox_spans_all_positions() {
		let line = LineStringGeometry::from(&[[0, 5], [4, -2], [2, 9]]);
		assert_eq!(line.bbox().as_array(), [0.0, -2.0, 4.0, 9.0]);
		assert!(line.iter().all(|p| line.bbox().contains(p)));
	}

	#[test]
	fn empty_line_has_empty_bbox() {
		let line = LineStringGeometry::new(vec![]);
		assert_eq!(line.bbox(), &BBox::EMPTY);
		assert!(line.is_empty());
	}

	#[test]
	fn json_round_trip() -> Result<()> {
		let json = json!([[1.0, 2.0], [3.0, 4.0]]);
		let line = LineStringGeometry::from_coord_json(&json)?;
		assert_eq!(line.len(), 2);
		assert_eq!(line.to_coord_json(), json);
		Ok(())
	}

	#[test]
	fn rejects_wrong_nesting() {
		let err = LineStringGeometry::from_coord_json(&json!([1.0, 2.0])).unwrap_err();
		assert_eq!(err.to_string(), "a position must be an array, but found a number");
	}

	#[test]
	fn to_geo() {
		let line = LineStringGeometry::from(&[[0, 0], [1, 1]]).to_geo();
		assert_eq!(line, geo::LineString::from(vec![(0.0, 0.0), (1.0, 1.0)]));
	}

	#[test]
	fn debug_format() {
		let line = LineStringGeometry::from(&[[1, 2], [3, 4]]);
		assert_eq!(format!("{line:?}"), "[[1.0, 2.0], [3.0, 4.0]]");
	}
}
