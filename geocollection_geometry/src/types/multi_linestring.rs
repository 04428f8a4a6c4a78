use super::{BBox, CompositeGeometryTrait, GeometryTrait, LineStringGeometry};
use crate::json::parse_array;
use anyhow::Result;
use serde_json::Value;
use std::fmt::Debug;

#[derive(Clone, PartialEq)]
pub struct MultiLineStringGeometry {
	lines: Vec<LineStringGeometry>,
	bbox: BBox,
}

impl MultiLineStringGeometry {
	#[must_use]
	pub fn new(lines: Vec<LineStringGeometry>) -> Self {
		let bbox = BBox::from_bboxes(lines.iter().map(GeometryTrait::bbox));
		Self { lines, bbox }
	}
}

impl GeometryTrait for MultiLineStringGeometry {
	type Geo = geo::MultiLineString<f64>;

	/// Union of the bounding boxes of all lines.
	fn bbox(&self) -> &BBox {
		&self.bbox
	}

	fn to_coord_json(&self) -> Value {
		Value::from(self.lines.iter().map(GeometryTrait::to_coord_json).collect::<Vec<_>>())
	}

	fn from_coord_json(value: &Value) -> Result<Self> {
		parse_array(value, "multi line string coordinates", LineStringGeometry::from_coord_json).map(Self::new)
	}

	fn to_geo(&self) -> geo::MultiLineString<f64> {
		geo::MultiLineString::new(self.lines.iter().map(GeometryTrait::to_geo).collect())
	}
}

impl CompositeGeometryTrait<LineStringGeometry> for MultiLineStringGeometry {
	fn as_slice(&self) -> &[LineStringGeometry] {
		&self.lines
	}
	fn into_inner(self) -> Vec<LineStringGeometry> {
		self.lines
	}
}

impl Debug for MultiLineStringGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.lines).finish()
	}
}

crate::impl_from_array!(MultiLineStringGeometry, LineStringGeometry);
