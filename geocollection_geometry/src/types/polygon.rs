use super::{BBox, CompositeGeometryTrait, GeometryTrait, RingGeometry};
use crate::json::parse_array;
use anyhow::Result;
use serde_json::Value;
use std::fmt::Debug;

/// A polygon made of rings. The first ring is the exterior, all following rings are holes.
///
/// Holes are not distinguished when computing the bounding box: it is the union of all ring boxes.
/// A polygon without rings has the empty box [`BBox::EMPTY`].
#[derive(Clone, PartialEq)]
pub struct PolygonGeometry {
	rings: Vec<RingGeometry>,
	bbox: BBox,
}

impl PolygonGeometry {
	#[must_use]
	pub fn new(rings: Vec<RingGeometry>) -> Self {
		let bbox = BBox::from_bboxes(rings.iter().map(GeometryTrait::bbox));
		Self { rings, bbox }
	}

	/// The bounding box of every ring, in ring order.
	#[must_use]
	pub fn bboxes(&self) -> Vec<BBox> {
		self.rings.iter().map(|ring| *ring.bbox()).collect()
	}

	#[must_use]
	pub fn exterior(&self) -> Option<&RingGeometry> {
		self.rings.first()
	}

	#[must_use]
	pub fn holes(&self) -> &[RingGeometry] {
		self.rings.get(1..).unwrap_or_default()
	}
}

impl GeometryTrait for PolygonGeometry {
	type Geo = geo::Polygon<f64>;

	fn bbox(&self) -> &BBox {
		&self.bbox
	}

	fn to_coord_json(&self) -> Value {
		Value::from(self.rings.iter().map(GeometryTrait::to_coord_json).collect::<Vec<_>>())
	}

	fn from_coord_json(value: &Value) -> Result<Self> {
		parse_array(value, "polygon coordinates", RingGeometry::from_coord_json).map(Self::new)
	}

	fn to_geo(&self) -> geo::Polygon<f64> {
		let exterior = self
			.exterior()
			.map_or_else(|| geo::LineString::new(vec![]), GeometryTrait::to_geo);
		geo::Polygon::new(exterior, self.holes().iter().map(GeometryTrait::to_geo).collect())
	}
}

impl CompositeGeometryTrait<RingGeometry> for PolygonGeometry {
	fn as_slice(&self) -> &[RingGeometry] {
		&self.rings
	}
	fn into_inner(self) -> Vec<RingGeometry> {
		self.rings
	}
}

impl Debug for PolygonGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.rings).finish()
	}
}

crate::impl_from_array!(PolygonGeometry, RingGeometry);
