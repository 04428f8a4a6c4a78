use super::{BBox, CompositeGeometryTrait, GeometryTrait, PointGeometry, Position};
use crate::json::parse_array;
use anyhow::{Result, ensure};
use serde_json::Value;
use std::fmt::Debug;

/// A collection of points.
///
/// All points must have the same number of ordinates.
#[derive(Clone, PartialEq)]
pub struct MultiPointGeometry {
	points: Vec<PointGeometry>,
	bbox: BBox,
}

impl MultiPointGeometry {
	/// # Panics
	/// Panics if the points do not share the same dimension. Use
	/// [`MultiPointGeometry::from_coord_json`] for unchecked input.
	#[must_use]
	pub fn new(points: Vec<PointGeometry>) -> Self {
		assert!(
			has_uniform_dimension(&points),
			"MultiPoint positions must share the same dimension"
		);
		let bbox = BBox::from_bboxes(points.iter().map(GeometryTrait::bbox));
		Self { points, bbox }
	}
}

fn has_uniform_dimension(points: &[PointGeometry]) -> bool {
	points
		.windows(2)
		.all(|w| w[0].position().dimension() == w[1].position().dimension())
}

impl GeometryTrait for MultiPointGeometry {
	type Geo = geo::MultiPoint<f64>;

	/// Componentwise min/max over all points.
	fn bbox(&self) -> &BBox {
		&self.bbox
	}

	fn to_coord_json(&self) -> Value {
		Value::from(self.points.iter().map(GeometryTrait::to_coord_json).collect::<Vec<_>>())
	}

	fn from_coord_json(value: &Value) -> Result<Self> {
		let points = parse_array(value, "multi point coordinates", |v| {
			Position::from_json(v).map(PointGeometry::new)
		})?;
		ensure!(
			has_uniform_dimension(&points),
			"MultiPoint positions must share the same dimension"
		);
		Ok(Self::new(points))
	}

	fn to_geo(&self) -> geo::MultiPoint<f64> {
		geo::MultiPoint::new(self.points.iter().map(GeometryTrait::to_geo).collect())
	}
}

impl CompositeGeometryTrait<PointGeometry> for MultiPointGeometry {
	fn as_slice(&self) -> &[PointGeometry] {
		&self.points
	}
	fn into_inner(self) -> Vec<PointGeometry> {
		self.points
	}
}

impl Debug for MultiPointGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.points).finish()
	}
}

crate::impl_from_array!(MultiPointGeometry, PointGeometry);
