use super::{BBox, GeometryTrait, Position};
use anyhow::Result;
use serde_json::Value;
use std::fmt::Debug;

/// A single position. Its bounding box is the degenerate box `[x, y, x, y]`.
#[derive(Clone, PartialEq)]
pub struct PointGeometry {
	position: Position,
	bbox: BBox,
}

impl PointGeometry {
	#[must_use]
	pub fn new(position: Position) -> Self {
		let bbox = BBox::from_position(&position);
		Self { position, bbox }
	}
	#[must_use]
	pub fn x(&self) -> f64 {
		self.position.x()
	}
	#[must_use]
	pub fn y(&self) -> f64 {
		self.position.y()
	}
	#[must_use]
	pub fn position(&self) -> &Position {
		&self.position
	}
}

impl GeometryTrait for PointGeometry {
	type Geo = geo::Point<f64>;

	fn bbox(&self) -> &BBox {
		&self.bbox
	}

	fn to_coord_json(&self) -> Value {
		self.position.to_json()
	}

	fn from_coord_json(value: &Value) -> Result<Self> {
		Position::from_json(value).map(Self::new)
	}

	fn to_geo(&self) -> geo::Point<f64> {
		geo::Point::from(geo::Coord::from(&self.position))
	}
}

impl Debug for PointGeometry {
	/// Formats the point like its position, e.g. `[x, y]`.
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.position.fmt(f)
	}
}

impl<T> From<T> for PointGeometry
where
	Position: From<T>,
{
	fn from(value: T) -> Self {
		Self::new(Position::from(value))
	}
}
