use super::Position;
use serde_json::Value;
use std::fmt::{Debug, Display};

/// An axis-aligned bounding box `[x_min, y_min, x_max, y_max]`.
///
/// Boxes are reduced by folding: start at [`BBox::EMPTY`], which has infinite lower bounds of
/// `+inf` and upper bounds of `-inf`, then widen with componentwise `min`/`max`. A box that never
/// saw a position stays at the sentinel, which is how empty geometries are signalled.
#[derive(Clone, Copy, PartialEq)]
pub struct BBox {
	pub x_min: f64,
	pub y_min: f64,
	pub x_max: f64,
	pub y_max: f64,
}

impl BBox {
	/// The neutral element of [`BBox::union`].
	pub const EMPTY: BBox = BBox {
		x_min: f64::INFINITY,
		y_min: f64::INFINITY,
		x_max: f64::NEG_INFINITY,
		y_max: f64::NEG_INFINITY,
	};

	#[must_use]
	pub fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Self {
		Self {
			x_min,
			y_min,
			x_max,
			y_max,
		}
	}

	/// The degenerate box covering exactly one position.
	#[must_use]
	pub fn from_position(position: &Position) -> Self {
		Self::new(position.x(), position.y(), position.x(), position.y())
	}

	/// Ring reduction: `[min(x), min(y), max(x), max(y)]` over a sequence of positions.
	#[must_use]
	pub fn from_positions<'a>(positions: impl IntoIterator<Item = &'a Position>) -> Self {
		positions.into_iter().fold(Self::EMPTY, |bbox, p| bbox.include(p))
	}

	/// Union of any number of boxes, starting from [`BBox::EMPTY`].
	#[must_use]
	pub fn from_bboxes<'a>(bboxes: impl IntoIterator<Item = &'a BBox>) -> Self {
		bboxes.into_iter().fold(Self::EMPTY, |bbox, other| bbox.union(other))
	}

	/// Returns this box widened to include `position`.
	#[must_use]
	pub fn include(self, position: &Position) -> Self {
		Self::new(
			self.x_min.min(position.x()),
			self.y_min.min(position.y()),
			self.x_max.max(position.x()),
			self.y_max.max(position.y()),
		)
	}

	/// Componentwise union: min of the lower bounds, max of the upper bounds.
	#[must_use]
	pub fn union(self, other: &BBox) -> Self {
		Self::new(
			self.x_min.min(other.x_min),
			self.y_min.min(other.y_min),
			self.x_max.max(other.x_max),
			self.y_max.max(other.y_max),
		)
	}

	/// `true` for a box that encloses nothing, such as [`BBox::EMPTY`].
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.x_min > self.x_max || self.y_min > self.y_max
	}

	#[must_use]
	pub fn contains(&self, position: &Position) -> bool {
		self.x_min <= position.x() && position.x() <= self.x_max && self.y_min <= position.y() && position.y() <= self.y_max
	}

	#[must_use]
	pub fn as_array(&self) -> [f64; 4] {
		[self.x_min, self.y_min, self.x_max, self.y_max]
	}

	/// Converts into a `geo::Rect`, or `None` if the box is empty.
	#[must_use]
	pub fn to_rect(&self) -> Option<geo::Rect<f64>> {
		if self.is_empty() {
			return None;
		}
		Some(geo::Rect::new(
			geo::Coord {
				x: self.x_min,
				y: self.y_min,
			},
			geo::Coord {
				x: self.x_max,
				y: self.y_max,
			},
		))
	}

	/// JSON array of the four bounds; `null` entries for the infinite bounds of an empty box.
	#[must_use]
	pub fn to_json(&self) -> Value {
		Value::from(self.as_array().to_vec())
	}
}

impl Default for BBox {
	fn default() -> Self {
		Self::EMPTY
	}
}

impl From<[f64; 4]> for BBox {
	fn from(value: [f64; 4]) -> Self {
		Self::new(value[0], value[1], value[2], value[3])
	}
}

impl Debug for BBox {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.as_array().fmt(f)
	}
}

impl Display for BBox {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "[{}, {}, {}, {}]", self.x_min, self.y_min, self.x_max, self.y_max)
	}
}
