use super::*;
use anyhow::Result;
use serde_json::{Map, Value};
use std::fmt::{Debug, Display};

/// A geometry of one of the six GeoJSON kinds.
#[derive(Clone, PartialEq)]
pub enum Geometry {
	Point(PointGeometry),
	LineString(LineStringGeometry),
	Polygon(PolygonGeometry),
	MultiPoint(MultiPointGeometry),
	MultiLineString(MultiLineStringGeometry),
	MultiPolygon(MultiPolygonGeometry),
}

impl Geometry {
	/// Builds a geometry from a GeoJSON type tag and the value of its `coordinates` member.
	///
	/// Fails with [`GeometryError::UnknownType`] if the tag is not one of the six supported kinds,
	/// or with a description of the problem if the coordinates do not fit the kind.
	pub fn new(tag: &str, coordinates: &Value) -> Result<Self> {
		let geometry_type = tag.parse::<GeometryType>()?;
		Self::from_coord_json(geometry_type, coordinates)
	}

	pub fn from_coord_json(geometry_type: GeometryType, coordinates: &Value) -> Result<Self> {
		use GeometryType as T;
		Ok(match geometry_type {
			T::Point => Geometry::Point(PointGeometry::from_coord_json(coordinates)?),
			T::MultiPoint => Geometry::MultiPoint(MultiPointGeometry::from_coord_json(coordinates)?),
			T::LineString => Geometry::LineString(LineStringGeometry::from_coord_json(coordinates)?),
			T::MultiLineString => Geometry::MultiLineString(MultiLineStringGeometry::from_coord_json(coordinates)?),
			T::Polygon => Geometry::Polygon(PolygonGeometry::from_coord_json(coordinates)?),
			T::MultiPolygon => Geometry::MultiPolygon(MultiPolygonGeometry::from_coord_json(coordinates)?),
		})
	}

	pub fn new_point<T>(value: T) -> Self
	where
		PointGeometry: From<T>,
	{
		Self::Point(PointGeometry::from(value))
	}
	pub fn new_line_string<T>(value: T) -> Self
	where
		LineStringGeometry: From<T>,
	{
		Self::LineString(LineStringGeometry::from(value))
	}
	pub fn new_polygon<T>(value: T) -> Self
	where
		PolygonGeometry: From<T>,
	{
		Self::Polygon(PolygonGeometry::from(value))
	}
	pub fn new_multi_point<T>(value: T) -> Self
	where
		MultiPointGeometry: From<T>,
	{
		Self::MultiPoint(MultiPointGeometry::from(value))
	}
	pub fn new_multi_line_string<T>(value: T) -> Self
	where
		MultiLineStringGeometry: From<T>,
	{
		Self::MultiLineString(MultiLineStringGeometry::from(value))
	}
	pub fn new_multi_polygon<T>(value: T) -> Self
	where
		MultiPolygonGeometry: From<T>,
	{
		Self::MultiPolygon(MultiPolygonGeometry::from(value))
	}

	#[must_use]
	pub fn geometry_type(&self) -> GeometryType {
		match self {
			Geometry::Point(_) => GeometryType::Point,
			Geometry::LineString(_) => GeometryType::LineString,
			Geometry::Polygon(_) => GeometryType::Polygon,
			Geometry::MultiPoint(_) => GeometryType::MultiPoint,
			Geometry::MultiLineString(_) => GeometryType::MultiLineString,
			Geometry::MultiPolygon(_) => GeometryType::MultiPolygon,
		}
	}

	#[must_use]
	pub fn type_name(&self) -> &'static str {
		self.geometry_type().as_str()
	}

	#[must_use]
	pub fn bbox(&self) -> &BBox {
		match self {
			Geometry::Point(g) => g.bbox(),
			Geometry::LineString(g) => g.bbox(),
			Geometry::Polygon(g) => g.bbox(),
			Geometry::MultiPoint(g) => g.bbox(),
			Geometry::MultiLineString(g) => g.bbox(),
			Geometry::MultiPolygon(g) => g.bbox(),
		}
	}

	/// The value of the GeoJSON `coordinates` member.
	#[must_use]
	pub fn to_coord_json(&self) -> Value {
		match self {
			Geometry::Point(g) => g.to_coord_json(),
			Geometry::LineString(g) => g.to_coord_json(),
			Geometry::Polygon(g) => g.to_coord_json(),
			Geometry::MultiPoint(g) => g.to_coord_json(),
			Geometry::MultiLineString(g) => g.to_coord_json(),
			Geometry::MultiPolygon(g) => g.to_coord_json(),
		}
	}

	/// The GeoJSON geometry object `{"type": ..., "coordinates": ...}`.
	/// The bounding box is derived data and is not written.
	#[must_use]
	pub fn to_json(&self) -> Value {
		let mut obj = Map::new();
		obj.insert("type".to_string(), Value::from(self.type_name()));
		obj.insert("coordinates".to_string(), self.to_coord_json());
		Value::Object(obj)
	}

	#[must_use]
	pub fn to_geo(&self) -> geo::Geometry<f64> {
		match self {
			Geometry::Point(g) => geo::Geometry::Point(g.to_geo()),
			Geometry::LineString(g) => geo::Geometry::LineString(g.to_geo()),
			Geometry::Polygon(g) => geo::Geometry::Polygon(g.to_geo()),
			Geometry::MultiPoint(g) => geo::Geometry::MultiPoint(g.to_geo()),
			Geometry::MultiLineString(g) => geo::Geometry::MultiLineString(g.to_geo()),
			Geometry::MultiPolygon(g) => geo::Geometry::MultiPolygon(g.to_geo()),
		}
	}

	#[cfg(test)]
	pub fn new_example() -> Self {
		Self::new_multi_polygon(vec![
			vec![
				vec![[0.0, 0.0], [5.0, 0.0], [2.5, 4.0], [0.0, 0.0]],
				vec![[2.0, 1.0], [2.5, 2.0], [3.0, 1.0], [2.0, 1.0]],
			],
			vec![
				vec![[6.0, 0.0], [9.0, 0.0], [9.0, 4.0], [6.0, 4.0], [6.0, 0.0]],
				vec![[7.0, 1.0], [7.0, 3.0], [8.0, 3.0], [8.0, 1.0], [7.0, 1.0]],
			],
		])
	}
}

impl Debug for Geometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let inner: &dyn Debug = match self {
			Geometry::Point(g) => g,
			Geometry::LineString(g) => g,
			Geometry::Polygon(g) => g,
			Geometry::MultiPoint(g) => g,
			Geometry::MultiLineString(g) => g,
			Geometry::MultiPolygon(g) => g,
		};
		f.debug_tuple(self.type_name()).field(inner).finish()
	}
}

/// A short human readable summary, e.g. `Polygon: 2 Rings, 1 Holes`.
impl Display for Geometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Geometry::Polygon(g) => write!(
				f,
				"Polygon: {} Rings, {} Holes",
				g.len(),
				g.len().saturating_sub(1)
			),
			Geometry::MultiPolygon(g) => write!(f, "MultiPolygon: {} Polygon(s)", g.len()),
			_ => write!(f, "{}: {}", self.type_name(), self.to_coord_json()),
		}
	}
}
