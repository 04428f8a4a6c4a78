use crate::GeometryError;
use std::{fmt::Display, str::FromStr};

/// The closed set of GeoJSON geometry type tags.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GeometryType {
	Point,
	MultiPoint,
	LineString,
	MultiLineString,
	Polygon,
	MultiPolygon,
}

impl GeometryType {
	pub const ALL: [GeometryType; 6] = [
		GeometryType::Point,
		GeometryType::MultiPoint,
		GeometryType::LineString,
		GeometryType::MultiLineString,
		GeometryType::Polygon,
		GeometryType::MultiPolygon,
	];

	/// The GeoJSON `type` tag, e.g. `"MultiPolygon"`.
	#[must_use]
	pub fn as_str(&self) -> &'static str {
		match self {
			GeometryType::Point => "Point",
			GeometryType::MultiPoint => "MultiPoint",
			GeometryType::LineString => "LineString",
			GeometryType::MultiLineString => "MultiLineString",
			GeometryType::Polygon => "Polygon",
			GeometryType::MultiPolygon => "MultiPolygon",
		}
	}
}

impl FromStr for GeometryType {
	type Err = GeometryError;

	fn from_str(tag: &str) -> Result<Self, Self::Err> {
		GeometryType::ALL
			.into_iter()
			.find(|t| t.as_str() == tag)
			.ok_or_else(|| GeometryError::UnknownType(tag.to_string()))
	}
}

impl Display for GeometryType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}
