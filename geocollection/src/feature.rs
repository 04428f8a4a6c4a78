use super::*;
use anyhow::{Context, Result, anyhow, bail};
use geocollection_geometry::{Geometry, GeometryType};
use serde_json::{Map, Value};

/// One geometry plus its properties.
///
/// `id` is the optional GeoJSON feature identifier; it is carried through unchanged and is not
/// related to the integer position of the feature in its collection.
#[derive(Clone, Debug, PartialEq)]
pub struct GeoFeature {
	pub id: Option<GeoValue>,
	pub geometry: Geometry,
	pub properties: GeoProperties,
}

impl GeoFeature {
	pub fn new(geometry: Geometry) -> Self {
		Self {
			id: None,
			geometry,
			properties: GeoProperties::new(),
		}
	}

	pub fn set_properties(&mut self, properties: GeoProperties) {
		self.properties = properties;
	}

	pub fn set_property<T>(&mut self, key: String, value: T)
	where
		GeoValue: From<T>,
	{
		self.properties.insert(key, GeoValue::from(value));
	}

	/// Reads one GeoJSON feature record.
	///
	/// The geometry type tag is dispatched first; a tag outside the six supported kinds fails with
	/// [`CollectionError::UnknownGeometryType`].
	pub fn from_json(value: &Value) -> Result<Self> {
		let obj = value.as_object().ok_or_else(|| anyhow!("a feature must be an object"))?;
		check_type(obj, "Feature")?;

		let geometry = obj
			.get("geometry")
			.filter(|g| !g.is_null())
			.ok_or_else(|| anyhow!("feature is missing 'geometry'"))?
			.as_object()
			.ok_or_else(|| anyhow!("'geometry' must be an object"))?;

		let tag = geometry
			.get("type")
			.and_then(Value::as_str)
			.ok_or_else(|| anyhow!("geometry must have a type"))?;
		let geometry_type = tag
			.parse::<GeometryType>()
			.map_err(|_| CollectionError::UnknownGeometryType(tag.to_string()))?;
		let coordinates = geometry
			.get("coordinates")
			.ok_or_else(|| anyhow!("geometry must have coordinates"))?;
		let geometry = Geometry::from_coord_json(geometry_type, coordinates)
			.with_context(|| format!("invalid coordinates of {geometry_type}"))?;

		let properties = match obj.get("properties") {
			Some(p) => GeoProperties::from_json(p)?,
			None => GeoProperties::new(),
		};

		Ok(GeoFeature {
			id: obj.get("id").filter(|id| !id.is_null()).map(GeoValue::from),
			geometry,
			properties,
		})
	}

	/// The GeoJSON feature object. The bounding box is never written.
	pub fn to_json(&self) -> Value {
		let mut obj = Map::new();
		obj.insert("type".to_string(), Value::from("Feature"));
		if let Some(id) = &self.id {
			obj.insert("id".to_string(), id.to_json());
		}
		obj.insert("geometry".to_string(), self.geometry.to_json());
		obj.insert("properties".to_string(), self.properties.to_json());
		Value::Object(obj)
	}

	#[cfg(test)]
	pub fn new_example() -> Self {
		Self {
			id: Some(GeoValue::from(13)),
			geometry: Geometry::new_point([7.26, 43.7]),
			properties: GeoProperties::from(vec![
				("name", GeoValue::from("Nice")),
				("population", GeoValue::from(348085)),
				("is_nice", GeoValue::from(true)),
			]),
		}
	}
}

/// A `type` member is optional, but if present it must name `expected`.
pub(crate) fn check_type(obj: &Map<String, Value>, expected: &str) -> Result<()> {
	match obj.get("type") {
		None => Ok(()),
		Some(Value::String(t)) if t == expected => Ok(()),
		Some(other) => bail!("type must be '{expected}', but is {other}"),
	}
}
