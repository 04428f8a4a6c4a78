use super::*;
use anyhow::{Result, bail};
use geocollection_geometry::{BBox, Geometry};
use itertools::Itertools;
use serde_json::{Map, Value};
use std::{
	collections::{BTreeMap, HashMap},
	io::Read,
	path::Path,
};

/// A closed, ordered collection of features.
///
/// Every feature is addressed by its integer id: its zero-based position in the source, assigned at
/// construction and never changed. Features can neither be added nor removed afterwards.
///
/// Optionally a property can be designated as *id variable*, an alternate key for lookups. Its
/// values are guaranteed to be pairwise distinct for as long as it is set.
#[derive(Clone, Debug)]
pub struct FeatureCollection {
	features: Vec<GeoFeature>,
	id_variable: Option<String>,
}

impl FeatureCollection {
	pub fn from_features(features: Vec<GeoFeature>) -> Self {
		Self {
			features,
			id_variable: None,
		}
	}

	/// Builds the collection from an already parsed GeoJSON value.
	pub fn from_json(json: &Value) -> Result<Self> {
		Self::from_json_with(json, &LoadOptions::default())
	}

	pub fn from_json_with(json: &Value, options: &LoadOptions) -> Result<Self> {
		let mut collection = parse_geojson_value(json)?;
		collection.apply_options(options)?;
		Ok(collection)
	}

	pub fn from_json_str(json: &str) -> Result<Self> {
		parse_geojson(json)
	}

	pub fn from_reader(reader: impl Read) -> Result<Self> {
		read_geojson(reader)
	}

	/// Reads a GeoJSON file.
	pub fn open(path: &Path) -> Result<Self> {
		Self::open_with(path, &LoadOptions::default())
	}

	pub fn open_with(path: &Path, options: &LoadOptions) -> Result<Self> {
		let mut collection = read_geojson_file(path)?;
		collection.apply_options(options)?;
		Ok(collection)
	}

	fn apply_options(&mut self, options: &LoadOptions) -> Result<()> {
		if let Some(key) = options.id_variable.as_deref() {
			self.set_id_variable(Some(key))?;
		}
		Ok(())
	}

	pub fn n_features(&self) -> usize {
		self.features.len()
	}

	pub fn len(&self) -> usize {
		self.features.len()
	}

	pub fn is_empty(&self) -> bool {
		self.features.is_empty()
	}

	/// The feature with the integer id `id`.
	pub fn get(&self, id: usize) -> Option<&GeoFeature> {
		self.features.get(id)
	}

	pub fn iter(&self) -> std::slice::Iter<'_, GeoFeature> {
		self.features.iter()
	}

	/// Union of the bounding boxes of all geometries.
	pub fn bbox(&self) -> BBox {
		BBox::from_bboxes(self.features.iter().map(|f| f.geometry.bbox()))
	}

	/// The kind of every property of the first feature.
	///
	/// Later features are not inspected, so this is no schema of the whole collection.
	pub fn property_types(&self) -> BTreeMap<String, PropertyKind> {
		self
			.features
			.first()
			.map(|f| f.properties.iter().map(|(k, v)| (k.clone(), v.kind())).collect())
			.unwrap_or_default()
	}

	/// Projects the properties `keys` of every feature into one row per feature, in id order.
	pub fn get_properties_as_lists(&self, keys: &[&str]) -> Result<Vec<Vec<GeoValue>>> {
		self
			.features
			.iter()
			.enumerate()
			.map(|(id, feature)| {
				keys
					.iter()
					.map(|key| {
						feature.properties.get(key).cloned().ok_or_else(|| {
							anyhow::Error::from(CollectionError::MissingPropertyKey {
								key: (*key).to_string(),
								id,
							})
						})
					})
					.collect::<Result<Vec<GeoValue>>>()
			})
			.collect()
	}

	pub fn get_properties_as_array(&self, keys: &[&str]) -> Result<PropertyTable> {
		let rows = self.get_properties_as_lists(keys)?;
		Ok(PropertyTable::new(keys.iter().map(|k| (*k).to_string()).collect(), rows))
	}

	fn get_property_column(&self, key: &str) -> Result<Vec<GeoValue>> {
		Ok(self.get_properties_as_lists(&[key])?.into_iter().flatten().collect())
	}

	pub fn id_variable(&self) -> Option<&str> {
		self.id_variable.as_deref()
	}

	/// Designates the property `key` as id variable, or clears it with `None`.
	///
	/// Returns `Ok(false)` without changing anything if the values of `key` are not unique;
	/// the rejection is reported with a warning. Fails if some feature lacks the property.
	pub fn set_id_variable(&mut self, key: Option<&str>) -> Result<bool> {
		let Some(key) = key else {
			self.id_variable = None;
			return Ok(true);
		};

		if Self::is_unique(&self.get_property_column(key)?) {
			log::debug!("using '{key}' as id variable");
			self.id_variable = Some(key.to_string());
			Ok(true)
		} else {
			log::warn!("{}", CollectionError::NonUniqueIdVariable(key.to_string()));
			Ok(false)
		}
	}

	/// The values of the id variable, in id order.
	pub fn id_variable_values(&self) -> Result<Vec<GeoValue>> {
		match &self.id_variable {
			Some(key) => self.get_property_column(key),
			None => bail!(CollectionError::IdVariableNotSet),
		}
	}

	/// Resolves id variable values to integer feature ids.
	pub fn get_feature_ids(&self, values: &[GeoValue]) -> Result<Vec<usize>> {
		let column = self.id_variable_values()?;

		let mut index: HashMap<&GeoValue, usize> = HashMap::with_capacity(column.len());
		for (id, value) in column.iter().enumerate() {
			index.entry(value).or_insert(id);
		}

		values
			.iter()
			.map(|value| {
				index
					.get(value)
					.copied()
					.ok_or_else(|| anyhow::Error::from(CollectionError::ValueNotFound(value.clone())))
			})
			.collect()
	}

	fn resolve_ids(&self, values: Option<&[GeoValue]>) -> Result<Vec<usize>> {
		match values {
			Some(values) if !values.is_empty() => self.get_feature_ids(values),
			_ => Ok((0..self.features.len()).collect()),
		}
	}

	/// Features matching `values` of the id variable, in the order of `values`.
	///
	/// `None` or an empty slice yields all features in id order; no id variable is needed then.
	///
	/// The ids are resolved eagerly, so lookup errors surface here; the features are yielded lazily.
	pub fn get_features(&self, values: Option<&[GeoValue]>) -> Result<impl Iterator<Item = &GeoFeature> + '_> {
		let ids = self.resolve_ids(values)?;
		Ok(ids.into_iter().map(move |id| &self.features[id]))
	}

	/// Like [`FeatureCollection::get_features`], but yields the geometries only.
	pub fn get_geometries(&self, values: Option<&[GeoValue]>) -> Result<impl Iterator<Item = &Geometry> + '_> {
		Ok(self.get_features(values)?.map(|f| &f.geometry))
	}

	/// The coordinate payload of every geometry, in id order.
	pub fn geometry_coordinates(&self) -> impl Iterator<Item = Value> + '_ {
		self.features.iter().map(|f| f.geometry.to_coord_json())
	}

	/// `true` if no value occurs twice.
	pub fn is_unique(column: &[GeoValue]) -> bool {
		column.iter().all_unique()
	}

	/// The whole collection as GeoJSON value.
	pub fn to_json(&self) -> Value {
		let mut obj = Map::new();
		obj.insert("type".to_string(), Value::from("FeatureCollection"));
		obj.insert(
			"features".to_string(),
			Value::Array(self.features.iter().map(GeoFeature::to_json).collect()),
		);
		Value::Object(obj)
	}

	pub fn to_json_string(&self) -> String {
		self.to_json().to_string()
	}

	pub fn save_as_geojson(&self, path: &Path) -> Result<()> {
		write_geojson_file(self, path)
	}
}

impl<'a> IntoIterator for &'a FeatureCollection {
	type Item = &'a GeoFeature;
	type IntoIter = std::slice::Iter<'a, GeoFeature>;
	fn into_iter(self) -> Self::IntoIter {
		self.features.iter()
	}
}
