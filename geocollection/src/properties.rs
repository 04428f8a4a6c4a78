use super::GeoValue;
use anyhow::{Result, bail};
use serde_json::{Map, Value};
use std::{fmt::Debug, vec};

/// The property mapping of a feature.
///
/// Entries keep their insertion order, which for parsed features is the order of the source
/// document. Keys are unique.
#[derive(Clone, Default, PartialEq)]
pub struct GeoProperties {
	properties: Vec<(String, GeoValue)>,
}

impl GeoProperties {
	pub fn new() -> GeoProperties {
		GeoProperties { properties: Vec::new() }
	}

	/// Reads the value of a GeoJSON `properties` member. `null` gives an empty mapping.
	pub fn from_json(value: &Value) -> Result<GeoProperties> {
		match value {
			Value::Null => Ok(GeoProperties::new()),
			Value::Object(obj) => Ok(obj.iter().map(|(k, v)| (k.clone(), GeoValue::from(v))).collect()),
			_ => bail!("properties must be an object"),
		}
	}

	pub fn to_json(&self) -> Value {
		Value::Object(
			self
				.properties
				.iter()
				.map(|(k, v)| (k.clone(), v.to_json()))
				.collect::<Map<_, _>>(),
		)
	}

	/// Sets `key` to `value`. An existing key keeps its position.
	pub fn insert(&mut self, key: String, value: GeoValue) {
		if let Some(entry) = self.properties.iter_mut().find(|(k, _)| *k == key) {
			entry.1 = value;
		} else {
			self.properties.push((key, value));
		}
	}
	pub fn get(&self, key: &str) -> Option<&GeoValue> {
		self.properties.iter().find(|(k, _)| k == key).map(|(_, v)| v)
	}
	pub fn contains_key(&self, key: &str) -> bool {
		self.get(key).is_some()
	}
	pub fn len(&self) -> usize {
		self.properties.len()
	}
	pub fn is_empty(&self) -> bool {
		self.properties.is_empty()
	}
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.properties.iter().map(|(k, _)| k.as_str())
	}
	pub fn iter(&self) -> impl Iterator<Item = (&String, &GeoValue)> {
		self.properties.iter().map(|(k, v)| (k, v))
	}
}

impl IntoIterator for GeoProperties {
	type Item = (String, GeoValue);
	type IntoIter = vec::IntoIter<(String, GeoValue)>;
	fn into_iter(self) -> Self::IntoIter {
		self.properties.into_iter()
	}
}

impl From<Vec<(&str, GeoValue)>> for GeoProperties {
	fn from(value: Vec<(&str, GeoValue)>) -> Self {
		value.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
	}
}

impl FromIterator<(String, GeoValue)> for GeoProperties {
	fn from_iter<T: IntoIterator<Item = (String, GeoValue)>>(iter: T) -> Self {
		let mut properties = GeoProperties::new();
		for (key, value) in iter {
			properties.insert(key, value);
		}
		properties
	}
}

impl Debug for GeoProperties {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_map().entries(self.iter()).finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn from_json_and_back() -> Result<()> {
		let json = json!({"name": "Nice", "population": 348085, "is_nice": true, "note": null});
		let properties = GeoProperties::from_json(&json)?;
		assert_eq!(properties.len(), 4);
		assert_eq!(properties.get("population"), Some(&GeoValue::UInt(348085)));
		assert_eq!(properties.get("note"), Some(&GeoValue::Null));
		assert_eq!(properties.to_json(), json);
		Ok(())
	}

	#[test]
	fn null_properties_are_empty() -> Result<()> {
		assert!(GeoProperties::from_json(&Value::Null)?.is_empty());
		Ok(())
	}

	#[test]
	fn rejects_non_objects() {
		assert_eq!(
			GeoProperties::from_json(&json!([1])).unwrap_err().to_string(),
			"properties must be an object"
		);
	}

	#[test]
	fn source_order_is_kept() -> Result<()> {
		let json: Value = serde_json::from_str(r#"{"zeta": 1, "alpha": {"y": 2, "b": 3}, "mid": null}"#)?;
		let properties = GeoProperties::from_json(&json)?;
		assert_eq!(properties.keys().collect::<Vec<_>>(), vec!["zeta", "alpha", "mid"]);
		assert_eq!(
			properties.to_json().to_string(),
			r#"{"zeta":1,"alpha":{"y":2,"b":3},"mid":null}"#
		);
		Ok(())
	}

	#[test]
	fn insert_replaces_in_place() {
		let mut properties = GeoProperties::from(vec![("a", GeoValue::from(1)), ("b", GeoValue::from(2))]);
		properties.insert("a".to_string(), GeoValue::from(3));
		assert_eq!(properties.len(), 2);
		assert_eq!(properties.keys().collect::<Vec<_>>(), vec!["a", "b"]);
		assert_eq!(properties.get("a"), Some(&GeoValue::from(3)));
	}

	#[test]
	fn insert_get_and_debug() {
		let mut properties = GeoProperties::from(vec![("a", GeoValue::from(1))]);
		properties.insert("b".to_string(), GeoValue::from("x"));
		assert!(properties.contains_key("b"));
		assert!(!properties.contains_key("c"));
		assert_eq!(format!("{properties:?}"), r#"{"a": UInt(1), "b": String("x")}"#);
	}
}
