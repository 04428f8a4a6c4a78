use crate::{FeatureCollection, GeoFeature, feature::check_type};
use anyhow::{Context, Result, anyhow};
use serde_json::Value;
use std::{fs::File, io::Read, path::Path};

/// Builds a collection from a parsed GeoJSON `FeatureCollection`.
///
/// Features receive their integer ids in the order of the `features` array. Any invalid feature
/// aborts the whole build.
pub fn parse_geojson_value(value: &Value) -> Result<FeatureCollection> {
	let obj = value
		.as_object()
		.ok_or_else(|| anyhow!("a feature collection must be an object"))?;
	check_type(obj, "FeatureCollection")?;

	let features = obj
		.get("features")
		.ok_or_else(|| anyhow!("feature collection is missing 'features'"))?
		.as_array()
		.ok_or_else(|| anyhow!("'features' must be an array"))?
		.iter()
		.enumerate()
		.map(|(index, feature)| GeoFeature::from_json(feature).with_context(|| format!("error in feature {index}")))
		.collect::<Result<Vec<_>>>()?;

	log::debug!("read {} features", features.len());
	Ok(FeatureCollection::from_features(features))
}

pub fn parse_geojson(json: &str) -> Result<FeatureCollection> {
	let value: Value = serde_json::from_str(json).context("invalid JSON")?;
	parse_geojson_value(&value)
}

pub fn read_geojson(mut reader: impl Read) -> Result<FeatureCollection> {
	let mut buffer = String::new();
	reader.read_to_string(&mut buffer)?;
	parse_geojson(&buffer)
}

pub fn read_geojson_file(path: &Path) -> Result<FeatureCollection> {
	let file = File::open(path).with_context(|| format!("failed to open {path:?}"))?;
	read_geojson(file).with_context(|| format!("failed to read {path:?}"))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::CollectionError;
	use std::io::Cursor;

	#[test]
	fn test_read_geojson_basic() -> Result<()> {
		let json = r#"{"type":"FeatureCollection","features":[{"type":"Feature","geometry":{"type":"Point","coordinates":[0,0]},"properties":{}}]}"#;
		let collection = read_geojson(Cursor::new(json))?;
		assert_eq!(collection.len(), 1);
		assert_eq!(collection.get(0).unwrap().geometry.type_name(), "Point");
		Ok(())
	}

	#[test]
	fn test_parse_geojson_invalid_type() {
		let err = parse_geojson(r#"{"type": "InvalidCollection", "features": []}"#).unwrap_err();
		assert_eq!(err.to_string(), "type must be 'FeatureCollection', but is \"InvalidCollection\"");
	}

	#[test]
	fn test_parse_geojson_invalid_json() {
		let err = parse_geojson(r#"{"type": "#).unwrap_err();
		assert_eq!(err.to_string(), "invalid JSON");
		assert!(err.downcast_ref::<serde_json::Error>().is_some());
	}

	#[test]
	fn test_parse_geojson_missing_features() {
		assert_eq!(
			parse_geojson(r#"{"type": "FeatureCollection"}"#).unwrap_err().to_string(),
			"feature collection is missing 'features'"
		);
		assert_eq!(
			parse_geojson(r#"{"features": {}}"#).unwrap_err().to_string(),
			"'features' must be an array"
		);
		assert_eq!(
			parse_geojson("[]").unwrap_err().to_string(),
			"a feature collection must be an object"
		);
	}

	#[test]
	fn test_unknown_geometry_type_aborts_the_build() {
		let json = r#"{"features": [
			{"geometry": {"type": "Point", "coordinates": [0, 0]}, "properties": {}},
			{"geometry": {"type": "GeometryCollection", "coordinates": []}, "properties": {}}
		]}"#;
		let err = parse_geojson(json).unwrap_err();
		assert_eq!(err.to_string(), "error in feature 1");
		assert_eq!(
			err.downcast_ref::<CollectionError>(),
			Some(&CollectionError::UnknownGeometryType("GeometryCollection".to_string()))
		);
	}

	#[test]
	fn test_read_missing_file() {
		let err = read_geojson_file(Path::new("/does/not/exist.geojson")).unwrap_err();
		let io = err.downcast_ref::<std::io::Error>().unwrap();
		assert_eq!(io.kind(), std::io::ErrorKind::NotFound);
	}
}
