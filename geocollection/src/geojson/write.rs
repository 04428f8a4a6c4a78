use crate::FeatureCollection;
use anyhow::{Context, Result};
use std::{
	fs::File,
	io::{BufWriter, Write},
	path::Path,
};

/// Writes the collection as GeoJSON text.
pub fn write_geojson(collection: &FeatureCollection, mut writer: impl Write) -> Result<()> {
	writer.write_all(collection.to_json_string().as_bytes())?;
	Ok(())
}

/// Writes the collection to a GeoJSON file, replacing an existing one.
pub fn write_geojson_file(collection: &FeatureCollection, path: &Path) -> Result<()> {
	log::info!("writing {} features to {path:?}", collection.len());
	let file = File::create(path).with_context(|| format!("failed to create {path:?}"))?;
	let mut writer = BufWriter::new(file);
	write_geojson(collection, &mut writer).with_context(|| format!("failed to write {path:?}"))?;
	writer.flush().with_context(|| format!("failed to write {path:?}"))?;
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{GeoValue, read_geojson_file};
	use geocollection_geometry::GeometryTrait;
	use pretty_assertions::assert_eq;

	const JSON: &str = r#"{"type":"FeatureCollection","features":[
		{"type":"Feature","geometry":{"type":"Point","coordinates":[1.5,2.5]},"properties":{"id":1,"name":"a"}},
		{"type":"Feature","geometry":{"type":"MultiPolygon","coordinates":[[[[0,0],[4,0],[4,4],[0,0]]],[[[5,5],[6,5],[6,6],[5,5]]]]},"properties":{"id":2,"name":null}},
		{"type":"Feature","geometry":{"type":"LineString","coordinates":[[0,0,10],[1,1,20]]},"properties":{"id":3,"tags":["x","y"]}}
	]}"#;

	#[test]
	fn save_and_load_round_trip() -> Result<()> {
		let original = FeatureCollection::from_json_str(JSON)?;
		let dir = tempfile::tempdir()?;
		let path = dir.path().join("out.geojson");

		original.save_as_geojson(&path)?;
		let loaded = read_geojson_file(&path)?;

		assert_eq!(loaded.len(), original.len());
		for (a, b) in original.iter().zip(loaded.iter()) {
			assert_eq!(a.geometry.geometry_type(), b.geometry.geometry_type());
			assert_eq!(a.geometry.to_coord_json(), b.geometry.to_coord_json());
			assert_eq!(a.properties, b.properties);
		}
		assert_eq!(loaded.get(2).unwrap().properties.get("tags"), Some(&GeoValue::from(vec!["x", "y"])));
		Ok(())
	}

	#[test]
	fn bbox_is_not_written() -> Result<()> {
		let collection = FeatureCollection::from_json_str(JSON)?;
		let mut buffer = Vec::new();
		write_geojson(&collection, &mut buffer)?;
		let text = String::from_utf8(buffer)?;
		assert!(!text.contains("bbox"));
		assert!(text.starts_with(r#"{"type":"FeatureCollection","features":[{"type":"Feature""#));

		if let geocollection_geometry::Geometry::MultiPolygon(mp) = &collection.get(1).unwrap().geometry {
			assert_eq!(mp.bbox().as_array(), [0.0, 0.0, 6.0, 6.0]);
		} else {
			panic!("expected a MultiPolygon");
		}
		Ok(())
	}

	#[test]
	fn write_to_missing_directory_fails() {
		let collection = FeatureCollection::from_features(vec![]);
		let err = write_geojson_file(&collection, Path::new("/does/not/exist/out.geojson")).unwrap_err();
		assert!(err.downcast_ref::<std::io::Error>().is_some());
	}
}
