use anyhow::Result;
use clap::Args;
use geocollection::{DEFAULT_OUTPUT_FILENAME, FeatureCollection};
use std::path::PathBuf;

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// GeoJSON file to read
	#[arg(required = true)]
	input_file: PathBuf,

	/// GeoJSON file to write
	#[arg(default_value = DEFAULT_OUTPUT_FILENAME)]
	output_file: PathBuf,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	log::info!("convert {:?} to {:?}", arguments.input_file, arguments.output_file);

	let collection = FeatureCollection::open(&arguments.input_file)?;
	collection.save_as_geojson(&arguments.output_file)?;

	eprintln!("wrote {} features to {:?}", collection.n_features(), arguments.output_file);
	Ok(())
}

#[cfg(test)]
mod tests {
	use crate::tests::{CITIES, run_command};
	use geocollection::FeatureCollection;

	#[test]
	fn test_round_trip() -> anyhow::Result<()> {
		let dir = tempfile::tempdir()?;
		let output = dir.path().join("cities.geojson");
		run_command(vec!["geocollection", "convert", CITIES, output.to_str().unwrap()])?;

		let original = FeatureCollection::open(std::path::Path::new(CITIES))?;
		let converted = FeatureCollection::open(&output)?;
		assert_eq!(original.to_json(), converted.to_json());
		Ok(())
	}

	#[test]
	fn test_missing_input() {
		let err = run_command(vec!["geocollection", "convert", "/does/not/exist.geojson"]).unwrap_err();
		assert!(err.downcast_ref::<std::io::Error>().is_some());
	}
}
