use anyhow::Result;
use clap::Args;
use geocollection::{FeatureCollection, LoadOptions};
use std::{fmt::Write, path::PathBuf};

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// GeoJSON file containing a FeatureCollection
	#[arg(required = true)]
	filename: PathBuf,

	/// property to validate as id variable
	#[arg(long, short)]
	id_variable: Option<String>,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	print!("{}", report(arguments)?);
	Ok(())
}

fn report(arguments: &Subcommand) -> Result<String> {
	let mut options = LoadOptions::new();
	if let Some(key) = &arguments.id_variable {
		options = options.with_id_variable(key);
	}
	let collection = FeatureCollection::open_with(&arguments.filename, &options)?;

	let mut text = String::new();
	writeln!(text, "features: {}", collection.n_features())?;
	writeln!(text, "bbox: {}", collection.bbox())?;
	writeln!(text, "id variable: {}", collection.id_variable().unwrap_or("none"))?;
	writeln!(text, "property types:")?;
	for (key, kind) in collection.property_types() {
		writeln!(text, "  {key}: {kind}")?;
	}
	Ok(text)
}
