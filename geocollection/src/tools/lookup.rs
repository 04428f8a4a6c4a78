use anyhow::{Result, anyhow, bail};
use clap::Args;
use geocollection::{FeatureCollection, GeoValue};
use std::{fmt::Write, path::PathBuf};

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// GeoJSON file containing a FeatureCollection
	#[arg(required = true)]
	filename: PathBuf,

	/// property whose values identify the features
	#[arg(long, short, required = true)]
	id_variable: String,

	/// values of the id variable to look up
	/// numbers, `true`, `false` and `null` are matched as such, everything else as string
	#[arg(required = true, num_args = 1.., verbatim_doc_comment)]
	values: Vec<String>,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	print!("{}", report(arguments)?);
	Ok(())
}

fn report(arguments: &Subcommand) -> Result<String> {
	let mut collection = FeatureCollection::open(&arguments.filename)?;
	if !collection.set_id_variable(Some(arguments.id_variable.as_str()))? {
		bail!("'{}' cannot be used as id variable", arguments.id_variable);
	}

	let values = arguments.values.iter().map(|v| GeoValue::parse_str(v)).collect::<Vec<_>>();
	let ids = collection.get_feature_ids(&values)?;

	let mut text = String::new();
	for (value, &id) in values.iter().zip(&ids) {
		let feature = collection.get(id).ok_or_else(|| anyhow!("feature {id} does not exist"))?;
		writeln!(text, "{value} -> {id}: {}", feature.geometry)?;
	}
	Ok(text)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::tests::{CITIES, run_command};
	use geocollection::CollectionError;

	fn subcommand(id_variable: &str, values: &[&str]) -> Subcommand {
		Subcommand {
			filename: PathBuf::from(CITIES),
			id_variable: id_variable.to_string(),
			values: values.iter().map(|v| (*v).to_string()).collect(),
		}
	}

	#[test]
	fn test_local() {
		run_command(vec!["geocollection", "lookup", "-q", "-i", "name", CITIES, "Nice"]).unwrap();
	}

	#[test]
	fn test_report() -> Result<()> {
		let text = report(&subcommand("id", &["20", "30"]))?;
		assert_eq!(
			text,
			"20 -> 1: Point: [7.26195,43.70313]\n30 -> 2: Polygon: 2 Rings, 1 Holes\n"
		);
		Ok(())
	}

	#[test]
	fn test_repeated_values() -> Result<()> {
		let text = report(&subcommand("name", &["Hamburg", "Berlin", "Hamburg"]))?;
		assert_eq!(
			text,
			"Hamburg -> 3: MultiLineString: [[[9.993682,53.551086],[10.1,53.6]],[[9.9,53.5],[10.0,53.55]]]\n\
			 Berlin -> 0: Point: [13.404954,52.520008]\n\
			 Hamburg -> 3: MultiLineString: [[[9.993682,53.551086],[10.1,53.6]],[[9.9,53.5],[10.0,53.55]]]\n"
		);
		Ok(())
	}

	#[test]
	fn test_value_not_found() {
		let err = report(&subcommand("name", &["Rome"])).unwrap_err();
		assert_eq!(
			err.downcast_ref::<CollectionError>(),
			Some(&CollectionError::ValueNotFound(GeoValue::from("Rome")))
		);
	}

	#[test]
	fn test_non_unique_id_variable() {
		let err = report(&subcommand("capital", &["true"])).unwrap_err();
		assert_eq!(err.to_string(), "'capital' cannot be used as id variable");
	}
}
