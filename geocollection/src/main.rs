mod tools;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{ErrorLevel, Verbosity};

#[derive(Parser, Debug)]
#[command(
	author,
	version,
	about,
	long_about = None,
	propagate_version = true,
	disable_help_subcommand = true,
)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	#[command(flatten)]
	verbose: Verbosity<ErrorLevel>,
}

#[derive(Subcommand, Debug)]
enum Commands {
	/// Show information about a GeoJSON feature collection
	Info(tools::info::Subcommand),

	/// Find features by the values of an id variable
	Lookup(tools::lookup::Subcommand),

	#[clap(alias = "save")]
	/// Load a GeoJSON feature collection and save it again
	Convert(tools::convert::Subcommand),
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.format_timestamp(None)
		.init();

	run(cli)
}

fn run(cli: Cli) -> Result<()> {
	match &cli.command {
		Commands::Info(arguments) => tools::info::run(arguments),
		Commands::Lookup(arguments) => tools::lookup::run(arguments),
		Commands::Convert(arguments) => tools::convert::run(arguments),
	}
}
