use anyhow::{Context, Result};
use itertools::Itertools;
use pointgrid_geometry::parse_geojson;
use std::path::PathBuf;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// GeoJSON file to inspect
	#[arg(value_name = "INPUT_FILE")]
	input_file: PathBuf,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	eprintln!("probe {:?}", arguments.input_file);

	let data = std::fs::read_to_string(&arguments.input_file)
		.with_context(|| format!("Failed to read input file \"{}\"", arguments.input_file.display()))?;
	let collection = parse_geojson(&data)
		.with_context(|| format!("Failed to parse input file \"{}\"", arguments.input_file.display()))?;

	println!("features: {}", collection.features.len());

	let type_counts = collection
		.features
		.iter()
		.map(|feature| feature.geometry.get_type_name())
		.counts();
	for (type_name, count) in type_counts.iter().sorted() {
		println!("  {type_name}: {count}");
	}

	if let Some([x_min, y_min, x_max, y_max]) = collection.compute_bounds() {
		println!("bounds: {x_min},{y_min},{x_max},{y_max}");
	}

	Ok(())
}
