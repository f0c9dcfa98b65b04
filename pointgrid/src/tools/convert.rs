use anyhow::{Context, Result, ensure};
use pointgrid_core::GeoBBox;
use pointgrid_geometry::{convert_collection, parse_geojson, write_geojson};
use std::{
	fs::File,
	io::{BufWriter, Write},
	path::PathBuf,
};

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// GeoJSON file containing the input point features
	#[arg(value_name = "INPUT_FILE")]
	input_file: PathBuf,

	/// GeoJSON file the tile features are written to
	#[arg(value_name = "OUTPUT_FILE")]
	output_file: PathBuf,

	/// side length of each tile in degrees, centered on the input point
	#[arg(long, value_name = "degrees", default_value_t = 0.25, display_order = 1)]
	tile_size: f64,

	/// clip tiles against this boundary instead of the full WGS84 range
	#[arg(
		long,
		short,
		value_name = "lon_min,lat_min,lon_max,lat_max",
		allow_hyphen_values = true,
		display_order = 1
	)]
	bbox: Option<String>,

	/// round output coordinates to this many decimal digits
	#[arg(long, value_name = "digits", display_order = 2)]
	precision: Option<u8>,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	ensure!(
		arguments.tile_size > 0.0,
		"tile size must be positive, got {}",
		arguments.tile_size
	);
	let bounds = get_bounds(arguments.bbox.as_deref())?;

	log::debug!(
		"converting points from {:?} into {}°-tiles clipped to {:?}",
		arguments.input_file,
		arguments.tile_size,
		bounds
	);

	let data = std::fs::read_to_string(&arguments.input_file)
		.with_context(|| format!("Failed to read input file \"{}\"", arguments.input_file.display()))?;
	let collection = parse_geojson(&data)
		.with_context(|| format!("Failed to parse input file \"{}\"", arguments.input_file.display()))?;

	let tiles = convert_collection(&collection, arguments.tile_size, &bounds)?;

	let file = File::create(&arguments.output_file)
		.with_context(|| format!("Failed to create output file \"{}\"", arguments.output_file.display()))?;
	let mut writer = BufWriter::new(file);
	write_geojson(&mut writer, &tiles, arguments.precision)
		.with_context(|| format!("Failed to write to output file \"{}\"", arguments.output_file.display()))?;
	writer.flush()?;

	eprintln!("Tiles saved to {}", arguments.output_file.display());
	Ok(())
}

fn get_bounds(bbox: Option<&str>) -> Result<GeoBBox> {
	let Some(bbox) = bbox else {
		return Ok(GeoBBox::new_full());
	};

	log::trace!("parsing bbox argument: {bbox:?}");
	let values = bbox
		.split([' ', ',', ';'])
		.filter(|s| !s.is_empty())
		.map(str::parse::<f64>)
		.collect::<Result<Vec<f64>, _>>()
		.with_context(|| format!("bbox values must be numbers: {bbox:?}"))?;

	GeoBBox::try_from(values)
}
