use hue_mosaic::error::CompositeError;
use hue_mosaic::layout::calc_grid_size;
use hue_mosaic::encode::decode_data_url;
use hue_mosaic::GridOptions;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// File extensions picked up when an input path is a directory.
const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "tiff"];

/// Helper function for `main`.
fn error_exit(msg: &str, code: i32) -> ! {
	eprintln!("{}", msg);
	std::process::exit(code)
}

/// Expands directories into the image files they directly contain,
/// sorted by name.
fn collect_inputs<'a, I: Iterator<Item = &'a str>>(paths: I) -> std::io::Result<Vec<PathBuf>> {
	let mut files = Vec::new();
	for path in paths.map(Path::new) {
		if path.is_dir() {
			let mut entries = fs::read_dir(path)?
				.filter_map(|e| e.ok().map(|e| e.path()))
				.filter(|p| p.is_file() && p.extension()
					.and_then(|e| e.to_str())
					.map(|e| IMAGE_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
					.unwrap_or(false))
				.collect::<Vec<_>>();
			entries.sort();
			files.extend(entries);
		} else {
			files.push(path.to_owned());
		}
	}
	Ok(files)
}

fn parse_or_exit<T: std::str::FromStr>(value: Option<&str>, default: &str, name: &str) -> T {
	match value.unwrap_or(default).parse() {
		Ok(n) => n,
		Err(_) => error_exit(&format!("Non-numeric value for {}", name), 2)
	}
}

/// `clap`-based CLI for building hue-sorted composites.
///
/// May exit process with status code if there are errors:
///
/// 1: `clap` error
///
/// 2: invalid arguments
///
/// 3: file I/O issues
///
/// 4: invalid image data
///
/// 10: other, potentially unknown error
fn main() {
	env_logger::init();

	let clap_matches = clap::App::new("hue_mosaic")
		.version("0.1.0")
		.author("vkcz")
		.about("Arranges images into a single composite ordered by dominant hue.")
		.arg_from_usage("-c, --cols=[N] 'Number of grid columns; derived from --rows when omitted'")
		.arg_from_usage("-r, --rows=[N] 'Number of grid rows; derived from --cols when omitted; defaults to 10 unless --cols is given'")
		.arg_from_usage("-q, --quality=[N] 'JPEG quality of grid and strip output; defaults to 95'")
		.arg_from_usage("-j, --join 'Join images left to right in the given order instead of building a grid (PNG output)'")
		.arg_from_usage("-s, --strip 'Join hue-sorted images into a single 200 pixel tall strip'")
		.arg_from_usage("--serial 'Analyze images one at a time'")
		.arg_from_usage("--print-grid 'Print the resolved grid dimensions and exit'")
		.arg_from_usage("-u, --data-url 'Print the result as a data URL instead of writing a file'")
		.arg_from_usage("-o, --output=[FILE] 'Path to output file; defaults to combined_images.jpg (or .png with --join)'")
		.arg_from_usage("<INPUT>... 'Image files, or directories of images'")
		.get_matches();

	let (join, strip) = (clap_matches.is_present("join"), clap_matches.is_present("strip"));
	if join && strip {
		error_exit("Only one of -j/--join and -s/--strip may be present", 2);
	}

	let columns: u32 = parse_or_exit(clap_matches.value_of("cols"), "0", "cols");
	let rows_default = if columns == 0 { "10" } else { "0" };
	let options = GridOptions {
		columns,
		rows: parse_or_exit(clap_matches.value_of("rows"), rows_default, "rows"),
		jpeg_quality: parse_or_exit(clap_matches.value_of("quality"), "95", "quality"),
		parallel: !clap_matches.is_present("serial"),
		..Default::default()
	};

	let inputs = match clap_matches.values_of("INPUT").map(collect_inputs) {
		Some(Ok(files)) => files,
		Some(Err(_)) => error_exit("Input directory could not be read", 3),
		None => error_exit("No input given", 2),
	};

	if clap_matches.is_present("print-grid") {
		match calc_grid_size(inputs.len(), options.columns, options.rows) {
			Ok(grid) => println!("{} {}", grid.columns, grid.rows),
			Err(e) => error_exit(&e.to_string(), 2)
		}
		return;
	}

	let mut uploads = Vec::with_capacity(inputs.len());
	for path in inputs.iter() {
		match fs::read(path) {
			Ok(data) => uploads.push(data),
			Err(_) => error_exit(&format!("Could not read {}", path.display()), 3)
		}
	}
	log::info!("{} input files", uploads.len());

	let result = if join {
		hue_mosaic::join_images(&uploads)
	} else if strip {
		hue_mosaic::hue_strip(&uploads, &options)
	} else {
		hue_mosaic::combine_images(&uploads, &options)
	};
	let data_url = match result {
		Ok(url) => url,
		Err(CompositeError::DecodeFailure(failures)) => {
			let names = failures.iter()
				.map(|f| format!("{}: {}", inputs[f.index].display(), f.source))
				.collect::<Vec<_>>()
				.join("\n");
			error_exit(&format!("Invalid image data\n{}", names), 4)
		},
		Err(e @ CompositeError::InsufficientInput { .. }) |
		Err(e @ CompositeError::MissingGridDimension) |
		Err(e @ CompositeError::CanvasTooLarge { .. }) => error_exit(&e.to_string(), 2),
		Err(e @ CompositeError::NoAnalyzableImages) => error_exit(&e.to_string(), 4),
		Err(e) => error_exit(&e.to_string(), 10)
	};

	if clap_matches.is_present("data-url") {
		println!("{}", data_url);
		return;
	}

	let bytes = match decode_data_url(&data_url) {
		Ok((_, bytes)) => bytes,
		Err(e) => error_exit(&e.to_string(), 10)
	};
	let default_output = if join { "combined_images.png" } else { "combined_images.jpg" };
	let output = clap_matches.value_of("output").unwrap_or(default_output);
	let mut out_fh = match fs::File::create(output) {
		Ok(f) => f,
		Err(_) => error_exit("Could not open output file", 3)
	};
	match out_fh.write_all(&bytes) {
		Ok(_) => log::info!("wrote composite to {}", output),
		Err(_) => error_exit("Could not write to output file", 3)
	}
}
