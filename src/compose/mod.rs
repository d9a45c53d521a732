pub mod color;
pub mod encode;
pub mod error;
pub mod image;
pub mod layout;

use ::image::{DynamicImage, RgbImage};
use log::debug;
use rayon::prelude::*;

use color::hsv::{Color, Hsv};
use error::{CompositeError, DecodeFailure};

/// Default longest side of the thumbnail used for colour analysis.
pub const ANALYSIS_SIZE: u32 = 100;
/// Default JPEG quality of grid and strip output.
pub const JPEG_QUALITY: u8 = 95;
/// Fewest uploads a composite is made from.
pub const MIN_UPLOADS: usize = 2;

/// Knobs for the hue-sorted layouts.
#[derive(Clone, Debug)]
pub struct GridOptions {
	/// Number of columns; 0 derives it from `rows`.
	pub columns: u32,
	/// Number of rows; 0 derives it from `columns`.
	pub rows: u32,
	pub jpeg_quality: u8,
	/// Longest side images are shrunk to before picking their colour.
	pub analysis_size: u32,
	/// Analyze images on the rayon thread pool.
	pub parallel: bool,
}

impl Default for GridOptions {
	fn default() -> Self {
		GridOptions {
			columns: 0,
			rows: 0,
			jpeg_quality: JPEG_QUALITY,
			analysis_size: ANALYSIS_SIZE,
			parallel: true,
		}
	}
}

/// An image together with the colour it was sorted by.
#[derive(Clone, Debug)]
pub struct ImageRecord {
	/// The decoded upload at full resolution.
	pub source: RgbImage,
	/// The shrunken copy the colour was picked from.
	pub thumbnail: RgbImage,
	pub dominant_color: Color,
	/// Hue of `dominant_color`, in `[0, 1)`.
	pub hue: f64,
}

/// Decodes every upload into an RGB raster.
///
/// Any other colour mode, alpha included, is flattened to RGB. If any
/// upload fails to decode, all failures are reported together and
/// nothing is returned.
pub fn decode_images<B: AsRef<[u8]>>(uploads: &[B]) -> Result<Vec<RgbImage>, CompositeError> {
	let mut images = Vec::with_capacity(uploads.len());
	let mut failures = Vec::new();
	for (index, upload) in uploads.iter().enumerate() {
		match ::image::load_from_memory(upload.as_ref()) {
			Ok(img) => images.push(to_rgb(img)),
			Err(source) => failures.push(DecodeFailure { index, source }),
		}
	}
	if failures.is_empty() {
		Ok(images)
	} else {
		Err(CompositeError::DecodeFailure(failures))
	}
}

fn to_rgb(img: DynamicImage) -> RgbImage {
	match img {
		DynamicImage::ImageRgb8(rgb) => rgb,
		other => other.to_rgb8(),
	}
}

/// Rejects batches with fewer than `MIN_UPLOADS` entries.
pub fn check_upload_count(given: usize) -> Result<(), CompositeError> {
	if given < MIN_UPLOADS {
		Err(CompositeError::InsufficientInput { given, required: MIN_UPLOADS })
	} else {
		Ok(())
	}
}

fn analyze(source: RgbImage, analysis_size: u32) -> Option<ImageRecord> {
	match color::dominant_color(&source, analysis_size.max(1)) {
		Ok((thumbnail, dominant_color)) => {
			let hue = Hsv::from_rgb(dominant_color).hue;
			debug!("dominant color {:?}, hue {:.3}", dominant_color.0, hue);
			Some(ImageRecord { source, thumbnail, dominant_color, hue })
		},
		Err(e) => {
			debug!("leaving out image: {}", e);
			None
		}
	}
}

/// Orders images by the hue of their dominant colour, lowest first.
///
/// Images whose colour can't be determined are left out. Images with equal
/// hues keep their input order.
pub fn sort_images_by_hue(images: Vec<RgbImage>, options: &GridOptions) -> Vec<ImageRecord> {
	let analysis_size = options.analysis_size;
	let mut records: Vec<ImageRecord> = if options.parallel {
		images.into_par_iter()
			.filter_map(|img| analyze(img, analysis_size))
			.collect()
	} else {
		images.into_iter()
			.filter_map(|img| analyze(img, analysis_size))
			.collect()
	};
	records.sort_by(|a, b| a.hue.total_cmp(&b.hue));
	records
}
