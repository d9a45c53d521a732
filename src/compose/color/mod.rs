pub mod hsv;

use std::collections::HashMap;

use image::imageops::{self, FilterType};
use image::RgbImage;

use super::error::AnalysisError;
use hsv::{Color, Hsv};

/// Pixels below this saturation are treated as greyscale and don't vote.
pub const MIN_SATURATION: f64 = 0.2;
/// Pixels below this value are treated as black and don't vote.
pub const MIN_VALUE: f64 = 0.2;
/// Floor for the vote of any pixel that passes the filters.
pub const MIN_WEIGHT: f64 = 0.1;

/// Tally of exact colours that remembers when each colour was first seen,
/// so that ties go to the earliest one and results are reproducible.
struct Tally<W> {
	votes: HashMap<Color, (usize, W)>,
}

impl<W: Copy + PartialOrd + std::ops::AddAssign> Tally<W> {
	fn new() -> Self {
		Tally { votes: HashMap::new() }
	}

	fn add(&mut self, color: Color, weight: W) {
		let order = self.votes.len();
		self.votes.entry(color)
			.and_modify(|e| e.1 += weight)
			.or_insert((order, weight));
	}

	fn winner(&self) -> Option<Color> {
		let mut best: Option<(&Color, &(usize, W))> = None;
		for entry in self.votes.iter() {
			best = match best {
				Some(b) if (b.1).1 > (entry.1).1 ||
					((b.1).1 == (entry.1).1 && (b.1).0 < (entry.1).0) => Some(b),
				_ => Some(entry),
			};
		}
		best.map(|b| *b.0)
	}
}

/// Shrinks an image so that neither side exceeds `max_side`, keeping its
/// aspect ratio. Images that already fit are returned untouched.
pub fn downscale(img: &RgbImage, max_side: u32) -> RgbImage {
	let (w, h) = img.dimensions();
	if w <= max_side && h <= max_side {
		return img.clone();
	}
	// Integer arithmetic on purpose: the longer side is exactly `max_side` and
	// the shorter one is `side * max_side / longer` truncated, with no float
	// product landing just under a whole number
	let shorten = |side: u32, longer: u32| ((side as u64 * max_side as u64 / longer as u64) as u32).max(1);
	let (new_w, new_h) = if w >= h {
		(max_side, shorten(h, w))
	} else {
		(shorten(w, h), max_side)
	};
	imageops::resize(img, new_w, new_h, FilterType::Lanczos3)
}

/// Finds the colour that best represents an image.
///
/// The image is first shrunk to at most `max_side` pixels on its longer
/// side. Each remaining pixel that is neither too grey nor too dark votes
/// for its exact colour with a weight of `saturation * value` (at least
/// `MIN_WEIGHT`). If no pixel qualifies, the most frequent colour wins
/// instead.
///
/// Returns the shrunken image alongside the colour.
pub fn dominant_color(
	img: &RgbImage,
	max_side: u32
) -> Result<(RgbImage, Color), AnalysisError> {
	if img.width() == 0 || img.height() == 0 {
		return Err(AnalysisError::EmptyImage { width: img.width(), height: img.height() });
	}
	let small = downscale(img, max_side);

	let mut weighted = Tally::new();
	for pixel in small.pixels() {
		let hsv = Hsv::from_rgb(*pixel);
		if hsv.saturation < MIN_SATURATION || hsv.value < MIN_VALUE {
			continue;
		}
		weighted.add(*pixel, f64::max(MIN_WEIGHT, hsv.saturation * hsv.value));
	}

	let color = match weighted.winner() {
		Some(c) => c,
		None => {
			let mut counts = Tally::new();
			for pixel in small.pixels() {
				counts.add(*pixel, 1usize);
			}
			counts.winner().ok_or(AnalysisError::EmptyImage {
				width: small.width(),
				height: small.height(),
			})?
		}
	};
	Ok((small, color))
}
