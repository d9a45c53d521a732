use image::imageops::{self, FilterType};
use image::{Rgb, RgbImage};
use log::{info, warn};

use super::error::CompositeError;
use super::layout::{CellSize, GridDimensions};
use super::ImageRecord;

/// Height every image is scaled to in a hue strip.
pub const STRIP_HEIGHT: u32 = 200;

const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

fn median(mut values: Vec<u32>) -> f64 {
	values.sort_unstable();
	let mid = values.len() / 2;
	if values.len() % 2 == 0 {
		(values[mid - 1] as f64 + values[mid] as f64) / 2.
	} else {
		values[mid] as f64
	}
}

/// Picks the cell size from the median width and height of the images.
/// No images at all counts as square.
pub fn cell_size_for<'a, I: IntoIterator<Item = &'a RgbImage>>(images: I) -> CellSize {
	let (widths, heights): (Vec<u32>, Vec<u32>) = images.into_iter()
		.map(|img| img.dimensions())
		.unzip();
	if widths.is_empty() {
		return CellSize::for_aspect_ratio(1.);
	}
	let ratio = median(widths) / median(heights).max(1.);
	CellSize::for_aspect_ratio(ratio)
}

/// Lays hue-sorted images out on a grid.
///
/// The canvas is `columns * cell.width` by `rows * cell.height` pixels
/// on a black background. The `i`-th position of `order` receives record
/// `i % records.len()`, stretched to fill the cell, so images repeat when
/// there are more cells than images and are dropped when there are fewer.
/// An empty `records` leaves the canvas black.
///
/// Fails if the canvas would be wider or taller than `u32::MAX` pixels.
pub fn compose_grid(
	records: &[ImageRecord],
	grid: GridDimensions,
	order: &[(u32, u32)],
	cell: CellSize
) -> Result<RgbImage, CompositeError> {
	let too_large = || CompositeError::CanvasTooLarge {
		columns: grid.columns,
		rows: grid.rows,
		cell_width: cell.width,
		cell_height: cell.height,
	};
	let width = grid.columns.checked_mul(cell.width).ok_or_else(too_large)?;
	let height = grid.rows.checked_mul(cell.height).ok_or_else(too_large)?;
	let mut canvas = RgbImage::from_pixel(width, height, BLACK);
	if records.is_empty() {
		return Ok(canvas);
	}
	if order.len() < records.len() {
		warn!(
			"grid of {} cells is too small; {} images left out",
			order.len(),
			records.len() - order.len()
		);
	} else if order.len() > 2 * records.len() {
		warn!("grid of {} cells reuses {} images", order.len(), records.len());
	}
	// Only the records that get a cell are resized, each of them once
	let resized = records.iter()
		.take(order.len())
		.map(|r| imageops::resize(&r.source, cell.width, cell.height, FilterType::Lanczos3))
		.collect::<Vec<_>>();
	for (ind, &(col, row)) in order.iter().enumerate() {
		imageops::replace(
			&mut canvas,
			&resized[ind % resized.len()],
			(col * cell.width) as i64,
			(row * cell.height) as i64,
		);
	}
	info!(
		"grid {}x{}, cell {}x{}",
		grid.columns, grid.rows, cell.width, cell.height
	);
	Ok(canvas)
}

/// Joins images left to right at their natural size.
///
/// The canvas is as tall as the tallest image; area below shorter images
/// stays white.
pub fn join_horizontal(images: &[RgbImage]) -> RgbImage {
	let width: u32 = images.iter().map(RgbImage::width).sum();
	let height = images.iter().map(RgbImage::height).max().unwrap_or(0);
	let mut canvas = RgbImage::from_pixel(width, height, WHITE);
	let mut x_off = 0;
	for img in images {
		imageops::replace(&mut canvas, img, x_off as i64, 0);
		x_off += img.width();
	}
	canvas
}

/// Joins hue-sorted images left to right, each scaled to `height`
/// pixels tall with its aspect ratio kept.
pub fn compose_strip(records: &[ImageRecord], height: u32) -> RgbImage {
	let resized = records.iter()
		.map(|r| {
			let (w, h) = r.source.dimensions();
			let width = ((height as u64 * w as u64 / h.max(1) as u64) as u32).max(1);
			imageops::resize(&r.source, width, height, FilterType::Lanczos3)
		})
		.collect::<Vec<_>>();
	let width: u32 = resized.iter().map(RgbImage::width).sum();
	let mut canvas = RgbImage::from_pixel(width, height, BLACK);
	let mut x_off = 0;
	for img in resized.iter() {
		imageops::replace(&mut canvas, img, x_off as i64, 0);
		x_off += img.width();
	}
	canvas
}
