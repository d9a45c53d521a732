pub mod compose;

pub use compose::*;

use compose::encode::{encode_data_url, OutputFormat};
use compose::error::CompositeError;
use compose::layout::GridDimensions;

use log::info;

/// Builds the hue-sorted diagonal grid from raw uploads and returns it as
/// a JPEG `data:` URL.
///
/// At least `MIN_UPLOADS` uploads are required, and `options` must give
/// the number of columns, the number of rows, or both. Uploads that
/// aren't images fail the whole request; images whose colour can't be
/// determined are silently left out.
pub fn combine_images<B: AsRef<[u8]>>(
	uploads: &[B],
	options: &GridOptions
) -> Result<String, CompositeError> {
	check_upload_count(uploads.len())?;
	let grid = compose::layout::calc_grid_size(uploads.len(), options.columns, options.rows)?;
	let images = decode_images(uploads)?;
	let records = sort_images_by_hue(images, options);
	if records.is_empty() {
		return Err(CompositeError::NoAnalyzableImages);
	}
	info!("{} of {} images sorted by hue", records.len(), uploads.len());
	let canvas = render_grid(&records, grid)?;
	encode_data_url(canvas, OutputFormat::Jpeg(options.jpeg_quality))
}

/// Lays already sorted records out on `grid` in diagonal order.
///
/// The cell size follows the shape of the analysis thumbnails; the cells
/// themselves are filled from the full-resolution sources.
pub fn render_grid(
	records: &[ImageRecord],
	grid: GridDimensions
) -> Result<::image::RgbImage, CompositeError> {
	let cell = compose::image::cell_size_for(records.iter().map(|r| &r.thumbnail));
	let order = compose::layout::diagonal_order(grid);
	compose::image::compose_grid(records, grid, &order, cell)
}

/// Joins raw uploads left to right, in upload order, at natural size, and
/// returns the result as a PNG `data:` URL.
pub fn join_images<B: AsRef<[u8]>>(uploads: &[B]) -> Result<String, CompositeError> {
	check_upload_count(uploads.len())?;
	let images = decode_images(uploads)?;
	let canvas = compose::image::join_horizontal(&images);
	encode_data_url(canvas, OutputFormat::Png)
}

/// Sorts raw uploads by hue and joins them into a single strip of
/// `STRIP_HEIGHT` pixels, returned as a JPEG `data:` URL.
///
/// The grid dimensions in `options` are ignored.
pub fn hue_strip<B: AsRef<[u8]>>(
	uploads: &[B],
	options: &GridOptions
) -> Result<String, CompositeError> {
	check_upload_count(uploads.len())?;
	let images = decode_images(uploads)?;
	let records = sort_images_by_hue(images, options);
	if records.is_empty() {
		return Err(CompositeError::NoAnalyzableImages);
	}
	let canvas = compose::image::compose_strip(&records, compose::image::STRIP_HEIGHT);
	encode_data_url(canvas, OutputFormat::Jpeg(options.jpeg_quality))
}
