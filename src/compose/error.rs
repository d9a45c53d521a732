use thiserror::Error;

/// One upload that could not be decoded as an image.
#[derive(Debug)]
pub struct DecodeFailure {
	/// Position of the upload in the submitted list.
	pub index: usize,
	pub source: image::ImageError,
}

fn describe_failures(failures: &[DecodeFailure]) -> String {
	failures.iter()
		.map(|f| format!("#{}: {}", f.index, f.source))
		.collect::<Vec<_>>()
		.join("; ")
}

/// Reason why a composite couldn't be produced.
#[derive(Debug, Error)]
pub enum CompositeError {
	/// Fewer uploads than the layout needs.
	#[error("at least {required} images are required, got {given}")]
	InsufficientInput { given: usize, required: usize },
	/// One or more uploads are not valid images; the whole batch is rejected.
	#[error("invalid image data in upload {}", describe_failures(.0))]
	DecodeFailure(Vec<DecodeFailure>),
	/// Neither a column count nor a row count was given.
	#[error("either the number of columns or the number of rows must be given")]
	MissingGridDimension,
	/// Every image failed colour analysis, so nothing can be placed.
	#[error("none of the images could be analyzed")]
	NoAnalyzableImages,
	/// The grid is too large to allocate as a single image.
	#[error("a {columns}x{rows} grid of {cell_width}x{cell_height} cells exceeds the largest possible canvas")]
	CanvasTooLarge { columns: u32, rows: u32, cell_width: u32, cell_height: u32 },
	/// The finished canvas could not be encoded.
	#[error("failed to encode composite: {0}")]
	Encode(#[from] image::ImageError),
}

/// Reason why a dominant colour couldn't be extracted from an image.
///
/// Never fatal for a batch; the image is just left out.
#[derive(Debug, Error, PartialEq)]
pub enum AnalysisError {
	/// The image has no pixels to vote with.
	#[error("image of {width}x{height} has no pixels")]
	EmptyImage { width: u32, height: u32 },
}

/// Reason why a data URL couldn't be turned back into image bytes.
#[derive(Debug, Error)]
pub enum DataUrlError {
	/// Not of the form `data:image/...;base64,...`.
	#[error("not a base64 image data URL")]
	Malformed,
	#[error("invalid base64 payload: {0}")]
	Base64(#[from] base64::DecodeError),
	#[error("payload is not a valid image: {0}")]
	Image(#[from] image::ImageError),
}
