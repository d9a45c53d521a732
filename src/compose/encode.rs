use std::io::Cursor;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use image::{DynamicImage, ImageOutputFormat, RgbImage};

use super::error::{CompositeError, DataUrlError};

/// Output encodings for a finished canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
	/// JPEG at the given quality (1-100).
	Jpeg(u8),
	Png,
}

impl OutputFormat {
	pub fn mime_type(&self) -> &'static str {
		match self {
			OutputFormat::Jpeg(_) => "image/jpeg",
			OutputFormat::Png => "image/png",
		}
	}

	/// Conventional file extension, without the dot.
	pub fn extension(&self) -> &'static str {
		match self {
			OutputFormat::Jpeg(_) => "jpg",
			OutputFormat::Png => "png",
		}
	}
}

/// Encodes a canvas into image file bytes.
pub fn encode_canvas(canvas: RgbImage, format: OutputFormat) -> Result<Vec<u8>, CompositeError> {
	let output = match format {
		OutputFormat::Jpeg(q) => ImageOutputFormat::Jpeg(q.max(1).min(100)),
		OutputFormat::Png => ImageOutputFormat::Png,
	};
	let mut buf = Vec::new();
	DynamicImage::ImageRgb8(canvas).write_to(&mut Cursor::new(&mut buf), output)?;
	Ok(buf)
}

/// Wraps encoded image bytes as a `data:` URL.
pub fn to_data_url(bytes: &[u8], format: OutputFormat) -> String {
	format!("data:{};base64,{}", format.mime_type(), STANDARD.encode(bytes))
}

/// Encodes a canvas straight into a `data:` URL.
pub fn encode_data_url(canvas: RgbImage, format: OutputFormat) -> Result<String, CompositeError> {
	let bytes = encode_canvas(canvas, format)?;
	Ok(to_data_url(&bytes, format))
}

/// Splits a base64 image `data:` URL into its MIME type and payload bytes.
pub fn decode_data_url(url: &str) -> Result<(&str, Vec<u8>), DataUrlError> {
	let rest = url.strip_prefix("data:").ok_or(DataUrlError::Malformed)?;
	let (mime, payload) = rest.split_once(";base64,").ok_or(DataUrlError::Malformed)?;
	if !mime.starts_with("image/") {
		return Err(DataUrlError::Malformed);
	}
	Ok((mime, STANDARD.decode(payload)?))
}

/// Decodes the image carried by a base64 `data:` URL.
pub fn decode_data_url_image(url: &str) -> Result<DynamicImage, DataUrlError> {
	let (_, bytes) = decode_data_url(url)?;
	Ok(image::load_from_memory(&bytes)?)
}
