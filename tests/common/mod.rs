//! Synthetic inputs for the pipeline tests.
#![allow(dead_code)]

use image::{DynamicImage, ImageOutputFormat, Rgb, RgbImage, Rgba, RgbaImage};
use std::io::Cursor;

/// A single-colour image.
pub fn solid(width: u32, height: u32, color: [u8; 3]) -> RgbImage {
	RgbImage::from_pixel(width, height, Rgb(color))
}

/// Fully saturated, fully bright colour of the given hue (in turns).
pub fn hue_color(hue: f64) -> [u8; 3] {
	let h = hue.rem_euclid(1.) * 6.;
	let x = 1. - (h % 2. - 1.).abs();
	let (r, g, b) = match h as u32 {
		0 => (1., x, 0.),
		1 => (x, 1., 0.),
		2 => (0., 1., x),
		3 => (0., x, 1.),
		4 => (x, 0., 1.),
		_ => (1., 0., x),
	};
	let to_u8 = |c: f64| (c * 255.).round() as u8;
	[to_u8(r), to_u8(g), to_u8(b)]
}

/// A horizontal grey ramp from black to white.
pub fn grey_ramp(width: u32, height: u32) -> RgbImage {
	RgbImage::from_fn(width, height, |x, _| {
		let v = (x * 255 / width.max(2).saturating_sub(1)).min(255) as u8;
		Rgb([v, v, v])
	})
}

pub fn png_bytes(img: &RgbImage) -> Vec<u8> {
	let mut buf = Vec::new();
	DynamicImage::ImageRgb8(img.clone())
		.write_to(&mut Cursor::new(&mut buf), ImageOutputFormat::Png)
		.expect("png encoding");
	buf
}

pub fn rgba_png_bytes(width: u32, height: u32, color: [u8; 4]) -> Vec<u8> {
	let mut buf = Vec::new();
	DynamicImage::ImageRgba8(RgbaImage::from_pixel(width, height, Rgba(color)))
		.write_to(&mut Cursor::new(&mut buf), ImageOutputFormat::Png)
		.expect("png encoding");
	buf
}

pub fn jpeg_bytes(img: &RgbImage) -> Vec<u8> {
	let mut buf = Vec::new();
	DynamicImage::ImageRgb8(img.clone())
		.write_to(&mut Cursor::new(&mut buf), ImageOutputFormat::Jpeg(95))
		.expect("jpeg encoding");
	buf
}

/// Channel-wise comparison with a tolerance for lossy encodings.
pub fn close_to(pixel: &Rgb<u8>, expected: [u8; 3], tolerance: i16) -> bool {
	pixel.0.iter()
		.zip(expected.iter())
		.all(|(a, b)| (*a as i16 - *b as i16).abs() <= tolerance)
}
