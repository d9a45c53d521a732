pub type Color = image::Rgb<u8>;

/// A colour in HSV space, every component in `[0, 1]`.
///
/// `hue` is an angle expressed as a fraction of a full turn, so it is
/// always in `[0, 1)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsv {
	pub hue: f64,
	pub saturation: f64,
	pub value: f64,
}

impl Hsv {
	/// Converts an 8-bit RGB colour.
	///
	/// When several channels share the maximum, blue wins over green
	/// and green over red when picking the hue sector. Achromatic colours
	/// get a hue of 0.
	pub fn from_rgb(c: Color) -> Self {
		let r = c.0[0] as f64 / 255.;
		let g = c.0[1] as f64 / 255.;
		let b = c.0[2] as f64 / 255.;
		let max = r.max(g).max(b);
		let min = r.min(g).min(b);
		let delta = max - min;
		let saturation = if max > 0. { delta / max } else { 0. };
		let hue = if delta > 0. {
			let sector = if b == max {
				4. + (r - g) / delta
			} else if g == max {
				2. + (b - r) / delta
			} else {
				(g - b) / delta
			};
			(sector / 6.).rem_euclid(1.)
		} else {
			0.
		};
		Hsv {
			// rem_euclid can round up to exactly 1.0 for tiny negatives
			hue: if hue >= 1. { 0. } else { hue },
			saturation,
			value: max,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn close(a: f64, b: f64) -> bool {
		(a - b).abs() < 1e-9
	}

	#[test]
	fn primaries() {
		let red = Hsv::from_rgb(image::Rgb([255, 0, 0]));
		assert!(close(red.hue, 0.) && close(red.saturation, 1.) && close(red.value, 1.));
		let green = Hsv::from_rgb(image::Rgb([0, 255, 0]));
		assert!(close(green.hue, 1. / 3.));
		let blue = Hsv::from_rgb(image::Rgb([0, 0, 255]));
		assert!(close(blue.hue, 2. / 3.));
	}

	#[test]
	fn magenta_wraps_below_one() {
		let hsv = Hsv::from_rgb(image::Rgb([255, 0, 128]));
		assert!(hsv.hue > 0.9 && hsv.hue < 1.);
	}

	#[test]
	fn grey_and_black() {
		let grey = Hsv::from_rgb(image::Rgb([128, 128, 128]));
		assert_eq!(grey.hue, 0.);
		assert_eq!(grey.saturation, 0.);
		assert!(close(grey.value, 128. / 255.));
		let black = Hsv::from_rgb(image::Rgb([0, 0, 0]));
		assert_eq!((black.hue, black.saturation, black.value), (0., 0., 0.));
	}

	#[test]
	fn tied_maximum_prefers_blue() {
		// r == b: the blue sector formula applies, 4 + (r - g) / delta
		let hsv = Hsv::from_rgb(image::Rgb([255, 0, 255]));
		assert!(close(hsv.hue, 5. / 6.));
	}
}
