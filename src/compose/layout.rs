use super::error::CompositeError;

/// Number of columns and rows of a composite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridDimensions {
	pub columns: u32,
	pub rows: u32,
}

impl GridDimensions {
	/// Number of cells in the grid.
	pub fn capacity(&self) -> usize {
		self.columns as usize * self.rows as usize
	}
}

/// Pixel footprint every image is stretched to in the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellSize {
	pub width: u32,
	pub height: u32,
}

/// Cell for mostly landscape inputs.
pub const CELL_WIDE: CellSize = CellSize { width: 300, height: 200 };
/// Cell for mostly portrait inputs.
pub const CELL_TALL: CellSize = CellSize { width: 200, height: 300 };
/// Cell for everything in between.
pub const CELL_SQUARE: CellSize = CellSize { width: 250, height: 250 };

impl CellSize {
	/// Picks the preset matching a representative aspect ratio (width / height).
	pub fn for_aspect_ratio(ratio: f64) -> Self {
		if ratio > 1.5 {
			CELL_WIDE
		} else if ratio < 0.7 {
			CELL_TALL
		} else {
			CELL_SQUARE
		}
	}
}

/// Resolves the grid for `num_images` images.
///
/// `columns` and `rows` of 0 mean "not given". With one side given, the
/// other is the smallest count that fits every image (never below 1).
/// With both given, they are used as they are, even if the grid is too
/// small or much too large for the images.
pub fn calc_grid_size(
	num_images: usize,
	columns: u32,
	rows: u32
) -> Result<GridDimensions, CompositeError> {
	let fit = |given: u32| {
		let given = given as usize;
		((num_images + given - 1) / given).max(1) as u32
	};
	match (columns, rows) {
		(0, 0) => Err(CompositeError::MissingGridDimension),
		(0, rows) => Ok(GridDimensions { columns: fit(rows), rows }),
		(columns, 0) => Ok(GridDimensions { columns, rows: fit(columns) }),
		(columns, rows) => Ok(GridDimensions { columns, rows }),
	}
}

/// Generates the order in which grid cells are filled.
///
/// Cells are visited one anti-diagonal (`column + row == s`) at a time,
/// starting from the top-left corner. Within a diagonal, cells run from
/// high to low column when `s` is even and from low to high column when
/// `s` is odd, so consecutive diagonals join up in a zig-zag.
///
/// Every cell appears exactly once.
pub fn diagonal_order(grid: GridDimensions) -> Vec<(u32, u32)> {
	let (cols, rows) = (grid.columns as i64, grid.rows as i64);
	let mut positions = Vec::with_capacity(grid.capacity());
	for s in 0..=(cols + rows) {
		let mut diagonal = (0..=s)
			.map(|x| (x, s - x))
			.filter(|&(x, y)| x < cols && y < rows)
			.map(|(x, y)| (x as u32, y as u32))
			.collect::<Vec<_>>();
		if s % 2 == 0 {
			diagonal.reverse();
		}
		positions.extend(diagonal);
	}
	positions
}
