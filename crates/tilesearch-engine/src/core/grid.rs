use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{GridError, is_valid_tile};

/// Grid dimensions in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("{width}x{height}")]
pub struct GridSize {
    pub width: usize,
    pub height: usize,
}

impl GridSize {
    /// The classic 4x4 board.
    pub const CLASSIC: Self = Self::new(4, 4);

    #[must_use]
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub const fn transposed(self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }

    #[must_use]
    pub const fn num_cells(self) -> usize {
        self.width * self.height
    }

    /// Corner cells as `(x, y)`, in spawn priority order:
    /// top-left, top-right, bottom-right, bottom-left.
    #[must_use]
    pub const fn corners(self) -> [(usize, usize); 4] {
        let right = self.width - 1;
        let bottom = self.height - 1;
        [(0, 0), (right, 0), (right, bottom), (0, bottom)]
    }
}

/// A rectangular 2048 board.
///
/// Cells hold `0` (empty) or a power of two. Storage is row-major, so `(x, y)` maps to
/// `cells[y * width + x]`.
///
/// `Grid` is a plain value: cloning produces an independent deep copy, and equality and
/// hashing compare the full cell content. Two grids with the same tiles are the same search
/// state regardless of how they were reached.
///
/// Serialized as a list of rows:
///
/// ```
/// use tilesearch_engine::Grid;
///
/// let grid: Grid = serde_json::from_str("[[2, 0], [0, 4]]").unwrap();
/// assert_eq!(grid.get(1, 1), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    size: GridSize,
    cells: Vec<u32>,
}

impl Grid {
    /// Creates a grid with every cell empty.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    #[must_use]
    pub fn empty(size: GridSize) -> Self {
        assert!(
            size.width > 0 && size.height > 0,
            "grid dimensions must be non-zero, got {size}"
        );
        Self {
            size,
            cells: vec![0; size.num_cells()],
        }
    }

    /// Builds a grid from rows of tile values, validating shape and tile values.
    pub fn from_rows<I, R>(rows: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[u32]>,
    {
        let mut cells = vec![];
        let mut width = None;
        let mut height = 0;
        for (y, row) in rows.into_iter().enumerate() {
            let row = row.as_ref();
            let expected = *width.get_or_insert(row.len());
            if row.len() != expected {
                return Err(GridError::Ragged {
                    row: y,
                    expected,
                    actual: row.len(),
                });
            }
            for (x, &value) in row.iter().enumerate() {
                if !is_valid_tile(value) {
                    return Err(GridError::InvalidTile { x, y, value });
                }
            }
            cells.extend_from_slice(row);
            height += 1;
        }
        let width = width.unwrap_or(0);
        if width == 0 || height == 0 {
            return Err(GridError::Empty);
        }
        Ok(Self {
            size: GridSize::new(width, height),
            cells,
        })
    }

    pub(crate) fn from_cells(size: GridSize, cells: Vec<u32>) -> Self {
        debug_assert_eq!(cells.len(), size.num_cells());
        Self { size, cells }
    }

    #[must_use]
    pub fn size(&self) -> GridSize {
        self.size
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.size.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Returns the tile at column `x`, row `y`.
    ///
    /// # Panics
    ///
    /// Panics if the position is outside the grid.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> u32 {
        assert!(x < self.size.width && y < self.size.height);
        self.cells[y * self.size.width + x]
    }

    pub(crate) fn set(&mut self, x: usize, y: usize, value: u32) {
        self.cells[y * self.size.width + x] = value;
    }

    /// All cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u32]> + '_ {
        self.cells.chunks_exact(self.size.width)
    }

    pub(crate) fn rows_mut(&mut self) -> impl Iterator<Item = &mut [u32]> + '_ {
        self.cells.chunks_exact_mut(self.size.width)
    }

    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        self.rows().map(<[u32]>::to_vec).collect()
    }

    /// Largest tile on the grid, `0` if the grid is empty.
    #[must_use]
    pub fn max_tile(&self) -> u32 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    #[must_use]
    pub fn num_empty_cells(&self) -> usize {
        self.cells.iter().filter(|&&v| v == 0).count()
    }

    #[must_use]
    pub fn num_tiles(&self) -> usize {
        self.cells.len() - self.num_empty_cells()
    }

    #[must_use]
    pub fn tile_sum(&self) -> u64 {
        self.cells.iter().map(|&v| u64::from(v)).sum()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cell_width = self.max_tile().max(1).to_string().len();
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for (x, value) in row.iter().enumerate() {
                if x > 0 {
                    write!(f, " ")?;
                }
                if *value == 0 {
                    write!(f, "{:>cell_width$}", ".")?;
                } else {
                    write!(f, "{value:>cell_width$}")?;
                }
            }
        }
        Ok(())
    }
}

impl Serialize for Grid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.rows())
    }
}

impl<'de> Deserialize<'de> for Grid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let rows = Vec::<Vec<u32>>::deserialize(deserializer)?;
        Grid::from_rows(&rows).map_err(serde::de::Error::custom)
    }
}
