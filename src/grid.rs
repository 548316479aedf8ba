use crate::config::ConfigError;

/// Board position in pixel units. Game-produced cells are multiples of the cell size.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Discrete board geometry: pixel extents plus the size of one square cell.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Board {
    width: i32,
    height: i32,
    cell_size: i32,
}

impl Board {
    /// Creates a board, rejecting geometry that cannot hold a single cell,
    /// is not a whole number of cells, or leaves no room for one step past
    /// either edge.
    pub fn new(width: u32, height: u32, cell_size: u32) -> Result<Self, ConfigError> {
        let to_i32 = |value: u32| i32::try_from(value).map_err(|_| ConfigError::TooLarge(value));
        let (width, height, cell_size) = (to_i32(width)?, to_i32(height)?, to_i32(cell_size)?);

        if cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        if width < cell_size || height < cell_size {
            return Err(ConfigError::BoardTooSmall {
                width,
                height,
                cell_size,
            });
        }
        if width % cell_size != 0 || height % cell_size != 0 {
            return Err(ConfigError::NotCellAligned {
                width,
                height,
                cell_size,
            });
        }
        for extent in [width, height] {
            if extent.checked_add(cell_size).is_none() {
                return Err(ConfigError::TooLarge(extent.unsigned_abs()));
            }
        }

        Ok(Self {
            width,
            height,
            cell_size,
        })
    }

    #[must_use]
    pub fn width(self) -> i32 {
        self.width
    }

    #[must_use]
    pub fn height(self) -> i32 {
        self.height
    }

    #[must_use]
    pub fn cell_size(self) -> i32 {
        self.cell_size
    }

    /// Number of whole cells across the board.
    #[must_use]
    pub fn columns(self) -> i32 {
        self.width / self.cell_size
    }

    /// Number of whole cells down the board.
    #[must_use]
    pub fn rows(self) -> i32 {
        self.height / self.cell_size
    }

    /// Wraps one coordinate across an axis of length `extent`.
    ///
    /// Leaving through the low edge lands on the last cell, leaving through
    /// the high edge lands on zero. In-range values are returned unchanged.
    #[must_use]
    pub fn wrap(self, value: i32, extent: i32) -> i32 {
        if value < 0 {
            extent - self.cell_size
        } else if value >= extent {
            0
        } else {
            value
        }
    }

    /// Wraps both axes of `cell` independently.
    #[must_use]
    pub fn wrap_cell(self, cell: Cell) -> Cell {
        Cell {
            x: self.wrap(cell.x, self.width),
            y: self.wrap(cell.y, self.height),
        }
    }

    #[must_use]
    pub fn contains(self, cell: Cell) -> bool {
        cell.x >= 0 && cell.y >= 0 && cell.x < self.width && cell.y < self.height
    }

    /// Starting cell for a fresh snake: the board centre snapped to the grid.
    #[must_use]
    pub fn origin(self) -> Cell {
        Cell {
            x: (self.columns() / 2) * self.cell_size,
            y: (self.rows() / 2) * self.cell_size,
        }
    }

    /// Converts a column/row pair to the pixel cell it names.
    #[must_use]
    pub fn cell_at(self, column: i32, row: i32) -> Cell {
        Cell {
            x: column * self.cell_size,
            y: row * self.cell_size,
        }
    }
}
