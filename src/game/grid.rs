use super::{action::Direction, error::WorldError};

/// Square grid addressed by row-major cell index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    width: usize,
}

impl Grid {
    pub const MIN_WIDTH: usize = 2;

    pub fn new(width: usize) -> Result<Self, WorldError> {
        if width < Self::MIN_WIDTH {
            return Err(WorldError::WidthTooSmall(width));
        }
        Ok(Self { width })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Total number of cells
    pub fn size(&self) -> usize {
        self.width * self.width
    }

    pub fn contains(&self, index: usize) -> bool {
        index < self.size()
    }

    pub fn row_col(&self, index: usize) -> (usize, usize) {
        (index / self.width, index % self.width)
    }

    pub fn index_of(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// The cell one step from `index`, or `None` past an edge.
    ///
    /// There is no wraparound: leaving the grid is a wall.
    pub fn neighbor(&self, index: usize, direction: Direction) -> Option<usize> {
        if !self.contains(index) {
            return None;
        }

        let (row, col) = self.row_col(index);
        let (drow, dcol) = direction.delta();
        let row = row.checked_add_signed(drow)?;
        let col = col.checked_add_signed(dcol)?;

        if row >= self.width || col >= self.width {
            return None;
        }

        Some(self.index_of(row, col))
    }
}
