//! Square grid adjacency model
//!
//! Maps linear cell indices to (x, y) coordinates and enumerates the up-to-8
//! king-move neighbours of a cell.

/// Coordinates of a cell, computed on demand from its index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub index: usize,
    pub x: usize,
    pub y: usize,
}

/// Adjacency model of an N×N board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    size: usize,
}

impl Grid {
    #[inline]
    #[must_use]
    pub const fn new(size: usize) -> Self {
        Self { size }
    }

    /// Side length N
    #[inline]
    #[must_use]
    pub const fn size(self) -> usize {
        self.size
    }

    /// Total number of cells (N²)
    #[inline]
    #[must_use]
    pub const fn cell_count(self) -> usize {
        self.size * self.size
    }

    /// Coordinates of `index`, or `None` if it lies off the grid
    #[inline]
    #[must_use]
    pub const fn position(self, index: usize) -> Option<Position> {
        if index >= self.cell_count() {
            return None;
        }
        Some(Position {
            index,
            x: index % self.size,
            y: index / self.size,
        })
    }

    /// Linear index of (x, y), or `None` if it lies off the grid
    #[inline]
    #[must_use]
    pub const fn index_of(self, x: usize, y: usize) -> Option<usize> {
        if x < self.size && y < self.size {
            Some(y * self.size + x)
        } else {
            None
        }
    }

    /// Whether two distinct cells touch, diagonals included
    #[must_use]
    pub fn are_adjacent(self, a: usize, b: usize) -> bool {
        match (self.position(a), self.position(b)) {
            (Some(p), Some(q)) => a != b && p.x.abs_diff(q.x) <= 1 && p.y.abs_diff(q.y) <= 1,
            _ => false,
        }
    }

    /// Cells adjacent to `index` that are not in `visited`
    ///
    /// The 3×3 neighbourhood is scanned row by row, so results are in ascending
    /// index order. An off-grid `index` has no neighbours.
    ///
    /// # Examples
    /// ```
    /// use lexisearch::core::Grid;
    ///
    /// let grid = Grid::new(3);
    /// assert_eq!(grid.neighbors(4, &[]), vec![0, 1, 2, 3, 5, 6, 7, 8]);
    /// assert_eq!(grid.neighbors(0, &[4]), vec![1, 3]);
    /// ```
    #[must_use]
    pub fn neighbors(self, index: usize, visited: &[usize]) -> Vec<usize> {
        let Some(center) = self.position(index) else {
            return Vec::new();
        };

        let mut result = Vec::with_capacity(8);
        for y in center.y.saturating_sub(1)..=center.y + 1 {
            for x in center.x.saturating_sub(1)..=center.x + 1 {
                let Some(candidate) = self.index_of(x, y) else {
                    continue;
                };
                if candidate != index && !visited.contains(&candidate) {
                    result.push(candidate);
                }
            }
        }
        result
    }
}
