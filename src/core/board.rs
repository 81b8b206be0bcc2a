//! Square letter board
//!
//! Cells hold one or more characters (a "Qu" tile is a single cell). Labels are
//! lowercased on construction so they compare directly against lexicon words.

use super::{Grid, Position, SearchError, lexicon::normalize};
use rand::Rng;
use std::fmt;

/// The 4×4 board used when none is supplied
pub const DEFAULT_CELLS: [&str; 16] = [
    "E", "E", "C", "A", "A", "L", "E", "P", "H", "N", "B", "O", "Q", "T", "T", "Y",
];

/// Letter pool for random boards, weighted roughly by English frequency
const LETTER_POOL: &str = "eeeeeeeeaaaaaiiiiiooooonnnnnrrrrrtttttllllsssssuuudddgghhbbccmmppffvwwyykjxqz";

/// A resident cell: where it is and what it holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell<'a> {
    pub position: Position,
    pub label: &'a str,
}

/// An immutable N×N board in row-major order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Vec<String>,
    grid: Grid,
}

impl Board {
    /// Build a board from N² cell labels in row-major order
    ///
    /// # Errors
    /// - `SearchError::NonSquareBoard` if the cell count is not a perfect square
    /// - `SearchError::InvalidArgument` if any label is empty
    ///
    /// # Examples
    /// ```
    /// use lexisearch::core::Board;
    ///
    /// let board = Board::new(&["A", "T", "E", "R"]).unwrap();
    /// assert_eq!(board.size(), 2);
    /// assert_eq!(board.label(3), Some("r"));
    ///
    /// assert!(Board::new(&["A", "T", "E"]).is_err());
    /// ```
    pub fn new<S: AsRef<str>>(cells: &[S]) -> Result<Self, SearchError> {
        let size = cells.len().isqrt();
        if size * size != cells.len() {
            return Err(SearchError::NonSquareBoard(cells.len()));
        }

        let cells: Vec<String> = cells
            .iter()
            .map(|cell| normalize(cell.as_ref().trim()))
            .collect();
        if let Some(index) = cells.iter().position(String::is_empty) {
            return Err(SearchError::InvalidArgument(format!(
                "cell {index} has an empty label"
            )));
        }

        Ok(Self {
            cells,
            grid: Grid::new(size),
        })
    }

    /// Generate a `size`×`size` board of single letters
    ///
    /// A drawn `q` becomes a `qu` cell.
    pub fn random<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Self {
        let pool = LETTER_POOL.as_bytes();
        let cells = (0..size * size)
            .map(|_| match pool[rng.random_range(0..pool.len())] {
                b'q' => "qu".to_string(),
                letter => char::from(letter).to_string(),
            })
            .collect();

        Self {
            cells,
            grid: Grid::new(size),
        }
    }

    /// Side length N
    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.grid.size()
    }

    /// Adjacency model for this board
    #[inline]
    #[must_use]
    pub const fn grid(&self) -> Grid {
        self.grid
    }

    /// Number of cells (N²)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Label of the cell at `index`
    #[inline]
    #[must_use]
    pub fn label(&self, index: usize) -> Option<&str> {
        self.cells.get(index).map(String::as_str)
    }

    /// Position and label of the cell at `index`
    #[must_use]
    pub fn cell(&self, index: usize) -> Option<Cell<'_>> {
        Some(Cell {
            position: self.grid.position(index)?,
            label: self.label(index)?,
        })
    }

    /// Concatenated labels along `path`
    ///
    /// Off-board indices contribute nothing.
    #[must_use]
    pub fn path_text(&self, path: &[usize]) -> String {
        path.iter().filter_map(|&index| self.label(index)).collect()
    }

    /// Whether `path` is a simple chain of adjacent on-board cells spelling `word`
    #[must_use]
    pub fn is_path_for(&self, path: &[usize], word: &str) -> bool {
        let simple = path
            .iter()
            .enumerate()
            .all(|(i, index)| !path[..i].contains(index));
        let connected = path.windows(2).all(|pair| self.grid.are_adjacent(pair[0], pair[1]));
        let on_board = path.iter().all(|&index| index < self.len());

        !path.is_empty() && simple && connected && on_board && self.path_text(path) == normalize(word)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self {
            cells: DEFAULT_CELLS.iter().map(|cell| normalize(cell)).collect(),
            grid: Grid::new(4),
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .cells
            .iter()
            .map(|cell| cell.chars().count())
            .max()
            .unwrap_or(1);

        for row in self.cells.chunks(self.size().max(1)) {
            let line: Vec<String> = row
                .iter()
                .map(|cell| format!("{:<width$}", cell.to_uppercase()))
                .collect();
            writeln!(f, "{}", line.join(" ").trim_end())?;
        }
        Ok(())
    }
}
