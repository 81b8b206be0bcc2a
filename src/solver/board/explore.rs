//! Prefix-pruned depth-first walk over simple board paths
//!
//! The walk keeps an explicit stack of frames instead of recursing. Each frame
//! holds the untried neighbours of one path cell; popping an exhausted frame
//! backtracks that cell off the path.

use crate::core::Board;
use std::vec::IntoIter;

/// What the walk should do with the path it just reached
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Keep extending this path through its unvisited neighbours
    Descend,
    /// Abandon this path and try the next sibling
    Prune,
    /// Stop the whole walk and hand back this path
    Halt,
}

/// Working state of a single walk
struct Walk<'b> {
    board: &'b Board,
    path: Vec<usize>,
    text: String,
    /// `text.len()` before each path cell was appended
    marks: Vec<usize>,
    frames: Vec<IntoIter<usize>>,
}

impl<'b> Walk<'b> {
    fn new(board: &'b Board) -> Self {
        Self {
            board,
            path: Vec::new(),
            text: String::new(),
            marks: Vec::new(),
            frames: Vec::new(),
        }
    }

    fn push(&mut self, index: usize) {
        self.marks.push(self.text.len());
        self.text.push_str(self.board.label(index).unwrap_or_default());
        self.path.push(index);
    }

    fn pop(&mut self) {
        self.path.pop();
        if let Some(mark) = self.marks.pop() {
            self.text.truncate(mark);
        }
    }

    fn open_frame(&mut self) {
        if let Some(&last) = self.path.last() {
            let neighbors = self.board.grid().neighbors(last, &self.path);
            self.frames.push(neighbors.into_iter());
        }
    }
}

/// Walk every simple path that starts at `start`, depth first
///
/// `visit` sees the accumulated text and the path after every extension and
/// decides whether to descend, prune, or halt. Returns the path on `Halt`, or
/// `None` once the reachable paths are exhausted.
///
/// Neighbours are tried in ascending index order.
pub fn explore<F>(board: &Board, start: usize, mut visit: F) -> Option<Vec<usize>>
where
    F: FnMut(&str, &[usize]) -> Step,
{
    if start >= board.len() {
        return None;
    }

    let mut walk = Walk::new(board);
    walk.push(start);
    match visit(&walk.text, &walk.path) {
        Step::Halt => return Some(walk.path),
        Step::Prune => return None,
        Step::Descend => walk.open_frame(),
    }

    while let Some(frame) = walk.frames.last_mut() {
        let Some(next) = frame.next() else {
            walk.frames.pop();
            walk.pop();
            continue;
        };

        walk.push(next);
        match visit(&walk.text, &walk.path) {
            Step::Halt => return Some(walk.path),
            Step::Prune => walk.pop(),
            Step::Descend => walk.open_frame(),
        }
    }

    None
}
