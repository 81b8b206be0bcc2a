//! Formatting utilities for terminal output

use crate::core::Board;
use colored::Colorize;

/// Render the board grid, highlighting the cells on `path`
///
/// Highlighted cells are shown in their path order colour; the rest are dimmed
/// when a path is given.
#[must_use]
pub fn render_board(board: &Board, path: &[usize]) -> String {
    let width = (0..board.len())
        .filter_map(|index| board.label(index))
        .map(|label| label.chars().count())
        .max()
        .unwrap_or(1);

    let mut out = String::new();
    for y in 0..board.size() {
        let row: Vec<String> = (0..board.size())
            .filter_map(|x| board.grid().index_of(x, y))
            .map(|index| {
                let label = board.label(index).unwrap_or_default().to_uppercase();
                let cell = format!("{label:<width$}");
                if path.contains(&index) {
                    cell.bright_yellow().bold().to_string()
                } else if path.is_empty() {
                    cell
                } else {
                    cell.bright_black().to_string()
                }
            })
            .collect();
        out.push_str("  ");
        out.push_str(&row.join(" "));
        out.push('\n');
    }
    out
}

/// Describe a path as `LABEL(x,y)` steps
#[must_use]
pub fn format_path(board: &Board, path: &[usize]) -> String {
    path.iter()
        .filter_map(|&index| board.cell(index))
        .map(|cell| {
            format!(
                "{}({},{})",
                cell.label.to_uppercase(),
                cell.position.x,
                cell.position.y
            )
        })
        .collect::<Vec<_>>()
        .join(" → ")
}

/// Join ladder rungs with arrows
#[must_use]
pub fn format_ladder<S: AsRef<str>>(ladder: &[S]) -> String {
    ladder
        .iter()
        .map(|word| word.as_ref().to_uppercase())
        .collect::<Vec<_>>()
        .join(" → ")
}

/// Lay words out in fixed-width columns
#[must_use]
pub fn columns<S: AsRef<str>>(words: &[S], per_row: usize) -> Vec<String> {
    let width = words
        .iter()
        .map(|w| w.as_ref().chars().count())
        .max()
        .unwrap_or(0);

    words
        .chunks(per_row.max(1))
        .map(|chunk| {
            chunk
                .iter()
                .map(|w| format!("{:<width$}", w.as_ref().to_uppercase()))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Board {
        Board::new(&["A", "T", "E", "R"]).unwrap()
    }

    #[test]
    fn path_lists_coordinates() {
        assert_eq!(format_path(&board(), &[0, 1, 3]), "A(0,0) → T(1,0) → R(1,1)");
        assert_eq!(format_path(&board(), &[]), "");
    }

    #[test]
    fn ladder_uses_arrows() {
        assert_eq!(format_ladder(&["hit", "hot", "dot"]), "HIT → HOT → DOT");
        assert_eq!(format_ladder::<&str>(&[]), "");
    }

    #[test]
    fn board_rows_contain_labels() {
        let rendered = render_board(&board(), &[]);
        let rows: Vec<&str> = rendered.lines().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], "  A T");
        assert_eq!(rows[1], "  E R");
    }

    #[test]
    fn columns_wrap_rows() {
        let rows = columns(&["ale", "bent", "cape", "leap", "lent"], 2);
        assert_eq!(rows, vec!["ALE   BENT", "CAPE  LEAP", "LENT"]);
    }
}
