//! Text rendering of boards.

use crate::config::RenderStyle;
use strictly_grid::{Board, CellState};

/// Renders `board` in the given style. Every line ends with a newline.
pub fn render(board: &Board, style: RenderStyle) -> String {
    match style {
        RenderStyle::Plain => board.to_string(),
        RenderStyle::Boxed => boxed(board),
    }
}

fn boxed(board: &Board) -> String {
    let size = board.size();
    let border = |left: &str, middle: &str, right: &str| {
        let mut line = String::from(left);
        for column in 0..size {
            line.push_str("───");
            line.push_str(if column + 1 < size { middle } else { right });
        }
        line.push('\n');
        line
    };

    let mut out = border("┌", "┬", "┐");
    for row in 0..size {
        out.push('│');
        for cell in board.row(row) {
            let symbol = match cell {
                CellState::Empty => ' ',
                CellState::X => 'x',
                CellState::O => 'o',
            };
            out.push(' ');
            out.push(symbol);
            out.push_str(" │");
        }
        out.push('\n');
        if row + 1 < size {
            out.push_str(&border("├", "┼", "┤"));
        }
    }
    out.push_str(&border("└", "┴", "┘"));
    out
}
