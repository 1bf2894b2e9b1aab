//! Text rendering of squares.

use super::MagicSquare;

fn border(left: char, mid: char, right: char, size: usize, width: usize) -> String {
    let segment = "─".repeat(width);
    let mut line = String::new();
    line.push(left);
    line.push_str(&vec![segment; size].join(&mid.to_string()));
    line.push(right);
    line.push('\n');
    line
}

/// Render a square as a boxed grid followed by its magic constant.
///
/// Cells are centred in a width of two more than the digits of N².
pub fn render_square(square: &MagicSquare, title: &str) -> String {
    let n = square.size();
    let width = (n * n).to_string().len() + 2;
    let mut out = String::new();

    if title.is_empty() {
        out.push_str(&format!("{n}x{n} Magic Square:\n"));
    } else {
        out.push_str(&format!("{title} ({n}x{n} Magic Square):\n"));
    }

    out.push_str(&border('┌', '┬', '┐', n, width));
    for (i, row) in square.rows().iter().enumerate() {
        let cells: Vec<String> = row.iter().map(|v| format!("{v:^width$}")).collect();
        out.push_str(&format!("│{}│\n", cells.join("│")));
        if i + 1 < n {
            out.push_str(&border('├', '┼', '┤', n, width));
        }
    }
    out.push_str(&border('└', '┴', '┘', n, width));
    out.push_str(&format!("\nMagic Constant: {}\n", square.magic_constant()));
    out
}

/// Plain rows of right-aligned numbers, one row per line.
pub fn render_plain(square: &MagicSquare) -> String {
    let mut out = String::new();
    for row in square.rows() {
        let cells: Vec<String> = row.iter().map(|v| format!("{v:3}")).collect();
        out.push_str(&cells.join(" "));
        out.push('\n');
    }
    out
}
