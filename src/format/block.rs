//! Bracketed rendering of a single matrix or vector.

use crate::system::{MatrixView, VectorView};

use super::decorate::Role;
use super::FORMAT_SIZE;

/// Where a line sits inside its block's bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BracketPosition {
    /// The block has a single line
    Only,
    /// First line of a multi-line block
    Top,
    /// Interior line
    Middle,
    /// Last line of a multi-line block
    Bottom,
}

impl BracketPosition {
    /// Position of line `index` in a block of `count` lines.
    pub fn of(index: usize, count: usize) -> Self {
        if count <= 1 {
            BracketPosition::Only
        } else if index == 0 {
            BracketPosition::Top
        } else if index + 1 == count {
            BracketPosition::Bottom
        } else {
            BracketPosition::Middle
        }
    }

    /// Opening and closing glyphs.
    pub fn glyphs(self) -> (&'static str, &'static str) {
        match self {
            BracketPosition::Only => ("[", "]"),
            BracketPosition::Top => ("┌", "┐"),
            BracketPosition::Middle => ("│", "│"),
            BracketPosition::Bottom => ("└", "┘"),
        }
    }
}

/// Rendered lines of one matrix or vector, without line terminators.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Block {
    lines: Vec<String>,
}

impl Block {
    /// The rendered lines.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if there is nothing to render.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Width of the longest line, in characters.
    pub fn width(&self) -> usize {
        self.lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0)
    }

    /// Copy of this block extended to `height` lines with blank lines as
    /// wide as the block.
    ///
    /// Blocks already at least `height` lines tall are returned unchanged.
    pub fn padded_to(&self, height: usize) -> Block {
        let mut lines = self.lines.clone();
        if lines.len() < height {
            let blank = " ".repeat(self.width());
            lines.resize(height, blank);
        }
        Block { lines }
    }

    /// Join the lines into text, each terminated by a newline.
    ///
    /// With a title, the block is wrapped in `== Begin <title> ==` and
    /// `== End <title> ===` lines. An empty block renders as `""` either way.
    pub fn to_text(&self, title: Option<&str>) -> String {
        if self.is_empty() {
            return String::new();
        }

        let mut output = String::new();
        if let Some(title) = title {
            output.push_str(&format!("== Begin {} ==\n", title));
        }
        for line in &self.lines {
            output.push_str(line);
            output.push('\n');
        }
        if let Some(title) = title {
            output.push_str(&format!("== End {} ===\n", title));
        }
        output
    }
}

/// Format one value into a cell exactly [`FORMAT_SIZE`] characters wide.
///
/// Uses the value's `Debug` text, so `1.0` stays `1.0` and extreme
/// magnitudes keep their exponent. Nothing is rounded: short text is
/// left-aligned and padded, long text is cut.
pub fn format_cell(value: f64) -> String {
    format!("{:<width$.width$}", format!("{:?}", value), width = FORMAT_SIZE)
}

/// Render `count` rows into a bracketed block.
///
/// `render_row` writes the body of row `i` into the buffer it is given.
/// An absent source renders the same as an empty one.
pub fn render_block<S, N, F>(source: Option<&S>, count: N, render_row: F) -> Block
where
    S: ?Sized,
    N: Fn(&S) -> usize,
    F: Fn(&S, usize, &mut String),
{
    let Some(source) = source else {
        return Block::default();
    };

    let rows = count(source);
    let lines = (0..rows)
        .map(|i| {
            let (open, close) = BracketPosition::of(i, rows).glyphs();
            let mut line = String::with_capacity(FORMAT_SIZE * 2 + 4);
            line.push_str(open);
            line.push(' ');
            render_row(source, i, &mut line);
            line.push_str(close);
            line
        })
        .collect();

    Block { lines }
}

/// Block for the coefficient matrix: every entry followed by `", "`.
///
/// Each row renders its own entries, so ragged input shows up as uneven
/// lines.
pub fn matrix_block<M: MatrixView + ?Sized>(matrix: &M) -> Block {
    render_block(Some(matrix), M::rows, |m, row, out| {
        for col in 0..m.row_len(row) {
            out.push_str(&format_cell(m.value(row, col)));
            out.push_str(", ");
        }
    })
}

/// Block for a vector: one cell per line.
pub fn vector_block<V: VectorView + ?Sized>(vector: Option<&V>) -> Block {
    render_block(vector, V::len, |v, row, out| {
        out.push_str(&format_cell(v.value(row)));
    })
}

/// Render the coefficient matrix, optionally with a header and footer.
pub fn matrix_format<M: MatrixView + ?Sized>(matrix: &M, header_footer: bool) -> String {
    matrix_block(matrix).to_text(title(Role::Matrix, header_footer).as_deref())
}

/// Render the knowns vector, optionally with a header and footer.
pub fn knowns_format<V: VectorView + ?Sized>(knowns: &V, header_footer: bool) -> String {
    vector_block(Some(knowns)).to_text(title(Role::Knowns, header_footer).as_deref())
}

/// Render the unknowns vector, optionally with a header and footer.
///
/// Unsolved systems pass `None` and get an empty string.
pub fn unknowns_format<V: VectorView + ?Sized>(unknowns: Option<&V>, header_footer: bool) -> String {
    vector_block(unknowns).to_text(title(Role::Unknowns, header_footer).as_deref())
}

fn title(role: Role, header_footer: bool) -> Option<String> {
    header_footer.then(|| role.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_cell_pads_to_width() {
        assert_eq!(format_cell(1.0), "1.0     ");
        assert_eq!(format_cell(-0.5), "-0.5    ");
        assert_eq!(format_cell(0.0).len(), FORMAT_SIZE);
    }

    #[test]
    fn test_format_cell_truncates_without_rounding() {
        assert_eq!(format_cell(1.23456789), "1.234567");
        assert_eq!(format_cell(0.999999999), "0.999999");
    }

    #[test]
    fn test_format_cell_keeps_exponent_text() {
        assert_eq!(format_cell(1e-7), "1e-7    ");
        assert_eq!(format_cell(1e20), "1e20    ");
    }

    #[test]
    fn test_bracket_positions() {
        assert_eq!(BracketPosition::of(0, 1), BracketPosition::Only);
        assert_eq!(BracketPosition::of(0, 3), BracketPosition::Top);
        assert_eq!(BracketPosition::of(1, 3), BracketPosition::Middle);
        assert_eq!(BracketPosition::of(2, 3), BracketPosition::Bottom);
        assert_eq!(BracketPosition::of(1, 2), BracketPosition::Bottom);
    }

    #[test]
    fn test_empty_matrix_is_empty_string() {
        let empty: Vec<Vec<f64>> = Vec::new();
        assert_eq!(matrix_format(&empty, true), "");
        assert_eq!(matrix_format(&empty, false), "");
    }

    #[test]
    fn test_empty_and_absent_vectors() {
        let empty: Vec<f64> = Vec::new();
        assert_eq!(knowns_format(&empty, true), "");
        assert_eq!(unknowns_format(Some(&empty), true), "");
        assert_eq!(unknowns_format::<Vec<f64>>(None, true), "");
    }

    #[test]
    fn test_single_row_matrix_uses_inline_bracket() {
        let text = matrix_format(&[[1.0, 2.0, 3.0]], false);
        assert_eq!(text, "[ 1.0     , 2.0     , 3.0     , ]\n");
        assert!(!text.contains('┌') && !text.contains('└'));
    }

    #[test]
    fn test_single_column_matrix_uses_tall_bracket() {
        let text = matrix_format(&[[1.0], [2.0]], false);
        assert_eq!(text, "┌ 1.0     , ┐\n└ 2.0     , ┘\n");
    }

    #[test]
    fn test_ragged_rows_render_their_own_entries() {
        let shorter = vec![vec![1.0, 2.0], vec![3.0]];
        assert_eq!(
            matrix_format(&shorter, false),
            "┌ 1.0     , 2.0     , ┐\n└ 3.0     , ┘\n"
        );

        let longer = vec![vec![1.0], vec![3.0, 4.0, 5.0]];
        assert_eq!(
            matrix_format(&longer, false),
            "┌ 1.0     , ┐\n└ 3.0     , 4.0     , 5.0     , ┘\n"
        );
    }

    #[test]
    fn test_multi_row_matrix_glyphs() {
        let m = vec![vec![1.0, 0.0], vec![0.0, 1.0], vec![2.0, 2.0], vec![3.0, 3.0]];
        let block = matrix_block(&m);
        let lines = block.lines();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("┌ ") && lines[0].ends_with('┐'));
        assert!(lines[1].starts_with("│ ") && lines[1].ends_with('│'));
        assert!(lines[2].starts_with("│ ") && lines[2].ends_with('│'));
        assert!(lines[3].starts_with("└ ") && lines[3].ends_with('┘'));
        assert_eq!(lines[0], "┌ 1.0     , 0.0     , ┐");
    }

    #[test]
    fn test_knowns_with_header_footer() {
        let text = knowns_format(&[3.0, 4.0], true);
        assert_eq!(
            text,
            "== Begin Knowns Matrix ==\n┌ 3.0     ┐\n└ 4.0     ┘\n== End Knowns Matrix ===\n"
        );
    }

    #[test]
    fn test_unknowns_single_element() {
        assert_eq!(unknowns_format(Some(&[5.0]), false), "[ 5.0     ]\n");
    }

    #[test]
    fn test_matrix_header_title() {
        let text = matrix_format(&[[1.0]], true);
        assert!(text.starts_with("== Begin MNA Matrix ==\n"));
        assert!(text.ends_with("== End MNA Matrix ===\n"));
    }

    #[test]
    fn test_formatting_is_repeatable() {
        let m = vec![vec![1.5, -2.25], vec![1e-9, 42.0]];
        assert_eq!(matrix_format(&m, true), matrix_format(&m, true));
    }

    #[test]
    fn test_padded_to_uses_block_width() {
        let block = vector_block(Some(&[1.0, 2.0]));
        let padded = block.padded_to(4);
        assert_eq!(padded.len(), 4);
        assert_eq!(padded.lines()[3], " ".repeat(block.width()));
        assert_eq!(padded.lines()[..2], block.lines()[..]);
        assert_eq!(block.padded_to(1), block);
    }

    #[test]
    fn test_width_counts_characters() {
        let block = vector_block(Some(&[1.0, 2.0]));
        // "┌ " + 8 + "┐"
        assert_eq!(block.width(), 11);
    }
}
