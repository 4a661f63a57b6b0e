//! Side-by-side rendering of A, x and z as one pseudo-equation.
//!
//! ```text
//! ┌ 1.0     , 0.0     , ┐ ┌ 1.0     ┐ = ┌ 3.0     ┐
//! └ 0.0     , 1.0     , ┘ └ 2.0     ┘   └ 4.0     ┘
//! ```

use crate::system::{MatrixView, MnaSource, VectorView};

use super::block::{matrix_block, vector_block, Block};
use super::decorate::{decorator_for, Decorator, Role};

/// Which composite row carries the connector glyph.
///
/// The row is counted from the bottom so the marker sits near the middle of
/// a typical bracket. Composites shorter than the offset put it on row 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerRow {
    from_bottom: usize,
}

impl MarkerRow {
    /// Second-to-last row.
    pub const SECOND_TO_LAST: MarkerRow = MarkerRow { from_bottom: 2 };

    /// Marker row index for a composite of `rows` rows, if any.
    pub fn index(self, rows: usize) -> Option<usize> {
        if rows == 0 {
            None
        } else {
            Some(rows.saturating_sub(self.from_bottom))
        }
    }
}

/// Marker policy used by all composites.
pub const MARKER_ROW: MarkerRow = MarkerRow::SECOND_TO_LAST;

/// Connector placed between blocks: the marker on one row, blanks elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connector {
    /// Text on the marker row
    pub marker: &'static str,
    /// Text on every other row, same width as `marker`
    pub spacer: &'static str,
}

/// Connector between A and z when x is not available.
pub const NO_UNKNOWNS_CONNECTOR: Connector = Connector {
    marker: " x = ",
    spacer: "     ",
};

/// Connector between x and z.
pub const EQUALS_CONNECTOR: Connector = Connector {
    marker: " = ",
    spacer: "   ",
};

/// One horizontal segment of a composite row.
enum Piece<'a> {
    Block(&'a Block, Role),
    Gap(&'static str),
    Connector(Connector),
}

/// Lay the pieces out left to right, one output line per row.
fn compose(pieces: &[Piece<'_>], decorator: &dyn Decorator) -> String {
    let biggest = pieces
        .iter()
        .filter_map(|piece| match piece {
            Piece::Block(block, _) => Some(block.len()),
            _ => None,
        })
        .max()
        .unwrap_or(0);

    let padded: Vec<Option<Block>> = pieces
        .iter()
        .map(|piece| match piece {
            Piece::Block(block, role) => {
                if block.len() < biggest {
                    log::trace!("padding {} block from {} to {} lines", role, block.len(), biggest);
                }
                Some(block.padded_to(biggest))
            }
            _ => None,
        })
        .collect();

    let marker = MARKER_ROW.index(biggest);
    log::debug!("composing {} rows, marker at {:?}", biggest, marker);

    let mut output = String::new();
    for row in 0..biggest {
        for (piece, block) in pieces.iter().zip(&padded) {
            match (piece, block) {
                (Piece::Block(_, role), Some(block)) => {
                    output.push_str(&decorator.decorate(&block.lines()[row], *role));
                }
                (Piece::Gap(text), _) => output.push_str(text),
                (Piece::Connector(connector), _) => {
                    output.push_str(if marker == Some(row) {
                        connector.marker
                    } else {
                        connector.spacer
                    });
                }
                (Piece::Block(..), None) => {}
            }
        }
        output.push('\n');
    }
    output
}

/// Render A and z side by side with an `x =` marker, for unsolved systems.
///
/// A single space always follows the connector, with or without color, so
/// the decorator is the only difference between colored and plain output.
pub fn mna_format_no_unknowns_with<M, V>(matrix: &M, knowns: &V, decorator: &dyn Decorator) -> String
where
    M: MatrixView + ?Sized,
    V: VectorView + ?Sized,
{
    let a = matrix_block(matrix);
    let z = vector_block(Some(knowns));
    compose(
        &[
            Piece::Block(&a, Role::Matrix),
            Piece::Connector(NO_UNKNOWNS_CONNECTOR),
            Piece::Gap(" "),
            Piece::Block(&z, Role::Knowns),
        ],
        decorator,
    )
}

/// [`mna_format_no_unknowns_with`] using the default colors or none.
pub fn mna_format_no_unknowns<M, V>(matrix: &M, knowns: &V, color: bool) -> String
where
    M: MatrixView + ?Sized,
    V: VectorView + ?Sized,
{
    mna_format_no_unknowns_with(matrix, knowns, decorator_for(color))
}

/// Render `A x = z` side by side.
///
/// Falls back to [`mna_format_no_unknowns_with`] when x is absent.
pub fn mna_format_with<M, V>(
    matrix: &M,
    knowns: &V,
    unknowns: Option<&V>,
    decorator: &dyn Decorator,
) -> String
where
    M: MatrixView + ?Sized,
    V: VectorView + ?Sized,
{
    let Some(unknowns) = unknowns else {
        return mna_format_no_unknowns_with(matrix, knowns, decorator);
    };

    let a = matrix_block(matrix);
    let x = vector_block(Some(unknowns));
    let z = vector_block(Some(knowns));
    compose(
        &[
            Piece::Block(&a, Role::Matrix),
            Piece::Gap(" "),
            Piece::Block(&x, Role::Unknowns),
            Piece::Connector(EQUALS_CONNECTOR),
            Piece::Block(&z, Role::Knowns),
        ],
        decorator,
    )
}

/// [`mna_format_with`] using the default colors or none.
pub fn mna_format<M, V>(matrix: &M, knowns: &V, unknowns: Option<&V>, color: bool) -> String
where
    M: MatrixView + ?Sized,
    V: VectorView + ?Sized,
{
    mna_format_with(matrix, knowns, unknowns, decorator_for(color))
}

/// Render a whole MNA system.
///
/// Returns an empty string unless both A and z are available.
pub fn mna_format_source_with<S: MnaSource + ?Sized>(source: &S, decorator: &dyn Decorator) -> String {
    match (source.matrix(), source.knowns()) {
        (Some(matrix), Some(knowns)) => mna_format_with(matrix, knowns, source.unknowns(), decorator),
        _ => String::new(),
    }
}

/// [`mna_format_source_with`] using the default colors or none.
pub fn mna_format_source<S: MnaSource + ?Sized>(source: &S, color: bool) -> String {
    mna_format_source_with(source, decorator_for(color))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::decorate::Plain;
    use crate::system::{DenseMatrix, MnaSnapshot};

    fn identity2() -> Vec<Vec<f64>> {
        vec![vec![1.0, 0.0], vec![0.0, 1.0]]
    }

    #[test]
    fn test_marker_row_policy() {
        assert_eq!(MARKER_ROW.index(0), None);
        assert_eq!(MARKER_ROW.index(1), Some(0));
        assert_eq!(MARKER_ROW.index(2), Some(0));
        assert_eq!(MARKER_ROW.index(3), Some(1));
        assert_eq!(MARKER_ROW.index(5), Some(3));
    }

    #[test]
    fn test_single_row_no_unknowns() {
        let text = mna_format(&[[1.0]], &[5.0], None, false);
        assert_eq!(text, "[ 1.0     , ] x =  [ 5.0     ]\n");
    }

    #[test]
    fn test_identity_with_unknowns() {
        let text = mna_format(&identity2(), &vec![3.0, 4.0], Some(&vec![1.0, 2.0]), false);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "┌ 1.0     , 0.0     , ┐ ┌ 1.0     ┐ = ┌ 3.0     ┐");
        assert_eq!(lines[1], "└ 0.0     , 1.0     , ┘ └ 2.0     ┘   └ 4.0     ┘");
    }

    #[test]
    fn test_x_marker_appears_once_at_second_to_last_row() {
        let a = vec![vec![1.0; 4]; 4];
        let z = vec![0.5; 4];
        let text = mna_format_no_unknowns(&a, &z, false);
        let lines: Vec<&str> = text.lines().collect();
        let biggest = lines.len();
        assert_eq!(biggest, 4);

        let marked: Vec<usize> = lines
            .iter()
            .enumerate()
            .filter(|(_, line)| line.contains("x = "))
            .map(|(i, _)| i)
            .collect();
        assert_eq!(marked, vec![biggest - 2]);
    }

    #[test]
    fn test_mismatched_heights_are_padded() {
        let a = vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]];
        let z = vec![7.0];
        let text = mna_format_no_unknowns(&a, &z, false);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);

        let widths: Vec<usize> = lines.iter().map(|l| l.chars().count()).collect();
        assert!(widths.iter().all(|w| *w == widths[0]));
        assert!(lines[1].contains(" x = "));
        assert!(lines[0].ends_with("[ 7.0     ]"));
        assert!(lines[2].ends_with(&" ".repeat(11)));
    }

    #[test]
    fn test_three_block_padding_keeps_columns_aligned() {
        let a = vec![vec![1.0]; 3];
        let z = vec![1.0, 2.0, 3.0];
        let x = vec![9.0];
        let text = mna_format(&a, &z, Some(&x), false);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        let widths: Vec<usize> = lines.iter().map(|l| l.chars().count()).collect();
        assert!(widths.iter().all(|w| *w == widths[0]));
        assert_eq!(lines.iter().filter(|l| l.contains(" = ")).count(), 1);
        assert!(lines[1].contains(" = "));
    }

    #[test]
    fn test_empty_inputs_compose_to_nothing() {
        let a: Vec<Vec<f64>> = Vec::new();
        let z: Vec<f64> = Vec::new();
        assert_eq!(mna_format(&a, &z, None, false), "");
        assert_eq!(mna_format(&a, &z, Some(&z), true), "");
    }

    #[test]
    fn test_no_unknowns_color_keeps_plain_spacing() {
        let colored = mna_format_no_unknowns(&[[1.0]], &[5.0], true);
        assert_eq!(
            colored,
            "\x1b[31m[ 1.0     , ]\x1b[0m x =  \x1b[34m[ 5.0     ]\x1b[0m\n"
        );
        let stripped = colored.replace("\x1b[31m", "").replace("\x1b[34m", "").replace("\x1b[0m", "");
        assert_eq!(stripped, mna_format_no_unknowns(&[[1.0]], &[5.0], false));
    }

    #[test]
    fn test_color_wraps_each_block() {
        let text = mna_format(&[[1.0]], &[5.0], Some(&[2.0]), true);
        assert_eq!(
            text,
            "\x1b[31m[ 1.0     , ]\x1b[0m \x1b[32m[ 2.0     ]\x1b[0m = \x1b[34m[ 5.0     ]\x1b[0m\n"
        );
    }

    #[test]
    fn test_custom_decorator_sees_roles() {
        let tag = |text: &str, role: Role| match role {
            Role::Matrix => format!("A{}", text.len()),
            Role::Knowns => "z".to_string(),
            Role::Unknowns => "x".to_string(),
        };
        let text = mna_format_with(&[[1.0]], &[5.0], Some(&[2.0]), &tag);
        assert_eq!(text, "A13 x = z\n");
    }

    #[test]
    fn test_source_requires_matrix_and_knowns() {
        let only_unknowns = MnaSnapshot::new().with_unknowns(vec![1.0]);
        assert_eq!(mna_format_source(&only_unknowns, false), "");

        let no_knowns = MnaSnapshot::new()
            .with_matrix(DenseMatrix::new(1, 1))
            .with_unknowns(vec![1.0]);
        assert_eq!(mna_format_source(&no_knowns, true), "");

        let no_matrix = MnaSnapshot::new().with_knowns(vec![1.0]).with_unknowns(vec![1.0]);
        assert_eq!(mna_format_source(&no_matrix, false), "");
    }

    #[test]
    fn test_source_delegates_to_composite() {
        let a = DenseMatrix::from_rows(&identity2()).unwrap();
        let snapshot = MnaSnapshot::new()
            .with_matrix(a.clone())
            .with_knowns(vec![3.0, 4.0]);
        assert_eq!(
            mna_format_source_with(&snapshot, &Plain),
            mna_format_no_unknowns(&a, &vec![3.0, 4.0], false)
        );

        let solved = snapshot.with_unknowns(vec![1.0, 2.0]);
        assert_eq!(
            mna_format_source(&solved, false),
            mna_format(&identity2(), &vec![3.0, 4.0], Some(&vec![1.0, 2.0]), false)
        );
    }

    #[test]
    fn test_composite_is_repeatable() {
        let a = identity2();
        let z = vec![3.0, 4.0];
        assert_eq!(mna_format(&a, &z, None, true), mna_format(&a, &z, None, true));
    }
}
