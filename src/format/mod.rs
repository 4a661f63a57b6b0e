//! Text rendering of MNA matrices and vectors.
//!
//! ## Blocks
//!
//! A block is one matrix or vector drawn inside a bracket. Single-row
//! sources get an inline bracket, taller ones a box bracket:
//!
//! ```text
//! [ 1.0     , 2.0     , ]        ┌ 3.0     ┐
//!                                │ 4.0     │
//!                                └ 5.0     ┘
//! ```
//!
//! Every value occupies exactly [`FORMAT_SIZE`] characters. Empty or absent
//! sources render as an empty string, never as an error.
//!
//! ## Composites
//!
//! [`mna_format`] places A, x and z next to each other with `=` on the
//! marker row (see [`MarkerRow`]). Without x, [`mna_format_no_unknowns`]
//! prints `x =` in its place. Shorter blocks are padded with blank lines so
//! blocks of any height can be combined.
//!
//! Color is applied through a [`Decorator`]. The `bool` entry points choose
//! between [`Plain`] and the default [`Ansi`] palette; the `*_with` variants
//! accept any decorator.

// TODO: color-coded view of the G, B, C, D submatrices and the v, j, i, e
// vectors once circuits expose their MNA partitioning.

mod block;
mod composite;
mod decorate;

pub use block::{
    format_cell, knowns_format, matrix_block, matrix_format, render_block, unknowns_format,
    vector_block, Block, BracketPosition,
};
pub use composite::{
    mna_format, mna_format_no_unknowns, mna_format_no_unknowns_with, mna_format_source,
    mna_format_source_with, mna_format_with, Connector, MarkerRow, EQUALS_CONNECTOR, MARKER_ROW,
    NO_UNKNOWNS_CONNECTOR,
};
pub use decorate::{decorator_for, Ansi, AnsiColor, Decorator, Palette, Plain, Role};

/// Width of every formatted value, in characters.
pub const FORMAT_SIZE: usize = 8;
