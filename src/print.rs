//! Console output helpers.
//!
//! The `*_print` functions write straight to stdout and are meant for quick
//! debugging. [`write_text`] and [`write_mna`] take any writer.

use std::io::{self, Write};

use crate::error::Result;
use crate::format::{
    decorator_for, knowns_format, matrix_format, mna_format, mna_format_source,
    mna_format_source_with, unknowns_format, Decorator,
};
use crate::system::{MatrixView, MnaSource, VectorView};

/// Write `text` followed by a newline.
pub fn write_text<W: Write + ?Sized>(out: &mut W, text: &str) -> Result<()> {
    writeln!(out, "{}", text)?;
    Ok(())
}

/// Write the composite view of `source`.
pub fn write_mna<W, S>(out: &mut W, source: &S, decorator: &dyn Decorator) -> Result<()>
where
    W: Write + ?Sized,
    S: MnaSource + ?Sized,
{
    write_text(out, &mna_format_source_with(source, decorator))
}

fn print_stdout(text: &str) {
    // Output failures are logged, not propagated.
    if let Err(err) = write_text(&mut io::stdout().lock(), text) {
        log::warn!("{}", err);
    }
}

/// Print the coefficient matrix with header and footer.
pub fn matrix_print<M: MatrixView + ?Sized>(matrix: &M) {
    print_stdout(&matrix_format(matrix, true));
}

/// Print the knowns vector with header and footer.
pub fn knowns_print<V: VectorView + ?Sized>(knowns: &V) {
    print_stdout(&knowns_format(knowns, true));
}

/// Print the unknowns vector with header and footer.
///
/// Prints nothing at all for an unsolved system.
pub fn unknowns_print<V: VectorView + ?Sized>(unknowns: Option<&V>) {
    if unknowns.is_some() {
        print_stdout(&unknowns_format(unknowns, true));
    }
}

/// Print A, x and z side by side.
pub fn mna_print<M, V>(matrix: &M, knowns: &V, unknowns: Option<&V>, color: bool)
where
    M: MatrixView + ?Sized,
    V: VectorView + ?Sized,
{
    print_stdout(&mna_format(matrix, knowns, unknowns, color));
}

/// Print the composite view of a whole system.
pub fn mna_print_source<S: MnaSource + ?Sized>(source: &S, color: bool) {
    print_stdout(&mna_format_source(source, color));
}
