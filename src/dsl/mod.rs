//! Text format for storing an MNA system on disk.
//!
//! The format is line-oriented and human-editable, in the spirit of SPICE
//! netlists.
//!
//! # Grammar Overview
//!
//! ```text
//! snapshot    = { line }
//! line        = comment | directive | values | empty
//! comment     = ('#' | ';') { any_char }
//! directive   = '.' section { value }
//! values      = value { value }
//!
//! section     = "matrix" | "knowns" | "unknowns"
//! value       = number [unit_suffix]
//! number      = ['-'] digit+ ['.' digit+] [('e'|'E') ['-'|'+'] digit+]
//! unit_suffix = 'p' | 'n' | 'u' | 'µ' | 'm' | 'k' | 'K' | 'M' | 'G'
//! ```
//!
//! Inside `.matrix` every line is one row and all rows must have the same
//! length. Inside `.knowns` and `.unknowns` values may be spread over any
//! number of lines. A section that never appears is absent from the
//! resulting [`MnaSnapshot`]; a section with no values is present but empty.
//!
//! # Example
//!
//! ```text
//! # Voltage divider, not yet solved
//! .matrix
//! 2m   -1m  1
//! -1m  2m   0
//! 1    0    0
//! .knowns
//! 0 0 5
//! ```

mod parser;
mod value;

pub use parser::{Parser, Section};
pub use value::parse_value;

use crate::error::Result;
use crate::system::MnaSnapshot;

/// Parse snapshot text.
pub fn parse(input: &str) -> Result<MnaSnapshot> {
    Parser::new(input).parse()
}

/// Parse a snapshot file.
#[cfg(feature = "cli")]
pub fn parse_file(path: &std::path::Path) -> Result<MnaSnapshot> {
    let content = std::fs::read_to_string(path).map_err(|e| crate::error::MnaPrintError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    parse(&content)
}
