//! Line parser for the snapshot format.

use crate::error::{MnaPrintError, Result};
use crate::system::{DenseMatrix, MatrixView, MnaSnapshot};

use super::value::parse_value;

/// A section introduced by a directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// `.matrix`: one row per line
    Matrix,
    /// `.knowns`: free-flowing values
    Knowns,
    /// `.unknowns`: free-flowing values
    Unknowns,
}

impl Section {
    /// Look up a directive name (without the leading dot).
    pub fn from_directive(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "matrix" => Some(Section::Matrix),
            "knowns" => Some(Section::Knowns),
            "unknowns" => Some(Section::Unknowns),
            _ => None,
        }
    }

    /// Directive name without the leading dot.
    pub fn name(self) -> &'static str {
        match self {
            Section::Matrix => "matrix",
            Section::Knowns => "knowns",
            Section::Unknowns => "unknowns",
        }
    }
}

/// Parser for snapshot text.
pub struct Parser<'a> {
    input: &'a str,
    section: Option<Section>,
    rows: Option<Vec<Vec<f64>>>,
    knowns: Option<Vec<f64>>,
    unknowns: Option<Vec<f64>>,
}

impl<'a> Parser<'a> {
    /// Create a parser over the given text.
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            section: None,
            rows: None,
            knowns: None,
            unknowns: None,
        }
    }

    /// Parse the whole input into a snapshot.
    pub fn parse(mut self) -> Result<MnaSnapshot> {
        for (index, raw) in self.input.lines().enumerate() {
            let line = index + 1;
            let content = strip_comment(raw).trim();
            if content.is_empty() {
                continue;
            }

            let mut tokens = content.split_whitespace().peekable();
            let directive = tokens
                .peek()
                .and_then(|tok| tok.strip_prefix('.'))
                .filter(|name| name.starts_with(|c: char| c.is_ascii_alphabetic()));
            if let Some(directive) = directive {
                let section = Section::from_directive(directive).ok_or_else(|| {
                    MnaPrintError::parse(line, format!("unknown directive: .{}", directive))
                })?;
                self.open_section(section, line)?;
                tokens.next();
            }

            let values = tokens
                .map(|tok| {
                    parse_value(tok)
                        .ok_or_else(|| MnaPrintError::parse(line, format!("invalid number: {:?}", tok)))
                })
                .collect::<Result<Vec<f64>>>()?;

            if !values.is_empty() {
                self.push_values(values, line)?;
            }
        }

        let matrix = self
            .rows
            .map(|rows| DenseMatrix::from_rows(&rows))
            .transpose()?;

        log::debug!(
            "parsed snapshot: matrix={:?} knowns={:?} unknowns={:?}",
            matrix.as_ref().map(|m| (m.rows(), m.cols())),
            self.knowns.as_ref().map(Vec::len),
            self.unknowns.as_ref().map(Vec::len),
        );

        Ok(MnaSnapshot {
            matrix,
            knowns: self.knowns,
            unknowns: self.unknowns,
        })
    }

    fn open_section(&mut self, section: Section, line: usize) -> Result<()> {
        let already_seen = match section {
            Section::Matrix => self.rows.replace(Vec::new()).is_some(),
            Section::Knowns => self.knowns.replace(Vec::new()).is_some(),
            Section::Unknowns => self.unknowns.replace(Vec::new()).is_some(),
        };
        if already_seen {
            return Err(MnaPrintError::DuplicateSection {
                line,
                section: section.name().to_string(),
            });
        }

        log::trace!("line {}: entering .{}", line, section.name());
        self.section = Some(section);
        Ok(())
    }

    fn push_values(&mut self, values: Vec<f64>, line: usize) -> Result<()> {
        match self.section {
            None => Err(MnaPrintError::parse(
                line,
                "values outside of a section (expected .matrix, .knowns or .unknowns)",
            )),
            Some(Section::Matrix) => {
                let rows = self.rows.get_or_insert_with(Vec::new);
                if let Some(first) = rows.first() {
                    if first.len() != values.len() {
                        return Err(MnaPrintError::parse(
                            line,
                            format!(
                                "matrix row has {} values, expected {}",
                                values.len(),
                                first.len()
                            ),
                        ));
                    }
                }
                rows.push(values);
                Ok(())
            }
            Some(Section::Knowns) => {
                self.knowns.get_or_insert_with(Vec::new).extend(values);
                Ok(())
            }
            Some(Section::Unknowns) => {
                self.unknowns.get_or_insert_with(Vec::new).extend(values);
                Ok(())
            }
        }
    }
}

/// Drop everything from the first '#' or ';'.
fn strip_comment(line: &str) -> &str {
    match line.find(&['#', ';'][..]) {
        Some(pos) => &line[..pos],
        None => line,
    }
}
