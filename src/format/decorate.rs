//! Text decoration for composite output.
//!
//! The composite formatters never emit escape codes themselves. They hand
//! every block line to a [`Decorator`] together with the [`Role`] of the
//! block it came from.

use std::fmt;

/// Which part of Ax = z a block shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Coefficient matrix A
    Matrix,
    /// Known-values vector z
    Knowns,
    /// Solved unknowns x
    Unknowns,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Matrix => write!(f, "MNA Matrix"),
            Role::Knowns => write!(f, "Knowns Matrix"),
            Role::Unknowns => write!(f, "Unknowns Matrix"),
        }
    }
}

/// Maps a line of block text to its decorated form.
pub trait Decorator: Sync {
    /// Decorate `text`, which belongs to a block with the given role.
    fn decorate(&self, text: &str, role: Role) -> String;
}

impl<F> Decorator for F
where
    F: Fn(&str, Role) -> String + Sync,
{
    fn decorate(&self, text: &str, role: Role) -> String {
        self(text, role)
    }
}

/// Identity decorator for uncolored output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Plain;

impl Decorator for Plain {
    fn decorate(&self, text: &str, _role: Role) -> String {
        text.to_string()
    }
}

/// Standard ANSI foreground colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnsiColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl AnsiColor {
    /// SGR parameter selecting this color as foreground.
    pub const fn code(self) -> u8 {
        match self {
            AnsiColor::Black => 30,
            AnsiColor::Red => 31,
            AnsiColor::Green => 32,
            AnsiColor::Yellow => 33,
            AnsiColor::Blue => 34,
            AnsiColor::Magenta => 35,
            AnsiColor::Cyan => 36,
            AnsiColor::White => 37,
        }
    }

    /// Wrap `text` in this foreground color, resetting afterwards.
    pub fn paint(self, text: &str) -> String {
        format!("\x1b[{}m{}\x1b[0m", self.code(), text)
    }
}

/// One color per block role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Color for A
    pub matrix: AnsiColor,
    /// Color for z
    pub knowns: AnsiColor,
    /// Color for x
    pub unknowns: AnsiColor,
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}

impl Palette {
    /// Red matrix, green unknowns, blue knowns.
    pub const fn new() -> Self {
        Self {
            matrix: AnsiColor::Red,
            knowns: AnsiColor::Blue,
            unknowns: AnsiColor::Green,
        }
    }

    /// Set the color for the coefficient matrix.
    pub fn with_matrix(mut self, color: AnsiColor) -> Self {
        self.matrix = color;
        self
    }

    /// Set the color for the knowns vector.
    pub fn with_knowns(mut self, color: AnsiColor) -> Self {
        self.knowns = color;
        self
    }

    /// Set the color for the unknowns vector.
    pub fn with_unknowns(mut self, color: AnsiColor) -> Self {
        self.unknowns = color;
        self
    }

    /// Color assigned to `role`.
    pub fn color_for(&self, role: Role) -> AnsiColor {
        match role {
            Role::Matrix => self.matrix,
            Role::Knowns => self.knowns,
            Role::Unknowns => self.unknowns,
        }
    }
}

/// Decorator that colors each role with ANSI escapes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ansi {
    palette: Palette,
}

impl Ansi {
    /// Create a color decorator using `palette`.
    pub const fn new(palette: Palette) -> Self {
        Self { palette }
    }

    /// The palette in use.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }
}

impl Decorator for Ansi {
    fn decorate(&self, text: &str, role: Role) -> String {
        self.palette.color_for(role).paint(text)
    }
}

static PLAIN: Plain = Plain;
static DEFAULT_ANSI: Ansi = Ansi::new(Palette::new());

/// Pick the default color decorator or the plain one.
pub fn decorator_for(color: bool) -> &'static dyn Decorator {
    if color {
        &DEFAULT_ANSI
    } else {
        &PLAIN
    }
}
