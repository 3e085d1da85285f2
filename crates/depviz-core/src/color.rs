//! Group colors and the sources that hand them out.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Palette used when the configuration does not provide one.
pub const DEFAULT_PALETTE: [&str; 8] = [
    "blue",
    "red",
    "coral",
    "crimson",
    "darkslateblue",
    "cornflowerblue",
    "aquamarine1",
    "darkgreen",
];

/// Neutral color of version nodes, placeholder nodes and version edges.
pub const DEFAULT_VERSION_COLOR: &str = "gray";

/// A renderer color name (e.g. a GraphViz X11 color).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Color {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Color {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn default_palette() -> Vec<Color> {
    DEFAULT_PALETTE.iter().copied().map(Color::from).collect()
}

/// Hands out group colors for newly created nodes.
pub trait ColorSource {
    fn next_color(&mut self) -> Color;
}

/// Uniform random choice from a palette. Repeats are allowed.
#[derive(Debug, Clone)]
pub struct RandomColors {
    palette: Vec<Color>,
}

impl RandomColors {
    /// An empty palette falls back to [`DEFAULT_PALETTE`].
    pub fn new(palette: Vec<Color>) -> Self {
        let palette = if palette.is_empty() {
            default_palette()
        } else {
            palette
        };
        Self { palette }
    }
}

impl Default for RandomColors {
    fn default() -> Self {
        Self::new(default_palette())
    }
}

impl ColorSource for RandomColors {
    fn next_color(&mut self) -> Color {
        let index = match getrandom::u32() {
            Ok(value) => value as usize % self.palette.len(),
            Err(err) => {
                tracing::warn!(error = %err, "no randomness available, using first palette color");
                0
            }
        };
        self.palette[index].clone()
    }
}

/// Round-robin over a palette, starting at the first entry.
///
/// Gives reproducible colors for tests and stable output.
#[derive(Debug, Clone)]
pub struct CyclingColors {
    palette: Vec<Color>,
    next: usize,
}

impl CyclingColors {
    /// An empty palette falls back to [`DEFAULT_PALETTE`].
    pub fn new(palette: Vec<Color>) -> Self {
        let palette = if palette.is_empty() {
            default_palette()
        } else {
            palette
        };
        Self { palette, next: 0 }
    }
}

impl ColorSource for CyclingColors {
    fn next_color(&mut self) -> Color {
        let color = self.palette[self.next].clone();
        self.next = (self.next + 1) % self.palette.len();
        color
    }
}
