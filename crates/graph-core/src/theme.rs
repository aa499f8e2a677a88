// File: crates/graph-core/src/theme.rs
// Summary: Curve color cycling and color-name resolution shared by every surface.

use crate::error::GraphError;

/// Reference palette: curve N gets `PALETTE[N % 3]`.
pub const PALETTE: [&str; 3] = ["red", "green", "blue"];

/// Color used for the axes and their ticks.
pub const AXIS_COLOR: &str = "black";
/// Canvas background.
pub const BACKGROUND: &str = "white";

/// Color for the `counter`-th drawn expression under the reference palette.
#[inline]
pub fn color_for(counter: usize) -> &'static str {
    PALETTE[counter % PALETTE.len()]
}

/// Ordered, non-empty list of curve colors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<String>,
}

impl Palette {
    /// Build a palette; every entry must resolve via [`parse_color`].
    pub fn new<I, S>(colors: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let colors: Vec<String> = colors.into_iter().map(Into::into).collect();
        if colors.is_empty() {
            return Err(GraphError::Configuration("palette must not be empty".into()));
        }
        for c in &colors {
            if parse_color(c).is_none() {
                return Err(GraphError::Configuration(format!("unknown color '{c}'")));
            }
        }
        Ok(Self { colors })
    }

    pub fn color_for(&self, counter: usize) -> &str {
        &self.colors[counter % self.colors.len()]
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self { colors: PALETTE.iter().map(|c| c.to_string()).collect() }
    }
}

/// 8-bit RGB triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

const NAMED: &[(&str, Rgb)] = &[
    ("black", Rgb(0, 0, 0)),
    ("white", Rgb(255, 255, 255)),
    ("red", Rgb(255, 0, 0)),
    ("green", Rgb(0, 255, 0)),
    ("blue", Rgb(0, 0, 255)),
    ("yellow", Rgb(255, 255, 0)),
    ("orange", Rgb(255, 165, 0)),
    ("purple", Rgb(160, 32, 240)),
    ("magenta", Rgb(255, 0, 255)),
    ("cyan", Rgb(0, 255, 255)),
    ("gray", Rgb(190, 190, 190)),
    ("grey", Rgb(190, 190, 190)),
    ("brown", Rgb(165, 42, 42)),
    ("pink", Rgb(255, 192, 203)),
];

/// Resolve a color name (case-insensitive) or a `#rrggbb` literal.
pub fn parse_color(name: &str) -> Option<Rgb> {
    let name = name.trim();
    if let Some(hex) = name.strip_prefix('#') {
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        return Some(Rgb(channel(0)?, channel(2)?, channel(4)?));
    }
    NAMED.iter().find(|(n, _)| n.eq_ignore_ascii_case(name)).map(|&(_, rgb)| rgb)
}
