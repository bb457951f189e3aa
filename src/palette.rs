
//! Color tables for paletted images, and the nearest-color search used to write them.

use crate::color::{Color, Rgba16};


/// An ordered list of colors. The position of a color is its index in a paletted image.
/// Duplicates are allowed, in which case the first occurrence wins a search.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {

    /// Create a palette from colors in index order.
    pub fn new(colors: impl IntoIterator<Item = Color>) -> Self {
        Palette { colors: colors.into_iter().collect() }
    }

    /// All colors, in index order.
    pub fn colors(&self) -> &[Color] { &self.colors }

    /// Number of colors in this palette.
    pub fn len(&self) -> usize { self.colors.len() }

    /// Whether this palette has no colors at all.
    pub fn is_empty(&self) -> bool { self.colors.is_empty() }

    /// The color at the index, if any.
    pub fn get(&self, index: usize) -> Option<Color> { self.colors.get(index).copied() }

    /// The index of the palette color closest to the specified color.
    /// Converts every palette color, so prefer a `PaletteMatcher` for many queries.
    /// Returns zero for an empty palette.
    pub fn index(&self, color: Color) -> usize {
        PaletteMatcher::new(self).nearest(color.to_rgba16())
    }
}

impl FromIterator<Color> for Palette {
    fn from_iter<T: IntoIterator<Item = Color>>(iter: T) -> Self {
        Palette::new(iter)
    }
}


/// The colors of a palette, converted to premultiplied channels once.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PaletteMatcher {
    entries: Vec<Rgba16>,
}

impl PaletteMatcher {

    /// Convert all colors of the palette.
    pub fn new(palette: &Palette) -> Self {
        PaletteMatcher { entries: palette.colors().iter().map(|color| color.to_rgba16()).collect() }
    }

    /// The converted color at the specified index.
    /// Indices without a palette color are transparent.
    #[inline]
    pub fn entry(&self, index: usize) -> Rgba16 {
        self.entries.get(index).copied().unwrap_or(Rgba16::TRANSPARENT)
    }

    /// The index of the entry with the smallest squared channel distance.
    /// Ties resolve to the lowest index. Returns zero for an empty palette.
    pub fn nearest(&self, color: Rgba16) -> usize {
        let mut best_index = 0;
        let mut best_cost = u32::MAX;

        for (index, entry) in self.entries.iter().enumerate() {
            let cost = squared_difference(color.r, entry.r)
                + squared_difference(color.g, entry.g)
                + squared_difference(color.b, entry.b)
                + squared_difference(color.a, entry.a);

            if cost < best_cost {
                if cost == 0 { return index; }

                best_index = index;
                best_cost = cost;
            }
        }

        best_index
    }
}

/// Quarter of the squared difference, so that the sum of four channels fits into 32 bits.
#[inline]
fn squared_difference(a: u16, b: u16) -> u32 {
    let difference = u32::from(a.abs_diff(b));
    (difference * difference) >> 2
}
