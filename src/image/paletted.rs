
//! Images that store an index into a color table for every pixel.

use crate::color::Color;
use crate::error::{Error, Result};
use crate::image::{Image, ImageMut, ImageView, ImageViewMut, Plane, PlaneMut};
use crate::math::{Rect, Vec2};
use crate::palette::Palette;


/// One byte per pixel, indexing into a palette of at most 256 colors.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PalettedImage {

    /// The region covered by this image.
    pub bounds: Rect,

    /// The number of bytes between vertically adjacent pixels.
    pub stride: usize,

    /// The palette indices, row after row, `stride` bytes apart.
    pub pixels: Vec<u8>,

    /// The colors referred to by the pixels. Always has 1 to 256 colors.
    palette: Palette,
}

impl PalettedImage {

    /// The largest palette a single byte can index.
    pub const MAX_PALETTE_LEN: usize = 256;

    /// Allocate an image where all pixels refer to the first palette color.
    /// Fails if the palette is empty or too large.
    pub fn new(bounds: Rect, palette: Palette) -> Result<Self> {
        validate_palette(&palette)?;

        let Vec2(width, height) = bounds.size();
        Ok(Self { bounds, stride: width, pixels: vec![0; width * height], palette })
    }

    /// Use existing index storage.
    /// Fails if the rows do not fit into the storage, or if the palette is empty or too large.
    pub fn from_raw(bounds: Rect, stride: usize, pixels: Vec<u8>, palette: Palette) -> Result<Self> {
        validate_palette(&palette)?;

        let Vec2(width, height) = bounds.size();
        crate::error::validate_plane(pixels.len(), stride, width, height, "paletted image")?;
        Ok(Self { bounds, stride, pixels, palette })
    }

    /// The index of the byte of the pixel at the position.
    #[inline]
    pub fn offset(&self, x: i32, y: i32) -> usize {
        crate::image::sample_index(self.bounds.min, self.stride, 1, x, y)
    }

    /// Borrow the index rows for direct addressing.
    #[inline]
    pub fn plane(&self) -> Plane<'_> {
        Plane { samples: &self.pixels, stride: self.stride, origin: self.bounds.min }
    }

    /// Borrow the index rows mutably for direct addressing.
    #[inline]
    pub fn plane_mut(&mut self) -> PlaneMut<'_> {
        PlaneMut { samples: &mut self.pixels, stride: self.stride, origin: self.bounds.min }
    }

    /// The colors referred to by the pixels.
    pub fn palette(&self) -> &Palette { &self.palette }

    /// The palette index stored at the position.
    pub fn index_at(&self, x: i32, y: i32) -> u8 {
        self.pixels[self.offset(x, y)]
    }
}

impl Image for PalettedImage {
    fn bounds(&self) -> Rect { self.bounds }

    fn pixel(&self, x: i32, y: i32) -> Color {
        let index = self.index_at(x, y);
        self.palette.get(usize::from(index)).unwrap_or(Color::TRANSPARENT)
    }

    fn view(&self) -> ImageView<'_> { ImageView::Paletted(self) }
}

impl ImageMut for PalettedImage {
    fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        let palette_index = stored_index(self.palette.index(color));
        let index = self.offset(x, y);
        self.pixels[index] = palette_index;
    }

    fn view_mut(&mut self) -> ImageViewMut<'_> { ImageViewMut::Paletted(self) }
}

fn validate_palette(palette: &Palette) -> crate::error::UnitResult {
    if palette.is_empty() || palette.len() > PalettedImage::MAX_PALETTE_LEN {
        return Err(Error::invalid(format!("palette must have 1 to 256 colors, not {}", palette.len())));
    }

    Ok(())
}

/// Convert a palette position to the byte stored in a pixel, saturating instead of wrapping.
/// Palettes of paletted images never exceed `MAX_PALETTE_LEN`, so this never saturates in practice.
#[inline]
pub(crate) fn stored_index(index: usize) -> u8 {
    u8::try_from(index).unwrap_or(u8::MAX)
}
