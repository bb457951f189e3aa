
//! An image of infinite size with the same color everywhere.

use crate::color::Color;
use crate::image::{Image, ImageMut, ImageView, ImageViewMut};
use crate::math::Rect;


/// A single color at every position. Useful as a fill source.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct UniformImage {

    /// The color of every pixel.
    pub color: Color,
}

impl UniformImage {

    /// Practically infinite bounds, leaving room for offsets without overflow.
    pub const BOUNDS: Rect = Rect {
        min: crate::math::Vec2(-1_000_000_000, -1_000_000_000),
        max: crate::math::Vec2(1_000_000_000, 1_000_000_000),
    };

    /// An image of the specified color.
    pub fn new(color: Color) -> Self {
        UniformImage { color }
    }
}

impl Image for UniformImage {
    fn bounds(&self) -> Rect { Self::BOUNDS }
    fn pixel(&self, _: i32, _: i32) -> Color { self.color }
    fn view(&self) -> ImageView<'_> { ImageView::Uniform(self) }
}

/// Setting any pixel changes the color of every pixel.
impl ImageMut for UniformImage {
    fn set_pixel(&mut self, _: i32, _: i32, color: Color) {
        self.color = color;
    }

    fn view_mut(&mut self) -> ImageViewMut<'_> { ImageViewMut::Generic(self) }
}
