
//! Single-channel images: coverage only, or opaque luma.

use crate::color::{narrow, Color};
use crate::image::{Image, ImageMut, ImageView, ImageViewMut};
use crate::math::Rect;


interleaved_image!(
    /// Coverage without color, one byte per pixel.
    Alpha8Image, bytes_per_pixel: 1
);

interleaved_image!(
    /// Coverage without color, two big-endian bytes per pixel.
    Alpha16Image, bytes_per_pixel: 2
);

interleaved_image!(
    /// Opaque luma, one byte per pixel.
    Gray8Image, bytes_per_pixel: 1
);

interleaved_image!(
    /// Opaque luma, two big-endian bytes per pixel.
    Gray16Image, bytes_per_pixel: 2
);


impl Image for Alpha8Image {
    fn bounds(&self) -> Rect { self.bounds }
    fn pixel(&self, x: i32, y: i32) -> Color { Color::Alpha8(self.pixels[self.offset(x, y)]) }
    fn view(&self) -> ImageView<'_> { ImageView::Alpha8(self) }
}

impl ImageMut for Alpha8Image {
    fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        let alpha = match color {
            Color::Alpha8(alpha) => alpha,
            other => narrow(other.to_rgba16().a),
        };

        let index = self.offset(x, y);
        self.pixels[index] = alpha;
    }

    fn view_mut(&mut self) -> ImageViewMut<'_> { ImageViewMut::Alpha8(self) }
}


impl Image for Alpha16Image {
    fn bounds(&self) -> Rect { self.bounds }

    fn pixel(&self, x: i32, y: i32) -> Color {
        Color::Alpha16(u16::from_be_bytes(self.plane().get(x, y)))
    }

    fn view(&self) -> ImageView<'_> { ImageView::Alpha16(self) }
}

impl ImageMut for Alpha16Image {
    fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        let alpha = match color {
            Color::Alpha16(alpha) => alpha,
            other => other.to_rgba16().a,
        };

        self.plane_mut().set(x, y, alpha.to_be_bytes());
    }

    fn view_mut(&mut self) -> ImageViewMut<'_> { ImageViewMut::Alpha16(self) }
}


impl Image for Gray8Image {
    fn bounds(&self) -> Rect { self.bounds }
    fn pixel(&self, x: i32, y: i32) -> Color { Color::Gray8(self.pixels[self.offset(x, y)]) }
    fn view(&self) -> ImageView<'_> { ImageView::Gray8(self) }
}

impl ImageMut for Gray8Image {
    fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        let luma = match color {
            Color::Gray8(luma) => luma,
            other => other.to_rgba16().to_gray8(),
        };

        let index = self.offset(x, y);
        self.pixels[index] = luma;
    }

    fn view_mut(&mut self) -> ImageViewMut<'_> { ImageViewMut::Gray8(self) }
}


impl Image for Gray16Image {
    fn bounds(&self) -> Rect { self.bounds }

    fn pixel(&self, x: i32, y: i32) -> Color {
        Color::Gray16(u16::from_be_bytes(self.plane().get(x, y)))
    }

    fn view(&self) -> ImageView<'_> { ImageView::Gray16(self) }
}

impl ImageMut for Gray16Image {
    fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        let luma = match color {
            Color::Gray16(luma) => luma,
            other => other.to_rgba16().to_gray16(),
        };

        self.plane_mut().set(x, y, luma.to_be_bytes());
    }

    fn view_mut(&mut self) -> ImageViewMut<'_> { ImageViewMut::Gray16(self) }
}
