
//! Interleaved four-channel images: premultiplied and straight RGBA, and CMYK.

use crate::color::{Color, Rgba16, StraightRgba16};
use crate::image::{Image, ImageMut, ImageView, ImageViewMut};
use crate::math::Rect;


interleaved_image!(
    /// Premultiplied red, green, blue, and alpha, one byte each.
    Rgba8Image, bytes_per_pixel: 4
);

interleaved_image!(
    /// Premultiplied red, green, blue, and alpha, two big-endian bytes each.
    Rgba16Image, bytes_per_pixel: 8
);

interleaved_image!(
    /// Straight red, green, blue, and alpha, one byte each.
    StraightRgba8Image, bytes_per_pixel: 4
);

interleaved_image!(
    /// Straight red, green, blue, and alpha, two big-endian bytes each.
    StraightRgba16Image, bytes_per_pixel: 8
);

interleaved_image!(
    /// Opaque cyan, magenta, yellow, and black ink, one byte each.
    CmykImage, bytes_per_pixel: 4
);


impl Image for Rgba8Image {
    fn bounds(&self) -> Rect { self.bounds }
    fn pixel(&self, x: i32, y: i32) -> Color { Color::Rgba8(self.plane().get(x, y)) }
    fn view(&self) -> ImageView<'_> { ImageView::Rgba8(self) }
}

impl ImageMut for Rgba8Image {
    fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        self.plane_mut().set(x, y, color.to_rgba16().to_bytes());
    }

    fn view_mut(&mut self) -> ImageViewMut<'_> { ImageViewMut::Rgba8(self) }
}


impl Image for Rgba16Image {
    fn bounds(&self) -> Rect { self.bounds }

    fn pixel(&self, x: i32, y: i32) -> Color {
        Color::Rgba16(Rgba16::from_be_bytes(self.plane().get(x, y)))
    }

    fn view(&self) -> ImageView<'_> { ImageView::Rgba16(self) }
}

impl ImageMut for Rgba16Image {
    fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        self.plane_mut().set(x, y, color.to_rgba16().to_be_bytes());
    }

    fn view_mut(&mut self) -> ImageViewMut<'_> { ImageViewMut::Rgba16(self) }
}


impl Image for StraightRgba8Image {
    fn bounds(&self) -> Rect { self.bounds }
    fn pixel(&self, x: i32, y: i32) -> Color { Color::StraightRgba8(self.plane().get(x, y)) }
    fn view(&self) -> ImageView<'_> { ImageView::StraightRgba8(self) }
}

impl ImageMut for StraightRgba8Image {
    fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        let bytes = match color {
            Color::StraightRgba8(bytes) => bytes,
            other => other.to_rgba16().to_straight().to_bytes(),
        };

        self.plane_mut().set(x, y, bytes);
    }

    fn view_mut(&mut self) -> ImageViewMut<'_> { ImageViewMut::StraightRgba8(self) }
}


impl Image for StraightRgba16Image {
    fn bounds(&self) -> Rect { self.bounds }

    fn pixel(&self, x: i32, y: i32) -> Color {
        Color::StraightRgba16(StraightRgba16::from_be_bytes(self.plane().get(x, y)))
    }

    fn view(&self) -> ImageView<'_> { ImageView::StraightRgba16(self) }
}

impl ImageMut for StraightRgba16Image {
    fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        let straight = match color {
            Color::StraightRgba16(straight) => straight,
            other => other.to_rgba16().to_straight(),
        };

        self.plane_mut().set(x, y, straight.to_be_bytes());
    }

    fn view_mut(&mut self) -> ImageViewMut<'_> { ImageViewMut::StraightRgba16(self) }
}


impl Image for CmykImage {
    fn bounds(&self) -> Rect { self.bounds }
    fn pixel(&self, x: i32, y: i32) -> Color { Color::Cmyk(self.plane().get(x, y)) }
    fn view(&self) -> ImageView<'_> { ImageView::Cmyk(self) }
}

impl ImageMut for CmykImage {
    fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        let ink = match color {
            Color::Cmyk(ink) => ink,
            other => other.to_rgba16().to_cmyk(),
        };

        self.plane_mut().set(x, y, ink);
    }

    fn view_mut(&mut self) -> ImageViewMut<'_> { ImageViewMut::Cmyk(self) }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn offsets_respect_origin_and_stride(){
        let image = Rgba8Image::new(Rect::new((10, 20), (13, 22)));
        assert_eq!(image.stride, 12);
        assert_eq!(image.pixels.len(), 24);
        assert_eq!(image.offset(10, 20), 0);
        assert_eq!(image.offset(12, 20), 8);
        assert_eq!(image.offset(11, 21), 16);

        let image = Rgba16Image::new(Rect::new((-1, -1), (1, 1)));
        assert_eq!(image.offset(0, 0), 16 + 8);
    }

    #[test]
    fn from_raw_validates_storage(){
        let bounds = Rect::from_size((2, 2));
        assert!(Rgba8Image::from_raw(bounds, 8, vec![0; 16]).is_ok());
        assert!(Rgba8Image::from_raw(bounds, 10, vec![0; 18]).is_ok());
        assert!(Rgba8Image::from_raw(bounds, 10, vec![0; 17]).is_err());
        assert!(Rgba8Image::from_raw(bounds, 6, vec![0; 100]).is_err());
    }

    #[test]
    fn padded_rows_are_addressed_by_stride(){
        let mut image = Rgba8Image::from_raw(Rect::from_size((1, 2)), 6, vec![0; 10]).unwrap();
        image.set_pixel(0, 1, Color::Rgba8([1, 2, 3, 4]));
        assert_eq!(image.pixels, vec![0, 0, 0, 0, 0, 0, 1, 2, 3, 4]);
        assert_eq!(image.pixel(0, 1), Color::Rgba8([1, 2, 3, 4]));
    }

    #[test]
    fn rgba16_is_big_endian(){
        let mut image = Rgba16Image::new(Rect::from_size((1, 1)));
        image.set_pixel(0, 0, Color::Rgba16(Rgba16::new(0x0102, 0x0304, 0x0506, 0x0708)));
        assert_eq!(image.pixels, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn straight_keeps_native_colors(){
        let mut image = StraightRgba8Image::new(Rect::from_size((1, 1)));
        image.set_pixel(0, 0, Color::StraightRgba8([0xff, 0x80, 0, 0]));
        assert_eq!(image.pixel(0, 0), Color::StraightRgba8([0xff, 0x80, 0, 0]));

        image.set_pixel(0, 0, Color::Rgba16(Rgba16::new(0x4000, 0, 0, 0x8000)));
        assert_eq!(image.pixels, vec![0x80, 0, 0, 0x80]);
    }

    #[test]
    fn cmyk_stores_ink(){
        let mut image = CmykImage::new(Rect::from_size((2, 1)));
        image.set_pixel(1, 0, Color::Rgba16(Rgba16::BLACK));
        assert_eq!(image.pixels, vec![0, 0, 0, 0, 0, 0, 0, 0xff]);
        assert_eq!(image.pixel(1, 0).to_rgba16(), Rgba16::BLACK);
    }
}
