
//! Write premultiplied colors into any image,
//! converting to the native storage of known layouts directly.

use crate::color::{narrow, Color, Rgba16};
use crate::image::{ImageMut, ImageViewMut, PlaneMut};
use crate::image::paletted::stored_index;
use crate::palette::PaletteMatcher;


/// Writes premultiplied colors into an image.
/// The layout of the image is resolved once when creating the writer,
/// so that writing a pixel only computes an offset and converts the color.
///
/// The position passed to `write` must lie within the bounds of the image.
/// Positions outside of the bounds panic or modify unspecified pixels.
pub struct PixelWriter<'a> {
    target: Target<'a>,
}

enum Target<'a> {
    Rgba8(PlaneMut<'a>),
    Rgba16(PlaneMut<'a>),
    StraightRgba8(PlaneMut<'a>),
    StraightRgba16(PlaneMut<'a>),
    Alpha8(PlaneMut<'a>),
    Alpha16(PlaneMut<'a>),
    Gray8(PlaneMut<'a>),
    Gray16(PlaneMut<'a>),
    Cmyk(PlaneMut<'a>),
    Paletted(PlaneMut<'a>, PaletteMatcher),
    Generic(&'a mut dyn ImageMut),
}

impl<'a> PixelWriter<'a> {

    /// Inspect the layout of the image and prepare direct access to its storage.
    /// Planar and other images without direct write access are written through `ImageMut::set_pixel`.
    pub fn new<I: ImageMut + ?Sized>(image: &'a mut I) -> Self {
        let target = match image.view_mut() {
            ImageViewMut::Rgba8(image) => Target::Rgba8(image.plane_mut()),
            ImageViewMut::Rgba16(image) => Target::Rgba16(image.plane_mut()),
            ImageViewMut::StraightRgba8(image) => Target::StraightRgba8(image.plane_mut()),
            ImageViewMut::StraightRgba16(image) => Target::StraightRgba16(image.plane_mut()),
            ImageViewMut::Alpha8(image) => Target::Alpha8(image.plane_mut()),
            ImageViewMut::Alpha16(image) => Target::Alpha16(image.plane_mut()),
            ImageViewMut::Gray8(image) => Target::Gray8(image.plane_mut()),
            ImageViewMut::Gray16(image) => Target::Gray16(image.plane_mut()),
            ImageViewMut::Cmyk(image) => Target::Cmyk(image.plane_mut()),

            ImageViewMut::Paletted(image) => {
                let palette = PaletteMatcher::new(image.palette());
                Target::Paletted(image.plane_mut(), palette)
            },

            ImageViewMut::Generic(image) => {
                log::debug!("no direct access to image at {}, writing pixels generically", image.bounds());
                Target::Generic(image)
            },
        };

        PixelWriter { target }
    }

    /// Whether this writer falls back to `ImageMut::set_pixel` for every pixel.
    pub fn is_generic(&self) -> bool {
        matches!(self.target, Target::Generic(_))
    }

    /// Store the premultiplied color at the position.
    #[inline]
    pub fn write(&mut self, x: i32, y: i32, color: Rgba16) {
        match &mut self.target {
            Target::Rgba8(plane) => plane.set(x, y, color.to_bytes()),
            Target::Rgba16(plane) => plane.set(x, y, color.to_be_bytes()),
            Target::StraightRgba8(plane) => plane.set(x, y, color.to_straight().to_bytes()),
            Target::StraightRgba16(plane) => plane.set(x, y, color.to_straight().to_be_bytes()),
            Target::Alpha8(plane) => plane.set(x, y, [narrow(color.a)]),
            Target::Alpha16(plane) => plane.set(x, y, color.a.to_be_bytes()),
            Target::Gray8(plane) => plane.set(x, y, [color.to_gray8()]),
            Target::Gray16(plane) => plane.set(x, y, color.to_gray16().to_be_bytes()),
            Target::Cmyk(plane) => plane.set(x, y, color.to_cmyk()),
            Target::Paletted(plane, palette) => plane.set(x, y, [stored_index(palette.nearest(color))]),
            Target::Generic(image) => image.set_pixel(x, y, Color::Rgba16(color)),
        }
    }
}
