
//! Read premultiplied colors from any image,
//! addressing the storage of known layouts directly.

use crate::color::{widen, Rgba16, StraightRgba16};
use crate::image::{Image, ImageView, Plane};
use crate::image::ycbcr::ChromaPlanes;
use crate::palette::PaletteMatcher;


/// Reads premultiplied colors from an image.
/// The layout of the image is resolved once when creating the reader,
/// so that reading a pixel only computes an offset and converts the samples.
///
/// The position passed to `read` must lie within the bounds of the image.
/// Positions outside of the bounds panic or yield unspecified colors.
#[derive(Clone)]
pub struct PixelReader<'a> {
    source: Source<'a>,
}

#[derive(Clone)]
enum Source<'a> {
    Rgba8(Plane<'a>),
    Rgba16(Plane<'a>),
    StraightRgba8(Plane<'a>),
    StraightRgba16(Plane<'a>),
    Alpha8(Plane<'a>),
    Alpha16(Plane<'a>),
    Gray8(Plane<'a>),
    Gray16(Plane<'a>),
    Cmyk(Plane<'a>),
    Paletted(Plane<'a>, PaletteMatcher),
    YCbCr(Plane<'a>, ChromaPlanes<'a>),
    YCbCrAlpha(Plane<'a>, ChromaPlanes<'a>, Plane<'a>),
    Uniform(Rgba16),
    Generic(&'a dyn Image),
}

impl<'a> PixelReader<'a> {

    /// Inspect the layout of the image and prepare direct access to its storage.
    /// Images without a known layout are read through `Image::pixel`.
    pub fn new<I: Image + ?Sized>(image: &'a I) -> Self {
        let source = match image.view() {
            ImageView::Rgba8(image) => Source::Rgba8(image.plane()),
            ImageView::Rgba16(image) => Source::Rgba16(image.plane()),
            ImageView::StraightRgba8(image) => Source::StraightRgba8(image.plane()),
            ImageView::StraightRgba16(image) => Source::StraightRgba16(image.plane()),
            ImageView::Alpha8(image) => Source::Alpha8(image.plane()),
            ImageView::Alpha16(image) => Source::Alpha16(image.plane()),
            ImageView::Gray8(image) => Source::Gray8(image.plane()),
            ImageView::Gray16(image) => Source::Gray16(image.plane()),
            ImageView::Cmyk(image) => Source::Cmyk(image.plane()),
            ImageView::Paletted(image) => Source::Paletted(image.plane(), PaletteMatcher::new(image.palette())),
            ImageView::YCbCr(image) => Source::YCbCr(image.luma_plane(), image.chroma_planes()),

            ImageView::YCbCrAlpha(image) => Source::YCbCrAlpha(
                image.ycbcr.luma_plane(), image.ycbcr.chroma_planes(), image.alpha_plane()
            ),

            ImageView::Uniform(image) => Source::Uniform(image.color.to_rgba16()),

            ImageView::Generic(image) => {
                log::debug!("no direct access to image at {}, reading pixels generically", image.bounds());
                Source::Generic(image)
            },
        };

        PixelReader { source }
    }

    /// Whether this reader falls back to `Image::pixel` for every pixel.
    pub fn is_generic(&self) -> bool {
        matches!(self.source, Source::Generic(_))
    }

    /// The premultiplied color at the position.
    #[inline]
    pub fn read(&self, x: i32, y: i32) -> Rgba16 {
        match &self.source {
            Source::Rgba8(plane) => Rgba16::from_bytes(plane.get(x, y)),
            Source::Rgba16(plane) => Rgba16::from_be_bytes(plane.get(x, y)),
            Source::StraightRgba8(plane) => StraightRgba16::from_bytes(plane.get(x, y)).to_premultiplied(),
            Source::StraightRgba16(plane) => StraightRgba16::from_be_bytes(plane.get(x, y)).to_premultiplied(),

            Source::Alpha8(plane) => {
                let [alpha] = plane.get(x, y);
                Rgba16::from_alpha(widen(alpha))
            },

            Source::Alpha16(plane) => Rgba16::from_alpha(u16::from_be_bytes(plane.get(x, y))),

            Source::Gray8(plane) => {
                let [luma] = plane.get(x, y);
                Rgba16::from_gray(widen(luma))
            },

            Source::Gray16(plane) => Rgba16::from_gray(u16::from_be_bytes(plane.get(x, y))),
            Source::Cmyk(plane) => Rgba16::from_cmyk(plane.get(x, y)),

            Source::Paletted(plane, palette) => {
                let [index] = plane.get(x, y);
                palette.entry(usize::from(index))
            },

            Source::YCbCr(luma, chroma) => {
                let [luma] = luma.get(x, y);
                let (cb, cr) = chroma.get(x, y);
                Rgba16::from_ycbcr(luma, cb, cr)
            },

            Source::YCbCrAlpha(luma, chroma, alpha) => {
                let [luma] = luma.get(x, y);
                let (cb, cr) = chroma.get(x, y);
                let [alpha] = alpha.get(x, y);

                let Rgba16 { r, g, b, .. } = Rgba16::from_ycbcr(luma, cb, cr);
                StraightRgba16 { r, g, b, a: widen(alpha) }.to_premultiplied()
            },

            Source::Uniform(color) => *color,
            Source::Generic(image) => image.pixel(x, y).to_rgba16(),
        }
    }
}
