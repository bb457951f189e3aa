
//! Planar images with full-resolution luma and possibly subsampled chroma,
//! optionally with a full-resolution alpha plane.

use crate::color::Color;
use crate::error::{validate_plane, Result};
use crate::image::{sample_index, Image, ImageMut, ImageView, ImageViewMut, Plane};
use crate::math::{Rect, Vec2};


/// How many luma samples share one chroma sample.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SubsampleRatio {

    /// One chroma sample per luma sample.
    Ratio444,

    /// One chroma sample per two horizontal luma samples.
    Ratio422,

    /// One chroma sample per two by two luma samples.
    Ratio420,

    /// One chroma sample per two vertical luma samples.
    Ratio440,

    /// One chroma sample per four horizontal luma samples.
    Ratio411,

    /// One chroma sample per four by two luma samples.
    Ratio410,
}

impl SubsampleRatio {

    /// All ratios, from no subsampling to the most subsampling.
    pub const ALL: [SubsampleRatio; 6] = [
        SubsampleRatio::Ratio444, SubsampleRatio::Ratio422, SubsampleRatio::Ratio420,
        SubsampleRatio::Ratio440, SubsampleRatio::Ratio411, SubsampleRatio::Ratio410,
    ];

    /// The base-two logarithm of the number of luma samples per chroma sample, horizontally and vertically.
    pub fn shifts(self) -> Vec2<u32> {
        match self {
            SubsampleRatio::Ratio444 => Vec2(0, 0),
            SubsampleRatio::Ratio422 => Vec2(1, 0),
            SubsampleRatio::Ratio420 => Vec2(1, 1),
            SubsampleRatio::Ratio440 => Vec2(0, 1),
            SubsampleRatio::Ratio411 => Vec2(2, 0),
            SubsampleRatio::Ratio410 => Vec2(2, 1),
        }
    }

    /// The chroma sample coordinate of a luma sample coordinate.
    /// Rounds towards negative infinity, also for negative coordinates.
    #[inline]
    pub fn chroma_position(self, position: Vec2<i32>) -> Vec2<i32> {
        let Vec2(shift_x, shift_y) = self.shifts();
        Vec2(position.x() >> shift_x, position.y() >> shift_y)
    }

    /// The smallest chroma rectangle containing a chroma sample for every luma sample in the bounds.
    /// The minimum corner rounds down and the maximum corner rounds up.
    pub fn chroma_bounds(self, bounds: Rect) -> Rect {
        if bounds.is_empty() { return Rect::new(bounds.min, bounds.min); }

        let Vec2(shift_x, shift_y) = self.shifts();
        let ceil = |value: i32, shift: u32| (value + (1 << shift) - 1) >> shift;

        Rect::new(
            self.chroma_position(bounds.min),
            Vec2(ceil(bounds.max.x(), shift_x), ceil(bounds.max.y(), shift_y)),
        )
    }
}


/// Both chroma planes of a planar image, borrowed for direct addressing.
#[derive(Clone, Copy, Debug)]
pub struct ChromaPlanes<'a> {

    /// Blue-difference samples.
    pub cb: &'a [u8],

    /// Red-difference samples.
    pub cr: &'a [u8],

    /// The number of bytes between vertically adjacent chroma samples.
    pub stride: usize,

    /// The chroma coordinate of the first chroma sample.
    pub origin: Vec2<i32>,

    /// See `SubsampleRatio::shifts`.
    pub shifts: Vec2<u32>,
}

impl<'a> ChromaPlanes<'a> {

    /// The index of the chroma samples shared by the luma sample at the position.
    #[inline]
    pub fn index(&self, x: i32, y: i32) -> usize {
        sample_index(self.origin, self.stride, 1, x >> self.shifts.x(), y >> self.shifts.y())
    }

    /// The blue-difference and red-difference samples shared by the luma sample at the position.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> (u8, u8) {
        let index = self.index(x, y);
        (self.cb[index], self.cr[index])
    }
}


/// Opaque luma and chroma, one byte per sample, in three separate planes.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct YCbCrImage {

    /// The region covered by this image.
    pub bounds: Rect,

    /// How many luma samples share a chroma sample.
    pub ratio: SubsampleRatio,

    /// The number of bytes between vertically adjacent luma samples.
    pub y_stride: usize,

    /// The number of bytes between vertically adjacent chroma samples.
    pub c_stride: usize,

    /// Luma samples, row after row.
    pub y: Vec<u8>,

    /// Blue-difference samples, row after row.
    pub cb: Vec<u8>,

    /// Red-difference samples, row after row.
    pub cr: Vec<u8>,
}

impl YCbCrImage {

    /// Allocate an image with all samples set to zero.
    pub fn new(bounds: Rect, ratio: SubsampleRatio) -> Self {
        let Vec2(width, height) = bounds.size();
        let Vec2(chroma_width, chroma_height) = ratio.chroma_bounds(bounds).size();

        YCbCrImage {
            bounds, ratio,
            y_stride: width,
            c_stride: chroma_width,
            y: vec![0; width * height],
            cb: vec![0; chroma_width * chroma_height],
            cr: vec![0; chroma_width * chroma_height],
        }
    }

    /// Use existing planes. Fails if any of the planes is too small.
    pub fn from_raw(
        bounds: Rect, ratio: SubsampleRatio,
        y_stride: usize, c_stride: usize,
        y: Vec<u8>, cb: Vec<u8>, cr: Vec<u8>
    ) -> Result<Self>
    {
        let Vec2(width, height) = bounds.size();
        let Vec2(chroma_width, chroma_height) = ratio.chroma_bounds(bounds).size();

        validate_plane(y.len(), y_stride, width, height, "luma plane")?;
        validate_plane(cb.len(), c_stride, chroma_width, chroma_height, "blue chroma plane")?;
        validate_plane(cr.len(), c_stride, chroma_width, chroma_height, "red chroma plane")?;

        Ok(YCbCrImage { bounds, ratio, y_stride, c_stride, y, cb, cr })
    }

    /// The index of the luma sample at the position.
    #[inline]
    pub fn luma_offset(&self, x: i32, y: i32) -> usize {
        sample_index(self.bounds.min, self.y_stride, 1, x, y)
    }

    /// The index of the chroma samples shared by the luma sample at the position.
    #[inline]
    pub fn chroma_offset(&self, x: i32, y: i32) -> usize {
        self.chroma_planes().index(x, y)
    }

    /// Borrow the luma plane for direct addressing.
    pub fn luma_plane(&self) -> Plane<'_> {
        Plane { samples: &self.y, stride: self.y_stride, origin: self.bounds.min }
    }

    /// Borrow both chroma planes for direct addressing.
    pub fn chroma_planes(&self) -> ChromaPlanes<'_> {
        ChromaPlanes {
            cb: &self.cb, cr: &self.cr,
            stride: self.c_stride,
            origin: self.ratio.chroma_position(self.bounds.min),
            shifts: self.ratio.shifts(),
        }
    }

    fn samples(&self, x: i32, y: i32) -> [u8; 3] {
        let (cb, cr) = self.chroma_planes().get(x, y);
        [self.y[self.luma_offset(x, y)], cb, cr]
    }

    fn set_samples(&mut self, x: i32, y: i32, [luma, cb, cr]: [u8; 3]) {
        let luma_index = self.luma_offset(x, y);
        let chroma_index = self.chroma_offset(x, y);

        self.y[luma_index] = luma;
        self.cb[chroma_index] = cb;
        self.cr[chroma_index] = cr;
    }
}

impl Image for YCbCrImage {
    fn bounds(&self) -> Rect { self.bounds }
    fn pixel(&self, x: i32, y: i32) -> Color { Color::YCbCr(self.samples(x, y)) }
    fn view(&self) -> ImageView<'_> { ImageView::YCbCr(self) }
}

/// Writing a pixel also changes the chroma of the pixels sharing its chroma samples.
impl ImageMut for YCbCrImage {
    fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        let samples = match color {
            Color::YCbCr(samples) => samples,
            other => other.to_rgba16().to_ycbcr(),
        };

        self.set_samples(x, y, samples);
    }

    fn view_mut(&mut self) -> ImageViewMut<'_> { ImageViewMut::Generic(self) }
}


/// Luma, chroma, and straight alpha, one byte per sample, in four separate planes.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct YCbCrAlphaImage {

    /// The color planes.
    pub ycbcr: YCbCrImage,

    /// The number of bytes between vertically adjacent alpha samples.
    pub a_stride: usize,

    /// Straight alpha samples, row after row, at full resolution.
    pub a: Vec<u8>,
}

impl YCbCrAlphaImage {

    /// Allocate an image with all samples set to zero.
    pub fn new(bounds: Rect, ratio: SubsampleRatio) -> Self {
        let Vec2(width, height) = bounds.size();

        YCbCrAlphaImage {
            ycbcr: YCbCrImage::new(bounds, ratio),
            a_stride: width,
            a: vec![0; width * height],
        }
    }

    /// Use existing color planes and alpha storage. Fails if the alpha plane is too small.
    pub fn from_raw(ycbcr: YCbCrImage, a_stride: usize, a: Vec<u8>) -> Result<Self> {
        let Vec2(width, height) = ycbcr.bounds.size();
        validate_plane(a.len(), a_stride, width, height, "alpha plane")?;
        Ok(YCbCrAlphaImage { ycbcr, a_stride, a })
    }

    /// The index of the alpha sample at the position.
    #[inline]
    pub fn alpha_offset(&self, x: i32, y: i32) -> usize {
        sample_index(self.ycbcr.bounds.min, self.a_stride, 1, x, y)
    }

    /// Borrow the alpha plane for direct addressing.
    pub fn alpha_plane(&self) -> Plane<'_> {
        Plane { samples: &self.a, stride: self.a_stride, origin: self.ycbcr.bounds.min }
    }
}

impl Image for YCbCrAlphaImage {
    fn bounds(&self) -> Rect { self.ycbcr.bounds }

    fn pixel(&self, x: i32, y: i32) -> Color {
        let [luma, cb, cr] = self.ycbcr.samples(x, y);
        Color::YCbCrAlpha([luma, cb, cr, self.a[self.alpha_offset(x, y)]])
    }

    fn view(&self) -> ImageView<'_> { ImageView::YCbCrAlpha(self) }
}

impl ImageMut for YCbCrAlphaImage {
    fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        let [luma, cb, cr, alpha] = match color {
            Color::YCbCrAlpha(samples) => samples,
            other => other.to_rgba16().to_ycbcr_alpha(),
        };

        self.ycbcr.set_samples(x, y, [luma, cb, cr]);

        let index = self.alpha_offset(x, y);
        self.a[index] = alpha;
    }

    fn view_mut(&mut self) -> ImageViewMut<'_> { ImageViewMut::Generic(self) }
}
