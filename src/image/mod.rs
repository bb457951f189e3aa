
//! In-memory raster images.
//!
//! Every image can be inspected and modified pixel by pixel through the generic
//! `Image` and `ImageMut` traits, which convert from and to `Color`.
//! Additionally, each image exposes its concrete layout through `Image::view`,
//! which the fast pixel readers and writers use to address the storage directly.
//!
//! 16-bit samples are stored big-endian.
//! Accessing pixels outside of the image bounds panics or yields unspecified colors.

/// Declares a struct of interleaved pixel rows, with constructors and addressing.
/// The `Image` implementation is written separately for each layout.
macro_rules! interleaved_image {
    ($(#[$meta:meta])* $name: ident, bytes_per_pixel: $bytes_per_pixel: expr) => {

        $(#[$meta])*
        #[derive(Clone, Debug, Eq, PartialEq)]
        pub struct $name {

            /// The region covered by this image.
            pub bounds: $crate::math::Rect,

            /// The number of bytes between vertically adjacent pixels.
            pub stride: usize,

            /// The pixels, row after row, `stride` bytes apart.
            pub pixels: Vec<u8>,
        }

        impl $name {

            /// Number of bytes a single pixel occupies.
            pub const BYTES_PER_PIXEL: usize = $bytes_per_pixel;

            /// Allocate an image with all bytes set to zero.
            pub fn new(bounds: $crate::math::Rect) -> Self {
                let $crate::math::Vec2(width, height) = bounds.size();
                let stride = width * Self::BYTES_PER_PIXEL;
                Self { bounds, stride, pixels: vec![0; stride * height] }
            }

            /// Use existing pixel storage. Fails if the rows do not fit into the storage.
            pub fn from_raw(bounds: $crate::math::Rect, stride: usize, pixels: Vec<u8>) -> $crate::error::Result<Self> {
                let $crate::math::Vec2(width, height) = bounds.size();
                $crate::error::validate_plane(pixels.len(), stride, width * Self::BYTES_PER_PIXEL, height, stringify!($name))?;
                Ok(Self { bounds, stride, pixels })
            }

            /// The index of the first byte of the pixel at the position.
            #[inline]
            pub fn offset(&self, x: i32, y: i32) -> usize {
                $crate::image::sample_index(self.bounds.min, self.stride, Self::BYTES_PER_PIXEL, x, y)
            }

            /// Borrow the pixel rows for direct addressing.
            #[inline]
            pub fn plane(&self) -> $crate::image::Plane<'_> {
                $crate::image::Plane { samples: &self.pixels, stride: self.stride, origin: self.bounds.min }
            }

            /// Borrow the pixel rows mutably for direct addressing.
            #[inline]
            pub fn plane_mut(&mut self) -> $crate::image::PlaneMut<'_> {
                $crate::image::PlaneMut { samples: &mut self.pixels, stride: self.stride, origin: self.bounds.min }
            }
        }
    };
}


pub mod rgba;
pub mod single;
pub mod paletted;
pub mod ycbcr;
pub mod uniform;

pub use self::rgba::{Rgba8Image, Rgba16Image, StraightRgba8Image, StraightRgba16Image, CmykImage};
pub use self::single::{Alpha8Image, Alpha16Image, Gray8Image, Gray16Image};
pub use self::paletted::PalettedImage;
pub use self::ycbcr::{SubsampleRatio, YCbCrImage, YCbCrAlphaImage};
pub use self::uniform::UniformImage;

use crate::color::Color;
use crate::math::{Rect, Vec2};


/// A rectangular grid of pixels that can be inspected.
pub trait Image: Sync {

    /// The region of 2D space covered by this image.
    fn bounds(&self) -> Rect;

    /// The color at the position, in the native model of this image.
    /// The position must lie within the bounds.
    fn pixel(&self, x: i32, y: i32) -> Color;

    /// Expose the concrete storage layout.
    /// Images that cannot be addressed directly return `ImageView::Generic(self)`.
    fn view(&self) -> ImageView<'_>;
}

/// A rectangular grid of pixels that can be modified.
pub trait ImageMut: Image + Send {

    /// Convert the color to the native model of this image and store it at the position.
    /// The position must lie within the bounds.
    fn set_pixel(&mut self, x: i32, y: i32, color: Color);

    /// Expose the concrete storage layout for writing.
    /// Images that cannot be written directly return `ImageViewMut::Generic(self)`.
    fn view_mut(&mut self) -> ImageViewMut<'_>;
}


/// The concrete layout of an image, borrowed for reading.
#[derive(Clone, Copy)]
pub enum ImageView<'a> {

    /// Premultiplied RGBA, 8 bits per channel.
    Rgba8(&'a Rgba8Image),

    /// Premultiplied RGBA, 16 bits per channel.
    Rgba16(&'a Rgba16Image),

    /// Straight RGBA, 8 bits per channel.
    StraightRgba8(&'a StraightRgba8Image),

    /// Straight RGBA, 16 bits per channel.
    StraightRgba16(&'a StraightRgba16Image),

    /// Coverage only, 8 bits.
    Alpha8(&'a Alpha8Image),

    /// Coverage only, 16 bits.
    Alpha16(&'a Alpha16Image),

    /// Opaque luma, 8 bits.
    Gray8(&'a Gray8Image),

    /// Opaque luma, 16 bits.
    Gray16(&'a Gray16Image),

    /// Opaque CMYK, 8 bits per channel.
    Cmyk(&'a CmykImage),

    /// 8-bit indices into a palette.
    Paletted(&'a PalettedImage),

    /// Planar luma and subsampled chroma.
    YCbCr(&'a YCbCrImage),

    /// Planar luma, subsampled chroma, and straight alpha.
    YCbCrAlpha(&'a YCbCrAlphaImage),

    /// A single color everywhere.
    Uniform(&'a UniformImage),

    /// Any other image, only accessible through `Image::pixel`.
    Generic(&'a dyn Image),
}

/// The concrete layout of an image, borrowed for writing.
pub enum ImageViewMut<'a> {

    /// Premultiplied RGBA, 8 bits per channel.
    Rgba8(&'a mut Rgba8Image),

    /// Premultiplied RGBA, 16 bits per channel.
    Rgba16(&'a mut Rgba16Image),

    /// Straight RGBA, 8 bits per channel.
    StraightRgba8(&'a mut StraightRgba8Image),

    /// Straight RGBA, 16 bits per channel.
    StraightRgba16(&'a mut StraightRgba16Image),

    /// Coverage only, 8 bits.
    Alpha8(&'a mut Alpha8Image),

    /// Coverage only, 16 bits.
    Alpha16(&'a mut Alpha16Image),

    /// Opaque luma, 8 bits.
    Gray8(&'a mut Gray8Image),

    /// Opaque luma, 16 bits.
    Gray16(&'a mut Gray16Image),

    /// Opaque CMYK, 8 bits per channel.
    Cmyk(&'a mut CmykImage),

    /// 8-bit indices into a palette.
    Paletted(&'a mut PalettedImage),

    /// Any other image, only writable through `ImageMut::set_pixel`.
    Generic(&'a mut dyn ImageMut),
}


/// Rows of interleaved samples, borrowed from an image.
#[derive(Clone, Copy, Debug)]
pub struct Plane<'a> {

    /// The sample bytes, row after row.
    pub samples: &'a [u8],

    /// The number of bytes between vertically adjacent samples.
    pub stride: usize,

    /// The position of the first sample.
    pub origin: Vec2<i32>,
}

/// Rows of interleaved samples, borrowed mutably from an image.
#[derive(Debug)]
pub struct PlaneMut<'a> {

    /// The sample bytes, row after row.
    pub samples: &'a mut [u8],

    /// The number of bytes between vertically adjacent samples.
    pub stride: usize,

    /// The position of the first sample.
    pub origin: Vec2<i32>,
}

/// The index of the first byte of the pixel at the position.
#[inline]
pub(crate) fn sample_index(origin: Vec2<i32>, stride: usize, bytes_per_pixel: usize, x: i32, y: i32) -> usize {
    (y - origin.y()) as usize * stride + (x - origin.x()) as usize * bytes_per_pixel
}

impl<'a> Plane<'a> {

    /// The index of the first byte of the pixel at the position.
    #[inline]
    pub fn index(&self, x: i32, y: i32, bytes_per_pixel: usize) -> usize {
        sample_index(self.origin, self.stride, bytes_per_pixel, x, y)
    }

    /// Copy `N` bytes of the pixel at the position.
    #[inline]
    pub fn get<const N: usize>(&self, x: i32, y: i32) -> [u8; N] {
        let index = self.index(x, y, N);
        let mut bytes = [0; N];
        bytes.copy_from_slice(&self.samples[index .. index + N]);
        bytes
    }
}

impl<'a> PlaneMut<'a> {

    /// Overwrite `N` bytes of the pixel at the position.
    #[inline]
    pub fn set<const N: usize>(&mut self, x: i32, y: i32, bytes: [u8; N]) {
        let index = sample_index(self.origin, self.stride, N, x, y);
        self.samples[index .. index + N].copy_from_slice(&bytes);
    }
}
