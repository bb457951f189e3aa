
//! Fast per-pixel access to in-memory raster images of many layouts,
//! and dispatch of rectangular regions to worker threads.
//!
//! Images of any supported layout can be read and written pixel by pixel
//! as premultiplied 16-bit colors, using a `PixelReader` or `PixelWriter`.
//! These resolve the layout of the image once, and fall back to the generic
//! `Image::pixel` and `ImageMut::set_pixel` only for unknown images.
//! Use `parallel::strips` or `parallel::grid` to process a region on all cores.

#![forbid(unsafe_code)]


pub mod math;
pub mod error;
pub mod color;
pub mod palette;
pub mod image;
pub mod pixel;
pub mod parallel;


/// Everything required to read, write, and dispatch pixels.
pub mod prelude {

    // main exports
    pub use crate::pixel::{PixelReader, PixelWriter};
    pub use crate::parallel::{Cancellation, DispatchOptions};
    pub use crate::parallel;

    // images
    pub use crate::image::{
        Image, ImageMut, ImageView, ImageViewMut,
        Rgba8Image, Rgba16Image, StraightRgba8Image, StraightRgba16Image, CmykImage,
        Alpha8Image, Alpha16Image, Gray8Image, Gray16Image,
        PalettedImage, SubsampleRatio, YCbCrImage, YCbCrAlphaImage, UniformImage,
    };

    // secondary data types
    pub use crate::color::{Color, Rgba16, StraightRgba16};
    pub use crate::palette::{Palette, PaletteMatcher};
    pub use crate::math::{Rect, Vec2};
    pub use crate::error::{self, Error};
}
