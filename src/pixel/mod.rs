
//! Fast pixel access for hot loops.
//!
//! Going through `Image::pixel` and `ImageMut::set_pixel` converts every pixel
//! to and from the `Color` enum and dispatches dynamically for each pixel.
//! A `PixelReader` or `PixelWriter` resolves the layout of the image once instead,
//! and then exchanges premultiplied `Rgba16` colors directly with the storage.
//!
//! ```
//! use rasterkit::prelude::*;
//!
//! let bounds = Rect::from_size((4, 4));
//! let source = Gray8Image::new(bounds);
//! let mut target = StraightRgba8Image::new(bounds);
//!
//! let reader = PixelReader::new(&source);
//! let mut writer = PixelWriter::new(&mut target);
//!
//! for position in bounds.points() {
//!     let color = reader.read(position.x(), position.y());
//!     writer.write(position.x(), position.y(), color);
//! }
//! ```

pub mod read;
pub mod write;

pub use self::read::PixelReader;
pub use self::write::PixelWriter;
