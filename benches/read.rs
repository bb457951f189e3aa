#[macro_use]
extern crate bencher;

extern crate rasterkit;
use rasterkit::prelude::*;

use bencher::Bencher;


/// An opaque wrapper that only supports the generic pixel access
struct Hidden<I>(I);

impl<I: Image> Image for Hidden<I> {
    fn bounds(&self) -> Rect { self.0.bounds() }
    fn pixel(&self, x: i32, y: i32) -> Color { self.0.pixel(x, y) }
    fn view(&self) -> ImageView<'_> { ImageView::Generic(self) }
}

fn bounds() -> Rect { Rect::from_size((512, 512)) }

fn read_all(image: &impl Image) -> u64 {
    let reader = PixelReader::new(image);
    image.bounds().points()
        .map(|position| u64::from(reader.read(position.x(), position.y()).g))
        .sum()
}

/// Straight 8-bit samples, premultiplied while reading
fn read_straight_rgba8_directly(bench: &mut Bencher) {
    let image = StraightRgba8Image::from_raw(bounds(), 512 * 4, (0 .. 512 * 512 * 4).map(|i| i as u8).collect()).unwrap();
    bench.iter(|| bencher::black_box(read_all(&image)))
}

/// Same samples, but converted through `Color` for every pixel
fn read_straight_rgba8_generically(bench: &mut Bencher) {
    let image = StraightRgba8Image::from_raw(bounds(), 512 * 4, (0 .. 512 * 512 * 4).map(|i| i as u8).collect()).unwrap();
    let image = Hidden(image);
    bench.iter(|| bencher::black_box(read_all(&image)))
}

/// Subsampled planar storage
fn read_ycbcr_420_directly(bench: &mut Bencher) {
    let image = YCbCrImage::new(bounds(), SubsampleRatio::Ratio420);
    bench.iter(|| bencher::black_box(read_all(&image)))
}

fn read_ycbcr_420_generically(bench: &mut Bencher) {
    let image = Hidden(YCbCrImage::new(bounds(), SubsampleRatio::Ratio420));
    bench.iter(|| bencher::black_box(read_all(&image)))
}

/// Sum all pixels on every core
fn read_rgba16_in_grid(bench: &mut Bencher) {
    let image = Rgba16Image::new(Rect::from_size((2048, 2048)));
    let reader = PixelReader::new(&image);

    bench.iter(|| {
        parallel::grid(image.bounds, None, |cell| {
            let sum: u64 = cell.points().map(|position| u64::from(reader.read(position.x(), position.y()).a)).sum();
            bencher::black_box(sum);
        })
    })
}


benchmark_group!(read,
    read_straight_rgba8_directly,
    read_straight_rgba8_generically,
    read_ycbcr_420_directly,
    read_ycbcr_420_generically,
    read_rgba16_in_grid
);

benchmark_main!(read);
