
//! Process images concurrently, combining the dispatchers with the pixel readers.

extern crate rasterkit;

use rasterkit::prelude::*;
use std::num::NonZeroUsize;
use std::sync::Mutex;


fn gradient(bounds: Rect) -> StraightRgba8Image {
    let mut image = StraightRgba8Image::new(bounds);

    for Vec2(x, y) in bounds.points() {
        let color = [(x * 3) as u8, (y * 5) as u8, (x ^ y) as u8, (x + y) as u8];
        image.set_pixel(x, y, Color::StraightRgba8(color));
    }

    image
}

/// Read every pixel of the region into a gray image, one sub-rectangle per operation.
fn gray_copy(
    source: &StraightRgba8Image,
    dispatch: impl FnOnce(&(dyn Fn(Rect) + Sync))
) -> Gray16Image
{
    let reader = PixelReader::new(source);
    let results = Mutex::new(Vec::new());

    dispatch(&|part: Rect| {
        let colors: Vec<(Vec2<i32>, Rgba16)> = part.points()
            .map(|position| (position, reader.read(position.x(), position.y())))
            .collect();

        results.lock().unwrap().extend(colors);
    });

    let mut target = Gray16Image::new(source.bounds);

    {
        let mut writer = PixelWriter::new(&mut target);
        for (position, color) in results.into_inner().unwrap() {
            writer.write(position.x(), position.y(), color);
        }
    }

    target
}

fn sequential_gray_copy(source: &StraightRgba8Image) -> Gray16Image {
    let mut target = Gray16Image::new(source.bounds);

    for Vec2(x, y) in source.bounds.points() {
        target.set_pixel(x, y, source.pixel(x, y));
    }

    target
}


#[test]
fn strips_process_every_pixel(){
    let source = gradient(Rect::new((-20, 7), (61, 40)));
    let expected = sequential_gray_copy(&source);

    let result = gray_copy(&source, |operation| parallel::strips(source.bounds, None, operation));
    assert_eq!(result, expected);

    let options = DispatchOptions::with_thread_count(NonZeroUsize::new(5).unwrap());
    let result = gray_copy(&source, |operation| options.strips(source.bounds, None, operation));
    assert_eq!(result, expected);
}

#[test]
fn grid_processes_every_pixel(){
    let source = gradient(Rect::new((3, -3), (50, 77)));
    let expected = sequential_gray_copy(&source);

    let result = gray_copy(&source, |operation| parallel::grid(source.bounds, None, operation));
    assert_eq!(result, expected);

    let options = DispatchOptions::with_thread_count(NonZeroUsize::new(3).unwrap());
    let result = gray_copy(&source, |operation| options.grid(source.bounds, Some(&Cancellation::new()), operation));
    assert_eq!(result, expected);
}

#[test]
fn single_thread_processes_whole_rectangle_at_once(){
    let bounds = Rect::new((-5, -5), (5, 5));
    let options = DispatchOptions::with_thread_count(NonZeroUsize::new(1).unwrap());
    let parts = Mutex::new(Vec::new());

    options.strips(bounds, None, |part| parts.lock().unwrap().push(part));
    options.grid(bounds, None, |part| parts.lock().unwrap().push(part));

    assert_eq!(parts.into_inner().unwrap(), vec![bounds, bounds]);
}

#[test]
fn cancellation_from_another_clone(){
    let cancellation = Cancellation::new();
    let observer = cancellation.clone();
    let processed = Mutex::new(0_usize);

    let options = DispatchOptions::with_thread_count(NonZeroUsize::new(2).unwrap());
    options.grid(Rect::from_size((256, 256)), Some(&observer), |_| {
        *processed.lock().unwrap() += 1;
        cancellation.cancel();
    });

    assert!(observer.is_cancelled());
    assert!(processed.into_inner().unwrap() < 4);
}
