
//! Run an operation on many parts of a rectangle concurrently.
//!
//! The rectangle is split into disjoint sub-rectangles, and the operation is called
//! once per sub-rectangle on a pool of worker threads. The dispatching call returns
//! only after every started operation has finished.
//!
//! Use `strips` when every pixel costs about the same to process,
//! and `grid` when the cost varies across the image.

use std::num::NonZeroUsize;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::math::Rect;


/// A flag that tells running dispatches to stop handing out rectangles.
/// Operations that already started are not interrupted.
/// Clones share the same flag.
#[derive(Clone, Debug, Default)]
pub struct Cancellation {
    cancelled: Arc<AtomicBool>,
}

impl Cancellation {

    /// A flag that is not cancelled yet.
    pub fn new() -> Self { Self::default() }

    /// Stop all dispatches observing this flag or any of its clones.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    /// Whether `cancel` has been called on this flag or any of its clones.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}


/// Configures how rectangles are dispatched to worker threads.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct DispatchOptions {

    /// How many worker threads to use, and into how many parts to split each dimension.
    /// If `None`, the available hardware parallelism is queried for each dispatch.
    pub thread_count: Option<NonZeroUsize>,
}

impl DispatchOptions {

    /// Use a fixed number of threads instead of querying the hardware.
    pub fn with_thread_count(thread_count: NonZeroUsize) -> Self {
        DispatchOptions { thread_count: Some(thread_count) }
    }

    fn resolve_thread_count(self) -> usize {
        self.thread_count
            .or_else(|| std::thread::available_parallelism().ok())
            .map_or(1, NonZeroUsize::get)
    }

    /// Split the rectangle into one horizontal strip per thread and process each strip on its own thread.
    /// Strip heights differ by at most one row. Empty strips are skipped.
    /// Strips are not started after the cancellation flag has been set.
    pub fn strips(self, bounds: Rect, cancellation: Option<&Cancellation>, operation: impl Fn(Rect) + Sync) {
        if bounds.is_empty() { return; }

        let thread_count = self.resolve_thread_count();
        let strips = split_into_strips(bounds, thread_count).filter(|strip| !strip.is_empty());

        let pool = match create_pool(thread_count) {
            Some(pool) => pool,
            None => return run_sequentially(strips, cancellation, &operation),
        };

        log::trace!("dispatching {} in {} strips", bounds, thread_count);

        let operation = &operation;
        pool.in_place_scope(|scope| {
            for strip in strips {
                if is_cancelled(cancellation) { break; }
                scope.spawn(move |_| operation(strip));
            }
        });
    }

    /// Split the rectangle into a grid of `threads × threads` cells, and let each thread
    /// repeatedly take the next unprocessed cell until no cells are left.
    /// Empty cells are skipped.
    /// After the cancellation flag has been set, no further cells are handed out,
    /// but cells that already started are completed.
    pub fn grid(self, bounds: Rect, cancellation: Option<&Cancellation>, operation: impl Fn(Rect) + Sync) {
        if bounds.is_empty() { return; }

        let thread_count = self.resolve_thread_count();
        let cells = split_into_grid(bounds, thread_count).filter(|cell| !cell.is_empty());

        let pool = match create_pool(thread_count) {
            Some(pool) => pool,
            None => return run_sequentially(cells, cancellation, &operation),
        };

        log::trace!("dispatching {} in {}x{} cells", bounds, thread_count, thread_count);

        // capacity zero: a cell is only handed out when a worker is ready to take it,
        // so that cancellation stops the remaining cells
        let (sender, receiver) = flume::bounded::<Rect>(0);
        let operation = &operation;

        pool.in_place_scope(|scope| {
            for _ in 0 .. thread_count {
                let receiver = receiver.clone();
                scope.spawn(move |_| {
                    for cell in receiver.iter() {
                        operation(cell);
                    }
                });
            }

            // sending fails instead of blocking forever if all workers are gone
            drop(receiver);

            for cell in cells {
                if is_cancelled(cancellation) { break; }
                if sender.send(cell).is_err() { break; }
            }

            // closing the queue lets the workers exit
            drop(sender);
        });
    }
}


/// Split into horizontal strips with default options. See `DispatchOptions::strips`.
pub fn strips(bounds: Rect, cancellation: Option<&Cancellation>, operation: impl Fn(Rect) + Sync) {
    DispatchOptions::default().strips(bounds, cancellation, operation)
}

/// Split into a grid with default options. See `DispatchOptions::grid`.
pub fn grid(bounds: Rect, cancellation: Option<&Cancellation>, operation: impl Fn(Rect) + Sync) {
    DispatchOptions::default().grid(bounds, cancellation, operation)
}


/// The rectangle split into `count` full-width strips, top to bottom. Some may be empty.
fn split_into_strips(bounds: Rect, count: usize) -> impl Iterator<Item = Rect> {
    (0 .. count).map(move |index| Rect::new(
        (bounds.min.x(), Rect::split_boundary(bounds.min.y(), bounds.height(), index, count)),
        (bounds.max.x(), Rect::split_boundary(bounds.min.y(), bounds.height(), index + 1, count)),
    ))
}

/// The rectangle split into `count × count` cells, row by row. Some may be empty.
fn split_into_grid(bounds: Rect, count: usize) -> impl Iterator<Item = Rect> {
    let column = move |index| Rect::split_boundary(bounds.min.x(), bounds.width(), index, count);

    split_into_strips(bounds, count).flat_map(move |strip| {
        (0 .. count).map(move |index| Rect::new(
            (column(index), strip.min.y()),
            (column(index + 1), strip.max.y()),
        ))
    })
}

fn is_cancelled(cancellation: Option<&Cancellation>) -> bool {
    cancellation.map_or(false, Cancellation::is_cancelled)
}

/// Process the parts in order on the calling thread, used when no worker threads are available.
fn run_sequentially(parts: impl Iterator<Item = Rect>, cancellation: Option<&Cancellation>, operation: &impl Fn(Rect)) {
    for part in parts {
        if is_cancelled(cancellation) { break; }
        operation(part);
    }
}

/// Returns `None` if no threads can be spawned on this platform.
fn create_pool(thread_count: usize) -> Option<rayon_core::ThreadPool> {
    let pool = rayon_core::ThreadPoolBuilder::new()
        .num_threads(thread_count)
        .thread_name(|index| format!("Raster Dispatch Thread #{}", index))
        .build();

    match pool {
        Ok(pool) => Some(pool),
        Err(error) => {
            log::warn!("cannot create worker threads, dispatching on the calling thread: {}", error);
            None
        }
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use std::sync::Mutex;
    use std::sync::atomic::AtomicUsize;
    use crate::math::Vec2;

    fn threads(count: usize) -> DispatchOptions {
        DispatchOptions::with_thread_count(NonZeroUsize::new(count).unwrap())
    }

    fn assert_partition(bounds: Rect, parts: &[Rect]) {
        let area: usize = parts.iter().map(|part| part.size().area()).sum();
        assert_eq!(area, bounds.size().area(), "parts do not add up to the whole");

        for (index, part) in parts.iter().enumerate() {
            assert!(!part.is_empty());
            assert!(bounds.contains(*part), "{} is not in {}", part, bounds);

            for other in &parts[index + 1 ..] {
                assert_eq!(part.intersection(*other), Rect::ZERO, "{} overlaps {}", part, other);
            }
        }
    }

    #[test]
    fn strips_partition_the_rectangle(){
        for thread_count in [1, 2, 3, 7, 16] {
            let bounds = Rect::new((100, 100), (200, 200));
            let parts = Mutex::new(Vec::new());
            threads(thread_count).strips(bounds, None, |strip| parts.lock().unwrap().push(strip));

            let parts = parts.into_inner().unwrap();
            assert_eq!(parts.len(), thread_count);
            assert!(parts.iter().all(|strip| strip.min.x() == 100 && strip.max.x() == 200));
            assert_partition(bounds, &parts);
        }
    }

    #[test]
    fn strips_skip_empty_rows(){
        let bounds = Rect::new((0, 0), (50, 3));
        let parts = Mutex::new(Vec::new());
        threads(8).strips(bounds, None, |strip| parts.lock().unwrap().push(strip));

        let parts = parts.into_inner().unwrap();
        assert_eq!(parts.len(), 3);
        assert_partition(bounds, &parts);
    }

    #[test]
    fn grid_partitions_the_rectangle(){
        for thread_count in [1, 2, 3, 5] {
            let bounds = Rect::new((100, 100), (200, 200));
            let parts = Mutex::new(Vec::new());
            threads(thread_count).grid(bounds, None, |cell| parts.lock().unwrap().push(cell));

            let parts = parts.into_inner().unwrap();
            assert_eq!(parts.len(), thread_count * thread_count);
            assert_partition(bounds, &parts);
        }
    }

    #[test]
    fn grid_skips_empty_cells(){
        let bounds = Rect::new((-2, -1), (0, 2));
        let parts = Mutex::new(Vec::new());
        threads(4).grid(bounds, None, |cell| parts.lock().unwrap().push(cell));

        let parts = parts.into_inner().unwrap();
        assert_eq!(parts.len(), 6);
        assert_partition(bounds, &parts);
    }

    #[test]
    fn empty_rectangles_are_not_dispatched(){
        let calls = AtomicUsize::new(0);
        let count = |_| { calls.fetch_add(1, Ordering::SeqCst); };

        strips(Rect::ZERO, None, count);
        grid(Rect::ZERO, None, count);
        grid(Rect::new((10, 10), (20, 10)), None, count);
        strips(Rect::new((10, 10), (5, 20)), None, count);

        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn cancelled_before_start(){
        let cancellation = Cancellation::new();
        cancellation.cancel();

        let calls = AtomicUsize::new(0);
        let bounds = Rect::new((100, 100), (200, 200));

        grid(bounds, Some(&cancellation), |_| { calls.fetch_add(1, Ordering::SeqCst); });
        strips(bounds, Some(&cancellation), |_| { calls.fetch_add(1, Ordering::SeqCst); });

        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn cancelled_while_running(){
        let cancellation = Cancellation::new();
        let calls = AtomicUsize::new(0);

        threads(4).grid(Rect::from_size((64, 64)), Some(&cancellation), |_| {
            calls.fetch_add(1, Ordering::SeqCst);
            cancellation.cancel();
        });

        let calls = calls.into_inner();
        assert!(calls >= 1);
        assert!(calls < 16, "{} cells were processed after cancellation", calls);
    }

    #[test]
    fn sequential_fallback_keeps_order(){
        let bounds = Rect::new((0, 0), (10, 4));
        let parts = std::cell::RefCell::new(Vec::new());
        run_sequentially(split_into_strips(bounds, 4), None, &|strip: Rect| parts.borrow_mut().push(strip));

        let expected: Vec<Rect> = (0 .. 4).map(|y| Rect::new((0, y), (10, y + 1))).collect();
        assert_eq!(parts.into_inner(), expected);
    }

    #[test]
    fn sequential_fallback_stops_when_cancelled(){
        let cancellation = Cancellation::new();
        let parts = std::cell::RefCell::new(Vec::new());

        run_sequentially(split_into_grid(Rect::from_size((8, 8)), 2), Some(&cancellation), &|cell: Rect| {
            parts.borrow_mut().push(cell);
            if parts.borrow().len() == 2 { cancellation.cancel(); }
        });

        assert_eq!(parts.into_inner(), vec![ Rect::new((0, 0), (4, 4)), Rect::new((4, 0), (8, 4)) ]);

        let calls = std::cell::Cell::new(0);
        run_sequentially(split_into_strips(Rect::from_size((8, 8)), 3), Some(&cancellation), &|_: Rect| calls.set(calls.get() + 1));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn clones_share_the_flag(){
        let cancellation = Cancellation::new();
        let clone = cancellation.clone();
        assert!(!cancellation.is_cancelled());

        clone.cancel();
        assert!(cancellation.is_cancelled());
    }

    #[test]
    fn every_pixel_is_visited_once(){
        let bounds = Rect::new((-7, 3), (33, 29));
        let visits: Vec<AtomicUsize> = (0 .. bounds.size().area()).map(|_| AtomicUsize::new(0)).collect();

        let visit = |part: Rect| {
            for Vec2(x, y) in part.points() {
                let index = (y - bounds.min.y()) as usize * bounds.size().width() + (x - bounds.min.x()) as usize;
                visits[index].fetch_add(1, Ordering::SeqCst);
            }
        };

        threads(3).strips(bounds, None, visit);
        threads(3).grid(bounds, None, visit);
        grid(bounds, None, visit);

        assert!(visits.iter().all(|count| count.load(Ordering::SeqCst) == 3));
    }
}
