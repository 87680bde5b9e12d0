//! The divide-and-conquer per-pixel apply engine.
//!
//! [`apply`] runs an arbitrary per-item action over a
//! [`SplitRange`](raster_core::SplitRange), either sequentially or as a
//! fork/join task tree on the rayon worker pool.
//!
//! # Parallel Algorithm
//!
//! At every node the engine splits the node's range while it still yields
//! non-empty, disjoint, union-complete sub-ranges, spawning each split-off
//! piece as an independent task; it then runs the action sequentially over
//! whatever remains in the node's own range. Spawned tasks recurse with the
//! same algorithm. The surrounding [`rayon::scope`] accounts for every
//! spawned task, so the root call returns only once the entire tree has
//! completed — a join barrier with no result value; only the side effects
//! of the action matter.
//!
//! Because each split yields disjoint coordinate sets and actions mutate
//! only through the item they are handed, concurrent leaves never write the
//! same location and the traversed buffer needs no locking.
//!
//! # Error Policy
//!
//! The first action error encountered on any leaf is captured atomically
//! and returned once the whole tree has joined. Other leaves finish their
//! already-started local runs; mutations already applied are not rolled
//! back. Errors are never silently dropped.
//!
//! # Feature Flags
//!
//! With the default `parallel` feature disabled the engine still exposes
//! the same API and [`apply`] degrades to the sequential path.
//!
//! # Example
//!
//! ```rust
//! use raster_core::{ArgbBuffer, PixelBuffer};
//! use raster_ops::apply;
//!
//! let buf = ArgbBuffer::new(64, 64).unwrap();
//! apply::apply(
//!     buf.pixels(),
//!     &|px| {
//!         px.set_value(0xff000000);
//!         Ok(())
//!     },
//!     true,
//! )
//! .unwrap();
//! assert!(buf.snapshot().iter().all(|&v| v == 0xff000000));
//! ```

use raster_core::{Result, SplitRange};
use tracing::trace;

#[cfg(feature = "parallel")]
use raster_core::Error;
#[cfg(feature = "parallel")]
use std::sync::OnceLock;

/// Applies `action` to every item of `range`.
///
/// Dispatches to [`apply_parallel`] or [`apply_sequential`] according to
/// `parallel`. An empty range completes immediately with zero invocations.
///
/// # Errors
///
/// Propagates the first error returned by `action` (see the module docs
/// for the parallel capture policy).
pub fn apply<R, F>(range: R, action: &F, parallel: bool) -> Result<()>
where
    R: SplitRange + Send,
    F: Fn(&mut R::Item) -> Result<()> + Sync,
{
    trace!(remaining = range.remaining(), parallel, "apply");
    #[cfg(feature = "parallel")]
    if parallel {
        return apply_parallel(range, action);
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;
    apply_sequential(range, &mut |item| action(item))
}

/// Applies `action` to every remaining item of `range`, single-threaded,
/// in the range's own traversal order.
///
/// The order is stable across repeated sequential runs of the same range
/// implementation; no ordering is guaranteed across different
/// implementations.
///
/// # Errors
///
/// Stops at and returns the first error from `action`.
pub fn apply_sequential<R, F>(mut range: R, action: &mut F) -> Result<()>
where
    R: SplitRange,
    F: FnMut(&mut R::Item) -> Result<()>,
{
    range.for_each_remaining(action)
}

/// Applies `action` over `range` as a fork/join task tree on the rayon
/// worker pool, returning once the whole tree has completed.
///
/// # Errors
///
/// Returns the first action error captured on any leaf, after the join.
#[cfg(feature = "parallel")]
pub fn apply_parallel<R, F>(range: R, action: &F) -> Result<()>
where
    R: SplitRange + Send,
    F: Fn(&mut R::Item) -> Result<()> + Sync,
{
    let first_err: OnceLock<Error> = OnceLock::new();
    rayon::scope(|scope| run_node(scope, range, action, &first_err));
    match first_err.into_inner() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// One node of the task tree: splits off children while the range allows,
/// then drains the remainder locally.
#[cfg(feature = "parallel")]
fn run_node<'s, R, F>(
    scope: &rayon::Scope<'s>,
    mut range: R,
    action: &'s F,
    first_err: &'s OnceLock<Error>,
) where
    R: SplitRange + Send + 's,
    F: Fn(&mut R::Item) -> Result<()> + Sync,
{
    while let Some(child) = range.split() {
        scope.spawn(move |scope| run_node(scope, child, action, first_err));
    }
    if let Err(err) = range.for_each_remaining(&mut |item| action(item)) {
        // Keep only the first failure; later ones lose the race.
        let _ = first_err.set(err);
    }
}
