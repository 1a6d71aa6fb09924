//! Pairwise segment relations via a Bentley–Ottmann sweep.
//!
//! Given a finite sequence of planar line segments, [`sweep`] lazily reports
//! every intersecting pair as an [`Intersection`]: the two input segment
//! ids, one of six [`Relation`]s (touch, cross, overlap, equal, component,
//! composite), and the one- or two-point locus where they meet.
//!
//! ```rust
//! use num::BigRational;
//! use sweepline::{sweep, Point, Relation, Segment};
//!
//! let scalar = |n: i64| BigRational::from_integer(n.into());
//! let point = |x, y| Point::new(scalar(x), scalar(y));
//! let segments = vec![
//!   Segment::new(point(0, 0), point(2, 2)),
//!   Segment::new(point(2, 0), point(0, 2)),
//! ];
//! let reported: Vec<_> = sweep(&segments).unwrap().collect();
//! assert_eq!(reported.len(), 1);
//! assert_eq!(reported[0].relation, Relation::Cross);
//! assert_eq!(reported[0].start, point(1, 1));
//! ```
//!
//! Arithmetic is injected: the engine reads geometry exclusively through an
//! orientation predicate and a crossing-point predicate (see
//! [`predicates`]), so exactness is the caller's choice of scalar and
//! predicates. `BigRational` with the defaults is exact; `OrderedFloat<f64>`
//! with [`predicates::robust`] trades exact crossings for adaptive-precision
//! orientations.

use std::fmt;

use num_traits::{NumOps, Zero};

mod collections;
pub mod data;
pub mod naive;
pub mod planar;
pub mod predicates;
pub mod sweep;
pub mod testing;

pub use data::{Intersection, Point, Relation, Segment};
pub use predicates::Orientation;
pub use sweep::{sweep, sweep_with, Intersections};

/// Coordinate scalar: cloneable, totally ordered, with ring arithmetic and
/// division. Division only matters for the default crossing-point
/// predicate; the engine itself never computes.
pub trait SweepScalar: Clone + Ord + NumOps + Zero {}
impl<T> SweepScalar for T where T: Clone + Ord + NumOps + Zero {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error<T> {
  /// An input segment's endpoints coincide. Raised at build time; the
  /// sweep never starts.
  DegenerateSegment { index: usize, point: Point<T> },
}

impl<T: fmt::Debug> fmt::Display for Error<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Error::DegenerateSegment { index, point } => write!(
        f,
        "segment {} is degenerate: both endpoints are {:?}",
        index, point
      ),
    }
  }
}

impl<T: fmt::Debug> std::error::Error for Error<T> {}

#[cfg(test)]
mod tests;
