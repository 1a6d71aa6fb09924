//! Yes/no queries over a whole segment set, riding on the sweep.

use crate::data::{Relation, Segment};
use crate::sweep::sweep;
use crate::{Error, SweepScalar};

/// Checks if any two segments share at least one point.
pub fn segments_intersect<T: SweepScalar>(segments: &[Segment<T>]) -> Result<bool, Error<T>> {
  Ok(sweep(segments)?.next().is_some())
}

/// Checks if any two segments properly cross or overlap collinearly;
/// touches (shared endpoints, endpoints on interiors) do not count.
pub fn segments_cross_or_overlap<T: SweepScalar>(
  segments: &[Segment<T>],
) -> Result<bool, Error<T>> {
  let mut intersections = sweep(segments)?;
  Ok(
    intersections.any(|intersection| {
      matches!(
        intersection.relation,
        Relation::Cross | Relation::Overlap | Relation::Equal | Relation::Component | Relation::Composite
      )
    }),
  )
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::data::Point;
  use claims::assert_ok;
  use num::BigRational;

  fn segment(start: (i64, i64), end: (i64, i64)) -> Segment<BigRational> {
    let scalar = |n: i64| BigRational::from_integer(n.into());
    Segment::new(
      Point::new(scalar(start.0), scalar(start.1)),
      Point::new(scalar(end.0), scalar(end.1)),
    )
  }

  #[test]
  fn disjoint_sets_do_not_intersect() {
    let segments = vec![segment((0, 0), (1, 1)), segment((2, 0), (3, 1))];
    assert!(!assert_ok!(segments_intersect(&segments)));
    assert!(!assert_ok!(segments_cross_or_overlap(&segments)));
  }

  #[test]
  fn touching_sets_intersect_without_crossing() {
    let segments = vec![segment((0, 0), (2, 0)), segment((2, 0), (4, 4))];
    assert!(assert_ok!(segments_intersect(&segments)));
    assert!(!assert_ok!(segments_cross_or_overlap(&segments)));
  }

  #[test]
  fn crossing_sets_cross() {
    let segments = vec![segment((0, 0), (2, 2)), segment((2, 0), (0, 2))];
    assert!(assert_ok!(segments_cross_or_overlap(&segments)));
  }

  #[test]
  fn overlapping_sets_overlap() {
    let segments = vec![segment((0, 0), (3, 0)), segment((1, 0), (4, 0))];
    assert!(assert_ok!(segments_cross_or_overlap(&segments)));
  }

  #[test]
  fn degenerate_input_is_an_error() {
    let segments = vec![segment((1, 1), (1, 1))];
    assert!(segments_intersect(&segments).is_err());
  }
}
