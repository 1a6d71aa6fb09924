//! Quadratic baseline: every pair of segments related directly from the
//! predicates, with no sweep machinery. `O(n^2)` and therefore only fit for
//! small inputs, but simple enough to trust — the property tests compare
//! the sweep against it.

use std::cmp;

use crate::data::{Intersection, Point, Relation, Segment};
use crate::predicates::{intersection_point, orientation, Orientation};
use crate::sweep::collinear_relation;
use crate::SweepScalar;

/// Relation and locus of a single pair, or `None` when the segments share
/// no point.
pub fn relate<T: SweepScalar>(
  first: &Segment<T>,
  second: &Segment<T>,
) -> Option<(Relation, Point<T>, Point<T>)> {
  let (a1, a2) = sorted_endpoints(first);
  let (b1, b2) = sorted_endpoints(second);
  let b1_orientation = orientation(a1, a2, b1);
  let b2_orientation = orientation(a1, a2, b2);
  if b1_orientation == Orientation::CoLinear && b2_orientation == Orientation::CoLinear {
    let touch_point = cmp::max(a1, b1);
    if touch_point > cmp::min(a2, b2) {
      return None;
    }
    return Some(collinear_relation(a1, a2, b1, b2, touch_point));
  }
  if b1_orientation == b2_orientation {
    return None;
  }
  let a1_orientation = orientation(b1, b2, a1);
  let a2_orientation = orientation(b1, b2, a2);
  if a1_orientation == a2_orientation && a1_orientation != Orientation::CoLinear {
    return None;
  }
  let crossing = if b1_orientation == Orientation::CoLinear {
    if b1 < a1 || a2 < b1 {
      return None;
    }
    b1.clone()
  } else if b2_orientation == Orientation::CoLinear {
    if b2 < a1 || a2 < b2 {
      return None;
    }
    b2.clone()
  } else if a1_orientation == Orientation::CoLinear {
    if a1 < b1 || b2 < a1 {
      return None;
    }
    a1.clone()
  } else if a2_orientation == Orientation::CoLinear {
    if a2 < b1 || b2 < a2 {
      return None;
    }
    a2.clone()
  } else {
    intersection_point(a1, a2, b1, b2)
  };
  let relation = if crossing == *a1 || crossing == *a2 || crossing == *b1 || crossing == *b2 {
    Relation::Touch
  } else {
    Relation::Cross
  };
  Some((relation, crossing.clone(), crossing))
}

/// All pairwise intersections, by brute force. Pairs come out with
/// `first_segment_id < second_segment_id`, ordered by the second id.
pub fn segment_intersections<'a, T: SweepScalar>(
  segments: &'a [Segment<T>],
) -> impl Iterator<Item = Intersection<T>> + 'a {
  let count = segments.len();
  (0..count)
    .flat_map(move |second| (0..second).map(move |first| (first, second)))
    .filter_map(move |(first, second)| {
      let (relation, start, end) = relate(&segments[first], &segments[second])?;
      Some(Intersection {
        first_segment_id: first,
        second_segment_id: second,
        relation,
        start,
        end,
      })
    })
}

fn sorted_endpoints<T: Ord>(segment: &Segment<T>) -> (&Point<T>, &Point<T>) {
  if segment.start < segment.end {
    (&segment.start, &segment.end)
  } else {
    (&segment.end, &segment.start)
  }
}
