use std::cmp::Ordering;

/// A point in the plane. Points are ordered lexicographically: first by the
/// x-coordinate, then by the y-coordinate. The sweep advances in this order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Point<T> {
  pub x: T,
  pub y: T,
}

impl<T> Point<T> {
  pub fn new(x: T, y: T) -> Point<T> {
    Point { x, y }
  }
}

impl<T: Ord> PartialOrd for Point<T> {
  fn partial_cmp(&self, other: &Point<T>) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl<T: Ord> Ord for Point<T> {
  fn cmp(&self, other: &Point<T>) -> Ordering {
    self.x.cmp(&other.x).then_with(|| self.y.cmp(&other.y))
  }
}

impl<T> From<(T, T)> for Point<T> {
  fn from((x, y): (T, T)) -> Point<T> {
    Point { x, y }
  }
}

/// An input line segment. The endpoints may be given in either order;
/// ingestion sorts them and rejects segments whose endpoints coincide.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Segment<T> {
  pub start: Point<T>,
  pub end: Point<T>,
}

impl<T> Segment<T> {
  pub fn new(start: Point<T>, end: Point<T>) -> Segment<T> {
    Segment { start, end }
  }
}

impl<T> From<((T, T), (T, T))> for Segment<T> {
  fn from((start, end): ((T, T), (T, T))) -> Segment<T> {
    Segment {
      start: start.into(),
      end: end.into(),
    }
  }
}

/// How a pair of segments relate at their intersection locus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Relation {
  /// The segments share exactly one boundary point: an endpoint of one lies
  /// on the other, or two collinear segments meet end to end.
  Touch,
  /// The segments properly cross at a single interior point.
  Cross,
  /// Collinear segments sharing a partial extent, neither containing the
  /// other.
  Overlap,
  /// The segments cover exactly the same set of points.
  Equal,
  /// The first segment is contained in the second.
  Component,
  /// The second segment is contained in the first.
  Composite,
}

/// One reported pair of intersecting segments: the two original segment ids,
/// their relation, and the intersection locus. For point intersections
/// `start == end`; for collinear extents the locus is `[start, end]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Intersection<T> {
  pub first_segment_id: usize,
  pub second_segment_id: usize,
  pub relation: Relation,
  pub start: Point<T>,
  pub end: Point<T>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn points_order_by_x_then_y() {
    assert!(Point::new(0, 5) < Point::new(1, 0));
    assert!(Point::new(1, 0) < Point::new(1, 1));
    assert_eq!(Point::new(2, 3), Point::new(2, 3));
  }
}
