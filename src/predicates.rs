//! Geometric predicates consumed by the sweep.
//!
//! The engine never does arithmetic of its own: it is constructed with an
//! [`Orienteer`] and a [`SegmentsIntersector`] and reads every geometric fact
//! through them. This module provides exact defaults over any [`SweepScalar`]
//! and, in [`robust`], an adaptive-precision orienteer for `f64` coordinates.

use std::cmp::Ordering;

use num_traits::Zero;

use crate::data::Point;
use crate::SweepScalar;

#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone)]
pub enum Orientation {
  CounterClockWise,
  ClockWise,
  CoLinear,
}

impl Orientation {
  pub fn reverse(self) -> Orientation {
    match self {
      Orientation::CounterClockWise => Orientation::ClockWise,
      Orientation::ClockWise => Orientation::CounterClockWise,
      Orientation::CoLinear => Orientation::CoLinear,
    }
  }
}

/// Orientation predicate: how does the path `p -> q -> r` turn?
pub trait Orienteer<T>: Fn(&Point<T>, &Point<T>, &Point<T>) -> Orientation {}

impl<T, F> Orienteer<T> for F where F: Fn(&Point<T>, &Point<T>, &Point<T>) -> Orientation {}

/// Crossing-point predicate. Precondition: the two segments properly cross
/// (they are neither parallel nor collinear and the crossing lies within
/// both).
pub trait SegmentsIntersector<T>:
  Fn(&Point<T>, &Point<T>, &Point<T>, &Point<T>) -> Point<T>
{
}

impl<T, F> SegmentsIntersector<T> for F where
  F: Fn(&Point<T>, &Point<T>, &Point<T>, &Point<T>) -> Point<T>
{
}

pub type OrienteerFn<T> = fn(&Point<T>, &Point<T>, &Point<T>) -> Orientation;
pub type IntersectorFn<T> = fn(&Point<T>, &Point<T>, &Point<T>, &Point<T>) -> Point<T>;

/// Exact orientation via the sign of the cross product `(q - p) x (r - p)`.
///
/// Exact for scalars with exact ring arithmetic (integers, rationals). For
/// fixed-width integers the products may overflow; cast up or use a bignum
/// scalar for coordinates near the representation limit.
pub fn orientation<T: SweepScalar>(p: &Point<T>, q: &Point<T>, r: &Point<T>) -> Orientation {
  let ux = q.x.clone() - p.x.clone();
  let uy = q.y.clone() - p.y.clone();
  let vx = r.x.clone() - p.x.clone();
  let vy = r.y.clone() - p.y.clone();
  match (ux * vy).cmp(&(uy * vx)) {
    Ordering::Greater => Orientation::CounterClockWise,
    Ordering::Less => Orientation::ClockWise,
    Ordering::Equal => Orientation::CoLinear,
  }
}

/// Exact crossing point of two properly crossing segments, by the
/// determinant formula. Requires a division-closed scalar: the result is
/// only exact when `T` divides exactly (e.g. `BigRational`).
pub fn intersection_point<T: SweepScalar>(
  p1: &Point<T>,
  p2: &Point<T>,
  q1: &Point<T>,
  q2: &Point<T>,
) -> Point<T> {
  let denom = (p1.x.clone() - p2.x.clone()) * (q1.y.clone() - q2.y.clone())
    - (p1.y.clone() - p2.y.clone()) * (q1.x.clone() - q2.x.clone());
  debug_assert!(denom != T::zero());
  let part_p = p1.x.clone() * p2.y.clone() - p1.y.clone() * p2.x.clone();
  let part_q = q1.x.clone() * q2.y.clone() - q1.y.clone() * q2.x.clone();
  let x_num = part_p.clone() * (q1.x.clone() - q2.x.clone())
    - (p1.x.clone() - p2.x.clone()) * part_q.clone();
  let y_num = part_p * (q1.y.clone() - q2.y.clone()) - (p1.y.clone() - p2.y.clone()) * part_q;
  Point::new(x_num / denom.clone(), y_num / denom)
}

/// Adaptive-precision predicates for `f64` coordinates, wrapped in
/// `OrderedFloat` so they satisfy the `Ord` bound of the sweep.
pub mod robust {
  use geometry_predicates::orient2d;
  use ordered_float::OrderedFloat;

  use super::Orientation;
  use crate::data::Point;

  pub fn orientation(
    p: &Point<OrderedFloat<f64>>,
    q: &Point<OrderedFloat<f64>>,
    r: &Point<OrderedFloat<f64>>,
  ) -> Orientation {
    let sign = orient2d(
      [p.x.into_inner(), p.y.into_inner()],
      [q.x.into_inner(), q.y.into_inner()],
      [r.x.into_inner(), r.y.into_inner()],
    );
    if sign > 0.0 {
      Orientation::CounterClockWise
    } else if sign < 0.0 {
      Orientation::ClockWise
    } else {
      Orientation::CoLinear
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use num::BigRational;
  use ordered_float::OrderedFloat;

  fn point(x: i64, y: i64) -> Point<i64> {
    Point::new(x, y)
  }

  #[test]
  fn orientation_turns() {
    assert_eq!(
      orientation(&point(0, 0), &point(1, 0), &point(2, 1)),
      Orientation::CounterClockWise
    );
    assert_eq!(
      orientation(&point(0, 0), &point(1, 0), &point(2, -1)),
      Orientation::ClockWise
    );
    assert_eq!(
      orientation(&point(0, 0), &point(1, 1), &point(2, 2)),
      Orientation::CoLinear
    );
  }

  #[test]
  fn orientation_reverse() {
    let o = orientation(&point(0, 0), &point(1, 0), &point(2, 1));
    assert_eq!(o.reverse(), Orientation::ClockWise);
    assert_eq!(Orientation::CoLinear.reverse(), Orientation::CoLinear);
  }

  #[test]
  fn crossing_point_of_diagonals() {
    let scalar = |n: i64| BigRational::from_integer(n.into());
    let p = |x: i64, y: i64| Point::new(scalar(x), scalar(y));
    let crossing = intersection_point(&p(0, 0), &p(2, 2), &p(2, 0), &p(0, 2));
    assert_eq!(crossing, p(1, 1));
  }

  #[test]
  fn robust_orientation_matches_exact() {
    let p = |x: f64, y: f64| Point::new(OrderedFloat(x), OrderedFloat(y));
    assert_eq!(
      robust::orientation(&p(0.0, 0.0), &p(1.0, 0.0), &p(2.0, 1.0)),
      Orientation::CounterClockWise
    );
    assert_eq!(
      robust::orientation(&p(0.0, 0.0), &p(1.0, 1.0), &p(2.0, 2.0)),
      Orientation::CoLinear
    );
  }
}
