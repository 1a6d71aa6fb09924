//! The two orderings that drive the sweep.
//!
//! Both read through the endpoint/opposite tables passed in by reference, so
//! redirections performed by a subdivision take effect in every later
//! comparison. The engine removes an element from its container before any
//! mutation that would move the element's key.

use std::cmp::Ordering;

use crate::data::Point;
use crate::predicates::{Orientation, Orienteer};

use super::event::{is_left, Event};

/// Queue order: events pop in lexicographic order of their endpoint. At a
/// shared point, right events pop before left events so that segments
/// meeting end to start never coexist in the sweep line; coincident events
/// of the same kind are ordered by their opposite endpoint to keep the
/// instantaneous neighbourhood deterministic.
pub(crate) fn queue_order<T: Ord>(
  endpoints: &[Point<T>],
  opposites: &[Event],
  a: Event,
  b: Event,
) -> Ordering {
  let a_start = &endpoints[a];
  let b_start = &endpoints[b];
  a_start
    .x
    .cmp(&b_start.x)
    .then_with(|| a_start.y.cmp(&b_start.y))
    .then_with(|| match (is_left(a), is_left(b)) {
      (false, true) => Ordering::Less,
      (true, false) => Ordering::Greater,
      _ => endpoints[opposites[a]].cmp(&endpoints[opposites[b]]),
    })
}

/// Sweep-line order: `a` sorts under `b` when the sub-segment opened by `a`
/// passes below the one opened by `b` at the current sweep abscissa.
///
/// Distinct events may compare `Equal` exactly when their sub-segments have
/// identical geometry; the engine merges instead of inserting in that case,
/// so residents are always strictly ordered.
pub(crate) fn line_order<T, O>(
  endpoints: &[Point<T>],
  opposites: &[Event],
  orienteer: &O,
  a: Event,
  b: Event,
) -> Ordering
where
  T: Clone + Ord,
  O: Orienteer<T>,
{
  if a == b {
    Ordering::Equal
  } else if sorts_below(endpoints, opposites, orienteer, a, b) {
    Ordering::Less
  } else if sorts_below(endpoints, opposites, orienteer, b, a) {
    Ordering::Greater
  } else {
    Ordering::Equal
  }
}

fn sorts_below<T, O>(
  endpoints: &[Point<T>],
  opposites: &[Event],
  orienteer: &O,
  a: Event,
  b: Event,
) -> bool
where
  T: Clone + Ord,
  O: Orienteer<T>,
{
  let start = &endpoints[a];
  let end = &endpoints[opposites[a]];
  let other_start = &endpoints[b];
  let other_end = &endpoints[opposites[b]];
  let other_start_orientation = orienteer(start, end, other_start);
  let other_end_orientation = orienteer(start, end, other_end);
  if other_start_orientation == other_end_orientation {
    if other_start_orientation != Orientation::CoLinear {
      // The other segment lies fully on one side.
      return other_start_orientation == Orientation::CounterClockWise;
    }
    // Collinear segments: lexicographic on starts, then on ends, so the
    // shorter sorts first when the starts coincide.
    return match start.cmp(other_start) {
      Ordering::Equal => end < other_end,
      ordering => ordering == Ordering::Less,
    };
  }
  let start_orientation = orienteer(other_start, other_end, start);
  let end_orientation = orienteer(other_start, other_end, end);
  if start_orientation == end_orientation {
    return start_orientation == Orientation::ClockWise;
  }
  if other_start_orientation == Orientation::CoLinear {
    return other_end_orientation == Orientation::CounterClockWise;
  }
  if start_orientation == Orientation::CoLinear {
    return end_orientation == Orientation::ClockWise;
  }
  if end_orientation == Orientation::CoLinear {
    return start_orientation == Orientation::ClockWise;
  }
  other_start_orientation == Orientation::CounterClockWise
}
