//! Bentley–Ottmann sweep over a set of line segments, reporting every
//! intersecting pair together with its relation and locus.
//!
//! The sweep line advances through the event queue in lexicographic order.
//! Each left event inserts its sub-segment into the status structure and
//! checks it against its vertical neighbours; each right event removes its
//! sub-segment and checks the neighbours it separated. Discovered interior
//! points subdivide the affected sub-segments in place: the original events
//! keep their identity while new events for the halves are minted at the end
//! of the arena, so every key that is resident in a container stays valid.
//! Collinear overlaps are resolved incrementally, one cut per encounter,
//! and recorded in a union-find of collinear classes instead of being
//! re-reported from scratch.
//!
//! The second layer groups the emitted events by their shared start point
//! and classifies every pair of distinct segments meeting there into one of
//! the six [`Relation`]s, yielding [`Intersection`]s lazily. Running time is
//! `O((n + k) log n)` for `n` segments and `k` event points; memory is
//! `O(n + k)`.

mod event;
mod order;
mod state;

use std::cmp;
use std::collections::{HashSet, VecDeque};

use crate::data::{Intersection, Point, Relation, Segment};
use crate::predicates::{self, IntersectorFn, Orienteer, OrienteerFn, SegmentsIntersector};
use crate::{Error, SweepScalar};

use event::{is_left, Event};
use state::SweepState;

/// Iterates the processed events in queue order. With `unique` set,
/// events whose sub-segment merged into an equal-geometry resident are
/// swallowed; the classifier needs them, so it runs without it.
pub(crate) struct Events<T, O, I> {
  state: SweepState<T, O, I>,
  unique: bool,
}

impl<T, O, I> Iterator for Events<T, O, I>
where
  T: Clone + Ord,
  O: Orienteer<T>,
  I: SegmentsIntersector<T>,
{
  type Item = Event;

  fn next(&mut self) -> Option<Event> {
    while let Some(event) = self.state.pop() {
      let processed = if is_left(event) {
        self.state.open(event)
      } else {
        self.state.close(event)
      };
      if processed.is_some() || !self.unique {
        return Some(event);
      }
    }
    debug_assert!(self.state.status_is_empty());
    None
  }
}

/// Lazy sequence of all pairwise intersections. Created by [`sweep`] or
/// [`sweep_with`]; one-shot.
pub struct Intersections<T, O, I> {
  events: Events<T, O, I>,
  group_start: Option<Point<T>>,
  group_ids: Vec<usize>,
  reported: HashSet<(usize, usize)>,
  pending: VecDeque<Intersection<T>>,
}

impl<T, O, I> Iterator for Intersections<T, O, I>
where
  T: Clone + Ord,
  O: Orienteer<T>,
  I: SegmentsIntersector<T>,
{
  type Item = Intersection<T>;

  fn next(&mut self) -> Option<Intersection<T>> {
    loop {
      if let Some(intersection) = self.pending.pop_front() {
        return Some(intersection);
      }
      match self.events.next() {
        Some(event) => {
          let start = self.events.state.event_start(event).clone();
          let segment_id = self.events.state.event_segment_id(event);
          if self.group_start.as_ref() == Some(&start) {
            if !self.group_ids.contains(&segment_id) {
              self.group_ids.push(segment_id);
            }
          } else {
            self.flush_group();
            self.group_start = Some(start);
            self.group_ids.push(segment_id);
          }
        }
        None => {
          if self.group_start.is_some() {
            self.flush_group();
          } else {
            return None;
          }
        }
      }
    }
  }
}

impl<T, O, I> Intersections<T, O, I>
where
  T: Clone + Ord,
  O: Orienteer<T>,
  I: SegmentsIntersector<T>,
{
  /// Classifies every unreported pair of segments concurrent at the group's
  /// start point and queues the results for emission.
  fn flush_group(&mut self) {
    let point = match self.group_start.take() {
      Some(point) => point,
      None => return,
    };
    self.group_ids.sort_unstable();
    for i in 0..self.group_ids.len() {
      for j in i + 1..self.group_ids.len() {
        let pair = (self.group_ids[i], self.group_ids[j]);
        if !self.reported.insert(pair) {
          continue;
        }
        let intersection = classify(&self.events.state, pair.0, pair.1, &point);
        self.pending.push_back(intersection);
      }
    }
    self.group_ids.clear();
  }
}

fn classify<T, O, I>(
  state: &SweepState<T, O, I>,
  first_id: usize,
  second_id: usize,
  point: &Point<T>,
) -> Intersection<T>
where
  T: Clone + Ord,
  O: Orienteer<T>,
  I: SegmentsIntersector<T>,
{
  let first_start = state.segment_start(first_id);
  let first_end = state.segment_end(first_id);
  let second_start = state.segment_start(second_id);
  let second_end = state.segment_end(second_id);
  let (relation, start, end) = if !state.are_collinear(first_id, second_id) {
    let relation = if first_start == point
      || first_end == point
      || second_start == point
      || second_end == point
    {
      Relation::Touch
    } else {
      Relation::Cross
    };
    (relation, point.clone(), point.clone())
  } else {
    collinear_relation(first_start, first_end, second_start, second_end, point)
  };
  Intersection {
    first_segment_id: first_id,
    second_segment_id: second_id,
    relation,
    start,
    end,
  }
}

/// Relation of two collinear segments given their sorted original
/// endpoints. `point` is their single common point in the end-to-end touch
/// case; callers guarantee the extents are not disjoint.
pub(crate) fn collinear_relation<T: Clone + Ord>(
  first_start: &Point<T>,
  first_end: &Point<T>,
  second_start: &Point<T>,
  second_end: &Point<T>,
  point: &Point<T>,
) -> (Relation, Point<T>, Point<T>) {
  debug_assert!(cmp::max(first_start, second_start) <= cmp::min(first_end, second_end));
  if cmp::max(first_start, second_start) == cmp::min(first_end, second_end) {
    (Relation::Touch, point.clone(), point.clone())
  } else if first_start == second_start {
    if first_end == second_end {
      (Relation::Equal, first_start.clone(), first_end.clone())
    } else if first_end > second_end {
      (Relation::Composite, first_start.clone(), second_end.clone())
    } else {
      (Relation::Component, first_start.clone(), first_end.clone())
    }
  } else if first_start > second_start {
    if first_end > second_end {
      (Relation::Overlap, first_start.clone(), second_end.clone())
    } else {
      (Relation::Component, first_start.clone(), first_end.clone())
    }
  } else if first_end < second_end {
    (Relation::Overlap, second_start.clone(), first_end.clone())
  } else {
    (Relation::Composite, second_start.clone(), second_end.clone())
  }
}

/// Reports all pairwise intersections among `segments` using the supplied
/// predicates. Fails if any segment is degenerate; otherwise returns the
/// lazy sequence of [`Intersection`]s.
pub fn sweep_with<T, O, I>(
  segments: &[Segment<T>],
  orienteer: O,
  intersector: I,
) -> Result<Intersections<T, O, I>, Error<T>>
where
  T: Clone + Ord,
  O: Orienteer<T>,
  I: SegmentsIntersector<T>,
{
  let state = SweepState::from_segments(segments, orienteer, intersector)?;
  Ok(Intersections {
    events: Events {
      state,
      unique: false,
    },
    group_start: None,
    group_ids: Vec::new(),
    reported: HashSet::new(),
    pending: VecDeque::new(),
  })
}

/// [`sweep_with`] instantiated with the crate's exact default predicates.
/// The scalar must divide exactly for the crossing points to be exact;
/// `BigRational` is the canonical choice.
pub fn sweep<T: SweepScalar>(
  segments: &[Segment<T>],
) -> Result<Intersections<T, OrienteerFn<T>, IntersectorFn<T>>, Error<T>> {
  sweep_with(
    segments,
    predicates::orientation as OrienteerFn<T>,
    predicates::intersection_point as IntersectorFn<T>,
  )
}
