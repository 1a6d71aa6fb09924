//! The mutable state of one sweep: the event arena, the containers, the
//! collinearity classes, and the subdivision protocol.
//!
//! Events are indices into append-only arenas (`endpoints`, `segment_ids`)
//! plus one redirectable table (`opposites`), instead of a pointer-linked
//! event graph. `opposites` is an involution at all times; it is redirected
//! only by [`SweepState::divide`], and only for events whose sweep-line key
//! survives the redirection unchanged in rank (the affected event is removed
//! first otherwise).

use claims::debug_assert_le;

use crate::collections::{OrderedSet, PriorityQueue};
use crate::data::{Point, Segment};
use crate::predicates::{Orientation, Orienteer, SegmentsIntersector};
use crate::Error;

use super::event::{is_left, left_event, right_event, Event};
use super::order::{line_order, queue_order};

pub(crate) struct SweepState<T, O, I> {
  endpoints: Vec<Point<T>>,
  opposites: Vec<Event>,
  // Indexed by left_event / 2; both halves of a split keep the original id.
  segment_ids: Vec<usize>,
  // Union-find over original segment ids; equal roots mean "collinear and
  // overlapping at some moment of the sweep".
  min_collinear: Vec<usize>,
  queue: PriorityQueue<Event>,
  status: OrderedSet<Event>,
  orienteer: O,
  intersector: I,
}

impl<T, O, I> SweepState<T, O, I>
where
  T: Clone + Ord,
  O: Orienteer<T>,
  I: SegmentsIntersector<T>,
{
  pub fn from_segments(segments: &[Segment<T>], orienteer: O, intersector: I) -> Result<Self, Error<T>> {
    let mut state = SweepState {
      endpoints: Vec::with_capacity(2 * segments.len()),
      opposites: Vec::with_capacity(2 * segments.len()),
      segment_ids: (0..segments.len()).collect(),
      min_collinear: (0..segments.len()).collect(),
      queue: PriorityQueue::with_capacity(2 * segments.len()),
      status: OrderedSet::new(),
      orienteer,
      intersector,
    };
    for (segment_id, segment) in segments.iter().enumerate() {
      let (start, end) = if segment.start < segment.end {
        (segment.start.clone(), segment.end.clone())
      } else {
        (segment.end.clone(), segment.start.clone())
      };
      if start == end {
        return Err(Error::DegenerateSegment {
          index: segment_id,
          point: start,
        });
      }
      state.endpoints.push(start);
      state.endpoints.push(end);
      state.opposites.push(right_event(segment_id));
      state.opposites.push(left_event(segment_id));
      state.push(left_event(segment_id));
      state.push(right_event(segment_id));
    }
    debug_assert_eq!(state.endpoints.len(), state.queue.len());
    Ok(state)
  }

  pub fn event_start(&self, event: Event) -> &Point<T> {
    &self.endpoints[event]
  }

  pub fn event_end(&self, event: Event) -> &Point<T> {
    &self.endpoints[self.opposites[event]]
  }

  pub fn opposite(&self, event: Event) -> Event {
    self.opposites[event]
  }

  pub fn event_segment_id(&self, event: Event) -> usize {
    let left = if is_left(event) { event } else { self.opposites[event] };
    self.segment_ids[left / 2]
  }

  /// The original, pre-subdivision endpoints of an input segment.
  pub fn segment_start(&self, segment_id: usize) -> &Point<T> {
    &self.endpoints[left_event(segment_id)]
  }

  pub fn segment_end(&self, segment_id: usize) -> &Point<T> {
    &self.endpoints[right_event(segment_id)]
  }

  pub fn are_collinear(&self, first_id: usize, second_id: usize) -> bool {
    self.collinear_root(first_id) == self.collinear_root(second_id)
  }

  fn collinear_root(&self, segment_id: usize) -> usize {
    let mut root = segment_id;
    let mut steps = 0;
    while self.min_collinear[root] != root {
      root = self.min_collinear[root];
      steps += 1;
    }
    // Entries only ever point at smaller roots, keeping walks logarithmic.
    debug_assert_le!(1usize << steps, self.segment_ids.len());
    root
  }

  fn merge_equal_segments(&mut self, first: Event, second: Event) {
    debug_assert!(is_left(first) && is_left(second));
    let first_id = self.event_segment_id(first);
    let second_id = self.event_segment_id(second);
    let first_root = self.collinear_root(first_id);
    let second_root = self.collinear_root(second_id);
    let root = first_root.min(second_root);
    self.min_collinear[first_id] = root;
    self.min_collinear[second_id] = root;
    self.min_collinear[first_root] = root;
    self.min_collinear[second_root] = root;
  }

  pub fn status_is_empty(&self) -> bool {
    self.status.is_empty()
  }

  fn push(&mut self, event: Event) {
    let SweepState {
      endpoints,
      opposites,
      queue,
      ..
    } = self;
    queue.push(event, |a, b| queue_order(endpoints, opposites, a, b));
  }

  pub fn pop(&mut self) -> Option<Event> {
    let SweepState {
      endpoints,
      opposites,
      queue,
      ..
    } = self;
    queue.pop(|a, b| queue_order(endpoints, opposites, a, b))
  }

  fn add(&mut self, event: Event) {
    debug_assert!(is_left(event));
    let SweepState {
      endpoints,
      opposites,
      orienteer,
      status,
      ..
    } = self;
    status.insert(event, |a, b| line_order(endpoints, opposites, orienteer, a, b));
  }

  fn remove(&mut self, event: Event) {
    debug_assert!(is_left(event));
    let SweepState {
      endpoints,
      opposites,
      orienteer,
      status,
      ..
    } = self;
    let removed = status.remove(event, |a, b| line_order(endpoints, opposites, orienteer, a, b));
    debug_assert!(removed);
  }

  pub fn above(&self, event: Event) -> Option<Event> {
    debug_assert!(is_left(event));
    let SweepState {
      endpoints,
      opposites,
      orienteer,
      status,
      ..
    } = self;
    status.next(event, |a, b| line_order(endpoints, opposites, orienteer, a, b))
  }

  pub fn below(&self, event: Event) -> Option<Event> {
    debug_assert!(is_left(event));
    let SweepState {
      endpoints,
      opposites,
      orienteer,
      status,
      ..
    } = self;
    status.prev(event, |a, b| line_order(endpoints, opposites, orienteer, a, b))
  }

  /// The resident whose sub-segment has exactly the geometry of `event`,
  /// if any. Keys of equal-geometry events compare `Equal`, so `floor`
  /// lands on the resident when one exists.
  fn find_equal(&self, event: Event) -> Option<Event> {
    debug_assert!(is_left(event));
    let SweepState {
      endpoints,
      opposites,
      orienteer,
      status,
      ..
    } = self;
    let candidate = status.floor(event, |a, b| line_order(endpoints, opposites, orienteer, a, b))?;
    if endpoints[candidate] == endpoints[event]
      && endpoints[opposites[candidate]] == endpoints[opposites[event]]
    {
      Some(candidate)
    } else {
      None
    }
  }

  /// Splits the sub-segment of `event` at `mid_point`, minting a right
  /// event closing its near half and a left event opening its far half.
  /// Neither new event is queued here; each call site pushes exactly the
  /// halves that must flow through the queue.
  fn divide(&mut self, event: Event, mid_point: Point<T>) -> (Event, Event) {
    debug_assert!(is_left(event));
    debug_assert!(*self.event_start(event) < mid_point);
    debug_assert!(mid_point < *self.event_end(event));
    let segment_id = self.event_segment_id(event);
    let opposite = self.opposites[event];
    let mid_to_end = self.endpoints.len();
    self.segment_ids.push(segment_id);
    self.endpoints.push(mid_point.clone());
    self.opposites.push(opposite);
    self.opposites[opposite] = mid_to_end;
    let mid_to_start = self.endpoints.len();
    self.endpoints.push(mid_point);
    self.opposites.push(event);
    self.opposites[event] = mid_to_start;
    (mid_to_start, mid_to_end)
  }

  fn divide_at_midpoint(&mut self, event: Event, point: Point<T>) {
    let (near_close, far_open) = self.divide(event, point);
    self.push(near_close);
    self.push(far_open);
  }

  /// Splits `event` at `point` unless the event immediately above shares
  /// `event`'s start and already ends at `point`; then that duplicate is
  /// removed first and merged with the near half afterwards. The
  /// remove / divide / merge order is load-bearing: the duplicate's key
  /// must leave the status before `divide` redirects `event`'s opposite.
  fn divide_checking_above(&mut self, event: Event, point: Point<T>) {
    if let Some(above_event) = self.above(event) {
      if self.event_start(above_event) == self.event_start(event)
        && *self.event_end(above_event) == point
      {
        self.remove(above_event);
        self.divide_at_midpoint(event, point);
        self.merge_equal_segments(event, above_event);
        return;
      }
    }
    self.divide_at_midpoint(event, point);
  }

  /// Collinear case: the sub-segment of `inner_event` lies strictly inside
  /// the sub-segment of `event`. Cuts `event` at both inner endpoints and
  /// merges the middle piece with `inner_event`.
  fn divide_enclosed(
    &mut self,
    event: Event,
    inner_event: Event,
    inner_start: Point<T>,
    inner_end: Point<T>,
  ) {
    self.divide_at_midpoint(event, inner_end);
    let (near_close, middle_open) = self.divide(event, inner_start);
    self.push(near_close);
    self.merge_equal_segments(inner_event, middle_open);
  }

  /// Collinear case: the sub-segments overlap in `[max_start, min_end]`
  /// without either containing the other. Cuts both and merges the two
  /// copies of the shared extent.
  fn divide_overlapping(
    &mut self,
    min_start_event: Event,
    max_start_event: Event,
    max_start: Point<T>,
    min_end: Point<T>,
  ) {
    self.divide_at_midpoint(max_start_event, min_end);
    let (near_close, shared_open) = self.divide(min_start_event, max_start);
    self.push(near_close);
    self.merge_equal_segments(max_start_event, shared_open);
  }

  /// The intersection protocol between two vertically adjacent residents,
  /// `below_event` immediately under `event`.
  pub fn detect_intersection(&mut self, below_event: Event, event: Event) {
    let event_start = self.event_start(event).clone();
    let event_end = self.event_end(event).clone();
    let below_start = self.event_start(below_event).clone();
    let below_end = self.event_end(below_event).clone();
    let start_orientation = (self.orienteer)(&below_end, &below_start, &event_start);
    let end_orientation = (self.orienteer)(&below_end, &below_start, &event_end);
    if start_orientation == end_orientation {
      if start_orientation != Orientation::CoLinear {
        // Fully on one side: nothing to do.
        return;
      }
      if event_start == below_start {
        // Same start, different ends: cut the longer at the shorter's end
        // and keep only the far remainder flowing; the two copies of the
        // shared piece become one collinear class.
        debug_assert!(event_end != below_end);
        let (max_end_event, min_end_event) = if event_end < below_end {
          (below_event, event)
        } else {
          (event, below_event)
        };
        self.remove(max_end_event);
        let min_end = self.event_end(min_end_event).clone();
        let (_, remainder_open) = self.divide(max_end_event, min_end);
        self.push(remainder_open);
        self.merge_equal_segments(event, below_event);
      } else if event_end == below_end {
        // Different starts, same end: cut the earlier at the later's start.
        let (max_start_event, min_start_event) = if event_start < below_start {
          (below_event, event)
        } else {
          (event, below_event)
        };
        let max_start = self.event_start(max_start_event).clone();
        let (near_close, shared_open) = self.divide(min_start_event, max_start);
        self.push(near_close);
        self.merge_equal_segments(max_start_event, shared_open);
      } else if below_start < event_start && event_start < below_end {
        if event_end < below_end {
          self.divide_enclosed(below_event, event, event_start, event_end);
        } else {
          self.divide_overlapping(below_event, event, event_start, below_end);
        }
      } else if event_start < below_start && below_start < event_end {
        if below_end < event_end {
          self.divide_enclosed(event, below_event, below_start, below_end);
        } else {
          self.divide_overlapping(event, below_event, below_start, event_end);
        }
      }
    } else if start_orientation == Orientation::CoLinear {
      if below_start < event_start && event_start < below_end {
        self.divide_at_midpoint(below_event, event_start);
      }
    } else if end_orientation == Orientation::CoLinear {
      if below_start < event_end && event_end < below_end {
        self.divide_at_midpoint(below_event, event_end);
      }
    } else {
      let below_start_orientation = (self.orienteer)(&event_start, &event_end, &below_start);
      let below_end_orientation = (self.orienteer)(&event_start, &event_end, &below_end);
      if below_start_orientation == Orientation::CoLinear {
        debug_assert!(below_end_orientation != Orientation::CoLinear);
        if event_start < below_start && below_start < event_end {
          self.divide_checking_above(event, below_start);
        }
      } else if below_end_orientation == Orientation::CoLinear {
        if event_start < below_end && below_end < event_end {
          self.divide_checking_above(event, below_end);
        }
      } else if below_start_orientation != below_end_orientation {
        let crossing = (self.intersector)(&event_start, &event_end, &below_start, &below_end);
        if below_start < crossing && crossing < below_end {
          self.divide_at_midpoint(below_event, crossing.clone());
        }
        if event_start < crossing && crossing < event_end {
          self.divide_checking_above(event, crossing);
        }
      }
    }
  }

  /// One step of the main loop for a popped left event. Returns the event
  /// to emit, or `None` when the event merged into an equal-geometry
  /// resident (callers wanting non-unique yields emit it regardless).
  pub fn open(&mut self, event: Event) -> Option<Event> {
    debug_assert!(is_left(event));
    match self.find_equal(event) {
      None => {
        self.add(event);
        if let Some(below_event) = self.below(event) {
          self.detect_intersection(below_event, event);
        }
        if let Some(above_event) = self.above(event) {
          self.detect_intersection(event, above_event);
        }
        Some(event)
      }
      Some(equal_event) => {
        self.merge_equal_segments(equal_event, event);
        None
      }
    }
  }

  /// One step of the main loop for a popped right event. Returns the event
  /// to emit, or `None` when no resident matched (the sub-segment was
  /// merged away on the left side).
  pub fn close(&mut self, event: Event) -> Option<Event> {
    debug_assert!(!is_left(event));
    let opposite = self.opposite(event);
    let equal_event = self.find_equal(opposite)?;
    let above_event = self.above(equal_event);
    let below_event = self.below(equal_event);
    self.remove(equal_event);
    if let (Some(below_event), Some(above_event)) = (below_event, above_event) {
      self.detect_intersection(below_event, above_event);
    }
    if equal_event != opposite {
      self.merge_equal_segments(equal_event, opposite);
    }
    Some(event)
  }
}
