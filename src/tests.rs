use std::collections::BTreeSet;

use num::BigRational;
use proptest::collection::vec;
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::data::{Intersection, Point, Relation, Segment};
use crate::naive;
use crate::sweep::sweep;
use crate::testing::random_segments;

type Scalar = BigRational;
type Canonical = (usize, usize, Relation, Point<Scalar>, Point<Scalar>);

fn scalar(n: i64) -> Scalar {
  Scalar::from_integer(n.into())
}

fn point(x: i64, y: i64) -> Point<Scalar> {
  Point::new(scalar(x), scalar(y))
}

fn canonical(intersection: Intersection<Scalar>) -> Canonical {
  (
    intersection.first_segment_id,
    intersection.second_segment_id,
    intersection.relation,
    intersection.start,
    intersection.end,
  )
}

fn sweep_set(segments: &[Segment<Scalar>]) -> BTreeSet<Canonical> {
  sweep(segments).unwrap().map(canonical).collect()
}

fn naive_set(segments: &[Segment<Scalar>]) -> BTreeSet<Canonical> {
  naive::segment_intersections(segments).map(canonical).collect()
}

// Component and composite trade places when the pair is read the other way
// around; the four other relations are symmetric.
fn flip(relation: Relation) -> Relation {
  match relation {
    Relation::Component => Relation::Composite,
    Relation::Composite => Relation::Component,
    other => other,
  }
}

fn rename(reported: &BTreeSet<Canonical>, mapping: impl Fn(usize) -> usize) -> BTreeSet<Canonical> {
  reported
    .iter()
    .cloned()
    .map(|(first, second, relation, start, end)| {
      let (first, second) = (mapping(first), mapping(second));
      if first <= second {
        (first, second, relation, start, end)
      } else {
        (second, first, flip(relation), start, end)
      }
    })
    .collect()
}

fn arb_segment() -> impl Strategy<Value = Segment<Scalar>> {
  let coord = -3..=3i64;
  (coord.clone(), coord.clone(), coord.clone(), coord).prop_filter_map(
    "degenerate segment",
    |(x1, y1, x2, y2)| {
      if (x1, y1) == (x2, y2) {
        None
      } else {
        Some(Segment::new(point(x1, y1), point(x2, y2)))
      }
    },
  )
}

#[test]
fn sweep_matches_naive_on_seeded_inputs() {
  for seed in 0..32 {
    let mut rng = SmallRng::seed_from_u64(seed);
    let segments = random_segments(12, 3, &mut rng);
    assert_eq!(
      sweep_set(&segments),
      naive_set(&segments),
      "seed {}: sweep and naive disagree",
      seed
    );
  }
}

#[test]
fn dense_grid_round_trip() {
  // Every horizontal, vertical and diagonal of a 3x3 grid: lots of shared
  // endpoints, collinear touches and concurrent crossings.
  let mut segments = Vec::new();
  for i in 0..3 {
    segments.push(Segment::new(point(0, i), point(2, i)));
    segments.push(Segment::new(point(i, 0), point(i, 2)));
  }
  segments.push(Segment::new(point(0, 0), point(2, 2)));
  segments.push(Segment::new(point(0, 2), point(2, 0)));
  assert_eq!(sweep_set(&segments), naive_set(&segments));
}

#[test]
fn overlap_ladder_matches_naive() {
  let segments = vec![
    Segment::new(point(0, 0), point(4, 0)),
    Segment::new(point(1, 0), point(5, 0)),
    Segment::new(point(2, 0), point(6, 0)),
    Segment::new(point(0, 0), point(6, 0)),
    Segment::new(point(3, 0), point(3, 2)),
  ];
  assert_eq!(sweep_set(&segments), naive_set(&segments));
}

proptest! {
  #[test]
  fn sweep_matches_naive(segments in vec(arb_segment(), 0..6)) {
    prop_assert_eq!(sweep_set(&segments), naive_set(&segments));
  }

  #[test]
  fn reversing_the_input_renames_ids(segments in vec(arb_segment(), 0..6)) {
    let forward = sweep_set(&segments);
    let reversed: Vec<_> = segments.iter().rev().cloned().collect();
    let backward = sweep_set(&reversed);
    let count = segments.len();
    prop_assert_eq!(rename(&forward, |id| count - 1 - id), backward);
  }

  #[test]
  fn reversing_endpoints_changes_nothing(segments in vec(arb_segment(), 0..6)) {
    let flipped: Vec<_> = segments
      .iter()
      .map(|segment| Segment::new(segment.end.clone(), segment.start.clone()))
      .collect();
    prop_assert_eq!(sweep_set(&segments), sweep_set(&flipped));
  }

  #[test]
  fn negating_coordinates_changes_no_relation(segments in vec(arb_segment(), 0..6)) {
    let negated: Vec<_> = segments
      .iter()
      .map(|segment| {
        Segment::new(
          Point::new(-segment.start.x.clone(), -segment.start.y.clone()),
          Point::new(-segment.end.x.clone(), -segment.end.y.clone()),
        )
      })
      .collect();
    let expected: BTreeSet<Canonical> = sweep_set(&segments)
      .into_iter()
      .map(|(first, second, relation, start, end)| {
        // The lexicographic order of a negated locus reverses.
        (
          first,
          second,
          relation,
          Point::new(-end.x, -end.y),
          Point::new(-start.x, -start.y),
        )
      })
      .collect();
    prop_assert_eq!(sweep_set(&negated), expected);
  }

  #[test]
  fn no_segment_reported_against_itself(segments in vec(arb_segment(), 0..6)) {
    for intersection in sweep(&segments).unwrap() {
      prop_assert_ne!(intersection.first_segment_id, intersection.second_segment_id);
    }
  }

  #[test]
  fn reported_pairs_are_unique(segments in vec(arb_segment(), 0..6)) {
    let mut seen = BTreeSet::new();
    for intersection in sweep(&segments).unwrap() {
      let pair = (intersection.first_segment_id, intersection.second_segment_id);
      prop_assert!(seen.insert(pair), "pair {:?} reported twice", pair);
    }
  }
}
