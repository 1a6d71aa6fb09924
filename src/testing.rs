// Random inputs for fuzzing and benchmarks. Coordinates are drawn from a
// small integer grid: collinear, coincident, and shared-endpoint
// configurations need to actually occur, and they would almost never occur
// on a continuous range.

use num_bigint::BigInt;
use num_rational::BigRational;
use rand::Rng;

use crate::data::{Point, Segment};

/// A non-degenerate segment with integer coordinates in `[-extent, extent]`.
pub fn random_segment<R>(extent: i64, rng: &mut R) -> Segment<BigRational>
where
  R: Rng + ?Sized,
{
  loop {
    let mut coord = || BigRational::from_integer(BigInt::from(rng.gen_range(-extent..=extent)));
    let start = Point::new(coord(), coord());
    let end = Point::new(coord(), coord());
    if start != end {
      return Segment::new(start, end);
    }
  }
}

/// `count` independent random segments.
pub fn random_segments<R>(count: usize, extent: i64, rng: &mut R) -> Vec<Segment<BigRational>>
where
  R: Rng + ?Sized,
{
  (0..count).map(|_| random_segment(extent, rng)).collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use rand::rngs::SmallRng;
  use rand::SeedableRng;

  #[test]
  fn segments_are_never_degenerate() {
    let mut rng = SmallRng::seed_from_u64(0xdeadbeef);
    for segment in random_segments(100, 2, &mut rng) {
      assert_ne!(segment.start, segment.end);
    }
  }
}
