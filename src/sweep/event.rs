/// Events are plain indices into the endpoint table. The table grows in
/// pairs, so parity distinguishes the two kinds forever: even events open a
/// (sub-)segment at its lexicographically smaller endpoint, odd events close
/// one at its larger endpoint.
pub(crate) type Event = usize;

pub(crate) fn is_left(event: Event) -> bool {
  event & 1 == 0
}

pub(crate) fn left_event(segment_id: usize) -> Event {
  2 * segment_id
}

pub(crate) fn right_event(segment_id: usize) -> Event {
  2 * segment_id + 1
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parity() {
    assert!(is_left(left_event(0)));
    assert!(is_left(left_event(7)));
    assert!(!is_left(right_event(0)));
    assert!(!is_left(right_event(7)));
  }
}
