//! Cycle sort
//!
//! The item being placed stays at `cycle_start` and is exchanged with its
//! target slot, so every recorded array is a permutation of the input.

use super::recorder::{prefix, StepRecorder};
use super::step::SortingStep;

pub fn cycle_sort<T: Ord + Clone>(input: &[T]) -> Vec<SortingStep<T>> {
    let mut rec = StepRecorder::new(input);
    let n = rec.len();

    for cycle_start in 0..n.saturating_sub(1) {
        let mut rotated = false;

        loop {
            let mut pos = find_position(&mut rec, cycle_start);

            if pos == cycle_start {
                break;
            }

            // Skip over slots already holding an equal item
            while pos + 1 < n && rec.get(pos) == rec.get(cycle_start) {
                pos += 1;
            }

            rec.swap(cycle_start, pos, prefix(cycle_start));
            rotated = true;
        }

        if rotated {
            rec.highlight(prefix(cycle_start + 1));
        }
    }

    rec.finish()
}

/// Count the later elements smaller than the held item
fn find_position<T: Ord + Clone>(rec: &mut StepRecorder<T>, cycle_start: usize) -> usize {
    let mut pos = cycle_start;

    for i in cycle_start + 1..rec.len() {
        rec.compare(&[cycle_start, i], prefix(cycle_start));
        if rec.get(i) < rec.get(cycle_start) {
            pos += 1;
        }
    }

    pos
}
