//! Bubble sort with early exit on a pass that performs no swaps

use super::recorder::{suffix, StepRecorder};
use super::step::SortingStep;

pub fn bubble_sort<T: Ord + Clone>(input: &[T]) -> Vec<SortingStep<T>> {
    let mut rec = StepRecorder::new(input);
    let n = rec.len();
    let mut sorted = false;
    let mut pass = 0;

    while pass + 1 < n && !sorted {
        sorted = true;
        for j in 0..n - pass - 1 {
            rec.compare(&[j, j + 1], suffix(n, pass));

            if rec.get(j) > rec.get(j + 1) {
                rec.swap(j, j + 1, suffix(n, pass));
                sorted = false;
            }
        }

        // The largest remaining element has bubbled to the end of the pass
        rec.highlight(suffix(n, pass + 1));
        pass += 1;
    }

    rec.finish()
}
