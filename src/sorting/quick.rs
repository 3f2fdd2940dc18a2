//! Quick sort with Lomuto partitioning around the last element

use super::recorder::StepRecorder;
use super::step::SortingStep;

pub fn quick_sort<T: Ord + Clone>(input: &[T]) -> Vec<SortingStep<T>> {
    let mut rec = StepRecorder::new(input);
    let n = rec.len();

    if n > 0 {
        sort_range(&mut rec, 0, n - 1);
    }

    rec.finish()
}

/// Sort the inclusive range `low..=high`
fn sort_range<T: Ord + Clone>(rec: &mut StepRecorder<T>, low: usize, high: usize) {
    if low < high {
        let pivot_index = partition(rec, low, high);

        if pivot_index > low {
            sort_range(rec, low, pivot_index - 1);
        }
        if pivot_index < high {
            sort_range(rec, pivot_index + 1, high);
        }
    } else if low == high {
        // A single element is already in place
        rec.highlight(vec![low]);
    }
}

/// Partition `low..=high` and return the pivot's final index
fn partition<T: Ord + Clone>(rec: &mut StepRecorder<T>, low: usize, high: usize) -> usize {
    let pivot = rec.get(high).clone();
    // Everything left of `boundary` is smaller than the pivot
    let mut boundary = low;

    for j in low..high {
        rec.compare(&[j, high], Vec::new());

        if *rec.get(j) < pivot {
            rec.swap(boundary, j, Vec::new());
            boundary += 1;
        }
    }

    rec.swap(boundary, high, Vec::new());
    rec.highlight(vec![boundary]);

    boundary
}
