//! Selection sort; the first minimum seen wins ties

use super::recorder::{prefix, StepRecorder};
use super::step::SortingStep;

pub fn selection_sort<T: Ord + Clone>(input: &[T]) -> Vec<SortingStep<T>> {
    let mut rec = StepRecorder::new(input);
    let n = rec.len();

    for i in 0..n.saturating_sub(1) {
        let mut min_index = i;

        for j in i + 1..n {
            rec.compare(&[min_index, j], prefix(i));
            if rec.get(j) < rec.get(min_index) {
                min_index = j;
            }
        }

        if min_index != i {
            rec.swap(i, min_index, prefix(i));
        }

        rec.highlight(prefix(i + 1));
    }

    rec.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comparisons_track_running_minimum() {
        let steps = selection_sort(&[3, 1, 2]);
        let pairs: Vec<_> = steps
            .iter()
            .filter(|s| s.is_comparison())
            .map(|s| s.compare_indices.clone())
            .collect();

        assert_eq!(pairs, vec![vec![0, 1], vec![1, 2], vec![1, 2]]);
    }

    #[test]
    fn test_equal_minimum_does_not_swap() {
        let steps = selection_sort(&[1, 1]);

        assert!(steps.iter().all(|s| !s.is_swap()));
        assert_eq!(steps.len(), 3);
    }
}
