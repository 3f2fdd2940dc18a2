//! Insertion sort, shifting the key left one swap at a time

use super::recorder::{prefix, StepRecorder};
use super::step::SortingStep;

pub fn insertion_sort<T: Ord + Clone>(input: &[T]) -> Vec<SortingStep<T>> {
    let mut rec = StepRecorder::new(input);
    let n = rec.len();

    for i in 1..n {
        // The element about to be inserted
        rec.compare(&[i], prefix(i));

        // `j` tracks where the key currently sits
        let mut j = i;
        while j > 0 && rec.get(j - 1) > rec.get(j) {
            rec.compare(&[j - 1, j], prefix(j - 1));
            rec.swap(j - 1, j, prefix(j - 1));
            j -= 1;
        }

        rec.highlight(prefix(i + 1));
    }

    rec.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_shift_sequence() {
        let steps = insertion_sort(&[4, 1]);

        assert_eq!(steps[0].compare_indices, vec![1]);
        assert_eq!(steps[0].highlight_indices, vec![0]);
        assert_eq!(steps[1].compare_indices, vec![0, 1]);
        assert_eq!(steps[2].swap_indices, vec![0, 1]);
        assert_eq!(steps[2].array, vec![4, 1]);
        assert_eq!(steps[3].array, vec![1, 4]);
        assert_eq!(steps[3].highlight_indices, vec![0, 1]);
        assert_eq!(steps.len(), 5);
    }

    #[test]
    fn test_highlight_covers_positions_left_of_comparison() {
        let steps = insertion_sort(&[2, 3, 1]);
        let comparisons: Vec<_> = steps
            .iter()
            .filter(|s| s.compare_indices.len() == 2)
            .map(|s| (s.compare_indices.clone(), s.highlight_indices.clone()))
            .collect();

        assert_eq!(
            comparisons,
            vec![(vec![1, 2], vec![0]), (vec![0, 1], vec![])]
        );
    }
}
