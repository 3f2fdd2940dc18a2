//! Step recording for the sorting generators
//!
//! [`StepRecorder`] owns the working copy of the input and the growing list of
//! steps. Every recorded step clones the working array, so later mutations
//! never leak into steps that were already taken.

use super::step::{SortingStep, TreeNodeStep};

/// Positions `0..count`
pub(crate) fn prefix(count: usize) -> Vec<usize> {
    (0..count).collect()
}

/// The last `count` positions of an array of length `len`, rightmost first
pub(crate) fn suffix(len: usize, count: usize) -> Vec<usize> {
    (0..count.min(len)).map(|k| len - 1 - k).collect()
}

/// Positions `start..=end`
pub(crate) fn range(start: usize, end: usize) -> Vec<usize> {
    (start..=end).collect()
}

/// Working state of one generator run
#[derive(Debug)]
pub struct StepRecorder<T> {
    arr: Vec<T>,
    steps: Vec<SortingStep<T>>,
}

impl<T: Clone> StepRecorder<T> {
    /// Start a run on a private copy of `input`
    pub fn new(input: &[T]) -> Self {
        StepRecorder {
            arr: input.to_vec(),
            steps: Vec::new(),
        }
    }

    /// Number of elements being sorted
    pub fn len(&self) -> usize {
        self.arr.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arr.is_empty()
    }

    /// Current working array
    pub fn values(&self) -> &[T] {
        &self.arr
    }

    pub fn get(&self, index: usize) -> &T {
        &self.arr[index]
    }

    pub fn set(&mut self, index: usize, value: T) {
        self.arr[index] = value;
    }

    fn snapshot(
        &self,
        compare_indices: Vec<usize>,
        swap_indices: Vec<usize>,
        highlight_indices: Vec<usize>,
        tree_steps: Option<Vec<TreeNodeStep<T>>>,
    ) -> SortingStep<T> {
        SortingStep {
            array: self.arr.clone(),
            compare_indices,
            swap_indices,
            highlight_indices,
            tree_steps,
        }
    }

    /// Record a comparison of the given positions
    pub fn compare(&mut self, indices: &[usize], highlight: Vec<usize>) {
        let step = self.snapshot(indices.to_vec(), Vec::new(), highlight, None);
        self.steps.push(step);
    }

    /// Record a swap of `a` and `b`, then perform it
    ///
    /// The recorded array is the state before the exchange.
    pub fn swap(&mut self, a: usize, b: usize, highlight: Vec<usize>) {
        let step = self.snapshot(Vec::new(), vec![a, b], highlight, None);
        self.steps.push(step);
        self.arr.swap(a, b);
    }

    /// Record a step with only highlighted positions
    pub fn highlight(&mut self, highlight: Vec<usize>) {
        let step = self.snapshot(Vec::new(), Vec::new(), highlight, None);
        self.steps.push(step);
    }

    /// Record a step annotated with merge tree nodes
    pub fn tree(
        &mut self,
        compare_indices: Vec<usize>,
        highlight: Vec<usize>,
        nodes: Vec<TreeNodeStep<T>>,
    ) {
        let step = self.snapshot(compare_indices, Vec::new(), highlight, Some(nodes));
        self.steps.push(step);
    }

    /// Record the fully sorted marker and hand back the trace
    pub fn finish(mut self) -> Vec<SortingStep<T>> {
        let all = prefix(self.arr.len());
        let step = self.snapshot(Vec::new(), Vec::new(), all, None);
        self.steps.push(step);
        self.steps
    }

    /// Like [`finish`](Self::finish), with merge tree nodes on the final step
    pub fn finish_with_tree(mut self, nodes: Vec<TreeNodeStep<T>>) -> Vec<SortingStep<T>> {
        let all = prefix(self.arr.len());
        let step = self.snapshot(Vec::new(), Vec::new(), all, Some(nodes));
        self.steps.push(step);
        self.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swap_records_pre_swap_state() {
        let mut rec = StepRecorder::new(&[2, 1]);
        rec.swap(0, 1, Vec::new());
        assert_eq!(rec.values(), &[1, 2]);

        let steps = rec.finish();
        assert_eq!(steps[0].array, vec![2, 1]);
        assert_eq!(steps[0].swap_indices, vec![0, 1]);
        assert_eq!(steps[1].array, vec![1, 2]);
        assert_eq!(steps[1].highlight_indices, vec![0, 1]);
    }

    #[test]
    fn test_snapshots_are_independent() {
        let mut rec = StepRecorder::new(&[3, 2, 1]);
        rec.compare(&[0, 1], Vec::new());
        rec.set(0, 99);
        let steps = rec.finish();
        assert_eq!(steps[0].array, vec![3, 2, 1]);
        assert_eq!(steps[1].array, vec![99, 2, 1]);
    }

    #[test]
    fn test_suffix_is_rightmost_first() {
        assert_eq!(suffix(5, 2), vec![4, 3]);
        assert_eq!(suffix(3, 7), vec![2, 1, 0]);
        assert!(suffix(0, 1).is_empty());
    }
}
