//! Step types recorded by the sorting generators
//!
//! A [`SortingStep`] is a self-contained snapshot: the full working array plus
//! the positions being compared, swapped or highlighted at that instant.
//! Merge sort additionally attaches [`TreeNodeStep`]s describing the
//! recursion tree node(s) active at the step.

/// One node of the merge sort recursion tree at a given step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNodeStep<T = i32> {
    /// Recursion depth (root = 0)
    pub level: usize,
    /// Inclusive start index in the original array
    pub start: usize,
    /// Inclusive end index in the original array
    pub end: usize,
    /// `false` while dividing, `true` once the node is merging its halves
    pub is_merging: bool,
    pub left_array: Option<Vec<T>>,
    pub right_array: Option<Vec<T>>,
    pub merged_array: Option<Vec<T>>,
}

impl<T> TreeNodeStep<T> {
    /// A node in the division phase, without run snapshots
    pub fn dividing(level: usize, start: usize, end: usize) -> Self {
        TreeNodeStep {
            level,
            start,
            end,
            is_merging: false,
            left_array: None,
            right_array: None,
            merged_array: None,
        }
    }

    /// A node in the merge phase
    pub fn merging(
        level: usize,
        start: usize,
        end: usize,
        left_array: Option<Vec<T>>,
        right_array: Option<Vec<T>>,
        merged_array: Option<Vec<T>>,
    ) -> Self {
        TreeNodeStep {
            level,
            start,
            end,
            is_merging: true,
            left_array,
            right_array,
            merged_array,
        }
    }

    /// Number of array positions covered by this node
    pub fn width(&self) -> usize {
        self.end + 1 - self.start
    }
}

/// Snapshot of a sorting algorithm's state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortingStep<T = i32> {
    pub array: Vec<T>,
    pub compare_indices: Vec<usize>,
    pub swap_indices: Vec<usize>,
    pub highlight_indices: Vec<usize>,
    /// Only present in merge sort traces
    pub tree_steps: Option<Vec<TreeNodeStep<T>>>,
}

impl<T> SortingStep<T> {
    /// Check whether this step marks a comparison
    pub fn is_comparison(&self) -> bool {
        !self.compare_indices.is_empty()
    }

    /// Check whether this step announces a swap
    pub fn is_swap(&self) -> bool {
        !self.swap_indices.is_empty()
    }

    /// Check whether every index of the array is highlighted
    pub fn is_fully_sorted_marker(&self) -> bool {
        self.compare_indices.is_empty()
            && self.swap_indices.is_empty()
            && self.highlight_indices.len() == self.array.len()
            && self
                .highlight_indices
                .iter()
                .enumerate()
                .all(|(expected, &idx)| expected == idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fully_sorted_marker_needs_every_index_in_order() {
        let mut step = SortingStep {
            array: vec![1, 2, 3],
            compare_indices: Vec::new(),
            swap_indices: Vec::new(),
            highlight_indices: vec![0, 1, 2],
            tree_steps: None,
        };
        assert!(step.is_fully_sorted_marker());

        step.highlight_indices = vec![2, 1, 0];
        assert!(!step.is_fully_sorted_marker());

        step.highlight_indices = vec![0, 1, 2];
        step.compare_indices = vec![0, 1];
        assert!(!step.is_fully_sorted_marker());
        assert!(step.is_comparison());
    }

    #[test]
    fn test_tree_node_width_is_inclusive() {
        assert_eq!(TreeNodeStep::<i32>::dividing(1, 2, 4).width(), 3);
        assert_eq!(TreeNodeStep::<i32>::dividing(0, 0, 0).width(), 1);
    }
}
