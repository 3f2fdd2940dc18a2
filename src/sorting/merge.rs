//! Top-down merge sort with recursion tree annotations
//!
//! Every step of a merge sort trace carries the tree node(s) active at that
//! moment: the split being performed, or the node currently merging its two
//! runs together with the merged output so far.

use super::recorder::{range, StepRecorder};
use super::step::{SortingStep, TreeNodeStep};

pub fn merge_sort<T: Ord + Clone>(input: &[T]) -> Vec<SortingStep<T>> {
    let mut rec = StepRecorder::new(input);
    let last = rec.len().saturating_sub(1);

    rec.tree(
        Vec::new(),
        Vec::new(),
        vec![TreeNodeStep::dividing(0, 0, last)],
    );

    if !rec.is_empty() {
        sort_range(&mut rec, 0, last, 0);
    }

    let merged = rec.values().to_vec();
    rec.finish_with_tree(vec![TreeNodeStep::merging(
        0,
        0,
        last,
        None,
        None,
        Some(merged),
    )])
}

fn sort_range<T: Ord + Clone>(rec: &mut StepRecorder<T>, start: usize, end: usize, level: usize) {
    if start >= end {
        return;
    }

    let mid = start + (end - start) / 2;

    rec.tree(
        Vec::new(),
        Vec::new(),
        vec![
            TreeNodeStep::dividing(level, start, end),
            TreeNodeStep::dividing(level + 1, start, mid),
            TreeNodeStep::dividing(level + 1, mid + 1, end),
        ],
    );

    sort_range(rec, start, mid, level + 1);
    sort_range(rec, mid + 1, end, level + 1);

    let left = rec.values()[start..=mid].to_vec();
    let right = rec.values()[mid + 1..=end].to_vec();

    rec.tree(
        Vec::new(),
        Vec::new(),
        vec![TreeNodeStep::merging(
            level,
            start,
            end,
            Some(left.clone()),
            Some(right.clone()),
            None,
        )],
    );

    let mut merged = Vec::with_capacity(end - start + 1);
    let (mut i, mut j) = (0, 0);

    while i < left.len() && j < right.len() {
        rec.tree(
            vec![start + i, mid + 1 + j],
            Vec::new(),
            vec![TreeNodeStep::merging(
                level,
                start,
                end,
                Some(left.clone()),
                Some(right.clone()),
                Some(merged.clone()),
            )],
        );

        // `<=` keeps equal elements in input order
        if left[i] <= right[j] {
            merged.push(left[i].clone());
            i += 1;
        } else {
            merged.push(right[j].clone());
            j += 1;
        }
    }

    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);

    for (offset, value) in merged.iter().enumerate() {
        rec.set(start + offset, value.clone());
    }

    rec.tree(
        Vec::new(),
        range(start, end),
        vec![TreeNodeStep::merging(
            level,
            start,
            end,
            Some(left),
            Some(right),
            Some(merged),
        )],
    );
}
