//! Sorting trace generation
//!
//! This module runs a sorting algorithm to completion on a private copy of the
//! input and returns every intermediate state as a [`SortingStep`]:
//! - [`step`]: the step and merge-tree snapshot types
//! - [`recorder`]: the working state shared by all generators
//! - one module per algorithm
//!
//! # Trace Shape
//!
//! Every trace ends with a step whose highlight set covers the whole array and
//! whose compare/swap sets are empty. Swap steps show the array *before* the
//! exchange. Inputs of length 0 or 1 produce that final step alone.
//!
//! Generation is deterministic: the same input and [`Algorithm`] always yield
//! an identical trace.

pub mod bubble;
pub mod cycle;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod recorder;
pub mod selection;
pub mod step;

pub use step::{SortingStep, TreeNodeStep};

use recorder::prefix;
use std::fmt;
use tracing::debug;

/// The sorting algorithms a trace can be generated for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    #[default]
    Bubble,
    Insertion,
    Merge,
    Quick,
    Selection,
    Cycle,
}

impl Algorithm {
    /// All algorithms, in menu order
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Bubble,
        Algorithm::Insertion,
        Algorithm::Merge,
        Algorithm::Quick,
        Algorithm::Cycle,
        Algorithm::Selection,
    ];

    /// Look up an algorithm by its short name
    ///
    /// Unknown names fall back to [`Algorithm::Bubble`].
    pub fn from_name(name: &str) -> Self {
        Self::lookup(name).unwrap_or_default()
    }

    /// Look up an algorithm by its short name, without a fallback
    pub fn lookup(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "bubble" => Some(Algorithm::Bubble),
            "insertion" => Some(Algorithm::Insertion),
            "merge" => Some(Algorithm::Merge),
            "quick" => Some(Algorithm::Quick),
            "selection" => Some(Algorithm::Selection),
            "cycle" => Some(Algorithm::Cycle),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Insertion => "insertion",
            Algorithm::Merge => "merge",
            Algorithm::Quick => "quick",
            Algorithm::Selection => "selection",
            Algorithm::Cycle => "cycle",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Merge => "Merge Sort",
            Algorithm::Quick => "Quick Sort",
            Algorithm::Selection => "Selection Sort",
            Algorithm::Cycle => "Cycle Sort",
        }
    }

    /// Next algorithm in menu order, wrapping around
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|&a| a == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous algorithm in menu order, wrapping around
    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|&a| a == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Run `algorithm` over `values` and return the full step list
///
/// `values` is never modified. Merge sort steps carry `tree_steps`; all other
/// algorithms leave it `None`.
pub fn generate_sorting_trace<T: Ord + Clone>(
    values: &[T],
    algorithm: Algorithm,
) -> Vec<SortingStep<T>> {
    if values.len() <= 1 {
        return vec![sorted_marker(values, algorithm)];
    }

    let steps = match algorithm {
        Algorithm::Bubble => bubble::bubble_sort(values),
        Algorithm::Insertion => insertion::insertion_sort(values),
        Algorithm::Merge => merge::merge_sort(values),
        Algorithm::Quick => quick::quick_sort(values),
        Algorithm::Selection => selection::selection_sort(values),
        Algorithm::Cycle => cycle::cycle_sort(values),
    };

    debug!(
        algorithm = algorithm.name(),
        len = values.len(),
        steps = steps.len(),
        "generated sorting trace"
    );

    steps
}

/// Like [`generate_sorting_trace`], selecting the algorithm by name
pub fn generate_sorting_trace_by_name<T: Ord + Clone>(
    values: &[T],
    name: &str,
) -> Vec<SortingStep<T>> {
    generate_sorting_trace(values, Algorithm::from_name(name))
}

/// The single step of a trace over zero or one element
fn sorted_marker<T: Clone>(values: &[T], algorithm: Algorithm) -> SortingStep<T> {
    let tree_steps = match algorithm {
        Algorithm::Merge => Some(vec![TreeNodeStep::merging(
            0,
            0,
            0,
            None,
            None,
            Some(values.to_vec()),
        )]),
        _ => None,
    };

    SortingStep {
        array: values.to_vec(),
        compare_indices: Vec::new(),
        swap_indices: Vec::new(),
        highlight_indices: prefix(values.len()),
        tree_steps,
    }
}
