//! # Introduction
//!
//! algotty turns sorting algorithms and graph traversals into replayable step
//! lists. Each trace is computed eagerly, once, and then navigated forward and
//! backward through a terminal UI built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Input → Generator → Steps → Timeline / Player → TUI
//! ```
//!
//! 1. [`sorting`]: bubble, insertion, merge, quick, selection and cycle sort,
//!    each recording [`sorting::SortingStep`]s (merge sort also records its
//!    recursion tree).
//! 2. [`traversal`]: breadth-first and depth-first walks of a labeled
//!    [`traversal::Graph`], one accumulated snapshot per discovered node.
//! 3. [`playback`]: a [`playback::Timeline`] over a finished trace and a timed
//!    [`playback::Player`] for auto-advance.
//! 4. [`structures`]: array, vector and linked-list layouts plus stack and
//!    queue models for the memory pane.
//! 5. [`config`] and [`info`]: command-line options and reference text.
//! 6. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Example
//!
//! ```
//! use algotty::sorting::{generate_sorting_trace, Algorithm};
//!
//! let steps = generate_sorting_trace(&[5, 3, 8, 1, 9], Algorithm::Bubble);
//! let last = steps.last().unwrap();
//! assert_eq!(last.array, vec![1, 3, 5, 8, 9]);
//! assert_eq!(last.highlight_indices, vec![0, 1, 2, 3, 4]);
//! ```

pub mod config;
pub mod info;
pub mod playback;
pub mod sorting;
pub mod structures;
pub mod traversal;
pub mod ui;
