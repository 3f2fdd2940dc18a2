//! Reference text shown next to the visualizations

use crate::sorting::Algorithm;
use crate::traversal::TraversalMode;

/// Complexity and a one-paragraph explanation of a sorting algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlgorithmInfo {
    pub name: &'static str,
    pub time_complexity: &'static str,
    pub space_complexity: &'static str,
    pub description: &'static str,
}

pub fn algorithm_info(algorithm: Algorithm) -> AlgorithmInfo {
    match algorithm {
        Algorithm::Bubble => AlgorithmInfo {
            name: "Bubble Sort",
            time_complexity: "O(n²)",
            space_complexity: "O(1)",
            description: "Repeatedly steps through the list, compares adjacent elements and swaps them if they are in the wrong order.",
        },
        Algorithm::Insertion => AlgorithmInfo {
            name: "Insertion Sort",
            time_complexity: "O(n²)",
            space_complexity: "O(1)",
            description: "Builds the sorted array one item at a time by comparing each with the items before it and inserting it into its correct position.",
        },
        Algorithm::Merge => AlgorithmInfo {
            name: "Merge Sort",
            time_complexity: "O(n log n)",
            space_complexity: "O(n)",
            description: "Divides the array into halves, sorts them recursively, then merges the sorted halves.",
        },
        Algorithm::Quick => AlgorithmInfo {
            name: "Quick Sort",
            time_complexity: "O(n log n) average, O(n²) worst",
            space_complexity: "O(log n)",
            description: "Selects a 'pivot' element and partitions the array around it, then recursively sorts the sub-arrays.",
        },
        Algorithm::Cycle => AlgorithmInfo {
            name: "Cycle Sort",
            time_complexity: "O(n²)",
            space_complexity: "O(1)",
            description: "An in-place, unstable sorting algorithm that minimizes the number of memory writes.",
        },
        Algorithm::Selection => AlgorithmInfo {
            name: "Selection Sort",
            time_complexity: "O(n²)",
            space_complexity: "O(1)",
            description: "Repeatedly finds the minimum element from the unsorted part and puts it at the beginning.",
        },
    }
}

pub fn traversal_summary(mode: TraversalMode) -> &'static str {
    match mode {
        TraversalMode::Bfs => "Breadth-First Search traverses level by level using a queue",
        TraversalMode::Dfs => {
            "Depth-First Search explores as far as possible along each branch using a stack"
        }
    }
}

/// Real-world applications, as `(title, explanation)` pairs
pub fn traversal_use_cases(mode: TraversalMode) -> &'static [(&'static str, &'static str)] {
    match mode {
        TraversalMode::Bfs => &[
            (
                "Shortest Path Finding",
                "GPS navigation finding the shortest route between locations",
            ),
            ("Friend Suggestions", "Finding people within a certain degree of connection"),
            ("Web Crawlers", "Indexing web pages level by level from a starting page"),
            ("Network Broadcasting", "Sending information to all nodes in a network"),
            ("Puzzle Solving", "Finding the minimum number of moves to solve a puzzle"),
        ],
        TraversalMode::Dfs => &[
            ("Maze Solving", "Creating and navigating through complex mazes"),
            (
                "Topological Sorting",
                "Scheduling tasks with dependencies such as course prerequisites",
            ),
            ("Cycle Detection", "Finding circular dependencies in systems"),
            ("Game AI", "Path finding and decision making in strategy games"),
            ("Strongly Connected Components", "Analyzing connectivity in directed graphs"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_algorithm_has_a_card() {
        for algorithm in Algorithm::ALL {
            let info = algorithm_info(algorithm);
            assert_eq!(info.name, algorithm.display_name());
            assert!(info.time_complexity.starts_with("O("));
        }
    }

    #[test]
    fn test_use_cases_per_mode() {
        assert_eq!(traversal_use_cases(TraversalMode::Bfs).len(), 5);
        assert_eq!(traversal_use_cases(TraversalMode::Dfs)[0].0, "Maze Solving");
        assert!(traversal_summary(TraversalMode::Dfs).contains("stack"));
    }
}
