//! Address layouts for arrays, vectors and linked lists

use rustc_hash::FxHasher;
use std::hash::{Hash, Hasher};

const ARRAY_BASE: u64 = 0x1000;
const VECTOR_BASE: u64 = 0x2000;
const LIST_BASE: u64 = 0x8000;
const WORD: u64 = 4;

/// Extra slots a vector keeps past its length
pub const VECTOR_RESERVE: usize = 3;

/// How a sequence is laid out in memory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MemoryLayout {
    #[default]
    Array,
    Vector,
    LinkedList,
}

impl MemoryLayout {
    pub const ALL: [MemoryLayout; 3] = [
        MemoryLayout::Array,
        MemoryLayout::Vector,
        MemoryLayout::LinkedList,
    ];

    pub fn title(self) -> &'static str {
        match self {
            MemoryLayout::Array => "Array",
            MemoryLayout::Vector => "Vector",
            MemoryLayout::LinkedList => "Linked List",
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            MemoryLayout::Array => "Arrays store elements in contiguous memory locations",
            MemoryLayout::Vector => "Vectors use dynamic arrays with reserved capacity",
            MemoryLayout::LinkedList => {
                "Linked lists store elements in nodes scattered throughout memory"
            }
        }
    }

    /// Bullet points describing the layout's memory behaviour
    pub fn characteristics(self) -> &'static [&'static str] {
        match self {
            MemoryLayout::Array => &[
                "Fixed size allocated at compile time",
                "Direct access to any element (O(1))",
                "Elements stored in contiguous memory",
                "Memory allocated on stack (unless dynamically created)",
            ],
            MemoryLayout::Vector => &[
                "Dynamic size with automatic resizing",
                "Direct access to any element (O(1))",
                "Elements stored in contiguous memory",
                "Memory allocated on heap with extra capacity",
            ],
            MemoryLayout::LinkedList => &[
                "Dynamic size with no pre-allocation needed",
                "Sequential access only (O(n) to find element)",
                "Elements scattered throughout memory",
                "Each node contains data and a pointer to the next node",
                "Memory allocated on heap for each node individually",
            ],
        }
    }

    pub fn next(self) -> Self {
        match self {
            MemoryLayout::Array => MemoryLayout::Vector,
            MemoryLayout::Vector => MemoryLayout::LinkedList,
            MemoryLayout::LinkedList => MemoryLayout::Array,
        }
    }
}

/// One slot of a laid-out sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryCell {
    pub address: u64,
    /// `None` for reserved, unused vector capacity
    pub value: Option<i32>,
    pub label: String,
    /// Address of the next node (linked lists only); `None` is NULL
    pub next: Option<u64>,
}

/// Lay out `data` according to `kind`
pub fn layout_cells(kind: MemoryLayout, data: &[i32]) -> Vec<MemoryCell> {
    match kind {
        MemoryLayout::Array => contiguous(ARRAY_BASE, data, 0),
        MemoryLayout::Vector => contiguous(VECTOR_BASE, data, VECTOR_RESERVE),
        MemoryLayout::LinkedList => linked(data),
    }
}

/// Total slots a vector holding `len` elements reserves
pub fn vector_capacity(len: usize) -> usize {
    len + VECTOR_RESERVE
}

fn contiguous(base: u64, data: &[i32], reserved: usize) -> Vec<MemoryCell> {
    let used = data.iter().enumerate().map(|(i, &value)| MemoryCell {
        address: base + i as u64 * WORD,
        value: Some(value),
        label: format!("index: {}", i),
        next: None,
    });
    let spare = (data.len()..data.len() + reserved).map(|i| MemoryCell {
        address: base + i as u64 * WORD,
        value: None,
        label: "(reserved)".to_string(),
        next: None,
    });

    used.chain(spare).collect()
}

/// Pseudo-random but stable offset for the `index`th list node
fn scatter(index: usize) -> u64 {
    let mut hasher = FxHasher::default();
    index.hash(&mut hasher);
    hasher.finish() % 100
}

fn node_address(index: usize) -> u64 {
    LIST_BASE + (index as u64 * 20 + scatter(index)) * WORD
}

fn linked(data: &[i32]) -> Vec<MemoryCell> {
    data.iter()
        .enumerate()
        .map(|(i, &value)| MemoryCell {
            address: node_address(i),
            value: Some(value),
            label: format!("node {}", i),
            next: (i + 1 < data.len()).then(|| node_address(i + 1)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_is_contiguous() {
        let cells = layout_cells(MemoryLayout::Array, &[12, 34, 8]);
        let addrs: Vec<_> = cells.iter().map(|c| c.address).collect();
        assert_eq!(addrs, [0x1000, 0x1004, 0x1008]);
        assert_eq!(cells[2].label, "index: 2");
    }

    #[test]
    fn test_vector_reserves_capacity() {
        let cells = layout_cells(MemoryLayout::Vector, &[1, 2]);
        assert_eq!(cells.len(), vector_capacity(2));
        assert_eq!(cells[2].value, None);
        assert_eq!(cells[4].address, 0x2010);
        assert_eq!(cells[4].label, "(reserved)");
    }

    #[test]
    fn test_list_links_point_at_next_node() {
        let cells = layout_cells(MemoryLayout::LinkedList, &[5, 6, 7]);
        assert_eq!(cells[0].next, Some(cells[1].address));
        assert_eq!(cells[1].next, Some(cells[2].address));
        assert_eq!(cells[2].next, None);
        assert!(cells.iter().all(|c| c.address >= 0x8000 && c.address % 4 == 0));
        assert_eq!(cells, layout_cells(MemoryLayout::LinkedList, &[5, 6, 7]));
    }
}
