//! Simplified memory-layout models for the data structure views
//!
//! - [`layout`]: contiguous array, vector with reserved capacity, and
//!   scattered linked-list nodes, each as a list of [`layout::MemoryCell`]s
//! - [`stack`]: LIFO model with push/pop/peek
//! - [`queue`]: FIFO model with enqueue/dequeue/peek
//!
//! Addresses are synthetic and fully deterministic, so the same data always
//! renders the same picture.

pub mod layout;
pub mod queue;
pub mod stack;

pub use layout::{layout_cells, MemoryCell, MemoryLayout};
pub use queue::QueueModel;
pub use stack::StackModel;

/// What a stack or queue operation did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Push,
    Pop,
    Enqueue,
    Dequeue,
    Peek,
    Clear,
}

/// Outcome of a stack or queue operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    pub kind: OperationKind,
    /// Value pushed, removed or inspected; `None` if the operation failed
    pub value: Option<i32>,
    /// Position the operation touched, for highlighting
    pub index: Option<usize>,
    pub message: String,
}

impl Operation {
    fn done(kind: OperationKind, value: i32, index: usize, message: String) -> Self {
        Operation {
            kind,
            value: Some(value),
            index: Some(index),
            message,
        }
    }

    fn rejected(kind: OperationKind, message: &str) -> Self {
        Operation {
            kind,
            value: None,
            index: None,
            message: message.to_string(),
        }
    }

    fn cleared(message: &str) -> Self {
        Operation {
            kind: OperationKind::Clear,
            value: None,
            index: None,
            message: message.to_string(),
        }
    }

    pub fn succeeded(&self) -> bool {
        self.value.is_some() || self.kind == OperationKind::Clear
    }
}
