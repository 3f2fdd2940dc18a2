//! FIFO queue model; index 0 is the front

use super::{Operation, OperationKind};
use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueueModel {
    items: VecDeque<i32>,
}

impl QueueModel {
    pub fn new(items: impl IntoIterator<Item = i32>) -> Self {
        QueueModel {
            items: items.into_iter().collect(),
        }
    }

    /// Items from front to rear
    pub fn items(&self) -> impl Iterator<Item = i32> + '_ {
        self.items.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn enqueue(&mut self, value: i32) -> Operation {
        self.items.push_back(value);
        Operation::done(
            OperationKind::Enqueue,
            value,
            self.items.len() - 1,
            format!("Enqueued {}", value),
        )
    }

    pub fn dequeue(&mut self) -> Operation {
        match self.items.pop_front() {
            Some(value) => Operation::done(
                OperationKind::Dequeue,
                value,
                0,
                format!("Dequeued {}", value),
            ),
            None => Operation::rejected(OperationKind::Dequeue, "Queue is empty"),
        }
    }

    pub fn peek(&self) -> Operation {
        match self.items.front() {
            Some(&value) => Operation::done(
                OperationKind::Peek,
                value,
                0,
                format!("Front element is {}", value),
            ),
            None => Operation::rejected(OperationKind::Peek, "Queue is empty"),
        }
    }

    pub fn clear(&mut self) -> Operation {
        self.items.clear();
        Operation::cleared("Queue cleared")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order() {
        let mut queue = QueueModel::default();
        assert_eq!(queue.enqueue(1).index, Some(0));
        assert_eq!(queue.enqueue(2).index, Some(1));

        let out = queue.dequeue();
        assert_eq!(out.value, Some(1));
        assert_eq!(out.message, "Dequeued 1");
        assert_eq!(queue.peek().message, "Front element is 2");
    }

    #[test]
    fn test_dequeue_empty() {
        let mut queue = QueueModel::new([3]);
        queue.clear();
        assert_eq!(queue.dequeue().message, "Queue is empty");
        assert_eq!(queue.items().count(), 0);
    }
}
