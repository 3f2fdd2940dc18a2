//! LIFO stack model; index 0 is the top

use super::{Operation, OperationKind};

/// Contents shown before any operation
pub const DEFAULT_STACK: [i32; 4] = [45, 25, 8, 34];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackModel {
    items: Vec<i32>, // top first
}

impl StackModel {
    /// Build from items listed top first
    pub fn new(items: Vec<i32>) -> Self {
        StackModel { items }
    }

    /// Items from top to bottom
    pub fn items(&self) -> &[i32] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn push(&mut self, value: i32) -> Operation {
        self.items.insert(0, value);
        Operation::done(
            OperationKind::Push,
            value,
            0,
            format!("Pushed {} onto the stack", value),
        )
    }

    pub fn pop(&mut self) -> Operation {
        if self.items.is_empty() {
            return Operation::rejected(OperationKind::Pop, "Cannot pop from an empty stack");
        }
        let value = self.items.remove(0);
        Operation::done(
            OperationKind::Pop,
            value,
            0,
            format!("Popped {} from the stack", value),
        )
    }

    pub fn peek(&self) -> Operation {
        match self.items.first() {
            Some(&value) => Operation::done(
                OperationKind::Peek,
                value,
                0,
                format!("Peek: Top element is {}", value),
            ),
            None => Operation::rejected(OperationKind::Peek, "Stack is empty, nothing to peek"),
        }
    }

    pub fn clear(&mut self) -> Operation {
        self.items.clear();
        Operation::cleared("Stack cleared")
    }
}

impl Default for StackModel {
    fn default() -> Self {
        Self::new(DEFAULT_STACK.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifo_order() {
        let mut stack = StackModel::new(Vec::new());
        stack.push(1);
        stack.push(2);

        let popped = stack.pop();
        assert_eq!(popped.value, Some(2));
        assert_eq!(popped.message, "Popped 2 from the stack");
        assert_eq!(stack.peek().message, "Peek: Top element is 1");
    }

    #[test]
    fn test_empty_stack_messages() {
        let mut stack = StackModel::default();
        let cleared = stack.clear();
        assert!(cleared.succeeded());
        assert!(stack.is_empty());

        let pop = stack.pop();
        assert!(!pop.succeeded());
        assert_eq!(pop.message, "Cannot pop from an empty stack");
        assert_eq!(stack.peek().message, "Stack is empty, nothing to peek");
    }
}
