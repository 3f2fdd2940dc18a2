// Integration tests for the memory layout and stack/queue models

use algotty::structures::layout::vector_capacity;
use algotty::structures::{layout_cells, MemoryLayout, OperationKind, QueueModel, StackModel};

#[test]
fn test_vector_reserves_capacity() {
    let cells = layout_cells(MemoryLayout::Vector, &[1, 2]);
    assert_eq!(cells.len(), vector_capacity(2));
    assert_eq!(cells.iter().filter(|c| c.value.is_none()).count(), cells.len() - 2);
}

#[test]
fn test_linked_list_chains_to_null() {
    let values = [5, 6, 7, 8];
    let cells = layout_cells(MemoryLayout::LinkedList, &values);
    assert_eq!(cells.len(), values.len());

    for pair in cells.windows(2) {
        assert_eq!(pair[0].next, Some(pair[1].address));
    }
    assert_eq!(cells.last().unwrap().next, None);
    assert_eq!(cells, layout_cells(MemoryLayout::LinkedList, &values));
}

#[test]
fn test_stack_and_queue_disciplines() {
    let mut stack = StackModel::new(Vec::new());
    stack.push(1);
    stack.push(2);
    assert_eq!(stack.pop().value, Some(2));
    assert_eq!(stack.peek().value, Some(1));

    let mut queue = QueueModel::default();
    queue.enqueue(1);
    queue.enqueue(2);
    assert_eq!(queue.dequeue().value, Some(1));
    assert_eq!(queue.peek().value, Some(2));

    let cleared = queue.clear();
    assert_eq!(cleared.kind, OperationKind::Clear);
    assert!(cleared.succeeded());
    assert!(!queue.dequeue().succeeded());
}
