//! Memory pane: sequence layout, stack and queue
//!
//! The top section lays out the input values as an array, a vector with
//! reserved capacity, or a linked list of scattered nodes. Below it, the
//! stack (top first) and queue (front first) models are drawn with the
//! element touched by the last operation highlighted.

use super::utils::pane_block;
use crate::structures::layout::vector_capacity;
use crate::structures::{
    layout_cells, MemoryLayout, Operation, OperationKind, QueueModel, StackModel,
};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Data needed to render the memory pane
pub struct MemoryRenderData<'a> {
    pub layout: MemoryLayout,
    pub values: &'a [i32],
    pub stack: &'a StackModel,
    pub queue: &'a QueueModel,
    pub last_operation: Option<&'a Operation>,
}

fn section(title: String) -> Line<'static> {
    Line::from(Span::styled(
        title,
        Style::default()
            .fg(DEFAULT_THEME.primary)
            .add_modifier(Modifier::BOLD),
    ))
}

fn cell_lines(layout: MemoryLayout, values: &[i32]) -> Vec<Line<'static>> {
    layout_cells(layout, values)
        .into_iter()
        .map(|cell| {
            let value = match cell.value {
                Some(v) => Span::styled(
                    format!("{:>5}", v),
                    Style::default().fg(DEFAULT_THEME.number),
                ),
                None => Span::styled(
                    format!("{:>5}", "·"),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
            };
            let tail = match layout {
                MemoryLayout::LinkedList => match cell.next {
                    Some(next) => format!("next: 0x{:04X}", next),
                    None => "next: NULL".to_string(),
                },
                _ => cell.label,
            };

            Line::from(vec![
                Span::styled(
                    format!("0x{:04X}", cell.address),
                    Style::default().fg(DEFAULT_THEME.label),
                ),
                Span::styled(" │", Style::default().fg(DEFAULT_THEME.comment)),
                value,
                Span::styled(" │ ", Style::default().fg(DEFAULT_THEME.comment)),
                Span::styled(tail, Style::default().fg(DEFAULT_THEME.comment)),
            ])
        })
        .collect()
}

/// `[a] [b] [c]` with the touched index emphasised
fn row_spans(values: &[i32], touched: Option<usize>) -> Vec<Span<'static>> {
    if values.is_empty() {
        return vec![Span::styled("(empty)", Style::default().fg(DEFAULT_THEME.comment))];
    }

    let mut spans = Vec::with_capacity(values.len() * 2);
    for (idx, value) in values.iter().enumerate() {
        let style = if Some(idx) == touched {
            Style::default()
                .fg(DEFAULT_THEME.compare)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(DEFAULT_THEME.number)
        };
        spans.push(Span::styled(format!("[{}]", value), style));
        spans.push(Span::raw(" "));
    }
    spans
}

/// Render the memory pane
pub fn render_memory_pane(frame: &mut Frame, area: Rect, data: MemoryRenderData, is_focused: bool) {
    let block = pane_block(" Memory ".to_string(), is_focused);
    let mut lines = vec![
        section(format!("{} ", data.layout.title())),
        Line::from(Span::styled(
            data.layout.summary(),
            Style::default().fg(DEFAULT_THEME.comment),
        )),
    ];
    lines.extend(cell_lines(data.layout, data.values));

    if data.layout == MemoryLayout::Vector {
        lines.push(Line::from(Span::styled(
            format!(
                "Size: {}, Capacity: {}",
                data.values.len(),
                vector_capacity(data.values.len())
            ),
            Style::default().fg(DEFAULT_THEME.fg),
        )));
    }
    for note in data.layout.characteristics() {
        lines.push(Line::from(Span::styled(
            format!("• {}", note),
            Style::default().fg(DEFAULT_THEME.comment),
        )));
    }

    // Only insertions leave the touched element in place
    let (stack_touch, queue_touch) = match data.last_operation {
        Some(op) => match op.kind {
            OperationKind::Push => (op.index, None),
            OperationKind::Enqueue => (None, op.index),
            _ => (None, None),
        },
        None => (None, None),
    };

    lines.push(Line::raw(""));
    lines.push(section("Stack (LIFO)".to_string()));
    let comment = Style::default().fg(DEFAULT_THEME.comment);
    let mut stack_line = vec![Span::styled("Top → ", comment)];
    stack_line.extend(row_spans(data.stack.items(), stack_touch));
    lines.push(Line::from(stack_line));

    lines.push(section("Queue (FIFO)".to_string()));
    let queue_items: Vec<i32> = data.queue.items().collect();
    let mut queue_line = vec![Span::styled("Front → ", comment)];
    queue_line.extend(row_spans(&queue_items, queue_touch));
    if !queue_items.is_empty() {
        queue_line.push(Span::styled("← Rear", comment));
    }
    lines.push(Line::from(queue_line));

    if let Some(op) = data.last_operation {
        let color = if op.succeeded() {
            DEFAULT_THEME.success
        } else {
            DEFAULT_THEME.error
        };
        lines.push(Line::from(Span::styled(
            op.message.clone(),
            Style::default().fg(color),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
