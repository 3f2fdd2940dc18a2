//! Merge sort recursion tree pane
//!
//! Shows the tree node(s) attached to the current merge sort step: the split
//! being made, or the node being merged with its left/right runs and the
//! merged output so far.

use super::utils::{format_values, pane_block};
use crate::sorting::{SortingStep, TreeNodeStep};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

fn run_line(indent: &str, name: &'static str, values: Option<&[i32]>) -> Option<ListItem<'static>> {
    values.map(|values| {
        ListItem::new(Line::from(vec![
            Span::raw(format!("{}  ", indent)),
            Span::styled(
                format!("{:<7}", name),
                Style::default().fg(DEFAULT_THEME.comment),
            ),
            Span::styled(format_values(values), Style::default().fg(DEFAULT_THEME.number)),
        ]))
    })
}

fn node_items(node: &TreeNodeStep) -> Vec<ListItem<'static>> {
    let indent = "  ".repeat(node.level);
    let (phase, color) = if node.is_merging {
        ("merging", DEFAULT_THEME.tree_merge)
    } else {
        ("dividing", DEFAULT_THEME.tree_divide)
    };

    let header = Line::from(vec![
        Span::raw(indent.clone()),
        Span::styled(
            format!("L{} ", node.level),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!("[{}..{}]", node.start, node.end),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {} ({})", phase, node.width()),
            Style::default().fg(color),
        ),
    ]);

    let mut items = vec![ListItem::new(header)];
    items.extend(run_line(&indent, "left", node.left_array.as_deref()));
    items.extend(run_line(&indent, "right", node.right_array.as_deref()));
    items.extend(run_line(&indent, "merged", node.merged_array.as_deref()));
    items
}

/// Render the merge tree pane
pub fn render_tree_pane(
    frame: &mut Frame,
    area: Rect,
    step: Option<&SortingStep>,
    is_focused: bool,
) {
    let block = pane_block(" Merge Tree ".to_string(), is_focused);

    let nodes = step.and_then(|s| s.tree_steps.as_ref());
    match nodes {
        Some(nodes) if !nodes.is_empty() => {
            let items: Vec<ListItem> = nodes.iter().flat_map(node_items).collect();
            frame.render_widget(List::new(items).block(block), area);
        }
        _ => {
            let paragraph = Paragraph::new("(no tree for this step)")
                .block(block)
                .style(Style::default().fg(DEFAULT_THEME.comment));
            frame.render_widget(paragraph, area);
        }
    }
}
