//! Traversal pane: discovered nodes grouped by layer

use super::utils::pane_block;
use crate::info::{traversal_summary, traversal_use_cases};
use crate::traversal::{nodes_by_layer, Graph, TraversalMode, VisitedState};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Data needed to render the traversal pane
pub struct GraphRenderData<'a> {
    pub graph: &'a Graph,
    pub mode: TraversalMode,
    /// Snapshot at the current step
    pub visited: &'a [VisitedState],
    pub position: usize,
    pub total_steps: usize,
}

fn node_spans(graph: &Graph, state: &VisitedState, is_newest: bool) -> Vec<Span<'static>> {
    let label = graph.label(state.node_id).unwrap_or("?").to_string();
    let label_style = if is_newest {
        Style::default()
            .fg(DEFAULT_THEME.compare)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(DEFAULT_THEME.label)
            .add_modifier(Modifier::BOLD)
    };

    let mut spans = vec![
        Span::styled(format!("({})", label), label_style),
        Span::styled(
            format!("#{}", state.order + 1),
            Style::default().fg(DEFAULT_THEME.number),
        ),
    ];
    if let Some(parent) = state.parent {
        spans.push(Span::styled(
            format!(" ←{}", graph.label(parent).unwrap_or("?")),
            Style::default().fg(DEFAULT_THEME.comment),
        ));
    }
    spans
}

/// Labels of graph nodes not yet in `visited`, in graph order
fn unvisited_labels<'g>(graph: &'g Graph, visited: &[VisitedState]) -> Vec<&'g str> {
    graph
        .nodes()
        .iter()
        .filter(|node| !visited.iter().any(|s| s.node_id == node.id))
        .map(|node| node.label.as_str())
        .collect()
}

/// Render the traversal pane
pub fn render_graph_pane(frame: &mut Frame, area: Rect, data: GraphRenderData, is_focused: bool) {
    let title = format!(
        " {} Traversal - Step {} of {} ",
        data.mode.name().to_uppercase(),
        (data.position + 1).min(data.total_steps),
        data.total_steps
    );
    let block = pane_block(title, is_focused);

    let mut lines = vec![
        Line::from(Span::styled(
            traversal_summary(data.mode),
            Style::default().fg(DEFAULT_THEME.comment),
        )),
        Line::raw(""),
    ];

    let newest = data.visited.iter().map(|s| s.order).max();
    for (layer, nodes) in nodes_by_layer(data.visited).iter().enumerate() {
        let mut spans = vec![Span::styled(
            format!("Layer {:<2} ", layer),
            Style::default().fg(DEFAULT_THEME.comment),
        )];
        for (i, state) in nodes.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.extend(node_spans(data.graph, state, Some(state.order) == newest));
        }
        lines.push(Line::from(spans));
    }

    if data.visited.is_empty() {
        lines.push(Line::from(Span::styled(
            "(nothing visited)",
            Style::default().fg(DEFAULT_THEME.comment),
        )));
    }

    let pending = unvisited_labels(data.graph, data.visited);
    if !pending.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("Unvisited ", Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled(pending.join(" "), Style::default().fg(DEFAULT_THEME.fg)),
        ]));
    }

    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        "Real-World Applications",
        Style::default()
            .fg(DEFAULT_THEME.primary)
            .add_modifier(Modifier::BOLD),
    )));
    for (title, detail) in traversal_use_cases(data.mode) {
        lines.push(Line::from(vec![
            Span::styled(format!("• {}: ", title), Style::default().fg(DEFAULT_THEME.fg)),
            Span::styled(*detail, Style::default().fg(DEFAULT_THEME.comment)),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traversal::generate_traversal_trace;

    #[test]
    fn test_unvisited_labels_shrink_as_trace_advances() {
        let graph = Graph::default_graph();
        let trace = generate_traversal_trace(&graph, TraversalMode::Bfs).unwrap();

        assert_eq!(unvisited_labels(&graph, &[]).len(), 8);
        assert_eq!(
            unvisited_labels(&graph, &trace.steps[2]),
            ["D", "E", "F", "G", "H"]
        );
        assert!(unvisited_labels(&graph, trace.visited()).is_empty());
    }
}
