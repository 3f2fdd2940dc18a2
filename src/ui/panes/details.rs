//! Current step breakdown and algorithm reference card

use super::utils::{format_indices, index_style, pane_block};
use crate::info::algorithm_info;
use crate::sorting::{Algorithm, SortingStep};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

fn labeled(label: &'static str, value: String, color: ratatui::style::Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{:<10}", label),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
        Span::styled(value, Style::default().fg(color)),
    ])
}

/// Render the step details pane
pub fn render_details_pane(
    frame: &mut Frame,
    area: Rect,
    step: Option<&SortingStep>,
    algorithm: Algorithm,
    is_focused: bool,
) {
    let block = pane_block(" Step Details ".to_string(), is_focused);
    let info = algorithm_info(algorithm);
    let mut lines = Vec::new();

    if let Some(step) = step {
        // The array, with each position coloured by its role in the step
        let mut spans = vec![Span::styled(
            format!("{:<10}", "array"),
            Style::default().fg(DEFAULT_THEME.comment),
        )];
        for (idx, value) in step.array.iter().enumerate() {
            if idx > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(value.to_string(), index_style(step, idx)));
        }
        lines.push(Line::from(spans));

        lines.push(labeled(
            "compare",
            format_indices(&step.compare_indices),
            DEFAULT_THEME.compare,
        ));
        lines.push(labeled(
            "swap",
            format_indices(&step.swap_indices),
            DEFAULT_THEME.swap,
        ));
        lines.push(labeled(
            "settled",
            format_indices(&step.highlight_indices),
            DEFAULT_THEME.settled,
        ));
        lines.push(Line::raw(""));
    }

    lines.push(Line::from(Span::styled(
        info.name,
        Style::default()
            .fg(DEFAULT_THEME.primary)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(labeled("time", info.time_complexity.to_string(), DEFAULT_THEME.fg));
    lines.push(labeled("space", info.space_complexity.to_string(), DEFAULT_THEME.fg));
    lines.push(Line::from(Span::styled(
        info.description,
        Style::default().fg(DEFAULT_THEME.fg),
    )));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
