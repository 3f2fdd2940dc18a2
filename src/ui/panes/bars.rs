//! Bar chart of the array at the current sorting step

use super::utils::{index_style, pane_block};
use crate::sorting::{Algorithm, SortingStep};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Bar, BarChart, BarGroup, Paragraph},
    Frame,
};

/// Bar width and gap that fit `count` bars into `inner_width` columns
fn bar_geometry(count: usize, inner_width: u16) -> (u16, u16) {
    let n = u16::try_from(count).unwrap_or(u16::MAX).max(1);
    let gap = if inner_width >= n.saturating_mul(3) { 1 } else { 0 };
    let bar_width = (inner_width.saturating_sub(gap * n) / n).max(1);
    (bar_width, gap)
}

/// Render the bar chart pane
pub fn render_bars_pane(
    frame: &mut Frame,
    area: Rect,
    step: Option<&SortingStep>,
    algorithm: Algorithm,
    is_focused: bool,
) {
    let block = pane_block(format!(" {} ", algorithm.display_name()), is_focused);

    let Some(step) = step.filter(|s| !s.array.is_empty()) else {
        let paragraph = Paragraph::new("(no values)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    // Bars are unsigned: shift so the smallest value still gets height 1
    let min = step.array.iter().copied().min().unwrap_or(0);
    let heights: Vec<u64> = step
        .array
        .iter()
        .map(|&v| (i64::from(v) - i64::from(min) + 1) as u64)
        .collect();
    let max = heights.iter().copied().max().unwrap_or(1);

    let inner_width = area.width.saturating_sub(2);
    let (bar_width, gap) = bar_geometry(step.array.len(), inner_width);

    let bars: Vec<Bar> = step
        .array
        .iter()
        .zip(&heights)
        .enumerate()
        .map(|(idx, (&value, &height))| {
            let style = index_style(step, idx);
            Bar::default()
                .value(height)
                .text_value(if bar_width >= 2 {
                    value.to_string()
                } else {
                    String::new()
                })
                .style(style)
                .value_style(style.add_modifier(Modifier::REVERSED))
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(gap)
        .max(max);

    frame.render_widget(chart, area);
}
