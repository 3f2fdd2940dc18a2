use crate::sorting::SortingStep;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    style::{Modifier, Style},
    widgets::{Block, Borders},
};

/// Bordered block whose border reflects focus
pub(crate) fn pane_block(title: String, is_focused: bool) -> Block<'static> {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
}

/// Colour of position `index` in `step`: swap beats compare beats settled
pub(crate) fn index_style(step: &SortingStep, index: usize) -> Style {
    if step.swap_indices.contains(&index) {
        Style::default()
            .fg(DEFAULT_THEME.swap)
            .add_modifier(Modifier::BOLD)
    } else if step.compare_indices.contains(&index) {
        Style::default()
            .fg(DEFAULT_THEME.compare)
            .add_modifier(Modifier::BOLD)
    } else if step.highlight_indices.contains(&index) {
        Style::default().fg(DEFAULT_THEME.settled)
    } else {
        Style::default().fg(DEFAULT_THEME.bar)
    }
}

/// `[1, 2, 3]`
pub(crate) fn format_values(values: &[i32]) -> String {
    let inner: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("[{}]", inner.join(", "))
}

/// `0, 1, 2`, or `-` when empty
pub(crate) fn format_indices(indices: &[usize]) -> String {
    if indices.is_empty() {
        return "-".to_string();
    }
    let inner: Vec<String> = indices.iter().map(|i| i.to_string()).collect();
    inner.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formatting() {
        assert_eq!(format_values(&[3, -1]), "[3, -1]");
        assert_eq!(format_values(&[]), "[]");
        assert_eq!(format_indices(&[]), "-");
        assert_eq!(format_indices(&[0, 4]), "0, 4");
    }
}
