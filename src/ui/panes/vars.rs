//! Variables and counters pane
//!
//! Lists the algorithm-internal variables carried by the current step, the
//! running swap counter, the active pivot, and the algorithm's complexity
//! facts from the catalog.

use crate::catalog::AlgorithmInfo;
use crate::trace::Step;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render_vars_pane(frame: &mut Frame, area: Rect, step: &Step, info: &AlgorithmInfo) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" State ")
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let label = Style::default().fg(DEFAULT_THEME.comment);
    let value = Style::default().fg(DEFAULT_THEME.fg);

    let mut lines = vec![Line::from(vec![
        Span::styled("swaps    ", label),
        Span::styled(
            step.swap_count.to_string(),
            Style::default()
                .fg(DEFAULT_THEME.secondary)
                .add_modifier(Modifier::BOLD),
        ),
    ])];

    if let Some(pivot) = step.pivot {
        lines.push(Line::from(vec![
            Span::styled("pivot    ", label),
            Span::styled(
                format!("index {}", pivot),
                Style::default().fg(DEFAULT_THEME.bar_pivot),
            ),
        ]));
    }

    for (name, val) in &step.vars {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<9}", name), label),
            Span::styled(val.to_string(), value),
        ]));
    }

    lines.push(Line::default());
    for (name, class) in [
        ("best", info.best_case),
        ("average", info.average_case),
        ("worst", info.worst_case),
        ("space", info.space),
    ] {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<9}", name), label),
            Span::styled(class, Style::default().fg(DEFAULT_THEME.primary)),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
