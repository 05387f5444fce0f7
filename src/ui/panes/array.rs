//! Array bar-chart pane
//!
//! Draws one column per element, height scaled to the value range of the
//! current step, with the value printed underneath.  Colors encode the
//! step's highlight sets: comparing, swapping, sorted and the active pivot.

use crate::trace::Step;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render_array_pane(frame: &mut Frame, area: Rect, step: &Step, title: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", title))
        .border_style(Style::default().fg(DEFAULT_THEME.border_focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if step.array.is_empty() {
        let empty = Paragraph::new("(empty array)")
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(empty, inner);
        return;
    }
    if inner.height < 2 || inner.width == 0 {
        return;
    }

    // One label row at the bottom, bars above it.
    let bar_rows = (inner.height - 1) as i64;
    let min = step.array.iter().copied().min().unwrap_or(0);
    let max = step.array.iter().copied().max().unwrap_or(0);
    let range = (max - min).max(1);

    let label_width = step
        .array
        .iter()
        .map(|v| v.to_string().len())
        .max()
        .unwrap_or(1);
    let cell = label_width.max(2) + 1;

    let heights: Vec<i64> = step
        .array
        .iter()
        .map(|&v| 1 + (v - min) * (bar_rows - 1) / range)
        .collect();

    let mut lines = Vec::with_capacity(inner.height as usize);
    for row in 0..bar_rows {
        let mut spans = Vec::with_capacity(step.array.len());
        for (i, &h) in heights.iter().enumerate() {
            let filled = h >= bar_rows - row;
            let text = if filled {
                format!("{:▇<width$} ", "", width = cell - 1)
            } else {
                " ".repeat(cell)
            };
            spans.push(Span::styled(
                text,
                Style::default().fg(bar_color(step, i)),
            ));
        }
        lines.push(Line::from(spans));
    }

    let mut labels = Vec::with_capacity(step.array.len());
    for (i, v) in step.array.iter().enumerate() {
        let mut style = Style::default().fg(bar_color(step, i));
        if step.swapping.contains(&i) || step.comparing.contains(&i) {
            style = style.add_modifier(Modifier::BOLD);
        }
        labels.push(Span::styled(
            format!("{:<width$} ", v, width = cell - 1),
            style,
        ));
    }
    lines.push(Line::from(labels));

    frame.render_widget(Paragraph::new(lines), inner);
}

fn bar_color(step: &Step, index: usize) -> Color {
    if step.pivot == Some(index) {
        DEFAULT_THEME.bar_pivot
    } else if step.swapping.contains(&index) {
        DEFAULT_THEME.bar_swapping
    } else if step.comparing.contains(&index) {
        DEFAULT_THEME.bar_comparing
    } else if step.is_sorted(index) {
        DEFAULT_THEME.bar_sorted
    } else {
        DEFAULT_THEME.bar
    }
}
