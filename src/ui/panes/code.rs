//! Reference code pane
//!
//! Shows the catalog's C listing for the active algorithm with a scroll
//! offset, prefixed by its one-paragraph description.

use crate::catalog::AlgorithmInfo;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render_code_pane(
    frame: &mut Frame,
    area: Rect,
    info: &AlgorithmInfo,
    focused: bool,
    scroll: usize,
) {
    let border = if focused {
        DEFAULT_THEME.border_focused
    } else {
        DEFAULT_THEME.border_normal
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Reference ")
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::new();
    lines.push(Line::from(Span::styled(
        info.description,
        Style::default().fg(DEFAULT_THEME.comment),
    )));
    lines.push(Line::default());
    for code_line in info.code.lines() {
        lines.push(Line::from(Span::styled(
            code_line,
            Style::default().fg(DEFAULT_THEME.fg),
        )));
    }

    let scroll = scroll.min(lines.len().saturating_sub(1)) as u16;
    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(paragraph, inner);
}
