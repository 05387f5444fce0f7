//! Structure canvas and control panes
//!
//! The canvas maps the layout engine's world coordinates onto the character
//! grid of the pane: edges are plotted first (so node labels overwrite
//! them), then every node is drawn as a bracketed value block centered on
//! its position, with a caption over the head node.

use crate::lab::{Lab, StructureKind};
use crate::layout::{EdgeStyle, Layout, NodeId, StructureNode};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// World-space margin added around the farthest node before scaling.
const MARGIN_X: f64 = 200.0;
const MARGIN_Y: f64 = 100.0;

pub fn render_structure_pane(frame: &mut Frame, area: Rect, lab: &Lab) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", lab.kind().name()))
        .border_style(Style::default().fg(DEFAULT_THEME.border_focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if lab.layout().is_empty() {
        let empty = Paragraph::new("(empty structure)")
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(empty, inner);
        return;
    }
    if inner.width < 4 || inner.height < 3 {
        return;
    }

    let grid = draw_canvas(
        lab.layout(),
        lab.kind(),
        lab.selected(),
        inner.width as usize,
        inner.height as usize,
    );

    let lines: Vec<Line> = grid
        .into_iter()
        .map(|row| {
            Line::from(
                row.into_iter()
                    .map(|(ch, color)| {
                        Span::styled(ch.to_string(), Style::default().fg(color))
                    })
                    .collect::<Vec<_>>(),
            )
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

type Grid = Vec<Vec<(char, Color)>>;

fn draw_canvas(
    layout: &Layout,
    kind: StructureKind,
    selected: Option<NodeId>,
    width: usize,
    height: usize,
) -> Grid {
    let mut grid: Grid = vec![vec![(' ', DEFAULT_THEME.fg); width]; height];

    let (max_x, max_y) = layout.bounds();
    let world_w = max_x + MARGIN_X;
    let world_h = max_y + MARGIN_Y;
    let to_cell = |x: f64, y: f64| -> (i64, i64) {
        let cx = x / world_w * (width.saturating_sub(1)) as f64;
        let cy = y / world_h * (height.saturating_sub(1)) as f64;
        (cx.round() as i64, cy.round() as i64)
    };

    for edge in layout.edges() {
        let (Some(from), Some(to)) = (layout.node(edge.from), layout.node(edge.to)) else {
            continue;
        };
        let (x1, y1) = to_cell(from.x, from.y);
        let (x2, y2) = to_cell(to.x, to.y);
        match edge.style {
            EdgeStyle::Plain => {
                plot_line(&mut grid, x1, y1, x2, y2, '·', None);
            }
            EdgeStyle::Arrow => {
                plot_line(&mut grid, x1, y1, x2, y2, '·', Some(arrow_head(x1, y1, x2, y2)));
            }
            EdgeStyle::Parallel => {
                // Forward edges run above the row, backward edges below.
                let off = if x1 <= x2 { -1 } else { 1 };
                plot_line(
                    &mut grid,
                    x1,
                    y1 + off,
                    x2,
                    y2 + off,
                    '·',
                    Some(arrow_head(x1, y1, x2, y2)),
                );
            }
            EdgeStyle::Curved => {
                // Wrap-around edge dips below the row through a midpoint.
                let (mx, my) = to_cell((from.x + to.x) / 2.0, max_y + MARGIN_Y * 0.6);
                plot_line(&mut grid, x1, y1, mx, my, '~', None);
                plot_line(&mut grid, mx, my, x2, y2, '~', Some(arrow_head(mx, my, x2, y2)));
            }
        }
    }

    for node in layout.nodes() {
        let (cx, cy) = to_cell(node.x, node.y);
        let label = node_label(node);
        let color = if selected == Some(node.id) {
            DEFAULT_THEME.node_selected
        } else if node.is_head {
            DEFAULT_THEME.node_head
        } else {
            DEFAULT_THEME.node
        };
        let start = cx - label.chars().count() as i64 / 2;
        plot_text(&mut grid, start, cy, &label, color);
        if node.is_head {
            let caption = head_caption(kind);
            let cap_start = cx - caption.len() as i64 / 2;
            plot_text(&mut grid, cap_start, cy - 1, caption, DEFAULT_THEME.comment);
        }
    }

    grid
}

fn node_label(node: &StructureNode) -> String {
    let joined = node
        .values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("|");
    format!("[{}]", joined)
}

fn head_caption(kind: StructureKind) -> &'static str {
    match kind {
        StructureKind::Stack => "TOP",
        StructureKind::Queue => "FRONT",
        StructureKind::BinarySearchTree | StructureKind::AvlTree | StructureKind::BTree => "ROOT",
        _ => "HEAD",
    }
}

/// Pick an arrowhead glyph for the dominant direction of travel.
fn arrow_head(x1: i64, y1: i64, x2: i64, y2: i64) -> char {
    let dx = x2 - x1;
    let dy = y2 - y1;
    if dx.abs() >= dy.abs() {
        if dx >= 0 { '▶' } else { '◀' }
    } else if dy >= 0 {
        '▼'
    } else {
        '▲'
    }
}

/// Bresenham line into the grid, optionally terminating in an arrowhead.
fn plot_line(grid: &mut Grid, x1: i64, y1: i64, x2: i64, y2: i64, ch: char, head: Option<char>) {
    let dx = (x2 - x1).abs();
    let dy = -(y2 - y1).abs();
    let sx = if x1 < x2 { 1 } else { -1 };
    let sy = if y1 < y2 { 1 } else { -1 };
    let mut err = dx + dy;
    let (mut x, mut y) = (x1, y1);
    loop {
        let glyph = if (x, y) == (x2, y2) {
            head.unwrap_or(ch)
        } else {
            ch
        };
        plot_char(grid, x, y, glyph, DEFAULT_THEME.edge);
        if (x, y) == (x2, y2) {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

fn plot_text(grid: &mut Grid, x: i64, y: i64, text: &str, color: Color) {
    for (i, ch) in text.chars().enumerate() {
        plot_char(grid, x + i as i64, y, ch, color);
    }
}

fn plot_char(grid: &mut Grid, x: i64, y: i64, ch: char, color: Color) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if y < grid.len() && x < grid[y].len() {
        grid[y][x] = (ch, color);
    }
}

/// Left-hand control pane: structure facts, the pending input buffer and the
/// mutation keybinds.
pub fn render_control_pane(frame: &mut Frame, area: Rect, lab: &Lab, input_buffer: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Controls ")
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let (add_verb, del_verb) = lab.kind().verbs();
    let label = Style::default().fg(DEFAULT_THEME.comment);
    let key = Style::default()
        .fg(DEFAULT_THEME.primary)
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::from(Span::styled(
            lab.kind().description(),
            Style::default().fg(DEFAULT_THEME.fg),
        )),
        Line::default(),
        Line::from(vec![
            Span::styled("values   ", label),
            Span::styled(
                lab.values().len().to_string(),
                Style::default().fg(DEFAULT_THEME.secondary),
            ),
        ]),
        Line::from(vec![
            Span::styled("input    ", label),
            Span::styled(
                format!("{}_", input_buffer),
                Style::default().fg(DEFAULT_THEME.fg),
            ),
        ]),
        Line::default(),
    ];

    for (k, action) in [
        ("enter", add_verb),
        ("d", del_verb),
        ("u", "UPDATE selected"),
        ("c", "CLEAR all"),
        ("r", "reload preset"),
        ("tab", "select next node"),
        ("esc", "clear selection"),
        ("q", "quit"),
    ] {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<7}", k), key),
            Span::styled(action, Style::default().fg(DEFAULT_THEME.fg)),
        ]));
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner);
}
