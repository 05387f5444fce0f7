//! Main TUI application state and logic

use crate::catalog;
use crate::lab::Lab;
use crate::trace::{SortAlgorithm, Step, Trace};
use crate::ui::panes::{
    render_array_pane, render_code_pane, render_control_pane, render_status_bar,
    render_structure_pane, render_vars_pane, StatusBadge,
};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Autoplay interval per speed level, slowest first.
const SPEED_INTERVALS_MS: [u64; 5] = [1000, 600, 350, 200, 100];
const DEFAULT_SPEED: usize = 2;

/// Playback state for one sort run.  The trace is materialized up front so
/// backward stepping is a cursor decrement.
pub struct SortSession {
    pub algorithm: SortAlgorithm,
    pub trace: Trace,
    pub cursor: usize,
    pub is_playing: bool,
    pub speed: usize,
    pub last_play_time: Instant,
    pub code_scroll: usize,
}

impl SortSession {
    pub fn new(algorithm: SortAlgorithm, input: &[i64]) -> Self {
        SortSession {
            algorithm,
            trace: algorithm.trace(input),
            cursor: 0,
            is_playing: false,
            speed: DEFAULT_SPEED,
            last_play_time: Instant::now(),
            code_scroll: 0,
        }
    }

    fn current_step(&self) -> &Step {
        // The cursor is clamped to the step list, which is never empty.
        self.trace
            .get(self.cursor.min(self.trace.len() - 1))
            .expect("cursor in range")
    }

    fn step_forward(&mut self) -> bool {
        if self.cursor + 1 < self.trace.len() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    fn step_backward(&mut self) -> bool {
        if self.cursor > 0 {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    fn play_interval(&self) -> Duration {
        Duration::from_millis(SPEED_INTERVALS_MS[self.speed])
    }
}

/// Interactive state for one structure lab.
pub struct LabSession {
    pub lab: Lab,
    /// Digits typed so far, committed by Enter (insert) or `u` (update).
    pub input_buffer: String,
    /// Position of the selected node in the layout's node list.
    pub sel_index: Option<usize>,
}

impl LabSession {
    pub fn new(lab: Lab) -> Self {
        LabSession {
            lab,
            input_buffer: String::new(),
            sel_index: None,
        }
    }

    /// Re-apply the positional selection to the freshly derived layout.
    fn sync_selection(&mut self) {
        let id = self
            .sel_index
            .and_then(|i| self.lab.layout().nodes().get(i))
            .map(|n| n.id);
        if id.is_none() {
            self.sel_index = None;
        }
        self.lab.select(id);
    }

    fn select_next(&mut self) {
        let count = self.lab.layout().len();
        if count == 0 {
            return;
        }
        self.sel_index = Some(match self.sel_index {
            Some(i) => (i + 1) % count,
            None => 0,
        });
        self.sync_selection();
    }

    fn take_input(&mut self) -> Option<i64> {
        let parsed = self.input_buffer.parse::<i64>().ok();
        self.input_buffer.clear();
        parsed
    }
}

/// The two top-level views.
pub enum View {
    Sort(SortSession),
    Lab(LabSession),
}

/// The main application state
pub struct App {
    pub view: View,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create an app playing back one sort run.
    pub fn sort(algorithm: SortAlgorithm, input: &[i64]) -> Self {
        App {
            view: View::Sort(SortSession::new(algorithm, input)),
            should_quit: false,
            status_message: String::from("Ready!"),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or_else(Instant::now),
        }
    }

    /// Create an app hosting one structure lab.
    pub fn lab(lab: Lab) -> Self {
        let message = format!("{} mode active", lab.kind().name());
        App {
            view: View::Lab(LabSession::new(lab)),
            should_quit: false,
            status_message: message,
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or_else(Instant::now),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Handle auto-play mode
            if let View::Sort(session) = &mut self.view {
                if session.is_playing && session.last_play_time.elapsed() >= session.play_interval()
                {
                    if session.step_forward() {
                        self.status_message = "Playing...".to_string();
                    } else {
                        session.is_playing = false;
                        self.status_message = "Playback complete".to_string();
                    }
                    session.last_play_time = Instant::now();
                }
            }

            // Poll with timeout so auto-play keeps ticking
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);
        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        match &self.view {
            View::Sort(session) => {
                let columns = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
                    .split(pane_area);
                let right_rows = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
                    .split(columns[1]);

                let step = session.current_step();
                let info = catalog::info(session.algorithm);
                render_array_pane(frame, columns[0], step, session.algorithm.name());
                render_code_pane(frame, right_rows[0], info, false, session.code_scroll);
                render_vars_pane(frame, right_rows[1], step, info);

                let badge = if session.is_playing {
                    Some(StatusBadge::Playing)
                } else if session.cursor + 1 >= session.trace.len() {
                    Some(StatusBadge::AtEnd)
                } else if session.cursor == 0 {
                    Some(StatusBadge::AtStart)
                } else {
                    None
                };
                render_status_bar(
                    frame,
                    status_area,
                    &format!("Step {}/{}", session.cursor + 1, session.trace.len()),
                    &self.status_message,
                    &[
                        ("←/→", "step"),
                        ("⎵", "play"),
                        ("-/+", "speed"),
                        ("↵/⌫", "end/start"),
                        ("q", "quit"),
                    ],
                    badge,
                );
            }
            View::Lab(session) => {
                let columns = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Length(34), Constraint::Min(0)])
                    .split(pane_area);

                render_control_pane(frame, columns[0], &session.lab, &session.input_buffer);
                render_structure_pane(frame, columns[1], &session.lab);

                render_status_bar(
                    frame,
                    status_area,
                    &format!("{} values", session.lab.values().len()),
                    &self.status_message,
                    &[
                        ("0-9", "type"),
                        ("↵", "add"),
                        ("d", "del"),
                        ("u", "upd"),
                        ("tab", "select"),
                        ("q", "quit"),
                    ],
                    None,
                );
            }
        }
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('q') || key.code == KeyCode::Char('Q') {
            self.should_quit = true;
            return;
        }
        if matches!(self.view, View::Sort(_)) {
            self.handle_sort_key(key);
        } else {
            self.handle_lab_key(key);
        }
    }

    fn handle_sort_key(&mut self, key: KeyEvent) {
        let View::Sort(session) = &mut self.view else {
            return;
        };
        match key.code {
            KeyCode::Left => {
                session.is_playing = false;
                self.status_message = if session.step_backward() {
                    "Stepped backward".to_string()
                } else {
                    "At start".to_string()
                };
            }
            KeyCode::Right => {
                session.is_playing = false;
                self.status_message = if session.step_forward() {
                    "Stepped forward".to_string()
                } else {
                    "At end".to_string()
                };
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                session.is_playing = false;
                let n = c.to_digit(10).unwrap_or(1) as usize;
                let mut stepped = 0;
                for _ in 0..n {
                    if session.step_forward() {
                        stepped += 1;
                    } else {
                        break;
                    }
                }
                self.status_message = format!("Stepped forward {} step(s)", stepped);
            }
            KeyCode::Char(' ') => {
                // Toggle auto-play (200ms debounce against key repeat)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    session.is_playing = !session.is_playing;
                    if session.is_playing {
                        session.last_play_time = Instant::now()
                            .checked_sub(session.play_interval())
                            .unwrap_or_else(Instant::now);
                        self.status_message = "Playing...".to_string();
                    } else {
                        self.status_message = "Paused".to_string();
                    }
                }
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                session.speed = (session.speed + 1).min(SPEED_INTERVALS_MS.len() - 1);
                self.status_message = format!("Speed {}", session.speed + 1);
            }
            KeyCode::Char('-') => {
                session.speed = session.speed.saturating_sub(1);
                self.status_message = format!("Speed {}", session.speed + 1);
            }
            KeyCode::Enter => {
                session.is_playing = false;
                session.cursor = session.trace.len() - 1;
                self.status_message = "Jumped to end".to_string();
            }
            KeyCode::Backspace => {
                session.is_playing = false;
                session.cursor = 0;
                self.status_message = "Jumped to start".to_string();
            }
            KeyCode::Up => {
                session.code_scroll = session.code_scroll.saturating_sub(1);
            }
            KeyCode::Down => {
                session.code_scroll = session.code_scroll.saturating_add(1);
            }
            _ => {}
        }
    }

    fn handle_lab_key(&mut self, key: KeyEvent) {
        let View::Lab(session) = &mut self.view else {
            return;
        };
        match key.code {
            KeyCode::Char(c @ '0'..='9') => {
                if session.input_buffer.len() < 6 {
                    session.input_buffer.push(c);
                }
            }
            KeyCode::Char('-') => {
                if session.input_buffer.is_empty() {
                    session.input_buffer.push('-');
                }
            }
            KeyCode::Backspace => {
                session.input_buffer.pop();
            }
            KeyCode::Enter => {
                let (verb, _) = session.lab.kind().verbs();
                match session.take_input() {
                    Some(value) => match session.lab.insert(value) {
                        Ok(()) => {
                            session.sel_index = None;
                            self.status_message = format!("{}: {}", verb, value);
                        }
                        Err(e) => self.status_message = e.to_string(),
                    },
                    None => self.status_message = "Type a value first".to_string(),
                }
            }
            KeyCode::Char('d') => match session.lab.remove() {
                Ok(removed) => {
                    session.sel_index = None;
                    let removed = removed
                        .iter()
                        .map(|v| v.to_string())
                        .collect::<Vec<_>>()
                        .join(", ");
                    self.status_message = format!("Removed: {}", removed);
                }
                Err(e) => self.status_message = e.to_string(),
            },
            KeyCode::Char('u') => match session.take_input() {
                Some(value) => match session.lab.update(value) {
                    Ok(old) => {
                        session.sel_index = None;
                        self.status_message = format!("Updated {} to {}", old, value);
                    }
                    Err(e) => self.status_message = e.to_string(),
                },
                None => self.status_message = "Type the new value first".to_string(),
            },
            KeyCode::Char('c') => {
                session.lab.clear();
                session.sel_index = None;
                self.status_message = "Structure wiped".to_string();
            }
            KeyCode::Char('r') => {
                session.lab.reset();
                session.sel_index = None;
                self.status_message = "Preset reloaded".to_string();
            }
            KeyCode::Tab | KeyCode::Right => {
                session.select_next();
                self.status_message = match session.sel_index {
                    Some(i) => format!("Selected node {}", i),
                    None => "Nothing to select".to_string(),
                };
            }
            KeyCode::Esc => {
                session.sel_index = None;
                session.lab.select(None);
                self.status_message = "Selection cleared".to_string();
            }
            _ => {}
        }
    }
}
