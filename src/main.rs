// sortlab: terminal sorting visualizer and data-structure lab

mod catalog;
mod lab;
mod layout;
mod trace;
mod ui;

use std::io;
use std::process::ExitCode;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use lab::{Lab, StructureKind};
use trace::SortAlgorithm;
use ui::App;

/// Demo array used when no values are given on the command line.
const DEMO_VALUES: [i64; 9] = [5, 3, 8, 1, 9, 2, 7, 4, 6];

fn usage(program: &str) {
    eprintln!("Usage: {} sort <algorithm> [values...]", program);
    eprintln!("       {} lab <structure>", program);
    eprintln!();
    eprintln!("Algorithms: bubble, selection, insertion, merge, quick, heap, shell");
    eprintln!("Structures: stack, queue, slist, dlist, clist, bst, avl, btree");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} sort quick 5 3 8 1     # trace quicksort over [5, 3, 8, 1]", program);
    eprintln!("  {} sort merge             # trace merge sort over the demo array", program);
    eprintln!("  {} lab bst                # explore a binary search tree", program);
}

fn parse_values(args: &[String]) -> Result<Vec<i64>, String> {
    let mut values = Vec::new();
    for arg in args {
        for piece in arg.split(',').filter(|p| !p.is_empty()) {
            let value = piece
                .trim()
                .parse::<i64>()
                .map_err(|_| format!("not an integer: '{}'", piece.trim()))?;
            values.push(value);
        }
    }
    Ok(values)
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    let program = args
        .first()
        .map(|s| s.as_str())
        .unwrap_or("sortlab")
        .to_string();

    let mut app = match args.get(1).map(|s| s.as_str()) {
        Some("sort") => {
            let Some(name) = args.get(2) else {
                eprintln!("Error: no algorithm given");
                eprintln!();
                usage(&program);
                return ExitCode::FAILURE;
            };
            let Some(algorithm) = SortAlgorithm::from_name(name) else {
                eprintln!("Error: unknown algorithm '{}'", name);
                eprintln!();
                usage(&program);
                return ExitCode::FAILURE;
            };
            let values = if args.len() > 3 {
                match parse_values(&args[3..]) {
                    Ok(values) => values,
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        return ExitCode::FAILURE;
                    }
                }
            } else {
                DEMO_VALUES.to_vec()
            };
            eprintln!(
                "Tracing {} over {} value(s)...",
                algorithm.name(),
                values.len()
            );
            let app = App::sort(algorithm, &values);
            if let ui::app::View::Sort(session) = &app.view {
                eprintln!("Total steps: {}", session.trace.len());
            }
            app
        }
        Some("lab") => {
            let Some(name) = args.get(2) else {
                eprintln!("Error: no structure given");
                eprintln!();
                usage(&program);
                return ExitCode::FAILURE;
            };
            let Some(kind) = StructureKind::from_name(name) else {
                eprintln!("Error: unknown structure '{}'", name);
                eprintln!();
                usage(&program);
                return ExitCode::FAILURE;
            };
            App::lab(Lab::new(kind))
        }
        _ => {
            eprintln!("Error: expected a mode ('sort' or 'lab')");
            eprintln!();
            usage(&program);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = run_tui(&mut app) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run_tui(app: &mut App) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}
