mod paths;
mod store;

use std::fs::{self, File};
use std::path::PathBuf;
use std::process::ExitCode;

use griddom::{Event, Key, ScrollState, Terminal};
use simplelog::{Config, LevelFilter, WriteLogger};
use sqlgrid_lib::{GridMetrics, OutputView, ResizeState, StateStore, WidthState};
use sqlgrid_lib::table::{BODY_ID, GRID_ID};

use store::FileStateStore;

fn main() -> ExitCode {
    let Some(payload_path) = std::env::args_os().nth(1).map(PathBuf::from) else {
        eprintln!("usage: sqlgrid-tui <payload.json>");
        return ExitCode::FAILURE;
    };

    if let Ok(log_file) = File::create("sqlgrid-tui.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);
    }

    let raw = match fs::read_to_string(&payload_path) {
        Ok(raw) => raw,
        Err(err) => {
            eprintln!("cannot read {}: {err}", payload_path.display());
            return ExitCode::FAILURE;
        }
    };

    let store = FileStateStore::for_payload(&payload_path);
    let widths = store
        .as_ref()
        .and_then(StateStore::load)
        .unwrap_or_else(WidthState::new);

    let metrics = GridMetrics::compact();
    let mut output = match OutputView::from_raw(&raw, widths) {
        OutputView::Table(view) => OutputView::Table(view.with_metrics(metrics)),
        other => other,
    };

    if let Err(err) = run(&mut output, store.as_ref(), metrics) {
        eprintln!("terminal error: {err}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run(
    output: &mut OutputView,
    store: Option<&FileStateStore>,
    metrics: GridMetrics,
) -> std::io::Result<()> {
    let mut term = Terminal::new()?;
    let mut scroll = ScrollState::new();
    let mut resize = ResizeState::new(metrics.min_col_width);

    loop {
        let root = output.element(&resize, &scroll);
        term.render(&root)?;

        // Phase 2: read laid-out heights, decide the scroll cap for the
        // next frame.
        if let Some(view) = output.as_table_mut() {
            view.measure(term.layout());
        }
        scroll.clamp_to(term.layout());

        let events = term.poll(None)?;

        for event in &events {
            if let Event::Key { key, modifiers } = event {
                match key {
                    Key::Char('q') | Key::Escape => return Ok(()),
                    Key::Char('c') if modifiers.ctrl => return Ok(()),
                    Key::Up => nudge(&mut scroll, BODY_ID, 0, -1),
                    Key::Down => nudge(&mut scroll, BODY_ID, 0, 1),
                    Key::PageUp => nudge(&mut scroll, BODY_ID, 0, -(metrics.max_visible_rows as i32)),
                    Key::PageDown => nudge(&mut scroll, BODY_ID, 0, metrics.max_visible_rows as i32),
                    Key::Left => nudge(&mut scroll, GRID_ID, -4, 0),
                    Key::Right => nudge(&mut scroll, GRID_ID, 4, 0),
                    _ => {}
                }
            }
        }

        for change in resize.process_events(&events, &root, term.layout()) {
            if let Some(view) = output.as_table_mut() {
                view.apply_width(&change);
                if let Some(store) = store {
                    store.save(view.widths());
                }
            }
        }

        scroll.process_events(&events, &root, term.layout());
    }
}

fn nudge(scroll: &mut ScrollState, id: &str, dx: i32, dy: i32) {
    let current = scroll.get(id);
    let x = (current.x as i32 + dx).max(0) as u16;
    let y = (current.y as i32 + dy).max(0) as u16;
    scroll.set(id, x, y);
}
