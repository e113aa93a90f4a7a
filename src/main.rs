mod app;
mod config;
mod ui;

use anyhow::Result;
use app::App;
use clap::Parser;
use config::Config;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseButton,
    MouseEvent, MouseEventKind,
};
use crossterm::execute;
use ratatui::DefaultTerminal;
use tui_raster::Algorithm;

fn main() -> Result<()> {
    let config = Config::parse();
    config.init_logging()?;
    let grid = config.grid()?;

    // Initialize terminal
    let mut terminal = ratatui::init();
    terminal.clear()?;

    // Enable mouse capture
    execute!(std::io::stdout(), EnableMouseCapture)?;

    let size = terminal.size()?;
    let mut app = App::new(
        size.width as usize,
        size.height as usize,
        grid,
        config.algorithm,
        !config.no_grid,
    );
    tracing::info!(pitch = grid.pitch(), algorithm = config.algorithm.name(), "editor started");

    // Run the app
    let result = run(&mut terminal, &mut app);

    // Disable mouse capture and restore terminal
    let _ = execute!(std::io::stdout(), DisableMouseCapture);
    ratatui::restore();

    result
}

/// Handle mouse events: left click places a point
fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    // Always track mouse position for cursor marker
    app.set_mouse_pos(mouse.column, mouse.row);

    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
        app.place_point(mouse.column, mouse.row);
    }
}

fn handle_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),

        KeyCode::Enter | KeyCode::Char('b') | KeyCode::Char('B') => {
            app.build_line();
        }

        // Algorithm selector
        KeyCode::Char('1') => app.select_algorithm(Algorithm::Dda),
        KeyCode::Char('2') => app.select_algorithm(Algorithm::Bresenham),
        KeyCode::Char('3') => app.select_algorithm(Algorithm::Wu),
        KeyCode::Tab => app.cycle_algorithm(),

        KeyCode::Char('g') | KeyCode::Char('G') => app.toggle_grid(),
        KeyCode::Char('R') => app.rerasterize_all(),
        KeyCode::Char('c') | KeyCode::Char('C') => app.clear(),

        _ => {}
    }
}

fn run(terminal: &mut DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        // Nothing animates, so block until the next event
        match event::read()? {
            // Only handle key press events (not release)
            Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key.code),
            Event::Mouse(mouse) => handle_mouse(app, mouse),
            Event::Resize(width, height) => app.resize(width as usize, height as usize),
            _ => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
