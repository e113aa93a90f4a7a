use crate::app::App;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
    Frame,
};
use tui_raster::braille::{draw_grid, draw_marker, paint_stroke, BrailleCanvas};
use tui_raster::{Algorithm, GridPoint};

/// Colour each algorithm's strokes are painted in
pub fn algorithm_color(algorithm: Algorithm) -> Color {
    match algorithm {
        Algorithm::Dda => Color::Blue,
        Algorithm::Bresenham => Color::Red,
        Algorithm::Wu => Color::Green,
    }
}

/// Wu strokes fade from dark to bright green with coverage
fn wu_shade(intensity: f32) -> Color {
    let level = 60.0 + 195.0 * intensity.clamp(0.0, 1.0);
    Color::Rgb(0, level as u8, 0)
}

/// Render the UI
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Split into canvas area and status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Canvas
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    render_canvas(frame, app, chunks[0]);
    render_status_bar(frame, app, chunks[1]);
}

fn render_canvas(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            format!(" Line Raster (pitch {}) ", app.grid.pitch()),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let (cols, rows) = (inner.width as usize, inner.height as usize);

    let mut grid = BrailleCanvas::new(cols, rows);
    if app.show_grid {
        draw_grid(&mut grid, &app.grid);
    }

    let mut strokes = Algorithm::ALL.map(|_| BrailleCanvas::new(cols, rows));
    for stroke in &app.strokes {
        let layer = Algorithm::ALL
            .iter()
            .position(|&a| a == stroke.algorithm)
            .unwrap_or(0);
        paint_stroke(&mut strokes[layer], stroke);
    }

    let mut points = BrailleCanvas::new(cols, rows);
    for &p in &app.points {
        draw_marker(&mut points, p, 1);
    }

    let cursor = app.hover_point().and_then(|p| {
        // Convert dots to character position
        let cx = (p.x / 2) as u16;
        let cy = (p.y / 4) as u16;
        (cx < inner.width && cy < inner.height).then_some((cx, cy))
    });

    let widget = CanvasWidget {
        grid,
        strokes,
        points,
        cursor,
    };
    frame.render_widget(widget, inner);
}

/// Custom widget that stacks the Braille layers
struct CanvasWidget {
    grid: BrailleCanvas,
    /// One layer per algorithm, in `Algorithm::ALL` order
    strokes: [BrailleCanvas; 3],
    points: BrailleCanvas,
    cursor: Option<(u16, u16)>,
}

impl CanvasWidget {
    /// Render a Braille layer, colouring each char from its peak intensity
    fn render_layer(
        &self,
        canvas: &BrailleCanvas,
        color: impl Fn(f32) -> Color,
        area: Rect,
        buf: &mut Buffer,
    ) {
        for (row_idx, row_str) in canvas.rows().enumerate() {
            if row_idx >= area.height as usize {
                break;
            }
            let y = area.y + row_idx as u16;

            for (col_idx, ch) in row_str.chars().enumerate() {
                if col_idx >= area.width as usize {
                    break;
                }
                // Skip empty Braille characters (U+2800)
                if ch == '\u{2800}' {
                    continue;
                }
                let x = area.x + col_idx as u16;
                let fg = color(canvas.intensity(col_idx, row_idx));
                buf[(x, y)].set_char(ch).set_fg(fg);
            }
        }
    }
}

impl Widget for CanvasWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Back to front: grid, strokes, clicked points, cursor
        self.render_layer(&self.grid, |_| Color::DarkGray, area, buf);

        for (layer, algorithm) in self.strokes.iter().zip(Algorithm::ALL) {
            match algorithm {
                Algorithm::Wu => self.render_layer(layer, wu_shade, area, buf),
                _ => self.render_layer(layer, |_| algorithm_color(algorithm), area, buf),
            }
        }

        self.render_layer(&self.points, |_| Color::White, area, buf);

        if let Some((cx, cy)) = self.cursor {
            let x = area.x + cx;
            let y = area.y + cy;
            if x < area.x + area.width && y < area.y + area.height {
                buf[(x, y)].set_char('╋').set_fg(Color::Yellow);
            }
        }
    }
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let dim = Style::default().fg(Color::DarkGray);

    let mut spans = vec![Span::styled(" ", dim)];

    // Algorithm selector: the active one in its stroke colour
    for (i, algorithm) in Algorithm::ALL.into_iter().enumerate() {
        let style = if algorithm == app.algorithm {
            Style::default()
                .fg(algorithm_color(algorithm))
                .add_modifier(Modifier::BOLD)
        } else {
            dim
        };
        spans.push(Span::styled(format!("[{}]{} ", i + 1, algorithm.label()), style));
    }

    spans.push(Span::styled(
        if app.show_grid { "[G]rid " } else { "[g]rid " },
        Style::default().fg(if app.show_grid { Color::Green } else { Color::DarkGray }),
    ));

    spans.push(Span::styled("| ", dim));
    spans.push(Span::styled(
        format!("{} pts {} lines ", app.points.len(), app.strokes.len()),
        Style::default().fg(Color::Yellow),
    ));

    if let Some(GridPoint { x, y }) = app.hover_point() {
        spans.push(Span::styled(format!("@ {x},{y} "), Style::default().fg(Color::Cyan)));
    }

    spans.push(Span::styled(
        "| click:point enter:line tab:cycle R:redraw c:clear q:quit",
        dim,
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
