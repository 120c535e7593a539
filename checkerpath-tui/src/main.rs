mod app;

use std::io;
use std::time::{Duration, Instant};
use crossterm::{event::{self, Event, KeyCode, KeyEventKind}, execute, terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen}};
use ratatui::{prelude::*, widgets::*};
use checkerpath::report::{path_line, summary};
use checkerpath_core::{Grid, Path};

use app::{scroll_offset, App, Field};

fn draw_grid(frame: &mut Frame, area: Rect, grid: &Grid, highlight: Option<&Path>) {
    let pad = grid.value_width();
    let mut lines: Vec<Line> = Vec::new();
    for row in grid.rows() {
        let mut spans: Vec<Span> = Vec::new();
        for cell in row {
            let mut style = Style::default();
            if cell.coords == grid.lower_left() || cell.coords == grid.upper_right() { style = style.fg(Color::Cyan); }
            if highlight.is_some_and(|p| p.contains(cell.coords)) {
                style = style.fg(Color::Black).bg(Color::Yellow).add_modifier(Modifier::BOLD);
            }
            spans.push(Span::styled(format!(" {:>pad$} ", cell.value), style));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }
    let title = format!("Grid {}x{}", grid.width(), grid.height());
    let para = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(para, area);
}

fn draw_inputs(frame: &mut Frame, area: Rect, app: &App) {
    let field = |label: &str, value: &str, focused: bool| {
        let style = if focused { Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD) } else { Style::default() };
        vec![Span::raw(format!("{}: ", label)), Span::styled(format!("[{:<4}]", value), style), Span::raw("   ")]
    };
    let mut spans = field("Width", &app.width, app.focus == Field::Width);
    spans.extend(field("Height", &app.height, app.focus == Field::Height));
    let para = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL).title("Size"));
    frame.render_widget(para, area);
}

fn draw_report(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default().borders(Borders::ALL).title("Best paths");
    let inner = block.inner(area);
    frame.render_widget(block, area);
    let Some(result) = &app.result else { return };

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .split(inner);
    frame.render_widget(Paragraph::new(summary(result)).wrap(Wrap { trim: false }), parts[0]);

    let lines: Vec<Line> = result.best_paths.iter().enumerate().map(|(i, p)| {
        let text = path_line(p);
        if i == app.highlight {
            Line::from(Span::styled(format!("> {}", text), Style::default().fg(Color::Yellow)))
        } else {
            Line::from(format!("  {}", text))
        }
    }).collect();
    // keep the highlighted path on screen when the ties outgrow the pane
    let offset = scroll_offset(app.highlight, parts[1].height);
    frame.render_widget(Paragraph::new(lines).scroll((offset, 0)), parts[1]);
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res { eprintln!("Error: {err:#}"); }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> anyhow::Result<()> {
    loop {
        app.tick(Instant::now());
        let view: &App = app;
        terminal.draw(|f| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3),
                    Constraint::Min(5),
                    Constraint::Length(8),
                    Constraint::Length(4),
                ]).split(f.size());
            draw_inputs(f, chunks[0], view);
            match &view.grid {
                Some(grid) => {
                    let best = view.result.as_ref().and_then(|r| r.best_paths.get(view.highlight));
                    draw_grid(f, chunks[1], grid, best);
                }
                None => f.render_widget(Paragraph::new("No grid yet").block(Block::default().borders(Borders::ALL).title("Grid")), chunks[1]),
            }
            draw_report(f, chunks[2], view);
            let help = format!("Tab=switch field | 0-9/Backspace=edit | Up/Down=+/-1 | Enter or r=generate | q=quit\nStatus: {}", view.status);
            f.render_widget(Paragraph::new(help).block(Block::default().borders(Borders::ALL).title("Help")), chunks[3]);
        })?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(k) = event::read()? {
                if k.kind != KeyEventKind::Press { continue; }
                match k.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Tab | KeyCode::Left | KeyCode::Right => app.toggle_focus(),
                    KeyCode::Up => app.step(1),
                    KeyCode::Down => app.step(-1),
                    KeyCode::Backspace => app.pop_digit(),
                    KeyCode::Enter | KeyCode::Char('r') => app.generate(),
                    KeyCode::Char(ch) if ch.is_ascii_digit() => app.push_digit(ch),
                    _ => {}
                }
            }
        }
    }
}
