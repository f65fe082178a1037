//! Full-screen terminal presenter for the deck.
//!
//! One loop: poll the session, draw the current card, feed mouse clicks
//! into the navigator. Click position maps exactly like the original
//! surface: left half back, right half forward, any click starts the
//! show from the intro.

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io::{self, Stdout};
use std::time::Duration;

use wrapped_client::{ReportState, Session};
use wrapped_core::{
    build_deck, fetch_error_card, intro_card, loading_card, Navigator, Slide, SlideCard,
    SLIDE_COUNT,
};

pub fn run(session: Session) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = show_loop(&mut terminal, session);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    res
}

fn show_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut session: Session) -> Result<()> {
    let mut nav = Navigator::new(SLIDE_COUNT);
    // Built once when the fetch settles; an error replaces every data
    // slide's content while navigation stays live.
    let mut deck: Option<Result<Vec<SlideCard>, String>> = None;

    loop {
        if deck.is_none() {
            match session.poll() {
                ReportState::Ready(view) => deck = Some(Ok(build_deck(view))),
                ReportState::Failed(message) => deck = Some(Err(message.clone())),
                ReportState::Pending => {}
            }
        }

        let card = match nav.current() {
            Slide::Intro => intro_card(),
            Slide::Showing(i) => match &deck {
                None => loading_card(),
                Some(Err(message)) => fetch_error_card(message),
                Some(Ok(cards)) => cards[i].clone(),
            },
        };

        terminal.draw(|f| draw_card(f, &card, &nav))?;

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => {
                    if matches!(mouse.kind, MouseEventKind::Down(_)) {
                        let width = f64::from(terminal.size()?.width);
                        nav.tap(f64::from(mouse.column), width);
                    }
                }
                _ => {}
            }
        }
    }
}

fn draw_card(f: &mut Frame, card: &SlideCard, nav: &Navigator) {
    let mut lines: Vec<Line> = Vec::new();
    if !card.title.is_empty() {
        lines.push(Line::from(Span::styled(
            card.title.clone(),
            Style::default().fg(Color::Cyan),
        )));
        lines.push(Line::from(""));
    }
    if !card.headline.is_empty() {
        lines.push(Line::from(Span::styled(
            card.headline.clone(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));
    }
    for text in &card.lines {
        lines.push(Line::from(text.clone()));
    }

    let card_height = lines.len() as u16 + 2; // borders

    let chunks = Layout::default()
        .direction(LayoutDirection::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(card_height),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    let widget = Paragraph::new(Text::from(lines))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(widget, chunks[1]);

    if nav.started() {
        let dots = Paragraph::new(indicator_row(nav)).alignment(Alignment::Center);
        f.render_widget(dots, chunks[3]);
    }
}

/// Dot row under the deck. The arrow marks which way the last transition
/// went; it stands in for the slide-in animation of the original surface.
fn indicator_row(nav: &Navigator) -> String {
    let row = (0..nav.slide_count())
        .map(|i| if i == nav.index() { "●" } else { "○" })
        .collect::<Vec<_>>()
        .join(" ");

    match nav.direction().offset() {
        -1 => format!("< {row}"),
        1 => format!("{row} >"),
        _ => row,
    }
}
