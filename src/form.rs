//! Terminal form front end.
//!
//! One input line, a key hint, and a read-only results pane, drawn with
//! ratatui over crossterm. Enter submits the headline to the controller;
//! the results pane always shows the controller's current display text.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};
use tracing::info;

use crate::controller::{Controller, State};
use crate::toolkit::Toolkit;

const TITLE: &str = "AI Headline Analyzer";
const INPUT_TITLE: &str = " Enter Your Headline ";
const RESULTS_TITLE: &str = " Results ";
const ACCENT_COLOR: Color = Color::LightBlue;
const PANE_COLOR: Color = Color::Gray;
const KEY_COLOR: Color = Color::Cyan;
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Form state: the controller plus the quit flag.
pub struct App<T> {
    controller: Controller<T>,
    should_quit: bool,
}

impl<T: Toolkit> App<T> {
    pub fn new(controller: Controller<T>) -> Self {
        Self {
            controller,
            should_quit: false,
        }
    }

    pub fn controller(&self) -> &Controller<T> {
        &self.controller
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Enter => {
                self.controller.submit();
            }
            KeyCode::Backspace => self.controller.pop_char(),
            KeyCode::Char(_) if ctrl => {}
            KeyCode::Char(c) => self.controller.push_char(c),
            _ => {}
        }
    }
}

/// Run the form until the user quits.
pub fn run<T: Toolkit>(controller: Controller<T>) -> anyhow::Result<()> {
    let mut terminal = TerminalSession::new()?;
    let mut app = App::new(controller);
    info!("form started");

    while !app.should_quit {
        terminal.draw(|frame| draw(frame, &app))?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }
    }

    info!("form closed");
    Ok(())
}

pub fn draw<T: Toolkit>(frame: &mut Frame<'_>, app: &App<T>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(3),
        ])
        .split(frame.size());

    let title = Paragraph::new(Line::from(Span::styled(
        TITLE,
        Style::default().fg(ACCENT_COLOR).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    // Keep the end of long input visible.
    let input_area = chunks[1];
    let inner_width = input_area.width.saturating_sub(2);
    let input = app.controller.input();
    let input_width = u16::try_from(Span::raw(input).width()).unwrap_or(u16::MAX);
    let offset = input_width.saturating_sub(inner_width.saturating_sub(1));
    let field = Paragraph::new(input).scroll((0, offset)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(INPUT_TITLE)
            .border_style(Style::default().fg(ACCENT_COLOR)),
    );
    frame.render_widget(field, input_area);
    frame.set_cursor(
        input_area.x + 1 + (input_width - offset).min(inner_width),
        input_area.y + 1,
    );

    frame.render_widget(Paragraph::new(hint_line()), chunks[2]);

    let results_text = match app.controller.state() {
        State::Idle => "",
        State::Displaying => app.controller.display(),
    };
    let results = Paragraph::new(results_text)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(RESULTS_TITLE)
                .border_style(Style::default().fg(PANE_COLOR)),
        );
    frame.render_widget(results, chunks[3]);
}

fn hint_line() -> Line<'static> {
    let key = Style::default().fg(KEY_COLOR).add_modifier(Modifier::BOLD);
    let label = Style::default().fg(PANE_COLOR);
    Line::from(vec![
        Span::styled("Enter", key),
        Span::styled(" analyze headline  ", label),
        Span::styled("Esc", key),
        Span::styled(" quit", label),
    ])
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> io::Result<Self> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::Analyzer;
    use crate::controller::EMPTY_INPUT_PROMPT;
    use crate::toolkit::LexiconToolkit;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;

    fn app() -> App<LexiconToolkit> {
        App::new(Controller::new(Analyzer::default()))
    }

    fn press(app: &mut App<LexiconToolkit>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App<LexiconToolkit>, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut out = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                out.push_str(buffer.get(x, y).symbol());
            }
            out.push('\n');
        }
        out
    }

    fn terminal(app: &App<LexiconToolkit>) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(70, 24)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
    }

    fn render(app: &App<LexiconToolkit>) -> String {
        buffer_text(terminal(app).backend().buffer())
    }

    #[test]
    fn test_typing_edits_the_field() {
        let mut app = app();
        type_text(&mut app, "Free tips");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.controller().input(), "Free tip");
    }

    #[test]
    fn test_enter_submits() {
        let mut app = app();
        type_text(&mut app, "Discover the Secret Now!");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.controller().state(), State::Displaying);
        assert!(app.controller().display().contains("-> Power Words:\n   discover, secret"));
        assert!(!app.should_quit());
    }

    #[test]
    fn test_enter_on_blank_field_prompts() {
        let mut app = app();
        type_text(&mut app, "   ");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.controller().display(), EMPTY_INPUT_PROMPT);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit());

        let mut app = self::app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit());
    }

    #[test]
    fn test_control_chars_are_not_typed() {
        let mut app = app();
        app.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        assert_eq!(app.controller().input(), "");
        assert!(!app.should_quit());
    }

    #[test]
    fn test_renders_empty_form() {
        let screen = render(&app());
        assert!(screen.contains(TITLE));
        assert!(screen.contains("Enter Your Headline"));
        assert!(screen.contains("Results"));
        assert!(screen.contains("Enter analyze headline"));
        assert!(!screen.contains("->"));
    }

    #[test]
    fn test_renders_results_pane() {
        let mut app = app();
        type_text(&mut app, "The cat sat on the mat");
        press(&mut app, KeyCode::Enter);

        let screen = render(&app);
        assert!(screen.contains("The cat sat on the mat"));
        assert!(screen.contains("-> Sentiment:"));
        assert!(screen.contains("Neutral (Score: 0.00)"));
        assert!(screen.contains("-> Key Nouns:"));
        assert!(screen.contains("cat, mat"));
    }

    #[test]
    fn test_long_input_keeps_tail_visible() {
        let mut app = app();
        let long = "word ".repeat(30) + "TAIL";
        type_text(&mut app, &long);

        let screen = render(&app);
        assert!(screen.contains("TAIL"));
    }

    #[test]
    fn test_cursor_follows_display_width() {
        let mut app = app();
        type_text(&mut app, "\u{65e5}\u{672c}\u{8a9e}");

        // margin 1, border 1, three double-width characters
        assert_eq!(terminal(&app).get_cursor().unwrap(), (8, 3));
    }

    #[test]
    fn test_oversized_input_keeps_cursor_in_field() {
        let mut app = app();
        app.controller.set_input("x".repeat(70_000));

        // right edge of the 66-column field
        assert_eq!(terminal(&app).get_cursor().unwrap(), (67, 3));
    }
}
