use std::io;
use std::process::{Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use ratatui::Terminal;
use tracing::{debug, info, warn};

use neural_core::actions::UserAction;
use neural_core::config::{Config, IdentityConfig};
use neural_core::portfolio::{EducationKind, PortfolioData};
use neural_core::reducer::TerminalEffect;
use neural_core::session::Session;
use neural_core::state::{LineId, LineKind, SessionMode, ShellState, UiTheme, WindowChrome};

const POLL_CEILING: Duration = Duration::from_millis(16);
const PAGE_ROWS: isize = 10;

struct TuiGuard;

impl Drop for TuiGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            io::stdout(),
            LeaveAlternateScreen,
            DisableMouseCapture,
            DisableBracketedPaste,
            crossterm::cursor::Show
        );
    }
}

struct App {
    session: Session,
    identity: IdentityConfig,
    theme: UiTheme,
    started: Instant,
    /// Logical time already consumed before `started`.
    clock_offset_ms: u64,
    /// One-line feedback for host-side actions (clipboard, browser).
    notice: Option<String>,
}

impl App {
    fn clock_ms(&self) -> u64 {
        let elapsed = u64::try_from(self.started.elapsed().as_millis()).unwrap_or(u64::MAX);
        self.clock_offset_ms.saturating_add(elapsed)
    }
}

pub fn run(config: Config, data: Arc<PortfolioData>) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = Session::new(data, config.timing);
    session.activate();
    if !config.ui.boot {
        session.run_until_idle();
    }
    let mut app = App {
        clock_offset_ms: session.now_ms(),
        session,
        identity: config.identity,
        theme: config.ui.theme,
        started: Instant::now(),
        notice: None,
    };

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste,
        crossterm::cursor::Hide
    )?;
    let _guard = TuiGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);
    let cancelled = app.session.teardown();
    info!(cancelled, "terminal closed");
    result.map_err(|e| e.into())
}

#[derive(Clone, Copy)]
struct UiPalette {
    accent: Color,
    accent_alt: Color,
    system: Color,
    user: Color,
    output: Color,
    danger: Color,
    muted: Color,
    border: Color,
    panel_bg: Color,
    selected_bg: Color,
}

fn palette_for(theme: UiTheme) -> UiPalette {
    match theme {
        UiTheme::Matrix => UiPalette {
            accent: Color::LightGreen,
            accent_alt: Color::Green,
            system: Color::Cyan,
            user: Color::LightGreen,
            output: Color::Green,
            danger: Color::LightRed,
            muted: Color::DarkGray,
            border: Color::Green,
            panel_bg: Color::Black,
            selected_bg: Color::Rgb(8, 40, 12),
        },
        UiTheme::Cyberpunk => UiPalette {
            accent: Color::Magenta,
            accent_alt: Color::Cyan,
            system: Color::LightCyan,
            user: Color::LightMagenta,
            output: Color::White,
            danger: Color::LightRed,
            muted: Color::Gray,
            border: Color::Magenta,
            panel_bg: Color::Black,
            selected_bg: Color::Rgb(58, 0, 58),
        },
        UiTheme::Amber => UiPalette {
            accent: Color::LightYellow,
            accent_alt: Color::Yellow,
            system: Color::Yellow,
            user: Color::LightYellow,
            output: Color::Rgb(255, 176, 0),
            danger: Color::LightRed,
            muted: Color::Gray,
            border: Color::Yellow,
            panel_bg: Color::Black,
            selected_bg: Color::Rgb(42, 28, 0),
        },
    }
}

fn kind_style(kind: LineKind, palette: UiPalette) -> Style {
    match kind {
        LineKind::System => Style::default().fg(palette.system),
        LineKind::User => Style::default()
            .fg(palette.user)
            .add_modifier(Modifier::BOLD),
        LineKind::Output => Style::default().fg(palette.output),
        LineKind::Error => Style::default().fg(palette.danger),
    }
}

/// Screen regions of the terminal window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct WindowLayout {
    header: Rect,
    body: Rect,
    input: Rect,
    status: Rect,
}

fn window_layout(area: Rect, chrome: WindowChrome) -> WindowLayout {
    let margin = if chrome == WindowChrome::Maximized { 0 } else { 1 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(margin)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(3), // Input
            Constraint::Length(1), // Status bar
        ])
        .split(area);
    WindowLayout {
        header: chunks[0],
        body: chunks[1],
        input: chunks[2],
        status: chunks[3],
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChromeButton {
    Close,
    Minimize,
    Maximize,
}

/// Column offsets of the header dots, measured from the header's left border.
const CHROME_BUTTONS: [(ChromeButton, u16); 3] = [
    (ChromeButton::Close, 1),
    (ChromeButton::Minimize, 3),
    (ChromeButton::Maximize, 5),
];

fn chrome_button_at(header: Rect, column: u16, row: u16) -> Option<ChromeButton> {
    if row != header.y + 1 {
        return None;
    }
    CHROME_BUTTONS
        .iter()
        .find(|(_, offset)| column == header.x + offset)
        .map(|(button, _)| *button)
}

/// Splits `text` into rows no wider than `width` display cells.
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![String::new()];
    }
    let mut rows = Vec::new();
    let mut row = String::new();
    let mut row_width = 0;
    for ch in text.chars() {
        let ch_width = Span::raw(ch.to_string()).width();
        if row_width + ch_width > width && !row.is_empty() {
            rows.push(std::mem::take(&mut row));
            row_width = 0;
        }
        row.push(ch);
        row_width += ch_width;
    }
    rows.push(row);
    rows
}

/// One rendered body row and the buffer line it came from.
struct BodyRow {
    line: LineId,
    text: String,
    kind: LineKind,
    clickable: bool,
}

/// The rows visible in a body of `width` x `height`, honouring the
/// scroll offset (counted in buffer lines from the tail).
fn visible_rows(state: &ShellState, prompt: &str, width: u16, height: u16) -> Vec<BodyRow> {
    let lines = state.lines.as_slice();
    let end = lines.len().saturating_sub(state.view.scroll_from_bottom);
    let mut rows = Vec::new();
    for line in &lines[..end] {
        let text = if line.kind == LineKind::User {
            line.text.replacen('>', prompt, 1)
        } else {
            line.text.clone()
        };
        for piece in wrap_text(&text, usize::from(width)) {
            rows.push(BodyRow {
                line: line.id,
                text: piece,
                kind: line.kind,
                clickable: line.is_clickable(),
            });
        }
    }
    let skip = rows.len().saturating_sub(usize::from(height));
    rows.split_off(skip)
}

fn inner(area: Rect) -> Rect {
    Block::default().borders(Borders::ALL).inner(area)
}

fn line_at(app: &App, area: Rect, column: u16, row: u16) -> Option<LineId> {
    let layout = window_layout(area, app.session.state().chrome);
    let body = inner(layout.body);
    if column < body.x || column >= body.x + body.width {
        return None;
    }
    if row < body.y || row >= body.y + body.height {
        return None;
    }
    let rows = visible_rows(
        app.session.state(),
        &app.identity.prompt,
        body.width,
        body.height,
    );
    rows.get(usize::from(row - body.y))
        .filter(|r| r.clickable)
        .map(|r| r.line)
}

enum KeyHandlerResult {
    Continue(Vec<TerminalEffect>),
    Exit,
}

fn handle_portfolio_keys(key: KeyEvent, app: &mut App, area: Rect) -> KeyHandlerResult {
    let max = portfolio_viewport(app, area).max_scroll;
    let scroll =
        |app: &mut App, delta: i32| app.session.dispatch(UserAction::ScrollPortfolio { delta, max });
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        let effects = match key.code {
            KeyCode::Char('o') => app.session.dispatch(UserAction::OpenFocusedLink),
            KeyCode::Char('y') => app.session.dispatch(UserAction::CopyFocusedLink),
            _ => Vec::new(),
        };
        return KeyHandlerResult::Continue(effects);
    }

    let effects = match key.code {
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => {
            app.session.dispatch(UserAction::BackToTerminal)
        }
        KeyCode::Up | KeyCode::Char('k') => scroll(app, -1),
        KeyCode::Down | KeyCode::Char('j') => scroll(app, 1),
        KeyCode::PageUp => scroll(app, -(PAGE_ROWS as i32)),
        KeyCode::PageDown => scroll(app, PAGE_ROWS as i32),
        KeyCode::Home => scroll(app, i32::MIN),
        KeyCode::End => scroll(app, i32::MAX),
        KeyCode::Tab | KeyCode::BackTab => {
            let step = if key.code == KeyCode::Tab {
                UserAction::FocusNextLink
            } else {
                UserAction::FocusPrevLink
            };
            let mut effects = app.session.dispatch(step);
            effects.extend(scroll_to_focused_link(app, area));
            effects
        }
        KeyCode::Enter => app.session.dispatch(UserAction::OpenFocusedLink),
        KeyCode::Char('y') => app.session.dispatch(UserAction::CopyFocusedLink),
        _ => Vec::new(),
    };
    KeyHandlerResult::Continue(effects)
}

fn handle_terminal_keys(key: KeyEvent, session: &mut Session) -> KeyHandlerResult {
    if key.modifiers.contains(KeyModifiers::ALT) {
        let effects = match key.code {
            KeyCode::Char('c') => session.dispatch(UserAction::CloseWindow),
            KeyCode::Char('m') => session.dispatch(UserAction::ToggleMinimize),
            KeyCode::Char('x') => session.dispatch(UserAction::ToggleMaximize),
            _ => Vec::new(),
        };
        return KeyHandlerResult::Continue(effects);
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        let effects = match key.code {
            KeyCode::Char('o') => session.dispatch(UserAction::OpenFocusedLink),
            KeyCode::Char('y') => session.dispatch(UserAction::CopyFocusedLink),
            KeyCode::Char('u') => session.dispatch(UserAction::ClearInput),
            _ => Vec::new(),
        };
        return KeyHandlerResult::Continue(effects);
    }

    let effects = match key.code {
        KeyCode::Enter => session.dispatch(UserAction::Submit),
        KeyCode::Backspace => session.dispatch(UserAction::InputBackspace),
        KeyCode::Esc => session.dispatch(UserAction::ClearInput),
        KeyCode::Up => session.dispatch(UserAction::HistoryUp),
        KeyCode::Down => session.dispatch(UserAction::HistoryDown),
        KeyCode::PageUp => session.dispatch(UserAction::ScrollLines(PAGE_ROWS)),
        KeyCode::PageDown => session.dispatch(UserAction::ScrollLines(-PAGE_ROWS)),
        KeyCode::End => session.dispatch(UserAction::ScrollToBottom),
        KeyCode::Tab => session.dispatch(UserAction::FocusNextLink),
        KeyCode::BackTab => session.dispatch(UserAction::FocusPrevLink),
        KeyCode::Char(c) => session.dispatch(UserAction::InputChar(c)),
        _ => Vec::new(),
    };
    KeyHandlerResult::Continue(effects)
}

fn handle_key_event(key: KeyEvent, app: &mut App, area: Rect) -> KeyHandlerResult {
    if key.kind == KeyEventKind::Release {
        return KeyHandlerResult::Continue(Vec::new());
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return KeyHandlerResult::Exit;
    }
    app.notice = None;
    match app.session.state().mode {
        SessionMode::Portfolio => handle_portfolio_keys(key, app, area),
        SessionMode::Terminal => handle_terminal_keys(key, &mut app.session),
    }
}

fn handle_mouse_event(mouse: MouseEvent, app: &mut App, area: Rect) -> Vec<TerminalEffect> {
    if app.session.state().mode == SessionMode::Portfolio {
        let view = portfolio_viewport(app, area);
        let scroll = |delta| UserAction::ScrollPortfolio {
            delta,
            max: view.max_scroll,
        };
        return match mouse.kind {
            MouseEventKind::ScrollUp => app.session.dispatch(scroll(-3)),
            MouseEventKind::ScrollDown => app.session.dispatch(scroll(3)),
            MouseEventKind::Down(MouseButton::Left) => {
                match view.link_at(mouse.column, mouse.row) {
                    Some(index) => app.session.dispatch(UserAction::ActivatePortfolioLink(index)),
                    None => Vec::new(),
                }
            }
            _ => Vec::new(),
        };
    }

    match mouse.kind {
        MouseEventKind::ScrollUp => app.session.dispatch(UserAction::ScrollLines(3)),
        MouseEventKind::ScrollDown => app.session.dispatch(UserAction::ScrollLines(-3)),
        MouseEventKind::Down(MouseButton::Left) => {
            let layout = window_layout(area, app.session.state().chrome);
            if let Some(button) = chrome_button_at(layout.header, mouse.column, mouse.row) {
                let action = match button {
                    ChromeButton::Close => UserAction::CloseWindow,
                    ChromeButton::Minimize => UserAction::ToggleMinimize,
                    ChromeButton::Maximize => UserAction::ToggleMaximize,
                };
                app.session.dispatch(action)
            } else if let Some(line) = line_at(app, area, mouse.column, mouse.row) {
                app.session.dispatch(UserAction::ActivateLine(line))
            } else {
                Vec::new()
            }
        }
        _ => Vec::new(),
    }
}

fn open_link(target: &str) -> io::Result<()> {
    let mut cmd = if cfg!(target_os = "macos") {
        Command::new("open")
    } else if cfg!(target_os = "windows") {
        let mut c = Command::new("cmd");
        c.args(["/C", "start", ""]);
        c
    } else {
        Command::new("xdg-open")
    };
    cmd.arg(target)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
}

fn apply_host_effects(app: &mut App, effects: Vec<TerminalEffect>) {
    for effect in effects {
        match effect {
            TerminalEffect::OpenLink(target) => match open_link(&target) {
                Ok(()) => {
                    debug!(%target, "opened link");
                    app.notice = Some(format!("opened {target}"));
                }
                Err(err) => {
                    warn!(%target, %err, "failed to open link");
                    app.notice = Some(format!("could not open {target}"));
                }
            },
            TerminalEffect::CopyToClipboard(text) => {
                let copied = arboard::Clipboard::new()
                    .and_then(|mut clipboard| clipboard.set_text(text.clone()));
                app.notice = Some(match copied {
                    Ok(()) => format!("copied {text}"),
                    Err(err) => {
                        warn!(%err, "clipboard unavailable");
                        "clipboard unavailable".to_string()
                    }
                });
            }
            _ => {}
        }
    }
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        let now = app.clock_ms();
        let effects = app.session.advance_to(now);
        apply_host_effects(app, effects);

        terminal.draw(|f| ui(f, app))?;

        let timeout = app
            .session
            .next_deadline()
            .map(|due| Duration::from_millis(due.saturating_sub(app.clock_ms())))
            .map_or(POLL_CEILING, |wait| wait.min(POLL_CEILING));

        if event::poll(timeout)? {
            let size = terminal.size()?;
            let area = Rect::new(0, 0, size.width, size.height);
            let mut effects = Vec::new();
            match event::read()? {
                Event::Key(key) => match handle_key_event(key, app, area) {
                    KeyHandlerResult::Continue(e) => effects.extend(e),
                    KeyHandlerResult::Exit => return Ok(()),
                },
                Event::Mouse(mouse) => effects.extend(handle_mouse_event(mouse, app, area)),
                Event::Paste(text) => {
                    effects.extend(app.session.dispatch(UserAction::InputPaste(text)))
                }
                _ => {}
            }
            apply_host_effects(app, effects);
        }
    }
}

fn get_spinner(now_ms: u64) -> &'static str {
    let frames = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
    frames[(now_ms / 100) as usize % frames.len()]
}

fn ui(f: &mut ratatui::Frame, app: &App) {
    let state = app.session.state();
    let palette = palette_for(app.theme);
    let area = f.area();
    if state.mode == SessionMode::Portfolio {
        render_portfolio(f, area, app, palette);
        return;
    }

    let layout = window_layout(area, state.chrome);
    let dim = if state.chrome == WindowChrome::Minimized {
        Modifier::DIM
    } else {
        Modifier::empty()
    };
    let (border_type, border_color) = if state.chrome == WindowChrome::Maximized {
        (BorderType::Thick, palette.accent)
    } else {
        (BorderType::Plain, palette.border)
    };
    let framed = |title: Option<&'static str>| {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(Style::default().fg(border_color).add_modifier(dim))
            .style(Style::default().bg(palette.panel_bg));
        match title {
            Some(title) => block.title(title),
            None => block,
        }
    };

    // Header
    let header = Line::from(vec![
        Span::styled("●", Style::default().fg(Color::Red)),
        Span::raw(" "),
        Span::styled("●", Style::default().fg(Color::Yellow)),
        Span::raw(" "),
        Span::styled("●", Style::default().fg(Color::Green)),
        Span::raw("  "),
        Span::styled(
            app.identity.title.clone(),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {}", app.identity.version),
            Style::default().fg(palette.muted),
        ),
        Span::styled(
            format!("  [{}]", state.chrome.label()),
            Style::default().fg(palette.muted),
        ),
    ]);
    f.render_widget(
        Paragraph::new(header)
            .style(Style::default().add_modifier(dim))
            .block(framed(None)),
        layout.header,
    );

    // Body
    let body = inner(layout.body);
    let rows: Vec<Line> = visible_rows(state, &app.identity.prompt, body.width, body.height)
        .into_iter()
        .map(|row| {
            let mut style = kind_style(row.kind, palette).add_modifier(dim);
            if row.clickable {
                style = style.add_modifier(Modifier::UNDERLINED);
                if state.view.focused_link == Some(row.line) {
                    style = style.bg(palette.selected_bg).fg(palette.accent);
                }
            }
            Line::from(Span::styled(row.text, style))
        })
        .collect();
    let body_title = if state.view.scroll_from_bottom > 0 {
        Some("scrolled · End to follow")
    } else {
        None
    };
    f.render_widget(Paragraph::new(rows).block(framed(body_title)), layout.body);

    // Input
    let now = app.session.now_ms();
    let input_line = if state.is_busy() {
        Line::from(vec![
            Span::styled(
                format!("{} ", app.identity.prompt),
                Style::default().fg(palette.muted),
            ),
            Span::styled(
                format!("{} processing...", get_spinner(now)),
                Style::default().fg(palette.muted),
            ),
        ])
    } else {
        Line::from(vec![
            Span::styled(
                format!("{} ", app.identity.prompt),
                Style::default().fg(palette.accent_alt),
            ),
            Span::styled(state.input.text.clone(), Style::default().fg(palette.user)),
            Span::styled("█", Style::default().fg(palette.accent)),
        ])
    };
    f.render_widget(
        Paragraph::new(input_line)
            .style(Style::default().add_modifier(dim))
            .block(framed(None)),
        layout.input,
    );

    render_status_bar(f, layout.status, app, palette);
}

fn render_status_bar(f: &mut ratatui::Frame, area: Rect, app: &App, palette: UiPalette) {
    let state = app.session.state();
    let clock = chrono::Local::now().format("%H:%M:%S").to_string();
    let mut spans = vec![
        Span::styled("STATUS: ", Style::default().fg(palette.muted)),
        Span::styled("ONLINE", Style::default().fg(palette.accent)),
        Span::styled(" | SECTION: ", Style::default().fg(palette.muted)),
        Span::styled(
            state.section.label().to_uppercase(),
            Style::default().fg(palette.accent),
        ),
        Span::styled(" | CPU: ", Style::default().fg(palette.muted)),
        Span::styled("98%", Style::default().fg(palette.accent)),
        Span::styled(" | ", Style::default().fg(palette.muted)),
        Span::styled(clock, Style::default().fg(palette.accent_alt)),
    ];
    if let Some(notice) = &app.notice {
        spans.push(Span::styled(
            format!(" | {notice}"),
            Style::default().fg(palette.system),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// One pre-wrapped row of the portfolio view.
struct PortfolioRow {
    line: Line<'static>,
    /// Index into `PortfolioData::link_targets` for link rows.
    link: Option<usize>,
}

struct PortfolioRows {
    width: usize,
    palette: UiPalette,
    focused: Option<usize>,
    next_link: usize,
    rows: Vec<PortfolioRow>,
}

impl PortfolioRows {
    fn push(&mut self, text: &str, style: Style, link: Option<usize>) {
        for piece in wrap_text(text, self.width) {
            self.rows.push(PortfolioRow {
                line: Line::from(Span::styled(piece, style)),
                link,
            });
        }
    }

    fn heading(&mut self, text: &str) {
        let style = Style::default()
            .fg(self.palette.accent)
            .add_modifier(Modifier::BOLD);
        self.push(text, style, None);
    }

    fn plain(&mut self, text: &str) {
        self.push(text, Style::default().fg(self.palette.output), None);
    }

    fn muted(&mut self, text: &str) {
        self.push(text, Style::default().fg(self.palette.muted), None);
    }

    /// Link rows take the next index, so call order must match
    /// `PortfolioData::link_targets`.
    fn link(&mut self, text: &str) {
        let index = self.next_link;
        self.next_link += 1;
        let mut style = Style::default()
            .fg(self.palette.system)
            .add_modifier(Modifier::UNDERLINED);
        if self.focused == Some(index) {
            style = style.bg(self.palette.selected_bg).fg(self.palette.accent);
        }
        self.push(text, style, Some(index));
    }

    fn blank(&mut self) {
        self.rows.push(PortfolioRow {
            line: Line::default(),
            link: None,
        });
    }
}

fn portfolio_rows(
    data: &PortfolioData,
    palette: UiPalette,
    width: u16,
    focused: Option<usize>,
) -> Vec<PortfolioRow> {
    let mut out = PortfolioRows {
        width: usize::from(width),
        palette,
        focused,
        next_link: 0,
        rows: Vec::new(),
    };

    let about = &data.about;
    out.heading(&about.name);
    out.muted(&about.title);
    out.blank();
    out.plain(&about.bio);
    out.blank();
    for contact in data.contact_links() {
        let icon = match contact.label {
            "EMAIL" => "✉  Email",
            "GITHUB" => "⌂  GitHub",
            _ => "in LinkedIn",
        };
        out.link(&format!("{icon}: {}", contact.shown));
    }

    out.blank();
    out.heading("EDUCATION");
    for entry in &data.education {
        let icon = match entry.kind {
            EducationKind::College => "🎓",
            EducationKind::School => "🏫",
        };
        out.plain(&format!("{icon} {} ({})", entry.institution, entry.location));
        if let Some(course) = &entry.course {
            out.muted(&format!("   Course: {course}"));
        }
        if let Some(percentage) = &entry.percentage {
            out.muted(&format!("   Scores: {percentage}"));
        }
        if let Some(subjects) = &entry.subjects {
            out.muted(&format!("   Stream: {subjects}"));
        }
    }

    out.blank();
    out.heading("FEATURED PROJECTS");
    for project in &data.projects {
        let badge = if project.featured { " [FEATURED]" } else { "" };
        out.plain(&format!("📂 {}{badge}", project.title));
        out.muted(&format!("   {}", project.description));
        out.muted(&format!("   {}", project.technologies.join(" · ")));
        if let Some(url) = project.demo_link() {
            out.link(&format!("   Demo: {url}"));
        }
        if let Some(url) = project.source_link() {
            out.link(&format!("   Source: {url}"));
        }
        out.blank();
    }

    out.heading("TECHNICAL SKILLS");
    for category in data.skill_categories() {
        out.plain(&format!("[{}]", category.to_uppercase()));
        for skill in data.skills_in(category) {
            out.muted(&format!(
                "   {:<15} {} {}%",
                skill.name,
                skill.bar(),
                skill.level
            ));
        }
    }
    out.rows
}

/// The portfolio view laid out for `area`.
struct PortfolioViewport {
    frame: Rect,
    body: Rect,
    footer: Rect,
    rows: Vec<PortfolioRow>,
    scroll: u16,
    max_scroll: u16,
}

impl PortfolioViewport {
    fn link_at(&self, column: u16, row: u16) -> Option<usize> {
        let body = self.body;
        if column < body.x || column >= body.x + body.width {
            return None;
        }
        if row < body.y || row >= body.y + body.height {
            return None;
        }
        let index = usize::from(self.scroll) + usize::from(row - body.y);
        self.rows.get(index)?.link
    }
}

fn portfolio_viewport(app: &App, area: Rect) -> PortfolioViewport {
    let state = app.session.state();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    let body = inner(chunks[0]);
    let rows = portfolio_rows(
        &state.data,
        palette_for(app.theme),
        body.width,
        state.view.portfolio_link,
    );
    let overflow = rows.len().saturating_sub(usize::from(body.height));
    let max_scroll = u16::try_from(overflow).unwrap_or(u16::MAX);
    PortfolioViewport {
        frame: chunks[0],
        body,
        footer: chunks[1],
        rows,
        scroll: state.view.portfolio_scroll.min(max_scroll),
        max_scroll,
    }
}

/// Scrolls just far enough for the focused link's first row to be visible.
fn scroll_to_focused_link(app: &mut App, area: Rect) -> Vec<TerminalEffect> {
    let view = portfolio_viewport(app, area);
    let Some(focused) = app.session.state().view.portfolio_link else {
        return Vec::new();
    };
    let Some(row) = view.rows.iter().position(|r| r.link == Some(focused)) else {
        return Vec::new();
    };
    let top = usize::from(view.scroll);
    let height = usize::from(view.body.height).max(1);
    let target = if row < top {
        row
    } else if row >= top + height {
        row + 1 - height
    } else {
        return Vec::new();
    };
    let stored = i64::from(app.session.state().view.portfolio_scroll);
    let delta = (target as i64 - stored).clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
    app.session.dispatch(UserAction::ScrollPortfolio {
        delta,
        max: view.max_scroll,
    })
}

fn render_portfolio(f: &mut ratatui::Frame, area: Rect, app: &App, palette: UiPalette) {
    let view = portfolio_viewport(app, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border))
        .style(Style::default().bg(palette.panel_bg))
        .title("FULL PORTFOLIO");
    let lines: Vec<Line> = view.rows.into_iter().map(|row| row.line).collect();
    let body = Paragraph::new(lines)
        .scroll((view.scroll, 0))
        .block(block);
    f.render_widget(body, view.frame);

    let key = |text: &'static str| Span::styled(text, Style::default().fg(palette.accent));
    let hint = |text: &'static str| Span::styled(text, Style::default().fg(palette.muted));
    let footer = Line::from(vec![
        key("Esc"),
        hint(" back  "),
        key("↑↓ PgUp PgDn"),
        hint(" scroll  "),
        key("Tab"),
        hint(" links  "),
        key("Enter"),
        hint(" open  "),
        key("y"),
        hint(" copy"),
    ]);
    f.render_widget(
        Paragraph::new(footer).alignment(Alignment::Center),
        view.footer,
    );
}
