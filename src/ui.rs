// 🖥️ Terminal UI - Submit form + summary dashboard
// Two pages cycled with Tab. The summary page is fully derived state:
// every frame recomputes the filtered view, average and histogram from the
// store, so the chart is rebuilt from scratch rather than patched.

use crate::feedback::{Category, FeedbackEntry, Sentiment};
use crate::form::FormDraft;
use crate::notify::{Banner, Kind};
use crate::store::FeedbackStore;
use crate::summary::{Filter, Summary};
use anyhow::Result;
use chrono::{DateTime, Local};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{BarChart, Block, Borders, List, ListItem, ListState, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

/// Event-poll timeout; keeps the banner auto-hide responsive without input
const TICK_RATE: Duration = Duration::from_millis(200);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Submit,
    Summary,
}

impl Page {
    pub fn next(&self) -> Self {
        match self {
            Page::Submit => Page::Summary,
            Page::Summary => Page::Submit,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Page::Submit => "Submit Feedback",
            Page::Summary => "Summary",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Rating,
    Category,
    Comments,
}

impl Field {
    const ORDER: [Field; 5] = [
        Field::Name,
        Field::Email,
        Field::Rating,
        Field::Category,
        Field::Comments,
    ];

    /// Error-map key for this field
    fn key(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Rating => "rating",
            Field::Category => "category",
            Field::Comments => "comments",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Rating => "Rating",
            Field::Category => "Category",
            Field::Comments => "Comments",
        }
    }

    pub fn next(&self) -> Self {
        let i = Self::ORDER.iter().position(|f| f == self).unwrap_or(0);
        Self::ORDER[(i + 1) % Self::ORDER.len()]
    }

    pub fn previous(&self) -> Self {
        let i = Self::ORDER.iter().position(|f| f == self).unwrap_or(0);
        Self::ORDER[(i + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

pub struct App {
    pub store: FeedbackStore,
    pub draft: FormDraft,
    pub banner: Banner,
    pub filter: Filter,
    pub current_page: Page,
    pub focus: Field,
    pub list_state: ListState,
}

impl App {
    pub fn new(store: FeedbackStore) -> Self {
        let mut list_state = ListState::default();
        if !store.is_empty() {
            list_state.select(Some(0));
        }

        Self {
            store,
            draft: FormDraft::new(),
            banner: Banner::new(),
            filter: Filter::All,
            current_page: Page::Submit,
            focus: Field::Name,
            list_state,
        }
    }

    /// Derived view for the current frame; never cached
    pub fn summary(&self) -> Summary {
        Summary::compute(self.store.entries(), self.filter)
    }

    pub fn apply_filter(&mut self, filter: Filter) {
        self.filter = filter;

        // Reset selection to first item of the new view
        let len = self.summary().filtered.len();
        if len > 0 {
            self.list_state.select(Some(0));
        } else {
            self.list_state.select(None);
        }
    }

    /// Validate and, on success, append the entry, reset the form, and
    /// confirm via the banner. Validation failures surface only as inline
    /// field errors.
    pub fn submit(&mut self) {
        if !self.draft.validate() {
            return;
        }

        let entry = self.draft.build_entry();
        match self.store.append(entry) {
            Ok(()) => {
                self.draft.reset();
                self.focus = Field::Name;
                if self.list_state.selected().is_none() {
                    self.list_state.select(Some(0));
                }
                self.banner
                    .show("Feedback submitted successfully!", Kind::Success);
            }
            Err(err) => {
                self.banner
                    .show(format!("Failed to save feedback: {err:#}"), Kind::Error);
            }
        }
    }

    pub fn next_entry(&mut self) {
        let len = self.summary().filtered.len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn previous_entry(&mut self) {
        let len = self.summary().filtered.len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    fn edit_char(&mut self, c: char) {
        match self.focus {
            Field::Name => self.draft.name.push(c),
            Field::Email => self.draft.email.push(c),
            Field::Comments => self.draft.comments.push(c),
            Field::Rating => {
                if ('1'..='5').contains(&c) {
                    self.draft.rating = Some(c.to_string());
                }
            }
            Field::Category => {
                if c == ' ' {
                    self.cycle_category(1);
                }
            }
        }
    }

    fn edit_backspace(&mut self) {
        match self.focus {
            Field::Name => {
                self.draft.name.pop();
            }
            Field::Email => {
                self.draft.email.pop();
            }
            Field::Comments => {
                self.draft.comments.pop();
            }
            Field::Rating => self.draft.rating = None,
            Field::Category => self.draft.category = None,
        }
    }

    fn cycle_category(&mut self, step: isize) {
        let all = Category::ALL;
        let next = match self.draft.category {
            None => {
                if step >= 0 {
                    all[0]
                } else {
                    all[all.len() - 1]
                }
            }
            Some(current) => {
                let i = all.iter().position(|c| *c == current).unwrap_or(0) as isize;
                let n = all.len() as isize;
                all[((i + step % n + n) % n) as usize]
            }
        };
        self.draft.category = Some(next);
    }
}

pub fn run_ui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        app.banner.tick();
        terminal.draw(|f| ui(f, app))?;

        if !event::poll(TICK_RATE)? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Release {
                continue;
            }

            // Global keys
            match key.code {
                KeyCode::Esc => return Ok(()),
                KeyCode::Tab | KeyCode::BackTab => {
                    app.current_page = app.current_page.next();
                    continue;
                }
                _ => {}
            }

            match app.current_page {
                Page::Submit => match key.code {
                    KeyCode::Enter => app.submit(),
                    KeyCode::Down => app.focus = app.focus.next(),
                    KeyCode::Up => app.focus = app.focus.previous(),
                    KeyCode::Left if app.focus == Field::Category => app.cycle_category(-1),
                    KeyCode::Right if app.focus == Field::Category => app.cycle_category(1),
                    KeyCode::Backspace => app.edit_backspace(),
                    KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.edit_char(c)
                    }
                    _ => {}
                },
                Page::Summary => match key.code {
                    KeyCode::Char('q') => return Ok(()),
                    KeyCode::Char('a') => app.apply_filter(Filter::All),
                    KeyCode::Char('1') => app.apply_filter(Filter::Category(Category::Product)),
                    KeyCode::Char('2') => app.apply_filter(Filter::Category(Category::Service)),
                    KeyCode::Char('3') => app.apply_filter(Filter::Category(Category::Support)),
                    KeyCode::Char('4') => app.apply_filter(Filter::Category(Category::Other)),
                    KeyCode::Down | KeyCode::Char('j') => app.next_entry(),
                    KeyCode::Up | KeyCode::Char('k') => app.previous_entry(),
                    _ => {}
                },
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let banner_visible = app.banner.is_visible();

    let constraints: Vec<Constraint> = if banner_visible {
        vec![
            Constraint::Length(3), // Header with navigation
            Constraint::Min(0),    // Content area
            Constraint::Length(1), // Notification banner
            Constraint::Length(3), // Status bar
        ]
    } else {
        vec![
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ]
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(f.size());

    render_header(f, chunks[0], app);

    match app.current_page {
        Page::Submit => render_form(f, chunks[1], app),
        Page::Summary => render_summary(f, chunks[1], app),
    }

    if banner_visible {
        render_banner(f, chunks[2], app);
        render_status_bar(f, chunks[3], app);
    } else {
        render_status_bar(f, chunks[2], app);
    }
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let summary = app.summary();

    let pages = [Page::Submit, Page::Summary];
    let mut tab_spans = vec![];
    for (i, page) in pages.iter().enumerate() {
        if i > 0 {
            tab_spans.push(Span::raw(" │ "));
        }

        let style = if *page == app.current_page {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        tab_spans.push(Span::styled(page.title(), style));
    }

    tab_spans.push(Span::raw("  |  "));
    tab_spans.push(Span::styled(
        format!("Entries: {}", app.store.len()),
        Style::default().fg(Color::White),
    ));
    tab_spans.push(Span::raw("  |  "));
    tab_spans.push(Span::styled(
        format!("★ {}", summary.average_label()),
        Style::default().fg(Color::Yellow),
    ));

    let header = Paragraph::new(vec![Line::from(tab_spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Customer Feedback "),
    );

    f.render_widget(header, area);
}

fn render_form(f: &mut Frame, area: Rect, app: &App) {
    let mut lines = vec![Line::from("")];

    for field in Field::ORDER {
        let focused = field == app.focus;
        let marker = if focused {
            Span::styled(
                "→ ",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )
        } else {
            Span::raw("  ")
        };

        let label_style = if focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };

        let value = match field {
            Field::Name => field_value(&app.draft.name, focused, "Enter your name"),
            Field::Email => field_value(&app.draft.email, focused, "Enter your email"),
            Field::Rating => rating_value(app.draft.rating.as_deref(), focused),
            Field::Category => category_value(app.draft.category, focused),
            Field::Comments => {
                field_value(&app.draft.comments, focused, "Enter your feedback here")
            }
        };

        let mut spans = vec![
            marker,
            Span::styled(format!("{:<10}", format!("{}:", field.label())), label_style),
            value,
        ];

        if let Some(message) = app.draft.errors.get(field.key()) {
            spans.push(Span::raw("   "));
            spans.push(Span::styled(
                message.clone(),
                Style::default().fg(Color::Red).add_modifier(Modifier::ITALIC),
            ));
        }

        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(vec![
        Span::styled(
            "  Hint: ",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::ITALIC),
        ),
        Span::styled(
            "type to edit, 1-5 sets the rating, ←/→ picks a category",
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        ),
    ]));

    let form = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" Submit Your Feedback "),
    );

    f.render_widget(form, area);
}

fn field_value(text: &str, focused: bool, placeholder: &str) -> Span<'static> {
    if text.is_empty() && !focused {
        Span::styled(
            placeholder.to_string(),
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        )
    } else {
        let cursor = if focused { "▏" } else { "" };
        Span::styled(
            format!("{}{}", text, cursor),
            Style::default().fg(Color::White),
        )
    }
}

fn rating_value(rating: Option<&str>, focused: bool) -> Span<'static> {
    match rating.and_then(|r| r.parse::<usize>().ok()) {
        Some(stars) if (1..=5).contains(&stars) => Span::styled(
            format!("{}{}  ({stars}/5)", "★".repeat(stars), "☆".repeat(5 - stars)),
            Style::default().fg(Color::Yellow),
        ),
        _ => Span::styled(
            if focused { "press 1-5" } else { "not set" }.to_string(),
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        ),
    }
}

fn category_value(category: Option<Category>, focused: bool) -> Span<'static> {
    match category {
        Some(c) => Span::styled(
            format!("◂ {} ▸", c.label()),
            Style::default().fg(Color::Magenta),
        ),
        None => Span::styled(
            if focused { "←/→ to select" } else { "Select a category" }.to_string(),
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        ),
    }
}

fn render_summary(f: &mut Frame, area: Rect, app: &mut App) {
    let summary = app.summary();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Filter buttons + average
            Constraint::Length(10), // Ratings chart
            Constraint::Min(0),     // Entry list
        ])
        .split(area);

    render_filter_bar(f, chunks[0], app, &summary);
    render_chart(f, chunks[1], &summary);
    render_entry_list(f, chunks[2], app, &summary);
}

fn render_filter_bar(f: &mut Frame, area: Rect, app: &App, summary: &Summary) {
    let filters = [
        ('a', Filter::All),
        ('1', Filter::Category(Category::Product)),
        ('2', Filter::Category(Category::Service)),
        ('3', Filter::Category(Category::Support)),
        ('4', Filter::Category(Category::Other)),
    ];

    let mut spans = vec![Span::raw(" ")];
    for (i, (key, filter)) in filters.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }

        let active = *filter == app.filter;
        let style = if active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        spans.push(Span::styled(format!("[{key}] {}", filter.label()), style));
    }

    spans.push(Span::raw("   |   "));
    spans.push(Span::styled(
        format!("★ Average Rating: {}", summary.average_label()),
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    ));

    let bar = Paragraph::new(vec![Line::from(spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" Filters "),
    );

    f.render_widget(bar, area);
}

fn render_chart(f: &mut Frame, area: Rect, summary: &Summary) {
    let labels = ["1 ★", "2 ★", "3 ★", "4 ★", "5 ★"];
    let data: Vec<(&str, u64)> = labels
        .iter()
        .zip(summary.histogram.iter())
        .map(|(label, count)| (*label, *count))
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White))
                .title(" Ratings Distribution "),
        )
        .data(&data)
        .bar_width(7)
        .bar_gap(2)
        .bar_style(Style::default().fg(Color::Blue))
        .value_style(
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        )
        .label_style(Style::default().fg(Color::Yellow));

    f.render_widget(chart, area);
}

fn render_entry_list(f: &mut Frame, area: Rect, app: &mut App, summary: &Summary) {
    let items: Vec<ListItem> = summary
        .filtered
        .iter()
        .map(|entry| ListItem::new(entry_text(entry)))
        .collect();

    let title = format!(" Feedback ({}) ", summary.filtered.len());
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White))
                .title(title),
        )
        .highlight_style(
            Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("→ ");

    f.render_stateful_widget(list, area, &mut app.list_state);
}

fn entry_text(entry: &FeedbackEntry) -> Text<'static> {
    let sentiment_color = match entry.sentiment {
        Sentiment::Positive => Color::Green,
        Sentiment::Negative => Color::Red,
        Sentiment::Neutral => Color::DarkGray,
    };

    let mut lines = vec![Line::from(vec![
        Span::styled(
            entry.name.clone(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" - "),
        Span::styled(entry.category.label(), Style::default().fg(Color::Magenta)),
        Span::raw("   "),
        Span::styled(
            format!("{} stars", entry.stars()),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw("   "),
        Span::styled(format_date(&entry.date), Style::default().fg(Color::DarkGray)),
        Span::raw("   "),
        Span::styled(
            entry.sentiment.label(),
            Style::default().fg(sentiment_color).add_modifier(Modifier::BOLD),
        ),
    ])];

    if !entry.comments.is_empty() {
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(
                entry.comments.clone(),
                Style::default().fg(Color::White).add_modifier(Modifier::ITALIC),
            ),
        ]));
    }

    lines.push(Line::from(""));
    Text::from(lines)
}

/// Local, human-readable form of the stored ISO timestamp
fn format_date(date: &str) -> String {
    DateTime::parse_from_rfc3339(date)
        .map(|d| d.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|_| date.to_string())
}

fn render_banner(f: &mut Frame, area: Rect, app: &App) {
    let Some((message, kind)) = app.banner.current() else {
        return;
    };

    let (icon, style) = match kind {
        Kind::Success => (
            "✔",
            Style::default().fg(Color::Black).bg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        Kind::Error => (
            "✘",
            Style::default().fg(Color::White).bg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let banner = Paragraph::new(Line::from(vec![Span::styled(
        format!(" {icon} {message} "),
        style,
    )]));

    f.render_widget(banner, area);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let mut status_spans = vec![];

    match app.current_page {
        Page::Submit => {
            status_spans.push(Span::styled(" ↑/↓", Style::default().fg(Color::Yellow)));
            status_spans.push(Span::raw(" Field | "));
            status_spans.push(Span::styled("Enter", Style::default().fg(Color::Yellow)));
            status_spans.push(Span::raw(" Submit | "));
        }
        Page::Summary => {
            status_spans.push(Span::styled(" a/1-4", Style::default().fg(Color::Yellow)));
            status_spans.push(Span::raw(" Filter | "));
            status_spans.push(Span::styled("↑/↓", Style::default().fg(Color::Yellow)));
            status_spans.push(Span::raw(" Nav | "));
        }
    }

    status_spans.push(Span::styled("Tab", Style::default().fg(Color::Yellow)));
    status_spans.push(Span::raw(" Page | "));
    status_spans.push(Span::styled("Esc", Style::default().fg(Color::Red)));
    status_spans.push(Span::raw(" Quit"));

    let status_bar = Paragraph::new(vec![Line::from(status_spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );

    f.render_widget(status_bar, area);
}

// ============================================================================
// TESTS
// ============================================================================
