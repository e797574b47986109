use super::theme::Theme;
use crate::domain::{CalendarDay, ClickOutcome, DateRangePicker, RangeChange, SelectionMode};
use chrono::{Datelike, Duration, Local, NaiveDate};
use crossterm::ExecutableCommand;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, poll};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use crossterm::tty::IsTty;
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};
use std::io::{self, Stdout, stdout};

/// Column order of the grid; rows break after Friday
const COLUMN_HEADERS: [&str; 7] = ["Sat", "Sun", "Mon", "Tue", "Wed", "Thu", "Fri"];

#[derive(Debug, Clone)]
pub enum MonthViewResult {
    /// User confirmed the last finalized range (pressed Enter)
    Confirmed(RangeChange),
    /// User exited without confirming (quit, escape, ctrl+c, etc.)
    Exited,
}

/// Raw-mode alternate screen, restored on drop
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn start() -> io::Result<Self> {
        // First check if we're in a proper terminal
        if !IsTty::is_tty(&stdout()) {
            return Err(io::Error::new(
                io::ErrorKind::Unsupported,
                "Not running in a TTY, cannot initialize terminal interface",
            ));
        }

        enable_raw_mode()
            .map_err(|e| io::Error::other(format!("Failed to enable raw mode: {}", e)))?;

        stdout().execute(EnterAlternateScreen).map_err(|e| {
            let _ = disable_raw_mode(); // Clean up on failure
            io::Error::other(format!("Failed to enter alternate screen: {}", e))
        })?;

        let backend = CrosstermBackend::new(stdout());
        let terminal = Terminal::new(backend).map_err(|e| {
            let _ = disable_raw_mode();
            let _ = stdout().execute(LeaveAlternateScreen);
            io::Error::other(format!("Failed to create terminal: {}", e))
        })?;

        Ok(Self { terminal })
    }

    fn cleanup(&mut self) -> io::Result<()> {
        disable_raw_mode()?;
        self.terminal.backend_mut().execute(LeaveAlternateScreen)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

pub struct MonthView<'a> {
    /// Picker receiving every click
    picker: &'a mut DateRangePicker,
    /// Day under the keyboard cursor, always inside the displayed month
    focused_date: NaiveDate,
    /// Whether we should exit
    should_exit: bool,
    /// Whether the user confirmed the last range
    should_confirm: bool,
    /// Whether to show help text
    show_help: bool,
    /// One-line feedback for the last key press
    status: Option<Status>,
    /// Theme for styling
    theme: Theme,
}

#[derive(Debug, Clone, PartialEq)]
enum Status {
    Info(String),
    Error(String),
}

impl<'a> MonthView<'a> {
    pub fn new(picker: &'a mut DateRangePicker, theme: Theme) -> Self {
        let today = Local::now().date_naive();
        let cursor = picker.cursor();
        let focused_date = if today.year() == cursor.year() && today.month() == cursor.month() {
            today
        } else {
            Self::clamp_to_month(picker, 1)
        };

        Self {
            picker,
            focused_date,
            should_exit: false,
            should_confirm: false,
            show_help: false,
            status: None,
            theme,
        }
    }

    pub fn focused_date(&self) -> NaiveDate {
        self.focused_date
    }

    /// Day `day` of the displayed month, clamped to the month's length
    fn clamp_to_month(picker: &DateRangePicker, day: u32) -> NaiveDate {
        let cursor = picker.cursor();
        let last = cursor.days_in_month().max(1);
        NaiveDate::from_ymd_opt(cursor.year(), cursor.month(), day.clamp(1, last))
            .unwrap_or(NaiveDate::MIN)
    }

    /// Move the focus by `days`, staying inside the displayed month
    fn move_focus(&mut self, days: i64) {
        let target = self.focused_date + Duration::days(days);
        let cursor = self.picker.cursor();
        if target.year() == cursor.year() && target.month() == cursor.month() {
            self.focused_date = target;
        }
    }

    /// Keep the same day number after the displayed month changed
    fn refocus(&mut self) {
        self.focused_date = Self::clamp_to_month(self.picker, self.focused_date.day());
    }

    fn click_focused(&mut self) {
        let date = self.focused_date;
        let is_selectable = self
            .picker
            .month_grid()
            .iter()
            .any(|day| day.date == date && day.selectable);

        if !is_selectable {
            self.status = Some(Status::Error("Weekends cannot be selected".to_string()));
            return;
        }

        self.status = match self.picker.on_date_clicked(date) {
            Ok(ClickOutcome::Started(start)) | Ok(ClickOutcome::Restarted(start)) => Some(
                Status::Info(format!("Start {} - pick an end date", start.format("%Y-%m-%d"))),
            ),
            Ok(ClickOutcome::Closed(_)) => self
                .picker
                .last_change()
                .map(|change| Status::Info(format!("Range selected: {}", change))),
            Err(e) => Some(Status::Error(format!("{:#}", e))),
        };
    }

    fn apply_preset(&mut self, index: usize) {
        self.status = match self.picker.choose_predefined_range(index) {
            Ok(change) => Some(Status::Info(format!("Range selected: {}", change))),
            Err(e) => Some(Status::Error(format!("{:#}", e))),
        };
    }

    /// Handle keyboard input
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match (key.code, key.modifiers) {
            // Exit
            (KeyCode::Char('q'), _) | (KeyCode::Esc, _) => {
                self.should_exit = true;
            }

            // Ctrl+C and Ctrl+D
            (KeyCode::Char('c'), KeyModifiers::CONTROL)
            | (KeyCode::Char('d'), KeyModifiers::CONTROL) => {
                self.should_exit = true;
            }

            // Focus movement
            (KeyCode::Left, _) | (KeyCode::Char('h'), _) => self.move_focus(-1),
            (KeyCode::Right, _) | (KeyCode::Char('l'), _) => self.move_focus(1),
            (KeyCode::Up, _) | (KeyCode::Char('k'), _) => self.move_focus(-7),
            (KeyCode::Down, _) | (KeyCode::Char('j'), _) => self.move_focus(7),

            // Click the focused date
            (KeyCode::Char(' '), _) => self.click_focused(),

            // Confirm the last range
            (KeyCode::Enter, _) => {
                if self.picker.last_change().is_some() {
                    self.should_confirm = true;
                    self.should_exit = true;
                } else {
                    self.status = Some(Status::Error("No range selected yet".to_string()));
                }
            }

            // Month and year navigation
            (KeyCode::Char('['), _) | (KeyCode::PageUp, _) => {
                self.picker.previous_month();
                self.refocus();
            }
            (KeyCode::Char(']'), _) | (KeyCode::PageDown, _) => {
                self.picker.next_month();
                self.refocus();
            }
            (KeyCode::Char('{'), _) => {
                self.picker.previous_year();
                self.refocus();
            }
            (KeyCode::Char('}'), _) => {
                self.picker.next_year();
                self.refocus();
            }

            // Predefined ranges
            (KeyCode::Char(c @ '1'..='9'), _) => {
                let index = (c as usize) - ('1' as usize);
                self.apply_preset(index);
            }

            (KeyCode::Char('r'), _) => {
                self.picker.reset();
                self.status = Some(Status::Info("Selection cleared".to_string()));
            }

            // Toggle help
            (KeyCode::Char('?'), _) => {
                self.show_help = !self.show_help;
            }

            _ => {}
        }
    }

    /// Style of a single day cell
    fn day_style(&self, day: &CalendarDay) -> ratatui::style::Style {
        let colors = &self.theme.colors;
        let selection = self.picker.selection();
        let is_pending_start =
            selection.mode() == SelectionMode::AwaitingEnd && selection.start() == Some(day.date);

        let base = if is_pending_start {
            colors.pending_start.to_ratatui()
        } else if day.selected {
            colors.selected.to_ratatui()
        } else if !day.selectable {
            colors.weekend.to_ratatui()
        } else if day.date == Local::now().date_naive() {
            colors.today.to_ratatui_with_modifier(Modifier::BOLD)
        } else {
            colors.weekday.to_ratatui()
        };

        if day.date != self.focused_date {
            base
        } else if is_pending_start || day.selected {
            // Keep the selection colours visible under the cursor
            base.add_modifier(Modifier::REVERSED)
        } else {
            colors.cursor.to_ratatui_with_modifier(Modifier::BOLD)
        }
    }

    fn create_month_table(&self) -> Table<'static> {
        let colors = &self.theme.colors;

        let header = Row::new(COLUMN_HEADERS.iter().map(|name| {
            let pair = if *name == "Sat" || *name == "Sun" {
                &colors.weekend
            } else {
                &colors.header
            };
            Cell::from(*name).style(pair.to_ratatui())
        }))
        .height(1);

        let rows: Vec<Row> = self
            .picker
            .weeks()
            .iter()
            .map(|week| {
                let mut cells: Vec<Cell> = (0..COLUMN_HEADERS.len()).map(|_| Cell::from("")).collect();
                for day in week {
                    let column = ((day.day_of_week + 1) % 7) as usize;
                    cells[column] =
                        Cell::from(format!("{:>3}", day.date.day())).style(self.day_style(day));
                }
                Row::new(cells)
            })
            .collect();

        let cursor = self.picker.cursor();
        let title = cursor
            .first_day()
            .map(|first| first.format("%B %Y").to_string())
            .unwrap_or_else(|| format!("{}-{:02}", cursor.year(), cursor.month()));

        Table::new(rows, [Constraint::Length(3); 7])
            .header(header)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .title_style(colors.header.to_ratatui_with_modifier(Modifier::BOLD))
                    .title_alignment(Alignment::Center)
                    .border_style(colors.help_text.to_ratatui()),
            )
            .column_spacing(1)
    }

    fn create_presets(&self) -> Paragraph<'static> {
        let colors = &self.theme.colors;
        let spans: Vec<Span> = self
            .picker
            .predefined_ranges()
            .iter()
            .enumerate()
            .take(9)
            .flat_map(|(i, preset)| {
                vec![
                    Span::styled(format!("[{}] ", i + 1), colors.help_text.to_ratatui()),
                    Span::styled(format!("{}  ", preset.label), colors.preset.to_ratatui()),
                ]
            })
            .collect();

        Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
    }

    fn create_summary(&self) -> Paragraph<'static> {
        let colors = &self.theme.colors;
        let mut lines = Vec::new();

        match self.picker.last_change() {
            Some(change) => {
                lines.push(Line::from(vec![
                    Span::styled("Range: ", colors.help_text.to_ratatui()),
                    Span::styled(
                        format!("{} .. {}", change.range[0], change.range[1]),
                        colors.normal_text.to_ratatui(),
                    ),
                ]));
                let weekends = if change.weekends.is_empty() {
                    "none".to_string()
                } else {
                    change.weekends.join(", ")
                };
                lines.push(Line::from(vec![
                    Span::styled("Weekends: ", colors.help_text.to_ratatui()),
                    Span::styled(weekends, colors.normal_text.to_ratatui()),
                ]));
            }
            None => lines.push(Line::from(Span::styled(
                "No range selected",
                colors.help_text.to_ratatui(),
            ))),
        }

        match &self.status {
            Some(Status::Info(message)) => lines.push(Line::from(Span::styled(
                message.clone(),
                colors.normal_text.to_ratatui(),
            ))),
            Some(Status::Error(message)) => lines.push(Line::from(Span::styled(
                message.clone(),
                colors.error_text.to_ratatui(),
            ))),
            None => {}
        }

        Paragraph::new(lines).alignment(Alignment::Center)
    }

    fn create_help_text(&self) -> Paragraph<'static> {
        let help_text = vec![
            Line::from(Span::styled(
                "hjkl/arrows=Move • Space=Pick • Enter=Confirm",
                self.theme.colors.help_text.to_ratatui(),
            )),
            Line::from(Span::styled(
                "[ ]=Month • { }=Year • 1-9=Preset • r=Reset • q=Quit",
                self.theme.colors.help_text.to_ratatui(),
            )),
        ];

        Paragraph::new(help_text)
            .block(Block::default().borders(Borders::NONE))
            .alignment(Alignment::Center)
    }

    /// Calculate centered area with both horizontal and vertical centering
    fn calculate_centered_area(available: Rect, needed_width: u16, needed_height: u16) -> Rect {
        let width = std::cmp::min(available.width, needed_width);
        let height = std::cmp::min(available.height, needed_height);

        Rect {
            x: available.x + (available.width - width) / 2,
            y: available.y + (available.height - height) / 2,
            width,
            height,
        }
    }

    /// Draw the whole view into a frame
    pub fn render(&self, frame: &mut Frame) {
        const CALENDAR_HEIGHT: u16 = 10; // Borders + header + up to 6 rows + spacing
        const PRESET_HEIGHT: u16 = 1;
        const SUMMARY_HEIGHT: u16 = 4;
        const HELP_HEIGHT: u16 = 2;
        const WIDTH: u16 = 60;

        let mut constraints = vec![
            Constraint::Length(CALENDAR_HEIGHT),
            Constraint::Length(PRESET_HEIGHT),
            Constraint::Length(SUMMARY_HEIGHT),
        ];
        let mut total_height = CALENDAR_HEIGHT + PRESET_HEIGHT + SUMMARY_HEIGHT;
        if self.show_help {
            constraints.push(Constraint::Length(HELP_HEIGHT));
            total_height += HELP_HEIGHT;
        }

        let area = Self::calculate_centered_area(frame.area(), WIDTH, total_height);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        // 7 columns of 3, 6 gaps and 2 borders
        let table_area = Self::calculate_centered_area(chunks[0], 29, CALENDAR_HEIGHT);
        frame.render_widget(self.create_month_table(), table_area);
        frame.render_widget(self.create_presets(), chunks[1]);
        frame.render_widget(self.create_summary(), chunks[2]);
        if self.show_help {
            frame.render_widget(self.create_help_text(), chunks[3]);
        }
    }

    /// Run the month view TUI loop
    pub fn run(&mut self) -> io::Result<MonthViewResult> {
        let mut session = TerminalSession::start()?;

        while !self.should_exit {
            session.terminal.draw(|frame| self.render(frame))?;

            // Handle events with timeout to prevent blocking indefinitely
            if poll(std::time::Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key_event(key);
                }
            }
        }

        // Ensure proper cleanup before returning
        session.cleanup()?;

        match self.picker.last_change() {
            Some(change) if self.should_confirm => Ok(MonthViewResult::Confirmed(change.clone())),
            _ => Ok(MonthViewResult::Exited),
        }
    }
}
