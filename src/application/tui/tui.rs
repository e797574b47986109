use super::theme::Theme;
use crate::domain::{CalendarDay, DateRangePicker, RangeChange};
use chrono::Datelike;

/// Plain-text renderer for non-interactive output
pub struct TuiRenderer {
    theme: Theme,
    colored: bool,
}

impl TuiRenderer {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            colored: true,
        }
    }

    /// Renderer that emits no ANSI escapes
    pub fn plain() -> Self {
        Self {
            theme: Theme::default(),
            colored: false,
        }
    }

    fn paint(&self, text: &str, day: &CalendarDay) -> String {
        if !self.colored {
            return text.to_string();
        }

        let colors = &self.theme.colors;
        let pair = if day.selected {
            &colors.selected
        } else if !day.selectable {
            &colors.weekend
        } else {
            &colors.weekday
        };
        pair.colorize(text)
    }

    /// Month grid with Saturday-first rows; selected days are bracketed
    pub fn render_month(&self, picker: &DateRangePicker) -> String {
        let cursor = picker.cursor();
        let mut out = String::new();

        let title = cursor
            .first_day()
            .map(|first| first.format("%B %Y").to_string())
            .unwrap_or_default();
        out.push_str(&format!("{:^34}\n", title));
        out.push_str(" Sat  Sun  Mon  Tue  Wed  Thu  Fri\n");

        for week in picker.weeks() {
            let mut cells = vec!["     ".to_string(); 7];
            for day in &week {
                let column = ((day.day_of_week + 1) % 7) as usize;
                let text = if day.selected {
                    format!("[{:>2}] ", day.date.day())
                } else if !day.selectable {
                    format!("({:>2}) ", day.date.day())
                } else {
                    format!(" {:>2}  ", day.date.day())
                };
                cells[column] = self.paint(&text, day);
            }
            out.push_str(cells.concat().trim_end());
            out.push('\n');
        }

        out
    }

    pub fn render_change(&self, change: &RangeChange) -> String {
        let weekends = if change.weekends.is_empty() {
            "none".to_string()
        } else {
            change.weekends.join(", ")
        };
        let header = format!("Range: {} .. {}", change.range[0], change.range[1]);

        if self.colored {
            format!(
                "{}\n{} {}",
                self.theme.colors.header.colorize(&header),
                self.theme.colors.help_text.colorize("Weekends:"),
                weekends
            )
        } else {
            format!("{}\nWeekends: {}", header, weekends)
        }
    }

    pub fn render_presets(&self, picker: &DateRangePicker) -> String {
        picker
            .predefined_ranges()
            .iter()
            .enumerate()
            .map(|(i, preset)| {
                let marker = if preset.is_ordered() { "" } else { "  (end before start)" };
                format!(
                    "{}. {}: {} .. {}{}",
                    i + 1,
                    preset.label,
                    preset.start().format("%Y-%m-%d"),
                    preset.end().format("%Y-%m-%d"),
                    marker
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
