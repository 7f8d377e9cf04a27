//! Terminal rendering of calendar grids and event lists.

use chrono::Datelike;
use unicode_width::UnicodeWidthStr;

use crate::calendar::Calendar;
use crate::types::{
    COLOR_FAINT, COLOR_RED, COLOR_RESET, COLOR_REVERSE, COLOR_SAND_YELLOW, COLOR_TEAL,
    DAYS_PER_WEEK, DayCell, DayView, MonthGrid, View, WeekView,
};

/// Width of one day cell: two digits plus the event marker.
const CELL_WIDTH: usize = 3;
/// Width of a seven-cell row with single-space gutters.
const GRID_WIDTH: usize = DAYS_PER_WEEK * (CELL_WIDTH + 1) - 1;

/// Format the centered header line, e.g. "May 2020".
pub fn format_month_header(month_name: &str, year: i32, width: usize, color: bool) -> String {
    let header = format!("{} {}", month_name, year);
    let centered = center_text(&header, width);
    if color {
        format!("{}{}{}", COLOR_TEAL, centered, COLOR_RESET)
    } else {
        centered
    }
}

/// Center text within a specified width, accounting for Unicode character widths.
fn center_text(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width >= width {
        return text.to_string();
    }
    let total_padding = width - text_width;
    let left_padding = total_padding.div_ceil(2);
    let right_padding = total_padding - left_padding;
    format!(
        "{}{}{}",
        " ".repeat(left_padding),
        text,
        " ".repeat(right_padding)
    )
}

/// Format the weekday label row, truncating each label to cell width.
pub fn format_weekday_headers(labels: &[String], color: bool) -> String {
    let mut result = String::new();
    if color {
        result.push_str(COLOR_SAND_YELLOW);
    }
    for (i, label) in labels.iter().enumerate() {
        let short: String = label.chars().take(CELL_WIDTH).collect();
        if i + 1 < labels.len() {
            result.push_str(&format!("{:<width$} ", short, width = CELL_WIDTH));
        } else {
            result.push_str(&format!("{:<width$}", short, width = CELL_WIDTH));
        }
    }
    if color {
        result.push_str(COLOR_RESET);
    }
    result
}

/// Format one day cell: day number and event marker.
///
/// Color priority: today > event day > padding > weekend.
fn format_day(cell: &DayCell, color: bool, is_last: bool) -> String {
    let marker = if cell.events.is_empty() { ' ' } else { '*' };
    let day_str = format!("{:>2}{}", cell.date, marker);

    let formatted = if !color {
        day_str
    } else if cell.is_today {
        format!("{}{}{}", COLOR_REVERSE, day_str, COLOR_RESET)
    } else if !cell.events.is_empty() {
        format!("{}{}{}", COLOR_TEAL, day_str, COLOR_RESET)
    } else if cell.belongs_to_past_month || cell.belongs_to_next_month {
        format!("{}{}{}", COLOR_FAINT, day_str, COLOR_RESET)
    } else if cell.is_weekend {
        format!("{}{}{}", COLOR_RED, day_str, COLOR_RESET)
    } else {
        day_str
    };

    if is_last {
        formatted
    } else {
        format!("{} ", formatted)
    }
}

/// Format a month grid as lines: header, weekday labels, week rows.
pub fn format_month_grid(grid: &MonthGrid, month_name: &str, color: bool) -> Vec<String> {
    let mut lines = Vec::with_capacity(8);
    lines.push(format_month_header(month_name, grid.year, GRID_WIDTH, color));
    lines.push(format_weekday_headers(&grid.header_labels, color));

    for row in grid.week_rows() {
        let mut line = String::new();
        for (i, cell) in row.iter().enumerate() {
            line.push_str(&format_day(cell, color, i + 1 == DAYS_PER_WEEK));
        }
        lines.push(line);
    }

    lines
}

/// Format a week view: header, weekday labels, the single cell row.
pub fn format_week_view(view: &WeekView, month_name: &str, color: bool) -> Vec<String> {
    let mut lines = Vec::with_capacity(3);
    lines.push(format_month_header(month_name, view.year, GRID_WIDTH, color));
    lines.push(format_weekday_headers(&view.header_labels, color));

    let mut line = String::new();
    for (i, cell) in view.day_cells.iter().enumerate() {
        line.push_str(&format_day(cell, color, i + 1 == DAYS_PER_WEEK));
    }
    lines.push(line);

    lines
}

/// Format a day view: "Tuesday, May 5 2020" plus its events.
pub fn format_day_view(view: &DayView, month_name: &str, color: bool) -> Vec<String> {
    let cell = &view.cell;
    let header = format!(
        "{}, {} {} {}",
        cell.weekday_name,
        month_name,
        cell.date,
        cell.full_date.year()
    );

    let mut lines = Vec::new();
    lines.push(if color {
        format!("{}{}{}", COLOR_TEAL, header, COLOR_RESET)
    } else {
        header
    });

    if cell.events.is_empty() {
        lines.push("  (no events)".to_string());
    } else {
        lines.extend(format_event_list(std::slice::from_ref(cell)));
    }

    lines
}

/// Format the events attached to cells as "date  title" lines in grid
/// order, truncated to the terminal width.
pub fn format_event_list(cells: &[DayCell]) -> Vec<String> {
    let width = terminal_width();
    let mut lines = Vec::new();

    for cell in cells {
        for event in &cell.events {
            let mut line = format!("  {}  {}", cell.full_date.format("%b %e"), event.title);
            if let Some(time) = &event.start_time {
                line.push_str(&format!(" ({})", time));
            }
            if let Some(location) = &event.location {
                line.push_str(&format!(" @ {}", location));
            }
            lines.push(truncate_to_width(&line, width));
        }
    }

    lines
}

/// Render the facade's active view, with the event list below the grid.
pub fn format_active_view(calendar: &Calendar, color: bool) -> Vec<String> {
    let month_names = &calendar.config().month_names;
    match calendar.active_view() {
        View::Month => calendar
            .month_grid()
            .map(|grid| {
                let mut lines =
                    format_month_grid(grid, &month_names[grid.month as usize], color);
                lines.extend(format_event_list(&grid.day_cells));
                lines
            })
            .unwrap_or_default(),
        View::Week => calendar
            .week_view()
            .map(|view| {
                let mut lines =
                    format_week_view(view, &month_names[view.month as usize], color);
                lines.extend(format_event_list(&view.day_cells));
                lines
            })
            .unwrap_or_default(),
        View::Day => calendar
            .day_view()
            .map(|view| {
                let index = view.cell.full_date.month0() as usize;
                format_day_view(view, &month_names[index], color)
            })
            .unwrap_or_default(),
    }
}

/// Get terminal width using terminal_size crate, defaulting to 80 columns.
fn terminal_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(80)
}

/// Truncate to a display width, appending an ellipsis when cut.
fn truncate_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let mut out = String::new();
    for ch in text.chars() {
        if out.width() + 2 > width {
            break;
        }
        out.push(ch);
    }
    out.push('…');
    out
}
