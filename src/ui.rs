use ratatui::{prelude::*, widgets::*};

use tagboard::constants::APP_NAME;
use tagboard::messages::ui_events::{DraftField, InputMode};
use tagboard::{EntryError, RenderState};

pub fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),     // Entries
            Constraint::Length(5),  // Drafts
            Constraint::Length(1),  // Failure line
            Constraint::Length(1),  // Status bar
        ])
        .split(area);

    draw_entries(f, state, chunks[0]);
    draw_drafts(f, state, chunks[1]);
    draw_failure(f, state, chunks[2]);
    draw_status_bar(f, state, chunks[3]);

    if let Some(notice) = &state.notice {
        draw_notice_popup(f, notice, area);
    }
}

fn draw_entries(f: &mut Frame, state: &RenderState, area: Rect) {
    let loading = if state.pending_refreshes > 0 { " [...]" } else { "" };
    let refreshed = state
        .last_refreshed
        .map(|t| format!(" @ {}", t.with_timezone(&chrono::Local).format("%H:%M:%S")))
        .unwrap_or_default();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} - {}{}{} ", APP_NAME, state.entries_url, refreshed, loading))
        .title_style(Style::default().fg(Color::Cyan).bold());

    if state.entries.is_empty() {
        let empty = Paragraph::new(Span::styled(
            "No entries. Press 'r' to refresh.",
            Style::default().fg(Color::DarkGray),
        ))
        .block(block);
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = state
        .entries
        .iter()
        .map(|entry| {
            let mut spans = vec![Span::styled(entry.name.clone(), Style::default().bold())];
            for tag in &entry.tags {
                spans.push(Span::raw("  "));
                spans.push(Span::styled(
                    format!("{}={}", tag.name, tag.value),
                    Style::default().fg(Color::Green),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    f.render_widget(List::new(items).block(block), area);
}

fn draw_drafts(f: &mut Frame, state: &RenderState, area: Rect) {
    let creating = if state.pending_creates > 0 { " [sending]" } else { "" };
    let border_style = if state.input_mode == InputMode::Editing {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(format!(" New entry{} ", creating));

    let fields = [DraftField::EntryName, DraftField::TagName, DraftField::TagValue];
    let lines: Vec<Line> = fields
        .iter()
        .map(|field| {
            let focused = *field == state.focused_field;
            let label_style = if focused {
                Style::default().fg(Color::Yellow).bold()
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Line::from(vec![
                Span::styled(format!("{:>10}: ", field.label()), label_style),
                Span::raw(state.draft(*field).to_string()),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines).block(block), area);

    // Cursor at the end of the focused buffer
    if state.input_mode == InputMode::Editing {
        let row = match state.focused_field {
            DraftField::EntryName => 0,
            DraftField::TagName => 1,
            DraftField::TagValue => 2,
        };
        let cursor_x = draft_cursor_x(area, state.draft(state.focused_field));
        f.set_cursor_position(Position::new(cursor_x, area.y + 1 + row));
    }
}

fn draw_failure(f: &mut Frame, state: &RenderState, area: Rect) {
    let Some(failure) = &state.last_failure else {
        return;
    };
    let at = failure.at.with_timezone(&chrono::Local).format("%H:%M:%S");
    let line = Paragraph::new(format!(" {} failed at {}: {}", failure.operation, at, failure.error))
        .style(Style::default().fg(error_color(&failure.error)));
    f.render_widget(line, area);
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let status = if state.input_mode == InputMode::Editing {
        " ESC/Enter:stop editing | Tab:next field "
    } else {
        " r:refresh | s:add entry | e:edit | Tab:next field | q:quit "
    };

    let bar = Paragraph::new(status)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, area);
}

fn draw_notice_popup(f: &mut Frame, notice: &str, area: Rect) {
    let popup_area = centered_rect(50, 30, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Notice ")
        .style(Style::default().bg(Color::Black));

    let text = format!("\n {}\n\n Press any key to close...", notice);
    let popup = Paragraph::new(text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(popup, popup_area);
}

/// Column just past `text`, clamped inside the draft box border
fn draft_cursor_x(area: Rect, text: &str) -> u16 {
    let text_len = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
    let max_x = area.x.saturating_add(area.width.saturating_sub(2));
    // border + "{:>10}: " label
    area.x
        .saturating_add(1 + 12)
        .saturating_add(text_len)
        .min(max_x)
}

/// Color for a failure line
pub fn error_color(error: &EntryError) -> Color {
    match error {
        EntryError::Transport(_) => Color::Red,
        EntryError::Server { status } if *status >= 500 => Color::Red,
        EntryError::Server { .. } | EntryError::Payload(_) => Color::Yellow,
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_follows_text() {
        let area = Rect::new(2, 0, 80, 5);
        assert_eq!(draft_cursor_x(area, ""), 15);
        assert_eq!(draft_cursor_x(area, "milk"), 19);
    }

    #[test]
    fn test_cursor_clamped_on_long_draft() {
        let area = Rect::new(10, 0, 40, 5);
        let long = "x".repeat(usize::from(u16::MAX) + 10);
        assert_eq!(draft_cursor_x(area, &long), 48);
    }

    #[test]
    fn test_server_errors_below_500_are_warnings() {
        assert_eq!(error_color(&EntryError::Server { status: 404 }), Color::Yellow);
        assert_eq!(error_color(&EntryError::Server { status: 502 }), Color::Red);
    }
}
