use crate::app::App;
use crate::constants::{STATUS_BAR_HEIGHT, TITLE_BAR_HEIGHT, UI_BORDER_WIDTH};
use crate::models::{InputMode, Row};
use crate::web_page_setting::WebPageSetting;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use unicode_width::UnicodeWidthStr;

pub fn ui(f: &mut Frame, app: &App) {
    let screen = &app.screen;

    let mut constraints = vec![Constraint::Length(TITLE_BAR_HEIGHT)];
    constraints.extend(
        screen
            .sections
            .iter()
            .map(|s| Constraint::Length(section_height(s.rows.iter()))),
    );
    constraints.push(Constraint::Min(0));
    constraints.push(Constraint::Length(STATUS_BAR_HEIGHT));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(f.area());

    // 1. TITLE
    let title = Paragraph::new(Line::from(Span::styled(
        screen.title.as_str(),
        Style::default().add_modifier(Modifier::BOLD),
    )))
    .block(Block::default().borders(Borders::ALL).title("Settings"));
    f.render_widget(title, chunks[0]);

    // 2. SECTIONS
    let mut row_index = 0;
    for (i, section) in screen.sections.iter().enumerate() {
        let area = chunks[i + 1];
        let inner_width = (area.width as usize).saturating_sub(UI_BORDER_WIDTH);
        let mut lines = Vec::new();
        for row in &section.rows {
            let selected = row_index == screen.selected;
            lines.extend(render_row(app, row, selected, inner_width));
            row_index += 1;
        }

        let mut block = Block::default().borders(Borders::ALL);
        if let Some(title) = &section.title {
            block = block.title(title.as_str());
        }
        f.render_widget(Clear, area);
        f.render_widget(Paragraph::new(lines).block(block), area);
    }

    // 3. STATUS
    let status_area = chunks[chunks.len() - 1];
    let status = Paragraph::new(screen.status_message.as_str()).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" j/k move | Enter select | e edit | c clear | q quit "),
    );
    f.render_widget(status, status_area);
}

fn section_height<'a>(rows: impl Iterator<Item = &'a Row>) -> u16 {
    let lines: usize = rows
        .map(|row| match row {
            Row::Toggle(toggle) if toggle.status_text.is_some() => 2,
            _ => 1,
        })
        .sum();
    lines as u16 + 2
}

fn render_row(app: &App, row: &Row, selected: bool, width: usize) -> Vec<Line<'static>> {
    let prefs = app.prefs.as_ref();
    let enabled = row.is_enabled(app.sources.as_ref(), prefs);

    let mut lines = match row {
        Row::TextField(setting) => vec![render_text_field(app, setting)],
        Row::Button(button) => {
            let style = if !enabled {
                Style::default().fg(Color::DarkGray)
            } else if button.destructive {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::Cyan)
            };
            vec![Line::from(Span::styled(button.title.clone(), style))]
        }
        Row::Toggle(toggle) => {
            let mark = if toggle.value(prefs) { "[x]" } else { "[ ]" };
            let used = toggle.title.width() + mark.width();
            let padding = " ".repeat(width.saturating_sub(used));
            let mut lines = vec![Line::from(vec![
                Span::raw(toggle.title.clone()),
                Span::raw(padding),
                Span::styled(mark, Style::default().fg(Color::Yellow)),
            ])];
            if let Some(status) = &toggle.status_text {
                lines.push(Line::from(Span::styled(
                    status.clone(),
                    Style::default().fg(Color::DarkGray),
                )));
            }
            lines
        }
    };

    if selected {
        if let Some(first) = lines.first_mut() {
            for span in first.spans.iter_mut() {
                span.style = span.style.add_modifier(Modifier::REVERSED);
            }
        }
    }
    lines
}

fn render_text_field(app: &App, setting: &WebPageSetting) -> Line<'static> {
    let screen = &app.screen;
    if screen.input_mode == InputMode::Editing {
        return Line::from(vec![
            Span::styled(screen.edit_buffer.clone(), Style::default().fg(Color::Yellow)),
            Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
        ]);
    }
    match setting.displayed_value(app.prefs.as_ref()) {
        Some(value) => {
            let style = if WebPageSetting::is_valid(Some(value.as_str())) {
                Style::default()
            } else {
                Style::default().fg(Color::Red)
            };
            Line::from(Span::styled(value, style))
        }
        None => Line::from(Span::styled(
            setting.placeholder.clone().unwrap_or_default(),
            Style::default().fg(Color::DarkGray),
        )),
    }
}
