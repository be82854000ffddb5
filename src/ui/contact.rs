//! Contact form rendering
//!
//! The presentation side of the form collaborator: per-field value and
//! error slot, one success banner, and a submit control whose label and
//! disabled state follow the submission lifecycle.

use super::widgets::{render_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::state::{FieldId, FormField, MESSAGE_MAX};
use crate::submit::SubmitClientTrait;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw<C: SubmitClientTrait>(frame: &mut Frame, area: Rect, app: &App<C>) {
    let rows = Layout::vertical([
        Constraint::Length(3),             // name
        Constraint::Length(3),             // email
        Constraint::Length(3),             // phone
        Constraint::Length(3),             // subject
        Constraint::Min(6),                // message
        Constraint::Length(BUTTON_HEIGHT), // submit
        Constraint::Length(3),             // success banner
    ])
    .split(area);

    for (i, id) in FieldId::ALL.into_iter().enumerate() {
        let is_active = app.form.active_field_id() == Some(id);
        draw_field(frame, rows[i], app, id, is_active);
    }

    let label = if app.submission.is_sending() {
        "Sending..."
    } else {
        "Send Message"
    };
    render_button(
        frame,
        submit_area(rows[5]),
        label,
        app.form.is_submit_row_active(),
        !app.submission.is_sending(),
    );

    if app.submission.is_succeeded() {
        draw_success_banner(frame, rows[6], app.config.recipient());
    }
}

fn draw_field<C: SubmitClientTrait>(
    frame: &mut Frame,
    area: Rect,
    app: &App<C>,
    id: FieldId,
    is_active: bool,
) {
    let field = app.form.field(id);
    let title = field_title(app, id, is_active);
    let has_error = field.is_invalid()
        || (id == FieldId::Message && app.form.failure_notice.is_some());

    let border_style = if has_error {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(field_content(field, is_active).block(block), area);
}

/// Block title doubles as the field's label and error slot
fn field_title<C: SubmitClientTrait>(app: &App<C>, id: FieldId, is_active: bool) -> Line<'static> {
    let field = app.form.field(id);
    let mut spans = vec![Span::raw(format!(" {} ", id.label()))];

    if id == FieldId::Message {
        if is_active {
            let count = field.as_text().trim().chars().count();
            spans.push(Span::styled(
                format!("({count}/{MESSAGE_MAX}) "),
                Style::default().fg(Color::DarkGray),
            ));
        }
        // A failed delivery surfaces in this field's error slot
        if let Some(notice) = &app.form.failure_notice {
            spans.push(Span::styled(
                format!("{notice} "),
                Style::default().fg(Color::Red),
            ));
            return Line::from(spans);
        }
    }

    if let Some(error) = field.error {
        spans.push(Span::styled(
            format!("{error} "),
            Style::default().fg(Color::Red),
        ));
    }
    Line::from(spans)
}

fn field_content(field: &FormField, is_active: bool) -> Paragraph<'static> {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };

    let display_value = field.display_value();
    let display_str = if display_value.is_empty() && !is_active {
        "(empty)".to_string()
    } else {
        display_value
    };

    let cursor = if is_active && !field.id.is_selection() {
        "▌"
    } else {
        ""
    };

    let content = if field.id.is_multiline() {
        let mut lines: Vec<Line> = display_str
            .lines()
            .map(|l| Line::from(l.to_string()))
            .collect();
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans
                    .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
            } else {
                lines.push(Line::from(Span::styled(
                    cursor,
                    Style::default().fg(Color::Cyan),
                )));
            }
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(display_str, style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    content.wrap(Wrap { trim: false })
}

/// Banner shown for the length of the observation window after a delivery
fn draw_success_banner(frame: &mut Frame, area: Rect, recipient: &str) {
    let text = format!(" Thanks! Your message is on its way to {recipient}. ");
    let paragraph = Paragraph::new(Line::from(Span::styled(
        text,
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green)),
    );
    frame.render_widget(paragraph, area);
}

fn submit_area(row: Rect) -> Rect {
    // Button hugs the left edge at a fixed width
    Rect {
        width: row.width.min(20),
        ..row
    }
}
