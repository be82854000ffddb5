//! Nav bar and status bar

use crate::app::App;
use crate::submit::SubmitClientTrait;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the site navigation bar, reflecting the menu state
pub fn draw_nav<C: SubmitClientTrait>(frame: &mut Frame, area: Rect, app: &App<C>) {
    let mut spans = vec![
        Span::styled(
            app.nav.toggle_symbol(),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw("  "),
    ];
    for (i, item) in app.nav.visible_items().iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  |  ", Style::default().fg(Color::DarkGray)));
        }
        let style = if *item == "Contact" {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(*item, style));
    }
    if app.nav.scroll_locked() {
        spans.push(Span::styled(
            "  (scroll held)",
            Style::default().fg(Color::DarkGray),
        ));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Get in touch ");
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// Draw the status bar with key hints
pub fn draw_status_bar<C: SubmitClientTrait>(frame: &mut Frame, area: Rect, app: &App<C>) {
    let hints = if app.submission.is_sending() {
        "Sending...".to_string()
    } else {
        format!(
            "Tab: next field | {}: send | Ctrl+N: menu | Esc: quit",
            crate::platform::SEND_SHORTCUT
        )
    };
    let line = Line::from(Span::styled(hints, Style::default().fg(Color::DarkGray)));
    frame.render_widget(Paragraph::new(line), area);
}
