//! UI module for rendering the TUI

mod contact;
mod layout;
mod widgets;

use crate::app::App;
use crate::submit::SubmitClientTrait;
use ratatui::layout::{Constraint, Layout};
use ratatui::Frame;

/// Main draw function
pub fn draw<C: SubmitClientTrait>(frame: &mut Frame, app: &App<C>) {
    let area = frame.area();

    let rows = Layout::vertical([
        Constraint::Length(3), // nav bar
        Constraint::Min(10),   // contact form
        Constraint::Length(1), // status bar
    ])
    .split(area);

    layout::draw_nav(frame, rows[0], app);
    contact::draw(frame, rows[1], app);
    layout::draw_status_bar(frame, rows[2], app);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TuiConfig;
    use crate::state::{FieldId, SubmissionState};
    use crate::submit::MockSubmitClientTrait;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(app: &App<MockSubmitClientTrait>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn valid_app() -> App<MockSubmitClientTrait> {
        let mut app = App::new(TuiConfig::default(), MockSubmitClientTrait::new());
        app.form.field_mut(FieldId::Name).set_text("Jo".to_string());
        app.form
            .field_mut(FieldId::Email)
            .set_text("jo@x.com".to_string());
        app.form
            .field_mut(FieldId::Subject)
            .set_text("General".to_string());
        app.form
            .field_mut(FieldId::Message)
            .set_text("Hello there!".to_string());
        app
    }

    #[test]
    fn test_idle_frame_shows_enabled_send_control() {
        let text = render(&valid_app());
        assert!(text.contains("Send Message"));
        assert!(!text.contains("Sending..."));
    }

    #[test]
    fn test_sending_frame_shows_busy_label() {
        let mut app = valid_app();
        // The frame drawn between entering Sending and awaiting the
        // delivery carries the disabled control's busy label
        let snapshot = app.begin_submit();
        assert!(snapshot.is_some());
        assert!(app.submission.is_sending());

        let text = render(&app);
        assert!(text.contains("Sending..."));
        assert!(!text.contains("Send Message"));
    }

    #[test]
    fn test_validation_errors_render_in_field_slots() {
        let mut app = App::new(TuiConfig::default(), MockSubmitClientTrait::new());
        app.form.validate_form();
        let text = render(&app);
        assert!(text.contains("This field is required"));
    }

    #[test]
    fn test_success_banner_renders_while_succeeded() {
        let mut app = valid_app();
        app.submission = SubmissionState::Succeeded;
        let text = render(&app);
        assert!(text.contains("Thanks! Your message is on its way"));
    }
}
