//! Application wiring: key handling, dialog lifecycle, app events

use crate::config::AppConfig;
use crate::platform::SHORTCUT_MODIFIER;
use crate::state::{
    AppState, CloseReason, ContactDialog, FormSnapshot, PageFocus, Section, BUTTON_SEND,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use std::time::Duration;
use tokio::sync::mpsc;

/// Events delivered to the main loop from outside the keyboard path.
#[derive(Debug)]
pub enum AppEvent {
    /// The (possibly delayed) success notice is ready to show
    ShowSuccessNotice(String),
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// The modal contact dialog
    pub dialog: ContactDialog,
    /// User configuration (theme, success-notice delay)
    config: AppConfig,
    /// Whether the app should quit
    quit: bool,
    events_tx: mpsc::UnboundedSender<AppEvent>,
    events_rx: mpsc::UnboundedReceiver<AppEvent>,
}

impl App {
    /// Create a new App instance with configuration from disk.
    pub fn new() -> Result<Self> {
        let config = AppConfig::load().unwrap_or_else(|err| {
            tracing::warn!(%err, "could not load config, using defaults");
            AppConfig::default()
        });
        Ok(Self::with_config(config))
    }

    pub fn with_config(config: AppConfig) -> Self {
        let mut state = AppState::default();
        if let Some(theme) = config.theme {
            state.theme = theme;
        }
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            state,
            dialog: ContactDialog::new(),
            config,
            quit: false,
            events_tx,
            events_rx,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Apply app events queued since the last tick.
    pub fn drain_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            match event {
                AppEvent::ShowSuccessNotice(notice) => {
                    // Fires even if other things happened in the meantime;
                    // it only toggles a visual state.
                    self.state.success_notice = Some(notice);
                }
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // The success notice is modal until dismissed.
        if self.state.success_notice.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.success_notice = None;
            }
            return Ok(());
        }

        if self.dialog.is_open() {
            self.handle_dialog_key(key);
            return Ok(());
        }

        self.handle_page_key(key);
        Ok(())
    }

    fn handle_page_key(&mut self, key: KeyEvent) {
        // Transient status lines do not outlive the next key press.
        self.state.status_message = None;

        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char('t') => self.toggle_theme(),
            KeyCode::Down | KeyCode::Tab => {
                self.state.page_focus = self.state.page_focus.next();
            }
            KeyCode::Up | KeyCode::BackTab => {
                self.state.page_focus = self.state.page_focus.prev();
            }
            KeyCode::Char('c') => self.open_dialog(),
            KeyCode::Enter => {
                // Enter activates the contact button or the contact section.
                if matches!(
                    self.state.page_focus,
                    PageFocus::ContactButton | PageFocus::Section(Section::Contact)
                ) {
                    self.open_dialog();
                }
            }
            _ => {}
        }
    }

    fn handle_dialog_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc {
            self.close_dialog(CloseReason::Cancel);
            return;
        }

        // Submit shortcut works from any field.
        if key.modifiers.contains(SHORTCUT_MODIFIER) && key.code == KeyCode::Char('s') {
            self.try_submit();
            return;
        }

        if self.dialog.form.is_buttons_row_active() {
            match key.code {
                KeyCode::Left | KeyCode::Right => self.dialog.form.next_button(),
                KeyCode::Tab | KeyCode::Down => self.dialog.form.next_field(),
                KeyCode::BackTab | KeyCode::Up => self.dialog.form.prev_field(),
                KeyCode::Enter => {
                    if self.dialog.form.selected_button == BUTTON_SEND {
                        self.try_submit();
                    } else {
                        self.close_dialog(CloseReason::Cancel);
                    }
                }
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.dialog.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.dialog.form.prev_field(),
            KeyCode::Enter => {
                if self.dialog.form.is_active_field_multiline() {
                    if let Some(field) = self.dialog.form.active_field_mut() {
                        field.push_newline();
                    }
                } else {
                    self.dialog.form.next_field();
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = self.dialog.form.active_field_mut() {
                    field.pop_char();
                }
                self.dialog.form.refresh_active_annotation();
            }
            KeyCode::Char(c) => {
                if let Some(field) = self.dialog.form.active_field_mut() {
                    field.push_char(c);
                }
                self.dialog.form.refresh_active_annotation();
            }
            _ => {}
        }
    }

    /// Open the contact dialog, capturing the current page focus.
    pub fn open_dialog(&mut self) {
        self.dialog.open(self.state.page_focus);
    }

    /// Close the dialog and restore the captured page focus.
    pub fn close_dialog(&mut self, reason: CloseReason) {
        self.dialog.close(reason);
        if let Some(focus) = self.dialog.restored_focus() {
            self.state.page_focus = focus;
        }
    }

    fn try_submit(&mut self) {
        match self.dialog.submit() {
            Ok(snapshot) => {
                // The dialog closed itself with reason Success.
                if let Some(focus) = self.dialog.restored_focus() {
                    self.state.page_focus = focus;
                }
                self.queue_success_notice(&snapshot);
            }
            Err(result) => {
                let invalid = result
                    .field_results
                    .iter()
                    .filter(|(_, r)| !r.is_valid)
                    .count();
                self.state.status_message =
                    Some(format!("Please correct {invalid} field(s) before sending"));
            }
        }
    }

    /// Show the confirmation, immediately or after the configured delay.
    /// The delayed task is fire-and-forget: nothing cancels it.
    fn queue_success_notice(&mut self, snapshot: &FormSnapshot) {
        let name = snapshot.get("name").unwrap_or("there");
        let notice = format!("Thank you, {name}! We will get back to you shortly.");

        match self.config.success_delay_ms {
            Some(delay_ms) => {
                let tx = self.events_tx.clone();
                tokio::spawn(async move {
                    tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                    let _ = tx.send(AppEvent::ShowSuccessNotice(notice));
                });
            }
            None => self.state.success_notice = Some(notice),
        }
    }

    fn toggle_theme(&mut self) {
        self.state.theme = self.state.theme.toggle();
        self.config.theme = Some(self.state.theme);
        // Written on every toggle; a failed write only costs persistence.
        if let Err(err) = self.config.save() {
            tracing::warn!(%err, "could not persist theme preference");
            self.state.status_message = Some("Theme preference could not be saved".to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use pretty_assertions::assert_eq;

    fn test_app() -> App {
        App::with_config(AppConfig::default())
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
    }

    fn press_ctrl(app: &mut App, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), SHORTCUT_MODIFIER))
            .unwrap();
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn fill_valid_form(app: &mut App) {
        type_text(app, "Anna");
        press(app, KeyCode::Tab);
        type_text(app, "anna@example.com");
        press(app, KeyCode::Tab);
        type_text(app, "89001234567");
    }

    #[test]
    fn test_quit_on_q() {
        let mut app = test_app();
        assert!(!app.should_quit());
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit());
    }

    #[test]
    fn test_focus_traversal_on_page() {
        let mut app = test_app();
        assert_eq!(app.state.page_focus, PageFocus::Section(Section::Home));
        press(&mut app, KeyCode::Down);
        assert_eq!(app.state.page_focus, PageFocus::Section(Section::Listings));
        press(&mut app, KeyCode::Up);
        assert_eq!(app.state.page_focus, PageFocus::Section(Section::Home));
    }

    #[test]
    fn test_open_dialog_captures_focus() {
        let mut app = test_app();
        press(&mut app, KeyCode::Down); // Listings
        press(&mut app, KeyCode::Char('c'));
        assert!(app.dialog.is_open());
        assert_eq!(
            app.dialog.restored_focus(),
            Some(PageFocus::Section(Section::Listings))
        );
    }

    #[test]
    fn test_enter_on_contact_button_opens_dialog() {
        let mut app = test_app();
        app.state.page_focus = PageFocus::ContactButton;
        press(&mut app, KeyCode::Enter);
        assert!(app.dialog.is_open());
    }

    #[test]
    fn test_enter_elsewhere_does_not_open_dialog() {
        let mut app = test_app();
        press(&mut app, KeyCode::Enter); // Home section focused
        assert!(!app.dialog.is_open());
    }

    #[test]
    fn test_esc_cancels_and_restores_focus() {
        let mut app = test_app();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down); // Agents
        press(&mut app, KeyCode::Char('c'));
        type_text(&mut app, "half-typed");
        press(&mut app, KeyCode::Esc);
        assert!(!app.dialog.is_open());
        assert_eq!(app.dialog.close_reason(), Some(CloseReason::Cancel));
        assert_eq!(app.state.page_focus, PageFocus::Section(Section::Agents));
        // Cancel clears everything.
        assert!(app.dialog.form.fields().iter().all(|f| f.value().is_empty()));
    }

    #[test]
    fn test_typing_goes_to_active_field() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('c'));
        type_text(&mut app, "Anna");
        assert_eq!(app.dialog.form.get_field(0).unwrap().value(), "Anna");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.dialog.form.get_field(0).unwrap().value(), "Ann");
    }

    #[test]
    fn test_phone_typed_through_dialog_gets_masked() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('c'));
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab); // phone field
        type_text(&mut app, "8900");
        assert_eq!(app.dialog.form.get_field(2).unwrap().value(), "+7 (900");
    }

    #[test]
    fn test_enter_in_multiline_inserts_newline() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('c'));
        for _ in 0..3 {
            press(&mut app, KeyCode::Tab); // message field
        }
        type_text(&mut app, "line one");
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "line two");
        assert_eq!(
            app.dialog.form.get_field(3).unwrap().value(),
            "line one\nline two"
        );
    }

    #[test]
    fn test_submit_invalid_keeps_dialog_open_with_status() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('c'));
        press_ctrl(&mut app, 's');
        assert!(app.dialog.is_open());
        assert!(app.dialog.form.has_errors());
        assert!(app
            .state
            .status_message
            .as_deref()
            .unwrap()
            .contains("correct"));
    }

    #[test]
    fn test_submit_valid_closes_and_shows_notice_immediately() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('c'));
        fill_valid_form(&mut app);
        press_ctrl(&mut app, 's');
        assert!(!app.dialog.is_open());
        assert_eq!(app.dialog.close_reason(), Some(CloseReason::Success));
        let notice = app.state.success_notice.as_deref().unwrap();
        assert!(notice.contains("Anna"));
    }

    #[test]
    fn test_send_button_submits() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('c'));
        fill_valid_form(&mut app);
        press(&mut app, KeyCode::Tab); // message
        press(&mut app, KeyCode::Tab); // buttons row
        assert!(app.dialog.form.is_buttons_row_active());
        assert_eq!(app.dialog.form.selected_button, BUTTON_SEND);
        press(&mut app, KeyCode::Enter);
        assert!(!app.dialog.is_open());
        assert!(app.state.success_notice.is_some());
    }

    #[test]
    fn test_cancel_button_closes_without_submit() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('c'));
        fill_valid_form(&mut app);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab); // buttons row
        press(&mut app, KeyCode::Left); // Cancel
        press(&mut app, KeyCode::Enter);
        assert!(!app.dialog.is_open());
        assert_eq!(app.dialog.close_reason(), Some(CloseReason::Cancel));
        assert!(app.state.success_notice.is_none());
    }

    #[test]
    fn test_success_notice_is_modal_until_dismissed() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('c'));
        fill_valid_form(&mut app);
        press_ctrl(&mut app, 's');
        assert!(app.state.success_notice.is_some());
        // Keys other than Enter/Esc are swallowed.
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit());
        press(&mut app, KeyCode::Enter);
        assert!(app.state.success_notice.is_none());
    }

    #[test]
    fn test_reopen_after_success_is_empty() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('c'));
        fill_valid_form(&mut app);
        press_ctrl(&mut app, 's');
        press(&mut app, KeyCode::Enter); // dismiss notice
        press(&mut app, KeyCode::Char('c'));
        assert!(app.dialog.is_open());
        assert!(app.dialog.form.fields().iter().all(|f| f.value().is_empty()));
        assert!(!app.dialog.form.has_errors());
    }

    #[test]
    fn test_error_annotation_clears_while_correcting() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('c'));
        press_ctrl(&mut app, 's'); // all required fields flagged
        assert!(app.dialog.form.get_field(0).unwrap().invalid);
        type_text(&mut app, "A");
        assert!(!app.dialog.form.get_field(0).unwrap().invalid);
    }

    #[tokio::test]
    async fn test_delayed_success_notice_arrives_via_events() {
        let mut app = App::with_config(AppConfig {
            theme: None,
            success_delay_ms: Some(10),
        });
        press(&mut app, KeyCode::Char('c'));
        fill_valid_form(&mut app);
        press_ctrl(&mut app, 's');
        assert!(!app.dialog.is_open());
        // Not visible yet: the delay has not elapsed.
        app.drain_events();
        assert!(app.state.success_notice.is_none());

        tokio::time::sleep(Duration::from_millis(50)).await;
        app.drain_events();
        assert!(app.state.success_notice.is_some());
    }

    #[tokio::test]
    async fn test_delayed_notice_still_fires_after_other_activity() {
        let mut app = App::with_config(AppConfig {
            theme: None,
            success_delay_ms: Some(10),
        });
        press(&mut app, KeyCode::Char('c'));
        fill_valid_form(&mut app);
        press_ctrl(&mut app, 's');
        // User keeps navigating before the delay elapses; the eventual
        // event still only toggles the visual state.
        press(&mut app, KeyCode::Down);
        tokio::time::sleep(Duration::from_millis(50)).await;
        app.drain_events();
        assert!(app.state.success_notice.is_some());
    }
}
