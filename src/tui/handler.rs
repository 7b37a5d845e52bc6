//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the current
//! application state.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{ActiveDialog, ActiveView, App, FormField};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => app.tick(),
        Event::Resize(_, _) => {}
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    // Any key closes the help dialog
    if app.has_dialog() {
        app.close_dialog();
        return;
    }

    match app.active_view {
        ActiveView::Create => handle_form_key(app, key),
        ActiveView::History => handle_history_key(app, key),
    }
}

/// Handle keys while the form has focus
fn handle_form_key(app: &mut App, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('s') if ctrl => app.submit(),
        KeyCode::F(2) => app.submit(),
        KeyCode::F(1) => app.open_dialog(ActiveDialog::Help),

        KeyCode::Esc => {
            if app.is_editing() {
                app.cancel_edit();
            } else {
                app.switch_view(ActiveView::History);
            }
        }

        KeyCode::Tab | KeyCode::BackTab => app.toggle_field(),

        KeyCode::Enter => match app.focused_field {
            FormField::Title => app.focus_field(FormField::Note),
            FormField::Note => app.note_input.insert('\n'),
        },

        KeyCode::Backspace => app.focused_input_mut().backspace(),
        KeyCode::Delete => app.focused_input_mut().delete(),
        KeyCode::Left => app.focused_input_mut().move_left(),
        KeyCode::Right => app.focused_input_mut().move_right(),
        KeyCode::Home => app.focused_input_mut().move_start(),
        KeyCode::End => app.focused_input_mut().move_end(),
        KeyCode::Char(c) if !ctrl => app.focused_input_mut().insert(c),

        _ => {}
    }
}

/// Handle keys in the history list
fn handle_history_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('?') | KeyCode::F(1) => app.open_dialog(ActiveDialog::Help),

        // View switching
        KeyCode::Char('1') | KeyCode::Char('n') | KeyCode::Tab => {
            app.switch_view(ActiveView::Create)
        }
        KeyCode::Char('2') => app.switch_view(ActiveView::History),

        // Navigation
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('g') | KeyCode::Home => app.select_first(),
        KeyCode::Char('G') | KeyCode::End => app.select_last(),

        // Item actions
        KeyCode::Char('p') => app.print_selected(),
        KeyCode::Char('e') | KeyCode::Enter => app.edit_selected(),
        KeyCode::Char('d') | KeyCode::Delete => app.delete_selected(),

        _ => {}
    }
}
