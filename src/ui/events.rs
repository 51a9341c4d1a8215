use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use crate::format::FormatChoice;
use crate::ui::app::{App, FocusedField};

pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    // Global keys work from any field
    match (key.code, key.modifiers) {
        (KeyCode::Tab, _) => {
            cycle_focus_forward(app);
            return;
        }
        (KeyCode::BackTab, _) => {
            cycle_focus_backward(app);
            return;
        }
        (KeyCode::Esc, _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            app.should_quit = true;
            return;
        }
        (KeyCode::Char('y'), KeyModifiers::CONTROL) => {
            app.request_copy();
            return;
        }
        _ => {}
    }

    match app.focused_field {
        FocusedField::Url => handle_url_keys(app, key),
        FocusedField::Format => handle_format_keys(app, key),
        FocusedField::Output => handle_output_keys(app, key),
        FocusedField::CopyButton => handle_copy_button_keys(app, key),
    }
}

fn cycle_focus_forward(app: &mut App) {
    app.focused_field = match app.focused_field {
        FocusedField::Url => FocusedField::Format,
        FocusedField::Format if app.output_visible() => FocusedField::Output,
        FocusedField::Format => FocusedField::CopyButton,
        FocusedField::Output => FocusedField::CopyButton,
        FocusedField::CopyButton => FocusedField::Url,
    };
}

fn cycle_focus_backward(app: &mut App) {
    app.focused_field = match app.focused_field {
        FocusedField::Url => FocusedField::CopyButton,
        FocusedField::CopyButton if app.output_visible() => FocusedField::Output,
        FocusedField::CopyButton => FocusedField::Format,
        FocusedField::Output => FocusedField::Format,
        FocusedField::Format => FocusedField::Url,
    };
}

fn handle_url_keys(app: &mut App, key: KeyEvent) {
    match (key.code, key.modifiers) {
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => app.clear_url(),
        (KeyCode::Char(_), m) if m.contains(KeyModifiers::CONTROL) => {}
        (KeyCode::Char(c), _) => app.push_url_char(c),
        (KeyCode::Backspace, _) => app.pop_url_char(),
        (KeyCode::Enter, _) => cycle_focus_forward(app),
        _ => {}
    }
}

fn handle_format_keys(app: &mut App, key: KeyEvent) {
    let last = FormatChoice::ALL.len() - 1;
    match key.code {
        KeyCode::Up | KeyCode::Char('k') if app.format_index > 0 => {
            app.select_format(app.format_index - 1);
        }
        KeyCode::Down | KeyCode::Char('j') if app.format_index < last => {
            app.select_format(app.format_index + 1);
        }
        KeyCode::Home => app.select_format(0),
        KeyCode::End => app.select_format(last),
        KeyCode::Enter => cycle_focus_forward(app),
        KeyCode::Char('q') => app.should_quit = true,
        _ => {}
    }
}

fn handle_output_keys(app: &mut App, key: KeyEvent) {
    let last = app.output_locations.len().saturating_sub(1);
    match key.code {
        KeyCode::Up | KeyCode::Char('k') if app.output_index > 0 => {
            app.select_output(app.output_index - 1);
        }
        KeyCode::Down | KeyCode::Char('j') if app.output_index < last => {
            app.select_output(app.output_index + 1);
        }
        KeyCode::Enter => cycle_focus_forward(app),
        KeyCode::Char('q') => app.should_quit = true,
        _ => {}
    }
}

fn handle_copy_button_keys(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => app.request_copy(),
        KeyCode::Char('q') => app.should_quit = true,
        _ => {}
    }
}
