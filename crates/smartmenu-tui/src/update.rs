//! Screen reducer.
//!
//! Translates terminal input into controller operations. Everything that
//! touches form data goes through `LoginSession`; focus, quitting and the
//! notice dialog are handled here.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::state::{AppState, Focus};

/// Events consumed by the screen reducer.
#[derive(Debug)]
pub enum UiEvent {
    /// Frame tick, advances the spinner.
    Tick,
    /// Raw terminal input.
    Terminal(Event),
}

/// The screen reducer.
pub fn update(app: &mut AppState, event: UiEvent) {
    match event {
        UiEvent::Tick => {
            if app.session.controller().is_submitting() {
                app.spinner_frame = app.spinner_frame.wrapping_add(1);
            }
        }
        UiEvent::Terminal(Event::Key(key)) => handle_key(app, key),
        UiEvent::Terminal(Event::Paste(text)) => {
            if app.notice().is_none() {
                let line: String = text.chars().filter(|c| !c.is_control()).collect();
                edit_focused(app, |value| value.push_str(&line));
            }
        }
        UiEvent::Terminal(_) => {}
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) {
    if key.kind == KeyEventKind::Release {
        return;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if ctrl && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    // The notice is modal.
    if app.notice().is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
            app.dismiss_notice();
        }
        return;
    }

    match key.code {
        KeyCode::Esc => app.should_quit = true,
        KeyCode::Tab | KeyCode::Down => app.focus = app.focus.next(),
        KeyCode::BackTab | KeyCode::Up => app.focus = app.focus.prev(),
        KeyCode::Char('t') if ctrl => app.session.toggle_show_password(),
        KeyCode::Enter => activate(app),
        KeyCode::Char(' ') if !app.focus.is_text_field() => activate(app),
        KeyCode::Backspace => edit_focused(app, |value| {
            value.pop();
        }),
        KeyCode::Char(c) if !ctrl => edit_focused(app, |value| value.push(c)),
        _ => {}
    }
}

/// Presses the focused control.
fn activate(app: &mut AppState) {
    match app.focus {
        Focus::Email => app.focus = Focus::Password,
        Focus::Password | Focus::Submit => app.session.submit(),
        Focus::ShowPassword => app.session.toggle_show_password(),
        Focus::ForgotPassword => app.session.request_password_recovery(),
    }
}

/// Applies `edit` to the focused text field and forwards the new value.
fn edit_focused(app: &mut AppState, edit: impl FnOnce(&mut String)) {
    match app.focus {
        Focus::Email => {
            let mut value = app.form().email.clone();
            edit(&mut value);
            app.session.set_email(value);
        }
        Focus::Password => {
            let mut value = app.form().password.clone();
            edit(&mut value);
            app.session.set_password(value);
        }
        _ => {}
    }
}
