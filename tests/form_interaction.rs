//! Keyboard-driven form behavior, no network involved.

mod common;

use common::{fill_form, offline_app, press, render, type_text, EMAIL, PASSWORD, USERNAME};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use signup::ui::form::Field;
use signup::ui::input::handle_key;
use signup::ui::view::Control;

#[test]
fn typing_updates_focused_input() {
    let mut app = offline_app();
    type_text(&mut app, USERNAME);

    let view = app.view_model();
    assert_eq!(view.input("user name").unwrap().value(), Some(USERNAME));
}

#[test]
fn backspace_removes_last_character() {
    let mut app = offline_app();
    type_text(&mut app, "mutt");
    press(&mut app, KeyCode::Backspace);
    assert_eq!(app.controller().form().value(Field::Username), "mut");
}

#[test]
fn invalid_email_error_appears_after_submit_attempt() {
    let mut app = offline_app();
    fill_form(&mut app, "mut", "mmm.com", "1234");
    assert_eq!(app.focus(), Control::Submit);
    press(&mut app, KeyCode::Enter);

    let view = app.view_model();
    assert!(view.has_text("Enter a valid email"));
    assert!(app.controller().submission().accepts_submit());
    assert!(!app.controller().submission().is_submitting());
}

#[test]
fn short_password_error_appears_on_blur() {
    let mut app = offline_app();
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus(), Control::Input(Field::Password));
    type_text(&mut app, "12dd34");
    press(&mut app, KeyCode::Tab);

    assert!(app
        .view_model()
        .has_text("Password should be of minimum 8 characters length"));
}

#[test]
fn emptied_email_reports_required_on_blur() {
    let mut app = offline_app();
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "muthana.com");
    for _ in 0.."muthana.com".len() {
        press(&mut app, KeyCode::Backspace);
    }
    press(&mut app, KeyCode::Tab);

    assert!(app.view_model().has_text("Email is required"));
}

#[test]
fn emptied_password_reports_required_on_blur() {
    let mut app = offline_app();
    press(&mut app, KeyCode::BackTab);
    press(&mut app, KeyCode::BackTab);
    assert_eq!(app.focus(), Control::Input(Field::Password));
    type_text(&mut app, "muthana.com");
    for _ in 0.."muthana.com".len() {
        press(&mut app, KeyCode::Backspace);
    }
    press(&mut app, KeyCode::Up);

    assert!(app.view_model().has_text("Password is required"));
}

#[test]
fn username_error_waits_for_blur() {
    let mut app = offline_app();
    type_text(&mut app, " ");
    assert!(!app.view_model().has_text("User name is required"));
    press(&mut app, KeyCode::Tab);
    assert!(app.view_model().has_text("User name is required"));
}

#[test]
fn sign_up_button_enabled_when_form_valid() {
    let mut app = offline_app();
    fill_form(&mut app, USERNAME, EMAIL, PASSWORD);
    assert!(app.view_model().button("sign up").unwrap().is_enabled());
}

#[test]
fn sign_up_button_disabled_while_form_invalid() {
    let mut app = offline_app();
    assert!(!app.view_model().button("sign up").unwrap().is_enabled());

    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "invalidEmail.com");
    assert!(!app.view_model().button("sign up").unwrap().is_enabled());

    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "password");
    assert!(!app.view_model().button("sign up").unwrap().is_enabled());
}

#[test]
fn enter_on_input_moves_to_next_control() {
    let mut app = offline_app();
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.focus(), Control::Input(Field::Email));
}

#[test]
fn focus_wraps_around() {
    let mut app = offline_app();
    press(&mut app, KeyCode::Up);
    assert_eq!(app.focus(), Control::Submit);
    press(&mut app, KeyCode::Down);
    assert_eq!(app.focus(), Control::Input(Field::Username));
}

#[test]
fn control_chars_are_not_typed() {
    let mut app = offline_app();
    handle_key(
        &mut app,
        KeyEvent::new(KeyCode::Char('a'), KeyModifiers::ALT),
    );
    assert_eq!(app.controller().form().value(Field::Username), "");
}

#[test]
fn key_release_is_ignored() {
    let mut app = offline_app();
    let mut key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
    key.kind = KeyEventKind::Release;
    handle_key(&mut app, key);
    assert_eq!(app.controller().form().value(Field::Username), "");
}

#[test]
fn ctrl_q_quits() {
    let mut app = offline_app();
    handle_key(
        &mut app,
        KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL),
    );
    assert!(app.should_quit());
    assert!(!app.controller().is_mounted());
}

#[test]
fn password_is_masked_on_screen() {
    let mut app = offline_app();
    fill_form(&mut app, USERNAME, EMAIL, PASSWORD);
    let screen = render(&app);
    assert!(screen.contains(USERNAME));
    assert!(screen.contains(EMAIL));
    assert!(!screen.contains(PASSWORD));
    assert!(screen.contains(&"•".repeat(PASSWORD.chars().count())));
}

#[test]
fn field_labels_are_drawn() {
    let screen = render(&offline_app());
    assert!(screen.contains("User Name"));
    assert!(screen.contains("Email Address"));
    assert!(screen.contains("Password"));
    assert!(screen.contains("[ Sign Up ]"));
}
