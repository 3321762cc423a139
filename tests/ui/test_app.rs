//! End-to-end key flows through the application

use std::fs;

use crossterm::event::KeyCode;
use tempfile::TempDir;

use evoscope::app::{App, View};
use evoscope::config::Config;

use super::{ctrl, key, render_to_text};
use crate::common::{day, fixture, fixture_today};

fn fixture_config() -> Config {
    Config {
        today: Some(fixture_today()),
        ..Config::default()
    }
}

fn fixture_app() -> App {
    App::with_entries(fixture_config(), fixture())
}

fn press(app: &mut App, code: KeyCode) {
    app.on_key_event(key(code));
}

fn screen(app: &App) -> String {
    render_to_text(120, 40, |frame| app.render(frame))
}

#[test]
fn test_app_starts_on_home() {
    let app = fixture_app();
    let text = screen(&app);

    assert_eq!(app.current_view, View::Home);
    assert!(text.contains("1 Home"));
    assert!(text.contains("4 Forge"));
    assert!(text.contains(" 5 entries "));
    assert!(text.contains("Continuity needs attention."));
    assert_eq!(app.forge_view.candidates().len(), 5);
    assert_eq!(app.constellation_view.positions().len(), 5);
}

#[test]
fn test_app_view_switching() {
    let mut app = fixture_app();

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.current_view, View::History);
    press(&mut app, KeyCode::Char('3'));
    assert_eq!(app.current_view, View::Constellation);
    assert!(screen(&app).contains(" spacing 24 "));
    press(&mut app, KeyCode::Char('4'));
    assert_eq!(app.current_view, View::Forge);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.current_view, View::Home);

    press(&mut app, KeyCode::Char('4'));
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.current_view, View::Home);
}

#[test]
fn test_app_home_enter_opens_history() {
    let mut app = fixture_app();
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.current_view, View::History);
    assert!(screen(&app).contains("History (5)"));
}

#[test]
fn test_app_history_jumps_to_constellation() {
    let mut app = fixture_app();
    press(&mut app, KeyCode::Char('2'));
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.current_view, View::Constellation);
    assert_eq!(app.constellation_view.selected(), 3);
    assert!(screen(&app).contains("Record memory · 2024-01-05 · memory"));
}

#[test]
fn test_app_spacing_relayouts() {
    let mut app = fixture_app();
    press(&mut app, KeyCode::Char('3'));
    let before = app.constellation_view.positions().to_vec();

    press(&mut app, KeyCode::Char('-'));
    press(&mut app, KeyCode::Char('-'));
    press(&mut app, KeyCode::Char('-'));
    press(&mut app, KeyCode::Char('-'));
    assert_eq!(app.constellation_view.spacing(), 8.0);
    assert_eq!(app.constellation_view.positions().len(), before.len());
    assert!(screen(&app).contains(" spacing 8 "));
}

#[test]
fn test_app_forge_regenerates_with_notification() {
    let mut app = fixture_app();
    press(&mut app, KeyCode::Char('4'));
    press(&mut app, KeyCode::Char('+'));

    assert_eq!(app.forge_view.novelty(), 0.75);
    let message = app.notification.as_ref().map(|n| n.message.as_str());
    assert_eq!(message, Some("Forged 5 candidate(s)"));

    let text = screen(&app);
    assert!(text.contains(" novelty 0.75 "));
    assert!(text.contains("Forged 5 candidate(s)"));
}

#[test]
fn test_app_help_toggle_and_quit() {
    let mut app = fixture_app();
    press(&mut app, KeyCode::Char('4'));
    press(&mut app, KeyCode::Char('?'));
    assert_eq!(app.current_view, View::Help);
    assert!(screen(&app).contains("evoscope - Help"));

    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Char('q'));
    assert_eq!(app.current_view, View::Forge);
    assert!(app.running);

    press(&mut app, KeyCode::Char('q'));
    assert!(!app.running);
}

#[test]
fn test_app_ctrl_c_quits_anywhere() {
    let mut app = fixture_app();
    press(&mut app, KeyCode::Char('?'));
    app.on_key_event(ctrl('c'));
    assert!(!app.running);
}

#[test]
fn test_app_missing_log_shows_error() {
    let dir = TempDir::new().unwrap();
    let config = Config {
        log: dir.path().join("absent.json"),
        ..fixture_config()
    };
    let mut app = App::new(config);

    let error = app.error_message.clone().unwrap();
    assert!(error.contains("Log file not found"));
    assert!(app.model.is_empty());
    assert!(app.forge_view.candidates().is_empty());
    assert!(screen(&app).contains("No entries yet."));

    press(&mut app, KeyCode::Char('j'));
    assert!(app.error_message.is_none());
}

#[test]
fn test_app_ctrl_l_reloads_from_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("log.json");
    fs::write(&path, r#"[{"date": "2024-01-01", "title": "One"}]"#).unwrap();

    let config = Config {
        log: path.clone(),
        ..fixture_config()
    };
    let mut app = App::new(config);
    assert_eq!(app.model.entries.len(), 1);
    assert!(app.error_message.is_none());

    fs::write(
        &path,
        r#"[{"date": "2024-01-01", "title": "One"}, {"date": "2024-01-02", "title": "Two"}]"#,
    )
    .unwrap();
    app.on_key_event(ctrl('l'));

    assert_eq!(app.model.entries.len(), 2);
    assert_eq!(app.model.latest_date, "2024-01-02");
    let message = app.notification.as_ref().map(|n| n.message.as_str());
    assert_eq!(message, Some("Reloaded 2 entries"));
}

#[test]
fn test_app_ctrl_l_picks_up_new_day() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("log.json");
    fs::write(&path, r#"[{"date": "2024-01-06", "title": "Split runtime"}]"#).unwrap();

    let config = Config {
        log: path,
        today: Some(day(2024, 1, 6)),
        ..Config::default()
    };
    let mut app = App::new(config);
    assert_eq!(app.model.cadence.latest_gap, 0);

    app.config.today = Some(day(2024, 1, 9));
    app.on_key_event(ctrl('l'));

    assert_eq!(app.today, day(2024, 1, 9));
    assert_eq!(app.model.cadence.latest_gap, 3);
    assert!(screen(&app).contains("Gap: 3 day(s)."));
}
