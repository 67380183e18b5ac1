use common::Direction;
use crossterm::event::{KeyCode, KeyEvent};
use std::time::Duration;
use terminal::app::{App, AppCommand};

#[test]
fn test_key_events_steer_the_mapped_snake() {
    let mut app = App::new().expect("app");
    let p1 = app.players()[0].snake_id;
    let p2 = app.players()[1].snake_id;

    app.handle_input(KeyEvent::from(KeyCode::Char('a')));
    app.handle_input(KeyEvent::from(KeyCode::Right));

    assert_eq!(
        app.field().snake(p1).expect("p1 alive").direction,
        Direction::Left
    );
    assert_eq!(
        app.field().snake(p2).expect("p2 alive").direction,
        Direction::Right
    );
}

#[test]
fn test_unmapped_keys_do_nothing() {
    let mut app = App::new().expect("app");
    let p1 = app.players()[0].snake_id;

    assert!(app.handle_input(KeyEvent::from(KeyCode::Char('x'))).is_none());
    assert_eq!(
        app.field().snake(p1).expect("p1 alive").direction,
        Direction::Up
    );
}

#[test]
fn test_quit_keys_emit_quit() {
    let mut app = App::new().expect("app");
    assert!(matches!(
        app.handle_input(KeyEvent::from(KeyCode::Char('q'))),
        Some(AppCommand::Quit)
    ));
    assert!(matches!(
        app.handle_input(KeyEvent::from(KeyCode::Esc)),
        Some(AppCommand::Quit)
    ));
}

#[test]
fn test_update_advances_on_tick_boundaries() {
    let mut app = App::new().expect("app");
    let p1 = app.players()[0].snake_id;
    let before = app.field().snake(p1).expect("p1 alive").head();

    // Below the tick interval, nothing moves.
    app.update(Duration::from_millis(50));
    assert_eq!(app.field().snake(p1).expect("p1 alive").head(), before);

    app.update(Duration::from_millis(100));
    assert_ne!(app.field().snake(p1).expect("p1 alive").head(), before);
}

#[test]
fn test_pause_freezes_the_field() {
    let mut app = App::new().expect("app");
    let p1 = app.players()[0].snake_id;
    let before = app.field().snake(p1).expect("p1 alive").head();

    app.handle_input(KeyEvent::from(KeyCode::Char(' ')));
    app.update(Duration::from_millis(500));
    assert_eq!(app.field().snake(p1).expect("p1 alive").head(), before);

    app.handle_input(KeyEvent::from(KeyCode::Char(' ')));
    app.update(Duration::from_millis(100));
    assert_ne!(app.field().snake(p1).expect("p1 alive").head(), before);
}

#[test]
fn test_restart_resets_the_field() {
    let mut app = App::new().expect("app");
    for _ in 0..5 {
        app.update(Duration::from_millis(100));
    }
    app.handle_command(AppCommand::Restart).expect("restart");

    assert_eq!(app.players().len(), 2);
    assert_eq!(app.field().snakes().len(), 2);
    let p1 = app.players()[0].snake_id;
    assert_eq!(app.field().snake(p1).expect("p1 alive").len(), 3);
}
