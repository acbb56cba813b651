use super::*;
use crate::testing::{tweet, FakeApi};
use crate::toast::POSTED_MESSAGE;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Helper to create a KeyEvent
fn key_event(code: KeyCode) -> KeyEvent {
    let mut event = KeyEvent::new(code, KeyModifiers::empty());
    event.kind = KeyEventKind::Press;
    event
}

fn ctrl(c: char) -> KeyEvent {
    let mut event = KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL);
    event.kind = KeyEventKind::Press;
    event
}

fn type_str(app: &mut App, s: &str) {
    for c in s.chars() {
        app.handle_key_event(key_event(KeyCode::Char(c))).unwrap();
    }
}

fn alice() -> Session {
    Session::for_user("alice", Some("http://x/a.png".to_string()))
}

fn app_with(api: FakeApi, session: Option<Session>) -> (Arc<FakeApi>, App) {
    let api = Arc::new(api);
    let app = App::new(api.clone(), session, "http://test");
    (api, app)
}

/// Apply background events until every submission has finished
async fn settle(app: &mut App) {
    while app.in_flight > 0 {
        let event = app.events_rx.recv().await.expect("channel open");
        app.apply_event(event);
    }
    app.drain_events();
}

#[test]
fn test_signed_in_app_starts_in_compose_form() {
    let (_api, app) = app_with(FakeApi::default(), Some(alice()));
    assert_eq!(app.input_mode, InputMode::Typing);

    let (_api, app) = app_with(FakeApi::default(), None);
    assert_eq!(app.input_mode, InputMode::Navigation);
}

#[test]
fn test_escape_closes_image_panel_before_leaving_form() {
    let (_api, mut app) = app_with(FakeApi::default(), Some(alice()));

    app.handle_key_event(ctrl('p')).unwrap();
    assert!(app.compose.image_panel_open);
    assert_eq!(app.compose.focus, Focus::ImageUrl);

    app.handle_key_event(key_event(KeyCode::Esc)).unwrap();
    assert!(!app.compose.image_panel_open);
    assert_eq!(app.input_mode, InputMode::Typing);

    app.handle_key_event(key_event(KeyCode::Esc)).unwrap();
    assert_eq!(app.input_mode, InputMode::Navigation);
    assert!(app.running);

    app.handle_key_event(key_event(KeyCode::Char('q'))).unwrap();
    assert!(!app.running);
}

#[test]
fn test_image_url_entry_and_confirm() {
    let (_api, mut app) = app_with(FakeApi::default(), Some(alice()));
    type_str(&mut app, "caption");

    app.handle_key_event(ctrl('p')).unwrap();
    type_str(&mut app, "http://x/pic.pngg");
    app.handle_key_event(key_event(KeyCode::Backspace)).unwrap();
    app.handle_key_event(key_event(KeyCode::Enter)).unwrap();

    assert_eq!(app.compose.image, "http://x/pic.png");
    assert!(app.compose.image_url_input.is_empty());
    assert!(!app.compose.image_panel_open);
    assert_eq!(app.compose.text(), "caption");
}

#[test]
fn test_confirming_empty_url_changes_nothing() {
    let (_api, mut app) = app_with(FakeApi::default(), Some(alice()));

    app.handle_key_event(ctrl('p')).unwrap();
    app.handle_key_event(key_event(KeyCode::Enter)).unwrap();

    assert!(app.compose.image_panel_open);
    assert!(app.compose.image.is_empty());
    assert_eq!(app.in_flight, 0);
}

#[test]
fn test_tab_switches_focus_only_with_panel_open() {
    let (_api, mut app) = app_with(FakeApi::default(), Some(alice()));

    app.handle_key_event(ctrl('p')).unwrap();
    app.handle_key_event(key_event(KeyCode::Tab)).unwrap();
    assert_eq!(app.compose.focus, Focus::Text);
    type_str(&mut app, "hi");
    assert_eq!(app.compose.text(), "hi");
    assert!(app.compose.image_url_input.is_empty());

    app.handle_key_event(key_event(KeyCode::Tab)).unwrap();
    assert_eq!(app.compose.focus, Focus::ImageUrl);
}

#[test]
fn test_enter_with_empty_text_issues_no_request() {
    let (_api, mut app) = app_with(FakeApi::default(), Some(alice()));

    app.handle_key_event(key_event(KeyCode::Enter)).unwrap();
    assert_eq!(app.in_flight, 0);
    assert!(app.events_rx.try_recv().is_err());
}

#[test]
fn test_signed_out_user_cannot_submit() {
    let (_api, mut app) = app_with(FakeApi::default(), None);
    app.handle_key_event(key_event(KeyCode::Char('i'))).unwrap();
    type_str(&mut app, "hello");

    assert!(!app.can_submit());
    app.handle_key_event(key_event(KeyCode::Enter)).unwrap();

    assert_eq!(app.in_flight, 0);
    assert_eq!(app.compose.text(), "hello");
}

#[tokio::test]
async fn test_submit_posts_refreshes_and_notifies() {
    let (api, mut app) = app_with(FakeApi::with_feed(vec![tweet("1", "hello")]), Some(alice()));
    type_str(&mut app, "hello");

    app.handle_key_event(key_event(KeyCode::Enter)).unwrap();

    // Reset happens immediately, before the request completes
    assert_eq!(app.compose.text(), "");
    assert!(!app.compose.image_panel_open);
    assert_eq!(app.in_flight, 1);

    settle(&mut app).await;

    assert_eq!(api.posted(), vec![crate::testing::body("hello")]);
    assert_eq!(app.feed.tweets.len(), 1);
    assert_eq!(app.feed.tweets[0].text, "hello");
    assert!(app.toaster.visible().any(|t| t.message == POSTED_MESSAGE));
}

#[tokio::test]
async fn test_submit_sends_attached_image() {
    let (api, mut app) = app_with(FakeApi::default(), Some(alice()));
    type_str(&mut app, "look");
    app.handle_key_event(ctrl('p')).unwrap();
    type_str(&mut app, "http://x/pic.png");
    app.handle_key_event(key_event(KeyCode::Enter)).unwrap();

    app.handle_key_event(ctrl('s')).unwrap();
    assert!(app.compose.image.is_empty());
    settle(&mut app).await;

    let posted = api.posted();
    assert_eq!(posted.len(), 1);
    assert_eq!(posted[0].image, "http://x/pic.png");
}

#[tokio::test]
async fn test_persist_failure_restores_draft() {
    let (_api, mut app) = app_with(FakeApi::failing_persist(), Some(alice()));
    type_str(&mut app, "hello");
    app.handle_key_event(key_event(KeyCode::Enter)).unwrap();
    assert_eq!(app.compose.text(), "");

    settle(&mut app).await;

    assert_eq!(app.compose.text(), "hello");
    assert!(!app.toaster.visible().any(|t| t.message == POSTED_MESSAGE));
    assert!(app.feed.tweets.is_empty());
}

#[tokio::test]
async fn test_overlapping_submissions_all_complete() {
    let (api, mut app) = app_with(FakeApi::with_feed(vec![tweet("1", "x")]), Some(alice()));

    type_str(&mut app, "one");
    app.handle_key_event(key_event(KeyCode::Enter)).unwrap();
    type_str(&mut app, "two");
    app.handle_key_event(key_event(KeyCode::Enter)).unwrap();
    assert_eq!(app.in_flight, 2);

    settle(&mut app).await;

    let mut texts: Vec<_> = api.posted().into_iter().map(|b| b.text).collect();
    texts.sort();
    assert_eq!(texts, vec!["one", "two"]);
    assert_eq!(api.fetch_count(), 2);
}

#[tokio::test]
async fn test_manual_refresh_replaces_feed() {
    let (_api, mut app) = app_with(FakeApi::with_feed(vec![tweet("1", "a"), tweet("2", "b")]), None);

    app.handle_key_event(key_event(KeyCode::Char('r'))).unwrap();
    assert!(app.feed.loading);

    let event = app.events_rx.recv().await.unwrap();
    app.apply_event(event);

    assert!(!app.feed.loading);
    assert_eq!(app.feed.tweets.len(), 2);

    app.handle_key_event(key_event(KeyCode::Char('j'))).unwrap();
    assert_eq!(app.feed.list_state.selected(), Some(1));
}

#[test]
fn test_question_mark_toggles_help() {
    let (_api, mut app) = app_with(FakeApi::default(), None);

    app.handle_key_event(key_event(KeyCode::Char('?'))).unwrap();
    assert!(app.show_help);

    // Other keys are swallowed while help is open
    app.handle_key_event(key_event(KeyCode::Char('q'))).unwrap();
    assert!(app.running);

    app.handle_key_event(key_event(KeyCode::Esc)).unwrap();
    assert!(!app.show_help);
}

#[tokio::test]
async fn test_refresh_failure_after_post_keeps_list_and_still_notifies() {
    let (api, mut app) = app_with(FakeApi::failing_fetch(), Some(alice()));
    app.feed.replace(vec![tweet("1", "old")]);

    type_str(&mut app, "hello");
    app.handle_key_event(key_event(KeyCode::Enter)).unwrap();
    settle(&mut app).await;

    assert_eq!(api.posted().len(), 1);
    assert_eq!(app.feed.tweets.len(), 1);
    assert_eq!(app.feed.tweets[0].text, "old");
    assert!(!app.feed.loading);

    assert!(app.toaster.visible().any(|t| t.message == POSTED_MESSAGE));
    assert!(app
        .toaster
        .visible()
        .any(|t| t.message.starts_with("Could not refresh feed")));
    // Persist succeeded, so nothing is restored
    assert_eq!(app.compose.text(), "");
}

#[test]
fn test_unbound_ctrl_chords_do_not_type_into_url_field() {
    let (_api, mut app) = app_with(FakeApi::default(), Some(alice()));

    app.handle_key_event(ctrl('p')).unwrap();
    type_str(&mut app, "http://x");
    app.handle_key_event(ctrl('a')).unwrap();
    app.handle_key_event(ctrl('e')).unwrap();

    assert_eq!(app.compose.image_url_input, "http://x");
}

#[test]
fn test_multiline_paste_does_not_submit() {
    let (api, mut app) = app_with(FakeApi::default(), Some(alice()));

    app.handle_paste("first line\nsecond line\n");
    assert_eq!(app.compose.text(), "first line second line");
    assert_eq!(app.in_flight, 0);
    assert!(api.posted().is_empty());

    app.handle_key_event(ctrl('p')).unwrap();
    app.handle_paste("  http://x/pic.png\n");
    assert_eq!(app.compose.image_url_input, "http://x/pic.png");
}

#[test]
fn test_paste_ignored_outside_compose_form() {
    let (_api, mut app) = app_with(FakeApi::default(), None);
    assert_eq!(app.input_mode, InputMode::Navigation);

    app.handle_paste("q");
    assert!(app.running);
    assert_eq!(app.compose.text(), "");
}
