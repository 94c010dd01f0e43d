//! Key handling drives the store through the app.

mod common;

use common::ScriptedSource;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use todo_pager::pager::{Page, PageNumber, PagerStore};
use todo_pager::ui::app::{App, NavAction};
use todo_pager::ui::input::{handle_key, InputAction};

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[tokio::test]
async fn keys_navigate_and_quit() {
    let (store, mut outcomes) = PagerStore::with_channel(ScriptedSource::new(25, 10));
    let mut app = App::new(store);
    let seen: Arc<Mutex<Vec<PageNumber>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    app.start(move |n: PageNumber, _: &Page| sink.lock().push(n));

    let wait = Duration::from_millis(150);
    if let Ok(Some(outcome)) = tokio::time::timeout(wait, outcomes.recv()).await {
        app.on_fetch_outcome(outcome);
    }

    assert_eq!(
        handle_key(&mut app, press(KeyCode::End)),
        InputAction::Nav(NavAction::Last)
    );
    if let Ok(Some(outcome)) = tokio::time::timeout(wait, outcomes.recv()).await {
        app.on_fetch_outcome(outcome);
    }
    assert_eq!(app.view().page_number, 3);
    assert!(!app.view().can_go_next_page);

    handle_key(&mut app, press(KeyCode::Left));
    assert_eq!(app.view().page_number, 2);

    assert!(!app.should_quit());
    assert_eq!(handle_key(&mut app, press(KeyCode::Char('q'))), InputAction::Quit);
    assert!(app.should_quit());

    app.shutdown();
    assert!(app.store().is_torn_down());
    assert_eq!(*seen.lock(), vec![1, 3]);
}
